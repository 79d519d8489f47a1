//! Top-level orchestration: document in, preview out.

use crate::classify::classify_report;
use crate::error::Result;
use crate::model::HtmlNode;
use crate::present::{MessageLevel, Messenger, Presenter, PreviewOptions};
use crate::render::render_lines;

/// Notice shown when the document source produced nothing.
pub const ABSENT_DOCUMENT_MESSAGE: &str = "Unable to run Doctor";

/// Render a Doctor document into the presenter's preview surface.
///
/// An absent document is recovered: the messenger gets exactly one error
/// notice and the presenter is never called. A present but malformed
/// document returns [`Error::MalformedDocument`].
///
/// [`Error::MalformedDocument`]: crate::Error::MalformedDocument
pub fn run_doctor<P, M>(root: Option<&HtmlNode>, presenter: &P, messenger: &M) -> Result<()>
where
    P: Presenter,
    M: Messenger,
{
    let Some(root) = root else {
        log::warn!("doctor document absent, nothing to render");
        messenger.notify(ABSENT_DOCUMENT_MESSAGE, MessageLevel::Error);
        return Ok(());
    };

    let report = classify_report(root)?;
    let lines = render_lines(&report);
    presenter.preview(&lines, &PreviewOptions::default());
    Ok(())
}
