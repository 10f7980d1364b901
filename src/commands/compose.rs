//! `schedkit compose` - compose an organizer notice from an event file.

use std::path::Path;

use anyhow::{Context, Result};
use schedkit_core::CalendarEvent;
use schedkit_core::notice::{self, BasicRenderer, NoticeKind};
use schedkit_core::translate::KeyedTranslator;

pub async fn run(
    event_path: &Path,
    kind: NoticeKind,
    reason: Option<&str>,
    out: &Path,
) -> Result<()> {
    let content = std::fs::read_to_string(event_path)
        .with_context(|| format!("Could not read {}", event_path.display()))?;
    let event: CalendarEvent = serde_json::from_str(&content)
        .with_context(|| format!("Invalid event in {}", event_path.display()))?;

    let translator = KeyedTranslator::english();
    let notice = notice::compose(kind, &event, reason, &translator, &BasicRenderer)?;

    println!("To:      {}", notice.recipient);
    println!("Subject: {}", notice.subject);
    println!();
    println!("{}", notice.text);

    std::fs::write(out, &notice.attachment.content)
        .with_context(|| format!("Could not write {}", out.display()))?;
    println!();
    println!("Wrote attachment to {}", out.display());

    Ok(())
}
