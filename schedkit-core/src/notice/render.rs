//! Mail-render capability.
//!
//! The composer asks a `MailRenderer` for the HTML body by template
//! name; it never knows the rendering implementation. `BasicRenderer`
//! is the built-in plain-HTML implementation used by the CLI and tests.

use indoc::formatdoc;

use crate::error::{SchedKitError, SchedKitResult};
use crate::event::{CalendarEvent, Person};

/// Template used for every organizer notice. Cancellations and
/// reschedule requests reuse the scheduled template with the organizer
/// in the attendee slot; only the surrounding subject/text and the ICS
/// method differ.
pub const ORGANIZER_SCHEDULED_TEMPLATE: &str = "organizer-scheduled";

/// Context handed to the renderer.
pub struct TemplateContext<'a> {
    pub event: &'a CalendarEvent,
    /// Whose perspective the body is rendered for.
    pub attendee: Person,
    pub reason: Option<&'a str>,
}

pub trait MailRenderer {
    fn render(&self, template: &str, ctx: &TemplateContext<'_>) -> SchedKitResult<String>;
}

/// Minimal inline-HTML renderer.
pub struct BasicRenderer;

impl MailRenderer for BasicRenderer {
    fn render(&self, template: &str, ctx: &TemplateContext<'_>) -> SchedKitResult<String> {
        if template != ORGANIZER_SCHEDULED_TEMPLATE {
            return Err(SchedKitError::Render(format!(
                "unknown template '{}'",
                template
            )));
        }

        let event = ctx.event;
        let reason_row = match ctx.reason {
            Some(reason) => format!("\n      <tr><td>Reason</td><td>{reason}</td></tr>"),
            None => String::new(),
        };

        Ok(formatdoc! {"
            <!doctype html>
            <html>
              <body>
                <p>Hi {name},</p>
                <table>
                  <tr><td>What</td><td>{event_type}</td></tr>
                  <tr><td>When</td><td>{when}</td></tr>
                  <tr><td>Organizer</td><td>{organizer} ({organizer_email})</td></tr>{reason_row}
                </table>
              </body>
            </html>",
            name = ctx.attendee.name,
            event_type = event.event_type,
            when = event.formatted_start(),
            organizer = event.organizer.name,
            organizer_email = event.organizer.email,
        })
    }
}
