//! Notice composer.
//!
//! One function composes every organizer notice; `NoticeKind` selects
//! the wording keys and the ICS status/method. The original invite and
//! its cancellation share one visual template, differentiated by the
//! surrounding subject/text and `METHOD:CANCEL` on the attachment.

use crate::error::{SchedKitError, SchedKitResult};
use crate::event::CalendarEvent;
use crate::ics::{IcsEvent, generate_ics};
use crate::notice::render::{MailRenderer, ORGANIZER_SCHEDULED_TEMPLATE, TemplateContext};
use crate::notice::{IcsAttachment, Notice, NoticeKind};
use crate::translate::Translator;

const ATTACHMENT_FILENAME: &str = "event.ics";

/// Compose a notice for the organizer of `event`.
///
/// Fails with `SchedKitError::Template` when the ICS payload does not
/// validate; no partial notice is produced.
pub fn compose(
    kind: NoticeKind,
    event: &CalendarEvent,
    reason: Option<&str>,
    translator: &dyn Translator,
    renderer: &dyn MailRenderer,
) -> SchedKitResult<Notice> {
    let attendee = event.first_attendee()?;
    let date = event.formatted_start();

    let subject = translator.t(
        kind.subject_key(),
        &[
            ("eventType", event.event_type.as_str()),
            ("name", attendee.name.as_str()),
            ("date", date.as_str()),
        ],
    );

    let title = translator.t(kind.title_key(), &[("attendee", attendee.name.as_str())]);
    let subtitle = translator.t(kind.subtitle_key(), &[("attendee", attendee.name.as_str())]);
    let text = text_body(event, &title, &subtitle, &date, reason, translator);

    let ics_title = translator.t(
        "ics_event_title",
        &[
            ("eventType", event.event_type.as_str()),
            ("name", attendee.name.as_str()),
        ],
    );

    // Build and validate the attachment before rendering anything else,
    // so a validation failure produces no partial output.
    let ics_event = IcsEvent::from_event(
        event,
        ics_title,
        text.clone(),
        kind.ics_status(),
        kind.ics_method(),
    );
    let content =
        generate_ics(&ics_event).map_err(|err| SchedKitError::Template(err.to_string()))?;

    // Cancellation view = scheduled view with the organizer in the
    // attendee slot
    let html = renderer.render(
        ORGANIZER_SCHEDULED_TEMPLATE,
        &TemplateContext {
            event,
            attendee: event.organizer.as_person(),
            reason,
        },
    )?;

    Ok(Notice {
        subject,
        html,
        text,
        recipient: event.organizer.email.clone(),
        attachment: IcsAttachment {
            filename: ATTACHMENT_FILENAME.to_string(),
            content,
        },
    })
}

/// Plain-text body: title, subtitle, then the what/when lines and any
/// reason or reschedule link.
fn text_body(
    event: &CalendarEvent,
    title: &str,
    subtitle: &str,
    date: &str,
    reason: Option<&str>,
    translator: &dyn Translator,
) -> String {
    let mut lines = vec![
        title.to_string(),
        String::new(),
        subtitle.to_string(),
        String::new(),
        translator.t("what_label", &[("eventType", event.event_type.as_str())]),
        translator.t("when_label", &[("date", date)]),
    ];

    if let Some(reason) = reason {
        lines.push(translator.t("reason_label", &[("reason", reason)]));
    }

    if let Some(link) = event.metadata.get("reschedule_link") {
        lines.push(translator.t("reschedule_link_label", &[("link", link.as_str())]));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Organizer, Person};
    use crate::notice::render::BasicRenderer;
    use crate::translate::KeyedTranslator;
    use chrono::{TimeZone, Utc};
    use std::collections::HashMap;
    use std::sync::Mutex;

    fn make_event() -> CalendarEvent {
        CalendarEvent {
            event_type: "30 Minute Meeting".to_string(),
            start: Utc.with_ymd_and_hms(2024, 3, 10, 14, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2024, 3, 10, 14, 30, 0).unwrap(),
            organizer: Organizer {
                name: "Olivia Organizer".to_string(),
                email: "olivia@example.com".to_string(),
                timezone: chrono_tz::UTC,
            },
            attendees: vec![Person {
                name: "Bob Booker".to_string(),
                email: "bob@example.com".to_string(),
            }],
            metadata: HashMap::new(),
        }
    }

    /// Records what the composer asked it to render.
    struct RecordingRenderer {
        calls: Mutex<Vec<(String, String)>>,
    }

    impl RecordingRenderer {
        fn new() -> Self {
            RecordingRenderer {
                calls: Mutex::new(vec![]),
            }
        }
    }

    impl MailRenderer for RecordingRenderer {
        fn render(&self, template: &str, ctx: &TemplateContext<'_>) -> SchedKitResult<String> {
            self.calls
                .lock()
                .unwrap()
                .push((template.to_string(), ctx.attendee.name.clone()));
            Ok("<html/>".to_string())
        }
    }

    #[test]
    fn test_compose_cancellation() {
        let translator = KeyedTranslator::english();
        let notice = compose(
            NoticeKind::Cancelled,
            &make_event(),
            Some("double booked"),
            &translator,
            &BasicRenderer,
        )
        .unwrap();

        assert_eq!(
            notice.subject,
            "Cancelled: 30 Minute Meeting with Bob Booker on Sunday, March 10, 2024 14:00 (UTC)"
        );
        assert_eq!(notice.recipient, "olivia@example.com");
        assert_eq!(notice.attachment.filename, "event.ics");
        assert!(notice.attachment.content.contains("METHOD:CANCEL"));
        assert!(notice.attachment.content.contains("STATUS:CANCELLED"));
        assert!(notice.text.starts_with("This event has been cancelled."));
        assert!(notice.text.contains("Reason: double booked"));
    }

    #[test]
    fn test_compose_reschedule_uses_reschedule_wording_and_cancel_method() {
        let mut event = make_event();
        event.metadata.insert(
            "reschedule_link".to_string(),
            "https://example.com/reschedule/abc".to_string(),
        );

        let translator = KeyedTranslator::english();
        let notice = compose(
            NoticeKind::Rescheduled,
            &event,
            None,
            &translator,
            &BasicRenderer,
        )
        .unwrap();

        assert!(notice.subject.starts_with("Request reschedule:"));
        assert!(
            notice
                .text
                .starts_with("Bob Booker has requested to reschedule this event.")
        );
        assert!(
            notice
                .text
                .contains("Reschedule link: https://example.com/reschedule/abc")
        );
        // The old invite is cancelled on the calendar side
        assert!(notice.attachment.content.contains("METHOD:CANCEL"));
    }

    #[test]
    fn test_compose_renders_scheduled_template_with_organizer_in_attendee_slot() {
        let translator = KeyedTranslator::english();
        let renderer = RecordingRenderer::new();

        compose(
            NoticeKind::Cancelled,
            &make_event(),
            None,
            &translator,
            &renderer,
        )
        .unwrap();

        let calls = renderer.calls.lock().unwrap();
        assert_eq!(
            calls.as_slice(),
            &[(
                ORGANIZER_SCHEDULED_TEMPLATE.to_string(),
                "Olivia Organizer".to_string()
            )]
        );
    }

    #[test]
    fn test_compose_zero_duration_succeeds() {
        let mut event = make_event();
        event.end = event.start;

        let translator = KeyedTranslator::english();
        let notice = compose(
            NoticeKind::Cancelled,
            &event,
            None,
            &translator,
            &BasicRenderer,
        )
        .unwrap();
        assert!(notice.attachment.content.contains("DURATION:PT0M"));
    }

    #[test]
    fn test_compose_fails_as_template_error_on_invalid_attendee() {
        let mut event = make_event();
        event.attendees[0].email = String::new();

        let translator = KeyedTranslator::english();
        let renderer = RecordingRenderer::new();
        let err = compose(
            NoticeKind::Cancelled,
            &event,
            None,
            &translator,
            &renderer,
        )
        .unwrap_err();

        match err {
            SchedKitError::Template(msg) => {
                assert!(msg.contains("malformed email"), "Got: {msg}");
            }
            other => panic!("Expected Template error, got: {other}"),
        }
        // No partial output: the renderer was never invoked
        assert!(renderer.calls.lock().unwrap().is_empty());
    }
}
