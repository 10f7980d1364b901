//! Translation capability.
//!
//! The composer never hardcodes user-facing strings; it asks a
//! `Translator` for them by key, with named substitution parameters.
//! Embedding applications plug in their own localization layer;
//! `KeyedTranslator` ships the default English table.

use std::collections::HashMap;

/// Pure lookup/substitution capability: `t(key, params) -> string`.
///
/// Parameters are `(name, value)` pairs substituted for `{name}`
/// placeholders in the template.
pub trait Translator {
    fn t(&self, key: &str, params: &[(&str, &str)]) -> String;
}

/// Table-driven translator. Unknown keys fall back to the key itself,
/// so a missing entry is visible in output rather than a panic.
pub struct KeyedTranslator {
    templates: HashMap<String, String>,
}

impl KeyedTranslator {
    pub fn new(templates: HashMap<String, String>) -> Self {
        KeyedTranslator { templates }
    }

    /// The default English strings used by the notice composer.
    pub fn english() -> Self {
        let entries: &[(&str, &str)] = &[
            (
                "confirmed_event_type_subject",
                "Confirmed: {eventType} with {name} on {date}",
            ),
            (
                "event_cancelled_subject",
                "Cancelled: {eventType} with {name} on {date}",
            ),
            (
                "rescheduled_event_type_subject",
                "Request reschedule: {eventType} with {name} on {date}",
            ),
            (
                "event_scheduled_title_organizer",
                "A new event has been scheduled.",
            ),
            (
                "event_scheduled_subtitle_organizer",
                "{attendee} booked a time with you.",
            ),
            (
                "event_cancelled_title_organizer",
                "This event has been cancelled.",
            ),
            (
                "event_cancelled_subtitle_organizer",
                "Your event with {attendee} will no longer take place.",
            ),
            (
                "request_reschedule_title_organizer",
                "{attendee} has requested to reschedule this event.",
            ),
            (
                "request_reschedule_subtitle_organizer",
                "Pick a new time that works for {attendee}.",
            ),
            ("ics_event_title", "{eventType} with {name}"),
            ("what_label", "What: {eventType}"),
            ("when_label", "When: {date}"),
            ("reason_label", "Reason: {reason}"),
            ("reschedule_link_label", "Reschedule link: {link}"),
        ];

        let templates = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        KeyedTranslator { templates }
    }
}

impl Default for KeyedTranslator {
    fn default() -> Self {
        Self::english()
    }
}

impl Translator for KeyedTranslator {
    fn t(&self, key: &str, params: &[(&str, &str)]) -> String {
        let template = self
            .templates
            .get(key)
            .map(String::as_str)
            .unwrap_or(key);

        let mut out = template.to_string();
        for (name, value) in params {
            out = out.replace(&format!("{{{name}}}"), value);
        }
        out
    }
}
