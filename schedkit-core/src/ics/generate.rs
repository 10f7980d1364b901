//! ICS generation for notice attachments.
//!
//! Builds a single-VEVENT calendar for an invite or cancellation notice.
//! Cancellations carry STATUS:CANCELLED and METHOD:CANCEL so receiving
//! clients drop the original invite.

use chrono::{DateTime, Datelike, Timelike, Utc};
use icalendar::{Calendar, Component, Property};
use uuid::Uuid;

use crate::error::{SchedKitError, SchedKitResult};
use crate::event::{CalendarEvent, Person};

/// Fixed product identifier namespace for generated calendars.
const PRODID: &str = "schedkit/ics";

/// UTC date/time as [year, month, day, hour, minute, second].
///
/// The month component is 1-based. Date libraries conventionally count
/// months from zero internally, so this is derived from `month0() + 1`
/// to keep the adjustment explicit at the one place it matters.
pub type DateArray = [i32; 6];

/// Extract the UTC components of an instant as a 1-based-month array.
pub fn date_array(dt: DateTime<Utc>) -> DateArray {
    [
        dt.year(),
        dt.month0() as i32 + 1,
        dt.day() as i32,
        dt.hour() as i32,
        dt.minute() as i32,
        dt.second() as i32,
    ]
}

/// Event duration in whole minutes. Sub-minute differences truncate
/// to 0, which is a legal zero-duration event, not an error.
pub fn duration_minutes(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (end - start).num_minutes()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IcsStatus {
    Confirmed,
    Cancelled,
}

impl IcsStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            IcsStatus::Confirmed => "CONFIRMED",
            IcsStatus::Cancelled => "CANCELLED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IcsMethod {
    Request,
    Cancel,
}

impl IcsMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            IcsMethod::Request => "REQUEST",
            IcsMethod::Cancel => "CANCEL",
        }
    }
}

/// A single VEVENT ready for serialization.
#[derive(Debug, Clone)]
pub struct IcsEvent {
    pub uid: String,
    pub title: String,
    pub description: String,
    pub start: DateArray,
    pub duration_minutes: i64,
    pub organizer: Person,
    pub attendees: Vec<Person>,
    pub status: IcsStatus,
    pub method: IcsMethod,
}

impl IcsEvent {
    /// Build the VEVENT fields from a booked event.
    pub fn from_event(
        event: &CalendarEvent,
        title: String,
        description: String,
        status: IcsStatus,
        method: IcsMethod,
    ) -> IcsEvent {
        IcsEvent {
            uid: format!("{}@schedkit", Uuid::new_v4()),
            title,
            description,
            start: date_array(event.start),
            duration_minutes: duration_minutes(event.start, event.end),
            organizer: event.organizer.as_person(),
            attendees: event.attendees.clone(),
            status,
            method,
        }
    }

    /// Field validation. Generation refuses to emit a partial payload
    /// when any of these fail.
    fn validate(&self) -> SchedKitResult<()> {
        if self.duration_minutes < 0 {
            return Err(SchedKitError::IcsValidation(
                "event ends before it starts".to_string(),
            ));
        }
        if self.attendees.is_empty() {
            return Err(SchedKitError::IcsValidation(
                "event has no attendees".to_string(),
            ));
        }
        validate_email("organizer", &self.organizer.email)?;
        for attendee in &self.attendees {
            validate_email("attendee", &attendee.email)?;
        }
        Ok(())
    }
}

fn validate_email(role: &str, email: &str) -> SchedKitResult<()> {
    if email.is_empty() || !email.contains('@') {
        return Err(SchedKitError::IcsValidation(format!(
            "{} has a malformed email address: '{}'",
            role, email
        )));
    }
    Ok(())
}

/// Generate .ics content for a notice event.
pub fn generate_ics(event: &IcsEvent) -> SchedKitResult<String> {
    event.validate()?;

    let mut cal = Calendar::new();

    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&event.uid);
    ics_event.summary(&event.title);
    ics_event.description(&event.description);

    // DTSTAMP - required by RFC 5545
    let dtstamp = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
    ics_event.add_property("DTSTAMP", &dtstamp);

    // DTSTART from the UTC component array (month already 1-based)
    let [year, month, day, hour, minute, second] = event.start;
    ics_event.add_property(
        "DTSTART",
        format!("{year:04}{month:02}{day:02}T{hour:02}{minute:02}{second:02}Z"),
    );

    // DURATION instead of DTEND; PT0M is a legal zero-duration event
    ics_event.add_property("DURATION", format!("PT{}M", event.duration_minutes));

    ics_event.add_property("STATUS", event.status.as_str());

    // ORGANIZER
    let mut prop = Property::new("ORGANIZER", format!("mailto:{}", event.organizer.email));
    prop.add_parameter("CN", &event.organizer.name);
    ics_event.append_property(prop);

    // ATTENDEE (multi-property - can appear multiple times)
    for attendee in &event.attendees {
        let mut prop = Property::new("ATTENDEE", format!("mailto:{}", attendee.email));
        prop.add_parameter("CN", &attendee.name);
        ics_event.append_multi_property(prop);
    }

    let ics_event = ics_event.done();
    cal.push(ics_event);
    let cal = cal.done();

    // Post-process to control the calendar-level properties the
    // icalendar crate emits on its own
    Ok(rewrite_calendar_props(&cal.to_string(), event.method))
}

/// Rewrite calendar-level properties in the serialized output:
/// - Replace PRODID with our fixed namespace
/// - Emit METHOD right after PRODID
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn rewrite_calendar_props(ics: &str, method: IcsMethod) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str(&format!("PRODID:{PRODID}\r\n"));
            result.push_str(&format!("METHOD:{}\r\n", method.as_str()));
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Organizer;
    use chrono::TimeZone;
    use std::collections::HashMap;

    fn make_calendar_event() -> CalendarEvent {
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

    fn make_cancellation() -> IcsEvent {
        IcsEvent::from_event(
            &make_calendar_event(),
            "30 Minute Meeting with Bob Booker".to_string(),
            "This event has been cancelled.".to_string(),
            IcsStatus::Cancelled,
            IcsMethod::Cancel,
        )
    }

    #[test]
    fn test_date_array_month_is_one_based() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 10, 14, 0, 0).unwrap();
        assert_eq!(date_array(dt), [2024, 3, 10, 14, 0, 0]);

        // January must come out as 1, not 0
        let jan = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(date_array(jan), [2025, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_duration_minutes_truncates_sub_minute() {
        let start = Utc.with_ymd_and_hms(2024, 3, 10, 14, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 3, 10, 14, 0, 30).unwrap();
        assert_eq!(duration_minutes(start, end), 0);
        assert_eq!(duration_minutes(start, start), 0);
    }

    #[test]
    fn test_cancellation_fields() {
        let ics_event = make_cancellation();
        assert_eq!(ics_event.duration_minutes, 30);
        assert_eq!(ics_event.start, [2024, 3, 10, 14, 0, 0]);
        assert_eq!(ics_event.status, IcsStatus::Cancelled);
        assert_eq!(ics_event.method, IcsMethod::Cancel);
    }

    #[test]
    fn test_generate_ics_cancellation_payload() {
        let ics = generate_ics(&make_cancellation()).unwrap();

        assert!(ics.contains("METHOD:CANCEL"), "Missing METHOD. ICS:\n{}", ics);
        assert!(ics.contains("STATUS:CANCELLED"), "Missing STATUS. ICS:\n{}", ics);
        assert!(
            ics.contains("DTSTART:20240310T140000Z"),
            "Wrong DTSTART. ICS:\n{}",
            ics
        );
        assert!(ics.contains("DURATION:PT30M"), "Wrong DURATION. ICS:\n{}", ics);
        assert!(ics.contains(&format!("PRODID:{PRODID}")), "ICS:\n{}", ics);
        assert!(!ics.contains("CALSCALE:GREGORIAN"), "ICS:\n{}", ics);

        let organizer_line = ics
            .lines()
            .find(|l| l.starts_with("ORGANIZER"))
            .expect("Should have ORGANIZER line");
        assert!(organizer_line.contains(";CN="), "Got: {}", organizer_line);
        assert!(
            organizer_line.contains("mailto:olivia@example.com"),
            "Got: {}",
            organizer_line
        );

        let attendee_count = ics.lines().filter(|l| l.starts_with("ATTENDEE")).count();
        assert_eq!(attendee_count, 1, "ICS:\n{}", ics);
    }

    #[test]
    fn test_generate_ics_zero_duration_succeeds() {
        let mut event = make_calendar_event();
        event.end = event.start;
        let ics_event = IcsEvent::from_event(
            &event,
            "t".to_string(),
            "d".to_string(),
            IcsStatus::Cancelled,
            IcsMethod::Cancel,
        );
        assert_eq!(ics_event.duration_minutes, 0);

        let ics = generate_ics(&ics_event).unwrap();
        assert!(ics.contains("DURATION:PT0M"), "ICS:\n{}", ics);
    }

    #[test]
    fn test_generate_ics_rejects_malformed_attendee_email() {
        let mut ics_event = make_cancellation();
        ics_event.attendees[0].email = "not-an-email".to_string();

        let err = generate_ics(&ics_event).unwrap_err();
        assert!(
            matches!(err, SchedKitError::IcsValidation(_)),
            "Expected validation error, got: {err}"
        );
    }

    #[test]
    fn test_generate_ics_rejects_end_before_start() {
        let mut event = make_calendar_event();
        event.end = event.start - chrono::Duration::minutes(10);
        let ics_event = IcsEvent::from_event(
            &event,
            "t".to_string(),
            "d".to_string(),
            IcsStatus::Cancelled,
            IcsMethod::Cancel,
        );
        assert!(generate_ics(&ics_event).is_err());
    }
}
