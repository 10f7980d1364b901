//! Booking-neutral event types.
//!
//! These types describe a booked event the way the notice composer and
//! ICS generator need it: a time range, the organizer, and the attendees.
//! They are transient — built per notice, never persisted here.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{SchedKitError, SchedKitResult};

/// A person on an event (attendee side).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub email: String,
}

/// The event organizer. Carries a timezone so dates can be rendered
/// in the organizer's local time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organizer {
    pub name: String,
    pub email: String,
    pub timezone: Tz,
}

impl Organizer {
    /// The organizer viewed as a plain person, for templates that take
    /// an attendee slot (cancellation notices render the scheduled
    /// template with the organizer in that slot).
    pub fn as_person(&self) -> Person {
        Person {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// A booked calendar event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Event-type label (e.g. "30 Minute Meeting").
    pub event_type: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub organizer: Organizer,
    /// At least one attendee; the first is the primary booker.
    pub attendees: Vec<Person>,
    /// Free-form values used only for message templating
    /// (e.g. "reschedule_link"). Never emitted into ICS fields.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl CalendarEvent {
    /// The primary booker. Every valid event has at least one attendee.
    pub fn first_attendee(&self) -> SchedKitResult<&Person> {
        self.attendees
            .first()
            .ok_or_else(|| SchedKitError::Template("event has no attendees".to_string()))
    }

    /// Start time rendered in the organizer's timezone,
    /// e.g. "Sunday, March 10, 2024 15:00 (CET)".
    pub fn formatted_start(&self) -> String {
        self.start
            .with_timezone(&self.organizer.timezone)
            .format("%A, %B %-d, %Y %H:%M (%Z)")
            .to_string()
    }
}
