//! Core types for schedkit.
//!
//! This crate provides the domain logic shared by the schedkit tools:
//! - `event` types describing a booked calendar event
//! - `ics` generation for invite/cancellation attachments
//! - `notice` composition (subject, text, html, ICS attachment)
//! - `order` primitives and the reorder coordinator for event-type lists

pub mod error;
pub mod event;
pub mod ics;
pub mod notice;
pub mod order;
pub mod translate;

pub use error::{SchedKitError, SchedKitResult};
pub use event::{CalendarEvent, Organizer, Person};
pub use notice::{IcsAttachment, Notice, NoticeKind};
pub use order::{ItemId, MoveDirection, OrderedItem};
