//! Email notice composition.

pub mod composer;
pub mod render;

pub use composer::compose;
pub use render::{BasicRenderer, MailRenderer, TemplateContext};

use crate::ics::{IcsMethod, IcsStatus};

/// Which notice to compose. One composer function dispatches on this;
/// the variants differ only in wording keys and the ICS status/method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Scheduled,
    Cancelled,
    Rescheduled,
}

impl NoticeKind {
    pub fn subject_key(self) -> &'static str {
        match self {
            NoticeKind::Scheduled => "confirmed_event_type_subject",
            NoticeKind::Cancelled => "event_cancelled_subject",
            NoticeKind::Rescheduled => "rescheduled_event_type_subject",
        }
    }

    pub fn title_key(self) -> &'static str {
        match self {
            NoticeKind::Scheduled => "event_scheduled_title_organizer",
            NoticeKind::Cancelled => "event_cancelled_title_organizer",
            NoticeKind::Rescheduled => "request_reschedule_title_organizer",
        }
    }

    pub fn subtitle_key(self) -> &'static str {
        match self {
            NoticeKind::Scheduled => "event_scheduled_subtitle_organizer",
            NoticeKind::Cancelled => "event_cancelled_subtitle_organizer",
            NoticeKind::Rescheduled => "request_reschedule_subtitle_organizer",
        }
    }

    /// ICS STATUS for this notice. Reschedule requests cancel the
    /// original invite, so they serialize as CANCELLED too.
    pub fn ics_status(self) -> IcsStatus {
        match self {
            NoticeKind::Scheduled => IcsStatus::Confirmed,
            NoticeKind::Cancelled | NoticeKind::Rescheduled => IcsStatus::Cancelled,
        }
    }

    pub fn ics_method(self) -> IcsMethod {
        match self {
            NoticeKind::Scheduled => IcsMethod::Request,
            NoticeKind::Cancelled | NoticeKind::Rescheduled => IcsMethod::Cancel,
        }
    }
}

/// A calendar file ready to attach to an outgoing email.
#[derive(Debug, Clone)]
pub struct IcsAttachment {
    pub filename: String,
    pub content: String,
}

/// A fully composed notice. Dispatching the email is the embedding
/// application's job.
#[derive(Debug, Clone)]
pub struct Notice {
    pub subject: String,
    pub html: String,
    pub text: String,
    /// Primary recipient (the organizer for organizer-facing notices).
    pub recipient: String,
    pub attachment: IcsAttachment,
}
