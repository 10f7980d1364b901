//! ICS (iCalendar) attachment generation.

pub mod generate;

pub use generate::{
    DateArray, IcsEvent, IcsMethod, IcsStatus, date_array, duration_minutes, generate_ics,
};
