//! Event domain model.
//!
//! # Responsibility
//! - Hold a scheduled window (`begin_date..=end_date`) and completion state.
//! - Derive the overdue predicate and the per-day visibility rule.
//!
//! # Invariants
//! - `begin_date <= end_date` after construction and after every setter;
//!   a rejected setter leaves the event unchanged.
//! - `id` is never nil.
//! - `finished_date` is independent of the window and is not range checked.
//!
//! # See also
//! - `crate::service::agenda_service` for list-level queries.

use crate::model::date::{Date, DateFormat};
use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for an event; removal and edits target this, not
/// structural equality.
pub type EventId = Uuid;

/// Validation failures for event construction and mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventValidationError {
    /// Caller-supplied id is the nil UUID.
    NilId,
    /// Begin date falls after end date.
    InvalidRange { begin: Date, end: Date },
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "event id must not be nil"),
            Self::InvalidRange { begin, end } => write!(
                f,
                "begin date ({}) must not be after end date ({})",
                begin.to_text(DateFormat::Mdy),
                end.to_text(DateFormat::Mdy)
            ),
        }
    }
}

impl Error for EventValidationError {}

/// A to-do item spanning at least one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EventRecord")]
pub struct Event {
    id: EventId,
    title: String,
    begin_date: Date,
    end_date: Date,
    finished_date: Option<Date>,
}

impl Event {
    /// Creates an unfinished event with a generated id.
    ///
    /// # Errors
    /// - `InvalidRange` when `begin_date` is after `end_date`. Equal dates
    ///   are allowed.
    pub fn new(
        begin_date: Date,
        end_date: Date,
        title: impl Into<String>,
    ) -> Result<Self, EventValidationError> {
        Self::with_id(Uuid::new_v4(), begin_date, end_date, title)
    }

    /// Creates an unfinished event with a caller-provided id.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(
        id: EventId,
        begin_date: Date,
        end_date: Date,
        title: impl Into<String>,
    ) -> Result<Self, EventValidationError> {
        if id.is_nil() {
            return Err(EventValidationError::NilId);
        }
        check_range(id, begin_date, end_date)?;
        Ok(Self {
            id,
            title: title.into(),
            begin_date,
            end_date,
            finished_date: None,
        })
    }

    /// Fresh unfinished copy with a new id, same window and title.
    pub fn duplicate(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: self.title.clone(),
            begin_date: self.begin_date,
            end_date: self.end_date,
            finished_date: None,
        }
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn begin_date(&self) -> Date {
        self.begin_date
    }

    pub fn end_date(&self) -> Date {
        self.end_date
    }

    pub fn finished_date(&self) -> Option<Date> {
        self.finished_date
    }

    /// Moves the begin date; rejected if it would fall after the end date.
    pub fn set_begin_date(&mut self, begin_date: Date) -> Result<(), EventValidationError> {
        self.set_dates(begin_date, self.end_date)
    }

    /// Moves the end date; rejected if it would fall before the begin date.
    pub fn set_end_date(&mut self, end_date: Date) -> Result<(), EventValidationError> {
        self.set_dates(self.begin_date, end_date)
    }

    /// Replaces both dates at once, validating the new window as a whole.
    pub fn set_dates(&mut self, begin_date: Date, end_date: Date) -> Result<(), EventValidationError> {
        check_range(self.id, begin_date, end_date)?;
        self.begin_date = begin_date;
        self.end_date = end_date;
        Ok(())
    }

    /// Marks the event completed on `date`. Any date is accepted.
    pub fn mark_finished(&mut self, date: Date) {
        self.finished_date = Some(date);
    }

    pub fn mark_unfinished(&mut self) {
        self.finished_date = None;
    }

    pub fn is_finished(&self) -> bool {
        self.finished_date.is_some()
    }

    /// `true` when `as_of` is past the end date and the event is unfinished.
    pub fn is_overdue(&self, as_of: Date) -> bool {
        as_of > self.end_date && self.finished_date.is_none()
    }

    /// Last day on which the event is listed.
    ///
    /// An event finished on or before its end date stops showing after the
    /// finish date; otherwise it shows through its end date.
    pub fn latest_showing_date(&self) -> Date {
        match self.finished_date {
            Some(finished) if finished <= self.end_date => finished,
            _ => self.end_date,
        }
    }

    /// Whether the event belongs in the listing for `query`.
    pub fn is_visible_on(&self, query: Date) -> bool {
        query >= self.begin_date && query <= self.latest_showing_date()
    }

    /// One-line description including every date, for diagnostics.
    pub fn summary(&self) -> String {
        let finished = self
            .finished_date
            .map_or_else(|| "none".to_string(), |date| date.to_string());
        format!(
            "{}: begins {}, ends {}, finished {}",
            self.title, self.begin_date, self.end_date, finished
        )
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title)
    }
}

fn check_range(id: EventId, begin: Date, end: Date) -> Result<(), EventValidationError> {
    if begin > end {
        debug!(
            "event=event_range_rejected module=model status=rejected event_id={} span_days={}",
            id,
            begin.days_between(end)
        );
        return Err(EventValidationError::InvalidRange { begin, end });
    }
    Ok(())
}

/// Wire shape for `Event`; deserialization goes through full validation.
#[derive(Debug, Deserialize)]
struct EventRecord {
    id: EventId,
    title: String,
    begin_date: Date,
    end_date: Date,
    #[serde(default)]
    finished_date: Option<Date>,
}

impl TryFrom<EventRecord> for Event {
    type Error = EventValidationError;

    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        let mut event = Event::with_id(record.id, record.begin_date, record.end_date, record.title)?;
        event.finished_date = record.finished_date;
        Ok(event)
    }
}
