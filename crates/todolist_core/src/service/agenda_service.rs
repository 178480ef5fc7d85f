//! Agenda use-case service.
//!
//! # Responsibility
//! - Provide add/remove/rename/reschedule/finish entry points over events.
//! - Answer per-day listing and overdue queries.
//!
//! # Invariants
//! - Every mutation reads the stored event, applies a validated change and
//!   writes it back; a rejected change leaves storage untouched.
//! - Listings preserve repository order.
//! - Logs carry ids and statuses only, never titles.

use crate::model::date::Date;
use crate::model::event::{Event, EventId, EventValidationError};
use crate::repo::event_repo::{EventRepository, RepoError};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AgendaResult<T> = Result<T, AgendaError>;

/// Service error for agenda use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgendaError {
    /// Target event does not exist.
    EventNotFound(EventId),
    /// Requested change violates an event invariant.
    Validation(EventValidationError),
    /// Storage-layer failure.
    Repo(RepoError),
}

impl Display for AgendaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventNotFound(id) => write!(f, "event not found: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AgendaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::EventNotFound(_) => None,
        }
    }
}

impl From<RepoError> for AgendaError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::EventNotFound(id),
            other => Self::Repo(other),
        }
    }
}

impl From<EventValidationError> for AgendaError {
    fn from(value: EventValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Use-case service wrapper for event operations.
pub struct AgendaService<R: EventRepository> {
    repo: R,
}

impl<R: EventRepository> AgendaService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Hands the repository back, e.g. for the host's save path.
    pub fn into_repository(self) -> R {
        self.repo
    }

    /// Creates and stores a new unfinished event.
    ///
    /// # Errors
    /// - `Validation(InvalidRange)` when `begin_date` is after `end_date`.
    pub fn add_event(
        &mut self,
        begin_date: Date,
        end_date: Date,
        title: impl Into<String>,
    ) -> AgendaResult<EventId> {
        let event = Event::new(begin_date, end_date, title)?;
        self.insert_event(&event)
    }

    /// Stores an already constructed event.
    pub fn insert_event(&mut self, event: &Event) -> AgendaResult<EventId> {
        let id = self.repo.create_event(event)?;
        debug!("event=agenda_add module=service status=ok event_id={id}");
        Ok(id)
    }

    pub fn get_event(&self, id: EventId) -> AgendaResult<Option<Event>> {
        Ok(self.repo.get_event(id)?)
    }

    /// Removes the event with `id` and returns it.
    pub fn remove_event(&mut self, id: EventId) -> AgendaResult<Event> {
        let removed = self.repo.delete_event(id)?;
        debug!("event=agenda_remove module=service status=ok event_id={id}");
        Ok(removed)
    }

    pub fn rename_event(&mut self, id: EventId, title: impl Into<String>) -> AgendaResult<()> {
        let title = title.into();
        self.modify(id, "agenda_rename", |event| {
            event.set_title(title);
            Ok(())
        })
    }

    /// Moves the event window; rejected if `begin_date` is after `end_date`.
    pub fn reschedule_event(
        &mut self,
        id: EventId,
        begin_date: Date,
        end_date: Date,
    ) -> AgendaResult<()> {
        self.modify(id, "agenda_reschedule", |event| {
            event.set_dates(begin_date, end_date)
        })
    }

    pub fn finish_event(&mut self, id: EventId, finished_on: Date) -> AgendaResult<()> {
        self.modify(id, "agenda_finish", |event| {
            event.mark_finished(finished_on);
            Ok(())
        })
    }

    pub fn unfinish_event(&mut self, id: EventId) -> AgendaResult<()> {
        self.modify(id, "agenda_unfinish", |event| {
            event.mark_unfinished();
            Ok(())
        })
    }

    /// Events listed on `date` per the visibility rule, in storage order.
    pub fn events_on(&self, date: Date) -> AgendaResult<Vec<Event>> {
        let events = self.repo.list_events()?;
        Ok(events
            .into_iter()
            .filter(|event| event.is_visible_on(date))
            .collect())
    }

    /// Unfinished events whose end date is before `as_of`.
    pub fn overdue_events(&self, as_of: Date) -> AgendaResult<Vec<Event>> {
        let events = self.repo.list_events()?;
        Ok(events
            .into_iter()
            .filter(|event| event.is_overdue(as_of))
            .collect())
    }

    fn modify(
        &mut self,
        id: EventId,
        operation: &'static str,
        change: impl FnOnce(&mut Event) -> Result<(), EventValidationError>,
    ) -> AgendaResult<()> {
        let Some(mut event) = self.repo.get_event(id)? else {
            warn!("event={operation} module=service status=error error_code=not_found event_id={id}");
            return Err(AgendaError::EventNotFound(id));
        };
        if let Err(err) = change(&mut event) {
            warn!("event={operation} module=service status=error error_code=invalid_range event_id={id}");
            return Err(err.into());
        }
        self.repo.update_event(&event)?;
        debug!("event={operation} module=service status=ok event_id={id}");
        Ok(())
    }
}
