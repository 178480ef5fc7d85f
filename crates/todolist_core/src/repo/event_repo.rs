//! Event repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide CRUD over an ordered sequence of events.
//! - Report missing and duplicate ids as semantic errors.
//!
//! # Invariants
//! - `list_events` returns events in insertion order.
//! - `update_event` never changes an event's position.
//! - Stored events are always valid; `Event` cannot be built otherwise.

use crate::model::event::{Event, EventId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for event storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound(EventId),
    DuplicateId(EventId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "event not found: {id}"),
            Self::DuplicateId(id) => write!(f, "event already exists: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Storage interface for event CRUD operations.
///
/// The persistent store owned by the host application implements this; the
/// core ships [`InMemoryEventRepository`].
pub trait EventRepository {
    fn create_event(&mut self, event: &Event) -> RepoResult<EventId>;
    fn update_event(&mut self, event: &Event) -> RepoResult<()>;
    fn get_event(&self, id: EventId) -> RepoResult<Option<Event>>;
    fn list_events(&self) -> RepoResult<Vec<Event>>;
    fn delete_event(&mut self, id: EventId) -> RepoResult<Event>;
}

/// Vector-backed repository keeping insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventRepository {
    events: Vec<Event>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the repository from an already loaded sequence.
    ///
    /// # Errors
    /// - `DuplicateId` when two events share an id.
    pub fn from_events(events: impl IntoIterator<Item = Event>) -> RepoResult<Self> {
        let mut repo = Self::new();
        for event in events {
            repo.create_event(&event)?;
        }
        Ok(repo)
    }

    /// Current contents in insertion order, for the host's save path.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn position(&self, id: EventId) -> Option<usize> {
        self.events.iter().position(|event| event.id() == id)
    }
}

impl EventRepository for InMemoryEventRepository {
    fn create_event(&mut self, event: &Event) -> RepoResult<EventId> {
        if self.position(event.id()).is_some() {
            return Err(RepoError::DuplicateId(event.id()));
        }
        self.events.push(event.clone());
        Ok(event.id())
    }

    fn update_event(&mut self, event: &Event) -> RepoResult<()> {
        let index = self
            .position(event.id())
            .ok_or(RepoError::NotFound(event.id()))?;
        self.events[index] = event.clone();
        Ok(())
    }

    fn get_event(&self, id: EventId) -> RepoResult<Option<Event>> {
        Ok(self.position(id).map(|index| self.events[index].clone()))
    }

    fn list_events(&self) -> RepoResult<Vec<Event>> {
        Ok(self.events.clone())
    }

    fn delete_event(&mut self, id: EventId) -> RepoResult<Event> {
        let index = self.position(id).ok_or(RepoError::NotFound(id))?;
        Ok(self.events.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::{EventRepository, InMemoryEventRepository, RepoError};
    use crate::model::date::Date;
    use crate::model::event::Event;

    fn event(title: &str) -> Event {
        let day = Date::new(6, 1, 2024).expect("valid date");
        Event::new(day, day, title).expect("valid event")
    }

    #[test]
    fn create_rejects_duplicate_id() {
        let mut repo = InMemoryEventRepository::new();
        let first = event("a");
        repo.create_event(&first).unwrap();

        let err = repo.create_event(&first).unwrap_err();
        assert_eq!(err, RepoError::DuplicateId(first.id()));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn update_keeps_position() {
        let mut repo = InMemoryEventRepository::new();
        let mut first = event("a");
        let second = event("b");
        repo.create_event(&first).unwrap();
        repo.create_event(&second).unwrap();

        first.set_title("renamed");
        repo.update_event(&first).unwrap();

        let titles: Vec<String> = repo
            .list_events()
            .unwrap()
            .iter()
            .map(|event| event.title().to_string())
            .collect();
        assert_eq!(titles, vec!["renamed", "b"]);
    }

    #[test]
    fn delete_missing_returns_not_found() {
        let mut repo = InMemoryEventRepository::new();
        let missing = event("ghost");
        assert_eq!(
            repo.delete_event(missing.id()).unwrap_err(),
            RepoError::NotFound(missing.id())
        );
        assert!(repo.is_empty());
    }

    #[test]
    fn from_events_rejects_duplicates() {
        let first = event("a");
        let err = InMemoryEventRepository::from_events(vec![first.clone(), first.clone()])
            .unwrap_err();
        assert_eq!(err, RepoError::DuplicateId(first.id()));
    }
}
