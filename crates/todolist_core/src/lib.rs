//! Core domain logic for the To-Do List application.
//! This crate owns the calendar engine and every event invariant; storage and
//! presentation live in the host application.

pub mod calendar;
pub mod config;
pub mod logging;
pub mod model;
pub mod parse;
pub mod repo;
pub mod service;

pub use calendar::day_count;
pub use calendar::rules::{days_in_month, days_in_year, is_leap_year, is_valid_date};
pub use calendar::CalendarError;
pub use config::DateTextSettings;
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::date::{Date, DateFormat, UnknownDateFormat};
pub use model::event::{Event, EventId, EventValidationError};
pub use parse::date_text::{parse, parse_default, DEFAULT_SEPARATORS};
pub use repo::event_repo::{EventRepository, InMemoryEventRepository, RepoError, RepoResult};
pub use service::agenda_service::{AgendaError, AgendaResult, AgendaService};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
