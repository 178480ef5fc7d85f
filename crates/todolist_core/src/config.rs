//! Caller-owned date text settings.
//!
//! # Responsibility
//! - Bundle the field ordering and separator set used for date text.
//! - Give the storage layer one serializable value to persist.
//!
//! # Invariants
//! - Core never reads settings from global state; callers pass them in.

use crate::model::date::{Date, DateFormat};
use crate::parse::date_text::{parse, DEFAULT_SEPARATORS};
use serde::{Deserialize, Serialize};

/// Field ordering plus accepted separators for date text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTextSettings {
    pub format: DateFormat,
    /// Characters treated as field breaks when parsing. Rendering always
    /// uses `/`.
    #[serde(default = "default_separators")]
    pub separators: Vec<char>,
}

impl Default for DateTextSettings {
    fn default() -> Self {
        Self {
            format: DateFormat::default(),
            separators: default_separators(),
        }
    }
}

impl DateTextSettings {
    /// Settings with `format` and the default separators.
    pub fn with_format(format: DateFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    pub fn parse(&self, text: &str) -> Option<Date> {
        parse(text, self.format, &self.separators)
    }

    pub fn render(&self, date: Date) -> String {
        date.to_text(self.format)
    }
}

fn default_separators() -> Vec<char> {
    DEFAULT_SEPARATORS.to_vec()
}
