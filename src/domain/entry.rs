//! Diary entry entity and its single-use id

use crate::domain::validation::{validate_non_blank, validate_not_future};
use crate::domain::Author;
use crate::error::{DiaryError, Result};
use chrono::{Local, NaiveDateTime};
use std::fmt;
use std::rc::Rc;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Register-assigned identifier of an entry
///
/// Moves from `Unassigned` to `Assigned` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryId {
    #[default]
    Unassigned,
    Assigned(i64),
}

impl EntryId {
    pub fn get(self) -> Option<i64> {
        match self {
            EntryId::Unassigned => None,
            EntryId::Assigned(id) => Some(id),
        }
    }
}

/// A single diary record
#[derive(Debug, Clone, PartialEq)]
pub struct DiaryEntry {
    id: EntryId,
    author: Rc<Author>,
    title: String,
    description: String,
    creation_time: NaiveDateTime,
}

impl DiaryEntry {
    /// Create an entry stamped with the current local time
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        author: Rc<Author>,
    ) -> Result<Self> {
        Self::build(title.into(), description.into(), author, Local::now().naive_local())
    }

    /// Create an entry with an explicit creation time, which must not be in the future
    pub fn with_creation_time(
        title: impl Into<String>,
        description: impl Into<String>,
        author: Rc<Author>,
        creation_time: NaiveDateTime,
    ) -> Result<Self> {
        validate_not_future(creation_time)?;
        Self::build(title.into(), description.into(), author, creation_time)
    }

    fn build(
        title: String,
        description: String,
        author: Rc<Author>,
        creation_time: NaiveDateTime,
    ) -> Result<Self> {
        validate_non_blank(&title, "Title")?;
        validate_non_blank(&description, "Description")?;

        Ok(DiaryEntry {
            id: EntryId::Unassigned,
            author,
            title,
            description,
            creation_time,
        })
    }

    /// Assign the entry id. Only the first assignment succeeds.
    pub fn set_entry_id(&mut self, id: i64) -> Result<()> {
        if self.id != EntryId::Unassigned {
            return Err(DiaryError::InvalidState(
                "The entry already has an ID".to_string(),
            ));
        }
        if id <= 0 {
            return Err(DiaryError::invalid_argument("ID needs to be positive"));
        }

        self.id = EntryId::Assigned(id);
        Ok(())
    }

    pub fn entry_id(&self) -> Option<i64> {
        self.id.get()
    }

    pub fn id_state(&self) -> EntryId {
        self.id
    }

    pub fn author(&self) -> &Rc<Author> {
        &self.author
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replace the description after validating it
    pub fn set_description(&mut self, description: impl Into<String>) -> Result<()> {
        let description = description.into();
        validate_non_blank(&description, "Description")?;
        self.description = description;
        Ok(())
    }

    pub fn creation_time(&self) -> NaiveDateTime {
        self.creation_time
    }

    /// Creation time as `yyyy-MM-dd HH:mm`
    pub fn formatted_creation_time(&self) -> String {
        self.creation_time.format(TIME_FORMAT).to_string()
    }
}

impl fmt::Display for DiaryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} - [{}] {} ({}): {}",
            self.entry_id().unwrap_or(0),
            self.formatted_creation_time(),
            self.title,
            self.author.full_name(),
            self.description
        )
    }
}
