//! Diary register: entry storage, id assignment, queries and statistics

use crate::domain::validation::validate_non_blank;
use crate::domain::DiaryEntry;
use crate::error::{DiaryError, Result};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// In-memory list of diary entries
///
/// Ids come from a counter owned by the register. They start at 1, only
/// grow, and are never handed out twice, even after removals.
#[derive(Debug)]
pub struct DiaryRegister {
    entries: Vec<DiaryEntry>,
    next_id: i64,
}

impl Default for DiaryRegister {
    fn default() -> Self {
        Self::new()
    }
}

impl DiaryRegister {
    pub fn new() -> Self {
        DiaryRegister {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Assign the next id to `entry` and store it, returning the id
    ///
    /// Fails without consuming an id when the entry already carries one.
    pub fn add_entry(&mut self, mut entry: DiaryEntry) -> Result<i64> {
        let id = self.next_id;
        entry.set_entry_id(id)?;
        self.next_id += 1;
        self.entries.push(entry);
        Ok(id)
    }

    /// Remove the stored entry with the same id as `entry`
    ///
    /// An entry that never went through [`DiaryRegister::add_entry`] has no
    /// id and matches nothing.
    pub fn remove_entry(&mut self, entry: &DiaryEntry) -> Option<DiaryEntry> {
        let id = entry.entry_id()?;
        let index = self.entries.iter().position(|e| e.entry_id() == Some(id))?;
        Some(self.entries.remove(index))
    }

    /// Remove the entry with the given id, if present
    pub fn remove_entry_by_id(&mut self, id: i64) -> Result<Option<DiaryEntry>> {
        validate_id(id)?;
        let removed = self
            .entries
            .iter()
            .position(|e| e.entry_id() == Some(id))
            .map(|index| self.entries.remove(index));
        Ok(removed)
    }

    /// All entries, newest first
    pub fn get_all_entries(&self) -> Vec<&DiaryEntry> {
        let mut entries: Vec<&DiaryEntry> = self.entries.iter().collect();
        entries.sort_by(|a, b| b.creation_time().cmp(&a.creation_time()));
        entries
    }

    /// Look up an entry by id. An unknown id is `Ok(None)`.
    pub fn get_entry_by_id(&self, id: i64) -> Result<Option<&DiaryEntry>> {
        validate_id(id)?;
        Ok(self.entries.iter().find(|e| e.entry_id() == Some(id)))
    }

    /// Entries whose author email matches, ignoring case
    pub fn get_entries_by_author(&self, email: &str) -> Result<Vec<&DiaryEntry>> {
        validate_non_blank(email, "Email")?;
        Ok(self
            .entries
            .iter()
            .filter(|e| e.author().has_email(email))
            .collect())
    }

    /// Entries created on `date`
    pub fn get_entries_by_date(&self, date: NaiveDate) -> Vec<&DiaryEntry> {
        self.entries
            .iter()
            .filter(|e| e.creation_time().date() == date)
            .collect()
    }

    /// Entries created between `from` and `to` inclusive, oldest first
    pub fn search_entries_between_dates(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<&DiaryEntry>> {
        if from > to {
            return Err(DiaryError::invalid_argument("From must be before to"));
        }

        let mut entries: Vec<&DiaryEntry> = self
            .entries
            .iter()
            .filter(|e| {
                let date = e.creation_time().date();
                date >= from && date <= to
            })
            .collect();
        entries.sort_by_key(|e| e.creation_time());
        Ok(entries)
    }

    /// Entries whose title or description contains `keyword`, ignoring case
    ///
    /// An empty keyword matches every entry.
    pub fn search_by_keyword(&self, keyword: &str) -> Vec<&DiaryEntry> {
        let keyword = keyword.to_lowercase();
        self.entries
            .iter()
            .filter(|e| {
                e.title().to_lowercase().contains(&keyword)
                    || e.description().to_lowercase().contains(&keyword)
            })
            .collect()
    }

    /// Number of entries per author email. Authors without entries are absent.
    ///
    /// Emails differing only in case count as one author, keyed by the
    /// lowercased address, matching [`DiaryRegister::get_entries_by_author`].
    pub fn get_author_statistics(&self) -> BTreeMap<String, usize> {
        let mut statistics = BTreeMap::new();
        for entry in &self.entries {
            *statistics
                .entry(entry.author().email().to_lowercase())
                .or_insert(0) += 1;
        }
        statistics
    }

    /// Replace the description of a stored entry. Returns false if the id is unknown.
    pub fn edit_description(&mut self, id: i64, description: &str) -> Result<bool> {
        validate_id(id)?;
        match self.entries.iter_mut().find(|e| e.entry_id() == Some(id)) {
            Some(entry) => {
                entry.set_description(description)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_id(id: i64) -> Result<()> {
    if id <= 0 {
        return Err(DiaryError::invalid_argument("id must be positive"));
    }
    Ok(())
}
