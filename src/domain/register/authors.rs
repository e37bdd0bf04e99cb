//! Author register

use crate::domain::Author;
use crate::error::{DiaryError, Result};
use std::rc::Rc;

/// In-memory set of authors, unique by email (compared case-insensitively)
#[derive(Debug, Default)]
pub struct AuthorRegister {
    authors: Vec<Rc<Author>>,
}

impl AuthorRegister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an author. Fails if an author with the same email is present.
    pub fn add_author(&mut self, author: Rc<Author>) -> Result<()> {
        if self.find_by_email(author.email()).is_some() {
            return Err(DiaryError::InvalidArgument(format!(
                "An author with email '{}' already exists.",
                author.email()
            )));
        }
        self.authors.push(author);
        Ok(())
    }

    /// Remove the author with the same email, if present
    pub fn remove_author(&mut self, author: &Author) -> Option<Rc<Author>> {
        let index = self
            .authors
            .iter()
            .position(|stored| stored.has_email(author.email()))?;
        Some(self.authors.remove(index))
    }

    /// All authors sorted by full name. Equal names keep insertion order.
    pub fn get_all_authors(&self) -> Vec<Rc<Author>> {
        let mut authors = self.authors.clone();
        authors.sort_by_key(|author| author.full_name());
        authors
    }

    pub fn find_by_email(&self, email: &str) -> Option<Rc<Author>> {
        self.authors
            .iter()
            .find(|author| author.has_email(email))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.authors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }
}
