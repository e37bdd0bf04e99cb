//! Built-in sample authors and entries loaded at startup

use crate::domain::{Author, AuthorRegister, DiaryEntry, DiaryRegister};
use crate::error::Result;
use std::rc::Rc;

const AUTHORS: [(&str, &str, &str); 3] = [
    ("Peter", "Petterson", "peter@ex.com"),
    ("Albert", "Albertson", "albert@ex.com"),
    ("David", "Davidson", "david@ex.com"),
];

const ENTRIES: [(&str, &str); 3] = [
    (
        "Movie day",
        "Watched Inception! It was strange, but amazing at the same time.",
    ),
    (
        "Training",
        "Hit chest with two of my friends, I always have a great time with them.",
    ),
    (
        "Dinner night",
        "Ate at a great restaurant with my family, steak with mashed potatoes.",
    ),
];

/// Add one author and one entry per author. Returns the number of entries added.
pub fn seed(diary: &mut DiaryRegister, authors: &mut AuthorRegister) -> Result<usize> {
    let mut added = 0;
    for ((first, last, email), (title, description)) in AUTHORS.iter().zip(ENTRIES.iter()) {
        let author = Rc::new(Author::new(*first, *last, *email)?);
        authors.add_author(author.clone())?;
        diary.add_entry(DiaryEntry::new(*title, *description, author)?)?;
        added += 1;
    }
    Ok(added)
}
