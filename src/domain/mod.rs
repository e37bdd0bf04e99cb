//! Domain layer - Entities, validation and registers

pub mod author;
pub mod entry;
pub mod register;
pub mod validation;

pub use author::Author;
pub use entry::{DiaryEntry, EntryId};
pub use register::{AuthorRegister, DiaryRegister};
