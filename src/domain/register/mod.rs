//! In-memory registers owning authors and diary entries

pub mod authors;
pub mod diary;

pub use authors::AuthorRegister;
pub use diary::DiaryRegister;
