//! Application layer - Interactive session and startup data

pub mod sample_data;
pub mod session;

pub use session::DiarySession;
