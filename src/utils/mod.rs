//! Utility module

mod error;
mod span;

pub use error::{LexError, Result};
pub use span::Span;
