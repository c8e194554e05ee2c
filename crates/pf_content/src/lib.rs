pub mod contact;
pub mod content;
pub mod error;

pub use error::{Error, Result};
