pub mod error;
pub mod fs;
