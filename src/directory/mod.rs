pub mod utils;

// Re-export common functions
pub use utils::{clean_destination, copy_stylesheet};
