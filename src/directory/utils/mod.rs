mod file_operations;
mod cleaning;

pub use file_operations::copy_stylesheet;
pub use cleaning::clean_destination;
