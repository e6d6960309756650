pub mod site;
pub mod watcher;
pub mod types;

pub use site::build_site;
pub use watcher::watch_site;
