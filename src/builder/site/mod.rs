mod builder;
mod loader;

pub use builder::build_site;
pub use loader::load_templates;
