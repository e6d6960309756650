pub mod jsonld;
pub mod pages;
pub mod template;

pub use pages::{PageRenderer, RenderOptions, RenderedPage};

/// Fallback used when the source has no disruption template
pub const BUILTIN_DISRUPTION_TEMPLATE: &str = include_str!("../../templates/disruption.html");

/// The three page templates of a site
#[derive(Debug, Clone)]
pub struct Templates {
    pub log: String,
    pub index: String,
    pub disruption: String,
}
