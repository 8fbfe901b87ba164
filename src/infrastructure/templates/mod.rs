//! Template Implementations
//!
//! Embedded template sources and the Liquid renderer.

mod embedded;
mod liquid;

pub use embedded::EmbeddedTemplates;
pub use self::liquid::LiquidRenderer;
