//! The LabelX landing page: content, layout and the live page model.

pub mod content;
pub mod layout;
pub mod page;
pub mod tokens;
pub mod viewport;

pub use content::LandingContent;
pub use layout::{PageLayout, SectionKind, SectionSlot};
pub use page::{LandingPage, PlacedCounter};
pub use tokens::{ColorRole, Icon, Palette, VisualToken};
pub use viewport::Viewport;
