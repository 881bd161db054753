pub mod entity;
pub mod error;
pub mod pattern;

pub use entity::{Entity, EntityError, EntityKind, EntitySource};
pub use error::ExtractionError;
pub use pattern::DatePatternConfig;
