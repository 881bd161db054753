//! One module per extraction strategy. Every pass takes the shared pattern
//! registry plus the raw text (the metadata pass takes the structured
//! metadata instead) and returns candidate entities; malformed fragments
//! degrade to no candidate rather than failing the extraction.

pub mod amount;
pub mod date;
pub mod email;
pub mod metadata;
pub mod organization;
pub mod person;
pub mod phone;
pub mod url;
