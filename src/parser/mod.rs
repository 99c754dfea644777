//! Cue list XML parsing

mod xml;

pub use xml::{parse_production, ParseError};
