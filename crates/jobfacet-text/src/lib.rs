//! Job-description parsing: markup stripping, block segmentation, heuristic
//! header/list classification, section extraction, and card previews.
//!
//! Every entry point is a pure function of its input and never fails;
//! malformed descriptions degrade to an unstructured block of text.

pub mod heuristics;
pub mod markup;
pub mod parser;
pub mod preview;
pub mod sections;

mod segment;

pub use markup::{decode_entities, strip_markup};
pub use parser::parse_description;
pub use preview::extract_clean_text_preview;
pub use sections::extract_job_sections;
