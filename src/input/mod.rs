//! Input handling module
//! Covers MIME classification, document fetching, and text extraction

pub mod mime;
pub mod source;
pub mod text_extractor;
