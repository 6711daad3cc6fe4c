//! Candidate text input
//! Loads resume and interview response text from disk

pub mod file_detector;
pub mod text_extractor;
pub mod loader;
