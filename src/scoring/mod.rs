//! Synthetic candidate scoring

pub mod source;
pub mod skill_matcher;
pub mod interview;
pub mod assessor;
