#![deny(unsafe_code)]

//! Edit-distance scan for spellings that canonicalization has not merged yet.

pub mod detector;

pub use detector::{NearDuplicate, NearDuplicateReport, find_near_duplicates};
