#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod catalog;
mod library;

pub use crate::library::{animation_element_id, IconLibrary, ANIMATION_ID_PREFIX};
