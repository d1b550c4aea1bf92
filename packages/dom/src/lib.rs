#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod builder;
mod document;
mod error;
mod mutations;
pub mod namespace;

pub use crate::builder::{build, build_ns};
pub use crate::document::{Attribute, Document, ElementData, Node, NodeKind};
pub use crate::error::DomError;
pub use crate::mutations::{Mutation, Mutations, WriteMutations};
