#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod events;
mod macros;
mod merge;
mod value;

#[cfg(feature = "serialize")]
mod serialize;

pub(crate) mod innerlude {
    pub use crate::events::*;
    pub use crate::merge::*;
    pub use crate::value::*;

    #[cfg(feature = "serialize")]
    pub use crate::serialize::*;
}

pub use crate::innerlude::{
    merge, merge_deep, merge_shallow, Description, ElementId, Event, EventHandler, MergeOptions,
    Value,
};

#[cfg(feature = "serialize")]
pub use crate::innerlude::DescriptionError;

/// The purpose of this module is to alleviate imports of many common types
///
/// This includes types like [`Description`], [`Value`], and the [`desc!`] macro.
pub mod prelude {
    pub use crate::desc;
    pub use crate::innerlude::{
        merge, merge_deep, merge_shallow, Description, ElementId, Event, EventHandler,
        MergeOptions, Value,
    };
}
