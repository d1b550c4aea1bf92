#![doc = include_str!("../README.md")]

pub use arbor_core as core;

pub use arbor_dom as dom;

#[cfg(feature = "ssr")]
pub use arbor_ssr as ssr;

#[cfg(feature = "icons")]
pub use arbor_icons as icons;

pub mod prelude {
    pub use arbor_core::prelude::*;

    pub use arbor_dom::{build, build_ns, Document, DomError, Mutations, WriteMutations};

    #[cfg(feature = "ssr")]
    pub use arbor_ssr::{render_node, Renderer};

    #[cfg(feature = "icons")]
    pub use arbor_icons::IconLibrary;
}
