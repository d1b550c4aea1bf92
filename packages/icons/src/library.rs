use crate::catalog;
use arbor_core::{merge, Description, ElementId, MergeOptions};
use arbor_dom::{build, Document, DomError};
use indexmap::IndexMap;

/// Style elements holding an icon's keyframes get an id made of this prefix and the icon name.
pub const ANIMATION_ID_PREFIX: &str = "IconLibrary-animation-";

/// The id of the style element that holds the keyframes for `name`.
pub fn animation_element_id(name: &str) -> String {
    format!("{ANIMATION_ID_PREFIX}{name}")
}

/// A table of named icons and the settings they are built with.
///
/// The library is plain configuration: building an icon reads from it but never changes it, and
/// the document that icons are built into is passed in explicitly.
#[derive(Debug, Clone)]
pub struct IconLibrary {
    icons: IndexMap<String, Description>,
    animations: IndexMap<String, String>,
    defaults: Description,
    invalid_icon: Description,
}

impl Default for IconLibrary {
    /// The library with the built-in catalog.
    fn default() -> Self {
        Self {
            icons: catalog::icons()
                .into_iter()
                .map(|(name, icon)| (name.to_string(), icon))
                .collect(),
            animations: catalog::animations()
                .into_iter()
                .map(|(name, css)| (name.to_string(), css.to_string()))
                .collect(),
            defaults: catalog::defaults(),
            invalid_icon: catalog::invalid_icon(),
        }
    }
}

impl IconLibrary {
    /// A library with no icons and no defaults. Every name resolves to the invalid icon.
    pub fn empty() -> Self {
        Self {
            icons: IndexMap::new(),
            animations: IndexMap::new(),
            defaults: Description::new(),
            invalid_icon: catalog::invalid_icon(),
        }
    }

    /// Add or replace an icon.
    pub fn with_icon(mut self, name: impl Into<String>, icon: Description) -> Self {
        self.icons.insert(name.into(), icon);
        self
    }

    /// Register the keyframe style sheet an icon needs.
    pub fn with_animation(mut self, name: impl Into<String>, css: impl Into<String>) -> Self {
        self.animations.insert(name.into(), css.into());
        self
    }

    /// Replace the properties every icon starts from.
    pub fn with_defaults(mut self, defaults: Description) -> Self {
        self.defaults = defaults;
        self
    }

    /// Replace the glyph used for unknown names.
    pub fn with_invalid_icon(mut self, invalid_icon: Description) -> Self {
        self.invalid_icon = invalid_icon;
        self
    }

    /// Look up an icon fragment.
    pub fn icon(&self, name: &str) -> Option<&Description> {
        self.icons.get(name)
    }

    /// Whether an icon with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    /// The icon names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.icons.keys().map(String::as_str)
    }

    /// The keyframe style sheet for an icon, if it is animated.
    pub fn animation(&self, name: &str) -> Option<&str> {
        self.animations.get(name).map(String::as_str)
    }

    /// The properties every icon starts from.
    pub fn defaults(&self) -> &Description {
        &self.defaults
    }

    /// The glyph used for unknown names.
    pub fn invalid_icon(&self) -> &Description {
        &self.invalid_icon
    }

    /// The full description an icon is built from: the defaults, then the icon (or the invalid
    /// icon), then the overrides, merged deeply in that order.
    pub fn description_for(&self, name: &str, overrides: Option<&Description>) -> Description {
        let icon = self.icon(name).unwrap_or_else(|| {
            tracing::debug!(name, "unknown icon, using the invalid icon");
            &self.invalid_icon
        });
        merge(
            MergeOptions::deep(),
            [Some(&self.defaults), Some(icon), overrides],
        )
    }

    /// Make sure the keyframes for `name` are in the document head.
    ///
    /// Inserts `<style id="IconLibrary-animation-{name}">` unless an element with that id is
    /// already in the document, so calling this repeatedly never adds a second sheet. Returns
    /// whether a sheet was inserted. Names without an animation insert nothing.
    pub fn ensure_animation_registered(
        &self,
        doc: &mut Document,
        name: &str,
    ) -> Result<bool, DomError> {
        let Some(css) = self.animation(name) else {
            return Ok(false);
        };

        let id = animation_element_id(name);
        if doc.get_element_by_id(&id).is_some() {
            return Ok(false);
        }

        tracing::trace!(name, "registering icon keyframes");
        let style = doc.create_element("style")?;
        let text = doc.create_text_node(css);
        doc.append_child(style, text)?;
        doc.set_attribute(style, "id", &id)?;
        let head = doc.head();
        doc.append_child(head, style)?;
        Ok(true)
    }

    /// Build an icon as an `<svg>` element.
    ///
    /// Animated icons register their keyframes in the document head first. Unknown names build
    /// the invalid icon instead of failing. The returned element is not attached anywhere.
    pub fn create_icon(
        &self,
        doc: &mut Document,
        name: &str,
        overrides: Option<&Description>,
    ) -> Result<ElementId, DomError> {
        if self.contains(name) {
            self.ensure_animation_registered(doc, name)?;
        }
        build(doc, "svg", &self.description_for(name, overrides))
    }
}
