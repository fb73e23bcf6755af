//! Declaration resolution: merges an element's inline and cascaded
//! declarations, then falls back to inheritance and per-browser defaults.

use super::declaration::Declaration;
use super::length::{self, PropertyPixels};
use crate::browser::BrowserFeature;
use crate::dom::{Document, NodeId};
use crate::page::Page;

/// Pick the declaration that wins between an inline and a cascaded one.
///
/// A normal cascaded declaration never beats an inline one, whatever its
/// specificity. An important cascaded declaration beats a normal inline one,
/// and beats an important inline one only with strictly higher specificity.
pub fn cascade_winner<'d>(
    inline: Option<&'d Declaration>,
    cascade: Option<&'d Declaration>,
) -> Option<&'d Declaration> {
    match (inline, cascade) {
        (None, cascade) => cascade,
        (Some(inline), None) => Some(inline),
        (Some(inline), Some(cascade)) => {
            if !cascade.is_important() {
                return Some(inline);
            }
            if inline.is_important() && inline.specificity >= cascade.specificity {
                Some(inline)
            } else {
                Some(cascade)
            }
        }
    }
}

/// Read-only computed style of one element. Nothing is cached: every query
/// re-reads both declaration stores.
#[derive(Clone, Copy)]
pub struct ComputedStyle<'a> {
    page: &'a Page,
    node: NodeId,
}

impl<'a> ComputedStyle<'a> {
    pub(crate) fn new(page: &'a Page, node: NodeId) -> Self {
        Self { page, node }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn document(&self) -> &'a Document {
        self.page.document()
    }

    pub fn tag(&self) -> &'a str {
        self.page.document().tag(self.node)
    }

    /// Computed style of the parent element, if the parent is an element.
    pub fn parent(&self) -> Option<ComputedStyle<'a>> {
        self.page
            .document()
            .parent_element(self.node)
            .map(|parent| ComputedStyle::new(self.page, parent))
    }

    fn suppressed(&self) -> bool {
        self.page
            .browser()
            .has_feature(BrowserFeature::ComputedStyleEmptyWhenDetached)
            && !self.page.document().is_attached(self.node)
    }

    /// The declaration that wins the inline/cascade comparison, if any.
    pub fn declaration(&self, name: &str) -> Option<Declaration> {
        if self.suppressed() {
            return None;
        }
        let style = self.page.element_style(self.node)?;
        let raw = self.page.document().attribute(self.node, "style");
        let inline = style.inline_declaration(raw, name);
        let cascade = style.cascade_declaration(name);
        cascade_winner(inline.as_ref(), cascade).cloned()
    }

    /// Resolve `name` to a string value.
    ///
    /// An empty result is replaced by the parent's value for inherited
    /// properties, otherwise by the browser default when
    /// `use_default_if_empty` is set.
    pub fn resolve(&self, name: &str, use_default_if_empty: bool) -> String {
        if self.suppressed() {
            return String::new();
        }
        let value = self
            .declaration(name)
            .map(|d| d.value)
            .unwrap_or_default();
        if !value.is_empty() {
            return value;
        }

        let properties = self.page.properties();
        if properties.is_inherited(name) {
            if let Some(parent) = self.parent() {
                return parent.resolve(name, use_default_if_empty);
            }
        }
        if use_default_if_empty {
            return properties
                .default_value(name, self.page.browser().family)
                .to_string();
        }
        String::new()
    }

    /// `getPropertyValue` on a computed style: resolve with defaults.
    pub fn get(&self, name: &str) -> String {
        self.resolve(name, true)
    }

    /// `"important"` when the winning declaration is important, else `""`.
    pub fn priority(&self, name: &str) -> &'static str {
        self.declaration(name)
            .map(|d| d.priority.as_str())
            .unwrap_or("")
    }

    /// Pixel value of a length property, resolving percentages against
    /// ancestors.
    pub fn pixels(&self, name: &str) -> i32 {
        let accessor = PropertyPixels::for_property(
            self.page.properties(),
            name,
            &self.page.browser().viewport,
        );
        length::pixel_value_for(self, &accessor)
    }
}

impl std::fmt::Debug for ComputedStyle<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComputedStyle")
            .field("node", &self.node)
            .field("tag", &self.tag())
            .finish()
    }
}
