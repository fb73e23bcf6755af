//! A parsed page: the document, the browser being emulated, its stylesheets
//! and one style object per element.

use crate::browser::BrowserVersion;
use crate::css::properties::tag_defaults;
use crate::css::selector::{self, CssRule};
use crate::css::{ComputedStyle, Declaration, ElementStyle, Priority, PropertyTable};
use crate::dom::{self, Document, NodeId};
use crate::output::{self, StyleSnapshot};
use std::collections::HashMap;

#[derive(Debug)]
pub struct Page {
    document: Document,
    browser: BrowserVersion,
    properties: PropertyTable,
    rules: Vec<CssRule>,
    styles: HashMap<NodeId, ElementStyle>,
}

impl Page {
    /// Wrap `document`, load its `<style>` elements and run a resolution pass.
    pub fn new(document: Document, browser: BrowserVersion) -> Self {
        let mut page = Self {
            document,
            browser,
            properties: PropertyTable::standard(),
            rules: Vec::new(),
            styles: HashMap::new(),
        };
        let sheets: Vec<String> = page
            .document
            .descendant_elements(page.document.root())
            .into_iter()
            .filter(|id| page.document.tag(*id) == "style")
            .map(|id| page.document.text_content(id))
            .collect();
        for css in &sheets {
            page.rules.extend(selector::parse_stylesheet(css));
        }
        page.restyle();
        page
    }

    pub fn parse(html: &str, browser: BrowserVersion) -> Self {
        Self::new(dom::parse_html(html), browser)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn browser(&self) -> &BrowserVersion {
        &self.browser
    }

    pub fn properties(&self) -> &PropertyTable {
        &self.properties
    }

    pub fn rules(&self) -> &[CssRule] {
        &self.rules
    }

    /// Append a stylesheet after the existing ones and re-resolve.
    pub fn add_stylesheet(&mut self, css: &str) {
        self.rules.extend(selector::parse_stylesheet(css));
        self.restyle();
    }

    /// One resolution pass: every element's cascade accumulator is rebuilt
    /// from tag defaults and matched rules, in stylesheet order.
    /// Inline declarations are untouched.
    pub fn restyle(&mut self) {
        let elements: Vec<NodeId> = self.document.elements().collect();
        let mut matched = 0usize;
        for node in &elements {
            let style = self.styles.entry(*node).or_default();
            style.reset_cascade();
            for (name, value) in tag_defaults(self.document.tag(*node)) {
                style.seed_default(name, value);
            }
            for rule in &self.rules {
                if !selector::matches_element(&self.document, *node, &rule.selector) {
                    continue;
                }
                matched += 1;
                for declaration in &rule.declarations {
                    style.apply_rule(
                        &declaration.name,
                        &declaration.value,
                        declaration.priority,
                        rule.specificity,
                    );
                }
            }
        }
        log::debug!(
            "restyled {} elements against {} rules ({} matches)",
            elements.len(),
            self.rules.len(),
            matched
        );
    }

    pub fn element_style(&self, node: NodeId) -> Option<&ElementStyle> {
        self.styles.get(&node)
    }

    /// Computed style view for an element; `None` for non-element nodes.
    pub fn computed_style(&self, node: NodeId) -> Option<ComputedStyle<'_>> {
        self.document
            .is_element(node)
            .then(|| ComputedStyle::new(self, node))
    }

    // --- Inline style (element.style) ---

    fn raw_style(&self, node: NodeId) -> Option<&str> {
        self.document.attribute(node, "style")
    }

    pub fn style_declaration(&self, node: NodeId, name: &str) -> Option<Declaration> {
        self.styles
            .get(&node)?
            .inline_declaration(self.raw_style(node), name)
    }

    /// `element.style.getPropertyValue(name)`.
    pub fn style_property(&self, node: NodeId, name: &str) -> String {
        self.style_declaration(node, name)
            .map(|d| d.value)
            .unwrap_or_default()
    }

    /// `element.style.getPropertyPriority(name)`.
    pub fn style_priority(&self, node: NodeId, name: &str) -> &'static str {
        self.style_declaration(node, name)
            .map(|d| d.priority.as_str())
            .unwrap_or("")
    }

    /// `element.style.setProperty(name, value, priority)`. The `style`
    /// attribute is rewritten to match.
    pub fn set_style_property(&mut self, node: NodeId, name: &str, value: &str, priority: Priority) {
        let Some(style) = self.styles.get_mut(&node) else {
            return;
        };
        let text = style.set_inline(self.document.attribute(node, "style"), name, value, priority);
        self.document.set_attribute(node, "style", &text);
    }

    /// `element.style.removeProperty(name)`; returns the old value or `""`.
    pub fn remove_style_property(&mut self, node: NodeId, name: &str) -> String {
        let Some(style) = self.styles.get_mut(&node) else {
            return String::new();
        };
        let (previous, text) = style.remove_inline(self.document.attribute(node, "style"), name);
        self.document.set_attribute(node, "style", &text);
        previous
    }

    /// `element.style.cssText`, normalized.
    pub fn css_text(&self, node: NodeId) -> String {
        self.styles
            .get(&node)
            .map(|s| s.inline_css_text(self.raw_style(node)))
            .unwrap_or_default()
    }

    /// Replace the whole `style` attribute.
    pub fn set_css_text(&mut self, node: NodeId, text: &str) {
        self.document.set_attribute(node, "style", text);
    }

    /// `element.style.length`.
    pub fn style_length(&self, node: NodeId) -> usize {
        self.styles
            .get(&node)
            .map(|s| s.inline_len(self.raw_style(node)))
            .unwrap_or(0)
    }

    /// `element.style.item(index)`.
    pub fn style_item(&self, node: NodeId, index: usize) -> Option<String> {
        self.styles
            .get(&node)?
            .inline_item(self.raw_style(node), index)
    }

    // --- DOM mutation ---

    /// Create a detached element with its own style object.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let node = self.document.create_element(tag);
        let mut style = ElementStyle::new();
        for (name, value) in tag_defaults(self.document.tag(node)) {
            style.seed_default(name, value);
        }
        self.styles.insert(node, style);
        node
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.document.append_child(parent, child);
        self.restyle();
    }

    pub fn remove_child(&mut self, child: NodeId) {
        self.document.remove_child(child);
        self.restyle();
    }

    /// Set an attribute. Writes to `style` only invalidate the inline cache;
    /// any other attribute can change selector matches and triggers a
    /// resolution pass.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.document.set_attribute(node, name, value);
        if !name.eq_ignore_ascii_case("style") {
            self.restyle();
        }
    }

    pub fn remove_attribute(&mut self, node: NodeId, name: &str) {
        self.document.remove_attribute(node, name);
        if !name.eq_ignore_ascii_case("style") {
            self.restyle();
        }
    }

    // --- Queries ---

    /// Attached elements matching a selector list, in document order.
    pub fn query_selector_all(&self, selectors: &str) -> Vec<NodeId> {
        let parsed = selector::parse_selector_list(selectors);
        self.document
            .descendant_elements(self.document.root())
            .into_iter()
            .filter(|node| {
                parsed
                    .iter()
                    .any(|s| selector::matches_element(&self.document, *node, s))
            })
            .collect()
    }

    pub fn query_selector(&self, selectors: &str) -> Option<NodeId> {
        self.query_selector_all(selectors).into_iter().next()
    }

    /// Resolved values of `properties` for every attached element.
    pub fn snapshot(&self, properties: &[String], pixels: bool) -> StyleSnapshot {
        let nodes = self.document.descendant_elements(self.document.root());
        output::generate_snapshot(self, &nodes, properties, pixels)
    }
}
