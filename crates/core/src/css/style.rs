//! Per-element style object: owns the inline store, the cascade accumulator
//! and the index counter both draw from.

use super::cascade::CascadeAccumulator;
use super::declaration::{Declaration, IndexCounter, Priority, Specificity};
use super::inline::InlineDeclarations;
use std::cell::RefCell;

#[derive(Debug, Default)]
pub struct ElementStyle {
    inline: RefCell<InlineDeclarations>,
    cascade: CascadeAccumulator,
    next_index: IndexCounter,
}

impl ElementStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inline declaration for `name`, as parsed from the current attribute text.
    pub fn inline_declaration(&self, raw: Option<&str>, name: &str) -> Option<Declaration> {
        let mut inline = self.inline.borrow_mut();
        inline.sync(raw, &self.next_index);
        inline.get(name).cloned()
    }

    pub fn cascade_declaration(&self, name: &str) -> Option<&Declaration> {
        self.cascade.get(name)
    }

    pub fn cascade(&self) -> &CascadeAccumulator {
        &self.cascade
    }

    /// Drop all accumulated rule and default declarations ahead of a new
    /// resolution pass.
    pub fn reset_cascade(&mut self) {
        self.cascade.clear();
    }

    pub fn seed_default(&mut self, name: &str, value: &str) {
        self.cascade.seed_default(name, value);
    }

    pub fn apply_rule(
        &mut self,
        name: &str,
        value: &str,
        priority: Priority,
        specificity: Specificity,
    ) -> bool {
        self.cascade
            .apply_rule(name, value, priority, specificity, &self.next_index)
    }

    /// Set an inline property and return the attribute text to write back.
    pub fn set_inline(
        &mut self,
        raw: Option<&str>,
        name: &str,
        value: &str,
        priority: Priority,
    ) -> String {
        let inline = self.inline.get_mut();
        inline.sync(raw, &self.next_index);
        inline.set(name, value, priority, &self.next_index);
        let text = inline.serialize();
        inline.mark_written(&text);
        text
    }

    /// Remove an inline property. Returns the previous value and the
    /// attribute text to write back.
    pub fn remove_inline(&mut self, raw: Option<&str>, name: &str) -> (String, String) {
        let inline = self.inline.get_mut();
        inline.sync(raw, &self.next_index);
        let previous = inline.remove(name);
        let text = inline.serialize();
        inline.mark_written(&text);
        (previous, text)
    }

    /// Serialized inline declarations, normalized.
    pub fn inline_css_text(&self, raw: Option<&str>) -> String {
        let mut inline = self.inline.borrow_mut();
        inline.sync(raw, &self.next_index);
        inline.serialize()
    }

    pub fn inline_len(&self, raw: Option<&str>) -> usize {
        let mut inline = self.inline.borrow_mut();
        inline.sync(raw, &self.next_index);
        inline.len()
    }

    pub fn inline_item(&self, raw: Option<&str>, index: usize) -> Option<String> {
        let mut inline = self.inline.borrow_mut();
        inline.sync(raw, &self.next_index);
        inline.item(index).map(str::to_string)
    }
}
