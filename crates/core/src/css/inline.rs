//! The inline declaration store: an element's `style` attribute as a map.

use super::declaration::{
    parse_declaration_block, property_key, split_priority, Declaration, IndexCounter, Priority,
    Specificity,
};
use std::collections::HashMap;

/// Parsed view of one element's `style` attribute.
///
/// The map is tied to the raw attribute text it was parsed from and is
/// rebuilt whenever that text changes.
#[derive(Debug, Default)]
pub struct InlineDeclarations {
    source: Option<String>,
    declarations: HashMap<String, Declaration>,
}

impl InlineDeclarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure the map reflects `raw`, re-parsing if the text differs from
    /// the text the map was built from.
    pub fn sync(&mut self, raw: Option<&str>, counter: &IndexCounter) {
        if self.source.as_deref() == raw {
            return;
        }
        log::debug!("re-parsing style attribute {:?}", raw.unwrap_or(""));
        self.declarations.clear();
        if let Some(text) = raw {
            for parsed in parse_declaration_block(text) {
                let declaration = Declaration::new(
                    &parsed.name,
                    &parsed.value,
                    parsed.priority,
                    Specificity::ATTRIBUTE,
                    counter.next(),
                );
                self.declarations.insert(parsed.name, declaration);
            }
        }
        self.source = raw.map(str::to_string);
    }

    /// Record that the owning attribute now holds `text`, which was produced
    /// by [`serialize`](Self::serialize) and so already matches the map.
    pub fn mark_written(&mut self, text: &str) {
        self.source = Some(text.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.declarations.get(&property_key(name))
    }

    /// Set a declaration. A blank value removes the property instead.
    ///
    /// A trailing `!important` in `value` is folded into the priority, and a
    /// value containing `;` is ignored, so that [`serialize`](Self::serialize)
    /// always re-parses to the same map.
    pub fn set(&mut self, name: &str, value: &str, priority: Priority, counter: &IndexCounter) {
        let name = property_key(name);
        if name.is_empty() {
            return;
        }
        let (value, suffix) = split_priority(value.trim());
        if value.is_empty() {
            self.remove(&name);
            return;
        }
        if value.contains(';') {
            log::debug!("{name}: ignoring value containing ';': {value:?}");
            return;
        }
        let priority = if suffix.is_important() { suffix } else { priority };
        let index = match self.declarations.get(&name) {
            Some(existing) => existing.index,
            None => counter.next(),
        };
        let declaration = Declaration::new(&name, value, priority, Specificity::ATTRIBUTE, index);
        self.declarations.insert(name, declaration);
    }

    /// Remove a declaration, returning its value or `""` if it was absent.
    pub fn remove(&mut self, name: &str) -> String {
        self.declarations
            .remove(&property_key(name))
            .map(|d| d.value)
            .unwrap_or_default()
    }

    /// Declarations in ascending index order.
    pub fn ordered(&self) -> Vec<&Declaration> {
        let mut ordered: Vec<&Declaration> = self.declarations.values().collect();
        ordered.sort_by_key(|d| d.index);
        ordered
    }

    /// Render as `name: value[ !important];` tokens in index order.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for declaration in self.ordered() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&declaration.name);
            out.push_str(": ");
            out.push_str(&declaration.value);
            if declaration.is_important() {
                out.push_str(" !important");
            }
            out.push(';');
        }
        out
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// The `index`-th property name in index order.
    pub fn item(&self, index: usize) -> Option<&str> {
        self.ordered().into_iter().nth(index).map(|d| d.name.as_str())
    }
}
