//! The cascade accumulator: declarations from matched stylesheet rules and
//! default seeds, one per property.

use super::declaration::{property_key, Declaration, IndexCounter, Priority, Specificity};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct CascadeAccumulator {
    declarations: HashMap<String, Declaration>,
}

impl CascadeAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a baseline default. Any later rule replaces it.
    pub fn seed_default(&mut self, name: &str, value: &str) {
        let declaration = Declaration::default_seed(name, value);
        self.declarations.insert(declaration.name.clone(), declaration);
    }

    /// Accumulate one matched-rule declaration. Returns whether it was stored.
    ///
    /// A normal rule never replaces an important one, nor a normal one of
    /// higher specificity. An important rule always replaces whatever is
    /// there, so between two important rules the later one wins regardless
    /// of specificity.
    pub fn apply_rule(
        &mut self,
        name: &str,
        value: &str,
        priority: Priority,
        specificity: Specificity,
        counter: &IndexCounter,
    ) -> bool {
        let name = property_key(name);
        if priority == Priority::Normal {
            if let Some(existing) = self.declarations.get(&name) {
                if existing.is_important() {
                    log::trace!("{name}: normal rule ignored, existing declaration is important");
                    return false;
                }
                if !existing.is_default() && existing.specificity > specificity {
                    log::trace!(
                        "{name}: normal rule ({specificity}) ignored, existing has {}",
                        existing.specificity
                    );
                    return false;
                }
            }
        }
        log::trace!("{name}: {value} ({specificity}, {priority:?}) stored");
        let declaration = Declaration::new(&name, value, priority, specificity, counter.next());
        self.declarations.insert(name, declaration);
        true
    }

    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.declarations.get(&property_key(name))
    }

    pub fn clear(&mut self) {
        self.declarations.clear();
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}
