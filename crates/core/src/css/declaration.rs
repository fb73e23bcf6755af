//! Declaration records shared by the inline store and the cascade accumulator.

use serde::Serialize;
use std::cell::Cell;
use std::fmt;

/// Index carried by default-seeded declarations. Real declarations start at 1.
pub const DEFAULT_INDEX: u64 = 0;

/// `!important` or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Normal,
    Important,
}

impl Priority {
    pub fn is_important(self) -> bool {
        self == Priority::Important
    }

    /// The string form used by `getPropertyPriority`: `"important"` or `""`.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Normal => "",
            Priority::Important => "important",
        }
    }
}

/// Selector specificity. Compared field by field, so a style attribute
/// always outranks any selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Specificity {
    pub style_attribute: u32,
    pub ids: u32,
    pub classes: u32,
    pub types: u32,
}

impl Specificity {
    /// Specificity class shared by style-attribute and default declarations.
    pub const ATTRIBUTE: Specificity = Specificity {
        style_attribute: 1,
        ids: 0,
        classes: 0,
        types: 0,
    };

    pub const fn new(ids: u32, classes: u32, types: u32) -> Self {
        Self {
            style_attribute: 0,
            ids,
            classes,
            types,
        }
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.style_attribute, self.ids, self.classes, self.types
        )
    }
}

/// A single property declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub name: String,
    pub value: String,
    pub priority: Priority,
    pub specificity: Specificity,
    pub index: u64,
}

impl Declaration {
    pub fn new(
        name: &str,
        value: &str,
        priority: Priority,
        specificity: Specificity,
        index: u64,
    ) -> Self {
        Self {
            name: property_key(name),
            value: value.to_string(),
            priority,
            specificity,
            index,
        }
    }

    /// A declaration seeded from the default-value table.
    pub fn default_seed(name: &str, value: &str) -> Self {
        Self::new(
            name,
            value,
            Priority::Normal,
            Specificity::ATTRIBUTE,
            DEFAULT_INDEX,
        )
    }

    pub fn is_default(&self) -> bool {
        self.index == DEFAULT_INDEX
    }

    pub fn is_important(&self) -> bool {
        self.priority.is_important()
    }
}

/// Monotonic per-style-object counter for declaration indexes.
#[derive(Debug)]
pub struct IndexCounter(Cell<u64>);

impl IndexCounter {
    pub fn new() -> Self {
        Self(Cell::new(DEFAULT_INDEX))
    }

    pub fn next(&self) -> u64 {
        let next = self.0.get() + 1;
        self.0.set(next);
        next
    }
}

impl Default for IndexCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// One `name: value` item from a declaration block, before indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDeclaration {
    pub name: String,
    pub value: String,
    pub priority: Priority,
}

/// Parse a declaration block such as a `style` attribute value.
///
/// Tokens are split on `;` then on the first `:`. Tokens with no colon or an
/// empty property name are dropped. A trailing `!important` (any case) is
/// stripped from the value and recorded as the priority. Values may be empty.
pub fn parse_declaration_block(text: &str) -> Vec<ParsedDeclaration> {
    let mut out = Vec::new();
    for token in text.split(';') {
        let Some((raw_name, raw_value)) = token.split_once(':') else {
            continue;
        };
        let name = property_key(raw_name);
        if name.is_empty() {
            continue;
        }
        let (value, priority) = split_priority(raw_value.trim());
        out.push(ParsedDeclaration {
            name,
            value: value.to_string(),
            priority,
        });
    }
    out
}

/// Canonical map key for a property name: trimmed and lowercased.
pub(crate) fn property_key(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

/// Strip a trailing `!important` (any case) from a trimmed value.
pub(crate) fn split_priority(value: &str) -> (&str, Priority) {
    const IMPORTANT: &str = "!important";
    if value.len() >= IMPORTANT.len() {
        let split = value.len() - IMPORTANT.len();
        if value.is_char_boundary(split) && value[split..].eq_ignore_ascii_case(IMPORTANT) {
            return (value[..split].trim_end(), Priority::Important);
        }
    }
    (value, Priority::Normal)
}
