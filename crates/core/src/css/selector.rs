//! Minimal CSS selector matching engine.
//! Supports: tag, .class, #id, [attr], [attr=value], *, a few structural
//! pseudo-classes, descendant and child combinators, comma-separated
//! selectors, and specificity ordering.

use super::declaration::{parse_declaration_block, ParsedDeclaration, Specificity};
use crate::dom::{Document, NodeId};

/// A parsed CSS rule: one selector plus its declarations.
/// Comma-separated selector lists become one rule per selector.
#[derive(Debug, Clone)]
pub struct CssRule {
    pub selector: Selector,
    pub declarations: Vec<ParsedDeclaration>,
    pub specificity: Specificity,
}

/// A single selector (one part of a comma-separated list).
#[derive(Debug, Clone)]
pub struct Selector {
    pub parts: Vec<SelectorPart>,
    pub specificity: Specificity,
}

/// A component of a selector chain.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorPart {
    /// Matches a tag name: `div`, `button`, etc.
    Tag(String),
    /// Matches a class: `.foo`
    Class(String),
    /// Matches an ID: `#bar`
    Id(String),
    /// Matches an attribute: `[type="submit"]`
    Attribute(String, Option<String>),
    /// Descendant combinator (space)
    Descendant,
    /// Child combinator (>)
    Child,
    /// Universal selector (*)
    Universal,
    /// Pseudo-class such as `:first-child`
    PseudoClass(String),
    /// Pseudo-element such as `::before`; never matches an element
    PseudoElement(String),
}

/// Parse a CSS stylesheet string into rules, in source order.
pub fn parse_stylesheet(css: &str) -> Vec<CssRule> {
    let mut rules = Vec::new();
    let css = strip_comments(css);

    // Simple state machine: find selector { declarations }
    let mut chars = css.chars();
    let mut current = String::new();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            current.push(ch);
            continue;
        }
        let selector_text = current.trim().to_string();
        current.clear();

        // Read until the matching closing brace
        let mut depth = 1;
        let mut block = String::new();
        for c in chars.by_ref() {
            if c == '{' {
                depth += 1;
            } else if c == '}' {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            block.push(c);
        }

        // At-rules (@media, @font-face, ...) are skipped whole.
        if selector_text.is_empty() || selector_text.starts_with('@') {
            continue;
        }
        let declarations = parse_declaration_block(&block);
        for selector in parse_selector_list(&selector_text) {
            rules.push(CssRule {
                specificity: selector.specificity,
                selector,
                declarations: declarations.clone(),
            });
        }
    }

    rules
}

/// Parse a comma-separated selector list. Unsupported selectors are dropped.
pub fn parse_selector_list(input: &str) -> Vec<Selector> {
    input.split(',').filter_map(parse_selector).collect()
}

fn strip_comments(css: &str) -> String {
    let mut result = String::with_capacity(css.len());
    let mut chars = css.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '/' && chars.peek() == Some(&'*') {
            chars.next();
            // Skip until */
            while let Some(c) = chars.next() {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

/// Parse a single selector string into a Selector.
pub fn parse_selector(input: &str) -> Option<Selector> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let mut parts = Vec::new();
    let mut specificity = Specificity::default();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(&ch) = chars.peek() {
        match ch {
            '.' => {
                flush_tag(&mut current, &mut parts, &mut specificity);
                chars.next();
                let class_name = read_ident(&mut chars);
                if class_name.is_empty() {
                    return None;
                }
                parts.push(SelectorPart::Class(class_name));
                specificity.classes += 1;
            }
            '#' => {
                flush_tag(&mut current, &mut parts, &mut specificity);
                chars.next();
                let id_name = read_ident(&mut chars);
                if id_name.is_empty() {
                    return None;
                }
                parts.push(SelectorPart::Id(id_name));
                specificity.ids += 1;
            }
            '[' => {
                flush_tag(&mut current, &mut parts, &mut specificity);
                chars.next();
                parts.push(read_attribute(&mut chars)?);
                specificity.classes += 1;
            }
            ':' => {
                flush_tag(&mut current, &mut parts, &mut specificity);
                chars.next();
                let is_element = chars.peek() == Some(&':');
                if is_element {
                    chars.next();
                }
                let name = read_ident(&mut chars).to_ascii_lowercase();
                // Functional pseudo-classes like :not(...) are unsupported.
                if name.is_empty() || chars.peek() == Some(&'(') {
                    return None;
                }
                if is_element || matches!(name.as_str(), "before" | "after" | "first-line" | "first-letter") {
                    parts.push(SelectorPart::PseudoElement(name));
                    specificity.types += 1;
                } else {
                    parts.push(SelectorPart::PseudoClass(name));
                    specificity.classes += 1;
                }
            }
            '>' => {
                flush_tag(&mut current, &mut parts, &mut specificity);
                chars.next();
                skip_whitespace(&mut chars);
                if matches!(parts.last(), None | Some(SelectorPart::Descendant) | Some(SelectorPart::Child)) {
                    return None;
                }
                parts.push(SelectorPart::Child);
            }
            '+' | '~' => return None, // sibling combinators are unsupported
            ' ' | '\t' | '\n' | '\r' => {
                flush_tag(&mut current, &mut parts, &mut specificity);
                chars.next();
                skip_whitespace(&mut chars);
                if let Some(&next) = chars.peek() {
                    if next != '>' && next != '+' && next != '~' {
                        parts.push(SelectorPart::Descendant);
                    }
                }
            }
            '*' => {
                flush_tag(&mut current, &mut parts, &mut specificity);
                chars.next();
                parts.push(SelectorPart::Universal);
            }
            _ => {
                current.push(ch);
                chars.next();
            }
        }
    }

    flush_tag(&mut current, &mut parts, &mut specificity);

    if parts.is_empty() || matches!(parts.last(), Some(SelectorPart::Child)) {
        None
    } else {
        Some(Selector { parts, specificity })
    }
}

fn flush_tag(current: &mut String, parts: &mut Vec<SelectorPart>, specificity: &mut Specificity) {
    let tag = current.trim().to_string();
    if !tag.is_empty() {
        parts.push(SelectorPart::Tag(tag.to_ascii_lowercase()));
        specificity.types += 1;
    }
    current.clear();
}

/// Read `name]`, `name=value]` or `name="value"]` after an opening `[`.
fn read_attribute(chars: &mut std::iter::Peekable<std::str::Chars>) -> Option<SelectorPart> {
    let mut name = String::new();
    let mut value = None;
    while let Some(c) = chars.next() {
        match c {
            ']' => return Some(SelectorPart::Attribute(name.trim().to_ascii_lowercase(), value)),
            '=' => {
                let mut val = String::new();
                let quote = chars.peek().copied().filter(|q| *q == '"' || *q == '\'');
                if let Some(quote) = quote {
                    chars.next();
                    for vc in chars.by_ref() {
                        if vc == quote {
                            break;
                        }
                        val.push(vc);
                    }
                } else {
                    while let Some(&vc) = chars.peek() {
                        if vc == ']' {
                            break;
                        }
                        val.push(vc);
                        chars.next();
                    }
                }
                value = Some(val.trim().to_string());
            }
            _ => name.push(c),
        }
    }
    None
}

fn read_ident(chars: &mut std::iter::Peekable<std::str::Chars>) -> String {
    let mut name = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_alphanumeric() || c == '-' || c == '_' {
            name.push(c);
            chars.next();
        } else {
            break;
        }
    }
    name
}

fn skip_whitespace(chars: &mut std::iter::Peekable<std::str::Chars>) {
    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else {
            break;
        }
    }
}

/// Check if a selector matches an element in `document`.
pub fn matches_element(document: &Document, node: NodeId, selector: &Selector) -> bool {
    // Split into compound segments; each carries the combinator that joins
    // it to the segment on its left.
    let mut segments: Vec<(Vec<&SelectorPart>, Option<&SelectorPart>)> = Vec::new();
    let mut current: Vec<&SelectorPart> = Vec::new();
    let mut pending = None;
    for part in &selector.parts {
        match part {
            SelectorPart::Descendant | SelectorPart::Child => {
                if !current.is_empty() {
                    segments.push((std::mem::take(&mut current), pending));
                }
                pending = Some(part);
            }
            _ => current.push(part),
        }
    }
    if current.is_empty() {
        return false;
    }
    segments.push((current, pending));

    matches_segments(document, node, &segments)
}

/// Match the last segment against `node`, then the rest against its
/// ancestors, backtracking over descendant combinators.
fn matches_segments(
    document: &Document,
    node: NodeId,
    segments: &[(Vec<&SelectorPart>, Option<&SelectorPart>)],
) -> bool {
    let Some(((segment, combinator), rest)) = segments.split_last() else {
        return true;
    };
    if !segment_matches(document, node, segment) {
        return false;
    }
    if rest.is_empty() {
        return true;
    }
    match combinator {
        Some(SelectorPart::Child) => document
            .parent_element(node)
            .map(|parent| matches_segments(document, parent, rest))
            .unwrap_or(false),
        _ => {
            let mut ancestor = document.parent_element(node);
            while let Some(candidate) = ancestor {
                if matches_segments(document, candidate, rest) {
                    return true;
                }
                ancestor = document.parent_element(candidate);
            }
            false
        }
    }
}

fn segment_matches(document: &Document, node: NodeId, segment: &[&SelectorPart]) -> bool {
    let Some(element) = document.node(node).filter(|n| n.is_element()) else {
        return false;
    };
    segment.iter().all(|part| match part {
        SelectorPart::Tag(t) => *t == element.tag,
        SelectorPart::Class(c) => document.classes(node).iter().any(|cl| *cl == c.as_str()),
        SelectorPart::Id(i) => element.get_attr("id") == Some(i.as_str()),
        SelectorPart::Attribute(name, expected) => match expected {
            Some(val) => element.get_attr(name) == Some(val.as_str()),
            None => element.attributes.contains_key(name),
        },
        SelectorPart::Universal => true,
        SelectorPart::PseudoClass(name) => pseudo_class_matches(document, node, name),
        SelectorPart::PseudoElement(_) => false,
        SelectorPart::Descendant | SelectorPart::Child => true,
    })
}

/// Structural pseudo-classes only; dynamic ones (`:hover`, `:focus`) never
/// match a headless document.
fn pseudo_class_matches(document: &Document, node: NodeId, name: &str) -> bool {
    let siblings: Vec<NodeId> = match document.parent(node) {
        Some(parent) => document
            .children(parent)
            .iter()
            .copied()
            .filter(|c| document.is_element(*c))
            .collect(),
        None => vec![node],
    };
    match name {
        "root" => document.is_document_element(node),
        "first-child" => siblings.first() == Some(&node),
        "last-child" => siblings.last() == Some(&node),
        "only-child" => siblings.len() == 1,
        "empty" => document.children(node).is_empty(),
        "link" | "any-link" => document.tag(node) == "a" && document.attribute(node, "href").is_some(),
        _ => false,
    }
}
