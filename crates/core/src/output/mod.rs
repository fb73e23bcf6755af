use crate::dom::NodeId;
use crate::page::Page;
use serde::Serialize;
use std::collections::BTreeMap;

/// Resolved property values for a set of elements.
#[derive(Debug, Serialize)]
pub struct StyleSnapshot {
    pub browser: String,
    pub vp: [i32; 2],
    pub els: Vec<ElementSnapshot>,
}

/// A single element's resolved values.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ElementSnapshot {
    /// Arena index of the node
    pub id: usize,
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dom_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Whether the element is attached to the document
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub detached: bool,
    pub values: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub px: BTreeMap<String, i32>,
}

/// Resolve `properties` on every node in `nodes`. With `pixels` set, each
/// value is also converted to whole pixels.
pub fn generate_snapshot(
    page: &Page,
    nodes: &[NodeId],
    properties: &[String],
    pixels: bool,
) -> StyleSnapshot {
    let document = page.document();
    let els = nodes
        .iter()
        .filter_map(|node| {
            let style = page.computed_style(*node)?;
            let values = properties
                .iter()
                .map(|name| (name.to_ascii_lowercase(), style.get(name)))
                .collect();
            let px = if pixels {
                properties
                    .iter()
                    .map(|name| (name.to_ascii_lowercase(), style.pixels(name)))
                    .collect()
            } else {
                BTreeMap::new()
            };
            Some(ElementSnapshot {
                id: node.index(),
                tag: document.tag(*node).to_string(),
                dom_id: document.attribute(*node, "id").map(str::to_string),
                class: document.attribute(*node, "class").map(str::to_string),
                detached: !document.is_attached(*node),
                values,
                px,
            })
        })
        .collect();

    let viewport = page.browser().viewport;
    StyleSnapshot {
        browser: page.browser().nickname.clone(),
        vp: [viewport.width, viewport.height],
        els,
    }
}

/// Compact one-line-per-element rendering:
/// `3 div#main.box color=red width=50%(628)`.
pub fn to_compact_string(snapshot: &StyleSnapshot) -> String {
    let mut out = String::new();
    for el in &snapshot.els {
        out.push_str(&el.id.to_string());
        out.push(' ');
        out.push_str(&el.tag);
        if let Some(id) = &el.dom_id {
            out.push('#');
            out.push_str(id);
        }
        if let Some(class) = &el.class {
            for c in class.split_whitespace() {
                out.push('.');
                out.push_str(c);
            }
        }
        if el.detached {
            out.push_str(" [detached]");
        }
        for (name, value) in &el.values {
            out.push(' ');
            out.push_str(name);
            out.push('=');
            if value.is_empty() {
                out.push_str("\"\"");
            } else if value.contains(char::is_whitespace) {
                out.push('"');
                out.push_str(value);
                out.push('"');
            } else {
                out.push_str(value);
            }
            if let Some(px) = el.px.get(name) {
                out.push_str(&format!("({px})"));
            }
        }
        out.push('\n');
    }
    out
}
