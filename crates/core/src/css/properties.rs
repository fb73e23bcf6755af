//! Property metadata: inheritance, per-browser default values, pixel
//! fallbacks, and the per-tag defaults seeded before stylesheet rules.

use super::declaration::property_key;
use crate::browser::{BrowserFamily, Viewport};
use std::collections::HashMap;

/// Window dimension a length property falls back to when there is nothing
/// left to resolve a percentage against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowExtent {
    Width,
    Height,
    Fixed(i32),
}

impl WindowExtent {
    pub fn pixels(self, viewport: &Viewport) -> i32 {
        match self {
            WindowExtent::Width => viewport.width,
            WindowExtent::Height => viewport.height,
            WindowExtent::Fixed(px) => px,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PropertyDefinition {
    pub name: &'static str,
    pub inherited: bool,
    pub initial: &'static str,
    /// Families whose default differs from `initial`.
    pub browser_defaults: &'static [(BrowserFamily, &'static str)],
    pub window_extent: WindowExtent,
}

impl PropertyDefinition {
    pub fn default_value(&self, family: BrowserFamily) -> &'static str {
        self.browser_defaults
            .iter()
            .find(|(f, _)| *f == family)
            .map(|(_, v)| *v)
            .unwrap_or(self.initial)
    }
}

const fn prop(name: &'static str, inherited: bool, initial: &'static str) -> PropertyDefinition {
    PropertyDefinition {
        name,
        inherited,
        initial,
        browser_defaults: &[],
        window_extent: WindowExtent::Fixed(0),
    }
}

const fn length(name: &'static str, initial: &'static str, extent: WindowExtent) -> PropertyDefinition {
    PropertyDefinition {
        name,
        inherited: false,
        initial,
        browser_defaults: &[],
        window_extent: extent,
    }
}

const fn per_browser(
    mut def: PropertyDefinition,
    defaults: &'static [(BrowserFamily, &'static str)],
) -> PropertyDefinition {
    def.browser_defaults = defaults;
    def
}

use BrowserFamily::{Firefox, InternetExplorer};
use WindowExtent::{Fixed, Height, Width};

static PROPERTIES: &[PropertyDefinition] = &[
    // Inherited
    prop("color", true, "rgb(0, 0, 0)"),
    per_browser(
        prop("font-family", true, "\"Times New Roman\""),
        &[(Firefox, "serif")],
    ),
    PropertyDefinition {
        inherited: true,
        ..length("font-size", "16px", Fixed(16))
    },
    prop("font-style", true, "normal"),
    prop("font-variant", true, "normal"),
    per_browser(prop("font-weight", true, "400"), &[(InternetExplorer, "normal")]),
    PropertyDefinition {
        inherited: true,
        ..length("line-height", "normal", Fixed(18))
    },
    prop("letter-spacing", true, "normal"),
    per_browser(prop("word-spacing", true, "0px"), &[(InternetExplorer, "normal")]),
    per_browser(prop("text-align", true, "start"), &[(InternetExplorer, "left")]),
    PropertyDefinition {
        inherited: true,
        ..length("text-indent", "0px", Width)
    },
    prop("text-transform", true, "none"),
    prop("white-space", true, "normal"),
    prop("visibility", true, "visible"),
    prop("cursor", true, "auto"),
    prop("direction", true, "ltr"),
    prop("list-style-type", true, "disc"),
    prop("list-style-position", true, "outside"),
    prop("border-collapse", true, "separate"),
    prop("empty-cells", true, "show"),
    prop("caption-side", true, "top"),
    // Not inherited
    prop("display", false, "inline"),
    prop("position", false, "static"),
    prop("float", false, "none"),
    prop("clear", false, "none"),
    prop("overflow", false, "visible"),
    prop("z-index", false, "auto"),
    prop("opacity", false, "1"),
    prop("vertical-align", false, "baseline"),
    prop("text-decoration", false, "none"),
    per_browser(
        prop("background-color", false, "rgba(0, 0, 0, 0)"),
        &[(InternetExplorer, "transparent")],
    ),
    prop("background-image", false, "none"),
    length("width", "auto", Width),
    length("height", "auto", Height),
    per_browser(length("min-width", "0px", Width), &[(InternetExplorer, "auto")]),
    per_browser(length("min-height", "0px", Height), &[(InternetExplorer, "auto")]),
    length("max-width", "none", Width),
    length("max-height", "none", Height),
    length("top", "auto", Height),
    length("bottom", "auto", Height),
    length("left", "auto", Width),
    length("right", "auto", Width),
    length("margin-top", "0px", Height),
    length("margin-right", "0px", Width),
    length("margin-bottom", "0px", Height),
    length("margin-left", "0px", Width),
    length("padding-top", "0px", Height),
    length("padding-right", "0px", Width),
    length("padding-bottom", "0px", Height),
    length("padding-left", "0px", Width),
    per_browser(
        length("border-top-width", "0px", Fixed(0)),
        &[(InternetExplorer, "medium")],
    ),
    per_browser(
        length("border-right-width", "0px", Fixed(0)),
        &[(InternetExplorer, "medium")],
    ),
    per_browser(
        length("border-bottom-width", "0px", Fixed(0)),
        &[(InternetExplorer, "medium")],
    ),
    per_browser(
        length("border-left-width", "0px", Fixed(0)),
        &[(InternetExplorer, "medium")],
    ),
    prop("border-top-style", false, "none"),
    prop("border-right-style", false, "none"),
    prop("border-bottom-style", false, "none"),
    prop("border-left-style", false, "none"),
    prop("box-sizing", false, "content-box"),
];

/// Name-indexed view over the static property definitions.
#[derive(Debug, Clone)]
pub struct PropertyTable {
    by_name: HashMap<&'static str, &'static PropertyDefinition>,
}

impl Default for PropertyTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl PropertyTable {
    pub fn standard() -> Self {
        let by_name = PROPERTIES.iter().map(|p| (p.name, p)).collect();
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<&'static PropertyDefinition> {
        self.by_name.get(property_key(name).as_str()).copied()
    }

    /// Unknown properties are not inherited.
    pub fn is_inherited(&self, name: &str) -> bool {
        self.get(name).map(|p| p.inherited).unwrap_or(false)
    }

    /// Default value for `family`, or `""` for unknown properties.
    pub fn default_value(&self, name: &str, family: BrowserFamily) -> &'static str {
        self.get(name).map(|p| p.default_value(family)).unwrap_or("")
    }
}

/// Tag-specific defaults seeded into the cascade before any rule applies.
pub fn tag_defaults(tag: &str) -> &'static [(&'static str, &'static str)] {
    match tag {
        "a" | "span" | "strong" | "em" | "b" | "i" | "u" | "small" | "sub" | "sup" | "label"
        | "abbr" | "cite" | "code" | "kbd" | "mark" | "q" | "s" | "samp" | "time" | "var" => {
            &[("display", "inline")]
        }

        "html" | "div" | "p" | "section" | "article" | "main" | "header" | "footer" | "nav"
        | "aside" | "form" | "fieldset" | "figure" | "figcaption" | "blockquote" | "pre"
        | "address" | "details" | "summary" | "dialog" | "ul" | "ol" | "dl" | "dt" | "dd" => {
            &[("display", "block")]
        }

        "li" => &[("display", "list-item")],
        "table" => &[("display", "table")],
        "thead" => &[("display", "table-header-group")],
        "tbody" => &[("display", "table-row-group")],
        "tfoot" => &[("display", "table-footer-group")],
        "tr" => &[("display", "table-row")],
        "td" | "th" => &[("display", "table-cell")],

        "h1" => &[
            ("display", "block"),
            ("font-size", "32px"),
            ("font-weight", "700"),
            ("margin-top", "21px"),
            ("margin-bottom", "21px"),
        ],
        "h2" => &[
            ("display", "block"),
            ("font-size", "24px"),
            ("font-weight", "700"),
            ("margin-top", "19px"),
            ("margin-bottom", "19px"),
        ],
        "h3" => &[
            ("display", "block"),
            ("font-size", "18.72px"),
            ("font-weight", "700"),
            ("margin-top", "18px"),
            ("margin-bottom", "18px"),
        ],

        "button" | "select" | "textarea" | "img" | "canvas" => &[("display", "inline-block")],

        "input" => &[
            ("display", "inline-block"),
            ("width", "173px"),
            ("height", "21px"),
        ],

        "head" | "meta" | "link" | "title" | "script" | "style" | "noscript" | "template" => {
            &[("display", "none")]
        }

        "body" => &[
            ("display", "block"),
            ("margin-top", "8px"),
            ("margin-right", "8px"),
            ("margin-bottom", "8px"),
            ("margin-left", "8px"),
        ],

        _ => &[],
    }
}
