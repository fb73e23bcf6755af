//! Length to pixel conversion.
//!
//! Units use fixed ratios (`em` = 16px, `in` = 150px, ...) rather than real
//! font metrics or DPI. Callers depend on these exact numbers.

use super::computed::ComputedStyle;
use super::properties::PropertyTable;
use crate::browser::Viewport;

/// Elements whose unset size is their intrinsic window-level default.
const INTRINSIC_SIZE_TAGS: &[&str] = &["canvas"];

/// Pixels a table-backed accessor reports for `auto`.
const AUTO_PIXELS: i32 = 0;

/// Multipliers applied to the leading integer, by unit suffix.
const UNIT_FACTORS: &[(&str, f64)] = &[
    ("px", 1.0),
    ("em", 16.0),
    ("%", 16.0 / 100.0),
    ("ex", 10.0),
    ("in", 150.0),
    ("cm", 50.0),
    ("mm", 5.0),
    ("pt", 2.0),
    ("pc", 24.0),
];

/// Convert a length string to whole pixels. Only the leading integer is
/// read (`"10.7px"` is 10); a value without one counts as 0. Unknown units
/// are treated as pixels.
pub fn pixel_value(value: &str) -> i32 {
    let value = value.trim();
    let number = leading_integer(value).unwrap_or(0) as f64;
    let factor = UNIT_FACTORS
        .iter()
        .find(|(unit, _)| value.ends_with(unit))
        .map(|(_, factor)| *factor)
        .unwrap_or(1.0);
    (number * factor).round() as i32
}

fn leading_integer(value: &str) -> Option<i64> {
    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn leading_decimal(value: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in value.char_indices() {
        if c.is_ascii_digit() {
            end = i + 1;
        } else if c == '.' && !seen_dot && end == i && i > 0 {
            seen_dot = true;
        } else if !(c == '-' && i == 0) {
            break;
        }
    }
    value[..end].parse().ok()
}

/// How to read one length property for pixel conversion.
pub trait PixelAccessor {
    /// The property's string value on `style`.
    fn value(&self, style: &ComputedStyle<'_>) -> String;
    /// Pixels reported for `auto`.
    fn auto_pixels(&self) -> i32;
    /// Pixels used when nothing above the element can be resolved.
    fn window_pixels(&self) -> i32;
}

/// Table-backed accessor for a named property.
#[derive(Debug, Clone)]
pub struct PropertyPixels {
    pub name: String,
    pub auto_pixels: i32,
    pub window_pixels: i32,
}

impl PropertyPixels {
    pub fn new(name: &str, auto_pixels: i32, window_pixels: i32) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            auto_pixels,
            window_pixels,
        }
    }

    pub fn for_property(table: &PropertyTable, name: &str, viewport: &Viewport) -> Self {
        match table.get(name) {
            Some(def) => Self::new(name, AUTO_PIXELS, def.window_extent.pixels(viewport)),
            None => Self::new(name, AUTO_PIXELS, 0),
        }
    }
}

impl PixelAccessor for PropertyPixels {
    /// Declared value only; an unset property stays empty so the
    /// percentage rules below can tell it apart from an explicit length.
    fn value(&self, style: &ComputedStyle<'_>) -> String {
        style.resolve(&self.name, false)
    }

    fn auto_pixels(&self) -> i32 {
        self.auto_pixels
    }

    fn window_pixels(&self) -> i32 {
        self.window_pixels
    }
}

/// Pixel value of the property read by `accessor` on `style`, with
/// percentages resolved against ancestors.
pub fn pixel_value_for(style: &ComputedStyle<'_>, accessor: &dyn PixelAccessor) -> i32 {
    resolve_pixels(style, accessor, false)
}

fn resolve_pixels(style: &ComputedStyle<'_>, accessor: &dyn PixelAccessor, percent_mode: bool) -> i32 {
    let raw = accessor.value(style);
    let value = raw.trim();
    let document = style.document();

    if value.ends_with('%') || (value.is_empty() && document.is_document_element(style.node())) {
        let percent = leading_decimal(value).unwrap_or(100.0);
        let base = match style.parent() {
            Some(parent) => resolve_pixels(&parent, accessor, true),
            None => accessor.window_pixels(),
        };
        return (percent / 100.0 * base as f64) as i32;
    }

    if value == "auto" {
        return accessor.auto_pixels();
    }

    if value.is_empty() {
        if INTRINSIC_SIZE_TAGS.contains(&style.tag()) {
            return accessor.window_pixels();
        }
        if percent_mode {
            return match style.parent() {
                Some(parent) if !document.is_document_element(parent.node()) => {
                    resolve_pixels(&parent, accessor, true)
                }
                _ => accessor.window_pixels(),
            };
        }
        return 0;
    }

    pixel_value(value)
}
