//! Tests for cascade accumulation of matched stylesheet rules.

use pretty_assertions::assert_eq;
use restyle_core::css::declaration::DEFAULT_INDEX;
use restyle_core::css::{CascadeAccumulator, IndexCounter, Priority, Specificity};
use restyle_core::{BrowserVersion, Page};

const TYPE: Specificity = Specificity::new(0, 0, 1);
const CLASS: Specificity = Specificity::new(0, 1, 0);
const ID: Specificity = Specificity::new(1, 0, 0);

fn value(cascade: &CascadeAccumulator, name: &str) -> String {
    cascade.get(name).map(|d| d.value.clone()).unwrap_or_default()
}

#[test]
fn test_lower_specificity_normal_rule_is_ignored() {
    let counter = IndexCounter::new();
    let mut cascade = CascadeAccumulator::new();
    assert!(cascade.apply_rule("color", "red", Priority::Normal, CLASS, &counter));
    assert!(!cascade.apply_rule("color", "blue", Priority::Normal, TYPE, &counter));
    assert_eq!(value(&cascade, "color"), "red");
}

#[test]
fn test_equal_or_higher_specificity_normal_rule_replaces() {
    let counter = IndexCounter::new();
    let mut cascade = CascadeAccumulator::new();
    cascade.apply_rule("color", "red", Priority::Normal, CLASS, &counter);
    assert!(cascade.apply_rule("color", "green", Priority::Normal, CLASS, &counter));
    assert_eq!(value(&cascade, "color"), "green");
    assert!(cascade.apply_rule("color", "blue", Priority::Normal, ID, &counter));
    assert_eq!(value(&cascade, "color"), "blue");
}

#[test]
fn test_important_is_never_demoted_by_normal() {
    let counter = IndexCounter::new();
    let mut cascade = CascadeAccumulator::new();
    cascade.apply_rule("color", "red", Priority::Important, TYPE, &counter);
    assert!(!cascade.apply_rule("color", "blue", Priority::Normal, ID, &counter));
    let stored = cascade.get("color").unwrap();
    assert_eq!(stored.value, "red");
    assert_eq!(stored.priority, Priority::Important);
}

#[test]
fn test_second_important_wins_regardless_of_specificity() {
    // Last write wins between important rules, unlike the inline/cascade
    // comparison which looks at specificity.
    let counter = IndexCounter::new();
    let mut cascade = CascadeAccumulator::new();
    cascade.apply_rule("color", "red", Priority::Important, ID, &counter);
    assert!(cascade.apply_rule("color", "blue", Priority::Important, TYPE, &counter));
    assert_eq!(value(&cascade, "color"), "blue");
}

#[test]
fn test_important_replaces_normal() {
    let counter = IndexCounter::new();
    let mut cascade = CascadeAccumulator::new();
    cascade.apply_rule("width", "1px", Priority::Normal, ID, &counter);
    assert!(cascade.apply_rule("width", "2px", Priority::Important, TYPE, &counter));
    assert_eq!(value(&cascade, "width"), "2px");
}

#[test]
fn test_seeded_default_loses_to_any_rule() {
    let counter = IndexCounter::new();
    let mut cascade = CascadeAccumulator::new();
    cascade.seed_default("display", "block");
    let seed = cascade.get("display").unwrap();
    assert!(seed.is_default());
    assert_eq!(seed.index, DEFAULT_INDEX);
    assert_eq!(seed.specificity, Specificity::ATTRIBUTE);
    assert_eq!(seed.priority, Priority::Normal);

    assert!(cascade.apply_rule("display", "flex", Priority::Normal, Specificity::default(), &counter));
    assert_eq!(value(&cascade, "display"), "flex");
    assert!(!cascade.get("display").unwrap().is_default());
}

#[test]
fn test_replacements_get_increasing_indexes() {
    let counter = IndexCounter::new();
    let mut cascade = CascadeAccumulator::new();
    cascade.apply_rule("color", "red", Priority::Normal, TYPE, &counter);
    let first = cascade.get("color").unwrap().index;
    cascade.apply_rule("color", "blue", Priority::Normal, TYPE, &counter);
    let second = cascade.get("color").unwrap().index;
    assert!(first > DEFAULT_INDEX);
    assert!(second > first);
}

#[test]
fn test_property_names_are_case_insensitive() {
    let counter = IndexCounter::new();
    let mut cascade = CascadeAccumulator::new();
    cascade.apply_rule("COLOR", "red", Priority::Normal, TYPE, &counter);
    assert_eq!(value(&cascade, "color"), "red");
    assert_eq!(cascade.len(), 1);
}

#[test]
fn test_stylesheet_rules_accumulate_in_document_order() {
    let html = r#"
    <html><head><style>
        .a { color: red; width: 10px; }
        div { color: blue; width: 20px !important; }
        #x { color: green !important; }
        .a { color: purple !important; }
    </style></head>
    <body><div id="x" class="a">x</div></body></html>
    "#;
    let page = Page::parse(html, BrowserVersion::chrome());
    let div = page.query_selector("#x").unwrap();
    let cascade = page.element_style(div).unwrap().cascade();

    // #x and .a are both important; the later one is kept.
    assert_eq!(value(cascade, "color"), "purple");
    assert_eq!(value(cascade, "width"), "20px");
    // Seeded from the tag defaults.
    assert_eq!(value(cascade, "display"), "block");
}

#[test]
fn test_restyle_rebuilds_accumulator() {
    let html = r#"<style>.on { color: red; }</style><p id="p" class="on">t</p>"#;
    let mut page = Page::parse(html, BrowserVersion::chrome());
    let p = page.query_selector("#p").unwrap();
    assert_eq!(value(page.element_style(p).unwrap().cascade(), "color"), "red");

    page.set_attribute(p, "class", "off");
    assert!(page.element_style(p).unwrap().cascade().get("color").is_none());
}
