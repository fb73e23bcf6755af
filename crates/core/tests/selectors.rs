//! Tests for stylesheet parsing, selector specificity and matching.

use pretty_assertions::assert_eq;
use restyle_core::css::selector::{parse_selector, parse_selector_list, SelectorPart};
use restyle_core::css::{parse_stylesheet, Priority, Specificity};
use restyle_core::{BrowserVersion, Page};

fn ids(page: &Page, selectors: &str) -> Vec<String> {
    page.query_selector_all(selectors)
        .into_iter()
        .map(|n| page.document().attribute(n, "id").unwrap_or("").to_string())
        .collect()
}

#[test]
fn test_specificity_counts() {
    let spec = |s: &str| parse_selector(s).unwrap().specificity;
    assert_eq!(spec("div"), Specificity::new(0, 0, 1));
    assert_eq!(spec(".a.b"), Specificity::new(0, 2, 0));
    assert_eq!(spec("#x"), Specificity::new(1, 0, 0));
    assert_eq!(spec("div#x.a > span[type=text]:first-child"), Specificity::new(1, 3, 2));
    assert_eq!(spec("*"), Specificity::new(0, 0, 0));
    assert_eq!(spec("p::before"), Specificity::new(0, 0, 2));
}

#[test]
fn test_specificity_ordering() {
    assert!(Specificity::new(1, 0, 0) > Specificity::new(0, 10, 10));
    assert!(Specificity::new(0, 1, 0) > Specificity::new(0, 0, 99));
    assert!(Specificity::ATTRIBUTE > Specificity::new(99, 0, 0));
    assert_eq!(Specificity::new(1, 2, 3).to_string(), "0,1,2,3");
}

#[test]
fn test_parse_selector_parts() {
    let selector = parse_selector("ul.nav > li a").unwrap();
    assert_eq!(
        selector.parts,
        vec![
            SelectorPart::Tag("ul".to_string()),
            SelectorPart::Class("nav".to_string()),
            SelectorPart::Child,
            SelectorPart::Tag("li".to_string()),
            SelectorPart::Descendant,
            SelectorPart::Tag("a".to_string()),
        ]
    );
}

#[test]
fn test_unsupported_selectors_are_dropped() {
    assert!(parse_selector("a + b").is_none());
    assert!(parse_selector("a ~ b").is_none());
    assert!(parse_selector(":not(.x)").is_none());
    assert!(parse_selector("> a").is_none());
    assert!(parse_selector("a >").is_none());
    assert!(parse_selector(".").is_none());
    assert!(parse_selector("").is_none());
    assert_eq!(parse_selector_list("a, b + c, .d").len(), 2);
}

#[test]
fn test_parse_stylesheet_rules() {
    let css = r#"
        /* header */
        h1, .title { color: red; font-size: 2em !important }
        @media print { p { color: black; } }
        #main{width:50%}
    "#;
    let rules = parse_stylesheet(css);
    assert_eq!(rules.len(), 3);

    assert_eq!(rules[0].specificity, Specificity::new(0, 0, 1));
    assert_eq!(rules[1].specificity, Specificity::new(0, 1, 0));
    assert_eq!(rules[0].declarations, rules[1].declarations);
    assert_eq!(rules[0].declarations[1].name, "font-size");
    assert_eq!(rules[0].declarations[1].value, "2em");
    assert_eq!(rules[0].declarations[1].priority, Priority::Important);

    assert_eq!(rules[2].specificity, Specificity::new(1, 0, 0));
    assert_eq!(rules[2].declarations[0].value, "50%");
}

#[test]
fn test_matching_simple_selectors() {
    let html = r#"
    <div id="a" class="box big"></div>
    <div id="b" class="box"></div>
    <input id="c" type="text">
    <input id="d" type="checkbox" disabled>
    "#;
    let page = Page::parse(html, BrowserVersion::chrome());
    assert_eq!(ids(&page, ".box"), vec!["a", "b"]);
    assert_eq!(ids(&page, ".box.big"), vec!["a"]);
    assert_eq!(ids(&page, "div#b"), vec!["b"]);
    assert_eq!(ids(&page, "[type=text]"), vec!["c"]);
    assert_eq!(ids(&page, "input[type=\"checkbox\"]"), vec!["d"]);
    assert_eq!(ids(&page, "[disabled]"), vec!["d"]);
    assert_eq!(ids(&page, "#c, #a"), vec!["a", "c"]);
}

#[test]
fn test_matching_combinators() {
    let html = r#"
    <section id="s">
      <div id="d1"><p id="p1"><em id="e1">x</em></p></div>
      <p id="p2"><em id="e2">y</em></p>
    </section>
    "#;
    let page = Page::parse(html, BrowserVersion::chrome());
    assert_eq!(ids(&page, "section em"), vec!["e1", "e2"]);
    assert_eq!(ids(&page, "section > p"), vec!["p2"]);
    assert_eq!(ids(&page, "section > p em"), vec!["e2"]);
    assert_eq!(ids(&page, "div p > em"), vec!["e1"]);
    assert_eq!(ids(&page, "section p"), vec!["p1", "p2"]);
}

#[test]
fn test_descendant_matching_backtracks() {
    // `.a > .b .c`: the nearest `.b` ancestor is not a child of `.a` but a
    // farther one is.
    let html = r#"
    <div class="a"><div class="b"><div class="x"><div class="b"><span id="t" class="c">t</span></div></div></div></div>
    "#;
    let page = Page::parse(html, BrowserVersion::chrome());
    assert_eq!(ids(&page, ".a > .b .c"), vec!["t"]);
}

#[test]
fn test_structural_pseudo_classes() {
    let html = r#"<ul id="list"><li id="one">1</li><li id="two">2</li><li id="three"></li></ul>"#;
    let page = Page::parse(html, BrowserVersion::chrome());
    assert_eq!(ids(&page, "li:first-child"), vec!["one"]);
    assert_eq!(ids(&page, "li:last-child"), vec!["three"]);
    assert_eq!(ids(&page, "li:empty"), vec!["three"]);
    assert_eq!(ids(&page, "li:hover"), Vec::<String>::new());
    assert_eq!(page.query_selector_all(":root").len(), 1);
}

#[test]
fn test_pseudo_elements_never_match() {
    let page = Page::parse("<p id=p>x</p>", BrowserVersion::chrome());
    assert!(page.query_selector("p::before").is_none());
}

#[test]
fn test_query_skips_detached_elements() {
    let mut page = Page::parse("<div class=x id=in></div>", BrowserVersion::chrome());
    let detached = page.create_element("div");
    page.set_attribute(detached, "class", "x");
    assert_eq!(ids(&page, ".x"), vec!["in"]);
}
