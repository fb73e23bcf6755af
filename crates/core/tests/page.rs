use pretty_assertions::assert_eq;
use restyle_core::css::Priority;
use restyle_core::{BrowserVersion, Page};

fn color(page: &Page, selector: &str) -> String {
    let node = page.query_selector(selector).unwrap();
    page.computed_style(node).unwrap().get("color")
}

#[test]
fn test_style_elements_are_collected_in_order() {
    let html = r#"
    <html><head>
      <style>p { color: red; }</style>
      <style>p { color: blue; }</style>
    </head><body><p id=p>x</p></body></html>
    "#;
    let page = Page::parse(html, BrowserVersion::chrome());
    assert_eq!(page.rules().len(), 2);
    assert_eq!(color(&page, "#p"), "blue");
}

#[test]
fn test_add_stylesheet_restyles() {
    let mut page = Page::parse("<p id=p class=note>x</p>", BrowserVersion::chrome());
    assert_eq!(color(&page, "#p"), "rgb(0, 0, 0)");

    page.add_stylesheet(".note { color: green }");
    assert_eq!(color(&page, "#p"), "green");

    // Equal specificity, later sheet wins.
    page.add_stylesheet("p { color: navy } .note { color: teal }");
    assert_eq!(color(&page, "#p"), "teal");
}

#[test]
fn test_class_change_restyles() {
    let html = "<style>.warn { color: orange }</style><p id=p>x</p>";
    let mut page = Page::parse(html, BrowserVersion::chrome());
    let p = page.query_selector("#p").unwrap();
    assert_eq!(color(&page, "#p"), "rgb(0, 0, 0)");

    page.set_attribute(p, "class", "warn");
    assert_eq!(color(&page, "#p"), "orange");

    page.remove_attribute(p, "class");
    assert_eq!(color(&page, "#p"), "rgb(0, 0, 0)");
}

#[test]
fn test_moving_element_changes_inheritance() {
    let html = r#"
    <div id="red" style="color: red"></div>
    <div id="blue" style="color: blue"><span id="s">x</span></div>
    "#;
    let mut page = Page::parse(html, BrowserVersion::chrome());
    assert_eq!(color(&page, "#s"), "blue");

    let red = page.query_selector("#red").unwrap();
    let span = page.query_selector("#s").unwrap();
    page.append_child(red, span);
    assert_eq!(color(&page, "#s"), "red");
}

#[test]
fn test_appended_element_picks_up_rules() {
    let html = "<style>#main em { font-weight: 900 }</style><div id=main></div>";
    let mut page = Page::parse(html, BrowserVersion::firefox());
    let main = page.query_selector("#main").unwrap();

    let em = page.create_element("em");
    assert_eq!(page.computed_style(em).unwrap().get("font-weight"), "400");

    page.append_child(main, em);
    assert_eq!(page.computed_style(em).unwrap().get("font-weight"), "900");
}

#[test]
fn test_inline_edits_do_not_touch_cascade() {
    let html = "<style>p { color: red !important }</style><p id=p>x</p>";
    let mut page = Page::parse(html, BrowserVersion::chrome());
    let p = page.query_selector("#p").unwrap();

    page.set_style_property(p, "color", "blue", Priority::Normal);
    assert_eq!(color(&page, "#p"), "red");
    assert_eq!(page.style_property(p, "color"), "blue");

    page.set_style_property(p, "color", "blue", Priority::Important);
    assert_eq!(color(&page, "#p"), "blue");
}

#[test]
fn test_style_methods_on_unknown_node_are_harmless() {
    let mut page = Page::parse("<p id=p>hello</p>", BrowserVersion::chrome());
    let p = page.query_selector("#p").unwrap();
    let text = page.document().children(p)[0];

    assert_eq!(page.style_property(text, "color"), "");
    assert_eq!(page.css_text(text), "");
    assert_eq!(page.style_length(text), 0);
    assert_eq!(page.remove_style_property(text, "color"), "");
    page.set_style_property(text, "color", "red", Priority::Normal);
    assert_eq!(page.document().attribute(text, "style"), None);
}

#[test]
fn test_crate_level_parse() {
    let page = restyle_core::parse("<b id=b>x</b>", BrowserVersion::edge());
    assert_eq!(page.browser().nickname, "edge");
    assert_eq!(color(&page, "#b"), "rgb(0, 0, 0)");
}
