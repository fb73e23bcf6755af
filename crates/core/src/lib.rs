pub mod browser;
pub mod css;
pub mod dom;
pub mod error;
pub mod output;
pub mod page;

pub use browser::{BrowserFamily, BrowserFeature, BrowserVersion, Viewport};
pub use error::Error;
pub use page::Page;

/// Parse an HTML string and resolve its styles for `browser`.
/// This is the primary entry point for restyle-core.
pub fn parse(html: &str, browser: BrowserVersion) -> Page {
    Page::parse(html, browser)
}
