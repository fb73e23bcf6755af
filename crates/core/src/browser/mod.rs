//! Browser profiles: which engine is being emulated, which quirks apply,
//! and the window size used for window-level pixel fallbacks.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Engine family, used to pick per-browser default values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserFamily {
    Chrome,
    Firefox,
    Edge,
    #[serde(rename = "ie")]
    InternetExplorer,
}

/// Compatibility switches consulted by style resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrowserFeature {
    /// Computed style of an element outside the document resolves to `""`.
    ComputedStyleEmptyWhenDetached,
}

/// Window dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1256,
            height: 605,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserVersion {
    pub family: BrowserFamily,
    pub nickname: String,
    #[serde(default)]
    pub features: BTreeSet<BrowserFeature>,
    #[serde(default)]
    pub viewport: Viewport,
}

impl BrowserVersion {
    pub fn new(family: BrowserFamily, nickname: &str) -> Self {
        Self {
            family,
            nickname: nickname.to_string(),
            features: BTreeSet::new(),
            viewport: Viewport::default(),
        }
    }

    pub fn chrome() -> Self {
        Self::new(BrowserFamily::Chrome, "chrome")
            .with_feature(BrowserFeature::ComputedStyleEmptyWhenDetached)
    }

    pub fn edge() -> Self {
        Self::new(BrowserFamily::Edge, "edge")
            .with_feature(BrowserFeature::ComputedStyleEmptyWhenDetached)
    }

    pub fn firefox() -> Self {
        Self::new(BrowserFamily::Firefox, "firefox")
    }

    pub fn internet_explorer() -> Self {
        Self::new(BrowserFamily::InternetExplorer, "ie")
    }

    /// Look up a built-in profile by nickname (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self, Error> {
        match name.trim().to_ascii_lowercase().as_str() {
            "chrome" => Ok(Self::chrome()),
            "edge" => Ok(Self::edge()),
            "firefox" | "ff" => Ok(Self::firefox()),
            "ie" | "internet-explorer" => Ok(Self::internet_explorer()),
            _ => Err(Error::UnknownBrowser(name.to_string())),
        }
    }

    /// Load a profile from JSON, e.g.
    /// `{"family": "chrome", "nickname": "c", "features": ["computed-style-empty-when-detached"]}`.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &std::path::Path) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn with_feature(mut self, feature: BrowserFeature) -> Self {
        self.features.insert(feature);
        self
    }

    pub fn without_feature(mut self, feature: BrowserFeature) -> Self {
        self.features.remove(&feature);
        self
    }

    pub fn with_viewport(mut self, width: i32, height: i32) -> Self {
        self.viewport = Viewport { width, height };
        self
    }

    pub fn has_feature(&self, feature: BrowserFeature) -> bool {
        self.features.contains(&feature)
    }
}

impl Default for BrowserVersion {
    fn default() -> Self {
        Self::chrome()
    }
}
