//! CSS value resolution: declaration stores, cascade, computed style and
//! length conversion.

pub mod cascade;
pub mod computed;
pub mod declaration;
pub mod inline;
pub mod length;
pub mod properties;
pub mod selector;
pub mod style;

pub use cascade::CascadeAccumulator;
pub use computed::{cascade_winner, ComputedStyle};
pub use declaration::{parse_declaration_block, Declaration, IndexCounter, Priority, Specificity};
pub use inline::InlineDeclarations;
pub use length::{pixel_value, pixel_value_for, PixelAccessor, PropertyPixels};
pub use properties::{PropertyDefinition, PropertyTable};
pub use selector::{parse_stylesheet, CssRule};
pub use style::ElementStyle;
