//! # vardump
//!
//! Renders arbitrary runtime values as nested HTML tables for ad-hoc
//! inspection during development.
//!
//! Values are classified into a closed set of shape categories (booleans,
//! null, indexed sequences, keyed mappings, structured values, opaque
//! handles and scalars) and each category has its own layout. Structured
//! values describe themselves through [`Inspect`]; result cursors and markup
//! trees get dedicated layouts through [`QueryResult`] and [`MarkupNode`].
//!
//! ```
//! use vardump::{render, Value};
//!
//! let value = Value::map([
//!     ("x", Value::from(1)),
//!     ("y", Value::list([Value::Bool(true), Value::Null])),
//! ]);
//! let html = render(&value);
//! assert!(html.starts_with("<table class=\"debug associativeArray\">"));
//! ```

pub mod capture;
pub mod error;
pub mod parser;
pub mod renderer;
pub mod value;

#[cfg(test)]
mod tests;

pub use capture::{splice_stylesheet, CaptureRegion, STYLESHEET};
pub use error::InspectError;
pub use parser::{DocBlock, DocParser, DocTag};
pub use renderer::{
    classify, select_strategy, HtmlRenderer, Render, RenderContext, ShapeCategory,
    StructuredStrategy, EMPTY_STRING_MARKER, UNAVAILABLE_DEFAULT,
};
pub use value::{
    CallableDescriptor, Field, Inspect, Key, MarkupNode, MethodOrigin, ParamDefault, Parameter,
    QueryResult, Resource, ResultSet, Structure, Value, Visibility, XmlElement,
};

/// Renders one value as an HTML fragment.
pub fn render(value: &Value) -> String {
    HtmlRenderer::new().render(value)
}
