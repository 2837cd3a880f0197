use tracing::trace;

use crate::renderer::classify::*;
use crate::renderer::renders::*;
use crate::renderer::traits::*;
use crate::value::Value;

/// Renders values as nested debug tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, value: &Value) -> String {
        value.render(&RenderContext::new())
    }
}

/// Recursive entry point: classify, then hand off to the category renderer.
impl Render for Value {
    fn render(&self, context: &RenderContext) -> String {
        let shape = Shape::of(self);
        trace!(category = ?shape.category(), depth = context.depth, "rendering value");

        match shape {
            Shape::Boolean(value) => render_boolean(value),
            Shape::Null => render_null(),
            Shape::IndexedSequence(entries) => render_container(entries, true, context),
            Shape::KeyedMapping(entries) => render_container(entries, false, context),
            Shape::Structured(object) => render_structured(object, context),
            Shape::OpaqueHandle(resource) => resource.render(context),
            Shape::Scalar(scalar) => render_scalar(scalar),
        }
    }
}
