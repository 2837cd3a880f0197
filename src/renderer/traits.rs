/// Per-call state threaded through a render.
///
/// Only tracks how deep the current value sits below the top-level one; it
/// never changes what gets emitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderContext {
    pub depth: usize,
}

impl RenderContext {
    pub fn new() -> Self {
        Self { depth: 0 }
    }

    pub fn with_depth(&self, depth: usize) -> Self {
        Self { depth }
    }

    /// Context for a child of the current value.
    pub fn descend(&self) -> Self {
        self.with_depth(self.depth + 1)
    }
}

/// Core rendering trait: produce an HTML fragment.
pub trait Render {
    fn render(&self, context: &RenderContext) -> String;
}
