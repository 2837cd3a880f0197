//! Scoped capture of dump output.
//!
//! A [`CaptureRegion`] collects page text and rendered dumps, then writes
//! them to its sink with the debug stylesheet spliced into the document.
//! Output is emitted on [`CaptureRegion::finish`] or, failing that, when the
//! region is dropped.

use std::fmt;
use std::io::{self, Write};

use tracing::{debug, warn};

use crate::renderer::HtmlRenderer;
use crate::value::Value;

/// Default styling for every class the renderer emits.
pub const STYLESHEET: &str = include_str!("../assets/dump.css");

const CLOSING_HEAD_TAG: &str = "</head>";
const CLOSING_BODY_TAG: &str = "</body>";

/// Inserts `stylesheet` right before the first `</head>`, else before the
/// first `</body>`, else at the end. Tag matching ignores ASCII case.
pub fn splice_stylesheet(document: &str, stylesheet: &str) -> String {
    // ASCII lowering keeps byte offsets intact
    let lowered = document.to_ascii_lowercase();
    let position = lowered
        .find(CLOSING_HEAD_TAG)
        .or_else(|| lowered.find(CLOSING_BODY_TAG));

    let mut output = String::with_capacity(document.len() + stylesheet.len());
    match position {
        Some(position) => {
            output.push_str(&document[..position]);
            output.push_str(stylesheet);
            output.push_str(&document[position..]);
        }
        None => {
            output.push_str(document);
            output.push_str(stylesheet);
        }
    }
    output
}

pub struct CaptureRegion<W: Write> {
    buffer: String,
    sink: Option<W>,
    stylesheet: Option<String>,
    renderer: HtmlRenderer,
}

impl<W: Write> CaptureRegion<W> {
    pub fn new(sink: W) -> Self {
        Self {
            buffer: String::new(),
            sink: Some(sink),
            stylesheet: Some(STYLESHEET.to_string()),
            renderer: HtmlRenderer::new(),
        }
    }

    pub fn with_stylesheet(mut self, stylesheet: impl Into<String>) -> Self {
        self.stylesheet = Some(stylesheet.into());
        self
    }

    /// Emit the captured text unchanged.
    pub fn without_stylesheet(mut self) -> Self {
        self.stylesheet = None;
        self
    }

    pub fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Renders `value` into the captured document.
    pub fn dump(&mut self, value: &Value) {
        let fragment = self.renderer.render(value);
        self.buffer.push_str(&fragment);
    }

    pub fn captured(&self) -> &str {
        &self.buffer
    }

    /// Splices the stylesheet, writes everything out and returns the sink.
    pub fn finish(mut self) -> io::Result<W> {
        match self.emit()? {
            Some(sink) => Ok(sink),
            None => Err(io::Error::other("capture region was already emitted")),
        }
    }

    fn emit(&mut self) -> io::Result<Option<W>> {
        let Some(mut sink) = self.sink.take() else {
            return Ok(None);
        };

        let output = match &self.stylesheet {
            Some(stylesheet) => splice_stylesheet(&self.buffer, stylesheet),
            None => std::mem::take(&mut self.buffer),
        };
        debug!(bytes = output.len(), "emitting captured output");

        sink.write_all(output.as_bytes())?;
        sink.flush()?;
        Ok(Some(sink))
    }
}

impl<W: Write> fmt::Write for CaptureRegion<W> {
    fn write_str(&mut self, text: &str) -> fmt::Result {
        self.push_str(text);
        Ok(())
    }
}

impl<W: Write> Drop for CaptureRegion<W> {
    fn drop(&mut self) {
        if let Err(error) = self.emit() {
            warn!(%error, "failed to flush captured output");
        }
    }
}
