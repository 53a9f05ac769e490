//! The emission state threaded through the traversal (§3.3): the output
//! sink, indentation, line terminator, the optional source-map sink, and —
//! since this is also the handle every formatter recurses through — the
//! optional overlay dispatch table (§4.1, §6.1's `generator` option).

use std::ops::{Deref, DerefMut};

use crate::ast::Node;
use crate::dispatch;
use crate::error::EmitResult;
use crate::options::Overlay;
use crate::sink::{GeneratedPositionTracker, Position, Sink, SourceMapSink};

pub struct EmissionState<'s> {
    sink: &'s mut dyn Sink,
    indent: String,
    line_end: String,
    indent_level: usize,
    write_comments: bool,
    source_map: Option<&'s mut dyn SourceMapSink>,
    source_file: Option<String>,
    generated_position: GeneratedPositionTracker,
    overlay: Option<&'s Overlay>,
}

impl<'s> EmissionState<'s> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        sink: &'s mut dyn Sink,
        indent: String,
        line_end: String,
        starting_indent_level: usize,
        write_comments: bool,
        source_map: Option<&'s mut dyn SourceMapSink>,
        source_file: Option<String>,
        overlay: Option<&'s Overlay>,
    ) -> Self {
        Self {
            sink,
            indent,
            line_end,
            indent_level: starting_indent_level,
            write_comments,
            source_map,
            source_file,
            generated_position: GeneratedPositionTracker::default(),
            overlay,
        }
    }

    /// Writes raw text to the sink, advancing the tracked generated
    /// position (§6.2).
    pub(crate) fn write(&mut self, text: &str) -> EmitResult<()> {
        self.sink.write_str(text)?;
        self.generated_position.advance(text);
        Ok(())
    }

    pub(crate) fn write_indent(&mut self) -> EmitResult<()> {
        let indent = self.indent.repeat(self.indent_level);
        self.write(&indent)
    }

    pub(crate) fn line_end(&mut self) -> EmitResult<()> {
        let line_end = self.line_end.clone();
        self.write(&line_end)
    }

    pub(crate) fn indent_unit(&self) -> &str {
        &self.indent
    }

    pub(crate) fn line_end_str(&self) -> &str {
        &self.line_end
    }

    pub(crate) fn indent_level(&self) -> usize {
        self.indent_level
    }

    pub(crate) fn comments_enabled(&self) -> bool {
        self.write_comments
    }

    fn current_generated_position(&self) -> Position {
        self.generated_position.current
    }

    fn note_source_position(&mut self, original: Option<Position>) {
        let generated = self.current_generated_position();
        if let Some(map) = self.source_map.as_deref_mut() {
            map.add(self.source_file.as_deref(), original, generated);
        }
    }

    /// Enters one indent level; the returned guard restores it on drop.
    pub(crate) fn indented(&mut self) -> IndentGuard<'_, 's> {
        let previous = self.indent_level;
        self.indent_level += 1;
        IndentGuard { state: self, previous }
    }

    /// The central dispatch entry point: looks the node's kind up in the
    /// overlay (if any), falling back to the default table. Every
    /// recursive call into a child node goes through here.
    pub fn emit(&mut self, node: Node<'_>) -> EmitResult<()> {
        self.note_source_position(node.start_position());
        let kind = node.kind()?;
        if let Some(formatter) = self.overlay.and_then(|o| o.get(kind)) {
            return formatter(node, self);
        }
        dispatch::emit_default(kind, node, self)
    }
}

/// Restores `indent_level` to its value before [`EmissionState::indented`]
/// was called.
pub(crate) struct IndentGuard<'a, 's> {
    state: &'a mut EmissionState<'s>,
    previous: usize,
}

impl<'s> Deref for IndentGuard<'_, 's> {
    type Target = EmissionState<'s>;
    fn deref(&self) -> &Self::Target {
        self.state
    }
}

impl<'s> DerefMut for IndentGuard<'_, 's> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.state
    }
}

impl Drop for IndentGuard<'_, '_> {
    fn drop(&mut self) {
        self.state.indent_level = self.previous;
    }
}
