use rustc_hash::FxHashMap;

use crate::ast::Node;
use crate::error::EmitResult;
use crate::state::EmissionState;

type OverlayFormatter = dyn Fn(Node<'_>, &mut EmissionState<'_>) -> EmitResult<()>;

/// A runtime overlay on top of the default dispatch table (§6.1's
/// `generator` option). A kind missing from the overlay falls through to
/// the default formatter for that kind.
#[derive(Default)]
pub struct Overlay {
    formatters: FxHashMap<&'static str, Box<OverlayFormatter>>,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the formatter used for `kind`.
    pub fn on(
        mut self,
        kind: &'static str,
        formatter: impl Fn(Node<'_>, &mut EmissionState<'_>) -> EmitResult<()> + 'static,
    ) -> Self {
        self.formatters.insert(kind, Box::new(formatter));
        self
    }

    pub(crate) fn get(&self, kind: &str) -> Option<&OverlayFormatter> {
        self.formatters.get(kind).map(|b| b.as_ref())
    }
}

/// Options recognized by [`crate::render`] / [`crate::render_to_string`],
/// mirroring §6.1 of the specification.
pub struct RenderOptions {
    /// Indentation unit. Default: one tab.
    pub indent: String,
    /// Line terminator. Default: `"\n"`.
    pub line_end: String,
    /// Initial indent depth. Default: 0.
    pub starting_indent_level: usize,
    /// Whether to emit attached comments. Default: `false`.
    pub comments: bool,
    /// Overlay dispatch table. Default: none.
    pub generator: Option<Overlay>,
    /// Optional source-map sink.
    pub source_map: Option<Box<dyn crate::sink::SourceMapSink>>,
    /// Optional name recorded alongside source-map entries, e.g. the path
    /// the AST was parsed from.
    pub source_file: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
            line_end: "\n".to_string(),
            starting_indent_level: 0,
            comments: false,
            generator: None,
            source_map: None,
            source_file: None,
        }
    }
}

impl RenderOptions {
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_line_end(mut self, line_end: impl Into<String>) -> Self {
        self.line_end = line_end.into();
        self
    }

    pub fn with_starting_indent_level(mut self, level: usize) -> Self {
        self.starting_indent_level = level;
        self
    }

    pub fn with_comments(mut self, comments: bool) -> Self {
        self.comments = comments;
        self
    }

    pub fn with_generator(mut self, generator: Overlay) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn with_source_map(
        mut self,
        sink: impl crate::sink::SourceMapSink + 'static,
        source_file: impl Into<String>,
    ) -> Self {
        self.source_map = Some(Box::new(sink));
        self.source_file = Some(source_file.into());
        self
    }
}
