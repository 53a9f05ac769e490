//! A JavaScript source code generator for ESTree-shaped ASTs.
//!
//! ## How it works
//!
//! The generator is node based: each node `type` has a formatter that knows
//! how to write that one kind of node, recursing into [`EmissionState::emit`]
//! for any child node it holds. There is no intermediate document/IR layer —
//! a node is written to the [`Sink`] directly, depth first, as soon as its
//! formatter runs. Indentation is the only piece of state a formatter needs
//! from its caller, and it is restored automatically on every exit path
//! (including an early `?`) by the RAII guard returned from
//! [`EmissionState::indented`]. A `for` head's own `VariableDeclaration` is
//! written through a dedicated head formatter instead of a flag threaded
//! through the init subtree, so the suppressed `;` never leaks into a
//! nested statement the init happens to contain.
//!
//! This is deliberately not a pretty-printer: there is no line-width budget,
//! no grouping/breaking heuristic, and no reflowing of existing source.
//! Indentation and line endings are fixed by [`RenderOptions`]; everything
//! else about the output shape is dictated by the node kind being emitted.
//!
//! ## Extending the default table
//!
//! The [`RenderOptions::generator`] option takes an [`Overlay`]: a table of
//! closures, keyed by node `type`, consulted before the built-in dispatch
//! table on every node. A kind absent from the overlay falls through to the
//! default formatter for that kind, so an overlay can override a single node
//! type without reimplementing everything around it.
//!
//! ## Input shape
//!
//! The AST is taken as a borrowed [`serde_json::Value`], wrapped by
//! [`Node`]. This crate does not parse JavaScript and does not define its
//! own typed AST — it renders whatever ESTree-shaped tree the caller already
//! has (from a parser, a transform pass, or hand-built JSON), and reports an
//! [`EmitError`] for a node whose `type` is unrecognized or whose shape is
//! missing or malformed a required field, rather than panicking.
//!
//! ## Errors
//!
//! All fallible paths surface as [`EmitError`] via [`EmitResult`]: an
//! unknown node kind, a missing or malformed required field, or a failure
//! writing to the underlying sink.

mod ast;
mod comments;
mod dispatch;
mod error;
mod nodes;
mod options;
mod precedence;
mod sequence;
mod sink;
mod state;

pub use ast::Node;
pub use error::{EmitError, EmitResult};
pub use options::{Overlay, RenderOptions};
pub use sink::{IoWriteSink, Position, Sink, SourceMapSink};
pub use state::EmissionState;

use serde_json::Value;

/// Renders `ast` to `sink` according to `options`.
///
/// `ast` is the root node to render — typically a `Program`, but any
/// ESTree-shaped node is accepted, which is useful for rendering a single
/// expression or statement in isolation (e.g. for a codemod that only
/// touched one declaration). `options` is taken mutably because a
/// configured [`SourceMapSink`] accumulates entries as rendering proceeds.
pub fn render(ast: &Value, options: &mut RenderOptions, sink: &mut dyn Sink) -> EmitResult<()> {
    let mut state = state::EmissionState::new(
        sink,
        options.indent.clone(),
        options.line_end.clone(),
        options.starting_indent_level,
        options.comments,
        options.source_map.as_deref_mut(),
        options.source_file.clone(),
        options.generator.as_ref(),
    );

    let node = ast::Node::new(ast);
    state.emit(node)
}

/// Renders `ast` to an owned `String` according to `options`.
pub fn render_to_string(ast: &Value, options: &mut RenderOptions) -> EmitResult<String> {
    let mut out = String::new();
    render(ast, options, &mut out)?;
    Ok(out)
}
