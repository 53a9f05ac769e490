use thiserror::Error;

/// Everything that can go wrong while turning a trusted AST into source text.
///
/// The AST is assumed to be ESTree-conformant; the first two variants exist
/// for callers who hand the emitter a tree produced by a foreign or
/// hand-built source, not to recover from ordinary malformed input.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("no formatter for node kind {kind:?}")]
    UnknownKind { kind: String },

    #[error("node of kind {kind:?} is missing required field {field:?}")]
    MissingField { kind: String, field: &'static str },

    #[error("node of kind {kind:?} has a malformed {field:?} field")]
    MalformedField { kind: String, field: &'static str },

    #[error("output sink failed")]
    Sink(#[from] std::io::Error),
}

pub type EmitResult<T = ()> = Result<T, EmitError>;
