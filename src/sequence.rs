//! The sequence formatter (§4.6): `(x, y, z)`, no spaces after `(` or
//! before `)`, `", "` between elements, `()` for an empty sequence.

use crate::ast::Node;
use crate::error::EmitResult;
use crate::state::EmissionState;

/// Emits a parenthesized, comma-separated list of nodes, each rendered via
/// `emit_item`. Used for call/new arguments and function parameters.
pub(crate) fn emit_sequence<'a>(
    items: impl Iterator<Item = Node<'a>>,
    f: &mut EmissionState<'_>,
    mut emit_item: impl FnMut(Node<'a>, &mut EmissionState<'_>) -> EmitResult<()>,
) -> EmitResult<()> {
    f.write("(")?;
    for (idx, item) in items.enumerate() {
        if idx > 0 {
            f.write(", ")?;
        }
        emit_item(item, f)?;
    }
    f.write(")")
}
