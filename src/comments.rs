//! The comment formatter (§4.7): emits a sequence of leading/trailing
//! comments at a given indentation, re-indenting multi-line block comments
//! so their internal structure survives a change in indent depth.

use crate::ast::Node;
use crate::error::EmitResult;
use crate::state::EmissionState;

/// Emits `comments` (each already carrying its own `{ type, value }`) one
/// per line at the current indent. Does nothing if comment emission is
/// disabled.
pub(crate) fn emit_comments<'a>(
    comments: impl Iterator<Item = Node<'a>>,
    f: &mut EmissionState<'_>,
) -> EmitResult<()> {
    if !f.comments_enabled() {
        return Ok(());
    }
    for comment in comments {
        emit_one(comment, f)?;
    }
    Ok(())
}

fn emit_one(comment: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    let kind = comment.kind()?;
    let value = comment.str_field("value")?;
    let indent = f.indent_unit().repeat(f.indent_level());

    if kind.starts_with('L') {
        f.write(&indent)?;
        f.write("// ")?;
        f.write(value.trim())?;
        f.write("\n")?;
    } else {
        let reindented = reindent_block(value, &indent);
        f.write(&indent)?;
        f.write("/*")?;
        f.write(&reindented)?;
        f.write("*/")?;
        let line_end = f.line_end_str().to_string();
        f.write(&line_end)?;
    }
    Ok(())
}

/// Re-indents a block comment's body to `indent` (§4.7's re-indent
/// algorithm). Trims trailing whitespace; if the body spans multiple
/// lines, the run of spaces/tabs right after the first newline is taken as
/// the comment's own internal indent prefix and stripped before rejoining
/// with `indent`. A single-line body is returned with no transformation.
fn reindent_block(body: &str, indent: &str) -> String {
    let trimmed_end = body.trim_end();

    let Some(first_newline) = trimmed_end.find('\n') else {
        return trimmed_end.to_string();
    };

    let after_newline = &trimmed_end[first_newline + 1..];
    let prefix_len = after_newline
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .map(char::len_utf8)
        .sum::<usize>();
    let prefix = &after_newline[..prefix_len];

    let trimmed = trimmed_end.trim_start();
    let separator = format!("\n{prefix}");
    let joined = format!("\n{indent}");

    if prefix.is_empty() {
        trimmed.replace('\n', &joined)
    } else {
        trimmed.split(&separator).collect::<Vec<_>>().join(&joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_body_is_untouched() {
        assert_eq!(reindent_block(" hello ", "\t"), "hello");
    }

    #[test]
    fn multi_line_body_uses_second_line_indent() {
        let body = "*\n     * one\n     * two\n     ";
        assert_eq!(reindent_block(body, "\t"), "*\n\t* one\n\t* two");
    }

    #[test]
    fn multi_line_body_with_no_common_prefix_just_prefixes_each_line() {
        let body = "line one\nline two";
        assert_eq!(reindent_block(body, "  "), "line one\n  line two");
    }
}
