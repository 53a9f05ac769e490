//! The precedence oracle (§3.4, §4.2): two fixed tables plus the
//! three-step `needs_parens` algorithm that decides when a child
//! expression must be wrapped in parentheses.

use crate::ast::Node;
use crate::error::{EmitError, EmitResult};

/// Expression-kind precedence (§3.4). Higher binds tighter.
pub(crate) fn expression_precedence(kind: &str) -> i32 {
    match kind {
        "Identifier" | "TemplateLiteral" | "TaggedTemplateExpression" | "ArrayExpression"
        | "ThisExpression" | "Super" | "MetaProperty" => 20,
        "CallExpression" | "MemberExpression" | "NewExpression" => 19,
        "Literal" | "ArrowFunctionExpression" => 18,
        "ClassExpression" | "FunctionExpression" | "ObjectExpression" => 17,
        "UpdateExpression" => 16,
        "UnaryExpression" | "AwaitExpression" => 15,
        "BinaryExpression" => 14,
        "LogicalExpression" => 13,
        "ConditionalExpression" => 4,
        "AssignmentExpression" | "AssignmentPattern" => 3,
        "YieldExpression" => 2,
        "RestElement" | "SpreadElement" => 1,
        "SequenceExpression" => 0,
        // Patterns share their expression counterpart's precedence.
        "ArrayPattern" => 20,
        "ObjectPattern" => 17,
        _ => 20,
    }
}

/// Binary/logical operator precedence (§3.4).
pub(crate) fn operator_precedence(operator: &str) -> i32 {
    match operator {
        "||" | "??" => 3,
        "&&" => 4,
        "|" => 5,
        "^" => 6,
        "&" => 7,
        "==" | "!=" | "===" | "!==" => 8,
        "<" | ">" | "<=" | ">=" | "in" | "instanceof" => 9,
        "<<" | ">>" | ">>>" => 10,
        "+" | "-" => 11,
        "*" | "/" | "%" => 12,
        "**" => 13,
        other => unreachable!("not a binary/logical operator: {other}"),
    }
}

/// Whether `child`, appearing as an operand of `parent` (whose operator is
/// `parent_operator` when `parent` is itself a `BinaryExpression` or
/// `LogicalExpression`), must be parenthesized. `is_right` is `true` when
/// `child` is the right-hand operand.
pub(crate) fn needs_parens(
    child: Node<'_>,
    parent_kind: &str,
    parent_operator: Option<&str>,
    is_right: bool,
) -> EmitResult<bool> {
    let child_kind = child.kind()?;
    let child_prec = expression_precedence(child_kind);
    let parent_prec = expression_precedence(parent_kind);

    if child_prec != parent_prec {
        return Ok(child_prec < parent_prec);
    }

    // Equal precedence: only binary/logical operators need the finer
    // operator-level comparison; every other equal-precedence pairing never
    // needs parens (e.g. two calls, two member accesses).
    if parent_prec != 13 && parent_prec != 14 {
        return Ok(false);
    }

    let child_operator = child.str_field("operator")?;
    let parent_operator = parent_operator.ok_or_else(|| EmitError::MissingField {
        kind: parent_kind.to_string(),
        field: "operator",
    })?;

    let child_op_prec = operator_precedence(child_operator);
    let parent_op_prec = operator_precedence(parent_operator);

    if child_operator == "**" && parent_operator == "**" {
        return Ok(!is_right);
    }

    Ok(if is_right {
        child_op_prec <= parent_op_prec
    } else {
        child_op_prec < parent_op_prec
    })
}

/// Simple precedence-threshold check used outside binary/logical operands:
/// callees/objects of `CallExpression`/`MemberExpression`/`NewExpression`,
/// and the argument of `UnaryExpression`/`UpdateExpression` (§4.5). Unlike
/// [`needs_parens`] this never looks at operators.
pub(crate) fn needs_parens_below(child_kind: &str, min_precedence: i32) -> bool {
    expression_precedence(child_kind) < min_precedence
}

/// Precedence of `ConditionalExpression` itself (§3.4), used to decide
/// whether a conditional's `test` must be wrapped (§4.5: wrapped when the
/// test's precedence is *at or below* this value, not strictly below).
pub(crate) const CONDITIONAL_PRECEDENCE: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(value: &serde_json::Value) -> Node<'_> {
        Node::new(value)
    }

    #[test]
    fn equal_precedence_non_operator_kinds_never_parenthesize() {
        let call = json!({"type": "CallExpression"});
        assert!(!needs_parens(node(&call), "MemberExpression", None, false).unwrap());
    }

    #[test]
    fn exponent_is_right_associative() {
        let inner = json!({"type": "BinaryExpression", "operator": "**"});
        // 2 ** (3 ** 4): inner as right operand of ** needs no parens.
        assert!(!needs_parens(node(&inner), "BinaryExpression", Some("**"), true).unwrap());
        // (2 ** 3) ** 4: inner as left operand of ** needs parens.
        assert!(needs_parens(node(&inner), "BinaryExpression", Some("**"), false).unwrap());
    }

    #[test]
    fn logical_or_inside_logical_and_keeps_parens() {
        let or_expr = json!({"type": "LogicalExpression", "operator": "||"});
        assert!(needs_parens(node(&or_expr), "LogicalExpression", Some("&&"), false).unwrap());
        assert!(needs_parens(node(&or_expr), "LogicalExpression", Some("&&"), true).unwrap());
    }

    #[test]
    fn same_operator_left_operand_never_needs_parens() {
        let plus = json!({"type": "BinaryExpression", "operator": "+"});
        assert!(!needs_parens(node(&plus), "BinaryExpression", Some("+"), false).unwrap());
        // a - (b - c): right operand of equal precedence, non-right-assoc.
        assert!(needs_parens(node(&plus), "BinaryExpression", Some("+"), true).unwrap());
    }

    #[test]
    fn lower_precedence_child_is_wrapped() {
        let plus = json!({"type": "BinaryExpression", "operator": "+"});
        assert!(needs_parens(node(&plus), "BinaryExpression", Some("*"), false).unwrap());
    }

    #[test]
    fn higher_precedence_child_is_not_wrapped() {
        let star = json!({"type": "BinaryExpression", "operator": "*"});
        assert!(!needs_parens(node(&star), "BinaryExpression", Some("+"), false).unwrap());
    }
}
