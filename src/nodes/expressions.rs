//! Expression (and pattern) formatters (§4.5).

use crate::ast::Node;
use crate::error::{EmitError, EmitResult};
use crate::precedence;
use crate::sequence::emit_sequence;
use crate::state::EmissionState;

pub(crate) fn variable_declarator(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.emit(node.field("id")?)?;
    if let Some(init) = node.field_opt("init") {
        f.write(" = ")?;
        f.emit(init)?;
    }
    Ok(())
}

pub(crate) fn identifier(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.write(node.str_field("name")?)
}

/// `raw` is preferred verbatim when present. A regex with no `raw` falls
/// back to `new RegExp(pattern, flags)`; everything else is JSON-serialized
/// from `value` (this is the only place a literal's numeric/string/boolean
/// value crosses into source text).
pub(crate) fn literal(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    if let Some(raw) = node.str_field_opt("raw") {
        return f.write(raw);
    }

    if let Some(regex) = node.field_opt("regex") {
        let pattern = regex.str_field("pattern")?;
        let flags = regex.str_field_opt("flags").unwrap_or("");
        let pattern_literal = serde_json::to_string(pattern)
            .map_err(|_| EmitError::MalformedField { kind: "Literal".to_string(), field: "regex" })?;
        f.write("new RegExp(")?;
        f.write(&pattern_literal)?;
        if !flags.is_empty() {
            let flags_literal = serde_json::to_string(flags)
                .map_err(|_| EmitError::MalformedField { kind: "Literal".to_string(), field: "regex" })?;
            f.write(", ")?;
            f.write(&flags_literal)?;
        }
        return f.write(")");
    }

    let value = node
        .raw()
        .get("value")
        .ok_or_else(|| EmitError::MissingField { kind: "Literal".to_string(), field: "value" })?;
    let serialized = serde_json::to_string(value)
        .map_err(|_| EmitError::MalformedField { kind: "Literal".to_string(), field: "value" })?;
    f.write(&serialized)
}

pub(crate) fn template_literal(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.write("`")?;
    let quasis: Vec<_> = node.array_field("quasis")?.collect();
    let expressions: Vec<_> = node.array_field("expressions")?.collect();
    for (idx, quasi) in quasis.iter().enumerate() {
        f.write(quasi.field("value")?.str_field("raw")?)?;
        if let Some(expr) = expressions.get(idx) {
            f.write("${")?;
            f.emit(*expr)?;
            f.write("}")?;
        }
    }
    f.write("`")
}

pub(crate) fn tagged_template_expression(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    let tag = node.field("tag")?;
    let wrap = precedence::needs_parens_below(tag.kind()?, precedence::expression_precedence("CallExpression"));
    if wrap {
        f.write("(")?;
        f.emit(tag)?;
        f.write(")")?;
    } else {
        f.emit(tag)?;
    }
    f.emit(node.field("quasi")?)
}

/// Shared by `ArrayExpression` and `ArrayPattern`. A trailing comma is
/// emitted only when the last element is itself an elision, to preserve
/// its hole count when the source is re-parsed.
pub(crate) fn array_expression(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.write("[")?;
    let elements: Vec<_> = node.elision_array_field("elements").collect();
    for (idx, element) in elements.iter().enumerate() {
        if idx > 0 {
            f.write(", ")?;
        }
        if let Some(element) = element {
            f.emit(*element)?;
        }
    }
    if matches!(elements.last(), Some(None)) {
        f.write(",")?;
    }
    f.write("]")
}

pub(crate) fn object_expression(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    let properties: Vec<_> = node.array_field("properties")?.collect();
    if properties.is_empty() {
        return f.write("{}");
    }
    f.write("{")?;
    f.line_end()?;
    {
        let mut inner = f.indented();
        for (idx, prop) in properties.iter().enumerate() {
            inner.write_indent()?;
            inner.emit(*prop)?;
            if idx + 1 < properties.len() {
                inner.write(",")?;
            }
            inner.line_end()?;
        }
    }
    f.write_indent()?;
    f.write("}")
}

/// `ObjectPattern`s (destructuring targets) render on a single line, unlike
/// the one-property-per-line `ObjectExpression`.
pub(crate) fn object_pattern(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    let properties: Vec<_> = node.array_field("properties")?.collect();
    if properties.is_empty() {
        return f.write("{}");
    }
    f.write("{ ")?;
    for (idx, prop) in properties.iter().enumerate() {
        if idx > 0 {
            f.write(", ")?;
        }
        f.emit(*prop)?;
    }
    f.write(" }")
}

pub(crate) fn property(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    let kind = node.str_field("kind")?;
    if node.bool_field("method") || kind == "get" || kind == "set" {
        return method_like_property(node, f);
    }
    if node.bool_field("shorthand") {
        return f.emit(node.field("value")?);
    }
    emit_key(node, f)?;
    f.write(": ")?;
    f.emit(node.field("value")?)
}

fn method_like_property(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    let value = node.field("value")?;
    let kind = node.str_field("kind")?;
    if value.bool_field("async") {
        f.write("async ")?;
    }
    if kind == "get" || kind == "set" {
        f.write(kind)?;
        f.write(" ")?;
    } else if value.bool_field("generator") {
        f.write("*")?;
    }
    emit_key(node, f)?;
    emit_sequence(value.array_field("params")?, f, |p, f| f.emit(p))?;
    f.write(" ")?;
    f.emit(value.field("body")?)
}

/// Shared by `Property` and [`crate::nodes::declarations::method_definition`]:
/// `[expr]` when `computed`, the bare key otherwise.
pub(crate) fn emit_key(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    if node.bool_field("computed") {
        f.write("[")?;
        f.emit(node.field("key")?)?;
        f.write("]")
    } else {
        f.emit(node.field("key")?)
    }
}

pub(crate) fn assignment_pattern(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.emit(node.field("left")?)?;
    f.write(" = ")?;
    f.emit(node.field("right")?)
}

/// Shared by `RestElement` and `SpreadElement`.
pub(crate) fn rest_or_spread(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.write("...")?;
    f.emit(node.field("argument")?)
}

pub(crate) fn unary_expression(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    let operator = node.str_field("operator")?;
    f.write(operator)?;
    if matches!(operator, "typeof" | "void" | "delete") {
        f.write(" ")?;
    }
    let argument = node.field("argument")?;
    let wrap =
        precedence::needs_parens_below(argument.kind()?, precedence::expression_precedence("UnaryExpression"));
    if wrap {
        f.write("(")?;
        f.emit(argument)?;
        f.write(")")
    } else {
        f.emit(argument)
    }
}

pub(crate) fn update_expression(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    let operator = node.str_field("operator")?;
    let argument = node.field("argument")?;
    let wrap =
        precedence::needs_parens_below(argument.kind()?, precedence::expression_precedence("UpdateExpression"));

    if node.bool_field("prefix") {
        f.write(operator)?;
    }
    if wrap {
        f.write("(")?;
        f.emit(argument)?;
        f.write(")")?;
    } else {
        f.emit(argument)?;
    }
    if !node.bool_field("prefix") {
        f.write(operator)?;
    }
    Ok(())
}

/// Shared by `BinaryExpression` and `LogicalExpression`. An `in` operator
/// always wraps the whole expression in parens, matching the original
/// generator: bare `a in b` would read as a `for-in` head wherever it
/// appears, not only directly inside a `for` statement's init clause.
pub(crate) fn binary_or_logical(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    let operator = node.str_field("operator")?;
    let kind = node.kind()?;
    let left = node.field("left")?;
    let right = node.field("right")?;

    let wrap_whole = operator == "in";
    if wrap_whole {
        f.write("(")?;
    }

    if precedence::needs_parens(left, kind, Some(operator), false)? {
        f.write("(")?;
        f.emit(left)?;
        f.write(")")?;
    } else {
        f.emit(left)?;
    }

    f.write(" ")?;
    f.write(operator)?;
    f.write(" ")?;

    if precedence::needs_parens(right, kind, Some(operator), true)? {
        f.write("(")?;
        f.emit(right)?;
        f.write(")")?;
    } else {
        f.emit(right)?;
    }

    if wrap_whole {
        f.write(")")?;
    }
    Ok(())
}

/// No precedence-driven wrap is needed on the right-hand side: a
/// `SequenceExpression` there already parenthesizes itself (§4.6), and
/// every other expression kind that can appear there — including another
/// `AssignmentExpression`, by right-associativity — reads unambiguously
/// bare.
pub(crate) fn assignment_expression(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.emit(node.field("left")?)?;
    f.write(" ")?;
    f.write(node.str_field("operator")?)?;
    f.write(" ")?;
    f.emit(node.field("right")?)
}

pub(crate) fn conditional_expression(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    let test = node.field("test")?;
    let wrap_test = precedence::expression_precedence(test.kind()?) <= precedence::CONDITIONAL_PRECEDENCE;
    if wrap_test {
        f.write("(")?;
        f.emit(test)?;
        f.write(")")?;
    } else {
        f.emit(test)?;
    }
    f.write(" ? ")?;
    f.emit(node.field("consequent")?)?;
    f.write(" : ")?;
    f.emit(node.field("alternate")?)
}

pub(crate) fn sequence_expression(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    emit_sequence(node.array_field("expressions")?, f, |item, f| f.emit(item))
}

pub(crate) fn call_expression(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    let callee = node.field("callee")?;
    let wrap =
        precedence::needs_parens_below(callee.kind()?, precedence::expression_precedence("CallExpression"));
    if wrap {
        f.write("(")?;
        f.emit(callee)?;
        f.write(")")?;
    } else {
        f.emit(callee)?;
    }
    if node.bool_field("optional") {
        f.write("?.")?;
    }
    emit_sequence(node.array_field("arguments")?, f, |arg, f| f.emit(arg))
}

/// True when `node`'s member-access chain bottoms out in a `CallExpression`
/// — a `new` callee shaped like that still needs parens even though its own
/// kind clears the precedence threshold, since `new a()()` parses `a()` as
/// the constructor rather than `a` itself.
fn callee_contains_call(node: Node<'_>) -> bool {
    match node.kind() {
        Ok("CallExpression") => true,
        Ok("MemberExpression") => node.field("object").map(callee_contains_call).unwrap_or(false),
        _ => false,
    }
}

pub(crate) fn new_expression(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.write("new ")?;
    let callee = node.field("callee")?;
    let wrap = precedence::needs_parens_below(callee.kind()?, precedence::expression_precedence("CallExpression"))
        || callee_contains_call(callee);
    if wrap {
        f.write("(")?;
        f.emit(callee)?;
        f.write(")")?;
    } else {
        f.emit(callee)?;
    }
    emit_sequence(node.array_field("arguments")?, f, |arg, f| f.emit(arg))
}

pub(crate) fn member_expression(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    let object = node.field("object")?;
    let wrap =
        precedence::needs_parens_below(object.kind()?, precedence::expression_precedence("MemberExpression"));
    if wrap {
        f.write("(")?;
        f.emit(object)?;
        f.write(")")?;
    } else {
        f.emit(object)?;
    }

    let optional = node.bool_field("optional");
    if node.bool_field("computed") {
        f.write(if optional { "?.[" } else { "[" })?;
        f.emit(node.field("property")?)?;
        f.write("]")
    } else {
        f.write(if optional { "?." } else { "." })?;
        f.emit(node.field("property")?)
    }
}

pub(crate) fn meta_property(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.emit(node.field("meta")?)?;
    f.write(".")?;
    f.emit(node.field("property")?)
}

/// A single bare `Identifier` parameter elides its surrounding parens
/// (`x => x`); everything else — zero params, patterns, defaults, rest —
/// goes through the ordinary parenthesized sequence.
pub(crate) fn arrow_function_expression(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    if node.bool_field("async") {
        f.write("async ")?;
    }
    let params: Vec<_> = node.array_field("params")?.collect();
    if params.len() == 1 && params[0].kind()? == "Identifier" {
        f.emit(params[0])?;
    } else {
        emit_sequence(params.into_iter(), f, |p, f| f.emit(p))?;
    }
    f.write(" => ")?;

    let body = node.field("body")?;
    if node.bool_field("expression") && body.kind()? == "ObjectExpression" {
        f.write("(")?;
        f.emit(body)?;
        f.write(")")
    } else {
        f.emit(body)
    }
}

pub(crate) fn yield_expression(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.write("yield")?;
    if node.bool_field("delegate") {
        f.write("*")?;
    }
    if let Some(argument) = node.field_opt("argument") {
        f.write(" ")?;
        f.emit(argument)?;
    }
    Ok(())
}

pub(crate) fn await_expression(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.write("await ")?;
    let argument = node.field("argument")?;
    let wrap =
        precedence::needs_parens_below(argument.kind()?, precedence::expression_precedence("AwaitExpression"));
    if wrap {
        f.write("(")?;
        f.emit(argument)?;
        f.write(")")
    } else {
        f.emit(argument)
    }
}
