//! Statement formatters (§4.3).

use crate::ast::Node;
use crate::comments::emit_comments;
use crate::error::EmitResult;
use crate::precedence;
use crate::state::EmissionState;

pub(crate) fn program(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    emit_comments(node.leading_comments(), f)?;
    for stmt in node.array_field("body")? {
        f.write_indent()?;
        f.emit(stmt)?;
        f.line_end()?;
    }
    emit_comments(node.trailing_comments(), f)
}

/// Shared by `BlockStatement` and `ClassBody`.
pub(crate) fn block_statement(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.write("{")?;

    let body: Vec<_> = node.array_field("body")?.collect();
    let comments: Vec<_> = node.leading_comments().collect();
    let expand = !body.is_empty() || (f.comments_enabled() && !comments.is_empty());

    if !expand {
        return f.write("}");
    }

    f.line_end()?;
    {
        let mut inner = f.indented();
        emit_comments(comments.into_iter(), &mut inner)?;
        for stmt in body {
            inner.write_indent()?;
            inner.emit(stmt)?;
            inner.line_end()?;
        }
    }
    f.write_indent()?;
    f.write("}")
}

pub(crate) fn if_statement(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.write("if (")?;
    f.emit(node.field("test")?)?;
    f.write(") ")?;
    f.emit(node.field("consequent")?)?;
    if let Some(alternate) = node.field_opt("alternate") {
        f.write(" else ")?;
        f.emit(alternate)?;
    }
    Ok(())
}

pub(crate) fn for_statement(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.write("for (")?;
    if let Some(init) = node.field_opt("init") {
        emit_for_head(init, f)?;
    }
    f.write(";")?;
    if let Some(test) = node.field_opt("test") {
        f.write(" ")?;
        f.emit(test)?;
    }
    f.write(";")?;
    if let Some(update) = node.field_opt("update") {
        f.write(" ")?;
        f.emit(update)?;
    }
    f.write(") ")?;
    f.emit(node.field("body")?)
}

/// Shared by `ForInStatement` and `ForOfStatement`, distinguished by
/// comparing the full kind string rather than peeking a character of it.
pub(crate) fn for_in_of_statement(kind: &str, node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    let keyword = if kind == "ForInStatement" { " in " } else { " of " };
    f.write("for (")?;
    emit_for_head(node.field("left")?, f)?;
    f.write(keyword)?;
    f.emit(node.field("right")?)?;
    f.write(") ")?;
    f.emit(node.field("body")?)
}

/// Emits a `for`/`for-in`/`for-of` head's `init`/`left` node. A
/// `VariableDeclaration` here is written without its trailing `;` (the
/// `for` head supplies its own); anything else — an existing binding
/// expression — is emitted exactly as it would be anywhere else, since only
/// the declaration itself carries a semicolon to suppress.
fn emit_for_head(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    if node.kind()? == "VariableDeclaration" {
        variable_declaration_head(node, f)
    } else {
        f.emit(node)
    }
}

pub(crate) fn switch_statement(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.write("switch (")?;
    f.emit(node.field("discriminant")?)?;
    f.write(") {")?;
    f.line_end()?;
    {
        let mut cases_level = f.indented();
        for case in node.array_field("cases")? {
            cases_level.write_indent()?;
            switch_case(case, &mut cases_level)?;
        }
    }
    f.write_indent()?;
    f.write("}")
}

fn switch_case(case: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    match case.field_opt("test") {
        Some(test) => {
            f.write("case ")?;
            f.emit(test)?;
            f.write(":")?;
        }
        None => f.write("default:")?,
    }
    f.line_end()?;
    let mut body_level = f.indented();
    for stmt in case.array_field("consequent")? {
        body_level.write_indent()?;
        body_level.emit(stmt)?;
        body_level.line_end()?;
    }
    Ok(())
}

pub(crate) fn try_statement(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.write("try ")?;
    f.emit(node.field("block")?)?;
    if let Some(handler) = node.field_opt("handler") {
        f.write(" catch ")?;
        if let Some(param) = handler.field_opt("param") {
            f.write("(")?;
            f.emit(param)?;
            f.write(") ")?;
        }
        f.emit(handler.field("body")?)?;
    }
    if let Some(finalizer) = node.field_opt("finalizer") {
        f.write(" finally ")?;
        f.emit(finalizer)?;
    }
    Ok(())
}

pub(crate) fn while_statement(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.write("while (")?;
    f.emit(node.field("test")?)?;
    f.write(") ")?;
    f.emit(node.field("body")?)
}

pub(crate) fn do_while_statement(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.write("do ")?;
    f.emit(node.field("body")?)?;
    f.write(" while (")?;
    f.emit(node.field("test")?)?;
    f.write(");")
}

pub(crate) fn return_statement(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.write("return")?;
    if let Some(argument) = node.field_opt("argument") {
        f.write(" ")?;
        f.emit(argument)?;
    }
    f.write(";")
}

pub(crate) fn throw_statement(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.write("throw ")?;
    f.emit(node.field("argument")?)?;
    f.write(";")
}

pub(crate) fn break_continue_statement(
    keyword: &str,
    node: Node<'_>,
    f: &mut EmissionState<'_>,
) -> EmitResult<()> {
    f.write(keyword)?;
    if let Some(label) = node.field_opt("label") {
        f.write(" ")?;
        f.emit(label)?;
    }
    f.write(";")
}

pub(crate) fn labeled_statement(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.emit(node.field("label")?)?;
    f.write(": ")?;
    f.emit(node.field("body")?)
}

pub(crate) fn with_statement(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.write("with (")?;
    f.emit(node.field("object")?)?;
    f.write(") ")?;
    f.emit(node.field("body")?)
}

pub(crate) fn empty_statement(f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.write(";")
}

pub(crate) fn debugger_statement(f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.write("debugger;")
}

pub(crate) fn expression_statement(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    let expr = node.field("expression")?;
    let kind = expr.kind()?;

    // `FunctionExpression`/`ClassExpression`/`ObjectExpression` (precedence
    // 17) read as a declaration or block at statement head and need parens.
    // `ArrowFunctionExpression` gets the same treatment even though its own
    // precedence (18) is higher, matching the original generator's
    // statement-head handling.
    let wraps_as_object_pattern_assignment = kind == "AssignmentExpression"
        && expr.field("left")?.kind()? == "ObjectPattern";
    let wrap = precedence::expression_precedence(kind) == 17
        || kind == "ArrowFunctionExpression"
        || wraps_as_object_pattern_assignment;

    if wrap {
        f.write("(")?;
        f.emit(expr)?;
        f.write(")")?;
    } else {
        f.emit(expr)?;
    }
    f.write(";")
}

pub(crate) fn variable_declaration(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    variable_declaration_head(node, f)?;
    f.write(";")
}

/// The `kind` keyword and declarator list shared by `variable_declaration`
/// and a `for`/`for-in`/`for-of` head's `VariableDeclaration`, without a
/// trailing `;` — used so the semicolon suppression never outlives emitting
/// this one node, unlike a flag held across the whole init subtree.
fn variable_declaration_head(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.write(node.str_field("kind")?)?;
    f.write(" ")?;
    for (idx, declarator) in node.array_field("declarations")?.enumerate() {
        if idx > 0 {
            f.write(", ")?;
        }
        f.emit(declarator)?;
    }
    Ok(())
}
