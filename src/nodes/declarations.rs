//! Declaration formatters (§4.4): functions, classes, and the ES module
//! import/export forms.

use crate::ast::Node;
use crate::error::EmitResult;
use crate::nodes::expressions::emit_key;
use crate::sequence::emit_sequence;
use crate::state::EmissionState;

/// Shared by `FunctionDeclaration` and `FunctionExpression`.
pub(crate) fn function(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    if node.bool_field("async") {
        f.write("async ")?;
    }
    f.write("function")?;
    if node.bool_field("generator") {
        f.write("*")?;
    }
    f.write(" ")?;
    if let Some(id) = node.field_opt("id") {
        f.emit(id)?;
    }
    emit_sequence(node.array_field("params")?, f, |p, f| f.emit(p))?;
    f.write(" ")?;
    f.emit(node.field("body")?)
}

/// Shared by `ClassDeclaration` and `ClassExpression`.
pub(crate) fn class_declaration(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.write("class")?;
    if let Some(id) = node.field_opt("id") {
        f.write(" ")?;
        f.emit(id)?;
    }
    if let Some(super_class) = node.field_opt("superClass") {
        f.write(" extends ")?;
        f.emit(super_class)?;
    }
    f.write(" ")?;
    f.emit(node.field("body")?)
}

pub(crate) fn method_definition(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    let value = node.field("value")?;
    if node.bool_field("static") {
        f.write("static ")?;
    }
    if value.bool_field("async") {
        f.write("async ")?;
    }
    let kind = node.str_field("kind")?;
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

/// `ImportDefaultSpecifier`/`ImportNamespaceSpecifier`/`ImportSpecifier` are
/// told apart by comparing the full kind string, then grouped the way a
/// source import statement groups them: bare default and/or namespace
/// bindings first, then one `{ ... }` block for named bindings.
pub(crate) fn import_declaration(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.write("import ")?;
    let specifiers: Vec<_> = node.array_field("specifiers")?.collect();
    if specifiers.is_empty() {
        f.emit(node.field("source")?)?;
        return f.write(";");
    }

    let mut wrote_any = false;
    for spec in specifiers
        .iter()
        .copied()
        .filter(|s| matches!(s.kind(), Ok("ImportDefaultSpecifier") | Ok("ImportNamespaceSpecifier")))
    {
        if wrote_any {
            f.write(", ")?;
        }
        if spec.kind()? == "ImportDefaultSpecifier" {
            f.emit(spec.field("local")?)?;
        } else {
            f.write("* as ")?;
            f.emit(spec.field("local")?)?;
        }
        wrote_any = true;
    }

    let named: Vec<_> = specifiers
        .iter()
        .copied()
        .filter(|s| s.kind().map(|k| k == "ImportSpecifier").unwrap_or(false))
        .collect();
    if !named.is_empty() {
        if wrote_any {
            f.write(", ")?;
        }
        f.write("{ ")?;
        for (idx, spec) in named.iter().enumerate() {
            if idx > 0 {
                f.write(", ")?;
            }
            let imported = spec.field("imported")?;
            let local = spec.field("local")?;
            f.emit(imported)?;
            if imported.str_field_opt("name") != local.str_field_opt("name") {
                f.write(" as ")?;
                f.emit(local)?;
            }
        }
        f.write(" }")?;
    }

    f.write(" from ")?;
    f.emit(node.field("source")?)?;
    f.write(";")
}

/// A function or class default-export has no trailing `;` — this covers
/// `FunctionDeclaration`/`FunctionExpression` (any kind starting with `F`)
/// and `ClassDeclaration`; any other expression does.
pub(crate) fn export_default_declaration(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.write("export default ")?;
    let declaration = node.field("declaration")?;
    let kind = declaration.kind()?;
    f.emit(declaration)?;
    if !kind.starts_with('F') && kind != "ClassDeclaration" {
        f.write(";")?;
    }
    Ok(())
}

pub(crate) fn export_named_declaration(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.write("export ")?;
    if let Some(declaration) = node.field_opt("declaration") {
        return f.emit(declaration);
    }

    f.write("{ ")?;
    for (idx, spec) in node.array_field("specifiers")?.enumerate() {
        if idx > 0 {
            f.write(", ")?;
        }
        let local = spec.field("local")?;
        let exported = spec.field("exported")?;
        f.emit(local)?;
        if local.str_field_opt("name") != exported.str_field_opt("name") {
            f.write(" as ")?;
            f.emit(exported)?;
        }
    }
    f.write(" }")?;

    if let Some(source) = node.field_opt("source") {
        f.write(" from ")?;
        f.emit(source)?;
    }
    f.write(";")
}

pub(crate) fn export_all_declaration(node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    f.write("export *")?;
    if let Some(exported) = node.field_opt("exported") {
        f.write(" as ")?;
        f.emit(exported)?;
    }
    f.write(" from ")?;
    f.emit(node.field("source")?)?;
    f.write(";")
}
