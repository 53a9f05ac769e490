//! A thin, borrowed view over an ESTree-shaped [`serde_json::Value`].
//!
//! The emitter never owns or mutates the tree it renders; every accessor
//! here borrows from the caller's `Value` and fails with [`EmitError`]
//! rather than panicking when a required attribute is absent or the wrong
//! shape. Sibling node kinds (`ForInStatement` vs `ForOfStatement`,
//! `ImportDefaultSpecifier` vs `ImportNamespaceSpecifier` vs
//! `ImportSpecifier`, ...) are always told apart by comparing the full
//! `type` string, never a character offset into it.

use serde_json::Value;

use crate::error::{EmitError, EmitResult};

/// A borrowed ESTree node.
#[derive(Clone, Copy)]
pub struct Node<'a> {
    value: &'a Value,
}

impl<'a> Node<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// The node's `type` tag, e.g. `"BinaryExpression"`.
    pub fn kind(&self) -> EmitResult<&'a str> {
        self.value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| EmitError::MalformedField {
                kind: "<unknown>".to_string(),
                field: "type",
            })
    }

    /// `kind()`, but `"<unknown>"` instead of an error — used only in error
    /// messages about *other* fields, where the kind itself is assumed present.
    fn kind_for_error(&self) -> String {
        self.kind().map(str::to_string).unwrap_or_else(|_| "<unknown>".to_string())
    }

    pub fn raw(&self) -> &'a Value {
        self.value
    }

    /// A required child node field.
    pub fn field(&self, name: &'static str) -> EmitResult<Node<'a>> {
        self.value
            .get(name)
            .filter(|v| !v.is_null())
            .map(Node::new)
            .ok_or_else(|| EmitError::MissingField {
                kind: self.kind_for_error(),
                field: name,
            })
    }

    /// An optional child node field; absent or JSON `null` both map to `None`.
    pub fn field_opt(&self, name: &'static str) -> Option<Node<'a>> {
        self.value.get(name).filter(|v| !v.is_null()).map(Node::new)
    }

    /// A required string-valued field.
    pub fn str_field(&self, name: &'static str) -> EmitResult<&'a str> {
        self.value
            .get(name)
            .and_then(Value::as_str)
            .ok_or_else(|| EmitError::MissingField {
                kind: self.kind_for_error(),
                field: name,
            })
    }

    /// An optional string-valued field.
    pub fn str_field_opt(&self, name: &'static str) -> Option<&'a str> {
        self.value.get(name).and_then(Value::as_str)
    }

    /// A boolean field, defaulting to `false` when absent (matches ESTree's
    /// convention of omitting `false`-valued flags).
    pub fn bool_field(&self, name: &str) -> bool {
        self.value.get(name).and_then(Value::as_bool).unwrap_or(false)
    }

    /// A required array-of-nodes field.
    pub fn array_field(&self, name: &'static str) -> EmitResult<impl Iterator<Item = Node<'a>>> {
        self.value
            .get(name)
            .and_then(Value::as_array)
            .ok_or_else(|| EmitError::MissingField {
                kind: self.kind_for_error(),
                field: name,
            })
            .map(|items| items.iter().map(Node::new))
    }

    /// An array-of-nodes field that defaults to empty when absent.
    pub fn array_field_opt(&self, name: &str) -> impl Iterator<Item = Node<'a>> {
        self.value
            .get(name)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .map(Node::new)
    }

    /// An array field that may contain JSON `null` elisions (array/array
    /// pattern holes), preserved as `None`.
    pub fn elision_array_field(&self, name: &str) -> impl Iterator<Item = Option<Node<'a>>> {
        self.value
            .get(name)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .map(|v| if v.is_null() { None } else { Some(Node::new(v)) })
    }

    pub fn leading_comments(&self) -> impl Iterator<Item = Node<'a>> {
        self.array_field_opt("comments")
    }

    pub fn trailing_comments(&self) -> impl Iterator<Item = Node<'a>> {
        self.array_field_opt("trailingComments")
    }

    /// The node's source position, if it carries one (`loc.start` in the
    /// ESTree convention). Absent for synthetic/generated nodes.
    pub fn start_position(&self) -> Option<crate::sink::Position> {
        let loc = self.value.get("loc")?.get("start")?;
        let line = loc.get("line")?.as_u64()? as u32;
        let column = loc.get("column")?.as_u64()? as u32;
        Some(crate::sink::Position { line, column })
    }
}
