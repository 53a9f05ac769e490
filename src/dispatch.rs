//! The default dispatch table (§4.1): a `match` over every known node
//! `type`, with several kinds sharing one formatter. Reached only after
//! [`crate::state::EmissionState::emit`] has checked the overlay table, if
//! any, for the node's kind.

use crate::ast::Node;
use crate::error::{EmitError, EmitResult};
use crate::nodes::{declarations, expressions, statements};
use crate::state::EmissionState;

pub(crate) fn emit_default(kind: &str, node: Node<'_>, f: &mut EmissionState<'_>) -> EmitResult<()> {
    match kind {
        "Program" => statements::program(node, f),
        "BlockStatement" | "ClassBody" => statements::block_statement(node, f),
        "IfStatement" => statements::if_statement(node, f),
        "ForStatement" => statements::for_statement(node, f),
        "ForInStatement" | "ForOfStatement" => statements::for_in_of_statement(kind, node, f),
        "SwitchStatement" => statements::switch_statement(node, f),
        "TryStatement" => statements::try_statement(node, f),
        "WhileStatement" => statements::while_statement(node, f),
        "DoWhileStatement" => statements::do_while_statement(node, f),
        "ReturnStatement" => statements::return_statement(node, f),
        "ThrowStatement" => statements::throw_statement(node, f),
        "BreakStatement" => statements::break_continue_statement("break", node, f),
        "ContinueStatement" => statements::break_continue_statement("continue", node, f),
        "LabeledStatement" => statements::labeled_statement(node, f),
        "WithStatement" => statements::with_statement(node, f),
        "EmptyStatement" => statements::empty_statement(f),
        "DebuggerStatement" => statements::debugger_statement(f),
        "ExpressionStatement" => statements::expression_statement(node, f),
        "VariableDeclaration" => statements::variable_declaration(node, f),
        "VariableDeclarator" => expressions::variable_declarator(node, f),

        "FunctionDeclaration" | "FunctionExpression" => declarations::function(node, f),
        "ClassDeclaration" => declarations::class_declaration(node, f),
        "ClassExpression" => declarations::class_declaration(node, f),
        "ImportDeclaration" => declarations::import_declaration(node, f),
        "ExportDefaultDeclaration" => declarations::export_default_declaration(node, f),
        "ExportNamedDeclaration" => declarations::export_named_declaration(node, f),
        "ExportAllDeclaration" => declarations::export_all_declaration(node, f),
        "MethodDefinition" => declarations::method_definition(node, f),

        "Identifier" => expressions::identifier(node, f),
        "Literal" => expressions::literal(node, f),
        "TemplateLiteral" => expressions::template_literal(node, f),
        "TaggedTemplateExpression" => expressions::tagged_template_expression(node, f),
        "ThisExpression" => f.write("this"),
        "Super" => f.write("super"),
        "ArrayExpression" | "ArrayPattern" => expressions::array_expression(node, f),
        "ObjectExpression" => expressions::object_expression(node, f),
        "ObjectPattern" => expressions::object_pattern(node, f),
        "Property" => expressions::property(node, f),
        "AssignmentPattern" => expressions::assignment_pattern(node, f),
        "RestElement" | "SpreadElement" => expressions::rest_or_spread(node, f),
        "UnaryExpression" => expressions::unary_expression(node, f),
        "UpdateExpression" => expressions::update_expression(node, f),
        "BinaryExpression" | "LogicalExpression" => expressions::binary_or_logical(node, f),
        "AssignmentExpression" => expressions::assignment_expression(node, f),
        "ConditionalExpression" => expressions::conditional_expression(node, f),
        "SequenceExpression" => expressions::sequence_expression(node, f),
        "CallExpression" => expressions::call_expression(node, f),
        "NewExpression" => expressions::new_expression(node, f),
        "MemberExpression" => expressions::member_expression(node, f),
        "MetaProperty" => expressions::meta_property(node, f),
        "ArrowFunctionExpression" => expressions::arrow_function_expression(node, f),
        "YieldExpression" => expressions::yield_expression(node, f),
        "AwaitExpression" => expressions::await_expression(node, f),

        other => Err(EmitError::UnknownKind { kind: other.to_string() }),
    }
}
