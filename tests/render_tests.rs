//! End-to-end rendering tests, built straight from ESTree-shaped JSON
//! literals rather than a parser (this crate has none).

use js_codegen::RenderOptions;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn render(ast: &Value) -> String {
    js_codegen::render_to_string(ast, &mut RenderOptions::default()).expect("render should succeed")
}

fn render_with(ast: &Value, options: &mut RenderOptions) -> String {
    js_codegen::render_to_string(ast, options).expect("render should succeed")
}

fn program(body: Vec<Value>) -> Value {
    json!({ "type": "Program", "body": body })
}

#[test]
fn binary_precedence_does_not_over_parenthesize() {
    let ast = program(vec![json!({
        "type": "ExpressionStatement",
        "expression": {
            "type": "BinaryExpression",
            "operator": "+",
            "left": { "type": "Identifier", "name": "a" },
            "right": {
                "type": "BinaryExpression",
                "operator": "*",
                "left": { "type": "Identifier", "name": "b" },
                "right": { "type": "Identifier", "name": "c" },
            },
        },
    })]);
    assert_eq!(render(&ast), "a + b * c;\n");
}

#[test]
fn binary_precedence_wraps_lower_precedence_left_operand() {
    let ast = program(vec![json!({
        "type": "ExpressionStatement",
        "expression": {
            "type": "BinaryExpression",
            "operator": "*",
            "left": {
                "type": "BinaryExpression",
                "operator": "+",
                "left": { "type": "Identifier", "name": "a" },
                "right": { "type": "Identifier", "name": "b" },
            },
            "right": { "type": "Identifier", "name": "c" },
        },
    })]);
    assert_eq!(render(&ast), "(a + b) * c;\n");
}

#[test]
fn exponent_operator_is_right_associative() {
    let ast = program(vec![json!({
        "type": "ExpressionStatement",
        "expression": {
            "type": "BinaryExpression",
            "operator": "**",
            "left": { "type": "Identifier", "name": "a" },
            "right": {
                "type": "BinaryExpression",
                "operator": "**",
                "left": { "type": "Identifier", "name": "b" },
                "right": { "type": "Identifier", "name": "c" },
            },
        },
    })]);
    assert_eq!(render(&ast), "a ** b ** c;\n");

    let left_nested = program(vec![json!({
        "type": "ExpressionStatement",
        "expression": {
            "type": "BinaryExpression",
            "operator": "**",
            "left": {
                "type": "BinaryExpression",
                "operator": "**",
                "left": { "type": "Identifier", "name": "a" },
                "right": { "type": "Identifier", "name": "b" },
            },
            "right": { "type": "Identifier", "name": "c" },
        },
    })]);
    assert_eq!(render(&left_nested), "(a ** b) ** c;\n");
}

#[test]
fn arrow_function_wraps_object_literal_body() {
    let ast = program(vec![json!({
        "type": "ExpressionStatement",
        "expression": {
            "type": "ArrowFunctionExpression",
            "async": false,
            "expression": true,
            "params": [{ "type": "Identifier", "name": "x" }],
            "body": { "type": "ObjectExpression", "properties": [] },
        },
    })]);
    assert_eq!(render(&ast), "(x => ({}));\n");
}

#[test]
fn arrow_function_elides_parens_for_single_identifier_param() {
    // Embedded in a `VariableDeclarator` rather than a bare
    // `ExpressionStatement`, so this isolates the param-list elision from
    // the separate statement-head wrapping rule covered by
    // `arrow_function_wraps_object_literal_body`.
    let ast = program(vec![json!({
        "type": "VariableDeclaration",
        "kind": "const",
        "declarations": [{
            "type": "VariableDeclarator",
            "id": { "type": "Identifier", "name": "f" },
            "init": {
                "type": "ArrowFunctionExpression",
                "async": false,
                "expression": true,
                "params": [{ "type": "Identifier", "name": "x" }],
                "body": { "type": "Identifier", "name": "x" },
            },
        }],
    })]);
    assert_eq!(render(&ast), "const f = x => x;\n");
}

#[test]
fn for_statement_renders_init_test_update() {
    let ast = program(vec![json!({
        "type": "ForStatement",
        "init": {
            "type": "VariableDeclaration",
            "kind": "let",
            "declarations": [{
                "type": "VariableDeclarator",
                "id": { "type": "Identifier", "name": "i" },
                "init": { "type": "Literal", "value": 0, "raw": "0" },
            }],
        },
        "test": {
            "type": "BinaryExpression",
            "operator": "<",
            "left": { "type": "Identifier", "name": "i" },
            "right": { "type": "Literal", "value": 10, "raw": "10" },
        },
        "update": {
            "type": "UpdateExpression",
            "operator": "++",
            "prefix": false,
            "argument": { "type": "Identifier", "name": "i" },
        },
        "body": { "type": "BlockStatement", "body": [] },
    })]);
    assert_eq!(render(&ast), "for (let i = 0; i < 10; i++) {}\n");
}

#[test]
fn for_in_statement_uses_in_keyword() {
    let ast = program(vec![json!({
        "type": "ForInStatement",
        "left": {
            "type": "VariableDeclaration",
            "kind": "const",
            "declarations": [{
                "type": "VariableDeclarator",
                "id": { "type": "Identifier", "name": "key" },
            }],
        },
        "right": { "type": "Identifier", "name": "obj" },
        "body": { "type": "BlockStatement", "body": [] },
    })]);
    assert_eq!(render(&ast), "for (const key in obj) {}\n");
}

#[test]
fn import_declaration_groups_default_namespace_and_named_specifiers() {
    let ast = program(vec![json!({
        "type": "ImportDeclaration",
        "source": { "type": "Literal", "value": "lib", "raw": "\"lib\"" },
        "specifiers": [
            { "type": "ImportDefaultSpecifier", "local": { "type": "Identifier", "name": "Lib" } },
            { "type": "ImportNamespaceSpecifier", "local": { "type": "Identifier", "name": "ns" } },
            {
                "type": "ImportSpecifier",
                "imported": { "type": "Identifier", "name": "helper" },
                "local": { "type": "Identifier", "name": "helper" },
            },
            {
                "type": "ImportSpecifier",
                "imported": { "type": "Identifier", "name": "other" },
                "local": { "type": "Identifier", "name": "renamed" },
            },
        ],
    })]);
    assert_eq!(
        render(&ast),
        "import Lib, * as ns, { helper, other as renamed } from \"lib\";\n"
    );
}

#[test]
fn export_default_declaration_omits_semicolon_for_function() {
    let ast = program(vec![json!({
        "type": "ExportDefaultDeclaration",
        "declaration": {
            "type": "FunctionDeclaration",
            "async": false,
            "generator": false,
            "id": null,
            "params": [],
            "body": { "type": "BlockStatement", "body": [] },
        },
    })]);
    assert_eq!(render(&ast), "export default function () {}\n");
}

#[test]
fn export_default_declaration_keeps_semicolon_for_expression() {
    let ast = program(vec![json!({
        "type": "ExportDefaultDeclaration",
        "declaration": { "type": "Identifier", "name": "value" },
    })]);
    assert_eq!(render(&ast), "export default value;\n");
}

#[test]
fn template_literal_interleaves_quasis_and_expressions() {
    let ast = program(vec![json!({
        "type": "ExpressionStatement",
        "expression": {
            "type": "TemplateLiteral",
            "quasis": [
                { "type": "TemplateElement", "tail": false, "value": { "raw": "hello " } },
                { "type": "TemplateElement", "tail": true, "value": { "raw": "!" } },
            ],
            "expressions": [{ "type": "Identifier", "name": "name" }],
        },
    })]);
    assert_eq!(render(&ast), "`hello ${name}!`;\n");
}

#[test]
fn regex_literal_without_raw_falls_back_to_regexp_constructor() {
    let ast = program(vec![json!({
        "type": "ExpressionStatement",
        "expression": {
            "type": "Literal",
            "regex": { "pattern": "a+b", "flags": "g" },
        },
    })]);
    assert_eq!(render(&ast), "new RegExp(\"a+b\", \"g\");\n");
}

#[test]
fn rest_and_spread_share_one_formatter() {
    let ast = program(vec![json!({
        "type": "ExpressionStatement",
        "expression": {
            "type": "ArrayExpression",
            "elements": [
                { "type": "SpreadElement", "argument": { "type": "Identifier", "name": "xs" } },
            ],
        },
    })]);
    assert_eq!(render(&ast), "[...xs];\n");
}

#[test]
fn array_elision_trailing_hole_gets_a_marker_comma() {
    let ast = program(vec![json!({
        "type": "ExpressionStatement",
        "expression": {
            "type": "ArrayExpression",
            "elements": [{ "type": "Literal", "value": 1, "raw": "1" }, Value::Null],
        },
    })]);
    assert_eq!(render(&ast), "[1, ,];\n");
}

#[test]
fn class_body_renders_static_getter_and_computed_method() {
    let ast = program(vec![json!({
        "type": "ClassDeclaration",
        "id": { "type": "Identifier", "name": "Box" },
        "superClass": null,
        "body": {
            "type": "ClassBody",
            "body": [
                {
                    "type": "MethodDefinition",
                    "kind": "get",
                    "static": true,
                    "computed": false,
                    "key": { "type": "Identifier", "name": "size" },
                    "value": {
                        "type": "FunctionExpression",
                        "async": false,
                        "generator": false,
                        "params": [],
                        "body": {
                            "type": "BlockStatement",
                            "body": [{
                                "type": "ReturnStatement",
                                "argument": { "type": "Literal", "value": 0, "raw": "0" },
                            }],
                        },
                    },
                },
                {
                    "type": "MethodDefinition",
                    "kind": "method",
                    "static": false,
                    "computed": true,
                    "key": { "type": "Identifier", "name": "name" },
                    "value": {
                        "type": "FunctionExpression",
                        "async": false,
                        "generator": false,
                        "params": [],
                        "body": { "type": "BlockStatement", "body": [] },
                    },
                },
            ],
        },
    })]);
    assert_eq!(
        render(&ast),
        "class Box {\n\tstatic get size() {\n\t\treturn 0;\n\t}\n\t[name]() {}\n}\n"
    );
}

#[test]
fn sequence_expression_as_assignment_right_side_is_wrapped() {
    let ast = program(vec![json!({
        "type": "ExpressionStatement",
        "expression": {
            "type": "AssignmentExpression",
            "operator": "=",
            "left": { "type": "Identifier", "name": "a" },
            "right": {
                "type": "SequenceExpression",
                "expressions": [
                    { "type": "Identifier", "name": "b" },
                    { "type": "Identifier", "name": "c" },
                ],
            },
        },
    })]);
    assert_eq!(render(&ast), "a = (b, c);\n");
}

#[test]
fn new_expression_wraps_callee_ending_in_a_call() {
    let ast = program(vec![json!({
        "type": "ExpressionStatement",
        "expression": {
            "type": "NewExpression",
            "callee": {
                "type": "CallExpression",
                "optional": false,
                "callee": { "type": "Identifier", "name": "factory" },
                "arguments": [],
            },
            "arguments": [],
        },
    })]);
    assert_eq!(render(&ast), "new (factory())();\n");
}

#[test]
fn object_pattern_destructuring_in_variable_declaration() {
    let ast = program(vec![json!({
        "type": "VariableDeclaration",
        "kind": "const",
        "declarations": [{
            "type": "VariableDeclarator",
            "id": {
                "type": "ObjectPattern",
                "properties": [{
                    "type": "Property",
                    "kind": "init",
                    "method": false,
                    "shorthand": true,
                    "computed": false,
                    "key": { "type": "Identifier", "name": "a" },
                    "value": { "type": "Identifier", "name": "a" },
                }],
            },
            "init": { "type": "Identifier", "name": "source" },
        }],
    })]);
    assert_eq!(render(&ast), "const { a } = source;\n");
}

#[test]
fn empty_block_with_comments_expands_when_comments_enabled() {
    let block = json!({
        "type": "BlockStatement",
        "body": [],
        "comments": [{ "type": "Line", "value": " nothing here yet" }],
    });

    let mut options = RenderOptions::default().with_comments(true);
    assert_eq!(render_with(&block, &mut options), "{\n\t// nothing here yet\n}");

    // Without comment rendering enabled, an empty body collapses to `{}`.
    assert_eq!(render(&block), "{}");
}

#[test]
fn conditional_expression_wraps_low_precedence_test() {
    let ast = program(vec![json!({
        "type": "ExpressionStatement",
        "expression": {
            "type": "ConditionalExpression",
            "test": {
                "type": "AssignmentExpression",
                "operator": "=",
                "left": { "type": "Identifier", "name": "a" },
                "right": { "type": "Identifier", "name": "b" },
            },
            "consequent": { "type": "Literal", "value": 1, "raw": "1" },
            "alternate": { "type": "Literal", "value": 2, "raw": "2" },
        },
    })]);
    assert_eq!(render(&ast), "(a = b) ? 1 : 2;\n");
}

#[test]
fn object_expression_statement_is_wrapped_in_parens() {
    let ast = program(vec![json!({
        "type": "ExpressionStatement",
        "expression": { "type": "ObjectExpression", "properties": [] },
    })]);
    assert_eq!(render(&ast), "({});\n");
}

#[test]
fn for_init_semicolon_suppression_does_not_leak_into_nested_declarations() {
    // The `for` head's own `let f = ...` loses its `;`, but a
    // `VariableDeclaration` inside the arrow function's block body — still
    // part of the init expression's subtree — keeps its own `;`.
    let ast = program(vec![json!({
        "type": "ForStatement",
        "init": {
            "type": "VariableDeclaration",
            "kind": "let",
            "declarations": [{
                "type": "VariableDeclarator",
                "id": { "type": "Identifier", "name": "f" },
                "init": {
                    "type": "ArrowFunctionExpression",
                    "async": false,
                    "expression": false,
                    "params": [],
                    "body": {
                        "type": "BlockStatement",
                        "body": [{
                            "type": "VariableDeclaration",
                            "kind": "let",
                            "declarations": [{
                                "type": "VariableDeclarator",
                                "id": { "type": "Identifier", "name": "a" },
                                "init": { "type": "Identifier", "name": "b" },
                            }],
                        }],
                    },
                },
            }],
        },
        "test": null,
        "update": null,
        "body": { "type": "BlockStatement", "body": [] },
    })]);
    assert_eq!(render(&ast), "for (let f = () => {\n\tlet a = b;\n};;) {}\n");
}

#[test]
fn in_operator_wraps_outside_for_init_too() {
    let ast = program(vec![json!({
        "type": "VariableDeclaration",
        "kind": "const",
        "declarations": [{
            "type": "VariableDeclarator",
            "id": { "type": "Identifier", "name": "has" },
            "init": {
                "type": "BinaryExpression",
                "operator": "in",
                "left": { "type": "Identifier", "name": "key" },
                "right": { "type": "Identifier", "name": "obj" },
            },
        }],
    })]);
    assert_eq!(render(&ast), "const has = (key in obj);\n");
}

#[test]
fn export_default_function_expression_omits_semicolon() {
    let ast = program(vec![json!({
        "type": "ExportDefaultDeclaration",
        "declaration": {
            "type": "FunctionExpression",
            "id": null,
            "async": false,
            "generator": false,
            "params": [],
            "body": { "type": "BlockStatement", "body": [] },
        },
    })]);
    assert_eq!(render(&ast), "export default function () {}\n");
}
