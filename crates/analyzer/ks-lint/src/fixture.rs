//! Trees shared by the rule tests

use ks_syntax::SyntaxTree;

/// ```text
/// 1 fun main() {
/// 2     var total = 0
/// 3     val unused = 1
/// 4     if (flag) {
/// 5         val total = 2
/// 6         use(total)
/// 7     } else {}
/// 8     use(total)
/// 9 }
/// ```
pub(crate) const UNUSED_AND_SHADOWED: &str = r#"
{ "kind": "program", "line": 1, "children": [
  { "kind": "function", "name": "main", "line": 1, "children": [
    { "kind": "parameter_list", "line": 1 },
    { "kind": "block", "line": 1, "children": [
      { "kind": "property", "name": "total", "line": 2, "mutable": true,
        "span": { "start": 20, "end": 33 }, "children": [
        { "kind": "keyword", "text": "var", "line": 2, "span": { "start": 20, "end": 23 } },
        { "kind": "literal", "text": "0", "line": 2 }
      ] },
      { "kind": "property", "name": "unused", "line": 3, "children": [
        { "kind": "literal", "text": "1", "line": 3 }
      ] },
      { "kind": "if", "line": 4, "children": [
        { "kind": "name_reference", "name": "flag", "line": 4 },
        { "kind": "then", "line": 4, "children": [
          { "kind": "block", "line": 4, "children": [
            { "kind": "property", "name": "total", "line": 5, "children": [
              { "kind": "literal", "text": "2", "line": 5 }
            ] },
            { "kind": "call", "line": 6, "children": [
              { "kind": "name_reference", "name": "use", "line": 6 },
              { "kind": "argument_list", "line": 6, "children": [
                { "kind": "name_reference", "name": "total", "line": 6 }
              ] }
            ] }
          ] }
        ] },
        { "kind": "else", "line": 7, "children": [
          { "kind": "block", "line": 7 }
        ] }
      ] },
      { "kind": "call", "line": 8, "children": [
        { "kind": "name_reference", "name": "use", "line": 8 },
        { "kind": "argument_list", "line": 8, "children": [
          { "kind": "name_reference", "name": "total", "line": 8 }
        ] }
      ] }
    ] }
  ] }
] }
"#;

pub(crate) fn parse(json: &str) -> SyntaxTree {
    SyntaxTree::from_json(json).unwrap()
}
