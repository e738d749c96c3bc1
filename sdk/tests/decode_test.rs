#![cfg(test)]

use flowline::{
    decode_to_json, parse, schema_from_json, DecodedFlow, FieldType, FlowError, Model, SchemaNode,
    Value, ROOT_PREFIX,
};

#[test]
fn test_decode_nested_document() {
    let input = r#"
    [
        {
            "prefix": "A01",
            "model": {},
            "children": [
                { "prefix": "A02", "model": {}, "children": [] }
            ]
        },
        { "prefix": "B01", "model": {}, "children": [] }
    ]
    "#;

    let schema = schema_from_json(input).expect("schema_from_json failed");
    let content = [
        "A01|foo|bar|",
        "A02|wiz|bang|",
        "A01|bing|bong|",
        "B01|waz|baz|",
    ];

    let root = parse(&schema, content).expect("parse failed");

    assert_eq!(root.prefix, ROOT_PREFIX);
    assert!(root.contents.is_empty());
    assert_eq!(root.children.len(), 3);
    assert_eq!(
        root.children[0],
        DecodedFlow {
            prefix: "A01".to_owned(),
            contents: vec![Value::Str("foo".into()), Value::Str("bar".into())],
            children: vec![DecodedFlow {
                prefix: "A02".to_owned(),
                contents: vec![Value::Str("wiz".into()), Value::Str("bang".into())],
                children: vec![],
            }],
        }
    );
    assert_eq!(root.children[1].prefix, "A01");
    assert!(root.children[1].children.is_empty());
    assert_eq!(root.children[2].prefix, "B01");
}

#[test]
fn test_decode_typed_document() {
    let input = r#"
    {
        "prefix": "A01",
        "model": { "foo": "string", "bar": "int" },
        "children": [
            { "prefix": "B01", "model": { "baz": "float" }, "children": [] }
        ]
    }
    "#;

    let schema = schema_from_json(input).expect("schema_from_json failed");
    let root = parse(&schema, ["A01|hello|42|", "B01|0.25|"]).expect("parse failed");

    let a01 = &root.children[0];
    assert_eq!(a01.contents[0].as_str(), "hello");
    assert_eq!(a01.contents[1].as_int(), 42);
    assert_eq!(a01.child("B01").unwrap().contents[0].as_float(), 0.25);
}

#[test]
fn test_typed_graph_and_mapping_form_agree() {
    let mapping = schema_from_json(
        r#"{ "prefix": "A", "model": { "x": "bool" }, "children": [{ "prefix": "B" }] }"#,
    )
    .unwrap();
    let typed = vec![SchemaNode::new(
        "A",
        Model::new().with_field("x", FieldType::Bool),
        vec![SchemaNode::leaf("B")],
    )];
    assert_eq!(mapping, typed);

    let lines = ["A|true|", "B|raw|"];
    assert_eq!(parse(&mapping, lines).unwrap(), parse(&typed, lines).unwrap());
}

#[test]
fn test_schema_from_json_rejects_invalid_forest() {
    let err = schema_from_json(r#"[{ "prefix": "A" }, { "prefix": "A" }]"#).unwrap_err();
    assert!(matches!(err, FlowError::Schema(_)), "got {:?}", err);
}

#[test]
fn test_decode_to_json_renders_scalars() {
    let schema = schema_from_json(r#"{ "prefix": "A", "model": { "n": "int" } }"#).unwrap();
    let json = decode_to_json(&schema, ["A|7|"]).expect("decode_to_json failed");

    let rendered: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(rendered["prefix"], "ROOT");
    assert_eq!(rendered["children"][0]["prefix"], "A");
    assert_eq!(rendered["children"][0]["contents"][0], 7);
}

#[test]
fn test_unmatched_line_surfaces_through_facade() {
    let schema = schema_from_json(r#"{ "prefix": "A" }"#).unwrap();
    let err = parse(&schema, ["Z|1|"]).unwrap_err();
    match err {
        FlowError::UnmatchedLine { line, prefix } => {
            assert_eq!(line, 0);
            assert_eq!(prefix, "Z");
        }
        other => panic!("expected UnmatchedLine, got {:?}", other),
    }
}
