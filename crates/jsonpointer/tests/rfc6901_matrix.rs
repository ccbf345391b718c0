//! Escaping, array, and object matrices over a document exercising every
//! RFC 6901 escape case, in plain and fragment form.

use jsonpointer::{JsonPointer, NodeKind};
use serde_json::{json, Value};

fn test_document() -> Value {
    json!({
        "foo": ["bar", "baz"],
        "obj": { "a": 1, "b": 2, "c": [3, 4], "d": [{"e": 9}, {"f": [50, 51]}] },
        "": 0,
        "a/b": 1,
        "c%d": 2,
        "e^f": 3,
        "g|h": 4,
        "i\\j": 5,
        "k\"l": 6,
        " ": 7,
        "m~n": 8
    })
}

fn get(doc: &Value, pointer: &str) -> Value {
    let p = JsonPointer::parse(pointer).expect(pointer);
    p.get(doc).expect(pointer).0.clone()
}

#[test]
fn escaping_matrix() {
    let doc = test_document();

    let cases: &[(&str, i64)] = &[
        ("#/", 0),
        ("/", 0),
        ("#/a~1b", 1),
        ("/a~1b", 1),
        ("/c%d", 2),
        ("/e^f", 3),
        ("/g|h", 4),
        ("/i\\j", 5),
        ("/k\"l", 6),
        ("/ ", 7),
        ("/m~0n", 8),
    ];

    for (pointer, expected) in cases {
        assert_eq!(get(&doc, pointer), json!(expected), "pointer {pointer:?}");
    }
}

#[test]
fn full_document() {
    let doc = test_document();
    let p = JsonPointer::parse("").unwrap();
    let (value, kind) = p.get(&doc).unwrap();
    assert_eq!(value.as_object().unwrap().len(), 11);
    assert_eq!(kind, NodeKind::Object);
}

#[test]
fn intermediate_node() {
    let doc = test_document();
    let (value, kind) = JsonPointer::parse("/obj").unwrap().get(&doc).unwrap();
    assert_eq!(value.as_object().unwrap().len(), 4);
    assert_eq!(kind, NodeKind::Object);
}

#[test]
fn array_matrix() {
    let doc = test_document();

    let cases: &[(&str, &str)] = &[
        ("#/foo/0", "bar"),
        ("/foo/0", "bar"),
        ("/foo/1", "baz"),
    ];

    for (pointer, expected) in cases {
        assert_eq!(get(&doc, pointer), json!(expected), "pointer {pointer:?}");
    }
}

#[test]
fn object_matrix() {
    let doc = test_document();

    let cases: &[(&str, i64)] = &[
        ("/obj/a", 1),
        ("/obj/b", 2),
        ("/obj/c/0", 3),
        ("/obj/c/1", 4),
        ("#/obj/c/1", 4),
        ("#/obj/d/1/f/0", 50),
    ];

    for (pointer, expected) in cases {
        assert_eq!(get(&doc, pointer), json!(expected), "pointer {pointer:?}");
    }
}

#[test]
fn fragment_form_reserializes_with_marker() {
    for pointer in ["#", "#/foo/0", "#/a~1b"] {
        let p = JsonPointer::parse(pointer).unwrap();
        assert!(p.has_fragment());
        assert_eq!(p.to_string(), pointer);
    }
}
