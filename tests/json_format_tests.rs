//! Behavior of the text format and the value model on concrete documents.

use dynjson::{from_str, json, Array, Error, JsonMap, Object, Value};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn parse(text: &str) -> Value {
    init_logging();
    let mut value = Value::Null;
    assert!(value.parse(text), "failed to parse {text:?}");
    value
}

mod scenarios {
    use super::*;

    #[test]
    fn test_number_document() {
        let value = parse("3.14159");
        assert!(value.is_number());
        assert_eq!(value.coerce::<f64>().unwrap(), 3.14159);
        assert!(matches!(value.coerce::<String>(), Err(Error::Type { .. })));
    }

    #[test]
    fn test_array_bounds_guarded_by_has() {
        let value = parse("[1,2,3]");
        let items = value.coerce::<Array>().unwrap();
        assert_eq!(items.len(), 3);
        assert!(items.to_vec().iter().all(Value::is_number));

        assert!(!value.has(5));
        assert!(value.lookup(5).unwrap_err().is_access());
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_missing_key_read() {
        let value = json!({ "Hello": "World" });
        assert!(matches!(
            value.at("missing").coerce::<Value>(),
            Err(Error::Access { .. })
        ));
        assert_eq!(value.at("missing").default_to_str("fallback"), "fallback");
        assert!(!value.has("missing"));
    }

    #[test]
    fn test_deep_assignment_creates_objects() {
        let mut value = json!({ "other": 1 });
        value
            .at_mut("first")
            .at("second")
            .set(json!({ "Hello": "World" }))
            .unwrap();

        assert!(value.at("first").is::<Object>());
        assert!(value.at("first").at("second").is::<Object>());
        assert_eq!(
            value.at("first").at("second").at("Hello").coerce::<String>().unwrap(),
            "World"
        );
    }

    #[test]
    fn test_object_equality_ignores_insertion_order() {
        let a = Object::new();
        a.insert("x", 1).unwrap();
        a.insert("y", "two").unwrap();

        let b = Object::new();
        b.insert("y", "two").unwrap();
        b.insert("x", 1).unwrap();

        assert!(Value::from(a).equivalent(&Value::from(b)));
    }

    #[test]
    fn test_malformed_array_leaves_value_unchanged() {
        init_logging();
        let mut value = json!({ "keep": [1, 2] });
        let before = value.clone();

        assert!(!value.parse("[1:2]"));
        assert!(value.is_object());
        assert!(value.is_alias_of(&before));
        assert_eq!(value.to_string(), r#"{"keep":[1,2]}"#);
    }
}

mod parsing {
    use super::*;

    #[test]
    fn test_candidate_order() {
        assert!(parse(r#""123""#).is_string());
        assert!(parse("123").is_number());
        assert!(parse("true").is_bool());
        assert!(parse("null").is_null());
        assert!(parse("{}").is_object());
        assert!(parse("[]").is_array());
    }

    #[test]
    fn test_whitespace_between_tokens() {
        let value = parse(" \n\t{ \"a\" :\n [ 1 ,\r\n 2 ] }\n");
        assert_eq!(value.to_string(), r#"{"a":[1,2]}"#);
    }

    #[test]
    fn test_strings_with_structural_characters() {
        let value = parse(r#"{"k": "a,b:c]}{["}"#);
        assert_eq!(value.at("k").coerce::<String>().unwrap(), "a,b:c]}{[");
    }

    #[test]
    fn test_escapes_round_trip_verbatim() {
        let text = r#"{"path":"C:\\dir","quote":"say \"hi\"","nl":"a\nb"}"#;
        let value = parse(text);
        assert_eq!(value.at("quote").coerce::<String>().unwrap(), r#"say \"hi\""#);
        assert_eq!(value.to_string(), text);
    }

    #[test]
    fn test_unicode_content() {
        let value = parse(r#"["héllo", "日本"]"#);
        assert_eq!(value.at(1).coerce::<String>().unwrap(), "日本");
    }

    #[test]
    fn test_nested_documents() {
        let value = parse(r#"{"a":{"b":{"c":[[],[{}],[[1]]]}}}"#);
        assert_eq!(value.get(dynjson::path!["a", "b", "c", 2, 0, 0]).coerce::<f64>().unwrap(), 1.0);
    }

    #[test]
    fn test_trailing_comma() {
        assert_eq!(parse("[1,]").to_string(), "[1]");
        assert_eq!(parse(r#"{"a":[],}"#).to_string(), r#"{"a":[]}"#);
    }

    #[test]
    fn test_rejections() {
        init_logging();
        for text in [
            "", "   ", "[1 2]", "[,]", "{,}", r#"{"a" 1}"#, r#"{"a":1"#, "[1,2", "tru",
            "nul", "\"open", "1.2.3", "[1] [2]", "{'a':1}", "--1",
        ] {
            let mut value = Value::from("sentinel");
            assert!(!value.parse(text), "accepted {text:?}");
            assert_eq!(value.as_string().as_deref(), Some("sentinel"));
        }
    }

    #[test]
    fn test_syntax_error_location() {
        let err = from_str::<Value>("{\n  \"a\": 1,\n  \"b\" 2\n}").unwrap_err();
        match err {
            Error::Syntax { line, column, expected, .. } => {
                assert_eq!(line, 3);
                assert_eq!(column, 7);
                assert!(expected.contains("':'"), "{expected}");
            }
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_str_value_matches_parse() {
        let text = r#"{"x":[true,false,null,-0.5]}"#;
        let via_from_str: Value = from_str(text).unwrap();
        let via_trait: Value = text.parse().unwrap();
        assert_eq!(via_from_str, parse(text));
        assert_eq!(via_trait, parse(text));
    }
}

mod model {
    use super::*;

    #[test]
    fn test_alias_contract() {
        let a = parse(r#"{"list":[1],"inner":{"k":"v"}}"#);
        let mut b = a.clone();

        b.at_mut("list").at(3).set(4).unwrap();
        b.at_mut("inner").at("k").set("changed").unwrap();

        assert!(a.equivalent(&b));
        assert_eq!(a.to_string(), r#"{"list":[1,null,null,4],"inner":{"k":"changed"}}"#);
    }

    #[test]
    fn test_clone_contract() {
        let a = parse(r#"{"list":[1],"inner":{"k":"v"}}"#);
        let mut c = a.deep_clone();
        assert!(a.equivalent(&c));

        c.at_mut("inner").at("k").set("changed").unwrap();
        assert!(!a.equivalent(&c));
        assert_eq!(a.at("inner").at("k").coerce::<String>().unwrap(), "v");
    }

    #[test]
    fn test_shared_subtree_through_two_parents() {
        let shared = json!({ "n": 0 });
        let mut left = Value::Null;
        let mut right = Value::Null;
        left.at_mut("child").set(shared.clone()).unwrap();
        right.at_mut(0).set(shared.clone()).unwrap();

        left.at_mut("child").at("n").set(5).unwrap();
        assert_eq!(right.at(0).at("n").coerce::<f64>().unwrap(), 5.0);
        assert_eq!(shared.at("n").coerce::<f64>().unwrap(), 5.0);
    }

    #[test]
    fn test_reads_do_not_vivify() {
        let value = parse(r#"{"a":[]}"#);
        let before = value.to_string();
        assert!(!value.at("x").at("y").exists());
        assert!(!value.at("a").at(0).at("z").exists());
        assert!(value.at("a").at("not_an_index").coerce::<Value>().unwrap_err().is_access());
        assert_eq!(value.to_string(), before);
    }

    #[test]
    fn test_writes_replace_scalars_on_the_way() {
        init_logging();
        let mut value = parse(r#"{"a":"text","b":[1]}"#);
        value.at_mut("a").at("now").set(1).unwrap();
        value.at_mut("b").at("key").set(2).unwrap();
        assert_eq!(value.to_string(), r#"{"a":{"now":1},"b":{"key":2}}"#);
    }

    #[test]
    fn test_is_and_has_never_fail() {
        for value in [Value::Null, json!(1), json!("s"), json!([1]), json!({ "k": 1 })] {
            let _ = value.is::<f64>();
            let _ = value.is::<Object>();
            let _ = value.has("k");
            let _ = value.has(0);
        }
    }

    #[test]
    fn test_coerce_mismatch_is_type_error() {
        let values = [Value::Null, json!(true), json!(1), json!("s"), json!([]), json!({})];
        for value in &values {
            if !value.is_number() {
                assert!(value.coerce::<f64>().unwrap_err().is_type());
            }
            if !value.is_array() {
                assert!(value.coerce::<Array>().unwrap_err().is_type());
            }
        }
    }

    #[test]
    fn test_cycle_rejected() {
        let mut value = json!({ "a": { "b": [] } });
        let a = value.at("a").resolve().unwrap();
        let err = value.at_mut("a").at("b").at(0).set(a).unwrap_err();
        assert!(matches!(err, Error::Cycle { .. }));
        assert_eq!(value.to_string(), r#"{"a":{"b":[]}}"#);
    }

    #[test]
    fn test_non_finite_written_as_null() {
        let value = Value::from(vec![f64::NAN, f64::INFINITY, 1.0]);
        assert_eq!(value.to_string(), "[null,null,1]");
    }

    #[test]
    fn test_object_keys_keep_instance_order() {
        let map = JsonMap::from([("z", 1), ("a", 2), ("m", 3)]);
        assert_eq!(Value::from(map).to_string(), r#"{"z":1,"a":2,"m":3}"#);
    }
}
