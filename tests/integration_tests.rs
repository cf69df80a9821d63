use serde::{Deserialize, Serialize};
use dynjson::{
    from_reader, from_str, from_value, to_string, to_string_pretty, to_value, to_writer,
    Value, WriteOptions,
};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    customer: User,
    items: Vec<Product>,
    total: f64,
    note: Option<String>,
}

fn alice() -> User {
    User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "developer".to_string()],
    }
}

fn order() -> Order {
    Order {
        order_id: 12345,
        customer: alice(),
        items: vec![
            Product {
                sku: "WIDGET-001".to_string(),
                price: 29.99,
                quantity: 2,
            },
            Product {
                sku: "GADGET-002".to_string(),
                price: 49.5,
                quantity: 1,
            },
        ],
        total: 109.48,
        note: None,
    }
}

#[test]
fn test_simple_struct() {
    let text = to_string(&alice()).unwrap();
    assert_eq!(
        text,
        r#"{"id":123,"name":"Alice","active":true,"tags":["admin","developer"]}"#
    );

    let user_back: User = from_str(&text).unwrap();
    assert_eq!(alice(), user_back);
}

#[test]
fn test_nested_struct() {
    let text = to_string(&order()).unwrap();
    let order_back: Order = from_str(&text).unwrap();
    assert_eq!(order(), order_back);
}

#[test]
fn test_pretty_roundtrip() {
    let text = to_string_pretty(&order()).unwrap();
    assert!(text.lines().count() > 10);
    let order_back: Order = from_str(&text).unwrap();
    assert_eq!(order(), order_back);
}

#[test]
fn test_primitives() {
    assert_eq!(to_string(&42).unwrap(), "42");
    assert_eq!(to_string(&-3.5).unwrap(), "-3.5");
    assert_eq!(to_string(&true).unwrap(), "true");
    assert_eq!(to_string(&()).unwrap(), "null");
    assert_eq!(to_string("plain").unwrap(), "\"plain\"");

    assert_eq!(from_str::<i32>("42").unwrap(), 42);
    assert_eq!(from_str::<f64>(" 2.5 ").unwrap(), 2.5);
    assert!(from_str::<bool>("false").map(|b| !b).unwrap());
    assert_eq!(from_str::<Option<u8>>("null").unwrap(), None);
}

#[test]
fn test_options() {
    let options = WriteOptions::pretty().with_indent(3);
    let text = dynjson::to_string_with_options(&vec![1, 2], options).unwrap();
    assert_eq!(text, "[\n   1,\n   2\n]");
}

#[test]
fn test_to_value_and_back() {
    let value = to_value(&order()).unwrap();
    assert_eq!(value.at("customer").at("name").coerce::<String>().unwrap(), "Alice");
    assert_eq!(value.at("items").at(1).at("price").coerce::<f64>().unwrap(), 49.5);
    assert!(value.at("note").is::<()>());

    let order_back: Order = from_value(value).unwrap();
    assert_eq!(order(), order_back);
}

#[test]
fn test_typed_read_after_dynamic_edit() {
    let mut value = to_value(&alice()).unwrap();
    value.at_mut("tags").at(2).set("ops").unwrap();
    value.at_mut("active").set(false).unwrap();

    let user: User = from_value(value).unwrap();
    assert_eq!(user.tags, vec!["admin", "developer", "ops"]);
    assert!(!user.active);
}

#[test]
fn test_empty_collections() {
    assert_eq!(to_string(&Vec::<i32>::new()).unwrap(), "[]");
    let empty: Vec<String> = from_str("[ ]").unwrap();
    assert!(empty.is_empty());

    let map: std::collections::HashMap<String, i32> = from_str("{}").unwrap();
    assert!(map.is_empty());
}

#[test]
fn test_numbers() {
    assert_eq!(to_string(&1e3).unwrap(), "1000");
    assert_eq!(to_string(&0.1).unwrap(), "0.1");
    assert_eq!(to_string(&f64::NAN).unwrap(), "null");
    assert_eq!(from_str::<u64>("1e3").unwrap(), 1000);
    assert!(from_str::<u8>("300").is_err());
}

#[test]
fn test_reader_and_writer() {
    let mut buffer = Vec::new();
    to_writer(&mut buffer, &alice()).unwrap();

    let user: User = from_reader(std::io::Cursor::new(buffer)).unwrap();
    assert_eq!(user, alice());
}

#[test]
fn test_value_interop_with_serde_json() {
    let value: Value = from_str(r#"{"a":[1,2.5,"x",null,true]}"#).unwrap();
    let text = serde_json::to_string(&value).unwrap();
    assert_eq!(text, r#"{"a":[1.0,2.5,"x",null,true]}"#);

    let back: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(back, value);
}
