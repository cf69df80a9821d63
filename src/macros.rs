/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// Arrays and objects nest freely; object keys must be literals. Any other
/// token tree goes through `Value::from`, so variables and expressions work
/// as elements. Negative numbers need parentheses inside arrays and objects,
/// e.g. `[(-1), 2]`.
///
/// # Examples
///
/// ```rust
/// use dynjson::json;
///
/// let name = "Ada";
/// let value = json!({
///     "name": name,
///     "langs": ["en", "fr"],
///     "active": true,
///     "manager": null
/// });
/// assert_eq!(
///     value.to_string(),
///     r#"{"name":"Ada","langs":["en","fr"],"active":true,"manager":null}"#
/// );
/// ```
#[macro_export]
macro_rules! json {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array($crate::Array::new())
    };

    ([ $($elem:tt),+ $(,)? ]) => {
        $crate::Value::from(::std::vec![$($crate::json!($elem)),+])
    };

    ({}) => {
        $crate::Value::Object($crate::Object::new())
    };

    ({ $($key:literal : $value:tt),+ $(,)? }) => {{
        let mut object = $crate::JsonMap::new();
        $(
            object.insert(::std::string::String::from($key), $crate::json!($value));
        )+
        $crate::Value::from(object)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}

/// Builds a [`Path`](crate::Path) from a list of keys.
///
/// String keys index object members, `usize` keys index arrays.
///
/// # Examples
///
/// ```rust
/// use dynjson::{path, Value};
///
/// let mut value = Value::Null;
/// value.get_mut(path!["rows", 1, "id"]).set(9).unwrap();
/// assert_eq!(value.to_string(), r#"{"rows":[null,{"id":9}]}"#);
/// assert_eq!(path!["rows", 1].to_string(), r#"$["rows"][1]"#);
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::new()
    };

    ($($key:expr),+ $(,)?) => {
        $crate::Path::from(::std::vec![$($crate::Key::from($key)),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::{Key, Path, Value};

    #[test]
    fn test_json_macro_primitives() {
        assert!(json!(null).is_null());
        assert_eq!(json!(true), Value::Bool(true));
        assert_eq!(json!(false), Value::Bool(false));
        assert_eq!(json!(42), Value::Number(42.0));
        assert_eq!(json!(3.5), Value::Number(3.5));
        assert_eq!(json!("hello").as_string().as_deref(), Some("hello"));
        assert_eq!(json!(-7), Value::Number(-7.0));
    }

    #[test]
    fn test_json_macro_arrays() {
        assert_eq!(json!([]).to_string(), "[]");

        let arr = json!([1, "two", [3], (-4)]);
        assert_eq!(arr.to_string(), r#"[1,"two",[3],-4]"#);
    }

    #[test]
    fn test_json_macro_objects() {
        assert_eq!(json!({}).to_string(), "{}");

        let obj = json!({
            "name": "Alice",
            "age": 30,
            "nested": { "ok": true },
        });
        assert_eq!(
            obj.to_string(),
            r#"{"name":"Alice","age":30,"nested":{"ok":true}}"#
        );
    }

    #[test]
    fn test_json_macro_fresh_containers() {
        let make = || json!({ "list": [] });
        let a = make();
        let b = make();
        assert!(a.equivalent(&b));
        assert!(!a.is_alias_of(&b));
    }

    #[test]
    fn test_path_macro() {
        assert_eq!(path![], Path::new());
        let path = path!["a", 0, String::from("b")];
        assert_eq!(
            path.keys(),
            &[Key::from("a"), Key::Index(0), Key::from("b")]
        );
    }
}
