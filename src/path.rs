//! Deep, chained access into a [`Value`] tree.
//!
//! A path is an ordered list of [`Key`]s: names index object members,
//! integers index array elements. Paths are walked lazily; nothing happens
//! until a terminal operation runs.
//!
//! Two accessors share that shape but differ in what walking does:
//!
//! - [`Query`] (from [`Value::at`] / [`Value::get`]) only reads. A missing key
//!   makes resolution fail and the tree is never touched.
//! - [`Setter`] (from [`Value::at_mut`] / [`Value::get_mut`]) auto-vivifies.
//!   Every node on the way that is not the container the next key needs is
//!   replaced by a fresh empty one, and arrays grow with `null` fill.
//!
//! ```rust
//! use dynjson::Value;
//!
//! let mut value = Value::Null;
//! value.at_mut("first").at("second").set(true).unwrap();
//! value.at_mut("list").at(2).set("c").unwrap();
//!
//! assert_eq!(
//!     value.to_string(),
//!     r#"{"first":{"second":true},"list":[null,null,"c"]}"#
//! );
//!
//! assert!(value.at("first").at("second").coerce::<bool>().unwrap());
//! assert_eq!(value.at("nothing").at("here").default_to(1.5), 1.5);
//! assert!(!value.has("nothing"));
//! ```

use crate::coerce::{JsonType, Kind};
use crate::{Array, Error, Object, Result, Value};
use std::fmt;

/// One step of a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Object member name.
    Name(String),
    /// Array index.
    Index(usize),
}

impl Key {
    /// The container kind this key indexes.
    #[must_use]
    pub fn container_kind(&self) -> Kind {
        match self {
            Key::Name(_) => Kind::Object,
            Key::Index(_) => Kind::Array,
        }
    }

    fn empty_container(&self) -> Value {
        match self {
            Key::Name(_) => Value::Object(Object::new()),
            Key::Index(_) => Value::Array(Array::new()),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Name(name) => write!(f, "[\"{name}\"]"),
            Key::Index(index) => write!(f, "[{index}]"),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

impl From<&String> for Key {
    fn from(name: &String) -> Self {
        Key::Name(name.clone())
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

/// An ordered list of keys.
///
/// Displays as `$` followed by each key, e.g. `$["users"][0]["name"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<Key>);

impl Path {
    /// The empty path, which designates the root.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<Key>) {
        self.0.push(key.into());
    }

    #[must_use]
    pub fn keys(&self) -> &[Key] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first `len` keys.
    #[must_use]
    pub fn prefix(&self, len: usize) -> Path {
        Path(self.0[..len.min(self.0.len())].to_vec())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        self.0.iter().try_for_each(|key| write!(f, "{key}"))
    }
}

impl From<Key> for Path {
    fn from(key: Key) -> Self {
        Path(vec![key])
    }
}

impl From<&str> for Path {
    fn from(name: &str) -> Self {
        Path::from(Key::from(name))
    }
}

impl From<String> for Path {
    fn from(name: String) -> Self {
        Path::from(Key::from(name))
    }
}

impl From<usize> for Path {
    fn from(index: usize) -> Self {
        Path::from(Key::Index(index))
    }
}

impl From<Vec<Key>> for Path {
    fn from(keys: Vec<Key>) -> Self {
        Path(keys)
    }
}

impl<K: Into<Key>, const N: usize> From<[K; N]> for Path {
    fn from(keys: [K; N]) -> Self {
        keys.into_iter().map(Into::into).collect()
    }
}

impl FromIterator<Key> for Path {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl Value {
    /// Starts a read-only path at `key`.
    #[must_use]
    pub fn at(&self, key: impl Into<Key>) -> Query<'_> {
        Query {
            root: self,
            path: Path::from(key.into()),
        }
    }

    /// Starts a read-only path with several keys at once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynjson::{json, path};
    ///
    /// let value = json!({ "users": [{ "name": "Ada" }] });
    /// let name: String = value.get(path!["users", 0, "name"]).coerce().unwrap();
    /// assert_eq!(name, "Ada");
    /// ```
    #[must_use]
    pub fn get(&self, path: impl Into<Path>) -> Query<'_> {
        Query {
            root: self,
            path: path.into(),
        }
    }

    /// Starts an auto-vivifying path at `key`.
    pub fn at_mut(&mut self, key: impl Into<Key>) -> Setter<'_> {
        Setter {
            root: self,
            path: Path::from(key.into()),
        }
    }

    /// Starts an auto-vivifying path with several keys at once.
    pub fn get_mut(&mut self, path: impl Into<Path>) -> Setter<'_> {
        Setter {
            root: self,
            path: path.into(),
        }
    }
}

/// A deferred, read-only path into a value.
///
/// Resolution never creates, replaces or removes anything, even when a key is
/// missing.
#[derive(Debug, Clone)]
pub struct Query<'a> {
    root: &'a Value,
    path: Path,
}

impl<'a> Query<'a> {
    /// Extends the path by one key.
    #[must_use]
    pub fn at(mut self, key: impl Into<Key>) -> Self {
        self.path.push(key);
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Walks the path and returns an alias of the node it designates.
    ///
    /// # Errors
    ///
    /// [`Error::Access`] naming the shortest prefix that does not exist.
    pub fn resolve(&self) -> Result<Value> {
        let mut node = self.root.clone();
        for (depth, key) in self.path.keys().iter().enumerate() {
            node = match node.child_at(key) {
                Some(child) => child,
                None => return Err(Error::access(self.path.prefix(depth + 1))),
            };
        }
        Ok(node)
    }

    /// Returns `true` if the whole path exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.resolve().is_ok()
    }

    /// Returns `true` if the path exists and its node matches `T`.
    #[must_use]
    pub fn is<T: JsonType>(&self) -> bool {
        self.resolve().map_or(false, |node| node.is::<T>())
    }

    /// Resolves the path and coerces the node to `T`.
    ///
    /// # Errors
    ///
    /// [`Error::Access`] when the path does not exist, [`Error::Type`] when it
    /// does but holds something else.
    pub fn coerce<T: JsonType>(&self) -> Result<T> {
        self.resolve()?.coerce()
    }

    /// Returns the coerced node, or `default` when the path is missing or the
    /// node holds another type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynjson::json;
    ///
    /// let value = json!({ "port": "eighty" });
    /// assert_eq!(value.at("port").default_to(80.0), 80.0);
    /// assert_eq!(value.at("host").default_to(String::from("localhost")), "localhost");
    /// ```
    #[must_use]
    pub fn default_to<T: JsonType>(&self, default: T) -> T {
        self.resolve()
            .ok()
            .and_then(|node| T::extract(&node))
            .unwrap_or(default)
    }

    /// [`default_to`](Self::default_to) for string defaults given as `&str`.
    ///
    /// ```rust
    /// use dynjson::json;
    ///
    /// let value = json!({ "name": "Ada" });
    /// assert_eq!(value.at("name").default_to_str("anonymous"), "Ada");
    /// assert_eq!(value.at("nick").default_to_str("anonymous"), "anonymous");
    /// ```
    #[must_use]
    pub fn default_to_str(&self, default: &str) -> String {
        self.resolve()
            .ok()
            .and_then(|node| String::extract(&node))
            .unwrap_or_else(|| default.to_string())
    }
}

/// A deferred, auto-vivifying path into a value.
///
/// Holds the root mutably until a terminal operation consumes it.
#[derive(Debug)]
pub struct Setter<'a> {
    root: &'a mut Value,
    path: Path,
}

impl<'a> Setter<'a> {
    /// Extends the path by one key.
    #[must_use]
    pub fn at(mut self, key: impl Into<Key>) -> Self {
        self.path.push(key);
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates every missing container on the path, then stores `value` at
    /// its end, replacing whatever was there.
    ///
    /// The stored value is shared, not copied: later mutations through the
    /// caller's alias show up in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::Cycle`] if `value` contains a container the path runs
    /// through. The tree is left untouched in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynjson::Value;
    ///
    /// let mut value = Value::from(42);
    /// value.at_mut("a").at(1).set("x").unwrap();
    /// assert_eq!(value.to_string(), r#"{"a":[null,"x"]}"#);
    /// ```
    pub fn set(self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        let Some((last, parents)) = self.path.keys().split_last() else {
            *self.root = value;
            return Ok(());
        };
        if let Some(addr) = deepest_kept(self.root, self.path.keys()) {
            if value.reaches(addr) {
                return Err(Error::cycle(&self.path));
            }
        }
        let parent = container_for(self.root, parents, last);
        with_slot(&parent, last, |slot| *slot = value);
        Ok(())
    }

    /// Creates every missing container on the path and returns an alias of
    /// the node at its end.
    ///
    /// The end node itself is created as `null` when absent and is never
    /// replaced, so only a container result aliases into the tree.
    pub fn vivify(self) -> Value {
        let Some((last, parents)) = self.path.keys().split_last() else {
            return self.root.clone();
        };
        let parent = container_for(self.root, parents, last);
        with_slot(&parent, last, |slot| slot.clone())
    }
}

/// Address of the deepest existing container `set` would keep on the path.
fn deepest_kept(root: &Value, keys: &[Key]) -> Option<*const ()> {
    let mut node = root.clone();
    let mut deepest = None;
    for key in keys {
        if !node.accepts(key) {
            break;
        }
        deepest = node.container_addr();
        match node.child_at(key) {
            Some(child) => node = child,
            None => break,
        }
    }
    deepest
}

/// Replaces `slot` with an empty container unless it already accepts `key`.
fn conform(slot: &mut Value, key: &Key) {
    if slot.accepts(key) {
        return;
    }
    if !slot.is_null() {
        log::debug!(
            "replacing {} with empty {} to reach {key}",
            slot.kind(),
            key.container_kind()
        );
    }
    *slot = key.empty_container();
}

/// Walks `keys` from `root`, conforming every node to the key after it, and
/// returns the container that `next` will index.
fn container_for(root: &mut Value, keys: &[Key], next: &Key) -> Value {
    conform(root, keys.first().unwrap_or(next));
    let mut node = root.clone();
    for (i, key) in keys.iter().enumerate() {
        let following = keys.get(i + 1).unwrap_or(next);
        node = with_slot(&node, key, |slot| {
            conform(slot, following);
            slot.clone()
        });
    }
    node
}

/// Runs `f` on the slot `key` designates in `node`, creating it if needed.
fn with_slot<R>(node: &Value, key: &Key, f: impl FnOnce(&mut Value) -> R) -> R {
    match (node, key) {
        (Value::Object(obj), Key::Name(name)) => f(obj.borrow_mut().get_or_insert_null(name)),
        (Value::Array(arr), Key::Index(index)) => {
            let mut items = arr.borrow_mut();
            if *index >= items.len() {
                items.resize(index + 1, Value::Null);
            }
            f(&mut items[*index])
        }
        _ => unreachable!("{} cannot be indexed by {key}", node.kind()),
    }
}
