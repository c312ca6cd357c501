//! Dot-path operations on a single locale tree.
//!
//! A locale tree is a JSON object whose leaves are translated strings. Only
//! objects are containers; every other value (including arrays) is a leaf.
//! None of these accessors fail: a path that cannot be walked yields `None`
//! or `false`, so callers can probe speculative keys cheaply.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

/// Collect the dot-path of every leaf in the tree.
pub fn flatten(tree: &Value) -> BTreeSet<String> {
    flatten_entries(tree).into_iter().map(|(key, _)| key).collect()
}

/// Collect every leaf together with its dot-path, in document order.
pub fn flatten_entries(tree: &Value) -> Vec<(String, &Value)> {
    let mut entries = Vec::new();
    if let Value::Object(map) = tree {
        collect_leaves(map, "", &mut entries);
    }
    entries
}

fn collect_leaves<'a>(
    map: &'a Map<String, Value>,
    prefix: &str,
    out: &mut Vec<(String, &'a Value)>,
) {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            Value::Object(child) => collect_leaves(child, &path, out),
            leaf => out.push((path, leaf)),
        }
    }
}

/// Look up the value at `path`.
pub fn get<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = tree;
    for part in path.split('.') {
        current = current.as_object()?.get(part)?;
    }
    Some(current)
}

/// Returns true if `path` resolves to any value in the tree.
pub fn contains(tree: &Value, path: &str) -> bool {
    get(tree, path).is_some()
}

/// Returns true if writing a string at `path` would clobber existing data:
/// the path names a section, or one of its ancestors is a string.
pub fn is_shape_conflict(tree: &Value, path: &str) -> bool {
    let mut current = tree;
    for part in path.split('.') {
        let Some(map) = current.as_object() else {
            return true;
        };
        match map.get(part) {
            Some(child) => current = child,
            None => return false,
        }
    }
    current.is_object()
}

/// Set the value at `path`, creating intermediate objects as needed.
///
/// A non-object value sitting where the path needs a container is replaced
/// by an empty object.
pub fn set(tree: &mut Value, path: &str, value: Value) {
    let parts: Vec<&str> = path.split('.').collect();
    let Some((last, parents)) = parts.split_last() else {
        return;
    };

    let mut current = tree;
    for part in parents {
        let map = ensure_object(current);
        let child = map
            .entry(part.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        ensure_object(child);
        current = child;
    }

    ensure_object(current).insert(last.to_string(), value);
}

fn ensure_object(value: &mut Value) -> &mut Map<String, Value> {
    if !value.is_object() {
        *value = Value::Object(Map::new());
    }
    match value {
        Value::Object(map) => map,
        _ => unreachable!("value was just replaced with an object"),
    }
}

/// Delete the entry at `path`.
///
/// Returns `false` without touching the tree when the path does not fully
/// exist. Sibling order is preserved.
pub fn delete(tree: &mut Value, path: &str) -> bool {
    let parts: Vec<&str> = path.split('.').collect();
    let Some((last, parents)) = parts.split_last() else {
        return false;
    };

    let mut current = tree;
    for part in parents {
        match current {
            Value::Object(map) => match map.get_mut(*part) {
                Some(child) => current = child,
                None => return false,
            },
            _ => return false,
        }
    }

    match current {
        Value::Object(map) => map.shift_remove(*last).is_some(),
        _ => false,
    }
}

/// Recursively remove objects left without any entries.
///
/// Children are pruned before their parent is inspected, so emptying a deep
/// leaf cascades up to every ancestor that held nothing else. The root is
/// kept even when it ends up empty.
pub fn prune_empty(tree: &mut Value) {
    if let Value::Object(map) = tree {
        for child in map.values_mut() {
            prune_empty(child);
        }

        map.retain(|_, v| !matches!(v, Value::Object(m) if m.is_empty()));
    }
}

/// Returns the non-empty string stored at `path`, if any.
pub fn get_text<'a>(tree: &'a Value, path: &str) -> Option<&'a str> {
    get(tree, path)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}
