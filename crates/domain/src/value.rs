//! Helpers for the plain YAML values carried through documents.
//!
//! Attribute maps and state values stay as [`serde_yaml::Value`] trees all
//! the way from template documents to the rendered inventory, so key order
//! is preserved exactly as authored. These helpers cover the handful of
//! structural operations the model needs on top of that representation.

use serde_yaml::{Mapping, Value};

/// Look up a string key in a mapping.
#[must_use]
pub fn entry<'a>(mapping: &'a Mapping, key: &str) -> Option<&'a Value> {
    mapping.iter().find_map(|(k, v)| match k {
        Value::String(name) if name == key => Some(v),
        _ => None,
    })
}

/// Remove a string key from a mapping, keeping the order of the remaining
/// entries intact, and return its value.
pub fn take(mapping: &mut Mapping, key: &str) -> Option<Value> {
    if entry(mapping, key).is_none() {
        return None;
    }
    let mut taken = None;
    for (k, v) in std::mem::take(mapping) {
        if taken.is_none() && matches!(&k, Value::String(name) if name == key) {
            taken = Some(v);
        } else {
            mapping.insert(k, v);
        }
    }
    taken
}

/// Shallow-merge `incoming` into `base`. Keys already in `base` keep their
/// position and take the incoming value; new keys are appended in the order
/// they appear in `incoming`.
pub fn overwrite(base: &mut Mapping, incoming: &Mapping) {
    for (k, v) in incoming {
        base.insert(k.clone(), v.clone());
    }
}

/// Coerce a raw `state` attribute into the scalar stored on an inventory
/// entity. Booleans, floats, and sequences pass through unchanged; every
/// other value becomes its string rendering.
#[must_use]
pub fn coerce_state(value: Value) -> Value {
    match value {
        Value::Bool(_) | Value::Sequence(_) | Value::Null => value,
        Value::Number(ref number) if number.is_f64() => value,
        Value::String(_) => value,
        Value::Number(number) => Value::String(number.to_string()),
        other => Value::String(
            serde_yaml::to_string(&other)
                .map(|rendered| rendered.trim_end().to_string())
                .unwrap_or_default(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(pairs: &[(&str, Value)]) -> Mapping {
        pairs
            .iter()
            .map(|(k, v)| (Value::from(*k), v.clone()))
            .collect()
    }

    #[test]
    fn should_find_entries_by_string_key() {
        let map = mapping(&[("brightness", Value::from(100))]);
        assert_eq!(entry(&map, "brightness"), Some(&Value::from(100)));
        assert_eq!(entry(&map, "color"), None);
    }

    #[test]
    fn should_take_an_entry_and_preserve_the_rest_in_order() {
        let mut map = mapping(&[
            ("a", Value::from(1)),
            ("state", Value::from("on")),
            ("b", Value::from(2)),
        ]);

        let taken = take(&mut map, "state");

        assert_eq!(taken, Some(Value::from("on")));
        let keys: Vec<_> = map.iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(keys, vec![Value::from("a"), Value::from("b")]);
    }

    #[test]
    fn should_take_nothing_when_key_is_absent() {
        let mut map = mapping(&[("a", Value::from(1))]);
        assert_eq!(take(&mut map, "state"), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn should_overwrite_existing_keys_and_append_new_ones() {
        let mut base = mapping(&[("x", Value::from(1)), ("y", Value::from(2))]);
        let incoming = mapping(&[("y", Value::from(3)), ("z", Value::from(4))]);

        overwrite(&mut base, &incoming);

        let pairs: Vec<_> = base
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (Value::from("x"), Value::from(1)),
                (Value::from("y"), Value::from(3)),
                (Value::from("z"), Value::from(4)),
            ]
        );
    }

    #[test]
    fn should_pass_booleans_floats_and_sequences_through() {
        assert_eq!(coerce_state(Value::from(true)), Value::from(true));
        assert_eq!(coerce_state(Value::from(20.5)), Value::from(20.5));
        let list = Value::Sequence(vec![Value::from("a"), Value::from("b")]);
        assert_eq!(coerce_state(list.clone()), list);
    }

    #[test]
    fn should_render_integers_as_strings() {
        assert_eq!(coerce_state(Value::from(42)), Value::from("42"));
    }

    #[test]
    fn should_keep_strings_unchanged() {
        assert_eq!(coerce_state(Value::from("idle")), Value::from("idle"));
    }
}
