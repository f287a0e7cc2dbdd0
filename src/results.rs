//! Define the named, type-checked result store.
//!
//! The store is the hand-off point between the driver and the verifier of one
//! test case: the driver records the outcome of the action under test, the
//! verifier reads it back under the same key with the type it expects.
//!
//! ## Notes
//! - Keys are compared with exact, case-sensitive equality; insertion order
//!   is irrelevant.
//! - A write fully replaces any previous value under the same key.
//! - A read of a missing key or with the wrong requested type is a contract
//!   violation reported as an error, never a silent default.

use std::any::{Any, type_name};
use std::collections::HashMap;
use std::fmt;

use crate::errors::HarnessError;

/// One stored value plus the type name recorded at write time. `dyn Any`
/// cannot name its concrete type, so the name is captured while it is still
/// statically known; mismatch errors need it.
struct Slot {
    value: Box<dyn Any>,
    type_name: &'static str,
}

/// Store the last recorded outcome of each action under test, keyed by name.
#[derive(Default)]
pub struct ResultStore {
    slots: HashMap<String, Slot>,
}

impl ResultStore {
    /// Construct an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// ## Errors
    /// - [`HarnessError::BlankKey`] if `key` is empty or all whitespace.
    pub fn set<T: Any>(&mut self, key: &str, value: T) -> Result<(), HarnessError> {
        let key = checked_key(key)?;
        self.slots.insert(
            key.to_owned(),
            Slot {
                value: Box::new(value),
                type_name: type_name::<T>(),
            },
        );
        Ok(())
    }

    /// Return the value stored under `key` as a `T`.
    ///
    /// ## Errors
    /// - [`HarnessError::BlankKey`] if `key` is empty or all whitespace.
    /// - [`HarnessError::ResultNotFound`] if `key` was never written.
    /// - [`HarnessError::ResultTypeMismatch`] if the stored value is not a
    ///   `T`; the error names both the requested and the stored type.
    pub fn get<T: Any>(&self, key: &str) -> Result<&T, HarnessError> {
        let key = checked_key(key)?;
        let slot = self
            .slots
            .get(key)
            .ok_or_else(|| HarnessError::ResultNotFound {
                key: key.to_owned(),
            })?;
        slot.value
            .downcast_ref::<T>()
            .ok_or_else(|| HarnessError::ResultTypeMismatch {
                key: key.to_owned(),
                expected: type_name::<T>(),
                actual: slot.type_name,
            })
    }

    /// Return true if a value is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    /// Return the number of stored results.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Return true if nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Debug for ResultStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, slot) in &self.slots {
            map.entry(key, &slot.type_name);
        }
        map.finish()
    }
}

/// Reject empty/blank keys up front; "null" keys are unrepresentable here.
fn checked_key(key: &str) -> Result<&str, HarnessError> {
    if key.trim().is_empty() {
        Err(HarnessError::BlankKey)
    } else {
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips() {
        let mut store = ResultStore::new();
        store
            .set("greeting", String::from("Hello, Alice!"))
            .expect("set failed");
        let got: &String = store.get("greeting").expect("get failed");
        assert_eq!(got, "Hello, Alice!");
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut store = ResultStore::new();
        store.set("count", 1_i64).expect("first set failed");
        store.set("count", 2_i64).expect("second set failed");
        assert_eq!(store.get::<i64>("count"), Ok(&2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn overwrite_may_change_the_stored_type() {
        let mut store = ResultStore::new();
        store.set("value", 1_i64).expect("set failed");
        store
            .set("value", String::from("one"))
            .expect("overwrite failed");
        let got: &String = store.get("value").expect("get failed");
        assert_eq!(got, "one");
    }

    #[test]
    fn get_of_unwritten_key_is_not_found() {
        let store = ResultStore::new();
        let err = store.get::<String>("missing").expect_err("should fail");
        assert_eq!(
            err,
            HarnessError::ResultNotFound {
                key: "missing".to_owned()
            }
        );
    }

    #[test]
    fn get_with_wrong_type_names_both_types() {
        let mut store = ResultStore::new();
        store
            .set("greeting", String::from("Hello, Alice!"))
            .expect("set failed");
        let err = store.get::<i64>("greeting").expect_err("should fail");
        let message = err.to_string();
        assert!(message.contains("i64"), "missing expected type: {message}");
        assert!(
            message.contains("String"),
            "missing actual type: {message}"
        );
    }

    #[test]
    fn blank_keys_are_rejected_on_set_and_get() {
        let mut store = ResultStore::new();
        assert_eq!(store.set("", 1_i64), Err(HarnessError::BlankKey));
        assert_eq!(store.set("   \t", 1_i64), Err(HarnessError::BlankKey));
        assert_eq!(store.get::<i64>(""), Err(HarnessError::BlankKey));
        assert_eq!(store.get::<i64>(" "), Err(HarnessError::BlankKey));
    }

    #[test]
    fn keys_are_case_sensitive() {
        let mut store = ResultStore::new();
        store.set("Key", 1_i64).expect("set failed");
        assert!(store.contains("Key"));
        assert!(!store.contains("key"));
        assert_eq!(
            store.get::<i64>("key"),
            Err(HarnessError::ResultNotFound {
                key: "key".to_owned()
            })
        );
    }
}
