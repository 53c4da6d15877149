//! The typed accessor surface: getters, setters, and array/object mutation.
//!
//! Every getter documents the kind it requires. Calling one against the
//! wrong kind is a caller bug and panics, mirroring the "abort via assertion,
//! caller bugs not recoverable errors" contract for precondition failures.

use crate::value::{Member, Value, ValueType, KEY_NOT_EXIST};

impl Value {
    /// Reset to `Null`, releasing any owned payload. Idempotent.
    pub fn set_null(&mut self) {
        *self = Value::Null;
    }

    /// Alias for [`Value::set_null`]; destruction is reset-to-null.
    pub fn free(&mut self) {
        self.set_null();
    }

    pub fn is_equal(&self, other: &Value) -> bool {
        self == other
    }

    pub fn get_boolean(&self) -> bool {
        match self {
            Value::True => true,
            Value::False => false,
            other => panic!("get_boolean called on a {}", other.get_type()),
        }
    }

    pub fn set_boolean(&mut self, b: bool) {
        *self = if b { Value::True } else { Value::False };
    }

    pub fn get_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            other => panic!("get_number called on a {}", other.get_type()),
        }
    }

    pub fn set_number(&mut self, n: f64) {
        *self = Value::Number(n);
    }

    pub fn get_string(&self) -> &str {
        match self {
            Value::String(s) => s,
            other => panic!("get_string called on a {}", other.get_type()),
        }
    }

    pub fn get_string_length(&self) -> usize {
        self.get_string().len()
    }

    pub fn set_string(&mut self, s: &str) {
        *self = Value::String(s.to_owned());
    }

    // -- Arrays --------------------------------------------------------

    pub fn set_array(&mut self, capacity: usize) {
        *self = Value::Array(Vec::with_capacity(capacity));
    }

    fn array(&self) -> &Vec<Value> {
        match self {
            Value::Array(a) => a,
            other => panic!("array accessor called on a {}", other.get_type()),
        }
    }

    fn array_mut(&mut self) -> &mut Vec<Value> {
        match self {
            Value::Array(a) => a,
            other => panic!("array accessor called on a {}", other.get_type()),
        }
    }

    pub fn get_array_size(&self) -> usize {
        self.array().len()
    }

    pub fn get_array_capacity(&self) -> usize {
        self.array().capacity()
    }

    pub fn reserve_array(&mut self, capacity: usize) {
        let a = self.array_mut();
        if capacity > a.capacity() {
            a.reserve_exact(capacity - a.len());
        }
    }

    pub fn shrink_array(&mut self) {
        self.array_mut().shrink_to_fit();
    }

    pub fn clear_array(&mut self) {
        self.array_mut().clear();
    }

    pub fn get_array_element(&self, index: usize) -> &Value {
        &self.array()[index]
    }

    pub fn get_array_element_mut(&mut self, index: usize) -> &mut Value {
        &mut self.array_mut()[index]
    }

    /// Append a `Null` slot and return a reference to it.
    pub fn pushback_array_element(&mut self) -> &mut Value {
        let a = self.array_mut();
        a.push(Value::Null);
        a.last_mut().expect("just pushed")
    }

    pub fn popback_array_element(&mut self) {
        let a = self.array_mut();
        assert!(!a.is_empty(), "popback_array_element on an empty array");
        a.pop();
    }

    pub fn insert_array_element(&mut self, index: usize) -> &mut Value {
        let a = self.array_mut();
        assert!(index <= a.len(), "insert_array_element index out of range");
        a.insert(index, Value::Null);
        &mut a[index]
    }

    pub fn erase_array_element(&mut self, index: usize, count: usize) {
        let a = self.array_mut();
        assert!(
            index + count <= a.len(),
            "erase_array_element range out of bounds"
        );
        a.drain(index..index + count);
    }

    // -- Objects ---------------------------------------------------------

    pub fn set_object(&mut self, capacity: usize) {
        *self = Value::Object(Vec::with_capacity(capacity));
    }

    fn object(&self) -> &Vec<Member> {
        match self {
            Value::Object(o) => o,
            other => panic!("object accessor called on a {}", other.get_type()),
        }
    }

    fn object_mut(&mut self) -> &mut Vec<Member> {
        match self {
            Value::Object(o) => o,
            other => panic!("object accessor called on a {}", other.get_type()),
        }
    }

    pub fn get_object_size(&self) -> usize {
        self.object().len()
    }

    pub fn get_object_capacity(&self) -> usize {
        self.object().capacity()
    }

    pub fn reserve_object(&mut self, capacity: usize) {
        let o = self.object_mut();
        if capacity > o.capacity() {
            o.reserve_exact(capacity - o.len());
        }
    }

    pub fn shrink_object(&mut self) {
        self.object_mut().shrink_to_fit();
    }

    pub fn clear_object(&mut self) {
        self.object_mut().clear();
    }

    pub fn get_object_key(&self, index: usize) -> &str {
        &self.object()[index].key
    }

    pub fn get_object_key_length(&self, index: usize) -> usize {
        self.get_object_key(index).len()
    }

    pub fn get_object_value(&self, index: usize) -> &Value {
        &self.object()[index].value
    }

    pub fn get_object_value_mut(&mut self, index: usize) -> &mut Value {
        &mut self.object_mut()[index].value
    }

    /// Linear scan for the first member with a matching key; `KEY_NOT_EXIST`
    /// if absent.
    pub fn find_object_index(&self, key: &str) -> usize {
        self.object()
            .iter()
            .position(|m| m.key == key)
            .unwrap_or(KEY_NOT_EXIST)
    }

    pub fn find_object_value(&self, key: &str) -> Option<&Value> {
        self.object().iter().find(|m| m.key == key).map(|m| &m.value)
    }

    pub fn find_object_value_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.object_mut()
            .iter_mut()
            .find(|m| m.key == key)
            .map(|m| &mut m.value)
    }

    /// Return the existing value slot for `key` if present, otherwise append
    /// a fresh `Null`-valued member and return its slot.
    pub fn set_object_value(&mut self, key: &str) -> &mut Value {
        if self.find_object_index(key) == KEY_NOT_EXIST {
            self.object_mut().push(Member::new(key, Value::Null));
        }
        let index = self.find_object_index(key);
        self.get_object_value_mut(index)
    }

    pub fn remove_object_value(&mut self, index: usize) {
        let o = self.object_mut();
        assert!(index < o.len(), "remove_object_value index out of bounds");
        o.remove(index);
    }

    // -- Copy / move / swap -----------------------------------------------

    /// Deep clone `src` into `self`. Afterward the two trees share no
    /// storage; mutating one never affects the other.
    pub fn copy_from(&mut self, src: &Value) {
        *self = src.clone();
    }

    /// Take `src`'s payload, leaving `src` as `Null`.
    pub fn move_from(&mut self, src: &mut Value) {
        *self = std::mem::replace(src, Value::Null);
    }

    pub fn swap(&mut self, other: &mut Value) {
        std::mem::swap(self, other);
    }
}

/// Convenience free functions matching the accessor table's call style for
/// operations that don't read naturally as methods on a single `Value`.
pub fn is_equal(a: &Value, b: &Value) -> bool {
    a == b
}

pub fn get_type(v: &Value) -> ValueType {
    v.get_type()
}
