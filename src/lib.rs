//! A single-pass JSON parser, serializer, and typed value-tree accessor API.
//!
//! ```rust
//! use jsontree::{parse, serialize, Value};
//!
//! let mut v = parse(r#"{"k":1,"s":"v"}"#).unwrap();
//! assert_eq!(v.find_object_value("k"), Some(&Value::Number(1.0)));
//!
//! v.set_object_value("extra").set_boolean(true);
//! let text = serialize(&v);
//! assert_eq!(parse(&text).unwrap(), v);
//! ```
//!
//! The crate is strictly synchronous: parsing and serializing are pure,
//! in-memory, single-threaded operations with no I/O. A [`Value`] tree is
//! a strict tree with no shared ownership and no cycles; distinct trees may
//! be used freely across threads, but a single tree is not safe under
//! concurrent mutation.

mod access;
mod error;
mod parser;
mod scratch;
mod serializer;
mod value;

pub use error::{Error, Result};
pub use parser::parse;
pub use scratch::{PARSE_STACK_INITIAL_BYTES, STRINGIFY_STACK_INITIAL_BYTES};
pub use serializer::serialize;
pub use value::{Member, Value, ValueType, KEY_NOT_EXIST};
