#![deny(missing_docs)]
#![doc = "Stabilizer codes built from Pauli strings, plus persistence and hashing helpers."]

/// Codes defined directly by their stabilizers and logical operators.
pub mod basic;
/// Well-known small codes.
pub mod catalog;
/// Canonical hashing helpers for stabilizer codes.
pub mod hash;
/// Serialization routines for JSON and binary round-trips.
pub mod serde;

pub use basic::{BasicCode, BasicCodeOptions, OperatorKind};
pub use catalog::{five_qubit_code, steane_code};
pub use hash::canonical_code_hash;
pub use self::serde::{from_bytes, from_json, to_bytes, to_json};
