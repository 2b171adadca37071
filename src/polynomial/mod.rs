// src/polynomial/mod.rs

pub mod polynomial;
pub mod operand;
pub mod division;
pub mod render;
pub mod ops;

pub use operand::{coerce, coerce_json, coerce_json_str, Operand};
pub use polynomial::Polynomial;
