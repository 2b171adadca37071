// src/core/serialization/mod.rs

pub mod json_converter;
pub mod types;

pub use json_converter::{from_json, to_json};
