// src/core/mod.rs

pub mod coefficient;
pub mod serialization;

pub use coefficient::{BackendType, Coefficient};
