// src/backends/mod.rs

//! Coefficient domains the polynomial engine ships with.

pub mod native64;
pub mod native128;
pub mod bigint_backend;
pub mod rational;
