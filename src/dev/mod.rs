// src/dev/mod.rs
pub mod generator;
