// src/lib.rs
pub mod config;
pub mod demo;
pub mod dev;
pub mod lexer;
