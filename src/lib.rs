//! typegrid library — type-dependency graph construction and grid layout.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
