//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings for exposing the Rust sweep engine to Python.
//!
//! # Design Principles
//!
//! 1. **Thin surface**: one engine class plus a defaults helper, nothing else
//! 2. **Plain data across the boundary**: dicts, lists, numbers and strings
//! 3. **Rust-side validation**: every config error is raised at construction
//! 4. **ValueError for bad input**: engine rejections map to one exception type
//! 5. **Copies, not views**: Python never holds references into Rust state
//!
//! The Python host keeps visualization and persistence; the numbers all come
//! from here.

pub mod engine;
pub mod types;
