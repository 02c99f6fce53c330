//! Object storage service implementations.
//!
//! - Objects: List, Download, Create, Copy, Delete, Get and Update

mod objects;

pub use objects::{ObjectsService, PLAIN_TEXT};
