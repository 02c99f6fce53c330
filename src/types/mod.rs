//! Option bundles, content sources and the response wrapper used by the
//! object operations.

mod common;
mod requests;
mod responses;

pub use common::*;
pub use requests::*;
pub use responses::*;
