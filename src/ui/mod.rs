//! Raw backend payload types.
//!
//! These structs mirror the experiment-tracking backend's JSON responses
//! field for field and carry no behavior of their own. The canonical,
//! string-keyed vocabulary the rest of the crate operates on lives in
//! [`crate::graph`]; the bridge between the two is
//! [`crate::graph::normalize`].

pub mod types;

pub use types::*;
