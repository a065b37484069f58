//! Services - External Collaborators
//!
//! Everything the pages talk to that lives outside this crate: the platform
//! host bridge, the static suggestion resource, and the operator-side payload
//! dispatch.

pub mod bridge;
pub mod dispatch;
pub mod suggestions;
