//! # Portal Identity
//!
//! User profile types and membership resolution: turning an external user ID
//! into the role set the dashboard resolves against.

pub mod directory;
pub mod types;

pub use directory::{MembershipResolver, UserDirectory};
pub use types::{MembershipResolution, UserProfile};
