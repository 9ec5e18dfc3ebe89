//! User identity module.
//!
//! # Module Structure
//!
//! - `model`: User profile domain model
//! - `service`: Identity provider trait and a default implementation
//!
//! # Usage
//!
//! ```ignore
//! use gighub_core::user::{UserProfile, IdentityProvider, DefaultIdentityProvider};
//! ```

mod model;
mod service;

// Re-export public API
pub use model::UserProfile;
pub use service::{DefaultIdentityProvider, IdentityProvider};
