//! # Domain Entities
//!
//! Core domain entities representing the business objects of the service.
//! Each entity maps directly to its corresponding database table.
//!
//! ## Entities
//!
//! - **User**: A user record with a caller-assigned identifier
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access
//! operations. These traits are implemented in the infrastructure layer,
//! following the dependency inversion principle.

mod user;

// Re-export User entity and related types
pub use user::{User, UserRepository};
