//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! This module provides concrete implementations of the repository traits
//! defined in the domain layer.
//!
//! ## Available Repositories
//!
//! - **UserRepository** - User record management

pub mod user_repository;

pub use user_repository::PgUserRepository;
