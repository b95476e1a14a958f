//! # User API Library
//!
//! This crate provides a layered CRUD web service for user records with:
//! - RESTful HTTP endpoints
//! - PostgreSQL for persistent storage
//!
//! ## Architecture
//!
//! The crate follows a layered structure:
//!
//! - **Domain Layer**: Core entities and repository traits
//! - **Application Layer**: Services and DTOs
//! - **Infrastructure Layer**: Database pool and repository implementations
//! - **Presentation Layer**: HTTP routes, handlers, and middleware
//!
//! ## Module Structure
//!
//! ```text
//! user_api/
//! +-- config/        Configuration management
//! +-- domain/        Domain entities and repository traits
//! +-- application/   Application services and DTOs
//! +-- infrastructure/ Database and repository implementations
//! +-- presentation/  HTTP routes, handlers, and middleware
//! +-- shared/        Common utilities (error taxonomy)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core entities
pub mod domain;

// Application layer - Services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
