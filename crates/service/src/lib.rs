//! Service layer for the `friends` and `posts` collections.
//! - Request payload validation lives next to each resource.
//! - Persistence goes through the `Repository` abstraction so handlers can run
//!   against PostgreSQL or an in-memory store.

pub mod errors;
pub mod resource;
pub mod repository;
pub mod repo;
pub mod service;

pub use resource::{Friend, Post, Resource};
pub use service::ResourceService;
