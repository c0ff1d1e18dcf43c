//! Shared test utilities for gitprompt integration tests
//!
//! Everything runs against real git repositories in temporary directories.

pub mod assertions;
pub mod fixtures;
pub mod repository;
