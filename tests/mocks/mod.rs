//! Test doubles for maptel collaborators.

pub mod mock_validator;

pub use mock_validator::MockValidator;
