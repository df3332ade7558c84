//! Domain value objects and types.
//!
//! Type-safe wrappers for phone numbers and directory handles, plus the
//! validation collaborator that turns raw strings into phone numbers.
//! Invalid data cannot be represented once it is past this layer.

pub mod errors;
pub mod handle;
pub mod phone;
pub mod validator;

pub use errors::ValidationError;
pub use handle::DirectoryHandle;
pub use phone::{PhoneNumber, DEFAULT_MAX_LEN};
pub use validator::{DigitValidator, NumberValidator};
