//! Maptel - an in-memory registry of phone number remapping directories.
//!
//! Callers create independent directories, each mapping an original phone
//! number to the number it was changed to. A lookup follows the chain of
//! changes until it reaches a number with no further change; a chain that
//! loops back on itself resolves to the number it started from.
//!
//! # Architecture
//!
//! - **domain**: Phone number and handle value objects, validation
//! - **store**: Directory tables and the handle-keyed store that owns them
//! - **resolver**: Redirection chain resolution with cycle detection
//! - **services**: The caller-facing operations
//! - **global**: Process-wide instance with `maptel_*` free functions
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **metrics**: Operation counters
//! - **observability**: Tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use maptel::{Maptel, MaptelService};
//!
//! let maptel = Maptel::new();
//! let h = maptel.create().unwrap();
//! maptel.insert(h, "111", "222").unwrap();
//! maptel.insert(h, "222", "333").unwrap();
//! assert_eq!(maptel.transform(h, "111").unwrap().as_str(), "333");
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod global;
pub mod metrics;
pub mod observability;
pub mod resolver;
pub mod services;
pub mod store;

pub use config::Config;
pub use domain::{DigitValidator, DirectoryHandle, NumberValidator, PhoneNumber, ValidationError};
pub use error::{ConfigError, MaptelError, MaptelResult};
pub use metrics::{Metrics, MetricsSummary};
pub use resolver::{Outcome, Resolution};
pub use services::{Maptel, MaptelService};
pub use store::{Directory, DirectoryStore};
