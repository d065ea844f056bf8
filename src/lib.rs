//! Frontend side of the PlayLog desktop bridge.
//!
//! - [`bindings`]: typed shapes reconstructed from backend payloads
//! - [`log_form`]: maps a picked catalog game and the log form to a stored record
//! - [`statuses`]: the log status catalog
//! - [`ipc`]: typed wrappers over the host `invoke` call

pub mod bindings;
mod error;
pub mod ipc;
pub mod log_form;
pub mod statuses;

pub use bindings::{reconstruct, reconstruct_text, Keyed, Node, OperationResult, Scalar};
pub use error::BridgeError;
pub use log_form::{build_log_record, build_log_update, LogData, LogFormSubmission, LogGameRef};
pub use statuses::{default_statuses, load_statuses, StatusCatalog, StatusDefinition};
