//! Shapes exchanged with the native backend.
//!
//! Every response the backend sends is reconstructed through [`reconstruct`]
//! into one of the shapes below. Fields are optional throughout: a field the
//! producer omitted stays `None` rather than taking a default.

pub mod catalog;
pub mod envelope;
pub mod logs;
mod node;
pub mod settings;
pub mod system;

pub use catalog::{CatalogCover, CatalogGame, CatalogGameLookupResult, CatalogSearchResult};
pub use envelope::{describe_error, OperationResult};
pub use logs::{
    DashboardStatistics, InsertLogResult, LogFormResult, LogRecord, LoggedGame, StoredLog,
    TimePlayed,
};
pub use node::{reconstruct, reconstruct_text, Keyed, Node, Scalar};
pub use settings::{
    ExecutableDetails, ExecutableLink, InsertExecutableDetailsResult, UserSettings,
    UserSettingsData, UserSettingsResult,
};
pub use system::{AccessTokenResponse, CurrentUsernameResult, OpenDirectoryDialogResult};
