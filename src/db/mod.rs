//! Storage layer (in-memory records and browser sessions).

pub mod memory;
pub mod session;

pub use memory::RunningLogDb;
pub use session::{KeyValueStore, SessionStore};

/// Session storage key names as constants.
pub mod keys {
    /// Currently selected mock user
    pub const CURRENT_USER: &str = "running_app_current_user";
}
