pub mod app;
pub mod config;
pub mod error;
pub mod import;
pub mod models;
pub mod storage;
pub mod time;

pub use app::{App, RemindOutcome, ToggleOutcome};
pub use error::{Error, Result};
pub use models::{Dataset, PersistedState, ProblemId, ProblemRecord, Reminder};
pub use storage::StateStore;
