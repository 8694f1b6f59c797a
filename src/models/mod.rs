pub mod dataset;
pub mod persisted_state;
pub mod problem;
pub mod progress;
pub mod reminder;

pub use dataset::Dataset;
pub use persisted_state::PersistedState;
pub use problem::{ProblemId, ProblemRecord};
pub use progress::Progress;
pub use reminder::Reminder;
