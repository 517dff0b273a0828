pub mod matcher;
pub mod state;

pub use matcher::{find_from, matches_at};
pub use state::{SearchOutcome, SearchState};
