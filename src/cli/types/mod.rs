//! Shared types for CLI arguments and API identifiers.

pub mod ids;
pub mod position;
pub mod time;
pub mod trend;

pub use ids::{DraftId, LeagueId, PlayerId, UserId};
pub use position::Position;
pub use time::{Season, Week};
pub use trend::TrendDirection;
