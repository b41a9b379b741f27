pub mod parse;
pub mod points;
pub mod rounds;
pub mod standings;
pub mod validation;
pub mod workout;

pub use parse::ParseResult;
pub use points::{EventPointsResult, EventScoreInput};
pub use rounds::{EncodedRounds, RoundInput};
pub use standings::{StandingsEntry, StandingsInput};
pub use validation::ValidationReport;
pub use workout::WorkoutDefinition;
