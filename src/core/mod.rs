pub mod candidate;
pub mod game_record;

pub use candidate::SearchCandidate;
pub use game_record::GameRecord;
