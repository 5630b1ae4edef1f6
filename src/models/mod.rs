pub mod entry;
pub mod keys;
pub mod stage;

pub use entry::{IncomingRecord, VocabEntry, WordSection};
pub use keys::{card_filename, normalize_key};
pub use stage::{resolve, StageName, StageTransition};
