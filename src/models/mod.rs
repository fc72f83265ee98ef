pub mod pair;
pub mod record;

pub use pair::{PairKey, PairOrder, ProjectPairKey};
pub use record::WorkRecord;
