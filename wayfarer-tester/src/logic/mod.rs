pub mod assets;
pub mod reports;
pub mod seeds;
pub mod tester;

pub use assets::{TesterAssets, random_trip, seeded_rng};
pub use seeds::resolve_seed_inputs;
pub use tester::*;
