pub mod bet;
pub mod parlay;

pub use bet::{Bet, BetKind, BetResult};
pub use parlay::ParlayLeg;
