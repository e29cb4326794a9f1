//! Computer decision making.

mod greedy;

pub use greedy::choose_card;
