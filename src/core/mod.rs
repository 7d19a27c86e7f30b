pub mod analysis;
pub mod settlement;
