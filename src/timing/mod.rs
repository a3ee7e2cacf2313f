pub mod bezier;
pub mod intervals;
