pub mod mobius;
pub mod parametric;
pub mod skydome;
