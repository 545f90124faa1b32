pub mod calculator;
pub mod market;
