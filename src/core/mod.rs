pub mod calculator;
pub mod loader;
pub mod logic;
pub mod parser;
pub mod ranking;
