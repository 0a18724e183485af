pub mod cli;
pub mod ports;
