pub mod check;
pub mod clean;
pub mod dump;
pub mod generate;
pub mod resolve;
pub mod run_common;
