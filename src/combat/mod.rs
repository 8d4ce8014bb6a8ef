pub mod logic;
pub mod types;
