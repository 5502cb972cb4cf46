pub mod backend;
pub mod display;
pub mod input;
