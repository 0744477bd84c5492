pub mod common;
pub mod generate;
pub mod list;
pub mod show;
