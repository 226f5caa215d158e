pub mod file;
pub mod interface;
