pub mod file;
pub mod mapping;
pub mod reply;
