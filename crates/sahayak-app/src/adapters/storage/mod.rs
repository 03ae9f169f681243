//! Session Store Implementations

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemorySessionStore;

#[cfg(test)]
pub(crate) use memory::StuckStore;
