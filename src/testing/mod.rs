//! Test doubles shared by unit tests.

mod memory_project_filesystem;

pub use memory_project_filesystem::MemoryProjectFilesystem;
