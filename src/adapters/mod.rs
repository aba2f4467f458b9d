pub mod assets;
pub mod filesystem;
pub mod settings_file;
