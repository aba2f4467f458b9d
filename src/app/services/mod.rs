pub mod config_scanner;
pub mod template_loader;
