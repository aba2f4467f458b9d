pub mod project_scaffold;

pub use project_scaffold::{ScaffoldFile, scaffold_files};
