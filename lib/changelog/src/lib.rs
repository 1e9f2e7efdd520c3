pub mod changelog;
pub mod diagnostics;
pub mod errors;
pub mod format;
pub mod section;
pub mod settings;
