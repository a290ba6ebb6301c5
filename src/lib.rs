pub mod clean;
pub mod config;
pub mod fs;
pub mod paths;
pub mod rules;
pub mod shell;
