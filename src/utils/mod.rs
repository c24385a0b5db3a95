pub mod command;
pub mod fs;
pub mod logging;
pub mod paths;
pub mod templates;
