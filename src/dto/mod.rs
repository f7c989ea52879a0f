//! DTO modules that bridge the shell state with templates.

pub mod shell;
