pub mod cli;
pub mod cli_handlers;
pub mod db;
pub mod error;
pub mod ids;
pub mod models;
pub mod render;
pub mod shell;

pub use db::{Database, TodoStore};
pub use error::{IdFormatError, Result, TodoError};
pub use models::*;
