use crate::db::DEFAULT_DB_FILE;
use crate::error::{Result, TodoError};
use crate::ids::IdSet;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(about = "Todo list manager backed by SQLite")]
#[command(version)]
#[command(group(ArgGroup::new("mode").required(true).multiple(false)))]
pub struct Cli {
    /// List all todo items
    #[arg(short, long, group = "mode")]
    pub list: bool,

    /// Add a todo item from the given words
    #[arg(short, long, value_name = "TEXT", num_args = 1.., group = "mode")]
    pub add: Option<Vec<String>>,

    /// Mark items as done (e.g. 3, 1-4 or 1,3,5-7)
    #[arg(short, long, value_name = "IDS", group = "mode")]
    pub done: Option<IdSet>,

    /// Mark items as not done
    #[arg(short, long, value_name = "IDS", group = "mode")]
    pub undo: Option<IdSet>,

    /// Remove items
    #[arg(short, long, value_name = "IDS", group = "mode")]
    pub remove: Option<IdSet>,

    /// Remove all done items
    #[arg(short = 'R', long, group = "mode")]
    pub remove_done: bool,

    /// Start the interactive shell
    #[arg(short, long, group = "mode")]
    pub interactive: bool,

    /// Database file
    #[arg(long, value_name = "PATH", env = "TODO_DB", default_value = DEFAULT_DB_FILE)]
    pub db: PathBuf,
}

/// The single operation requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    List,
    Add(String),
    SetStatus { ids: IdSet, done: bool },
    Remove(IdSet),
    RemoveDone,
    Interactive,
}

impl Cli {
    pub fn mode(&self) -> Result<Mode> {
        let mode = if self.list {
            Mode::List
        } else if let Some(words) = &self.add {
            Mode::Add(words.join(" "))
        } else if let Some(ids) = &self.done {
            Mode::SetStatus {
                ids: ids.clone(),
                done: true,
            }
        } else if let Some(ids) = &self.undo {
            Mode::SetStatus {
                ids: ids.clone(),
                done: false,
            }
        } else if let Some(ids) = &self.remove {
            Mode::Remove(ids.clone())
        } else if self.remove_done {
            Mode::RemoveDone
        } else if self.interactive {
            Mode::Interactive
        } else {
            return Err(TodoError::InvalidMode);
        };

        Ok(mode)
    }
}
