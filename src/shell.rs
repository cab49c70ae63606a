//! Interactive read-eval-print loop.
//!
//! Each input line is split into a command token and its argument text and
//! looked up in a command table. The session ends on `exit`, end of input
//! or an interrupt.

use crate::cli_handlers::{handle_add, handle_list, handle_remove_done};
use crate::db::TodoStore;
use crate::error::Result;
use crate::render::Palette;
use std::collections::BTreeMap;
use std::future::Future;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

pub const BANNER: &str = "todo interactive mode, type help or ? to list commands";
pub const PROMPT: &str = "todo>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Running,
    Terminated,
}

/// What a command does once its token is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    List,
    Add,
    SetStatus(bool),
    Remove,
    Exit,
    Help,
}

#[derive(Debug, Clone)]
struct Command {
    name: &'static str,
    action: Action,
    help: String,
}

impl Command {
    fn new(name: &'static str, action: Action, help: &str) -> Self {
        Command {
            name,
            action,
            help: help.to_string(),
        }
    }
}

/// Build a command that forwards to `target`, documenting where it points
fn alias(name: &'static str, target: &Command) -> Command {
    Command {
        name,
        action: target.action,
        help: format!("Alias for `{}`\n\n{}", target.name, target.help),
    }
}

fn command_table() -> BTreeMap<&'static str, Command> {
    let list = Command::new("list", Action::List, "List all todo items: `list`");
    let remove = Command::new(
        "remove",
        Action::Remove,
        "Remove a todo item by ID: `remove ID`. Use 'remove done' to remove all done items.",
    );

    let commands = vec![
        alias("ls", &list),
        alias("rm", &remove),
        list,
        remove,
        Command::new("add", Action::Add, "Add a todo item: `add TEXT...`"),
        Command::new(
            "done",
            Action::SetStatus(true),
            "Mark an item as done: `done ID`",
        ),
        Command::new(
            "undo",
            Action::SetStatus(false),
            "Mark an item as not done: `undo ID`",
        ),
        Command::new("exit", Action::Exit, "Exit out of the application"),
        Command::new(
            "help",
            Action::Help,
            "List available commands with `help` or detailed help with `help CMD`",
        ),
    ];

    commands.into_iter().map(|c| (c.name, c)).collect()
}

/// Split a line into its command token and the trimmed remainder
fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim();
    if let Some(rest) = line.strip_prefix('?') {
        return ("help", rest.trim());
    }
    match line.split_once(char::is_whitespace) {
        Some((token, rest)) => (token, rest.trim()),
        None => (line, ""),
    }
}

/// An interactive session against a store
pub struct Shell<'a> {
    store: &'a dyn TodoStore,
    out: &'a mut dyn Write,
    palette: Palette,
    commands: BTreeMap<&'static str, Command>,
    last_command: Option<String>,
    state: ShellState,
}

impl<'a> Shell<'a> {
    pub fn new(store: &'a dyn TodoStore, out: &'a mut dyn Write, palette: Palette) -> Self {
        Shell {
            store,
            out,
            palette,
            commands: command_table(),
            last_command: None,
            state: ShellState::Running,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    /// The most recent non-blank line; blank input clears it
    pub fn last_command(&self) -> Option<&str> {
        self.last_command.as_deref()
    }

    /// Read and execute lines until exit, end of input or `interrupt` resolves
    pub async fn run<R, F>(&mut self, mut input: R, interrupt: F) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        F: Future<Output = ()>,
    {
        info!("starting interactive shell");
        writeln!(self.out, "{BANNER}")?;

        tokio::pin!(interrupt);
        let mut line = String::new();

        while self.state == ShellState::Running {
            write!(self.out, "{} ", self.palette.prompt(PROMPT))?;
            self.out.flush()?;
            line.clear();

            // an interrupt wins over input that is already buffered
            tokio::select! {
                biased;
                _ = &mut interrupt => {
                    debug!("interrupted");
                    writeln!(self.out)?;
                    self.state = ShellState::Terminated;
                }
                read = input.read_line(&mut line) => {
                    if read? == 0 {
                        writeln!(self.out)?;
                        self.state = ShellState::Terminated;
                    } else {
                        self.execute(&line)?;
                    }
                }
            }
        }

        self.out.flush()?;
        Ok(())
    }

    /// Execute one input line and return the resulting state
    pub fn execute(&mut self, line: &str) -> Result<ShellState> {
        let (token, args) = split_command(line);
        if token.is_empty() {
            self.last_command = None;
            return Ok(self.state);
        }
        self.last_command = Some(line.trim().to_string());

        let Some(action) = self.commands.get(token).map(|c| c.action) else {
            writeln!(self.out, "Unknown command: '{token}'")?;
            return Ok(self.state);
        };
        debug!(token, ?action, "executing command");

        match action {
            Action::List => handle_list(self.store, &mut *self.out, &self.palette)?,
            Action::Add => self.do_add(args)?,
            Action::SetStatus(done) => self.do_set_status(args, done)?,
            Action::Remove => self.do_remove(args)?,
            Action::Help => self.do_help(args)?,
            Action::Exit => self.state = ShellState::Terminated,
        }

        Ok(self.state)
    }

    fn do_add(&mut self, args: &str) -> Result<()> {
        let text = args.split_whitespace().collect::<Vec<_>>().join(" ");
        if text.is_empty() {
            writeln!(self.out, "Usage: add TEXT...")?;
            return Ok(());
        }
        handle_add(self.store, &mut *self.out, &text)
    }

    fn do_set_status(&mut self, args: &str, done: bool) -> Result<()> {
        match args.parse::<i64>() {
            Ok(id) => {
                self.store.set_status(id, done)?;
            }
            Err(_) => writeln!(self.out, "Invalid id '{args}'")?,
        }
        Ok(())
    }

    fn do_remove(&mut self, args: &str) -> Result<()> {
        if args == "done" {
            return handle_remove_done(self.store, &mut *self.out);
        }

        match args.parse::<i64>() {
            Ok(id) => {
                if !self.store.remove(id)? {
                    writeln!(self.out, "Item #{id} not found")?;
                }
            }
            Err(_) => writeln!(self.out, "Invalid id '{args}'")?,
        }
        Ok(())
    }

    fn do_help(&mut self, args: &str) -> Result<()> {
        if args.is_empty() {
            let header = "Documented commands (type help <topic>):";
            let names = self.commands.keys().copied().collect::<Vec<_>>().join("  ");
            writeln!(self.out)?;
            writeln!(self.out, "{header}")?;
            writeln!(self.out, "{}", "=".repeat(header.len()))?;
            writeln!(self.out, "{names}")?;
            writeln!(self.out)?;
            return Ok(());
        }

        match self.commands.get(args) {
            Some(command) => writeln!(self.out, "{}", command.help)?,
            None => writeln!(self.out, "No help on '{args}'")?,
        }
        Ok(())
    }
}
