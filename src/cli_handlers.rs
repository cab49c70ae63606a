use crate::cli::Mode;
use crate::db::TodoStore;
use crate::error::Result;
use crate::ids::IdSet;
use crate::render::{Palette, write_items};
use crate::shell::Shell;
use std::io::{self, Write};
use tracing::debug;

/// Run the single operation selected on the command line
pub fn dispatch<W: Write>(
    mode: Mode,
    store: &dyn TodoStore,
    out: &mut W,
    palette: &Palette,
) -> Result<()> {
    debug!(?mode, "dispatching");

    match mode {
        Mode::List => handle_list(store, out, palette),
        Mode::Add(text) => handle_add(store, out, &text),
        Mode::SetStatus { ids, done } => handle_set_status(store, &ids, done),
        Mode::Remove(ids) => handle_remove(store, out, &ids),
        Mode::RemoveDone => handle_remove_done(store, out),
        Mode::Interactive => handle_interactive(store, palette),
    }
}

/// Handle the list command
pub fn handle_list<W: Write + ?Sized>(
    store: &dyn TodoStore,
    out: &mut W,
    palette: &Palette,
) -> Result<()> {
    let items = store.list_all()?;
    write_items(out, &items, palette)?;
    Ok(())
}

/// Handle the add command
pub fn handle_add<W: Write + ?Sized>(store: &dyn TodoStore, out: &mut W, text: &str) -> Result<()> {
    let id = store.add(text)?;
    writeln!(out, "Saved into todo item id #{id}")?;
    Ok(())
}

/// Handle the done and undo commands
pub fn handle_set_status(store: &dyn TodoStore, ids: &IdSet, done: bool) -> Result<()> {
    for &id in ids {
        if !store.set_status(id, done)? {
            debug!(id, "no todo item to update");
        }
    }
    Ok(())
}

/// Handle the remove command
pub fn handle_remove<W: Write + ?Sized>(store: &dyn TodoStore, out: &mut W, ids: &IdSet) -> Result<()> {
    for &id in ids {
        if !store.remove(id)? {
            writeln!(out, "Item #{id} not found")?;
        }
    }
    Ok(())
}

/// Handle the remove-done command
pub fn handle_remove_done<W: Write + ?Sized>(store: &dyn TodoStore, out: &mut W) -> Result<()> {
    let total = store.remove_done()?;
    writeln!(out, "Removed {total} todo items")?;
    Ok(())
}

/// Run the interactive shell on stdin/stdout until exit, EOF or Ctrl-C
pub fn handle_interactive(store: &dyn TodoStore, palette: &Palette) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut stdout = io::stdout();
    let result = runtime.block_on(async {
        let input = tokio::io::BufReader::new(tokio::io::stdin());
        let interrupt = async {
            // Without a signal handler, only exit or EOF end the session
            if tokio::signal::ctrl_c().await.is_err() {
                std::future::pending::<()>().await;
            }
        };

        Shell::new(store, &mut stdout, *palette)
            .run(input, interrupt)
            .await
    });

    // A pending stdin read must not keep the process alive
    runtime.shutdown_background();
    result
}
