//! Terminal front end for the proof panel.

pub mod app;
pub mod components;

use std::{io::stdout, time::Duration};

use app::App;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use futures::StreamExt;
use ratatui::prelude::*;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::{error::Result, options::PanelOptions, tui_ipc::spawn_socket_handler};

/// Runs its restore action when dropped, so early returns leave the
/// terminal usable.
struct TerminalGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "failed to leave raw mode");
    }
    let mut out = stdout();
    if let Err(e) = out.execute(DisableMouseCapture) {
        warn!(error = %e, "failed to disable mouse capture");
    }
    if let Err(e) = out.execute(LeaveAlternateScreen) {
        warn!(error = %e, "failed to leave alternate screen");
    }
}

/// Run the panel until the user quits.
///
/// # Errors
///
/// Fails when the terminal cannot be set up or drawn to. The terminal is
/// restored either way.
pub async fn run(options: PanelOptions) -> Result<()> {
    enable_raw_mode()?;
    let _guard = TerminalGuard {
        restore: restore_terminal,
    };
    stdout()
        .execute(EnterAlternateScreen)?
        .execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut socket = spawn_socket_handler();
    let mut app = App::new(options);
    let mut event_stream = EventStream::new();

    while !app.should_exit {
        app.update();
        terminal.draw(|frame| app.render(frame))?;

        tokio::select! {
            Some(msg) = socket.rx.recv() => {
                app.handle_message(msg);
            }
            Ok(()) = socket.link.changed() => {
                app.connected = *socket.link.borrow_and_update();
                info!(connected = app.connected, "engine link changed");
            }
            Some(Ok(event)) = event_stream.next() => {
                app.handle_event(&event);
            }
            () = sleep(Duration::from_millis(50)) => {}
        }

        for cmd in app.take_commands() {
            if socket.tx.send(cmd).await.is_err() {
                warn!("engine link closed, dropping command");
            }
        }
    }

    Ok(())
}
