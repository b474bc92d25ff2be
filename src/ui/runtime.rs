use crate::config::UiConfig;
use crate::ui::app::{App, Inventory, SharedSource, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

const COMMAND_BUFFER: usize = 16;

pub fn run(inventory: Inventory, config: UiConfig, handle: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.tick_rate();
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let source = Arc::clone(inventory.source());
    handle.spawn(command_loop(command_rx, source, events.sender()));

    let mut app = App::new(inventory, config);
    app.set_command_sender(command_tx);
    app.request_load();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::LoadFinished { ticket, result }) => app.on_load_finished(ticket, result),
            Err(std_mpsc::RecvTimeoutError::Timeout) => {}
            Err(std_mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

/// Runs fetches for the UI thread and posts results back as events.
async fn command_loop(
    mut commands: mpsc::Receiver<UiCommand>,
    source: SharedSource,
    events: std_mpsc::Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        match command {
            UiCommand::Load(ticket) => {
                let source = Arc::clone(&source);
                let events = events.clone();
                tokio::spawn(async move {
                    let result = source.fetch(ticket.options).await;
                    if events.send(AppEvent::LoadFinished { ticket, result }).is_err() {
                        tracing::debug!(
                            generation = ticket.generation,
                            "UI gone before load finished"
                        );
                    }
                });
            }
        }
    }
    tracing::debug!("Command loop stopped");
}
