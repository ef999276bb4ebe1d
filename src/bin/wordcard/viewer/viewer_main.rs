//! Viewer main function that can be called from main.rs
//!
//! The UI loop runs on the calling thread. Every operation the session hands out is
//! spawned as its own task on the tokio runtime and reports back over a channel;
//! completions are applied in arrival order on the next loop iteration.
use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event as TermEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use std::io;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;
use wordcard::api::{ApiClient, Operation};
use wordcard::config::UiConfig;
use wordcard::session::{Completion, Event, Session};

use super::app::App;
use super::ui;

/// Spawns operations and routes their completions back to the UI loop
pub struct Dispatcher {
    client: ApiClient,
    runtime: Handle,
    sender: UnboundedSender<Completion>,
}

impl Dispatcher {
    pub fn new(client: ApiClient, runtime: Handle, sender: UnboundedSender<Completion>) -> Self {
        Dispatcher {
            client,
            runtime,
            sender,
        }
    }

    /// Start every operation; they run and complete independently
    pub fn dispatch(&self, operations: Vec<Operation>) {
        for operation in operations {
            debug!(%operation, "dispatching");
            let client = self.client.clone();
            let sender = self.sender.clone();
            self.runtime.spawn(async move {
                let completion = Completion::run(&client, operation).await;
                // The UI may already be gone
                let _ = sender.send(completion);
            });
        }
    }
}

/// Run the viewer against the given backend client
pub fn run_viewer(client: ApiClient, config: &UiConfig, runtime: Handle) -> io::Result<()> {
    let session = Session::new(config.notification_duration());
    let mut app = App::new(session, client.base_url().to_string());

    let (sender, mut receiver) = mpsc::unbounded_channel();
    let dispatcher = Dispatcher::new(client, runtime, sender);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(
        &mut terminal,
        &mut app,
        &dispatcher,
        &mut receiver,
        config.tick_duration(),
    );

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableBracketedPaste)?;
    terminal.clear()?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        return Err(e);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    dispatcher: &Dispatcher,
    receiver: &mut UnboundedReceiver<Completion>,
    tick: Duration,
) -> io::Result<()> {
    dispatcher.dispatch(app.start());

    loop {
        // Render the full UI every frame
        terminal.draw(|frame| {
            ui::render(frame, app);
        })?;

        // Apply whatever finished since the last frame
        while let Ok(completion) = receiver.try_recv() {
            let operations = app.apply(Event::Completed(completion));
            dispatcher.dispatch(operations);
        }
        app.tick(Instant::now());

        // Poll for events with timeout
        if event::poll(tick)? {
            match event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    let operations = app.handle_key(key);
                    dispatcher.dispatch(operations);
                }
                TermEvent::Paste(text) => {
                    let operations = app.handle_paste(&text);
                    dispatcher.dispatch(operations);
                }
                // On terminal resize, the next loop iteration will re-render with new dimensions
                TermEvent::Resize(_, _) => {}
                _ => {
                    // Ignore other events (mouse, focus, key releases)
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
