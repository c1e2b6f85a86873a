//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use spamscope_app::config::Settings;
use spamscope_app::message::Message;
use spamscope_app::process;
use spamscope_app::state::AppState;
use spamscope_client::PredictClient;
use spamscope_core::prelude::*;

use crate::{event, render};

/// Restore the terminal before the default panic output so the backtrace
/// lands on a usable screen instead of the raw-mode alternate buffer.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Run the TUI application.
///
/// `initial_fragment` is the optional `--section` deep link; an unknown
/// fragment is logged and ignored, leaving the configured default section
/// active.
pub async fn run(settings: Settings, initial_fragment: Option<&str>) -> Result<()> {
    install_panic_hook();

    // A bad endpoint fails here, before the terminal is taken over
    let client = Arc::new(PredictClient::new(
        &settings.server.base_url,
        settings.server.timeout(),
    )?);
    info!(endpoint = %settings.server.base_url, "prediction client ready");

    let mut state = AppState::new(settings);
    if let Some(fragment) = initial_fragment {
        if !state.router.activate_fragment(fragment) {
            warn!(fragment, "unknown section fragment, ignoring");
        }
    }

    // Initialize terminal
    let mut term = ratatui::init();

    // Channel for messages from background tasks (prediction outcomes)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &client);

    // Restore terminal
    ratatui::restore();
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    client: &Arc<PredictClient>,
) -> Result<()> {
    while !state.should_quit {
        // Process messages from background tasks
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, &msg_tx, client);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events (Tick on timeout)
        if let Some(message) = event::poll()? {
            process::process_message(state, message, &msg_tx, client);
        }
    }

    Ok(())
}
