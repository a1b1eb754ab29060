//! Terminal preview of the chat list screen.
//!
//! Renders the tab shell and redraws the Chats tab every time the
//! controller publishes a new state.

pub mod render;
pub mod settings;
pub mod shell;

use std::io::Write;

use chatlist::{ChatListConfig, ChatListStateController, MockDataProvider, ScreenState};
use futures_util::StreamExt;
use tracing::info;

use crate::settings::{OutputFormat, PreviewSettings};
use crate::shell::Shell;

/// Resolve the library config from the preview settings
pub fn load_config(settings: &PreviewSettings) -> chatlist::Result<ChatListConfig> {
    let mut config = match &settings.config_path {
        Some(path) => {
            info!("Loading config from {}", path.display());
            ChatListConfig::from_path(path)?
        }
        None => ChatListConfig::default(),
    };
    if let Some(count) = settings.chat_count {
        config.load.chat_count = count;
    }
    Ok(config)
}

/// Format one state for output
pub fn format_state(
    shell: &Shell,
    state: &ScreenState,
    settings: &PreviewSettings,
) -> Result<String, serde_json::Error> {
    match settings.format {
        OutputFormat::Text => Ok(render::render_screen(shell, state, settings.width)),
        OutputFormat::Json => serde_json::to_string(state),
    }
}

/// Run the controller and write every state until the list has loaded.
///
/// Returns the number of frames written.
pub async fn run<W: Write>(
    config: ChatListConfig,
    settings: &PreviewSettings,
    out: &mut W,
) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
    let provider = MockDataProvider::new(config.mock)?;
    let controller = ChatListStateController::spawn(provider, config.load)?;
    info!(
        delay_ms = controller.load_delay().as_millis() as u64,
        "Waiting for chat list"
    );

    let shell = Shell::default();
    let mut states = Box::pin(controller.subscribe().into_stream());
    let mut frames = 0;
    while let Some(state) = states.next().await {
        writeln!(out, "{}", format_state(&shell, &state, settings)?)?;
        frames += 1;
        if state.is_success() {
            break;
        }
    }
    Ok(frames)
}
