use kbchat::app::App;
use kbchat::cli::{parse_args, run_cli_command, CliCommand};
use kbchat::config::ClientConfig;
use kbchat::logging::init_logging;
use kbchat::terminal::{setup_panic_hook, TerminalManager};
use kbchat::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;

/// UI tick; drives the spinner while a request is pending
const TICK: Duration = Duration::from_millis(16);

#[tokio::main]
async fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if run_cli_command(&command) {
        return Ok(());
    }

    color_eyre::install()?;
    setup_panic_hook();

    let mut config = ClientConfig::from_env();
    if let CliCommand::Run {
        api_url: Some(url),
    } = command
    {
        config = config.with_api_base(url);
    }

    init_logging(&config.log_file)?;
    tracing::info!(api_base = %config.api_base, "Using backend");

    let mut app = App::from_config(&config)?;

    let mut term = TerminalManager::new()?;
    let result = run_app(term.terminal(), &mut app).await;
    term.restore()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "Exited with error");
    } else {
        tracing::info!("Exited");
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx = app.message_rx.take();
    let mut ticker = tokio::time::interval(TICK);

    loop {
        if app.should_quit {
            return Ok(());
        }

        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event = event_stream.next() => {
                match event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(..))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }

            Some(msg) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }
    }
}
