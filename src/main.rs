use folio::adapters::ReqwestHttpClient;
use folio::app::{App, AppMessage, Document};
use folio::cli::{apply_options, parse_args, run_cli_command, validate_options};
use folio::error::FolioError;
use folio::i18n::LocalizationTable;
use folio::startup::{init_tracing, StartupConfig};
use folio::stats::profile_url;
use folio::storage::Storage;
use folio::terminal::{setup_panic_hook, TerminalManager};
use folio::ui;

use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Tick interval for animations and the loading deadline.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let options = match run_cli_command(parse_args(std::env::args())) {
        Ok(options) => options,
        Err(output) => {
            println!("{}", output);
            return Ok(());
        }
    };
    if let Err(err) = validate_options(&options) {
        eprintln!("{}", err.user_message());
        std::process::exit(err.category().exit_code());
    }

    color_eyre::install()?;

    let config = apply_options(StartupConfig::from_env(), &options);
    if init_tracing(&config) {
        tracing::info!("folio {} starting", folio::cli::VERSION);
    }

    // Invalid bundled content is a build defect; refuse to start.
    let table = match LocalizationTable::load() {
        Ok(table) => Arc::new(table),
        Err(e) => {
            let err = FolioError::from(e);
            tracing::error!("Startup aborted ({}): {}", err.category(), err);
            eprintln!("{}", err.user_message());
            std::process::exit(err.category().exit_code());
        }
    };

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config, table))
}

async fn run(config: StartupConfig, table: Arc<LocalizationTable>) -> Result<()> {
    let storage = Storage::open(config.data_dir.as_deref());
    let mut app = App::mount(&config, storage, table, Document::new(), Instant::now());

    if !config.offline {
        let url = profile_url(&config.api_base, &config.github_username);
        app.start_stats(Arc::new(ReqwestHttpClient::new()), url);
    }

    let mut term = TerminalManager::new()?;
    let size = term.size()?;
    app.resize(size.width, size.height);

    let result = run_app(term.terminal(), &mut app).await;

    app.unmount();
    term.restore();

    match &result {
        Ok(()) => tracing::info!("Exited normally"),
        Err(e) => tracing::error!("Exited with error: {}", e),
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the receiver out of the app; select! needs to own it.
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        if app.should_quit() {
            return Ok(());
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick(Instant::now());
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(event)) => {
                        app.handle_event(&event);
                        app.mark_dirty();
                    }
                    Some(Err(e)) => {
                        tracing::warn!("Terminal event error: {}", e);
                    }
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
