use bizcard::app::App;
use bizcard::cli::{parse_args, CliCommand, USAGE};
use bizcard::config::AppConfig;
use bizcard::logging::init_logging;
use bizcard::preview::render_preview;
use bizcard::terminal::{setup_panic_hook, TerminalManager};
use bizcard::{cli, ui};

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::time::Instant;
use tracing::{debug, info};

fn main() -> Result<()> {
    // Argument handling comes before any terminal or logging setup
    let options = match parse_args(std::env::args()) {
        Ok(CliCommand::Version) => {
            println!("{}", cli::version_line());
            return Ok(());
        }
        Ok(CliCommand::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Ok(CliCommand::Run(options)) => options,
        Err(e) => {
            eprintln!("bizcard: {}\n\n{}", e, USAGE);
            std::process::exit(if e.is_usage_error() { 2 } else { 1 });
        }
    };

    color_eyre::install()?;

    let (env_config, rejected) = AppConfig::from_env();
    let config = env_config.apply(&options);

    if config.preview {
        for var in &rejected {
            eprintln!("bizcard: {}", var);
        }
        print!("{}", render_preview(&config)?);
        return Ok(());
    }

    // Logging is nice to have; a read-only home should not stop the card
    match init_logging(None) {
        Ok(path) => info!(path = %path.display(), "logging initialised"),
        Err(e) => eprintln!("bizcard: logging disabled: {}", e),
    }
    for var in &rejected {
        var.log();
    }

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let mut manager = TerminalManager::new()?;
    let mut app = App::new(config);

    info!(theme = ?app.theme.current(), "starting");
    let result = runtime.block_on(run_app(manager.terminal(), &mut app));

    manager.restore()?;
    info!(ticks = app.tick_count, "exited");

    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    while !app.should_quit {
        let now = Instant::now();
        app.tick(now);

        if app.needs_redraw {
            terminal.draw(|frame| ui::render(frame, &mut *app, now))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(app.config.tick);

        tokio::select! {
            _ = timeout => {}

            event = event_stream.next() => {
                let now = Instant::now();
                match event {
                    Some(Ok(Event::Key(key))) if key.kind != KeyEventKind::Release => {
                        app.handle_key(&key, now);
                    }
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(&mouse, now),
                    Some(Ok(Event::Resize(width, height))) => {
                        debug!(width, height, "terminal resized");
                        app.mark_dirty();
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!(error = %e, "event stream failed");
                        break;
                    }
                    None => break,
                }
            }
        }
    }

    Ok(())
}
