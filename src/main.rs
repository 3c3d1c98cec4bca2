use anyhow::{Context, Result};
use clap::Parser;
use ratatui::layout::Rect;
use ratatui::{backend::TermionBackend, Terminal};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use termion::input::MouseTerminal;
use termion::raw::IntoRawMode;
use termion::screen::IntoAlternateScreen;

use seekquill::bookmark::time::MICROS_PER_SECOND;
use seekquill::config::Config;
use seekquill::controller::memory::DEFAULT_BYTE_RATE;
use seekquill::controller::store::{load_bookmarks, save_bookmarks};
use seekquill::controller::{InputController, MemoryInput};
use seekquill::input::InputHandler;
use seekquill::panel::BookmarksPanel;
use seekquill::theme::resolve_theme;
use seekquill::ui::UI;

/// SeekQuill - A terminal-based bookmark editor for media seek points
#[derive(Parser)]
#[command(name = "seekquill")]
#[command(version)]
#[command(about = "A terminal-based bookmark editor for media seek points", long_about = None)]
struct Cli {
    /// Name of the media being played
    #[arg(default_value = "untitled")]
    media: String,

    /// Media length in seconds
    #[arg(short, long, default_value_t = 3600)]
    length: i64,

    /// Stream byte rate in bytes per second, used for byte offsets
    #[arg(long, default_value_t = DEFAULT_BYTE_RATE)]
    byte_rate: u64,

    /// TOML file to load bookmarks from and save them to on exit
    #[arg(short, long)]
    bookmarks: Option<PathBuf>,

    /// Start without an input session
    #[arg(long)]
    no_input: bool,

    /// Theme name (overrides the config file)
    #[arg(short, long)]
    theme: Option<String>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Set up a panic hook that restores the terminal before displaying panic information.
fn setup_panic_hook() {
    use std::panic;

    let default_panic = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = write!(io::stderr(), "{}", termion::screen::ToMainScreen);
        let _ = write!(io::stderr(), "{}", termion::cursor::Show);
        let _ = io::stderr().flush();

        default_panic(panic_info);
    }));
}

/// Routes tracing output to `path`. The terminal belongs to the UI, so
/// without a log file nothing is installed and events are discarded.
fn setup_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;
    Ok(())
}

fn build_input(cli: &Cli) -> Result<MemoryInput> {
    if cli.no_input {
        return Ok(MemoryInput::without_input());
    }

    let bookmarks = match &cli.bookmarks {
        Some(path) => load_bookmarks(path)?,
        None => Vec::new(),
    };

    Ok(
        MemoryInput::new(cli.media.clone(), cli.length.saturating_mul(MICROS_PER_SECOND))
            .with_byte_rate(cli.byte_rate)
            .with_bookmarks(bookmarks),
    )
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        setup_logging(path)?;
    }

    // Load bookmarks BEFORE terminal setup so errors print normally
    let input = build_input(&cli)?;

    let config = Config::load();
    let theme_name = cli.theme.clone().unwrap_or_else(|| config.theme.clone());
    let (theme, warning) = resolve_theme(&theme_name);
    if let Some(warning) = warning {
        eprintln!("Warning: {}", warning);
    }

    let stdout = io::stdout()
        .into_raw_mode()
        .context("Failed to enable raw mode")?;
    let stdout = MouseTerminal::from(stdout);
    let stdout = stdout
        .into_alternate_screen()
        .context("Failed to enter alternate screen")?;

    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let ui = UI::new(theme).with_alternating_rows(config.alternating_row_colors);
    let mut input_handler = InputHandler::new();
    input_handler.set_enable_mouse(config.enable_mouse);

    let mut panel = BookmarksPanel::new(input);
    tracing::info!("editing bookmarks for {}", cli.media);

    let tick_rate = config.tick_rate();
    let result = run_event_loop(
        &mut terminal,
        &ui,
        &mut input_handler,
        &mut panel,
        tick_rate,
    );

    write!(terminal.backend_mut(), "{}", termion::cursor::Show)?;
    terminal.backend_mut().flush()?;
    drop(terminal);

    if let (Some(path), Ok(bookmarks)) = (&cli.bookmarks, panel.controller().bookmarks()) {
        save_bookmarks(path, &bookmarks)?;
        tracing::info!("saved {} bookmark(s) to {}", bookmarks.len(), path.display());
    }

    result
}

fn run_event_loop<B: ratatui::backend::Backend, C: InputController>(
    terminal: &mut Terminal<B>,
    ui: &UI,
    input_handler: &mut InputHandler,
    panel: &mut BookmarksPanel<C>,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        // Apply bookmark changes announced by the controller
        panel.sync();

        ui.render(terminal, panel)?;

        let size = terminal.size()?;
        input_handler.set_area(Rect::new(0, 0, size.width, size.height));

        if let Some(event) = input_handler.poll_event(tick_rate)? {
            let should_quit = input_handler.handle_event(event, panel)?;
            if should_quit {
                break;
            }
        }
    }

    Ok(())
}
