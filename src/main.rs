use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};
use tracing_subscriber::EnvFilter;

use promview::{app::App, events, poller, ui, QueryClient, SampleSource, Settings};

#[derive(Parser, Debug)]
#[command(name = "promview")]
#[command(about = "Terminal dashboard for a fixed Prometheus instant query")]
struct Args {
    /// Path to a settings file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides the settings file)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Refresh interval in seconds
    #[arg(short, long)]
    refresh: Option<u64>,

    /// Append the operational log to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(endpoint) = args.endpoint {
        settings.endpoint = endpoint;
    }
    if let Some(refresh) = args.refresh {
        settings.refresh_secs = refresh;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = Some(log_file);
    }

    init_logging(settings.log_file.as_deref())?;

    // Build a tokio runtime for the poller; the TUI runs on the main thread
    let rt = tokio::runtime::Runtime::new()?;

    let client = QueryClient::builder().endpoint(&settings.endpoint).build();
    let refresh = Duration::from_secs(settings.refresh_secs);
    let (source, handle) =
        rt.block_on(async { Ok::<_, anyhow::Error>(poller::spawn(client, refresh)) })?;

    let result = run_tui(Box::new(source));

    // Teardown: cancel the timer so no further polls are initiated
    handle.shutdown();

    result
}

/// Initialize the tracing subscriber writing to the given file.
///
/// The terminal belongs to the TUI, so without a log file nothing is
/// installed and log events are discarded.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = std::fs::OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Run the TUI with the given data source
fn run_tui(source: Box<dyn SampleSource>) -> Result<()> {
    // Setup terminal; failure here is a fatal startup error
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    let mut app = App::new(source);
    app.reload_data();

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 40;
    const MIN_HEIGHT: u16 = 8;

    while app.running {
        terminal.draw(|frame| {
            let area = frame.area();

            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                let y = (area.height / 2).saturating_sub(2);
                let centered =
                    ratatui::layout::Rect::new(0, y, area.width, 5).intersection(area);
                frame.render_widget(paragraph, centered);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Min(5),    // Card list
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            ui::common::render_header(frame, app, chunks[0]);
            ui::cards::render(frame, app, chunks[1]);
            ui::common::render_status_bar(frame, app, chunks[2]);

            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for input with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        // Drain any poll outcomes that arrived since the last frame
        app.reload_data();
    }

    Ok(())
}
