mod ai;
mod career;
mod commentary;
mod config;
mod debug;
mod game;
mod game_modes;
mod menu;
mod storage;
mod ui;

use anyhow::{bail, Context};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use ai::Difficulty;
use career::CareerTracker;
use commentary::{Commentator, HttpCommentator, LocalCommentator};
use config::Config;
use game::{InputAction, MatchEngine, RandDice};
use game_modes::{frame_duration, limit_frame_rate, MatchExit, MatchSession};
use menu::{AppState, MenuAction, MenuState};
use storage::FileStore;
use ui::Theme;

/// Parsed command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CliOptions {
    debug: bool,
    seed: Option<u64>,
    difficulty: Option<Difficulty>,
    help: bool,
}

/// Everything that lives for the whole session
struct App {
    config: Config,
    theme: Theme,
    store: FileStore,
    tracker: CareerTracker,
    engine: MatchEngine,
    commentator: Arc<dyn Commentator>,
    preferred: Difficulty,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("handcricket");
    let options = parse_args(args.get(1..).unwrap_or_default())?;
    if options.help {
        print_usage(program);
        return Ok(());
    }

    debug::init(options.debug).context("failed to open debug log")?;
    info!("Hand Cricket starting");

    // Local overrides win because dotenvy never replaces variables already set
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let config = config::load_config().context("failed to load configuration")?;
    let mut app = build_app(config, &options);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("Hand Cricket exiting");
    result
}

fn parse_args(args: &[String]) -> anyhow::Result<CliOptions> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--debug" | "-d" => options.debug = true,
            "--help" | "-h" => options.help = true,
            "--seed" => {
                let value = iter.next().context("--seed requires a number")?;
                let seed = value
                    .parse()
                    .with_context(|| format!("invalid seed: {}", value))?;
                options.seed = Some(seed);
            }
            "--difficulty" => {
                let value = iter
                    .next()
                    .context("--difficulty requires easy, medium or hard")?;
                match Difficulty::from_name(value) {
                    Some(difficulty) => options.difficulty = Some(difficulty),
                    None => bail!("unknown difficulty: {}", value),
                }
            }
            other => bail!("unknown argument: {} (try --help)", other),
        }
    }

    Ok(options)
}

fn print_usage(program: &str) {
    println!("Hand Cricket - terminal hand cricket against the computer");
    println!();
    println!("Usage:");
    println!("  {} [options]", program);
    println!();
    println!("Options:");
    println!("  --difficulty <easy|medium|hard>   Highlight a difficulty in the picker");
    println!("  --seed <number>                   Reproducible random sequence");
    println!(
        "  --debug                           Write a debug log to {}",
        debug::log_file_path().display()
    );
    println!("  --help                            Show this message");
    println!();
    println!("Configuration: {}", config::get_config_path().display());
}

fn build_app(config: Config, options: &CliOptions) -> App {
    let data_dir = config
        .storage
        .data_dir
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(FileStore::default_dir);
    let store = FileStore::new(data_dir);
    info!(dir = %store.dir().display(), "using data directory");

    let theme = storage::load_theme(&store);
    let tracker = CareerTracker::new(storage::load_stats(&store));

    let dice = match options.seed.or(config.game.seed) {
        Some(seed) => {
            info!(seed, "using fixed seed");
            RandDice::seeded(seed)
        }
        None => RandDice::from_entropy(),
    };
    let engine = MatchEngine::new(Box::new(dice));

    let preferred = options.difficulty.unwrap_or_else(|| {
        Difficulty::from_name(&config.game.default_difficulty).unwrap_or_else(|| {
            warn!(
                difficulty = %config.game.default_difficulty,
                "unknown default difficulty, using medium"
            );
            Difficulty::Medium
        })
    });

    let commentator = build_commentator(&config);

    App {
        config,
        theme,
        store,
        tracker,
        engine,
        commentator,
        preferred,
    }
}

/// HTTP commentary when an endpoint is configured, canned lines otherwise
fn build_commentator(config: &Config) -> Arc<dyn Commentator> {
    let Some(endpoint) = config.commentary.endpoint.clone() else {
        return Arc::new(LocalCommentator);
    };

    let api_key = std::env::var(&config.commentary.api_key_env).ok();
    let timeout = Duration::from_secs(config.commentary.timeout_secs);
    match HttpCommentator::new(endpoint, api_key, timeout) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            warn!(error = %e, "commentary client unavailable, using local lines");
            Arc::new(LocalCommentator)
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> anyhow::Result<()> {
    let mut app_state = AppState::Menu;
    let mut menu_state = MenuState::new();

    loop {
        app_state = match app_state {
            AppState::Menu => {
                let theme = app.theme;
                terminal.draw(|f| menu::render_menu(f, &menu_state, theme))?;

                match menu::handle_menu_input(&mut menu_state)? {
                    MenuAction::None => AppState::Menu,
                    MenuAction::StartMatch => AppState::Match,
                    MenuAction::ShowCareer => AppState::Career,
                    MenuAction::ToggleTheme => {
                        app.theme = app.theme.toggled();
                        storage::save_theme(&mut app.store, app.theme);
                        AppState::Menu
                    }
                    MenuAction::Quit => AppState::Exiting,
                }
            }
            AppState::Match => {
                let session = MatchSession::new(
                    &mut app.engine,
                    &mut app.tracker,
                    &mut app.store,
                    Arc::clone(&app.commentator),
                    app.preferred,
                    Duration::from_millis(app.config.game.reveal_delay_ms),
                );
                match game_modes::run_match_vs_computer(terminal, &app.config, app.theme, session)? {
                    MatchExit::Menu => AppState::Menu,
                    MatchExit::Quit => AppState::Exiting,
                }
            }
            AppState::Career => show_career(terminal, app)?,
            AppState::Exiting => return Ok(()),
        };
    }
}

/// Career screen loop; any of Esc, Enter or Q leaves it
fn show_career<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &App,
) -> Result<AppState, io::Error> {
    let palette = app.theme.palette();
    let frame_budget = frame_duration(app.config.display.target_fps);

    loop {
        let frame_start = Instant::now();

        terminal.draw(|f| {
            ui::render_career(f, app.tracker.stats(), app.tracker.achievements(), &palette)
        })?;

        for action in game::poll_input(frame_budget)? {
            match action {
                InputAction::Quit => return Ok(AppState::Exiting),
                InputAction::Back | InputAction::Select => return Ok(AppState::Menu),
                _ => {}
            }
        }

        limit_frame_rate(frame_start, frame_budget);
    }
}
