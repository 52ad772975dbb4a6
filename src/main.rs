mod config;
mod debug;
mod game;
mod menu;
mod players;
mod session;
mod sound;
mod ui;

use anyhow::{anyhow, bail, Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use tracing::info;

use config::Config;
use game::input::{wait_for_any_key, TerminalEvents};
use game::{Field, GameState, KeyMap, Keyboard, Side};
use menu::{handle_menu_input, AppState, MenuAction, MenuState};
use players::PlayerKind;
use session::Pacing;
use sound::{Sound, SoundEvent, Speaker};

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct CliOptions {
    debug: bool,
    seed: Option<u64>,
    /// Set when both --left and --right are given; skips the menu
    players: Option<(PlayerKind, PlayerKind)>,
    help: bool,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args[1..]) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    };

    if options.help {
        print_usage(&args[0]);
        return Ok(());
    }

    debug::init(options.debug).context("failed to open debug log")?;

    let config = config::load_config().context("failed to load config")?;
    let keymap =
        KeyMap::from_bindings(&config.keybindings).context("invalid key binding in config")?;

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(seed = ?options.seed, "session started");

    // Opened before raw mode so audio backend diagnostics don't land in the TUI
    let mut speaker = Speaker::new(&config.sound);
    info!(silent = speaker.is_silent(), "sound ready");

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(
        &mut terminal,
        &config,
        &keymap,
        &mut rng,
        &mut speaker,
        options.players,
    );

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("session ended");
    result.context("game loop failed")
}

/// Parse command line arguments (program name already stripped)
fn parse_args(args: &[String]) -> Result<CliOptions> {
    let mut options = CliOptions::default();
    let mut left = None;
    let mut right = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--debug" | "-d" => options.debug = true,
            "--help" | "-h" => options.help = true,
            "--seed" => {
                let value = iter.next().ok_or_else(|| anyhow!("--seed requires a number"))?;
                let seed = value
                    .parse()
                    .with_context(|| format!("invalid seed {:?}", value))?;
                options.seed = Some(seed);
            }
            "--left" | "--right" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("{} requires a player kind", arg))?;
                let kind: PlayerKind = value.parse()?;
                if arg == "--left" {
                    left = Some(kind);
                } else {
                    right = Some(kind);
                }
            }
            other => bail!("unknown argument: {}", other),
        }
    }

    options.players = match (left, right) {
        (Some(l), Some(r)) => Some((l, r)),
        (None, None) => None,
        _ => bail!("--left and --right must be given together"),
    };

    Ok(options)
}

fn print_usage(program: &str) {
    println!("ASCII Pong - Terminal Pong against humans or bots");
    println!();
    println!("Usage:");
    println!("  {}                                 # Pick players from the menu", program);
    println!("  {} --left KIND --right KIND        # Play one match, skip the menu", program);
    println!();
    println!("Options:");
    println!("  --seed N     Seed the bots' randomness for a repeatable match");
    println!("  --debug, -d  Write a debug log to {}", debug::log_path().display());
    println!("  --help, -h   Show this help");
    println!();
    println!("KIND is one of: human, follow, predict, teleport");
    println!("Config file: {}", config::get_config_path().display());
}

/// Menu -> match -> report, until the player quits
fn run_app<B: Backend, S: Sound>(
    terminal: &mut Terminal<B>,
    config: &Config,
    keymap: &KeyMap,
    rng: &mut StdRng,
    sound: &mut S,
    preset: Option<(PlayerKind, PlayerKind)>,
) -> io::Result<()> {
    let mut app_state = match preset {
        Some((left, right)) => AppState::Match(left, right),
        None => AppState::Menu,
    };
    let mut menu_state = MenuState::new();
    let controls_hint = ui::controls_hint(&config.keybindings);

    loop {
        match app_state {
            AppState::Menu => {
                terminal.draw(|f| menu::render_menu(f, &menu_state, &config.keybindings))?;

                match handle_menu_input(&mut menu_state, keymap)? {
                    MenuAction::None => {}
                    MenuAction::StartMatch(left, right) => {
                        menu_state = MenuState::new();
                        app_state = AppState::Match(left, right);
                    }
                    MenuAction::Quit => app_state = AppState::Exiting,
                }
            }
            AppState::Match(left_kind, right_kind) => {
                let field = Field::STANDARD;
                let left =
                    players::create_player(left_kind, Side::Left, &field, &config.ai, rng);
                let right =
                    players::create_player(right_kind, Side::Right, &field, &config.ai, rng);
                let mut state = GameState::new(field, left, right);
                let mut keyboard = Keyboard::new(keymap.clone());

                terminal.clear()?;
                sound.beep(SoundEvent::Default);
                let summary = session::run_match(
                    terminal,
                    &mut state,
                    &mut keyboard,
                    sound,
                    &Pacing::default(),
                    &config.display,
                    &controls_hint,
                )?;

                terminal.draw(|f| menu::render_final_score(f, &summary, left_kind, right_kind))?;
                wait_for_any_key(&mut TerminalEvents)?;
                terminal.clear()?;

                app_state = if preset.is_some() {
                    AppState::Exiting
                } else {
                    AppState::Menu
                };
            }
            AppState::Exiting => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_opens_menu() {
        let options = parse_args(&[]).unwrap();
        assert_eq!(options, CliOptions::default());
    }

    #[test]
    fn test_full_command_line() {
        let options =
            parse_args(&args(&["--debug", "--seed", "42", "--left", "human", "--right", "Predict"]))
                .unwrap();

        assert!(options.debug);
        assert_eq!(options.seed, Some(42));
        assert_eq!(
            options.players,
            Some((PlayerKind::Human, PlayerKind::PredictAi))
        );
    }

    #[test]
    fn test_bad_args_rejected() {
        assert!(parse_args(&args(&["--bogus"])).is_err());
        assert!(parse_args(&args(&["--seed"])).is_err());
        assert!(parse_args(&args(&["--seed", "abc"])).is_err());
        assert!(parse_args(&args(&["--left", "human"])).is_err());
        assert!(parse_args(&args(&["--left", "robot", "--right", "human"])).is_err());
    }

    #[test]
    fn test_help_flag() {
        assert!(parse_args(&args(&["-h"])).unwrap().help);
    }
}
