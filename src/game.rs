//! The game module contains the entry point of the crate and the main game loop.
//!
//! It contains the `init()` function to initialize and start the game loop, the welcome message,
//! the resolution of the board dimensions from the command line and the writing of the rendered
//! board to the terminal.

use anyhow::Result;
use clap::Parser;
use console::{style, Term};
use fastrand::Rng;
use regex::Regex;

use crate::board::{BoardConfig, GameState, Tick};
use crate::input::{MOVE_PATTERN, read_move};

/// This struct holds information about the application when it comes to the command-line
/// argument parser of choice, which is clap. It uses the derive attribute to declare the two
/// positional board dimensions, which are deliberately taken as raw strings: anything that does
/// not parse falls back to the default board instead of aborting the program.
#[derive(Parser)]
#[command(name = "snakeling", version, about)]
#[command(next_line_help = true)]
struct Cli {
    /// The number of rows on the board.
    ///
    /// Missing or invalid values quietly fall back to the ten-row default.
    #[arg(env = "SNAKELING_HEIGHT", value_name = "HEIGHT")]
    height: Option<String>,
    /// The number of columns on the board.
    ///
    /// Missing or invalid values quietly fall back to the ten-column default.
    #[arg(env = "SNAKELING_WIDTH", value_name = "WIDTH")]
    width: Option<String>,
}

/// This function writes the current board to the terminal, one rendered row per line.
fn draw(term: &Term, state: &GameState) -> Result<()> {
    for row in state.render_rows() {
        term.write_line(&row)?;
    }

    Ok(())
}

/// Initializes the game state and handles literally everything. This is a `main()` function of
/// sorts though it is still called from main.rs.
///
/// This function specifically creates a new interface to the standard output, a new rng instance
/// and the compiled input pattern, all once, so the loop itself only ever advances the board and
/// writes it back out.
///
/// # Errors
///
/// The function may return any one of the following errors:
///
/// - `regex::Error`
/// - `io::Error`
/// - `dialoguer::Error`
pub fn init() -> Result<()> {
    let term = Term::stdout();
    let mut rng = Rng::new();
    let cli = Cli::parse();
    let move_re = Regex::new(MOVE_PATTERN)?;

    // show the init message
    init_message(&term)?;

    // resolve the board dimensions, falling back to the default board on anything invalid
    let config = match resolve_config(cli.height.as_deref(), cli.width.as_deref()) {
        Some(config) => {
            term.write_line(&format!(
                "Using {} by {} board dimensions",
                config.height, config.width
            ))?;
            config
        }
        None => {
            term.write_line("Using the default board dimensions")?;
            BoardConfig::default()
        }
    };

    let mut state = GameState::new(config);
    if state.place_food(&mut rng).is_err() {
        term.write_line(&format!(
            "{}",
            style("could not get food location while initializing").bold()
        ))?;
    }
    draw(&term, &state)?;

    // game loop
    loop {
        let requested = read_move(&term, &move_re)?;
        let tick = state.advance(&mut rng, requested);

        if matches!(
            tick,
            Tick::Moved {
                ate_food: true,
                food_placed: false,
            }
        ) {
            term.write_line(&format!(
                "{}",
                style("could not retrieve food location").bold()
            ))?;
        }

        draw(&term, &state)?;

        if tick == Tick::Fatal {
            term.write_line(&format!(
                "{}",
                style(format!("GAME OVER! The Final Score is: {}", state.score)).bold()
            ))?;
            break;
        }
    }

    term.show_cursor()?;
    Ok(())
}

/// This function initializes the message to be used at the start of the program, as well as a
/// few other fallible operations. Among these, the screen is cleared and the cursor is hidden.
/// The title of the console window is also set to the name of the game.
fn init_message(term: &Term) -> Result<()> {
    const MSG: &str = "Welcome to snakeling";
    let msg = style(MSG).bold();

    term.clear_screen()?;
    term.set_title("snakeling");
    term.hide_cursor()?;

    term.write_line(&format!("{msg}"))?;
    Ok(())
}

/// This function resolves the two raw dimension arguments into a board configuration. Both
/// values must be present, numeric and at least two (the starting snake is two cells long and
/// has to fit); anything else resolves to nothing and the caller falls back to the default
/// board.
fn resolve_config(height: Option<&str>, width: Option<&str>) -> Option<BoardConfig> {
    let height: u16 = height?.parse().ok()?;
    let width: u16 = width?.parse().ok()?;

    if height < 2 || width < 2 {
        return None;
    }

    Some(BoardConfig { height, width })
}

#[cfg(test)]
mod tests {
    use super::resolve_config;
    use crate::board::BoardConfig;

    #[test]
    fn test_missing_or_garbage_dimensions_fall_back() {
        assert_eq!(resolve_config(None, None), None, "missing values fall back");
        assert_eq!(
            resolve_config(Some("12"), None),
            None,
            "one missing value falls back"
        );
        assert_eq!(
            resolve_config(Some("twelve"), Some("8")),
            None,
            "non-numeric values fall back"
        );
        assert_eq!(
            resolve_config(Some("-3"), Some("8")),
            None,
            "negative values fall back"
        );
    }

    #[test]
    fn test_tiny_dimensions_fall_back() {
        assert_eq!(
            resolve_config(Some("1"), Some("8")),
            None,
            "the starting snake needs two rows"
        );
        assert_eq!(
            resolve_config(Some("8"), Some("0")),
            None,
            "a zero-width board is rejected"
        );
    }

    #[test]
    fn test_valid_dimensions_are_used() {
        assert_eq!(
            resolve_config(Some("12"), Some("8")),
            Some(BoardConfig {
                height: 12,
                width: 8,
            }),
            "numeric dimensions pass through"
        );
    }
}
