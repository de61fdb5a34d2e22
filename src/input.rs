//! This module contains all functions related to taking input from the user. It uses the
//! `dialoguer` crate to read one line per tick, and a pre-compiled regular expression to decide
//! whether the line names a direction at all.
//!
//! Unrecognized input is not an error here; it simply keeps the snake on its current heading.

use anyhow::Result;
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use regex::Regex;

use crate::board::Direction;

/// This constant holds the pattern recognizing a direction line: a single W, A, S or D in either
/// case, with nothing around it. It lives here so the game loop and the tests compile the very
/// same expression.
pub(crate) const MOVE_PATTERN: &str = r"(?i)\A[wasd]\z";

/// This function maps one line of input to a direction. The W, A, S and D keys (in either case)
/// map to up, left, down and right respectively; any other line, the empty one included, maps to
/// nothing, which the game loop reads as "keep the current heading".
pub(crate) fn direction_from(move_re: &Regex, input: &str) -> Option<Direction> {
    if !move_re.is_match(input) {
        return None;
    }

    match input.to_uppercase().chars().next() {
        Some('A') => Some(Direction::Left),
        Some('D') => Some(Direction::Right),
        Some('S') => Some(Direction::Down),
        Some('W') => Some(Direction::Up),
        _ => None,
    }
}

/// This function is in charge of taking the direction for the next tick. It blocks on one line
/// of interactive input and deliberately validates nothing: whatever does not name a direction
/// is answered with nothing rather than a re-prompt, so a stray key only costs one straight
/// tick.
///
/// # Errors
///
/// The function may return a `dialoguer::Error` if reading the line from the terminal fails.
pub(crate) fn read_move(term: &Term, move_re: &Regex) -> Result<Option<Direction>> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "{}",
            style("Input new direction and press the Enter key").bold()
        ))
        .allow_empty(true)
        .interact_text_on(term)?;

    Ok(direction_from(move_re, &input))
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::{MOVE_PATTERN, direction_from};
    use crate::board::Direction;

    #[test]
    fn test_unrecognized_lines_map_to_nothing() {
        let move_re = Regex::new(MOVE_PATTERN).expect("the move pattern is syntactically correct");

        assert_eq!(direction_from(&move_re, ""), None, "the empty line is not a move");
        assert_eq!(direction_from(&move_re, "x"), None, "an unknown key is not a move");
        assert_eq!(direction_from(&move_re, "dd"), None, "two keys are not a move");
        assert_eq!(direction_from(&move_re, "w "), None, "padding spoils the move");
    }

    #[test]
    fn test_wasd_maps_to_directions_in_either_case() {
        let move_re = Regex::new(MOVE_PATTERN).expect("the move pattern is syntactically correct");

        assert_eq!(
            direction_from(&move_re, "w"),
            Some(Direction::Up),
            "lowercase w moves up"
        );
        assert_eq!(
            direction_from(&move_re, "A"),
            Some(Direction::Left),
            "uppercase A moves left"
        );
        assert_eq!(
            direction_from(&move_re, "s"),
            Some(Direction::Down),
            "lowercase s moves down"
        );
        assert_eq!(
            direction_from(&move_re, "D"),
            Some(Direction::Right),
            "uppercase D moves right"
        );
    }
}
