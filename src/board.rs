//! The board module contains the core parts of the game, except for input and terminal handling.
//!
//! It holds the grid of cells, the snake, the food and the two counters, and it knows how to
//! advance all of them by exactly one tick. Rendering is produced here as plain strings so the
//! game loop only has to write them out.

use std::collections::VecDeque;

use console::style;
use fastrand::Rng;

/// This structure holds the dimensions of the board. It replaces a pair of loose default
/// constants so the size travels explicitly from argument parsing down to the game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct BoardConfig {
    /// This field contains the number of rows on the board.
    pub(crate) height: u16,
    /// This field contains the number of columns on the board.
    pub(crate) width: u16,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            height: 10,
            width: 10,
        }
    }
}

/// This enumeration contains the possible values of a single board cell. Every cell holds
/// exactly one of these at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Cell {
    /// This variant marks a cell covered by a trailing segment of the snake.
    Body,
    /// This variant marks the cell where the snake died; it only ever appears once the game is
    /// over.
    DeadHead,
    /// This variant marks a cell nothing currently occupies.
    Empty,
    /// This variant marks the cell holding the food.
    Food,
    /// This variant marks the cell under the snake's head.
    Head,
}

impl Cell {
    /// This function returns the character used to draw the cell on the board.
    const fn glyph(self) -> char {
        match self {
            Self::Body => '#',
            Self::DeadHead => 'X',
            Self::Empty => ' ',
            Self::Food => 'o',
            Self::Head => '&',
        }
    }
}

/// This structure holds a position on the board. Coordinates are signed so a head that has just
/// stepped over a border can still be represented and checked for bounds.
#[expect(
    clippy::min_ident_chars,
    reason = "Coordinate axes read best as plain x and y."
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Coordinate {
    /// This field contains the column of the position, growing rightwards from zero.
    pub(crate) x: i32,
    /// This field contains the row of the position, growing downwards from zero.
    pub(crate) y: i32,
}

impl Coordinate {
    /// This function returns the position one cell away in the given direction.
    pub(crate) const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();

        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// This enumeration contains the four directions the snake can travel in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    /// This variant points down the board, towards rows with higher indices.
    Down,
    /// This variant points towards columns with lower indices.
    Left,
    /// This variant points towards columns with higher indices.
    Right,
    /// This variant points up the board, towards rows with lower indices.
    Up,
}

impl Direction {
    /// This function returns the per-axis offset of a single step in the direction.
    const fn delta(self) -> (i32, i32) {
        match self {
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Up => (0, -1),
        }
    }

    /// This function returns the direction of travel exactly opposite to the current one.
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
        }
    }
}

/// This error is returned when the bounded random search for an empty cell ran out of attempts
/// before finding one. The board may genuinely have no empty cell left at that point.
#[derive(Debug, thiserror::Error)]
#[error("{}", style("no empty cell could be found for the food").bold().underlined())]
pub(crate) struct FoodPlacementError;

/// This structure holds the whole state of a running game: the grid, the snake, the food and
/// the round and score counters. It is owned exclusively by the game loop.
#[derive(Clone, Debug)]
pub(crate) struct GameState {
    /// This field contains the trailing segments of the snake, oldest first, so the tail can be
    /// dropped and the neck appended in constant time.
    pub(crate) body: VecDeque<Coordinate>,
    /// This field contains the board cells in row-major order.
    cells: Vec<Cell>,
    /// This field contains the dimensions the board was built with.
    pub(crate) config: BoardConfig,
    /// This field contains the position of the food, or nothing once placing it has failed.
    pub(crate) food: Option<Coordinate>,
    /// This field contains the position of the snake's head.
    pub(crate) head: Coordinate,
    /// This field contains the direction the snake is currently travelling in.
    pub(crate) heading: Direction,
    /// This field contains the number of ticks played so far.
    pub(crate) round: u32,
    /// This field contains the number of pieces of food eaten so far.
    pub(crate) score: u32,
}

impl GameState {
    /// This function plays a single tick of the game. A missing direction repeats the current
    /// heading, and a direction opposite to the current heading leaves the whole state untouched
    /// for this tick. Otherwise the head moves one cell, the body follows, food is eaten and
    /// replaced where applicable, and the round counter increments.
    ///
    /// A step over the border marks the cell the head left behind as dead; a step into the body
    /// marks the collided cell as dead. Both end the game.
    pub(crate) fn advance(&mut self, rng: &mut Rng, requested: Option<Direction>) -> Tick {
        let heading = requested.unwrap_or(self.heading);

        if heading == self.heading.opposite() {
            return Tick::Held;
        }

        let previous_head = self.head;
        let new_head = previous_head.step(heading);

        if !self.in_bounds(new_head) {
            self.set_cell(previous_head, Cell::DeadHead);
            return Tick::Fatal;
        }
        if self.cell(new_head) == Some(Cell::Body) {
            self.set_cell(new_head, Cell::DeadHead);
            return Tick::Fatal;
        }

        self.heading = heading;
        self.head = new_head;
        self.body.push_back(previous_head);

        let ate_food = self.food == Some(new_head);
        let mut food_placed = true;
        if ate_food {
            self.score += 1;
            food_placed = self.place_food(rng).is_ok();
        } else if let Some(tail) = self.body.pop_front() {
            self.set_cell(tail, Cell::Empty);
        }

        self.set_cell(new_head, Cell::Head);
        self.set_cell(previous_head, Cell::Body);
        self.round += 1;

        Tick::Moved {
            ate_food,
            food_placed,
        }
    }

    /// This function returns the value of the cell at the given position, or nothing for a
    /// position outside the board.
    pub(crate) fn cell(&self, coordinate: Coordinate) -> Option<Cell> {
        self.index_of(coordinate)
            .and_then(|idx| self.cells.get(idx))
            .copied()
    }

    /// This function reports whether the given position lies on the board.
    fn in_bounds(&self, coordinate: Coordinate) -> bool {
        coordinate.x >= 0
            && coordinate.x < i32::from(self.config.width)
            && coordinate.y >= 0
            && coordinate.y < i32::from(self.config.height)
    }

    /// This function translates an on-board position into its offset in the flat cell vector.
    fn index_of(&self, coordinate: Coordinate) -> Option<usize> {
        if !self.in_bounds(coordinate) {
            return None;
        }

        let col = usize::try_from(coordinate.x).ok()?;
        let row = usize::try_from(coordinate.y).ok()?;

        Some(row * usize::from(self.config.width) + col)
    }

    /// This function builds the starting state for the given board size: an empty grid with a
    /// two-cell snake at the center, heading down the board. Food is placed separately so the
    /// caller can report a placement failure without losing the state.
    pub(crate) fn new(config: BoardConfig) -> Self {
        let head = Coordinate {
            x: i32::from(config.width / 2),
            y: i32::from(config.height / 2),
        };
        let heading = Direction::Down;
        let tail = head.step(heading.opposite());
        let cells = vec![Cell::Empty; usize::from(config.height) * usize::from(config.width)];

        let mut state = Self {
            body: VecDeque::from([tail]),
            cells,
            config,
            food: None,
            head,
            heading,
            round: 0,
            score: 0,
        };
        state.set_cell(head, Cell::Head);
        state.set_cell(tail, Cell::Body);

        state
    }

    /// This function picks a uniformly random empty cell by rejection sampling and puts the food
    /// there. The search is bounded to ten times the number of cells on the board, so it does
    /// not guarantee success on a board that is full or nearly full.
    ///
    /// # Errors
    ///
    /// The function returns [`FoodPlacementError`] once the attempt budget runs out. The food
    /// position is cleared in that case and play can carry on without food.
    pub(crate) fn place_food(&mut self, rng: &mut Rng) -> Result<Coordinate, FoodPlacementError> {
        let budget = 10_usize * usize::from(self.config.height) * usize::from(self.config.width);

        for _ in 0..budget {
            let candidate = Coordinate {
                x: i32::from(rng.u16(0..self.config.width)),
                y: i32::from(rng.u16(0..self.config.height)),
            };

            if self.cell(candidate) == Some(Cell::Empty) {
                self.set_cell(candidate, Cell::Food);
                self.food = Some(candidate);
                return Ok(candidate);
            }
        }

        self.food = None;
        Err(FoodPlacementError)
    }

    /// This function renders the board as one string per terminal row: a border of underscores,
    /// the grid rows framed by pipes, and a border of carets. The first three grid rows carry
    /// the round counter, the score and the controls reminder after a tab stop.
    pub(crate) fn render_rows(&self) -> Vec<String> {
        const CONTROLS: &str =
            "Controls: W: up |S: down |D: right |A: left |other/no input: move on same heading";

        let width = usize::from(self.config.width);
        let mut rows = Vec::with_capacity(usize::from(self.config.height) + 2);

        rows.push(format!(" {} ", "_".repeat(width)));
        for (idx, line) in self.cells.chunks(width).enumerate() {
            let cells: String = line.iter().map(|cell| cell.glyph()).collect();
            let annotation = match idx {
                0 => format!("\tRound: {}", self.round),
                1 => format!("\tScore: {}", self.score),
                2 => format!("\t{CONTROLS}"),
                _ => String::new(),
            };

            rows.push(format!("|{cells}|{annotation}"));
        }
        rows.push(format!(" {} ", "^".repeat(width)));

        rows
    }

    /// This function overwrites the cell at the given position, silently skipping positions
    /// outside the board.
    fn set_cell(&mut self, coordinate: Coordinate, cell: Cell) {
        if let Some(slot) = self
            .index_of(coordinate)
            .and_then(|idx| self.cells.get_mut(idx))
        {
            *slot = cell;
        }
    }
}

/// This enumeration contains the possible outcomes of playing one tick, to better transfer the
/// result of a move between the board model and the game loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tick {
    /// This variant is used when the move ended the game, either over the border or into the
    /// snake's own body.
    Fatal,
    /// This variant is used when the requested direction was the exact reverse of the current
    /// heading, so the tick was ignored and nothing changed.
    Held,
    /// This variant is used when the snake moved one cell and the game carries on. It reports
    /// whether food was eaten on this tick and whether replacement food could be placed.
    Moved {
        /// This field reports whether the head landed on the food this tick.
        ate_food: bool,
        /// This field reports whether food was available on the board when the tick ended.
        food_placed: bool,
    },
}
