use std::fmt;

/// Contents of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    /// Marks the cell right before or after a word so that words never run together.
    Blocker,
    Letter(char),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    pub fn is_letter(&self) -> bool {
        matches!(self, Cell::Letter(_))
    }
}

/// Direction a word is read in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Right, Direction::Down];

    pub fn step(self) -> Step {
        match self {
            Direction::Right => Step::Right,
            Direction::Down => Step::Down,
        }
    }

    pub fn perpendicular(self) -> [Step; 2] {
        match self {
            Direction::Right => [Step::Up, Step::Down],
            Direction::Down => [Step::Right, Step::Left],
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Right => write!(f, "right"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// A unit move on the grid. Up and Left only show up as the opposites of Down and Right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    Up,
    Left,
    Down,
    Right,
}

impl Step {
    pub fn opposite(self) -> Step {
        match self {
            Step::Up => Step::Down,
            Step::Left => Step::Right,
            Step::Down => Step::Up,
            Step::Right => Step::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An immutable sequence of characters. Length is counted in chars, not bytes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Word {
    chars: Box<[char]>,
}

impl Word {
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl From<&str> for Word {
    fn from(s: &str) -> Word {
        Word {
            chars: s.chars().collect(),
        }
    }
}

impl From<String> for Word {
    fn from(s: String) -> Word {
        Word::from(s.as_str())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.chars.iter() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// The board's cells plus, for every letter, the direction of the word last written through it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub(crate) width: usize,
    pub(crate) height: usize,
    cells: Vec<Cell>,
    directions: Vec<Option<Direction>>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Grid {
        Grid {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
            directions: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[self.index(coord)]
    }

    pub fn direction(&self, coord: Coord) -> Option<Direction> {
        self.directions[self.index(coord)]
    }

    pub(crate) fn set_cell(&mut self, coord: Coord, cell: Cell) {
        let index = self.index(coord);
        self.cells[index] = cell;
    }

    pub(crate) fn set_direction(&mut self, coord: Coord, direction: Direction) {
        let index = self.index(coord);
        self.directions[index] = Some(direction);
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    /// The coordinate `n` steps away from `coord`, or `None` if that lands off the grid.
    pub fn move_coords(&self, coord: Coord, n: usize, step: Step) -> Option<Coord> {
        let moved = match step {
            Step::Up => Coord::new(coord.row.checked_sub(n)?, coord.col),
            Step::Left => Coord::new(coord.row, coord.col.checked_sub(n)?),
            Step::Down => Coord::new(coord.row.checked_add(n)?, coord.col),
            Step::Right => Coord::new(coord.row, coord.col.checked_add(n)?),
        };

        if self.contains(moved) {
            Some(moved)
        } else {
            None
        }
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Coord::new(row, col)))
    }

    pub fn letter_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_letter()).count()
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.width + coord.col
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                match self.cell(Coord::new(row, col)) {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Blocker => write!(f, "#")?,
                    Cell::Letter(c) => write!(f, "{}", c)?,
                }
                if col != self.width - 1 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
