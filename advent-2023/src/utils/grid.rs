//! Rectangular character grids addressed by `(x, y)`

use aoc_solver::ParseError;

/// One of the four grid directions. North is towards `y = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Distinct bit per direction, for packing visited headings into a `u8`.
    pub fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// A rectangular grid of bytes, stored row-major.
///
/// `x` is the column and `y` the row, with `(0, 0)` at the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Parse a block of equally long lines.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut lines = input.trim().lines().map(str::trim_end);
        let first = lines
            .next()
            .filter(|l| !l.is_empty())
            .ok_or_else(|| ParseError::MissingData("empty grid".to_string()))?;

        let width = first.len();
        let mut cells = first.as_bytes().to_vec();
        let mut height = 1;
        for (idx, line) in lines.enumerate() {
            if line.len() != width {
                return Err(ParseError::InvalidFormat(format!(
                    "(line {}) expected {} columns, found {}",
                    idx + 2,
                    width,
                    line.len()
                )));
            }
            cells.extend_from_slice(line.as_bytes());
            height += 1;
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The cell at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x])
    }

    pub fn row(&self, y: usize) -> &[u8] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// The in-bounds position one step from `(x, y)` towards `dir`.
    pub fn step(&self, x: usize, y: usize, dir: Direction) -> Option<(usize, usize)> {
        let (nx, ny) = match dir {
            Direction::North => (x, y.checked_sub(1)?),
            Direction::East => (x + 1, y),
            Direction::South => (x, y + 1),
            Direction::West => (x.checked_sub(1)?, y),
        };
        (nx < self.width && ny < self.height).then_some((nx, ny))
    }

    /// All `(x, y)` positions, row by row.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| (x, y)))
    }

    /// Position of the first cell equal to `cell`, scanning row by row.
    pub fn find(&self, cell: u8) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|&c| c == cell)
            .map(|i| (i % self.width, i / self.width))
    }
}
