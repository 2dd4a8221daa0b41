//! The [`Grid`] type: a rectangular, coordinate-addressable arena of
//! [`Vertex`] values.
//!
//! Vertices are stored row-major, so a vertex's index is `y * width + x` and
//! the coordinate of every vertex is derived arithmetically. A grid is built
//! once through [`GridBuilder`] and is immutable afterwards.

use std::fmt;

use log::debug;

use crate::error::BuildError;
use crate::geom::{Direction, Point};
use crate::vertex::{OwnerId, Vertex, VertexId};

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A 2D grid of vertices, addressed by [`Point`] (x = column, y = row).
#[derive(Debug, Clone)]
pub struct Grid<T> {
    owner: OwnerId,
    cells: Vec<Vertex<T>>,
    width: usize,
    height: usize,
}

impl<T> Grid<T> {
    /// Start building a grid row by row.
    pub fn builder() -> GridBuilder<T> {
        GridBuilder::new()
    }

    /// Build a grid from complete rows. Every row must have the length of the
    /// first one.
    pub fn from_rows<R, I>(rows: R) -> Result<Self, BuildError>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        let mut builder = GridBuilder::new();
        for row in rows {
            builder.row(row)?;
        }
        Ok(builder.build())
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The container identity stamped into every vertex of this grid.
    #[inline]
    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    /// Whether `id` names a vertex of this grid.
    #[inline]
    pub fn contains(&self, id: VertexId) -> bool {
        id.owner() == self.owner && id.index() < self.cells.len()
    }

    /// The vertex with identity `id`, or `None` if it is foreign.
    #[inline]
    pub fn get(&self, id: VertexId) -> Option<&Vertex<T>> {
        if id.owner() != self.owner {
            return None;
        }
        self.cells.get(id.index())
    }

    /// The first vertex (top-left), if any.
    #[inline]
    pub fn root(&self) -> Option<&Vertex<T>> {
        self.cells.first()
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height {
            Some((p.y as usize) * self.width + (p.x as usize))
        } else {
            None
        }
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The vertices of row `y`, left to right.
    pub fn row(&self, y: usize) -> Option<&[Vertex<T>]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// The vertices of column `x`, top to bottom.
    pub fn column(&self, x: usize) -> Option<Vec<&Vertex<T>>> {
        if x >= self.width {
            return None;
        }
        Some(
            self.cells[x..]
                .iter()
                .step_by(self.width)
                .collect(),
        )
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Vertex<T>]> + '_ {
        (0..self.height).map(move |y| &self.cells[y * self.width..(y + 1) * self.width])
    }

    /// All columns, left to right.
    pub fn columns(&self) -> impl ExactSizeIterator<Item = Vec<&Vertex<T>>> + '_ {
        (0..self.width).map(move |x| self.cells[x..].iter().step_by(self.width).collect())
    }

    /// Coordinates of the vertex `id`, or `None` if it is foreign.
    pub fn coordinates(&self, id: VertexId) -> Option<Point> {
        self.contains(id).then(|| self.point(id.index()))
    }

    /// The vertex occupying `p`, if any.
    pub fn vertex(&self, p: Point) -> Option<&Vertex<T>> {
        self.idx(p).map(|i| &self.cells[i])
    }

    /// The vertex one step from `id` in direction `dir`.
    ///
    /// `None` if `id` is foreign, `dir` is `Unknown`, or the step leaves the
    /// grid.
    pub fn neighbor(&self, id: VertexId, dir: Direction) -> Option<&Vertex<T>> {
        if dir == Direction::Unknown {
            return None;
        }
        let p = self.coordinates(id)?;
        self.vertex(p.shift(dir))
    }

    /// Existing neighbors of `id` in canonical order: left, up, down, right,
    /// then (with diagonals) left-up, right-up, right-down, left-down.
    pub fn neighbors(&self, id: VertexId, allow_diagonals: bool) -> Vec<&Vertex<T>> {
        let Some(p) = self.coordinates(id) else {
            return Vec::new();
        };
        Direction::neighborhood(allow_diagonals)
            .filter_map(|d| self.vertex(p.shift(d)))
            .collect()
    }

    /// The direction `d` such that `neighbor(source, d)` is `destination`, or
    /// `Unknown` if the two are not adjacent members of this grid.
    pub fn direction(&self, source: VertexId, destination: VertexId) -> Direction {
        match (self.coordinates(source), self.coordinates(destination)) {
            (Some(a), Some(b)) => Direction::from_offset(b - a),
            _ => Direction::Unknown,
        }
    }

    /// Manhattan distance between two vertices, or `-1` if either is foreign.
    pub fn distance(&self, a: VertexId, b: VertexId) -> i32 {
        match (self.coordinates(a), self.coordinates(b)) {
            (Some(pa), Some(pb)) => pa.distance(pb),
            _ => -1,
        }
    }

    /// First vertex, in row-major order, whose value satisfies `pred`.
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<&Vertex<T>> {
        self.cells.iter().find(|v| pred(v.value()))
    }

    /// Row-major iterator, top-left to bottom-right.
    pub fn iter(&self) -> std::slice::Iter<'_, Vertex<T>> {
        self.cells.iter()
    }

    /// Row-major iterator over `(Point, &Vertex)` pairs.
    pub fn iter_points(&self) -> impl Iterator<Item = (Point, &Vertex<T>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| (self.point(i), v))
    }

    /// Structural equality: same shape and same values, identities ignored.
    pub fn same_layout(&self, other: &Grid<T>) -> bool
    where
        T: PartialEq,
    {
        self.width == other.width
            && self.height == other.height
            && self
                .cells
                .iter()
                .zip(&other.cells)
                .all(|(a, b)| a.value() == b.value())
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a Vertex<T>;
    type IntoIter = std::slice::Iter<'a, Vertex<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    /// Rows top to bottom separated by `\n`, values concatenated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for v in row {
                write!(f, "{}", v.value())?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GridBuilder
// ---------------------------------------------------------------------------

/// Accumulates rows of values and produces an immutable [`Grid`].
///
/// The first non-empty row fixes the width; later rows of a different length
/// are rejected with [`BuildError::RaggedRow`]. Empty rows are skipped.
#[derive(Debug)]
pub struct GridBuilder<T> {
    rows: Vec<Vec<T>>,
    width: Option<usize>,
}

impl<T> Default for GridBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GridBuilder<T> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            width: None,
        }
    }

    /// Number of rows added so far.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Append a row of values.
    pub fn row<I: IntoIterator<Item = T>>(&mut self, values: I) -> Result<&mut Self, BuildError> {
        let row: Vec<T> = values.into_iter().collect();
        if row.is_empty() {
            return Ok(self);
        }
        match self.width {
            Some(expected) if expected != row.len() => {
                return Err(BuildError::RaggedRow {
                    row: self.rows.len(),
                    expected,
                    found: row.len(),
                });
            }
            Some(_) => {}
            None => self.width = Some(row.len()),
        }
        self.rows.push(row);
        Ok(self)
    }

    /// Exchange two rows that have already been added.
    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<&mut Self, BuildError> {
        let len = self.rows.len();
        for index in [a, b] {
            if index >= len {
                return Err(BuildError::IndexOutOfBounds { index, len });
            }
        }
        self.rows.swap(a, b);
        Ok(self)
    }

    /// Freeze the accumulated rows. Identities are assigned row-major from 0.
    pub fn build(self) -> Grid<T> {
        let owner = OwnerId::next();
        let width = self.width.unwrap_or(0);
        let height = self.rows.len();
        let cells: Vec<Vertex<T>> = self
            .rows
            .into_iter()
            .flatten()
            .enumerate()
            .map(|(i, value)| Vertex::new(VertexId::new(owner, i), value))
            .collect();
        debug!("built {width}x{height} grid (owner {owner})");
        Grid {
            owner,
            cells,
            width,
            height,
        }
    }
}
