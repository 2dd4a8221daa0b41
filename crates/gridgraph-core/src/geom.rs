//! Geometry primitives: [`Point`] and [`Direction`].
//!
//! X grows right (column index), Y grows down (row index), so `Up` is a step
//! towards row 0.

use std::fmt;
use std::ops::{Add, Mul, Sub};

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the eight unit steps on a square lattice, or [`Direction::Unknown`]
/// when two positions are not related by a single step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
    LeftUp,
    RightUp,
    LeftDown,
    RightDown,
    #[default]
    Unknown,
}

impl Direction {
    /// Cardinal directions in canonical neighbor order.
    pub const CARDINAL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Down,
        Direction::Right,
    ];

    /// Diagonal directions in canonical neighbor order (clockwise from
    /// the upper left).
    pub const DIAGONAL: [Direction; 4] = [
        Direction::LeftUp,
        Direction::RightUp,
        Direction::RightDown,
        Direction::LeftDown,
    ];

    /// Unit offset of this direction. `Unknown` has a zero offset.
    #[inline]
    pub const fn offset(self) -> Point {
        match self {
            Self::Left => Point::new(-1, 0),
            Self::Right => Point::new(1, 0),
            Self::Up => Point::new(0, -1),
            Self::Down => Point::new(0, 1),
            Self::LeftUp => Point::new(-1, -1),
            Self::RightUp => Point::new(1, -1),
            Self::LeftDown => Point::new(-1, 1),
            Self::RightDown => Point::new(1, 1),
            Self::Unknown => Point::ZERO,
        }
    }

    /// The direction whose offset is `delta`, or `Unknown` if `delta` is not
    /// a unit step.
    pub fn from_offset(delta: Point) -> Self {
        match (delta.x, delta.y) {
            (-1, 0) => Self::Left,
            (1, 0) => Self::Right,
            (0, -1) => Self::Up,
            (0, 1) => Self::Down,
            (-1, -1) => Self::LeftUp,
            (1, -1) => Self::RightUp,
            (-1, 1) => Self::LeftDown,
            (1, 1) => Self::RightDown,
            _ => Self::Unknown,
        }
    }

    /// The reverse step. `Unknown` stays `Unknown`.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::LeftUp => Self::RightDown,
            Self::RightDown => Self::LeftUp,
            Self::RightUp => Self::LeftDown,
            Self::LeftDown => Self::RightUp,
            Self::Unknown => Self::Unknown,
        }
    }

    #[inline]
    pub fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::LeftUp | Self::RightUp | Self::LeftDown | Self::RightDown
        )
    }

    /// Canonical neighbor order, optionally followed by the diagonals.
    pub fn neighborhood(allow_diagonals: bool) -> impl Iterator<Item = Direction> {
        let cardinal: &'static [Direction] = &Self::CARDINAL;
        let diagonals: &'static [Direction] = if allow_diagonals {
            &Self::DIAGONAL
        } else {
            &[]
        };
        cardinal.iter().chain(diagonals).copied()
    }
}

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer coordinate pair. Equality and hashing are by value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return the point one unit step away in `dir`.
    ///
    /// `Direction::Unknown` returns `self` unchanged. Coordinates wrap at
    /// the edges of the `i32` range.
    #[inline]
    pub const fn shift(self, dir: Direction) -> Self {
        let d = dir.offset();
        Self {
            x: self.x.wrapping_add(d.x),
            y: self.y.wrapping_add(d.y),
        }
    }

    /// Manhattan (L1) distance to `other`, saturating at `i32::MAX`.
    #[inline]
    pub fn distance(self, other: Point) -> i32 {
        let d = u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y));
        i32::try_from(d).unwrap_or(i32::MAX)
    }

    /// The z component of the cross product of the two position vectors.
    #[inline]
    pub fn cross(self, other: Point) -> i64 {
        i64::from(self.x) * i64::from(other.y) - i64::from(other.x) * i64::from(self.y)
    }
}

/// Area enclosed by a simple polygon, using the shoelace formula.
///
/// The polygon is implicitly closed (the last vertex connects back to the
/// first). Winding order does not matter. Half-unit areas round toward zero.
pub fn polygon_area(vertices: &[Point]) -> i64 {
    if vertices.len() < 3 {
        return 0;
    }
    let twice: i64 = vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(a, b)| a.cross(*b))
        .sum();
    twice.abs() / 2
}

// --- trait impls for Point ---

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    // Row-major, matching grid iteration order.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Point {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Add<Direction> for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Direction) -> Self {
        self.shift(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    const ALL: [Direction; 8] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
        Direction::LeftUp,
        Direction::RightUp,
        Direction::LeftDown,
        Direction::RightDown,
    ];

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(a * 3, Point::new(3, 6));
        assert_eq!(a + Direction::Up, Point::new(1, 1));
    }

    #[test]
    fn shift_moves_one_unit() {
        let p = Point::new(5, 5);
        assert_eq!(p.shift(Direction::Left), Point::new(4, 5));
        assert_eq!(p.shift(Direction::Right), Point::new(6, 5));
        assert_eq!(p.shift(Direction::Up), Point::new(5, 4));
        assert_eq!(p.shift(Direction::Down), Point::new(5, 6));
        assert_eq!(p.shift(Direction::LeftUp), Point::new(4, 4));
        assert_eq!(p.shift(Direction::RightDown), Point::new(6, 6));
    }

    #[test]
    fn shift_unknown_is_identity() {
        let p = Point::new(-3, 7);
        assert_eq!(p.shift(Direction::Unknown), p);
    }

    #[test]
    fn shift_and_distance_are_total_at_i32_edges() {
        let east = Point::new(i32::MAX, 0).shift(Direction::Right);
        assert_eq!(east, Point::new(i32::MIN, 0));
        let north = Point::new(0, i32::MIN).shift(Direction::RightUp);
        assert_eq!(north, Point::new(1, i32::MAX));

        let far = Point::new(i32::MIN, 0).distance(Point::new(i32::MAX, 0));
        assert_eq!(far, i32::MAX);
        let corner = Point::new(i32::MIN, i32::MIN).distance(Point::new(i32::MAX, i32::MAX));
        assert_eq!(corner, i32::MAX);
        assert_eq!(Point::new(i32::MAX, 0).distance(Point::new(i32::MAX - 3, 4)), 7);
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(Point::new(0, 0).distance(Point::new(2, 2)), 4);
        assert_eq!(Point::new(-1, 4).distance(Point::new(2, 0)), 7);
        assert_eq!(Point::new(3, 3).distance(Point::new(3, 3)), 0);
    }

    #[test]
    fn points_hash_by_value() {
        let mut set = HashSet::new();
        set.insert(Point::new(1, 2));
        assert!(set.contains(&Point::new(1, 2)));
        assert!(!set.contains(&Point::new(2, 1)));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut pts = vec![Point::new(1, 1), Point::new(0, 1), Point::new(2, 0)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(2, 0), Point::new(0, 1), Point::new(1, 1)]);
    }

    #[test]
    fn from_offset_inverts_offset() {
        for d in ALL {
            assert_eq!(Direction::from_offset(d.offset()), d);
        }
        assert_eq!(Direction::from_offset(Point::ZERO), Direction::Unknown);
        assert_eq!(Direction::from_offset(Point::new(2, 0)), Direction::Unknown);
    }

    #[test]
    fn opposite_cancels() {
        for d in ALL {
            assert_eq!(Point::ZERO.shift(d).shift(d.opposite()), Point::ZERO);
            assert_eq!(d.opposite().opposite(), d);
        }
        assert_eq!(Direction::Unknown.opposite(), Direction::Unknown);
    }

    #[test]
    fn neighborhood_order() {
        let card: Vec<_> = Direction::neighborhood(false).collect();
        assert_eq!(
            card,
            [Direction::Left, Direction::Up, Direction::Down, Direction::Right]
        );
        let all: Vec<_> = Direction::neighborhood(true).collect();
        assert_eq!(all.len(), 8);
        assert_eq!(&all[4..], &Direction::DIAGONAL);
        assert!(all[4..].iter().all(|d| d.is_diagonal()));
    }

    #[test]
    fn cross_product() {
        assert_eq!(Point::new(1, 0).cross(Point::new(0, 1)), 1);
        assert_eq!(Point::new(0, 1).cross(Point::new(1, 0)), -1);
        assert_eq!(Point::new(2, 4).cross(Point::new(1, 2)), 0);
    }

    #[test]
    fn shoelace_area() {
        let square = [
            Point::new(0, 0),
            Point::new(4, 0),
            Point::new(4, 3),
            Point::new(0, 3),
        ];
        assert_eq!(polygon_area(&square), 12);
        let mut reversed = square;
        reversed.reverse();
        assert_eq!(polygon_area(&reversed), 12);
        let triangle = [Point::new(0, 0), Point::new(4, 0), Point::new(0, 4)];
        assert_eq!(polygon_area(&triangle), 8);
        assert_eq!(polygon_area(&square[..2]), 0);
    }

    proptest! {
        #[test]
        fn distance_is_metric(
            ax in -50i32..50, ay in -50i32..50,
            bx in -50i32..50, by in -50i32..50,
            cx in -50i32..50, cy in -50i32..50,
        ) {
            let (a, b, c) = (Point::new(ax, ay), Point::new(bx, by), Point::new(cx, cy));
            prop_assert_eq!(a.distance(a), 0);
            prop_assert_eq!(a.distance(b), b.distance(a));
            prop_assert!(a.distance(c) <= a.distance(b) + b.distance(c));
        }

        #[test]
        fn shift_changes_distance_by_step(x in -50i32..50, y in -50i32..50, i in 0usize..8) {
            let p = Point::new(x, y);
            let d = ALL[i];
            let expected = if d.is_diagonal() { 2 } else { 1 };
            prop_assert_eq!(p.distance(p.shift(d)), expected);
        }
    }
}
