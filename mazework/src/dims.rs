use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Position of a cell on the grid, `Dims(x, y)`.
///
/// Ordering is lexicographic (x first, then y), which is what the heuristic
/// solver relies on to break ties between equally promising cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);
    pub const ONE: Dims = Dims(1, 1);

    /// Iterates all positions in `from..to` in row-major order.
    pub fn iter_fill(from: Dims, to: Dims) -> impl Iterator<Item = Dims> {
        (from.1..to.1).flat_map(move |y| (from.0..to.0).map(move |x| Dims(x, y)))
    }

    pub fn all_non_negative(self) -> bool {
        self.0 >= 0 && self.1 >= 0
    }

    pub fn abs_sum(self) -> i32 {
        self.0.abs() + self.1.abs()
    }

    pub fn manhattan(self, other: Dims) -> u32 {
        (self - other).abs_sum() as u32
    }

    pub fn linear_index(&self, size: Dims) -> usize {
        assert!(self.all_non_negative());
        (self.1 * size.0 + self.0) as usize
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Dims {
    type Output = Dims;

    fn sub(self, other: Dims) -> Dims {
        Dims(self.0 - other.0, self.1 - other.1)
    }
}

impl Mul<i32> for Dims {
    type Output = Dims;

    fn mul(self, other: i32) -> Dims {
        Dims(self.0 * other, self.1 * other)
    }
}

#[cfg(test)]
mod tests {
    use super::Dims;

    #[test]
    fn iter_fill_is_row_major() {
        let cells: Vec<_> = Dims::iter_fill(Dims::ZERO, Dims(3, 2)).collect();
        assert_eq!(
            cells,
            vec![
                Dims(0, 0),
                Dims(1, 0),
                Dims(2, 0),
                Dims(0, 1),
                Dims(1, 1),
                Dims(2, 1)
            ]
        );
    }

    #[test]
    fn manhattan_and_index() {
        assert_eq!(Dims(0, 0).manhattan(Dims(3, 4)), 7);
        assert_eq!(Dims(5, 1).manhattan(Dims(2, 3)), 5);
        assert_eq!(Dims(2, 3).linear_index(Dims(4, 5)), 14);
    }

    #[test]
    fn ordering_is_x_then_y() {
        assert!(Dims(0, 9) < Dims(1, 0));
        assert!(Dims(1, 0) < Dims(1, 1));
    }
}
