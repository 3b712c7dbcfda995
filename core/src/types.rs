use ndarray::Array2;

/// Single axis used for row/column counts and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional position `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Shape of a grid as `(rows, cols)`.
pub(crate) fn grid_size<T>(grid: &Array2<T>) -> Coord2 {
    let (rows, cols) = grid.dim();
    // grids are only ever built from `Coord2` sizes
    (rows as Coord, cols as Coord)
}

/// Row/column offsets of the 8-neighbourhood, in reading order.
const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Shifts `pos` by `offset`, keeping the result only if it lands inside `bounds`.
fn offset_within(pos: Coord2, offset: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let row = pos.0.checked_add_signed(offset.0)?;
    let col = pos.1.checked_add_signed(offset.1)?;
    (row < bounds.0 && col < bounds.1).then_some((row, col))
}

/// In-bounds neighbours of a cell. Edge cells yield fewer than 8, nothing wraps.
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Coord2,
    bounds: Coord2,
    next: usize,
}

impl Neighbors {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            next: 0,
        }
    }
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&offset) = OFFSETS.get(self.next) {
            self.next += 1;
            if let Some(pos) = offset_within(self.center, offset, self.bounds) {
                return Some(pos);
            }
        }
        None
    }
}
