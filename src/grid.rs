use crate::error::GridError;
use crate::rng::Rng;

/// Bounded row-major cell matrix. No per-cell objects; liveness is a flat
/// `Vec<bool>`. No wraparound: the world ends at the edge.
#[derive(Clone, Debug)]
pub struct Grid {
    pub(crate) cells: Vec<bool>,
    pub(crate) w: usize,
    pub(crate) h: usize,
}

impl Grid {
    /// Construct a grid with every cell dead. Zero-sized grids are valid,
    /// negative dimensions are not.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width < 0 || height < 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        let w = width as usize;
        let h = height as usize;
        Ok(Self {
            cells: vec![false; w * h],
            w,
            h,
        })
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.w && y < self.h);
        y * self.w + x
    }

    fn checked_idx(&self, x: i32, y: i32) -> Result<usize, GridError> {
        if x < 0 || y < 0 || x as usize >= self.w || y as usize >= self.h {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.w,
                height: self.h,
            });
        }
        Ok(self.idx(x as usize, y as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Result<bool, GridError> {
        Ok(self.cells[self.checked_idx(x, y)?])
    }

    pub fn set(&mut self, x: i32, y: i32, alive: bool) -> Result<(), GridError> {
        let i = self.checked_idx(x, y)?;
        self.cells[i] = alive;
        Ok(())
    }

    /// Live cells among the up-to-8 Moore neighbors of (x, y). The cell
    /// itself is never counted; border cells simply have fewer candidates.
    pub fn living_neighbor_count(&self, x: i32, y: i32) -> Result<u8, GridError> {
        self.checked_idx(x, y)?;
        Ok(self.live_neighbors(x as usize, y as usize))
    }

    /// Unchecked fast path for the simulator's inner loop.
    #[inline]
    pub(crate) fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;
        for (nx, ny) in neighbors8(x as i32, y as i32, self.w, self.h) {
            if self.cells[ny * self.w + nx] {
                count += 1;
            }
        }
        count
    }

    /// Independently set every cell alive with probability `coverage`,
    /// sampled as `r < coverage`: values at or below 0 clear the grid,
    /// values at or above 1 fill it.
    pub fn populate_random(&mut self, coverage: f64, rng: &mut Rng) {
        for cell in &mut self.cells {
            *cell = rng.chance(coverage);
        }
    }

    /// Immutable copy of the full grid state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: self.cells.clone(),
            w: self.w,
            h: self.h,
        }
    }
}

/// 8-connected neighbors clipped to the grid extent.
pub(crate) fn neighbors8(
    x: i32,
    y: i32,
    w: usize,
    h: usize,
) -> impl Iterator<Item = (usize, usize)> {
    let offsets: [(i32, i32); 8] = [
        (-1, -1), (0, -1), (1, -1),
        (-1, 0),           (1, 0),
        (-1, 1),  (0, 1),  (1, 1),
    ];
    let mut out = [(0usize, 0usize); 8];
    let mut n = 0;
    for (dx, dy) in offsets {
        let nx = x + dx;
        let ny = y + dy;
        if nx >= 0 && ny >= 0 && (nx as usize) < w && (ny as usize) < h {
            out[n] = (nx as usize, ny as usize);
            n += 1;
        }
    }
    out.into_iter().take(n)
}

/// Immutable grid state. Structural equality between consecutive snapshots
/// is the simulator's convergence test; no hashing is involved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    cells: Vec<bool>,
    w: usize,
    h: usize,
}

impl Snapshot {
    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    #[inline]
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < self.w && y < self.h);
        self.cells[y * self.w + x]
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_dead() {
        let grid = Grid::new(7, 5).unwrap();
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.population(), 0);
        for y in 0..5 {
            for x in 0..7 {
                assert!(!grid.get(x, y).unwrap());
            }
        }
    }

    #[test]
    fn zero_dimensions_are_valid() {
        assert_eq!(Grid::new(0, 0).unwrap().population(), 0);
        assert!(Grid::new(0, 3).is_ok());
        assert!(Grid::new(3, 0).is_ok());
    }

    #[test]
    fn negative_dimensions_are_rejected() {
        assert!(matches!(
            Grid::new(-1, 5),
            Err(GridError::InvalidDimension {
                width: -1,
                height: 5
            })
        ));
        assert!(matches!(
            Grid::new(5, -1),
            Err(GridError::InvalidDimension {
                width: 5,
                height: -1
            })
        ));
    }

    #[test]
    fn out_of_bounds_access_is_rejected() {
        let mut grid = Grid::new(3, 3).unwrap();
        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 3), (17, -4)] {
            let err = GridError::OutOfBounds {
                x,
                y,
                width: 3,
                height: 3,
            };
            assert_eq!(grid.get(x, y), Err(err.clone()));
            assert_eq!(grid.set(x, y, true), Err(err.clone()));
            assert_eq!(grid.living_neighbor_count(x, y), Err(err));
        }
        // Rejected writes leave the grid untouched.
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set(2, 1, true).unwrap();
        assert!(grid.get(2, 1).unwrap());
        grid.set(2, 1, false).unwrap();
        assert!(!grid.get(2, 1).unwrap());
    }

    #[test]
    fn neighbor_count_never_includes_self() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(1, 1, true).unwrap();
        assert_eq!(grid.living_neighbor_count(1, 1), Ok(0));
    }

    #[test]
    fn neighbor_count_clips_at_edges_and_corners() {
        let mut grid = Grid::new(3, 3).unwrap();
        for y in 0..3 {
            for x in 0..3 {
                grid.set(x, y, true).unwrap();
            }
        }
        // Interior cell sees all 8 neighbors, edge cell 5, corner cell 3.
        assert_eq!(grid.living_neighbor_count(1, 1), Ok(8));
        assert_eq!(grid.living_neighbor_count(1, 0), Ok(5));
        assert_eq!(grid.living_neighbor_count(0, 0), Ok(3));
        assert_eq!(grid.living_neighbor_count(2, 2), Ok(3));
    }

    #[test]
    fn populate_random_is_deterministic_per_seed() {
        let mut a = Grid::new(16, 16).unwrap();
        let mut b = Grid::new(16, 16).unwrap();
        a.populate_random(0.5, &mut Rng::new(1234));
        b.populate_random(0.5, &mut Rng::new(1234));
        assert_eq!(a.snapshot(), b.snapshot());

        let mut c = Grid::new(16, 16).unwrap();
        c.populate_random(0.5, &mut Rng::new(4321));
        assert_ne!(a.snapshot(), c.snapshot());
    }

    #[test]
    fn populate_random_extremes() {
        let mut grid = Grid::new(8, 8).unwrap();
        grid.populate_random(1.0, &mut Rng::new(7));
        assert_eq!(grid.population(), 64);
        grid.populate_random(0.0, &mut Rng::new(7));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn snapshot_equality_is_structural() {
        let mut grid = Grid::new(4, 4).unwrap();
        let before = grid.snapshot();
        grid.set(1, 2, true).unwrap();
        assert_ne!(grid.snapshot(), before);
        grid.set(1, 2, false).unwrap();
        assert_eq!(grid.snapshot(), before);
    }
}
