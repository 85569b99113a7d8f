use std::collections::VecDeque;

use hashbrown::{HashMap, HashSet};
use log::{debug, trace, warn};
use rand::Rng;
use smallvec::SmallVec;

use crate::{
    array::Array2D,
    cell::Cell,
    coord::{Coord, Direction},
    dims::Dims,
    error::MazeError,
    random::{choose_index, sample_pair},
};

/// Rectangular grid of cells, carved into a perfect maze by [`Maze::generate`].
#[derive(Debug, Clone)]
pub struct Maze {
    cells: Array2D<Cell>,
    entrance: Option<Coord>,
    exit: Option<Coord>,
}

impl Maze {
    /// Creates a maze with every wall standing. Nothing is carved until [`Maze::generate`].
    pub fn new(width: i32, height: i32) -> Result<Self, MazeError> {
        let invalid = MazeError::InvalidDimension { width, height };
        if width <= 0 || height <= 0 {
            return Err(invalid);
        }

        let cells = Array2D::new_dims(Cell::new(), Dims(width, height)).ok_or(invalid)?;
        Ok(Maze {
            cells,
            entrance: None,
            exit: None,
        })
    }

    /// Creates and generates a maze in one step.
    pub fn generated<R: Rng + ?Sized>(
        width: i32,
        height: i32,
        rng: &mut R,
    ) -> Result<Self, MazeError> {
        let mut maze = Self::new(width, height)?;
        maze.generate(rng)?;
        Ok(maze)
    }

    pub fn width(&self) -> i32 {
        self.cells.width() as i32
    }

    pub fn height(&self) -> i32 {
        self.cells.height() as i32
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_in_bounds(&self, pos: Coord) -> bool {
        self.cells.get(pos).is_some()
    }

    pub fn cell_at(&self, pos: Coord) -> Result<&Cell, MazeError> {
        self.cells.get(pos).ok_or(MazeError::OutOfBounds(pos))
    }

    pub fn cells(&self) -> &Array2D<Cell> {
        &self.cells
    }

    pub fn entrance(&self) -> Option<Coord> {
        self.entrance
    }

    pub fn exit(&self) -> Option<Coord> {
        self.exit
    }

    pub fn is_generated(&self) -> bool {
        self.entrance.is_some()
    }

    /// Puts every wall back and forgets entrance and exit, so the maze can be generated again.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::new());
        self.entrance = None;
        self.exit = None;
    }

    pub fn broken_wall_count(&self) -> usize {
        self.cells.iter().map(Cell::broken_walls).sum()
    }

    pub fn neighbor(&self, pos: Coord, dir: Direction) -> Option<Coord> {
        pos.neighbor(dir).filter(|n| self.is_in_bounds(*n))
    }

    /// Whether the wall between `pos` and its neighbor in `dir` is broken.
    ///
    /// Walls are owned by the upper/left cell of the pair, so top and left look at the neighbor.
    pub fn is_open(&self, pos: Coord, dir: Direction) -> bool {
        if !self.is_in_bounds(pos) {
            return false;
        }
        let Some(neighbor) = self.neighbor(pos, dir) else {
            return false;
        };

        match dir {
            Direction::Top => !self.cells[neighbor].bottom_wall(),
            Direction::Right => !self.cells[pos].right_wall(),
            Direction::Bottom => !self.cells[pos].bottom_wall(),
            Direction::Left => !self.cells[neighbor].right_wall(),
        }
    }

    /// Cells reachable from `pos` in one step through broken walls.
    pub fn open_neighbors(&self, pos: Coord) -> SmallVec<[Coord; 4]> {
        Direction::in_order()
            .into_iter()
            .filter(|dir| self.is_open(pos, *dir))
            .filter_map(|dir| self.neighbor(pos, dir))
            .collect()
    }

    /// Every cell on the outer edge, each exactly once.
    ///
    /// Order: `(x, 0)` and `(x, height - 1)` for each column, then `(0, y)` and
    /// `(width - 1, y)` for each inner row.
    pub fn boundary_coords(&self) -> Vec<Coord> {
        let (w, h) = (self.width(), self.height());
        let mut edges = Vec::with_capacity(2 * (w + h) as usize);
        let mut push = |x: i32, y: i32| {
            if let Ok(pos) = Coord::new(x, y) {
                edges.push(pos);
            }
        };

        // single rows and columns would otherwise list their cells twice
        for x in 0..w {
            push(x, 0);
            if h > 1 {
                push(x, h - 1);
            }
        }
        for y in 1..h - 1 {
            push(0, y);
            if w > 1 {
                push(w - 1, y);
            }
        }

        edges
    }

    /// Picks distinct entrance and exit cells.
    ///
    /// In a single row or column an exit between two cells would cut the line in half, since
    /// the exit is never carved through, so the exit is one of the two ends. The entrance may
    /// be any other cell of the line.
    fn pick_gates<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(Coord, Coord), MazeError> {
        if self.cell_count() < 2 {
            return Err(MazeError::TooFewBoundaryCells);
        }

        if self.width() == 1 || self.height() == 1 {
            let last = self
                .cells
                .idx_to_dim(self.cell_count() - 1)
                .ok_or(MazeError::TooFewBoundaryCells)?;
            let exit = [Coord::ORIGIN, last][choose_index(rng, 2)];
            let others = self
                .cells
                .iter_pos()
                .filter(|pos| *pos != exit)
                .collect::<Vec<_>>();
            let entrance = others[choose_index(rng, others.len())];
            return Ok((entrance, exit));
        }

        let candidates = self.boundary_coords();
        let (a, b) = sample_pair(rng, candidates.len());
        Ok((candidates[a], candidates[b]))
    }

    /// In-bounds neighbors of `pos` that were not carved yet, in top, right, bottom, left order.
    pub fn check_surround(&self, pos: Coord) -> SmallVec<[(Direction, Coord); 4]> {
        Direction::in_order()
            .into_iter()
            .filter_map(|dir| self.neighbor(pos, dir).map(|n| (dir, n)))
            .filter(|(_, n)| !self.cells[*n].is_pathed())
            .collect()
    }

    /// First neighbor, in top, right, bottom, left order, that is still on the carving stack and
    /// connected to `pos` through a broken wall.
    pub fn backtrack(&self, pos: Coord) -> Option<Coord> {
        Direction::in_order()
            .into_iter()
            .filter(|dir| self.is_open(pos, *dir))
            .filter_map(|dir| self.neighbor(pos, dir))
            .find(|n| self.cells[*n].is_explored())
    }

    fn break_wall(&mut self, pos: Coord, dir: Direction, neighbor: Coord) {
        match dir {
            Direction::Top => self.cells[neighbor].break_bottom_wall(),
            Direction::Right => self.cells[pos].break_right_wall(),
            Direction::Bottom => self.cells[pos].break_bottom_wall(),
            Direction::Left => self.cells[neighbor].break_right_wall(),
        }
    }

    fn carve_into(&mut self, pos: Coord) {
        let cell = &mut self.cells[pos];
        cell.set_explored();
        cell.set_pathed();
    }

    fn clear_explored(&mut self) {
        self.cells.iter_mut().for_each(Cell::unset_explored);
    }

    /// Picks entrance and exit on the boundary and carves a perfect maze with randomized
    /// depth-first search, backtracking out of dead ends.
    ///
    /// The exit is never used as a branching point, carving always turns back once it gets
    /// there. A maze can only be generated once, [`Maze::reset`] it to generate again.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), MazeError> {
        if self.is_generated() {
            return Err(MazeError::AlreadyGenerated);
        }

        let (entrance, exit) = self.pick_gates(rng)?;
        self.entrance = Some(entrance);
        self.exit = Some(exit);

        debug!(
            "generating {}x{} maze from {entrance} to {exit}",
            self.width(),
            self.height()
        );

        let total = self.cell_count();
        let mut current = entrance;
        self.carve_into(current);
        let mut pathed = 1;

        while pathed < total {
            let possibilities = if current == exit {
                SmallVec::new()
            } else {
                self.check_surround(current)
            };

            if possibilities.is_empty() {
                self.cells[current].unset_explored();
                let Some(previous) = self.backtrack(current) else {
                    self.clear_explored();
                    return Err(MazeError::BacktrackExhausted {
                        at: current,
                        pathed,
                        total,
                    });
                };
                trace!("dead end at {current}, back to {previous}");
                current = previous;
            } else {
                let (dir, next) = possibilities[choose_index(rng, possibilities.len())];
                self.break_wall(current, dir, next);
                current = next;
                self.carve_into(current);
                pathed += 1;
            }
        }

        // whatever is left on the stack is not explored anymore
        self.clear_explored();

        debug!("maze generated, {} walls broken", self.broken_wall_count());
        Ok(())
    }

    /// Shortest path from entrance to exit, both inclusive. Empty if the maze wasn't generated
    /// or the exit can't be reached.
    pub fn solve(&self) -> Vec<Coord> {
        let (Some(entrance), Some(exit)) = (self.entrance, self.exit) else {
            return Vec::new();
        };

        let mut came_from = HashMap::with_capacity(self.cell_count());
        let mut visited = HashSet::with_capacity(self.cell_count());
        let mut queue = VecDeque::from([entrance]);
        visited.insert(entrance);

        while let Some(current) = queue.pop_front() {
            if current == exit {
                let path = Self::reconstruct_path(&came_from, exit);
                debug!("solved maze, path has {} cells", path.len());
                return path;
            }

            for next in self.open_neighbors(current) {
                if visited.insert(next) {
                    came_from.insert(next, current);
                    queue.push_back(next);
                }
            }
        }

        warn!("exit {exit} is unreachable from entrance {entrance}");
        Vec::new()
    }

    fn reconstruct_path(came_from: &HashMap<Coord, Coord>, end: Coord) -> Vec<Coord> {
        let mut path = vec![end];
        let mut current = end;
        while let Some(&previous) = came_from.get(&current) {
            path.push(previous);
            current = previous;
        }

        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use super::*;
    use crate::random::random_source;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y).unwrap()
    }

    #[test]
    fn new_rejects_non_positive_sizes() {
        assert_eq!(
            Maze::new(0, 3).unwrap_err(),
            MazeError::InvalidDimension {
                width: 0,
                height: 3
            }
        );
        assert!(Maze::new(3, -1).is_err());
    }

    #[test]
    fn new_is_fully_walled() {
        let maze = Maze::new(4, 3).unwrap();
        assert_eq!(maze.cell_count(), 12);
        assert_eq!(maze.size(), Dims(4, 3));
        assert_eq!(maze.broken_wall_count(), 0);
        assert!(maze.cells().iter().all(|cell| *cell == Cell::new()));
        assert!(!maze.is_generated());
        assert_eq!(maze.entrance(), None);
    }

    #[test]
    fn cell_at_out_of_bounds() {
        let maze = Maze::new(3, 3).unwrap();
        assert!(maze.cell_at(c(2, 2)).is_ok());
        assert_eq!(
            maze.cell_at(c(5, 5)).unwrap_err(),
            MazeError::OutOfBounds(c(5, 5))
        );
        assert!(maze.cell_at(c(3, 0)).is_err());
    }

    #[test]
    fn wall_ownership() {
        let mut maze = Maze::new(3, 3).unwrap();
        let center = c(1, 1);

        maze.break_wall(center, Direction::Top, c(1, 0));
        assert!(!maze.cells[c(1, 0)].bottom_wall());
        assert!(maze.is_open(center, Direction::Top));
        assert!(maze.is_open(c(1, 0), Direction::Bottom));

        maze.break_wall(center, Direction::Left, c(0, 1));
        assert!(!maze.cells[c(0, 1)].right_wall());
        assert!(maze.is_open(c(0, 1), Direction::Right));

        maze.break_wall(center, Direction::Right, c(2, 1));
        assert!(!maze.cells[center].right_wall());

        maze.break_wall(center, Direction::Bottom, c(1, 2));
        assert!(!maze.cells[center].bottom_wall());

        assert_eq!(maze.broken_wall_count(), 4);
        assert_eq!(maze.open_neighbors(center).len(), 4);
    }

    #[test]
    fn outer_walls_never_open() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.cells[c(1, 1)].break_right_wall();
        assert!(!maze.is_open(c(1, 1), Direction::Right));
        assert!(!maze.is_open(c(0, 0), Direction::Top));
        assert!(!maze.is_open(c(0, 0), Direction::Left));
        assert!(!maze.is_open(c(5, 0), Direction::Left));
    }

    #[test]
    fn boundary_coords_are_distinct() {
        let maze = Maze::new(3, 3).unwrap();
        assert_eq!(
            maze.boundary_coords(),
            [
                c(0, 0),
                c(0, 2),
                c(1, 0),
                c(1, 2),
                c(2, 0),
                c(2, 2),
                c(0, 1),
                c(2, 1)
            ]
        );

        assert_eq!(Maze::new(1, 1).unwrap().boundary_coords(), [c(0, 0)]);
        assert_eq!(Maze::new(3, 1).unwrap().boundary_coords().len(), 3);
        assert_eq!(Maze::new(1, 4).unwrap().boundary_coords().len(), 4);
        assert_eq!(Maze::new(5, 4).unwrap().boundary_coords().len(), 14);
    }

    #[test]
    fn check_surround_skips_pathed() {
        let mut maze = Maze::new(3, 3).unwrap();
        let center = c(1, 1);
        assert_eq!(maze.check_surround(center).len(), 4);

        maze.cells[c(1, 0)].set_pathed();
        maze.cells[c(0, 1)].set_pathed();
        let left = maze.check_surround(center);
        assert_eq!(
            left.as_slice(),
            [(Direction::Right, c(2, 1)), (Direction::Bottom, c(1, 2))]
        );

        assert!(maze.check_surround(c(0, 0)).is_empty());
        assert_eq!(maze.check_surround(c(2, 2)).len(), 2);
    }

    #[test]
    fn backtrack_needs_explored_and_open() {
        let mut maze = Maze::new(3, 3).unwrap();
        let center = c(1, 1);

        // explored but still walled off
        maze.cells[c(1, 0)].set_explored();
        assert_eq!(maze.backtrack(center), None);

        maze.break_wall(center, Direction::Top, c(1, 0));
        assert_eq!(maze.backtrack(center), Some(c(1, 0)));

        // open but not explored
        maze.break_wall(center, Direction::Left, c(0, 1));
        maze.cells[c(1, 0)].unset_explored();
        assert_eq!(maze.backtrack(center), None);

        maze.cells[c(0, 1)].set_explored();
        assert_eq!(maze.backtrack(center), Some(c(0, 1)));
    }

    #[test]
    fn single_cell_cannot_be_generated() {
        let mut maze = Maze::new(1, 1).unwrap();
        let mut rng = StepRng::new(0, 0);
        assert_eq!(
            maze.generate(&mut rng),
            Err(MazeError::TooFewBoundaryCells)
        );
        assert!(!maze.is_generated());
        assert!(!maze.cells[Coord::ORIGIN].is_pathed());
        assert!(maze.solve().is_empty());
    }

    #[test]
    fn line_exit_is_an_end() {
        let (mut rng, _) = random_source(Some(3));
        let mut entrances = HashSet::new();
        for _ in 0..40 {
            let maze = Maze::generated(1, 6, &mut rng).unwrap();
            let (entrance, exit) = (maze.entrance().unwrap(), maze.exit().unwrap());
            assert!(exit == c(0, 0) || exit == c(0, 5));
            assert_ne!(entrance, exit);
            assert_eq!(maze.broken_wall_count(), 5);
            assert_eq!(maze.solve().len() as i32, (exit.y() - entrance.y()).abs() + 1);
            entrances.insert(entrance);
        }

        // the entrance is not limited to the ends
        assert!(entrances.iter().any(|pos| pos.y() != 0 && pos.y() != 5));
    }

    #[test]
    fn line_gates_with_zero_source() {
        let mut maze = Maze::new(4, 1).unwrap();
        maze.generate(&mut StepRng::new(0, 0)).unwrap();
        assert_eq!(maze.exit(), Some(c(0, 0)));
        assert_eq!(maze.entrance(), Some(c(1, 0)));
        assert_eq!(maze.solve(), [c(1, 0), c(0, 0)]);
    }

    #[test]
    fn long_two_row_boundary() {
        let maze = Maze::new(50_000, 2).unwrap();
        let edges = maze.boundary_coords();
        assert_eq!(edges.len(), 100_000);
        assert_eq!(edges.iter().collect::<HashSet<_>>().len(), edges.len());
        assert_eq!(&edges[..4], [c(0, 0), c(0, 1), c(1, 0), c(1, 1)]);

        let (mut rng, _) = random_source(Some(5));
        let maze = Maze::generated(20_000, 2, &mut rng).unwrap();
        assert_eq!(maze.broken_wall_count(), 40_000 - 1);
    }

    #[test]
    fn generating_twice_is_refused() {
        let (mut rng, _) = random_source(Some(1));
        let mut maze = Maze::generated(4, 4, &mut rng).unwrap();
        let walls = maze.broken_wall_count();

        assert_eq!(maze.generate(&mut rng), Err(MazeError::AlreadyGenerated));
        assert_eq!(maze.broken_wall_count(), walls);

        maze.reset();
        assert_eq!(maze.broken_wall_count(), 0);
        assert!(maze.cells().iter().all(|cell| !cell.is_pathed()));
        maze.generate(&mut rng).unwrap();
        assert_eq!(maze.broken_wall_count(), 15);
    }

    #[test]
    fn no_cell_stays_explored() {
        let (mut rng, _) = random_source(Some(9));
        let maze = Maze::generated(7, 5, &mut rng).unwrap();
        assert!(maze.cells().iter().all(|cell| !cell.is_explored()));
        assert!(maze.cells().iter().all(Cell::is_pathed));
    }

    #[test]
    fn solve_without_generation_is_empty() {
        let maze = Maze::new(3, 3).unwrap();
        assert!(maze.solve().is_empty());
    }

    #[test]
    fn unreachable_exit_gives_empty_path() {
        let mut maze = Maze::new(3, 1).unwrap();
        maze.entrance = Some(c(0, 0));
        maze.exit = Some(c(2, 0));
        maze.cells[c(0, 0)].break_right_wall();
        assert!(maze.solve().is_empty());

        maze.cells[c(1, 0)].break_right_wall();
        assert_eq!(maze.solve(), [c(0, 0), c(1, 0), c(2, 0)]);
    }
}
