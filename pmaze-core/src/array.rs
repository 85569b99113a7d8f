use std::ops;

use crate::{coord::Coord, dims::Dims};

/// Dense row-major 2D buffer addressed by [`Coord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Array2D<T> {
    pub fn size(&self) -> Dims {
        Dims(self.width as i32, self.height as i32)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn dim_to_idx(&self, pos: Coord) -> Option<usize> {
        let (x, y) = (pos.x() as usize, pos.y() as usize);

        if x >= self.width || y >= self.height {
            return None;
        }

        Some(y * self.width + x)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Coord> {
        if idx >= self.buf.len() {
            return None;
        }

        let x = idx % self.width;
        let y = idx / self.width;

        Coord::new(x as i32, y as i32).ok()
    }

    pub fn get(&self, pos: Coord) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Coord) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.buf.iter_mut()
    }

    /// Positions in row-major order, matching [`Array2D::iter`].
    pub fn iter_pos(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, width: usize, height: usize) -> Self {
        Self {
            buf: vec![item; width * height],
            width,
            height,
        }
    }

    /// Same as [`Array2D::new`], but returns `None` for negative sizes or if the cell count
    /// doesn't fit into memory addressing.
    pub fn new_dims(item: T, size: Dims) -> Option<Self> {
        let width = usize::try_from(size.0).ok()?;
        let height = usize::try_from(size.1).ok()?;
        width.checked_mul(height)?;

        Some(Self::new(item, width, height))
    }

    pub fn fill(&mut self, item: T) {
        self.buf.fill(item);
    }
}

impl<T> ops::Index<Coord> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Coord) -> &Self::Output {
        self.get(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {index}"))
    }
}

impl<T> ops::IndexMut<Coord> for Array2D<T> {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        self.get_mut(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {index}"))
    }
}
