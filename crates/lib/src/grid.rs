//! Grids over contiguous storage.

use core::fmt;

use arrayvec::ArrayVec;

use crate::input::{ErrorKind, FromInput, Input, InputError};

/// A dense grid of copyable cells addressed by `(row, column)`.
pub trait Grid<T>
where
    T: Copy,
{
    /// Number of rows in the grid.
    fn rows(&self) -> usize;

    /// Number of columns in the grid.
    fn columns(&self) -> usize;

    /// Get the value at the given position, if it is in bounds.
    fn try_get(&self, pos: (usize, usize)) -> Option<T>;

    /// Get the value at the given position.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    #[inline]
    #[track_caller]
    fn get(&self, pos: (usize, usize)) -> T {
        let Some(value) = self.try_get(pos) else {
            panic!(
                "position {pos:?} out of bounds in {}x{} grid",
                self.rows(),
                self.columns()
            );
        };

        value
    }

    /// Positions orthogonally adjacent to `pos` which are in bounds.
    #[inline]
    fn adjacent4(&self, pos: (usize, usize)) -> arrayvec::IntoIter<(usize, usize), 4> {
        let mut out = ArrayVec::new();

        for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            if let Some(pos) = self.offset(pos, dr, dc) {
                out.push(pos);
            }
        }

        out.into_iter()
    }

    /// Positions adjacent to `pos`, including diagonals, which are in bounds.
    #[inline]
    fn adjacent8(&self, pos: (usize, usize)) -> arrayvec::IntoIter<(usize, usize), 8> {
        let mut out = ArrayVec::new();

        for dr in -1..=1 {
            for dc in -1..=1 {
                if (dr, dc) == (0, 0) {
                    continue;
                }

                if let Some(pos) = self.offset(pos, dr, dc) {
                    out.push(pos);
                }
            }
        }

        out.into_iter()
    }

    #[doc(hidden)]
    #[inline]
    fn offset(
        &self,
        (row, column): (usize, usize),
        dr: isize,
        dc: isize,
    ) -> Option<(usize, usize)> {
        let row = row.checked_add_signed(dr)?;
        let column = column.checked_add_signed(dc)?;

        if row >= self.rows() || column >= self.columns() {
            return None;
        }

        Some((row, column))
    }
}

impl<G, T> Grid<T> for &G
where
    G: ?Sized + Grid<T>,
    T: Copy,
{
    #[inline]
    fn rows(&self) -> usize {
        (**self).rows()
    }

    #[inline]
    fn columns(&self) -> usize {
        (**self).columns()
    }

    #[inline]
    fn try_get(&self, pos: (usize, usize)) -> Option<T> {
        (**self).try_get(pos)
    }
}

/// An owned grid backed by a [Vec].
#[derive(Clone, PartialEq, Eq)]
pub struct GridBuf<T> {
    data: Vec<T>,
    columns: usize,
}

impl<T> GridBuf<T> {
    /// Construct a grid with the given dimensions where every cell holds
    /// `value`.
    pub fn filled(rows: usize, columns: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: vec![value; rows.saturating_mul(columns)],
            columns,
        }
    }

    /// Get a mutable reference to the value at the given position, if it is
    /// in bounds.
    #[inline]
    pub fn try_get_mut(&mut self, (row, column): (usize, usize)) -> Option<&mut T> {
        if column >= self.columns {
            return None;
        }

        self.data
            .get_mut(row.checked_mul(self.columns)?.checked_add(column)?)
    }

    /// Get a mutable reference to the value at the given position.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_mut(&mut self, pos: (usize, usize)) -> &mut T {
        let (rows, columns) = (self.data.len() / self.columns.max(1), self.columns);

        let Some(value) = self.try_get_mut(pos) else {
            panic!("position {pos:?} out of bounds in {rows}x{columns} grid");
        };

        value
    }

    /// Set the value at the given position.
    #[inline]
    #[track_caller]
    pub fn set(&mut self, pos: (usize, usize), value: T) {
        *self.get_mut(pos) = value;
    }

    /// Iterate over all cells in row-major order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> Grid<T> for GridBuf<T>
where
    T: Copy,
{
    #[inline]
    fn rows(&self) -> usize {
        if self.columns == 0 {
            return 0;
        }

        self.data.len() / self.columns
    }

    #[inline]
    fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    fn try_get(&self, (row, column): (usize, usize)) -> Option<T> {
        if column >= self.columns {
            return None;
        }

        self.data
            .get(row.checked_mul(self.columns)?.checked_add(column)?)
            .copied()
    }
}

impl fmt::Debug for GridBuf<u8> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.columns.max(1)) {
            writeln!(f, "{}", bstr::BStr::new(row))?;
        }

        Ok(())
    }
}

impl FromInput for GridBuf<u8> {
    #[inline]
    fn try_from_input(p: &mut Input) -> Result<Option<Self>, InputError> {
        let mut data = Vec::new();
        let mut columns = 0;

        loop {
            let index = p.index();

            let Some(line) = p.try_line::<&[u8]>()? else {
                break;
            };

            if line.is_empty() {
                break;
            }

            if columns == 0 {
                columns = line.len();
            } else if line.len() != columns {
                return Err(InputError::new(
                    index..p.index(),
                    ErrorKind::BadArray(columns, line.len()),
                ));
            }

            data.extend_from_slice(line);
        }

        if data.is_empty() {
            return Ok(None);
        }

        Ok(Some(Self { data, columns }))
    }
}

#[cfg(test)]
mod tests {
    use crate::input::Input;

    use super::{Grid, GridBuf};

    #[test]
    fn from_input() {
        let mut input = Input::new(b"219\n398\n985\n");
        let grid = input.next::<GridBuf<u8>>().unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.get((0, 0)), b'2');
        assert_eq!(grid.get((2, 1)), b'8');
        assert!(grid.try_get((3, 0)).is_none());
        assert!(grid.try_get((0, 3)).is_none());
    }

    #[test]
    fn stops_at_blank_line() {
        let mut input = Input::new(b"12\n34\n\n56\n");
        let grid = input.next::<GridBuf<u8>>().unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(input.next::<u32>().unwrap(), 56);
    }

    #[test]
    fn adjacency() {
        let grid = GridBuf::filled(3, 3, 0u8);

        let corner = grid.adjacent4((0, 0)).collect::<Vec<_>>();
        assert_eq!(corner, [(1, 0), (0, 1)]);

        let center = grid.adjacent8((1, 1)).count();
        assert_eq!(center, 8);

        let edge = grid.adjacent8((0, 1)).count();
        assert_eq!(edge, 5);
    }
}
