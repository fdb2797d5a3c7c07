use lib::prelude::*;

const HEAP_CAP: usize = 32768;

#[entry(input = "d15.txt", expect = (656, 2979))]
fn solve(mut input: Input) -> Result<(u32, u32)> {
    let grid = input.next::<GridBuf<u8>>()?;

    let part1 = search(&grid)?;

    let part2 = search(&Tiled {
        grid: &grid,
        factor: 5,
    })?;

    Ok((part1, part2))
}

type Element = (u32, (usize, usize));

fn search<G>(grid: &G) -> Result<u32>
where
    G: Grid<u8>,
{
    let (rows, columns) = (grid.rows(), grid.columns());
    ensure!(rows > 0 && columns > 0, "empty grid");

    let end = (rows - 1, columns - 1);
    let index = |(row, column): (usize, usize)| row * columns + column;

    let mut dist = vec![u32::MAX; rows * columns];

    let comparer = |a: &Element, b: &Element, _: &()| a.0 < b.0;
    let mut heap = FixedHeap::<Element, HEAP_CAP>::new();

    dist[0] = 0;
    heap.push((0, (0, 0)), &comparer, &());

    while let Some((cost, pos)) = heap.pop(&comparer, &()) {
        if pos == end {
            return Ok(cost);
        }

        // Stale entry for a position which has since been improved.
        if cost > dist[index(pos)] {
            continue;
        }

        for next in grid.adjacent4(pos) {
            let cost = cost + u32::from(grid.get(next) - b'0');

            if cost < dist[index(next)] {
                dist[index(next)] = cost;

                if heap.push((cost, next), &comparer, &()).is_some() {
                    bail!("out of heap capacity");
                }
            }
        }
    }

    Err(anyhow!("no path to the end"))
}

/// The full cave repeats the scanned tile five times in each direction, with
/// risk levels bumped by the tile distance and wrapped back to one past nine.
struct Tiled<'a> {
    grid: &'a GridBuf<u8>,
    factor: usize,
}

impl Grid<u8> for Tiled<'_> {
    #[inline]
    fn rows(&self) -> usize {
        self.grid.rows() * self.factor
    }

    #[inline]
    fn columns(&self) -> usize {
        self.grid.columns() * self.factor
    }

    #[inline]
    fn try_get(&self, (row, column): (usize, usize)) -> Option<u8> {
        if row >= self.rows() || column >= self.columns() {
            return None;
        }

        let base = self
            .grid
            .try_get((row % self.grid.rows(), column % self.grid.columns()))?;

        let bump = u8::try_from(row / self.grid.rows() + column / self.grid.columns()).ok()?;
        Some(b'1' + (base - b'1' + bump) % 9)
    }
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    use super::Tiled;

    const FIXTURE: &[u8] = b"\
1163751742
1381373672
2136511328
3694931569
7463417111
1319128137
1359912421
3125421639
1293138521
2311944581
";

    #[test]
    fn fixture() -> Result<()> {
        let (part1, part2) = super::solve(Input::new(FIXTURE))?;
        assert_eq!(part1, 40);
        assert_eq!(part2, 315);
        Ok(())
    }

    #[test]
    fn tiling() -> Result<()> {
        let mut input = Input::new(b"8\n");
        let grid = input.next::<GridBuf<u8>>()?;

        let tiled = Tiled {
            grid: &grid,
            factor: 5,
        };

        // 8 9 1 2 3
        // 9 1 2 3 4
        assert_eq!(tiled.get((0, 0)), b'8');
        assert_eq!(tiled.get((0, 1)), b'9');
        assert_eq!(tiled.get((0, 2)), b'1');
        assert_eq!(tiled.get((1, 1)), b'1');
        assert_eq!(tiled.get((4, 4)), b'7');
        Ok(())
    }
}
