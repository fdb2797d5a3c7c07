use lib::prelude::*;

#[entry(input = "d09.txt", expect = (575, 1019700))]
fn solve(mut input: Input) -> Result<(u32, u32)> {
    let grid = input.next::<GridBuf<u8>>()?;
    let (rows, columns) = (grid.rows(), grid.columns());

    let mut part1 = 0;

    for row in 0..rows {
        for column in 0..columns {
            let height = grid.get((row, column));

            if grid.adjacent4((row, column)).all(|pos| grid.get(pos) > height) {
                part1 += u32::from(height - b'0') + 1;
            }
        }
    }

    let index = |(row, column): (usize, usize)| (row * columns + column) as u32;

    // Basins are separated by ridges of height nine, so each is the flood
    // fill over everything else from an unvisited cell.
    let mut visited = vec![0u64; (rows * columns).div_ceil(64)];
    let mut sizes = Vec::new();
    let mut stack = Vec::new();

    for row in 0..rows {
        for column in 0..columns {
            let pos = (row, column);

            if grid.get(pos) == b'9' || visited.test_bit(index(pos)) {
                continue;
            }

            let mut size = 0u64;
            visited.set_bit(index(pos));
            stack.push(pos);

            while let Some(pos) = stack.pop() {
                size += 1;

                for next in grid.adjacent4(pos) {
                    if grid.get(next) != b'9' && !visited.test_bit(index(next)) {
                        visited.set_bit(index(next));
                        stack.push(next);
                    }
                }
            }

            sizes.push(size);
        }
    }

    sizes.sort_unstable();
    let part2 = sizes.iter().rev().take(3).product::<u64>();
    Ok((part1, u32::try_from(part2)?))
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    const FIXTURE: &[u8] = b"\
2199943210
3987894921
9856789892
8767896789
9899965678
";

    #[test]
    fn fixture() -> Result<()> {
        let (part1, part2) = super::solve(Input::new(FIXTURE))?;
        assert_eq!(part1, 15);
        assert_eq!(part2, 1134);
        Ok(())
    }
}
