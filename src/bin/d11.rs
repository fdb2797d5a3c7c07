use lib::prelude::*;

#[entry(input = "d11.txt", expect = (1702, 251))]
fn solve(mut input: Input) -> Result<(u32, u32)> {
    let mut grid = input.next::<GridBuf<u8>>()?;
    let cells = u32::try_from(grid.rows() * grid.columns())?;

    let mut part1 = 0;
    let mut part2 = None;
    let mut steps = 0;

    while steps < 100 || part2.is_none() {
        if steps == 1000 {
            break;
        }

        steps += 1;
        let flashes = step(&mut grid);

        if steps <= 100 {
            part1 += flashes;
        }

        if flashes == cells && part2.is_none() {
            part2 = Some(steps);
        }
    }

    Ok((part1, part2.context("never synchronized")?))
}

/// Advance one step, returning the number of flashes.
fn step(grid: &mut GridBuf<u8>) -> u32 {
    let mut stack = Vec::new();

    for row in 0..grid.rows() {
        for column in 0..grid.columns() {
            let cell = grid.get_mut((row, column));
            *cell += 1;

            if *cell == b'9' + 1 {
                stack.push((row, column));
            }
        }
    }

    let mut flashes = 0;

    while let Some(pos) = stack.pop() {
        flashes += 1;

        for next in grid.adjacent8(pos) {
            let cell = grid.get_mut(next);
            *cell += 1;

            // Push exactly when the cell crosses the threshold, further
            // increments do not trigger it again.
            if *cell == b'9' + 1 {
                stack.push(next);
            }
        }
    }

    for row in 0..grid.rows() {
        for column in 0..grid.columns() {
            let cell = grid.get_mut((row, column));

            if *cell > b'9' {
                *cell = b'0';
            }
        }
    }

    flashes
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    const FIXTURE: &[u8] = b"\
5483143223
2745854711
5264556173
6141336146
6357385478
4167524645
2176841721
6882881134
4846848554
5283751526
";

    #[test]
    fn fixture() -> Result<()> {
        let (part1, part2) = super::solve(Input::new(FIXTURE))?;
        assert_eq!(part1, 1656);
        assert_eq!(part2, 195);
        Ok(())
    }

    #[test]
    fn never_synchronizes() {
        assert!(super::solve(Input::new(b"09\n")).is_err());
    }
}
