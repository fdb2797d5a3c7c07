use lib::prelude::*;

#[entry(input = "d25.txt", expect = 295)]
fn solve(mut input: Input) -> Result<u32> {
    let mut grid = input.next::<GridBuf<u8>>()?;
    let (rows, columns) = (grid.rows(), grid.columns());

    let mut steps = 0;
    let mut moves = Vec::new();

    loop {
        steps += 1;
        let mut moved = false;

        for row in 0..rows {
            for column in 0..columns {
                if grid.get((row, column)) == b'>'
                    && grid.get((row, (column + 1) % columns)) == b'.'
                {
                    moves.push((row, column));
                }
            }
        }

        moved |= !moves.is_empty();

        for &(row, column) in &moves {
            grid.set((row, column), b'.');
            grid.set((row, (column + 1) % columns), b'>');
        }

        moves.clear();

        for row in 0..rows {
            for column in 0..columns {
                if grid.get((row, column)) == b'v' && grid.get(((row + 1) % rows, column)) == b'.' {
                    moves.push((row, column));
                }
            }
        }

        moved |= !moves.is_empty();

        for &(row, column) in &moves {
            grid.set((row, column), b'.');
            grid.set(((row + 1) % rows, column), b'v');
        }

        moves.clear();

        if !moved {
            return Ok(steps);
        }
    }
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    const FIXTURE: &[u8] = b"\
v...>>.vv>
.vv>>.vv..
>>.>v>...v
>>v>>.>.v.
v>v.vv.v..
>.>>..v...
.vv..>.>v.
v.v..>>v.v
....v..v.>
";

    #[test]
    fn fixture() -> Result<()> {
        assert_eq!(super::solve(Input::new(FIXTURE))?, 58);
        Ok(())
    }
}
