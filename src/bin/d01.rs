use lib::prelude::*;

#[entry(input = "d01.txt", expect = (1448, 1471))]
fn solve(mut input: Input) -> Result<(u32, u32)> {
    let mut depths = Vec::new();

    while let Some(depth) = input.try_line::<u32>()? {
        depths.push(depth);
    }

    let part1 = u32::try_from(depths.windows(2).filter(|w| w[1] > w[0]).count())?;
    // Comparing two overlapping three-measurement windows reduces to
    // comparing the two measurements which are not shared.
    let part2 = u32::try_from(depths.windows(4).filter(|w| w[3] > w[0]).count())?;
    Ok((part1, part2))
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    const FIXTURE: &[u8] = b"\
199
200
208
210
200
207
240
269
260
263
";

    #[test]
    fn fixture() -> Result<()> {
        let (part1, part2) = super::solve(Input::new(FIXTURE))?;
        assert_eq!(part1, 7);
        assert_eq!(part2, 5);
        Ok(())
    }
}
