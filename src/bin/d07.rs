use lib::prelude::*;

#[entry(input = "d07.txt", expect = (333755, 94017638))]
fn solve(mut input: Input) -> Result<(i64, i64)> {
    let Split(crabs) = input.line::<Split<',', Vec<i64>>>()?;
    ensure!(!crabs.is_empty(), "no crabs");

    let max = crabs.iter().copied().max().unwrap_or_default();

    let mut part1 = i64::MAX;
    let mut part2 = i64::MAX;

    for target in 0..=max {
        let mut linear = 0;
        let mut triangular = 0;

        for &crab in &crabs {
            let d = (crab - target).abs();
            linear += d;
            triangular += d * (d + 1) / 2;
        }

        part1 = part1.min(linear);
        part2 = part2.min(triangular);
    }

    Ok((part1, part2))
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    const FIXTURE: &[u8] = b"16,1,2,0,4,2,7,1,2,14\n";

    #[test]
    fn fixture() -> Result<()> {
        let (part1, part2) = super::solve(Input::new(FIXTURE))?;
        assert_eq!(part1, 37);
        assert_eq!(part2, 168);
        Ok(())
    }
}
