use lib::prelude::*;

#[entry(input = "d03.txt", expect = (2648450, 2845944))]
fn solve(mut input: Input) -> Result<(u32, u32)> {
    let mut width = 0;
    let mut numbers = Vec::new();

    while let Some(line) = input.try_line::<&[u8]>()? {
        if line.is_empty() {
            continue;
        }

        ensure!(width == 0 || width == line.len(), "uneven line width");
        width = line.len();

        let mut n = 0;

        for &b in line {
            n <<= 1;
            n |= u32::from(b == b'1');
        }

        numbers.push(n);
    }

    ensure!(width > 0 && width < 32, "bad line width {width}");

    let mut gamma = 0;

    for pos in (0..width).rev() {
        let ones = numbers.iter().filter(|n| *n & (1 << pos) != 0).count();
        gamma <<= 1;
        gamma |= u32::from(ones * 2 >= numbers.len());
    }

    let epsilon = !gamma & ((1 << width) - 1);

    let oxygen = rating(numbers.clone(), width, |ones, zeros| ones >= zeros)?;
    let co2 = rating(numbers, width, |ones, zeros| ones < zeros)?;

    Ok((gamma * epsilon, oxygen * co2))
}

/// Keep candidates matching the bit criteria position by position until one
/// remains.
fn rating(mut candidates: Vec<u32>, width: usize, keep_ones: fn(usize, usize) -> bool) -> Result<u32> {
    for pos in (0..width).rev() {
        if candidates.len() <= 1 {
            break;
        }

        let ones = candidates.iter().filter(|n| *n & (1 << pos) != 0).count();
        let keep = keep_ones(ones, candidates.len() - ones);
        candidates.retain(|n| (n & (1 << pos) != 0) == keep);
    }

    match candidates.as_slice() {
        [rating] => Ok(*rating),
        _ => Err(anyhow!("no distinct rating")),
    }
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    const FIXTURE: &[u8] = b"\
00100
11110
10110
10111
10101
01111
00111
11100
10000
11001
00010
01010
";

    #[test]
    fn fixture() -> Result<()> {
        let (part1, part2) = super::solve(Input::new(FIXTURE))?;
        assert_eq!(part1, 198);
        assert_eq!(part2, 230);
        Ok(())
    }
}
