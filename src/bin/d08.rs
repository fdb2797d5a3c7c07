use lib::prelude::*;

#[entry(input = "d08.txt", expect = (397, 1027422))]
fn solve(mut input: Input) -> Result<(u32, u32)> {
    let mut part1 = 0;
    let mut part2 = 0;

    while let Some(Split((patterns, outputs))) =
        input.try_line::<Split<'|', ([Pattern; 10], [Pattern; 4])>>()?
    {
        let digits = deduce(&patterns)?;

        let mut value = 0;

        for Pattern(mask) in outputs {
            let digit = digits
                .iter()
                .position(|&m| m == mask)
                .context("undecoded output pattern")?;

            if matches!(mask.count_ones(), 2 | 3 | 4 | 7) {
                part1 += 1;
            }

            value = value * 10 + u32::try_from(digit)?;
        }

        part2 += value;
    }

    Ok((part1, part2))
}

/// Work out which segment mask lights up for each digit.
///
/// The digits 1, 4, 7 and 8 are identified by their segment count alone. The
/// rest are disambiguated by how they overlap with the segments of 1 and 4.
fn deduce(patterns: &[Pattern; 10]) -> Result<[u8; 10]> {
    let find = |count: u32| {
        patterns
            .iter()
            .map(|p| p.0)
            .find(|m| m.count_ones() == count)
    };

    let one = find(2).context("missing pattern for 1")?;
    let four = find(4).context("missing pattern for 4")?;

    let mut digits = [0u8; 10];

    for &Pattern(mask) in patterns {
        let digit = match mask.count_ones() {
            2 => 1,
            3 => 7,
            4 => 4,
            7 => 8,
            5 if mask & one == one => 3,
            5 if (mask & four).count_ones() == 3 => 5,
            5 => 2,
            6 if mask & four == four => 9,
            6 if mask & one == one => 0,
            6 => 6,
            n => bail!("bad segment count {n}"),
        };

        digits[digit] = mask;
    }

    Ok(digits)
}

#[derive(Debug, Clone, Copy)]
struct Pattern(u8);

lib::from_input! {
    |W(word): W<&'static str>| -> Pattern {
        let mut mask = 0;

        for c in word.bytes() {
            ensure!((b'a'..=b'g').contains(&c), "bad segment `{}`", c as char);
            mask |= 1 << (c - b'a');
        }

        Ok(Pattern(mask))
    }
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    const FIXTURE: &[u8] = b"\
be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb | fdgacbe cefdb cefbgd gcbe
edbfga begcd cbg gc gcadebf fbgde acbgfd abcde gfcbed gfec | fcgedb cgb dgebacf gc
fgaebd cg bdaec gdafb agbcfd gdcbef bgcad gfac gcb cdgabef | cg cg fdcagb cbg
fbegcd cbd adcefb dageb afcb bc aefdc ecdab fgdeca fcdbega | efabcd cedba gadfec cb
aecbfdg fbg gf bafeg dbefa fcge gcbea fcaegb dgceab fcbdga | gecf egdcabf bgf bfgea
fgeab ca afcebg bdacfeg cfaedg gcfdb baec bfadeg bafgc acf | gebdcfa ecba ca fadegcb
dbcfg fgd bdegcaf fgec aegbdf ecdfab fbedc dacgb gdcebf gf | cefg dcbef fcge gbcadfe
bdfegc cbegaf gecbf dfcage bdacg ed bedf ced adcbefg gebcd | ed bcgafe cdgba cbgef
egadfb cdbfeg cegd fecab cgb gbdefca cg fgcdab egfdb bfceg | gbdfcae bgc cg cgb
gcafb gcf dcaebfg ecagb gf abcdeg gaef cafbge fdbac fegbdc | fgae cfgab fg bagce
";

    #[test]
    fn fixture() -> Result<()> {
        let (part1, part2) = super::solve(Input::new(FIXTURE))?;
        assert_eq!(part1, 26);
        assert_eq!(part2, 61229);
        Ok(())
    }
}
