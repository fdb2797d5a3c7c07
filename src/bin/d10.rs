use lib::prelude::*;

#[entry(input = "d10.txt", expect = (367059, 1952146692))]
fn solve(mut input: Input) -> Result<(u64, u64)> {
    let mut part1 = 0;
    let mut completions = Vec::new();

    'line: while let Some(line) = input.try_line::<&[u8]>()? {
        if line.is_empty() {
            continue;
        }

        let mut stack = ArrayVec::<u8, 128>::new();

        for &b in line {
            if let Some(close) = matching(b) {
                stack
                    .try_push(close)
                    .map_err(|_| anyhow!("chunk nesting out of capacity"))?;
                continue;
            }

            if stack.pop() != Some(b) {
                part1 += corruption_score(b)?;
                continue 'line;
            }
        }

        let mut score = 0u64;

        while let Some(close) = stack.pop() {
            score = score * 5 + completion_score(close)?;
        }

        completions.push(score);
    }

    ensure!(
        completions.len() % 2 == 1,
        "expected an odd number of incomplete lines"
    );

    completions.sort_unstable();
    let part2 = completions[completions.len() / 2];
    Ok((part1, part2))
}

/// The closing character for an opening character.
fn matching(open: u8) -> Option<u8> {
    Some(match open {
        b'(' => b')',
        b'[' => b']',
        b'{' => b'}',
        b'<' => b'>',
        _ => return None,
    })
}

fn corruption_score(close: u8) -> Result<u64> {
    Ok(match close {
        b')' => 3,
        b']' => 57,
        b'}' => 1197,
        b'>' => 25137,
        b => bail!("bad character `{}`", b as char),
    })
}

fn completion_score(close: u8) -> Result<u64> {
    Ok(match close {
        b')' => 1,
        b']' => 2,
        b'}' => 3,
        b'>' => 4,
        b => bail!("bad character `{}`", b as char),
    })
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    const FIXTURE: &[u8] = b"\
[({(<(())[]>[[{[]{<()<>>
[(()[<>])]({[<{<<[]>>(
{([(<{}[<>[]}>{[]{[(<()>
(((({<>}<{<{<>}{[]{[]{}
[[<[([]))<([[{}[[()]]]
[{[{({}]{}}([{[{{{}}([]
{<[[]]>}<{[{[{[]{()[[[]
[<(<(<(<{}))><([]([]()
<{([([[(<>()){}]>(<<{{
<{([{{}}[<[[[<>{}]]]>[]]
";

    #[test]
    fn fixture() -> Result<()> {
        let (part1, part2) = super::solve(Input::new(FIXTURE))?;
        assert_eq!(part1, 26397);
        assert_eq!(part2, 288957);
        Ok(())
    }
}
