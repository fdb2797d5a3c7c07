use lib::prelude::*;

#[entry(input = "d14.txt", expect = (3058, 3447389044530))]
fn solve(mut input: Input) -> Result<(u64, u64)> {
    let template = input.line::<&[u8]>()?;
    input.ws()?;

    let mut rules = [[None; 26]; 26];

    while let Some((W(pair), _, W(to))) = input.try_line::<(W<&[u8]>, W, W<&[u8]>)>()? {
        let (&[a, b], &[to]) = (pair, to) else {
            bail!("bad rule");
        };

        rules[letter(a)?][letter(b)?] = Some(letter(to)?);
    }

    let mut pairs = [[0u64; 26]; 26];
    let mut elements = [0u64; 26];

    for &b in template {
        elements[letter(b)?] += 1;
    }

    for w in template.windows(2) {
        pairs[letter(w[0])?][letter(w[1])?] += 1;
    }

    let mut part1 = 0;

    for step in 1..=40 {
        let mut next = [[0u64; 26]; 26];

        for a in 0..26 {
            for b in 0..26 {
                let n = pairs[a][b];

                if n == 0 {
                    continue;
                }

                match rules[a][b] {
                    Some(m) => {
                        next[a][m] += n;
                        next[m][b] += n;
                        elements[m] += n;
                    }
                    None => {
                        next[a][b] += n;
                    }
                }
            }
        }

        pairs = next;

        if step == 10 {
            part1 = spread(&elements);
        }
    }

    Ok((part1, spread(&elements)))
}

fn letter(b: u8) -> Result<usize> {
    ensure!(b.is_ascii_uppercase(), "bad element `{}`", b as char);
    Ok(usize::from(b - b'A'))
}

/// Difference between the most and least common element counts.
fn spread(elements: &[u64; 26]) -> u64 {
    let max = elements.iter().copied().max().unwrap_or_default();

    let min = elements
        .iter()
        .copied()
        .filter(|&n| n > 0)
        .min()
        .unwrap_or_default();

    max - min
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    const FIXTURE: &[u8] = b"\
NNCB

CH -> B
HH -> N
CB -> H
NH -> C
HB -> C
HC -> B
HN -> C
NN -> C
BH -> H
NC -> B
NB -> B
BN -> B
BB -> N
BC -> B
CC -> N
CN -> C
";

    #[test]
    fn fixture() -> Result<()> {
        let (part1, part2) = super::solve(Input::new(FIXTURE))?;
        assert_eq!(part1, 1588);
        assert_eq!(part2, 2188189693529);
        Ok(())
    }
}
