use lib::prelude::*;

#[entry(input = "d18.txt", expect = (3216, 4643))]
fn solve(mut input: Input) -> Result<(u64, u64)> {
    let mut numbers = Vec::new();

    while let Some(line) = input.try_line::<&[u8]>()? {
        if line.is_empty() {
            continue;
        }

        numbers.push(parse(line)?);
    }

    ensure!(!numbers.is_empty(), "no numbers");

    let mut sum = numbers[0].clone();

    for n in &numbers[1..] {
        sum = sum.add(n)?;
    }

    let part1 = sum.magnitude()?;

    let mut part2 = 0;

    // Addition is not commutative, so try both orders of every pair.
    for (i, a) in numbers.iter().enumerate() {
        for (j, b) in numbers.iter().enumerate() {
            if i != j {
                part2 = part2.max(a.add(b)?.magnitude()?);
            }
        }
    }

    Ok((part1, part2))
}

/// A snailfish number as its leaves in order, each with the nesting depth it
/// sits at.
#[derive(Debug, Clone)]
struct Number {
    leaves: ArrayVec<(u64, u8), 64>,
}

fn parse(line: &[u8]) -> Result<Number> {
    let mut leaves = ArrayVec::new();
    let mut depth = 0u8;
    let mut value = None;

    for &b in line {
        if b.is_ascii_digit() {
            let d = u64::from(b - b'0');
            value = Some(value.unwrap_or(0) * 10 + d);
            continue;
        }

        if let Some(v) = value.take() {
            leaves
                .try_push((v, depth))
                .map_err(|_| anyhow!("number out of capacity"))?;
        }

        match b {
            b'[' => {
                depth += 1;
            }
            b']' => {
                depth = depth.checked_sub(1).context("unbalanced brackets")?;
            }
            b',' => {}
            other => {
                bail!("bad character `{}`", other as char);
            }
        }
    }

    ensure!(depth == 0 && value.is_none(), "unbalanced brackets");
    Ok(Number { leaves })
}

impl Number {
    fn add(&self, other: &Number) -> Result<Number> {
        let mut out = Number {
            leaves: ArrayVec::new(),
        };

        for &(v, d) in self.leaves.iter().chain(&other.leaves) {
            out.leaves
                .try_push((v, d + 1))
                .map_err(|_| anyhow!("number out of capacity"))?;
        }

        out.reduce()?;
        Ok(out)
    }

    fn reduce(&mut self) -> Result<()> {
        loop {
            if self.explode()? {
                continue;
            }

            if !self.split()? {
                return Ok(());
            }
        }
    }

    /// Explode the leftmost pair nested five levels deep.
    fn explode(&mut self) -> Result<bool> {
        let Some(i) = self.leaves.iter().position(|&(_, d)| d >= 5) else {
            return Ok(false);
        };

        let (a, d) = self.leaves[i];

        let Some(&(b, bd)) = self.leaves.get(i + 1) else {
            bail!("exploding pair without a right element");
        };

        ensure!(bd == d, "exploding pair without a right element");

        if let Some(j) = i.checked_sub(1) {
            self.leaves[j].0 += a;
        }

        if let Some(right) = self.leaves.get_mut(i + 2) {
            right.0 += b;
        }

        self.leaves[i] = (0, d - 1);
        self.leaves.remove(i + 1);
        Ok(true)
    }

    /// Split the leftmost leaf of ten or more into a pair.
    fn split(&mut self) -> Result<bool> {
        let Some(i) = self.leaves.iter().position(|&(v, _)| v >= 10) else {
            return Ok(false);
        };

        let (v, d) = self.leaves[i];
        self.leaves[i] = (v / 2, d + 1);

        self.leaves
            .try_insert(i + 1, (v.div_ceil(2), d + 1))
            .map_err(|_| anyhow!("number out of capacity"))?;

        Ok(true)
    }

    fn magnitude(&self) -> Result<u64> {
        let mut stack = ArrayVec::<(u64, u8), 64>::new();

        for &leaf in &self.leaves {
            let (mut v, mut d) = leaf;

            // Two adjacent entries at the same depth are siblings, combine
            // them into their parent until that no longer holds.
            while let Some(&(pv, pd)) = stack.last() {
                if pd != d {
                    break;
                }

                stack.pop();
                v = 3 * pv + 2 * v;
                d -= 1;
            }

            stack
                .try_push((v, d))
                .map_err(|_| anyhow!("number out of capacity"))?;
        }

        match stack.as_slice() {
            [(v, 0)] => Ok(*v),
            _ => Err(anyhow!("malformed number")),
        }
    }
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    const FIXTURE: &[u8] = b"\
[[[0,[5,8]],[[1,7],[9,6]]],[[4,[1,2]],[[1,4],2]]]
[[[5,[2,8]],4],[5,[[9,9],0]]]
[6,[[[6,2],[5,6]],[[7,6],[4,7]]]]
[[[6,[0,7]],[0,9]],[4,[9,[9,0]]]]
[[[7,[6,4]],[3,[1,3]]],[[[5,5],1],9]]
[[6,[[7,3],[3,2]]],[[[3,8],[5,7]],4]]
[[[[5,4],[7,7]],8],[[8,3],8]]
[[9,3],[[9,9],[6,[4,9]]]]
[[2,[[7,7],7]],[[5,8],[[9,3],[0,2]]]]
[[[[5,2],5],[8,[3,7]]],[[5,[7,5]],[4,4]]]
";

    #[test]
    fn magnitudes() -> Result<()> {
        assert_eq!(super::parse(b"[[1,2],[[3,4],5]]")?.magnitude()?, 143);
        assert_eq!(super::parse(b"[[[[0,7],4],[[7,8],[6,0]]],[8,1]]")?.magnitude()?, 1384);
        assert_eq!(super::parse(b"[[[[8,7],[7,7]],[[8,6],[7,7]]],[[[0,7],[6,6]],[8,7]]]")?.magnitude()?, 3488);
        Ok(())
    }

    #[test]
    fn explode() -> Result<()> {
        let mut n = super::parse(b"[[[[[9,8],1],2],3],4]")?;
        assert!(n.explode()?);
        assert_eq!(n.magnitude()?, super::parse(b"[[[[0,9],2],3],4]")?.magnitude()?);
        Ok(())
    }

    #[test]
    fn fixture() -> Result<()> {
        let (part1, part2) = super::solve(Input::new(FIXTURE))?;
        assert_eq!(part1, 4140);
        assert_eq!(part2, 3993);
        Ok(())
    }
}
