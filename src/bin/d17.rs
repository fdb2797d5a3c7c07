use lib::prelude::*;

#[entry(input = "d17.txt", expect = (23005, 2040))]
fn solve(mut input: Input) -> Result<(i64, u32)> {
    let target = input.line::<Target>()?;

    ensure!(
        target.x.0 > 0 && target.y.1 < 0,
        "target must be ahead of and below the submarine"
    );

    let mut best = 0;
    let mut count = 0;

    // Any higher upwards velocity overshoots the target on the step passing
    // y zero again, any higher x velocity overshoots on the first step.
    for vx in 1..=target.x.1 {
        for vy in target.y.0..=-target.y.0 {
            if let Some(high) = launch(&target, vx, vy) {
                best = best.max(high);
                count += 1;
            }
        }
    }

    Ok((best, count))
}

/// Step the probe until it hits or misses the target, returning the highest
/// point of a hit.
fn launch(target: &Target, mut vx: i64, mut vy: i64) -> Option<i64> {
    let (mut x, mut y) = (0, 0);
    let mut high = 0;

    loop {
        x += vx;
        y += vy;
        vx -= vx.signum();
        vy -= 1;
        high = high.max(y);

        if (target.x.0..=target.x.1).contains(&x) && (target.y.0..=target.y.1).contains(&y) {
            return Some(high);
        }

        if y < target.y.0 && vy < 0 {
            return None;
        }

        if x > target.x.1 {
            return None;
        }

        if vx == 0 && x < target.x.0 {
            return None;
        }
    }
}

struct Target {
    x: (i64, i64),
    y: (i64, i64),
}

lib::from_input! {
    |(_, _, W(x), W(y)): (W, W, W<&'static str>, W<&'static str>)| -> Target {
        Ok(Target {
            x: range(x, "x")?,
            y: range(y, "y")?,
        })
    }
}

/// Parse a range on the form `x=20..30` with an optional trailing comma.
fn range(spec: &str, axis: &str) -> Result<(i64, i64)> {
    let inner = spec.strip_suffix(',').unwrap_or(spec);

    let inner = inner
        .strip_prefix(axis)
        .and_then(|s| s.strip_prefix('='))
        .with_context(|| anyhow!("bad range `{spec}`"))?;

    let (a, b) = inner
        .split_once("..")
        .with_context(|| anyhow!("bad range `{spec}`"))?;

    Ok((a.parse()?, b.parse()?))
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    const FIXTURE: &[u8] = b"target area: x=20..30, y=-10..-5\n";

    #[test]
    fn fixture() -> Result<()> {
        let (part1, part2) = super::solve(Input::new(FIXTURE))?;
        assert_eq!(part1, 45);
        assert_eq!(part2, 112);
        Ok(())
    }
}
