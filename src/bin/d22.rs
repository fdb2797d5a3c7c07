use lib::prelude::*;

#[entry(input = "d22.txt", expect = (611378, 1214313344725528))]
fn solve(mut input: Input) -> Result<(u64, u64)> {
    let mut steps = Vec::new();

    while let Some(step) = input.try_line::<Step>()? {
        steps.push(step);
    }

    let init = Cuboid {
        x: [-50, 50],
        y: [-50, 50],
        z: [-50, 50],
    };

    let initialization = steps
        .iter()
        .filter_map(|s| {
            Some(Step {
                on: s.on,
                cuboid: s.cuboid.intersect(&init)?,
            })
        })
        .collect::<Vec<_>>();

    let part1 = count(&initialization)?;
    let part2 = count(&steps)?;
    Ok((part1, part2))
}

/// Count lit cubes by keeping a signed multiset of cuboids.
///
/// Every step first cancels its overlap with everything recorded so far, so
/// each lit cube is counted exactly once no matter how many cuboids cover it.
fn count(steps: &[Step]) -> Result<u64> {
    let mut deltas = FxHashMap::<Cuboid, i64>::default();

    for step in steps {
        let mut updates = Vec::new();

        for (existing, &sign) in &deltas {
            if let Some(overlap) = existing.intersect(&step.cuboid) {
                updates.push((overlap, -sign));
            }
        }

        if step.on {
            updates.push((step.cuboid, 1));
        }

        for (cuboid, delta) in updates {
            *deltas.entry(cuboid).or_default() += delta;
        }
    }

    let total = deltas
        .iter()
        .map(|(cuboid, &sign)| cuboid.volume() * sign)
        .sum::<i64>();

    Ok(u64::try_from(total)?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Cuboid {
    x: [i64; 2],
    y: [i64; 2],
    z: [i64; 2],
}

impl Cuboid {
    fn intersect(&self, other: &Cuboid) -> Option<Cuboid> {
        let x = [self.x[0].max(other.x[0]), self.x[1].min(other.x[1])];
        let y = [self.y[0].max(other.y[0]), self.y[1].min(other.y[1])];
        let z = [self.z[0].max(other.z[0]), self.z[1].min(other.z[1])];

        if x[0] > x[1] || y[0] > y[1] || z[0] > z[1] {
            return None;
        }

        Some(Cuboid { x, y, z })
    }

    fn volume(&self) -> i64 {
        (self.x[1] - self.x[0] + 1) * (self.y[1] - self.y[0] + 1) * (self.z[1] - self.z[0] + 1)
    }
}

struct Step {
    on: bool,
    cuboid: Cuboid,
}

lib::from_input! {
    |(W(state), W(ranges)): (W<&'static str>, W<&'static str>)| -> Step {
        let on = match state {
            "on" => true,
            "off" => false,
            other => bail!("bad state `{other}`"),
        };

        let mut it = ranges.split(',');
        let x = axis(it.next(), "x")?;
        let y = axis(it.next(), "y")?;
        let z = axis(it.next(), "z")?;
        ensure!(it.next().is_none(), "trailing ranges in `{ranges}`");

        Ok(Step {
            on,
            cuboid: Cuboid { x, y, z },
        })
    }
}

/// Parse a range on the form `x=-20..26`.
fn axis(part: Option<&str>, name: &str) -> Result<[i64; 2]> {
    let part = part.with_context(|| anyhow!("missing {name} range"))?;

    let inner = part
        .strip_prefix(name)
        .and_then(|s| s.strip_prefix('='))
        .with_context(|| anyhow!("bad range `{part}`"))?;

    let (a, b) = inner
        .split_once("..")
        .with_context(|| anyhow!("bad range `{part}`"))?;

    Ok([a.parse()?, b.parse()?])
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    const FIXTURE: &[u8] = b"\
on x=10..12,y=10..12,z=10..12
on x=11..13,y=11..13,z=11..13
off x=9..11,y=9..11,z=9..11
on x=10..10,y=10..10,z=10..10
";

    #[test]
    fn fixture() -> Result<()> {
        let (part1, part2) = super::solve(Input::new(FIXTURE))?;
        assert_eq!(part1, 39);
        assert_eq!(part2, 39);
        Ok(())
    }

    #[test]
    fn intersections() {
        let a = super::Cuboid {
            x: [0, 10],
            y: [0, 10],
            z: [0, 10],
        };

        let b = super::Cuboid {
            x: [10, 12],
            y: [-5, 0],
            z: [3, 4],
        };

        let overlap = a.intersect(&b).unwrap();
        assert_eq!(overlap.x, [10, 10]);
        assert_eq!(overlap.y, [0, 0]);
        assert_eq!(overlap.z, [3, 4]);
        assert_eq!(overlap.volume(), 2);

        let c = super::Cuboid {
            x: [11, 12],
            y: [0, 10],
            z: [0, 10],
        };

        assert!(a.intersect(&c).is_none());
    }
}
