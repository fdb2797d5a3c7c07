use lib::prelude::*;

#[entry(input = "d05.txt", expect = (5306, 17787))]
fn solve(mut input: Input) -> Result<(u32, u32)> {
    let mut vents = Vec::new();
    let mut rows = 0;
    let mut columns = 0;

    while let Some(vent) = input.try_line::<Vent>()? {
        columns = columns.max(vent.from.0.max(vent.to.0) + 1);
        rows = rows.max(vent.from.1.max(vent.to.1) + 1);
        vents.push(vent);
    }

    let mut straight = GridBuf::filled(usize::try_from(rows)?, usize::try_from(columns)?, 0u8);
    let mut all = straight.clone();

    for vent in &vents {
        let (x1, y1) = vent.from;
        let (x2, y2) = vent.to;
        let (dx, dy) = ((x2 - x1).signum(), (y2 - y1).signum());

        let (mut x, mut y) = (x1, y1);

        loop {
            let pos = (usize::try_from(y)?, usize::try_from(x)?);

            if dx == 0 || dy == 0 {
                let cell = straight.get_mut(pos);
                *cell = cell.saturating_add(1);
            }

            let cell = all.get_mut(pos);
            *cell = cell.saturating_add(1);

            if (x, y) == (x2, y2) {
                break;
            }

            x += dx;
            y += dy;
        }
    }

    let part1 = straight.iter().filter(|&&c| c >= 2).count();
    let part2 = all.iter().filter(|&&c| c >= 2).count();
    Ok((u32::try_from(part1)?, u32::try_from(part2)?))
}

struct Vent {
    from: (i32, i32),
    to: (i32, i32),
}

lib::from_input! {
    |(W(Split([x1, y1])), _, W(Split([x2, y2]))): (W<Split<',', [i32; 2]>>, W, W<Split<',', [i32; 2]>>)| -> Vent {
        ensure!(
            x1 == x2 || y1 == y2 || (x2 - x1).abs() == (y2 - y1).abs(),
            "vent line is neither straight nor diagonal"
        );

        Ok(Vent {
            from: (x1, y1),
            to: (x2, y2),
        })
    }
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    const FIXTURE: &[u8] = b"\
0,9 -> 5,9
8,0 -> 0,8
9,4 -> 3,4
2,2 -> 2,1
7,0 -> 7,4
6,4 -> 2,0
0,9 -> 2,9
3,4 -> 1,4
0,0 -> 8,8
5,5 -> 8,2
";

    #[test]
    fn fixture() -> Result<()> {
        let (part1, part2) = super::solve(Input::new(FIXTURE))?;
        assert_eq!(part1, 5);
        assert_eq!(part2, 12);
        Ok(())
    }

    #[test]
    fn rejects_bent_lines() {
        assert!(super::solve(Input::new(b"0,0 -> 2,5\n")).is_err());
    }
}
