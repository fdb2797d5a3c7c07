use lib::prelude::*;

#[entry(input = "d06.txt", expect = (365862, 1653250886439))]
fn solve(mut input: Input) -> Result<(u64, u64)> {
    let Split(timers) = input.line::<Split<',', Vec<usize>>>()?;

    // Individual fish are indistinguishable, so track one population count
    // per timer value.
    let mut cohorts = [0u64; 9];

    for t in timers {
        ensure!(t < 9, "bad timer {t}");
        cohorts[t] += 1;
    }

    for _ in 0..80 {
        step(&mut cohorts);
    }

    let part1 = cohorts.iter().sum();

    for _ in 80..256 {
        step(&mut cohorts);
    }

    let part2 = cohorts.iter().sum();
    Ok((part1, part2))
}

fn step(cohorts: &mut [u64; 9]) {
    let spawning = cohorts[0];
    // The spawning cohort wraps around to timer 8 as the newborns.
    cohorts.rotate_left(1);
    cohorts[6] += spawning;
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    const FIXTURE: &[u8] = b"3,4,3,1,2\n";

    #[test]
    fn fixture() -> Result<()> {
        let (part1, part2) = super::solve(Input::new(FIXTURE))?;
        assert_eq!(part1, 5934);
        assert_eq!(part2, 26984457539);
        Ok(())
    }
}
