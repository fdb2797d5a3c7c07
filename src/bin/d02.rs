use lib::prelude::*;

#[entry(input = "d02.txt", expect = (2091984, 2086261056))]
fn solve(mut input: Input) -> Result<(i64, i64)> {
    let mut x = 0;
    let mut aim = 0;
    let mut depth = 0;

    while let Some((W(command), n)) = input.try_line::<(W<&'static str>, i64)>()? {
        match command {
            "forward" => {
                x += n;
                depth += aim * n;
            }
            "down" => {
                aim += n;
            }
            "up" => {
                aim -= n;
            }
            other => {
                bail!("bad command: {other}");
            }
        }
    }

    // The aim of the second interpretation is exactly the depth of the first.
    Ok((x * aim, x * depth))
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    const FIXTURE: &[u8] = b"\
forward 5
down 5
forward 8
up 3
down 8
forward 2
";

    #[test]
    fn fixture() -> Result<()> {
        let (part1, part2) = super::solve(Input::new(FIXTURE))?;
        assert_eq!(part1, 150);
        assert_eq!(part2, 900);
        Ok(())
    }
}
