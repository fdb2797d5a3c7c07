use lib::prelude::*;

#[entry(input = "d04.txt", expect = (65325, 4624))]
fn solve(mut input: Input) -> Result<(u32, u32)> {
    let Split(draws) = input.line::<Split<',', Vec<u32>>>()?;

    let mut boards = Vec::new();

    loop {
        input.ws()?;

        if input.is_empty() {
            break;
        }

        let mut numbers = [0; 25];

        for row in 0..5 {
            let line = input.line::<[u32; 5]>()?;
            numbers[row * 5..row * 5 + 5].copy_from_slice(&line);
        }

        boards.push(Board {
            numbers,
            marked: 0,
            won: false,
        });
    }

    let mut first = None;
    let mut last = None;

    for n in draws {
        for board in &mut boards {
            if board.won {
                continue;
            }

            board.mark(n);

            if board.wins() {
                board.won = true;
                let score = board.unmarked_sum() * n;

                if first.is_none() {
                    first = Some(score);
                }

                last = Some(score);
            }
        }
    }

    Ok((
        first.context("no winning board")?,
        last.context("no winning board")?,
    ))
}

struct Board {
    numbers: [u32; 25],
    /// Bitset over the 25 cells.
    marked: u32,
    won: bool,
}

impl Board {
    fn mark(&mut self, n: u32) {
        for (i, number) in self.numbers.iter().enumerate() {
            if *number == n {
                self.marked |= 1 << i;
            }
        }
    }

    fn wins(&self) -> bool {
        (0..5).any(|i| {
            let row = 0b11111 << (i * 5);
            let column = 0x108421 << i;
            self.marked & row == row || self.marked & column == column
        })
    }

    fn unmarked_sum(&self) -> u32 {
        self.numbers
            .iter()
            .enumerate()
            .filter(|&(i, _)| self.marked & (1 << i) == 0)
            .map(|(_, n)| n)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    const FIXTURE: &[u8] = b"\
7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

22 13 17 11  0
 8  2 23  4 24
21  9 14 16  7
 6 10  3 18  5
 1 12 20 15 19

 3 15  0  2 22
 9 18 13 17  5
19  8  7 25 23
20 11 10 24  4
14 21 16 12  6

14 21 17 24  4
10 16 15  9 19
18  8 23 26 20
22 11 13  6  5
 2  0 12  3  7
";

    #[test]
    fn fixture() -> Result<()> {
        let (part1, part2) = super::solve(Input::new(FIXTURE))?;
        assert_eq!(part1, 4512);
        assert_eq!(part2, 1924);
        Ok(())
    }
}
