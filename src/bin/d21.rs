use lib::prelude::*;

#[entry(input = "d21.txt", expect = (757770, 712381680443927))]
fn solve(mut input: Input) -> Result<(u64, u64)> {
    let (.., p1) = input.line::<(W, W, W, W, u32)>()?;
    let (.., p2) = input.line::<(W, W, W, W, u32)>()?;

    ensure!(
        (1..=10).contains(&p1) && (1..=10).contains(&p2),
        "starting positions must be within one to ten"
    );

    let part1 = deterministic(p1 - 1, p2 - 1);

    let mut memo = FxHashMap::default();
    let (w1, w2) = wins(&mut memo, p1 - 1, p2 - 1, 0, 0);
    Ok((part1, w1.max(w2)))
}

/// Play with the deterministic die until someone reaches a thousand points,
/// positions are zero-based.
fn deterministic(p1: u32, p2: u32) -> u64 {
    let mut pos = [p1, p2];
    let mut score = [0u64; 2];
    let mut die = 0;
    let mut rolls = 0;
    let mut turn = 0;

    loop {
        let mut steps = 0;

        for _ in 0..3 {
            steps += die + 1;
            die = (die + 1) % 100;
            rolls += 1;
        }

        pos[turn] = (pos[turn] + steps) % 10;
        score[turn] += u64::from(pos[turn] + 1);

        if score[turn] >= 1000 {
            return score[1 - turn] * rolls;
        }

        turn = 1 - turn;
    }
}

/// Sum of three quantum die rolls and how many of the 27 universes roll it.
const ROLLS: [(u32, u64); 7] = [(3, 1), (4, 3), (5, 6), (6, 7), (7, 6), (8, 3), (9, 1)];

type Memo = FxHashMap<(u32, u32, u32, u32), (u64, u64)>;

/// Universe counts won by the active player and the other player, with the
/// active player about to roll.
fn wins(memo: &mut Memo, pos: u32, other_pos: u32, score: u32, other_score: u32) -> (u64, u64) {
    let key = (pos, other_pos, score, other_score);

    if let Some(&hit) = memo.get(&key) {
        return hit;
    }

    let mut total = (0, 0);

    for (roll, freq) in ROLLS {
        let pos = (pos + roll) % 10;
        let score = score + pos + 1;

        if score >= 21 {
            total.0 += freq;
            continue;
        }

        // The turn passes, so the perspectives swap in the sub-game.
        let (other_wins, my_wins) = wins(memo, other_pos, pos, other_score, score);
        total.0 += my_wins * freq;
        total.1 += other_wins * freq;
    }

    memo.insert(key, total);
    total
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    const FIXTURE: &[u8] = b"\
Player 1 starting position: 4
Player 2 starting position: 8
";

    #[test]
    fn fixture() -> Result<()> {
        let (part1, part2) = super::solve(Input::new(FIXTURE))?;
        assert_eq!(part1, 739785);
        assert_eq!(part2, 444356092776315);
        Ok(())
    }
}
