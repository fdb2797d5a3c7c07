use lib::prelude::*;

/// Energy per step for each amphipod kind.
const COSTS: [u32; 4] = [1, 10, 100, 1000];

/// Hallway cells which are not directly outside a room.
const STOPS: [usize; 7] = [0, 1, 3, 5, 7, 9, 10];

#[entry(input = "d23.txt", expect = (13336, 53308))]
fn solve(mut input: Input) -> Result<(u32, u32)> {
    let (top, bottom) = parse(&mut input)?;

    let mut small = [[b'.'; 2]; 4];
    let mut large = [[b'.'; 4]; 4];

    // The folded part of the diagram.
    const ROW1: [u8; 4] = *b"DCBA";
    const ROW2: [u8; 4] = *b"DBAC";

    for i in 0..4 {
        small[i] = [top[i], bottom[i]];
        large[i] = [top[i], ROW1[i], ROW2[i], bottom[i]];
    }

    Ok((organize(small)?, organize(large)?))
}

/// Extract the two rows of amphipods from the diagram.
fn parse(input: &mut Input) -> Result<([u8; 4], [u8; 4])> {
    let mut rows = Vec::new();

    while let Some(line) = input.try_line::<&[u8]>()? {
        let cells = [3, 5, 7, 9].map(|i| line.get(i).copied().unwrap_or(b'.'));

        if cells.iter().all(|c| (b'A'..=b'D').contains(c)) {
            rows.push(cells);
        }
    }

    let &[top, bottom] = &rows[..] else {
        bail!("expected two rows of amphipods, got {}", rows.len());
    };

    Ok((top, bottom))
}

fn organize<const DEPTH: usize>(rooms: [[u8; DEPTH]; 4]) -> Result<u32> {
    let state = State {
        rooms,
        hallway: [b'.'; 11],
    };

    let mut memo = FxHashMap::default();
    let cost = min_cost(&state, &mut memo);
    ensure!(cost != u32::MAX, "no way to organize the amphipods");
    Ok(cost)
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct State<const DEPTH: usize> {
    /// Room slots indexed top down, `b'.'` when empty.
    rooms: [[u8; DEPTH]; 4],
    hallway: [u8; 11],
}

fn min_cost<const DEPTH: usize>(
    state: &State<DEPTH>,
    memo: &mut FxHashMap<State<DEPTH>, u32>,
) -> u32 {
    if state.done() {
        return 0;
    }

    if let Some(&hit) = memo.get(state) {
        return hit;
    }

    // Moving an amphipod from the hallway into its final room never blocks
    // anything else, so the first such move can be taken unconditionally.
    for col in 0..state.hallway.len() {
        if state.hallway[col] == b'.' {
            continue;
        }

        let Some((next, cost)) = state.move_home(col) else {
            continue;
        };

        let sub = min_cost(&next, memo);
        let result = sub.checked_add(cost).unwrap_or(u32::MAX);
        memo.insert(*state, result);
        return result;
    }

    let mut best = u32::MAX;

    for room in 0..4 {
        if state.settled(room) {
            continue;
        }

        let Some(top) = (0..DEPTH).find(|&j| state.rooms[room][j] != b'.') else {
            continue;
        };

        let p = state.rooms[room][top];
        let mouth = 2 + 2 * room;

        for col in STOPS {
            let (a, b) = if col < mouth { (col, mouth) } else { (mouth, col) };

            if state.hallway[a..=b].iter().any(|&c| c != b'.') {
                continue;
            }

            let steps = u32::try_from(top + 1 + col.abs_diff(mouth)).unwrap_or(u32::MAX);
            let cost = steps * COSTS[usize::from(p - b'A')];

            let mut next = *state;
            next.rooms[room][top] = b'.';
            next.hallway[col] = p;

            let sub = min_cost(&next, memo);

            if sub != u32::MAX {
                best = best.min(sub.saturating_add(cost));
            }
        }
    }

    memo.insert(*state, best);
    best
}

impl<const DEPTH: usize> State<DEPTH> {
    fn done(&self) -> bool {
        (0..4).all(|room| {
            self.rooms[room]
                .iter()
                .all(|&c| c == b'A' + u8::try_from(room).unwrap_or_default())
        })
    }

    /// Test if a room holds nothing but its own kind, possibly with empty
    /// slots above.
    fn settled(&self, room: usize) -> bool {
        self.rooms[room]
            .iter()
            .all(|&c| c == b'.' || c == b'A' + u8::try_from(room).unwrap_or_default())
    }

    /// Move the amphipod at the given hallway cell into its room, if the
    /// room accepts it and the path there is clear.
    fn move_home(&self, col: usize) -> Option<(Self, u32)> {
        let p = self.hallway[col];
        let room = usize::from(p.checked_sub(b'A')?);

        if room >= 4 || !self.settled(room) {
            return None;
        }

        let slot = (0..DEPTH).rev().find(|&j| self.rooms[room][j] == b'.')?;

        let mouth = 2 + 2 * room;

        let (a, b) = if col < mouth {
            (col + 1, mouth)
        } else {
            (mouth, col - 1)
        };

        if self.hallway[a..=b].iter().any(|&c| c != b'.') {
            return None;
        }

        let steps = u32::try_from(col.abs_diff(mouth) + slot + 1).ok()?;
        let cost = steps * COSTS[room];

        let mut next = *self;
        next.hallway[col] = b'.';
        next.rooms[room][slot] = p;
        Some((next, cost))
    }
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    const FIXTURE: &[u8] = b"\
#############
#...........#
###B#C#B#D###
  #A#D#C#A#
  #########
";

    #[test]
    fn fixture() -> Result<()> {
        let (part1, part2) = super::solve(Input::new(FIXTURE))?;
        assert_eq!(part1, 12521);
        assert_eq!(part2, 44169);
        Ok(())
    }
}
