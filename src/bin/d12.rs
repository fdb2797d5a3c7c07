use lib::prelude::*;

#[entry(input = "d12.txt", expect = (4411, 136767))]
fn solve(mut input: Input) -> Result<(u32, u32)> {
    let mut caves = Caves::default();

    while let Some(Split([a, b])) = input.try_line::<Split<'-', [&'static str; 2]>>()? {
        let a = caves.intern(a)?;
        let b = caves.intern(b)?;

        caves.adj[a]
            .try_push(b)
            .map_err(|_| anyhow!("too many connections"))?;
        caves.adj[b]
            .try_push(a)
            .map_err(|_| anyhow!("too many connections"))?;
    }

    let start = *caves.ids.get("start").context("missing start cave")?;
    let end = *caves.ids.get("end").context("missing end cave")?;

    let part1 = paths(&caves, start, end, start, 0, true);
    let part2 = paths(&caves, start, end, start, 0, false);
    Ok((part1, part2))
}

#[derive(Default)]
struct Caves {
    ids: FxHashMap<&'static str, usize>,
    adj: Vec<ArrayVec<usize>>,
    /// Bitset over caves which may only be visited once.
    small: u64,
}

impl Caves {
    fn intern(&mut self, name: &'static str) -> Result<usize> {
        if let Some(&id) = self.ids.get(name) {
            return Ok(id);
        }

        let id = self.adj.len();
        ensure!(id < 64, "too many caves");
        self.ids.insert(name, id);
        self.adj.push(ArrayVec::new());

        if name.chars().all(char::is_lowercase) {
            self.small.set_bit(id as u32);
        }

        Ok(id)
    }
}

fn paths(caves: &Caves, node: usize, end: usize, start: usize, mut visited: u64, used_twice: bool) -> u32 {
    if node == end {
        return 1;
    }

    if caves.small.test_bit(node as u32) {
        visited.set_bit(node as u32);
    }

    let mut count = 0;

    for &next in &caves.adj[node] {
        if !visited.test_bit(next as u32) {
            count += paths(caves, next, end, start, visited, used_twice);
        } else if !used_twice && next != start {
            count += paths(caves, next, end, start, visited, true);
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    const SMALL: &[u8] = b"\
start-A
start-b
A-c
A-b
b-d
A-end
b-end
";

    const MEDIUM: &[u8] = b"\
dc-end
HN-start
start-kj
dc-start
dc-HN
LN-dc
HN-end
kj-sa
kj-HN
kj-dc
";

    const LARGE: &[u8] = b"\
fs-end
he-DX
fs-he
start-DX
pj-DX
end-zg
zg-sl
zg-pj
pj-he
RW-he
fs-DX
pj-RW
zg-RW
start-pj
he-WI
zg-he
pj-fs
start-RW
";

    #[test]
    fn small() -> Result<()> {
        assert_eq!(super::solve(Input::new(SMALL))?, (10, 36));
        Ok(())
    }

    #[test]
    fn medium() -> Result<()> {
        assert_eq!(super::solve(Input::new(MEDIUM))?, (19, 103));
        Ok(())
    }

    #[test]
    fn large() -> Result<()> {
        assert_eq!(super::solve(Input::new(LARGE))?, (226, 3509));
        Ok(())
    }
}
