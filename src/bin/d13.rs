use lib::prelude::*;

#[entry(input = "d13.txt", expect = (731, "ZKAUCFUC"))]
fn solve(mut input: Input) -> Result<(u32, ArrayString<8>)> {
    let (mut dots, folds) = parse(&mut input)?;
    ensure!(!folds.is_empty(), "missing fold instructions");

    let mut part1 = 0;

    for (n, fold) in folds.iter().enumerate() {
        apply(fold, &mut dots)?;

        if n == 0 {
            part1 = u32::try_from(dots.len())?;
        }
    }

    let grid = render(&dots)?;

    if cfg!(aoc_print) {
        print!("{grid:?}");
    }

    Ok((part1, read_lcd(&grid)?))
}

fn parse(input: &mut Input) -> Result<(Vec<(u32, u32)>, Vec<Fold>)> {
    let mut dots = Vec::new();

    while let Some(dot) = input.try_line::<Option<Split<',', [u32; 2]>>>()? {
        let Some(Split([x, y])) = dot else {
            break;
        };

        dots.push((x, y));
    }

    let mut folds = Vec::new();

    while let Some(fold) = input.try_line::<Fold>()? {
        folds.push(fold);
    }

    Ok((dots, folds))
}

fn apply(fold: &Fold, dots: &mut Vec<(u32, u32)>) -> Result<()> {
    for dot in dots.iter_mut() {
        let c = match fold.axis {
            Axis::X => &mut dot.0,
            Axis::Y => &mut dot.1,
        };

        if *c > fold.at {
            ensure!(*c <= 2 * fold.at, "dot folds outside the paper");
            *c = 2 * fold.at - *c;
        }
    }

    dots.sort_unstable();
    dots.dedup();
    Ok(())
}

fn render(dots: &[(u32, u32)]) -> Result<GridBuf<u8>> {
    let mut width = 0;
    let mut height = 0;

    for &(x, y) in dots {
        width = width.max(usize::try_from(x)? + 1);
        height = height.max(usize::try_from(y)? + 1);
    }

    let mut grid = GridBuf::filled(height, width, b'.');

    for &(x, y) in dots {
        grid.set((usize::try_from(y)?, usize::try_from(x)?), b'#');
    }

    Ok(grid)
}

struct Fold {
    axis: Axis,
    at: u32,
}

enum Axis {
    X,
    Y,
}

lib::from_input! {
    |(_, _, W(spec)): (W, W, W<&'static str>)| -> Fold {
        let Some((axis, at)) = spec.split_once('=') else {
            bail!("bad fold `{spec}`");
        };

        let axis = match axis {
            "x" => Axis::X,
            "y" => Axis::Y,
            other => bail!("bad axis `{other}`"),
        };

        Ok(Fold {
            axis,
            at: at.parse()?,
        })
    }
}

const GLYPHS: &[(char, &[u8; 24])] = &[
    ('A', b".##.#..##..######..##..#"),
    ('B', b"###.#..####.#..##..####."),
    ('C', b".##.#..##...#...#..#.##."),
    ('D', b"###.#..##..##..##..####."),
    ('E', b"#####...###.#...#...####"),
    ('F', b"#####...###.#...#...#..."),
    ('G', b".##.#..##...#.###..#.###"),
    ('H', b"#..##..##..######..##..#"),
    ('I', b"#...#...#...#...#...#..."),
    ('J', b"..##...#...#...##..#.##."),
    ('K', b"#..##.#.##..#.#.#.#.#..#"),
    ('L', b"#...#...#...#...#...####"),
    ('O', b".##.#..##..##..##..#.##."),
    ('P', b"###.#..##..####.#...#..."),
    ('R', b"###.#..##..####.#.#.#..#"),
    ('T', b"####.#...#...#...#...#.."),
    ('U', b"#..##..##..##..##..#.##."),
    ('Z', b"####...#..#..#..#...####"),
];

/// Decode the rendered banner, each letter occupies four columns followed by
/// a blank column.
fn read_lcd<G>(grid: &G) -> Result<ArrayString<8>>
where
    G: Grid<u8>,
{
    ensure!(grid.rows() == 6, "expected six rows, got {}", grid.rows());

    let mut output = ArrayString::new();
    let mut cell = ArrayVec::<u8, 24>::new();

    for start in (0..grid.columns()).step_by(5) {
        cell.clear();

        for row in 0..grid.rows() {
            for column in start..(start + 4).min(grid.columns()) {
                cell.try_push(grid.get((row, column)))?;
            }
        }

        let Some((c, _)) = GLYPHS.iter().find(|(_, glyph)| cell.as_ref() == &glyph[..]) else {
            bail!("unknown glyph: {:?}", BStr::new(cell.as_ref()));
        };

        output.try_push(*c)?;
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    const FIXTURE: &[u8] = b"\
6,10
0,14
9,10
0,3
10,4
4,11
6,0
6,12
4,1
0,13
10,12
3,4
3,0
8,4
1,10
2,14
8,10
9,0

fold along y=7
fold along x=5
";

    #[test]
    fn fixture() -> Result<()> {
        let mut input = Input::new(FIXTURE);
        let (mut dots, folds) = super::parse(&mut input)?;
        assert_eq!(dots.len(), 18);
        assert_eq!(folds.len(), 2);

        super::apply(&folds[0], &mut dots)?;
        assert_eq!(dots.len(), 17);

        super::apply(&folds[1], &mut dots)?;
        let grid = super::render(&dots)?;

        let expected = "\
#####
#...#
#...#
#...#
#####
";

        assert_eq!(format!("{grid:?}"), expected);
        Ok(())
    }

    #[test]
    fn banner() -> Result<()> {
        let mut input = Input::new(
            b"####.#..#\n\
              ...#.#.#.\n\
              ..#..##..\n\
              .#...#.#.\n\
              #....#.#.\n\
              ####.#..#\n",
        );

        let grid = input.next::<GridBuf<u8>>()?;
        assert_eq!(super::read_lcd(&grid)?.as_str(), "ZK");
        Ok(())
    }
}
