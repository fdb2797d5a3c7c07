use lib::prelude::*;

#[entry(input = "d20.txt", expect = (5486, 20210))]
fn solve(mut input: Input) -> Result<(u32, u32)> {
    let algorithm = input.line::<&[u8]>()?;

    ensure!(
        algorithm.len() == 512,
        "enhancement algorithm must be 512 entries, got {}",
        algorithm.len()
    );

    input.ws()?;

    let mut image = input.next::<GridBuf<u8>>()?;
    // What the infinite canvas outside the image holds, the algorithm may
    // flip it on every step.
    let mut background = b'.';

    let mut part1 = 0;

    for step in 1..=50 {
        (image, background) = enhance(algorithm, &image, background);

        if step == 2 {
            part1 = lit(&image, background)?;
        }
    }

    let part2 = lit(&image, background)?;
    Ok((part1, part2))
}

/// Enhance the image once, growing it by one pixel in every direction.
fn enhance(algorithm: &[u8], image: &GridBuf<u8>, background: u8) -> (GridBuf<u8>, u8) {
    let rows = image.rows() + 2;
    let columns = image.columns() + 2;
    let mut out = GridBuf::filled(rows, columns, b'.');

    for row in 0..rows {
        for column in 0..columns {
            let mut index = 0usize;

            for dr in -2..=0 {
                for dc in -2..=0 {
                    let sr = row.checked_add_signed(dr);
                    let sc = column.checked_add_signed(dc);

                    let b = sr
                        .zip(sc)
                        .and_then(|pos| image.try_get(pos))
                        .unwrap_or(background);

                    index = index << 1 | usize::from(b == b'#');
                }
            }

            out.set((row, column), algorithm[index]);
        }
    }

    let next_background = if background == b'#' {
        algorithm[511]
    } else {
        algorithm[0]
    };

    (out, next_background)
}

fn lit(image: &GridBuf<u8>, background: u8) -> Result<u32> {
    ensure!(background != b'#', "infinitely many lit pixels");
    Ok(u32::try_from(image.iter().filter(|&&b| b == b'#').count())?)
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    const FIXTURE: &[u8] = b"\
..#.#..#####.#.#.#.###.##.....###.##.#..###.####..#####..#....#..#..##..###..######.###...####..#..#####..##..#.#####...##.#.#..#.##..#.#......#.###.######.###.####...#.##.##..#..#..#####.....#.#....###..#.##......#.....#..#..#..##..#...##.######.####.####.#.#...#.......#..#.#.#...####.##.#......#..#...##.#.##..#...##.#.##..###.#......#.#.......#.#.#.####.###.##...#.....####.#..#..#.##.#....##..#.####....##...##..#...#......#.#.......#.......##..####..#...#.#.#...##..#.#..###..#####........#..####......#..#

#..#.
#....
##..#
..#..
..###
";

    #[test]
    fn fixture() -> Result<()> {
        let (part1, part2) = super::solve(Input::new(FIXTURE))?;
        assert_eq!(part1, 35);
        assert_eq!(part2, 3351);
        Ok(())
    }

    #[test]
    fn flashing_background() -> Result<()> {
        let mut algorithm = [b'.'; 512];
        algorithm[0] = b'#';

        let mut input = Input::new(b".\n");
        let image = input.next::<GridBuf<u8>>()?;

        let (image, background) = super::enhance(&algorithm, &image, b'.');
        assert_eq!(background, b'#');
        assert!(super::lit(&image, background).is_err());

        let (image, background) = super::enhance(&algorithm, &image, background);
        assert_eq!(background, b'.');
        assert_eq!(super::lit(&image, background)?, 0);
        Ok(())
    }
}
