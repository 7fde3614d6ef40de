#![no_std]

/// Returns true when `cells` contains at least `line_size` consecutive entries equal to `target`.
///
/// Only unbroken stretches count: `line_size` matching cells separated by anything else do not
/// form a run. A zero-length run is trivially present.
///
/// # Arguments
/// * `cells` - The cells along one line, in order
/// * `target` - The cell value to look for (e.g. one player's piece)
/// * `line_size` - Number of consecutive matches needed
pub fn has_run<'a, T, I>(cells: I, target: &T, line_size: usize) -> bool
where
    T: PartialEq + 'a,
    I: IntoIterator<Item = &'a T>,
{
    if line_size == 0 {
        return true;
    }
    let mut match_len = 0;
    for cell in cells {
        if cell == target {
            match_len += 1;
            if match_len >= line_size {
                return true;
            }
        } else {
            match_len = 0;
        }
    }
    false
}

/// Walks a flat row-major board from `start` in direction `step` until it leaves the board.
fn ray<'a, T>(
    board: &'a [T],
    width: usize,
    height: usize,
    start: (usize, usize),
    step: (isize, isize),
) -> impl Iterator<Item = &'a T> + 'a {
    let (mut x, mut y) = (start.0 as isize, start.1 as isize);
    core::iter::from_fn(move || {
        if x < 0 || y < 0 || x >= width as isize || y >= height as isize {
            return None;
        }
        let cell = board.get(y as usize * width + x as usize);
        x += step.0;
        y += step.1;
        cell
    })
}

/// Checks every line of a full grid for a run of `player` pieces.
///
/// This is the exhaustive scan: all rows, columns and both diagonal directions are walked
/// end to end, regardless of where the last piece landed.
/// The incremental engine never calls it; it backs the full-height board that
/// never evicts rows, which the windowed engine is compared against in tests.
///
/// # Arguments
/// * `board` - The board data as a flat slice, row-major, `width * height` cells
/// * `width` - Board width
/// * `height` - Board height
/// * `player` - The piece to look for
/// * `line_size` - Number of consecutive pieces needed to win
pub fn check_line_win<T: PartialEq>(
    board: &[T],
    width: usize,
    height: usize,
    player: &T,
    line_size: usize,
) -> bool {
    if width == 0 || height == 0 {
        return false;
    }

    // Horizontal
    for y in 0..height {
        if has_run(ray(board, width, height, (0, y), (1, 0)), player, line_size) {
            return true;
        }
    }

    // Vertical
    for x in 0..width {
        if has_run(ray(board, width, height, (x, 0), (0, 1)), player, line_size) {
            return true;
        }
    }

    // Ascending diagonals start on the left edge and along row 0
    let ascending = (0..height).map(|y| (0, y)).chain((1..width).map(|x| (x, 0)));
    for start in ascending {
        if has_run(ray(board, width, height, start, (1, 1)), player, line_size) {
            return true;
        }
    }

    // Descending diagonals start on the left edge and along the last row
    let descending = (0..height)
        .map(|y| (0, y))
        .chain((1..width).map(|x| (x, height - 1)));
    for start in descending {
        if has_run(ray(board, width, height, start, (1, -1)), player, line_size) {
            return true;
        }
    }

    false
}
