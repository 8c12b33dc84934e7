use crate::grid::{Cell, Coord, Direction, Grid, Word};

/// A legal spot for a word along with the number of letters it shares with the board there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fit {
    pub coord: Coord,
    pub direction: Direction,
    pub score: usize,
}

/// Checks whether `word` can go at `coord` reading in `direction`.
///
/// Returns the number of intersections the placement would make, or `None` if the placement is
/// illegal. Unless `is_first_word` is set a placement must intersect at least one letter.
pub fn evaluate_fit(
    grid: &Grid,
    word: &Word,
    coord: Coord,
    direction: Direction,
    is_first_word: bool,
) -> Option<usize> {
    if word.is_empty() || !grid.contains(coord) {
        return None;
    }

    let step = direction.step();

    if let Some(before) = grid.move_coords(coord, 1, step.opposite()) {
        if !grid.cell(before).is_empty() {
            return None;
        }
    }

    if let Some(after) = grid.move_coords(coord, word.len(), step) {
        if !grid.cell(after).is_empty() {
            return None;
        }
    }

    let mut score = 0;
    for (index, c) in word.chars().iter().enumerate() {
        let target = grid.move_coords(coord, index, step)?;
        match grid.cell(target) {
            Cell::Empty => {}
            Cell::Letter(existing) if existing == *c => score += 1,
            _ => return None,
        }
    }

    // a parallel word on a neighboring track would read as gibberish
    for perpendicular in direction.perpendicular() {
        let neighbor = match grid.move_coords(coord, 1, perpendicular) {
            Some(neighbor) => neighbor,
            None => continue,
        };

        for index in 0..word.len() {
            let target = grid.move_coords(neighbor, index, step)?;
            if grid.direction(target) == Some(direction) {
                return None;
            }
        }
    }

    if !is_first_word && score == 0 {
        return None;
    }

    Some(score)
}

/// Every legal placement of `word`, scanning rows then columns, trying right before down.
pub fn enumerate_fits(grid: &Grid, word: &Word, is_first_word: bool) -> Vec<Fit> {
    let mut result = vec![];

    for coord in grid.coords() {
        for direction in Direction::ALL {
            if let Some(score) = evaluate_fit(grid, word, coord, direction, is_first_word) {
                result.push(Fit {
                    coord,
                    direction,
                    score,
                });
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::{enumerate_fits, evaluate_fit, Fit};
    use crate::grid::{Cell, Coord, Direction, Grid, Word};

    fn write(grid: &mut Grid, word: &str, coord: Coord, direction: Direction) {
        for (index, c) in word.chars().enumerate() {
            let target = grid.move_coords(coord, index, direction.step()).unwrap();
            grid.set_cell(target, Cell::Letter(c));
            grid.set_direction(target, direction);
        }
    }

    #[test]
    fn first_word_fits_anywhere_in_bounds() {
        let grid = Grid::new(5, 5);
        let word = Word::from("abc");

        assert_eq!(
            Some(0),
            evaluate_fit(&grid, &word, Coord::new(0, 0), Direction::Right, true)
        );
        assert_eq!(
            Some(0),
            evaluate_fit(&grid, &word, Coord::new(2, 4), Direction::Down, true)
        );
        assert_eq!(
            None,
            evaluate_fit(&grid, &word, Coord::new(0, 3), Direction::Right, true)
        );
        assert_eq!(
            None,
            evaluate_fit(&grid, &word, Coord::new(3, 0), Direction::Down, true)
        );
    }

    #[test]
    fn later_words_must_intersect() {
        let grid = Grid::new(5, 5);
        let word = Word::from("abc");

        assert_eq!(
            None,
            evaluate_fit(&grid, &word, Coord::new(0, 0), Direction::Right, false)
        );
    }

    #[test]
    fn intersections_are_counted() {
        let mut grid = Grid::new(5, 5);
        write(&mut grid, "cat", Coord::new(1, 0), Direction::Right);

        let word = Word::from("tab");
        assert_eq!(
            Some(1),
            evaluate_fit(&grid, &word, Coord::new(1, 2), Direction::Down, false)
        );
        assert_eq!(
            Some(1),
            evaluate_fit(&grid, &word, Coord::new(0, 1), Direction::Down, false)
        );
    }

    #[test]
    fn conflicting_letters_are_rejected() {
        let mut grid = Grid::new(5, 5);
        write(&mut grid, "cat", Coord::new(1, 0), Direction::Right);

        let word = Word::from("dog");
        assert_eq!(
            None,
            evaluate_fit(&grid, &word, Coord::new(0, 0), Direction::Down, true)
        );
    }

    #[test]
    fn blockers_are_not_letters() {
        let mut grid = Grid::new(5, 5);
        grid.set_cell(Coord::new(2, 2), Cell::Blocker);

        let word = Word::from("abc");
        assert_eq!(
            None,
            evaluate_fit(&grid, &word, Coord::new(2, 0), Direction::Right, true)
        );
    }

    #[test]
    fn neighbors_before_and_after_must_be_empty() {
        let mut grid = Grid::new(6, 1);
        grid.set_cell(Coord::new(0, 0), Cell::Blocker);

        let word = Word::from("ab");
        assert_eq!(
            None,
            evaluate_fit(&grid, &word, Coord::new(0, 1), Direction::Right, true)
        );
        assert_eq!(
            Some(0),
            evaluate_fit(&grid, &word, Coord::new(0, 2), Direction::Right, true)
        );

        grid.set_cell(Coord::new(0, 5), Cell::Letter('z'));
        grid.set_direction(Coord::new(0, 5), Direction::Right);
        assert_eq!(
            None,
            evaluate_fit(&grid, &word, Coord::new(0, 3), Direction::Right, true)
        );
    }

    #[test]
    fn parallel_neighbors_are_rejected() {
        let mut grid = Grid::new(5, 5);
        write(&mut grid, "ab", Coord::new(0, 0), Direction::Right);

        let word = Word::from("cd");
        assert_eq!(
            None,
            evaluate_fit(&grid, &word, Coord::new(1, 0), Direction::Right, false)
        );
        // even the relaxed first-word check refuses the adjacent track
        assert_eq!(
            None,
            evaluate_fit(&grid, &word, Coord::new(1, 0), Direction::Right, true)
        );
        assert_eq!(
            Some(0),
            evaluate_fit(&grid, &word, Coord::new(2, 0), Direction::Right, true)
        );
    }

    #[test]
    fn perpendicular_neighbors_are_allowed() {
        let mut grid = Grid::new(5, 5);
        write(&mut grid, "ab", Coord::new(0, 0), Direction::Down);

        let word = Word::from("cd");
        assert_eq!(
            Some(0),
            evaluate_fit(&grid, &word, Coord::new(2, 0), Direction::Right, true)
        );
        assert_eq!(
            None,
            evaluate_fit(&grid, &word, Coord::new(0, 1), Direction::Down, true)
        );
    }

    #[test]
    fn off_grid_starts_are_rejected() {
        let grid = Grid::new(13, 13);
        let word = Word::from("ab");

        assert_eq!(
            None,
            evaluate_fit(&grid, &word, Coord::new(0, 14), Direction::Down, true)
        );
        assert_eq!(
            None,
            evaluate_fit(&grid, &word, Coord::new(20, 0), Direction::Right, true)
        );
        assert_eq!(
            None,
            evaluate_fit(&grid, &word, Coord::new(13, 0), Direction::Down, true)
        );
        assert_eq!(
            None,
            evaluate_fit(&grid, &word, Coord::new(usize::MAX, 0), Direction::Down, true)
        );
    }

    #[test]
    fn empty_word_never_fits() {
        let grid = Grid::new(3, 3);
        let word = Word::from("");

        assert_eq!(
            None,
            evaluate_fit(&grid, &word, Coord::new(1, 1), Direction::Right, true)
        );
        assert!(enumerate_fits(&grid, &word, true).is_empty());
    }

    #[test]
    fn enumerate_fits_scans_in_order() {
        let grid = Grid::new(2, 2);
        let word = Word::from("ab");

        assert_eq!(
            vec![
                Fit {
                    coord: Coord::new(0, 0),
                    direction: Direction::Right,
                    score: 0
                },
                Fit {
                    coord: Coord::new(0, 0),
                    direction: Direction::Down,
                    score: 0
                },
                Fit {
                    coord: Coord::new(0, 1),
                    direction: Direction::Down,
                    score: 0
                },
                Fit {
                    coord: Coord::new(1, 0),
                    direction: Direction::Right,
                    score: 0
                },
            ],
            enumerate_fits(&grid, &word, true)
        );
    }

    #[test]
    fn enumerate_fits_covers_wide_grids() {
        let grid = Grid::new(7, 2);
        let word = Word::from("abcdefg");

        let fits = enumerate_fits(&grid, &word, true);
        assert_eq!(2, fits.len());
        assert!(fits.iter().all(|fit| fit.direction == Direction::Right));
    }
}
