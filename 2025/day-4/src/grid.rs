use chumsky::prelude::*;
use itertools::Itertools;
use miette::*;

/// Warehouse floor, row-major. `true` marks a paper roll.
pub struct Grid {
    pub width: usize,
    pub height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Whether a roll sits at (x, y); anything out of bounds is empty.
    pub fn roll_at(&self, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        x < self.width && y < self.height && self.cells[y * self.width + x]
    }

    /// Rolls in the eight cells surrounding (x, y).
    pub fn neighbor_rolls(&self, x: usize, y: usize) -> usize {
        (-1isize..=1)
            .cartesian_product(-1isize..=1)
            .filter(|&offset| offset != (0, 0))
            .filter(|&(dy, dx)| self.roll_at(x as isize + dx, y as isize + dy))
            .count()
    }

    /// A roll is accessible to the forklift when fewer than four rolls
    /// surround it.
    pub fn accessible(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x] && self.neighbor_rolls(x, y) < 4
    }

    /// Coordinates of every currently accessible roll, scanned row by row.
    pub fn accessible_rolls(&self) -> Vec<(usize, usize)> {
        (0..self.height)
            .cartesian_product(0..self.width)
            .filter(|&(y, x)| self.accessible(x, y))
            .map(|(y, x)| (x, y))
            .collect()
    }

    pub fn remove(&mut self, x: usize, y: usize) {
        self.cells[y * self.width + x] = false;
    }
}

fn parser<'a>() -> impl Parser<'a, &'a str, Grid, extra::Err<Rich<'a, char>>> {
    let cell = choice((just('@').to(true), just('.').to(false)));

    cell.repeated()
        .at_least(1)
        .collect::<Vec<_>>()
        .separated_by(text::newline())
        .allow_trailing()
        .collect::<Vec<_>>()
        .map(|rows| {
            let width = rows.first().map_or(0, Vec::len);
            let height = rows.len();
            let cells = rows.into_iter().flatten().collect();

            Grid {
                width,
                height,
                cells,
            }
        })
}

/// Parses a rectangular grid of `@` (roll) and `.` (empty) cells.
pub fn parse_grid(input: &str) -> Result<Grid> {
    parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn out_of_bounds_is_empty() -> Result<()> {
        let grid = parse_grid("@@\n@@\n")?;
        assert!(grid.roll_at(0, 0));
        assert!(!grid.roll_at(-1, 0));
        assert!(!grid.roll_at(0, 2));
        assert!(!grid.roll_at(2, 1));
        Ok(())
    }

    #[rstest]
    #[case(0, 0, 3)]
    #[case(1, 1, 7)]
    #[case(2, 0, 3)]
    fn counts_surrounding_rolls(
        #[case] x: usize,
        #[case] y: usize,
        #[case] expected: usize,
    ) -> Result<()> {
        let grid = parse_grid("@@.\n@@@\n@@@\n")?;
        assert_eq!(grid.neighbor_rolls(x, y), expected);
        Ok(())
    }

    #[test]
    fn lone_roll_is_accessible() -> Result<()> {
        let grid = parse_grid("...\n.@.\n...\n")?;
        assert!(grid.accessible(1, 1));
        assert_eq!(grid.accessible_rolls(), vec![(1, 1)]);
        Ok(())
    }

    #[test]
    fn rejects_unknown_cell() {
        assert!(parse_grid("@.#\n").is_err());
    }
}
