use miette::*;

use crate::grid::parse_grid;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mut grid = parse_grid(input)?;
    let mut removed = 0;

    // Each pass decides against the unmodified grid, then removes the whole
    // batch at once, until a pass frees nothing.
    loop {
        let accessible = grid.accessible_rolls();
        if accessible.is_empty() {
            break;
        }

        removed += accessible.len();
        for (x, y) in accessible {
            grid.remove(x, y);
        }
    }

    Ok(removed.to_string())
}
