use miette::*;

use crate::grid::parse_grid;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = parse_grid(input)?;
    let accessible = grid.accessible_rolls().len();

    Ok(accessible.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.";
        assert_eq!("13", process(input)?);
        Ok(())
    }

    #[test]
    fn solves_real_input() -> Result<()> {
        assert_eq!("233", process(include_str!("../input.txt"))?);
        Ok(())
    }
}
