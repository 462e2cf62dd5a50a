use miette::*;

use advent2025_day_8::{part1, part2};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = include_str!("../input.txt");
    println!("Part 1: {}", part1::process(input)?);
    println!("Part 2: {}", part2::process(input)?);
    Ok(())
}
