use miette::*;

use crate::circuits::{build_edges, parse_boxes, CircuitForest};

/// How many of the closest pairs get wired up before the circuits are
/// measured. Tied to the real input's scale, so tests override it.
const CLOSEST_PAIRS: usize = 1000;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    solve(input, CLOSEST_PAIRS)
}

/// Connects the `closest` shortest pairs, then multiplies the sizes of the
/// three largest circuits.
pub fn solve(input: &str, closest: usize) -> Result<String> {
    let boxes = parse_boxes(input)?;
    let edges = build_edges(&boxes);

    let mut forest = CircuitForest::new(boxes.len());
    for edge in edges.iter().take(closest.min(edges.len())) {
        forest.union(edge.a, edge.b);
    }

    let mut sizes = forest.circuit_sizes();
    sizes.sort_unstable_by(|a, b| b.cmp(a));

    let &[first, second, third, ..] = sizes.as_slice() else {
        bail!(
            "the product of the three largest circuits needs at least 3 circuits, found {}",
            sizes.len()
        );
    };

    Ok((first * second * third).to_string())
}
