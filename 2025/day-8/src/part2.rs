use miette::*;

use crate::circuits::{build_edges, parse_boxes, CircuitForest};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let boxes = parse_boxes(input)?;
    if boxes.len() < 2 {
        bail!("need at least 2 junction boxes to connect");
    }

    let edges = build_edges(&boxes);
    let mut forest = CircuitForest::new(boxes.len());

    // Reaching one circuit takes at least n - 1 merges, so the first n - 1
    // edges can be applied without checking connectivity at all.
    let mut idx = boxes.len() - 1;
    for edge in &edges[..idx] {
        forest.union(edge.a, edge.b);
    }

    let mut unique = forest.distinct_circuits();

    // Feed edges in batches of `unique - 1` until one circuit remains. The
    // batch size and replay count come from the circuit count observed
    // before the batch, while the cursor advances by the count observed
    // after it; replayed unions are no-ops, so only the cursor position is
    // load-bearing.
    while unique > 1 {
        let batch = unique - 1;
        for _ in 0..batch {
            let end = (idx + batch).min(edges.len());
            for edge in &edges[idx..end] {
                forest.union(edge.a, edge.b);
            }
        }
        unique = forest.distinct_circuits();
        idx += unique - 1;
    }

    // The cursor now rests on the edge that closed the final circuit.
    let closing = edges
        .get(idx)
        .ok_or_else(|| miette!("ran out of edges before the circuits closed"))?;

    let product = boxes[closing.a].x as i64 * boxes[closing.b].x as i64;
    Ok(product.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689";

        assert_eq!("25272", process(input)?);
        Ok(())
    }

    #[test]
    fn rejects_single_box() {
        assert!(process("1,2,3\n").is_err());
    }

    #[test]
    fn solves_real_input() -> Result<()> {
        assert_eq!("79623705", process(include_str!("../input.txt"))?);
        Ok(())
    }
}
