use chumsky::prelude::*;
use glam::DVec3;
use itertools::Itertools;
use miette::*;

/// Disjoint-set forest over junction boxes, stored as a flat index arena.
/// A box whose parent is its own index is the root of its circuit.
pub struct CircuitForest {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl CircuitForest {
    pub fn new(boxes: usize) -> Self {
        Self {
            parent: (0..boxes).collect(),
            size: vec![1; boxes],
        }
    }

    /// Resolves the root of `i`, compressing the path along the way.
    pub fn find(&mut self, i: usize) -> usize {
        if self.parent[i] == i {
            i
        } else {
            let root = self.find(self.parent[i]);
            self.parent[i] = root;
            root
        }
    }

    /// Merges the circuits containing `a` and `b`, smaller circuit under
    /// the larger one's root. On equal sizes `b`'s root joins `a`'s.
    /// Returns `false` when both boxes already share a root.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);

        if root_a == root_b {
            return false;
        }

        if self.size[root_a] < self.size[root_b] {
            self.parent[root_a] = root_b;
            self.size[root_b] += self.size[root_a];
        } else {
            self.parent[root_b] = root_a;
            self.size[root_a] += self.size[root_b];
        }
        true
    }

    /// Makes every box a singleton circuit again, so a fresh query can run
    /// over the same box array.
    pub fn reset(&mut self) {
        for (i, parent) in self.parent.iter_mut().enumerate() {
            *parent = i;
        }
        self.size.fill(1);
    }

    /// Number of circuits still disjoint.
    pub fn distinct_circuits(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(i, &parent)| parent == i)
            .count()
    }

    /// Sizes recorded at every root, in no particular order.
    pub fn circuit_sizes(&self) -> Vec<usize> {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(i, &parent)| parent == i)
            .map(|(i, _)| self.size[i])
            .collect()
    }
}

/// An unordered pair of box indices (`a < b`) and their Euclidean distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub dist: f64,
}

/// Builds the complete edge list over `boxes`, ascending by distance.
/// Distance ties fall back to index order so the sequence is fully
/// deterministic.
pub fn build_edges(boxes: &[DVec3]) -> Vec<Edge> {
    let mut edges = (0..boxes.len())
        .tuple_combinations()
        .map(|(a, b)| Edge {
            a,
            b,
            dist: boxes[a].distance(boxes[b]),
        })
        .collect::<Vec<_>>();

    edges.sort_unstable_by(|x, y| {
        x.dist
            .total_cmp(&y.dist)
            .then_with(|| (x.a, x.b).cmp(&(y.a, y.b)))
    });

    edges
}

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<DVec3>, extra::Err<Rich<'a, char>>> {
    let coord = text::int(10).from_str::<f64>().unwrapped();

    let junction = coord
        .then(just(',').ignore_then(coord))
        .then(just(',').ignore_then(coord))
        .map(|((x, y), z)| DVec3::new(x, y, z));

    junction
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

/// Parses one `x,y,z` junction box per line; identity is input order.
pub fn parse_boxes(input: &str) -> Result<Vec<DVec3>> {
    parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}
