//! Serializable views of solver results for `--json` output and artifacts.

use insanity::api::{
    catalog, Decomposition, Edge, PairAxis, Puzzle, Solution, SolveError, Subgraph,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EdgeView {
    pub id: usize,
    pub cube: usize,
    pub pair: &'static str,
    pub u: char,
    pub v: char,
}

impl From<&Edge> for EdgeView {
    fn from(e: &Edge) -> Self {
        Self {
            id: e.id.0,
            cube: e.cube + 1,
            pair: pair_name(e.pair),
            u: e.u.as_char(),
            v: e.v.as_char(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CubeView {
    pub cube: usize,
    /// Catalog position of the chosen rotation.
    pub rotation: Option<usize>,
    /// Row-major 4×4 homogeneous matrix, entries rounded to integers.
    pub matrix: [[i8; 4]; 4],
    pub front: char,
    pub left: char,
}

#[derive(Debug, Serialize)]
pub struct SolveView {
    pub puzzle: Vec<String>,
    pub status: &'static str,
    pub edges: Vec<EdgeView>,
    pub g1: Vec<usize>,
    pub g2: Vec<usize>,
    pub cubes: Vec<CubeView>,
}

pub fn pair_name(pair: PairAxis) -> &'static str {
    match pair {
        PairAxis::TopBottom => "top/bottom",
        PairAxis::LeftRight => "left/right",
        PairAxis::FrontBack => "front/back",
    }
}

fn ids(g: &Subgraph) -> Vec<usize> {
    g.edges().iter().map(|e| e.id.0).collect()
}

fn rows(puzzle: &Puzzle) -> Vec<String> {
    puzzle.cubes.iter().map(|c| c.to_string()).collect()
}

fn with_decomposition(puzzle: &Puzzle, status: &'static str, d: &Decomposition) -> SolveView {
    SolveView {
        puzzle: rows(puzzle),
        status,
        edges: d.all_edges.iter().map(EdgeView::from).collect(),
        g1: ids(&d.g1),
        g2: ids(&d.g2),
        cubes: Vec::new(),
    }
}

impl SolveView {
    pub fn new(puzzle: &Puzzle, result: &Result<Solution, SolveError>) -> Self {
        match result {
            Ok(sol) => {
                let mut view = with_decomposition(puzzle, "solved", &sol.decomposition);
                let o = &sol.orientation;
                view.cubes = o
                    .rotations
                    .iter()
                    .enumerate()
                    .map(|(i, m)| CubeView {
                        cube: i + 1,
                        rotation: catalog().index_of(m),
                        matrix: std::array::from_fn(|r| {
                            std::array::from_fn(|c| m[(r, c)].round() as i8)
                        }),
                        front: o.front[i].as_char(),
                        left: o.left[i].as_char(),
                    })
                    .collect();
                view
            }
            Err(SolveError::Orientation { decomposition }) => {
                with_decomposition(puzzle, "orientation", decomposition)
            }
            Err(SolveError::Decomposition) => SolveView {
                puzzle: rows(puzzle),
                status: "decomposition",
                edges: Vec::new(),
                g1: Vec::new(),
                g2: Vec::new(),
                cubes: Vec::new(),
            },
        }
    }
}
