use tinyvec::ArrayVec;
use warnsdorff_core::{SQUARE_COUNT, Square, SquareSet};

use crate::TourBoard;

/// Index of a vertex in a [`KnightGraph`], equal to the square index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct VertexId(u8);

impl VertexId {
    #[expect(clippy::cast_possible_truncation)]
    fn of(square: Square) -> Self {
        Self(square.index() as u8)
    }

    fn square(self) -> Square {
        Square::from_index(usize::from(self.0))
    }

    fn index(self) -> usize {
        usize::from(self.0)
    }
}

/// A vertex with the unvisited squares reachable from it, in offset order.
#[derive(Debug, Clone, Default)]
struct Vertex {
    neighbors: ArrayVec<[VertexId; 8]>,
}

/// Board representation holding the knight-move graph with live adjacency.
///
/// The graph owns one vertex per square. Each vertex keeps the list of
/// unvisited squares one knight move away, in [`KnightOffset::ALL`] order.
/// Visiting a square removes it from every list that contains it, so a degree
/// is simply the length of a list.
///
/// Removal keeps the remaining neighbors in order. Candidates are therefore
/// enumerated exactly as [`BoardState`] enumerates them.
///
/// [`KnightOffset::ALL`]: warnsdorff_core::KnightOffset::ALL
/// [`BoardState`]: crate::BoardState
///
/// # Examples
///
/// ```
/// use warnsdorff_core::Square;
/// use warnsdorff_solver::{KnightGraph, TourBoard as _};
///
/// let mut graph = KnightGraph::new();
/// let a1 = Square::new(1, 1);
/// assert_eq!(
///     graph.neighbors(a1).collect::<Vec<_>>(),
///     [Square::new(3, 2), Square::new(2, 3)]
/// );
///
/// graph.visit(Square::new(3, 2));
/// assert_eq!(graph.degree(a1), 1);
/// ```
#[derive(Debug, Clone)]
pub struct KnightGraph {
    vertices: Vec<Vertex>,
    visited: SquareSet,
}

impl Default for KnightGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl KnightGraph {
    /// Builds the graph of all legal knight moves with no square visited.
    #[must_use]
    pub fn new() -> Self {
        let mut vertices = vec![Vertex::default(); SQUARE_COUNT];
        for square in Square::ALL {
            let vertex = &mut vertices[square.index()];
            for dest in square.knight_destinations() {
                vertex.neighbors.push(VertexId::of(dest));
            }
        }
        let graph = Self {
            vertices,
            visited: SquareSet::new(),
        };
        debug_assert!(graph.is_symmetric());
        graph
    }

    fn vertex(&self, square: Square) -> &Vertex {
        &self.vertices[square.index()]
    }

    /// Returns the unvisited squares adjacent to `square`, in offset order.
    pub fn neighbors(&self, square: Square) -> impl Iterator<Item = Square> + '_ {
        self.vertex(square)
            .neighbors
            .iter()
            .copied()
            .map(VertexId::square)
    }

    /// Returns the number of directed edges whose endpoints are both unvisited.
    #[cfg(test)]
    fn edge_count(&self) -> usize {
        Square::ALL
            .into_iter()
            .filter(|&square| !self.visited.contains(square))
            .map(|square| self.vertex(square).neighbors.len())
            .sum()
    }

    /// Returns `true` if adjacency between unvisited squares is symmetric.
    ///
    /// For every unvisited `v` listing `w`, `w` lists `v` as well.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        Square::ALL
            .into_iter()
            .filter(|&v| !self.visited.contains(v))
            .all(|v| {
                self.neighbors(v)
                    .all(|w| self.vertex(w).neighbors.contains(&VertexId::of(v)))
            })
    }
}

impl TourBoard for KnightGraph {
    fn name(&self) -> &'static str {
        "graph"
    }

    fn visited(&self) -> SquareSet {
        self.visited
    }

    fn visit(&mut self, square: Square) {
        let added = self.visited.insert(square);
        debug_assert!(added, "{square} visited twice");

        // Every square that can list `square` is a knight move away from it.
        let id = VertexId::of(square);
        for lister in square.knight_destinations() {
            self.vertices[VertexId::of(lister).index()]
                .neighbors
                .retain(|&n| n != id);
        }
    }

    fn degree(&self, square: Square) -> usize {
        self.vertex(square).neighbors.len()
    }

    fn candidates(&self, from: Square) -> impl Iterator<Item = Square> + '_ {
        self.neighbors(from)
    }
}
