//! Sample graphs and geodesic distance.
//!
//! ## Purpose
//!
//! This module generates small synthetic graphs as adjacency lists, computes
//! all-pairs shortest paths over points embedded at the graph's nodes, and
//! exposes the resulting geodesic distance as a [`Metric`].
//!
//! ## Design notes
//!
//! * **Adjacency lists**: `graph[i]` lists the neighbours of node `i`.
//! * **Edge weights**: The Euclidean distance between the endpoints' coordinates.
//! * **Routing**: Off-graph points enter the graph through the basis points
//!   within epsilon of them, or through their nearest basis point.
//!
//! ## Key concepts
//!
//! * **Geodesic**: Shortest-path length through the graph; `+inf` when unreachable.
//! * **Short-circuit**: Pairs closer than 2 * epsilon use their direct distance.
//!
//! ## Non-goals
//!
//! * No spatial index; neighbour lookups scan the basis linearly.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, format, vec, vec::Vec};
#[cfg(feature = "std")]
use std::{collections::BTreeMap, vec::Vec};

// External dependencies
use log::{debug, warn};
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::distance::{DistanceMetric, Metric};
use crate::primitives::errors::SmoothingError;
use crate::primitives::point::{coordinate_key, CoordinateKey, Point};

/// Adjacency-list representation of an undirected graph.
pub type Adjacency = Vec<Vec<usize>>;

// ============================================================================
// Generators
// ============================================================================

/// Graph where every node is adjacent to every other node.
pub fn complete_graph(n: usize) -> Adjacency {
    (0..n)
        .map(|i| (0..n).filter(|&j| j != i).collect())
        .collect()
}

/// Graph where node 0 is adjacent to all other nodes and no other pairs are.
pub fn star_graph(n: usize) -> Adjacency {
    if n == 0 {
        return Vec::new();
    }
    let mut graph = vec![vec![0]; n];
    graph[0] = (1..n).collect();
    graph
}

/// Path graph where node `i` is adjacent to every node within `m` steps.
pub fn linear_graph(n: usize, m: usize) -> Adjacency {
    (0..n)
        .map(|i| {
            let below = (1..=m).rev().filter(|&j| j <= i).map(|j| i - j);
            let above = (1..=m).map(|j| i + j).filter(|&k| k < n);
            below.chain(above).collect()
        })
        .collect()
}

/// `n` by `m` lattice with 4-neighbourhoods; node `(i, j)` has index `i + n * j`.
pub fn grid_graph(n: usize, m: usize) -> Adjacency {
    let index = |i: usize, j: usize| i + n * j;
    let mut graph = Vec::with_capacity(n * m);
    for j in 0..m {
        for i in 0..n {
            let mut nbrs = Vec::with_capacity(4);
            if i + 1 < n {
                nbrs.push(index(i + 1, j));
            }
            if i > 0 {
                nbrs.push(index(i - 1, j));
            }
            if j + 1 < m {
                nbrs.push(index(i, j + 1));
            }
            if j > 0 {
                nbrs.push(index(i, j - 1));
            }
            graph.push(nbrs);
        }
    }
    graph
}

/// Graph joining points within Euclidean distance `epsilon` of each other.
///
/// Components that end up disconnected are each attached to the largest
/// component through their closest pair of points, so the result is always
/// connected.
pub fn epsilon_graph<T: Float, P: Point<T>>(points: &[P], epsilon: T) -> Adjacency {
    let n = points.len();
    let mut graph: Adjacency = vec![Vec::new(); n];
    for i in 0..n {
        for j in (i + 1)..n {
            if DistanceMetric::euclidean(points[i].coords(), points[j].coords()) <= epsilon {
                graph[i].push(j);
                graph[j].push(i);
            }
        }
    }

    let mut components = connected_components(&graph);
    if components.len() > 1 {
        debug!(
            "epsilon graph has {} components, joining them",
            components.len()
        );
        let largest = (0..components.len())
            .max_by_key(|&c| components[c].len())
            .unwrap_or(0);
        let mut main = components.swap_remove(largest);
        for component in components {
            if let Some((a, b)) = closest_pair::<T, P>(points, &component, &main) {
                graph[a].push(b);
                graph[b].push(a);
            }
            main.extend(component);
        }
    }

    for nbrs in graph.iter_mut() {
        nbrs.sort_unstable();
    }
    graph
}

fn connected_components(graph: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let mut seen = vec![false; graph.len()];
    let mut components = Vec::new();
    for start in 0..graph.len() {
        if seen[start] {
            continue;
        }
        seen[start] = true;
        let mut component = vec![start];
        let mut frontier = vec![start];
        while let Some(i) = frontier.pop() {
            for &j in &graph[i] {
                if !seen[j] {
                    seen[j] = true;
                    component.push(j);
                    frontier.push(j);
                }
            }
        }
        components.push(component);
    }
    components
}

fn closest_pair<T: Float, P: Point<T>>(
    points: &[P],
    from: &[usize],
    to: &[usize],
) -> Option<(usize, usize)> {
    let mut best = None;
    let mut best_dist = T::infinity();
    for &i in from {
        for &j in to {
            let d = DistanceMetric::euclidean(points[i].coords(), points[j].coords());
            if d < best_dist {
                best_dist = d;
                best = Some((i, j));
            }
        }
    }
    best
}

// ============================================================================
// Shortest Paths
// ============================================================================

/// All-pairs shortest paths (Floyd-Warshall) over Euclidean edge lengths.
///
/// Unreachable pairs are `+inf`.
pub fn shortest_paths<T: Float, P: Point<T>>(
    points: &[P],
    graph: &[Vec<usize>],
) -> Result<Vec<Vec<T>>, SmoothingError> {
    let n = points.len();
    if graph.len() != n {
        return Err(SmoothingError::MismatchedInputs {
            samples: n,
            values: graph.len(),
        });
    }
    if n > 0 {
        Validator::validate_samples(points)?;
    }

    let mut dist = vec![vec![T::infinity(); n]; n];
    for (i, nbrs) in graph.iter().enumerate() {
        dist[i][i] = T::zero();
        for &j in nbrs {
            if j >= n {
                return Err(SmoothingError::InvalidInput(format!(
                    "node {i} lists neighbour {j} but the graph has {n} nodes"
                )));
            }
            dist[i][j] = DistanceMetric::euclidean(points[i].coords(), points[j].coords());
        }
    }

    for k in 0..n {
        for i in 0..n {
            let dik = dist[i][k];
            if dik.is_infinite() {
                continue;
            }
            for j in 0..n {
                let through = dik + dist[k][j];
                if through < dist[i][j] {
                    dist[i][j] = through;
                }
            }
        }
    }

    if dist.iter().flatten().any(|d| d.is_infinite()) {
        warn!("graph over {n} nodes is not connected");
    }

    Ok(dist)
}

// ============================================================================
// Geodesic Metric
// ============================================================================

/// Distance measured along a sample graph.
#[derive(Debug, Clone)]
pub struct GraphMetric<T> {
    basis: Vec<Vec<T>>,
    dims: usize,
    index: BTreeMap<CoordinateKey, usize>,
    paths: Vec<Vec<T>>,
    epsilon: T,
}

impl<T: Float> GraphMetric<T> {
    /// Build a geodesic metric over `points` connected by `graph`.
    pub fn new<P: Point<T>>(
        points: &[P],
        graph: &[Vec<usize>],
        epsilon: T,
    ) -> Result<Self, SmoothingError> {
        if !epsilon.is_finite() || epsilon <= T::zero() {
            return Err(SmoothingError::InvalidParameter {
                parameter: "epsilon",
                value: epsilon.to_f64().unwrap_or(f64::NAN),
            });
        }
        let dims = Validator::validate_samples(points)?;

        let paths = shortest_paths(points, graph)?;
        let basis: Vec<Vec<T>> = points.iter().map(|p| p.coords().to_vec()).collect();
        let index = basis
            .iter()
            .enumerate()
            .map(|(i, c)| (coordinate_key(c), i))
            .collect();

        Ok(Self {
            basis,
            dims,
            index,
            paths,
            epsilon,
        })
    }

    /// Build a geodesic metric over the epsilon graph of `points`.
    pub fn from_points<P: Point<T>>(points: &[P], epsilon: T) -> Result<Self, SmoothingError> {
        Validator::validate_samples(points)?;
        let graph = epsilon_graph(points, epsilon);
        Self::new(points, &graph, epsilon)
    }

    /// Dimensionality of the basis points.
    pub fn dimensions(&self) -> usize {
        self.dims
    }

    /// Shortest-path distance between basis nodes `i` and `j`.
    pub fn path_length(&self, i: usize, j: usize) -> Option<T> {
        self.paths.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Basis nodes through which `p` enters the graph.
    fn access_nodes(&self, p: &[T]) -> Vec<usize> {
        if let Some(&i) = self.index.get(&coordinate_key(p)) {
            return vec![i];
        }

        let near: Vec<usize> = (0..self.basis.len())
            .filter(|&i| DistanceMetric::euclidean(&self.basis[i], p) <= self.epsilon)
            .collect();
        if !near.is_empty() {
            return near;
        }

        let mut nearest = 0;
        let mut nearest_dist = T::infinity();
        for (i, b) in self.basis.iter().enumerate() {
            let d = DistanceMetric::euclidean(b, p);
            if d <= nearest_dist {
                nearest_dist = d;
                nearest = i;
            }
        }
        vec![nearest]
    }
}

impl<T: Float> Metric<T> for GraphMetric<T> {
    fn dimensions(&self) -> Option<usize> {
        Some(self.dims)
    }

    fn distance(&self, a: &[T], b: &[T]) -> T {
        let two = T::one() + T::one();
        let direct = DistanceMetric::euclidean(a, b);
        if direct < two * self.epsilon {
            return direct;
        }

        let entries = self.access_nodes(a);
        let exits = self.access_nodes(b);
        let mut best = T::infinity();
        let mut access = T::zero();
        for &i in &entries {
            let da = DistanceMetric::euclidean(a, &self.basis[i]);
            for &j in &exits {
                let db = DistanceMetric::euclidean(b, &self.basis[j]);
                let total = da + self.paths[i][j] + db;
                if total < best {
                    best = total;
                    access = da + db;
                }
            }
        }

        if direct < two * access {
            return direct;
        }
        best
    }
}
