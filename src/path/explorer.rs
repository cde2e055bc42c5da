use std::io::Write;

use crate::graph::Graph;

use super::error::PathError;

/// Result of a best-sum search.
///
/// `path` holds vertex ids in traversal order and is only meaningful until
/// the graph is next mutated structurally.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BestPath {
    pub sum: i64,
    pub path: Vec<usize>,
}

impl BestPath {
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// A simple path handed to the caller while enumeration is still running.
#[derive(Debug, Clone, Copy)]
pub struct FoundPath<'a> {
    /// Vertex ids from source to destination.
    pub ids: &'a [usize],
    /// Vertex values in the same order as `ids`.
    pub values: &'a [i32],
    pub sum: i64,
}

/// `PathExplorer` runs the exhaustive backtracking searches over a `Graph`.
///
/// Both searches mark a vertex as "on the current path" while its subtree is
/// explored and unmark it afterwards, so a vertex can show up again on a
/// sibling branch but never twice on one path. Neighbors are explored in
/// adjacency order, which makes the results deterministic.
///
/// The depth-first walk keeps its frames on the heap, so path length is
/// bounded by the vertex count rather than the thread's stack. Sums are
/// accumulated as `i64` over `i32` vertex values and cannot overflow for any
/// graph that fits in memory.
pub struct PathExplorer;

impl PathExplorer {
    /// Finds the path from `start` with the largest vertex-value sum.
    ///
    /// The best path is recorded whenever the running sum strictly exceeds
    /// the best seen so far, at any vertex, so it may end at a vertex that
    /// still has unvisited neighbors. The best sum starts at 0: if no prefix
    /// reaches a positive sum the result is `sum == 0` with an empty path.
    ///
    /// An empty graph yields the default (empty) result.
    ///
    /// # Errors
    /// `PathError::VertexOutOfRange` when `start` is not a vertex of a
    /// non-empty graph.
    pub fn best_sum_path(graph: &Graph, start: usize) -> Result<BestPath, PathError> {
        if graph.is_empty() {
            return Ok(BestPath::default());
        }
        check_endpoint(graph, start)?;

        let mut ctx = SearchContext::new(graph);
        ctx.run(start);
        Ok(ctx.best)
    }

    /// Streams every simple path from `from` to `to` into `emit` as soon as
    /// it is found and returns how many paths were emitted.
    ///
    /// A path ends the moment it reaches `to`. When `from == to` the single
    /// one-vertex path is emitted. An empty graph emits nothing.
    ///
    /// # Errors
    /// `PathError::VertexOutOfRange` when either endpoint is not a vertex of
    /// a non-empty graph. Nothing is emitted in that case.
    pub fn for_each_path<F>(graph: &Graph, from: usize, to: usize, emit: F) -> Result<usize, PathError>
    where
        F: FnMut(&FoundPath<'_>),
    {
        if graph.is_empty() {
            return Ok(0);
        }
        check_endpoint(graph, from)?;
        check_endpoint(graph, to)?;

        let mut ctx = EnumerationContext {
            graph,
            target: to,
            on_path: vec![false; graph.len()],
            frames: Vec::with_capacity(graph.len()),
            ids: Vec::with_capacity(graph.len()),
            values: Vec::with_capacity(graph.len()),
            emit,
            emitted: 0,
        };
        ctx.run(from);
        Ok(ctx.emitted)
    }

    /// Prints every simple path from `from` to `to` to `writer`, one line per
    /// path, e.g. `Path 1: 1 -> 3 -> 4 (sum = 8)`.
    ///
    /// # Errors
    /// `PathError::VertexOutOfRange` as for `for_each_path`, and
    /// `PathError::Io` for the first failed write, after which output stops.
    pub fn write_all_paths(
        graph: &Graph,
        from: usize,
        to: usize,
        writer: &mut dyn Write,
    ) -> Result<usize, PathError> {
        let mut write_error: Option<std::io::Error> = None;
        let mut line_no = 0usize;

        let count = Self::for_each_path(graph, from, to, |found| {
            if write_error.is_some() {
                return;
            }
            line_no += 1;
            let values: Vec<String> = found.values.iter().map(|v| v.to_string()).collect();
            if let Err(e) = writeln!(
                writer,
                "Path {}: {} (sum = {})",
                line_no,
                values.join(" -> "),
                found.sum
            ) {
                write_error = Some(e);
            }
        })?;

        match write_error {
            Some(e) => Err(PathError::Io(e)),
            None => Ok(count),
        }
    }
}

fn check_endpoint(graph: &Graph, index: usize) -> Result<(), PathError> {
    if index < graph.len() {
        Ok(())
    } else {
        Err(PathError::VertexOutOfRange {
            index,
            len: graph.len(),
        })
    }
}

/// One vertex on the current path: where it is, which adjacency entry to try
/// next, and the sum up to and including it.
struct Frame {
    vertex: usize,
    next: usize,
    sum: i64,
}

/// Returns the next unvisited neighbor of the top frame and advances its
/// cursor, or `None` once the frame's adjacency is exhausted.
fn next_unvisited(graph: &Graph, frame: &mut Frame, on_path: &[bool]) -> Option<usize> {
    let adjacent = graph.vertices()[frame.vertex].adjacent();
    while frame.next < adjacent.len() {
        let handle = adjacent[frame.next];
        frame.next += 1;
        if let Some(neighbor) = graph.position_of(handle) {
            if !on_path[neighbor] {
                return Some(neighbor);
            }
        }
    }
    None
}

// ──────────────────────────────────────────────────────────────────────────────
// Best-sum search state
// ──────────────────────────────────────────────────────────────────────────────

/// Scratch state of one best-sum search. Nothing here outlives the call.
struct SearchContext<'g> {
    graph: &'g Graph,
    on_path: Vec<bool>,
    frames: Vec<Frame>,
    best: BestPath,
    // Depth of a best path still held only in `frames`.
    pending: Option<usize>,
}

impl<'g> SearchContext<'g> {
    fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            on_path: vec![false; graph.len()],
            frames: Vec::with_capacity(graph.len()),
            best: BestPath::default(),
            pending: None,
        }
    }

    fn run(&mut self, start: usize) {
        let graph = self.graph;
        self.enter(start, 0);

        while let Some(frame) = self.frames.last_mut() {
            match next_unvisited(graph, frame, &self.on_path) {
                Some(neighbor) => {
                    let sum = frame.sum;
                    self.enter(neighbor, sum);
                }
                None => {
                    let vertex = frame.vertex;
                    if self.pending == Some(self.frames.len()) {
                        self.snapshot();
                    }
                    self.frames.pop();
                    self.on_path[vertex] = false;
                }
            }
        }
    }

    /// Copies the best prefix out of `frames` before it is unwound.
    fn snapshot(&mut self) {
        if let Some(depth) = self.pending.take() {
            self.best.path.clear();
            self.best
                .path
                .extend(self.frames[..depth].iter().map(|f| f.vertex));
        }
    }

    /// Puts `vertex` on the path and records it if the sum beats the best.
    fn enter(&mut self, vertex: usize, running_sum: i64) {
        let sum = running_sum + i64::from(self.graph.vertices()[vertex].value());
        self.on_path[vertex] = true;
        self.frames.push(Frame {
            vertex,
            next: 0,
            sum,
        });

        if sum > self.best.sum {
            self.best.sum = sum;
            self.pending = Some(self.frames.len());
        }
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// All-paths enumeration state
// ──────────────────────────────────────────────────────────────────────────────

struct EnumerationContext<'g, F> {
    graph: &'g Graph,
    target: usize,
    on_path: Vec<bool>,
    frames: Vec<Frame>,
    ids: Vec<usize>,
    values: Vec<i32>,
    emit: F,
    emitted: usize,
}

impl<'g, F> EnumerationContext<'g, F>
where
    F: FnMut(&FoundPath<'_>),
{
    fn run(&mut self, from: usize) {
        let graph = self.graph;
        self.enter(from, 0);

        while let Some(frame) = self.frames.last_mut() {
            match next_unvisited(graph, frame, &self.on_path) {
                Some(neighbor) => {
                    let sum = frame.sum;
                    self.enter(neighbor, sum);
                }
                None => {
                    let vertex = frame.vertex;
                    self.frames.pop();
                    self.on_path[vertex] = false;
                    self.ids.pop();
                    self.values.pop();
                }
            }
        }
    }

    /// Extends the current path with `vertex`. Reaching the target emits the
    /// path and backs out at once; any other vertex gets a frame to explore.
    fn enter(&mut self, vertex: usize, running_sum: i64) {
        let value = self.graph.vertices()[vertex].value();
        let sum = running_sum + i64::from(value);
        self.ids.push(vertex);
        self.values.push(value);

        if vertex == self.target {
            let found = FoundPath {
                ids: &self.ids,
                values: &self.values,
                sum,
            };
            (self.emit)(&found);
            self.emitted += 1;
            self.ids.pop();
            self.values.pop();
            return;
        }

        self.on_path[vertex] = true;
        self.frames.push(Frame {
            vertex,
            next: 0,
            sum,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_from(values: &[i32], edges: &[(usize, usize)]) -> Graph {
        let mut g = Graph::with_capacity(values.len().max(1)).unwrap();
        for &v in values {
            g.add_vertex_at_end(v).unwrap();
        }
        for &(from, to) in edges {
            g.add_edge(from, to).unwrap();
        }
        g
    }

    fn collect_paths(g: &Graph, from: usize, to: usize) -> Vec<(Vec<usize>, i64)> {
        let mut out = Vec::new();
        PathExplorer::for_each_path(g, from, to, |p| out.push((p.ids.to_vec(), p.sum))).unwrap();
        out
    }

    #[test]
    fn best_sum_on_two_by_two_grid() {
        let g = graph_from(&[1, 2, 3, 4], &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        let best = PathExplorer::best_sum_path(&g, 0).unwrap();
        assert_eq!(best.sum, 8);
        assert_eq!(best.path, vec![0, 2, 3]);
    }

    #[test]
    fn extreme_values_sum_without_overflow() {
        let g = graph_from(&[i32::MAX, i32::MAX, 1], &[(0, 1), (1, 2)]);
        let best = PathExplorer::best_sum_path(&g, 0).unwrap();
        assert_eq!(best.sum, 2 * i64::from(i32::MAX) + 1);
        assert_eq!(best.path, vec![0, 1, 2]);

        let g = graph_from(&[i32::MIN, i32::MIN, -1], &[(0, 1), (1, 2)]);
        assert_eq!(collect_paths(&g, 0, 2), vec![(vec![0, 1, 2], 2 * i64::from(i32::MIN) - 1)]);
        assert!(PathExplorer::best_sum_path(&g, 0).unwrap().is_empty());
    }

    #[test]
    fn long_single_row_does_not_exhaust_the_stack() {
        let n = 100_000;
        let mut g = Graph::with_capacity(n).unwrap();
        for _ in 0..n {
            g.add_vertex_at_end(1).unwrap();
        }
        for i in 1..n {
            g.add_edge(i - 1, i).unwrap();
        }

        let best = PathExplorer::best_sum_path(&g, 0).unwrap();
        assert_eq!(best.sum, n as i64);
        assert_eq!(best.path.len(), n);
        assert_eq!(best.path.last(), Some(&(n - 1)));

        let count = PathExplorer::for_each_path(&g, 0, n - 1, |p| {
            assert_eq!(p.ids.len(), n);
            assert_eq!(p.sum, n as i64);
        })
        .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn best_path_may_stop_at_inner_vertex() {
        // 0 -> 1 -> 2 with a negative tail
        let g = graph_from(&[5, 3, -10], &[(0, 1), (1, 2)]);
        let best = PathExplorer::best_sum_path(&g, 0).unwrap();
        assert_eq!(best.sum, 8);
        assert_eq!(best.path, vec![0, 1]);
    }

    #[test]
    fn ties_keep_first_discovered_path() {
        let g = graph_from(&[1, 2, 2], &[(0, 1), (0, 2)]);
        let best = PathExplorer::best_sum_path(&g, 0).unwrap();
        assert_eq!(best.sum, 3);
        assert_eq!(best.path, vec![0, 1]);
    }

    #[test]
    fn non_positive_region_leaves_empty_best() {
        let g = graph_from(&[-1, -2], &[(0, 1)]);
        let best = PathExplorer::best_sum_path(&g, 0).unwrap();
        assert_eq!(best, BestPath::default());
        assert!(best.is_empty());
    }

    #[test]
    fn cycles_do_not_loop_forever() {
        let g = graph_from(&[1, 1, 1], &[(0, 1), (1, 2), (2, 0), (1, 0)]);
        let best = PathExplorer::best_sum_path(&g, 0).unwrap();
        assert_eq!(best.sum, 3);
        assert_eq!(best.path, vec![0, 1, 2]);
    }

    #[test]
    fn vertex_reappears_on_sibling_branches() {
        // 3 is reachable through both 1 and 2; each branch must see it unmarked.
        let g = graph_from(&[0, 1, 5, 1], &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        let best = PathExplorer::best_sum_path(&g, 0).unwrap();
        assert_eq!(best.path, vec![0, 2, 3]);
        assert_eq!(collect_paths(&g, 0, 3).len(), 2);
    }

    #[test]
    fn best_sum_on_empty_graph_is_noop() {
        let g = Graph::with_capacity(1).unwrap();
        assert_eq!(PathExplorer::best_sum_path(&g, 0).unwrap(), BestPath::default());
    }

    #[test]
    fn out_of_range_start_is_reported() {
        let g = graph_from(&[1], &[]);
        assert!(matches!(
            PathExplorer::best_sum_path(&g, 1),
            Err(PathError::VertexOutOfRange { index: 1, len: 1 })
        ));
        assert!(PathExplorer::for_each_path(&g, 0, 4, |_| {}).is_err());
    }

    #[test]
    fn single_path_is_emitted_once() {
        let g = graph_from(&[4, 5, 6], &[(0, 1), (1, 2)]);
        let mut seen = Vec::new();
        let count = PathExplorer::for_each_path(&g, 0, 2, |p| {
            seen.push((p.values.to_vec(), p.sum));
        })
        .unwrap();
        assert_eq!(count, 1);
        assert_eq!(seen, vec![(vec![4, 5, 6], 15)]);
    }

    #[test]
    fn all_paths_in_adjacency_order() {
        let g = graph_from(&[1, 2, 3, 4], &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        assert_eq!(
            collect_paths(&g, 0, 3),
            vec![(vec![0, 1, 3], 7), (vec![0, 2, 3], 8)]
        );
    }

    #[test]
    fn disconnected_destination_emits_nothing() {
        let g = graph_from(&[1, 2, 3], &[(0, 1)]);
        assert!(collect_paths(&g, 0, 2).is_empty());
    }

    #[test]
    fn source_equal_to_destination() {
        let g = graph_from(&[9, 1], &[(0, 1), (1, 0)]);
        assert_eq!(collect_paths(&g, 0, 0), vec![(vec![0], 9)]);
    }

    #[test]
    fn write_all_paths_formats_values() {
        let g = graph_from(&[1, 2, 3, 4], &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        let mut out = Vec::new();
        let count = PathExplorer::write_all_paths(&g, 0, 3, &mut out).unwrap();
        assert_eq!(count, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Path 1: 1 -> 2 -> 4 (sum = 7)\nPath 2: 1 -> 3 -> 4 (sum = 8)\n"
        );
    }
}
