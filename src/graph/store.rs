// store.rs
// ──────────────────────────────────────────────────────────────────────────────
// Directed vertex-valued graph with index-stable mutation semantics.
//
// Vertices live in an ordered `Vec`; a vertex's `id` is always its current
// position in that vector. Adjacency entries are `VertexHandle`s, which never
// change for the lifetime of a vertex, so shifting vertices around does not
// invalidate edges. Every structural mutation renumbers the affected vertices
// and refreshes the handle → position index.
// ──────────────────────────────────────────────────────────────────────────────
use std::collections::HashMap;
use std::fmt;

use super::error::GraphError;

/// Stable link to a vertex, used as the target of an adjacency entry.
///
/// Handles are never reused within a graph, so a handle whose vertex has been
/// removed simply stops resolving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexHandle(u64);

/// A graph element: an integer value and its outgoing adjacency sequence.
#[derive(Clone, Debug)]
pub struct Vertex {
    handle: VertexHandle,
    id: usize,
    value: i32,
    adjacent: Vec<VertexHandle>,
}

impl Vertex {
    /// Current position of the vertex in the graph.
    ///
    /// Only valid until the next insertion at the start or removal.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn handle(&self) -> VertexHandle {
        self.handle
    }

    /// Outgoing edge targets in insertion order. Duplicates are kept.
    pub fn adjacent(&self) -> &[VertexHandle] {
        &self.adjacent
    }
}

/// Directed graph whose vertices are addressed by dense, zero-based ids.
#[derive(Clone, Debug)]
pub struct Graph {
    vertices: Vec<Vertex>,
    positions: HashMap<VertexHandle, usize>,
    capacity: usize,
    next_handle: u64,
}

impl Graph {
    /// Creates an empty graph able to hold `initial_capacity` vertices before
    /// its storage has to grow.
    ///
    /// # Errors
    /// `GraphError::ZeroCapacity` when `initial_capacity` is 0,
    /// `GraphError::Allocation` when the storage cannot be reserved.
    pub fn with_capacity(initial_capacity: usize) -> Result<Self, GraphError> {
        if initial_capacity == 0 {
            return Err(GraphError::ZeroCapacity);
        }
        let mut vertices = Vec::new();
        vertices.try_reserve_exact(initial_capacity)?;
        Ok(Self {
            vertices,
            positions: HashMap::with_capacity(initial_capacity),
            capacity: initial_capacity,
            next_handle: 0,
        })
    }

    /// Number of vertices currently in the graph.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of vertices the graph can hold before the next doubling.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn vertex(&self, id: usize) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Resolves a handle to the current id of its vertex.
    ///
    /// Returns `None` for handles of vertices that have been removed.
    pub fn position_of(&self, handle: VertexHandle) -> Option<usize> {
        self.positions.get(&handle).copied()
    }

    /// Target ids of the outgoing edges of `id`, in adjacency order.
    ///
    /// Yields nothing for an out-of-range id.
    pub fn neighbors(&self, id: usize) -> impl Iterator<Item = usize> + '_ {
        self.vertices
            .get(id)
            .into_iter()
            .flat_map(|vertex| vertex.adjacent.iter())
            .filter_map(move |handle| self.position_of(*handle))
    }

    /// Every edge as a `(from, to)` id pair, grouped by source vertex.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.vertices.len()).flat_map(move |from| self.neighbors(from).map(move |to| (from, to)))
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.adjacent.len()).sum()
    }

    /// Number of adjacency entries, across all vertices, pointing at `id`.
    ///
    /// Not used by the searches; it exists so removal can be checked against
    /// the edge count (`before - in_degree == after` for a vertex without
    /// outgoing edges).
    ///
    /// # Errors
    /// `GraphError::InvalidIndex` when `id` is out of range.
    pub fn in_degree(&self, id: usize) -> Result<usize, GraphError> {
        self.check_index(id)?;
        let target = self.vertices[id].handle;
        Ok(self
            .vertices
            .iter()
            .map(|v| v.adjacent.iter().filter(|h| **h == target).count())
            .sum())
    }

    // ── vertex mutation ──────────────────────────────────────────────────────

    /// Appends a vertex with an empty adjacency sequence and returns its id.
    ///
    /// # Errors
    /// `GraphError::Allocation` when the storage is full and cannot double.
    pub fn add_vertex_at_end(&mut self, value: i32) -> Result<usize, GraphError> {
        self.ensure_room()?;
        let id = self.vertices.len();
        let vertex = self.new_vertex(id, value);
        self.positions.insert(vertex.handle, id);
        self.vertices.push(vertex);
        Ok(id)
    }

    /// Inserts a vertex at position 0, shifting and renumbering every other
    /// vertex. Always returns id 0.
    pub fn add_vertex_at_start(&mut self, value: i32) -> Result<usize, GraphError> {
        self.ensure_room()?;
        let vertex = self.new_vertex(0, value);
        self.vertices.insert(0, vertex);
        self.renumber_from(0);
        Ok(0)
    }

    /// Replaces the value of vertex `id` and returns the previous value.
    /// Adjacency is untouched.
    ///
    /// # Errors
    /// `GraphError::InvalidIndex` when `id` is not in `[0, len)`; the graph is
    /// left unchanged.
    pub fn update_vertex_value(&mut self, id: usize, value: i32) -> Result<i32, GraphError> {
        self.check_index(id)?;
        Ok(std::mem::replace(&mut self.vertices[id].value, value))
    }

    /// Removes vertex `id` and returns its value.
    ///
    /// Every adjacency entry pointing at the vertex is pruned (surviving
    /// entries keep their relative order), then the later vertices shift one
    /// position left and are renumbered.
    ///
    /// # Errors
    /// `GraphError::InvalidIndex` when `id` is not in `[0, len)`; the graph is
    /// left unchanged.
    pub fn remove_vertex(&mut self, id: usize) -> Result<i32, GraphError> {
        self.check_index(id)?;
        let target = self.vertices[id].handle;

        for vertex in self.vertices.iter_mut() {
            vertex.adjacent.retain(|handle| *handle != target);
        }

        let removed = self.vertices.remove(id);
        self.positions.remove(&target);
        self.renumber_from(id);
        Ok(removed.value)
    }

    /// Removes every vertex while keeping the current capacity.
    ///
    /// Handles are not reused afterwards. Mainly useful for resetting a graph
    /// between invariant checks; dropping the graph releases everything anyway.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.positions.clear();
    }

    // ── edge mutation ────────────────────────────────────────────────────────

    /// Appends an edge `from -> to`. Duplicate edges are allowed.
    ///
    /// # Errors
    /// `GraphError::InvalidIndex` when either endpoint is out of range; no
    /// edge is added.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<(), GraphError> {
        self.check_index(from)?;
        self.check_index(to)?;
        let target = self.vertices[to].handle;
        self.vertices[from].adjacent.push(target);
        Ok(())
    }

    /// Removes the first edge `from -> to`; later duplicates stay in place.
    ///
    /// # Errors
    /// `GraphError::InvalidIndex` when either endpoint is out of range,
    /// `GraphError::EdgeNotFound` when `from` has no edge to `to`. Neither
    /// changes the graph.
    pub fn remove_edge(&mut self, from: usize, to: usize) -> Result<(), GraphError> {
        self.check_index(from)?;
        self.check_index(to)?;
        let target = self.vertices[to].handle;
        let adjacent = &mut self.vertices[from].adjacent;
        match adjacent.iter().position(|handle| *handle == target) {
            Some(slot) => {
                adjacent.remove(slot);
                Ok(())
            }
            None => Err(GraphError::EdgeNotFound { from, to }),
        }
    }

    // ── internals ────────────────────────────────────────────────────────────

    fn check_index(&self, index: usize) -> Result<(), GraphError> {
        if index < self.vertices.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidIndex {
                index,
                len: self.vertices.len(),
            })
        }
    }

    fn new_vertex(&mut self, id: usize, value: i32) -> Vertex {
        let handle = VertexHandle(self.next_handle);
        self.next_handle += 1;
        Vertex {
            handle,
            id,
            value,
            adjacent: Vec::new(),
        }
    }

    /// Doubles the capacity when the graph is full.
    fn ensure_room(&mut self) -> Result<(), GraphError> {
        if self.vertices.len() < self.capacity {
            return Ok(());
        }
        let grown = self.capacity * 2;
        self.vertices
            .try_reserve_exact(grown - self.vertices.len())?;
        self.capacity = grown;
        Ok(())
    }

    /// Brings `id` and the position index back in line with vector order for
    /// every vertex at or after `start`.
    fn renumber_from(&mut self, start: usize) {
        for (position, vertex) in self.vertices.iter_mut().enumerate().skip(start) {
            vertex.id = position;
            self.positions.insert(vertex.handle, position);
        }
    }
}

impl fmt::Display for Graph {
    /// One line per vertex: `[id] value -> t1, t2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.vertices.is_empty() {
            return writeln!(f, "(empty graph)");
        }
        for vertex in &self.vertices {
            let targets: Vec<String> = self
                .neighbors(vertex.id)
                .map(|to| to.to_string())
                .collect();
            if targets.is_empty() {
                writeln!(f, "[{}] {}", vertex.id, vertex.value)?;
            } else {
                writeln!(f, "[{}] {} -> {}", vertex.id, vertex.value, targets.join(", "))?;
            }
        }
        Ok(())
    }
}
