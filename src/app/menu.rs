//! Interactive text menu over a loaded graph.
//!
//! The menu speaks 1-based vertex numbers; they are turned into 0-based ids
//! before reaching the graph. Soft graph errors (bad index, missing edge) are
//! reported and the loop carries on. Only resource failures and I/O errors on
//! the menu's own streams end it early.

use std::io::{BufRead, Write};

use super::error::AppError;
use super::{verbose_eprintln, verbose_println};
use crate::graph::{Graph, GraphError};
use crate::path::{BestPath, PathExplorer};

const MENU_TEXT: &str = "\
===== Graph menu =====
1. Update vertex value
2. Insert vertex at start
3. Insert vertex at end
4. Insert edge
5. Remove edge
6. Remove vertex
7. List all paths (first -> last vertex)
8. Best-sum path (from first vertex)
9. Show graph
0. Exit";

/// Outcome of reading one value from the input stream.
enum Input<T> {
    Value(T),
    /// Not a usable value; the user has already been told.
    Rejected,
    Eof,
}

/// The interactive loop. Borrows the graph so the caller can export it once
/// the menu has exited.
pub struct Menu<'g, R, W> {
    graph: &'g mut Graph,
    input: R,
    output: W,
    quiet_mode: bool,
    last_best: Option<BestPath>,
}

impl<'g, R: BufRead, W: Write> Menu<'g, R, W> {
    pub fn new(graph: &'g mut Graph, input: R, output: W, quiet_mode: bool) -> Self {
        Self {
            graph,
            input,
            output,
            quiet_mode,
            last_best: None,
        }
    }

    /// Runs until the user picks exit or the input ends, and returns the last
    /// best-sum path that is still valid for the graph.
    pub fn run(mut self) -> Result<Option<BestPath>, AppError> {
        loop {
            writeln!(self.output, "\n{}", MENU_TEXT)?;
            let choice = match self.read_number("Choice: ")? {
                Input::Value(n) => n,
                Input::Rejected => continue,
                Input::Eof => break,
            };
            verbose_println!(self.quiet_mode, "Menu choice: {}", choice);

            let keep_going = match choice {
                1 => self.update_vertex()?,
                2 => self.insert_vertex(true)?,
                3 => self.insert_vertex(false)?,
                4 => self.add_edge()?,
                5 => self.remove_edge()?,
                6 => self.remove_vertex()?,
                7 => self.list_all_paths()?,
                8 => self.best_sum()?,
                9 => {
                    write!(self.output, "{}", self.graph)?;
                    true
                }
                0 => false,
                other => {
                    writeln!(self.output, "Unknown option {}.", other)?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }
        self.output.flush()?;
        Ok(self.last_best)
    }

    // ── operations ───────────────────────────────────────────────────────────
    // Each returns Ok(false) when the input ended mid-operation.

    fn update_vertex(&mut self) -> Result<bool, AppError> {
        let id = match self.read_vertex("Vertex number: ")? {
            Input::Value(id) => id,
            Input::Rejected => return Ok(true),
            Input::Eof => return Ok(false),
        };
        let value = match self.read_value("New value: ")? {
            Input::Value(v) => v,
            Input::Rejected => return Ok(true),
            Input::Eof => return Ok(false),
        };
        match self.graph.update_vertex_value(id, value) {
            Ok(old) => {
                verbose_println!(self.quiet_mode, "Vertex {} value {} -> {}", id, old, value);
                writeln!(self.output, "Vertex {} updated: {} -> {}.", id + 1, old, value)?;
            }
            Err(e) => self.report(e)?,
        }
        Ok(true)
    }

    fn insert_vertex(&mut self, at_start: bool) -> Result<bool, AppError> {
        let value = match self.read_value("Value: ")? {
            Input::Value(v) => v,
            Input::Rejected => return Ok(true),
            Input::Eof => return Ok(false),
        };
        let id = if at_start {
            self.graph.add_vertex_at_start(value)?
        } else {
            self.graph.add_vertex_at_end(value)?
        };
        self.forget_best_path();
        verbose_println!(self.quiet_mode, "Inserted vertex {} with value {}", id, value);
        writeln!(self.output, "Vertex {} inserted with value {}.", id + 1, value)?;
        Ok(true)
    }

    fn add_edge(&mut self) -> Result<bool, AppError> {
        let (from, to) = match self.read_edge()? {
            Input::Value(pair) => pair,
            Input::Rejected => return Ok(true),
            Input::Eof => return Ok(false),
        };
        match self.graph.add_edge(from, to) {
            Ok(()) => {
                verbose_println!(self.quiet_mode, "Added edge {} -> {}", from, to);
                writeln!(self.output, "Edge {} -> {} added.", from + 1, to + 1)?;
            }
            Err(e) => self.report(e)?,
        }
        Ok(true)
    }

    fn remove_edge(&mut self) -> Result<bool, AppError> {
        let (from, to) = match self.read_edge()? {
            Input::Value(pair) => pair,
            Input::Rejected => return Ok(true),
            Input::Eof => return Ok(false),
        };
        match self.graph.remove_edge(from, to) {
            Ok(()) => {
                verbose_println!(self.quiet_mode, "Removed edge {} -> {}", from, to);
                writeln!(self.output, "Edge {} -> {} removed.", from + 1, to + 1)?;
            }
            Err(e) => self.report(e)?,
        }
        Ok(true)
    }

    fn remove_vertex(&mut self) -> Result<bool, AppError> {
        let id = match self.read_vertex("Vertex number: ")? {
            Input::Value(id) => id,
            Input::Rejected => return Ok(true),
            Input::Eof => return Ok(false),
        };
        match self.graph.remove_vertex(id) {
            Ok(value) => {
                self.forget_best_path();
                verbose_println!(self.quiet_mode, "Removed vertex {} (value {})", id, value);
                writeln!(self.output, "Vertex {} (value {}) removed.", id + 1, value)?;
            }
            Err(e) => self.report(e)?,
        }
        Ok(true)
    }

    fn list_all_paths(&mut self) -> Result<bool, AppError> {
        if self.graph.is_empty() {
            writeln!(self.output, "The graph is empty.")?;
            return Ok(true);
        }
        let last = self.graph.len() - 1;
        writeln!(self.output, "Paths from vertex 1 to vertex {}:", last + 1)?;
        let count = PathExplorer::write_all_paths(self.graph, 0, last, &mut self.output)?;
        verbose_println!(self.quiet_mode, "Enumerated {} path(s) from 0 to {}", count, last);
        writeln!(self.output, "{} path(s) found.", count)?;
        Ok(true)
    }

    fn best_sum(&mut self) -> Result<bool, AppError> {
        if self.graph.is_empty() {
            writeln!(self.output, "The graph is empty.")?;
            return Ok(true);
        }
        let best = PathExplorer::best_sum_path(self.graph, 0)?;
        writeln!(self.output, "Largest vertex-value sum: {}", best.sum)?;
        writeln!(self.output, "Path: {}", describe_path(self.graph, &best))?;
        verbose_println!(self.quiet_mode, "Best sum {} along {:?}", best.sum, best.path);
        self.last_best = Some(best);
        Ok(true)
    }

    // ── helpers ──────────────────────────────────────────────────────────────

    /// Ids in a remembered path go stale once vertices shift.
    fn forget_best_path(&mut self) {
        if self.last_best.take().is_some() {
            verbose_println!(self.quiet_mode, "Discarded best path after structural change");
        }
    }

    /// Prints a soft graph error with 1-based numbers, or propagates a fatal one.
    fn report(&mut self, error: GraphError) -> Result<(), AppError> {
        verbose_eprintln!(self.quiet_mode, "{}", error);
        match error {
            GraphError::InvalidIndex { index, len } => writeln!(
                self.output,
                "Invalid index {}: choose a vertex between 1 and {}.",
                index + 1,
                len
            )?,
            GraphError::EdgeNotFound { from, to } => {
                writeln!(self.output, "No edge found from {} to {}.", from + 1, to + 1)?
            }
            fatal => return Err(fatal.into()),
        }
        Ok(())
    }

    fn read_edge(&mut self) -> Result<Input<(usize, usize)>, AppError> {
        let from = match self.read_vertex("From vertex: ")? {
            Input::Value(id) => id,
            Input::Rejected => return Ok(Input::Rejected),
            Input::Eof => return Ok(Input::Eof),
        };
        match self.read_vertex("To vertex: ")? {
            Input::Value(to) => Ok(Input::Value((from, to))),
            Input::Rejected => Ok(Input::Rejected),
            Input::Eof => Ok(Input::Eof),
        }
    }

    /// Reads a 1-based vertex number and returns the 0-based id. Range
    /// against the graph is left to the graph itself.
    fn read_vertex(&mut self, prompt: &str) -> Result<Input<usize>, AppError> {
        match self.read_number(prompt)? {
            Input::Value(n) if n >= 1 => match usize::try_from(n - 1) {
                Ok(id) => Ok(Input::Value(id)),
                Err(_) => self.reject_vertex(n),
            },
            Input::Value(n) => self.reject_vertex(n),
            Input::Rejected => Ok(Input::Rejected),
            Input::Eof => Ok(Input::Eof),
        }
    }

    fn reject_vertex(&mut self, n: i64) -> Result<Input<usize>, AppError> {
        writeln!(
            self.output,
            "Invalid index {}: choose a vertex between 1 and {}.",
            n,
            self.graph.len()
        )?;
        Ok(Input::Rejected)
    }

    /// Vertex values are `i32`; anything wider is turned away here.
    fn read_value(&mut self, prompt: &str) -> Result<Input<i32>, AppError> {
        match self.read_number(prompt)? {
            Input::Value(n) => match i32::try_from(n) {
                Ok(v) => Ok(Input::Value(v)),
                Err(_) => {
                    writeln!(
                        self.output,
                        "'{}' is out of range: values must lie between {} and {}.",
                        n,
                        i32::MIN,
                        i32::MAX
                    )?;
                    Ok(Input::Rejected)
                }
            },
            Input::Rejected => Ok(Input::Rejected),
            Input::Eof => Ok(Input::Eof),
        }
    }

    fn read_number(&mut self, prompt: &str) -> Result<Input<i64>, AppError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Input::Eof);
        }
        match line.trim().parse::<i64>() {
            Ok(n) => Ok(Input::Value(n)),
            Err(_) => {
                writeln!(self.output, "'{}' is not a whole number.", line.trim())?;
                Ok(Input::Rejected)
            }
        }
    }
}

/// `1 -> 3 -> 4 (values: 1, 3, 4)` with 1-based vertex numbers.
fn describe_path(graph: &Graph, best: &BestPath) -> String {
    if best.is_empty() {
        return "(none: no prefix reaches a positive sum)".to_string();
    }
    let numbers: Vec<String> = best.path.iter().map(|id| (id + 1).to_string()).collect();
    let values: Vec<String> = best
        .path
        .iter()
        .filter_map(|&id| graph.vertex(id))
        .map(|v| v.value().to_string())
        .collect();
    format!("{} (values: {})", numbers.join(" -> "), values.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> Graph {
        let mut g = Graph::with_capacity(4).unwrap();
        for v in 1..=4 {
            g.add_vertex_at_end(v).unwrap();
        }
        for (from, to) in [(0, 1), (0, 2), (1, 3), (2, 3)] {
            g.add_edge(from, to).unwrap();
        }
        g
    }

    fn run_script(graph: &mut Graph, script: &str) -> (Option<BestPath>, String) {
        let mut out = Vec::new();
        let best = Menu::new(graph, script.as_bytes(), &mut out, true)
            .run()
            .unwrap();
        (best, String::from_utf8(out).unwrap())
    }

    #[test]
    fn best_sum_is_remembered_on_exit() {
        let mut g = two_by_two();
        let (best, out) = run_script(&mut g, "8\n0\n");
        assert!(out.contains("Largest vertex-value sum: 8"));
        assert!(out.contains("Path: 1 -> 3 -> 4 (values: 1, 3, 4)"));
        assert_eq!(best.unwrap().path, vec![0, 2, 3]);
    }

    #[test]
    fn one_based_numbers_reach_the_graph_as_ids() {
        let mut g = two_by_two();
        run_script(&mut g, "1\n2\n20\n5\n1\n2\n0\n");
        assert_eq!(g.vertex(1).unwrap().value(), 20);
        assert_eq!(g.neighbors(0).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn soft_errors_keep_the_loop_alive() {
        let mut g = two_by_two();
        let (_, out) = run_script(&mut g, "6\n9\n5\n4\n1\n4\n0\nabc\n3\n7\n0\n");
        assert!(out.contains("Invalid index 9: choose a vertex between 1 and 4."));
        assert!(out.contains("No edge found from 4 to 1."));
        assert!(out.contains("Invalid index 0: choose a vertex between 1 and 4."));
        assert!(out.contains("'abc' is not a whole number."));
        assert_eq!(g.len(), 5);
        assert_eq!(g.vertex(4).unwrap().value(), 7);
    }

    #[test]
    fn values_outside_i32_are_turned_away() {
        let mut g = two_by_two();
        let (_, out) = run_script(&mut g, "3\n9223372036854775807\n1\n1\n-2147483649\n0\n");
        assert!(out.contains("'9223372036854775807' is out of range"));
        assert!(out.contains("'-2147483649' is out of range"));
        assert_eq!(g.len(), 4);
        assert_eq!(g.vertex(0).unwrap().value(), 1);
    }

    #[test]
    fn structural_change_forgets_best_path() {
        let mut g = two_by_two();
        let (best, _) = run_script(&mut g, "8\n2\n5\n0\n");
        assert!(best.is_none());
        assert_eq!(g.vertex(0).unwrap().value(), 5);
    }

    #[test]
    fn lists_paths_from_first_to_last() {
        let mut g = two_by_two();
        let (_, out) = run_script(&mut g, "7\n0\n");
        assert!(out.contains("Path 1: 1 -> 2 -> 4 (sum = 7)"));
        assert!(out.contains("Path 2: 1 -> 3 -> 4 (sum = 8)"));
        assert!(out.contains("2 path(s) found."));
    }

    #[test]
    fn end_of_input_exits() {
        let mut g = two_by_two();
        let (best, _) = run_script(&mut g, "3\n");
        assert!(best.is_none());
        assert_eq!(g.len(), 4);
    }

    #[test]
    fn remove_vertex_then_show() {
        let mut g = two_by_two();
        let (_, out) = run_script(&mut g, "6\n1\n9\n0\n");
        assert!(out.contains("Vertex 1 (value 1) removed."));
        assert!(out.contains("[0] 2 -> 2\n[1] 3 -> 2\n[2] 4\n"));
    }
}
