use std::collections::HashSet;
use std::fmt::{self, Write};
use std::path::Path;
use std::process::Command;

use super::error::RenderError;
use crate::graph::Graph;

/// Name of the Graphviz executable used to turn DOT text into an image.
pub const DOT_TOOL: &str = "dot";

const HIGHLIGHT_EDGE_ATTRS: &str = "color=red, penwidth=2.0";
const HIGHLIGHT_NODE_ATTRS: &str = "style=filled, fillcolor=lightblue";

/// Renders a `Graph` as Graphviz DOT text.
pub struct DotExporter;

impl DotExporter {
    /// Produces a `digraph` with one node statement per vertex (labelled
    /// with its value) and one edge statement per adjacency entry.
    ///
    /// When `highlight` is given, every edge whose `(from, to)` pair appears
    /// consecutively in it is drawn in red and the vertices on it are
    /// filled. Without a highlight all edges look the same.
    ///
    /// # Errors
    /// Only fails if formatting into the buffer fails.
    pub fn render(graph: &Graph, highlight: Option<&[usize]>) -> Result<String, fmt::Error> {
        let path = highlight.unwrap_or(&[]);
        let on_path: HashSet<usize> = path.iter().copied().collect();
        let path_edges: HashSet<(usize, usize)> =
            path.windows(2).map(|pair| (pair[0], pair[1])).collect();

        // Rough guess: one short line per vertex and per edge.
        let mut out = String::with_capacity(32 * (graph.len() + graph.edge_count()) + 16);
        out.push_str("digraph G {\n");

        for vertex in graph.vertices() {
            if on_path.contains(&vertex.id()) {
                writeln!(
                    out,
                    "    {} [label=\"{}\", {}];",
                    vertex.id(),
                    vertex.value(),
                    HIGHLIGHT_NODE_ATTRS
                )?;
            } else {
                writeln!(out, "    {} [label=\"{}\"];", vertex.id(), vertex.value())?;
            }
        }

        for (from, to) in graph.edges() {
            if path_edges.contains(&(from, to)) {
                writeln!(out, "    {} -> {} [{}];", from, to, HIGHLIGHT_EDGE_ATTRS)?;
            } else {
                writeln!(out, "    {} -> {};", from, to)?;
            }
        }

        out.push_str("}\n");
        Ok(out)
    }
}

/// Runs `dot -Tpng <dot_path> -o <png_path>`.
pub fn render_png(dot_path: &Path, png_path: &Path) -> Result<(), RenderError> {
    let status = Command::new(DOT_TOOL)
        .arg("-Tpng")
        .arg(dot_path)
        .arg("-o")
        .arg(png_path)
        .status()
        .map_err(|source| RenderError::Spawn {
            tool: DOT_TOOL.to_string(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(RenderError::ToolFailed {
            tool: DOT_TOOL.to_string(),
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Graph {
        let mut g = Graph::with_capacity(4).unwrap();
        for v in 1..=4 {
            g.add_vertex_at_end(v).unwrap();
        }
        for (from, to) in [(0, 1), (0, 2), (1, 3), (2, 3)] {
            g.add_edge(from, to).unwrap();
        }
        g
    }

    #[test]
    fn renders_plain_graph() {
        let dot = DotExporter::render(&square(), None).unwrap();
        assert_eq!(
            dot,
            "digraph G {\n\
             \x20   0 [label=\"1\"];\n\
             \x20   1 [label=\"2\"];\n\
             \x20   2 [label=\"3\"];\n\
             \x20   3 [label=\"4\"];\n\
             \x20   0 -> 1;\n\
             \x20   0 -> 2;\n\
             \x20   1 -> 3;\n\
             \x20   2 -> 3;\n\
             }\n"
        );
    }

    #[test]
    fn highlights_consecutive_path_edges_only() {
        let dot = DotExporter::render(&square(), Some(&[0, 2, 3][..])).unwrap();
        assert!(dot.contains("    0 -> 2 [color=red, penwidth=2.0];\n"));
        assert!(dot.contains("    2 -> 3 [color=red, penwidth=2.0];\n"));
        assert!(dot.contains("    0 -> 1;\n"));
        assert!(dot.contains("    1 -> 3;\n"));
        assert!(dot.contains("    2 [label=\"3\", style=filled, fillcolor=lightblue];\n"));
        assert!(dot.contains("    1 [label=\"2\"];\n"));
    }

    #[test]
    fn empty_highlight_matches_plain_render() {
        let g = square();
        assert_eq!(
            DotExporter::render(&g, Some(&[][..])).unwrap(),
            DotExporter::render(&g, None).unwrap()
        );
    }

    #[test]
    fn empty_graph_renders_empty_digraph() {
        let g = Graph::with_capacity(1).unwrap();
        assert_eq!(DotExporter::render(&g, None).unwrap(), "digraph G {\n}\n");
    }
}
