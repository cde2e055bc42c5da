use clap::Parser;
use std::path::PathBuf;

use crate::grid::DEFAULT_DELIMITER;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Loads a numeric grid as a directed graph, lets you edit it and searches it for the largest vertex-value sum path.", long_about = None)]
pub struct Cli {
    /// Matrix file: one row per line, cells separated by the delimiter
    #[clap(default_value = "Matrix.txt")]
    pub matrix: PathBuf,

    /// Cell delimiter used in the matrix file
    #[clap(short, long, default_value_t = DEFAULT_DELIMITER)]
    pub delimiter: char,

    /// Number of vertices the graph holds before its storage doubles
    #[clap(long, default_value_t = 10)]
    pub capacity: usize,

    /// Where the DOT description of the graph is written on exit
    #[clap(long, default_value = "graph.dot")]
    pub dot: PathBuf,

    /// Where the rendered PNG is written on exit
    #[clap(long, default_value = "graph.png")]
    pub png: PathBuf,

    /// Skip running Graphviz on the exported DOT file
    #[clap(long)]
    pub no_render: bool,

    /// Run the best-sum search from the first vertex, export and exit without the menu
    #[clap(long)]
    pub best_only: bool,

    /// Verbose log file
    #[clap(long, default_value = "gridpath.log")]
    pub log_file: PathBuf,

    /// Suppress the verbose log file.
    #[clap(short, long)]
    pub quiet: bool,
}
