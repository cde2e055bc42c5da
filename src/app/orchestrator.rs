//! Main application orchestrator.
//!
//! 1. Initializes the verbose log (unless `--quiet`).
//! 2. Validates the matrix path and loads the grid into a fresh graph.
//! 3. Runs either the interactive menu or, with `--best-only`, a single
//!    best-sum search from the first vertex.
//! 4. Exports the graph as DOT with the last best path highlighted and hands
//!    it to Graphviz unless `--no-render` is set.

use std::io;

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::menu::Menu;
use super::{verbose_eprintln, verbose_println};
use crate::export::{render_png, DotExporter};
use crate::graph::Graph;
use crate::grid;
use crate::path::{BestPath, PathExplorer};

/// Runs the application for the parsed command line.
///
/// # Errors
/// Any `AppError` returned here is fatal: an unreadable or malformed matrix,
/// a failed allocation, or an I/O failure on the terminal or the DOT file.
/// A failing Graphviz run is only reported.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(&cli.log_file) {
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                cli.log_file.display(),
                e
            );
        } else {
            verbose_println!(
                quiet_mode,
                "Verbose logging initialized to {}",
                cli.log_file.display()
            );
        }
    }

    let result = run_with_logger(&cli);
    if let Err(e) = &result {
        verbose_eprintln!(quiet_mode, "{}", e);
    }

    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!(
                "[WARNING] Failed to perform final flush of {}: {}",
                cli.log_file.display(),
                e
            );
        }
    }
    result
}

fn run_with_logger(cli: &Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    file_handler::validate_matrix_file(&cli.matrix, quiet_mode)?;

    let mut graph = Graph::with_capacity(cli.capacity)?;
    let grid = grid::load_grid_from_file(&cli.matrix, cli.delimiter, &mut graph)?;
    verbose_println!(
        quiet_mode,
        "Loaded {} ({} x {}): {} vertices, {} edges",
        cli.matrix.display(),
        grid.rows(),
        grid.cols(),
        graph.len(),
        graph.edge_count()
    );

    let best = if cli.best_only {
        let best = PathExplorer::best_sum_path(&graph, 0)?;
        print_best(&best);
        Some(best)
    } else {
        let stdin = io::stdin();
        let stdout = io::stdout();
        Menu::new(&mut graph, stdin.lock(), stdout.lock(), quiet_mode).run()?
    };

    export(cli, &graph, best.as_ref())
}

/// Prints the result in the same shape as the non-interactive run always has:
/// the sum, then the 0-based vertex ids separated by spaces.
fn print_best(best: &BestPath) {
    println!("Largest vertex-value sum: {}", best.sum);
    let ids: Vec<String> = best.path.iter().map(|id| id.to_string()).collect();
    println!("Path with the largest sum: {}", ids.join(" "));
}

fn export(cli: &Cli, graph: &Graph, best: Option<&BestPath>) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;
    let dot = DotExporter::render(graph, best.map(|b| b.path.as_slice()))?;

    file_handler::write_content_to_file(&cli.dot, &dot).map_err(|e| {
        verbose_eprintln!(
            quiet_mode,
            "[ERROR] Failed to write DOT file ({}): {}",
            cli.dot.display(),
            e
        );
        AppError::Io(e)
    })?;
    verbose_println!(quiet_mode, "[INFO] Graph written to {}", cli.dot.display());

    if cli.no_render {
        return Ok(());
    }
    match render_png(&cli.dot, &cli.png) {
        Ok(()) => {
            verbose_println!(quiet_mode, "[INFO] Rendered {}", cli.png.display());
        }
        Err(e) => {
            eprintln!("Warning: {}. The DOT file is still at {}.", e, cli.dot.display());
            verbose_eprintln!(quiet_mode, "{}", e);
        }
    }
    Ok(())
}
