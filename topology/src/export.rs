//! Rendering the discovered graph for external tooling.
//!
//! Two encodings are produced: a DOT digraph for Graphviz-style layout
//! tools and a weighted edge table for Gephi. Both close the graph over
//! the crawled peer set before rendering, and both write timestamped
//! artifacts under an explicitly configured output directory.

use crate::graph::AdjacencyMap;
use chrono::Local;
use log::{info, warn};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Filename timestamp, zero-padded to the second.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Errors that can occur while writing export artifacts.
#[derive(Debug)]
pub enum ExportError {
    /// Failed to create or write a destination file. Fatal to that
    /// export; nothing is retried.
    Io {
        /// Destination that could not be written.
        path: PathBuf,
        /// Underlying filesystem error.
        source: io::Error,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io { path, source } => {
                write!(f, "Failed to write {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io { source, .. } => Some(source),
        }
    }
}

fn artifact_path(output_dir: &Path, tag: &str, extension: &str) -> PathBuf {
    output_dir.join(format!(
        "{tag}-{}.{extension}",
        Local::now().format(TIMESTAMP_FORMAT)
    ))
}

fn write_artifact(path: &Path, contents: &str) -> Result<(), ExportError> {
    fs::write(path, contents).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Renders the topology as a DOT digraph and rasterizes it to an image.
#[derive(Debug, Clone)]
pub struct GraphExporter {
    output_dir: PathBuf,
}

impl GraphExporter {
    /// Create an exporter writing artifacts under the given directory.
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        GraphExporter {
            output_dir: output_dir.into(),
        }
    }

    /// Render the DOT text for the graph.
    ///
    /// One tab-indented edge line per (host, neighbor) pair, restricted
    /// to neighbors that were themselves crawled, between the digraph
    /// header with its pseudo-node styling directive and the closing
    /// brace.
    pub fn render(&self, adjacency: &AdjacencyMap) -> String {
        let mut out = String::from("digraph topology {\n");
        out.push_str("\t\"local\" [shape=box];\n");

        for (host, _) in adjacency.iter() {
            for neighbor in adjacency.closed_neighbors(host) {
                out.push_str(&format!("\t\"{host}\" -> \"{neighbor}\";\n"));
            }
        }

        out.push_str("}\n");
        out
    }

    /// Write the timestamped DOT artifact and invoke the rasterizer.
    ///
    /// Returns the path of the written DOT file. The rasterizer
    /// invocation is best-effort: a missing or failing `dot` binary is
    /// logged and the DOT artifact is kept either way.
    ///
    /// # Errors
    ///
    /// Failing to write the DOT file aborts the export immediately.
    pub fn export(&self, adjacency: &AdjacencyMap) -> Result<PathBuf, ExportError> {
        let path = artifact_path(&self.output_dir, "topology", "dot");
        write_artifact(&path, &self.render(adjacency))?;
        info!(
            "Wrote graph description for {} peers to {}",
            adjacency.len(),
            path.display()
        );

        rasterize(&path);
        Ok(path)
    }
}

/// Invoke the external layout tool to produce an image next to the DOT
/// file.
fn rasterize(dot_path: &Path) {
    let image_path = dot_path.with_extension("png");

    match Command::new("dot")
        .arg("-Tpng")
        .arg(dot_path)
        .arg("-o")
        .arg(&image_path)
        .status()
    {
        Ok(status) if status.success() => {
            info!("Rasterized graph to {}", image_path.display())
        }
        Ok(status) => warn!("Rasterizer exited with {status}"),
        Err(err) => warn!("Failed to run rasterizer: {err}"),
    }
}

/// Renders the topology as a Gephi-compatible weighted edge table.
#[derive(Debug, Clone)]
pub struct GephiExporter {
    output_dir: PathBuf,
}

impl GephiExporter {
    /// Create an exporter writing artifacts under the given directory.
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        GephiExporter {
            output_dir: output_dir.into(),
        }
    }

    /// Render the CSV edge table.
    ///
    /// A host's crawled neighbor at 1-based position `p` contributes an
    /// edge of weight `1/p`: the first-listed neighbor carries full
    /// weight and later ones progressively less, reflecting the priority
    /// the peer itself assigned to its connections. Weights are fixed to
    /// three decimal places.
    pub fn render(&self, adjacency: &AdjacencyMap) -> String {
        let mut out = String::from("Source,Target,Weight\n");

        for (host, _) in adjacency.iter() {
            for (index, neighbor) in adjacency.closed_neighbors(host).enumerate() {
                let weight = 1.0 / (index + 1) as f64;
                out.push_str(&format!("{host},{neighbor},{weight:.3}\n"));
            }
        }

        out
    }

    /// Write the timestamped CSV artifact, returning its path.
    ///
    /// # Errors
    ///
    /// Failing to write the file aborts the export immediately.
    pub fn export(&self, adjacency: &AdjacencyMap) -> Result<PathBuf, ExportError> {
        let path = artifact_path(&self.output_dir, "edges", "csv");
        write_artifact(&path, &self.render(adjacency))?;
        info!(
            "Wrote edge table for {} peers to {}",
            adjacency.len(),
            path.display()
        );

        Ok(path)
    }
}
