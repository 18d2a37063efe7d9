//! Reads the text graph format into an in-memory graph.
//!
//! ```text
//! 3
//! a b 1
//! b c 2
//! c c 0
//! ```
//!
//! The first line declares the vertex count. Each following line is
//! `u v w`: two vertex labels and a non-negative integer weight. `u u 0`
//! registers `u` without adding an edge.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::{AdjacencyGraph, GraphBuilder};
use crate::types::error::{GraphError, GraphResult};

/// Options for the text reader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderOptions {
    /// Skip blank lines instead of rejecting them as malformed input.
    #[serde(default)]
    pub allow_blank_lines: bool,
}

/// Reader for the text graph format.
pub struct GraphReader;

impl GraphReader {
    /// Read a graph file.
    pub fn read_from_file(path: &Path, options: ReaderOptions) -> GraphResult<AdjacencyGraph> {
        let file = File::open(path)?;
        log::debug!("Reading graph from {}", path.display());
        Self::read_from(BufReader::new(file), options)
    }

    /// Read from any buffered reader.
    pub fn read_from(reader: impl BufRead, options: ReaderOptions) -> GraphResult<AdjacencyGraph> {
        let mut lines = reader.lines().enumerate().map(|(i, line)| (i + 1, line));

        let declared = loop {
            let Some((line_no, line)) = lines.next() else {
                return Err(GraphError::MalformedInput {
                    line: 1,
                    reason: "missing vertex count".to_string(),
                });
            };
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                if !options.allow_blank_lines {
                    return Err(blank_line(line_no));
                }
                continue;
            }
            break parse_vertex_count(trimmed, line_no)?;
        };

        let mut builder = GraphBuilder::new();
        let mut edge_lines = 0usize;
        for (line_no, line) in lines {
            let line = line?;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.is_empty() {
                if !options.allow_blank_lines {
                    return Err(blank_line(line_no));
                }
                continue;
            }
            let &[u, v, w] = tokens.as_slice() else {
                return Err(GraphError::MalformedInput {
                    line: line_no,
                    reason: format!("expected 3 tokens, found {}", tokens.len()),
                });
            };
            let weight: i64 = w.parse().map_err(|e| GraphError::MalformedInput {
                line: line_no,
                reason: format!("invalid weight {:?}: {}", w, e),
            })?;
            builder.insert(u, v, weight)?;
            edge_lines += 1;
        }

        if builder.vertex_count() != declared {
            return Err(GraphError::VertexCountMismatch {
                declared,
                actual: builder.vertex_count(),
            });
        }

        let graph = builder.build();
        log::info!(
            "Loaded {} vertices and {} edges ({} data lines)",
            graph.vertex_count(),
            graph.edge_count(),
            edge_lines
        );
        Ok(graph)
    }
}

fn parse_vertex_count(token: &str, line_no: usize) -> GraphResult<usize> {
    token.parse().map_err(|e| GraphError::MalformedInput {
        line: line_no,
        reason: format!("invalid vertex count {:?}: {}", token, e),
    })
}

fn blank_line(line_no: usize) -> GraphError {
    GraphError::MalformedInput {
        line: line_no,
        reason: "blank line".to_string(),
    }
}
