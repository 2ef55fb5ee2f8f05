//! rn-parse: validating reader for roadnet network descriptions.
//!
//! The input format has two sections in fixed order:
//!
//! ```text
//! CITIES
//! <one city per line>
//! ROADS
//! <from> <to> <weight>
//! ```
//!
//! Parsing is fail-fast: the first violation aborts with a single
//! line-numbered [`ParseError`] and no partial graph.

pub mod error;
pub mod parser;
pub mod road;

use std::path::Path;

use rn_graph::{Graph, GraphResult};
use tracing::info;

pub use error::{ParseError, ParseResult, Section, StructuralIssue};
pub use parser::{Parser, ParserState};
pub use road::Road;

/// A parsed network: the graph plus cities in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    pub graph: Graph,
    pub order: Vec<String>,
}

impl Network {
    /// Adjacency lines in declaration order.
    pub fn adjacency_lines(&self) -> GraphResult<Vec<String>> {
        self.graph.to_adjacency_lines(&self.order)
    }
}

/// Parse a complete network description held in memory.
pub fn parse_str(input: &str) -> ParseResult<Network> {
    let network = input
        .lines()
        .enumerate()
        .try_fold(Parser::new(), |parser, (i, line)| parser.feed(i + 1, line))?
        .finish()?;
    info!(
        cities = network.graph.node_count(),
        roads = network.graph.edge_count(),
        "parsed network"
    );
    Ok(network)
}

/// Read and parse the network description at `path`.
pub fn parse_file(path: &Path) -> ParseResult<Network> {
    let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => ParseError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ParseError::FileRead {
            path: path.to_path_buf(),
            source,
        },
    })?;
    parse_str(&content)
}
