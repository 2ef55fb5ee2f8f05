//! Parse diagnostics.

use std::path::PathBuf;

use rn_graph::GraphError;
use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

/// A section of the network description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Cities,
    Roads,
}

impl Section {
    /// The literal marker line that opens this section.
    pub fn marker(self) -> &'static str {
        match self {
            Section::Cities => "CITIES",
            Section::Roads => "ROADS",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.marker())
    }
}

/// Ways the section layout of an input can be wrong.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralIssue {
    #[error("expected CITIES header")]
    MissingCitiesHeader,

    #[error("ROADS section appears before CITIES")]
    RoadsBeforeCities,

    #[error("CITIES section appears after ROADS")]
    CitiesAfterRoads,

    #[error("{0} marker repeated")]
    RepeatedMarker(Section),

    #[error("input has no CITIES section")]
    NoCitiesSection,
}

/// The first violation found in an input. Line numbers are 1-indexed.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read {}", .path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {issue}", at_line(.line))]
    Structural {
        line: Option<usize>,
        issue: StructuralIssue,
    },

    #[error("line {line}: duplicate city '{id}'")]
    DuplicateNode { line: usize, id: String },

    #[error(
        "line {line}: malformed road '{content}' ({fields} field(s)); {}",
        malformed_road_hint(.fields)
    )]
    MalformedRoad {
        line: usize,
        content: String,
        fields: usize,
    },

    #[error("line {line}: invalid weight '{value}'; expected a non-negative integer")]
    InvalidWeight { line: usize, value: String },

    #[error("line {line}: unknown city '{id}'; declare it in the CITIES section")]
    UnknownCity { line: usize, id: String },

    #[error("line {line}: {source}")]
    Graph { line: usize, source: GraphError },
}

impl ParseError {
    /// Source line the diagnostic points at, when there is one.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::FileNotFound { .. } | ParseError::FileRead { .. } => None,
            ParseError::Structural { line, .. } => *line,
            ParseError::DuplicateNode { line, .. }
            | ParseError::MalformedRoad { line, .. }
            | ParseError::InvalidWeight { line, .. }
            | ParseError::UnknownCity { line, .. }
            | ParseError::Graph { line, .. } => Some(*line),
        }
    }
}

fn malformed_road_hint(fields: &usize) -> &'static str {
    if *fields > 3 {
        "could not split into two cities; make sure both are declared in the CITIES section"
    } else {
        "expected '<from> <to> <weight>'"
    }
}

fn at_line(line: &Option<usize>) -> String {
    match line {
        Some(line) => format!("line {line}"),
        None => "end of input".to_string(),
    }
}
