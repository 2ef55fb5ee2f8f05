//! Single-pass section state machine over input lines.

use rn_graph::{Graph, GraphError};
use tracing::{debug, trace};

use crate::error::{ParseError, ParseResult, Section, StructuralIssue};
use crate::road::parse_road;
use crate::Network;

/// Where the parser is within the input.
///
/// Reaching the end of input is the `finish` call, which hands back a
/// [`Network`]; a failed `feed` consumes the parser, so there is no way to
/// keep going after an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    /// Nothing but blank lines and comments seen so far.
    ExpectCitiesHeader,
    /// Reading city declarations.
    InCities,
    /// Reading road declarations.
    InRoads,
}

/// How one input line is interpreted, independent of state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind<'a> {
    Skip,
    Marker(Section),
    Content(&'a str),
}

fn classify(raw: &str) -> LineKind<'_> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        LineKind::Skip
    } else if line == Section::Cities.marker() {
        LineKind::Marker(Section::Cities)
    } else if line == Section::Roads.marker() {
        LineKind::Marker(Section::Roads)
    } else {
        LineKind::Content(line)
    }
}

/// Incremental parser that builds a [`Graph`] as lines are fed to it.
#[derive(Debug)]
pub struct Parser {
    state: ParserState,
    graph: Graph,
    order: Vec<String>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Self {
            state: ParserState::ExpectCitiesHeader,
            graph: Graph::new(),
            order: Vec::new(),
        }
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Consume line number `line` (1-indexed).
    pub fn feed(mut self, line: usize, raw: &str) -> ParseResult<Self> {
        let structural = |issue| ParseError::Structural {
            line: Some(line),
            issue,
        };

        match (self.state, classify(raw)) {
            (_, LineKind::Skip) => trace!(line, "skip"),

            (ParserState::ExpectCitiesHeader, LineKind::Marker(Section::Cities)) => {
                self.enter(ParserState::InCities, line);
            }
            (ParserState::ExpectCitiesHeader, LineKind::Marker(Section::Roads)) => {
                return Err(structural(StructuralIssue::RoadsBeforeCities));
            }
            (ParserState::ExpectCitiesHeader, LineKind::Content(_)) => {
                return Err(structural(StructuralIssue::MissingCitiesHeader));
            }

            (ParserState::InCities, LineKind::Marker(Section::Cities)) => {
                return Err(structural(StructuralIssue::RepeatedMarker(Section::Cities)));
            }
            (ParserState::InCities, LineKind::Marker(Section::Roads)) => {
                self.enter(ParserState::InRoads, line);
            }
            (ParserState::InCities, LineKind::Content(content)) => {
                self.declare_city(line, content)?;
            }

            (ParserState::InRoads, LineKind::Marker(Section::Cities)) => {
                return Err(structural(StructuralIssue::CitiesAfterRoads));
            }
            (ParserState::InRoads, LineKind::Marker(Section::Roads)) => {
                return Err(structural(StructuralIssue::RepeatedMarker(Section::Roads)));
            }
            (ParserState::InRoads, LineKind::Content(content)) => {
                self.declare_road(line, content)?;
            }
        }

        Ok(self)
    }

    /// Finish at end of input and hand back the built network.
    pub fn finish(self) -> ParseResult<Network> {
        match self.state {
            ParserState::ExpectCitiesHeader => Err(ParseError::Structural {
                line: None,
                issue: StructuralIssue::NoCitiesSection,
            }),
            ParserState::InCities | ParserState::InRoads => Ok(Network {
                graph: self.graph,
                order: self.order,
            }),
        }
    }

    fn enter(&mut self, next: ParserState, line: usize) {
        debug!(line, from = ?self.state, to = ?next, "section transition");
        self.state = next;
    }

    fn declare_city(&mut self, line: usize, content: &str) -> ParseResult<()> {
        let id = content.split_whitespace().collect::<Vec<_>>().join(" ");
        self.graph.add_node(id.as_str()).map_err(|source| match source {
            GraphError::DuplicateNode { id } => ParseError::DuplicateNode { line, id },
            source => ParseError::Graph { line, source },
        })?;
        self.order.push(id);
        Ok(())
    }

    fn declare_road(&mut self, line: usize, content: &str) -> ParseResult<()> {
        let road = parse_road(line, content, &self.graph)?;
        self.graph
            .add_edge(&road.from, &road.to, road.weight)
            .map_err(|source| ParseError::Graph { line, source })
    }
}
