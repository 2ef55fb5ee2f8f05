//! Road line tokenization.
//!
//! A road line is `<from> <to> <weight>`. City names may contain spaces, so
//! the last token is the weight and the remaining tokens are split into the
//! two endpoints at the first boundary where both halves are declared cities.

use rn_graph::{Graph, Weight};

use crate::error::{ParseError, ParseResult};

/// A validated road whose endpoints both exist in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Road {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

/// Tokenize and validate one road line against the declared cities.
pub fn parse_road(line: usize, content: &str, graph: &Graph) -> ParseResult<Road> {
    let tokens: Vec<&str> = content.split_whitespace().collect();
    let malformed = || ParseError::MalformedRoad {
        line,
        content: content.to_string(),
        fields: tokens.len(),
    };

    let (weight_token, names) = match tokens.split_last() {
        Some((weight, names)) if names.len() >= 2 => (*weight, names),
        _ => return Err(malformed()),
    };

    let (from, to, weight) = match names {
        [from, to] => {
            let weight = parse_weight(line, weight_token)?;
            for id in [from, to] {
                if !graph.contains_node(id) {
                    return Err(ParseError::UnknownCity {
                        line,
                        id: id.to_string(),
                    });
                }
            }
            (from.to_string(), to.to_string(), weight)
        }
        // Extra fields only make sense as multi-word names.
        _ => {
            let (from, to) = split_endpoints(names, graph).ok_or_else(malformed)?;
            (from, to, parse_weight(line, weight_token)?)
        }
    };

    Ok(Road { from, to, weight })
}

/// Parse a weight token as a non-negative integer.
pub fn parse_weight(line: usize, token: &str) -> ParseResult<Weight> {
    token.parse().map_err(|_| ParseError::InvalidWeight {
        line,
        value: token.to_string(),
    })
}

fn split_endpoints(names: &[&str], graph: &Graph) -> Option<(String, String)> {
    (1..names.len())
        .map(|at| names.split_at(at))
        .map(|(from, to)| (from.join(" "), to.join(" ")))
        .find(|(from, to)| graph.contains_node(from) && graph.contains_node(to))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities(names: &[&str]) -> Graph {
        let mut g = Graph::new();
        for n in names {
            g.add_node(*n).unwrap();
        }
        g
    }

    #[test]
    fn three_fields() {
        let g = cities(&["A", "B"]);
        assert_eq!(
            parse_road(3, "A B 5", &g).unwrap(),
            Road {
                from: "A".into(),
                to: "B".into(),
                weight: 5
            }
        );
    }

    #[test]
    fn multiword_names_split_on_declared_cities() {
        let g = cities(&["New York", "Los Angeles"]);
        let road = parse_road(1, "New York   Los Angeles 3000", &g).unwrap();
        assert_eq!(road.from, "New York");
        assert_eq!(road.to, "Los Angeles");
        assert_eq!(road.weight, 3000);
    }

    #[test]
    fn too_few_fields() {
        let g = cities(&["A", "B"]);
        assert!(matches!(
            parse_road(4, "A B", &g),
            Err(ParseError::MalformedRoad { line: 4, fields: 2, .. })
        ));
        assert!(matches!(
            parse_road(4, "", &g),
            Err(ParseError::MalformedRoad { fields: 0, .. })
        ));
    }

    #[test]
    fn unresolvable_extra_fields() {
        let g = cities(&["A", "B"]);
        assert!(matches!(
            parse_road(9, "A B C 5", &g),
            Err(ParseError::MalformedRoad { line: 9, fields: 4, .. })
        ));
    }

    #[test]
    fn unresolvable_extra_fields_take_precedence_over_weight() {
        let g = cities(&["A", "B", "C"]);
        assert!(matches!(
            parse_road(6, "A B C x", &g),
            Err(ParseError::MalformedRoad { line: 6, fields: 4, .. })
        ));
    }

    #[test]
    fn multiword_names_with_bad_weight() {
        let g = cities(&["New York", "Boston"]);
        match parse_road(2, "New York Boston abc", &g) {
            Err(ParseError::InvalidWeight { line: 2, value }) => assert_eq!(value, "abc"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn multiword_undeclared_city_hints_at_declaration() {
        let g = cities(&["New York", "Boston"]);
        let err = parse_road(4, "New York Denver 5", &g).unwrap_err();
        assert!(matches!(err, ParseError::MalformedRoad { line: 4, fields: 4, .. }));
        assert!(err.to_string().contains("declared in the CITIES section"));
    }

    #[test]
    fn unknown_city_names_source_first() {
        let g = cities(&["A"]);
        match parse_road(2, "X Y 1", &g) {
            Err(ParseError::UnknownCity { line: 2, id }) => assert_eq!(id, "X"),
            other => panic!("unexpected: {other:?}"),
        }
        match parse_road(2, "A Y 1", &g) {
            Err(ParseError::UnknownCity { id, .. }) => assert_eq!(id, "Y"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn weight_must_be_non_negative_integer() {
        let g = cities(&["A", "B"]);
        for bad in ["-5", "abc", "1.5", "99999999999999999999999"] {
            match parse_road(6, &format!("A B {bad}"), &g) {
                Err(ParseError::InvalidWeight { line: 6, value }) => assert_eq!(value, bad),
                other => panic!("unexpected for {bad}: {other:?}"),
            }
        }
        assert_eq!(parse_weight(1, "+7").unwrap(), 7);
        assert_eq!(parse_weight(1, "0").unwrap(), 0);
    }

    #[test]
    fn weight_checked_before_cities() {
        let g = cities(&["A"]);
        assert!(matches!(
            parse_road(1, "X Y nope", &g),
            Err(ParseError::InvalidWeight { .. })
        ));
    }
}
