// Leaf entries as written by the plant model.
//
// A token looks like `(3,12.5,0.04,45.0,81.0)`: one wrapper character on
// each side of five comma separated fields.

use std::str::FromStr;

use crate::error::{Error, LeafError, Result};

// Age, weight and angle are carried along but not drawn.
#[allow(dead_code)]
#[derive(Clone, Debug, PartialEq)]
pub struct LeafEntry {
    pub index: u32,
    pub age: f64,
    pub weight: f64,
    pub angle: f64,
    pub area: f64,
}

impl LeafEntry {
    pub fn from_token(token: &str) -> std::result::Result<LeafEntry, LeafError> {
        let mut chars = token.chars();
        if chars.next().is_none() {
            return Err(LeafError::Empty);
        }
        // Drop the trailing wrapper from the whole token; it always follows
        // the area field.
        if chars.next_back().is_none() {
            return Err(LeafError::Empty);
        }
        let fields: Vec<&str> = chars.as_str().split(',').collect();
        if fields.len() != 5 {
            return Err(LeafError::FieldCount {
                found: fields.len(),
            });
        }

        let index = fields[0].parse::<u32>().map_err(|_| LeafError::Index {
            value: fields[0].to_string(),
        })?;
        let area = number("area", fields[4])?;
        if !area.is_finite() || area < 0.0 {
            return Err(LeafError::NegativeArea { area });
        }

        Ok(LeafEntry {
            index,
            age: number("age", fields[1])?,
            weight: number("weight", fields[2])?,
            angle: number("angle", fields[3])?,
            area,
        })
    }
}

impl FromStr for LeafEntry {
    type Err = LeafError;

    fn from_str(token: &str) -> std::result::Result<Self, Self::Err> {
        LeafEntry::from_token(token)
    }
}

fn number(name: &'static str, value: &str) -> std::result::Result<f64, LeafError> {
    value.parse::<f64>().map_err(|_| LeafError::Field {
        name,
        value: value.to_string(),
    })
}

/// Leaves on one log line. A line with a single token (or none) is a
/// placeholder for a timestep without leaves.
pub fn parse_record(text: &str, line: usize) -> Result<Vec<LeafEntry>> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() <= 1 {
        return Ok(Vec::new());
    }
    tokens
        .into_iter()
        .map(|token| {
            token.parse::<LeafEntry>().map_err(|source| Error::MalformedLeaf {
                line,
                token: token.to_string(),
                source,
            })
        })
        .collect()
}
