//! Room record parsing
//!
//! One room per line, three numeric fields separated by a delimiter.
//! Splitting follows the classic `split` contract: greedy non-overlapping
//! matches, fields are not trimmed, and trailing empty fields are dropped
//! whenever the delimiter matched at least once. A zero-width match at the
//! start of a line never produces a leading empty field.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use super::{DomainError, DomainResult, Room};

/// How the configured delimiter is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelimiterMode {
    /// Delimiter is a literal substring
    #[default]
    Literal,
    /// Delimiter is a regular expression
    Regex,
}

/// Compiled field separator.
#[derive(Debug, Clone)]
pub enum Splitter {
    Literal(String),
    Regex(Regex),
}

impl Splitter {
    /// Compile `delimiter` according to `mode`.
    ///
    /// An empty delimiter or an invalid pattern fails with
    /// [`DomainError::InvalidDelimiter`].
    pub fn new(delimiter: &str, mode: DelimiterMode) -> DomainResult<Self> {
        if delimiter.is_empty() {
            return Err(DomainError::InvalidDelimiter {
                delimiter: delimiter.to_string(),
                reason: "delimiter must not be empty".into(),
            });
        }
        match mode {
            DelimiterMode::Literal => Ok(Self::Literal(delimiter.to_string())),
            DelimiterMode::Regex => Regex::new(delimiter)
                .map(Self::Regex)
                .map_err(|e| DomainError::InvalidDelimiter {
                    delimiter: delimiter.to_string(),
                    reason: e.to_string(),
                }),
        }
    }

    /// Delimiter text as configured.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(s) => s,
            Self::Regex(re) => re.as_str(),
        }
    }

    /// Split `line` into fields.
    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        let mut fields: Vec<&str> = match self {
            Self::Literal(s) => line.split(s.as_str()).collect(),
            Self::Regex(re) => {
                let mut fields: Vec<&str> = re.split(line).collect();
                let leading_empty_match = re
                    .find(line)
                    .is_some_and(|m| m.start() == 0 && m.end() == 0);
                if leading_empty_match && fields.len() > 1 && fields[0].is_empty() {
                    fields.remove(0);
                }
                fields
            }
        };
        if fields.len() > 1 {
            while fields.last().is_some_and(|f| f.is_empty()) {
                fields.pop();
            }
        }
        fields
    }
}

/// Parse one line into the room at `position`.
///
/// Fields that are not finite numbers (`inf`, `NaN`) are rejected.
pub fn parse_room_line(line: &str, position: usize, splitter: &Splitter) -> DomainResult<Room> {
    let fields = splitter.split(line);
    trace!(position, ?fields, "split line");

    let dimensions = fields
        .iter()
        .map(|field| {
            field
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| DomainError::RoomParse {
                    line: line.to_string(),
                    delimiter: splitter.as_str().to_string(),
                    field: field.to_string(),
                })
        })
        .collect::<DomainResult<Vec<f64>>>()?;

    Room::from_dimensions(position, &dimensions)
}

/// Line-oriented room parser.
#[derive(Debug, Clone)]
pub struct RoomParser {
    splitter: Splitter,
    skip_blank_lines: bool,
}

impl RoomParser {
    pub fn new(splitter: Splitter) -> Self {
        Self {
            splitter,
            skip_blank_lines: false,
        }
    }

    /// Skip whitespace-only lines instead of failing on them.
    ///
    /// Positions still count every physical line.
    pub fn skip_blank_lines(mut self, skip: bool) -> Self {
        self.skip_blank_lines = skip;
        self
    }

    /// Parse all lines, first line at position 1.
    ///
    /// Stops at the first bad line; no partial result is returned.
    #[instrument(level = "debug", skip(self, lines), fields(delimiter = self.splitter.as_str()))]
    pub fn parse<I, S>(&self, lines: I) -> DomainResult<Vec<Room>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rooms = Vec::new();
        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            if self.skip_blank_lines && line.trim().is_empty() {
                trace!(position = index + 1, "skipping blank line");
                continue;
            }
            rooms.push(parse_room_line(line, index + 1, &self.splitter)?);
        }
        debug!("parsed {} rooms", rooms.len());
        Ok(rooms)
    }
}

/// Parse lines with a literal delimiter.
pub fn parse_rooms<I, S>(lines: I, delimiter: &str) -> DomainResult<Vec<Room>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let splitter = Splitter::new(delimiter, DelimiterMode::Literal)?;
    RoomParser::new(splitter).parse(lines)
}
