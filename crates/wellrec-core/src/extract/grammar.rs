//! Positional grammars for the rows that follow stimulation markers.
//!
//! Each row is split into whitespace-separated tokens and matched against an
//! ordered list of token kinds. The leading phrase (formation or treatment
//! type) is the shortest run of tokens after which the numeric tail fits, and
//! is sliced from the line so its inner spacing survives. Tokens past the end
//! of a matched row are ignored.

/// Literal token between the stage count and the volume on a date row.
pub const STAGE_SEPARATOR: &str = "I";

/// A matched date row, e.g.
/// `06/09/2015 Three Forks Second Bench 11185 20754 50 I 126978 Barrels`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRow {
    /// Raw `MM/DD/YYYY` token.
    pub date: String,
    /// Empty when the row has no formation.
    pub formation: String,
    pub top_depth: String,
    pub bottom_depth: String,
    /// `None` when the digits overflow.
    pub stages: Option<u32>,
    pub volume: String,
    pub volume_units: String,
}

/// A matched treatment row, e.g. `Sand Frac 4230380 9122 39.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreatmentRow {
    pub treatment: String,
    pub lbs_proppant: String,
    pub max_pressure: String,
    pub max_rate: String,
}

/// Parse a date row: date, formation phrase, top, bottom, stages, `I`, volume, unit.
///
/// An empty formation is accepted only when at least two whitespace characters
/// separate the date from the top depth, and only after every non-empty
/// formation has failed to fit.
pub fn parse_date_row(line: &str) -> Option<DateRow> {
    let tokens = tokenize(line);
    let (date_start, date) = *tokens.first()?;
    if !is_date_token(date) {
        return None;
    }

    let empty_formation = tokens.get(1).and_then(|&(start, _)| {
        let gap = &line[date_start + date.len()..start];
        (gap.chars().count() >= 2).then_some(1)
    });

    (2..tokens.len())
        .chain(empty_formation)
        .find_map(|split| date_row_tail(line, &tokens, split))
}

fn date_row_tail(line: &str, tokens: &[(usize, &str)], split: usize) -> Option<DateRow> {
    let tail: Vec<&str> = tokens.get(split..split + 6)?.iter().map(|&(_, t)| t).collect();
    match tail.as_slice() {
        [top, bottom, stages, separator, volume, unit]
            if is_integer(top)
                && is_integer(bottom)
                && is_integer(stages)
                && *separator == STAGE_SEPARATOR
                && is_integer(volume) =>
        {
            Some(DateRow {
                date: tokens[0].1.to_string(),
                formation: phrase(line, &tokens[1..split]).to_string(),
                top_depth: top.to_string(),
                bottom_depth: bottom.to_string(),
                stages: stages.parse().ok(),
                volume: volume.to_string(),
                volume_units: leading_word(unit)?.to_string(),
            })
        }
        _ => None,
    }
}

/// Parse a treatment row: treatment phrase, lbs proppant, max pressure, max rate.
pub fn parse_treatment_row(line: &str) -> Option<TreatmentRow> {
    let tokens = tokenize(line);

    (1..tokens.len()).find_map(|split| {
        let tail: Vec<&str> = tokens.get(split..split + 3)?.iter().map(|&(_, t)| t).collect();
        match tail.as_slice() {
            [lbs, pressure, rate] if is_integer(lbs) && is_integer(pressure) => {
                Some(TreatmentRow {
                    treatment: phrase(line, &tokens[..split]).to_string(),
                    lbs_proppant: lbs.to_string(),
                    max_pressure: pressure.to_string(),
                    max_rate: leading_rate(rate)?.to_string(),
                })
            }
            _ => None,
        }
    })
}

/// Whitespace-separated tokens with their byte offsets in `line`.
fn tokenize(line: &str) -> Vec<(usize, &str)> {
    let mut tokens = Vec::new();
    let mut start = None;
    for (i, c) in line.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                tokens.push((s, &line[s..i]));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push((s, &line[s..]));
    }
    tokens
}

/// The slice of `line` spanning `tokens`, inner whitespace kept as is.
fn phrase<'a>(line: &'a str, tokens: &[(usize, &str)]) -> &'a str {
    match (tokens.first(), tokens.last()) {
        (Some(&(start, _)), Some(&(end, last))) => &line[start..end + last.len()],
        _ => "",
    }
}

/// `MM/DD/YYYY` shape only; calendar validity is checked later.
fn is_date_token(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            _ => b.is_ascii_digit(),
        })
}

fn is_integer(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Leading word characters of a token (`Barrels,` -> `Barrels`).
fn leading_word(token: &str) -> Option<&str> {
    let end = token
        .char_indices()
        .find(|(_, c)| !(c.is_alphanumeric() || *c == '_'))
        .map_or(token.len(), |(i, _)| i);
    (end > 0).then(|| &token[..end])
}

/// Leading digits and dots of a token (`39.0*` -> `39.0`).
fn leading_rate(token: &str) -> Option<&str> {
    let end = token
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(token.len());
    (end > 0).then(|| &token[..end])
}
