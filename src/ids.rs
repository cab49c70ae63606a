//! Parsing of human-entered id expressions.
//!
//! An id set is a comma separated list of single ids (`4`) and inclusive
//! ranges (`2-7`), e.g. `1,3-5,7`. The result is always sorted and free of
//! duplicates.

use crate::error::IdFormatError;
use std::collections::BTreeSet;
use std::str::FromStr;

/// Upper bound on how many ids a single range or a whole id set may expand to
pub const MAX_IDS: i64 = 10_000;

/// Parse a single id or an inclusive `X-Y` range
pub fn parse_id(input: &str) -> Result<Vec<i64>, IdFormatError> {
    match input.matches('-').count() {
        0 => Ok(vec![parse_number(input)?]),
        1 => {
            if input.starts_with('-') {
                return Err(IdFormatError::NegativeNumber);
            }
            if input.ends_with('-') {
                return Err(IdFormatError::MissingRangeEnd);
            }

            let (begin, end) = input
                .split_once('-')
                .ok_or(IdFormatError::MissingRangeEnd)?;
            let begin = parse_number(begin)?;
            let end = parse_number(end)?;

            if begin > end {
                return Err(IdFormatError::ReversedRange);
            }
            // both bounds are non-negative, so the span cannot overflow
            if end - begin >= MAX_IDS {
                return Err(IdFormatError::TooManyIds { max: MAX_IDS });
            }

            Ok((begin..=end).collect())
        }
        _ => Err(IdFormatError::TooManyDashes),
    }
}

/// Parse a comma separated id set such as `1,2,4-6,8` into sorted, unique ids
pub fn parse_id_set(input: &str) -> Result<Vec<i64>, IdFormatError> {
    if input.starts_with(',') {
        return Err(IdFormatError::LeadingComma);
    }
    if input.ends_with(',') {
        return Err(IdFormatError::TrailingComma);
    }
    if input.contains(",,") {
        return Err(IdFormatError::EmptySegment);
    }

    let mut ids = BTreeSet::new();
    for segment in input.split(',').filter(|s| !s.is_empty()) {
        ids.extend(parse_id(segment)?);
        if ids.len() as i64 > MAX_IDS {
            return Err(IdFormatError::TooManyIds { max: MAX_IDS });
        }
    }

    Ok(ids.into_iter().collect())
}

fn parse_number(token: &str) -> Result<i64, IdFormatError> {
    token
        .parse::<i64>()
        .map_err(|source| IdFormatError::InvalidNumber {
            token: token.to_string(),
            source,
        })
}

/// Sorted, duplicate-free ids parsed from an id set expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSet(Vec<i64>);

impl IdSet {
    pub fn ids(&self) -> &[i64] {
        &self.0
    }
}

impl FromStr for IdSet {
    type Err = IdFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_id_set(s).map(IdSet)
    }
}

impl<'a> IntoIterator for &'a IdSet {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
