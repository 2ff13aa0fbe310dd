use crate::compiler::Segment;
use fancy_regex::Regex;
use timeperiod_domain::{ParseError, TimePeriod, TimeUnit};

/// Consumes `input` against the segments, left to right.
///
/// Numeric fields read at most `max(width, unit.max_parse_digits())`
/// digits, except for `max_unit`, which reads every digit available.
pub(crate) fn consume(
    segments: &[Segment],
    input: &str,
    max_unit: Option<TimeUnit>,
) -> Result<TimePeriod, ParseError> {
    let mut result = TimePeriod::zero();
    let mut position = 0;

    for segment in segments {
        match segment {
            Segment::Literal { matcher, .. } | Segment::Name { matcher, .. } => {
                position = match_text(matcher, input, position)?;
            }
            Segment::Number { unit, width } => {
                let limit = if max_unit == Some(*unit) {
                    None
                } else {
                    unit.max_parse_digits().map(|digits| digits.max(*width))
                };
                let digits = input[position..]
                    .bytes()
                    .take(limit.unwrap_or(usize::MAX))
                    .take_while(u8::is_ascii_digit)
                    .count();
                if digits == 0 {
                    return Err(ParseError::MissingDigits { offset: position });
                }

                let value: i64 = input[position..position + digits]
                    .parse()
                    .map_err(|_| ParseError::NumberOutOfRange { offset: position })?;
                result.set(*unit, value);
                position += digits;
            }
        }
    }

    if position != input.len() {
        return Err(ParseError::TrailingInput { offset: position });
    }
    Ok(result)
}

/// Grows a candidate one character at a time from `start`. Matching begins
/// at the first candidate the matcher accepts and ends at the first one it
/// rejects after that. Returns the end of the last accepted candidate.
fn match_text(matcher: &Regex, input: &str, start: usize) -> Result<usize, ParseError> {
    let mut matched_end = None;

    for (index, c) in input[start..].char_indices() {
        let end = start + index + c.len_utf8();
        let accepted = matcher
            .is_match(&input[start..end])
            .map_err(|e| ParseError::MatcherFailed {
                offset: start,
                reason: e.to_string(),
            })?;

        if accepted {
            matched_end = Some(end);
        } else if matched_end.is_some() {
            break;
        }
    }

    matched_end.ok_or(ParseError::UnmatchedLiteral { offset: start })
}
