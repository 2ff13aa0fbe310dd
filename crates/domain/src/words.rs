use crate::errors::ParseError;
use crate::time_period::TimePeriod;
use crate::unit::TimeUnit;
use fancy_regex::Regex;
use std::sync::LazyLock;

/// `<digits><whitespace>*<unit word>`, case-insensitive, trailing 's' optional.
static UNIT_WORD_PATTERN: LazyLock<Result<Regex, fancy_regex::Error>> = LazyLock::new(|| {
    let alternatives = TimeUnit::ALL
        .iter()
        .map(|unit| format!("{}?", unit.plural_name()))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)^([0-9]+)\s*({alternatives})$"))
});

pub(crate) fn parse_as_words(input: &str) -> Result<TimePeriod, ParseError> {
    let pattern = UNIT_WORD_PATTERN
        .as_ref()
        .map_err(|e| ParseError::MatcherFailed {
            offset: 0,
            reason: e.to_string(),
        })?;

    let captures = pattern
        .captures(input)
        .map_err(|e| ParseError::MatcherFailed {
            offset: 0,
            reason: e.to_string(),
        })?;

    match captures {
        Some(captures) => {
            let amount = captures
                .get(1)
                .and_then(|m| m.as_str().parse::<u64>().ok())
                .ok_or(ParseError::NumberOutOfRange { offset: 0 })?;
            let unit_word = captures.get(2).map(|m| m.as_str()).unwrap_or_default();
            let unit = TimeUnit::parse(unit_word).ok_or(ParseError::UnrecognizedUnitWord {
                offset: captures.get(2).map_or(0, |m| m.start()),
            })?;
            Ok(TimePeriod::of(amount, unit))
        }
        None => Err(locate_failure(input)),
    }
}

/// Finds where an input that failed the whole-string match goes wrong.
///
/// First scans for the digits → whitespace → letters transition. If that is
/// found, grows a prefix from the first letter until no plural unit name
/// starts with it and reports the end of that prefix.
fn locate_failure(input: &str) -> ParseError {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let offset_of = |index: usize| chars.get(index).map_or(input.len(), |(byte, _)| *byte);

    let mut i = 0;
    let mut state = 0;
    while i < chars.len() && state < 2 {
        let c = chars[i].1;
        if (state == 0 && c.is_whitespace()) || (state == 1 && c.is_alphabetic()) {
            state += 1;
        } else if (state == 0 && c.is_alphabetic()) || (state == 1 && c.is_ascii_digit()) {
            i += 1;
            break;
        }
        i += 1;
    }

    if state < 2 {
        return ParseError::UnrecognizedUnitWord {
            offset: offset_of(i.saturating_sub(1)),
        };
    }

    let start = i - 1;
    let mut candidates: Vec<&'static str> =
        TimeUnit::ALL.iter().map(|unit| unit.plural_name()).collect();
    let mut end = start + 1;
    while end <= chars.len() {
        let prefix: String = chars[start..end]
            .iter()
            .flat_map(|(_, c)| c.to_lowercase())
            .collect();
        candidates.retain(|name| name.starts_with(&prefix));
        if candidates.is_empty() {
            break;
        }
        end += 1;
    }

    ParseError::MisspelledUnit {
        offset: offset_of(end - 1),
    }
}
