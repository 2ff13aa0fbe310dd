use crate::errors::PatternError;
use fancy_regex::Regex;
use timeperiod_domain::TimeUnit;

/// How a unit-name field is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStyle {
    /// One pattern letter: "ms", "s", "m", "h", "d", "w".
    Abbreviation,
    /// Two or more pattern letters: "hour"/"hours" depending on the value.
    FullName,
}

/// One step of a compiled pattern. Each segment carries what both the
/// formatter and the matcher need, so the two walks cannot drift apart.
#[derive(Debug, Clone)]
pub enum Segment {
    Literal {
        text: String,
        matcher: Regex,
    },
    Number {
        unit: TimeUnit,
        width: usize,
    },
    /// `suffix` is the literal text that follows the name in the template.
    /// It is recognized together with the name, so "(minute|minutes)s"
    /// accepts "minutes" as the singular name plus its suffix.
    Name {
        unit: TimeUnit,
        style: NameStyle,
        suffix: String,
        matcher: Regex,
    },
}

const QUOTE: char = '\'';

fn number_unit(c: char) -> Option<TimeUnit> {
    match c {
        'w' => Some(TimeUnit::Week),
        'd' => Some(TimeUnit::Day),
        'h' => Some(TimeUnit::Hour),
        'm' => Some(TimeUnit::Minute),
        's' => Some(TimeUnit::Second),
        'z' => Some(TimeUnit::Millisecond),
        _ => None,
    }
}

fn name_unit(c: char) -> Option<TimeUnit> {
    match c {
        'W' => Some(TimeUnit::Week),
        'D' => Some(TimeUnit::Day),
        'H' => Some(TimeUnit::Hour),
        'M' => Some(TimeUnit::Minute),
        'S' => Some(TimeUnit::Second),
        'Z' => Some(TimeUnit::Millisecond),
        _ => None,
    }
}

/// Anchored matcher accepting exactly one of `alternatives` followed by
/// `suffix`, all matched verbatim.
fn anchored(alternatives: &[&str], suffix: &str) -> Result<Regex, PatternError> {
    let body = alternatives
        .iter()
        .map(|text| fancy_regex::escape(text).into_owned())
        .collect::<Vec<_>>()
        .join("|");
    let suffix_body = fancy_regex::escape(suffix);
    Regex::new(&format!("^(?:{body}){suffix_body}$")).map_err(|source| {
        PatternError::Matcher {
            text: format!("{}{suffix}", alternatives.join("|")),
            source: Box::new(source),
        }
    })
}

fn name_segment(
    unit: TimeUnit,
    style: NameStyle,
    suffix: String,
) -> Result<Segment, PatternError> {
    let matcher = match style {
        NameStyle::Abbreviation => anchored(&[unit.abbreviation()], &suffix)?,
        NameStyle::FullName => anchored(&[unit.singular_name(), unit.plural_name()], &suffix)?,
    };
    Ok(Segment::Name {
        unit,
        style,
        suffix,
        matcher,
    })
}

/// Accumulates segments. A name field stays pending until the next field
/// or the end of the template, so it can take the literal text after it.
#[derive(Default)]
struct SegmentBuilder {
    segments: Vec<Segment>,
    literal: String,
    pending_name: Option<(TimeUnit, NameStyle)>,
}

impl SegmentBuilder {
    fn flush(&mut self) -> Result<(), PatternError> {
        let text = std::mem::take(&mut self.literal);
        if let Some((unit, style)) = self.pending_name.take() {
            self.segments.push(name_segment(unit, style, text)?);
        } else if !text.is_empty() {
            let matcher = anchored(&[text.as_str()], "")?;
            self.segments.push(Segment::Literal { text, matcher });
        }
        Ok(())
    }

    fn push_number(&mut self, unit: TimeUnit, width: usize) -> Result<(), PatternError> {
        self.flush()?;
        self.segments.push(Segment::Number { unit, width });
        Ok(())
    }

    fn push_name(&mut self, unit: TimeUnit, repeats: usize) -> Result<(), PatternError> {
        self.flush()?;
        let style = if repeats == 1 {
            NameStyle::Abbreviation
        } else {
            NameStyle::FullName
        };
        self.pending_name = Some((unit, style));
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<Segment>, PatternError> {
        self.flush()?;
        Ok(self.segments)
    }
}

/// Compiles a template into segments in one left-to-right scan.
///
/// Adjacent literal text, quoted or not, ends up in a single segment. Literal
/// text right after a name field becomes that name's suffix.
pub fn compile(pattern: &str) -> Result<Vec<Segment>, PatternError> {
    let chars: Vec<(usize, char)> = pattern.char_indices().collect();
    let mut builder = SegmentBuilder::default();

    let mut i = 0;
    while i < chars.len() {
        let (offset, c) = chars[i];

        if c == QUOTE {
            // '' inside a quoted run is one literal quote; an unterminated
            // run ends at end of pattern
            while i + 1 < chars.len() {
                let next = chars[i + 1].1;
                if next != QUOTE {
                    builder.literal.push(next);
                    i += 1;
                } else if i + 2 == chars.len() || chars[i + 2].1 != QUOTE {
                    i += 1;
                    break;
                } else {
                    builder.literal.push(QUOTE);
                    i += 2;
                }
            }
        } else if let Some(unit) = number_unit(c) {
            let repeats = run_length(&chars, i);
            i += repeats - 1;
            builder.push_number(unit, repeats)?;
        } else if let Some(unit) = name_unit(c) {
            let repeats = run_length(&chars, i);
            i += repeats - 1;
            builder.push_name(unit, repeats)?;
        } else if c.is_alphabetic() {
            return Err(PatternError::IllegalCharacter {
                character: c,
                offset,
            });
        } else {
            builder.literal.push(c);
        }

        i += 1;
    }

    builder.finish()
}

fn run_length(chars: &[(usize, char)], start: usize) -> usize {
    let c = chars[start].1;
    chars[start..].iter().take_while(|(_, next)| *next == c).count()
}
