use crate::compiler::{NameStyle, Segment};
use timeperiod_domain::{pad_with_zeros, TimePeriod, TimeUnit};

/// Renders `period` segment by segment. Works on a normalized copy folded
/// into `max_unit`, so the caller's value is left untouched.
pub(crate) fn render(
    segments: &[Segment],
    period: &TimePeriod,
    max_unit: Option<TimeUnit>,
) -> String {
    let mut period = period.normalized();
    if let Some(unit) = max_unit {
        period.denormalize(unit);
    }

    let mut output = String::new();
    for segment in segments {
        match segment {
            Segment::Literal { text, .. } => output.push_str(text),
            Segment::Number { unit, width } => {
                output.push_str(&pad_with_zeros(period.denormalized(*unit), *width));
            }
            Segment::Name {
                unit,
                style,
                suffix,
                ..
            } => {
                let name = match style {
                    NameStyle::Abbreviation => unit.abbreviation(),
                    NameStyle::FullName => unit.name_for(period.denormalized(*unit)),
                };
                output.push_str(name);
                output.push_str(suffix);
            }
        }
    }
    output
}
