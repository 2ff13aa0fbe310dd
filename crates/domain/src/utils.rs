/// Decimal form of `number`, left-padded with zeros to at least `min_width`
/// characters. Wider numbers are returned as-is.
pub fn pad_with_zeros(number: u64, min_width: usize) -> String {
    format!("{number:0min_width$}")
}
