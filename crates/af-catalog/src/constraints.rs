//! Parsing of human-written constraint strings such as `"< 5ms"` or `"100K RPS"`.

/// Locate the first run of ASCII digits in `s`, returning its value and the byte
/// offset just past it. Values too large for `u64` saturate.
fn first_digit_run(s: &str) -> Option<(u64, usize)> {
    let bytes = s.as_bytes();
    let start = bytes.iter().position(u8::is_ascii_digit)?;
    let mut value: u64 = 0;
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        value = value
            .saturating_mul(10)
            .saturating_add(u64::from(bytes[end] - b'0'));
        end += 1;
    }
    Some((value, end))
}

/// Value of the first integer substring, e.g. `"< 5ms"` → `5`.
pub fn parse_leading_integer(s: &str) -> Option<u64> {
    first_digit_run(s).map(|(value, _)| value)
}

/// Parse a throughput string of the form `<integer><optional K|M>`.
///
/// The first integer is scaled by 1 000 when immediately followed by `K` and by
/// 1 000 000 when followed by `M`; any other suffix leaves it unscaled.
/// Returns `None` when the string contains no digits.
pub fn parse_throughput(s: &str) -> Option<u64> {
    let (value, end) = first_digit_run(s)?;
    let scale = match s.as_bytes().get(end) {
        Some(b'K') => 1_000,
        Some(b'M') => 1_000_000,
        _ => 1,
    };
    Some(value.saturating_mul(scale))
}
