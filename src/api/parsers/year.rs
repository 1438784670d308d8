/// Parse a birth year the lenient way browsers submit it.
///
/// Leading whitespace and a sign are accepted and anything after the digits
/// is ignored, so "1994abc" is 1994. No leading digits means no year.
pub fn parse_birth_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];

    let value: i32 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}
