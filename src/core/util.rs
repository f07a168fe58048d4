//! Line cleaning for report entries

/// Chop a line at the limit, or at nearly the last space, adding `...` when
/// anything was cut.
///
/// Lengths are counted in characters. The break point is the last space when
/// it lies past `limit - floor(len * 0.1)`, otherwise `limit`; the kept prefix
/// ends three characters before the break point. A negative prefix end counts
/// back from the end of the line.
pub fn chop_line(line: &str, limit: usize) -> String {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len() as i64;
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);

    if len <= limit {
        return line.to_string();
    }

    let last_space = chars
        .iter()
        .rposition(|&c| c == ' ')
        .map(|idx| idx as i64)
        .unwrap_or(-1);
    let threshold = limit - (len as f64 * 0.1) as i64;
    let break_point = if last_space > threshold {
        last_space
    } else {
        limit
    };

    let end = break_point - 3;
    let end = if end < 0 { (len + end).max(0) } else { end.min(len) };

    let mut chopped: String = chars[..end as usize].iter().collect();
    chopped.push_str("...");
    chopped
}

/// Clean a raw line for display: strip surrounding whitespace, then chop it
/// to `limit`. Comment markers are kept as-is.
pub fn clean_line(raw: &str, limit: usize) -> String {
    chop_line(raw.trim(), limit)
}
