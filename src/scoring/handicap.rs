/// Handicap strokes a player receives on one hole.
///
/// Standard allocation: `floor(handicap / 18)` strokes on every hole, plus one
/// more on holes whose stroke index is within the `handicap mod 18` remainder
/// (lowest index = hardest hole = first to receive a stroke). Handicaps are
/// not capped, so 18+ legitimately earns two or more strokes on some holes.
/// Fractional handicaps participate in the remainder comparison as-is;
/// negative or non-finite values receive nothing.
#[must_use]
pub fn strokes_received(handicap: f64, stroke_index: i64) -> i64 {
    if !handicap.is_finite() || handicap <= 0.0 {
        return 0;
    }
    let base = (handicap / 18.0).floor() as i64;
    let remainder = handicap % 18.0;
    base + i64::from(remainder >= stroke_index as f64)
}

/// Gross minus allocated strokes. May be zero or negative; callers must not
/// clamp.
#[must_use]
pub fn net_score(gross: i64, strokes: i64) -> i64 {
    gross - strokes
}
