use crate::scoring::handicap::{net_score, strokes_received};

/// Stableford points for a net score against par.
///
/// Five-band table, applied identically everywhere points are computed:
///
/// | net − par | points |
/// |-----------|--------|
/// | ≤ −3      | 5      |
/// | −2        | 4      |
/// | −1        | 3      |
/// | 0         | 2      |
/// | +1        | 1      |
/// | ≥ +2      | 0      |
#[must_use]
pub fn stableford_points(net: i64, par: i64) -> i64 {
    match net - par {
        d if d <= -3 => 5,
        -2 => 4,
        -1 => 3,
        0 => 2,
        1 => 1,
        _ => 0,
    }
}

/// Full per-hole chain: allocate strokes, net the gross, band the result.
#[must_use]
pub fn hole_points(gross: i64, par: i64, handicap: f64, stroke_index: i64) -> i64 {
    let strokes = strokes_received(handicap, stroke_index);
    stableford_points(net_score(gross, strokes), par)
}
