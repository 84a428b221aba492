use golf_trip::scoring::{
    match_status, net_score, resolve_hole, stableford_points, strokes_received, HoleWinner,
};

#[test]
fn strokes_are_monotonic_in_handicap() {
    for idx in [1, 9, 18] {
        let mut previous = 0;
        for h in 0..=54 {
            let strokes = strokes_received(f64::from(h), idx);
            assert!(
                strokes >= previous,
                "strokes dropped from {previous} to {strokes} at handicap {h}, index {idx}"
            );
            previous = strokes;
        }
    }
}

#[test]
fn scratch_receives_nothing() {
    for idx in 1..=18 {
        assert_eq!(strokes_received(0.0, idx), 0);
    }
}

#[test]
fn eighteen_receives_exactly_one_everywhere() {
    for idx in 1..=18 {
        assert_eq!(strokes_received(18.0, idx), 1, "index {idx}");
    }
}

#[test]
fn high_handicaps_are_not_capped() {
    for idx in 1..=18 {
        assert_eq!(strokes_received(36.0, idx), 2);
    }
    // 20 = one stroke everywhere plus an extra on the two hardest holes.
    assert_eq!(strokes_received(20.0, 1), 2);
    assert_eq!(strokes_received(20.0, 2), 2);
    assert_eq!(strokes_received(20.0, 3), 1);
    assert_eq!(strokes_received(20.0, 18), 1);
}

#[test]
fn fractional_handicaps_compare_against_the_remainder() {
    assert_eq!(strokes_received(12.4, 12), 1);
    assert_eq!(strokes_received(12.4, 13), 0);
    assert_eq!(strokes_received(9.0, 5), 1);
}

#[test]
fn bad_handicaps_mean_no_strokes() {
    assert_eq!(strokes_received(-5.0, 1), 0);
    assert_eq!(strokes_received(f64::NAN, 1), 0);
}

#[test]
fn net_is_gross_minus_strokes_unclamped() {
    assert_eq!(net_score(5, 1), 4);
    assert_eq!(net_score(4, 0), 4);
    assert_eq!(net_score(2, 3), -1);
    assert_eq!(net_score(1, 1), 0);
}

#[test]
fn stableford_band_table() {
    let par = 4;
    let expected = [(-4, 5), (-3, 5), (-2, 4), (-1, 3), (0, 2), (1, 1), (2, 0), (5, 0)];
    for (diff, points) in expected {
        assert_eq!(stableford_points(par + diff, par), points, "diff {diff}");
    }
}

#[test]
fn net_par_is_always_two_points() {
    for par in [3, 4, 5] {
        assert_eq!(stableford_points(par, par), 2);
    }
}

#[test]
fn stableford_never_increases_with_score() {
    let par = 4;
    let mut previous = i64::MAX;
    for net in -2..=12 {
        let points = stableford_points(net, par);
        assert!(points <= previous);
        previous = points;
    }
}

#[test]
fn better_ball_takes_the_best_of_each_pair() {
    assert_eq!(resolve_hole(&[3, 1], &[2, 2]), HoleWinner::TeamA);
    assert_eq!(resolve_hole(&[2, 2], &[3, 1]), HoleWinner::TeamB);
    assert_eq!(resolve_hole(&[3, 0], &[1, 3]), HoleWinner::Tie);
}

#[test]
fn resolver_is_symmetric() {
    let cases = [([3, 1], [2, 2]), ([0, 0], [0, 4]), ([2, 2], [2, 2])];
    for (a, b) in cases {
        let forward = resolve_hole(&a, &b);
        let swapped = resolve_hole(&b, &a);
        let mirrored = match forward {
            HoleWinner::TeamA => HoleWinner::TeamB,
            HoleWinner::TeamB => HoleWinner::TeamA,
            HoleWinner::Tie => HoleWinner::Tie,
        };
        assert_eq!(swapped, mirrored);
    }
}

#[test]
fn status_tokens() {
    assert_eq!(match_status(0, 0, 18), "AS");
    assert_eq!(match_status(0, 0, 0), "AS");
    assert_eq!(match_status(2, 0, 5), "2UP");
    assert_eq!(match_status(1, 0, 0), "1UP");
    // Decided matches close out whenever the lead exceeds the holes left.
    assert_eq!(match_status(5, 0, 3), "5&4");
    assert_eq!(match_status(4, 1, 2), "3&3");
    // The trailing side's deficit formats the same way.
    assert_eq!(match_status(0, 3, 2), "3&3");
    assert_eq!(match_status(1, 3, 4), "2UP");
}

#[test]
fn handicap_eighteen_round_trip_is_net_par() {
    let strokes = strokes_received(18.0, 10);
    assert_eq!(strokes, 1);
    let net = net_score(5, strokes);
    assert_eq!(net, 4);
    assert_eq!(stableford_points(net, 4), 2);
}
