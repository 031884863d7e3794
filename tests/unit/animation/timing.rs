use super::*;

#[test]
fn three_frames_two_plus_one_seconds() {
    let table = generate_timings(3, 2.0, 1.0, 6).unwrap();
    assert_eq!(table.total_time, 9.0);
    assert_eq!(table.duration_string, "9s");
    assert_eq!(
        table.transition_times,
        vec![
            "0", "0.222222", "0.333333", "0.555556", "0.666667", "0.888889", "1"
        ]
    );
    assert_eq!(table.frame_count(), 3);
}

#[test]
fn shape_invariants_hold_across_inputs() {
    for n in 2..7usize {
        for &(s, t) in &[(1.0, 0.0), (0.0, 1.0), (1.0, 0.5), (0.3, 0.7), (2.5, 0.25)] {
            for p in [1u32, 3, 6, 9] {
                let table = generate_timings(n, s, t, p).unwrap();
                assert_eq!(table.transition_times.len(), 2 * n + 1);
                assert_eq!(table.time(0), "0");

                let values: Vec<f64> = table
                    .transition_times
                    .iter()
                    .map(|v| v.parse::<f64>().unwrap())
                    .collect();
                assert!(
                    values.windows(2).all(|w| w[0] <= w[1]),
                    "non-monotonic times for n={n} s={s} t={t} p={p}: {values:?}"
                );
                let last = *values.last().unwrap();
                assert!((last - 1.0).abs() <= 10f64.powi(-(p as i32 - 1)));

                let dur: f64 = table
                    .duration_string
                    .strip_suffix('s')
                    .unwrap()
                    .parse()
                    .unwrap();
                let tol = table.total_time.abs() * 10f64.powi(-(p as i32 - 1));
                assert!((dur - table.total_time).abs() <= tol);
            }
        }
    }
}

#[test]
fn zero_durations_are_a_domain_error() {
    let err = generate_timings(2, 0.0, 0.0, 6).unwrap_err();
    assert!(matches!(err, SvganimError::Domain(_)));
}

#[test]
fn fewer_than_two_frames_is_rejected() {
    assert!(matches!(
        generate_timings(1, 1.0, 0.0, 6).unwrap_err(),
        SvganimError::Validation(_)
    ));
    assert!(generate_timings(0, 1.0, 0.0, 6).is_err());
}

#[test]
fn negative_or_non_finite_durations_are_rejected() {
    assert!(generate_timings(2, -1.0, 0.0, 6).is_err());
    assert!(generate_timings(2, 1.0, f64::INFINITY, 6).is_err());
}

#[test]
fn precision_controls_digits() {
    let table = generate_timings(3, 2.0, 1.0, 2).unwrap();
    assert_eq!(
        table.transition_times,
        vec!["0", "0.22", "0.33", "0.56", "0.67", "0.89", "1"]
    );
}

#[test]
fn negative_indices_count_from_the_end() {
    let table = generate_timings(2, 1.0, 1.0, 6).unwrap();
    assert_eq!(table.key_times(), "0;0.25;0.5;0.75;1");
    assert_eq!(table.time(-1), "1");
    assert_eq!(table.time(-2), "0.75");
    assert_eq!(table.key_times_at(&[0, 1, 2, -2, -1]), "0;0.25;0.5;0.75;1");
}
