use super::*;

#[test]
fn format_sig_matches_percent_g() {
    assert_eq!(format_sig(2.0 / 9.0, 6), "0.222222");
    assert_eq!(format_sig(5.0 / 9.0, 6), "0.555556");
    assert_eq!(format_sig(8.0 / 9.0, 6), "0.888889");
    assert_eq!(format_sig(1.0, 6), "1");
    assert_eq!(format_sig(9.0, 6), "9");
    assert_eq!(format_sig(0.5, 6), "0.5");
    assert_eq!(format_sig(12.5, 6), "12.5");
    assert_eq!(format_sig(2.0 / 3.0, 2), "0.67");
}

#[test]
fn format_sig_switches_to_scientific() {
    assert_eq!(format_sig(0.00001234, 3), "1.23e-05");
    assert_eq!(format_sig(123_456_789.0, 6), "1.23457e+08");
    assert_eq!(format_sig(1000.0, 2), "1e+03");
    assert_eq!(format_sig(0.0001, 6), "0.0001");
}

#[test]
fn format_sig_zero_precision_behaves_as_one() {
    assert_eq!(format_sig(0.26, 0), "0.3");
    assert_eq!(format_sig(0.26, 1), "0.3");
    assert_eq!(format_sig(0.0, 0), "0");
}

#[test]
fn round_decimals_rounds_to_places() {
    assert_eq!(round_decimals(9.0, 6), 9.0);
    assert_eq!(round_decimals(1.23456, 2), 1.23);
    assert_eq!(round_decimals(0.3333333, 0), 0.0);
    assert_eq!(round_decimals(2.5000001, 20), 2.5000001);
}

#[test]
fn round_decimals_sends_exact_halves_to_even() {
    assert_eq!(round_decimals(0.125, 2), 0.12);
    assert_eq!(round_decimals(0.375, 2), 0.38);
    assert_eq!(round_decimals(2.5, 0), 2.0);
    assert_eq!(round_decimals(3.5, 0), 4.0);
    assert_eq!(round_decimals(-0.125, 2), -0.12);
}
