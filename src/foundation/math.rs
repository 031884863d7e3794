/// Format `value` with `precision` significant digits, following the C `%g` rule.
///
/// Trailing zeros (and a dangling decimal point) are removed. Scientific notation is
/// used when the decimal exponent is below -4 or at least `precision`. A precision of
/// zero is treated as one.
pub(crate) fn format_sig(value: f64, precision: u32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let digits = precision.max(1) as usize;
    let sci = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if exp < -4 || exp >= digits as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exp.unsigned_abs()
        );
    }

    let decimals = (digits as i32 - 1 - exp).max(0) as usize;
    trim_fraction(&format!("{value:.decimals$}")).to_string()
}

/// Round `value` to `places` decimal places, ties to even.
pub(crate) fn round_decimals(value: f64, places: u32) -> f64 {
    // 10^16 and up is past the exact integer range of f64.
    if places > 15 {
        return value;
    }
    let scale = 10f64.powi(places as i32);
    (value * scale).round_ties_even() / scale
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
