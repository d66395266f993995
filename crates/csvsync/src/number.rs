/// Format an f64 the way a non-text field is written out.
/// - no exponent notation
/// - no trailing fractional zeros (decimal point dropped if nothing remains)
/// - -0 normalized to 0
/// - non-finite values use `NaN`, `Infinity`, `-Infinity`
pub(crate) fn format_canonical_f64(value: f64) -> String {
    if value.is_nan() {
        return String::from("NaN");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if value == 0.0 {
        return String::from("0");
    }

    let mut buf = ryu::Buffer::new();
    let raw = buf.format_finite(value);
    let (sign, magnitude) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw),
    };
    let plain = match magnitude.split_once(['e', 'E']) {
        Some((mantissa, exp)) => shift_point(mantissa, exp.parse().unwrap_or(0)),
        None => String::from(magnitude),
    };
    let mut out = String::with_capacity(sign.len() + plain.len());
    out.push_str(sign);
    out.push_str(strip_zero_fraction(&plain));
    out
}

fn shift_point(mantissa: &str, exp: i32) -> String {
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = [int, frac].concat();
    let point = int.len() as i64 + exp as i64;
    if point <= 0 {
        let mut out = String::from("0.");
        out.extend(core::iter::repeat_n('0', (-point) as usize));
        out.push_str(&digits);
        out
    } else if point as usize >= digits.len() {
        let mut out = digits.clone();
        out.extend(core::iter::repeat_n('0', point as usize - digits.len()));
        out
    } else {
        let (whole, fraction) = digits.split_at(point as usize);
        format!("{}.{}", whole, fraction)
    }
}

fn strip_zero_fraction(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}
