//! Fixed-point decimal rendering for trace and report numbers.
//!
//! Rust's `{:.N}` rounds exact binary ties to even (`1.25` becomes `1.2`).
//! Displayed likelihoods round ties away from zero instead, so `1.25`
//! renders as `1.3` and `12.5` as `13`.

/// Fractional digits in the longest exact decimal expansion of an `f64`
/// (the smallest subnormal, 2^-1074).
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Render `value` with exactly `digits` fractional digits, rounding half
/// away from zero on the value's exact decimal expansion.
///
/// Non-finite values render as `NaN`, `Infinity`, and `-Infinity`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let expansion = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (integer, fraction) = expansion.split_once('.').unwrap_or((expansion.as_str(), ""));

    let mut kept: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().take(digits))
        .map(|b| b - b'0')
        .collect();
    let round_up = fraction.as_bytes().get(digits).is_some_and(|d| *d >= b'5');

    if round_up {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, 1);
        }
    }

    let split = kept.len() - digits;
    let mut rendered = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        rendered.push('-');
    }
    rendered.extend(kept[..split].iter().map(|d| char::from(b'0' + d)));
    if digits > 0 {
        rendered.push('.');
        rendered.extend(kept[split..].iter().map(|d| char::from(b'0' + d)));
    }
    rendered
}
