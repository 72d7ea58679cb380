//! Presentation-time number formatting.

/// en-US dollar formatting, e.g. `$1,629.38`. Rounds half away from zero.
pub fn format_usd(amount: f64, decimals: u32) -> String {
    if !amount.is_finite() {
        return "$0".to_string();
    }
    let scale = 10u64.pow(decimals);
    let scaled = (amount.abs() * scale as f64).round() as u64;
    let whole = scaled / scale;
    let fraction = scaled % scale;

    let sign = if amount < 0.0 && scaled != 0 { "-" } else { "" };
    let grouped = group_thousands(whole);
    if decimals == 0 {
        format!("{sign}${grouped}")
    } else {
        format!(
            "{sign}${grouped}.{fraction:0width$}",
            width = decimals as usize
        )
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
