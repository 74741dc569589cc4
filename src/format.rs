//! Display Formatting
//!
//! Pure helpers turning raw server numbers and text into display strings.

const BASE: f64 = 1024.0;

const SIZE_UNITS: &[&str] = &["Bytes", "KB", "MB", "GB", "TB"];
const SPEED_UNITS: &[&str] = &["B/s", "KB/s", "MB/s", "GB/s"];

/// Enough fractional digits to print any f64 >= 2^-12 exactly.
const EXACT_DIGITS: usize = 64;

/// Escape the five HTML-sensitive characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Human readable byte size, e.g. `1536 -> "1.5 KB"`.
pub fn format_bytes(bytes: f64) -> String {
    if bytes == 0.0 {
        return "0 Bytes".to_string();
    }
    format_scaled(bytes, SIZE_UNITS)
}

/// Human readable transfer rate, e.g. `2048 -> "2 KB/s"`.
pub fn format_speed(bytes_per_second: f64) -> String {
    if bytes_per_second == 0.0 {
        return "0 B/s".to_string();
    }
    format_scaled(bytes_per_second, SPEED_UNITS)
}

/// Progress clamped into `[0, 100]`.
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 100.0)
}

/// Fixed-point rendering with the rounding rules of JavaScript's
/// `Number.prototype.toFixed`: the exact binary value is rounded, ties go up.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();

    let round_up = frac_part
        .as_bytes()
        .get(digits)
        .is_some_and(|d| *d >= b'5');
    if round_up {
        let mut i = kept.len();
        loop {
            if i == 0 {
                kept.insert(0, b'1');
                break;
            }
            i -= 1;
            if kept[i] == b'9' {
                kept[i] = b'0';
            } else {
                kept[i] += 1;
                break;
            }
        }
    }

    let split = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value.is_sign_negative() && value != 0.0 {
        out.push('-');
    }
    out.push_str(&String::from_utf8_lossy(&kept[..split]));
    if digits > 0 {
        out.push('.');
        out.push_str(&String::from_utf8_lossy(&kept[split..]));
    }
    out
}

/// Drop trailing fractional zeros the way `parseFloat` re-printing does.
fn trim_fraction(fixed: &str) -> &str {
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed
    }
}

fn format_scaled(value: f64, units: &[&str]) -> String {
    let mut index = 0;
    while index + 1 < units.len() && value >= BASE.powi(index as i32 + 1) {
        index += 1;
    }
    let scaled = value / BASE.powi(index as i32);
    let fixed = to_fixed(scaled, 2);
    format!("{} {}", trim_fraction(&fixed), units[index])
}
