//! Display formatting helpers.

const KB: u64 = 1_000;
const MB: u64 = 1_000_000;

/// Threshold above which experience is shown in MB.
const EXPERIENCE_MB_THRESHOLD: u64 = 999_900;

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Human-readable byte count.
///
/// The kB branch rounds up while the MB branch rounds to two decimals; the
/// audit totals on the platform are displayed this way.
pub fn format_size(size: u64) -> String {
    if size >= MB {
        format!("{} MB", fixed(size as f64 / MB as f64, 2))
    } else if size >= KB {
        format!("{} kB", size.div_ceil(KB))
    } else {
        format!("{size} bytes")
    }
}

/// Experience points: MB with two decimals from 999 900 up, otherwise whole kB rounded down.
pub fn format_experience(amount: u64) -> String {
    if amount >= EXPERIENCE_MB_THRESHOLD {
        format!("{} MB", fixed(amount as f64 / MB as f64, 2))
    } else {
        format!("{} kB", amount / KB)
    }
}

/// Audit ratio with one decimal; users without a ratio show `0.0`.
pub fn format_ratio(ratio: Option<f64>) -> String {
    fixed(ratio.unwrap_or(0.0), 1)
}

/// `value` with `decimals` digits after the point, ties rounded away from zero.
///
/// `format!("{:.2}")` rounds exact ties to even (`2.125` → `2.12`); the
/// platform's own pages show `2.13`.
fn fixed(value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    format!("{:.*}", decimals, (value * scale).round() / scale)
}

/// `skill_go-lang` → `Go Lang`.
pub fn format_skill(skill: &str) -> String {
    let bare = match skill.find("skill_") {
        Some(at) => format!("{}{}", &skill[..at], &skill[at + "skill_".len()..]),
        None => skill.to_string(),
    };

    let mut out = String::with_capacity(bare.len());
    let mut prev_is_word = false;
    for c in bare.chars() {
        let c = if c == '-' { ' ' } else { c };
        let is_word = c.is_ascii_alphanumeric() || c == '_';
        if is_word && !prev_is_word {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = is_word;
    }
    out
}
