//! Text formatting helpers for panels and notifications.

/// Gold amount with thousands separators, e.g. `25,000`.
pub fn gold(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

/// Compact duration, e.g. `45s`, `2m 05s`, `1h 03m`.
pub fn duration_ms(ms: u64) -> String {
    let secs = ms.div_ceil(1_000);
    match secs {
        0..=59 => format!("{secs}s"),
        60..=3_599 => format!("{}m {:02}s", secs / 60, secs % 60),
        _ => format!("{}h {:02}m", secs / 3_600, (secs % 3_600) / 60),
    }
}

/// Fixed-width text progress bar.
pub fn bar(pct: u32, width: usize) -> String {
    let filled = (pct.min(100) as usize * width) / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}
