/// Units used by [`format_size`], base 1024
const UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

/// Format a byte count for humans, e.g. `1.50KB` or `1,023.00B`
///
/// Two decimals, `,` as thousands separator, no space before the unit.
pub fn format_size(bytes: u64) -> String {
    format_size_with_decimals(bytes, 2)
}

pub fn format_size_with_decimals(bytes: u64, decimals: usize) -> String {
    let mut power = 0;
    let mut threshold: u64 = 1024;

    while power + 1 < UNITS.len() && bytes >= threshold {
        power += 1;
        match threshold.checked_mul(1024) {
            Some(next) => threshold = next,
            None => break,
        }
    }

    let value = bytes as f64 / 1024f64.powi(power as i32);

    format!("{}{}", group_thousands(&format!("{:.*}", decimals, value)), UNITS[power])
}

/// Insert `,` between groups of three digits in the integer part
fn group_thousands(number: &str) -> String {
    let (integer, fraction) = match number.find('.') {
        Some(idx) => number.split_at(idx),
        None => (number, ""),
    };

    let mut grouped = String::with_capacity(number.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped.push_str(fraction);
    grouped
}
