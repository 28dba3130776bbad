const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const K: u64 = 1024;

/// Formats a byte count with binary scaling, e.g. `1536 -> "1.5 KB"`.
///
/// The value is rounded to two decimals, halves away from zero, and trailing
/// zeros are dropped.
/// Sizes of 1024 GB and beyond stay in GB.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut exponent = 0;
    while exponent < UNITS.len() - 1 && bytes >= K.pow(exponent as u32 + 1) {
        exponent += 1;
    }

    let scaled = bytes as f64 / K.pow(exponent as u32) as f64;
    // `{:.2}` would round ties to even; 1.125 must become 1.13.
    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{rounded} {}", UNITS[exponent])
}
