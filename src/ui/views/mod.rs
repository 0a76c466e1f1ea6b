pub mod explain;
pub mod program;
pub mod tables;

/// `1234567` as `1,234,567`
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Signed area with an explicit `+` on surpluses
pub fn signed_sf(n: i64) -> String {
    let sign = if n < 0 { "-" } else { "+" };
    format!("{sign}{} SF", thousands(n.unsigned_abs()))
}
