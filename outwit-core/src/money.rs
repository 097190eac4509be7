//! Money primitives: integer minor-currency units.

/// Monetary amount in minor currency units (cents). Signed, so the
/// negative-means-outflow convention survives arithmetic.
pub type Cents = i64;

/// Render cents for display: `123456` becomes `"$1234.56"`.
pub fn format_cents(amount: Cents) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{}${}.{:02}", sign, abs / 100, abs % 100)
}
