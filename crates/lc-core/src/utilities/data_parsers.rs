//! Data parsing helpers.
//!
//! Calendar dates cross the library boundary as ISO 8601 strings
//! (`YYYY-MM-DD`) and reference months as `YYYY-MM`.  These helpers split
//! such strings into numeric components; range checking is left to the
//! types that own the components.

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success.  Each component must consist of
/// ASCII digits only, with exactly four, two and two digits respectively.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let mut parts = s.trim().split('-');
    let year = fixed_digits(parts.next()?, 4)?;
    let month = fixed_digits(parts.next()?, 2)?;
    let day = fixed_digits(parts.next()?, 2)?;
    if parts.next().is_some() {
        return None;
    }
    Some((year, month as u8, day as u8))
}

/// Parse a month string in `YYYY-MM` format.
///
/// Returns `(year, month)` on success.
pub fn parse_year_month(s: &str) -> Option<(u16, u8)> {
    let mut parts = s.trim().split('-');
    let year = fixed_digits(parts.next()?, 4)?;
    let month = fixed_digits(parts.next()?, 2)?;
    if parts.next().is_some() {
        return None;
    }
    Some((year, month as u8))
}

fn fixed_digits(part: &str, width: usize) -> Option<u16> {
    if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
