//! Axis tick and tooltip number formatting.

/// Dollar amount with an SI suffix for axis ticks, e.g. `$300B`, `$2.5M`.
pub fn dollars_si(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let v = value.abs();

    let (scaled, suffix) = if v >= 1e12 {
        (v / 1e12, "T")
    } else if v >= 1e9 {
        (v / 1e9, "B")
    } else if v >= 1e6 {
        (v / 1e6, "M")
    } else if v >= 1e3 {
        (v / 1e3, "k")
    } else {
        (v, "")
    };

    // One decimal below 10, none above; trailing ".0" trimmed.
    let digits = if scaled < 10.0 && (scaled * 10.0).round() % 10.0 != 0.0 {
        1
    } else {
        0
    };
    format!("{sign}${scaled:.digits$}{suffix}")
}

/// Thousands-grouped amount for tooltips, e.g. `1,234,568`.
/// Keeps up to two decimals, trimming trailing zeros.
pub fn thousands(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let mut out = format!("{sign}{}", group_digits(whole));
    if frac != 0 {
        if frac % 10 == 0 {
            out.push_str(&format!(".{}", frac / 10));
        } else {
            out.push_str(&format!(".{frac:02}"));
        }
    }
    out
}

fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn si_suffixes() {
        assert_eq!(dollars_si(300e9), "$300B");
        assert_eq!(dollars_si(2.5e9), "$2.5B");
        assert_eq!(dollars_si(1.2e12), "$1.2T");
        assert_eq!(dollars_si(45e6), "$45M");
        assert_eq!(dollars_si(7_000.0), "$7k");
        assert_eq!(dollars_si(5.0), "$5");
        assert_eq!(dollars_si(0.0), "$0");
        assert_eq!(dollars_si(-2e9), "-$2B");
    }

    #[test]
    fn grouped_thousands() {
        assert_eq!(thousands(1_234_567.0), "1,234,567");
        assert_eq!(thousands(1_234.5), "1,234.5");
        assert_eq!(thousands(0.25), "0.25");
        assert_eq!(thousands(5.0), "5");
        assert_eq!(thousands(-9_876.0), "-9,876");
        assert_eq!(thousands(999.999), "1,000");
    }
}
