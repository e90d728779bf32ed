use core::fmt;

use super::LeafKind;

/// A borrowed leaf payload.
///
/// Leaves are compared with [`Leaf::same_value`] and never descended into.
#[derive(Debug, Clone, Copy)]
pub enum Leaf<'a> {
    Str(&'a str),
    Char(char),
    Bool(bool),
    Int(i128),
    UInt(u128),
    F32(f32),
    F64(f64),
    #[cfg(feature = "decimal")]
    Decimal(rust_decimal::Decimal),
    #[cfg(feature = "chrono")]
    Temporal(Temporal),
}

impl Leaf<'_> {
    pub const fn kind(&self) -> LeafKind {
        match self {
            Self::Str(_) => LeafKind::Str,
            Self::Char(_) => LeafKind::Char,
            Self::Bool(_) => LeafKind::Bool,
            Self::Int(_) | Self::UInt(_) => LeafKind::Integer,
            Self::F32(_) | Self::F64(_) => LeafKind::Float,
            #[cfg(feature = "decimal")]
            Self::Decimal(_) => LeafKind::Decimal,
            #[cfg(feature = "chrono")]
            Self::Temporal(_) => LeafKind::Temporal,
        }
    }

    /// Value equality.
    ///
    /// - Floats compare by bit pattern, so `NaN` equals itself.
    /// - Decimals compare by numeric value, `10.50` equals `10.5`.
    /// - Signed and unsigned integers compare by mathematical value.
    pub fn same_value(&self, other: &Leaf<'_>) -> bool {
        match (self, other) {
            (Self::Str(a), Leaf::Str(b)) => a == b,
            (Self::Char(a), Leaf::Char(b)) => a == b,
            (Self::Bool(a), Leaf::Bool(b)) => a == b,
            (Self::Int(a), Leaf::Int(b)) => a == b,
            (Self::UInt(a), Leaf::UInt(b)) => a == b,
            (Self::Int(a), Leaf::UInt(b)) | (Self::UInt(b), Leaf::Int(a)) => {
                u128::try_from(*a).is_ok_and(|a| a == *b)
            }
            (Self::F32(a), Leaf::F32(b)) => a.to_bits() == b.to_bits(),
            (Self::F64(a), Leaf::F64(b)) => a.to_bits() == b.to_bits(),
            #[cfg(feature = "decimal")]
            (Self::Decimal(a), Leaf::Decimal(b)) => a == b,
            #[cfg(feature = "chrono")]
            (Self::Temporal(a), Leaf::Temporal(b)) => a == b,
            _ => false,
        }
    }
}

/// Writes the literal form used by snapshots. Strings and characters are
/// quoted and escaped, temporal values are quoted ISO-8601 text.
impl fmt::Display for Leaf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        match self {
            Self::Str(s) => {
                f.write_char('"')?;
                write_escaped(f, s)?;
                f.write_char('"')
            }
            Self::Char(c) => {
                f.write_char('"')?;
                write_escaped_char(f, *c)?;
                f.write_char('"')
            }
            Self::Bool(b) => fmt::Display::fmt(b, f),
            Self::Int(n) => fmt::Display::fmt(n, f),
            Self::UInt(n) => fmt::Display::fmt(n, f),
            Self::F32(n) => fmt::Debug::fmt(n, f),
            Self::F64(n) => fmt::Debug::fmt(n, f),
            #[cfg(feature = "decimal")]
            Self::Decimal(n) => fmt::Display::fmt(n, f),
            #[cfg(feature = "chrono")]
            Self::Temporal(t) => write!(f, "\"{t}\""),
        }
    }
}

/// Escape `s` for a quoted literal.
///
/// Named escapes for backslash, both quotes, tab, newline, carriage return,
/// backspace and form feed; any other control character as `\uXXXX`.
pub(crate) fn write_escaped(out: &mut impl fmt::Write, s: &str) -> fmt::Result {
    for c in s.chars() {
        write_escaped_char(out, c)?;
    }
    Ok(())
}

fn write_escaped_char(out: &mut impl fmt::Write, c: char) -> fmt::Result {
    match c {
        '\\' => out.write_str("\\\\"),
        '"' => out.write_str("\\\""),
        '\'' => out.write_str("\\'"),
        '\t' => out.write_str("\\t"),
        '\n' => out.write_str("\\n"),
        '\r' => out.write_str("\\r"),
        '\u{8}' => out.write_str("\\b"),
        '\u{c}' => out.write_str("\\f"),
        c if c.is_control() => write!(out, "\\u{:04x}", c as u32),
        c => out.write_char(c),
    }
}

// -----------------------------------------------------------------------------
// Temporal

#[cfg(feature = "chrono")]
pub use temporal::Temporal;

#[cfg(feature = "chrono")]
mod temporal {
    use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
    use core::fmt;

    /// A date, time or date-time value.
    ///
    /// Equality is equality of the canonical text: two zoned values are equal
    /// only if both the instant and the offset match.
    #[derive(Debug, Clone, Copy)]
    pub enum Temporal {
        Date(NaiveDate),
        Time(NaiveTime),
        DateTime(NaiveDateTime),
        Zoned(DateTime<FixedOffset>),
    }

    impl PartialEq for Temporal {
        fn eq(&self, other: &Self) -> bool {
            match (self, other) {
                (Self::Date(a), Self::Date(b)) => a == b,
                (Self::Time(a), Self::Time(b)) => a == b,
                (Self::DateTime(a), Self::DateTime(b)) => a == b,
                (Self::Zoned(a), Self::Zoned(b)) => a == b && a.offset() == b.offset(),
                _ => false,
            }
        }
    }

    impl Eq for Temporal {}

    /// ISO-8601 text: `2024-03-01`, `10:15:30`, `2024-03-01T10:15:30`,
    /// `2024-03-01T10:15:30+01:00`. Fractional seconds appear only when present.
    impl fmt::Display for Temporal {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
                Self::Time(t) => write!(f, "{}", t.format("%H:%M:%S%.f")),
                Self::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f")),
                Self::Zoned(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f%:z")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Leaf;
    use crate::info::LeafKind;
    use alloc::string::ToString;

    #[test]
    fn kinds() {
        assert_eq!(Leaf::Int(1).kind(), LeafKind::Integer);
        assert_eq!(Leaf::UInt(1).kind(), LeafKind::Integer);
        assert_eq!(Leaf::F32(1.0).kind(), LeafKind::Float);
        assert_eq!(Leaf::Str("").kind(), LeafKind::Str);
    }

    #[test]
    fn value_equality() {
        assert!(Leaf::Str("a").same_value(&Leaf::Str("a")));
        assert!(!Leaf::Str("a").same_value(&Leaf::Char('a')));
        assert!(Leaf::Int(7).same_value(&Leaf::UInt(7)));
        assert!(!Leaf::Int(-1).same_value(&Leaf::UInt(u128::MAX)));
        assert!(Leaf::F64(f64::NAN).same_value(&Leaf::F64(f64::NAN)));
        assert!(!Leaf::F64(0.0).same_value(&Leaf::F64(-0.0)));
    }

    #[test]
    fn literals() {
        assert_eq!(Leaf::Str("a\"b\n").to_string(), r#""a\"b\n""#);
        assert_eq!(Leaf::Str("it's\u{1}").to_string(), r#""it\'s\u0001""#);
        assert_eq!(Leaf::Char('\t').to_string(), r#""\t""#);
        assert_eq!(Leaf::Bool(true).to_string(), "true");
        assert_eq!(Leaf::Int(-3).to_string(), "-3");
        assert_eq!(Leaf::F64(1.0).to_string(), "1.0");
        assert_eq!(Leaf::F32(0.5).to_string(), "0.5");
    }

    #[cfg(feature = "decimal")]
    #[test]
    fn decimal_scale_is_ignored() {
        use rust_decimal::Decimal;

        let a = Decimal::new(1050, 2);
        let b = Decimal::new(105, 1);
        assert!(Leaf::Decimal(a).same_value(&Leaf::Decimal(b)));
        assert_eq!(Leaf::Decimal(a).to_string(), "10.50");
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn temporal_text() {
        use super::Temporal;
        use chrono::{FixedOffset, NaiveDate, TimeZone};

        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let dt = date.and_hms_opt(10, 15, 30).unwrap();
        assert_eq!(Temporal::Date(date).to_string(), "2024-03-01");
        assert_eq!(Temporal::DateTime(dt).to_string(), "2024-03-01T10:15:30");

        let plus_one = FixedOffset::east_opt(3600).unwrap();
        let utc = FixedOffset::east_opt(0).unwrap();
        let zoned = plus_one.from_local_datetime(&dt).unwrap();
        assert_eq!(Temporal::Zoned(zoned).to_string(), "2024-03-01T10:15:30+01:00");

        let same_instant = zoned.with_timezone(&utc);
        assert_ne!(Temporal::Zoned(zoned), Temporal::Zoned(same_instant));
        assert_eq!(
            Leaf::Temporal(Temporal::Date(date)).to_string(),
            "\"2024-03-01\""
        );
    }
}
