use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use thiserror::Error;

/// Error raised for semester codes that do not match the `XX##` layout
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemesterError {
    #[error("invalid semester format: {0} (expected e.g. SP26)")]
    InvalidFormat(String),
}

/// The four academic seasons, ranked within a calendar year
///
/// Winter sessions run in January, so the within-year order is
/// WI < SP < SU < FA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    Winter = 0,
    Spring = 1,
    Summer = 2,
    Fall = 3,
}

impl Season {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Winter => "WI",
            Self::Spring => "SP",
            Self::Summer => "SU",
            Self::Fall => "FA",
        }
    }

    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "WI" => Some(Self::Winter),
            "SP" => Some(Self::Spring),
            "SU" => Some(Self::Summer),
            "FA" => Some(Self::Fall),
            _ => None,
        }
    }
}

/// A parsed semester code such as "SP26" or "FA25"
///
/// Total order is lexicographic on (year, season), so
/// `FA25 < WI26 < SP26 < SU26 < FA26`. Every semester comparison in the
/// importer goes through this type so the ordering is consistent
/// system-wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Semester {
    pub year: u16,
    pub season: Season,
}

impl Semester {
    /// Parses a 4-character code: 2-letter season + 2-digit year (2000+).
    pub fn parse(code: &str) -> Result<Self, SemesterError> {
        if code.len() != 4 || !code.is_ascii() {
            return Err(SemesterError::InvalidFormat(code.to_string()));
        }

        let season = Season::from_prefix(&code[..2].to_ascii_uppercase())
            .ok_or_else(|| SemesterError::InvalidFormat(code.to_string()))?;

        let suffix = &code[2..];
        if !suffix.chars().all(|c| c.is_ascii_digit()) {
            return Err(SemesterError::InvalidFormat(code.to_string()));
        }
        let year = 2000
            + suffix
                .parse::<u16>()
                .map_err(|_| SemesterError::InvalidFormat(code.to_string()))?;

        Ok(Self { year, season })
    }

    /// Three-way comparison; the derived predicates below are all built
    /// from this single entry point.
    pub fn compare(a: &str, b: &str) -> Result<Ordering, SemesterError> {
        Ok(Self::parse(a)?.cmp(&Self::parse(b)?))
    }

    pub fn earlier(a: &str, b: &str) -> Result<bool, SemesterError> {
        Ok(Self::compare(a, b)? == Ordering::Less)
    }

    pub fn later(a: &str, b: &str) -> Result<bool, SemesterError> {
        Ok(Self::compare(a, b)? == Ordering::Greater)
    }

    pub fn earlier_or_equal(a: &str, b: &str) -> Result<bool, SemesterError> {
        Ok(Self::compare(a, b)? != Ordering::Greater)
    }

    pub fn later_or_equal(a: &str, b: &str) -> Result<bool, SemesterError> {
        Ok(Self::compare(a, b)? != Ordering::Less)
    }

    /// Year component of a semester code ("SP26" -> 2026).
    pub fn extract_year(code: &str) -> Result<u16, SemesterError> {
        Ok(Self::parse(code)?.year)
    }

    /// Whether a code parses at all.
    pub fn is_valid(code: &str) -> bool {
        Self::parse(code).is_ok()
    }
}

impl FromStr for Semester {
    type Err = SemesterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Semester {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}{:02}", self.season.as_str(), self.year % 100)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_valid_codes() {
        assert_eq!(
            Semester::parse("WI26").unwrap(),
            Semester {
                year: 2026,
                season: Season::Winter
            }
        );
        assert_eq!(
            Semester::parse("fa25").unwrap(),
            Semester {
                year: 2025,
                season: Season::Fall
            }
        );
    }

    #[test]
    fn test_parse_rejects_bad_codes() {
        for code in ["", "SP", "SP2026", "XX99", "SPAB", "26SP"] {
            assert!(Semester::parse(code).is_err(), "accepted {code:?}");
        }
    }

    #[test]
    fn test_ordering_across_year_boundary() {
        // ... < FA25 < WI26 < SP26 < SU26 < FA26 < ...
        assert!(Semester::earlier("FA25", "WI26").unwrap());
        assert!(Semester::earlier("WI26", "SP26").unwrap());
        assert!(Semester::earlier("SP26", "SU26").unwrap());
        assert!(Semester::earlier("SU26", "FA26").unwrap());
        assert!(Semester::later("FA26", "SP26").unwrap());
    }

    #[test]
    fn test_compare_is_total_and_antisymmetric() {
        let codes = [
            "WI24", "SP24", "SU24", "FA24", "WI25", "SP25", "SU25", "FA25", "WI26", "SP26",
        ];
        for a in codes {
            for b in codes {
                let ab = Semester::compare(a, b).unwrap();
                let ba = Semester::compare(b, a).unwrap();
                assert_eq!(ab, ba.reverse());
                // exactly one of earlier / equal / later holds
                let earlier = Semester::earlier(a, b).unwrap();
                let later = Semester::later(a, b).unwrap();
                let equal = ab == Ordering::Equal;
                assert_eq!(
                    1,
                    [earlier, later, equal].iter().filter(|x| **x).count(),
                    "{a} vs {b}"
                );
            }
        }
    }

    #[test]
    fn test_derived_predicates() {
        assert!(Semester::later_or_equal("SP26", "SP26").unwrap());
        assert!(Semester::later_or_equal("FA26", "SP26").unwrap());
        assert!(Semester::earlier_or_equal("SP26", "SP26").unwrap());
        assert!(!Semester::earlier_or_equal("FA26", "SP26").unwrap());
    }

    #[test]
    fn test_extract_year() {
        assert_eq!(Semester::extract_year("SP26").unwrap(), 2026);
        assert_eq!(Semester::extract_year("FA25").unwrap(), 2025);
    }

    #[test]
    fn test_display_round_trip() {
        for code in ["WI26", "SP26", "SU26", "FA25"] {
            assert_eq!(Semester::parse(code).unwrap().to_string(), code);
        }
    }
}
