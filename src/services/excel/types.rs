use std::fmt;
use std::str::FromStr;

use calamine::Data;

/// What to do with a numeric cell that holds a non-integral value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FractionalPolicy {
    /// Drop the fractional part, saturating at the `i64` bounds.
    #[default]
    Truncate,
    /// Round half away from zero, saturating at the `i64` bounds.
    Round,
    /// Fail the scan.
    Reject,
}

impl FromStr for FractionalPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "truncate" => Ok(FractionalPolicy::Truncate),
            "round" => Ok(FractionalPolicy::Round),
            "reject" => Ok(FractionalPolicy::Reject),
            other => Err(format!(
                "unknown fractional policy '{}', expected truncate, round or reject",
                other
            )),
        }
    }
}

impl fmt::Display for FractionalPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FractionalPolicy::Truncate => "truncate",
            FractionalPolicy::Round => "round",
            FractionalPolicy::Reject => "reject",
        };
        f.write_str(name)
    }
}

/// Classification of a single worksheet cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericCell {
    Integer(i64),
    /// Non-integral number refused under [`FractionalPolicy::Reject`].
    Rejected(f64),
    NotNumeric,
}

impl NumericCell {
    pub fn classify(cell: &Data, policy: FractionalPolicy) -> Self {
        match cell {
            Data::Int(i) => NumericCell::Integer(*i),
            Data::Float(f) => Self::from_float(*f, policy),
            // Dates are stored as serial numbers in numeric cells.
            Data::DateTime(d) => Self::from_float(d.as_f64(), policy),
            _ => NumericCell::NotNumeric,
        }
    }

    fn from_float(value: f64, policy: FractionalPolicy) -> Self {
        if value.fract() == 0.0 {
            return NumericCell::Integer(value as i64);
        }
        match policy {
            FractionalPolicy::Truncate => NumericCell::Integer(value.trunc() as i64),
            FractionalPolicy::Round => NumericCell::Integer(value.round() as i64),
            FractionalPolicy::Reject => NumericCell::Rejected(value),
        }
    }
}
