use std::{fmt, str::FromStr};

use serde::{de::Deserializer, Deserialize, Serialize};

use crate::errors::FrequencyError;

/// Average weeks per month.
pub const WEEKLY_TO_MONTHLY: f64 = 4.33;
/// Average two-week periods per month.
pub const BIWEEKLY_TO_MONTHLY: f64 = 2.17;
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// How often a budget amount recurs.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Biweekly,
    Monthly,
    Annually,
    /// Any tag outside the known set; converts as identity.
    Unrecognized,
}

impl Frequency {
    pub const KNOWN: [Frequency; 4] = [
        Frequency::Weekly,
        Frequency::Biweekly,
        Frequency::Monthly,
        Frequency::Annually,
    ];

    /// Exact, case-sensitive tag lookup. Unknown tags map to `Unrecognized`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "weekly" => Frequency::Weekly,
            "biweekly" => Frequency::Biweekly,
            "monthly" => Frequency::Monthly,
            "annually" => Frequency::Annually,
            _ => Frequency::Unrecognized,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Frequency::Weekly => "weekly",
            Frequency::Biweekly => "biweekly",
            Frequency::Monthly => "monthly",
            Frequency::Annually => "annually",
            Frequency::Unrecognized => "unrecognized",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Weekly => "Weekly",
            Frequency::Biweekly => "Every two weeks",
            Frequency::Monthly => "Monthly",
            Frequency::Annually => "Yearly",
            Frequency::Unrecognized => "As entered",
        }
    }

    /// Monthly equivalent of `value` recurring at this frequency.
    pub fn to_monthly(self, value: f64) -> f64 {
        match self {
            Frequency::Weekly => value * WEEKLY_TO_MONTHLY,
            Frequency::Biweekly => value * BIWEEKLY_TO_MONTHLY,
            Frequency::Monthly => value,
            Frequency::Annually => value / MONTHS_PER_YEAR,
            Frequency::Unrecognized => value,
        }
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Frequency::Monthly
    }
}

impl From<&str> for Frequency {
    fn from(tag: &str) -> Self {
        Frequency::from_tag(tag)
    }
}

impl FromStr for Frequency {
    type Err = FrequencyError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match Frequency::from_tag(tag) {
            Frequency::Unrecognized => Err(FrequencyError::Unknown(tag.to_string())),
            known => Ok(known),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for Frequency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Frequency::from_tag(&value))
    }
}

/// Converts a periodic amount to its monthly equivalent.
///
/// ```
/// use budget_utils::frequency::calculate_monthly_value;
///
/// assert_eq!(calculate_monthly_value(1200.0, "annually"), 100.0);
/// assert_eq!(calculate_monthly_value(100.0, "fortnightly"), 100.0);
/// ```
pub fn calculate_monthly_value(value: f64, frequency: impl Into<Frequency>) -> f64 {
    frequency.into().to_monthly(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-9
    }

    #[test]
    fn multipliers_match_literals() {
        assert!(approx(calculate_monthly_value(100.0, "weekly"), 433.0));
        assert!(approx(calculate_monthly_value(100.0, "biweekly"), 217.0));
        assert!(approx(calculate_monthly_value(1200.0, "annually"), 100.0));
        assert!(approx(calculate_monthly_value(100.0, "monthly"), 100.0));
        assert!(approx(calculate_monthly_value(100.0, "unknown"), 100.0));
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert_eq!(Frequency::from_tag("Weekly"), Frequency::Unrecognized);
        assert_eq!(Frequency::from_tag(" weekly"), Frequency::Unrecognized);
        assert!(approx(calculate_monthly_value(10.0, "WEEKLY"), 10.0));
    }

    #[test]
    fn strict_parse_rejects_unknown_tags() {
        assert_eq!("biweekly".parse::<Frequency>(), Ok(Frequency::Biweekly));
        assert_eq!(
            "daily".parse::<Frequency>(),
            Err(FrequencyError::Unknown("daily".into()))
        );
    }

    #[test]
    fn known_tags_round_trip_through_display() {
        for frequency in Frequency::KNOWN {
            assert_eq!(Frequency::from_tag(&frequency.to_string()), frequency);
        }
    }

    #[test]
    fn serde_falls_back_for_unknown_tags() {
        let parsed: Vec<Frequency> =
            serde_json::from_str(r#"["weekly","quarterly","annually"]"#).expect("valid json");
        assert_eq!(
            parsed,
            vec![
                Frequency::Weekly,
                Frequency::Unrecognized,
                Frequency::Annually
            ]
        );
        let json = serde_json::to_string(&Frequency::Biweekly).expect("serialize");
        assert_eq!(json, r#""biweekly""#);
    }
}
