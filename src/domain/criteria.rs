use anyhow::Result;
use std::fmt;
use std::str::FromStr;

/// Price range filter (INR). Wire strings match the server's form choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceRange {
    #[default]
    Any,
    UpTo100,
    From100To200,
    From200To500,
    From500To1000,
    Above1000,
}

impl PriceRange {
    pub const ALL: [PriceRange; 6] = [
        PriceRange::Any,
        PriceRange::UpTo100,
        PriceRange::From100To200,
        PriceRange::From200To500,
        PriceRange::From500To1000,
        PriceRange::Above1000,
    ];

    /// The exact string the server expects in the request body.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceRange::Any => "None",
            PriceRange::UpTo100 => "0-100",
            PriceRange::From100To200 => "100-200",
            PriceRange::From200To500 => "200-500",
            PriceRange::From500To1000 => "500-1000",
            PriceRange::Above1000 => "1000+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceRange::Any => "None",
            other => other.as_str(),
        }
    }
}

impl FromStr for PriceRange {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Invalid price range: {}", s))
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Investment time horizon filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeHorizon {
    #[default]
    Any,
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl TimeHorizon {
    pub const ALL: [TimeHorizon; 4] = [
        TimeHorizon::Any,
        TimeHorizon::ShortTerm,
        TimeHorizon::MediumTerm,
        TimeHorizon::LongTerm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeHorizon::Any => "None",
            TimeHorizon::ShortTerm => "short-term",
            TimeHorizon::MediumTerm => "medium-term",
            TimeHorizon::LongTerm => "long-term",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeHorizon::Any => "None",
            TimeHorizon::ShortTerm => "Short-term",
            TimeHorizon::MediumTerm => "Medium-term",
            TimeHorizon::LongTerm => "Long-term",
        }
    }
}

impl FromStr for TimeHorizon {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Invalid time horizon: {}", s))
    }
}

impl fmt::Display for TimeHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk appetite filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RiskLevel {
    #[default]
    Any,
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Any,
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Any => "None",
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Any => "None",
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl FromStr for RiskLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Invalid risk level: {}", s))
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter selection captured from the form at submit time.
/// Lives for exactly one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub price_range: PriceRange,
    pub time_horizon: TimeHorizon,
    pub risk_level: RiskLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_range_wire_strings() {
        assert_eq!(PriceRange::Any.as_str(), "None");
        assert_eq!(PriceRange::UpTo100.as_str(), "0-100");
        assert_eq!(PriceRange::Above1000.as_str(), "1000+");
    }

    #[test]
    fn test_roundtrip_from_str() {
        for range in PriceRange::ALL {
            assert_eq!(range.as_str().parse::<PriceRange>().unwrap(), range);
        }
        for horizon in TimeHorizon::ALL {
            assert_eq!(horizon.as_str().parse::<TimeHorizon>().unwrap(), horizon);
        }
        for risk in RiskLevel::ALL {
            assert_eq!(risk.as_str().parse::<RiskLevel>().unwrap(), risk);
        }
    }

    #[test]
    fn test_unknown_value_rejected() {
        assert!("weekly".parse::<TimeHorizon>().is_err());
        assert!("extreme".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn test_default_criteria_is_broadest() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.price_range.as_str(), "None");
        assert_eq!(criteria.time_horizon.as_str(), "None");
        assert_eq!(criteria.risk_level.as_str(), "None");
    }
}
