//! Risk flags raised while projecting a total

use serde::{Serialize, Serializer};
use std::fmt;

/// Label written when no flags were raised
pub const NO_FLAGS: &str = "NONE";
/// Separator between flag labels in the persisted form
pub const FLAG_SEPARATOR: char = ';';

/// Free-throw rate thresholds (attempts per elapsed minute)
const HIGH_FT_RATE: f64 = 1.10;
const ELEVATED_FT_RATE: f64 = 0.85;
/// Three-point percentage thresholds
const THREE_POINT_HOT: f64 = 0.42;
const THREE_POINT_COLD: f64 = 0.31;

/// Flag category; a flag set holds at most one flag per category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagCategory {
    Bonus,
    FreeThrowParade,
    FreeThrowRate,
    ThreePoint,
    Overtime,
}

/// A single risk flag with its numeric payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiskFlag {
    /// Bonus reached with more than six minutes left in quarters 1-3
    EarlyBonusHighRisk,
    /// Bonus is on
    BonusWhistlesOn,
    /// Free-throw parade in progress
    FtParade,
    /// Free throws per minute at or above 1.10
    HighFtRate(f64),
    /// Free throws per minute at or above 0.85
    ElevatedFtRate(f64),
    /// Free throws per minute below 0.85
    FtRateOk(f64),
    /// Three-point percentage at or above 42%
    ThreePointHot(f64),
    /// Three-point percentage at or below 31%
    ThreePointCold(f64),
    /// Three-point percentage in the normal band
    ThreePointNormal(f64),
    /// Overtime adjustment applied
    OvertimeOn {
        probability_pct: f64,
        points_added: f64,
    },
}

impl RiskFlag {
    /// Classify a free-throw attempt rate
    pub fn from_ft_rate(per_minute: f64) -> Self {
        if per_minute >= HIGH_FT_RATE {
            Self::HighFtRate(per_minute)
        } else if per_minute >= ELEVATED_FT_RATE {
            Self::ElevatedFtRate(per_minute)
        } else {
            Self::FtRateOk(per_minute)
        }
    }

    /// Classify a three-point percentage given as a fraction
    pub fn from_three_point_pct(pct: f64) -> Self {
        if pct >= THREE_POINT_HOT {
            Self::ThreePointHot(pct)
        } else if pct <= THREE_POINT_COLD {
            Self::ThreePointCold(pct)
        } else {
            Self::ThreePointNormal(pct)
        }
    }

    pub fn category(&self) -> FlagCategory {
        match self {
            Self::EarlyBonusHighRisk | Self::BonusWhistlesOn => FlagCategory::Bonus,
            Self::FtParade => FlagCategory::FreeThrowParade,
            Self::HighFtRate(_) | Self::ElevatedFtRate(_) | Self::FtRateOk(_) => {
                FlagCategory::FreeThrowRate
            }
            Self::ThreePointHot(_) | Self::ThreePointCold(_) | Self::ThreePointNormal(_) => {
                FlagCategory::ThreePoint
            }
            Self::OvertimeOn { .. } => FlagCategory::Overtime,
        }
    }
}

impl fmt::Display for RiskFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EarlyBonusHighRisk => write!(f, "EARLY_BONUS_HIGH_RISK"),
            Self::BonusWhistlesOn => write!(f, "BONUS_WHISTLES_ON"),
            Self::FtParade => write!(f, "FT_PARADE"),
            Self::HighFtRate(rate) => write!(f, "HIGH_FT_RATE({rate:.2}/min)"),
            Self::ElevatedFtRate(rate) => write!(f, "ELEVATED_FT_RATE({rate:.2}/min)"),
            Self::FtRateOk(rate) => write!(f, "FT_RATE_OK({rate:.2}/min)"),
            Self::ThreePointHot(pct) => write!(f, "3P_HOT({:.1}%)", pct * 100.0),
            Self::ThreePointCold(pct) => write!(f, "3P_COLD({:.1}%)", pct * 100.0),
            Self::ThreePointNormal(pct) => write!(f, "3P_NORMAL({:.1}%)", pct * 100.0),
            Self::OvertimeOn {
                probability_pct,
                points_added,
            } => write!(f, "OT_ON({probability_pct:.1}% -> +{points_added:.1} pts)"),
        }
    }
}

/// Ordered flag set; insertion order is detection order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RiskFlags(Vec<RiskFlag>);

impl RiskFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a flag unless its category is already present.
    /// Returns whether the flag was added.
    pub fn push(&mut self, flag: RiskFlag) -> bool {
        if self.contains_category(flag.category()) {
            return false;
        }
        self.0.push(flag);
        true
    }

    pub fn contains_category(&self, category: FlagCategory) -> bool {
        self.0.iter().any(|f| f.category() == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RiskFlag> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Display labels in detection order
    pub fn labels(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// Split a persisted flag string back into labels (`NONE` yields none)
    pub fn parse_labels(joined: &str) -> Vec<String> {
        let joined = joined.trim();
        if joined.is_empty() || joined == NO_FLAGS {
            return Vec::new();
        }
        joined
            .split(FLAG_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

impl fmt::Display for RiskFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str(NO_FLAGS);
        }
        for (i, flag) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{FLAG_SEPARATOR}")?;
            }
            write!(f, "{flag}")?;
        }
        Ok(())
    }
}

impl Serialize for RiskFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
