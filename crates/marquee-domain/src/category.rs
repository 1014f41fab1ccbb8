//! Quality category module - ordered bands for crisp quality scores

use serde::{Deserialize, Serialize};

/// Band a crisp quality score falls into
///
/// Bands are closed on the lower edge and open on the upper edge:
/// - Bad: below 3
/// - Mediocre: [3, 5)
/// - Good: [5, 7)
/// - Excellent: 7 and above
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QualityCategory {
    /// Score below 3
    Bad,

    /// Score in [3, 5)
    Mediocre,

    /// Score in [5, 7)
    Good,

    /// Score of 7 or more
    Excellent,
}

impl QualityCategory {
    /// Lower edge of the Mediocre band
    pub const MEDIOCRE_FROM: f64 = 3.0;
    /// Lower edge of the Good band
    pub const GOOD_FROM: f64 = 5.0;
    /// Lower edge of the Excellent band
    pub const EXCELLENT_FROM: f64 = 7.0;

    /// Get the band label
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityCategory::Bad => "Bad",
            QualityCategory::Mediocre => "Mediocre",
            QualityCategory::Good => "Good",
            QualityCategory::Excellent => "Excellent",
        }
    }

    /// Parse a band label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bad" => Some(QualityCategory::Bad),
            "mediocre" => Some(QualityCategory::Mediocre),
            "good" => Some(QualityCategory::Good),
            "excellent" => Some(QualityCategory::Excellent),
            _ => None,
        }
    }

    /// Band for a crisp score
    ///
    /// NaN has no band of its own and maps to Bad.
    pub fn from_score(score: f64) -> Self {
        if score.is_nan() || score < Self::MEDIOCRE_FROM {
            QualityCategory::Bad
        } else if score < Self::GOOD_FROM {
            QualityCategory::Mediocre
        } else if score < Self::EXCELLENT_FROM {
            QualityCategory::Good
        } else {
            QualityCategory::Excellent
        }
    }
}

impl std::fmt::Display for QualityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for QualityCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid quality category: {}", s))
    }
}

/// Map a crisp score to its band
///
/// # Examples
///
/// ```
/// use marquee_domain::{categorize, QualityCategory};
///
/// assert_eq!(categorize(7.0), QualityCategory::Excellent);
/// assert_eq!(categorize(4.2).as_str(), "Mediocre");
/// ```
pub fn categorize(score: f64) -> QualityCategory {
    QualityCategory::from_score(score)
}
