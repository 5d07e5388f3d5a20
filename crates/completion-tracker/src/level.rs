//! Progress Level
//!
//! Three-bucket step function over the overall percent. The bucket fixes the
//! color; directionality only changes the label, so the two never disagree.

use serde::{Deserialize, Serialize};

use crate::config::{Directionality, LevelThresholds};

/// Position of a percent relative to the two thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LevelBucket {
    Low,
    Medium,
    High,
}

impl LevelBucket {
    pub fn classify(percent: u8, thresholds: LevelThresholds) -> Self {
        if percent >= thresholds.high_from {
            LevelBucket::High
        } else if percent >= thresholds.medium_from {
            LevelBucket::Medium
        } else {
            LevelBucket::Low
        }
    }
}

/// Color coding of a bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Red,
    Amber,
    Green,
}

impl Tone {
    /// CSS class used by the render surface
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Red => "tone-red",
            Tone::Amber => "tone-amber",
            Tone::Green => "tone-green",
        }
    }
}

/// Label plus color for the overall percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressLevel {
    pub bucket: LevelBucket,
    pub direction: Directionality,
}

impl ProgressLevel {
    pub fn new(percent: u8, thresholds: LevelThresholds, direction: Directionality) -> Self {
        Self {
            bucket: LevelBucket::classify(percent, thresholds),
            direction,
        }
    }

    /// "Low" / "Medium" / "High", inverted under the risk framing
    pub fn label(&self) -> &'static str {
        match (self.direction, self.bucket) {
            (Directionality::Progress, LevelBucket::Low) | (Directionality::Risk, LevelBucket::High) => "Low",
            (_, LevelBucket::Medium) => "Medium",
            (Directionality::Progress, LevelBucket::High) | (Directionality::Risk, LevelBucket::Low) => "High",
        }
    }

    /// "Progress level" / "Risk level"
    pub fn caption(&self) -> &'static str {
        match self.direction {
            Directionality::Progress => "Progress level",
            Directionality::Risk => "Risk level",
        }
    }

    pub fn tone(&self) -> Tone {
        match self.bucket {
            LevelBucket::Low => Tone::Red,
            LevelBucket::Medium => Tone::Amber,
            LevelBucket::High => Tone::Green,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_buckets_with_default_thresholds() {
        let t = LevelThresholds::for_direction(Directionality::Progress);
        assert_eq!(LevelBucket::classify(0, t), LevelBucket::Low);
        assert_eq!(LevelBucket::classify(1, t), LevelBucket::Medium);
        assert_eq!(LevelBucket::classify(99, t), LevelBucket::Medium);
        assert_eq!(LevelBucket::classify(100, t), LevelBucket::High);
    }

    #[test]
    fn test_classify_is_monotonic() {
        let t = LevelThresholds::for_direction(Directionality::Risk);
        let mut last = LevelBucket::Low;
        for p in 0..=100u8 {
            let b = LevelBucket::classify(p, t);
            assert!(b >= last);
            last = b;
        }
    }

    #[test]
    fn test_progress_label_and_tone() {
        let t = LevelThresholds::for_direction(Directionality::Progress);
        let low = ProgressLevel::new(0, t, Directionality::Progress);
        assert_eq!((low.label(), low.tone()), ("Low", Tone::Red));
        let high = ProgressLevel::new(100, t, Directionality::Progress);
        assert_eq!((high.label(), high.tone()), ("High", Tone::Green));
        assert_eq!(high.caption(), "Progress level");
    }

    #[test]
    fn test_risk_label_is_inverted_but_tone_follows_bucket() {
        let t = LevelThresholds::for_direction(Directionality::Risk);
        let early = ProgressLevel::new(10, t, Directionality::Risk);
        assert_eq!((early.label(), early.tone()), ("High", Tone::Red));
        let mid = ProgressLevel::new(50, t, Directionality::Risk);
        assert_eq!((mid.label(), mid.tone()), ("Medium", Tone::Amber));
        let late = ProgressLevel::new(90, t, Directionality::Risk);
        assert_eq!((late.label(), late.tone()), ("Low", Tone::Green));
        assert_eq!(late.caption(), "Risk level");
    }
}
