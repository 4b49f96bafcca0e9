//! HardSoftScore - Two-level score with hard and soft constraints

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};
use std::str::FromStr;

use super::ScoreParseError;

/// A score with separate hard and soft constraint levels.
///
/// Penalties are stored as negative components, so a higher score is a
/// better schedule. A hard component of zero means the schedule is feasible.
///
/// When comparing scores:
/// 1. Hard scores are compared first
/// 2. Soft scores are only compared when hard scores are equal
///
/// # Examples
///
/// ```
/// use studyplan_core::HardSoftScore;
///
/// let overlapping = HardSoftScore::of(-1, -10);
/// let late = HardSoftScore::of(0, -200);
///
/// // Any feasible schedule beats an infeasible one
/// assert!(late > overlapping);
/// assert_eq!(late.soft_penalty(), 200);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HardSoftScore {
    hard: i64,
    soft: i64,
}

impl HardSoftScore {
    /// The zero score.
    pub const ZERO: HardSoftScore = HardSoftScore { hard: 0, soft: 0 };

    /// One hard constraint unit.
    pub const ONE_HARD: HardSoftScore = HardSoftScore { hard: 1, soft: 0 };

    /// One soft constraint unit.
    pub const ONE_SOFT: HardSoftScore = HardSoftScore { hard: 0, soft: 1 };

    /// Creates a new HardSoftScore.
    #[inline]
    pub const fn of(hard: i64, soft: i64) -> Self {
        HardSoftScore { hard, soft }
    }

    /// Creates a score with only a hard component.
    #[inline]
    pub const fn of_hard(hard: i64) -> Self {
        HardSoftScore { hard, soft: 0 }
    }

    /// Creates a score with only a soft component.
    #[inline]
    pub const fn of_soft(soft: i64) -> Self {
        HardSoftScore { hard: 0, soft }
    }

    /// Returns the hard score component.
    #[inline]
    pub const fn hard(&self) -> i64 {
        self.hard
    }

    /// Returns the soft score component.
    #[inline]
    pub const fn soft(&self) -> i64 {
        self.soft
    }

    /// Number of hard penalty points (never negative).
    #[inline]
    pub const fn hard_penalty(&self) -> i64 {
        if self.hard < 0 {
            -self.hard
        } else {
            0
        }
    }

    /// Number of soft penalty points (never negative).
    #[inline]
    pub const fn soft_penalty(&self) -> i64 {
        if self.soft < 0 {
            -self.soft
        } else {
            0
        }
    }

    /// True when no hard constraint is broken.
    #[inline]
    pub const fn is_feasible(&self) -> bool {
        self.hard >= 0
    }

    /// Scales both levels by `factor`.
    #[inline]
    pub const fn multiply(&self, factor: i64) -> Self {
        HardSoftScore::of(self.hard * factor, self.soft * factor)
    }

    /// Single-number view used by temperature based acceptors.
    #[inline]
    pub fn to_scalar(&self) -> f64 {
        self.hard as f64 * 1_000_000.0 + self.soft as f64
    }

    /// Parses a score such as `"-1hard/-30soft"`.
    pub fn parse(s: &str) -> Result<Self, ScoreParseError> {
        let trimmed = s.trim();
        let (hard_part, soft_part) = trimmed
            .split_once('/')
            .ok_or_else(|| ScoreParseError::new(trimmed, "expected '<n>hard/<n>soft'"))?;

        let hard = parse_level(hard_part, "hard", trimmed)?;
        let soft = parse_level(soft_part, "soft", trimmed)?;
        Ok(HardSoftScore::of(hard, soft))
    }
}

fn parse_level(part: &str, suffix: &str, whole: &str) -> Result<i64, ScoreParseError> {
    let digits = part
        .trim()
        .strip_suffix(suffix)
        .ok_or_else(|| ScoreParseError::new(whole, format!("missing '{suffix}' suffix")))?;
    digits
        .parse::<i64>()
        .map_err(|e| ScoreParseError::new(whole, e.to_string()))
}

impl Ord for HardSoftScore {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.hard.cmp(&other.hard) {
            Ordering::Equal => self.soft.cmp(&other.soft),
            other => other,
        }
    }
}

impl PartialOrd for HardSoftScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for HardSoftScore {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        HardSoftScore::of(self.hard + rhs.hard, self.soft + rhs.soft)
    }
}

impl AddAssign for HardSoftScore {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.hard += rhs.hard;
        self.soft += rhs.soft;
    }
}

impl Sub for HardSoftScore {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        HardSoftScore::of(self.hard - rhs.hard, self.soft - rhs.soft)
    }
}

impl Neg for HardSoftScore {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        HardSoftScore::of(-self.hard, -self.soft)
    }
}

impl std::iter::Sum for HardSoftScore {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(HardSoftScore::ZERO, Add::add)
    }
}

impl FromStr for HardSoftScore {
    type Err = ScoreParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HardSoftScore::parse(s)
    }
}

impl fmt::Debug for HardSoftScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HardSoftScore({}, {})", self.hard, self.soft)
    }
}

impl fmt::Display for HardSoftScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}hard/{}soft", self.hard, self.soft)
    }
}
