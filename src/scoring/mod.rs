//! Scoring engine for SCL-90 answer sheets.
//!
//! Everything here is pure: the same responses always produce the same report.

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::catalog::{FACTORS, Factor, ITEM_COUNT};

pub const MIN_RESPONSE: i64 = 1;
pub const MAX_RESPONSE: i64 = 5;

/// Responses at or above this value count as positive items.
pub const POSITIVE_THRESHOLD: u8 = 2;

/// Factor means at or above this value are flagged.
pub const ELEVATED_THRESHOLD: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("Expected 90 responses, got {0}")]
    WrongCount(usize),

    #[error("Response for item {item} must be between 1 and 5, got {value}")]
    OutOfRange { item: u8, value: i64 },
}

/// A complete, validated answer sheet: exactly 90 values in `1..=5`,
/// index `n` holding the answer to item `n + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSet([u8; ITEM_COUNT]);

impl ResponseSet {
    /// Answer to item `id`, if the id is on the form.
    #[must_use]
    pub fn get(&self, id: u8) -> Option<u8> {
        let index = usize::from(id).checked_sub(1)?;
        self.0.get(index).copied()
    }

    /// Iterates `(item id, value)` pairs in item order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (1u8..).zip(self.0.iter().copied())
    }

    #[must_use]
    pub fn to_map(&self) -> BTreeMap<u8, u8> {
        self.iter().collect()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<i64> {
        self.0.iter().map(|&v| i64::from(v)).collect()
    }

    #[must_use]
    pub fn score(&self) -> ScoreReport {
        score(&self.to_map())
    }
}

impl TryFrom<Vec<i64>> for ResponseSet {
    type Error = ScoringError;

    fn try_from(raw: Vec<i64>) -> Result<Self, Self::Error> {
        Self::try_from(raw.as_slice())
    }
}

impl TryFrom<&[i64]> for ResponseSet {
    type Error = ScoringError;

    fn try_from(raw: &[i64]) -> Result<Self, Self::Error> {
        if raw.len() != ITEM_COUNT {
            return Err(ScoringError::WrongCount(raw.len()));
        }

        let mut values = [0u8; ITEM_COUNT];
        for ((item, slot), &value) in (1u8..).zip(values.iter_mut()).zip(raw) {
            if !(MIN_RESPONSE..=MAX_RESPONSE).contains(&value) {
                return Err(ScoringError::OutOfRange { item, value });
            }
            *slot = u8::try_from(value).map_err(|_| ScoringError::OutOfRange { item, value })?;
        }

        Ok(Self(values))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorStatus {
    Normal,
    Elevated,
}

impl FactorStatus {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= ELEVATED_THRESHOLD {
            Self::Elevated
        } else {
            Self::Normal
        }
    }

    /// Label used in exported reports.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Normal => "正常",
            Self::Elevated => "需关注",
        }
    }
}

/// Derived metrics for one answer sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub total: u32,
    pub positive_count: u32,
    /// `total / 90` rendered with two fractional digits.
    pub average: String,
    /// Factor display name to mean item value.
    pub factor_scores: BTreeMap<String, f64>,
}

impl ScoreReport {
    #[must_use]
    pub fn factor_score(&self, factor: &Factor) -> f64 {
        self.factor_scores.get(factor.name).copied().unwrap_or(0.0)
    }

    /// Per-factor breakdown in report order.
    #[must_use]
    pub fn factors(&self) -> Vec<FactorResult> {
        FACTORS
            .iter()
            .map(|factor| {
                let score = self.factor_score(factor);
                FactorResult {
                    key: factor.kind.key(),
                    name: factor.name,
                    score,
                    status: FactorStatus::from_score(score),
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorResult {
    pub key: &'static str,
    pub name: &'static str,
    pub score: f64,
    pub status: FactorStatus,
}

/// Scores a possibly partial answer map. Missing items contribute nothing,
/// but every factor is still divided by its full item count.
#[must_use]
pub fn score(responses: &BTreeMap<u8, u8>) -> ScoreReport {
    let total: u32 = responses.values().map(|&v| u32::from(v)).sum();
    let positive_count = responses
        .values()
        .filter(|&&v| v >= POSITIVE_THRESHOLD)
        .count();

    let factor_scores = FACTORS
        .iter()
        .map(|factor| {
            let sum: u32 = factor
                .item_ids
                .iter()
                .filter_map(|id| responses.get(id))
                .map(|&v| u32::from(v))
                .sum();
            (factor.name.to_string(), mean(sum, factor.item_ids.len()))
        })
        .collect();

    ScoreReport {
        total,
        positive_count: u32::try_from(positive_count).unwrap_or(u32::MAX),
        average: format_average(f64::from(total) / ITEM_COUNT as f64),
        factor_scores,
    }
}

fn mean(sum: u32, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    f64::from(sum) / count as f64
}

/// Formats a mean with exactly two fractional digits.
#[must_use]
pub fn format_average(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FactorKind, factor};

    fn uniform(value: i64) -> ResponseSet {
        ResponseSet::try_from(vec![value; ITEM_COUNT]).unwrap()
    }

    #[test]
    fn all_ones_is_the_floor() {
        let report = uniform(1).score();
        assert_eq!(report.total, 90);
        assert_eq!(report.positive_count, 0);
        assert_eq!(report.average, "1.00");
        assert_eq!(report.factor_scores.len(), 10);
        assert!(report.factor_scores.values().all(|&s| (s - 1.0).abs() < f64::EPSILON));
    }

    #[test]
    fn all_fives_is_the_ceiling() {
        let report = uniform(5).score();
        assert_eq!(report.total, 450);
        assert_eq!(report.positive_count, 90);
        assert_eq!(report.average, "5.00");
        assert!(report.factor_scores.values().all(|&s| (s - 5.0).abs() < f64::EPSILON));
    }

    #[test]
    fn single_raised_item() {
        let mut raw = vec![1; ITEM_COUNT];
        raw[0] = 2;
        let report = ResponseSet::try_from(raw).unwrap().score();

        assert_eq!(report.total, 91);
        assert_eq!(report.positive_count, 1);
        assert_eq!(report.average, "1.01");

        let somatization = report.factor_score(factor(FactorKind::Somatization));
        assert!((somatization - 13.0 / 12.0).abs() < 1e-9);
        let depression = report.factor_score(factor(FactorKind::Depression));
        assert!((depression - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_items_count_as_zero() {
        let mut partial = BTreeMap::new();
        partial.insert(11u8, 4u8);
        partial.insert(24u8, 2u8);

        let report = score(&partial);
        assert_eq!(report.total, 6);
        assert_eq!(report.positive_count, 2);
        assert_eq!(report.average, "0.07");

        let hostility = report.factor_score(factor(FactorKind::Hostility));
        assert!((hostility - 1.0).abs() < f64::EPSILON);
        assert_eq!(report.factor_score(factor(FactorKind::Anxiety)), 0.0);
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            ResponseSet::try_from(vec![1; 89]),
            Err(ScoringError::WrongCount(89))
        );
        assert_eq!(
            ResponseSet::try_from(Vec::new()),
            Err(ScoringError::WrongCount(0))
        );
    }

    #[test]
    fn rejects_out_of_range_values() {
        let mut raw = vec![3; ITEM_COUNT];
        raw[41] = 6;
        assert_eq!(
            ResponseSet::try_from(raw),
            Err(ScoringError::OutOfRange { item: 42, value: 6 })
        );

        let mut raw = vec![3; ITEM_COUNT];
        raw[0] = 0;
        assert_eq!(
            ResponseSet::try_from(raw),
            Err(ScoringError::OutOfRange { item: 1, value: 0 })
        );
    }

    #[test]
    fn factor_status_threshold() {
        assert_eq!(FactorStatus::from_score(1.99), FactorStatus::Normal);
        assert_eq!(FactorStatus::from_score(2.0), FactorStatus::Elevated);
        assert_eq!(FactorStatus::Elevated.label(), "需关注");
    }

    #[test]
    fn breakdown_follows_factor_order() {
        let results = uniform(2).score().factors();
        assert_eq!(results.len(), 10);
        assert_eq!(results[0].key, "somatization");
        assert_eq!(results[9].name, "其他");
        assert!(results.iter().all(|r| r.status == FactorStatus::Elevated));
    }

    #[test]
    fn response_set_lookup() {
        let mut raw = vec![1; ITEM_COUNT];
        raw[89] = 4;
        let set = ResponseSet::try_from(raw).unwrap();
        assert_eq!(set.get(90), Some(4));
        assert_eq!(set.get(0), None);
        assert_eq!(set.get(91), None);
        assert_eq!(set.to_vec().len(), ITEM_COUNT);
    }
}
