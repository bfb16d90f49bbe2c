//! Static advice tables
//!
//! Each status category maps to a fixed, ordered list of four short
//! recommendations. The tables are immutable and the caller always supplies
//! the status explicitly; nothing here remembers a previous calculation.

use crate::bmi::StatusCategory;
use crate::errors::EngineResult;
use serde::{Deserialize, Serialize};

/// Number of tips in every advice set
pub const ADVICE_LEN: usize = 4;

/// Ordered recommendations for one status category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdviceSet {
    pub status: StatusCategory,
    pub tips: &'static [&'static str; ADVICE_LEN],
}

impl AdviceSet {
    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tips.iter().copied()
    }

    pub fn contains(&self, tip: &str) -> bool {
        self.tips.iter().any(|t| *t == tip)
    }

    /// Owned copy of the tips, for response bodies
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_string).collect()
    }
}

/// Which wording table to use for labels and advice
///
/// Both variants share the same thresholds; they differ only in copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AdviceVariant {
    /// Underweight / Healthy / Overweight / High Risk
    #[default]
    Standard,
    /// Underweight / Good / Overweight / Obese
    Basic,
}

static STANDARD_UNDERWEIGHT: [&str; ADVICE_LEN] = [
    "Eat regular meals with nutritious foods",
    "Include protein-rich foods",
    "Maintain a consistent sleep routine",
    "Light strength activities can help",
];
static STANDARD_HEALTHY: [&str; ADVICE_LEN] = [
    "Maintain a balanced diet",
    "Stay physically active",
    "Drink enough water",
    "Get proper sleep",
];
static STANDARD_OVERWEIGHT: [&str; ADVICE_LEN] = [
    "Reduce sugary and junk foods",
    "Increase daily physical activity",
    "Practice portion control",
    "Eat more fruits and vegetables",
];
static STANDARD_HIGH_RISK: [&str; ADVICE_LEN] = [
    "Focus on gradual lifestyle changes",
    "Avoid highly processed foods",
    "Include regular physical activity if possible",
    "Consult a healthcare professional",
];

static BASIC_UNDERWEIGHT: [&str; ADVICE_LEN] = [
    "Increase calorie intake with nutritious foods",
    "Eat more protein-rich foods",
    "Include strength training exercises",
    "Maintain a regular meal schedule",
];
static BASIC_GOOD: [&str; ADVICE_LEN] = [
    "Maintain a balanced diet",
    "Continue regular physical activity",
    "Stay hydrated",
    "Get adequate sleep",
];
static BASIC_OVERWEIGHT: [&str; ADVICE_LEN] = [
    "Reduce sugary and fried foods",
    "Increase physical activity",
    "Practice portion control",
    "Eat more fruits and vegetables",
];
static BASIC_OBESE: [&str; ADVICE_LEN] = [
    "Follow a calorie-controlled diet",
    "Engage in daily exercise (walking, cardio)",
    "Avoid processed foods",
    "Consult a healthcare professional if needed",
];

impl AdviceVariant {
    /// Display label for a status under this variant
    pub fn label(&self, status: StatusCategory) -> &'static str {
        match (self, status) {
            (AdviceVariant::Standard, _) => status.label(),
            (AdviceVariant::Basic, StatusCategory::Underweight) => "Underweight",
            (AdviceVariant::Basic, StatusCategory::Healthy) => "Good",
            (AdviceVariant::Basic, StatusCategory::Overweight) => "Overweight",
            (AdviceVariant::Basic, StatusCategory::HighRisk) => "Obese",
        }
    }

    /// Advice set for a status under this variant
    pub fn advice(&self, status: StatusCategory) -> AdviceSet {
        let tips = match (self, status) {
            (AdviceVariant::Standard, StatusCategory::Underweight) => &STANDARD_UNDERWEIGHT,
            (AdviceVariant::Standard, StatusCategory::Healthy) => &STANDARD_HEALTHY,
            (AdviceVariant::Standard, StatusCategory::Overweight) => &STANDARD_OVERWEIGHT,
            (AdviceVariant::Standard, StatusCategory::HighRisk) => &STANDARD_HIGH_RISK,
            (AdviceVariant::Basic, StatusCategory::Underweight) => &BASIC_UNDERWEIGHT,
            (AdviceVariant::Basic, StatusCategory::Healthy) => &BASIC_GOOD,
            (AdviceVariant::Basic, StatusCategory::Overweight) => &BASIC_OVERWEIGHT,
            (AdviceVariant::Basic, StatusCategory::HighRisk) => &BASIC_OBESE,
        };
        AdviceSet { status, tips }
    }
}

/// Advice for a status from the canonical table
pub fn advice_for(status: StatusCategory) -> AdviceSet {
    AdviceVariant::Standard.advice(status)
}

/// Advice for a status given as free text
///
/// Fails with `UnknownCategory` when the label names no category.
pub fn advice_for_label(label: &str, variant: AdviceVariant) -> EngineResult<AdviceSet> {
    let status = label.parse::<StatusCategory>()?;
    Ok(variant.advice(status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EngineError;
    use std::collections::HashSet;

    const VARIANTS: [AdviceVariant; 2] = [AdviceVariant::Standard, AdviceVariant::Basic];

    #[test]
    fn test_every_category_has_four_tips() {
        for variant in VARIANTS {
            for status in StatusCategory::ALL {
                let advice = variant.advice(status);
                assert_eq!(advice.len(), ADVICE_LEN);
                assert!(!advice.is_empty());
                assert_eq!(advice.status, status);
                assert!(advice.iter().all(|tip| !tip.is_empty()));
            }
        }
    }

    #[test]
    fn test_advice_lists_are_distinct() {
        for variant in VARIANTS {
            let lists: HashSet<_> = StatusCategory::ALL
                .iter()
                .map(|s| variant.advice(*s).tips)
                .collect();
            assert_eq!(lists.len(), StatusCategory::ALL.len());
        }
    }

    #[test]
    fn test_healthy_advice_includes_balanced_diet() {
        let advice = advice_for(StatusCategory::Healthy);
        assert!(advice.contains("Maintain a balanced diet"));
        assert_eq!(advice.tips[0], "Maintain a balanced diet");
    }

    #[test]
    fn test_advice_order_is_stable() {
        let advice = advice_for(StatusCategory::HighRisk);
        assert_eq!(
            advice.to_vec(),
            vec![
                "Focus on gradual lifestyle changes",
                "Avoid highly processed foods",
                "Include regular physical activity if possible",
                "Consult a healthcare professional",
            ]
        );
    }

    #[test]
    fn test_basic_variant_labels() {
        assert_eq!(AdviceVariant::Basic.label(StatusCategory::Healthy), "Good");
        assert_eq!(AdviceVariant::Basic.label(StatusCategory::HighRisk), "Obese");
        assert_eq!(AdviceVariant::Standard.label(StatusCategory::HighRisk), "High Risk");
    }

    #[test]
    fn test_advice_for_label() {
        let advice = advice_for_label("Good", AdviceVariant::Basic).unwrap();
        assert_eq!(advice.status, StatusCategory::Healthy);
        assert!(advice.contains("Stay hydrated"));

        let advice = advice_for_label("high_risk", AdviceVariant::Standard).unwrap();
        assert_eq!(advice.status, StatusCategory::HighRisk);
    }

    #[test]
    fn test_advice_for_unknown_label() {
        let err = advice_for_label("Athletic", AdviceVariant::Standard).unwrap_err();
        assert!(matches!(err, EngineError::UnknownCategory(_)));
    }

    #[test]
    fn test_advice_serializes_as_list() {
        let json = serde_json::to_value(advice_for(StatusCategory::Overweight)).unwrap();
        assert_eq!(json["status"], "overweight");
        assert_eq!(json["tips"].as_array().unwrap().len(), ADVICE_LEN);
    }
}
