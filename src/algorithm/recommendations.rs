//! Personalised health recommendations
//!
//! Rule-based advice keyed on the same measurements the risk score uses, plus
//! lifestyle fields. The general health entry is always last.

use std::fmt;

use serde::Serialize;

use crate::models::categorical::{SmokingStatus, StressLevel};
use crate::models::record::HealthRecord;

/// Area a recommendation addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RecommendationCategory {
    Weight,
    BloodPressure,
    BloodSugar,
    PhysicalActivity,
    Smoking,
    Alcohol,
    Stress,
    General,
}

/// A titled list of concrete actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub title: &'static str,
    pub actions: &'static [&'static str],
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.title)?;
        for action in self.actions {
            write!(f, "\n- {action}")?;
        }
        Ok(())
    }
}

const fn rec(
    category: RecommendationCategory,
    title: &'static str,
    actions: &'static [&'static str],
) -> Recommendation {
    Recommendation {
        category,
        title,
        actions,
    }
}

const WEIGHT_MANAGEMENT: Recommendation = rec(
    RecommendationCategory::Weight,
    "Weight Management",
    &[
        "Consider consulting a nutritionist",
        "Aim for a balanced, calorie-controlled diet",
        "Set realistic weight loss goals",
    ],
);

const WEIGHT_WATCH: Recommendation = rec(
    RecommendationCategory::Weight,
    "Weight Watch",
    &[
        "Monitor your caloric intake",
        "Include more fruits and vegetables in your diet",
        "Maintain regular physical activity",
    ],
);

const BLOOD_PRESSURE_MANAGEMENT: Recommendation = rec(
    RecommendationCategory::BloodPressure,
    "Blood Pressure Management",
    &[
        "Reduce sodium intake",
        "Practice stress management techniques",
        "Consider DASH diet",
        "Regular BP monitoring",
    ],
);

const BLOOD_PRESSURE_WATCH: Recommendation = rec(
    RecommendationCategory::BloodPressure,
    "Blood Pressure Watch",
    &[
        "Limit salt intake",
        "Regular blood pressure monitoring",
        "Stay physically active",
    ],
);

const BLOOD_SUGAR_CONTROL: Recommendation = rec(
    RecommendationCategory::BloodSugar,
    "Blood Sugar Control",
    &[
        "Monitor blood sugar regularly",
        "Follow a balanced diet",
        "Consider consulting an endocrinologist",
    ],
);

const BLOOD_SUGAR_WATCH: Recommendation = rec(
    RecommendationCategory::BloodSugar,
    "Blood Sugar Watch",
    &[
        "Limit refined sugars",
        "Choose whole grains over processed grains",
        "Regular blood sugar monitoring",
    ],
);

const PHYSICAL_ACTIVITY: Recommendation = rec(
    RecommendationCategory::PhysicalActivity,
    "Physical Activity",
    &[
        "Aim for at least 150 minutes of moderate exercise per week",
        "Include both cardio and strength training",
        "Start slowly and gradually increase intensity",
    ],
);

const SMOKING_CESSATION: Recommendation = rec(
    RecommendationCategory::Smoking,
    "Smoking Cessation",
    &[
        "Consider nicotine replacement therapy",
        "Join a smoking cessation program",
        "Set a quit date",
        "Seek support from family and friends",
    ],
);

const ALCOHOL_MODERATION: Recommendation = rec(
    RecommendationCategory::Alcohol,
    "Alcohol Moderation",
    &[
        "Limit alcohol consumption",
        "Stay within recommended guidelines",
        "Consider alcohol-free days",
        "Stay hydrated",
    ],
);

const STRESS_MANAGEMENT: Recommendation = rec(
    RecommendationCategory::Stress,
    "Stress Management",
    &[
        "Practice relaxation techniques",
        "Consider meditation or yoga",
        "Maintain a regular sleep schedule",
        "Seek professional support if needed",
    ],
);

const GENERAL_HEALTH: Recommendation = rec(
    RecommendationCategory::General,
    "General Health Tips",
    &[
        "Get regular health check-ups",
        "Stay hydrated",
        "Maintain a balanced diet",
        "Get adequate sleep",
    ],
);

/// Weekly exercise hours below which activity advice is given (150 minutes)
pub const MIN_EXERCISE_HOURS: f64 = 2.5;

/// Weekly drinks above which alcohol advice is given
pub const MAX_DRINKS_PER_WEEK: f64 = 14.0;

/// Recommendations for a record, most specific first
#[must_use]
pub fn recommendations(record: &HealthRecord) -> Vec<Recommendation> {
    let mut out = Vec::with_capacity(8);

    let bmi = record.bmi();
    if bmi > 30.0 {
        out.push(WEIGHT_MANAGEMENT);
    } else if bmi > 25.0 {
        out.push(WEIGHT_WATCH);
    }

    let bp = record.blood_pressure();
    if bp > 140.0 {
        out.push(BLOOD_PRESSURE_MANAGEMENT);
    } else if bp > 120.0 {
        out.push(BLOOD_PRESSURE_WATCH);
    }

    let glucose = record.glucose_level();
    if glucose > 126.0 {
        out.push(BLOOD_SUGAR_CONTROL);
    } else if glucose > 100.0 {
        out.push(BLOOD_SUGAR_WATCH);
    }

    if record.exercise_hours_per_week() < MIN_EXERCISE_HOURS {
        out.push(PHYSICAL_ACTIVITY);
    }

    if record.smoking_status() == Some(SmokingStatus::Current) {
        out.push(SMOKING_CESSATION);
    }

    if record
        .alcohol_consumption_per_week()
        .is_some_and(|drinks| drinks > MAX_DRINKS_PER_WEEK)
    {
        out.push(ALCOHOL_MODERATION);
    }

    if matches!(
        record.stress_level(),
        Some(StressLevel::High | StressLevel::Moderate)
    ) {
        out.push(STRESS_MANAGEMENT);
    }

    out.push(GENERAL_HEALTH);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(record: &HealthRecord) -> Vec<RecommendationCategory> {
        recommendations(record).iter().map(|r| r.category).collect()
    }

    #[test]
    fn test_healthy_record_gets_general_only() {
        let record = HealthRecord::builder()
            .age(25)
            .bmi(22.0)
            .blood_pressure(110.0)
            .glucose_level(90.0)
            .exercise_hours_per_week(5.0)
            .family_history_diabetes(false)
            .build()
            .unwrap();
        assert_eq!(categories(&record), vec![RecommendationCategory::General]);
    }

    #[test]
    fn test_high_risk_record() {
        let record = HealthRecord::builder()
            .age(50)
            .bmi(32.0)
            .blood_pressure(145.0)
            .glucose_level(130.0)
            .exercise_hours_per_week(1.0)
            .family_history_diabetes(true)
            .smoking_status(SmokingStatus::Current)
            .alcohol_consumption_per_week(20.0)
            .stress_level(StressLevel::High)
            .build()
            .unwrap();

        let recs = recommendations(&record);
        assert_eq!(recs.len(), 8);
        assert_eq!(recs[0].title, "Weight Management");
        assert_eq!(recs[1].title, "Blood Pressure Management");
        assert_eq!(recs[2].title, "Blood Sugar Control");
        assert_eq!(recs.last().map(|r| r.category), Some(RecommendationCategory::General));
    }

    #[test]
    fn test_watch_tier() {
        let record = HealthRecord::builder()
            .age(40)
            .bmi(27.0)
            .blood_pressure(130.0)
            .glucose_level(110.0)
            .exercise_hours_per_week(2.5)
            .family_history_diabetes(false)
            .stress_level(StressLevel::Low)
            .build()
            .unwrap();

        let recs = recommendations(&record);
        let titles: Vec<_> = recs.iter().map(|r| r.title).collect();
        assert_eq!(
            titles,
            vec!["Weight Watch", "Blood Pressure Watch", "Blood Sugar Watch", "General Health Tips"]
        );
    }

    #[test]
    fn test_display() {
        let text = GENERAL_HEALTH.to_string();
        assert!(text.starts_with("General Health Tips:\n- Get regular health check-ups"));
    }
}
