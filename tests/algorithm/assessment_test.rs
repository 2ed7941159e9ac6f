#[cfg(test)]
mod tests {
    use diabetes_risk::algorithm::recommendations::RecommendationCategory;
    use diabetes_risk::utils::test::{high_risk_record, low_risk_record};
    use diabetes_risk::{
        Error, FEATURE_COLUMNS, FeatureVector, Prediction, Predictor, Result, RiskFeaturePipeline,
        RiskLevel, ScorePredictor,
    };

    /// Predictor that always returns the same probability
    struct FixedPredictor(f64);

    impl Predictor for FixedPredictor {
        fn name(&self) -> &str {
            "fixed"
        }

        fn predict(&self, features: &FeatureVector) -> Result<Prediction> {
            assert_eq!(features.values().len(), FEATURE_COLUMNS.len());
            Prediction::new(self.0 >= 0.5, self.0)
        }
    }

    #[test]
    fn test_assess_high_risk_with_baseline() {
        let assessment = RiskFeaturePipeline::default()
            .assess(&high_risk_record(), &ScorePredictor::default())
            .unwrap();

        assert_eq!(assessment.features.risk_score.value(), 5);
        assert!(assessment.prediction.label);
        assert_eq!(assessment.risk_level, RiskLevel::VeryHigh);
        assert_eq!(
            assessment.recommendations.last().map(|r| r.category),
            Some(RecommendationCategory::General)
        );
        assert!(
            assessment
                .recommendations
                .iter()
                .any(|r| r.category == RecommendationCategory::BloodSugar)
        );
    }

    #[test]
    fn test_assess_with_custom_predictor() {
        let pipeline = RiskFeaturePipeline::default();

        let moderate = pipeline
            .assess(&low_risk_record(), &FixedPredictor(0.3))
            .unwrap();
        assert_eq!(moderate.risk_level, RiskLevel::Moderate);
        assert!(!moderate.prediction.label);

        let high = pipeline.assess(&low_risk_record(), &FixedPredictor(0.4)).unwrap();
        assert_eq!(high.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_invalid_probability_fails_assessment() {
        let err = RiskFeaturePipeline::default()
            .assess(&low_risk_record(), &FixedPredictor(1.5))
            .unwrap_err();
        assert!(matches!(err, Error::Prediction(_)));
    }

    #[test]
    fn test_assessment_serializes() {
        let assessment = RiskFeaturePipeline::default()
            .assess(&high_risk_record(), &ScorePredictor::default())
            .unwrap();
        let json = serde_json::to_value(&assessment).unwrap();
        assert_eq!(json["risk_level"], "Very High Risk");
        assert_eq!(json["features"]["blood_pressure_band"], "Stage 1");
        assert_eq!(json["features"]["age_band"], "Middle Age");
    }
}
