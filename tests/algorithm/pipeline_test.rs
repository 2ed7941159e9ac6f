#[cfg(test)]
mod tests {
    use diabetes_risk::models::raw::columns;
    use diabetes_risk::utils::test::{high_risk_record, low_risk_record, raw_record, sample_record};
    use diabetes_risk::{
        AgeBand, BloodPressureBand, BmiBand, Error, OutOfBandPolicy, PipelineConfig,
        RawHealthRecord, RawValue, RiskFeaturePipeline, RiskIndicator,
    };

    #[test]
    fn test_high_risk_features() {
        let features = RiskFeaturePipeline::default()
            .score(&high_risk_record())
            .unwrap();

        assert_eq!(features.bmi_band, BmiBand::Obese);
        assert_eq!(features.blood_pressure_band, BloodPressureBand::Stage1);
        assert_eq!(features.age_band, AgeBand::MiddleAge);
        assert_eq!(features.risk_score.value(), 5);
        assert_eq!(features.indicators.as_slice(), &RiskIndicator::ALL);
    }

    #[test]
    fn test_mid_range_record_fires_only_age() {
        let features = RiskFeaturePipeline::default()
            .score(&sample_record())
            .unwrap();

        assert_eq!(features.bmi_band, BmiBand::Overweight);
        assert_eq!(features.blood_pressure_band, BloodPressureBand::Prehypertension);
        assert_eq!(features.age_band, AgeBand::MiddleAge);
        assert_eq!(features.risk_score.value(), 1);
        assert_eq!(features.indicators.as_slice(), &[RiskIndicator::Age]);
    }

    #[test]
    fn test_low_risk_features() {
        let features = RiskFeaturePipeline::default()
            .score(&low_risk_record())
            .unwrap();

        assert_eq!(features.bmi_band, BmiBand::Normal);
        assert_eq!(features.blood_pressure_band, BloodPressureBand::Normal);
        assert_eq!(features.age_band, AgeBand::YoungAdult);
        assert_eq!(features.risk_score.value(), 0);
    }

    #[test]
    fn test_raw_record_with_text_numbers() {
        let raw = RawHealthRecord::default()
            .with(columns::AGE, "50")
            .with(columns::BMI, "32.0")
            .with(columns::BLOOD_PRESSURE, "145")
            .with(columns::GLUCOSE_LEVEL, "130")
            .with(columns::EXERCISE_HOURS_PER_WEEK, "1")
            .with(columns::FAMILY_HISTORY_DIABETES, true);

        let features = RiskFeaturePipeline::default().score_raw(&raw).unwrap();
        assert_eq!(features.risk_score.value(), 5);
    }

    #[test]
    fn test_unknown_glucose_is_rejected_without_partial_result() {
        let mut raw = raw_record(50.0, 32.0, 145.0, 130.0, true);
        raw.glucose_level = Some(RawValue::from("unknown"));

        let err = RiskFeaturePipeline::default().score_raw(&raw).unwrap_err();
        match err {
            Error::Validation { field, .. } => assert_eq!(field, columns::GLUCOSE_LEVEL),
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_batch_preserves_order() {
        let records = vec![
            raw_record(25.0, 22.0, 110.0, 90.0, false),
            raw_record(50.0, 32.0, 145.0, 130.0, true),
            raw_record(46.0, 27.0, 130.0, 110.0, false),
        ];
        let scores: Vec<u8> = RiskFeaturePipeline::default()
            .score_batch(&records)
            .into_iter()
            .map(|r| r.unwrap().risk_score.value())
            .collect();
        assert_eq!(scores, vec![0, 5, 1]);
    }

    #[test]
    fn test_clamp_policy_assigns_outer_bands() {
        let pipeline = RiskFeaturePipeline::new(PipelineConfig {
            out_of_band: OutOfBandPolicy::Clamp,
            ..PipelineConfig::default()
        });

        let features = pipeline
            .score_raw(&raw_record(101.0, 120.0, 250.0, 300.0, false))
            .unwrap();
        assert_eq!(features.age_band, AgeBand::Elderly);
        assert_eq!(features.bmi_band, BmiBand::Obese);
        assert_eq!(features.blood_pressure_band, BloodPressureBand::Stage2);

        let rejecting = RiskFeaturePipeline::default();
        assert!(matches!(
            rejecting.score_raw(&raw_record(101.0, 22.0, 110.0, 90.0, false)),
            Err(Error::OutOfBand { .. })
        ));
    }

    #[test]
    fn test_custom_thresholds() {
        let mut config = PipelineConfig::default();
        config.thresholds.age = 20;
        let features = RiskFeaturePipeline::new(config)
            .score(&low_risk_record())
            .unwrap();
        assert_eq!(features.risk_score.value(), 1);
        assert!(features.has(RiskIndicator::Age));
    }
}
