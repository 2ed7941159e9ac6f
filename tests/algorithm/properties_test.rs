#[cfg(test)]
mod tests {
    use diabetes_risk::algorithm::risk::bands::{AGE_BANDS, BLOOD_PRESSURE_BANDS, BMI_BANDS};
    use diabetes_risk::{
        BmiBand, HealthRecord, OutOfBandPolicy, RiskFeaturePipeline, classify,
    };

    fn record(age: u32, bmi: f64, bp: f64, glucose: f64, family: bool) -> HealthRecord {
        HealthRecord::builder()
            .age(age)
            .bmi(bmi)
            .blood_pressure(bp)
            .glucose_level(glucose)
            .exercise_hours_per_week(2.0)
            .family_history_diabetes(family)
            .build()
            .unwrap()
    }

    #[test]
    fn test_band_tables_are_valid() {
        BMI_BANDS.validate().unwrap();
        BLOOD_PRESSURE_BANDS.validate().unwrap();
        AGE_BANDS.validate().unwrap();
    }

    #[test]
    fn test_bmi_boundaries() {
        let bmi = |v| BMI_BANDS.classify(v, OutOfBandPolicy::Reject).unwrap();
        assert_eq!(bmi(18.5), BmiBand::Normal);
        assert_eq!(bmi(24.9), BmiBand::Overweight);
        assert_eq!(bmi(100.0), BmiBand::Obese);
        assert_eq!(bmi(18.49), BmiBand::Underweight);
    }

    #[test]
    fn test_bmi_band_index_is_monotonic() {
        let mut previous = 0;
        for step in 0..=10_000 {
            let value = f64::from(step) * 0.01;
            let idx = BMI_BANDS.band_index(value, OutOfBandPolicy::Reject).unwrap();
            assert!(idx >= previous, "band index decreased at {value}");
            assert!(idx < BMI_BANDS.labels.len());
            previous = idx;
        }
    }

    #[test]
    fn test_free_classify_matches_table() {
        for value in [0.0, 18.5, 22.0, 27.3, 29.9, 55.0, 100.0] {
            let free = classify(value, BMI_BANDS.boundaries, BMI_BANDS.labels).unwrap();
            let table = BMI_BANDS.classify(value, OutOfBandPolicy::Reject).unwrap();
            assert_eq!(*free, table);
        }
    }

    #[test]
    fn test_score_is_bounded_and_deterministic() {
        let pipeline = RiskFeaturePipeline::default();
        for age in [18, 45, 46, 70] {
            for bmi in [17.0, 30.0, 30.1, 45.0] {
                for bp in [90.0, 140.0, 141.0, 190.0] {
                    for glucose in [70.0, 126.0, 127.0, 250.0] {
                        for family in [false, true] {
                            let r = record(age, bmi, bp, glucose, family);
                            let first = pipeline.score(&r).unwrap();
                            assert!(first.risk_score.value() <= 5);
                            assert_eq!(first, pipeline.score(&r).unwrap());
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_crossing_bmi_threshold_adds_exactly_one() {
        let pipeline = RiskFeaturePipeline::default();
        for (age, bp, glucose, family) in [(30, 110.0, 90.0, false), (60, 150.0, 140.0, true)] {
            let before = pipeline.score(&record(age, 29.0, bp, glucose, family)).unwrap();
            let after = pipeline.score(&record(age, 31.0, bp, glucose, family)).unwrap();
            assert_eq!(after.risk_score.value(), before.risk_score.value() + 1);
        }
    }

    #[test]
    fn test_thresholds_are_strict() {
        let at_thresholds = RiskFeaturePipeline::default()
            .score(&record(45, 30.0, 140.0, 126.0, false))
            .unwrap();
        assert_eq!(at_thresholds.risk_score.value(), 0);
    }
}
