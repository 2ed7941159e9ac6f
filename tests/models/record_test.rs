#[cfg(test)]
mod tests {
    use diabetes_risk::models::raw::columns;
    use diabetes_risk::models::{Gender, SmokingStatus, StressLevel};
    use diabetes_risk::utils::test::raw_record;
    use diabetes_risk::{Error, HealthRecord, RawHealthRecord, RawValue};

    fn validation_field(result: Result<HealthRecord, Error>) -> String {
        match result {
            Err(Error::Validation { field, .. }) => field,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_categorical_labels_and_codes() {
        let raw = raw_record(50.0, 32.0, 145.0, 130.0, true)
            .with(columns::GENDER, "female")
            .with(columns::SMOKING_STATUS, 2.0)
            .with(columns::STRESS_LEVEL, "Moderate");

        let record = HealthRecord::try_from(&raw).unwrap();
        assert_eq!(record.gender(), Some(Gender::Female));
        assert_eq!(record.smoking_status(), Some(SmokingStatus::Current));
        assert_eq!(record.stress_level(), Some(StressLevel::Moderate));
        assert!(record.family_history_diabetes());
    }

    #[test]
    fn test_missing_required_field() {
        let mut raw = raw_record(50.0, 32.0, 145.0, 130.0, true);
        raw.bmi = None;
        assert_eq!(validation_field(HealthRecord::try_from(&raw)), columns::BMI);
    }

    #[test]
    fn test_implausible_values() {
        let negative_age = raw_record(-1.0, 22.0, 110.0, 90.0, false);
        assert_eq!(validation_field(HealthRecord::try_from(&negative_age)), columns::AGE);

        let fractional_age = raw_record(30.5, 22.0, 110.0, 90.0, false);
        assert_eq!(validation_field(HealthRecord::try_from(&fractional_age)), columns::AGE);

        let zero_bp = raw_record(30.0, 22.0, 0.0, 90.0, false);
        assert_eq!(
            validation_field(HealthRecord::try_from(&zero_bp)),
            columns::BLOOD_PRESSURE
        );

        let nan_glucose = raw_record(30.0, 22.0, 110.0, f64::NAN, false);
        assert_eq!(
            validation_field(HealthRecord::try_from(&nan_glucose)),
            columns::GLUCOSE_LEVEL
        );
    }

    #[test]
    fn test_family_history_must_be_binary() {
        let mut raw = raw_record(30.0, 22.0, 110.0, 90.0, false);
        raw.family_history_diabetes = Some(RawValue::Number(2.0));
        assert_eq!(
            validation_field(HealthRecord::try_from(&raw)),
            columns::FAMILY_HISTORY_DIABETES
        );
    }

    #[test]
    fn test_unknown_category_label() {
        let raw = raw_record(30.0, 22.0, 110.0, 90.0, false).with(columns::SMOKING_STATUS, "sometimes");
        assert_eq!(
            validation_field(HealthRecord::try_from(&raw)),
            columns::SMOKING_STATUS
        );
    }

    #[test]
    fn test_raw_record_from_json() {
        let raw: RawHealthRecord = serde_json::from_str(
            r#"{"Age": 50, "BMI": "32", "Blood_Pressure": 145, "Glucose_Level": 130,
                "Exercise_Hours_Per_Week": 1.5, "Family_History_Diabetes": true,
                "Gender": "Male"}"#,
        )
        .unwrap();

        assert_eq!(raw.bmi, Some(RawValue::Text("32".to_string())));
        assert_eq!(raw.stress_level, None);
        let record = HealthRecord::try_from(raw).unwrap();
        assert_eq!(record.age(), 50);
        assert_eq!(record.bmi(), 32.0);
        assert_eq!(record.gender(), Some(Gender::Male));
    }
}
