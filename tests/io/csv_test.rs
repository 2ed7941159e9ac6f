#[cfg(test)]
mod tests {
    use diabetes_risk::utils::test::write_csv;
    use diabetes_risk::{
        DatasetSummary, Error, PipelineConfig, RiskFeaturePipeline, ScoredRow, load_csv, load_dataset,
    };

    use crate::utils::CSV_HEADER;

    fn dataset_csv() -> String {
        format!(
            "{CSV_HEADER}
50,Female,32,145,130,1,Current,20,High,1,1
25,Male,22,110,90,4,Never,0,Low,0,0
40,Male,25,120,unknown,3,Former,2,Moderate,0,
60,Female,26,230,100,2,Never,1,Low,0,1
"
        )
    }

    #[test]
    fn test_load_score_and_summarise() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "diabetes_dataset.csv", &dataset_csv());

        let dataset = load_dataset(&path, &PipelineConfig::default()).unwrap();
        assert_eq!(dataset.len(), 4);
        assert!(dataset.missing_columns().is_empty());

        let results = RiskFeaturePipeline::default().score_batch(&dataset.records);
        assert!(results[0].is_ok());
        assert!(results[2].is_err());
        assert!(results[3].is_err());

        let summary = DatasetSummary::from_results(&dataset, &results).unwrap();
        assert_eq!(summary.scored, 2);
        assert_eq!(summary.validation_errors, 1);
        assert_eq!(summary.out_of_band_errors, 1);
        assert_eq!(summary.score_histogram[5], 1);
        assert_eq!(summary.score_histogram[0], 1);
        assert!(summary.missing_values.is_empty());
    }

    #[test]
    fn test_undecodable_row_does_not_block_others() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diabetes_dataset.csv");
        let mut bytes = format!("{CSV_HEADER}\n50,Female,32,145,130,1,Current,20,High,1,1\n")
            .into_bytes();
        bytes.extend_from_slice(b"40,Male,25,120,\xff\xfe,3,Former,2,Moderate,0,0\n");
        bytes.extend_from_slice(b"25,Male,22,110,90,4,Never,0,Low,0,0\n");
        std::fs::write(&path, bytes).unwrap();

        let dataset = load_csv(&path).unwrap();
        assert_eq!(dataset.len(), 3);

        let results = RiskFeaturePipeline::default().score_batch(&dataset.records);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(Error::Validation { .. })));
        assert_eq!(results[2].as_ref().unwrap().risk_score.value(), 0);
    }

    #[test]
    fn test_scored_rows_follow_dataset_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "data.csv", &dataset_csv());
        let dataset = load_csv(&path).unwrap();
        let results = RiskFeaturePipeline::default().score_batch(&dataset.records);

        let rows: Vec<ScoredRow> = results
            .iter()
            .zip(&dataset.diagnoses)
            .enumerate()
            .map(|(i, (r, d))| ScoredRow::from_result(i, r, *d))
            .collect();

        assert_eq!(rows[0].risk_score, Some(5));
        assert_eq!(rows[0].diagnosis, Some(true));
        assert_eq!(rows[1].risk_score, Some(0));
        assert!(rows[2].error.is_some());
        assert_eq!(rows[2].diagnosis, None);
        assert_eq!(rows[3].row, 3);
    }

    #[test]
    fn test_short_rows_leave_fields_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "short.csv", &format!("{CSV_HEADER}\n50,Female,32\n"));
        let dataset = load_csv(&path).unwrap();
        assert_eq!(dataset.len(), 1);
        assert!(dataset.records[0].glucose_level.is_none());

        let results = RiskFeaturePipeline::default().score_batch(&dataset.records);
        assert!(results[0].is_err());
    }
}
