#[cfg(test)]
mod tests {
    use diabetes_risk::utils::io::read_parquet;
    use diabetes_risk::{
        PipelineConfig, RawValue, RiskFeaturePipeline, ScoredRow, load_dataset, load_parquet,
        write_scores_parquet,
    };

    use crate::utils::{survey_batch, write_parquet};

    #[test]
    fn test_load_typed_parquet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("survey.parquet");
        write_parquet(&path, &survey_batch());

        let dataset = load_dataset(&path, &PipelineConfig::default()).unwrap();
        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.diagnoses, vec![Some(true), Some(false), None, Some(true)]);
        assert_eq!(dataset.records[0].age, Some(RawValue::Number(50.0)));
        assert_eq!(dataset.records[0].family_history_diabetes, Some(RawValue::Bool(true)));
        assert_eq!(dataset.records[1].alcohol_consumption_per_week, None);

        let results = RiskFeaturePipeline::default().score_batch(&dataset.records);
        assert_eq!(results[0].as_ref().unwrap().risk_score.value(), 5);
        assert_eq!(results[1].as_ref().unwrap().risk_score.value(), 0);
        assert!(results[2].is_err());
        assert!(results[3].is_err());
    }

    #[test]
    fn test_load_parquet_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_parquet(&dir.path().join("part-0.parquet"), &survey_batch());
        write_parquet(&dir.path().join("part-1.parquet"), &survey_batch());

        let dataset = load_parquet(dir.path(), 2).unwrap();
        assert_eq!(dataset.len(), 8);
        assert_eq!(dataset.diagnoses.len(), 8);
        assert_eq!(dataset.records[4].age, Some(RawValue::Number(50.0)));
    }

    #[test]
    fn test_export_scores() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("survey.parquet");
        write_parquet(&input, &survey_batch());

        let dataset = load_dataset(&input, &PipelineConfig::default()).unwrap();
        let results = RiskFeaturePipeline::default().score_batch(&dataset.records);
        let rows: Vec<ScoredRow> = dataset
            .labeled()
            .zip(&results)
            .enumerate()
            .map(|(i, ((_, diagnosis), result))| ScoredRow::from_result(i, result, diagnosis))
            .collect();

        let output = dir.path().join("scores.parquet");
        write_scores_parquet(&output, &rows).unwrap();

        let batches = read_parquet(&output, 1024).unwrap();
        let decoded: Vec<ScoredRow> = serde_arrow::from_record_batch(&batches[0]).unwrap();
        assert_eq!(decoded, rows);
        assert_eq!(decoded[0].bmi_band.as_deref(), Some("Obese"));
    }
}
