use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, BooleanArray, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// Header shared by the CSV fixtures
pub const CSV_HEADER: &str = "Age,Gender,BMI,Blood_Pressure,Glucose_Level,Exercise_Hours_Per_Week,Smoking_Status,Alcohol_Consumption_Per_Week,Stress_Level,Family_History_Diabetes,Diabetes_Diagnosis";

/// A small dataset in the layout the health survey files use: integer age,
/// float measurements, categorical text and a boolean family history flag.
/// Row 2 has an unreadable glucose value and row 3 an out-of-range blood pressure.
#[must_use]
pub fn survey_batch() -> RecordBatch {
    let schema = Schema::new(vec![
        Field::new("Age", DataType::Int64, true),
        Field::new("Gender", DataType::Utf8, true),
        Field::new("BMI", DataType::Float64, true),
        Field::new("Blood_Pressure", DataType::Float64, true),
        Field::new("Glucose_Level", DataType::Utf8, true),
        Field::new("Exercise_Hours_Per_Week", DataType::Float64, true),
        Field::new("Smoking_Status", DataType::Utf8, true),
        Field::new("Stress_Level", DataType::Utf8, true),
        Field::new("Family_History_Diabetes", DataType::Boolean, true),
        Field::new("Diabetes_Diagnosis", DataType::Int64, true),
    ]);

    let columns: Vec<ArrayRef> = vec![
        Arc::new(Int64Array::from(vec![50, 25, 40, 60])),
        Arc::new(StringArray::from(vec![Some("Female"), Some("Male"), None, Some("Male")])),
        Arc::new(Float64Array::from(vec![32.0, 22.0, 25.0, 26.0])),
        Arc::new(Float64Array::from(vec![145.0, 110.0, 120.0, 230.0])),
        Arc::new(StringArray::from(vec!["130", "90", "unknown", "100"])),
        Arc::new(Float64Array::from(vec![1.0, 4.0, 3.0, 2.0])),
        Arc::new(StringArray::from(vec![
            Some("Current"),
            Some("Never"),
            None,
            Some("Former"),
        ])),
        Arc::new(StringArray::from(vec![
            Some("High"),
            Some("Low"),
            Some("Moderate"),
            None,
        ])),
        Arc::new(BooleanArray::from(vec![true, false, false, false])),
        Arc::new(Int64Array::from(vec![Some(1), Some(0), None, Some(1)])),
    ];

    RecordBatch::try_new(Arc::new(schema), columns).unwrap()
}

/// Write a batch to a Parquet file
pub fn write_parquet(path: &Path, batch: &RecordBatch) {
    let file = File::create(path).unwrap();
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None).unwrap();
    writer.write(batch).unwrap();
    writer.close().unwrap();
}
