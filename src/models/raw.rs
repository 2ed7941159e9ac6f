//! Untyped health records as they arrive from files or forms
//!
//! Nothing in here is validated. `HealthRecord::try_from` turns a
//! [`RawHealthRecord`] into a typed record or a validation error.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Dataset column names
pub mod columns {
    pub const AGE: &str = "Age";
    pub const GENDER: &str = "Gender";
    pub const BMI: &str = "BMI";
    pub const BLOOD_PRESSURE: &str = "Blood_Pressure";
    pub const GLUCOSE_LEVEL: &str = "Glucose_Level";
    pub const EXERCISE_HOURS_PER_WEEK: &str = "Exercise_Hours_Per_Week";
    pub const SMOKING_STATUS: &str = "Smoking_Status";
    pub const ALCOHOL_CONSUMPTION_PER_WEEK: &str = "Alcohol_Consumption_Per_Week";
    pub const STRESS_LEVEL: &str = "Stress_Level";
    pub const FAMILY_HISTORY_DIABETES: &str = "Family_History_Diabetes";
    pub const DIABETES_DIAGNOSIS: &str = "Diabetes_Diagnosis";

    /// Every input column in dataset order
    pub const INPUT_COLUMNS: [&str; 10] = [
        AGE,
        GENDER,
        BMI,
        BLOOD_PRESSURE,
        GLUCOSE_LEVEL,
        EXERCISE_HOURS_PER_WEEK,
        SMOKING_STATUS,
        ALCOHOL_CONSUMPTION_PER_WEEK,
        STRESS_LEVEL,
        FAMILY_HISTORY_DIABETES,
    ];
}

/// A single untyped cell value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Infer a value from a text cell. Empty cells are `None`.
    #[must_use]
    pub fn infer(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Ok(number) = trimmed.parse::<f64>() {
            return Some(Self::Number(number));
        }
        match trimmed.to_lowercase().as_str() {
            "true" => Some(Self::Bool(true)),
            "false" => Some(Self::Bool(false)),
            _ => Some(Self::Text(trimmed.to_string())),
        }
    }

    /// Interpret the value as a finite number
    pub fn as_number(&self, field: &str) -> Result<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                Error::validation(field, format!("'{s}' is not numeric"))
            })?,
            Self::Bool(b) => {
                return Err(Error::validation(
                    field,
                    format!("boolean {b} is not numeric"),
                ));
            }
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(Error::validation(field, format!("{value} is not a finite number")))
        }
    }

    /// Interpret the value as a 0/1 indicator
    ///
    /// Numeric text such as `"1.0"` is read as a number first, then the words
    /// true/false and yes/no are accepted.
    pub fn as_flag(&self, field: &str) -> Result<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            Self::Number(n) => number_flag(field, *n),
            Self::Text(s) => {
                let s = s.trim();
                if let Ok(n) = s.parse::<f64>() {
                    return number_flag(field, n);
                }
                match s.to_lowercase().as_str() {
                    "true" | "yes" => Ok(true),
                    "false" | "no" => Ok(false),
                    other => Err(Error::validation(
                        field,
                        format!("'{other}' is not a 0/1 indicator"),
                    )),
                }
            }
        }
    }
}

fn number_flag(field: &str, n: f64) -> Result<bool> {
    if n == 0.0 {
        Ok(false)
    } else if n == 1.0 {
        Ok(true)
    } else {
        Err(Error::validation(
            field,
            format!("{n} is not a 0/1 indicator"),
        ))
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A health record with no guarantees about its contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawHealthRecord {
    #[serde(rename = "Age")]
    pub age: Option<RawValue>,
    #[serde(rename = "Gender")]
    pub gender: Option<RawValue>,
    #[serde(rename = "BMI")]
    pub bmi: Option<RawValue>,
    #[serde(rename = "Blood_Pressure")]
    pub blood_pressure: Option<RawValue>,
    #[serde(rename = "Glucose_Level")]
    pub glucose_level: Option<RawValue>,
    #[serde(rename = "Exercise_Hours_Per_Week")]
    pub exercise_hours_per_week: Option<RawValue>,
    #[serde(rename = "Smoking_Status")]
    pub smoking_status: Option<RawValue>,
    #[serde(rename = "Alcohol_Consumption_Per_Week")]
    pub alcohol_consumption_per_week: Option<RawValue>,
    #[serde(rename = "Stress_Level")]
    pub stress_level: Option<RawValue>,
    #[serde(rename = "Family_History_Diabetes")]
    pub family_history_diabetes: Option<RawValue>,
}

impl RawHealthRecord {
    /// Set a field by dataset column name. Unknown columns are ignored and reported as `false`.
    pub fn set(&mut self, column: &str, value: Option<RawValue>) -> bool {
        let slot = match column {
            columns::AGE => &mut self.age,
            columns::GENDER => &mut self.gender,
            columns::BMI => &mut self.bmi,
            columns::BLOOD_PRESSURE => &mut self.blood_pressure,
            columns::GLUCOSE_LEVEL => &mut self.glucose_level,
            columns::EXERCISE_HOURS_PER_WEEK => &mut self.exercise_hours_per_week,
            columns::SMOKING_STATUS => &mut self.smoking_status,
            columns::ALCOHOL_CONSUMPTION_PER_WEEK => &mut self.alcohol_consumption_per_week,
            columns::STRESS_LEVEL => &mut self.stress_level,
            columns::FAMILY_HISTORY_DIABETES => &mut self.family_history_diabetes,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// Builder-style variant of [`RawHealthRecord::set`]
    #[must_use]
    pub fn with(mut self, column: &str, value: impl Into<RawValue>) -> Self {
        self.set(column, Some(value.into()));
        self
    }

    /// Get a field by dataset column name
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&RawValue> {
        match column {
            columns::AGE => self.age.as_ref(),
            columns::GENDER => self.gender.as_ref(),
            columns::BMI => self.bmi.as_ref(),
            columns::BLOOD_PRESSURE => self.blood_pressure.as_ref(),
            columns::GLUCOSE_LEVEL => self.glucose_level.as_ref(),
            columns::EXERCISE_HOURS_PER_WEEK => self.exercise_hours_per_week.as_ref(),
            columns::SMOKING_STATUS => self.smoking_status.as_ref(),
            columns::ALCOHOL_CONSUMPTION_PER_WEEK => self.alcohol_consumption_per_week.as_ref(),
            columns::STRESS_LEVEL => self.stress_level.as_ref(),
            columns::FAMILY_HISTORY_DIABETES => self.family_history_diabetes.as_ref(),
            _ => None,
        }
    }

    /// Columns with no value
    #[must_use]
    pub fn missing_columns(&self) -> Vec<&'static str> {
        columns::INPUT_COLUMNS
            .iter()
            .copied()
            .filter(|c| self.get(c).is_none())
            .collect()
    }
}
