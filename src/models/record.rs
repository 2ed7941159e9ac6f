//! Validated health record
//!
//! A [`HealthRecord`] can only be obtained through validation, so every
//! downstream computation may assume its invariants: finite values, a
//! non-negative whole age, positive BMI, blood pressure and glucose, and
//! non-negative exercise and alcohol figures.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::models::categorical::{Gender, SmokingStatus, StressLevel};
use crate::models::raw::{RawHealthRecord, RawValue, columns};

/// Health metrics for one person
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthRecord {
    age: u32,
    bmi: f64,
    blood_pressure: f64,
    glucose_level: f64,
    exercise_hours_per_week: f64,
    family_history_diabetes: bool,
    gender: Option<Gender>,
    smoking_status: Option<SmokingStatus>,
    alcohol_consumption_per_week: Option<f64>,
    stress_level: Option<StressLevel>,
}

impl HealthRecord {
    /// Start building a record from typed values
    #[must_use]
    pub fn builder() -> HealthRecordBuilder {
        HealthRecordBuilder::default()
    }

    /// Age in whole years
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    #[must_use]
    pub const fn bmi(&self) -> f64 {
        self.bmi
    }

    /// Systolic blood pressure in mm Hg
    #[must_use]
    pub const fn blood_pressure(&self) -> f64 {
        self.blood_pressure
    }

    /// Glucose level in mg/dL
    #[must_use]
    pub const fn glucose_level(&self) -> f64 {
        self.glucose_level
    }

    #[must_use]
    pub const fn exercise_hours_per_week(&self) -> f64 {
        self.exercise_hours_per_week
    }

    #[must_use]
    pub const fn family_history_diabetes(&self) -> bool {
        self.family_history_diabetes
    }

    #[must_use]
    pub const fn gender(&self) -> Option<Gender> {
        self.gender
    }

    #[must_use]
    pub const fn smoking_status(&self) -> Option<SmokingStatus> {
        self.smoking_status
    }

    /// Alcoholic drinks per week
    #[must_use]
    pub const fn alcohol_consumption_per_week(&self) -> Option<f64> {
        self.alcohol_consumption_per_week
    }

    #[must_use]
    pub const fn stress_level(&self) -> Option<StressLevel> {
        self.stress_level
    }
}

/// Typed construction of a [`HealthRecord`]; validation happens in [`HealthRecordBuilder::build`]
#[derive(Debug, Clone, Default)]
pub struct HealthRecordBuilder {
    age: Option<u32>,
    bmi: Option<f64>,
    blood_pressure: Option<f64>,
    glucose_level: Option<f64>,
    exercise_hours_per_week: Option<f64>,
    family_history_diabetes: Option<bool>,
    gender: Option<Gender>,
    smoking_status: Option<SmokingStatus>,
    alcohol_consumption_per_week: Option<f64>,
    stress_level: Option<StressLevel>,
}

impl HealthRecordBuilder {
    #[must_use]
    pub const fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    #[must_use]
    pub const fn bmi(mut self, bmi: f64) -> Self {
        self.bmi = Some(bmi);
        self
    }

    #[must_use]
    pub const fn blood_pressure(mut self, blood_pressure: f64) -> Self {
        self.blood_pressure = Some(blood_pressure);
        self
    }

    #[must_use]
    pub const fn glucose_level(mut self, glucose_level: f64) -> Self {
        self.glucose_level = Some(glucose_level);
        self
    }

    #[must_use]
    pub const fn exercise_hours_per_week(mut self, hours: f64) -> Self {
        self.exercise_hours_per_week = Some(hours);
        self
    }

    #[must_use]
    pub const fn family_history_diabetes(mut self, family_history: bool) -> Self {
        self.family_history_diabetes = Some(family_history);
        self
    }

    #[must_use]
    pub const fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    #[must_use]
    pub const fn smoking_status(mut self, status: SmokingStatus) -> Self {
        self.smoking_status = Some(status);
        self
    }

    #[must_use]
    pub const fn alcohol_consumption_per_week(mut self, drinks: f64) -> Self {
        self.alcohol_consumption_per_week = Some(drinks);
        self
    }

    #[must_use]
    pub const fn stress_level(mut self, level: StressLevel) -> Self {
        self.stress_level = Some(level);
        self
    }

    /// Validate and produce the record
    pub fn build(self) -> Result<HealthRecord> {
        let alcohol_consumption_per_week = self
            .alcohol_consumption_per_week
            .map(|v| non_negative(columns::ALCOHOL_CONSUMPTION_PER_WEEK, v))
            .transpose()?;

        Ok(HealthRecord {
            age: required(columns::AGE, self.age)?,
            bmi: positive(columns::BMI, required(columns::BMI, self.bmi)?)?,
            blood_pressure: positive(
                columns::BLOOD_PRESSURE,
                required(columns::BLOOD_PRESSURE, self.blood_pressure)?,
            )?,
            glucose_level: positive(
                columns::GLUCOSE_LEVEL,
                required(columns::GLUCOSE_LEVEL, self.glucose_level)?,
            )?,
            exercise_hours_per_week: non_negative(
                columns::EXERCISE_HOURS_PER_WEEK,
                required(columns::EXERCISE_HOURS_PER_WEEK, self.exercise_hours_per_week)?,
            )?,
            family_history_diabetes: required(
                columns::FAMILY_HISTORY_DIABETES,
                self.family_history_diabetes,
            )?,
            gender: self.gender,
            smoking_status: self.smoking_status,
            alcohol_consumption_per_week,
            stress_level: self.stress_level,
        })
    }
}

fn required<T>(field: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| Error::validation(field, "required field is missing"))
}

fn positive(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::validation(field, format!("{value} is not a finite number")));
    }
    if value <= 0.0 {
        return Err(Error::validation(field, format!("{value} must be positive")));
    }
    Ok(value)
}

fn non_negative(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::validation(field, format!("{value} is not a finite number")));
    }
    if value < 0.0 {
        return Err(Error::validation(field, format!("{value} must not be negative")));
    }
    Ok(value)
}

fn whole_years(field: &str, value: f64) -> Result<u32> {
    let value = non_negative(field, value)?;
    if value.fract() != 0.0 {
        return Err(Error::validation(field, format!("{value} is not a whole number of years")));
    }
    if value > f64::from(u32::MAX) {
        return Err(Error::validation(field, format!("{value} is not a plausible age")));
    }
    Ok(value as u32)
}

fn number(record: &RawHealthRecord, field: &str) -> Result<Option<f64>> {
    record.get(field).map(|v| v.as_number(field)).transpose()
}

/// Parse a categorical cell given either its label or its ordinal code
fn categorical<T, F>(record: &RawHealthRecord, field: &str, from_code: F) -> Result<Option<T>>
where
    T: std::str::FromStr<Err = Error>,
    F: Fn(u8) -> Option<T>,
{
    match record.get(field) {
        None => Ok(None),
        Some(RawValue::Text(label)) => label.parse::<T>().map(Some),
        Some(RawValue::Number(code)) => {
            let decoded = if code.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(code) {
                from_code(*code as u8)
            } else {
                None
            };
            decoded
                .map(Some)
                .ok_or_else(|| Error::validation(field, format!("{code} is not a known code")))
        }
        Some(RawValue::Bool(b)) => Err(Error::validation(
            field,
            format!("boolean {b} is not a category"),
        )),
    }
}

impl TryFrom<&RawHealthRecord> for HealthRecord {
    type Error = Error;

    fn try_from(raw: &RawHealthRecord) -> Result<Self> {
        let mut builder = Self::builder();

        if let Some(age) = number(raw, columns::AGE)? {
            builder = builder.age(whole_years(columns::AGE, age)?);
        }
        if let Some(bmi) = number(raw, columns::BMI)? {
            builder = builder.bmi(bmi);
        }
        if let Some(bp) = number(raw, columns::BLOOD_PRESSURE)? {
            builder = builder.blood_pressure(bp);
        }
        if let Some(glucose) = number(raw, columns::GLUCOSE_LEVEL)? {
            builder = builder.glucose_level(glucose);
        }
        if let Some(hours) = number(raw, columns::EXERCISE_HOURS_PER_WEEK)? {
            builder = builder.exercise_hours_per_week(hours);
        }
        if let Some(drinks) = number(raw, columns::ALCOHOL_CONSUMPTION_PER_WEEK)? {
            builder = builder.alcohol_consumption_per_week(drinks);
        }
        if let Some(flag) = raw.get(columns::FAMILY_HISTORY_DIABETES) {
            builder = builder.family_history_diabetes(flag.as_flag(columns::FAMILY_HISTORY_DIABETES)?);
        }
        if let Some(gender) = categorical(raw, columns::GENDER, Gender::from_code)? {
            builder = builder.gender(gender);
        }
        if let Some(status) = categorical(raw, columns::SMOKING_STATUS, SmokingStatus::from_code)? {
            builder = builder.smoking_status(status);
        }
        if let Some(level) = categorical(raw, columns::STRESS_LEVEL, StressLevel::from_code)? {
            builder = builder.stress_level(level);
        }

        builder.build()
    }
}

impl TryFrom<RawHealthRecord> for HealthRecord {
    type Error = Error;

    fn try_from(raw: RawHealthRecord) -> Result<Self> {
        Self::try_from(&raw)
    }
}
