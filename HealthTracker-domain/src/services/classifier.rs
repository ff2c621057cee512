use crate::entities::classification::{BloodPressureCategory, Classification};

/// Categorize blood pressure based on measurements.
///
/// Rows are checked in order and the first match wins. A low systolic
/// value does not rescue a high diastolic one: 110/85 is Stage 1.
pub fn categorize_blood_pressure(systolic: i32, diastolic: i32) -> BloodPressureCategory {
    if systolic < 120 && diastolic < 80 {
        BloodPressureCategory::Normal
    } else if systolic < 130 && diastolic < 80 {
        BloodPressureCategory::Elevated
    } else if (130..140).contains(&systolic) || (80..90).contains(&diastolic) {
        BloodPressureCategory::Hypertension1
    } else {
        BloodPressureCategory::Hypertension2
    }
}

/// Classify a reading into its label and severity marker
pub fn classify(systolic: i32, diastolic: i32) -> Classification {
    categorize_blood_pressure(systolic, diastolic).into()
}
