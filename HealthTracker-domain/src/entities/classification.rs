use std::fmt;
use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Blood pressure category based on a single systolic/diastolic pair
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum BloodPressureCategory {
    /// Normal blood pressure (systolic < 120 and diastolic < 80)
    Normal,

    /// Elevated blood pressure (systolic 120-129 and diastolic < 80)
    Elevated,

    /// Stage 1 Hypertension (systolic 130-139 or diastolic 80-89)
    Hypertension1,

    /// Stage 2 Hypertension (everything else)
    Hypertension2,
}

impl BloodPressureCategory {
    /// Human readable label shown next to an entry
    pub fn label(&self) -> &'static str {
        match self {
            BloodPressureCategory::Normal => "Normal",
            BloodPressureCategory::Elevated => "Elevated",
            BloodPressureCategory::Hypertension1 => "Stage 1 Hypertension",
            BloodPressureCategory::Hypertension2 => "Stage 2 Hypertension",
        }
    }

    /// Number of warning marks, zero for a normal reading
    pub fn warning_marks(&self) -> u8 {
        match self {
            BloodPressureCategory::Normal => 0,
            BloodPressureCategory::Elevated => 1,
            BloodPressureCategory::Hypertension1 => 2,
            BloodPressureCategory::Hypertension2 => 3,
        }
    }

    /// Severity marker: a check mark for normal, otherwise one warning sign per mark
    pub fn symbol(&self) -> &'static str {
        match self {
            BloodPressureCategory::Normal => "✓",
            BloodPressureCategory::Elevated => "⚠️",
            BloodPressureCategory::Hypertension1 => "⚠️⚠️",
            BloodPressureCategory::Hypertension2 => "⚠️⚠️⚠️",
        }
    }
}

impl fmt::Display for BloodPressureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label and severity marker derived from a reading. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct Classification {
    /// Category the reading falls into
    pub category: BloodPressureCategory,

    /// Display label, e.g. "Stage 1 Hypertension"
    pub label: String,

    /// Severity marker, e.g. "⚠️⚠️"
    pub symbol: String,
}

impl From<BloodPressureCategory> for Classification {
    fn from(category: BloodPressureCategory) -> Self {
        Self {
            category,
            label: category.label().to_string(),
            symbol: category.symbol().to_string(),
        }
    }
}
