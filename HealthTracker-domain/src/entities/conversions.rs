use health_tracker_data::models::entry::EntryRecord;

use crate::entities::entry::Entry;

/// Conversion functions between domain entities and data models
/// These functions follow the pattern convert_to_[target_layer]_[model_name]

/// Convert from data model to domain entity for an entry
pub fn convert_to_domain_entry(record: EntryRecord) -> Entry {
    Entry {
        date: record.date,
        weight: record.weight,
        systolic: record.systolic,
        diastolic: record.diastolic,
    }
}

/// Convert from domain entity to data model for an entry
pub fn convert_to_data_entry(entry: &Entry) -> EntryRecord {
    EntryRecord {
        date: entry.date.clone(),
        weight: entry.weight,
        systolic: entry.systolic,
        diastolic: entry.diastolic,
    }
}

/// Convert a loaded collection into domain entries, keeping order
pub fn convert_to_domain_entries(records: Vec<EntryRecord>) -> Vec<Entry> {
    records.into_iter().map(convert_to_domain_entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_conversion_keeps_every_field() {
        let record = EntryRecord {
            date: "2024-04-01".to_string(),
            weight: 82.4,
            systolic: 128,
            diastolic: 79,
        };

        let entry = convert_to_domain_entry(record.clone());
        assert_eq!(entry.date, "2024-04-01");
        assert_eq!(entry.weight, 82.4);
        assert_eq!(entry.systolic, 128);
        assert_eq!(entry.diastolic, 79);

        assert_eq!(convert_to_data_entry(&entry), record);
    }
}
