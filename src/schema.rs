use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Static identity values stamped onto every output record.
/// Caller-supplied configuration, never hardcoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Identity {
    #[schemars(description = "Employee number as it appears in the payroll system")]
    pub employee_number: String,

    #[schemars(description = "Employee display name")]
    pub employee_name: String,
}

/// Column layout of the wide source table.
///
/// The two observed export variants disagree on how many fixed columns
/// precede the date columns and on which of them carry the auxiliary tags,
/// so the layout is explicit configuration rather than hardcoded indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TableLayout {
    #[schemars(
        description = "Number of fixed (non-date) columns at the left of the table. Column 0 is always the tag-1 / project column."
    )]
    pub tag_column_count: usize,

    #[schemars(
        description = "Index of the first candidate date column. Usually equal to tag_column_count."
    )]
    pub date_column_start: usize,

    #[schemars(description = "Index of the tag-2 (task) column, if the variant has one")]
    pub tag2_column: Option<usize>,

    #[schemars(description = "Index of the tag-3 (job code) column, if the variant has one")]
    pub tag3_column: Option<usize>,

    #[schemars(description = "Index of the free-text notes column, if the variant has one")]
    pub notes_column: Option<usize>,

    #[schemars(
        description = "Job code default handed to the downstream renderer. The compact variant applies this unconditionally; the extended variant uses it as the fallback of a tag-3 lookup."
    )]
    pub job_code_default: String,
}

impl TableLayout {
    /// Compact variant: tag1, tag2, notes. No tag-3 column; the job code
    /// default is applied unconditionally downstream.
    pub fn compact() -> Self {
        Self {
            tag_column_count: 3,
            date_column_start: 3,
            tag2_column: Some(1),
            tag3_column: None,
            notes_column: Some(2),
            job_code_default: "ENC".to_string(),
        }
    }

    /// Extended variant: tag1, tag2, tag3, notes. Tag-3 feeds a downstream
    /// job-code lookup with the default as fallback.
    pub fn extended() -> Self {
        Self {
            tag_column_count: 4,
            date_column_start: 4,
            tag2_column: Some(1),
            tag3_column: Some(2),
            notes_column: Some(3),
            job_code_default: "ENC".to_string(),
        }
    }
}

impl Default for TableLayout {
    fn default() -> Self {
        Self::extended()
    }
}

/// Complete configuration for one normalization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TimesheetConfig {
    #[schemars(description = "Identity stamped onto every output record")]
    pub identity: Identity,

    #[serde(default)]
    #[schemars(description = "Column layout of the source table")]
    pub layout: TableLayout,
}

impl TimesheetConfig {
    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(TimesheetConfig)
    }

    pub fn schema_as_json() -> Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_profiles_differ() {
        let compact = TableLayout::compact();
        let extended = TableLayout::extended();

        assert_eq!(compact.tag_column_count, 3);
        assert_eq!(extended.tag_column_count, 4);
        assert!(compact.tag3_column.is_none());
        assert_eq!(extended.tag3_column, Some(2));
    }

    #[test]
    fn test_schema_generation() {
        let schema_json = TimesheetConfig::schema_as_json().unwrap();
        assert!(schema_json.contains("employee_number"));
        assert!(schema_json.contains("tag_column_count"));
        assert!(schema_json.contains("job_code_default"));
    }

    #[test]
    fn test_config_round_trip() {
        let config = TimesheetConfig {
            identity: Identity {
                employee_number: "10042".to_string(),
                employee_name: "Jane Doe".to_string(),
            },
            layout: TableLayout::compact(),
        };

        let json = serde_json::to_string_pretty(&config).unwrap();
        let deserialized: TimesheetConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, config);
    }
}
