//! Document types indexed into the search engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::mapping::{FieldDescriptor, MappingDocument, MappingError, TypeOverrides};

/// A record shape that can describe its own index mapping.
///
/// Replaces runtime reflection with an explicit field list: implementors name
/// their shape and enumerate their indexed fields with primitive types, and
/// get mapping synthesis for free.
pub trait IndexShape {
    /// The shape name used as the mapping document's top-level key. Must match
    /// the type name supplied to the mapping-registration call, including case.
    fn shape_name() -> &'static str;

    /// The indexed fields, named exactly as they serialize.
    fn fields() -> Vec<FieldDescriptor>;

    /// Synthesize the mapping document for this shape with the given override
    /// table.
    fn mapping(overrides: &TypeOverrides) -> Result<MappingDocument, MappingError> {
        MappingDocument::synthesize(Self::shape_name(), &Self::fields(), overrides)
    }
}

/// A person record indexed for name matching.
///
/// Field names serialize as written, so the mapping field names and document
/// keys always agree. `date_of_birth` serializes as `YYYY-MM-DD`; the
/// name-matching plugin supports dates but not times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonDocument {
    /// Caller-supplied document identifier.
    pub id: String,
    /// Primary name, indexed with the plugin's name type.
    pub full_name: String,
    /// Name in the person's local script or vernacular form.
    pub local_name: String,
    /// Date of birth, date-only.
    pub date_of_birth: NaiveDate,
}

impl IndexShape for PersonDocument {
    fn shape_name() -> &'static str {
        "person"
    }

    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("id", "keyword"),
            FieldDescriptor::new("full_name", "string"),
            FieldDescriptor::new("local_name", "string"),
            FieldDescriptor::new("date_of_birth", "date"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_person() -> PersonDocument {
        PersonDocument {
            id: "1".to_string(),
            full_name: "Joe Schmoe".to_string(),
            local_name: "Joe the Schmoe".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1980, 11, 11).unwrap(),
        }
    }

    #[test]
    fn test_date_serializes_date_only() {
        let value = serde_json::to_value(sample_person()).unwrap();

        assert_eq!(value["date_of_birth"], "1980-11-11");
    }

    #[test]
    fn test_serialized_keys_match_shape_fields() {
        let value = serde_json::to_value(sample_person()).unwrap();
        let keys = value.as_object().unwrap();

        for field in PersonDocument::fields() {
            assert!(keys.contains_key(&field.name), "missing field {}", field.name);
        }
        assert_eq!(keys.len(), PersonDocument::fields().len());
    }

    #[test]
    fn test_round_trip() {
        let person = sample_person();
        let value = serde_json::to_value(&person).unwrap();
        let back: PersonDocument = serde_json::from_value(value).unwrap();

        assert_eq!(back, person);
    }

    #[test]
    fn test_mapping_uses_shape_name() {
        let doc = PersonDocument::mapping(&TypeOverrides::new()).unwrap();

        assert_eq!(doc.shape_name(), "person");
        assert_eq!(
            doc.as_value()["person"]["properties"]["full_name"],
            json!({ "type": "string" })
        );
    }
}
