//! Decoding of profile documents into [`LawyerProfile`] records.
//!
//! The remote store hands back schemaless JSON documents, so decoding is
//! deliberately forgiving: a missing numeric field becomes 0, a missing
//! boolean false, a missing string or tag list empty. Only structural
//! problems (a non-object payload, a field of the wrong type) are errors.
//! This mirrors the defaulting the original read path applied per field.

use crate::error::{DirectoryError, Result};
use crate::types::LawyerProfile;
use serde_json::Value;

/// Decode a single document into a profile.
///
/// The document id lives outside the field payload (stores expose it as
/// document metadata), so it is passed in separately and stamped onto the
/// decoded record.
///
/// # Arguments
/// * `id` - The store-assigned document id
/// * `fields` - The document's field payload (a JSON object)
pub fn profile_from_document(id: &str, fields: &Value) -> Result<LawyerProfile> {
    if !fields.is_object() {
        return Err(DirectoryError::NotAnObject { id: id.to_string() });
    }

    let mut profile: LawyerProfile =
        serde_json::from_value(fields.clone()).map_err(|err| DirectoryError::InvalidDocument {
            id: id.to_string(),
            reason: err.to_string(),
        })?;
    profile.id = id.to_string();

    Ok(profile)
}

/// Decode a collection dump: a JSON array of documents, each carrying its
/// own `"id"` field.
///
/// This is the on-disk format the file-backed store uses. Order is
/// preserved; sources that need a particular order sort afterwards.
pub fn profiles_from_array(value: &Value) -> Result<Vec<LawyerProfile>> {
    let documents = value.as_array().ok_or_else(|| DirectoryError::NotAnArray {
        found: json_type_name(value).to_string(),
    })?;

    let mut profiles = Vec::with_capacity(documents.len());
    for (position, document) in documents.iter().enumerate() {
        let id = document
            .get("id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .ok_or(DirectoryError::MissingId { position })?;
        profiles.push(profile_from_document(id, document)?);
    }

    Ok(profiles)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_document_decodes() {
        let fields = json!({
            "name": "Kausik Chatterjee",
            "specializations": ["Commercial", "Civil", "Corporate"],
            "rating": 4.9,
            "reviews": 1121,
            "experience": 15,
            "isOnline": true,
            "pricing": { "audio": 20, "video": 10, "chat": 15 },
            "image": "KC",
            "connections": 0,
            "verified": true
        });

        let profile = profile_from_document("abc123", &fields).unwrap();

        assert_eq!(profile.id, "abc123");
        assert_eq!(profile.name, "Kausik Chatterjee");
        assert_eq!(profile.specializations.len(), 3);
        assert_eq!(profile.rating, 4.9);
        assert_eq!(profile.pricing.video, 10);
        assert_eq!(profile.avatar, "KC");
        assert!(profile.is_online);
        assert!(profile.verified);
    }

    #[test]
    fn test_missing_fields_default() {
        // A sparse document: only a name. Everything else takes its
        // neutral value rather than failing the decode.
        let fields = json!({ "name": "Priya Sharma" });

        let profile = profile_from_document("p1", &fields).unwrap();

        assert_eq!(profile.name, "Priya Sharma");
        assert_eq!(profile.rating, 0.0);
        assert_eq!(profile.reviews, 0);
        assert_eq!(profile.experience, 0);
        assert_eq!(profile.pricing.audio, 0);
        assert_eq!(profile.pricing.chat, 0);
        assert!(!profile.is_online);
        assert!(!profile.verified);
        assert!(profile.specializations.is_empty());
    }

    #[test]
    fn test_partial_pricing_defaults_missing_channels() {
        let fields = json!({
            "name": "Rajesh Kumar",
            "pricing": { "audio": 30 }
        });

        let profile = profile_from_document("p2", &fields).unwrap();

        assert_eq!(profile.pricing.audio, 30);
        assert_eq!(profile.pricing.video, 0);
        assert_eq!(profile.pricing.chat, 0);
    }

    #[test]
    fn test_non_object_document_rejected() {
        let result = profile_from_document("p3", &json!("not an object"));
        assert!(matches!(result, Err(DirectoryError::NotAnObject { .. })));
    }

    #[test]
    fn test_mistyped_field_rejected() {
        let fields = json!({ "name": "X", "rating": "excellent" });
        let result = profile_from_document("p4", &fields);
        assert!(matches!(result, Err(DirectoryError::InvalidDocument { .. })));
    }

    #[test]
    fn test_array_decode_preserves_order() {
        let dump = json!([
            { "id": "b", "name": "Second" },
            { "id": "a", "name": "First" }
        ]);

        let profiles = profiles_from_array(&dump).unwrap();

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].id, "b");
        assert_eq!(profiles[1].id, "a");
    }

    #[test]
    fn test_array_decode_requires_ids() {
        let dump = json!([{ "name": "Anonymous" }]);
        let result = profiles_from_array(&dump);
        assert!(matches!(result, Err(DirectoryError::MissingId { position: 0 })));
    }

    #[test]
    fn test_non_array_dump_rejected() {
        let result = profiles_from_array(&json!({ "id": "a" }));
        assert!(matches!(result, Err(DirectoryError::NotAnArray { .. })));
    }
}
