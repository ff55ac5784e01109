use bson::{Bson, Document};

/// Timestamp keys the store is allowed to stamp onto documents
const TIMESTAMP_FIELDS: [&str; 2] = ["created_at", "updated_at"];

/// Convert a stored document into its public shape, on a copy:
/// the storage `_id` becomes a string `id`, and timestamp fields holding
/// a BSON date-time are rendered as RFC 3339 text. Everything else is
/// passed through untouched.
pub fn serialize_doc(doc: &Document) -> Document {
    let mut out = doc.clone();

    if let Some(id) = out.remove("_id") {
        let id = match id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s,
            other => other.to_string(),
        };
        out.insert("id", id);
    }

    for key in TIMESTAMP_FIELDS {
        let formatted = match out.get(key) {
            Some(Bson::DateTime(dt)) => dt.try_to_rfc3339_string().ok(),
            _ => None,
        };
        if let Some(text) = formatted {
            out.insert(key, text);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use bson::{doc, oid::ObjectId};

    use super::*;

    #[test]
    fn test_object_id_becomes_public_id() {
        let oid = ObjectId::new();
        let stored = doc! { "_id": oid, "title": "T" };

        let public = serialize_doc(&stored);

        assert!(!public.contains_key("_id"));
        assert_eq!(public.get_str("id").unwrap(), oid.to_hex());
        assert_eq!(public.get_str("title").unwrap(), "T");
    }

    #[test]
    fn test_missing_id_left_alone() {
        let stored = doc! { "title": "T" };
        let public = serialize_doc(&stored);
        assert!(!public.contains_key("id"));
    }

    #[test]
    fn test_timestamps_rendered_as_text() {
        let stored = doc! {
            "_id": ObjectId::new(),
            "created_at": bson::DateTime::now(),
            "updated_at": "already text",
        };

        let public = serialize_doc(&stored);

        let created = public.get_str("created_at").unwrap();
        assert!(created.starts_with("20"));
        // Non-date-time values under timestamp keys are untouched
        assert_eq!(public.get_str("updated_at").unwrap(), "already text");
    }

    #[test]
    fn test_input_is_not_mutated() {
        let stored = doc! { "_id": ObjectId::new(), "created_at": bson::DateTime::now() };
        let _ = serialize_doc(&stored);

        assert!(stored.contains_key("_id"));
        assert!(stored.get_datetime("created_at").is_ok());
    }
}
