//! List envelopes returned by the backup API.
//!
//! The canonical shape is `{"backups": [...]}` for the backup list and
//! `{"activities": [...]}` for the feed. Some deployments still answer with
//! `data` or `results`; those are accepted as deprecated aliases so the
//! console keeps working against them.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Aliases tried, in order, after the canonical field.
pub const DEPRECATED_ALIASES: [&str; 2] = ["data", "results"];

/// Canonical field of the backup list envelope.
pub const BACKUPS_FIELD: &str = "backups";

/// Canonical field of the activity feed envelope.
pub const ACTIVITIES_FIELD: &str = "activities";

/// Which field the items were read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeSource {
    /// The canonical field.
    Canonical,
    /// A deprecated alias (`data` or `results`).
    Alias(&'static str),
    /// No recognised field carried a value; the list is empty.
    Missing,
}

/// A decoded list plus where it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct Unwrapped<T> {
    pub items: Vec<T>,
    pub source: EnvelopeSource,
}

/// Pull the item list out of an envelope.
///
/// The first of `canonical`, `data`, `results` that is present and not
/// `null` wins. A body with none of them yields an empty list.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] when the selected field is not an array
/// of `T`.
pub fn unwrap_list<T: DeserializeOwned>(
    body: &Value,
    canonical: &'static str,
) -> Result<Unwrapped<T>, serde_json::Error> {
    let selected = std::iter::once((canonical, EnvelopeSource::Canonical))
        .chain(
            DEPRECATED_ALIASES
                .iter()
                .map(|alias| (*alias, EnvelopeSource::Alias(*alias))),
        )
        .find_map(|(field, source)| {
            body.get(field)
                .filter(|value| !value.is_null())
                .map(|value| (value, source))
        });

    match selected {
        Some((value, source)) => Ok(Unwrapped {
            items: Vec::<T>::deserialize(value)?,
            source,
        }),
        None => Ok(Unwrapped {
            items: Vec::new(),
            source: EnvelopeSource::Missing,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::Activity;
    use crate::backup::Backup;
    use serde_json::json;

    #[test]
    fn should_read_canonical_field() {
        let body = json!({"backups": [{"id": 1}, {"id": 2}]});
        let list = unwrap_list::<Backup>(&body, BACKUPS_FIELD).unwrap();
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.source, EnvelopeSource::Canonical);
    }

    #[test]
    fn should_fall_back_to_aliases_in_order() {
        let body = json!({"results": [{"id": 3}], "data": [{"id": 1}, {"id": 2}]});
        let list = unwrap_list::<Backup>(&body, BACKUPS_FIELD).unwrap();
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.source, EnvelopeSource::Alias("data"));

        let body = json!({"activities": null, "results": [{"title": "x"}]});
        let list = unwrap_list::<Activity>(&body, ACTIVITIES_FIELD).unwrap();
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.source, EnvelopeSource::Alias("results"));
    }

    #[test]
    fn should_prefer_empty_canonical_list_over_alias() {
        let body = json!({"backups": [], "data": [{"id": 1}]});
        let list = unwrap_list::<Backup>(&body, BACKUPS_FIELD).unwrap();
        assert!(list.items.is_empty());
        assert_eq!(list.source, EnvelopeSource::Canonical);
    }

    #[test]
    fn should_return_empty_list_when_no_field_matches() {
        let list = unwrap_list::<Backup>(&json!({"count": 0}), BACKUPS_FIELD).unwrap();
        assert!(list.items.is_empty());
        assert_eq!(list.source, EnvelopeSource::Missing);

        let list = unwrap_list::<Backup>(&Value::Null, BACKUPS_FIELD).unwrap();
        assert_eq!(list.source, EnvelopeSource::Missing);
    }

    #[test]
    fn should_fail_on_non_array_field() {
        let body = json!({"backups": "nope"});
        assert!(unwrap_list::<Backup>(&body, BACKUPS_FIELD).is_err());
    }
}
