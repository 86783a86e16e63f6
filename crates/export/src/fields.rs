//! Flat field map handed to document templates.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use lessonplan_schedule::ScheduleEntry;

/// Document header fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentMeta {
    pub name: String,
    pub kvant_name: String,
    pub year: String,
    pub group: String,
    pub module: String,
    pub doc_name: String,
}

/// Ordered mapping of template field names to values.
///
/// Serializes as a JSON object with keys in insertion order.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use lessonplan_export::{DocumentMeta, FieldMap};
/// use lessonplan_schedule::ScheduleEntry;
///
/// let entries = [ScheduleEntry::new(NaiveDate::from_ymd_opt(2023, 9, 1).unwrap())];
/// let labels = ["Intro".to_string()];
/// let fields = FieldMap::from_schedule(&DocumentMeta::default(), &entries, &labels);
///
/// assert_eq!(fields.get("date_1"), Some("01.09.2023"));
/// assert_eq!(fields.get("head_1"), Some("Intro"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    fields: Vec<(String, String)>,
}

impl FieldMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the full field set for a schedule.
    ///
    /// `labels[i]` becomes `head_{i + 1}`; missing labels are empty and
    /// labels beyond the last entry are ignored.
    pub fn from_schedule(
        meta: &DocumentMeta,
        entries: &[ScheduleEntry],
        labels: &[String],
    ) -> Self {
        let mut map = Self::new();
        map.insert("name", &meta.name);
        map.insert("kvant_name", &meta.kvant_name);
        map.insert("year", &meta.year);
        map.insert("group", &meta.group);
        map.insert("module", &meta.module);
        map.insert("doc_name", &meta.doc_name);
        for (i, entry) in entries.iter().enumerate() {
            let n = i + 1;
            map.insert(format!("date_{n}"), entry.text());
            map.insert(
                format!("head_{n}"),
                labels.get(i).map(String::as_str).unwrap_or_default(),
            );
        }
        map
    }

    /// Sets `name` to `value`, replacing an existing value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Returns the value of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the map has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for FieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn meta() -> DocumentMeta {
        DocumentMeta {
            name: "Иванов И.И.".to_string(),
            kvant_name: "IT-квантум".to_string(),
            year: "2023-2024".to_string(),
            group: "IT-1".to_string(),
            module: "Вводный".to_string(),
            doc_name: "КТП".to_string(),
        }
    }

    fn entries() -> Vec<ScheduleEntry> {
        [(2023, 9, 1), (2023, 9, 8), (2023, 9, 15)]
            .iter()
            .map(|&(y, m, d)| ScheduleEntry::new(NaiveDate::from_ymd_opt(y, m, d).unwrap()))
            .collect()
    }

    #[test]
    fn meta_fields_first() {
        let map = FieldMap::from_schedule(&meta(), &entries(), &[]);
        let names: Vec<&str> = map.iter().map(|(n, _)| n).take(6).collect();
        assert_eq!(
            names,
            vec!["name", "kvant_name", "year", "group", "module", "doc_name"]
        );
        assert_eq!(map.get("group"), Some("IT-1"));
    }

    #[test]
    fn date_and_head_pairs() {
        let labels = vec!["Intro".to_string()];
        let map = FieldMap::from_schedule(&meta(), &entries(), &labels);
        assert_eq!(map.len(), 6 + 2 * 3);
        assert_eq!(map.get("date_1"), Some("01.09.2023"));
        assert_eq!(map.get("head_1"), Some("Intro"));
        assert_eq!(map.get("date_3"), Some("15.09.2023"));
        assert_eq!(map.get("head_3"), Some(""));
        assert_eq!(map.get("date_4"), None);
    }

    #[test]
    fn extra_labels_ignored() {
        let labels: Vec<String> = (0..10).map(|i| format!("L{i}")).collect();
        let map = FieldMap::from_schedule(&meta(), &entries(), &labels);
        assert_eq!(map.get("head_3"), Some("L2"));
        assert_eq!(map.get("head_4"), None);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut map = FieldMap::new();
        map.insert("a", "1");
        map.insert("b", "2");
        map.insert("a", "3");
        let pairs: Vec<(&str, &str)> = map.iter().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn serializes_in_insertion_order() {
        let map = FieldMap::from_schedule(&DocumentMeta::default(), &entries(), &[]);
        let json = serde_json::to_string(&map).unwrap();
        let date_1 = json.find("\"date_1\"").unwrap();
        let date_2 = json.find("\"date_2\"").unwrap();
        let name = json.find("\"name\"").unwrap();
        assert!(name < date_1 && date_1 < date_2);
    }

    #[test]
    fn new_map_is_empty() {
        let mut map = FieldMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        map.insert("name", "x");
        assert!(!map.is_empty());
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn meta_serializes_with_template_names() {
        let value = serde_json::to_value(meta()).unwrap();
        assert_eq!(value["kvant_name"], "IT-квантум");
        assert_eq!(value["doc_name"], "КТП");
        assert_eq!(value.as_object().unwrap().len(), 6);
    }
}
