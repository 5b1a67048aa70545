//! Core data model: record types, per-domain record sets, and result bundles.
//!
//! Both [`RecordSet`] and [`ResultBundle`] are insertion-ordered maps. Query order
//! is the order results are displayed, previewed and exported in, so the JSON
//! representation keeps it on the way out and on the way back in.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A DNS record type tag such as `A`, `AAAA`, `CNAME`, `MX` or `TXT`.
///
/// Tags are normalized (trimmed, ASCII uppercase) on construction. No closed set
/// is enforced; whether a tag is meaningful is decided by the resolver backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordType(String);

impl RecordType {
    /// Creates a normalized record type tag.
    pub fn new(tag: &str) -> Self {
        Self(tag.trim().to_ascii_uppercase())
    }

    /// Returns the normalized tag.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses a comma-separated list of tags, dropping blank entries.
    ///
    /// ```
    /// use dns_query_tool::models::RecordType;
    ///
    /// let types = RecordType::parse_list(" a, mx ,,txt");
    /// assert_eq!(types, vec![RecordType::new("A"), RecordType::new("MX"), RecordType::new("TXT")]);
    /// ```
    pub fn parse_list(raw: &str) -> Vec<RecordType> {
        raw.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(RecordType::new)
            .collect()
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordType {
    fn from(tag: &str) -> Self {
        RecordType::new(tag)
    }
}

impl Serialize for RecordType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(RecordType::new(&tag))
    }
}

/// Joins record types for display, e.g. `A, CNAME, AAAA`.
pub fn join_record_types(types: &[RecordType]) -> String {
    types
        .iter()
        .map(RecordType::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Insertion-ordered map with unique keys.
///
/// Backed by a vector; the maps in this crate hold a handful of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OrderedMap<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: PartialEq, V> OrderedMap<K, V> {
    /// Inserts or replaces in place, keeping the first position of a key.
    fn insert(&mut self, key: K, value: V) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: std::borrow::Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries
            .iter()
            .find(|(k, _)| <K as std::borrow::Borrow<Q>>::borrow(k) == key)
            .map(|(_, v)| v)
    }

    fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Serialize, V: Serialize> Serialize for OrderedMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct OrderedMapVisitor<K, V>(PhantomData<(K, V)>);

impl<'de, K, V> Visitor<'de> for OrderedMapVisitor<K, V>
where
    K: Deserialize<'de> + PartialEq,
    V: Deserialize<'de>,
{
    type Value = OrderedMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = OrderedMap::default();
        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de, K, V> Deserialize<'de> for OrderedMap<K, V>
where
    K: Deserialize<'de> + PartialEq,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

/// Record values per record type for a single domain.
///
/// An empty value list means the type was queried and nothing was found.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct RecordSet {
    records: OrderedMap<RecordType, Vec<String>>,
}

impl RecordSet {
    /// Creates an empty record set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the values for a record type, replacing any earlier values in place.
    pub fn insert(&mut self, record_type: RecordType, values: Vec<String>) {
        self.records.insert(record_type, values);
    }

    /// Returns the values recorded for a type, if it was queried.
    pub fn get(&self, record_type: &RecordType) -> Option<&[String]> {
        self.records.get(record_type).map(Vec::as_slice)
    }

    /// Iterates over `(type, values)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&RecordType, &[String])> {
        self.records.iter().map(|(t, v)| (t, v.as_slice()))
    }

    /// Number of record types held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no record type was queried.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record types that returned at least one value, in insertion order.
    pub fn types_with_records(&self) -> Vec<RecordType> {
        self.records
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(record_type, _)| record_type.clone())
            .collect()
    }

    /// Builds a new set restricted to `types`, in the order given.
    ///
    /// Types not present in this set are skipped; repeated types appear once.
    pub fn select(&self, types: &[RecordType]) -> RecordSet {
        let mut selected = RecordSet::new();
        for record_type in types {
            if let Some(values) = self.records.get(record_type) {
                selected.insert(record_type.clone(), values.clone());
            }
        }
        selected
    }
}

impl FromIterator<(RecordType, Vec<String>)> for RecordSet {
    fn from_iter<I: IntoIterator<Item = (RecordType, Vec<String>)>>(iter: I) -> Self {
        let mut set = RecordSet::new();
        for (record_type, values) in iter {
            set.insert(record_type, values);
        }
        set
    }
}

/// Filtered results for every domain of one invocation (or loop iteration).
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ResultBundle {
    domains: OrderedMap<String, RecordSet>,
}

impl ResultBundle {
    /// Creates an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the results for a domain.
    pub fn insert(&mut self, domain: impl Into<String>, records: RecordSet) {
        self.domains.insert(domain.into(), records);
    }

    /// Returns the results for a domain.
    pub fn get(&self, domain: &str) -> Option<&RecordSet> {
        self.domains.get(domain)
    }

    /// Iterates over `(domain, records)` in query order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RecordSet)> {
        self.domains.iter().map(|(d, r)| (d.as_str(), r))
    }

    /// Number of domains held.
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// True when no domain produced results.
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}
