//! Frequency tables over a corpus pass.
//!
//! Every function takes the records of a pass (`CorpusReader::iter()?`) and stops at the first error.
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use itertools::Itertools;
use serde::Serialize;

use crate::datum::{Datum, Relation};
use crate::error::Error;

/// Occurrence counts of string keys.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Counter {
    counts: HashMap<String, u64>,
    total: u64,
}

/// A serializable (key, count) row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountEntry {
    pub key: String,
    pub count: u64,
}

impl Counter {
    /// Add 1 to a key count, creating the entry if needed.
    #[inline]
    pub fn add(&mut self, key: &str) {
        self.counts
            .entry(key.to_string())
            .and_modify(|count| *count += 1)
            .or_insert(1);
        self.total += 1;
    }

    pub fn get(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of counted occurrences.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries by decreasing count, ties broken by key.
    pub fn by_count(&self) -> Vec<CountEntry> {
        self.counts
            .iter()
            .sorted_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)))
            .map(|(key, count)| CountEntry {
                key: key.clone(),
                count: *count,
            })
            .collect()
    }

    /// Entries sorted by key.
    pub fn by_key(&self) -> Vec<CountEntry> {
        self.counts
            .iter()
            .sorted_by(|a, b| a.0.cmp(b.0))
            .map(|(key, count)| CountEntry {
                key: key.clone(),
                count: *count,
            })
            .collect()
    }
}

/// Counts `key` over the records, records without a key are skipped.
pub fn count_by<I, F>(data: I, mut key: F) -> Result<Counter, Error>
where
    I: IntoIterator<Item = Result<Datum, Error>>,
    F: FnMut(&Datum) -> Option<String>,
{
    let mut counter = Counter::default();
    for datum in data {
        if let Some(k) = key(&datum?) {
            counter.add(&k);
        }
    }
    Ok(counter)
}

/// Distribution of relation kinds.
pub fn relation_counts<I>(data: I) -> Result<Counter, Error>
where
    I: IntoIterator<Item = Result<Datum, Error>>,
{
    count_by(data, |d| Some(d.relation().to_string()))
}

/// Distribution of `ConnHeadSemClass1` (relations without one are skipped).
pub fn semantic_class_counts<I>(data: I) -> Result<Counter, Error>
where
    I: IntoIterator<Item = Result<Datum, Error>>,
{
    count_by(data, |d| d.conn_head_sem_class1().map(ToString::to_string))
}

/// Distribution of attribution sources of the relations.
pub fn attribution_counts<I>(data: I) -> Result<Counter, Error>
where
    I: IntoIterator<Item = Result<Datum, Error>>,
{
    count_by(data, |d| d.attribution().source().map(str::to_string))
}

/// Distribution of the respective order of the arguments.
pub fn relative_arg_order_counts<I>(data: I) -> Result<Counter, Error>
where
    I: IntoIterator<Item = Result<Datum, Error>>,
{
    count_by(data, |d| d.relative_arg_order().map(|o| o.to_string()))
}

/// Top level senses of implicit relations.
pub fn implicit_primary_semclass_counts<I>(data: I) -> Result<Counter, Error>
where
    I: IntoIterator<Item = Result<Datum, Error>>,
{
    count_by(data, |d| match d.relation() {
        Relation::Implicit => d.primary_semclass1().map(str::to_string),
        _ => None,
    })
}

/// Lowercased connective strings, per relation kind.
pub fn connective_distribution<I>(data: I) -> Result<BTreeMap<Relation, Counter>, Error>
where
    I: IntoIterator<Item = Result<Datum, Error>>,
{
    let mut dist: BTreeMap<Relation, Counter> = BTreeMap::new();
    for datum in data {
        let datum = datum?;
        if let Some(conn) = datum.conn_str(false) {
            dist.entry(datum.relation())
                .or_default()
                .add(&conn.to_lowercase());
        }
    }
    Ok(dist)
}

#[derive(Debug, Serialize)]
struct SemanticClassEntry<'a> {
    #[serde(rename = "ConnHeadSemClass1")]
    sem_class: &'a str,
    #[serde(rename = "Count")]
    count: u64,
}

#[derive(Debug, Serialize)]
struct ConnectiveEntry<'a> {
    relation: Relation,
    connective: &'a str,
    count: u64,
}

/// Write a counter to a csv file with a `key,count` header and rows by decreasing count.
pub fn write_counts(counter: &Counter, dst: &Path) -> Result<(), Error> {
    let mut out = csv::WriterBuilder::new().from_path(dst)?;
    for entry in counter.by_count() {
        out.serialize(entry)?;
    }
    out.flush()?;
    Ok(())
}

/// Write semantic class counts to a csv file (`ConnHeadSemClass1,Count`), sorted
/// by class so that classes sharing a top level are next to each other.
pub fn write_semantic_class_counts(counter: &Counter, dst: &Path) -> Result<(), Error> {
    let mut out = csv::WriterBuilder::new().from_path(dst)?;
    for entry in counter.by_key() {
        out.serialize(SemanticClassEntry {
            sem_class: &entry.key,
            count: entry.count,
        })?;
    }
    out.flush()?;
    Ok(())
}

/// Write a connective distribution to a csv file (`relation,connective,count`).
pub fn write_connective_distribution(
    dist: &BTreeMap<Relation, Counter>,
    dst: &Path,
) -> Result<(), Error> {
    let mut out = csv::WriterBuilder::new().from_path(dst)?;
    for (relation, counter) in dist {
        for entry in counter.by_count() {
            out.serialize(ConnectiveEntry {
                relation: *relation,
                connective: &entry.key,
                count: entry.count,
            })?;
        }
    }
    out.flush()?;
    Ok(())
}
