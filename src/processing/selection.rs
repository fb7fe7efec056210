//! Record selections written out as tables or plain text.
use std::collections::HashMap;
use std::path::Path;

use log::debug;
use regex::Regex;
use serde::Serialize;

use crate::datum::{Datum, Relation};
use crate::error::Error;

/// An `Arg1 connective Arg2` example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectiveInitial {
    #[serde(rename = "ItemId")]
    pub item_id: String,
    #[serde(rename = "Relation")]
    pub relation: Relation,
    #[serde(rename = "ConnHeadSemClass1")]
    pub sem_class: String,
    #[serde(rename = "Arg1")]
    pub arg1: String,
    #[serde(rename = "Connective")]
    pub connective: String,
    #[serde(rename = "Arg2")]
    pub arg2: String,
}

/// Whether the connective is a single item: an explicit connective that is
/// its own head, or an implicit relation without a second inserted connective.
fn simple_connective(datum: &Datum) -> bool {
    match datum.relation() {
        Relation::Explicit => {
            datum.conn_head().is_some() && datum.conn_head() == datum.connective().raw_text()
        }
        Relation::Implicit => datum.conn2().is_none(),
        _ => false,
    }
}

fn select(datum: &Datum, sem_re: &Regex) -> Option<ConnectiveInitial> {
    if !matches!(datum.relation(), Relation::Explicit | Relation::Implicit) {
        return None;
    }
    if !datum.sup1().is_empty() || !datum.sup2().is_empty() {
        return None;
    }
    let sem_class = datum.conn_head_sem_class1()?.to_string();
    if !sem_re.is_match(&sem_class) || !datum.is_adjacent() || !simple_connective(datum) {
        return None;
    }

    Some(ConnectiveInitial {
        item_id: datum.item_id(),
        relation: datum.relation(),
        sem_class,
        arg1: datum.arg1().text().raw_text().unwrap_or_default().to_string(),
        connective: datum.conn_str(false).unwrap_or_default(),
        arg2: datum.arg2().text().raw_text().unwrap_or_default().to_string(),
    })
}

/// Explicit and implicit relations reading `Arg1 connective Arg2`, with no
/// supplementary text, a simple connective and a `ConnHeadSemClass1` matched
/// by `sem_re`.
///
/// At most one example is kept per file (`item_id`): a later match replaces an
/// earlier one, in the position of the first.
pub fn connective_initial<I>(data: I, sem_re: &Regex) -> Result<Vec<ConnectiveInitial>, Error>
where
    I: IntoIterator<Item = Result<Datum, Error>>,
{
    let mut keepers: Vec<ConnectiveInitial> = Vec::new();
    let mut position: HashMap<String, usize> = HashMap::new();
    for datum in data {
        let datum = datum?;
        if let Some(example) = select(&datum, sem_re) {
            debug!("{} line {}: {}", example.item_id, datum.line(), example.connective);
            match position.get(&example.item_id) {
                Some(&i) => keepers[i] = example,
                None => {
                    position.insert(example.item_id.clone(), keepers.len());
                    keepers.push(example);
                }
            }
        }
    }
    Ok(keepers)
}

/// Write examples to a csv file (`ItemId,Relation,ConnHeadSemClass1,Arg1,Connective,Arg2`).
pub fn write_connective_initial(rows: &[ConnectiveInitial], dst: &Path) -> Result<(), Error> {
    let mut out = csv::WriterBuilder::new().from_path(dst)?;
    for row in rows {
        out.serialize(row)?;
    }
    out.flush()?;
    Ok(())
}

/// Non empty `Attribution_RawText` values, in corpus order.
pub fn attribution_texts<I>(data: I) -> Result<Vec<String>, Error>
where
    I: IntoIterator<Item = Result<Datum, Error>>,
{
    let mut texts = Vec::new();
    for datum in data {
        if let Some(text) = datum?.attribution().text().raw_text() {
            texts.push(text.to_string());
        }
    }
    Ok(texts)
}
