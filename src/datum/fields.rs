//! Column layout of the corpus file.
use std::collections::HashMap;

use lazy_static::lazy_static;

/// Number of columns of a record.
pub const FIELD_COUNT: usize = 56;

/// Column names, in file order. The header row has to match exactly.
pub const FIELDS: [&str; FIELD_COUNT] = [
    // relation
    "Relation",
    "Section",
    "FileNumber",
    // connective
    "Connective_SpanList",
    "Connective_GornList",
    "Connective_Trees",
    "Connective_RawText",
    "Connective_StringPosition",
    "SentenceNumber",
    "ConnHead",
    "Conn1",
    "Conn2",
    "ConnHeadSemClass1",
    "ConnHeadSemClass2",
    "Conn2SemClass1",
    "Conn2SemClass2",
    // connective attribution
    "Attribution_Source",
    "Attribution_Type",
    "Attribution_Polarity",
    "Attribution_Determinacy",
    "Attribution_SpanList",
    "Attribution_GornList",
    "Attribution_Trees",
    "Attribution_RawText",
    // arg1
    "Arg1_SpanList",
    "Arg1_GornList",
    "Arg1_Trees",
    "Arg1_RawText",
    "Arg1_Attribution_Source",
    "Arg1_Attribution_Type",
    "Arg1_Attribution_Polarity",
    "Arg1_Attribution_Determinacy",
    "Arg1_Attribution_SpanList",
    "Arg1_Attribution_GornList",
    "Arg1_Attribution_Trees",
    "Arg1_Attribution_RawText",
    // arg2
    "Arg2_SpanList",
    "Arg2_GornList",
    "Arg2_Trees",
    "Arg2_RawText",
    "Arg2_Attribution_Source",
    "Arg2_Attribution_Type",
    "Arg2_Attribution_Polarity",
    "Arg2_Attribution_Determinacy",
    "Arg2_Attribution_SpanList",
    "Arg2_Attribution_GornList",
    "Arg2_Attribution_Trees",
    "Arg2_Attribution_RawText",
    // supplementary text
    "Sup1_SpanList",
    "Sup1_GornList",
    "Sup1_Trees",
    "Sup1_RawText",
    "Sup2_SpanList",
    "Sup2_GornList",
    "Sup2_Trees",
    "Sup2_RawText",
];

lazy_static! {
    static ref FIELD_INDEX: HashMap<&'static str, usize> =
        FIELDS.iter().enumerate().map(|(i, f)| (*f, i)).collect();
}

/// Position of a column, by name.
pub fn index_of(name: &str) -> Option<usize> {
    FIELD_INDEX.get(name).copied()
}

/// Checks a header row against [FIELDS], describing the first difference.
pub fn check_header<'a, I>(header: I) -> Result<(), String>
where
    I: IntoIterator<Item = &'a str>,
{
    let header: Vec<&str> = header.into_iter().collect();
    if header.len() != FIELD_COUNT {
        return Err(format!(
            "expected {} columns, found {}",
            FIELD_COUNT,
            header.len()
        ));
    }
    match FIELDS.iter().zip(&header).position(|(a, b)| a != b) {
        Some(i) => Err(format!(
            "column {} is {:?}, expected {:?}",
            i + 1,
            header[i],
            FIELDS[i]
        )),
        None => Ok(()),
    }
}
