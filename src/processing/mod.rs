/*! Corpus exploration

Frequency tables and record selections computed over a whole pass of the corpus, as used from the command line.
!*/
mod counts;
mod selection;

pub use counts::{
    attribution_counts, connective_distribution, count_by, implicit_primary_semclass_counts,
    relation_counts, relative_arg_order_counts, semantic_class_counts, write_connective_distribution,
    write_counts, write_semantic_class_counts, CountEntry, Counter,
};
pub use selection::{
    attribution_texts, connective_initial, write_connective_initial, ConnectiveInitial,
};
