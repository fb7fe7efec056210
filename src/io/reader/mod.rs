/*! Corpus reading utilities

[CorpusReader] opens a corpus file, [Records] iterates over one pass of it.
!*/
mod corpus;
mod options;

pub use corpus::{CorpusReader, Records};
pub use options::ReaderOptions;
