/*!
# IO utilities

Reading of the corpus CSV distribution.
!*/
pub mod reader;

pub use reader::{CorpusReader, ReaderOptions, Records};
