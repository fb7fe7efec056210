//! # pdtb2
//!
//! Typed access to the Penn Discourse Treebank 2.0 CSV distribution.
//!
//! ```no_run
//! use pdtb2::datum::{Part, ViewOptions};
//! use pdtb2::io::CorpusReader;
//!
//! # fn main() -> Result<(), pdtb2::error::Error> {
//! let corpus = CorpusReader::new("pdtb2.csv");
//! for datum in corpus.iter()? {
//!     let datum = datum?;
//!     println!("{} {:?}", datum.relation(), datum.words(Part::Arg1, &ViewOptions::new())?);
//! }
//! # Ok(())
//! # }
//! ```
pub mod datum;
pub mod error;
pub mod io;
pub mod lexicon;
pub mod processing;
pub mod tree;
