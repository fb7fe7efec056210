//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use regex::Regex;
use structopt::StructOpt;

use pdtb2::error::Error;
use pdtb2::io::{CorpusReader, ReaderOptions};

#[derive(Debug, StructOpt)]
#[structopt(name = "pdtb2", about = "Penn Discourse Treebank 2.0 explorer.")]
/// Holds every command that is callable by the `pdtb2` command.
pub enum Pdtb2 {
    #[structopt(about = "Count relation kinds")]
    Relations(Counts),
    #[structopt(about = "Count ConnHeadSemClass1 values")]
    Semclasses(Semclasses),
    #[structopt(about = "Count connectives by relation kind")]
    Connectives(Counts),
    #[structopt(about = "Count relation attribution sources")]
    Attributions(Counts),
    #[structopt(about = "Count relative orders of Arg1 and Arg2")]
    ArgOrder(Counts),
    #[structopt(about = "Extract adjacent Arg1 connective Arg2 examples to a csv file")]
    ConnectiveInitial(ConnectiveInitial),
    #[structopt(about = "Print the raw text of each relation attribution")]
    AttributionTexts(Corpus),
    #[structopt(about = "Print the text spans, tokens and trees of a record")]
    Show(Show),
}

#[derive(Debug, StructOpt)]
/// Corpus location and decoding.
pub struct Corpus {
    #[structopt(parse(from_os_str), help = "corpus csv file (pdtb2.csv)")]
    pub corpus: PathBuf,
    #[structopt(
        long = "encoding",
        help = "character set of the corpus file",
        default_value = "utf-8"
    )]
    pub encoding: String,
    #[structopt(short = "q", long = "quiet", help = "do not print the row counter")]
    pub quiet: bool,
}

impl Corpus {
    pub fn reader(&self) -> Result<CorpusReader, Error> {
        let options = ReaderOptions::default()
            .encoding_label(&self.encoding)?
            .display_progress(!self.quiet);
        Ok(CorpusReader::with_options(&self.corpus, options))
    }
}

#[derive(Debug, StructOpt)]
/// Frequency table commands.
///
/// ```sh
/// pdtb2 relations [FLAGS] [OPTIONS] <corpus>
///
/// FLAGS:
///     -q, --quiet      do not print the row counter
///
/// OPTIONS:
///         --encoding <encoding>    character set of the corpus file [default: utf-8]
///     -o, --output <output>        write the table to a csv file instead of stdout
/// ```
pub struct Counts {
    #[structopt(flatten)]
    pub corpus: Corpus,
    #[structopt(
        short = "o",
        long = "output",
        parse(from_os_str),
        help = "write the table to a csv file instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct Semclasses {
    #[structopt(flatten)]
    pub counts: Counts,
    #[structopt(
        long = "implicit-primary",
        help = "only count the top level class of implicit relations"
    )]
    pub implicit_primary: bool,
}

#[derive(Debug, StructOpt)]
/// Selection of explicit and implicit relations whose arguments surround the connective.
///
/// ```sh
/// pdtb2 connective-initial pdtb2.csv 'Expansion' -o pdtb-continuation-data-expansion.csv
/// ```
pub struct ConnectiveInitial {
    #[structopt(flatten)]
    pub corpus: Corpus,
    #[structopt(
        parse(try_from_str = Regex::new),
        help = "regular expression searched in ConnHeadSemClass1"
    )]
    pub sem_class: Regex,
    #[structopt(
        short = "o",
        long = "output",
        parse(from_os_str),
        help = "destination csv file"
    )]
    pub output: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Show {
    #[structopt(flatten)]
    pub corpus: Corpus,
    #[structopt(help = "row index (0 is the first row after the header)")]
    pub row: usize,
    #[structopt(
        long = "wordnet",
        parse(from_os_str),
        help = "WordNet dict/ directory, enables lemmatization"
    )]
    pub wordnet: Option<PathBuf>,
    #[structopt(long = "wn-format", help = "print WordNet part of speech tags")]
    pub wn_format: bool,
}
