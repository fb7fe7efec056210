//! # pdtb2
//!
//! Command line exploration of the Penn Discourse Treebank 2.0.
//!
//! ```sh
//! pdtb2 2.0.0
//! Penn Discourse Treebank 2.0 explorer.
//!
//! USAGE:
//!     pdtb2 <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     arg-order             Count relative orders of Arg1 and Arg2
//!     attribution-texts     Print the raw text of each relation attribution
//!     attributions          Count relation attribution sources
//!     connective-initial    Extract adjacent Arg1 connective Arg2 examples to a csv file
//!     connectives           Count connectives by relation kind
//!     help                  Prints this message or the help of the given subcommand(s)
//!     relations             Count relation kinds
//!     semclasses            Count ConnHeadSemClass1 values
//!     show                  Print the text spans, tokens and trees of a record
//! ```
use structopt::StructOpt;

use pdtb2::datum::{Part, ViewOptions};
use pdtb2::error::Error;
use pdtb2::lexicon::WordNet;
use pdtb2::processing::{self, Counter};

#[macro_use]
extern crate log;

mod cli;

fn output_counts(counter: &Counter, counts: &cli::Counts) -> Result<(), Error> {
    match &counts.output {
        Some(dst) => {
            processing::write_counts(counter, dst)?;
            info!("wrote {} entries to {:?}", counter.len(), dst);
        }
        None => {
            for entry in counter.by_count() {
                println!("{} {}", entry.key, entry.count);
            }
        }
    }
    Ok(())
}

fn show(s: &cli::Show) -> Result<(), Error> {
    let wordnet = s.wordnet.as_deref().map(WordNet::from_dir).transpose()?;
    let mut options = ViewOptions::new().wn_format(s.wn_format);
    if let Some(wn) = &wordnet {
        options = options.lemmatize(wn);
    }

    let datum = s
        .corpus
        .reader()?
        .iter()?
        .nth(s.row)
        .ok_or_else(|| Error::Custom(format!("no row {} in {:?}", s.row, s.corpus.corpus)))??;

    println!("{} {} (line {})", datum.item_id(), datum.relation(), datum.line());
    if let Some(conn) = datum.conn_str(true) {
        println!("connective: {conn}");
    }
    if let Some(sc) = datum.conn_head_sem_class1() {
        println!("sense: {sc}");
    }

    for part in Part::ALL {
        let text = datum.text(part);
        if text.is_empty() {
            continue;
        }
        println!("\n== {part} ==");
        if let Some(raw) = text.raw_text() {
            println!("{raw}");
        }
        let tagged = datum
            .pos(part, &options)?
            .into_iter()
            .map(|(token, tag)| format!("{token}/{tag}"))
            .collect::<Vec<_>>();
        println!("{}", tagged.join(" "));
        for tree in datum.trees(part)? {
            println!("{}", tree.pretty());
        }
    }
    Ok(())
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Pdtb2::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Pdtb2::Relations(c) => {
            let counter = processing::relation_counts(c.corpus.reader()?.iter()?)?;
            output_counts(&counter, &c)?;
        }
        cli::Pdtb2::Semclasses(s) => {
            let data = s.counts.corpus.reader()?.iter()?;
            if s.implicit_primary {
                let counter = processing::implicit_primary_semclass_counts(data)?;
                output_counts(&counter, &s.counts)?;
            } else {
                let counter = processing::semantic_class_counts(data)?;
                match &s.counts.output {
                    Some(dst) => {
                        processing::write_semantic_class_counts(&counter, dst)?;
                        info!("wrote {} classes to {:?}", counter.len(), dst);
                    }
                    None => output_counts(&counter, &s.counts)?,
                }
            }
        }
        cli::Pdtb2::Attributions(c) => {
            let counter = processing::attribution_counts(c.corpus.reader()?.iter()?)?;
            output_counts(&counter, &c)?;
        }
        cli::Pdtb2::ArgOrder(c) => {
            let counter = processing::relative_arg_order_counts(c.corpus.reader()?.iter()?)?;
            output_counts(&counter, &c)?;
        }
        cli::Pdtb2::Connectives(c) => {
            let dist = processing::connective_distribution(c.corpus.reader()?.iter()?)?;
            match &c.output {
                Some(dst) => processing::write_connective_distribution(&dist, dst)?,
                None => {
                    for (relation, counter) in &dist {
                        println!("{}", "=".repeat(70));
                        println!("{relation}");
                        println!("{}", "=".repeat(70));
                        for entry in counter.by_count() {
                            println!("{}:{}", entry.key.replace(' ', "_"), entry.count);
                        }
                    }
                }
            }
        }
        cli::Pdtb2::ConnectiveInitial(c) => {
            let rows = processing::connective_initial(c.corpus.reader()?.iter()?, &c.sem_class)?;
            processing::write_connective_initial(&rows, &c.output)?;
            info!("wrote {} examples to {:?}", rows.len(), c.output);
        }
        cli::Pdtb2::AttributionTexts(mut c) => {
            c.quiet = true;
            for text in processing::attribution_texts(c.reader()?.iter()?)? {
                println!("{text}");
            }
        }
        cli::Pdtb2::Show(s) => show(&s)?,
    };
    Ok(())
}
