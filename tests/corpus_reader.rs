use std::fs;
use std::path::Path;

use pdtb2::datum::{Part, Relation, ViewOptions, FIELDS, FIELD_COUNT};
use pdtb2::error::Error;
use pdtb2::io::{CorpusReader, ReaderOptions};
use pdtb2::lexicon::{Bucket, WordNet};
use pdtb2::tree::Tree;

const SCENARIO_ROW: usize = 17;

const SCENARIO_ARG1_TREES: &str = "(WHNP-1 (WDT that))|||(NP-SBJ (-NONE- *T*-1))|||(VBD hung)|||(PP-LOC (IN over) (NP (NP (NNS parts)) (PP (IN of) (NP (DT the) (NN factory)))))|||(, ,)";

fn set(row: &mut [String], name: &str, value: &str) {
    let i = FIELDS.iter().position(|f| *f == name).unwrap();
    row[i] = value.to_string();
}

/// Row `i` of the fixture corpus.
fn fixture_row(i: usize) -> Vec<String> {
    let mut row = vec![String::new(); FIELD_COUNT];
    set(&mut row, "Section", &(i / 10).to_string());
    set(&mut row, "FileNumber", &(i % 10).to_string());
    set(&mut row, "Attribution_Source", "Wr");
    set(&mut row, "Arg1_SpanList", &format!("{}..{}", i * 100, i * 100 + 40));
    set(&mut row, "Arg2_SpanList", &format!("{}..{}", i * 100 + 42, i * 100 + 90));

    if i == SCENARIO_ROW {
        set(&mut row, "Relation", "Explicit");
        set(&mut row, "ConnHead", "while");
        set(&mut row, "ConnHeadSemClass1", "Comparison.Contrast");
        set(&mut row, "Arg1_Trees", SCENARIO_ARG1_TREES);
        set(&mut row, "Arg1_RawText", "that hung over parts of the factory,");
    } else if i % 2 == 0 {
        set(&mut row, "Relation", "Implicit");
        set(&mut row, "Conn1", "because");
        set(&mut row, "ConnHeadSemClass1", "Contingency.Cause.Reason");
        set(
            &mut row,
            "Arg1_Trees",
            "(S (NP-SBJ (DT The) (NNS plants)) (VP (VBD closed)))|||(. .)",
        );
        set(&mut row, "Arg2_Trees", "(S (NP-SBJ (NNS Sales)) (VP (VBD fell)))");
    } else {
        set(&mut row, "Relation", "EntRel");
        set(&mut row, "Arg1_Trees", "(NP (NNP Mr.) (NNP Vinken))");
    }
    row
}

fn write_fixture(dst: &Path, rows: usize) {
    let mut w = csv::Writer::from_path(dst).unwrap();
    w.write_record(FIELDS).unwrap();
    for i in 0..rows {
        w.write_record(fixture_row(i)).unwrap();
    }
    w.flush().unwrap();
}

fn quiet() -> ReaderOptions {
    ReaderOptions::default().display_progress(false)
}

fn lexicon() -> WordNet {
    let mut wn = WordNet::new();
    for (bucket, lemma) in [
        (Bucket::Noun, "part"),
        (Bucket::Noun, "factory"),
        (Bucket::Noun, "plant"),
        (Bucket::Verb, "hang"),
        (Bucket::Verb, "close"),
    ] {
        wn.add_lemma(bucket, lemma);
    }
    wn.add_exception(Bucket::Verb, "hung", "hang");
    wn
}

#[test_log::test]
fn scenario_row() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pdtb2.csv");
    write_fixture(&path, 20);

    let corpus = CorpusReader::with_options(&path, quiet());
    let datum = corpus.iter().unwrap().nth(SCENARIO_ROW).unwrap().unwrap();

    assert_eq!(datum.relation(), Relation::Explicit);
    assert_eq!(datum.line(), SCENARIO_ROW as u64 + 2);
    assert_eq!(datum.trees(Part::Arg1).unwrap().len(), 5);
    assert_eq!(
        datum.words(Part::Arg1, &ViewOptions::new()).unwrap(),
        vec!["that", "*T*-1", "hung", "over", "parts", "of", "the", "factory", ","]
    );

    let wn = lexicon();
    assert_eq!(
        datum
            .words(Part::Arg1, &ViewOptions::new().lemmatize(&wn))
            .unwrap(),
        vec!["that", "*T*-1", "hang", "over", "part", "of", "the", "factory", ","]
    );
}

#[test]
fn passes_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pdtb2.csv");
    write_fixture(&path, 30);

    let corpus = CorpusReader::with_options(&path, quiet());
    let summary = |pass: pdtb2::io::Records<fs::File>| {
        pass.map(|d| {
            let d = d.unwrap();
            (
                d.line(),
                d.relation(),
                d.item_id(),
                d.words(Part::Arg1, &ViewOptions::new()).unwrap(),
            )
        })
        .collect::<Vec<_>>()
    };

    let first = summary(corpus.iter().unwrap());
    let second = summary(corpus.iter().unwrap());
    assert_eq!(first.len(), 30);
    assert_eq!(first, second);
}

#[test]
fn every_tree_reparses_from_its_rendering() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pdtb2.csv");
    write_fixture(&path, 20);

    for datum in CorpusReader::with_options(&path, quiet()).iter().unwrap() {
        let datum = datum.unwrap();
        for part in Part::ALL {
            for tree in datum.trees(part).unwrap() {
                let again: Tree = tree.pretty().parse().unwrap();
                assert_eq!(&again, tree);
            }
        }
    }
}

#[test]
fn wrong_field_counts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pdtb2.csv");
    write_fixture(&path, 3);

    // a short row as line 5, a long one as line 6
    let mut src = fs::read_to_string(&path).unwrap();
    src.push_str("Explicit,1,2\n");
    let mut long = fixture_row(0).join(",");
    long.push_str(",extra");
    src.push_str(&long);
    src.push('\n');
    fs::write(&path, src).unwrap();

    let results: Vec<_> = CorpusReader::with_options(&path, quiet())
        .iter()
        .unwrap()
        .collect();
    assert_eq!(results.len(), 5);
    assert!(results[..3].iter().all(Result::is_ok));
    for (result, expected) in results[3..].iter().zip([5, 6]) {
        match result {
            Err(e @ Error::Format { .. }) => assert_eq!(e.line(), Some(expected)),
            other => panic!("unexpected {other:?}"),
        }
    }
}

#[test]
fn missing_file() {
    let corpus = CorpusReader::new("does/not/exist.csv");
    assert!(matches!(corpus.iter(), Err(Error::Io(_))));
}
