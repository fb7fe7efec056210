/*! WordNet-backed lemmatizer

Loads the lemma indexes (`index.noun`, `index.verb`, `index.adj`, `index.adv`) and
exception lists (`noun.exc`, ...) of a WordNet `dict/` directory and finds base forms
with the morphy algorithm:

1. an inflected form listed in the exception file maps to its listed bases,
2. otherwise detachment rules (`-ies` → `-y`, `-ed` → ``...) are applied,
   repeatedly, until some candidate is a lemma of the index.
!*/
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use itertools::Itertools;
use log::{debug, info};

use super::{Bucket, Lemmatizer};
use crate::error::Error;

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJ_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

fn rules(bucket: Bucket) -> &'static [(&'static str, &'static str)] {
    match bucket {
        Bucket::Noun => NOUN_RULES,
        Bucket::Verb => VERB_RULES,
        Bucket::Adjective => ADJ_RULES,
        Bucket::Adverb => &[],
    }
}

/// One detachment step over every form.
fn apply_rules(bucket: Bucket, forms: &[String]) -> Vec<String> {
    forms
        .iter()
        .flat_map(|form| {
            rules(bucket)
                .iter()
                .filter(move |(old, _)| form.ends_with(old))
                .map(move |(old, new)| format!("{}{}", &form[..form.len() - old.len()], new))
        })
        .unique()
        .collect()
}

/// In-memory WordNet lemma index and exception lists.
#[derive(Debug, Clone, Default)]
pub struct WordNet {
    lemmas: HashMap<Bucket, HashSet<String>>,
    exceptions: HashMap<Bucket, HashMap<String, Vec<String>>>,
}

impl WordNet {
    /// Empty lexicon, to be filled with [WordNet::add_lemma] and [WordNet::add_exception].
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a WordNet `dict/` directory.
    ///
    /// Every bucket needs both its `index.*` and its `*.exc` file.
    pub fn from_dir(dir: &Path) -> Result<Self, Error> {
        let mut wn = Self::new();
        for bucket in Bucket::ALL {
            let index = dir.join(format!("index.{}", bucket.file_suffix()));
            debug!("reading {:?}", index);
            for line in BufReader::new(File::open(&index)?).lines() {
                let line = line?;
                // license header lines start with spaces
                if line.starts_with(' ') {
                    continue;
                }
                if let Some(lemma) = line.split_whitespace().next() {
                    wn.add_lemma(bucket, lemma);
                }
            }

            let exc = dir.join(format!("{}.exc", bucket.file_suffix()));
            debug!("reading {:?}", exc);
            for line in BufReader::new(File::open(&exc)?).lines() {
                let line = line?;
                let mut words = line.split_whitespace();
                if let Some(inflected) = words.next() {
                    for base in words {
                        wn.add_exception(bucket, inflected, base);
                    }
                }
            }
        }
        info!(
            "loaded WordNet from {:?}: {} lemmas",
            dir,
            wn.lemmas.values().map(HashSet::len).sum::<usize>()
        );
        Ok(wn)
    }

    pub fn add_lemma(&mut self, bucket: Bucket, lemma: &str) {
        self.lemmas
            .entry(bucket)
            .or_default()
            .insert(lemma.to_lowercase());
    }

    pub fn add_exception(&mut self, bucket: Bucket, inflected: &str, base: &str) {
        self.exceptions
            .entry(bucket)
            .or_default()
            .entry(inflected.to_lowercase())
            .or_default()
            .push(base.to_lowercase());
    }

    /// Whether `word` is a lemma of `bucket` (case-insensitive).
    pub fn contains(&self, word: &str, bucket: Bucket) -> bool {
        self.is_lemma(&word.to_lowercase(), bucket)
    }

    fn is_lemma(&self, form: &str, bucket: Bucket) -> bool {
        self.lemmas
            .get(&bucket)
            .map_or(false, |lemmas| lemmas.contains(form))
    }

    /// Keeps the forms that are lemmas, in order, without repetition.
    fn filter_forms<I>(&self, bucket: Bucket, forms: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        forms
            .into_iter()
            .filter(|f| self.is_lemma(f, bucket))
            .unique()
            .collect()
    }

    /// Every candidate base form of `word`, best first. The word itself comes
    /// first when it already is a lemma.
    pub fn morphy(&self, word: &str, bucket: Bucket) -> Vec<String> {
        let form = word.to_lowercase();

        if let Some(bases) = self.exceptions.get(&bucket).and_then(|e| e.get(&form)) {
            let candidates = std::iter::once(form.clone()).chain(bases.iter().cloned());
            return self.filter_forms(bucket, candidates);
        }

        let mut forms = apply_rules(bucket, std::slice::from_ref(&form));
        let found = self.filter_forms(bucket, std::iter::once(form).chain(forms.iter().cloned()));
        if !found.is_empty() {
            return found;
        }

        // every rule shortens the form, so this ends
        while !forms.is_empty() {
            forms = apply_rules(bucket, &forms);
            let found = self.filter_forms(bucket, forms.iter().cloned());
            if !found.is_empty() {
                return found;
            }
        }
        Vec::new()
    }
}

impl Lemmatizer for WordNet {
    fn lemmatize(&self, word: &str, bucket: Bucket) -> Option<String> {
        let best = self.morphy(word, bucket).into_iter().next()?;
        // base forms keep their original casing
        if best == word.to_lowercase() {
            Some(word.to_string())
        } else {
            Some(best)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::WordNet;
    use crate::lexicon::{Bucket, Lemmatizer};

    fn lexicon() -> WordNet {
        let mut wn = WordNet::new();
        for (b, lemmas) in [
            (Bucket::Noun, vec!["part", "factory", "fly", "box", "woman", "church"]),
            (Bucket::Verb, vec!["hang", "close", "fly", "go"]),
            (Bucket::Adjective, vec!["big", "late"]),
            (Bucket::Adverb, vec!["quickly"]),
        ] {
            for l in lemmas {
                wn.add_lemma(b, l);
            }
        }
        wn.add_exception(Bucket::Verb, "hung", "hang");
        wn.add_exception(Bucket::Verb, "went", "go");
        wn.add_exception(Bucket::Adjective, "bigger", "big");
        wn
    }

    #[test]
    fn detachment_rules() {
        let wn = lexicon();
        assert_eq!(wn.lemmatize("parts", Bucket::Noun).unwrap(), "part");
        assert_eq!(wn.lemmatize("flies", Bucket::Noun).unwrap(), "fly");
        assert_eq!(wn.lemmatize("boxes", Bucket::Noun).unwrap(), "box");
        assert_eq!(wn.lemmatize("women", Bucket::Noun).unwrap(), "woman");
        assert_eq!(wn.lemmatize("churches", Bucket::Noun).unwrap(), "church");
        assert_eq!(wn.lemmatize("closed", Bucket::Verb).unwrap(), "close");
        assert_eq!(wn.lemmatize("closing", Bucket::Verb).unwrap(), "close");
        assert_eq!(wn.lemmatize("later", Bucket::Adjective).unwrap(), "late");
    }

    #[test]
    fn exceptions() {
        let wn = lexicon();
        assert_eq!(wn.lemmatize("hung", Bucket::Verb).unwrap(), "hang");
        assert_eq!(wn.lemmatize("Went", Bucket::Verb).unwrap(), "go");
        assert_eq!(wn.lemmatize("bigger", Bucket::Adjective).unwrap(), "big");
    }

    #[test]
    fn miss() {
        let wn = lexicon();
        assert_eq!(wn.lemmatize("parts", Bucket::Verb), None);
        assert_eq!(wn.lemmatize("quicker", Bucket::Adverb), None);
        assert!(wn.morphy("zzz", Bucket::Noun).is_empty());
    }

    #[test]
    fn base_forms_are_fixed_points() {
        let wn = lexicon();
        for (word, b) in [
            ("hang", Bucket::Verb),
            ("part", Bucket::Noun),
            ("Factory", Bucket::Noun),
            ("quickly", Bucket::Adverb),
        ] {
            let once = wn.lemmatize(word, b).unwrap();
            assert_eq!(once, word);
            assert_eq!(wn.lemmatize(&once, b).unwrap(), once);
        }
    }

    #[test]
    fn from_dir() {
        let dir = tempfile::tempdir().unwrap();
        let header = "  1 This software and database is being provided to you, the LICENSEE\n";
        fs::write(
            dir.path().join("index.noun"),
            format!("{header}factory n 1 1 @ 1 0 03316406\npart n 12 4 @ ~ %p + 12 3 13809207\n"),
        )
        .unwrap();
        fs::write(dir.path().join("index.verb"), format!("{header}hang v 12 4 @ ~ $ + 12 7 01481360\n")).unwrap();
        fs::write(dir.path().join("index.adj"), header).unwrap();
        fs::write(dir.path().join("index.adv"), header).unwrap();
        fs::write(dir.path().join("noun.exc"), "").unwrap();
        fs::write(dir.path().join("verb.exc"), "hung hang\n").unwrap();
        fs::write(dir.path().join("adj.exc"), "").unwrap();
        fs::write(dir.path().join("adv.exc"), "").unwrap();

        let wn = WordNet::from_dir(dir.path()).unwrap();
        assert!(wn.contains("factory", Bucket::Noun));
        assert!(!wn.contains("1", Bucket::Noun));
        assert_eq!(wn.lemmatize("hung", Bucket::Verb).unwrap(), "hang");
        assert_eq!(wn.lemmatize("parts", Bucket::Noun).unwrap(), "part");
    }

    #[test]
    fn from_dir_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(WordNet::from_dir(dir.path()).is_err());
    }
}
