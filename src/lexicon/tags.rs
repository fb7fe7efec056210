//! Conversion of Penn Treebank tags to WordNet part-of-speech buckets.
use std::fmt;
use std::str::FromStr;

/// Coarse part of speech, as used to key WordNet lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bucket {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl Bucket {
    pub const ALL: [Bucket; 4] = [Bucket::Noun, Bucket::Verb, Bucket::Adjective, Bucket::Adverb];

    /// Maps a Penn Treebank tag (`NNS`, `VBD`, `JJR`, `RB`...) to its bucket.
    ///
    /// Tags outside the four open classes (determiners, traces, punctuation...) give `None`.
    pub fn from_treebank(tag: &str) -> Option<Self> {
        let tag = tag.to_ascii_lowercase();
        if tag.starts_with('v') {
            Some(Bucket::Verb)
        } else if tag.starts_with('n') {
            Some(Bucket::Noun)
        } else if tag.starts_with('j') {
            Some(Bucket::Adjective)
        } else if tag.starts_with("rb") {
            Some(Bucket::Adverb)
        } else {
            None
        }
    }

    /// WordNet's one letter code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Noun => "n",
            Bucket::Verb => "v",
            Bucket::Adjective => "a",
            Bucket::Adverb => "r",
        }
    }

    /// Suffix of the WordNet `dict/` files for this bucket (`index.noun`, `noun.exc`).
    pub fn file_suffix(&self) -> &'static str {
        match self {
            Bucket::Noun => "noun",
            Bucket::Verb => "verb",
            Bucket::Adjective => "adj",
            Bucket::Adverb => "adv",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Bucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "n" => Ok(Bucket::Noun),
            "v" => Ok(Bucket::Verb),
            // adjective satellites share the adjective files
            "a" | "s" => Ok(Bucket::Adjective),
            "r" => Ok(Bucket::Adverb),
            other => Err(format!("unknown WordNet part of speech {other:?}")),
        }
    }
}

/// Tag as printed with `wn_format`: the bucket code if there is one, the tag itself otherwise.
pub fn wn_tag(tag: &str) -> String {
    match Bucket::from_treebank(tag) {
        Some(b) => b.as_str().to_string(),
        None => tag.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{wn_tag, Bucket};

    // The 45 Penn Treebank tags plus the empty category tag.
    const PENN: [&str; 46] = [
        "CC", "CD", "DT", "EX", "FW", "IN", "JJ", "JJR", "JJS", "LS", "MD", "NN", "NNS", "NNP",
        "NNPS", "PDT", "POS", "PRP", "PRP$", "RB", "RBR", "RBS", "RP", "SYM", "TO", "UH", "VB",
        "VBD", "VBG", "VBN", "VBP", "VBZ", "WDT", "WP", "WP$", "WRB", "#", "$", "''", "``", ",",
        ".", ":", "-LRB-", "-RRB-", "-NONE-",
    ];

    #[test]
    fn mapping_is_total() {
        for tag in PENN {
            let mapped = wn_tag(tag);
            match Bucket::from_treebank(tag) {
                Some(b) => assert_eq!(mapped, b.as_str()),
                None => assert_eq!(mapped, tag),
            }
        }
    }

    #[test]
    fn open_classes() {
        assert_eq!(Bucket::from_treebank("NNS"), Some(Bucket::Noun));
        assert_eq!(Bucket::from_treebank("VBD"), Some(Bucket::Verb));
        assert_eq!(Bucket::from_treebank("JJR"), Some(Bucket::Adjective));
        assert_eq!(Bucket::from_treebank("RBS"), Some(Bucket::Adverb));
        assert_eq!(Bucket::from_treebank("WRB"), None);
        assert_eq!(Bucket::from_treebank("-NONE-"), None);
    }

    #[test]
    fn codes() {
        for b in Bucket::ALL {
            assert_eq!(b.as_str().parse::<Bucket>().unwrap(), b);
        }
        assert_eq!("s".parse::<Bucket>().unwrap(), Bucket::Adjective);
    }
}
