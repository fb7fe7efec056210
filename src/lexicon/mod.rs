/*! Lexical lookups

Base form lookups used by lemmatized token views.
The lexicon is only ever read, and can be shared by reference between any number of records.
!*/
mod tags;
mod wordnet;

pub use tags::{wn_tag, Bucket};
pub use wordnet::WordNet;

/// Finds base forms.
pub trait Lemmatizer {
    /// Base form of `word` read as a `bucket`, or `None` when unknown.
    fn lemmatize(&self, word: &str, bucket: Bucket) -> Option<String>;
}

impl<L: Lemmatizer + ?Sized> Lemmatizer for &L {
    fn lemmatize(&self, word: &str, bucket: Bucket) -> Option<String> {
        (**self).lemmatize(word, bucket)
    }
}

/// Whether a token is an empty category (`*T*-1`, `*U*`, `*?*`, `*EXP*-2`, `0`...).
///
/// Empty categories are never looked up.
pub fn is_trace(token: &str, tag: &str) -> bool {
    tag == "-NONE-" || (token.len() > 1 && token.starts_with('*') && token[1..].contains('*'))
}

#[cfg(test)]
mod tests {
    use super::is_trace;

    #[test]
    fn traces() {
        assert!(is_trace("*T*-1", "NP"));
        assert!(is_trace("0", "-NONE-"));
        assert!(is_trace("*U*", "-NONE-"));
        assert!(!is_trace("*", "SYM"));
        assert!(!is_trace("factory", "NN"));
    }
}
