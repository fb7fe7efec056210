//! Annotated text spans and their attribution.
use std::fmt;

use once_cell::unsync::OnceCell;

use super::span::{GornAddress, Span};
use crate::tree::{parse_fragments, Tree, TreeError};

/// The annotated text spans of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Part {
    Connective,
    /// Attribution of the relation as a whole.
    Attribution,
    Arg1,
    Arg1Attribution,
    Arg2,
    Arg2Attribution,
    Sup1,
    Sup2,
}

impl Part {
    pub const ALL: [Part; 8] = [
        Part::Connective,
        Part::Attribution,
        Part::Arg1,
        Part::Arg1Attribution,
        Part::Arg2,
        Part::Arg2Attribution,
        Part::Sup1,
        Part::Sup2,
    ];

    /// Column prefix (`Arg1_Attribution` for `Arg1_Attribution_Trees`...).
    pub fn prefix(&self) -> &'static str {
        match self {
            Part::Connective => "Connective",
            Part::Attribution => "Attribution",
            Part::Arg1 => "Arg1",
            Part::Arg1Attribution => "Arg1_Attribution",
            Part::Arg2 => "Arg2",
            Part::Arg2Attribution => "Arg2_Attribution",
            Part::Sup1 => "Sup1",
            Part::Sup2 => "Sup2",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A possibly discontinuous stretch of annotated text: the
/// `_SpanList`, `_GornList`, `_Trees` and `_RawText` columns of one [Part].
///
/// Trees are parsed on first access and kept.
#[derive(Debug, Clone, Default)]
pub struct TextSpan {
    spans: Vec<Span>,
    gorn: Vec<GornAddress>,
    raw_trees: String,
    raw_text: Option<String>,
    trees: OnceCell<Vec<Tree>>,
}

impl TextSpan {
    pub fn new(
        spans: Vec<Span>,
        gorn: Vec<GornAddress>,
        raw_trees: String,
        raw_text: Option<String>,
    ) -> Self {
        Self {
            spans,
            gorn,
            raw_trees,
            raw_text,
            trees: OnceCell::new(),
        }
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn gorn(&self) -> &[GornAddress] {
        &self.gorn
    }

    /// Get a reference to the unparsed `|||`-separated tree cell.
    pub fn raw_trees(&self) -> &str {
        &self.raw_trees
    }

    pub fn raw_text(&self) -> Option<&str> {
        self.raw_text.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.raw_text.is_none() && self.spans.is_empty()
    }

    /// Parsed tree fragments, in order.
    ///
    /// Parsing happens once; a failed parse is not kept and is reported again on the next call.
    pub fn trees(&self) -> Result<&[Tree], TreeError> {
        self.trees
            .get_or_try_init(|| parse_fragments(&self.raw_trees))
            .map(Vec::as_slice)
    }
}

/// Who a span is attributed to, and how.
#[derive(Debug, Clone, Default)]
pub struct Attribution {
    source: Option<String>,
    kind: Option<String>,
    polarity: Option<String>,
    determinacy: Option<String>,
    text: TextSpan,
}

impl Attribution {
    pub fn new(
        source: Option<String>,
        kind: Option<String>,
        polarity: Option<String>,
        determinacy: Option<String>,
        text: TextSpan,
    ) -> Self {
        Self {
            source,
            kind,
            polarity,
            determinacy,
            text,
        }
    }

    /// `Wr` (writer), `Ot` (other), `Arb` (arbitrary) or `Inh` (inherited).
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// `Comm`, `PAtt`, `Ftv` or `Ctrl`.
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn polarity(&self) -> Option<&str> {
        self.polarity.as_deref()
    }

    pub fn determinacy(&self) -> Option<&str> {
        self.determinacy.as_deref()
    }

    pub fn text(&self) -> &TextSpan {
        &self.text
    }
}

/// Arg1 or Arg2 of a relation, with its own attribution.
#[derive(Debug, Clone, Default)]
pub struct Argument {
    text: TextSpan,
    attribution: Attribution,
}

impl Argument {
    pub fn new(text: TextSpan, attribution: Attribution) -> Self {
        Self { text, attribution }
    }

    pub fn text(&self) -> &TextSpan {
        &self.text
    }

    pub fn attribution(&self) -> &Attribution {
        &self.attribution
    }
}
