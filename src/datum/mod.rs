/*! Discourse relation records

A [Datum] is one row of the corpus, with typed columns and derived views
(token, tag and tree views of each annotated [Part]).

Views are parameterized by the part they read and by [ViewOptions]:

```no_run
# use pdtb2::datum::{Datum, Part, ViewOptions};
# use pdtb2::lexicon::WordNet;
# fn f(datum: &Datum, wordnet: &WordNet) -> Result<(), pdtb2::error::Error> {
let words = datum.words(Part::Arg1, &ViewOptions::new())?;
let lemmas = datum.words(Part::Arg1, &ViewOptions::new().lemmatize(wordnet))?;
let tagged = datum.pos(Part::Arg2Attribution, &ViewOptions::new().wn_format(true))?;
# Ok(())
# }
```
!*/
mod fields;
mod relation;
mod span;
mod text;

use std::str::FromStr;

use log::trace;

pub use fields::{check_header, index_of, FIELDS, FIELD_COUNT};
pub use relation::{ArgOrder, Relation, SemClass};
pub use span::{bounds, GornAddress, Span};
pub use text::{Argument, Attribution, Part, TextSpan};

use crate::error::Error;
use crate::lexicon::{is_trace, wn_tag, Bucket, Lemmatizer};
use crate::tree::Tree;

/// Options of the token and tag views.
#[derive(Clone, Copy, Default)]
pub struct ViewOptions<'l> {
    lemmatizer: Option<&'l dyn Lemmatizer>,
    wn_format: bool,
}

impl<'l> ViewOptions<'l> {
    /// Surface tokens, Penn Treebank tags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace tokens by their base form according to `lexicon`.
    pub fn lemmatize(mut self, lexicon: &'l dyn Lemmatizer) -> Self {
        self.lemmatizer = Some(lexicon);
        self
    }

    /// Use WordNet's `n`/`v`/`a`/`r` in place of open class tags.
    pub fn wn_format(mut self, wn_format: bool) -> Self {
        self.wn_format = wn_format;
        self
    }
}

/// Typed cells of a row, looked up by column name.
struct Cells<'r> {
    line: u64,
    cells: Vec<&'r str>,
}

impl<'r> Cells<'r> {
    fn raw(&self, name: &str) -> &'r str {
        // names are all from FIELDS
        index_of(name).map_or("", |i| self.cells[i])
    }

    fn opt(&self, name: &str) -> Option<String> {
        let cell = self.raw(name).trim();
        (!cell.is_empty()).then(|| cell.to_string())
    }

    fn parse<T>(&self, name: &str) -> Result<T, Error>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.raw(name)
            .trim()
            .parse()
            .map_err(|e| Error::format(self.line, format!("{name}: {e}")))
    }

    fn parse_opt<T>(&self, name: &str) -> Result<Option<T>, Error>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        if self.raw(name).trim().is_empty() {
            Ok(None)
        } else {
            self.parse(name).map(Some)
        }
    }

    fn list<T>(&self, name: &str) -> Result<Vec<T>, Error>
    where
        T: FromStr<Err = String>,
    {
        span::parse_list(self.raw(name)).map_err(|e| Error::format(self.line, format!("{name}: {e}")))
    }

    fn text_span(&self, prefix: &str) -> Result<TextSpan, Error> {
        Ok(TextSpan::new(
            self.list(&format!("{prefix}_SpanList"))?,
            self.list(&format!("{prefix}_GornList"))?,
            self.raw(&format!("{prefix}_Trees")).to_string(),
            self.opt(&format!("{prefix}_RawText")),
        ))
    }

    fn attribution(&self, prefix: &str) -> Result<Attribution, Error> {
        Ok(Attribution::new(
            self.opt(&format!("{prefix}_Source")),
            self.opt(&format!("{prefix}_Type")),
            self.opt(&format!("{prefix}_Polarity")),
            self.opt(&format!("{prefix}_Determinacy")),
            self.text_span(prefix)?,
        ))
    }

    fn argument(&self, prefix: &str) -> Result<Argument, Error> {
        Ok(Argument::new(
            self.text_span(prefix)?,
            self.attribution(&format!("{prefix}_Attribution"))?,
        ))
    }
}

/// One annotated discourse relation.
#[derive(Debug, Clone)]
pub struct Datum {
    line: u64,
    relation: Relation,
    section: u32,
    file_number: u32,
    connective: TextSpan,
    connective_string_position: Option<usize>,
    sentence_number: Option<usize>,
    conn_head: Option<String>,
    conn1: Option<String>,
    conn2: Option<String>,
    conn_head_sem_class1: Option<SemClass>,
    conn_head_sem_class2: Option<SemClass>,
    conn2_sem_class1: Option<SemClass>,
    conn2_sem_class2: Option<SemClass>,
    attribution: Attribution,
    arg1: Argument,
    arg2: Argument,
    sup1: TextSpan,
    sup2: TextSpan,
}

impl Datum {
    /// Builds a record from the cells of one row, in [FIELDS] order.
    ///
    /// `line` is the row's line in the source file, used in errors.
    pub fn from_fields<'a, I>(fields: I, line: u64) -> Result<Self, Error>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let cells: Vec<&str> = fields.into_iter().collect();
        if cells.len() != FIELD_COUNT {
            return Err(Error::format(
                line,
                format!("expected {} fields, found {}", FIELD_COUNT, cells.len()),
            ));
        }
        let c = Cells { line, cells };

        let datum = Datum {
            line,
            relation: c.parse("Relation")?,
            section: c.parse("Section")?,
            file_number: c.parse("FileNumber")?,
            connective: c.text_span("Connective")?,
            connective_string_position: c.parse_opt("Connective_StringPosition")?,
            sentence_number: c.parse_opt("SentenceNumber")?,
            conn_head: c.opt("ConnHead"),
            conn1: c.opt("Conn1"),
            conn2: c.opt("Conn2"),
            conn_head_sem_class1: c.parse_opt("ConnHeadSemClass1")?,
            conn_head_sem_class2: c.parse_opt("ConnHeadSemClass2")?,
            conn2_sem_class1: c.parse_opt("Conn2SemClass1")?,
            conn2_sem_class2: c.parse_opt("Conn2SemClass2")?,
            attribution: c.attribution("Attribution")?,
            arg1: c.argument("Arg1")?,
            arg2: c.argument("Arg2")?,
            sup1: c.text_span("Sup1")?,
            sup2: c.text_span("Sup2")?,
        };
        trace!("line {}: {} {}", line, datum.relation, datum.item_id());
        Ok(datum)
    }

    /// Builds a record from a csv row.
    pub fn from_record(record: &csv::StringRecord) -> Result<Self, Error> {
        let line = record.position().map_or(0, |p| p.line());
        Self::from_fields(record.iter(), line)
    }

    /// Line of the record in its source file.
    pub fn line(&self) -> u64 {
        self.line
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }

    /// WSJ section (`00` to `24`).
    pub fn section(&self) -> u32 {
        self.section
    }

    pub fn file_number(&self) -> u32 {
        self.file_number
    }

    /// `section/file`, e.g. `2/15`.
    pub fn item_id(&self) -> String {
        format!("{}/{}", self.section, self.file_number)
    }

    pub fn connective(&self) -> &TextSpan {
        &self.connective
    }

    /// Offset where an implicit connective was inserted.
    pub fn connective_string_position(&self) -> Option<usize> {
        self.connective_string_position
    }

    /// Sentence of an implicit connective.
    pub fn sentence_number(&self) -> Option<usize> {
        self.sentence_number
    }

    pub fn conn_head(&self) -> Option<&str> {
        self.conn_head.as_deref()
    }

    pub fn conn1(&self) -> Option<&str> {
        self.conn1.as_deref()
    }

    pub fn conn2(&self) -> Option<&str> {
        self.conn2.as_deref()
    }

    pub fn conn_head_sem_class1(&self) -> Option<&SemClass> {
        self.conn_head_sem_class1.as_ref()
    }

    pub fn conn_head_sem_class2(&self) -> Option<&SemClass> {
        self.conn_head_sem_class2.as_ref()
    }

    pub fn conn2_sem_class1(&self) -> Option<&SemClass> {
        self.conn2_sem_class1.as_ref()
    }

    pub fn conn2_sem_class2(&self) -> Option<&SemClass> {
        self.conn2_sem_class2.as_ref()
    }

    /// Attribution of the relation.
    pub fn attribution(&self) -> &Attribution {
        &self.attribution
    }

    pub fn arg1(&self) -> &Argument {
        &self.arg1
    }

    pub fn arg2(&self) -> &Argument {
        &self.arg2
    }

    pub fn sup1(&self) -> &TextSpan {
        &self.sup1
    }

    pub fn sup2(&self) -> &TextSpan {
        &self.sup2
    }

    /// The text span of a part.
    pub fn text(&self, part: Part) -> &TextSpan {
        match part {
            Part::Connective => &self.connective,
            Part::Attribution => self.attribution.text(),
            Part::Arg1 => self.arg1.text(),
            Part::Arg1Attribution => self.arg1.attribution().text(),
            Part::Arg2 => self.arg2.text(),
            Part::Arg2Attribution => self.arg2.attribution().text(),
            Part::Sup1 => &self.sup1,
            Part::Sup2 => &self.sup2,
        }
    }

    /// Tree fragments of a part, parsed on first call.
    pub fn trees(&self, part: Part) -> Result<&[Tree], Error> {
        self.text(part)
            .trees()
            .map_err(|e| Error::format(self.line, format!("{}_Trees: {}", part.prefix(), e)))
    }

    /// (token, tag) pairs of a part, in text order.
    ///
    /// With a lemmatizer, tokens of open class tags are replaced by their base
    /// form; unknown tokens and empty categories are left as is.
    pub fn pos(&self, part: Part, options: &ViewOptions) -> Result<Vec<(String, String)>, Error> {
        let trees = self.trees(part)?;
        let tagged = trees
            .iter()
            .flat_map(Tree::pos)
            .map(|(token, tag)| {
                let token = match (options.lemmatizer, Bucket::from_treebank(tag)) {
                    (Some(lexicon), Some(bucket)) if !is_trace(token, tag) => lexicon
                        .lemmatize(token, bucket)
                        .unwrap_or_else(|| token.to_string()),
                    _ => token.to_string(),
                };
                let tag = if options.wn_format {
                    wn_tag(tag)
                } else {
                    tag.to_string()
                };
                (token, tag)
            })
            .collect();
        Ok(tagged)
    }

    /// Tokens of a part, in text order. See [Datum::pos].
    pub fn words(&self, part: Part, options: &ViewOptions) -> Result<Vec<String>, Error> {
        Ok(self
            .pos(part, options)?
            .into_iter()
            .map(|(token, _)| token)
            .collect())
    }

    /// Connective string: head of an explicit connective, text of an AltLex,
    /// inserted connective of an implicit relation (as `Implicit=<conn>` with `distinguish_implicit`).
    pub fn conn_str(&self, distinguish_implicit: bool) -> Option<String> {
        match self.relation {
            Relation::Explicit => self.conn_head.clone(),
            Relation::AltLex => self.connective.raw_text().map(str::to_string),
            Relation::Implicit => self.conn1.as_ref().map(|c| {
                if distinguish_implicit {
                    format!("Implicit={c}")
                } else {
                    c.clone()
                }
            }),
            Relation::EntRel | Relation::NoRel => None,
        }
    }

    /// Levels of `ConnHeadSemClass1`.
    pub fn semclass1_values(&self) -> Option<&[String]> {
        self.conn_head_sem_class1.as_ref().map(SemClass::levels)
    }

    /// Levels of `ConnHeadSemClass2`.
    pub fn semclass2_values(&self) -> Option<&[String]> {
        self.conn_head_sem_class2.as_ref().map(SemClass::levels)
    }

    pub fn primary_semclass1(&self) -> Option<&str> {
        self.conn_head_sem_class1.as_ref().map(SemClass::primary)
    }

    pub fn secondary_semclass1(&self) -> Option<&str> {
        self.conn_head_sem_class1.as_ref().and_then(SemClass::secondary)
    }

    pub fn tertiary_semclass1(&self) -> Option<&str> {
        self.conn_head_sem_class1.as_ref().and_then(SemClass::tertiary)
    }

    pub fn primary_semclass2(&self) -> Option<&str> {
        self.conn_head_sem_class2.as_ref().map(SemClass::primary)
    }

    pub fn secondary_semclass2(&self) -> Option<&str> {
        self.conn_head_sem_class2.as_ref().and_then(SemClass::secondary)
    }

    pub fn tertiary_semclass2(&self) -> Option<&str> {
        self.conn_head_sem_class2.as_ref().and_then(SemClass::tertiary)
    }

    fn final_source<'a>(&'a self, arg: &'a Argument) -> Option<&'a str> {
        match arg.attribution().source() {
            Some("Inh") => self.attribution.source(),
            other => other,
        }
    }

    /// Arg1 attribution source, with `Inh` resolved to the relation's source.
    pub fn final_arg1_attribution_source(&self) -> Option<&str> {
        self.final_source(&self.arg1)
    }

    /// Arg2 attribution source, with `Inh` resolved to the relation's source.
    pub fn final_arg2_attribution_source(&self) -> Option<&str> {
        self.final_source(&self.arg2)
    }

    /// Order of the arguments in the text, `None` if a span list is missing.
    pub fn relative_arg_order(&self) -> Option<ArgOrder> {
        let arg1 = bounds(self.arg1.text().spans())?;
        let arg2 = bounds(self.arg2.text().spans())?;
        Some(ArgOrder::from_bounds(arg1, arg2))
    }

    pub fn arg1_precedes_arg2(&self) -> bool {
        self.relative_arg_order() == Some(ArgOrder::Arg1PrecedesArg2)
    }

    /// Whether the text reads `Arg1 (connective) Arg2`: Arg1 first, and no
    /// more than 3 characters between Arg1, the connective (for relations
    /// other than implicit ones) and Arg2.
    pub fn is_adjacent(&self) -> bool {
        const MAX_GAP: i64 = 3;

        if !self.arg1_precedes_arg2() {
            return false;
        }
        let (arg1_end, arg2_start) = match (
            bounds(self.arg1.text().spans()),
            bounds(self.arg2.text().spans()),
        ) {
            (Some((_, e)), Some((s, _))) => (e as i64, s as i64),
            _ => return false,
        };

        if self.relation == Relation::Implicit {
            return arg2_start - arg1_end <= MAX_GAP;
        }
        match bounds(self.connective.spans()) {
            Some((conn_start, conn_end)) => {
                conn_start as i64 - arg1_end <= MAX_GAP && arg2_start - conn_end as i64 <= MAX_GAP
            }
            None => false,
        }
    }
}
