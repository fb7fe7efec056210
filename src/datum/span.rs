//! Character span and Gorn address lists.
use std::fmt;
use std::str::FromStr;

/// Character offsets `start..end` into the raw WSJ file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl FromStr for Span {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .trim()
            .split_once("..")
            .ok_or_else(|| format!("span {s:?} is not of the form start..end"))?;
        let start = start
            .parse()
            .map_err(|_| format!("bad span start in {s:?}"))?;
        let end = end.parse().map_err(|_| format!("bad span end in {s:?}"))?;
        Ok(Span { start, end })
    }
}

/// Path from a sentence root: `3,0,1` is the second child of the first child
/// of the root of sentence 3.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GornAddress(pub Vec<usize>);

impl GornAddress {
    /// Sentence number in the file.
    pub fn sentence(&self) -> Option<usize> {
        self.0.first().copied()
    }

    /// Child indexes below the sentence root.
    pub fn path(&self) -> &[usize] {
        self.0.get(1..).unwrap_or(&[])
    }
}

impl fmt::Display for GornAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for i in &self.0 {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{i}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for GornAddress {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .split(',')
            .map(|i| {
                i.trim()
                    .parse()
                    .map_err(|_| format!("bad gorn address {s:?}"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(GornAddress)
    }
}

/// Parses a `;`-separated list. An empty cell is an empty list.
pub fn parse_list<T>(cell: &str) -> Result<Vec<T>, String>
where
    T: FromStr<Err = String>,
{
    if cell.trim().is_empty() {
        return Ok(Vec::new());
    }
    cell.split(';').map(str::parse).collect()
}

/// Smallest start and largest end of a span list.
pub fn bounds(spans: &[Span]) -> Option<(usize, usize)> {
    let start = spans.iter().map(|s| s.start).min()?;
    let end = spans.iter().map(|s| s.end).max()?;
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::{bounds, parse_list, GornAddress, Span};

    #[test]
    fn spans() {
        let spans: Vec<Span> = parse_list("9..13;17..21").unwrap();
        assert_eq!(spans, vec![Span::new(9, 13), Span::new(17, 21)]);
        assert_eq!(bounds(&spans), Some((9, 21)));
        assert!(parse_list::<Span>("").unwrap().is_empty());
        assert!(parse_list::<Span>("9-13").is_err());
        assert!(parse_list::<Span>("a..13").is_err());
        assert_eq!(Span::new(1, 4).to_string(), "1..4");
    }

    #[test]
    fn gorn() {
        let g: Vec<GornAddress> = parse_list("0,1,2;3,0").unwrap();
        assert_eq!(g[0], GornAddress(vec![0, 1, 2]));
        assert_eq!(g[1].sentence(), Some(3));
        assert_eq!(g[1].path(), &[0usize]);
        assert_eq!(g[0].to_string(), "0,1,2");
        assert!(parse_list::<GornAddress>("0,,1").is_err());
    }

    #[test]
    fn empty_bounds() {
        assert_eq!(bounds(&[]), None);
    }
}
