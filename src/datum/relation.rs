//! Relation kinds and sense labels.
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Kind of discourse relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Relation {
    Explicit,
    Implicit,
    AltLex,
    EntRel,
    NoRel,
}

impl Relation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Explicit => "Explicit",
            Relation::Implicit => "Implicit",
            Relation::AltLex => "AltLex",
            Relation::EntRel => "EntRel",
            Relation::NoRel => "NoRel",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Explicit" => Ok(Relation::Explicit),
            "Implicit" => Ok(Relation::Implicit),
            "AltLex" => Ok(Relation::AltLex),
            "EntRel" => Ok(Relation::EntRel),
            "NoRel" => Ok(Relation::NoRel),
            other => Err(format!("unknown relation {other:?}")),
        }
    }
}

/// Sense of a connective, from most to least general (`Comparison.Contrast.Juxtaposition`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SemClass {
    levels: Vec<String>,
}

impl SemClass {
    /// Class levels, top level first.
    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    /// Top level class (`Comparison`, `Contingency`, `Expansion`, `Temporal`).
    pub fn primary(&self) -> &str {
        &self.levels[0]
    }

    pub fn secondary(&self) -> Option<&str> {
        self.levels.get(1).map(String::as_str)
    }

    pub fn tertiary(&self) -> Option<&str> {
        self.levels.get(2).map(String::as_str)
    }
}

impl fmt::Display for SemClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.levels.join("."))
    }
}

impl FromStr for SemClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let levels: Vec<String> = s.trim().split('.').map(str::to_string).collect();
        if levels.iter().any(String::is_empty) {
            return Err(format!("bad semantic class {s:?}"));
        }
        Ok(SemClass { levels })
    }
}

/// Respective position of the two arguments in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArgOrder {
    Arg1PrecedesArg2,
    Arg2PrecedesArg1,
    Arg1ContainsArg2,
    Arg2ContainsArg1,
    Overlapping,
}

impl ArgOrder {
    /// Order of two `(start, end)` extents.
    pub fn from_bounds(arg1: (usize, usize), arg2: (usize, usize)) -> Self {
        let ((s1, e1), (s2, e2)) = (arg1, arg2);
        if e1 < s2 {
            ArgOrder::Arg1PrecedesArg2
        } else if e2 < s1 {
            ArgOrder::Arg2PrecedesArg1
        } else if s1 <= s2 && e2 <= e1 {
            ArgOrder::Arg1ContainsArg2
        } else if s2 <= s1 && e1 <= e2 {
            ArgOrder::Arg2ContainsArg1
        } else {
            ArgOrder::Overlapping
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArgOrder::Arg1PrecedesArg2 => "arg1_precedes_arg2",
            ArgOrder::Arg2PrecedesArg1 => "arg2_precedes_arg1",
            ArgOrder::Arg1ContainsArg2 => "arg1_contains_arg2",
            ArgOrder::Arg2ContainsArg1 => "arg2_contains_arg1",
            ArgOrder::Overlapping => "overlapping",
        }
    }
}

impl fmt::Display for ArgOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
