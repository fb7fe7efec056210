/*! Bracketed constituency trees

Parsing and rendering of Penn Treebank style bracket strings such as
`(S (NP (DT the) (NN factory)) (VP (VBD closed)))`.

A corpus cell can hold several fragments joined by [FRAGMENT_SEPARATOR];
[parse_fragments] splits and parses them in order.
!*/
use std::fmt;
use std::str::FromStr;

/// Separator between fragments of a single tree cell.
pub const FRAGMENT_SEPARATOR: &str = "|||";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Nothing to parse.
    Empty,
    /// Input ended before every `(` was closed.
    Unbalanced { pos: usize },
    /// A `)` with no matching `(`.
    UnexpectedClose { pos: usize },
    /// A token where a `(` was expected.
    MissingOpen { pos: usize },
    /// Input left over after the root was closed.
    Trailing { pos: usize },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::Empty => f.write_str("empty bracket string"),
            TreeError::Unbalanced { pos } => write!(f, "unclosed bracket at end of input ({pos})"),
            TreeError::UnexpectedClose { pos } => write!(f, "unexpected ')' at {pos}"),
            TreeError::MissingOpen { pos } => write!(f, "expected '(' at {pos}"),
            TreeError::Trailing { pos } => write!(f, "trailing input at {pos}"),
        }
    }
}

impl std::error::Error for TreeError {}

/// Child of a [Tree]: either a subtree or a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Tree(Tree),
    Leaf(String),
}

impl Node {
    pub fn leaf<S: Into<String>>(token: S) -> Self {
        Node::Leaf(token.into())
    }
}

/// A labelled constituent with ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    label: String,
    children: Vec<Node>,
}

impl Tree {
    /// An empty label is only rendered unambiguously when the first child is a subtree:
    /// `( foo)` reads back as a `foo` node with no children.
    pub fn new<S: Into<String>>(label: S, children: Vec<Node>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }

    /// Get a reference to the tree's label.
    ///
    /// Unlabelled roots (`( (S ...))`) have an empty label.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Tokens in left-to-right order.
    pub fn leaves(&self) -> Vec<&str> {
        self.pos().into_iter().map(|(token, _)| token).collect()
    }

    /// (token, tag) pairs in left-to-right order, the tag being the label of
    /// the node directly dominating the token.
    pub fn pos(&self) -> Vec<(&str, &str)> {
        let mut out = Vec::new();
        self.collect_pos(&mut out);
        out
    }

    fn collect_pos<'a>(&'a self, out: &mut Vec<(&'a str, &'a str)>) {
        for child in &self.children {
            match child {
                Node::Leaf(token) => out.push((token.as_str(), self.label.as_str())),
                Node::Tree(t) => t.collect_pos(out),
            }
        }
    }

    /// Number of nodes on the longest root to leaf path, leaves included.
    pub fn height(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|c| match c {
                Node::Leaf(_) => 1,
                Node::Tree(t) => t.height(),
            })
            .max()
            .unwrap_or(0)
    }

    /// Indented rendering: preterminals stay on one line, any other node
    /// puts each child on its own line, two spaces deeper.
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        self.write_pretty(&mut out, 0);
        out
    }

    fn is_preterminal(&self) -> bool {
        self.children.iter().all(|c| matches!(c, Node::Leaf(_)))
    }

    fn write_pretty(&self, out: &mut String, indent: usize) {
        out.push('(');
        out.push_str(&self.label);
        if self.is_preterminal() {
            for child in &self.children {
                if let Node::Leaf(token) = child {
                    out.push(' ');
                    out.push_str(token);
                }
            }
        } else {
            for child in &self.children {
                out.push('\n');
                out.extend(std::iter::repeat(' ').take(indent + 2));
                match child {
                    Node::Leaf(token) => out.push_str(token),
                    Node::Tree(t) => t.write_pretty(out, indent + 2),
                }
            }
        }
        out.push(')');
    }
}

/// Single-line bracket rendering.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.label)?;
        for child in &self.children {
            match child {
                Node::Leaf(token) => write!(f, " {token}")?,
                Node::Tree(t) => write!(f, " {t}")?,
            }
        }
        f.write_str(")")
    }
}

impl FromStr for Tree {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser::new(s);
        let tree = parser.tree()?;
        match parser.next() {
            None => Ok(tree),
            Some((pos, _)) => Err(TreeError::Trailing { pos }),
        }
    }
}

/// Parse a `|||`-separated tree cell. An empty (or blank) cell has no fragments.
pub fn parse_fragments(cell: &str) -> Result<Vec<Tree>, TreeError> {
    if cell.trim().is_empty() {
        return Ok(Vec::new());
    }
    cell.split(FRAGMENT_SEPARATOR).map(str::parse).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Open,
    Close,
    Word(&'a str),
}

/// Recursive descent over a token stream of brackets and words.
struct Parser<'a> {
    src: &'a str,
    cursor: usize,
    peeked: Option<Option<(usize, Token<'a>)>>,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            cursor: 0,
            peeked: None,
        }
    }

    fn lex(&mut self) -> Option<(usize, Token<'a>)> {
        let rest = &self.src[self.cursor..];
        let skipped = rest.len() - rest.trim_start().len();
        self.cursor += skipped;
        let start = self.cursor;
        let rest = &self.src[start..];
        let c = rest.chars().next()?;
        match c {
            '(' => {
                self.cursor += 1;
                Some((start, Token::Open))
            }
            ')' => {
                self.cursor += 1;
                Some((start, Token::Close))
            }
            _ => {
                let len = rest
                    .find(|c: char| c.is_whitespace() || c == '(' || c == ')')
                    .unwrap_or(rest.len());
                self.cursor += len;
                Some((start, Token::Word(&rest[..len])))
            }
        }
    }

    fn peek(&mut self) -> Option<(usize, Token<'a>)> {
        if self.peeked.is_none() {
            let t = self.lex();
            self.peeked = Some(t);
        }
        self.peeked.flatten()
    }

    fn next(&mut self) -> Option<(usize, Token<'a>)> {
        match self.peeked.take() {
            Some(t) => t,
            None => self.lex(),
        }
    }

    fn tree(&mut self) -> Result<Tree, TreeError> {
        match self.next() {
            None => return Err(TreeError::Empty),
            Some((_, Token::Open)) => (),
            Some((pos, Token::Close)) => return Err(TreeError::UnexpectedClose { pos }),
            Some((pos, Token::Word(_))) => return Err(TreeError::MissingOpen { pos }),
        }

        let label = match self.peek() {
            Some((_, Token::Word(w))) => {
                self.next();
                w.to_string()
            }
            _ => String::new(),
        };

        let mut children = Vec::new();
        loop {
            match self.peek() {
                None => {
                    return Err(TreeError::Unbalanced {
                        pos: self.src.len(),
                    })
                }
                Some((_, Token::Close)) => {
                    self.next();
                    return Ok(Tree::new(label, children));
                }
                Some((_, Token::Word(w))) => {
                    self.next();
                    children.push(Node::leaf(w));
                }
                Some((_, Token::Open)) => children.push(Node::Tree(self.tree()?)),
            }
        }
    }
}
