use std::fmt::Display;
use std::str::FromStr;

use itertools::Itertools;

use crate::dimension::Dimension;
use crate::error::{WktError, WktResult};
use crate::io::wkt::reader::r#type::WktType;

/// One node of a tokenized WKT string.
///
/// A token is either a coordinate leaf (holding the numbers of one coordinate tuple) or a
/// container (holding one child per comma-separated item of a parenthesized group). The only
/// token holding neither is the body of an `EMPTY` geometry.
///
/// The root token, and each member of a `GEOMETRYCOLLECTION`, also carries the geometry type
/// and dimension of its header.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WktToken {
    wkt_type: WktType,
    dim: Dimension,
    tokens: Vec<WktToken>,
    coords: Vec<f64>,
}

impl WktToken {
    fn leaf(coords: Vec<f64>) -> Self {
        Self {
            coords,
            ..Default::default()
        }
    }

    fn container(tokens: Vec<WktToken>) -> Self {
        Self {
            tokens,
            ..Default::default()
        }
    }

    /// The geometry type of this token's header, or [WktType::None] for untagged tokens.
    pub fn wkt_type(&self) -> WktType {
        self.wkt_type
    }

    /// The dimension declared by this token's header. Untagged tokens report [Dimension::XY].
    pub fn dim(&self) -> Dimension {
        self.dim
    }

    /// Child tokens, empty for a coordinate leaf.
    pub fn tokens(&self) -> &[WktToken] {
        &self.tokens
    }

    /// The numbers of a coordinate leaf, empty for a container.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    pub fn is_leaf(&self) -> bool {
        !self.coords.is_empty()
    }

    /// Whether this is the body of an `EMPTY` geometry.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty() && self.tokens.is_empty()
    }

    /// The items of a group: the children of a container, or the token itself when it is a
    /// leaf standing for a one-item list such as the body of `MULTIPOINT (10 40)`.
    pub(crate) fn items(&self) -> &[WktToken] {
        if self.is_leaf() {
            std::slice::from_ref(self)
        } else {
            &self.tokens
        }
    }

    fn fmt_body(&self, f: &mut std::fmt::Formatter<'_>, bare_leaf: bool) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "EMPTY");
        }
        if self.is_leaf() {
            let tuple = self.coords.iter().join(" ");
            return if bare_leaf {
                write!(f, "{tuple}")
            } else {
                write!(f, "({tuple})")
            };
        }

        // A lone leaf keeps its own parentheses so the nesting depth survives re-parsing.
        let bare_children = self.tokens.len() > 1;
        write!(f, "(")?;
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            token.fmt_tagged(f, bare_children)?;
        }
        write!(f, ")")
    }

    fn fmt_tagged(&self, f: &mut std::fmt::Formatter<'_>, bare_leaf: bool) -> std::fmt::Result {
        if self.wkt_type == WktType::None {
            return self.fmt_body(f, bare_leaf);
        }
        write!(f, "{}", self.wkt_type.keyword())?;
        if self.dim != Dimension::XY {
            write!(f, " {}", self.dim.wkt_suffix())?;
        }
        write!(f, " ")?;
        self.fmt_body(f, false)
    }
}

impl Display for WktToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_tagged(f, false)
    }
}

/// A fully tokenized WKT string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WktText {
    token: WktToken,
}

impl WktText {
    /// Tokenize a WKT string.
    ///
    /// Empty input, or input not starting with a recognized geometry keyword, yields a text of
    /// type [WktType::None] rather than an error.
    pub fn parse(s: &str) -> WktResult<Self> {
        let mut tokenizer = Tokenizer::new(s);
        tokenizer.skip_whitespace();
        let keyword = tokenizer.keyword();
        let (wkt_type, has_z, has_m) = WktType::parse_keyword(keyword);
        if wkt_type == WktType::None {
            return Ok(Self::default());
        }

        let token = tokenizer.tagged(wkt_type, has_z, has_m, None)?;
        tokenizer.skip_whitespace();
        match tokenizer.peek() {
            None => Ok(Self { token }),
            Some(b')') => Err(WktError::MalformedInput(
                "unbalanced parentheses, unexpected ')'".to_string(),
            )),
            Some(_) => Err(WktError::MalformedInput(format!(
                "unexpected trailing content '{}'",
                tokenizer.rest()
            ))),
        }
    }

    pub fn geometry_type(&self) -> WktType {
        self.token.wkt_type
    }

    pub fn has_z(&self) -> bool {
        self.token.dim.has_z()
    }

    pub fn has_m(&self) -> bool {
        self.token.dim.has_m()
    }

    pub fn dimension(&self) -> Dimension {
        self.token.dim
    }

    /// The root token: a coordinate leaf for a point, a container for everything else.
    pub fn token(&self) -> &WktToken {
        &self.token
    }
}

impl FromStr for WktText {
    type Err = WktError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for WktText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.geometry_type() == WktType::None {
            return Ok(());
        }
        self.token.fmt(f)
    }
}

fn is_delimiter(b: u8) -> bool {
    b.is_ascii_whitespace() || matches!(b, b',' | b'(' | b')')
}

fn parse_number(word: &str) -> Option<f64> {
    lexical_core::parse::<f64>(word.as_bytes()).ok()
}

/// The deepest parenthesis nesting accepted. Bounds the recursion of the tokenizer, the
/// builder and token rendering.
pub(crate) const MAX_DEPTH: usize = 256;

enum Item {
    Numbers(Vec<f64>),
    Token(WktToken),
}

struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn take_while(&mut self, f: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(&f) {
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    fn keyword(&mut self) -> &'a str {
        self.take_while(|b| b.is_ascii_alphabetic())
    }

    /// The next word without consuming it.
    fn peek_word(&self) -> &'a str {
        let rest = self.rest();
        let end = rest.bytes().position(is_delimiter).unwrap_or(rest.len());
        &rest[..end]
    }

    /// Parse the header remainder and body of a geometry whose keyword was just consumed.
    fn tagged(
        &mut self,
        wkt_type: WktType,
        has_z: bool,
        has_m: bool,
        inherited: Option<Dimension>,
    ) -> WktResult<WktToken> {
        let mut dim = Dimension::from_flags(has_z, has_m);
        let mut explicit = has_z || has_m;

        self.skip_whitespace();
        let mut word = self.keyword();
        let upper = word.to_ascii_uppercase();
        if !explicit && matches!(upper.as_str(), "Z" | "M" | "ZM") {
            dim = Dimension::from_flags(upper.contains('Z'), upper.contains('M'));
            explicit = true;
            self.skip_whitespace();
            word = self.keyword();
        }
        if !explicit {
            if let Some(parent) = inherited {
                dim = parent;
            }
        }

        let mut token = if word.eq_ignore_ascii_case("EMPTY") {
            WktToken::default()
        } else if !word.is_empty() {
            return Err(WktError::MalformedInput(format!(
                "unexpected '{word}' after {} keyword",
                wkt_type.keyword()
            )));
        } else if self.peek() == Some(b'(') {
            self.group(dim)?
        } else {
            return Err(WktError::MalformedInput(format!(
                "expected '(' or EMPTY after {} keyword",
                wkt_type.keyword()
            )));
        };
        token.wkt_type = wkt_type;
        token.dim = dim;
        Ok(token)
    }

    /// Parse a parenthesized group, the cursor sitting on its opening parenthesis.
    fn group(&mut self, dim: Dimension) -> WktResult<WktToken> {
        if self.depth == MAX_DEPTH {
            return Err(WktError::MalformedInput(format!(
                "nesting too deep, more than {MAX_DEPTH} levels of parentheses"
            )));
        }
        self.depth += 1;
        let token = self.group_items(dim);
        self.depth -= 1;
        token
    }

    fn group_items(&mut self, dim: Dimension) -> WktResult<WktToken> {
        self.pos += 1;
        let mut items = vec![];
        loop {
            self.skip_whitespace();
            items.push(self.item(dim)?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b')') => {
                    self.pos += 1;
                    break;
                }
                None => {
                    return Err(WktError::MalformedInput(
                        "unbalanced parentheses, missing ')'".to_string(),
                    ))
                }
                Some(_) => {
                    return Err(WktError::MalformedInput(format!(
                        "expected ',' or ')' but found '{}'",
                        self.peek_word()
                    )))
                }
            }
        }

        if items.len() == 1 && matches!(items[0], Item::Numbers(_)) {
            if let Some(Item::Numbers(coords)) = items.pop() {
                return Ok(WktToken::leaf(coords));
            }
        }
        let tokens = items
            .into_iter()
            .map(|item| match item {
                Item::Numbers(coords) => WktToken::leaf(coords),
                Item::Token(token) => token,
            })
            .collect();
        Ok(WktToken::container(tokens))
    }

    fn item(&mut self, dim: Dimension) -> WktResult<Item> {
        match self.peek() {
            Some(b'(') => Ok(Item::Token(self.group(dim)?)),
            Some(b) if b.is_ascii_alphabetic() && parse_number(self.peek_word()).is_none() => {
                let keyword = self.keyword();
                let (wkt_type, has_z, has_m) = WktType::parse_keyword(keyword);
                if wkt_type == WktType::None {
                    // A word followed by a group or another word reads as a geometry header.
                    let next = self.rest().trim_start().bytes().next();
                    return Err(match next {
                        Some(b) if b == b'(' || b.is_ascii_alphabetic() => {
                            WktError::UnsupportedType(keyword.to_string())
                        }
                        _ => WktError::MalformedInput(format!(
                            "non-numeric coordinate '{keyword}'"
                        )),
                    });
                }
                Ok(Item::Token(self.tagged(wkt_type, has_z, has_m, Some(dim))?))
            }
            _ => Ok(Item::Numbers(self.numbers()?)),
        }
    }

    fn numbers(&mut self) -> WktResult<Vec<f64>> {
        let mut coords = vec![];
        loop {
            self.skip_whitespace();
            let word = self.peek_word();
            if word.is_empty() {
                break;
            }
            let value = parse_number(word).ok_or_else(|| {
                WktError::MalformedInput(format!("non-numeric coordinate '{word}'"))
            })?;
            coords.push(value);
            self.pos += word.len();
        }
        if coords.is_empty() {
            return Err(WktError::MalformedInput(match self.peek() {
                None => "unbalanced parentheses, missing ')'".to_string(),
                Some(b) => format!("expected coordinates but found '{}'", b as char),
            }));
        }
        Ok(coords)
    }
}
