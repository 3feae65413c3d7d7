//! Formula parser
//!
//! A scanner plus a small shape parser for the `P(...)` mini-language.
//! The bar glyph `|` is both the intersection operator and the
//! conditional separator; instead of resolving that by trying regex
//! shapes in order, the parser picks the first top-level bar whose two
//! sides are each a well-formed token or chain as the conditional
//! separator, and reads every other bar as intersection. `P(A|B)` is
//! therefore always a conditional, never a two-token intersection chain.

use crate::ast::{Chain, EventExpr, EventToken, Formula, SetOp};
use crate::error::{FormulaError, FormulaResult};

/// Parse a formula string into an AST
///
/// Whitespace is removed up front; the remainder must be a `P(...)`
/// wrapper around a formula body. Any string that matches no grammar
/// shape fails with [`FormulaError::Syntax`] carrying the input.
///
/// # Example
/// ```rust
/// use probgrid_formula::parse_formula;
///
/// let formula = parse_formula("P(A)").unwrap();
/// let formula = parse_formula("P(A∩B^c)").unwrap();
/// let formula = parse_formula("P((A∪B)^c)").unwrap();
/// assert!(parse_formula("P(A+B)").is_err());
/// ```
pub fn parse_formula(raw: &str) -> FormulaResult<Formula> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    compact
        .strip_prefix("P(")
        .and_then(|rest| rest.strip_suffix(')'))
        .and_then(scan)
        .and_then(|toks| parse_body(&toks))
        .ok_or_else(|| FormulaError::Syntax(raw.trim().to_string()))
}

/// Token types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tok {
    /// An uppercase region letter
    Letter(char),
    /// The complement suffix "^c"
    Complement,
    /// 'U' or '∪'
    Union,
    /// '∩' or 'n'
    Intersect,
    /// '|': conditional separator or intersection, depending on position
    Bar,
    LeftParen,
    RightParen,
}

fn scan(body: &str) -> Option<Vec<Tok>> {
    let mut toks = Vec::new();
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        let tok = match c {
            // 'U' always reads as the union operator, so it is the one
            // uppercase letter that cannot name a region.
            'U' | '∪' => Tok::Union,
            '∩' | 'n' => Tok::Intersect,
            '|' => Tok::Bar,
            '(' => Tok::LeftParen,
            ')' => Tok::RightParen,
            '^' => match chars.next() {
                Some('c') => Tok::Complement,
                _ => return None,
            },
            c if c.is_ascii_uppercase() => Tok::Letter(c),
            _ => return None,
        };
        toks.push(tok);
    }

    Some(toks)
}

fn parse_body(toks: &[Tok]) -> Option<Formula> {
    // A body that opens with a parenthesis can only be the complemented
    // group shape.
    if toks.first() == Some(&Tok::LeftParen) {
        return parse_complement_group(toks).map(Formula::Complement);
    }

    for (i, tok) in toks.iter().enumerate() {
        if *tok == Tok::Bar {
            if let (Some(left), Some(condition)) =
                (parse_event(&toks[..i]), parse_event(&toks[i + 1..]))
            {
                return Some(Formula::Conditional { left, condition });
            }
        }
    }

    parse_event(toks).map(Formula::Event)
}

/// The operator class a token denotes, if any
fn op_class(tok: Tok) -> Option<SetOp> {
    match tok {
        Tok::Union => Some(SetOp::Union),
        Tok::Intersect | Tok::Bar => Some(SetOp::Intersection),
        _ => None,
    }
}

/// Parse an entire slice as a single token or a uniform-operator chain
fn parse_event(toks: &[Tok]) -> Option<EventExpr> {
    let mut pos = 0;
    let mut tokens = vec![parse_token(toks, &mut pos)?];
    let mut op = None;

    while pos < toks.len() {
        let class = op_class(toks[pos])?;
        match op {
            None => op = Some(class),
            // One uniform operator per chain; mixing union and
            // intersection is not expressible.
            Some(existing) if existing != class => return None,
            Some(_) => {}
        }
        pos += 1;
        tokens.push(parse_token(toks, &mut pos)?);
    }

    match op {
        None => Some(EventExpr::Token(tokens[0])),
        Some(op) => Some(EventExpr::Chain(Chain { op, tokens })),
    }
}

/// Parse a letter with an optional complement suffix
fn parse_token(toks: &[Tok], pos: &mut usize) -> Option<EventToken> {
    let Tok::Letter(letter) = *toks.get(*pos)? else {
        return None;
    };
    *pos += 1;

    let complemented = toks.get(*pos) == Some(&Tok::Complement);
    if complemented {
        *pos += 1;
    }

    Some(EventToken {
        letter,
        complemented,
    })
}

/// Parse the whole slice as `"(" Token Op Token ")" "^c"`
fn parse_complement_group(toks: &[Tok]) -> Option<Chain> {
    let mut pos = 0;

    expect(toks, &mut pos, Tok::LeftParen)?;
    let first = parse_token(toks, &mut pos)?;
    let op = op_class(*toks.get(pos)?)?;
    pos += 1;
    let second = parse_token(toks, &mut pos)?;
    expect(toks, &mut pos, Tok::RightParen)?;
    expect(toks, &mut pos, Tok::Complement)?;

    (pos == toks.len()).then(|| Chain {
        op,
        tokens: vec![first, second],
    })
}

fn expect(toks: &[Tok], pos: &mut usize, expected: Tok) -> Option<()> {
    (*toks.get(*pos)? == expected).then(|| *pos += 1)
}
