//! Formula Abstract Syntax Tree types

/// A region reference, optionally complemented ("A" or "A^c")
///
/// The letter is any uppercase ASCII letter the scanner admits; whether a
/// region actually carries it is checked at evaluation time, so that
/// `P(D)` fails as an unknown label rather than a syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventToken {
    pub letter: char,
    pub complemented: bool,
}

impl EventToken {
    /// A plain reference to a region
    pub fn plain(letter: char) -> Self {
        Self {
            letter,
            complemented: false,
        }
    }

    /// The complement of a region
    pub fn complement(letter: char) -> Self {
        Self {
            letter,
            complemented: true,
        }
    }
}

/// Set operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOp {
    Union,
    Intersection,
}

/// Two or more tokens combined by one uniform operator
///
/// Mixed operators in one chain are not expressible; the parser rejects
/// them. Glyph variants of the same operator (`∩`, `n`, contextual `|`)
/// may be mixed freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub op: SetOp,
    /// In source order; always at least two entries
    pub tokens: Vec<EventToken>,
}

/// A single token or a chain - either side of a conditional, or a whole
/// formula body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventExpr {
    Token(EventToken),
    Chain(Chain),
}

impl EventExpr {
    /// The tokens of this expression, in source order
    pub fn tokens(&self) -> &[EventToken] {
        match self {
            EventExpr::Token(token) => std::slice::from_ref(token),
            EventExpr::Chain(chain) => &chain.tokens,
        }
    }
}

/// A parsed formula
///
/// Formulas are transient: parsed fresh from the input string on every
/// evaluation request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formula {
    /// A token or chain on its own, e.g. `P(A)` or `P(AUB^c)`
    Event(EventExpr),
    /// Joint occurrence of `left` and `condition`, e.g. `P(A|B)`
    Conditional {
        left: EventExpr,
        condition: EventExpr,
    },
    /// A complemented parenthesized pair, e.g. `P((A∪B)^c)`
    Complement(Chain),
}

impl Formula {
    /// Every letter the formula references, in source order, with repeats
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        let (first, second): (&[EventToken], &[EventToken]) = match self {
            Formula::Event(expr) => (expr.tokens(), &[]),
            Formula::Conditional { left, condition } => (left.tokens(), condition.tokens()),
            Formula::Complement(chain) => (&chain.tokens, &[]),
        };
        first.iter().chain(second).map(|token| token.letter)
    }
}
