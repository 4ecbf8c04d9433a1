//! Token values and token kinds.

use std::fmt;

/// A kind of token a grammar can emit.
///
/// The set of kinds is closed per grammar but open across grammars: each
/// grammar defines its own `Copy` enum and names the variant that carries
/// scan errors. [`ItemKind`] is the stock set.
pub trait TokenKind: Copy + Eq + fmt::Debug + Send + 'static {
    /// Kind used for error tokens. Emitting it terminates the scan.
    const ERROR: Self;

    /// Returns `true` if this is the error kind.
    #[inline]
    fn is_error(self) -> bool {
        self == Self::ERROR
    }
}

/// Stock token kinds for text-oriented grammars.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Scan error; the token text is the diagnostic message.
    Error,
    /// Identifier.
    Identifier,
    /// Quoted string, including its quote characters.
    Quote,
    /// Plain text.
    Text,
}

impl ItemKind {
    /// Lowercase name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            ItemKind::Error => "error",
            ItemKind::Identifier => "identifier",
            ItemKind::Quote => "quote",
            ItemKind::Text => "text",
        }
    }
}

impl TokenKind for ItemKind {
    const ERROR: Self = ItemKind::Error;
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Byte range `start..end` of the input covered by a token.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Convert to a range for slicing the input.
    #[inline]
    pub const fn as_range(self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A token handed from the scanner to its consumer.
///
/// Created once at emission time and never mutated afterwards. For ordinary
/// tokens `text` is exactly `input[span]`; for error tokens it is the
/// diagnostic message and `span` marks the input pending when the error was
/// raised.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token<K> {
    pub kind: K,
    pub text: String,
    pub span: Span,
    /// 1-based line on which the token starts.
    pub line: usize,
}

impl<K: TokenKind> Token<K> {
    pub fn new(kind: K, text: impl Into<String>, span: Span, line: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
            line,
        }
    }

    /// The `(kind, text)` pair, the shape most consumers match on.
    #[inline]
    pub fn pair(&self) -> (K, &str) {
        (self.kind, &self.text)
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind.is_error()
    }
}

impl<K: TokenKind> fmt::Display for Token<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_error() {
            write!(f, "line {}: {}", self.line, self.text)
        } else {
            write!(f, "{:?} {:?} at {}", self.kind, self.text, self.span)
        }
    }
}
