//! Small grammar used by the unit tests: whitespace-separated words and
//! double-quoted strings.

use crate::{step, ItemKind, Scanner, Step};

pub(crate) fn lex_text(s: &mut Scanner<'_, ItemKind>) -> Option<Step<ItemKind>> {
    s.accept_while(char::is_whitespace);
    s.ignore();
    match s.peek() {
        None => None,
        Some('"') => Some(step!(lex_quote)),
        Some(_) => Some(step!(lex_word)),
    }
}

fn lex_word(s: &mut Scanner<'_, ItemKind>) -> Option<Step<ItemKind>> {
    s.accept_while(|c| !c.is_whitespace() && c != '"');
    s.emit(ItemKind::Identifier);
    Some(step!(lex_text))
}

fn lex_quote(s: &mut Scanner<'_, ItemKind>) -> Option<Step<ItemKind>> {
    s.advance(); // opening quote
    if !s.advance_to(b'"') {
        return s.error("unterminated quoted string");
    }
    s.advance();
    s.emit(ItemKind::Quote);
    Some(step!(lex_text))
}

/// Emits an empty text token forever.
pub(crate) fn lex_forever(s: &mut Scanner<'_, ItemKind>) -> Option<Step<ItemKind>> {
    s.emit(ItemKind::Text);
    Some(step!(lex_forever))
}
