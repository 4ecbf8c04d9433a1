#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use pretty_assertions::assert_eq;
use statelex_core::{step, ItemKind, Outcome, Scanner, Step};

use super::Lexer;
use crate::{Capacity, ScanConfig};

/// One `Text` token per line, newlines ignored.
fn lex_line(s: &mut Scanner<'_, ItemKind>) -> Option<Step<ItemKind>> {
    s.accept_run("\n");
    s.ignore();
    if s.is_eof() {
        return None;
    }
    s.advance_to(b'\n');
    s.emit(ItemKind::Text);
    Some(step!(lex_line))
}

fn lines(lexer: &Lexer<ItemKind>) -> Vec<String> {
    lexer.tokens().map(|t| t.text).collect()
}

#[test]
fn accessors_reflect_construction() {
    let lexer = Lexer::new("notes", "a\nb", step!(lex_line))
        .with_config(ScanConfig::new().unbounded());
    assert_eq!(lexer.name(), "notes");
    assert_eq!(lexer.input(), "a\nb");
    assert_eq!(lexer.config().capacity, Capacity::Unbounded);
}

#[test]
fn tokens_scans_on_the_current_thread() {
    let lexer = Lexer::new("notes", "first\n\nsecond\n", step!(lex_line));
    assert_eq!(lines(&lexer), vec!["first", "second"]);
    // The input is untouched, so it can be scanned again.
    assert_eq!(lines(&lexer), vec!["first", "second"]);
}

#[test]
fn drain_collects_from_the_producer_thread() {
    let lexer = Lexer::new("notes", "one\ntwo\nthree", step!(lex_line));
    let (tokens, summary) = lexer.drain().unwrap();
    let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["one", "two", "three"]);
    assert_eq!(tokens[2].line, 3);
    assert_eq!(summary.outcome, Outcome::Completed);
    assert_eq!(summary.tokens, 3);
}

#[test]
fn drain_matches_lazy_scan() {
    let input = "alpha\nbeta\n\ngamma";
    let lazy: Vec<_> = Lexer::new("x", input, step!(lex_line)).tokens().collect();
    let (threaded, _) = Lexer::new("x", input, step!(lex_line))
        .with_config(ScanConfig::new().bounded(0))
        .drain()
        .unwrap();
    assert_eq!(lazy, threaded);
}
