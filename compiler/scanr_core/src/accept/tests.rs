use crate::predicate::{is_alpha, is_digit, is_hostname_char, is_newline};
use crate::{Cursor, DIGITS};

// === accept_one_of ===

#[test]
fn one_of_consumes_a_single_member() {
    let mut cursor = Cursor::new("123");
    assert!(cursor.accept_one_of(DIGITS));
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn one_of_leaves_position_on_mismatch() {
    let mut cursor = Cursor::new("a1");
    assert!(!cursor.accept_one_of(DIGITS));
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn one_of_at_eof_is_false() {
    let mut cursor = Cursor::new("");
    assert!(!cursor.accept_one_of(DIGITS));
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn one_of_handles_multibyte_sets() {
    let mut cursor = Cursor::new("€$");
    assert!(cursor.accept_one_of("£€"));
    assert_eq!(cursor.pos(), 3);
    assert!(!cursor.accept_one_of("£€"));
}

// === accept_run ===

#[test]
fn run_counts_consumed_runes() {
    let mut cursor = Cursor::new("4096 bytes");
    assert_eq!(cursor.accept_run(DIGITS), 4);
    assert_eq!(cursor.pending(), "4096");
    assert_eq!(cursor.peek(), ' ');
}

#[test]
fn run_of_nothing_is_zero() {
    let mut cursor = Cursor::new("x");
    assert_eq!(cursor.accept_run(DIGITS), 0);
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn run_stops_at_eof() {
    let mut cursor = Cursor::new("aaa");
    assert_eq!(cursor.accept_run("a"), 3);
    assert!(cursor.is_eof());
}

// === accept_until (rune) ===

#[test]
fn until_stops_before_target() {
    let mut cursor = Cursor::new("key=value");
    assert!(cursor.accept_until('='));
    assert_eq!(cursor.pending(), "key");
    assert_eq!(cursor.peek(), '=');
}

#[test]
fn until_runs_to_eof_without_target() {
    let mut cursor = Cursor::new("no target here");
    assert!(cursor.accept_until(';'));
    assert!(cursor.is_eof());
}

#[test]
fn until_is_a_no_op_on_target_or_eof() {
    let mut cursor = Cursor::new("=x");
    assert!(!cursor.accept_until('='));
    assert_eq!(cursor.pos(), 0);

    let mut empty = Cursor::new("");
    assert!(!empty.accept_until('='));
}

#[test]
fn until_non_ascii_target() {
    let mut cursor = Cursor::new("abc→def");
    assert!(cursor.accept_until('→'));
    assert_eq!(cursor.pending(), "abc");
}

#[test]
fn until_stops_at_interior_nul() {
    let mut cursor = Cursor::new("ab\0c;");
    assert!(cursor.accept_until(';'));
    assert_eq!(cursor.pending(), "ab");
}

#[test]
fn until_cannot_be_backed_up() {
    let mut cursor = Cursor::new("abc;");
    cursor.accept_until(';');
    assert!(cursor.try_backup().is_err());
    assert_eq!(cursor.pos(), 3);
}

// === accept_while / accept_until_match ===

#[test]
fn while_consumes_matching_prefix() {
    let mut cursor = Cursor::new("www-1.example");
    assert!(cursor.accept_while(is_hostname_char));
    assert_eq!(cursor.pending(), "www-1");
}

#[test]
fn while_reports_nothing_consumed() {
    let mut cursor = Cursor::new(".com");
    assert!(!cursor.accept_while(is_hostname_char));
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn while_accepts_closures() {
    let mut cursor = Cursor::new("aAbB12");
    assert!(cursor.accept_while(|r: char| is_alpha(r)));
    assert_eq!(cursor.pending(), "aAbB");
    assert!(cursor.accept_while(is_digit));
    assert!(cursor.is_eof());
}

#[test]
fn until_match_stops_at_class_member() {
    let mut cursor = Cursor::new("first line\nsecond");
    assert!(cursor.accept_until_match(is_newline));
    assert_eq!(cursor.pending(), "first line");
}

#[test]
fn until_match_reports_nothing_consumed() {
    let mut cursor = Cursor::new("\r\n");
    assert!(!cursor.accept_until_match(is_newline));
    assert_eq!(cursor.pos(), 0);
}

// === accept_literal ===

#[test]
fn literal_consumes_exact_prefix() {
    let mut cursor = Cursor::new("https://example.com");
    assert!(cursor.accept_literal("https://"));
    assert_eq!(cursor.remaining(), "example.com");
}

#[test]
fn literal_is_atomic() {
    let mut cursor = Cursor::new("http://example.com");
    assert!(!cursor.accept_literal("https://"));
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn literal_longer_than_input_fails() {
    let mut cursor = Cursor::new("ab");
    assert!(!cursor.accept_literal("abc"));
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn empty_literal_consumes_nothing() {
    let mut cursor = Cursor::new("ab");
    assert!(!cursor.accept_literal(""));
    assert_eq!(cursor.pos(), 0);
}
