use super::*;

/// Every part of `input` split on `sep` consists only of runes in `class`.
fn all_parts_match(input: &str, sep: char, class: impl RuneClass) -> bool {
    input
        .split(sep)
        .all(|part| part.chars().all(|r| class.contains(r)))
}

// === Hostname characters ===

#[test]
fn hostname_chars_accept_dotted_names() {
    let valid = [
        "www.example.com",
        "f49j0afj49jf40.com",
        "this.is.a.long.subdomain.path.but.should.still.work.com",
        "TECHNICALLY.THIS.WOULD.WORK.TOO.com",
        // Character-level only: these are not valid hostnames, but every
        // rune is a hostname character.
        "111.111.111.111",
        "-invalid-but-valid.com",
    ];
    for input in valid {
        assert!(all_parts_match(input, '.', is_hostname_char), "{input:?}");
    }
}

#[test]
fn hostname_chars_reject_foreign_runes() {
    for input in ["_ha24jfgik_.com", "%20f", "no spaces", "café.fr"] {
        assert!(!all_parts_match(input, '.', is_hostname_char), "{input:?}");
    }
}

// === Letters ===

#[test]
fn alpha_accepts_words_in_any_case() {
    for input in ["this is a test", "This Is A Test", "THIS IS A TEST", "ThIs Is A TeSt"] {
        assert!(all_parts_match(input, ' ', is_alpha), "{input:?}");
    }
}

#[test]
fn alpha_rejects_digits_and_punctuation() {
    for input in ["Test 1234", "This is a test.", "This is a test !"] {
        assert!(!all_parts_match(input, ' ', is_alpha), "{input:?}");
    }
}

#[test]
fn case_classes_are_disjoint() {
    assert!(is_alpha_lower('q') && !is_alpha_upper('q'));
    assert!(is_alpha_upper('Q') && !is_alpha_lower('Q'));
    assert!(!is_alpha('é'));
}

// === Layout characters ===

#[test]
fn space_is_narrower_than_whitespace() {
    assert!(is_space(' '));
    assert!(!is_space('\t'));
    assert!(is_whitespace('\t'));
    assert!(!is_whitespace('\n'));
}

#[test]
fn newline_covers_both_line_ending_bytes() {
    assert!(is_newline('\n'));
    assert!(is_newline('\r'));
    assert!(!is_newline(' '));
}

#[test]
fn quotes() {
    assert!(is_quote('"'));
    assert!(is_quote('\''));
    assert!(is_quote('`'));
    assert!(!is_quote('«'));
}

#[test]
fn delimiter_includes_eof() {
    assert!(is_delimiter(EOF));
    assert!(is_delimiter(' '));
    assert!(is_delimiter('\r'));
    assert!(!is_delimiter('.'));
    assert!(!is_delimiter('-'));
}

// === Classes ===

#[test]
fn any_of_never_contains_eof() {
    let class = AnyOf("ab\0");
    assert!(class.contains('a'));
    assert!(!class.contains('c'));
    assert!(!class.contains(EOF));
}

#[test]
fn closures_are_classes() {
    let vowel = |r: char| "aeiou".contains(r);
    assert!(vowel.contains('e'));
    assert!(!vowel.contains('z'));
    assert!(is_digit.contains('7'));
}
