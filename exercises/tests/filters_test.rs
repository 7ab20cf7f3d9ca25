use exercises::filters::{copy, echo_words, show_escapes, squeeze_blanks};
use scanner_framework::DefaultContext;

fn filtered<F>(input: &[u8], filter: F) -> Vec<u8>
where
    F: FnOnce(DefaultContext, &mut Vec<u8>) -> exercises::Result<scanner_framework::ScanSummary>,
{
    let mut out = Vec::new();
    filter(DefaultContext::new(input), &mut out).unwrap();
    out
}

#[test]
fn test_copy_is_byte_exact() {
    let input = b"line one\n\tline two\r\n\xff\x00end";
    assert_eq!(filtered(input, |ctx, out| copy(ctx, out)), input);
}

#[test]
fn test_copy_empty_input() {
    assert!(filtered(b"", |ctx, out| copy(ctx, out)).is_empty());
}

#[test]
fn test_echo_words() {
    assert_eq!(
        filtered(b"hello world\n", |ctx, out| echo_words(ctx, out)),
        b"hello\nworld"
    );
}

#[test]
fn test_echo_words_punctuation() {
    assert_eq!(
        filtered(b"a.b;c:d", |ctx, out| echo_words(ctx, out)),
        b"a\n.\nb\n;\nc\n:\nd"
    );
}

#[test]
fn test_squeeze_blanks() {
    assert_eq!(
        filtered(b"a   b    c\n", |ctx, out| squeeze_blanks(ctx, out)),
        b"a b c\n"
    );
}

#[test]
fn test_squeeze_blanks_before_newline() {
    assert_eq!(
        filtered(b"a  \nb", |ctx, out| squeeze_blanks(ctx, out)),
        b"a \nb"
    );
}

#[test]
fn test_squeeze_drops_trailing_blanks_at_eof() {
    assert_eq!(filtered(b"a   ", |ctx, out| squeeze_blanks(ctx, out)), b"a");
}

#[test]
fn test_squeeze_leaves_tabs() {
    assert_eq!(
        filtered(b"a\t\tb", |ctx, out| squeeze_blanks(ctx, out)),
        b"a\t\tb"
    );
}

#[test]
fn test_show_escapes() {
    assert_eq!(
        filtered(b"a\tb\\c\x08", |ctx, out| show_escapes(ctx, out)),
        br"a\tb\\c\b"
    );
}

#[test]
fn test_show_escapes_leaves_newlines() {
    assert_eq!(
        filtered(b"plain\n", |ctx, out| show_escapes(ctx, out)),
        b"plain\n"
    );
}
