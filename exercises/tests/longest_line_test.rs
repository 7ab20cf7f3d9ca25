use exercises::longest_line::{longest_line, LongestLine, DEFAULT_LINE_CAPACITY, MAXLINE};
use scanner_framework::{DefaultContext, ReaderContext, CHUNK_SIZE};
use std::io::Cursor;

fn longest(input: &str) -> LongestLine {
    longest_line(DefaultContext::new(input), DEFAULT_LINE_CAPACITY).unwrap()
}

#[test]
fn test_longest_line_in_middle() {
    let tracker = longest("abc\nabcdefg\nab\n");
    assert_eq!(tracker.longest(), Some(&b"abcdefg\n"[..]));
    assert_eq!(tracker.max_len(), 8);
}

#[test]
fn test_first_line_wins_ties() {
    assert_eq!(longest("ab\ncd\n").longest(), Some(&b"ab\n"[..]));
}

#[test]
fn test_empty_input_has_no_line() {
    let tracker = longest("");
    assert_eq!(tracker.longest(), None);
    assert_eq!(tracker.max_len(), 0);
}

#[test]
fn test_blank_line_counts() {
    assert_eq!(longest("\n").longest(), Some(&b"\n"[..]));
}

#[test]
fn test_unterminated_last_line() {
    assert_eq!(longest("a\nlonger").longest(), Some(&b"longer"[..]));
}

#[test]
fn test_truncated_to_capacity() {
    let tracker = longest_line(DefaultContext::new("ab\nabcdef\n"), 3).unwrap();
    assert_eq!(tracker.longest(), Some(&b"abc"[..]));
    assert_eq!(tracker.max_len(), 7);
    assert_eq!(tracker.truncated(), 4);
}

#[test]
fn test_truncated_line_still_compared_by_full_length() {
    let tracker = longest_line(DefaultContext::new("abcdef\nabcd\n"), 2).unwrap();
    assert_eq!(tracker.longest(), Some(&b"ab"[..]));
    assert_eq!(tracker.max_len(), 7);
}

#[test]
fn test_default_capacity_keeps_one_short_of_maxline() {
    let input = format!("{}\n", "x".repeat(MAXLINE + 5));
    let tracker = LongestLine::default();
    assert_eq!(tracker.longest(), None);

    let tracker = longest(&input);
    assert_eq!(tracker.longest().map(<[u8]>::len), Some(MAXLINE - 1));
    assert_eq!(tracker.max_len(), MAXLINE + 6);
}

#[test]
fn test_streamed_line_longer_than_a_chunk_stays_bounded() {
    let mut data = vec![b'x'; 3 * CHUNK_SIZE + 17];
    data.push(b'\n');
    data.extend_from_slice(b"short\n");
    let length = data.len() - 6;

    let tracker = longest_line(ReaderContext::new(Cursor::new(data)), 64).unwrap();
    let kept = tracker.longest().unwrap();
    assert_eq!(kept.len(), 64);
    assert!(kept.iter().all(|&b| b == b'x'));
    assert_eq!(tracker.max_len(), length);
    assert_eq!(tracker.truncated(), length - 64);
}
