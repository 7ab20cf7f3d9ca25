use scanner_framework::{Cursor, Position};

#[test]
fn test_cursor_new() {
    let cursor = Cursor::new("hello");
    assert_eq!(cursor.offset(), 0);
    assert_eq!(cursor.position(), Position::new());
    assert!(!cursor.is_eof());
}

#[test]
fn test_cursor_peek() {
    let cursor = Cursor::new("hello");
    assert_eq!(cursor.peek(), Some(b'h'));
    assert_eq!(cursor.offset(), 0); // Should not advance
}

#[test]
fn test_cursor_advance() {
    let mut cursor = Cursor::new("hello");
    assert_eq!(cursor.advance(), Some(b'h'));
    assert_eq!(cursor.offset(), 1);
    assert_eq!(cursor.position().column, 2);
    assert_eq!(cursor.peek(), Some(b'e'));
}

#[test]
fn test_cursor_is_eof() {
    let mut cursor = Cursor::new("hi");
    cursor.advance();
    assert!(!cursor.is_eof());
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.peek(), None);
    assert_eq!(cursor.advance(), None);
    assert_eq!(cursor.advance(), None);
}

#[test]
fn test_cursor_empty_input() {
    let mut cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.advance(), None);
}

#[test]
fn test_cursor_position_tracking() {
    let mut cursor = Cursor::new("a\nb");

    cursor.advance(); // 'a'
    assert_eq!(cursor.position(), Position::at(1, 2, 1));

    cursor.advance(); // '\n'
    assert_eq!(cursor.position(), Position::at(2, 1, 2));

    cursor.advance(); // 'b'
    assert_eq!(cursor.position(), Position::at(2, 2, 3));
}

#[test]
fn test_cursor_non_ascii_bytes() {
    let mut cursor = Cursor::new([0xc3u8, 0xa9, b'x']);
    assert_eq!(cursor.advance(), Some(0xc3));
    assert_eq!(cursor.advance(), Some(0xa9));
    assert_eq!(cursor.peek(), Some(b'x'));
}

#[test]
fn test_cursor_consume_while() {
    let mut cursor = Cursor::new("hello world");
    let word = cursor.consume_while(|b| b != b' ');
    assert_eq!(word, "hello");
    assert_eq!(cursor.peek(), Some(b' '));
    assert_eq!(cursor.offset(), 5);
}

#[test]
fn test_cursor_consume_while_all() {
    let mut cursor = Cursor::new("aaa");
    let run = cursor.consume_while(|b| b == b'a');
    assert_eq!(run, "aaa");
    assert!(cursor.is_eof());
}

#[test]
fn test_cursor_consume_while_none() {
    let mut cursor = Cursor::new("abc");
    let run = cursor.consume_while(|b| b == b'z');
    assert!(run.is_empty());
    assert_eq!(cursor.offset(), 0);
}

#[test]
fn test_cursor_checkpoint_restore() {
    let mut cursor = Cursor::new("a\nbc");
    cursor.advance();
    let checkpoint = cursor.checkpoint();
    cursor.consume_while(|_| true);
    assert!(cursor.is_eof());

    cursor.restore(checkpoint);
    assert_eq!(cursor.offset(), 1);
    assert_eq!(cursor.position(), Position::at(1, 2, 1));
    assert_eq!(cursor.peek(), Some(b'\n'));
}
