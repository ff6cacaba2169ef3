use crate::{Comparison, TextBuffer};

fn buffer(text: &str) -> TextBuffer {
    let mut buf = TextBuffer::new();
    buf.push_str(text);
    buf
}

#[test]
fn single_char_indexing() {
    let mut buf = buffer("cat");
    assert_eq!(buf[0], 'c');
    buf[0] = 'b';
    assert_eq!(buf.to_string(), "bat");
}

#[test]
fn range_indexing_views_and_edits() {
    let mut buf = buffer("abcdef");
    assert_eq!(&buf[1..4], &['b', 'c', 'd']);
    buf[1..4].fill('-');
    assert_eq!(buf.to_string(), "a---ef");
}

#[test]
fn set_range_block_copies() {
    let mut buf = buffer("abcdef");
    buf.set_range(2..5, &['x', 'y', 'z']);
    assert_eq!(buf.to_string(), "abxyzf");
}

#[test]
#[should_panic(expected = "does not match range length")]
fn set_range_length_mismatch_panics() {
    let mut buf = buffer("abcdef");
    buf.set_range(2..5, &['x']);
}

#[test]
fn trim_start_shifts_content() {
    let mut buf = buffer("  \t hello ");
    buf.trim_start();
    assert_eq!(buf.to_string(), "hello ");
}

#[test]
fn trim_end_is_a_length_adjustment() {
    let mut buf = buffer(" hello \t\n");
    buf.trim_end();
    assert_eq!(buf.to_string(), " hello");
}

#[test]
fn trim_all_whitespace_to_empty() {
    let mut buf = buffer(" \t\n ");
    buf.trim_start();
    buf.trim_end();
    assert!(buf.is_empty());
}

#[test]
fn replace_char_swaps_in_place() {
    let mut buf = buffer("a-b-c");
    let capacity = buf.capacity();
    buf.replace_char('-', '+');
    assert_eq!(buf.capacity(), capacity);
    assert_eq!(buf.to_string(), "a+b+c");
}

#[test]
fn replace_equal_length_swaps() {
    let mut buf = buffer("one two one");
    buf.replace("one", "two");
    assert_eq!(buf.to_string(), "two two two");
}

#[test]
fn replace_shrinks() {
    let mut buf = buffer("abcabc");
    buf.replace("abc", "x");
    assert_eq!(buf.to_string(), "xx");
}

#[test]
fn replace_expands() {
    let mut buf = buffer("abcabc");
    buf.replace("ab", "xyz");
    assert_eq!(buf.to_string(), "xyzcxyzc");
}

#[test]
fn replace_to_empty_removes_occurrences() {
    let mut buf = buffer("a--b--c");
    buf.replace("--", "");
    assert_eq!(buf.to_string(), "abc");
}

#[test]
fn replace_does_not_rescan_replaced_text() {
    // Equal length, replacement contains the needle.
    let mut buf = buffer("aaaa");
    buf.replace("aa", "aa");
    assert_eq!(buf.to_string(), "aaaa");

    // Expanding, replacement contains the needle.
    let mut buf = buffer("abab");
    buf.replace("ab", "xab");
    assert_eq!(buf.to_string(), "xabxab");
}

#[test]
fn replace_without_matches_is_a_no_op() {
    let mut buf = buffer("hello");
    buf.replace("zz", "yy");
    assert_eq!(buf.to_string(), "hello");
}

#[test]
fn replace_needle_longer_than_content() {
    let mut buf = buffer("hi");
    buf.replace("hello", "x");
    assert_eq!(buf.to_string(), "hi");
}

#[test]
fn replace_ignoring_ascii_case() {
    let mut buf = buffer("Foo foo FOO");
    buf.replace_using("foo", "bar", Comparison::IgnoreAsciiCase);
    assert_eq!(buf.to_string(), "bar bar bar");
}

#[test]
#[should_panic(expected = "needle must not be empty")]
fn replace_empty_needle_panics() {
    let mut buf = buffer("abc");
    buf.replace("", "x");
}

#[test]
fn into_string_consumes_the_buffer() {
    let mut buf = buffer("edited");
    buf.replace("edit", "materializ");
    assert_eq!(buf.into_string(), "materialized");
}

#[test]
fn clear_resets_length_only() {
    let mut buf = buffer("abc");
    let capacity = buf.capacity();
    buf.clear();
    assert!(buf.is_empty());
    assert_eq!(buf.capacity(), capacity);
}
