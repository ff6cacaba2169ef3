use crate::TextWriter;

#[test]
fn push_variants_append_in_order() {
    let mut w = TextWriter::new();
    w.push('a');
    w.push_str("bc");
    w.push_chars(&['d', 'e']);
    assert_eq!(w.to_string(), "abcde");
    assert_eq!(w.len(), 5);
}

#[test]
fn empty_writer_materializes_empty() {
    let w = TextWriter::new();
    assert!(w.is_empty());
    assert_eq!(w.into_string(), "");
}

#[test]
fn growth_preserves_written_prefix() {
    let mut w = TextWriter::with_capacity(4);
    let text = "x".repeat(10_000);
    w.push_str(&text);
    assert_eq!(w.len(), 10_000);
    assert!(w.capacity() >= 10_000);
    assert_eq!(w.into_string(), text);
}

#[test]
fn capacity_at_least_doubles() {
    let mut w = TextWriter::new();
    let before = w.capacity();
    w.allocate(before + 1).fill('x');
    assert!(w.capacity() >= before * 2);
}

#[test]
fn allocate_reserves_at_the_end() {
    let mut w = TextWriter::new();
    w.push_str("ab");
    w.allocate(2).copy_from_slice(&['c', 'd']);
    *w.allocate_one() = 'e';
    assert_eq!(w.to_string(), "abcde");
}

#[test]
fn allocate_at_shifts_the_suffix() {
    let mut w = TextWriter::new();
    w.push_str("helloworld");
    w.allocate_at(5, 2).copy_from_slice(&[',', ' ']);
    assert_eq!(w.to_string(), "hello, world");
}

#[test]
fn allocate_at_start_and_end() {
    let mut w = TextWriter::new();
    w.push_str("bc");
    w.allocate_at(0, 1).copy_from_slice(&['a']);
    let len = w.len();
    w.allocate_at(len, 1).copy_from_slice(&['d']);
    assert_eq!(w.to_string(), "abcd");
}

#[test]
#[should_panic(expected = "out of bounds")]
fn allocate_at_past_length_panics() {
    let mut w = TextWriter::new();
    w.push_str("ab");
    let _ = w.allocate_at(3, 1);
}

#[test]
fn remove_closes_the_gap() {
    let mut w = TextWriter::new();
    w.push_str("hexxxllo");
    w.remove(2, 3);
    assert_eq!(w.to_string(), "hello");
}

#[test]
fn remove_first_and_last() {
    let mut w = TextWriter::new();
    w.push_str(">>core<<");
    w.remove_first(2);
    w.remove_last(2);
    assert_eq!(w.to_string(), "core");
}

#[test]
#[should_panic(expected = "out of bounds")]
fn remove_past_length_panics() {
    let mut w = TextWriter::new();
    w.push_str("ab");
    w.remove(1, 2);
}

#[test]
fn set_len_clamps_to_capacity() {
    let mut w = TextWriter::new();
    w.push_str("abc");
    w.set_len(usize::MAX);
    assert_eq!(w.len(), w.capacity());
    w.set_len(2);
    assert_eq!(w.to_string(), "ab");
}

#[test]
fn clear_keeps_capacity() {
    let mut w = TextWriter::new();
    w.push_str("abc");
    let capacity = w.capacity();
    w.clear();
    assert!(w.is_empty());
    assert_eq!(w.capacity(), capacity);
}

#[test]
fn format_retries_until_value_fits() {
    // Start tiny so the first try_format attempts cannot fit.
    let mut w = TextWriter::with_capacity(1);
    let long = "y".repeat(500);
    w.format(&long.as_str(), None).unwrap();
    assert_eq!(w.to_string(), long);
}

#[test]
fn format_display_fallback() {
    let mut w = TextWriter::new();
    w.format_display(&core::net::Ipv4Addr::LOCALHOST);
    assert_eq!(w.to_string(), "127.0.0.1");
}

#[test]
fn fmt_write_bridge() {
    use core::fmt::Write;

    let mut w = TextWriter::new();
    write!(w, "{}-{}", 1, "two").unwrap();
    assert_eq!(w.to_string(), "1-two");
}

#[test]
fn to_string_is_non_destructive() {
    let mut w = TextWriter::new();
    w.push_str("abc");
    assert_eq!(w.to_string(), "abc");
    assert_eq!(w.to_string(), "abc");
    assert_eq!(w.into_string(), "abc");
}
