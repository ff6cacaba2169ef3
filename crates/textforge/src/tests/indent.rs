use crate::IndentBuilder;

#[test]
fn writes_without_indentation_pass_through() {
    let mut b = IndentBuilder::new();
    b.write("plain").newline().write("text");
    assert_eq!(b.into_string(), "plain\ntext");
}

#[test]
fn newline_replays_the_indent_stack() {
    let mut b = IndentBuilder::new();
    b.write("a");
    b.indented("  ", |b| {
        b.newline();
        b.write("b");
    });
    assert_eq!(b.into_string(), "a\n  b");
}

#[test]
fn multi_line_write_is_indented_on_every_line() {
    let mut b = IndentBuilder::new();
    b.indented("  ", |b| {
        b.write("one\ntwo\nthree");
    });
    assert_eq!(b.into_string(), "one\n  two\n  three");
}

#[test]
fn nested_indents_emit_outer_to_inner() {
    let mut b = IndentBuilder::new();
    b.write("root");
    b.indented("..", |b| {
        b.newline();
        b.write("mid");
        b.indented("--", |b| {
            b.newline();
            b.write("leaf");
        });
    });
    assert_eq!(b.into_string(), "root\n..mid\n..--leaf");
}

#[test]
fn indent_pops_when_the_scope_returns() {
    let mut b = IndentBuilder::new();
    b.indented("  ", |b| {
        b.write("in");
    });
    assert_eq!(b.depth(), 0);
    b.newline().write("out");
    assert_eq!(b.into_string(), "in\nout");
}

#[test]
fn multi_line_write_crossing_a_scope_boundary() {
    // Content written inside the scope is indented; content written after
    // the scope pops is not, even within the same builder.
    let mut b = IndentBuilder::new();
    b.write("{");
    b.indented("    ", |b| {
        b.newline();
        b.write("a\nb");
    });
    b.newline();
    b.write("}");
    assert_eq!(b.into_string(), "{\n    a\n    b\n}");
}

#[test]
fn write_char_routes_newlines_through_indentation() {
    let mut b = IndentBuilder::new();
    b.indented("\t", |b| {
        b.write("x").write_char('\n').write_char('y');
    });
    assert_eq!(b.into_string(), "x\n\ty");
}

#[test]
fn line_writes_and_terminates() {
    let mut b = IndentBuilder::new();
    b.indented("  ", |b| {
        b.line("first");
        b.write("second");
    });
    assert_eq!(b.into_string(), "first\n  second");
}

#[test]
fn custom_newline_sequence() {
    let mut b = IndentBuilder::with_newline("\r\n");
    b.indented("  ", |b| {
        b.write("a\r\nb");
    });
    assert_eq!(b.into_string(), "a\r\n  b");
}

#[test]
fn empty_trailing_segment_still_gets_indentation() {
    // "a\n" ends with a newline: the final empty segment produces the
    // indentation prefix for whatever comes next.
    let mut b = IndentBuilder::new();
    b.indented("  ", |b| {
        b.write("a\n");
        b.write("b");
    });
    assert_eq!(b.into_string(), "a\n  b");
}

#[test]
fn early_return_from_scope_still_pops() {
    let mut b = IndentBuilder::new();
    b.indented("  ", |b| {
        b.write("x");
        if b.depth() == 1 {
            return;
        }
        b.write("unreached");
    });
    assert_eq!(b.depth(), 0);
}

#[test]
fn indent_stack_unwinds_when_the_scope_panics() {
    let mut b = IndentBuilder::new();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        b.indented("  ", |_| panic!("scope failed"));
    }));
    assert!(result.is_err());
    assert_eq!(b.depth(), 0);

    // The stack is balanced again, so later lines are unindented.
    b.newline().write("after");
    assert!(b.into_string().ends_with("\nafter"));
}

#[test]
fn nested_scopes_unwind_only_the_failing_level() {
    let mut b = IndentBuilder::new();
    b.indented("..", |b| {
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            b.indented("--", |_| panic!("inner failed"));
        }));
        assert!(result.is_err());
        assert_eq!(b.depth(), 1);
    });
    assert_eq!(b.depth(), 0);
}

#[test]
fn write_char_does_not_expand_partial_crlf() {
    let mut b = IndentBuilder::with_newline("\r\n");
    b.indented("  ", |b| {
        b.write("a").write_char('\r').write_char('\n').write("b");
    });
    // Neither char alone completes the two-character sequence, so both pass
    // through verbatim with no doubled carriage return.
    assert_eq!(b.into_string(), "a\r\nb");
}

#[test]
fn write_char_matches_a_single_char_custom_newline() {
    let mut b = IndentBuilder::with_newline("\r");
    b.indented("  ", |b| {
        b.write("a").write_char('\r').write("b");
    });
    assert_eq!(b.into_string(), "a\r  b");
}

#[test]
fn display_is_non_destructive() {
    let mut b = IndentBuilder::new();
    b.write("abc");
    assert_eq!(b.to_string(), "abc");
    assert_eq!(b.to_string(), "abc");
}
