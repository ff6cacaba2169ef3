//! The composite format-string mini-language.
//!
//! Holes are `{index}` or `{index:format}` — a decimal argument index,
//! optional whitespace, and optional `:`-prefixed format text with no nested
//! braces. Doubled braces (`{{`, `}}`) are escaped literals. The general
//! alignment syntax (`{index,alignment}`) is deliberately unsupported and
//! reported as an error rather than ignored.

use crate::{
    error::{FormatError, FormatErrorKind},
    span_format::{SpanFormat, SpanFormatError},
    writer::TextWriter,
};

/// Parses `template` and writes it into `out` with holes filled from `args`.
pub(crate) fn format_into(
    out: &mut TextWriter,
    template: &str,
    args: &[&dyn SpanFormat],
) -> Result<(), FormatError> {
    let chars: Vec<char> = template.chars().collect();
    let mut pos = 0;

    while pos < chars.len() {
        // Copy the literal run up to the next brace in one block.
        let run = chars[pos..]
            .iter()
            .position(|&ch| ch == '{' || ch == '}')
            .map_or(chars.len(), |offset| pos + offset);
        out.push_chars(&chars[pos..run]);
        pos = run;
        if pos == chars.len() {
            break;
        }

        match chars[pos] {
            '{' if chars.get(pos + 1) == Some(&'{') => {
                out.push('{');
                pos += 2;
            }
            '{' => pos = parse_hole(out, &chars, pos, args)?,
            _ if chars.get(pos + 1) == Some(&'}') => {
                out.push('}');
                pos += 2;
            }
            _ => {
                return Err(FormatError::new(
                    FormatErrorKind::UnmatchedBrace,
                    &chars,
                    pos,
                ));
            }
        }
    }
    Ok(())
}

/// Parses one hole starting at the `{` at `open`; returns the position just
/// past its closing `}`.
fn parse_hole(
    out: &mut TextWriter,
    chars: &[char],
    open: usize,
    args: &[&dyn SpanFormat],
) -> Result<usize, FormatError> {
    let unterminated = || FormatError::new(FormatErrorKind::UnterminatedHole, chars, open);

    let mut pos = open + 1;

    // Decimal argument index. Saturation is harmless: a saturated index can
    // never be in range of the argument slice.
    let mut index: usize = 0;
    let mut digits = 0;
    while let Some(digit) = chars.get(pos).and_then(|ch| ch.to_digit(10)) {
        index = index.saturating_mul(10).saturating_add(digit as usize);
        digits += 1;
        pos += 1;
    }
    if digits == 0 {
        return match chars.get(pos) {
            None => Err(unterminated()),
            Some(_) => Err(FormatError::new(FormatErrorKind::MissingIndex, chars, pos)),
        };
    }

    while matches!(chars.get(pos), Some(' ' | '\t')) {
        pos += 1;
    }

    let spec = match chars.get(pos) {
        Some('}') => {
            pos += 1;
            None
        }
        Some(':') => {
            pos += 1;
            let start = pos;
            loop {
                match chars.get(pos) {
                    Some('}') => break,
                    Some('{') => {
                        return Err(FormatError::new(FormatErrorKind::NestedBrace, chars, pos));
                    }
                    Some(_) => pos += 1,
                    None => return Err(unterminated()),
                }
            }
            let spec: String = chars[start..pos].iter().collect();
            pos += 1;
            Some(spec)
        }
        Some(',') => {
            return Err(FormatError::new(
                FormatErrorKind::AlignmentUnsupported,
                chars,
                pos,
            ));
        }
        Some(&found) => {
            return Err(FormatError::new(
                FormatErrorKind::InvalidIndex { found },
                chars,
                pos,
            ));
        }
        None => return Err(unterminated()),
    };

    let Some(arg) = args.get(index) else {
        return Err(FormatError::new(
            FormatErrorKind::IndexOutOfRange {
                index,
                count: args.len(),
            },
            chars,
            open,
        ));
    };

    match out.format(*arg, spec.as_deref()) {
        Ok(()) => Ok(pos),
        // `Insufficient` never escapes the writer's retry loop.
        Err(SpanFormatError::Insufficient | SpanFormatError::Unsupported) => {
            Err(FormatError::new(
                FormatErrorKind::UnsupportedSpec {
                    spec: spec.unwrap_or_default(),
                },
                chars,
                open,
            ))
        }
    }
}
