//! Direct formatting of values into caller-supplied character spans.
//!
//! [`SpanFormat`] is the capability seam between typed values and the
//! writer's grow-and-retry loop: a value either renders itself into the
//! destination span and reports how many characters it used, or signals
//! [`SpanFormatError::Insufficient`] so the writer can grow and try again.
//! The trait is dyn-safe, which lets composite-format arguments travel as
//! `&[&dyn SpanFormat]`.

use core::fmt::{self, Write as _};

/// Why a [`SpanFormat::try_format`] call produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanFormatError {
    /// The destination span is too small. Retry with more room.
    Insufficient,
    /// The format spec is not understood by this type.
    Unsupported,
}

/// A value that can format itself into a `char` span.
///
/// `spec` is the optional per-hole format text of a composite format string
/// (the `00` of `{1:00}`). Implementations accept `None` unconditionally;
/// a spec they do not understand is rejected with
/// [`SpanFormatError::Unsupported`] rather than silently ignored.
pub trait SpanFormat {
    /// Formats `self` into the front of `dest`, returning the number of
    /// characters written.
    fn try_format(&self, dest: &mut [char], spec: Option<&str>)
    -> Result<usize, SpanFormatError>;
}

impl<T: SpanFormat + ?Sized> SpanFormat for &T {
    fn try_format(
        &self,
        dest: &mut [char],
        spec: Option<&str>,
    ) -> Result<usize, SpanFormatError> {
        (**self).try_format(dest, spec)
    }
}

// ------------------------------------------------------------------------------------------------
// Display bridge
// ------------------------------------------------------------------------------------------------

/// `fmt::Write` sink over a fixed span; errors once the span is exhausted.
struct SpanSink<'a> {
    dest: &'a mut [char],
    written: usize,
}

impl fmt::Write for SpanSink<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            if self.written == self.dest.len() {
                return Err(fmt::Error);
            }
            self.dest[self.written] = ch;
            self.written += 1;
        }
        Ok(())
    }
}

/// Renders any `Display` value into `dest`, mapping span exhaustion to
/// [`SpanFormatError::Insufficient`].
pub(crate) fn display_into(
    dest: &mut [char],
    value: &(impl fmt::Display + ?Sized),
) -> Result<usize, SpanFormatError> {
    let mut sink = SpanSink { dest, written: 0 };
    match write!(sink, "{value}") {
        Ok(()) => Ok(sink.written),
        Err(fmt::Error) => Err(SpanFormatError::Insufficient),
    }
}

// ------------------------------------------------------------------------------------------------
// Strings and chars: specs carry no meaning, as for .NET strings
// ------------------------------------------------------------------------------------------------

impl SpanFormat for str {
    fn try_format(&self, dest: &mut [char], _spec: Option<&str>)
    -> Result<usize, SpanFormatError> {
        let mut written = 0;
        for ch in self.chars() {
            if written == dest.len() {
                return Err(SpanFormatError::Insufficient);
            }
            dest[written] = ch;
            written += 1;
        }
        Ok(written)
    }
}

impl SpanFormat for String {
    fn try_format(&self, dest: &mut [char], spec: Option<&str>)
    -> Result<usize, SpanFormatError> {
        self.as_str().try_format(dest, spec)
    }
}

impl SpanFormat for char {
    fn try_format(&self, dest: &mut [char], _spec: Option<&str>)
    -> Result<usize, SpanFormatError> {
        match dest.first_mut() {
            Some(slot) => {
                *slot = *self;
                Ok(1)
            }
            None => Err(SpanFormatError::Insufficient),
        }
    }
}

impl SpanFormat for bool {
    fn try_format(&self, dest: &mut [char], _spec: Option<&str>)
    -> Result<usize, SpanFormatError> {
        let text = if *self { "true" } else { "false" };
        text.try_format(dest, None)
    }
}

// ------------------------------------------------------------------------------------------------
// Integers: decimal, zero-pad ("00"), hex ("x"/"X")
// ------------------------------------------------------------------------------------------------

enum IntSpec {
    Plain,
    ZeroPad(usize),
    LowerHex,
    UpperHex,
}

fn parse_int_spec(spec: Option<&str>) -> Result<IntSpec, SpanFormatError> {
    match spec {
        None | Some("") => Ok(IntSpec::Plain),
        Some("x") => Ok(IntSpec::LowerHex),
        Some("X") => Ok(IntSpec::UpperHex),
        Some(s) if s.bytes().all(|b| b == b'0') => Ok(IntSpec::ZeroPad(s.len())),
        Some(_) => Err(SpanFormatError::Unsupported),
    }
}

/// Emits `rendered` (a decimal rendering, possibly signed) with enough
/// leading zeros to reach `width` digits. The sign stays in front of the
/// zeros, so `-7` with width 2 becomes `-07`.
fn zero_pad_into(
    dest: &mut [char],
    rendered: &[char],
    width: usize,
) -> Result<usize, SpanFormatError> {
    let (sign, digits) = match rendered.split_first() {
        Some((&'-', rest)) => (Some('-'), rest),
        _ => (None, rendered),
    };
    let pad = width.saturating_sub(digits.len());
    let total = usize::from(sign.is_some()) + pad + digits.len();
    if dest.len() < total {
        return Err(SpanFormatError::Insufficient);
    }

    let mut at = 0;
    if let Some(sign) = sign {
        dest[at] = sign;
        at += 1;
    }
    dest[at..at + pad].fill('0');
    at += pad;
    dest[at..at + digits.len()].copy_from_slice(digits);
    Ok(total)
}

// Large enough for i128::MIN in decimal (39 digits plus the sign).
const INT_SCRATCH: usize = 40;

macro_rules! impl_span_format_int {
    ($($int:ty)*) => {$(
        impl SpanFormat for $int {
            fn try_format(&self, dest: &mut [char], spec: Option<&str>)
            -> Result<usize, SpanFormatError> {
                match parse_int_spec(spec)? {
                    IntSpec::Plain => display_into(dest, self),
                    IntSpec::ZeroPad(width) => {
                        let mut scratch = ['\0'; INT_SCRATCH];
                        let used = display_into(&mut scratch, self)?;
                        zero_pad_into(dest, &scratch[..used], width)
                    }
                    IntSpec::LowerHex => {
                        let mut sink = SpanSink { dest, written: 0 };
                        match write!(sink, "{self:x}") {
                            Ok(()) => Ok(sink.written),
                            Err(fmt::Error) => Err(SpanFormatError::Insufficient),
                        }
                    }
                    IntSpec::UpperHex => {
                        let mut sink = SpanSink { dest, written: 0 };
                        match write!(sink, "{self:X}") {
                            Ok(()) => Ok(sink.written),
                            Err(fmt::Error) => Err(SpanFormatError::Insufficient),
                        }
                    }
                }
            }
        }
    )*};
}

impl_span_format_int!(u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize);

// ------------------------------------------------------------------------------------------------
// Floats: default rendering, or fixed precision from a "0.00"-shaped spec
// ------------------------------------------------------------------------------------------------

fn parse_float_spec(spec: Option<&str>) -> Result<Option<usize>, SpanFormatError> {
    match spec {
        None | Some("") => Ok(None),
        Some(s) => match s.split_once('.') {
            Some((whole, frac))
                if !whole.is_empty()
                    && whole.bytes().all(|b| b == b'0')
                    && frac.bytes().all(|b| b == b'0') =>
            {
                Ok(Some(frac.len()))
            }
            None if s.bytes().all(|b| b == b'0') => Ok(Some(0)),
            _ => Err(SpanFormatError::Unsupported),
        },
    }
}

macro_rules! impl_span_format_float {
    ($($float:ty)*) => {$(
        impl SpanFormat for $float {
            fn try_format(&self, dest: &mut [char], spec: Option<&str>)
            -> Result<usize, SpanFormatError> {
                match parse_float_spec(spec)? {
                    None => display_into(dest, self),
                    Some(precision) => {
                        let mut sink = SpanSink { dest, written: 0 };
                        match write!(sink, "{self:.precision$}") {
                            Ok(()) => Ok(sink.written),
                            Err(fmt::Error) => Err(SpanFormatError::Insufficient),
                        }
                    }
                }
            }
        }
    )*};
}

impl_span_format_float!(f32 f64);
