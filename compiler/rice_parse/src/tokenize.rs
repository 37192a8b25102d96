//! Argument splitting for dump descriptor text.
//!
//! Descriptor text after the node name is split on spaces, except inside
//! quoted spans (`'unsigned int'`, `"reflectable"`) and angle-bracket spans
//! (`<line:3:1, col:9>`, `<<invalid sloc>>`), which stay atomic.

use std::fmt;

use smallvec::SmallVec;

/// Tokens of one descriptor line. Most lines have fewer than a dozen.
pub(crate) type Args<'a> = SmallVec<[&'a str; 12]>;

/// Why a descriptor could not be split.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum TokenizeError {
    /// A quote opened at this byte offset never closed.
    UnclosedQuote { offset: usize },
    /// More `<` than `>` by the end of the line.
    UnclosedAngle,
    /// A `>` with no matching `<`, at this byte offset.
    StrayAngle { offset: usize },
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizeError::UnclosedQuote { offset } => {
                write!(f, "unclosed quote starting at byte {offset}")
            }
            TokenizeError::UnclosedAngle => write!(f, "unclosed `<`"),
            TokenizeError::StrayAngle { offset } => write!(f, "stray `>` at byte {offset}"),
        }
    }
}

/// Split `text` into space-separated arguments.
pub(crate) fn split_args(text: &str) -> Result<Args<'_>, TokenizeError> {
    let bytes = text.as_bytes();
    let mut args = Args::new();
    let mut start: Option<usize> = None;
    let mut quote: Option<(u8, usize)> = None;
    let mut angle_depth: u32 = 0;

    for (i, &b) in bytes.iter().enumerate() {
        if let Some((q, _)) = quote {
            if b == q {
                quote = None;
            }
            continue;
        }
        match b {
            b'\'' | b'"' if angle_depth == 0 => {
                start.get_or_insert(i);
                quote = Some((b, i));
            }
            b'<' => {
                start.get_or_insert(i);
                angle_depth += 1;
            }
            b'>' if angle_depth == 0 => return Err(TokenizeError::StrayAngle { offset: i }),
            b'>' => angle_depth -= 1,
            b' ' | b'\t' | b'\r' if angle_depth == 0 => {
                if let Some(s) = start.take() {
                    args.push(&text[s..i]);
                }
            }
            _ => {
                start.get_or_insert(i);
            }
        }
    }

    if let Some((_, offset)) = quote {
        return Err(TokenizeError::UnclosedQuote { offset });
    }
    if angle_depth > 0 {
        return Err(TokenizeError::UnclosedAngle);
    }
    if let Some(s) = start {
        args.push(&text[s..]);
    }
    Ok(args)
}

/// Text between the first quote in `token` and the next matching quote.
///
/// `'Point':'shapes::Point'` yields `Point`.
pub(crate) fn quoted_fragment(token: &str) -> Option<&str> {
    let open = token.find(['\'', '"'])?;
    let quote = token[open..].chars().next()?;
    let body = &token[open + 1..];
    let close = body.find(quote)?;
    Some(&body[..close])
}

/// Type spelling of a `'written':'canonical'` type token.
///
/// The written spelling is kept so typedefs such as `std::string` survive.
/// When the canonical spelling only adds scope qualification to it, as in
/// `'Point':'shapes::Point'`, the qualified one is taken: bindings are
/// emitted at global scope where the bare name does not resolve.
pub(crate) fn type_fragment(token: &str) -> Option<&str> {
    let written = quoted_fragment(token)?;
    let open = token.find(['\'', '"'])?;
    let canonical = token
        .get(open + written.len() + 2..)
        .and_then(|tail| tail.strip_prefix(':'))
        .and_then(quoted_fragment);
    match canonical {
        Some(qualified)
            if qualified
                .strip_suffix(written)
                .is_some_and(|scope| scope.ends_with("::")) =>
        {
            Some(qualified)
        }
        _ => Some(written),
    }
}

/// Drop `marker` from the end of `args` if present.
pub(crate) fn drop_trailing(args: &mut Args<'_>, marker: &str) -> bool {
    if args.last() == Some(&marker) {
        args.pop();
        true
    } else {
        false
    }
}
