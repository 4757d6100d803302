//! Textual rendering of ordered sequences.

use core::fmt::{self, Write};

/// Writes `items` as `[a,b,c]`: a bracketed, comma-separated list with no whitespace.
///
/// An empty sequence is written as `[]`. Items appear in the order the iterator yields them.
///
/// # Examples
///
/// ```
/// use treeset::render::write_set;
///
/// let mut out = String::new();
/// write_set(&mut out, [3, 1, 2]).unwrap();
/// assert_eq!(out, "[3,1,2]");
/// ```
///
/// # Errors
///
/// Returns an error only if `out` does.
pub fn write_set<W, I>(out: &mut W, items: I) -> fmt::Result
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: fmt::Display,
{
    out.write_char('[')?;
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            out.write_char(',')?;
        }
        write!(out, "{item}")?;
    }
    out.write_char(']')
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::string::String;

    fn render<I>(items: I) -> String
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let mut out = String::new();
        write_set(&mut out, items).expect("writing to a String cannot fail");
        out
    }

    #[test]
    fn empty_is_bare_brackets() {
        assert_eq!(render(core::iter::empty::<u8>()), "[]");
    }

    #[test]
    fn single_item_has_no_separator() {
        assert_eq!(render(["solo"]), "[solo]");
    }

    #[test]
    fn items_use_their_display_form() {
        assert_eq!(render([-1.5, 2.0]), "[-1.5,2]");
        assert_eq!(render(["AA", "BBB"]), "[AA,BBB]");
    }

    #[test]
    fn writer_errors_propagate() {
        struct Full;

        impl Write for Full {
            fn write_str(&mut self, _: &str) -> fmt::Result {
                Err(fmt::Error)
            }
        }

        assert_eq!(write_set(&mut Full, [1]), Err(fmt::Error));
    }
}
