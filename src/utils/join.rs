//! Delimited joining of sequences.
//!
//! Every variant starts at a caller-chosen index and renders elements through
//! `Display`, so string slices, integer slices and arbitrary displayable
//! values share one implementation. A start index past the end yields `""`.

use std::fmt::Display;

/// Join `items[initial_index..]` with `delimiter`.
pub fn join<T: Display>(items: &[T], delimiter: &str, initial_index: usize) -> String {
    join_quoted(items, delimiter, initial_index, "")
}

/// Join every element with `delimiter`.
pub fn join_all<T: Display>(items: &[T], delimiter: &str) -> String {
    join(items, delimiter, 0)
}

/// Join `items[initial_index..]` with `delimiter`, wrapping each element in `quote`.
pub fn join_quoted<T: Display>(
    items: &[T],
    delimiter: &str,
    initial_index: usize,
    quote: &str,
) -> String {
    items
        .get(initial_index..)
        .map(|rest| join_iter_quoted(rest, delimiter, 0, quote))
        .unwrap_or_default()
}

/// Join an ordered collection, skipping its first `initial_index` elements.
pub fn join_iter<I>(items: I, delimiter: &str, initial_index: usize) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    join_iter_quoted(items, delimiter, initial_index, "")
}

fn join_iter_quoted<I>(items: I, delimiter: &str, initial_index: usize, quote: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut buffer = String::new();

    for (i, item) in items.into_iter().skip(initial_index).enumerate() {
        if i > 0 {
            buffer.push_str(delimiter);
        }
        buffer.push_str(quote);
        buffer.push_str(&item.to_string());
        buffer.push_str(quote);
    }

    buffer
}
