use cayley_core::{CayleyError, ErrorInfo, Word};
use cayley_rewrite::Multiplier;

/// Multiplies every ordered pair of elements.
///
/// Each cell is rewritten independently, even for commutative groups, so a
/// symmetric result is evidence rather than an assumption.
#[tracing::instrument(skip_all, fields(order = elements.len()))]
pub fn build_table(
    elements: &[Word],
    multiplier: &Multiplier<'_>,
) -> Result<Vec<Vec<Word>>, CayleyError> {
    let mut table = Vec::with_capacity(elements.len());
    for left in elements {
        let row = elements
            .iter()
            .map(|right| multiplier.multiply(left, right))
            .collect::<Result<Vec<_>, _>>()?;
        table.push(row);
    }
    Ok(table)
}

/// Translates a word table into element indices.
///
/// Fails with `not-closed` when a product is not one of `elements`.
pub fn index_table(
    elements: &[Word],
    table: &[Vec<Word>],
) -> Result<Vec<Vec<usize>>, CayleyError> {
    table
        .iter()
        .enumerate()
        .map(|(row_idx, row)| {
            row.iter()
                .enumerate()
                .map(|(col_idx, cell)| {
                    position(elements, cell).ok_or_else(|| {
                        CayleyError::Table(
                            ErrorInfo::new("not-closed", "product is not an enumerated element")
                                .with_context("row", row_idx.to_string())
                                .with_context("column", col_idx.to_string())
                                .with_hint("raise word_length_limit or check the relations"),
                        )
                    })
                })
                .collect()
        })
        .collect()
}

/// Position of `word` in a shortlex-sorted element list; the empty word is
/// looked up as the identity.
pub fn position(elements: &[Word], word: &Word) -> Option<usize> {
    if word.is_empty() {
        return elements.iter().position(Word::is_identity);
    }
    elements.binary_search(word).ok()
}
