use cayley_core::{Alphabet, Word};

/// Renders a word for display, collapsing runs of a repeated symbol into
/// `x^n`. The empty word and the identity render as the identity character.
pub fn render_word(alphabet: &Alphabet, word: &Word) -> String {
    if word.is_empty() || word.is_identity() {
        return alphabet.identity().to_string();
    }
    let symbols = word.as_slice();
    let mut out = String::new();
    let mut start = 0;
    while start < symbols.len() {
        let run = symbols[start..]
            .iter()
            .take_while(|&&s| s == symbols[start])
            .count();
        out.push(alphabet.char_of(symbols[start]));
        if run > 1 {
            out.push('^');
            out.push_str(&run.to_string());
        }
        start += run;
    }
    out
}

/// Lays out a multiplication table as a padded grid.
///
/// The first row and column list the elements, followed by a separator line.
/// Every column is as wide as the longest rendered word plus two, and never
/// narrower than four.
pub fn render_grid(alphabet: &Alphabet, elements: &[Word], table: &[Vec<Word>]) -> String {
    let headers: Vec<String> = elements.iter().map(|w| render_word(alphabet, w)).collect();
    let cells: Vec<Vec<String>> = table
        .iter()
        .map(|row| row.iter().map(|w| render_word(alphabet, w)).collect())
        .collect();
    let widest = headers
        .iter()
        .chain(cells.iter().flatten())
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(0);
    let width = (widest + 2).max(4);

    let mut out = String::new();
    let mut line = " ".repeat(width);
    for header in &headers {
        line.push_str(&format!("{header:<width$}"));
    }
    push_line(&mut out, &line);
    push_line(&mut out, &"-".repeat(width * (headers.len() + 1)));
    for (header, row) in headers.iter().zip(&cells) {
        let mut line = format!("{header:<width$}");
        for cell in row {
            line.push_str(&format!("{cell:<width$}"));
        }
        push_line(&mut out, &line);
    }
    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}
