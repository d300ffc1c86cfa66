use cayley_core::{Alphabet, CayleyError, Word};
use cayley_group::{render_grid, render_word, Group, GroupConfig};

#[test]
fn runs_collapse_into_powers() -> Result<(), CayleyError> {
    let alphabet = Alphabet::new(['a', 'b'], 'e')?;
    let render = |text: &str| -> Result<String, CayleyError> {
        Ok(render_word(&alphabet, &alphabet.read(text)?))
    };
    assert_eq!(render("a")?, "a");
    assert_eq!(render("aaab")?, "a^3b");
    assert_eq!(render("abba")?, "ab^2a");
    assert_eq!(render("e")?, "e");
    assert_eq!(render_word(&alphabet, &Word::empty()), "e");
    Ok(())
}

#[test]
fn grid_has_header_separator_and_rows() -> Result<(), CayleyError> {
    let group = Group::from_presentation("<a|a^2=e>", GroupConfig::default())?;
    let expected = "    e   a\n------------\ne   e   a\na   a   e\n";
    assert_eq!(group.render_table(), expected);
    Ok(())
}

#[test]
fn columns_widen_for_long_words() -> Result<(), CayleyError> {
    let alphabet = Alphabet::new(['a', 'b'], 'e')?;
    let elements = vec![Word::identity(), alphabet.read("abab")?];
    let table = vec![
        vec![elements[0].clone(), elements[1].clone()],
        vec![elements[1].clone(), elements[0].clone()],
    ];
    let grid = render_grid(&alphabet, &elements, &table);
    let lines: Vec<&str> = grid.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "      e     abab");
    assert_eq!(lines[1], "-".repeat(18));
    assert_eq!(lines[3], "abab  abab  e");
    Ok(())
}
