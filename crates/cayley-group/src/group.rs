use cayley_core::{Alphabet, CayleyError, ErrorInfo, Word};
use cayley_rewrite::{normalize, Multiplier, RuleSet};

use crate::config::{GroupConfig, SaturationPolicy};
use crate::display::{render_grid, render_word};
use crate::enumerate::{enumerate, SearchLimits};
use crate::presentation::parse_presentation;
use crate::table::{build_table, index_table, position};

/// A finitely presented group together with its multiplication table.
///
/// Everything is computed once in the constructor and never changes
/// afterwards.
#[derive(Debug, Clone)]
pub struct Group {
    config: GroupConfig,
    presentation: Option<String>,
    rules: RuleSet,
    elements: Vec<Word>,
    table: Vec<Vec<Word>>,
    saturated: bool,
}

impl Group {
    /// Builds a group from generators and raw `word=word` relations.
    #[tracing::instrument(
        skip_all,
        fields(generators = generators.len(), relations = relations.len())
    )]
    pub fn new<S: AsRef<str>>(
        generators: &[char],
        relations: &[S],
        config: GroupConfig,
    ) -> Result<Self, CayleyError> {
        config.validate()?;
        let alphabet = Alphabet::new(generators.iter().copied(), config.identity)?;
        let rules = normalize(&alphabet, relations, config.abelian)?;

        let limits = SearchLimits {
            word_length_limit: config.word_length_limit,
            max_search_nodes: config.max_search_nodes,
        };
        let enumeration = enumerate(&rules, &limits)?;
        if enumeration.saturated {
            match config.saturation {
                SaturationPolicy::Ignore => {}
                SaturationPolicy::Warn => tracing::warn!(
                    limit = config.word_length_limit,
                    elements = enumeration.elements.len(),
                    "canonical words exceed the length limit; the order may be too small"
                ),
                SaturationPolicy::Fail => {
                    return Err(CayleyError::Resource(
                        ErrorInfo::new("saturated", "canonical words exceed the length limit")
                            .with_context("limit", config.word_length_limit.to_string())
                            .with_context("elements", enumeration.elements.len().to_string())
                            .with_hint("raise word_length_limit or add relations"),
                    ))
                }
            }
        }

        let multiplier = Multiplier::new(&rules, config.max_rewrite_sweeps);
        let table = build_table(&enumeration.elements, &multiplier)?;
        tracing::debug!(order = enumeration.elements.len(), "built multiplication table");

        Ok(Self {
            config,
            presentation: None,
            rules,
            elements: enumeration.elements,
            table,
            saturated: enumeration.saturated,
        })
    }

    /// Parses a `<gens|rels>` presentation and builds the group.
    pub fn from_presentation(text: &str, config: GroupConfig) -> Result<Self, CayleyError> {
        let parsed = parse_presentation(text)?;
        let mut group = Self::new(&parsed.generators, &parsed.relations, config)?;
        group.presentation = Some(text.trim().to_string());
        Ok(group)
    }

    /// Number of enumerated elements.
    pub fn order(&self) -> usize {
        self.elements.len()
    }

    /// Canonical words, identity first, in shortlex order.
    pub fn elements(&self) -> &[Word] {
        &self.elements
    }

    /// Products indexed like [`Group::elements`].
    pub fn table(&self) -> &[Vec<Word>] {
        &self.table
    }

    /// Canonical word of the product of elements `i` and `j`.
    pub fn product(&self, i: usize, j: usize) -> Option<&Word> {
        self.table.get(i).and_then(|row| row.get(j))
    }

    /// The identity word.
    pub fn identity(&self) -> &Word {
        &self.elements[0]
    }

    /// Normalised rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Alphabet of generators and identity character.
    pub fn alphabet(&self) -> &Alphabet {
        self.rules.alphabet()
    }

    /// Configuration the group was built with.
    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    /// Presentation text, when built from one.
    pub fn presentation(&self) -> Option<&str> {
        self.presentation.as_deref()
    }

    /// Whether canonical words beyond the length limit were found.
    pub fn saturated(&self) -> bool {
        self.saturated
    }

    /// Rewriter bound to this group's rules and sweep budget.
    pub fn multiplier(&self) -> Multiplier<'_> {
        Multiplier::new(&self.rules, self.config.max_rewrite_sweeps)
    }

    /// Multiplies two arbitrary words and rewrites the result.
    pub fn multiply(&self, a: &Word, b: &Word) -> Result<Word, CayleyError> {
        let product = self.multiplier().multiply(a, b)?;
        Ok(if product.is_empty() {
            Word::identity()
        } else {
            product
        })
    }

    /// Reads a word written with generator characters and powers, then
    /// reduces it to its canonical form.
    pub fn word(&self, text: &str) -> Result<Word, CayleyError> {
        let raw = cayley_rewrite::expand_powers(self.alphabet(), text)?;
        self.multiply(&raw, &Word::identity())
    }

    /// Index of `word` among the elements.
    pub fn index_of(&self, word: &Word) -> Option<usize> {
        position(&self.elements, word)
    }

    /// Index of `word` among the elements, failing with `unknown-element`.
    pub fn lookup(&self, word: &Word) -> Result<usize, CayleyError> {
        self.index_of(word).ok_or_else(|| {
            CayleyError::Table(
                ErrorInfo::new("unknown-element", "word is not an enumerated element")
                    .with_context("word", self.alphabet().spell(word)),
            )
        })
    }

    /// Table expressed as element indices.
    pub fn index_table(&self) -> Result<Vec<Vec<usize>>, CayleyError> {
        index_table(&self.elements, &self.table)
    }

    /// Index of the two-sided inverse of element `i`, if the table has one.
    pub fn inverse(&self, i: usize) -> Option<usize> {
        let row = self.table.get(i)?;
        (0..self.order()).find(|&j| row[j].is_identity() && self.table[j][i].is_identity())
    }

    /// Smallest `n >= 1` with `x^n` the identity, following table lookups.
    ///
    /// Returns `None` if a power leaves the element list or never returns to
    /// the identity within `order()` steps.
    pub fn element_order(&self, i: usize) -> Option<usize> {
        if i >= self.order() {
            return None;
        }
        let mut current = i;
        for n in 1..=self.order() {
            if self.elements[current].is_identity() {
                return Some(n);
            }
            current = self.index_of(&self.table[current][i])?;
        }
        None
    }

    /// Whether the table is symmetric.
    pub fn is_abelian(&self) -> bool {
        let n = self.order();
        (0..n).all(|i| (i + 1..n).all(|j| self.table[i][j] == self.table[j][i]))
    }

    /// Display form of a word, with runs collapsed to powers.
    pub fn render(&self, word: &Word) -> String {
        render_word(self.alphabet(), word)
    }

    /// Padded text grid of the whole table.
    pub fn render_table(&self) -> String {
        render_grid(self.alphabet(), &self.elements, &self.table)
    }
}
