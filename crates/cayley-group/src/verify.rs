use cayley_core::{CayleyError, SampleRng};
use serde::{Deserialize, Serialize};

use crate::group::Group;

/// Most counterexamples kept in a report.
const MAX_COUNTEREXAMPLES: usize = 8;

/// Options controlling group-law checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyOptions {
    /// Number of random triples checked for associativity. Every triple is
    /// checked when the group has no more than this many.
    pub associativity_samples: usize,
    /// Seed for the triple sampler.
    pub seed: u64,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            associativity_samples: 512,
            seed: 0xCA7_1E7,
        }
    }
}

/// Outcome of checking the group axioms against a computed table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Number of elements.
    pub order: usize,
    /// Every product is an enumerated element.
    pub closed: bool,
    /// Multiplying by the identity on either side changes nothing.
    pub identity_law: bool,
    /// Every element has a two-sided inverse.
    pub inverses: bool,
    /// The table is symmetric.
    pub commutative: bool,
    /// Whether commutation relations were requested.
    pub abelian_requested: bool,
    /// Number of triples checked for associativity.
    pub associativity_checked: usize,
    /// Number of triples where `(ab)c != a(bc)`.
    pub associativity_failures: usize,
    /// Rendered failing triples, capped.
    pub counterexamples: Vec<[String; 3]>,
    /// Canonical words beyond the length limit exist.
    pub saturated: bool,
}

impl VerificationReport {
    /// True when the table describes a group consistent with its
    /// construction parameters.
    pub fn passed(&self) -> bool {
        self.closed
            && self.identity_law
            && self.inverses
            && self.associativity_failures == 0
            && (!self.abelian_requested || self.commutative)
            && !self.saturated
    }
}

/// Checks closure, identity, inverses, commutativity and sampled
/// associativity.
pub fn verify(group: &Group, opts: &VerifyOptions) -> Result<VerificationReport, CayleyError> {
    let n = group.order();
    let elements = group.elements();
    let table = group.table();

    let closed = group.index_table().is_ok();
    let identity_law = (0..n).all(|i| table[i][0] == elements[i] && table[0][i] == elements[i]);
    let inverses = (0..n).all(|i| group.inverse(i).is_some());

    let mut checked = 0usize;
    let mut failures = 0usize;
    let mut counterexamples = Vec::new();
    let mut check = |[a, b, c]: [usize; 3]| -> Result<(), CayleyError> {
        let left = group.multiply(&table[a][b], &elements[c])?;
        let right = group.multiply(&elements[a], &table[b][c])?;
        checked += 1;
        if left != right {
            failures += 1;
            if counterexamples.len() < MAX_COUNTEREXAMPLES {
                counterexamples.push([a, b, c].map(|idx| group.render(&elements[idx])));
            }
        }
        Ok(())
    };
    if n.saturating_mul(n).saturating_mul(n) <= opts.associativity_samples {
        for a in 0..n {
            for b in 0..n {
                for c in 0..n {
                    check([a, b, c])?;
                }
            }
        }
    } else {
        let mut rng = SampleRng::substream(opts.seed, n as u64);
        for _ in 0..opts.associativity_samples {
            check(rng.triple(n))?;
        }
    }

    let report = VerificationReport {
        order: n,
        closed,
        identity_law,
        inverses,
        commutative: group.is_abelian(),
        abelian_requested: group.config().abelian,
        associativity_checked: checked,
        associativity_failures: failures,
        counterexamples,
        saturated: group.saturated(),
    };
    tracing::debug!(passed = report.passed(), checked, failures, "verified group laws");
    Ok(report)
}
