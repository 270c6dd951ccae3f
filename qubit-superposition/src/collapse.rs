//! # Collapse: Comparação relacional
//!
//! Uma comparação (`< <= > >= == !=`) avalia a condição sobre um conjunto
//! quantificado e produz um novo conjunto no estado terminal `Collapsed`.
//!
//! ## Regras
//!
//! Para cada `a` do operando esquerdo, `r(a, b)` é avaliado contra todo `b`
//! do operando direito. `a` vira autoestado se:
//!
//! - direito "any" (ou escalar): algum `r(a, b)` verdadeiro
//! - direito "all": todo `r(a, b)` verdadeiro
//!
//! O veredicto segue o quantificador do operando **esquerdo**:
//!
//! - "all": todos os elementos viraram autoestados
//! - "any": existe pelo menos um autoestado
//!
//! Dois conjuntos já colapsados comparam seus veredictos como booleanos.
//! Um colapsado contra um vivo é erro.

use tracing::{debug, trace};

use crate::element::Element;
use crate::engine::Operand;
use crate::error::{SuperpositionError, SuperpositionResult};
use crate::operator::Relation;
use crate::set::{Quantifier, State, SuperpositionSet};

impl<T: Element> SuperpositionSet<T> {
    /// Colapsa `self` sob a relação contra outro conjunto ou um escalar
    pub fn compare<'a>(
        &self,
        relation: Relation,
        rhs: impl Into<Operand<'a, T>>,
    ) -> SuperpositionResult<Self> {
        match rhs.into() {
            Operand::Set(other) => collapse_sets(self, other, relation),
            Operand::Scalar(k) => collapse_scalar(self, k, relation),
        }
    }

    pub fn lt<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> SuperpositionResult<Self> {
        self.compare(Relation::Lt, rhs)
    }

    pub fn le<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> SuperpositionResult<Self> {
        self.compare(Relation::Le, rhs)
    }

    pub fn gt<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> SuperpositionResult<Self> {
        self.compare(Relation::Gt, rhs)
    }

    pub fn ge<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> SuperpositionResult<Self> {
        self.compare(Relation::Ge, rhs)
    }

    pub fn equals<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> SuperpositionResult<Self> {
        self.compare(Relation::Eq, rhs)
    }

    pub fn not_equals<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> SuperpositionResult<Self> {
        self.compare(Relation::Ne, rhs)
    }
}

fn collapse_sets<T: Element>(
    a: &SuperpositionSet<T>,
    b: &SuperpositionSet<T>,
    relation: Relation,
) -> SuperpositionResult<SuperpositionSet<T>> {
    let (qa, qb) = match (a.state(), b.state()) {
        (State::Collapsed(ca), State::Collapsed(cb)) => {
            let verdict = relation.holds(&ca.verdict, &cb.verdict);
            trace!(%relation, lhs = ca.verdict, rhs = cb.verdict, verdict, "compared collapsed verdicts");
            return Ok(SuperpositionSet::collapsed(verdict, Vec::new(), Quantifier::default()));
        }
        (State::Live(qa), State::Live(qb)) => (*qa, *qb),
        _ => {
            let err = SuperpositionError::MixedCollapse {
                relation: relation.to_string(),
            };
            debug!(error = %err, "comparison refused");
            return Err(err);
        }
    };

    let eigenstates: Vec<T> = a
        .iter()
        .filter(|x| {
            let mut conj = true;
            let mut disj = false;
            for y in b.iter() {
                let rt = relation.holds(x, &y);
                conj &= rt;
                disj |= rt;
            }
            match qb {
                Quantifier::Conjunctive => conj,
                Quantifier::Disjunctive => disj,
            }
        })
        .collect();

    Ok(settle(relation, qa, a.len(), eigenstates))
}

fn collapse_scalar<T: Element>(
    a: &SuperpositionSet<T>,
    k: T,
    relation: Relation,
) -> SuperpositionResult<SuperpositionSet<T>> {
    let qa = a.quantifier().ok_or_else(|| {
        let err = SuperpositionError::collapsed(relation);
        debug!(error = %err, "comparison refused");
        err
    })?;

    // Um único candidato: "all" e "any" coincidem
    let eigenstates: Vec<T> = a.iter().filter(|x| relation.holds(x, &k)).collect();

    Ok(settle(relation, qa, a.len(), eigenstates))
}

/// Deriva o veredicto a partir do quantificador do operando esquerdo
fn settle<T: Element>(
    relation: Relation,
    quantifier: Quantifier,
    operand_len: usize,
    eigenstates: Vec<T>,
) -> SuperpositionSet<T> {
    let verdict = match quantifier {
        Quantifier::Conjunctive => eigenstates.len() == operand_len,
        Quantifier::Disjunctive => !eigenstates.is_empty(),
    };
    trace!(
        %relation,
        %quantifier,
        verdict,
        eigenstates = eigenstates.len(),
        "collapsed"
    );

    SuperpositionSet::collapsed(verdict, eigenstates, quantifier)
}
