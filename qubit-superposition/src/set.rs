//! Conjunto quantificado em superposição
//!
//! Um `SuperpositionSet` guarda valores únicos em ordem de inserção, marcados
//! com um quantificador ("all"/"any"). Comparações relacionais colapsam o
//! conjunto em um veredicto booleano mais os autoestados que o satisfizeram;
//! o colapso é terminal.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::element::Element;
use crate::error::{SuperpositionError, SuperpositionResult};

/// Quantificador declarado de um conjunto vivo
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Quantifier {
    /// "all": todos os elementos precisam satisfazer
    #[default]
    Conjunctive,
    /// "any": basta um elemento satisfazer
    Disjunctive,
}

impl Quantifier {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Conjunctive => "all",
            Self::Disjunctive => "any",
        }
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Resultado de um colapso
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Collapse<T> {
    /// Veredicto booleano
    pub verdict: bool,
    /// Elementos do operando original que satisfizeram a condição
    pub eigenstates: Vec<T>,
    /// Quantificador do operando antes do colapso
    pub eigen_quantifier: Quantifier,
}

/// Estado de um conjunto: vivo (quantificado) ou colapsado (terminal)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum State<T> {
    Live(Quantifier),
    Collapsed(Collapse<T>),
}

impl<T> Default for State<T> {
    fn default() -> Self {
        Self::Live(Quantifier::default())
    }
}

/// Conjunto ordenado de valores únicos com quantificador
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSet<T>", bound(deserialize = "T: Element + Deserialize<'de>"))]
pub struct SuperpositionSet<T> {
    elements: Vec<T>,
    state: State<T>,
}

/// Forma serializada, validada antes de virar conjunto
#[derive(Deserialize)]
struct RawSet<T> {
    elements: Vec<T>,
    state: State<T>,
}

impl<T: Element> TryFrom<RawSet<T>> for SuperpositionSet<T> {
    type Error = SuperpositionError;

    fn try_from(raw: RawSet<T>) -> Result<Self, Self::Error> {
        match raw.state {
            State::Live(quantifier) => {
                let mut set = Self::with_quantifier(quantifier);
                set.extend(raw.elements);
                Ok(set)
            }
            State::Collapsed(collapse) => {
                if !raw.elements.is_empty() {
                    return Err(SuperpositionError::InvalidState {
                        reason: format!(
                            "collapsed superposition carries {} elements",
                            raw.elements.len()
                        ),
                    });
                }
                let eigen: Self = collapse.eigenstates.into_iter().collect();
                Ok(Self::collapsed(
                    collapse.verdict,
                    eigen.elements,
                    collapse.eigen_quantifier,
                ))
            }
        }
    }
}

impl<T> Default for SuperpositionSet<T> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            state: State::default(),
        }
    }
}

impl<T: Element> SuperpositionSet<T> {
    /// Cria conjunto vazio, quantificador "all"
    pub fn new() -> Self {
        Self::default()
    }

    /// Cria conjunto vazio com quantificador
    pub fn with_quantifier(quantifier: Quantifier) -> Self {
        Self {
            elements: Vec::new(),
            state: State::Live(quantifier),
        }
    }

    /// Cria conjunto a partir de uma progressão aritmética inclusiva
    pub fn range(first: T, last: T, step: T) -> SuperpositionResult<Self> {
        let mut set = Self::new();
        set.insert_range(first, last, step)?;
        Ok(set)
    }

    /// Cria conjunto já colapsado
    pub fn collapsed(verdict: bool, eigenstates: Vec<T>, eigen_quantifier: Quantifier) -> Self {
        Self {
            elements: Vec::new(),
            state: State::Collapsed(Collapse {
                verdict,
                eigenstates,
                eigen_quantifier,
            }),
        }
    }

    // ------------------------------------------------------------------
    // Elementos
    // ------------------------------------------------------------------

    /// Insere se ausente; retorna se houve inserção
    ///
    /// Valores sem igualdade consigo mesmos (NaN) são recusados.
    pub fn insert(&mut self, value: T) -> bool {
        if !self_equal(&value) || self.elements.contains(&value) {
            return false;
        }
        self.elements.push(value);
        true
    }

    /// Insere a progressão `first, first+step, ...` até `last` inclusive
    ///
    /// Retorna `Ok(true)` se todos os valores eram novos. Passo zero ou com
    /// sinal oposto à direção de `last - first` é erro, assim como um passo
    /// pequeno demais para mover o valor (floats além da precisão). Em erro
    /// o conjunto fica intacto.
    pub fn insert_range(&mut self, first: T, last: T, step: T) -> SuperpositionResult<bool> {
        if !(self_equal(&first) && self_equal(&last) && self_equal(&step)) {
            return Err(SuperpositionError::InvalidRange {
                reason: "bounds and step must be comparable numbers".into(),
            });
        }
        let zero = T::zero();
        if step == zero {
            return Err(SuperpositionError::InvalidRange {
                reason: "step must be non-zero".into(),
            });
        }
        let ascending = step > zero;
        if (ascending && first > last) || (!ascending && first < last) {
            return Err(SuperpositionError::InvalidRange {
                reason: format!(
                    "step {} does not move from {} towards {}",
                    step, first, last
                ),
            });
        }

        let mut progression = Vec::new();
        let mut value = first;
        loop {
            let within = if ascending { value <= last } else { value >= last };
            if !within {
                break;
            }
            progression.push(value);
            if value == last {
                break;
            }
            match value.try_add(step) {
                Some(next) if (ascending && next > value) || (!ascending && next < value) => {
                    value = next
                }
                Some(_) => {
                    return Err(SuperpositionError::InvalidRange {
                        reason: format!("step {} does not advance past {}", step, value),
                    });
                }
                // Passou do limite do tipo: a progressão terminou
                None => break,
            }
        }

        let mut all_novel = true;
        for value in progression {
            all_novel &= self.insert(value);
        }
        Ok(all_novel)
    }

    /// Remove a primeira ocorrência
    pub fn remove(&mut self, value: T) -> bool {
        match self.elements.iter().position(|v| *v == value) {
            Some(pos) => {
                self.elements.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, value: T) -> bool {
        self.elements.contains(&value)
    }

    /// Elemento na posição `index`
    pub fn item(&self, index: usize) -> SuperpositionResult<T> {
        self.get(index).ok_or(SuperpositionError::OutOfBounds {
            index,
            len: self.elements.len(),
        })
    }

    pub fn get(&self, index: usize) -> Option<T> {
        self.elements.get(index).copied()
    }

    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.elements.iter().copied()
    }

    /// Sorteia um elemento
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<T> {
        self.elements.choose(rng).copied()
    }

    // ------------------------------------------------------------------
    // Estado
    // ------------------------------------------------------------------

    pub fn state(&self) -> &State<T> {
        &self.state
    }

    /// Quantificador, se vivo
    pub fn quantifier(&self) -> Option<Quantifier> {
        match &self.state {
            State::Live(q) => Some(*q),
            State::Collapsed(_) => None,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        matches!(self.state, State::Collapsed(_))
    }

    pub fn collapse(&self) -> Option<&Collapse<T>> {
        match &self.state {
            State::Collapsed(c) => Some(c),
            State::Live(_) => None,
        }
    }

    /// Veredicto do colapso, `None` se vivo
    pub fn verdict(&self) -> Option<bool> {
        self.collapse().map(|c| c.verdict)
    }

    /// Veredicto do colapso; falso para conjuntos vivos
    pub fn bool_result(&self) -> bool {
        self.verdict().unwrap_or(false)
    }

    /// Conjunto vivo com os autoestados, no quantificador pré-colapso;
    /// vazio se o conjunto não colapsou
    pub fn eigenstates(&self) -> Self {
        match &self.state {
            State::Collapsed(c) => {
                let mut set = Self::with_quantifier(c.eigen_quantifier);
                set.extend(c.eigenstates.iter().copied());
                set
            }
            State::Live(_) => Self::new(),
        }
    }

    // ------------------------------------------------------------------
    // Quantificadores e combinadores de conjunto
    // ------------------------------------------------------------------

    /// Cópia marcada "any"
    pub fn quantify_any(&self) -> Self {
        self.retagged(Quantifier::Disjunctive)
    }

    /// Cópia marcada "all"
    pub fn quantify_all(&self) -> Self {
        self.retagged(Quantifier::Conjunctive)
    }

    fn retagged(&self, quantifier: Quantifier) -> Self {
        Self {
            elements: self.elements.clone(),
            state: State::Live(quantifier),
        }
    }

    /// União, marcada "any"; operandos colapsados não contribuem
    pub fn union_of(a: &Self, b: &Self) -> Self {
        let mut union = Self::with_quantifier(Quantifier::Disjunctive);
        for operand in [a, b] {
            if !operand.is_collapsed() {
                union.extend(operand.iter());
            }
        }
        union
    }

    /// Interseção por igualdade, marcada "all"
    ///
    /// Se exatamente um operando está colapsado o resultado é o outro.
    pub fn intersect_of(a: &Self, b: &Self) -> Self {
        let elements = match (a.is_collapsed(), b.is_collapsed()) {
            (false, false) => a
                .elements
                .iter()
                .copied()
                .filter(|v| b.elements.contains(v))
                .collect(),
            (true, false) => b.elements.clone(),
            (false, true) => a.elements.clone(),
            (true, true) => Vec::new(),
        };
        Self {
            elements,
            state: State::Live(Quantifier::Conjunctive),
        }
    }
}

/// Falso apenas para NaN
#[allow(clippy::eq_op)]
fn self_equal<T: PartialEq>(value: &T) -> bool {
    value == value
}

impl<T: Element> FromIterator<T> for SuperpositionSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Element> Extend<T> for SuperpositionSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Element> fmt::Display for SuperpositionSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for value in &self.elements {
            write!(f, "{} ", value)?;
        }
        write!(f, "}}")
    }
}
