//! # 🔀 qubit-superposition: Conjuntos Quantificados
//!
//! Coleções de valores marcadas com um quantificador lógico ("all" / "any")
//! que aceitam operadores algébricos elemento a elemento e colapsam, sob uma
//! comparação relacional, em um veredicto booleano mais os autoestados que
//! satisfizeram a condição.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │           SuperpositionSet<T>                   │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Estado: Live(all|any) → Collapsed        │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Motor de operadores:                     │  │
//! │  │  - Produto cartesiano, escalar, unário    │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Colapso: veredicto + autoestados         │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Complexidade
//!
//! - Inserção: O(n) (teste de pertinência antes de inserir)
//! - Produto cartesiano: O(m·n) aplicações, O(m·n·k) com deduplicação
//! - Colapso conjunto × conjunto: O(m·n); conjunto × escalar: O(n)
//!
//! ## Exemplo
//!
//! ```
//! use qubit_superposition::SuperpositionSet;
//!
//! let divisors = SuperpositionSet::<i32>::range(2, 3, 1).unwrap();
//!
//! // 7 % all(2..=3) != 0  →  7 é primo
//! let remainders = (7 % &divisors.quantify_all()).unwrap();
//! let verdict = remainders.not_equals(0).unwrap();
//! assert!(verdict.bool_result());
//! ```

pub mod collapse;
pub mod element;
pub mod engine;
pub mod error;
pub mod operator;
pub mod set;

pub use element::Element;
pub use engine::Operand;
pub use error::{SuperpositionError, SuperpositionResult};
pub use operator::{BinaryOp, Relation, ShiftOp, UnaryOp};
pub use set::{Collapse, Quantifier, State, SuperpositionSet};
