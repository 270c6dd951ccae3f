//! Tipos de erro para qubit-superposition

use thiserror::Error;

/// Resultado customizado para operações de superposição
pub type SuperpositionResult<T> = Result<T, SuperpositionError>;

/// Erros que podem ocorrer em operações sobre superposições
///
/// Nenhuma operação falha em silêncio: um operando colapsado não produz um
/// conjunto vazio, produz um destes erros.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuperpositionError {
    #[error("Cannot apply '{operation}' to a collapsed superposition")]
    CollapsedOperand { operation: String },

    #[error("Cannot compare '{relation}' between a collapsed and a live superposition")]
    MixedCollapse { relation: String },

    #[error("Index {index} out of bounds for superposition of {len} elements")]
    OutOfBounds { index: usize, len: usize },

    #[error("Invalid range: {reason}")]
    InvalidRange { reason: String },

    #[error("Arithmetic fault evaluating {lhs} {operation} {rhs}")]
    Arithmetic {
        operation: String,
        lhs: String,
        rhs: String,
    },

    #[error("Operator '{operation}' is not supported by this element type")]
    Unsupported { operation: String },

    #[error("Invalid serialized state: {reason}")]
    InvalidState { reason: String },
}

impl SuperpositionError {
    pub(crate) fn collapsed(operation: impl ToString) -> Self {
        Self::CollapsedOperand {
            operation: operation.to_string(),
        }
    }

    /// Verdadeiro quando o erro vem do estado do operando e não dos valores
    pub fn is_state_error(&self) -> bool {
        matches!(self, Self::CollapsedOperand { .. } | Self::MixedCollapse { .. })
    }
}
