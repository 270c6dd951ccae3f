//! Tabela de operadores
//!
//! Conjunto fechado de operadores aplicados elemento a elemento. O motor
//! (`engine`) despacha qualquer um deles pela mesma estratégia genérica.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::element::Element;

/// Operadores binários (aritméticos, de bits e lógicos)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    BitAnd,
    BitOr,
    BitXor,
    /// E lógico: `1` se ambos diferentes de zero
    And,
    /// OU lógico: `1` se algum diferente de zero
    Or,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 10] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Rem,
        Self::BitAnd,
        Self::BitOr,
        Self::BitXor,
        Self::And,
        Self::Or,
    ];

    /// Símbolo do operador
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::And => "&&",
            Self::Or => "||",
        }
    }

    /// Operador exige representação em bits
    pub fn is_bitwise(&self) -> bool {
        matches!(self, Self::BitAnd | Self::BitOr | Self::BitXor)
    }

    /// Aplica a dois valores; `None` em overflow, divisão por zero ou NaN
    pub fn apply<T: Element>(&self, a: T, b: T) -> Option<T> {
        match self {
            Self::Add => a.try_add(b),
            Self::Sub => a.try_sub(b),
            Self::Mul => a.try_mul(b),
            Self::Div => a.try_div(b),
            Self::Rem => a.try_rem(b),
            Self::BitAnd => a.try_bitand(b),
            Self::BitOr => a.try_bitor(b),
            Self::BitXor => a.try_bitxor(b),
            Self::And => Some(T::from_bool(a.is_truthy() && b.is_truthy())),
            Self::Or => Some(T::from_bool(a.is_truthy() || b.is_truthy())),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Operadores unários
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    /// Negação aritmética
    Neg,
    /// Negação lógica
    Not,
    /// Complemento de bits
    Complement,
    /// Parte integral
    Floor,
    /// Sucessor (`v + 1`, sobre uma cópia)
    Increment,
    /// Predecessor (`v - 1`, sobre uma cópia)
    Decrement,
}

impl UnaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "!",
            Self::Complement => "~",
            Self::Floor => "floor",
            Self::Increment => "++",
            Self::Decrement => "--",
        }
    }

    pub fn is_bitwise(&self) -> bool {
        matches!(self, Self::Complement)
    }

    pub fn apply<T: Element>(&self, a: T) -> Option<T> {
        match self {
            Self::Neg => a.try_neg(),
            Self::Not => Some(T::from_bool(!a.is_truthy())),
            Self::Complement => a.try_complement(),
            Self::Floor => Some(a.truncate()),
            Self::Increment => a.try_add(T::one()),
            Self::Decrement => a.try_sub(T::one()),
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Deslocamento de bits; o contador é sempre escalar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftOp {
    Left,
    Right,
}

impl ShiftOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Left => "<<",
            Self::Right => ">>",
        }
    }

    pub fn apply<T: Element>(&self, a: T, count: u32) -> Option<T> {
        match self {
            Self::Left => a.try_shl(count),
            Self::Right => a.try_shr(count),
        }
    }
}

impl fmt::Display for ShiftOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Relações de comparação; disparam o colapso
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

impl Relation {
    pub const ALL: [Relation; 6] = [Self::Lt, Self::Le, Self::Gt, Self::Ge, Self::Eq, Self::Ne];

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Eq => "==",
            Self::Ne => "!=",
        }
    }

    /// Avalia a relação; serve tanto para elementos quanto para veredictos
    /// booleanos de dois conjuntos já colapsados
    pub fn holds<V: PartialOrd>(&self, a: &V, b: &V) -> bool {
        match self {
            Self::Lt => a < b,
            Self::Le => a <= b,
            Self::Gt => a > b,
            Self::Ge => a >= b,
            Self::Eq => a == b,
            Self::Ne => a != b,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Relation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "<" | "lt" => Ok(Self::Lt),
            "<=" | "le" => Ok(Self::Le),
            ">" | "gt" => Ok(Self::Gt),
            ">=" | "ge" => Ok(Self::Ge),
            "==" | "eq" => Ok(Self::Eq),
            "!=" | "ne" => Ok(Self::Ne),
            other => Err(format!("unknown relation '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_apply() {
        assert_eq!(BinaryOp::Add.apply(2, 3), Some(5));
        assert_eq!(BinaryOp::Rem.apply(9, 4), Some(1));
        assert_eq!(BinaryOp::Div.apply(9, 0), None);
        assert_eq!(BinaryOp::BitOr.apply(0b01, 0b10), Some(0b11));
        assert_eq!(BinaryOp::BitAnd.apply(1.0f64, 1.0), None);
    }

    #[test]
    fn test_logical_ops() {
        assert_eq!(BinaryOp::And.apply(5, 0), Some(0));
        assert_eq!(BinaryOp::And.apply(5, -2), Some(1));
        assert_eq!(BinaryOp::Or.apply(0, 0), Some(0));
        assert_eq!(BinaryOp::Or.apply(0.0f64, 2.5), Some(1.0));
        assert_eq!(UnaryOp::Not.apply(0), Some(1));
        assert_eq!(UnaryOp::Not.apply(7), Some(0));
    }

    #[test]
    fn test_unary_apply() {
        assert_eq!(UnaryOp::Neg.apply(4), Some(-4));
        assert_eq!(UnaryOp::Increment.apply(4), Some(5));
        assert_eq!(UnaryOp::Decrement.apply(0u32), None);
        assert_eq!(UnaryOp::Floor.apply(3.9f32), Some(3.0));
        assert_eq!(UnaryOp::Complement.apply(0i8), Some(-1));
    }

    #[test]
    fn test_shift_apply() {
        assert_eq!(ShiftOp::Left.apply(3u16, 2), Some(12));
        assert_eq!(ShiftOp::Right.apply(12u16, 2), Some(3));
        assert_eq!(ShiftOp::Right.apply(12u16, 16), None);
    }

    #[test]
    fn test_relation_holds() {
        assert!(Relation::Le.holds(&4, &4));
        assert!(!Relation::Lt.holds(&4, &4));
        assert!(Relation::Ne.holds(&true, &false));
        assert!(Relation::Gt.holds(&true, &false));
    }

    #[test]
    fn test_relation_from_str() {
        for relation in Relation::ALL {
            assert_eq!(relation.symbol().parse::<Relation>(), Ok(relation));
        }
        assert_eq!("ge".parse::<Relation>(), Ok(Relation::Ge));
        assert!("=<".parse::<Relation>().is_err());
    }

    #[test]
    fn test_display_symbols() {
        assert_eq!(BinaryOp::BitXor.to_string(), "^");
        assert_eq!(UnaryOp::Floor.to_string(), "floor");
        assert_eq!(ShiftOp::Left.to_string(), "<<");
        assert_eq!(Relation::Ne.to_string(), "!=");
    }
}
