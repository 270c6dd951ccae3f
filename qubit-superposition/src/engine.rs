//! Motor de operadores
//!
//! Duas estratégias genéricas aplicam qualquer operador da tabela:
//!
//! - **Produto cartesiano** (conjunto ⊗ conjunto): `f(a, b)` para todo par,
//!   até `m * n` resultados antes da deduplicação.
//! - **Escalar** (conjunto ⊗ escalar, em qualquer ordem) e **unária**:
//!   `f(a, k)` / `f(k, a)` / `f(a)` para cada elemento.
//!
//! O resultado herda o quantificador do operando conjunto à esquerda (ou do
//! único conjunto, na forma escalar). Operandos colapsados são recusados com
//! erro; os operandos nunca são modificados.

use tracing::debug;

use crate::element::Element;
use crate::error::{SuperpositionError, SuperpositionResult};
use crate::operator::{BinaryOp, ShiftOp, UnaryOp};
use crate::set::{Quantifier, SuperpositionSet};

/// Lado direito de um operador: outro conjunto ou um escalar
#[derive(Clone, Copy, Debug)]
pub enum Operand<'a, T> {
    Set(&'a SuperpositionSet<T>),
    Scalar(T),
}

impl<'a, T> From<&'a SuperpositionSet<T>> for Operand<'a, T> {
    fn from(set: &'a SuperpositionSet<T>) -> Self {
        Self::Set(set)
    }
}

macro_rules! impl_scalar_operand {
    ($($t:ty),* $(,)?) => {$(
        impl<'a> From<$t> for Operand<'a, $t> {
            fn from(value: $t) -> Self {
                Self::Scalar(value)
            }
        }
    )*};
}

impl_scalar_operand!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T: Element> SuperpositionSet<T> {
    /// Aplica operador binário contra conjunto (produto cartesiano) ou escalar
    pub fn combine<'a>(
        &self,
        op: BinaryOp,
        rhs: impl Into<Operand<'a, T>>,
    ) -> SuperpositionResult<Self> {
        match rhs.into() {
            Operand::Set(other) => cross_product(self, other, op),
            Operand::Scalar(k) => {
                let quantifier = live_quantifier(self, op)?;
                check_bits::<T>(op.is_bitwise(), op)?;
                build(quantifier, self.iter(), |a| {
                    op.apply(a, k).ok_or_else(|| arithmetic(op, a, k))
                })
            }
        }
    }

    /// Forma com escalar à esquerda: `k op a` para cada elemento
    pub fn scalar_combine(k: T, op: BinaryOp, set: &Self) -> SuperpositionResult<Self> {
        let quantifier = live_quantifier(set, op)?;
        check_bits::<T>(op.is_bitwise(), op)?;
        build(quantifier, set.iter(), |a| {
            op.apply(k, a).ok_or_else(|| arithmetic(op, k, a))
        })
    }

    /// Atribuição composta: substitui `self` pelo resultado, ou o mantém
    /// intacto em caso de erro
    pub fn combine_assign<'a>(
        &mut self,
        op: BinaryOp,
        rhs: impl Into<Operand<'a, T>>,
    ) -> SuperpositionResult<()> {
        *self = self.combine(op, rhs)?;
        Ok(())
    }

    /// Aplica operador unário a cada elemento
    pub fn map(&self, op: UnaryOp) -> SuperpositionResult<Self> {
        let quantifier = live_quantifier(self, op)?;
        check_bits::<T>(op.is_bitwise(), op)?;
        build(quantifier, self.iter(), |a| {
            op.apply(a).ok_or_else(|| arithmetic(op, "", a))
        })
    }

    /// Desloca cada elemento `count` bits
    pub fn shift(&self, op: ShiftOp, count: u32) -> SuperpositionResult<Self> {
        let quantifier = live_quantifier(self, op)?;
        check_bits::<T>(true, op)?;
        build(quantifier, self.iter(), |a| {
            op.apply(a, count).ok_or_else(|| arithmetic(op, a, count))
        })
    }

    pub fn negate(&self) -> SuperpositionResult<Self> {
        self.map(UnaryOp::Neg)
    }

    pub fn logical_not(&self) -> SuperpositionResult<Self> {
        self.map(UnaryOp::Not)
    }

    pub fn complement(&self) -> SuperpositionResult<Self> {
        self.map(UnaryOp::Complement)
    }

    pub fn floor(&self) -> SuperpositionResult<Self> {
        self.map(UnaryOp::Floor)
    }

    pub fn increment(&self) -> SuperpositionResult<Self> {
        self.map(UnaryOp::Increment)
    }

    pub fn decrement(&self) -> SuperpositionResult<Self> {
        self.map(UnaryOp::Decrement)
    }

    pub fn shl(&self, count: u32) -> SuperpositionResult<Self> {
        self.shift(ShiftOp::Left, count)
    }

    pub fn shr(&self, count: u32) -> SuperpositionResult<Self> {
        self.shift(ShiftOp::Right, count)
    }

    pub fn logical_and<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> SuperpositionResult<Self> {
        self.combine(BinaryOp::And, rhs)
    }

    pub fn logical_or<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> SuperpositionResult<Self> {
        self.combine(BinaryOp::Or, rhs)
    }
}

fn cross_product<T: Element>(
    a: &SuperpositionSet<T>,
    b: &SuperpositionSet<T>,
    op: BinaryOp,
) -> SuperpositionResult<SuperpositionSet<T>> {
    let quantifier = live_quantifier(a, op)?;
    live_quantifier(b, op)?;
    check_bits::<T>(op.is_bitwise(), op)?;

    let mut result = SuperpositionSet::with_quantifier(quantifier);
    for x in a.iter() {
        for y in b.iter() {
            let value = op.apply(x, y).ok_or_else(|| arithmetic(op, x, y))?;
            result.insert(value);
        }
    }
    Ok(result)
}

fn build<T, I, F>(quantifier: Quantifier, values: I, mut f: F) -> SuperpositionResult<SuperpositionSet<T>>
where
    T: Element,
    I: Iterator<Item = T>,
    F: FnMut(T) -> SuperpositionResult<T>,
{
    let mut result = SuperpositionSet::with_quantifier(quantifier);
    for value in values {
        result.insert(f(value)?);
    }
    Ok(result)
}

fn live_quantifier<T: Element>(
    set: &SuperpositionSet<T>,
    operation: impl ToString,
) -> SuperpositionResult<Quantifier> {
    set.quantifier().ok_or_else(|| {
        let err = SuperpositionError::collapsed(operation);
        debug!(error = %err, "operator refused");
        err
    })
}

fn check_bits<T: Element>(bitwise: bool, operation: impl ToString) -> SuperpositionResult<()> {
    if bitwise && !T::SUPPORTS_BITS {
        let err = SuperpositionError::Unsupported {
            operation: operation.to_string(),
        };
        debug!(error = %err, "operator refused");
        return Err(err);
    }
    Ok(())
}

fn arithmetic(op: impl ToString, lhs: impl ToString, rhs: impl ToString) -> SuperpositionError {
    let err = SuperpositionError::Arithmetic {
        operation: op.to_string(),
        lhs: lhs.to_string(),
        rhs: rhs.to_string(),
    };
    debug!(error = %err, "arithmetic fault");
    err
}

// ----------------------------------------------------------------------
// Sobrecarga de operadores
// ----------------------------------------------------------------------

macro_rules! impl_binary_ops {
    ($(($trait:ident, $method:ident, $op:expr)),* $(,)?) => {$(
        impl<'b, T: Element> std::ops::$trait<&'b SuperpositionSet<T>> for &SuperpositionSet<T> {
            type Output = SuperpositionResult<SuperpositionSet<T>>;

            fn $method(self, rhs: &'b SuperpositionSet<T>) -> Self::Output {
                cross_product(self, rhs, $op)
            }
        }

        impl<T: Element> std::ops::$trait<T> for &SuperpositionSet<T> {
            type Output = SuperpositionResult<SuperpositionSet<T>>;

            fn $method(self, rhs: T) -> Self::Output {
                self.combine($op, Operand::Scalar(rhs))
            }
        }
    )*};
}

impl_binary_ops!(
    (Add, add, BinaryOp::Add),
    (Sub, sub, BinaryOp::Sub),
    (Mul, mul, BinaryOp::Mul),
    (Div, div, BinaryOp::Div),
    (Rem, rem, BinaryOp::Rem),
    (BitAnd, bitand, BinaryOp::BitAnd),
    (BitOr, bitor, BinaryOp::BitOr),
    (BitXor, bitxor, BinaryOp::BitXor),
);

/// Escalar à esquerda (`7 % &set`), um tipo primitivo por vez
macro_rules! impl_scalar_lhs_ops {
    (@each $t:ty, $(($trait:ident, $method:ident, $op:expr)),*) => {$(
        impl<'b> std::ops::$trait<&'b SuperpositionSet<$t>> for $t {
            type Output = SuperpositionResult<SuperpositionSet<$t>>;

            fn $method(self, rhs: &'b SuperpositionSet<$t>) -> Self::Output {
                SuperpositionSet::scalar_combine(self, $op, rhs)
            }
        }
    )*};
    ($($t:ty),* $(,)?) => {$(
        impl_scalar_lhs_ops!(@each $t,
            (Add, add, BinaryOp::Add),
            (Sub, sub, BinaryOp::Sub),
            (Mul, mul, BinaryOp::Mul),
            (Div, div, BinaryOp::Div),
            (Rem, rem, BinaryOp::Rem)
        );
    )*};
}

impl_scalar_lhs_ops!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T: Element> std::ops::Neg for &SuperpositionSet<T> {
    type Output = SuperpositionResult<SuperpositionSet<T>>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<T: Element> std::ops::Shl<u32> for &SuperpositionSet<T> {
    type Output = SuperpositionResult<SuperpositionSet<T>>;

    fn shl(self, count: u32) -> Self::Output {
        self.shift(ShiftOp::Left, count)
    }
}

impl<T: Element> std::ops::Shr<u32> for &SuperpositionSet<T> {
    type Output = SuperpositionResult<SuperpositionSet<T>>;

    fn shr(self, count: u32) -> Self::Output {
        self.shift(ShiftOp::Right, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[i32]) -> SuperpositionSet<i32> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_cross_product_sizes_multiply() {
        let a = set(&[1, 10]);
        let b = set(&[100, 200, 300]);
        let sum = (&a + &b).unwrap();
        assert_eq!(sum.elements(), &[101, 201, 301, 110, 210, 310]);
    }

    #[test]
    fn test_cross_product_dedups() {
        let a = set(&[1, 2]);
        let b = set(&[2, 1]);
        let sum = a.combine(BinaryOp::Add, &b).unwrap();
        // 3, 2, 4, 3
        assert_eq!(sum.elements(), &[3, 2, 4]);
    }

    #[test]
    fn test_result_takes_left_quantifier() {
        let a = set(&[1, 2]).quantify_any();
        let b = set(&[3]);
        let product = (&a * &b).unwrap();
        assert_eq!(product.quantifier(), Some(Quantifier::Disjunctive));

        let product = (&b * &a).unwrap();
        assert_eq!(product.quantifier(), Some(Quantifier::Conjunctive));
    }

    #[test]
    fn test_scalar_both_sides() {
        let a = set(&[2, 3, 4]).quantify_any();
        let right = (&a % 3).unwrap();
        assert_eq!(right.elements(), &[2, 0, 1]);

        let left = (10 % &a).unwrap();
        assert_eq!(left.elements(), &[0, 1, 2]);
        assert_eq!(left.quantifier(), Some(Quantifier::Disjunctive));

        let left = (12 / &a).unwrap();
        assert_eq!(left.elements(), &[6, 4, 3]);
    }

    #[test]
    fn test_operands_are_not_mutated() {
        let a = set(&[1, 2]);
        let b = set(&[5]);
        let _ = (&a - &b).unwrap();
        assert_eq!(a.elements(), &[1, 2]);
        assert_eq!(b.elements(), &[5]);
    }

    #[test]
    fn test_unary_ops() {
        let a = set(&[0, 1, 5]);
        assert_eq!((-&a).unwrap().elements(), &[0, -1, -5]);
        assert_eq!(a.logical_not().unwrap().elements(), &[1, 0]);
        assert_eq!(a.increment().unwrap().elements(), &[1, 2, 6]);
        assert_eq!(a.decrement().unwrap().elements(), &[-1, 0, 4]);
        assert_eq!(a.complement().unwrap().elements(), &[-1, -2, -6]);
        assert_eq!(a.floor().unwrap(), a);
    }

    #[test]
    fn test_floor_on_floats() {
        let q: SuperpositionSet<f64> = [2.5, 2.75, 3.0].into_iter().collect();
        assert_eq!(q.floor().unwrap().elements(), &[2.0, 3.0]);
    }

    #[test]
    fn test_shift_ops() {
        let a = set(&[1, 2, 3]);
        assert_eq!((&a << 2).unwrap().elements(), &[4, 8, 12]);
        assert_eq!((&a >> 1).unwrap().elements(), &[0, 1]);
        assert!(matches!(
            a.shl(40),
            Err(SuperpositionError::Arithmetic { .. })
        ));
    }

    #[test]
    fn test_bitwise_and_logical() {
        let a = set(&[0b110, 0b011]);
        assert_eq!((&a & 0b010).unwrap().elements(), &[0b010]);
        assert_eq!((&a | &set(&[1])).unwrap().elements(), &[0b111, 0b011]);
        assert_eq!((&a ^ 0b001).unwrap().elements(), &[0b111, 0b010]);
        assert_eq!(a.logical_and(0).unwrap().elements(), &[0]);
        assert_eq!(a.logical_or(&set(&[0])).unwrap().elements(), &[1]);
    }

    #[test]
    fn test_bitwise_unsupported_for_floats() {
        let a: SuperpositionSet<f64> = [1.0].into_iter().collect();
        assert_eq!(
            a.combine(BinaryOp::BitAnd, 1.0),
            Err(SuperpositionError::Unsupported { operation: "&".into() })
        );
        assert!(matches!(a.shl(1), Err(SuperpositionError::Unsupported { .. })));
        assert!(matches!(a.complement(), Err(SuperpositionError::Unsupported { .. })));
    }

    #[test]
    fn test_division_by_zero_is_an_error() {
        let a = set(&[4, 8]);
        let err = (&a / 0).unwrap_err();
        assert_eq!(
            err,
            SuperpositionError::Arithmetic {
                operation: "/".into(),
                lhs: "4".into(),
                rhs: "0".into(),
            }
        );
        assert!((&a % &set(&[2, 0])).is_err());
    }

    #[test]
    fn test_collapsed_operand_refused() {
        let live = set(&[1, 2]);
        let collapsed: SuperpositionSet<i32> =
            SuperpositionSet::collapsed(true, vec![1], Quantifier::Conjunctive);

        for result in [
            &live + &collapsed,
            &collapsed + &live,
            &collapsed + 1,
            3 - &collapsed,
            collapsed.increment(),
            &collapsed << 1,
        ] {
            assert!(matches!(result, Err(SuperpositionError::CollapsedOperand { .. })));
        }
    }

    #[test]
    fn test_empty_operands() {
        let empty = SuperpositionSet::<i32>::with_quantifier(Quantifier::Disjunctive);
        let a = set(&[1, 2]);
        let result = (&empty * &a).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.quantifier(), Some(Quantifier::Disjunctive));
        assert!((&a + &empty).unwrap().is_empty());
    }

    #[test]
    fn test_combine_assign() {
        let mut a = set(&[1, 2]);
        a.combine_assign(BinaryOp::Mul, 10).unwrap();
        assert_eq!(a.elements(), &[10, 20]);

        let before = a.clone();
        assert!(a.combine_assign(BinaryOp::Div, 0).is_err());
        assert_eq!(a, before);
    }
}
