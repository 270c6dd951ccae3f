//! Tipo de elemento de uma superposição
//!
//! Cada entrada da tabela de operadores é uma operação primitiva falível:
//! inteiros usam aritmética checada, floats rejeitam NaN e não têm
//! operações de bits. `None` vira erro explícito no motor, nunca pânico.

use num_traits::{Num, NumCast};
use std::fmt;

/// Valor numérico ordenado que pode habitar uma superposição
pub trait Element: Copy + PartialOrd + Num + NumCast + fmt::Debug + fmt::Display + 'static {
    /// Tipo suporta `& | ^ ~ << >>`
    const SUPPORTS_BITS: bool;

    fn try_add(self, rhs: Self) -> Option<Self>;
    fn try_sub(self, rhs: Self) -> Option<Self>;
    fn try_mul(self, rhs: Self) -> Option<Self>;
    fn try_div(self, rhs: Self) -> Option<Self>;
    fn try_rem(self, rhs: Self) -> Option<Self>;
    fn try_neg(self) -> Option<Self>;

    fn try_bitand(self, rhs: Self) -> Option<Self>;
    fn try_bitor(self, rhs: Self) -> Option<Self>;
    fn try_bitxor(self, rhs: Self) -> Option<Self>;
    fn try_complement(self) -> Option<Self>;
    fn try_shl(self, count: u32) -> Option<Self>;
    fn try_shr(self, count: u32) -> Option<Self>;

    /// Converte para valor integral (trunca em direção a zero)
    fn truncate(self) -> Self;

    /// Valor lógico: qualquer coisa diferente de zero
    fn is_truthy(self) -> bool {
        self != Self::zero()
    }

    /// `1` para verdadeiro, `0` para falso
    fn from_bool(value: bool) -> Self {
        if value { Self::one() } else { Self::zero() }
    }
}

macro_rules! impl_integer_element {
    ($($t:ty),* $(,)?) => {$(
        impl Element for $t {
            const SUPPORTS_BITS: bool = true;

            fn try_add(self, rhs: Self) -> Option<Self> { self.checked_add(rhs) }
            fn try_sub(self, rhs: Self) -> Option<Self> { self.checked_sub(rhs) }
            fn try_mul(self, rhs: Self) -> Option<Self> { self.checked_mul(rhs) }
            fn try_div(self, rhs: Self) -> Option<Self> { self.checked_div(rhs) }
            fn try_rem(self, rhs: Self) -> Option<Self> { self.checked_rem(rhs) }
            fn try_neg(self) -> Option<Self> { self.checked_neg() }

            fn try_bitand(self, rhs: Self) -> Option<Self> { Some(self & rhs) }
            fn try_bitor(self, rhs: Self) -> Option<Self> { Some(self | rhs) }
            fn try_bitxor(self, rhs: Self) -> Option<Self> { Some(self ^ rhs) }
            fn try_complement(self) -> Option<Self> { Some(!self) }
            fn try_shl(self, count: u32) -> Option<Self> { self.checked_shl(count) }
            fn try_shr(self, count: u32) -> Option<Self> { self.checked_shr(count) }

            fn truncate(self) -> Self { self }
        }
    )*};
}

macro_rules! impl_float_element {
    ($($t:ty),* $(,)?) => {$(
        impl Element for $t {
            const SUPPORTS_BITS: bool = false;

            fn try_add(self, rhs: Self) -> Option<Self> { non_nan(self + rhs) }
            fn try_sub(self, rhs: Self) -> Option<Self> { non_nan(self - rhs) }
            fn try_mul(self, rhs: Self) -> Option<Self> { non_nan(self * rhs) }
            fn try_div(self, rhs: Self) -> Option<Self> { non_nan(self / rhs) }
            fn try_rem(self, rhs: Self) -> Option<Self> { non_nan(self % rhs) }
            fn try_neg(self) -> Option<Self> { non_nan(-self) }

            fn try_bitand(self, _rhs: Self) -> Option<Self> { None }
            fn try_bitor(self, _rhs: Self) -> Option<Self> { None }
            fn try_bitxor(self, _rhs: Self) -> Option<Self> { None }
            fn try_complement(self) -> Option<Self> { None }
            fn try_shl(self, _count: u32) -> Option<Self> { None }
            fn try_shr(self, _count: u32) -> Option<Self> { None }

            fn truncate(self) -> Self { self.trunc() }
        }
    )*};
}

impl_integer_element!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_element!(f32, f64);

// NaN quebra a deduplicação por igualdade
#[inline]
fn non_nan<F: num_traits::Float>(value: F) -> Option<F> {
    if value.is_nan() { None } else { Some(value) }
}
