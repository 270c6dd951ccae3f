//! # qubit-samples: Teoria dos Números por Superposição
//!
//! Funções clientes escritas apenas com os operadores públicos de
//! `qubit-superposition`: os candidatos a divisor nunca são percorridos à mão,
//! apenas quantificados, combinados elemento a elemento e colapsados.
//!
//! | Função     | Expressão                                        |
//! |------------|--------------------------------------------------|
//! | `min`      | `eigenstates(any(S) <= all(S))`                  |
//! | `max`      | `eigenstates(any(S) >= all(S))`                  |
//! | `is_prime` | `n == 2 \|\| n % all(2..=√n+1) != 0`             |
//! | `factors`  | `q = n / any(2..n-1); eigenstates(floor(q) == q)`|
//! | `gcd`      | `max(all(divisores(a), divisores(b)))`           |

use qubit_superposition::{Element, SuperpositionResult, SuperpositionSet};
use tracing::debug;

/// Menores elementos: os que são `<=` a todos
pub fn min<T: Element>(set: &SuperpositionSet<T>) -> SuperpositionResult<SuperpositionSet<T>> {
    Ok(set.quantify_any().le(&set.quantify_all())?.eigenstates())
}

/// Maiores elementos: os que são `>=` a todos
pub fn max<T: Element>(set: &SuperpositionSet<T>) -> SuperpositionResult<SuperpositionSet<T>> {
    Ok(set.quantify_any().ge(&set.quantify_all())?.eigenstates())
}

/// Primalidade: nenhum resto nulo contra todos os candidatos até √n + 1
pub fn is_prime(n: i64) -> SuperpositionResult<bool> {
    if n == 2 {
        return Ok(true);
    }
    if n < 2 {
        return Ok(false);
    }

    let bound = (n as f64).sqrt() as i64 + 1;
    let divisors = SuperpositionSet::range(2, bound, 1)?.quantify_all();
    let remainders = (n % &divisors)?;
    Ok(remainders.not_equals(0)?.bool_result())
}

/// Primos em `2..=limit`
pub fn primes_up_to(limit: i64) -> SuperpositionResult<SuperpositionSet<i64>> {
    let mut primes = SuperpositionSet::new();
    for n in 2..=limit {
        if is_prime(n)? {
            primes.insert(n);
        }
    }
    Ok(primes)
}

/// Fatores próprios de `n` (exclui 1 e o próprio `n`), em ordem decrescente
///
/// Os quocientes `n / d` que são inteiros são exatamente os fatores.
pub fn factors(n: u64) -> SuperpositionResult<SuperpositionSet<f64>> {
    if n < 3 {
        return Ok(SuperpositionSet::new());
    }

    let value = n as f64;
    let candidates = SuperpositionSet::range(2.0, value - 1.0, 1.0)?.quantify_any();
    let quotients = (value / &candidates)?;
    let integral = quotients.floor()?.equals(&quotients)?;
    debug!(n, factors = integral.eigenstates().len(), "factorised");
    Ok(integral.eigenstates())
}

/// Divisores de `n` maiores que 1, incluindo o próprio `n`
fn divisors(n: u64) -> SuperpositionResult<SuperpositionSet<f64>> {
    let mut set = factors(n)?;
    set.insert(n as f64);
    Ok(set)
}

/// Máximo divisor comum pela interseção dos divisores
pub fn gcd(a: u64, b: u64) -> SuperpositionResult<u64> {
    if a == 0 || b == 0 {
        return Ok(a.max(b));
    }

    let common = SuperpositionSet::intersect_of(&divisors(a)?, &divisors(b)?);
    let greatest = max(&common)?;
    Ok(greatest.get(0).map(|g| g as u64).unwrap_or(1))
}
