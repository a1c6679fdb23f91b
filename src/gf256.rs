//! Arithmetic in GF(2^8), the finite field Shamir splitting runs over.
//!
//! The field is defined by the irreducible polynomial `x^8 + x^4 + x^3 + x + 1`
//! (0x11B) with primitive element 3. Addition and subtraction are XOR;
//! multiplication and division go through precomputed log/exp tables so the
//! hot per-byte loop in [`crate::shamir`] never touches the carry-heavy
//! polynomial multiply directly.

use crate::error::Error;
use std::sync::OnceLock;

const POLYNOMIAL: u16 = 0x11b;
const PRIMITIVE: u8 = 3;

/// Precomputed log/exp tables for GF(256).
///
/// `exp[i] = 3^i` for `i` in `0..=254`, with `exp[255]` set equal to `exp[0]`
/// as a wrap guard so callers never have to special-case the modulus.
/// `log[exp[i]] = i` for `i` in `0..=254`; `log[0]` is never read.
pub(crate) struct Tables {
    exp: [u8; 256],
    log: [u8; 256],
}

fn mul_basic(mut a: u16, mut b: u16) -> u8 {
    let mut result: u16 = 0;
    while b != 0 {
        if b & 1 != 0 {
            result ^= a;
        }
        a <<= 1;
        if a & 0x100 != 0 {
            a ^= POLYNOMIAL;
        }
        b >>= 1;
    }
    (result & 0xff) as u8
}

impl Tables {
    fn build() -> Self {
        let mut exp = [0u8; 256];
        let mut log = [0u8; 256];

        let mut x: u16 = 1;
        for i in 0..255usize {
            exp[i] = x as u8;
            log[x as usize] = i as u8;
            x = mul_basic(x, PRIMITIVE as u16) as u16;
        }
        exp[255] = exp[0];

        Tables { exp, log }
    }

    /// Multiply two field elements.
    pub(crate) fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let sum = self.log[a as usize] as u16 + self.log[b as usize] as u16;
        self.exp[(sum % 255) as usize]
    }

    /// Divide `a` by `b`. Fails with [`Error::DivByZero`] when `b == 0`.
    pub(crate) fn div(&self, a: u8, b: u8) -> Result<u8, Error> {
        if b == 0 {
            return Err(Error::DivByZero);
        }
        if a == 0 {
            return Ok(0);
        }
        let la = self.log[a as usize] as i32;
        let lb = self.log[b as usize] as i32;
        let diff = ((la - lb) % 255 + 255) % 255;
        Ok(self.exp[diff as usize])
    }

    /// Evaluate a polynomial at `x` via Horner's method.
    ///
    /// `coeffs[0]` is the constant term; the remaining entries are the
    /// coefficients of increasing degree. Addition is XOR.
    pub(crate) fn poly_eval(&self, coeffs: &[u8], x: u8) -> u8 {
        let mut result = 0u8;
        for &coeff in coeffs.iter().rev() {
            result = self.mul(result, x) ^ coeff;
        }
        result
    }

    /// Lagrange interpolation at x = 0, recovering the constant term of the
    /// polynomial that passes through `points`.
    ///
    /// Fails with [`Error::DuplicateX`] if two points share an x-coordinate.
    pub(crate) fn lagrange_at_zero(&self, points: &[(u8, u8)]) -> Result<u8, Error> {
        let mut result = 0u8;
        for (i, &(xi, yi)) in points.iter().enumerate() {
            let mut basis = 1u8;
            for (j, &(xj, _)) in points.iter().enumerate() {
                if i == j {
                    continue;
                }
                if xi == xj {
                    return Err(Error::DuplicateX(xi as u32));
                }
                // at x = 0, the numerator factor (0 ^ xj) simplifies to xj.
                let term = self.div(xj, xi ^ xj)?;
                basis = self.mul(basis, term);
            }
            result ^= self.mul(yi, basis);
        }
        Ok(result)
    }
}

static TABLES: OnceLock<Tables> = OnceLock::new();

/// Get the process-wide GF(256) tables, building them on first use.
pub(crate) fn tables() -> &'static Tables {
    TABLES.get_or_init(Tables::build)
}
