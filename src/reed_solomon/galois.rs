//! Galois Field GF(2^8) arithmetic for the erasure coder
//!
//! ## Characteristic Polynomial
//!
//! The field is built over **0x11D** (x⁸ + x⁴ + x³ + x² + 1), with the element
//! `2` as the generator of the multiplicative group. Addition and subtraction
//! are XOR; multiplication and inversion are table lookups through the
//! discrete log/exp tables.
//!
//! ## Tables
//!
//! - `exp[i]` = 2^i for i in 0..255
//! - `log[a]` = discrete log of a nonzero `a`
//! - `inv[a]` = multiplicative inverse of a nonzero `a`, `inv[0] = 0`
//!
//! The tables are seeded once with [`carryless_multiply`], the slow
//! shift-and-XOR multiply followed by polynomial reduction. Everything at
//! runtime goes through [`GaloisField::multiply`].
//!
//! The whole field is under a kilobyte and `Copy`, so coders own their own copy.
//! A process-wide instance is available through [`galois_field`].

use super::error::{CodingError, Result};
use std::sync::OnceLock;

/// GF(2^8) characteristic polynomial: 0x11D (x⁸ + x⁴ + x³ + x² + 1)
pub const GF8_POLYNOMIAL: u16 = 0x11D;

/// Generator of the multiplicative group
pub const GENERATOR: u8 = 2;

/// Order of the multiplicative group
const ORDER: usize = 255;

/// Multiply two field elements the hard way: carry-less multiplication of
/// the operands as polynomials over GF(2), then reduction modulo `polynomial`.
///
/// Only used to seed the log/exp tables.
pub fn carryless_multiply(a: u8, b: u8, polynomial: u16) -> u8 {
    let mut a = a as u16;
    let mut b = b as u16;
    let mut product = 0u16;

    // multiplication in Z_2[x]
    while a != 0 {
        if a & 1 != 0 {
            product ^= b;
        }
        b <<= 1;
        a >>= 1;
    }

    // reduce the up-to-15-bit product modulo the polynomial
    let mut modulus = polynomial << 7;
    let mut bit = 1u16 << 15;
    while bit >= 1 << 8 {
        if product & bit != 0 {
            product ^= modulus;
        }
        modulus >>= 1;
        bit >>= 1;
    }

    product as u8
}

/// Precomputed log, exp and inverse tables for GF(2^8)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaloisField {
    polynomial: u16,
    exp: [u8; ORDER],
    log: [u8; 256],
    inv: [u8; 256],
}

impl Default for GaloisField {
    fn default() -> Self {
        Self::new()
    }
}

impl GaloisField {
    /// Create the field over the standard polynomial 0x11D
    pub fn new() -> Self {
        Self::build_tables(GF8_POLYNOMIAL)
    }

    /// Create a field over an alternative degree-8 characteristic polynomial.
    ///
    /// The polynomial must have bit 8 and bit 0 set, and `2` must generate
    /// all 255 nonzero elements modulo it.
    pub fn with_polynomial(polynomial: u16) -> Result<Self> {
        if polynomial >> 8 != 1 || polynomial & 1 == 0 {
            return Err(CodingError::InvalidPolynomial(polynomial));
        }

        let field = Self::build_tables(polynomial);
        let order = field.generator_order();
        if order != ORDER {
            return Err(CodingError::NonPrimitivePolynomial { polynomial, order });
        }
        Ok(field)
    }

    fn build_tables(polynomial: u16) -> Self {
        let mut field = GaloisField {
            polynomial,
            exp: [0; ORDER],
            log: [0; 256],
            inv: [0; 256],
        };

        let mut a = 1u8;
        for i in 0..ORDER {
            field.exp[i] = a;
            field.log[a as usize] = i as u8;
            a = carryless_multiply(a, GENERATOR, polynomial);
        }

        // inv[0] stays 0; it is never a legal divisor
        for a in 1..256 {
            let log = field.log[a] as usize;
            let idx = if log == 0 { 0 } else { ORDER - log };
            field.inv[a] = field.exp[idx];
        }

        field
    }

    /// Smallest i > 0 with 2^i == 1, capped at the table size
    fn generator_order(&self) -> usize {
        self.exp
            .iter()
            .skip(1)
            .position(|&e| e == 1)
            .map_or(ORDER, |p| p + 1)
    }

    /// The characteristic polynomial as a 9-bit value
    pub fn polynomial(&self) -> u16 {
        self.polynomial
    }

    /// 2^i, with i reduced modulo 255
    #[inline]
    pub fn exp(&self, i: usize) -> u8 {
        self.exp[i % ORDER]
    }

    /// Discrete log of `a`. `log(0)` is meaningless and returns 0.
    #[inline]
    pub fn log(&self, a: u8) -> u8 {
        self.log[a as usize]
    }

    /// Table inverse of `a`, with `inv(0) == 0`
    #[inline]
    pub fn inv(&self, a: u8) -> u8 {
        self.inv[a as usize]
    }

    /// Add two elements - this is just XOR
    #[inline]
    pub fn add(&self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// Subtract two elements - same as addition
    #[inline]
    pub fn sub(&self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    /// Multiply two elements
    #[inline]
    pub fn multiply(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }

        // two logs in [0, 254] never sum past 508
        let mut idx = self.log[a as usize] as usize + self.log[b as usize] as usize;
        if idx >= ORDER {
            idx -= ORDER;
        }
        self.exp[idx]
    }

    /// Multiplicative inverse of a nonzero element
    ///
    /// # Panics
    /// Panics if `a` is zero.
    #[inline]
    pub fn inverse(&self, a: u8) -> u8 {
        if a == 0 {
            panic!("Cannot invert zero in Galois Field");
        }
        self.inv[a as usize]
    }

    /// Multiplicative inverse, or `None` for zero
    #[inline]
    pub fn checked_inverse(&self, a: u8) -> Option<u8> {
        (a != 0).then(|| self.inv[a as usize])
    }

    /// Divide `a` by a nonzero `b`
    ///
    /// # Panics
    /// Panics if `b` is zero.
    #[inline]
    pub fn divide(&self, a: u8, b: u8) -> u8 {
        self.multiply(a, self.inverse(b))
    }

    /// Raise an element to a power
    pub fn pow(&self, base: u8, exponent: u32) -> u8 {
        if exponent == 0 {
            return 1;
        }
        if base == 0 {
            return 0;
        }
        let log = self.log[base as usize] as u64;
        self.exp[((log * exponent as u64) % ORDER as u64) as usize]
    }

    /// Full product table `table[x] = coefficient * x`
    pub fn mul_table(&self, coefficient: u8) -> [u8; 256] {
        let mut table = [0u8; 256];
        if coefficient == 0 {
            return table;
        }
        for (x, entry) in table.iter_mut().enumerate().skip(1) {
            *entry = self.multiply(coefficient, x as u8);
        }
        table
    }
}

/// Global GF(2^8) instance over 0x11D
static GALOIS_FIELD: OnceLock<GaloisField> = OnceLock::new();

/// Get the global Galois Field instance
pub fn galois_field() -> &'static GaloisField {
    GALOIS_FIELD.get_or_init(GaloisField::new)
}

/// Convenience functions using the global Galois Field
#[inline]
pub fn gf_add(a: u8, b: u8) -> u8 {
    galois_field().add(a, b)
}

#[inline]
pub fn gf_mul(a: u8, b: u8) -> u8 {
    galois_field().multiply(a, b)
}

#[inline]
pub fn gf_inverse(a: u8) -> u8 {
    galois_field().inverse(a)
}
