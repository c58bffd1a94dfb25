//! # BigInt
//! Immutable arbitrary-precision signed integers. Every operator, unary or
//! binary, produces a fresh `BigInt`; operands are never mutated.
//! # Example
//! ```
//! use big_int::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "900000000000".parse().unwrap();
//! assert_eq!(&a + &b, "10900000000000".parse().unwrap());
//! assert_eq!(&a / &b, BigInt::from(11));
//! ```

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::big_int_cache::*;
use crate::error::BigIntError;
use crate::limb::{Limb, HALF_BITS, HALF_MASK};

pub const ZERO: BigInt = BigInt { neg: false, mag: Vec::new() };

/// An arbitrary-precision signed integer.
///
/// The magnitude is a sequence of half-width limbs, least-significant limb
/// first, with no trailing zero limb. Zero is the empty sequence and is
/// never negative, so structural equality of `(neg, mag)` is numeric
/// equality.
#[derive(Debug, Clone)]
pub struct BigInt {
    neg: bool,
    mag: Vec<Limb>,
}

// construction from sign and magnitude
impl BigInt {
    /// Canonicalizing factory: trims trailing zero limbs and clears the
    /// sign of zero. Every magnitude in the crate passes through here.
    pub(crate) fn from_parts(neg: bool, mut mag: Vec<Limb>) -> BigInt {
        while mag.last() == Some(&0) {
            mag.pop();
        }
        let neg = if mag.is_empty() { false } else { neg };
        BigInt { neg, mag }
    }

    pub fn is_zero(&self) -> bool {
        self.mag.is_empty()
    }

    pub fn abs(&self) -> BigInt {
        BigInt { neg: false, mag: self.mag.clone() }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        ZERO
    }
}

// construction from builtin integral types
impl BigInt {
    fn value_of(neg: bool, val: u128) -> BigInt {
        if val == 0 {
            return ZERO;
        }
        if val <= MAX_CONSTANT as u128 {
            if neg {
                return NEG_CACHE[val as usize].clone();
            }
            return POS_CACHE[val as usize].clone();
        }
        let mut val = val;
        let mut mag = Vec::new();
        while val > 0 {
            mag.push(val as Limb & HALF_MASK);
            val >>= HALF_BITS;
        }
        BigInt::from_parts(neg, mag)
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(false, val as u128)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::value_of(val < 0, val.unsigned_abs() as u128)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64, u128);
impl_signed_to_big_int!(i8, i16, i32, isize, i64, i128);

// construction from decimal strings
impl FromStr for BigInt {
    type Err = BigIntError;

    /// Accepts an optional leading `-` followed by one or more decimal
    /// digits. Digits are folded least-significant first:
    /// `value += digit * power; power *= 10`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let neg = s.starts_with('-');
        let digits = if neg { &s[1..] } else { s };
        if digits.is_empty() {
            return Err(BigIntError::InvalidArgument(s.to_string()));
        }

        let ten: &BigInt = &TEN;
        let mut value = ZERO;
        let mut power = BigInt::from(1_u32);
        for ch in digits.chars().rev() {
            let digit = ch
                .to_digit(10)
                .ok_or_else(|| BigIntError::InvalidArgument(s.to_string()))?;
            value = &value + &(&BigInt::from(digit) * &power);
            power = &power * ten;
        }

        Ok(if neg { -value } else { value })
    }
}

// comparison
impl BigInt {
    /// Compares magnitudes only: the longer canonical sequence is larger,
    /// equal lengths compare limbs from most-significant down.
    fn compare_mag(&self, other: &BigInt) -> Ordering {
        match self.mag.len().cmp(&other.mag.len()) {
            Ordering::Equal => {}
            ord => return ord,
        }
        for (a, b) in self.mag.iter().rev().zip(other.mag.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }
        Ordering::Equal
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.neg == other.neg && self.mag == other.mag
    }
}
impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.neg, other.neg) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.compare_mag(other),
            // both negative: a >= b  <=>  -b >= -a
            (true, true) => other.compare_mag(self),
        }
    }
}

// unsigned magnitude kernels
impl BigInt {
    /// Limb-wise sum; `x` must be at least as long as `y`. Carries ride in
    /// the upper half of the limb and are masked back out before storage.
    fn add_mag(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
        debug_assert!(x.len() >= y.len());

        let mut result = x.to_vec();
        let mut carry: Limb = 0;
        for idx in 0..y.len() {
            carry += result[idx] + y[idx];
            result[idx] = carry & HALF_MASK;
            carry >>= HALF_BITS;
        }

        // the carry may keep rippling after y is depleted
        let mut idx = y.len();
        while carry != 0 && idx < result.len() {
            carry += result[idx];
            result[idx] = carry & HALF_MASK;
            carry >>= HALF_BITS;
            idx += 1;
        }
        if carry != 0 {
            result.push(carry);
        }

        result
    }

    /// Limb-wise difference. Callers order the operands so that `x` holds
    /// the larger magnitude; this kernel only debug-asserts it. The result
    /// may carry trailing zero limbs.
    fn sub_mag(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
        debug_assert!(x.len() >= y.len());

        let mut result = x.to_vec();
        let mut borrow: Limb = 0;
        for idx in 0..y.len() {
            let d = y[idx] + borrow;
            if result[idx] < d {
                result[idx] += HALF_MASK + 1 - d;
                borrow = 1;
            } else {
                result[idx] -= d;
                borrow = 0;
            }
        }

        let mut idx = y.len();
        while borrow != 0 {
            debug_assert!(idx < result.len(), "subtrahend magnitude exceeds minuend");
            if result[idx] == 0 {
                result[idx] = HALF_MASK;
            } else {
                result[idx] -= 1;
                borrow = 0;
            }
            idx += 1;
        }

        result
    }
}

// addition
impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> Self::Output {
        if rhs.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return rhs.clone();
        }

        if self.neg == rhs.neg {
            let mag = if self.mag.len() >= rhs.mag.len() {
                BigInt::add_mag(&self.mag, &rhs.mag)
            } else {
                BigInt::add_mag(&rhs.mag, &self.mag)
            };
            return BigInt::from_parts(self.neg, mag);
        }

        // opposite signs: the larger magnitude is the minuend and decides
        // the sign, which keeps sub_mag's precondition satisfied
        match self.compare_mag(rhs) {
            Ordering::Less => BigInt::from_parts(rhs.neg, BigInt::sub_mag(&rhs.mag, &self.mag)),
            Ordering::Equal => ZERO,
            Ordering::Greater => BigInt::from_parts(self.neg, BigInt::sub_mag(&self.mag, &rhs.mag)),
        }
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, rhs: Self) {
        *self = &*self + &rhs;
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        *self = &*self + rhs;
    }
}

// negation
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        let BigInt { neg, mag } = self;
        BigInt::from_parts(!neg, mag)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// subtraction, defined as a + (-b)
impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> Self::Output {
        self + &(-rhs)
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: Self) -> Self::Output {
        &self + &(-rhs)
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, rhs: Self) {
        *self = &*self + &(-rhs);
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        *self = &*self + &(-rhs);
    }
}

// multiplication
impl Mul for &BigInt {
    type Output = BigInt;

    /// Schoolbook multiply: every pairwise limb product is split into a
    /// positioned low/high limb pair and folded into the accumulator with
    /// the additive kernel.
    fn mul(self, rhs: &BigInt) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return ZERO;
        }

        let mut acc: Vec<Limb> = Vec::new();
        for (i, &a) in self.mag.iter().enumerate() {
            for (j, &b) in rhs.mag.iter().enumerate() {
                // half-width limbs: the product fits the storage type
                let product = a * b;
                let mut part = vec![0; i + j];
                part.push(product & HALF_MASK);
                let high = product >> HALF_BITS;
                if high != 0 {
                    part.push(high);
                }
                acc = if acc.len() >= part.len() {
                    BigInt::add_mag(&acc, &part)
                } else {
                    BigInt::add_mag(&part, &acc)
                };
            }
        }

        BigInt::from_parts(self.neg != rhs.neg, acc)
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl MulAssign for BigInt {
    fn mul_assign(&mut self, rhs: Self) {
        *self = &*self * &rhs;
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = &*self * rhs;
    }
}

// division
impl BigInt {
    /// Quotient truncated toward zero, or [`BigIntError::DivisionByZero`]
    /// on a zero divisor.
    pub fn try_div(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        if rhs.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        let quotient = BigInt::div_mag(self.abs(), &rhs.abs());
        Ok(BigInt::from_parts(self.neg != rhs.neg, quotient.mag))
    }

    /// Quotient of two non-negative values. Each round estimates one
    /// super-limb of quotient from the two most-significant remainder limbs
    /// over `(most-significant divisor limb + 1)`; the `+1` keeps the
    /// estimate a lower bound, so the subtraction below never underflows
    /// and the remainder strictly shrinks.
    fn div_mag(mut rem: BigInt, div: &BigInt) -> BigInt {
        let mut quotient = ZERO;

        while div.compare_mag(&rem) != Ordering::Greater {
            let rem_len = rem.mag.len();
            let div_len = div.mag.len();

            if rem_len == 1 {
                // the loop guard leaves div with a single limb here as well
                let q = rem.mag[0] / div.mag[0];
                return &quotient + &BigInt::from(q);
            }

            // two leading limbs of the remainder against one of the divisor
            let head = (rem.mag[rem_len - 1] << HALF_BITS) | rem.mag[rem_len - 2];
            let estimate = head / (div.mag[div_len - 1] + 1);

            // shift the estimate into its digit position; with equal limb
            // counts the low half falls off the end
            let len = rem_len - div_len + 1;
            let mut part = vec![0; len];
            part[len - 1] = estimate >> HALF_BITS;
            if len > 1 {
                part[len - 2] = estimate & HALF_MASK;
            }
            let mut partial = BigInt::from_parts(false, part);

            // rem >= div, so the true quotient is at least one; clamping
            // keeps the loop advancing when the shifted estimate rounds to
            // zero
            if partial.is_zero() {
                partial = BigInt::from(1_u32);
            }

            quotient = &quotient + &partial;
            rem = &rem - &(div * &partial);
        }

        quotient
    }
}

impl Div for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: &BigInt) -> Self::Output {
        match self.try_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Div for BigInt {
    type Output = BigInt;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl DivAssign for BigInt {
    fn div_assign(&mut self, rhs: Self) {
        *self = &*self / &rhs;
    }
}

impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) {
        *self = &*self / rhs;
    }
}

#[cfg(test)]
fn sample_values() -> Vec<BigInt> {
    [
        "0",
        "1",
        "-1",
        "16",
        "17",
        "-17",
        "65535",
        "65536",
        "812345",
        "-812345",
        "69232346342343406",
        "-69232346342343406",
        "18446744073709551616",
        "4537141817592417305560",
        "-4537141817592417305560",
    ]
    .iter()
    .map(|s| s.parse().unwrap())
    .collect()
}

#[test]
fn test_eq() {
    let i = BigInt::default();
    assert_eq!(i, BigInt::from(0));
    assert_ne!(i, BigInt::from(1));
    assert_ne!(i, BigInt::from(-1));

    let i = BigInt::from(10_u32);
    assert_eq!(i, BigInt::from(10));
    assert_ne!(i, BigInt::from(-10));
    assert_ne!(i, BigInt::from(0));

    let n: i128 = -89368532769232346342343406;
    let i = BigInt::from(n);
    assert_eq!(i, BigInt::from(n));
    assert_ne!(i, BigInt::from(-n));
    assert_ne!(i, BigInt::from(0));
}

#[test]
fn test_from() {
    let big = BigInt::from(12_i8);
    assert_eq!(big.mag, vec![12]);
    assert!(!big.neg);

    let big = BigInt::from(-100_i16);
    assert_eq!(big.mag, vec![100]);
    assert!(big.neg);

    // every limb stays in the low half of its storage
    let big = BigInt::from(u128::MAX);
    assert_eq!(big.mag.len() as u32 * HALF_BITS, 128);
    assert!(big.mag.iter().all(|limb| *limb <= HALF_MASK));

    assert_eq!(BigInt::from(i64::MIN), -(BigInt::from(i64::MAX) + BigInt::from(1)));
    assert_eq!(BigInt::from(i128::MIN), -(BigInt::from(i128::MAX) + BigInt::from(1)));
}

#[test]
fn test_cmp() {
    let i1 = BigInt::from(100);
    let i2 = BigInt::from(99);
    let i3 = BigInt::from(-100);
    let i4 = BigInt::from(-99);

    assert!(i1 >= i2);
    assert!(i2 <= i2);
    assert!(i1 >= i3);
    assert!(i1 >= i4);
    assert!(i2 >= i4);
    assert!(i3 <= i1);
    assert!(i4 <= i2);
    assert!(i4 >= i3);
    assert!(i3 <= i4);
    assert!(!(i3 >= i2));
    assert!(!(i1 <= i4));

    assert!(BigInt::from(111) > BigInt::from(3));
    assert!(BigInt::from(-22) > BigInt::from(-999));
    assert!(BigInt::from(-999) < BigInt::from(3));
    assert!(!(BigInt::from(3) < BigInt::from(-22)));

    // multi-limb magnitudes compare by length first
    let big: BigInt = "4537141817592417305560".parse().unwrap();
    assert!(big > i1);
    assert!(-&big < i3);
}

#[test]
fn test_ordering_totality() {
    let samples = sample_values();
    for x in &samples {
        for y in &samples {
            let holds = [x < y, x == y, x > y];
            assert_eq!(holds.iter().filter(|h| **h).count(), 1);
        }
    }
}

#[test]
fn test_unary() {
    let n: i128 = -89368532769232346342343406;
    let i = BigInt::from(n);

    assert_eq!(-(-i.clone()), i);
    assert_ne!(-i.clone(), i);
    assert_eq!(-i, BigInt::from(-n));

    // negating zero keeps the canonical zero
    let zero = -BigInt::from(0);
    assert!(zero.is_zero());
    assert!(!zero.neg);
}

#[test]
fn test_add() {
    let i1 = BigInt::from(69232346342343406_i64);
    let i2 = BigInt::from(812345);
    let i3 = BigInt::from(69232346343155751_i64);
    let i5 = BigInt::from(65535);
    let i6 = BigInt::from(69232346343090216_i64);

    assert_eq!(i1.clone() + i2.clone(), i3);
    assert_eq!(i2.clone() + i1.clone(), i3);
    assert_eq!(i5.clone() + i6.clone(), i3);
    assert_eq!(i6.clone() + i5.clone(), i3);
    assert_eq!(i5.clone() + i5.clone(), BigInt::from(2 * 65535));

    // mixed signs reduce to magnitude subtraction
    assert_eq!(-i5.clone() + i3.clone(), i6);
    assert_eq!(-i3.clone() + i5.clone(), -i6);
}

#[test]
fn test_sub() {
    let i1 = BigInt::from(69232346342343406_i64);
    let i2 = BigInt::from(812345);
    let i3 = BigInt::from(69232346343155751_i64);
    let i4 = BigInt::from(512310);
    let i5 = BigInt::from(65535);
    let i6 = BigInt::from(69232346343090216_i64);

    assert_eq!(i1.clone() - i1.clone(), ZERO);
    assert_eq!(i3.clone() - (i2.clone() + i1.clone()), ZERO);
    assert_eq!(i3.clone() - i1.clone() - i2.clone(), ZERO);
    assert_eq!(i2.clone() - i4.clone(), BigInt::from(300035));
    assert_eq!(i3.clone() - i2.clone(), i1);
    assert_eq!(i3.clone() - i1.clone(), i2);
    assert_eq!(i2.clone() - i3.clone(), -i1.clone());
    assert_eq!(i5.clone() - i3.clone(), -i6.clone());
    assert_eq!(i6.clone() - i3.clone(), -i5.clone());
}

#[test]
fn test_mul() {
    let i5 = BigInt::from(65535);
    let i6 = BigInt::from(69232346343090216_i64);
    let i7 = BigInt::from(45371418175_i64) * BigInt::from(100000000000_i64)
        + BigInt::from(94417305560_i64);

    assert_eq!(i5.clone() * i6.clone(), i7);
    assert_eq!(i6.clone() * i5.clone(), i7);
    assert_eq!(-i6.clone() * i5.clone(), -i7.clone());
    assert_eq!(i6.clone() * -i5.clone(), -i7.clone());
    assert_eq!(-i6.clone() * -i5.clone(), i7);

    assert_eq!(BigInt::from(0) * i7.clone(), ZERO);
    assert_eq!(i7.clone() * BigInt::from(0), ZERO);
    assert_eq!(-i7 * BigInt::from(0), ZERO);
}

#[test]
fn test_algebraic_identities() {
    let samples = sample_values();
    for x in &samples {
        assert_eq!(x + &ZERO, *x);
        assert_eq!(x - x, ZERO);
        assert_eq!(x * &ZERO, ZERO);
        for y in &samples {
            assert_eq!(x + y, y + x);
            assert_eq!(x * y, y * x);
        }
    }

    // associativity, spot-checked over the sample triples
    for x in &samples {
        for y in &samples {
            for z in &samples {
                assert_eq!(&(x + y) + z, x + &(y + z));
                assert_eq!(&(x * y) * z, x * &(y * z));
            }
        }
    }
}

#[test]
fn test_div() {
    assert_eq!(BigInt::from(120) / BigInt::from(13), BigInt::from(9));

    // truncation toward zero on every sign combination
    assert_eq!(BigInt::from(7) / BigInt::from(2), BigInt::from(3));
    assert_eq!(BigInt::from(-7) / BigInt::from(2), BigInt::from(-3));
    assert_eq!(BigInt::from(7) / BigInt::from(-2), BigInt::from(-3));
    assert_eq!(BigInt::from(-7) / BigInt::from(-2), BigInt::from(3));

    // divisor magnitude above the dividend
    assert_eq!(BigInt::from(3) / BigInt::from(4), ZERO);
    assert_eq!(BigInt::from(-3) / BigInt::from(4), ZERO);
    assert_eq!(ZERO / BigInt::from(4), ZERO);

    // multi-limb quotients, checked through algebraic identities
    let a: BigInt = concat!(
        "1248712878947821648762389057105328957928307412789503279510743095710",
        "2375971208749210959128709478021974721456787654324567897654789765436",
        "7543567654678987654321456789087654325678908765432567890876543245678",
        "908765432567890876543876543245678907654356789"
    )
    .parse()
    .unwrap();
    let b: BigInt = concat!(
        "5678987654678976543587654678976546789087657876545678976543256789765",
        "432456789234567890854376"
    )
    .parse()
    .unwrap();
    let product = a.clone() * b.clone();
    assert_eq!(product.clone() / b.clone(), a);
    assert_eq!(product.clone() / a.clone(), b);

    let r = BigInt::from(12345);
    assert_eq!((product.clone() + r.clone()) / b.clone(), a);
    assert_eq!(-(product + r) / b, -a);
}

#[test]
fn test_div_truncation_law() {
    let samples = sample_values();
    for x in &samples {
        for y in &samples {
            if y.is_zero() {
                continue;
            }
            let q = x.try_div(y).unwrap();
            let diff = x - &(&q * y);
            // the remainder is smaller than the divisor and keeps the
            // dividend's sign
            assert!(diff.abs() < y.abs());
            if !diff.is_zero() {
                assert_eq!(diff.neg, x.neg);
            }
        }
    }
}

#[test]
fn test_div_near_equal_operands() {
    // equal limb counts with close magnitudes force the quotient estimate
    // down to a single digit
    let a: BigInt = "18446744073709551617".parse().unwrap(); // 2^64 + 1
    let b: BigInt = "18446744073709551616".parse().unwrap(); // 2^64

    assert_eq!(a.clone() / b.clone(), BigInt::from(1));
    assert_eq!(b.clone() / a.clone(), ZERO);
    assert_eq!(a.clone() / a.clone(), BigInt::from(1));

    let c = b.clone() * BigInt::from(3) + BigInt::from(7);
    assert_eq!(c / b, BigInt::from(3));
}

#[test]
fn test_div_by_zero() {
    assert_eq!(
        BigInt::from(10).try_div(&ZERO).unwrap_err(),
        BigIntError::DivisionByZero
    );
    assert_eq!(ZERO.try_div(&ZERO).unwrap_err(), BigIntError::DivisionByZero);
}

#[test]
#[should_panic(expected = "division by BigInt(0)")]
fn test_div_operator_by_zero_panics() {
    let _ = BigInt::from(1) / ZERO;
}

#[test]
fn test_parse() {
    assert_eq!("10".parse::<BigInt>().unwrap(), BigInt::from(10));
    assert_eq!("0".parse::<BigInt>().unwrap(), ZERO);
    assert_eq!("-0".parse::<BigInt>().unwrap(), ZERO);
    assert_eq!("007".parse::<BigInt>().unwrap(), BigInt::from(7));

    let i1: BigInt = "4537141817592417305560".parse().unwrap();
    let i2 = BigInt::from(45371418175_i64) * BigInt::from(100000000000_i64)
        + BigInt::from(92417305560_i64);
    assert_eq!(i1, i2);

    let i1: BigInt = "-4537141817592417305560".parse().unwrap();
    let i2 = -BigInt::from(45371418175_i64) * BigInt::from(100000000000_i64)
        - BigInt::from(92417305560_i64);
    assert_eq!(i1, i2);
}

#[test]
fn test_parse_invalid() {
    let inputs = [
        "453714181759441XX7305560",
        "45371418175944173+05560",
        "",
        "-",
        "12 3",
        "+5",
        "0x10",
    ];
    for input in inputs {
        let err = input.parse::<BigInt>().unwrap_err();
        assert_eq!(err, BigIntError::InvalidArgument(input.to_string()));
    }

    // the message echoes the rejected input verbatim
    let err = "45371418175944173+05560".parse::<BigInt>().unwrap_err();
    assert!(err.to_string().contains("45371418175944173+05560"));
}

#[test]
fn test_round_trip() {
    let values: [i128; 13] = [
        0,
        1,
        -1,
        16,
        17,
        65535,
        812345,
        -812345,
        69232346342343406,
        i64::MAX as i128,
        i64::MIN as i128,
        i128::MAX,
        i128::MIN,
    ];
    for n in values {
        assert_eq!(n.to_string().parse::<BigInt>().unwrap(), BigInt::from(n));
    }
}

#[test]
fn test_canonical_zero() {
    let x: BigInt = "4537141817592417305560".parse().unwrap();
    let zeros = [
        BigInt::default(),
        BigInt::from(0),
        x.clone() - x.clone(),
        x.clone() * BigInt::from(0),
        BigInt::from(0) * -x.clone(),
        "-0".parse().unwrap(),
    ];
    for zero in &zeros {
        assert!(zero.is_zero());
        assert!(!zero.neg);
        assert!(zero.mag.is_empty());
        assert_eq!(*zero, ZERO);
    }
}

#[test]
fn test_canonical_form() {
    let samples = sample_values();
    for x in &samples {
        for y in &samples {
            for value in [x + y, x - y, x * y] {
                assert_ne!(value.mag.last(), Some(&0));
                assert!(value.mag.iter().all(|limb| *limb <= HALF_MASK));
                if value.mag.is_empty() {
                    assert!(!value.neg);
                }
            }
        }
    }
}

#[test]
fn test_abs() {
    assert_eq!(BigInt::from(-5).abs(), BigInt::from(5));
    assert_eq!(BigInt::from(5).abs(), BigInt::from(5));
    assert_eq!(ZERO.abs(), ZERO);
}

#[test]
fn test_assign_ops() {
    let mut acc = BigInt::from(1);
    acc += BigInt::from(2);
    acc *= BigInt::from(10);
    acc -= &BigInt::from(5);
    acc /= BigInt::from(5);
    assert_eq!(acc, BigInt::from(5));
}
