//! # BigUint
//! Immutable arbitrary-precision non-negative integers, stored as decimal digits.
//! Every operation returns a new value; nothing is modified in place.
//! # Example
//! ```
//! use big_digits::BigUint;
//!
//! let a: BigUint = "123456789".parse().unwrap();
//! let b = BigUint::from(987654321_u64);
//! assert_eq!((&a * &b).to_string(), "121932631112635269");
//!
//! let (q, r) = BigUint::from(100_u32).divide(&BigUint::from(3_u32)).unwrap();
//! assert_eq!(q.to_string(), "33");
//! assert_eq!(r.to_string(), "1");
//! ```
//!

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::ops::{Add, AddAssign, Mul, MulAssign};
use std::str::FromStr;

use tracing::trace;

use crate::big_uint_cache::*;
use crate::big_uint_constants::*;
use crate::error::{Error, Result};

macro_rules! skip_leading_zero {
    ($digits: expr) => {
        {
            let mut digits = $digits;
            while digits.len() > 1 && digits.last() == Some(&0) {
                digits.pop();
            }
            digits
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigUint {
    /// Least significant digit first. Never empty, and the last element is only
    /// `0` when the whole value is zero.
    digits: Vec<u8>,
}

// 实现构造
impl BigUint {
    /// Wraps a digit buffer produced by one of the operations below.
    /// Digit legality is the caller's job, the leading-zero invariant is
    /// re-established here.
    pub(crate) fn from_raw(digits: Vec<u8>) -> Self {
        debug_assert!(!digits.is_empty());
        debug_assert!(digits.iter().all(|d| *d < RADIX));
        BigUint { digits: skip_leading_zero!(digits) }
    }
    pub fn zero() -> Self {
        POS_CACHE[0].clone()
    }
    pub fn one() -> Self {
        POS_CACHE[1].clone()
    }
    /// Parses a string of ASCII decimal digits. Signs, whitespace and
    /// separators are all rejected; leading zeros are dropped.
    pub fn parse(val: &str) -> Result<Self> {
        if val.is_empty() {
            return Err(Error::InvalidFormat);
        }

        let mut digits = Vec::with_capacity(val.len());
        for c in val.bytes().rev() {
            match c {
                b'0'..=b'9' => digits.push(c - b'0'),
                _ => return Err(Error::InvalidFormat),
            }
        }

        Ok(BigUint::from_raw(digits))
    }
    fn value_of(mut val: u64) -> BigUint {
        if val <= MAX_CONSTANT as u64 {
            return POS_CACHE[val as usize].clone();
        }
        let mut digits = Vec::with_capacity(DIGITS_PER_U64);
        while val != 0 {
            digits.push((val % RADIX as u64) as u8);
            val /= RADIX as u64;
        }
        BigUint::from_raw(digits)
    }
}

macro_rules! impl_unsigned_to_big_uint {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigUint {
        fn from(val: $u) -> Self {
            BigUint::value_of(val as u64)
        }
    }
    )*
    };
}
impl_unsigned_to_big_uint!(u8, u16, u32, usize, u64);

impl Default for BigUint {
    fn default() -> Self {
        BigUint::zero()
    }
}

// 实现解析
impl FromStr for BigUint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BigUint::parse(s)
    }
}

impl TryFrom<&str> for BigUint {
    type Error = Error;

    fn try_from(val: &str) -> Result<Self> {
        BigUint::parse(val)
    }
}

// 实现打印
impl Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.digits
            .iter()
            .rev()
            .map(|d| DIGITS[*d as usize])
            .collect();
        f.pad_integral(true, "", &s)
    }
}

// 杂项辅助函数
impl BigUint {
    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }
    pub fn is_one(&self) -> bool {
        self.digits == [1]
    }
    /// Number of decimal digits, `1` for zero.
    pub fn num_digits(&self) -> usize {
        self.digits.len()
    }
    /// Digits from the most significant one down.
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = u8> + ExactSizeIterator + '_ {
        self.digits.iter().rev().copied()
    }
}

// 实现大小比较
impl BigUint {
    /// Longer means larger because neither side carries leading zeros; equal
    /// lengths are compared from the most significant digit down.
    pub fn compare(&self, other: &BigUint) -> Ordering {
        let self_len = self.digits.len();
        let other_len = other.digits.len();

        if self_len != other_len {
            return self_len.cmp(&other_len);
        }

        self.digits.iter().rev().cmp(other.digits.iter().rev())
    }
}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

// 实现加法
impl BigUint {
    pub fn add(&self, other: &BigUint) -> BigUint {
        BigUint::from_raw(BigUint::add_digits(&self.digits, &other.digits))
    }
    fn add_digits(x: &[u8], y: &[u8]) -> Vec<u8> {
        let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };

        let mut result = Vec::with_capacity(long.len() + 1);
        let mut carry = 0;
        for (i, &digit) in long.iter().enumerate() {
            let mut sum = digit + short.get(i).copied().unwrap_or(0) + carry;
            if sum >= RADIX {
                sum -= RADIX;
                carry = 1;
            } else {
                carry = 0;
            }
            result.push(sum);
        }

        if carry != 0 {
            result.push(carry);
        }

        result
    }
}

impl Add for BigUint {
    type Output = BigUint;

    fn add(self, rhs: Self) -> Self::Output {
        BigUint::add(&self, &rhs)
    }
}

impl Add for &BigUint {
    type Output = BigUint;

    fn add(self, rhs: Self) -> Self::Output {
        BigUint::add(self, rhs)
    }
}

impl Add<&BigUint> for BigUint {
    type Output = BigUint;

    fn add(self, rhs: &BigUint) -> Self::Output {
        BigUint::add(&self, rhs)
    }
}

impl AddAssign for BigUint {
    fn add_assign(&mut self, rhs: Self) {
        *self = BigUint::add(self, &rhs);
    }
}

impl AddAssign<&BigUint> for BigUint {
    fn add_assign(&mut self, rhs: &BigUint) {
        *self = BigUint::add(self, rhs);
    }
}

// 实现减法
impl BigUint {
    /// Fails with [`Error::NegativeResult`] when `other` is the larger value.
    pub fn subtract(&self, other: &BigUint) -> Result<BigUint> {
        if self.compare(other) == Ordering::Less {
            return Err(Error::NegativeResult);
        }
        Ok(BigUint::from_raw(BigUint::sub_digits(&self.digits, &other.digits)))
    }
    /// here: big >= little
    fn sub_digits(big: &[u8], little: &[u8]) -> Vec<u8> {
        let mut result = Vec::with_capacity(big.len());
        let mut borrow = 0;
        for (i, &digit) in big.iter().enumerate() {
            let mut difference = digit as i8 - little.get(i).copied().unwrap_or(0) as i8 - borrow;
            if difference < 0 {
                difference += RADIX as i8;
                borrow = 1;
            } else {
                borrow = 0;
            }
            result.push(difference as u8);
        }
        debug_assert_eq!(borrow, 0);

        skip_leading_zero!(result)
    }
}

// 实现乘法
impl BigUint {
    pub fn multiply(&self, other: &BigUint) -> BigUint {
        if self.is_zero() || other.is_zero() {
            return BigUint::zero();
        }
        BigUint::from_raw(BigUint::mul_digits(&self.digits, &other.digits))
    }
    /// Schoolbook multiplication. Carries are pushed one position up as soon
    /// as a cell reaches the radix instead of in a final pass.
    fn mul_digits(x: &[u8], y: &[u8]) -> Vec<u8> {
        let radix = RADIX as u32;
        let mut product = vec![0_u32; x.len() + y.len()];

        for (i, &x_digit) in x.iter().enumerate() {
            for (j, &y_digit) in y.iter().enumerate() {
                let pos = i + j;
                product[pos] += x_digit as u32 * y_digit as u32;
                if product[pos] >= radix {
                    let carry = product[pos] / radix;
                    product[pos] %= radix;
                    product[pos + 1] += carry;
                }
            }
        }

        let product: Vec<u8> = product.into_iter().map(|d| d as u8).collect();
        skip_leading_zero!(product)
    }
}

impl Mul for BigUint {
    type Output = BigUint;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul for &BigUint {
    type Output = BigUint;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Mul<&BigUint> for BigUint {
    type Output = BigUint;

    fn mul(self, rhs: &BigUint) -> Self::Output {
        self.multiply(rhs)
    }
}

impl MulAssign for BigUint {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl MulAssign<&BigUint> for BigUint {
    fn mul_assign(&mut self, rhs: &BigUint) {
        *self = self.multiply(rhs);
    }
}

// 实现除法
impl BigUint {
    /// Returns `(quotient, remainder)` with `self = quotient * divisor + remainder`
    /// and `remainder < divisor`.
    ///
    /// Binary long division: each round doubles a copy of the divisor (and a
    /// matching multiple of one) for as long as it still fits into the
    /// remainder, then takes that largest doubling off. The number of rounds
    /// grows with `log(self / divisor)` rather than with the quotient itself.
    pub fn divide(&self, divisor: &BigUint) -> Result<(BigUint, BigUint)> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let mut quotient = BigUint::zero();
        let mut remainder = self.clone();
        let mut rounds: usize = 0;

        while remainder >= *divisor {
            let mut temp = divisor.clone();
            let mut multiple = BigUint::one();
            loop {
                let doubled = &temp + &temp;
                if remainder < doubled {
                    break;
                }
                temp = doubled;
                multiple = &multiple + &multiple;
            }
            remainder = BigUint::from_raw(BigUint::sub_digits(&remainder.digits, &temp.digits));
            quotient += &multiple;
            rounds += 1;
        }

        trace!(dividend_digits = self.num_digits(), rounds, "doubling division done");
        Ok((quotient, remainder))
    }
    /// Quotient of [`divide`](BigUint::divide) alone; fails the same way.
    pub fn quotient(&self, divisor: &BigUint) -> Result<BigUint> {
        self.divide(divisor).map(|(q, _)| q)
    }
    /// Remainder of [`divide`](BigUint::divide) alone; fails the same way.
    pub fn remainder(&self, divisor: &BigUint) -> Result<BigUint> {
        self.divide(divisor).map(|(_, r)| r)
    }
}

// 实现阶乘
impl BigUint {
    /// `0! = 1! = 1`. There is no size limit: the cost grows with `self`
    /// through ever longer multiplications.
    pub fn factorial(&self) -> BigUint {
        if self.is_zero() || self.is_one() {
            return BigUint::one();
        }

        let one = BigUint::one();
        let mut result = BigUint::one();
        let mut current = BigUint::one();
        while current <= *self {
            result = result.multiply(&current);
            current += &one;
        }

        trace!(n = %self, digits = result.num_digits(), "factorial done");
        result
    }
}

#[test]
fn test_parse() {
    let big = BigUint::parse("000123").unwrap();
    assert_eq!(big.digits, vec![3, 2, 1]);
    assert_eq!(big.to_string(), "123");

    let big = BigUint::parse("0000").unwrap();
    assert_eq!(big.digits, vec![0]);
    assert!(big.is_zero());

    for bad in ["", "-1", "+1", " 12", "12 ", "1_000", "1,000", "12a", "٣"] {
        assert_eq!(BigUint::parse(bad), Err(Error::InvalidFormat), "input {:?}", bad);
    }
}

#[test]
fn test_from() {
    let num: u8 = 12;
    let big: BigUint = num.into();
    assert_eq!(big.digits, vec![2, 1]);

    let num: u32 = 1000;
    let big: BigUint = num.into();
    assert_eq!(big.to_string(), "1000");

    let big = BigUint::from(0_usize);
    assert!(big.is_zero());

    let big = BigUint::from(u64::MAX);
    assert_eq!(big.to_string(), u64::MAX.to_string());
    assert_eq!(big.num_digits(), DIGITS_PER_U64);
}

#[test]
fn test_compare() {
    let a = BigUint::from(123_u32);
    let b = BigUint::from(456_u32);
    assert_eq!(a.compare(&b), Ordering::Less);
    assert_eq!(b.compare(&a), Ordering::Greater);
    assert_eq!(a.compare(&a.clone()), Ordering::Equal);

    let long = BigUint::parse("1000").unwrap();
    let short = BigUint::parse("999").unwrap();
    assert!(long > short);
    assert!(BigUint::parse("987654321").unwrap() > BigUint::parse("123456789").unwrap());
}

#[test]
fn test_add() {
    let a = BigUint::from(123_u32);
    let b = BigUint::from(456_u32);
    assert_eq!((&a + &b).to_string(), "579");

    let a = BigUint::from(999999_u32);
    let b = BigUint::one();
    assert_eq!(BigUint::add(&a, &b).to_string(), "1000000");

    assert!((BigUint::zero() + BigUint::zero()).is_zero());

    let mut sum = BigUint::parse("987654321987654321").unwrap();
    sum += BigUint::parse("123456789123456789").unwrap();
    assert_eq!(sum.to_string(), "1111111111111111110");
}

#[test]
fn test_subtract() {
    let a = BigUint::from(456_u32);
    let b = BigUint::from(123_u32);
    assert_eq!(a.subtract(&b).unwrap().to_string(), "333");
    assert_eq!(b.subtract(&a), Err(Error::NegativeResult));

    let a = BigUint::from(1000_u32);
    assert_eq!(a.subtract(&BigUint::one()).unwrap().to_string(), "999");

    let a = BigUint::parse("1000000000000").unwrap();
    let b = BigUint::parse("999999999999").unwrap();
    let difference = a.subtract(&b).unwrap();
    assert_eq!(difference.digits, vec![1]);

    assert!(a.subtract(&a).unwrap().is_zero());
}

#[test]
fn test_multiply() {
    let a = BigUint::from(123_u32);
    let b = BigUint::from(456_u32);
    assert_eq!((a * b).to_string(), "56088");

    let a = BigUint::parse("123456789").unwrap();
    let b = BigUint::parse("987654321").unwrap();
    assert_eq!(a.multiply(&b).to_string(), "121932631112635269");

    let zero = BigUint::zero();
    let nines = BigUint::parse("999999999999999999").unwrap();
    assert_eq!(nines.multiply(&zero).digits, vec![0]);
    assert_eq!(zero.multiply(&nines).digits, vec![0]);

    let mut square = nines.clone();
    square *= &nines;
    assert_eq!(square.to_string(), "999999999999999998000000000000000001");
}

#[test]
fn test_divide() {
    let (q, r) = BigUint::from(100_u32).divide(&BigUint::from(3_u32)).unwrap();
    assert_eq!((q.to_string(), r.to_string()), ("33".to_owned(), "1".to_owned()));

    let (q, r) = BigUint::from(999_u32).divide(&BigUint::from(10_u32)).unwrap();
    assert_eq!((q.to_string(), r.to_string()), ("99".to_owned(), "9".to_owned()));

    let (q, r) = BigUint::from(7_u32).divide(&BigUint::from(9_u32)).unwrap();
    assert!(q.is_zero());
    assert_eq!(r.to_string(), "7");

    let (q, r) = BigUint::from(81_u32).divide(&BigUint::from(9_u32)).unwrap();
    assert_eq!(q.to_string(), "9");
    assert!(r.is_zero());

    assert_eq!(BigUint::from(123_u32).divide(&BigUint::zero()), Err(Error::DivisionByZero));
    assert_eq!(BigUint::zero().divide(&BigUint::zero()), Err(Error::DivisionByZero));

    let a = BigUint::parse("121932631112635269").unwrap();
    let b = BigUint::parse("987654321").unwrap();
    assert_eq!(a.quotient(&b).unwrap().to_string(), "123456789");
    assert!(a.remainder(&b).unwrap().is_zero());
}

#[test]
fn test_factorial() {
    assert_eq!(BigUint::zero().factorial().to_string(), "1");
    assert_eq!(BigUint::one().factorial().to_string(), "1");
    assert_eq!(BigUint::from(5_u32).factorial().to_string(), "120");
    assert_eq!(BigUint::from(10_u32).factorial().to_string(), "3628800");
    assert_eq!(
        BigUint::from(30_u32).factorial().to_string(),
        "265252859812191058636308480000000"
    );
}

#[test]
fn test_display() {
    let big = BigUint::from(42_u32);
    assert_eq!(format!("{:>5}", big), "   42");
    assert_eq!(format!("{:05}", big), "00042");
    assert_eq!(big.digits().collect::<Vec<_>>(), vec![4, 2]);
}
