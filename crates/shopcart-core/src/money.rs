//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Mills?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    29.95 × 1.10 = 32.945000000000004   ❌ WRONG!                        │
//! │                                                                         │
//! │  Whole cents are not enough either:                                     │
//! │    $29.95 + 10% delivery = $32.945     → 3294.5 cents                   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Mills (1/1000 dollar)                            │
//! │    29950 mills × 110% = 32945 mills   exact                             │
//! │    Rounded to cents only when displayed: $32.95                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A 10% markup on any whole-cent amount lands on a whole mill, so line
//! costs and totals carry no rounding error until they are printed.
//!
//! ## Usage
//! ```rust
//! use shopcart_core::money::Money;
//!
//! let price = Money::from_cents(9995);          // $99.95
//! let line = price * 2_u32;                     // $199.90
//! assert_eq!(line.to_string(), "$199.90");
//!
//! let parsed: Money = "18.7".parse().unwrap();
//! assert_eq!(parsed, Money::from_cents(1870));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;

use crate::error::MoneyParseError;
use crate::types::Rate;

/// Mills per cent.
const MILLS_PER_CENT: i64 = 10;

/// Mills per dollar.
const MILLS_PER_DOLLAR: i64 = 1000;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in mills (thousandths of a dollar).
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction stays total, even though no cost in this
///   domain is ever negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Mills, not cents**: the delivery markup produces half cents
///
/// ## Where Money is Used
/// ```text
/// Product.unit_price ──► PurchaseRecord.unit_price ──► line_cost ──► total
///                                                          │
///                                      SearchAggregateRow.aggregated_cost
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole cents.
    ///
    /// ```rust
    /// use shopcart_core::money::Money;
    ///
    /// let price = Money::from_cents(1870); // $18.70
    /// assert_eq!(price.cents(), 1870);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents * MILLS_PER_CENT)
    }

    /// Creates a Money value from mills.
    #[inline]
    pub const fn from_mills(mills: i64) -> Self {
        Money(mills)
    }

    /// Returns the exact value in mills.
    #[inline]
    pub const fn mills(&self) -> i64 {
        self.0
    }

    /// Returns the value rounded to whole cents, half away from zero.
    ///
    /// ```rust
    /// use shopcart_core::money::Money;
    ///
    /// assert_eq!(Money::from_mills(32945).cents(), 3295);
    /// assert_eq!(Money::from_mills(32944).cents(), 3294);
    /// ```
    #[inline]
    pub const fn cents(&self) -> i64 {
        if self.0 >= 0 {
            (self.0 + MILLS_PER_CENT / 2) / MILLS_PER_CENT
        } else {
            (self.0 - MILLS_PER_CENT / 2) / MILLS_PER_CENT
        }
    }

    /// Returns the dollar portion of the rounded value.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.cents() / 100
    }

    /// Returns the cents portion of the rounded value (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.cents() % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Raises the amount by a percentage rate.
    ///
    /// ## Implementation
    /// Integer math: `amount + (amount * bps + 5000) / 10000`.
    /// The +5000 rounds to the nearest mill; for 10% on whole cents the
    /// division is always exact.
    ///
    /// ```rust
    /// use shopcart_core::money::Money;
    /// use shopcart_core::types::Rate;
    ///
    /// let base = Money::from_cents(19990);
    /// let marked_up = base.apply_markup(Rate::from_bps(1000));
    /// assert_eq!(marked_up, Money::from_cents(21989));
    /// ```
    pub fn apply_markup(&self, rate: Rate) -> Money {
        let markup = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money(self.0 + markup as i64)
    }

    /// Renders the amount as a plain decimal without currency symbol.
    ///
    /// Two decimals always, a third only when the value has a sub-cent part.
    /// This is the form written into wire records.
    ///
    /// ```rust
    /// use shopcart_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1870).to_plain_string(), "18.70");
    /// assert_eq!(Money::from_mills(32945).to_plain_string(), "32.945");
    /// ```
    pub fn to_plain_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        let whole = abs / MILLS_PER_DOLLAR;
        let frac = abs % MILLS_PER_DOLLAR;

        if frac % MILLS_PER_CENT == 0 {
            format!("{}{}.{:02}", sign, whole, frac / MILLS_PER_CENT)
        } else {
            format!("{}{}.{:03}", sign, whole, frac)
        }
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a non-negative decimal amount: `43`, `18.7`, `18.70`, `32.945`.
///
/// No sign, no currency symbol, no surrounding whitespace, at most three
/// fractional digits.
impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MoneyParseError(s.to_string());

        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, Some(frac)),
            None => (s, None),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }

        let whole: i64 = whole.parse().map_err(|_| err())?;

        let frac_mills = match frac {
            None => 0,
            Some(frac) => {
                if frac.is_empty() || frac.len() > 3 || !frac.bytes().all(|b| b.is_ascii_digit())
                {
                    return Err(err());
                }
                // Right-pad to three digits: "7" → 700 mills
                let digits: i64 = frac.parse().map_err(|_| err())?;
                digits * 10_i64.pow(3 - frac.len() as u32)
            }
        };

        whole
            .checked_mul(MILLS_PER_DOLLAR)
            .and_then(|m| m.checked_add(frac_mills))
            .map(Money)
            .ok_or_else(err)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the amount rounded to cents: `$219.89`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Serialized form is the plain decimal string, e.g. `"32.945"`.
impl From<Money> for String {
    fn from(money: Money) -> Self {
        money.to_plain_string()
    }
}

impl TryFrom<String> for Money {
    type Error = MoneyParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by a record quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
