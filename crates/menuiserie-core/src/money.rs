//! Money type for representing prices.
//!
//! Amounts are held in the smallest unit of the currency (cents for EUR) so
//! that surcharges and scaling never accumulate floating-point drift.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Currency of every catalogue price. The storefront sells in euros only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "EUR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "€").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::EUR => "\u{20ac}",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// How an amount is laid out for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// `1 234,50 €`
    #[default]
    Fr,
    /// `€1,234.50`
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::En => "en",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fr" | "fr-fr" => Some(Locale::Fr),
            "en" | "en-gb" | "en-us" => Some(Locale::En),
            _ => None,
        }
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Euro amount from cents.
    pub const fn eur_cents(amount_cents: i64) -> Self {
        Self::new(amount_cents, Currency::EUR)
    }

    /// Euro amount from whole euros.
    pub const fn eur(euros: i64) -> Self {
        Self::new(euros * 100, Currency::EUR)
    }

    /// Create a zero amount in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Format with the English layout (e.g., "€749.97").
    pub fn display(&self) -> String {
        self.display_in(Locale::En)
    }

    /// Format as a display string without symbol (e.g., "749.97").
    pub fn display_amount(&self) -> String {
        let (units, cents) = self.split();
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, units, cents)
    }

    /// Format for the given locale with thousands grouping.
    pub fn display_in(&self, locale: Locale) -> String {
        let (units, cents) = self.split();
        let sign = if self.is_negative() { "-" } else { "" };
        match locale {
            Locale::Fr => format!(
                "{}{},{:02}\u{a0}{}",
                sign,
                group_thousands(units, '\u{202f}'),
                cents,
                self.currency.symbol()
            ),
            Locale::En => format!(
                "{}{}{}.{:02}",
                sign,
                self.currency.symbol(),
                group_thousands(units, ','),
                cents
            ),
        }
    }

    fn split(&self) -> (u64, u64) {
        let abs = self.amount_cents.unsigned_abs();
        (abs / 100, abs % 100)
    }

    /// Add another amount, returning None on overflow.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Multiply by the rational `numerator / denominator`, rounding half away
    /// from zero exactly once. None when the product leaves the `i64` range.
    ///
    /// ```
    /// use menuiserie_core::money::Money;
    /// let price = Money::eur_cents(24999).scale_ratio(120, 100).unwrap();
    /// assert_eq!(price.amount_cents, 29999);
    /// ```
    pub fn scale_ratio(&self, numerator: i128, denominator: i128) -> Option<Money> {
        let scaled = i128::from(self.amount_cents).checked_mul(numerator)?;
        let cents = i64::try_from(round_div(scaled, denominator)).ok()?;
        Some(Money::new(cents, self.currency))
    }

    /// Sum an iterator of Money values.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Money {
        iter.fold(Money::zero(currency), |acc, m| acc + *m)
    }
}

/// Integer division rounding half away from zero. `denominator` must be positive.
fn round_div(numerator: i128, denominator: i128) -> i128 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if remainder.unsigned_abs() * 2 >= denominator.unsigned_abs() {
        quotient + numerator.signum()
    } else {
        quotient
    }
}

fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.amount_cents + other.amount_cents, self.currency)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::new(self.amount_cents - other.amount_cents, self.currency)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        Money::new(self.amount_cents * factor, self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
