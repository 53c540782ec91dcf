//! Monetary amounts with exact decimal arithmetic
//!
//! `Money` pairs a `rust_decimal::Decimal` with an ISO 4217 currency. Amounts
//! are kept at the currency's minor-unit precision, so the integer minor-unit
//! form is always exact.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;
use unic_langid::LanguageIdentifier;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
    EUR,
    GBP,
    JPY,
    CHF,
    SEK,
    AUD,
    CAD,
}

impl Currency {
    /// Digits after the decimal point in the minor unit
    pub fn minor_units(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
            Currency::CHF => "CHF",
            Currency::SEK => "kr",
            Currency::AUD => "A$",
            Currency::CAD => "C$",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::SEK => "SEK",
            Currency::AUD => "AUD",
            Currency::CAD => "CAD",
        }
    }

    fn scale(&self) -> Decimal {
        Decimal::from(10_i64.pow(self.minor_units()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "JPY" => Ok(Currency::JPY),
            "CHF" => Ok(Currency::CHF),
            "SEK" => Ok(Currency::SEK),
            "AUD" => Ok(Currency::AUD),
            "CAD" => Ok(Currency::CAD),
            _ => Err(MoneyError::UnknownCurrency(s.to_string())),
        }
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(Currency, Currency),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Overflow during calculation")]
    Overflow,
}

/// A monetary amount with associated currency
///
/// Deserialized values pass through [`Money::new`], so stored amounts with
/// excess precision are rounded like any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "MoneyRecord")]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

#[derive(Deserialize)]
struct MoneyRecord {
    amount: Decimal,
    currency: Currency,
}

impl From<MoneyRecord> for Money {
    fn from(record: MoneyRecord) -> Self {
        Self::new(record.amount, record.currency)
    }
}

impl Money {
    /// Creates a value rounded half-to-even to the currency's minor units
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp_with_strategy(
                currency.minor_units(),
                RoundingStrategy::MidpointNearestEven,
            ),
            currency,
        }
    }

    /// Creates a value from an integer count of minor units (e.g. cents)
    pub fn from_minor(minor_units: i64, currency: Currency) -> Self {
        Self {
            amount: Decimal::new(minor_units, currency.minor_units()),
            currency,
        }
    }

    pub fn zero(currency: Currency) -> Self {
        Self::from_minor(0, currency)
    }

    /// Parses `"<amount> <CODE>"` or `"<CODE> <amount>"`
    pub fn parse(input: &str) -> Result<Self, MoneyError> {
        let mut parts = input.split_whitespace();
        let (first, second) = match (parts.next(), parts.next(), parts.next()) {
            (Some(first), Some(second), None) => (first, second),
            _ => return Err(MoneyError::InvalidAmount(input.to_string())),
        };
        let (amount, code) = if first.starts_with(|c: char| c.is_ascii_alphabetic()) {
            (second, first)
        } else {
            (first, second)
        };
        let currency = code.parse()?;
        let amount = Decimal::from_str(amount).map_err(|e| {
            debug!(input, error = %e, "rejected money amount");
            MoneyError::InvalidAmount(input.to_string())
        })?;
        Ok(Self::new(amount, currency))
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Integer count of minor units
    pub fn to_minor_units(&self) -> Result<i64, MoneyError> {
        let minor = self
            .amount
            .checked_mul(self.currency.scale())
            .ok_or(MoneyError::Overflow)?
            .trunc();
        i64::try_from(minor).map_err(|_| MoneyError::Overflow)
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    pub fn abs(&self) -> Self {
        Self {
            amount: self.amount.abs(),
            currency: self.currency,
        }
    }

    fn same_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch(self.currency, other.currency))
        }
    }

    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.same_currency(other)?;
        let amount = self.amount.checked_add(other.amount).ok_or(MoneyError::Overflow)?;
        Ok(Self::new(amount, self.currency))
    }

    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.same_currency(other)?;
        let amount = self.amount.checked_sub(other.amount).ok_or(MoneyError::Overflow)?;
        Ok(Self::new(amount, self.currency))
    }

    /// Multiplies by a scalar, rounding the product to minor units
    pub fn multiply(&self, factor: Decimal) -> Result<Self, MoneyError> {
        let amount = self.amount.checked_mul(factor).ok_or(MoneyError::Overflow)?;
        Ok(Self::new(amount, self.currency))
    }

    pub fn divide(&self, divisor: Decimal) -> Result<Self, MoneyError> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let amount = self.amount.checked_div(divisor).ok_or(MoneyError::Overflow)?;
        Ok(Self::new(amount, self.currency))
    }

    /// Orders two amounts of the same currency
    pub fn compare(&self, other: &Money) -> Result<Ordering, MoneyError> {
        self.same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Splits into `n` parts that sum to the original
    ///
    /// Leftover minor units go to the leading parts, one each.
    pub fn allocate(&self, n: u32) -> Result<Vec<Money>, MoneyError> {
        if n == 0 {
            return Err(MoneyError::InvalidAmount(
                "cannot allocate to zero parts".to_string(),
            ));
        }
        let total = self.to_minor_units()?;
        let parts = i64::from(n);
        let base = total.div_euclid(parts);
        let remainder = total.rem_euclid(parts);

        Ok((0..parts)
            .map(|i| Money::from_minor(base + i64::from(i < remainder), self.currency))
            .collect())
    }

    /// Renders the amount the way `locale` writes money
    ///
    /// Known languages: `en`, `ja` (symbol first, `,` grouping), `de`
    /// (`1.234,50 €`), `fr` (`1 234,50 €`) and `nl` (`€ 1.234,50`). Anything
    /// else falls back to `en`.
    pub fn format_locale(&self, locale: &LanguageIdentifier) -> String {
        let style = LocaleStyle::for_language(locale.language.as_str());
        let digits = format!(
            "{:.dp$}",
            self.amount.abs(),
            dp = self.currency.minor_units() as usize
        );
        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut number = group_thousands(whole, style.group);
        if let Some(fraction) = fraction {
            number.push(style.decimal);
            number.push_str(fraction);
        }
        let sign = if self.is_negative() { "-" } else { "" };
        let symbol = self.currency.symbol();

        match style.placement {
            SymbolPlacement::Prefix => format!("{sign}{symbol}{number}"),
            SymbolPlacement::PrefixSpaced => format!("{sign}{symbol} {number}"),
            SymbolPlacement::Suffix => format!("{sign}{number}\u{a0}{symbol}"),
        }
    }
}

/// Canonical form: `"12.50 USD"`
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.dp$} {}",
            self.amount,
            self.currency,
            dp = self.currency.minor_units() as usize
        )
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            amount: -self.amount,
            currency: self.currency,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum SymbolPlacement {
    Prefix,
    PrefixSpaced,
    Suffix,
}

#[derive(Debug, Clone, Copy)]
struct LocaleStyle {
    group: char,
    decimal: char,
    placement: SymbolPlacement,
}

impl LocaleStyle {
    fn for_language(language: &str) -> Self {
        match language {
            "de" => Self { group: '.', decimal: ',', placement: SymbolPlacement::Suffix },
            "fr" => Self { group: '\u{a0}', decimal: ',', placement: SymbolPlacement::Suffix },
            "nl" => Self { group: '.', decimal: ',', placement: SymbolPlacement::PrefixSpaced },
            _ => Self { group: ',', decimal: '.', placement: SymbolPlacement::Prefix },
        }
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}
