//! # Money Module
//!
//! Provides the `Money` and `Markup` types for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In a quote with 40 material lines, per-line float rounding drifts     │
//! │  and the printed total stops matching the sum of the printed lines.   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every line total is an exact number of cents; the subtotal is the  │
//! │    exact sum of those cents. Rounding happens ONCE per line, at the   │
//! │    cent, and never again.                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Order
//! The quote model rounds at the line level and then sums:
//! `sell_price = round(cost × (1 + markup))`, `line_total = round(sell × qty)`,
//! `subtotal = Σ line_total`. Subtotals are sums of already-rounded cents, so
//! they need no further rounding.
//!
//! ## Usage
//! ```rust
//! use rainline_core::money::{Markup, Money};
//!
//! let cost = Money::from_cents(1000); // $10.00
//! let sell = cost.with_markup(Markup::from_bps(2500)); // 25% markup
//! assert_eq!(sell.cents(), 1250); // $12.50
//!
//! let line_total = sell.times_quantity(3.0);
//! assert_eq!(line_total.cents(), 3750); // $37.50
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for credits and adjustments
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money is Used
/// ```text
/// CatalogRow.cost_cents ──► PriceInfo.cost_price ──► PricedLine.sell_price
///                                                         │
///                          PricedLine.line_total ◄────────┘
///                                │
///                                ▼
///          Quote.materials_subtotal ──► Quote.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use rainline_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    ///
    /// ## Why Cents?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// The database, calculations, and API all use cents.
    /// Only the UI converts to dollars for display.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Applies a cost-plus markup and returns the sell price, rounded to
    /// the nearest cent (half up).
    ///
    /// ## Formula
    /// `sell = cost × (1 + markup)` where markup is in basis points:
    /// `sell_cents = (cost_cents × (10000 + bps) + 5000) / 10000`
    ///
    /// The +5000 provides rounding (5000/10000 = 0.5). i128 intermediate
    /// arithmetic prevents overflow on large amounts.
    ///
    /// ## Example
    /// ```rust
    /// use rainline_core::money::{Markup, Money};
    ///
    /// let cost = Money::from_cents(800); // $8.00
    /// let sell = cost.with_markup(Markup::from_bps(2000)); // 20%
    /// assert_eq!(sell.cents(), 960); // $9.60
    /// ```
    ///
    /// ## Where This Runs
    /// ```text
    /// Catalog row: cost $1.00, markup 50%
    ///      │
    ///      ▼
    /// with_markup(Markup::from_bps(5000)) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Sell price: $1.50 on the quote line
    /// ```
    pub fn with_markup(&self, markup: Markup) -> Money {
        let sell_cents = (self.0 as i128 * (10000 + markup.bps() as i128) + 5000) / 10000;
        Money::from_cents(sell_cents as i64)
    }

    /// Multiplies by a (possibly fractional) quantity and rounds to the
    /// nearest cent.
    ///
    /// Quantities are fractional because linear items can be quoted by
    /// measured length, not just whole stock pieces.
    ///
    /// ## Example
    /// ```rust
    /// use rainline_core::money::Money;
    ///
    /// let sell = Money::from_cents(1250); // $12.50
    /// assert_eq!(sell.times_quantity(3.0).cents(), 3750);
    /// assert_eq!(sell.times_quantity(0.5).cents(), 625);
    /// ```
    pub fn times_quantity(&self, qty: f64) -> Money {
        Money::from_cents((self.0 as f64 * qty).round() as i64)
    }
}

// =============================================================================
// Markup Type
// =============================================================================

/// Markup percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000.
/// 2500 bps = 25% markup. The catalog's fractional percentages
/// (e.g. 22.5%) map losslessly to integer basis points (2250).
///
/// Signed: a negative markup is a legitimate catalog state (clearance
/// lines sell below cost) and must survive the pipeline untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Markup(i32);

impl Markup {
    /// Creates a markup from basis points.
    #[inline]
    pub const fn from_bps(bps: i32) -> Self {
        Markup(bps)
    }

    /// Creates a markup from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        Markup((pct * 100.0).round() as i32)
    }

    /// Returns the markup in basis points.
    #[inline]
    pub const fn bps(&self) -> i32 {
        self.0
    }

    /// Returns the markup as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero markup (sell at cost).
    #[inline]
    pub const fn zero() -> Self {
        Markup(0)
    }
}

impl Default for Markup {
    fn default() -> Self {
        Markup::zero()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. Use frontend formatting for actual UI display
/// to handle localization properly.
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

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
