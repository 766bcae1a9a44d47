//! Currency Catalog
//!
//! The fixed set of currency codes the forex API understands. Every code is
//! declared once in the `define_currencies!` invocation below, which generates
//! the `CurrencyCode` enum together with its parsing and listing helpers.
//! Because each code becomes an enum variant, a duplicate entry is a compile
//! error rather than a runtime surprise.
//!
//! # Adding a New Currency
//! Add a line to the `define_currencies!` invocation:
//! ```ignore
//! define_currencies! {
//!     // ... existing currencies ...
//!     SEK => ("SEK", "Swedish krona"),
//! }
//! ```
//!
//! # Example
//! ```
//! use forex_currencies::{CurrencyCode, DEFAULT_BASE, is_known};
//!
//! assert!(is_known("USD"));
//! assert!(!is_known("usd"));
//! assert_eq!("GBP".parse::<CurrencyCode>().unwrap(), CurrencyCode::GBP);
//! assert_eq!(DEFAULT_BASE.code(), "EUR");
//! ```

/// Error returned when a string is not an exact catalog code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown currency: {0}")]
pub struct UnknownCurrency(pub String);

// ─────────────────────────────────────────────────────────────────────────────
// THE MACRO: Defines the CurrencyCode enum and its runtime lookups
// ─────────────────────────────────────────────────────────────────────────────

/// Macro to define the catalog with an auto-generated enum and lookups.
///
/// # Syntax
/// ```ignore
/// define_currencies! {
///     Variant => ("CODE", "display name"),
/// }
/// ```
#[macro_export]
macro_rules! define_currencies {
    (
        $(
            $name:ident => ($code:literal, $display:literal)
        ),* $(,)?
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
        pub enum CurrencyCode {
            $($name),*
        }

        impl CurrencyCode {
            /// The ISO-style three letter code, e.g. `"USD"`.
            pub fn code(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $code),*
                }
            }

            /// Human readable currency name.
            pub fn name(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $display),*
                }
            }

            /// Every code in the catalog, in declaration order.
            pub fn all() -> &'static [CurrencyCode] {
                &[$(CurrencyCode::$name),*]
            }
        }

        impl std::fmt::Display for CurrencyCode {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }

        // Exact match only; callers normalize case before parsing.
        impl std::str::FromStr for CurrencyCode {
            type Err = UnknownCurrency;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($code => Ok(CurrencyCode::$name),)*
                    _ => Err(UnknownCurrency(s.to_string())),
                }
            }
        }
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// CURRENCY DEFINITIONS
// ─────────────────────────────────────────────────────────────────────────────

define_currencies! {
    EUR => ("EUR", "Euro"),
    USD => ("USD", "US dollar"),
    JPY => ("JPY", "Japanese yen"),
    BGN => ("BGN", "Bulgarian lev"),
    CYP => ("CYP", "Cypriot pound"),
    CZK => ("CZK", "Czech koruna"),
    DKK => ("DKK", "Danish krone"),
    EEK => ("EEK", "Estonian kroon"),
    GBP => ("GBP", "Pound sterling"),
    HUF => ("HUF", "Hungarian forint"),
    LTL => ("LTL", "Lithuanian litas"),
    LVL => ("LVL", "Latvian lats"),
    MTL => ("MTL", "Maltese lira"),
    PLN => ("PLN", "Polish zloty"),
    ROL => ("ROL", "Romanian leu (old)"),
    RON => ("RON", "Romanian leu"),
    SEK => ("SEK", "Swedish krona"),
    SIT => ("SIT", "Slovenian tolar"),
    SKK => ("SKK", "Slovak koruna"),
    CHF => ("CHF", "Swiss franc"),
    ISK => ("ISK", "Icelandic krona"),
    ILS => ("ILS", "Israeli new shekel"),
    NOK => ("NOK", "Norwegian krone"),
    HRK => ("HRK", "Croatian kuna"),
    RUB => ("RUB", "Russian rouble"),
    TRL => ("TRL", "Turkish lira (old)"),
    TRY => ("TRY", "Turkish lira"),
    AUD => ("AUD", "Australian dollar"),
    BRL => ("BRL", "Brazilian real"),
    CAD => ("CAD", "Canadian dollar"),
    CNY => ("CNY", "Chinese yuan renminbi"),
    HKD => ("HKD", "Hong Kong dollar"),
    IDR => ("IDR", "Indonesian rupiah"),
    INR => ("INR", "Indian rupee"),
    KRW => ("KRW", "South Korean won"),
    MXN => ("MXN", "Mexican peso"),
    MYR => ("MYR", "Malaysian ringgit"),
    NZD => ("NZD", "New Zealand dollar"),
    PHP => ("PHP", "Philippine peso"),
    SGD => ("SGD", "Singapore dollar"),
    THB => ("THB", "Thai baht"),
    ZAR => ("ZAR", "South African rand"),
}

/// Base currency used whenever a request names none, or names one outside
/// the catalog.
pub const DEFAULT_BASE: CurrencyCode = CurrencyCode::EUR;

/// Exact, case-sensitive membership test against the catalog.
pub fn is_known(code: &str) -> bool {
    code.parse::<CurrencyCode>().is_ok()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
