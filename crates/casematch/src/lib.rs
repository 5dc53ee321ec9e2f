//! First-match-wins case dispatch over values of unknown static type.
//!
//! # Architecture
//!
//! A [`Matcher`] is an ordered list of [`Case`]s. Each case pairs a
//! [`Guard`] with a handler. [`Matcher::apply`] walks the cases in
//! registration order and runs the handler of the first case whose guard
//! accepts the input. If none does, the result is a [`MatchError`].
//!
//! Guards come in four flavours:
//!
//! - **Null**: accepts only the null input ([`Matcher::apply_null`]).
//! - **Value**: accepts an input equal to a fixed value of the same type.
//! - **Type**: accepts an input some [`Kind`] can view, either one exact
//!   type ([`Exact`]) or a family ([`Number`], [`Text`], or your own).
//! - **Unconditional**: accepts everything; the default case.
//!
//! Predicate cases ([`Matcher::when`]) narrow a type guard with a test on
//! the cast value.
//!
//! A guard decides before its handler runs. Errors returned by a handler,
//! and panics raised by one, pass through `apply` unchanged and never cause
//! the scan to move on to a later case.
//!
//! # Example
//!
//! ```
//! use casematch::{Matcher, Number};
//!
//! let describe = Matcher::new()
//!     .when_null(|| "nothing".to_string())
//!     .when_value(0_i32, |_| "zero".to_string())
//!     .when_kind::<Number>(|n| format!("number {}", n.to_f64()))
//!     .otherwise(|_| "something else".to_string());
//!
//! assert_eq!(describe.apply(&0_i32).unwrap(), "zero");
//! assert_eq!(describe.apply(&2.5_f64).unwrap(), "number 2.5");
//! assert_eq!(describe.apply(&"text").unwrap(), "something else");
//! assert_eq!(describe.apply_null().unwrap(), "nothing");
//! ```

pub use self::case::{Case, Guard};
pub use self::error::{MatchError, Result};
pub use self::kind::{Erased, Exact, Kind, Number, Numeric, Text};
pub use self::matcher::Matcher;
pub use self::scrutinee::{Input, Scrutinee};

mod case;
mod error;
mod kind;
mod matcher;
mod scrutinee;
