//! Cases: a guard paired with a handler.
//!
//! Every case is split into two stages. The applicability stage looks at the
//! input and either rejects it or produces the adapted value the handler
//! expects. Only then does the handler run, and whatever it returns,
//! success or error, is the case's result. Nothing the handler does can turn
//! into a rejection.

use std::any::{Any, type_name};
use std::fmt::{self, Debug};
use std::sync::Arc;

use crate::error::MatchError;
use crate::kind::Kind;
use crate::scrutinee::Input;

/// Applicability test of a [`Case`], fixed at registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guard {
    /// Accepts only the null input.
    Null,

    /// Accepts an input of the same runtime type that compares equal.
    Value {
        type_name: &'static str,
        repr:      String,
    },

    /// Accepts an input the named [`Kind`] can view.
    Type { name: &'static str },

    /// Accepts an input of the given type that satisfies a predicate.
    Predicate { type_name: &'static str },

    /// Accepts every input, null included.
    Unconditional,
}

impl fmt::Display for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Guard::Null => write!(f, "null"),
            Guard::Value { type_name, repr } => write!(f, "value {repr} of type `{type_name}`"),
            Guard::Type { name } => write!(f, "type `{name}`"),
            Guard::Predicate { type_name } => write!(f, "predicate on `{type_name}`"),
            Guard::Unconditional => write!(f, "default"),
        }
    }
}

/// `None` is a guard rejection; `Some` carries the handler's own result.
type Arm<R, E> = Box<dyn Fn(Input<'_>) -> Option<Result<R, E>> + Send + Sync>;

/// One guard and handler pair. Immutable once built.
pub struct Case<R, E = MatchError> {
    guard: Guard,
    arm:   Arm<R, E>,
}

impl<R, E> Case<R, E> {
    pub fn null(handler: impl Fn() -> Result<R, E> + Send + Sync + 'static) -> Self {
        Self {
            guard: Guard::Null,
            arm:   Box::new(move |input: Input<'_>| match input {
                None => Some(handler()),
                Some(_) => None,
            }),
        }
    }

    /// Equality is `PartialEq` between values of the same runtime type;
    /// an input of any other type is never equal. Floats compare the IEEE
    /// way: a `NaN` guard matches nothing, and `-0.0` matches a `0.0` guard.
    pub fn value<V>(value: V, handler: impl Fn(&V) -> Result<R, E> + Send + Sync + 'static) -> Self
    where
        V: PartialEq + Debug + Send + Sync + 'static,
    {
        let guard = Guard::Value {
            type_name: type_name::<V>(),
            repr:      format!("{value:?}"),
        };
        Self {
            guard,
            arm: Box::new(move |input: Input<'_>| {
                let candidate = input?
                    .as_any()
                    .downcast_ref::<V>()
                    .filter(|candidate| **candidate == value)?;
                Some(handler(candidate))
            }),
        }
    }

    /// Null never satisfies a type guard.
    pub fn kind<K: Kind>(handler: impl Fn(&K::View) -> Result<R, E> + Send + Sync + 'static) -> Self {
        Self {
            guard: Guard::Type { name: K::name() },
            arm:   Box::new(move |input: Input<'_>| {
                let view = K::view(input?.as_any())?;
                Some(handler(view))
            }),
        }
    }

    /// The predicate belongs to the guard: a `false` rejects the input just
    /// like a failed cast does.
    pub fn predicate<T: Any>(
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
        handler: impl Fn(&T) -> Result<R, E> + Send + Sync + 'static,
    ) -> Self {
        Self {
            guard: Guard::Predicate {
                type_name: type_name::<T>(),
            },
            arm:   Box::new(move |input: Input<'_>| {
                let candidate = input?
                    .as_any()
                    .downcast_ref::<T>()
                    .filter(|candidate| predicate(*candidate))?;
                Some(handler(candidate))
            }),
        }
    }

    pub fn unconditional(handler: impl Fn(Input<'_>) -> Result<R, E> + Send + Sync + 'static) -> Self {
        Self {
            guard: Guard::Unconditional,
            arm:   Box::new(move |input: Input<'_>| Some(handler(input))),
        }
    }

    pub fn guard(&self) -> &Guard { &self.guard }

    pub(crate) fn dispatch(&self, input: Input<'_>) -> Option<Result<R, E>> { (self.arm)(input) }

    pub(crate) fn map<S, G>(self, f: Arc<G>) -> Case<S, E>
    where
        R: 'static,
        E: 'static,
        G: Fn(R) -> S + Send + Sync + 'static,
    {
        let arm = self.arm;
        Case {
            guard: self.guard,
            arm:   Box::new(move |input: Input<'_>| arm(input).map(|result| result.map(|r| f(r)))),
        }
    }
}

impl<R, E> Debug for Case<R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Case")
            .field("guard", &self.guard)
            .finish_non_exhaustive()
    }
}
