//! Ordered case registry and first-match dispatch.

use std::any::Any;
use std::fmt::{self, Debug};
use std::sync::Arc;

use tracing::{debug, trace};

use crate::case::{Case, Guard};
use crate::error::MatchError;
use crate::kind::{Exact, Kind};
use crate::scrutinee::{Input, Scrutinee, unwrap_pointers};

/// An append-only list of cases, tried in registration order.
///
/// Registration consumes and returns the matcher so calls chain. Once built,
/// a matcher is only read: [`apply`](Matcher::apply) takes `&self`, so one
/// instance can serve any number of inputs, from any number of threads.
///
/// Handlers either return `R` directly (`when_*`, `otherwise`) or return
/// `Result<R, E>` (`try_*`). A handler's error is returned from `apply` as
/// is; a miss is reported as `E::from(MatchError)`.
pub struct Matcher<R, E = MatchError> {
    cases: Vec<Case<R, E>>,
}

impl<R> Matcher<R> {
    pub fn new() -> Self { Self::default() }
}

impl<R, E> Default for Matcher<R, E> {
    fn default() -> Self { Self { cases: Vec::new() } }
}

impl<R, E> Matcher<R, E> {
    /// Appends a prebuilt case.
    pub fn case(mut self, case: Case<R, E>) -> Self {
        self.cases.push(case);
        self
    }

    pub fn when_null(self, handler: impl Fn() -> R + Send + Sync + 'static) -> Self {
        self.try_when_null(move || Ok(handler()))
    }

    pub fn try_when_null(self, handler: impl Fn() -> Result<R, E> + Send + Sync + 'static) -> Self {
        self.case(Case::null(handler))
    }

    pub fn when_value<V>(self, value: V, handler: impl Fn(&V) -> R + Send + Sync + 'static) -> Self
    where
        V: PartialEq + Debug + Send + Sync + 'static,
    {
        self.try_when_value(value, move |v| Ok(handler(v)))
    }

    pub fn try_when_value<V>(
        self,
        value: V,
        handler: impl Fn(&V) -> Result<R, E> + Send + Sync + 'static,
    ) -> Self
    where
        V: PartialEq + Debug + Send + Sync + 'static,
    {
        self.case(Case::value(value, handler))
    }

    /// Case for inputs whose runtime type is exactly `T`.
    pub fn when_type<T: Any>(self, handler: impl Fn(&T) -> R + Send + Sync + 'static) -> Self {
        self.when_kind::<Exact<T>>(handler)
    }

    pub fn try_when_type<T: Any>(
        self,
        handler: impl Fn(&T) -> Result<R, E> + Send + Sync + 'static,
    ) -> Self {
        self.try_when_kind::<Exact<T>>(handler)
    }

    /// Case for every input `K` can view, such as any
    /// [`Number`](crate::Number) for a numeric case.
    pub fn when_kind<K: Kind>(self, handler: impl Fn(&K::View) -> R + Send + Sync + 'static) -> Self {
        self.try_when_kind::<K>(move |view| Ok(handler(view)))
    }

    pub fn try_when_kind<K: Kind>(
        self,
        handler: impl Fn(&K::View) -> Result<R, E> + Send + Sync + 'static,
    ) -> Self {
        self.case(Case::kind::<K>(handler))
    }

    /// Case for inputs of type `T` that satisfy `predicate`.
    pub fn when<T: Any>(
        self,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
        handler: impl Fn(&T) -> R + Send + Sync + 'static,
    ) -> Self {
        self.try_when(predicate, move |v| Ok(handler(v)))
    }

    pub fn try_when<T: Any>(
        self,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
        handler: impl Fn(&T) -> Result<R, E> + Send + Sync + 'static,
    ) -> Self {
        self.case(Case::predicate(predicate, handler))
    }

    /// Catch-all case. Accepts null as well.
    pub fn otherwise(self, handler: impl Fn(Input<'_>) -> R + Send + Sync + 'static) -> Self {
        self.try_otherwise(move |input| Ok(handler(input)))
    }

    pub fn try_otherwise(
        self,
        handler: impl Fn(Input<'_>) -> Result<R, E> + Send + Sync + 'static,
    ) -> Self {
        self.case(Case::unconditional(handler))
    }

    /// Converts the result of every handler registered so far.
    pub fn map<S>(self, f: impl Fn(R) -> S + Send + Sync + 'static) -> Matcher<S, E>
    where
        R: 'static,
        E: 'static,
    {
        let f = Arc::new(f);
        Matcher {
            cases: self
                .cases
                .into_iter()
                .map(|case| case.map(Arc::clone(&f)))
                .collect(),
        }
    }

    pub fn len(&self) -> usize { self.cases.len() }

    pub fn is_empty(&self) -> bool { self.cases.is_empty() }

    /// Guards in the order they are tried.
    pub fn guards(&self) -> impl Iterator<Item = &Guard> + '_ { self.cases.iter().map(Case::guard) }
}

impl<R, E> Matcher<R, E>
where
    E: From<MatchError>,
{
    pub fn apply<T: Scrutinee>(&self, input: &T) -> Result<R, E> {
        let input: &dyn Scrutinee = input;
        self.apply_input(Some(input))
    }

    pub fn apply_null(&self) -> Result<R, E> { self.apply_input(None) }

    /// Runs the first case whose guard accepts `input`.
    ///
    /// A boxed or shared `dyn Scrutinee` is dispatched on the value it
    /// holds, not on the pointer. At most one handler runs. Its result, `Ok`
    /// or `Err`, is returned without inspection; later cases are never
    /// consulted.
    pub fn apply_input(&self, input: Input<'_>) -> Result<R, E> {
        let input = input.map(unwrap_pointers);
        for (index, case) in self.cases.iter().enumerate() {
            match case.dispatch(input) {
                Some(result) => {
                    trace!(index, guard = %case.guard(), "case matched");
                    return result;
                }
                None => trace!(index, guard = %case.guard(), "case rejected"),
            }
        }

        let err = MatchError::for_input(input);
        debug!(cases = self.cases.len(), error = %err, "no case matched");
        Err(err.into())
    }
}

impl<R, E> Debug for Matcher<R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("cases", &self.cases)
            .finish()
    }
}
