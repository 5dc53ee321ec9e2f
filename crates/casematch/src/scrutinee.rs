//! Dynamically typed match input.

use std::any::Any;
use std::fmt::Debug;
use std::rc::Rc;
use std::sync::Arc;

/// A value of unknown static type that a [`Matcher`](crate::Matcher) can dispatch on.
///
/// Implemented for every `'static` type with a `Debug` rendering. The
/// rendering is only used to describe unmatched input in
/// [`MatchError`](crate::MatchError).
pub trait Scrutinee: Any + Debug {
    fn as_any(&self) -> &dyn Any;
    fn type_name(&self) -> &'static str;
}

impl<T: Any + Debug> Scrutinee for T {
    fn as_any(&self) -> &dyn Any { self }

    fn type_name(&self) -> &'static str { std::any::type_name::<T>() }
}

/// Input to a dispatch. `None` is the null input.
pub type Input<'a> = Option<&'a dyn Scrutinee>;

/// Looks through `Box`, `Rc` and `Arc` of `dyn Scrutinee` to the value held.
///
/// The blanket impl makes those pointers scrutinees in their own right, and
/// dispatching on the pointer type would miss every guard.
pub(crate) fn unwrap_pointers(mut value: &dyn Scrutinee) -> &dyn Scrutinee {
    macro_rules! held_by {
        ($any:expr, $($ptr:ty),* $(,)?) => {
            $(
                if let Some(ptr) = $any.downcast_ref::<$ptr>() {
                    let inner: &dyn Scrutinee = &**ptr;
                    Some(inner)
                } else
            )* {
                None
            }
        };
    }

    loop {
        let inner = held_by!(
            value.as_any(),
            Box<dyn Scrutinee>,
            Box<dyn Scrutinee + Send + Sync>,
            Arc<dyn Scrutinee>,
            Arc<dyn Scrutinee + Send + Sync>,
            Rc<dyn Scrutinee>,
        );
        match inner {
            Some(inner) => value = inner,
            None => return value,
        }
    }
}
