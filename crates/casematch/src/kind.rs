//! Runtime type witnesses for type-guarded cases.
//!
//! A [`Kind`] answers one question for the dispatcher: can this input be
//! viewed as my type? The answer is the guard's verdict. A kind may cover a
//! single concrete type ([`Exact`]) or a family of them ([`Number`],
//! [`Text`]), which is how a case declared for a general type accepts every
//! more specific one.

use std::any::{Any, type_name};
use std::borrow::Cow;
use std::fmt::Debug;
use std::marker::PhantomData;

/// Runtime type test behind a type-guarded case.
///
/// Implement it to give a case a family of accepted types of your own.
pub trait Kind: 'static {
    /// What the handler of a case guarded by this kind receives.
    type View: ?Sized;

    fn name() -> &'static str;

    /// `None` rejects the input.
    fn view(value: &dyn Any) -> Option<&Self::View>;
}

/// Accepts values whose runtime type is exactly `T`.
pub struct Exact<T>(PhantomData<fn() -> T>);

impl<T: Any> Kind for Exact<T> {
    type View = T;

    fn name() -> &'static str { type_name::<T>() }

    fn view(value: &dyn Any) -> Option<&T> { value.downcast_ref() }
}

/// A container `C` nominally carrying an `A`.
///
/// Only `C` is tested at runtime. Two guards that differ in `A` alone are
/// indistinguishable, so the first one registered always wins and the
/// handler is responsible for checking what the container really holds.
pub struct Erased<C, A>(PhantomData<fn() -> (C, A)>);

impl<C: Any, A: 'static> Kind for Erased<C, A> {
    type View = C;

    fn name() -> &'static str { type_name::<C>() }

    fn view(value: &dyn Any) -> Option<&C> { value.downcast_ref() }
}

/// Common view over every primitive number type.
pub trait Numeric: Debug {
    fn to_f64(&self) -> f64;

    /// The value as an integer when it is integral and in range.
    fn to_i64(&self) -> Option<i64>;
}

macro_rules! integral {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Numeric for $ty {
                fn to_f64(&self) -> f64 { *self as f64 }

                fn to_i64(&self) -> Option<i64> { i64::try_from(*self).ok() }
            }
        )*
    };
}

macro_rules! floating {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Numeric for $ty {
                fn to_f64(&self) -> f64 { f64::from(*self) }

                fn to_i64(&self) -> Option<i64> {
                    let value = f64::from(*self);
                    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
                    (value.fract() == 0.0 && in_range).then(|| value as i64)
                }
            }
        )*
    };
}

integral!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
floating!(f32, f64);

/// Accepts any primitive integer or float.
pub struct Number;

impl Kind for Number {
    type View = dyn Numeric;

    fn name() -> &'static str { "number" }

    fn view(value: &dyn Any) -> Option<&Self::View> {
        macro_rules! first_of {
            ($($ty:ty),* $(,)?) => {
                $(
                    if let Some(n) = value.downcast_ref::<$ty>() {
                        let n: &(dyn Numeric + 'static) = n;
                        return Some(n);
                    }
                )*
            };
        }

        first_of!(i32, i64, f64, u8, u32, usize, u64, i8, i16, u16, f32, i128, u128, isize);
        None
    }
}

/// Accepts owned and borrowed string types, viewed as `str`.
pub struct Text;

impl Kind for Text {
    type View = str;

    fn name() -> &'static str { "text" }

    fn view(value: &dyn Any) -> Option<&str> {
        if let Some(s) = value.downcast_ref::<String>() {
            return Some(s.as_str());
        }
        if let Some(s) = value.downcast_ref::<&'static str>() {
            return Some(*s);
        }
        if let Some(s) = value.downcast_ref::<Box<str>>() {
            return Some(&**s);
        }
        value
            .downcast_ref::<Cow<'static, str>>()
            .map(|s| s.as_ref())
    }
}
