//! Text rendering of appended values
//!
//! Rendering is locale independent:
//! - `bool` renders as `true` / `false`
//! - integers render in plain decimal
//! - floats render in fixed notation with six fractional digits
//!   (`3.141596`, `42.000000`); NaN is `nan`, infinities are `inf` / `-inf`

use std::borrow::Cow;

/// Fractional digits used for floating-point values.
pub const FLOAT_PRECISION: usize = 6;

/// A value that can be appended to the current log line.
pub trait Loggable {
    fn to_log_text(&self) -> Cow<'_, str>;
}

impl Loggable for str {
    fn to_log_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Loggable for String {
    fn to_log_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl Loggable for Cow<'_, str> {
    fn to_log_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

impl Loggable for char {
    fn to_log_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl Loggable for bool {
    fn to_log_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(if *self { "true" } else { "false" })
    }
}

impl<T: Loggable + ?Sized> Loggable for &T {
    fn to_log_text(&self) -> Cow<'_, str> {
        (**self).to_log_text()
    }
}

macro_rules! impl_loggable_integer {
    ($($ty:ty),*) => {
        $(
            impl Loggable for $ty {
                fn to_log_text(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_loggable_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

fn float_text(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "inf" } else { "-inf" };
        text.to_string()
    } else {
        format!("{:.*}", FLOAT_PRECISION, value)
    }
}

impl Loggable for f64 {
    fn to_log_text(&self) -> Cow<'_, str> {
        Cow::Owned(float_text(*self))
    }
}

impl Loggable for f32 {
    fn to_log_text(&self) -> Cow<'_, str> {
        Cow::Owned(float_text(f64::from(*self)))
    }
}
