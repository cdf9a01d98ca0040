/// Unwraps a `Maybe<T>` inside a function returning `Maybe<_>`.
///
/// - If `expr` evaluates to `Present(v)`, the macro yields `v`.
/// - If `expr` evaluates to `Absent`, the enclosing function returns `Absent`.
///
/// This is the usual first line of an adapter's `advance()`, which must
/// propagate upstream exhaustion unchanged.
macro_rules! present_or_return {
    ($expr:expr) => {
        match $expr {
            $crate::maybe::Maybe::Present(value) => value,
            $crate::maybe::Maybe::Absent => {
                return $crate::maybe::Maybe::Absent;
            }
        }
    };
}

pub(crate) use present_or_return;
