//! `Result` alias and the argument checks adapters run at construction time.

pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Returns early with `InvalidArgument` when a combinator argument fails its check.
///
/// The error names the argument and carries the failed condition as source
/// text, e.g. `verify_arg!(step, step > 0)` on `step == 0` reports
/// `invalid argument step: step > 0`.
#[macro_export]
macro_rules! verify_arg {
    ($arg:ident, $check:expr) => {{
        let holds = $check;
        $crate::result::verify_arg(holds, stringify!($arg), stringify!($check))?;
    }};
}

#[inline]
pub fn verify_arg(holds: bool, arg: &str, check: &str) -> Result<()> {
    if holds {
        Ok(())
    } else {
        invalid_arg(arg, check)
    }
}

#[cold]
pub fn invalid_arg(arg: &str, check: &str) -> Result<()> {
    Err(crate::error::Error::invalid_arg(arg, check))
}
