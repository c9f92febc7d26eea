use autosched_ir::PrimExpr;
use snafu::Snafu;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Looked-up element is absent from the array.
    #[snafu(display("cannot find the item in array of length {len}"))]
    ItemNotFound { len: usize },

    /// Expression was expected to be an integer immediate.
    #[snafu(display("expected an integer immediate, got {expr:?}"))]
    NotIntImm { expr: PrimExpr },

    /// Expression was expected to be a float immediate.
    #[snafu(display("expected a float immediate, got {expr:?}"))]
    NotFloatImm { expr: PrimExpr },

    /// Optional integer array has an undefined entry.
    #[snafu(display("integer array entry {index} is undefined"))]
    MissingInteger { index: usize },
}

/// Abort on a violated precondition.
#[track_caller]
pub fn fatal(error: Error) -> ! {
    tracing::error!(%error, "precondition violated");
    panic!("{error}");
}

/// Turns a precondition [`Result`] into its value, aborting through [`fatal`] on error.
pub trait OrFatal<T> {
    fn or_fatal(self) -> T;
}

impl<T> OrFatal<T> for Result<T> {
    #[track_caller]
    fn or_fatal(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => fatal(error),
        }
    }
}
