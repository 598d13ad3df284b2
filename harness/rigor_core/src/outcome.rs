//! What it means for a body to "raise".
//!
//! A body raises when it returns `Err(_)` or panics. [`capture`] runs a body
//! behind a panic boundary and hands back whatever escaped as a [`Raised`],
//! which the raise-expectation checks and the per-test boundary inspect.
//!
//! Kinds are concrete Rust types: an `Err(e)` has the kind of `e`'s type (for
//! a boxed `dyn Error`, the type inside the box), a panic has the kind of its
//! payload. Matching is exact; there is no supertype matching.

use std::any::{type_name, Any};
use std::error::Error;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// The usual boxed error a body returns.
pub type BoxError = Box<dyn Error + 'static>;

/// Something that escaped from a body.
pub enum Raised {
    /// The body returned `Err`.
    Error {
        /// Name of the error's kind.
        ///
        /// The declared type name, or for a boxed `dyn Error` the head of the
        /// inner error's `Debug` output.
        kind: String,
        description: String,
        error: Box<dyn Any>,
    },
    /// The body panicked.
    Panic(Box<dyn Any + Send + 'static>),
}

impl Raised {
    pub fn error<E>(error: E) -> Self
    where
        E: fmt::Debug + fmt::Display + 'static,
    {
        let description = error.to_string();
        let error: Box<dyn Any> = Box::new(error);
        let kind = boxed_error(&*error)
            .and_then(debug_head)
            .unwrap_or_else(|| type_name::<E>().to_owned());
        Raised::Error {
            kind,
            description,
            error,
        }
    }

    /// Message of a panic payload, when it carries one.
    fn panic_message(payload: &(dyn Any + Send)) -> Option<&str> {
        payload
            .downcast_ref::<&'static str>()
            .copied()
            .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
    }

    /// Name of the raised kind, or `None` for an unrecognised panic payload.
    pub fn kind_name(&self) -> Option<&str> {
        match self {
            Raised::Error { kind, .. } => Some(kind.as_str()),
            Raised::Panic(payload) => Self::panic_message(payload.as_ref()).map(|_| "panic"),
        }
    }

    /// Human-readable description, or `None` for an unrecognised panic payload.
    pub fn description(&self) -> Option<String> {
        match self {
            Raised::Error { description, .. } => Some(description.clone()),
            Raised::Panic(payload) => Self::panic_message(payload.as_ref()).map(str::to_owned),
        }
    }

    /// Whether the raised value is exactly of type `K`.
    ///
    /// A boxed `dyn Error` is looked through, so `Err(Box::new(e))` matches
    /// the type of `e`.
    pub fn is<K>(&self) -> bool
    where
        K: Error + 'static,
    {
        match self {
            Raised::Error { error, .. } => {
                error.is::<K>() || boxed_error(&**error).is_some_and(|inner| inner.is::<K>())
            }
            Raised::Panic(payload) => payload.is::<K>(),
        }
    }

    pub fn is_panic(&self) -> bool {
        matches!(self, Raised::Panic(_))
    }
}

/// The error inside a boxed `dyn Error`, whichever auto traits the box carries.
fn boxed_error(value: &dyn Any) -> Option<&(dyn Error + 'static)> {
    if let Some(boxed) = value.downcast_ref::<Box<dyn Error>>() {
        let inner: &(dyn Error + 'static) = &**boxed;
        return Some(inner);
    }
    if let Some(boxed) = value.downcast_ref::<Box<dyn Error + Send>>() {
        let inner: &(dyn Error + 'static) = &**boxed;
        return Some(inner);
    }
    if let Some(boxed) = value.downcast_ref::<Box<dyn Error + Send + Sync>>() {
        let inner: &(dyn Error + 'static) = &**boxed;
        return Some(inner);
    }
    None
}

/// Leading identifier of `error`'s `Debug` output (`ParseIntError { .. }`
/// gives `ParseIntError`).
fn debug_head(error: &(dyn Error + 'static)) -> Option<String> {
    let debug = format!("{error:?}");
    let head: String = debug
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    head.starts_with(char::is_alphabetic).then_some(head)
}

impl fmt::Display for Raised {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.description() {
            Some(description) => f.write_str(&description),
            None => f.write_str("unknown error"),
        }
    }
}

impl fmt::Debug for Raised {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Raised::Error {
                kind, description, ..
            } => f
                .debug_struct("Error")
                .field("kind", kind)
                .field("description", description)
                .finish_non_exhaustive(),
            Raised::Panic(_) => f
                .debug_tuple("Panic")
                .field(&self.description().unwrap_or_else(|| "<opaque>".into()))
                .finish(),
        }
    }
}

/// Return types a body may have.
///
/// `()` never raises; `Result<T, E>` raises its `Err`.
pub trait Outcome {
    fn into_raised(self) -> Option<Raised>;
}

impl Outcome for () {
    fn into_raised(self) -> Option<Raised> {
        None
    }
}

impl<T, E> Outcome for Result<T, E>
where
    E: fmt::Debug + fmt::Display + 'static,
{
    fn into_raised(self) -> Option<Raised> {
        self.err().map(Raised::error)
    }
}

/// Run `body`, returning whatever it raised.
///
/// Panics are caught here and never unwind past this call.
pub fn capture<F, O>(body: F) -> Option<Raised>
where
    F: FnOnce() -> O,
    O: Outcome,
{
    catch(|| body().into_raised())
}

/// Run an already-converted body, turning a panic into [`Raised::Panic`].
pub(crate) fn catch(body: impl FnOnce() -> Option<Raised>) -> Option<Raised> {
    catch_unwind(AssertUnwindSafe(body)).unwrap_or_else(|payload| Some(Raised::Panic(payload)))
}
