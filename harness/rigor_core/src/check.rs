//! Check evaluation.
//!
//! Each check is split in two halves:
//! - a pure verdict function ([`equal`], [`relation`], [`boolean`],
//!   [`raises_anything`], [`raises_kind`], [`raises_nothing`]) that looks at
//!   already-evaluated operands and produces a [`Verdict`];
//! - [`run`] / [`evaluate`], which evaluate the operands exactly once behind a
//!   panic boundary and record the verdict on a context.
//!
//! The `check_*!` macros combine the two against the current context. Code that
//! already holds a [`TestContext`] can call [`run`] directly and skip the
//! thread-local lookup:
//!
//! ```text
//! check::run(&ctx, location!(), "len", || check::equal(&v.len(), &3, "v.len()", "3"));
//! ```
//!
//! Operands are rendered with `Debug`. Successes are silent; only failures and
//! warnings produce events.

use std::fmt::Debug;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::context::TestContext;
use crate::location::Location;
use crate::outcome::Raised;
use crate::scope::ScopedTest;

/// Result of a single check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    /// The check did not hold; the message describes why.
    Fail(String),
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

/// Ordering relation checked by `check_lt!` and friends.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Relation {
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl Relation {
    pub const fn symbol(self) -> &'static str {
        match self {
            Relation::Less => "<",
            Relation::LessOrEqual => "<=",
            Relation::Greater => ">",
            Relation::GreaterOrEqual => ">=",
        }
    }

    pub fn holds<L, R>(self, lhs: &L, rhs: &R) -> bool
    where
        L: PartialOrd<R>,
    {
        match self {
            Relation::Less => lhs < rhs,
            Relation::LessOrEqual => lhs <= rhs,
            Relation::Greater => lhs > rhs,
            Relation::GreaterOrEqual => lhs >= rhs,
        }
    }
}

/// Default structural equality used by [`equal`].
#[inline]
pub fn equals<L, R>(lhs: &L, rhs: &R) -> bool
where
    L: PartialEq<R>,
{
    lhs == rhs
}

pub fn equal<L, R>(lhs: &L, rhs: &R, lhs_src: &str, rhs_src: &str) -> Verdict
where
    L: PartialEq<R> + Debug,
    R: Debug,
{
    equal_by(lhs, rhs, |l, r| equals(l, r), lhs_src, rhs_src)
}

/// Equality check with a caller-supplied comparison.
pub fn equal_by<L, R>(
    lhs: &L,
    rhs: &R,
    eq: impl FnOnce(&L, &R) -> bool,
    lhs_src: &str,
    rhs_src: &str,
) -> Verdict
where
    L: Debug,
    R: Debug,
{
    if eq(lhs, rhs) {
        Verdict::Pass
    } else {
        Verdict::Fail(format!("'{lhs_src} == {rhs_src}': {lhs:?} != {rhs:?}"))
    }
}

pub fn relation<L, R>(rel: Relation, lhs: &L, rhs: &R, lhs_src: &str, rhs_src: &str) -> Verdict
where
    L: PartialOrd<R> + Debug,
    R: Debug,
{
    if rel.holds(lhs, rhs) {
        Verdict::Pass
    } else {
        Verdict::Fail(format!(
            "'{lhs_src} {} {rhs_src}': {lhs:?} and {rhs:?}",
            rel.symbol()
        ))
    }
}

pub fn boolean(expected: bool, value: bool, src: &str) -> Verdict {
    if value == expected {
        Verdict::Pass
    } else {
        Verdict::Fail(src.to_owned())
    }
}

pub fn raises_anything(raised: Option<Raised>, src: &str) -> Verdict {
    match raised {
        Some(_) => Verdict::Pass,
        None => Verdict::Fail(format!("Expected this code to raise: '{src}'")),
    }
}

/// Passes iff `raised` is exactly of kind `K`.
pub fn raises_kind<K>(raised: Option<Raised>, kind_src: &str, src: &str) -> Verdict
where
    K: std::error::Error + 'static,
{
    let Some(raised) = raised else {
        return Verdict::Fail(format!("Expected this code to raise {kind_src}: '{src}'"));
    };
    if raised.is::<K>() {
        return Verdict::Pass;
    }
    match (raised.kind_name(), raised.description()) {
        (Some(kind), Some(description)) => Verdict::Fail(format!(
            "Expected this code to raise {kind_src}: '{src}', got {kind}: {description}"
        )),
        _ => Verdict::Fail(format!(
            "Expected this code to raise {kind_src}: '{src}', got unknown error type"
        )),
    }
}

pub fn raises_nothing(raised: Option<Raised>, src: &str) -> Verdict {
    match raised {
        None => Verdict::Pass,
        Some(raised) => match raised.description() {
            Some(description) => Verdict::Fail(format!(
                "Expected this code not to raise: '{src}', got: {description}"
            )),
            None => Verdict::Fail(format!(
                "Expected this code not to raise: '{src}', got unknown error"
            )),
        },
    }
}

/// Evaluate `check` and record its verdict on `context`.
///
/// A panic while evaluating the check is recorded as a failure of the check
/// (described against `source`) instead of unwinding further.
pub fn run(
    context: &TestContext,
    location: Location,
    source: &str,
    check: impl FnOnce() -> Verdict,
) {
    let verdict = match catch_unwind(AssertUnwindSafe(check)) {
        Ok(verdict) => verdict,
        Err(payload) => raises_nothing(Some(Raised::Panic(payload)), source),
    };
    context.record(location, verdict);
}

/// [`run`] against the current context.
///
/// # Panics
///
/// Panics when called outside of a running test.
pub fn evaluate(location: Location, source: &str, check: impl FnOnce() -> Verdict) {
    ScopedTest::with_current(|context| run(context, location, source, check));
}

/// Report a free-form failure into the current context.
pub fn report_error(location: Location, message: String) {
    ScopedTest::with_current(|context| context.assertion_failed(location, message));
}

/// Report a warning into the current context.
pub fn report_warning(location: Location, message: String) {
    ScopedTest::with_current(|context| context.report_warning(location, message));
}
