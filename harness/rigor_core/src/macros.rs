//! Check and reporting macros.
//!
//! Every macro reports into the current test (see
//! [`ScopedTest::current`](crate::ScopedTest::current)) and tags the report
//! with the macro's own location. Operands are evaluated exactly once, and a
//! failed check does not stop the test body.

/// Capture the current source position as a [`Location`](crate::Location).
#[macro_export]
macro_rules! location {
    () => {
        $crate::Location::new(::core::file!(), ::core::line!())
    };
}

/// Check that a condition is true.
#[macro_export]
macro_rules! check {
    ($cond:expr $(,)?) => {
        $crate::check::evaluate(
            $crate::location!(),
            ::core::concat!("check!(", ::core::stringify!($cond), ")"),
            || $crate::check::boolean(true, $cond, ::core::stringify!($cond)),
        )
    };
}

/// Check that a condition is false.
#[macro_export]
macro_rules! check_false {
    ($cond:expr $(,)?) => {
        $crate::check::evaluate(
            $crate::location!(),
            ::core::concat!("check_false!(", ::core::stringify!($cond), ")"),
            || $crate::check::boolean(false, $cond, ::core::stringify!($cond)),
        )
    };
}

/// Check that two values are equal (`PartialEq`).
///
/// The failure message renders both operands with `Debug`, in call order.
#[macro_export]
macro_rules! check_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::check::evaluate(
            $crate::location!(),
            ::core::concat!(
                "check_eq!(",
                ::core::stringify!($lhs),
                ", ",
                ::core::stringify!($rhs),
                ")"
            ),
            || {
                $crate::check::equal(
                    &$lhs,
                    &$rhs,
                    ::core::stringify!($lhs),
                    ::core::stringify!($rhs),
                )
            },
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __check_relation {
    ($rel:ident, $name:literal, $lhs:expr, $rhs:expr) => {
        $crate::check::evaluate(
            $crate::location!(),
            ::core::concat!(
                $name,
                "!(",
                ::core::stringify!($lhs),
                ", ",
                ::core::stringify!($rhs),
                ")"
            ),
            || {
                $crate::check::relation(
                    $crate::Relation::$rel,
                    &$lhs,
                    &$rhs,
                    ::core::stringify!($lhs),
                    ::core::stringify!($rhs),
                )
            },
        )
    };
}

/// Check `lhs < rhs`.
#[macro_export]
macro_rules! check_lt {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::__check_relation!(Less, "check_lt", $lhs, $rhs)
    };
}

/// Check `lhs <= rhs`.
#[macro_export]
macro_rules! check_le {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::__check_relation!(LessOrEqual, "check_le", $lhs, $rhs)
    };
}

/// Check `lhs > rhs`.
#[macro_export]
macro_rules! check_gt {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::__check_relation!(Greater, "check_gt", $lhs, $rhs)
    };
}

/// Check `lhs >= rhs`.
#[macro_export]
macro_rules! check_ge {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::__check_relation!(GreaterOrEqual, "check_ge", $lhs, $rhs)
    };
}

/// Check that a body raises anything: returns `Err` or panics.
///
/// ```text
/// check_raises!("x".parse::<i32>());
/// check_raises!(panic!("boom"));
/// ```
#[macro_export]
macro_rules! check_raises {
    ($($body:tt)+) => {
        $crate::check::evaluate(
            $crate::location!(),
            ::core::concat!("check_raises!(", ::core::stringify!($($body)+), ")"),
            || {
                $crate::check::raises_anything(
                    $crate::capture(|| { $($body)+ }),
                    ::core::stringify!($($body)+),
                )
            },
        )
    };
}

/// Check that a body raises exactly the error kind `K`.
///
/// ```text
/// check_raises_kind!(std::num::ParseIntError, "x".parse::<i32>());
/// ```
#[macro_export]
macro_rules! check_raises_kind {
    ($kind:ty, $($body:tt)+) => {
        $crate::check::evaluate(
            $crate::location!(),
            ::core::concat!(
                "check_raises_kind!(",
                ::core::stringify!($kind),
                ", ",
                ::core::stringify!($($body)+),
                ")"
            ),
            || {
                $crate::check::raises_kind::<$kind>(
                    $crate::capture(|| { $($body)+ }),
                    ::core::stringify!($kind),
                    ::core::stringify!($($body)+),
                )
            },
        )
    };
}

/// Check that a body neither returns `Err` nor panics.
#[macro_export]
macro_rules! check_no_raise {
    ($($body:tt)+) => {
        $crate::check::evaluate(
            $crate::location!(),
            ::core::concat!("check_no_raise!(", ::core::stringify!($($body)+), ")"),
            || {
                $crate::check::raises_nothing(
                    $crate::capture(|| { $($body)+ }),
                    ::core::stringify!($($body)+),
                )
            },
        )
    };
}

/// Report a failure into the current test (`format!` syntax).
#[macro_export]
macro_rules! report_error {
    ($($arg:tt)+) => {
        $crate::check::report_error($crate::location!(), ::std::format!($($arg)+))
    };
}

/// Report a warning into the current test (`format!` syntax).
#[macro_export]
macro_rules! report_warning {
    ($($arg:tt)+) => {
        $crate::check::report_warning($crate::location!(), ::std::format!($($arg)+))
    };
}
