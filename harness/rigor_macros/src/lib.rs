//! Procedural macros for the rigor test harness.
//!
//! # Suites
//!
//! `#[suite]` turns an inline module into an explicit registration pass:
//!
//! ```text
//! #[rigor::suite(prefix = "arith")]
//! mod arith {
//!     use rigor::prelude::*;
//!
//!     #[case]
//!     fn addition() {
//!         check_eq!(2 + 2, 4);
//!     }
//!
//!     #[case(name = "Division")]
//!     fn division() {
//!         check_eq!(1, 0);
//!     }
//! }
//!
//! // Driver:
//! arith::register(rigor::TestsRegistry::global())?;
//! rigor::run_all_tests();
//! ```
//!
//! The generated `register` function adds every `#[case]` in declaration
//! order. Nothing is registered until it is called.

mod suite;

use proc_macro::TokenStream;

/// Collect the `#[case]` functions of an inline module into a generated
/// `pub fn register(&rigor::TestsRegistry) -> Result<(), rigor::RegistryError>`.
///
/// # Attributes
///
/// ## Module-level
/// - `#[suite]` - Register cases under their function names.
/// - `#[suite(prefix = "p")]` - Register cases as `p::name`.
///
/// ## Function-level
/// - `#[case]` - Register this function.
/// - `#[case(name = "...")]` - Register this function under another name.
///
/// Case functions take no parameters, are not generic or `async`, and return
/// either `()` or a `Result` whose error converts into a boxed error.
#[proc_macro_attribute]
pub fn suite(attr: TokenStream, item: TokenStream) -> TokenStream {
    suite::expand_suite(attr, item)
}
