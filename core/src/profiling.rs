//! Profiling support via Tracy.
//!
//! This module provides optional profiling instrumentation using the [Tracy profiler](https://github.com/wolfpld/tracy).
//! Profiling is enabled via the `profiling` Cargo feature.
//!
//! # Enabling Profiling
//!
//! Add the `profiling` feature to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! meshprep-core = { version = "0.1", features = ["profiling"] }
//! ```
//!
//! Or enable it when running:
//!
//! ```bash
//! cargo run --features profiling
//! ```
//!
//! # CPU Profiling
//!
//! Use the provided macros to instrument your code:
//!
//! ```ignore
//! use meshprep_core::profiling::{profile_function, profile_scope};
//!
//! fn expensive_operation() {
//!     profile_function!();  // Profiles entire function
//!
//!     {
//!         profile_scope!("inner_work");  // Profiles this scope
//!         // ... do work ...
//!     }
//! }
//! ```
//!
//! # Performance
//!
//! When profiling is disabled (the default), all macros compile to no-ops with
//! zero runtime overhead.

// Re-export tracy-client types when profiling is enabled
#[cfg(feature = "profiling")]
pub use tracy_client::{self, Client, Span, span};

/// Create a profiling span for the current scope.
///
/// The span automatically ends when the scope exits.
///
/// # Example
///
/// ```ignore
/// fn process_data() {
///     {
///         profile_scope!("accumulate");
///         // ... accumulation pass ...
///     }
///
///     {
///         profile_scope!("orthogonalize");
///         // ... post-process ...
///     }
/// }
/// ```
#[macro_export]
#[cfg(feature = "profiling")]
macro_rules! profile_scope {
    ($name:expr) => {
        let _profile_span = $crate::profiling::span!($name);
    };
}

/// Create a profiling span (no-op when profiling disabled).
#[macro_export]
#[cfg(not(feature = "profiling"))]
macro_rules! profile_scope {
    ($name:expr) => {};
}

/// Create a profiling span for the entire function.
///
/// Place this at the start of a function to profile its entire execution.
///
/// # Example
///
/// ```ignore
/// fn expensive_computation() {
///     profile_function!();
///     // Function body...
/// }
/// ```
#[macro_export]
#[cfg(feature = "profiling")]
macro_rules! profile_function {
    () => {
        // Use function!() for automatic function name, or construct from module path
        let _profile_span = $crate::profiling::span!();
    };
}

/// Create a profiling span for function (no-op when profiling disabled).
#[macro_export]
#[cfg(not(feature = "profiling"))]
macro_rules! profile_function {
    () => {};
}

/// Create a profiling span with a runtime-determined name.
///
/// Unlike [`profile_scope!`] which requires a string literal, this macro
/// accepts any `&str` expression. It uses `tracy_client::Client::span_alloc`
/// which heap-allocates the span name. Prefer [`profile_scope!`] for static
/// names.
///
/// # Example
///
/// ```ignore
/// let mesh_name = "hero_head";
/// profile_scope_dynamic!(mesh_name);
/// // ... profiled work ...
/// ```
#[macro_export]
#[cfg(feature = "profiling")]
macro_rules! profile_scope_dynamic {
    ($name:expr) => {
        let _profile_span = $crate::profiling::Client::running()
            .map(|c| c.span_alloc(Some($name), "", file!(), line!(), 0));
    };
}

/// Create a profiling span with a dynamic name (no-op when profiling disabled).
#[macro_export]
#[cfg(not(feature = "profiling"))]
macro_rules! profile_scope_dynamic {
    ($name:expr) => {
        let _ = $name;
    };
}

// Re-export macros at module level
pub use profile_function;
pub use profile_scope;
pub use profile_scope_dynamic;
