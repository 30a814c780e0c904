//! Native stack safety for deep recursion.
//!
//! Joy programs nest quotations arbitrarily: `[[[...] i] i] i`, user words
//! that call themselves through `ifte`, `linrec`/`binrec` recursion, and so on.
//! Each level of nesting is one native frame of the evaluator, so a program
//! can exhaust the thread's stack long before it runs out of heap.
//!
//! [`ensure_sufficient_stack`] wraps those re-entry points and grows the
//! native stack on demand.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker::maybe_grow` allocates a new segment when
//!   less than the red zone remains.
//! - **WASM targets**: plain call (the runtime manages its own stack).
//!
//! Bulk iteration whose count is chosen by the program (`primrec`, `times`,
//! `step`, ...) must not rely on this: those loops run iteratively.

/// Minimum stack space to keep available (128KB red zone).
const RED_ZONE: usize = 128 * 1024;

/// Stack space to allocate when growing (2MB).
const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Run `f`, growing the native stack first if the red zone has been reached.
///
/// ```text
/// fn replay(&mut self, body: &[Value]) -> EvalResult<()> {
///     ensure_sufficient_stack(|| {
///         for value in body {
///             self.eval_instruction(value)?;
///         }
///         Ok(())
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
