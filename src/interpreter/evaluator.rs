/// Core evaluation logic and context management.
///
/// Contains the RPN evaluation loop, the runtime context that owns the
/// variable store, and operator application.
pub mod core;

/// Evaluation of assignments.
///
/// Evaluates the right-hand side of `name = ...` and stores the result.
pub mod assignment;
