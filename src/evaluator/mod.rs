//! Rule evaluator.
//!
//! Combines already-computed rule outcomes. The evaluator never invokes a
//! predicate itself; callers evaluate their rules first and hand over the
//! booleans, which keeps "what the rules say" apart from "how the results
//! combine".
//!
//! # Example
//!
//! ```rust
//! use fieldguard::evaluator::{evaluate, Evaluation, EvaluationMode};
//!
//! let results = [true, false, true];
//!
//! assert_eq!(evaluate(&results, EvaluationMode::ShortCircuit), Evaluation::Verdict(false));
//! assert_eq!(evaluate(&results, EvaluationMode::Exhaustive), Evaluation::Verdict(false));
//! assert_eq!(
//!     evaluate(&results, EvaluationMode::Raw),
//!     Evaluation::Results(vec![true, false, true])
//! );
//! assert_eq!(evaluate(&[], EvaluationMode::ShortCircuit), Evaluation::Verdict(true));
//! ```

use log::trace;
use serde::{Deserialize, Serialize};

/// How a rule sequence is combined.
///
/// Raw mode and short-circuit mode are separate variants, so a caller
/// cannot ask for the full sequence and early exit at the same time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvaluationMode {
    /// Stop at the first failing rule.
    #[default]
    ShortCircuit,
    /// Consult every rule, then report whether all passed.
    Exhaustive,
    /// Hand back the per-rule outcomes unmodified.
    Raw,
}

/// Outcome of an evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Evaluation {
    /// Single pass/fail verdict.
    Verdict(bool),
    /// Per-rule outcomes, in rule order.
    Results(Vec<bool>),
}

impl Evaluation {
    /// Collapse to a verdict. Raw results pass when every rule passed.
    pub fn passed(&self) -> bool {
        match self {
            Self::Verdict(passed) => *passed,
            Self::Results(results) => results.iter().all(|r| *r),
        }
    }
}

/// Combine rule outcomes according to `mode`.
///
/// An empty sequence is vacuously satisfied in both verdict modes.
pub fn evaluate(results: &[bool], mode: EvaluationMode) -> Evaluation {
    match mode {
        EvaluationMode::ShortCircuit => Evaluation::Verdict(first_failure(results).is_none()),
        EvaluationMode::Exhaustive => {
            let failed = results.iter().filter(|r| !**r).count();
            trace!("exhaustive evaluation: {failed} of {} rules failed", results.len());
            Evaluation::Verdict(failed == 0)
        }
        EvaluationMode::Raw => Evaluation::Results(results.to_vec()),
    }
}

/// Verdict for `results`, short-circuiting when asked to.
pub fn all_pass(results: &[bool], short_circuit: bool) -> bool {
    let mode = if short_circuit {
        EvaluationMode::ShortCircuit
    } else {
        EvaluationMode::Exhaustive
    };
    evaluate(results, mode).passed()
}

/// Index of the first failing rule; entries after it are not read.
pub fn first_failure(results: &[bool]) -> Option<usize> {
    let index = results.iter().position(|r| !*r);
    if let Some(i) = index {
        trace!("short-circuit at rule {i} of {}", results.len());
    }
    index
}
