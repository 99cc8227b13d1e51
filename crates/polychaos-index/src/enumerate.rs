//! Shell-by-shell enumeration of exponent tuples.
//!
//! A shell is the set of all tuples with one total order `s`, i.e. the weak
//! compositions of `s` into `d` parts. Shells are generated only inside the
//! window returned by [`TruncationNorm::shell_window`], so for the default
//! norm nothing below the lower bound or at or above the upper bound is ever
//! materialized.
//!
//! Each shell is produced directly in graded lexicographic order (last
//! dimension most significant), so the default ordering needs no sort.
//!
//! For other norms each coordinate is capped by
//! [`TruncationNorm::exponent_caps`] and a partial tuple is abandoned as
//! soon as its accumulated norm reaches the upper bound, so weighted and
//! anisotropic truncations only materialize tuples close to the kept set.
//!
//! [`TruncationNorm::shell_window`]: crate::norm::TruncationNorm::shell_window
//! [`TruncationNorm::exponent_caps`]: crate::norm::TruncationNorm::exponent_caps

use rayon::prelude::*;

use crate::error::IndexError;
use crate::index_set::IndexSet;
use crate::monomial::ExponentTuple;
use crate::norm::TruncationNorm;
use crate::ordering::Ordering;
use crate::truncation::TruncationSpec;

/// Tuning for [`generate_indices_with`].
#[derive(Clone, Debug)]
pub struct EnumerationConfig {
    /// Minimum number of candidate tuples to enable parallel shells.
    pub parallel_threshold: u128,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 1 << 14,
        }
    }
}

impl EnumerationConfig {
    /// A config that never parallelizes.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: u128::MAX,
        }
    }
}

/// Generates the index set described by `spec`.
#[must_use]
pub fn generate_indices(spec: &TruncationSpec) -> IndexSet {
    generate_indices_with(spec, &EnumerationConfig::default())
}

/// Total-order index set `lower <= |x|_1 < upper` in graded lexicographic
/// order.
///
/// # Errors
///
/// Returns [`IndexError::InvalidDimension`] if `dimensions == 0` and
/// [`IndexError::InvalidBound`] if `lower > upper`.
pub fn index_range(dimensions: usize, lower: u32, upper: u32) -> Result<IndexSet, IndexError> {
    let spec = TruncationSpec::new(dimensions, lower, upper)?;
    Ok(generate_indices(&spec))
}

/// Generates the index set described by `spec` with explicit tuning.
#[must_use]
pub fn generate_indices_with(spec: &TruncationSpec, config: &EnumerationConfig) -> IndexSet {
    let dims = spec.dimensions();
    let ordering = spec.ordering();

    if spec.is_empty_range() {
        return IndexSet::empty(dims, ordering);
    }

    let exact = spec.norm().is_total_order();
    let pruner = (!exact).then(|| ShellPruner::new(spec.norm(), dims, spec.upper()));

    let mut window = spec.norm().shell_window(dims, spec.lower(), spec.upper());
    if let Some(pruner) = &pruner {
        window.end = window.end.min(pruner.max_total().saturating_add(1));
    }
    let candidates = count_range(dims, window.start, window.end);
    let parallel = candidates >= config.parallel_threshold && window.len() > 1;

    tracing::debug!(
        dims,
        lower = spec.lower(),
        upper = spec.upper(),
        shells = ?window,
        candidates = %candidates,
        parallel,
        "enumerating index shells"
    );

    let build_shell = |s: u32| {
        let mut shell = match &pruner {
            None => enumerate_shell(dims, s),
            Some(pruner) => {
                let mut shell = pruner.shell(s);
                shell.retain(|t| spec.includes(t));
                shell
            }
        };
        if ordering.is_graded() && ordering != Ordering::GradedLexicographic {
            ordering.sort(&mut shell);
        }
        tracing::trace!(shell = s, kept = shell.len(), "shell done");
        shell
    };

    let shells: Vec<Vec<ExponentTuple>> = if parallel {
        window.into_par_iter().map(build_shell).collect()
    } else {
        window.map(build_shell).collect()
    };

    let mut tuples: Vec<ExponentTuple> = shells.into_iter().flatten().collect();
    if !ordering.is_graded() {
        if parallel {
            tuples.par_sort_unstable_by(|a, b| ordering.compare(a, b));
        } else {
            ordering.sort(&mut tuples);
        }
    }

    tracing::debug!(kept = tuples.len(), "index set generated");
    IndexSet::from_sorted(dims, ordering, tuples)
}

/// All tuples of `dims` dimensions with total order `total`, in graded
/// lexicographic order.
#[must_use]
pub fn enumerate_shell(dims: usize, total: u32) -> Vec<ExponentTuple> {
    if dims == 0 {
        return Vec::new();
    }

    let size = usize::try_from(shell_size(dims, total)).unwrap_or(0);
    let mut out = Vec::with_capacity(size);
    let mut exps = vec![0u32; dims];
    fill_shell(&mut exps, dims - 1, total, &mut out);
    out
}

/// Chooses `exps[pos]` ascending, then recurses towards dimension 0, which
/// takes the remainder.
fn fill_shell(exps: &mut [u32], pos: usize, remaining: u32, out: &mut Vec<ExponentTuple>) {
    if pos == 0 {
        exps[0] = remaining;
        out.push(ExponentTuple::new(exps));
        return;
    }

    for e in 0..=remaining {
        exps[pos] = e;
        fill_shell(exps, pos - 1, remaining - e, out);
    }
}

/// Shell generation for norms other than the plain total order.
struct ShellPruner<'a> {
    norm: &'a TruncationNorm,
    caps: Vec<u32>,
    /// `reach[k]` is the largest total the dimensions `0..=k` can absorb.
    reach: Vec<u64>,
    budget: f64,
}

impl<'a> ShellPruner<'a> {
    fn new(norm: &'a TruncationNorm, dims: usize, upper: u32) -> Self {
        let caps = norm.exponent_caps(dims, upper);
        let reach = caps
            .iter()
            .scan(0u64, |acc, &c| {
                *acc += u64::from(c);
                Some(*acc)
            })
            .collect();

        Self {
            norm,
            caps,
            reach,
            budget: norm.budget(upper),
        }
    }

    /// Largest total order any admissible tuple can have.
    fn max_total(&self) -> u32 {
        self.reach
            .last()
            .map_or(0, |&r| u32::try_from(r).unwrap_or(u32::MAX))
    }

    /// Tuples of the shell `total` that respect the caps and whose norm
    /// stays below the budget, in graded lexicographic order.
    fn shell(&self, total: u32) -> Vec<ExponentTuple> {
        let dims = self.caps.len();
        let mut out = Vec::new();
        if dims == 0 || u64::from(total) > self.reach[dims - 1] {
            return out;
        }

        let mut exps = vec![0u32; dims];
        self.fill(&mut exps, dims - 1, total, 0.0, &mut out);
        out
    }

    fn fill(&self, exps: &mut [u32], pos: usize, remaining: u32, acc: f64, out: &mut Vec<ExponentTuple>) {
        if pos == 0 {
            if remaining <= self.caps[0] && self.norm.accumulate(acc, 0, remaining) < self.budget {
                exps[0] = remaining;
                out.push(ExponentTuple::new(exps));
            }
            return;
        }

        // Dimensions below `pos` must be able to absorb what is left.
        let below = u32::try_from(self.reach[pos - 1]).unwrap_or(u32::MAX);
        let first = remaining.saturating_sub(below);
        let last = remaining.min(self.caps[pos]);

        for e in first..=last {
            let next = self.norm.accumulate(acc, pos, e);
            if next >= self.budget {
                break;
            }
            exps[pos] = e;
            self.fill(exps, pos - 1, remaining - e, next, out);
        }
    }
}

/// Number of tuples in a shell: `C(total + dims - 1, dims - 1)`.
/// Saturates at `u128::MAX`.
#[must_use]
pub fn shell_size(dims: usize, total: u32) -> u128 {
    if dims == 0 {
        return 0;
    }
    binomial(u128::from(total) + dims as u128 - 1, dims as u128 - 1)
}

/// Number of tuples with total order in `[lower, upper)`:
/// `C(upper + d - 1, d) - C(lower + d - 1, d)`. Saturates at `u128::MAX`.
#[must_use]
pub fn count_range(dims: usize, lower: u32, upper: u32) -> u128 {
    if dims == 0 || lower >= upper {
        return 0;
    }
    let d = dims as u128;
    let below = |n: u32| {
        if n == 0 {
            0
        } else {
            binomial(u128::from(n) + d - 1, d)
        }
    };
    below(upper).saturating_sub(below(lower))
}

/// Binomial coefficient, saturating on overflow.
fn binomial(n: u128, k: u128) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc * (n - i) / (i + 1) stays integral at every step.
        match acc.checked_mul(n - i) {
            Some(v) => acc = v / (i + 1),
            None => return u128::MAX,
        }
    }
    acc
}
