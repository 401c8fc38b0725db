//! In-place bubble sort with early termination.

/// When to stop before all `len - 1` passes have run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Termination {
    /// Stop after a pass that made no swaps: everything is in order.
    #[default]
    NoSwaps,
    /// Stop after a pass that made exactly one swap.
    ///
    /// Kept for compatibility with older output. This can stop while the
    /// sequence is still out of order, e.g. `[2, 3, 1]` ends as `[2, 1, 3]`.
    SingleSwap,
}

impl Termination {
    fn should_stop(self, swaps: usize) -> bool {
        match self {
            Self::NoSwaps => swaps == 0,
            Self::SingleSwap => swaps == 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortReport {
    pub passes: usize,
    pub swaps: usize,
    /// 1-based pass that triggered early termination, if any.
    pub early_exit: Option<usize>,
}

/// Sort ascending, stopping as soon as a pass makes no swaps.
pub fn bubble_sort<T: PartialOrd>(items: &mut [T]) -> SortReport {
    bubble_sort_with(items, Termination::NoSwaps, |_, _| {})
}

/// Sort ascending, calling `on_pass(pass, items)` after every pass.
///
/// Pass `p` (1-based) only walks `items[..=len - p]`; the tail past that is
/// already in its final position.
pub fn bubble_sort_with<T, F>(
    items: &mut [T],
    termination: Termination,
    mut on_pass: F,
) -> SortReport
where
    T: PartialOrd,
    F: FnMut(usize, &[T]),
{
    let len = items.len();
    let mut report = SortReport::default();

    for pass in 1..len {
        let mut swaps = 0;
        for i in 0..len - pass {
            if items[i] > items[i + 1] {
                items.swap(i, i + 1);
                swaps += 1;
            }
        }

        report.passes = pass;
        report.swaps += swaps;
        on_pass(pass, items);

        if termination.should_stop(swaps) {
            // The last pass stops anyway; that's not early.
            if pass < len - 1 {
                report.early_exit = Some(pass);
            }
            break;
        }
    }

    report
}
