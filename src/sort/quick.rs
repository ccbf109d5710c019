use crate::trace::{EventSink, TraceEvent};

/// Quicksort with Lomuto partitioning; the pivot is always the last
/// element of the active range.
///
/// Each partition call announces its pivot with `PivotSet(Some(high))`,
/// emits one `Compare(j, high)` per candidate, and clears the marker with
/// `PivotSet(None)` once its swaps are finished. A swap whose indices
/// coincide is not emitted and not performed.
pub fn sort(data: &mut [i32], sink: &mut dyn EventSink) {
    if data.len() < 2 {
        return;
    }
    quick(data, 0, data.len() - 1, sink);
}

fn quick(data: &mut [i32], low: usize, high: usize, sink: &mut dyn EventSink) {
    if low >= high {
        return;
    }

    let pivot = partition(data, low, high, sink);
    if pivot > low {
        quick(data, low, pivot - 1, sink);
    }
    if pivot < high {
        quick(data, pivot + 1, high, sink);
    }
}

/// Lomuto partition over `data[low..=high]`. `slot` is the position the
/// next element `<=` pivot moves into; it ends up as the pivot's index.
fn partition(data: &mut [i32], low: usize, high: usize, sink: &mut dyn EventSink) -> usize {
    sink.record(TraceEvent::PivotSet { index: Some(high) });

    let pivot = data[high];
    let mut slot = low;
    for j in low..high {
        sink.record(TraceEvent::Compare { i: j, j: high });
        if data[j] <= pivot {
            if slot != j {
                data.swap(slot, j);
                sink.record(TraceEvent::Swap { i: slot, j });
            }
            slot += 1;
        }
    }

    if slot != high {
        data.swap(slot, high);
        sink.record(TraceEvent::Swap { i: slot, j: high });
    }

    sink.record(TraceEvent::PivotSet { index: None });
    slot
}
