use crate::trace::{EventSink, TraceEvent};

/// Cocktail (shaker) sort: alternating forward and backward passes over a
/// shrinking window.
///
/// A pass that performs zero swaps ends the sort immediately, so unlike
/// bubble sort the trace length depends on the data. The forward pass
/// emits `Compare(i, i+1)` in ascending index order, the backward pass
/// `Compare(i, i-1)` in descending order.
pub fn sort(data: &mut [i32], sink: &mut dyn EventSink) {
    if data.len() < 2 {
        return;
    }

    let mut left = 0;
    let mut right = data.len() - 1;

    while left < right {
        let mut swapped = false;
        for i in left..right {
            sink.record(TraceEvent::Compare { i, j: i + 1 });
            if data[i] > data[i + 1] {
                data.swap(i, i + 1);
                sink.record(TraceEvent::Swap { i, j: i + 1 });
                swapped = true;
            }
        }
        right -= 1;
        if !swapped {
            break;
        }

        swapped = false;
        for i in ((left + 1)..=right).rev() {
            sink.record(TraceEvent::Compare { i, j: i - 1 });
            if data[i] < data[i - 1] {
                data.swap(i, i - 1);
                sink.record(TraceEvent::Swap { i, j: i - 1 });
                swapped = true;
            }
        }
        left += 1;
        if !swapped {
            break;
        }
    }
}
