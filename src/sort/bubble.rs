use crate::trace::{EventSink, TraceEvent};

/// Exhaustive bubble sort.
///
/// Every pass runs the full inner range with no early exit, so the number
/// of `Compare` events is n(n-1)/2 for any data. That makes trace length a
/// pure function of n, which the tests rely on.
pub fn sort(data: &mut [i32], sink: &mut dyn EventSink) {
    let n = data.len();
    if n < 2 {
        return;
    }

    for i in 0..n - 1 {
        for j in 0..n - 1 - i {
            sink.record(TraceEvent::Compare { i: j, j: j + 1 });
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                sink.record(TraceEvent::Swap { i: j, j: j + 1 });
            }
        }
    }
}
