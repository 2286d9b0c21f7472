use std::io::{BufWriter, Write};
use std::time::Instant;

use autocompress::{CompressionLevel, autodetect_create};
use itertools::process_results;

use crate::queue::{Entry, PriorityQueue};
use crate::record::{open_records, write_records};

/// Select the `k` highest-priority entries from a stream, returned from
/// highest to lowest.
///
/// At most `k` entries are held at any time: once the queue is full, an
/// incoming entry displaces the current minimum only when its priority is
/// strictly greater. Asking for zero entries returns at once, without
/// reading the stream.
pub fn top_k<T, I>(items: I, k: usize) -> Vec<Entry<T>>
where
    I: Iterator<Item = Entry<T>>,
{
    if k == 0 {
        return Vec::new();
    }

    let mut pq = PriorityQueue::new();
    for entry in items {
        if pq.len() < k {
            pq.enqueue(entry);
        } else if let Ok(front) = pq.peek() {
            if front.priority < entry.priority {
                let _ = pq.dequeue();
                pq.enqueue(entry);
            }
        }
    }

    let mut res = Vec::with_capacity(pq.len());
    while let Ok(entry) = pq.dequeue() {
        res.push(entry);
    }
    res.reverse();
    res
}

/// Stream the records in `input` and write the `k` with the highest
/// priority to `out`, best first.
pub fn top_records(input: &str, out: &str, k: usize) -> std::io::Result<()> {
    let now = Instant::now();

    let records = open_records(input)?;
    let best = process_results(records, |records| top_k(records, k))?;
    log::info!("kept {} of the requested top {}", best.len(), k);

    let writer = autodetect_create(out, CompressionLevel::Default)?;
    let mut writer = BufWriter::new(writer);
    write_records(&mut writer, &best)?;
    writer.flush()?;

    log::info!("top-k took {}s", now.elapsed().as_secs_f32());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_k_large_ascending() {
        let items = (1..=100000).map(|i| Entry::new(i, i as f64));
        let best = top_k(items, 5);
        let priorities: Vec<f64> = best.iter().map(|entry| entry.priority).collect();
        assert_eq!(priorities, vec![100000.0, 99999.0, 99998.0, 99997.0, 99996.0]);
    }

    #[test]
    fn test_top_k_unordered_input() {
        let priorities = [4.0, 5.0, 3.0, 7.0, 2.0, 9.0, 1.0, 8.0, 6.0];
        let items = priorities.into_iter().map(|p| Entry::new((), p));
        let best = top_k(items, 3);
        let got: Vec<f64> = best.iter().map(|entry| entry.priority).collect();
        assert_eq!(got, vec![9.0, 8.0, 7.0]);
    }

    #[test]
    fn test_top_zero_reads_nothing() {
        let mut pulled = 0;
        let items = (1..=10).map(|i| {
            pulled += 1;
            Entry::new((), i as f64)
        });
        let best = top_k(items, 0);
        assert!(best.is_empty());
        assert_eq!(pulled, 0);
    }

    #[test]
    fn test_top_k_shorter_input() {
        let items = [2.0, 1.0, 3.0].into_iter().map(|p| Entry::new((), p));
        let best = top_k(items, 10);
        let got: Vec<f64> = best.iter().map(|entry| entry.priority).collect();
        assert_eq!(got, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_top_k_with_ties() {
        let items = [5.0, 5.0, 1.0, 5.0, 0.0]
            .into_iter()
            .map(|p| Entry::new((), p));
        let best = top_k(items, 2);
        let got: Vec<f64> = best.iter().map(|entry| entry.priority).collect();
        assert_eq!(got, vec![5.0, 5.0]);
    }
}
