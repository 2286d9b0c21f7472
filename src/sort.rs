use std::io::{BufWriter, Write};
use std::time::Instant;

use autocompress::{CompressionLevel, autodetect_create};

use crate::queue::{Entry, PriorityQueue};
use crate::record::{open_records, write_records};

/// Sort entries into non-decreasing priority order by running them all
/// through a priority queue.
pub fn pq_sort<T>(items: &mut Vec<Entry<T>>) {
    let mut pq = PriorityQueue::new();
    for entry in items.drain(..) {
        pq.enqueue(entry);
    }
    while let Ok(entry) = pq.dequeue() {
        items.push(entry);
    }
}

/// Read all the records from `input`, sort them by priority, lowest first,
/// and write them to `out`.
pub fn sort_records(input: &str, out: &str) -> std::io::Result<()> {
    let now = Instant::now();

    let mut entries = open_records(input)?.collect::<std::io::Result<Vec<_>>>()?;
    log::info!("sorting {} records", entries.len());
    pq_sort(&mut entries);

    let writer = autodetect_create(out, CompressionLevel::Default)?;
    let mut writer = BufWriter::new(writer);
    write_records(&mut writer, &entries)?;
    writer.flush()?;

    log::info!("sort took {}s", now.elapsed().as_secs_f32());
    Ok(())
}
