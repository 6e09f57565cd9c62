use rand::Rng;
use rollwin::{agg::Max, RollingWindow, Value};
use std::time::{Duration, Instant};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

fn main() -> rollwin::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .filter_module("rollwin", log::LevelFilter::Debug)
        .parse_default_env()
        .init();

    // 10 buckets of 100ms => latencies of the last second
    let latencies = RollingWindow::builder(10, Duration::from_millis(100))
        .ignore_current(true)
        .build()?;

    let mut rng = rand::thread_rng();

    let start = Instant::now();
    let mut last_report = Instant::now();

    while start.elapsed() < Duration::from_secs(3) {
        // Simulate a request that gets slow after a while
        let base: Value = if start.elapsed() < Duration::from_millis(1_500) {
            20.0
        } else {
            120.0
        };
        let latency = (base + rng.gen_range(-10.0..10.0)).max(0.0);

        latencies.add(latency);

        if last_report.elapsed() >= Duration::from_millis(250) {
            last_report = Instant::now();

            log::info!(
                "[{:?}] requests={} avg={:.2}ms max_bucket_sum={:.2}",
                start.elapsed(),
                latencies.count().unwrap_or_default(),
                latencies.avg().unwrap_or_default(),
                latencies.aggregate::<Max>().unwrap_or_default(),
            );
        }

        std::thread::sleep(Duration::from_millis(rng.gen_range(1..5)));
    }

    for (idx, bucket) in latencies.snapshot().iter().enumerate() {
        log::info!(
            "bucket #{idx}: {} requests, avg {:.2}ms",
            bucket.count,
            bucket.avg()
        );
    }

    Ok(())
}
