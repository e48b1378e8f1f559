use std::sync::{Arc, Mutex};
use std::time::Duration;

use roomify_core::config::ProgressConfig;
use roomify_core::upload::{ProgressHandle, ProgressSimulator, ProgressTick};

fn simulator(step: u8) -> ProgressSimulator {
    ProgressSimulator::new(ProgressConfig {
        step,
        interval_ms: 100,
    })
}

type Ticks = Arc<Mutex<Vec<ProgressTick>>>;

fn recording(sim: &ProgressSimulator, initial: u8) -> (ProgressHandle, Ticks) {
    let ticks = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&ticks);
    let handle = sim.start_at(initial, move |tick| sink.lock().unwrap().push(tick));
    (handle, ticks)
}

fn percents(ticks: &Ticks) -> Vec<u8> {
    ticks.lock().unwrap().iter().map(|t| t.percent).collect()
}

#[tokio::test(start_paused = true)]
async fn test_default_ramp_reaches_full_in_ten_ticks() {
    let (handle, ticks) = recording(&simulator(10), 0);

    tokio::time::sleep(Duration::from_millis(1050)).await;

    assert_eq!(percents(&ticks), vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
    let full = ticks.lock().unwrap().iter().filter(|t| t.reached_full).count();
    assert_eq!(full, 1);
    assert!(ticks.lock().unwrap().last().unwrap().reached_full);
    assert!(handle.is_finished());
}

#[tokio::test(start_paused = true)]
async fn test_first_tick_waits_one_interval() {
    let (_handle, ticks) = recording(&simulator(10), 0);

    tokio::time::sleep(Duration::from_millis(90)).await;
    assert!(percents(&ticks).is_empty());

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(percents(&ticks), vec![10]);
}

#[tokio::test(start_paused = true)]
async fn test_overshoot_clamps_to_exactly_full() {
    let (_handle, ticks) = recording(&simulator(30), 0);

    tokio::time::sleep(Duration::from_secs(2)).await;

    assert_eq!(percents(&ticks), vec![30, 60, 90, 100]);
}

#[tokio::test(start_paused = true)]
async fn test_percent_after_n_ticks_is_min_of_full_and_linear() {
    for step in [1u8, 3, 7, 10, 25, 33, 100] {
        for initial in [0u8, 5, 50] {
            let start = tokio::time::Instant::now();
            let (_handle, ticks) = recording(&simulator(step), initial);

            for n in 1..=4u32 {
                // Land between tick n and tick n + 1.
                let offset = Duration::from_millis(100 * u64::from(n) + 50);
                tokio::time::sleep_until(start + offset).await;

                let expected = (u32::from(initial) + u32::from(step) * n).min(100) as u8;
                let seen = percents(&ticks);
                let last = seen.last().copied().unwrap_or(initial);
                assert_eq!(last, expected, "step {step}, initial {initial}, n {n}");
                assert!(seen.iter().all(|p| *p <= 100));
                assert!(seen.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_start_at_full_emits_single_final_tick() {
    let (handle, ticks) = recording(&simulator(10), 100);

    tokio::time::sleep(Duration::from_secs(1)).await;

    assert_eq!(
        *ticks.lock().unwrap(),
        vec![ProgressTick {
            percent: 100,
            reached_full: true
        }]
    );
    assert!(handle.is_finished());
}

#[tokio::test(start_paused = true)]
async fn test_cancel_stops_further_ticks() {
    let (handle, ticks) = recording(&simulator(10), 0);

    tokio::time::sleep(Duration::from_millis(250)).await;
    handle.cancel();
    assert!(handle.is_cancelled());

    tokio::time::sleep(Duration::from_secs(2)).await;

    assert_eq!(percents(&ticks), vec![10, 20]);
    assert!(handle.is_finished());
}

#[tokio::test(start_paused = true)]
async fn test_drop_cancels() {
    let (handle, ticks) = recording(&simulator(10), 0);

    tokio::time::sleep(Duration::from_millis(150)).await;
    drop(handle);
    tokio::time::sleep(Duration::from_secs(2)).await;

    assert_eq!(percents(&ticks), vec![10]);
}

#[tokio::test(start_paused = true)]
async fn test_canceller_stops_ramp_from_elsewhere() {
    let (handle, ticks) = recording(&simulator(10), 0);
    let canceller = handle.canceller();

    tokio::time::sleep(Duration::from_millis(350)).await;
    tokio::spawn(async move { canceller.cancel() }).await.unwrap();
    tokio::time::sleep(Duration::from_secs(2)).await;

    assert_eq!(percents(&ticks), vec![10, 20, 30]);
    assert!(handle.is_finished());
}

#[tokio::test(start_paused = true)]
async fn test_wait_returns_after_full() {
    let (handle, ticks) = recording(&simulator(50), 0);

    handle.wait().await;

    assert_eq!(percents(&ticks), vec![50, 100]);
}
