use crate::{TICK_PERIOD, Ticker};

use tokio::time::{Instant, advance, timeout};

/// WHAT: A new ticker is disarmed
/// WHY: No tick may fire before a countdown starts
#[test]
fn given_new_ticker_when_queried_then_disarmed() {
    let ticker = Ticker::new();

    assert!(!ticker.is_armed());
}

/// WHAT: Arming twice leaves a single schedule
/// WHY: Re-arming must never create overlapping ticks
#[test]
fn given_armed_ticker_when_armed_again_then_single_schedule() {
    let mut ticker = Ticker::new();

    ticker.arm();
    ticker.arm();

    assert!(ticker.is_armed());
    ticker.cancel();
    assert!(!ticker.is_armed());
}

/// WHAT: An armed ticker fires after one period
/// WHY: Countdown cadence is one second
#[tokio::test(start_paused = true)]
async fn given_armed_ticker_when_awaited_then_fires_after_period() {
    // Given: An armed ticker
    let mut ticker = Ticker::new();
    let started = Instant::now();
    ticker.arm();

    // When: Awaiting one tick
    ticker.tick().await;

    // Then: One period elapsed and it stays armed
    assert!(started.elapsed() >= TICK_PERIOD);
    assert!(started.elapsed() < TICK_PERIOD * 2);
    assert!(ticker.is_armed());
}

/// WHAT: A cancelled ticker never fires
/// WHY: Pause/Stop/Finished must silence the schedule immediately
#[tokio::test(start_paused = true)]
async fn given_cancelled_ticker_when_awaited_then_never_fires() {
    // Given: An armed then cancelled ticker
    let mut ticker = Ticker::new();
    ticker.arm();
    ticker.cancel();

    // When: Waiting longer than a period
    let result = timeout(TICK_PERIOD * 3, ticker.tick()).await;

    // Then: The wait timed out
    assert!(result.is_err());
}

/// WHAT: Ticks missed while stalled are skipped, not replayed
/// WHY: After system sleep the schedule resumes at its normal cadence
#[tokio::test(start_paused = true)]
async fn given_stalled_ticker_when_resumed_then_missed_ticks_skipped() {
    // Given: An armed ticker whose process stalls for five periods
    let mut ticker = Ticker::new();
    ticker.arm();
    advance(TICK_PERIOD * 5).await;

    // When: Awaiting the overdue tick
    let overdue = Instant::now();
    ticker.tick().await;

    // Then: It fires at once instead of replaying the missed ones
    assert!(overdue.elapsed() < TICK_PERIOD / 2);

    // And: The next tick does not fire within half a period
    assert!(timeout(TICK_PERIOD / 2, ticker.tick()).await.is_err());

    // And: It fires one full period after the overdue tick
    ticker.tick().await;
    assert!(overdue.elapsed() >= TICK_PERIOD);
    assert!(overdue.elapsed() < TICK_PERIOD * 2);
}
