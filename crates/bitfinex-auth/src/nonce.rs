//! Process-wide nonce source
//!
//! Bitfinex rejects any nonce that is not greater than the last one it saw for
//! an API key. Nonces are millisecond timestamps, bumped by one whenever two
//! requests land in the same millisecond (or the clock steps backwards).

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Last nonce handed out in this process
static LAST_NONCE: AtomicU64 = AtomicU64::new(0);

/// Generate the next nonce
///
/// Strictly greater than every nonce previously returned in this process,
/// from any thread.
pub fn next_nonce() -> u64 {
    let now = now_millis();
    let previous = LAST_NONCE
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(advance(last, now))
        })
        .unwrap_or_else(|last| last);
    advance(previous, now)
}

fn advance(last: u64, now: u64) -> u64 {
    now.max(last.saturating_add(1))
}

fn now_millis() -> u64 {
    // A clock before the epoch degrades to the counter alone.
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
