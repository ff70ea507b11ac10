//! Nonce generation for Coins-E API authentication.
//!
//! The exchange rejects an authenticated request whose nonce is not strictly
//! greater than the last accepted nonce for the same key. The client does not
//! enforce that ordering itself; it stamps each request with one value from a
//! [`NonceProvider`] and leaves the choice of source to the caller.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing nonces for authenticated requests.
///
/// The provider is consulted exactly once per signed request. The default
/// source is [`UnixTimeNonce`]; callers issuing several requests per second
/// should supply [`IncreasingNonce`] or their own strictly-increasing source.
///
/// Implementations must be safe to call from concurrent requests; any
/// interior state is the provider's own responsibility.
pub trait NonceProvider: Send + Sync {
    /// Generate the nonce value for the next request.
    fn next_nonce(&self) -> u64;
}

/// Any `Fn() -> u64` closure can serve as a nonce source.
///
/// ```
/// use std::sync::Arc;
/// use coinse_api_client::auth::NonceProvider;
///
/// let provider: Arc<dyn NonceProvider> = Arc::new(|| 42u64);
/// assert_eq!(provider.next_nonce(), 42);
/// ```
impl<F> NonceProvider for F
where
    F: Fn() -> u64 + Send + Sync,
{
    fn next_nonce(&self) -> u64 {
        self()
    }
}

/// The default nonce source: the current Unix time in whole seconds.
///
/// A plain wall-clock read is race-free across threads, but two requests in
/// the same second receive the same value and the exchange will reject the
/// second one.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnixTimeNonce;

impl UnixTimeNonce {
    /// Create a new wall-clock nonce provider.
    pub fn new() -> Self {
        Self
    }
}

impl NonceProvider for UnixTimeNonce {
    fn next_nonce(&self) -> u64 {
        unix_time_secs()
    }
}

/// A nonce provider that generates strictly increasing values.
///
/// Starts from the current Unix time in seconds and hands out
/// `max(now, last + 1)`, so values keep tracking the wall clock while never
/// repeating, even for several requests within the same second or from
/// concurrent threads.
pub struct IncreasingNonce {
    last_nonce: AtomicU64,
}

impl IncreasingNonce {
    /// Create a new increasing nonce provider.
    pub fn new() -> Self {
        Self {
            last_nonce: AtomicU64::new(0),
        }
    }
}

impl Default for IncreasingNonce {
    fn default() -> Self {
        Self::new()
    }
}

impl NonceProvider for IncreasingNonce {
    fn next_nonce(&self) -> u64 {
        let time_nonce = unix_time_secs();

        // Ensure the nonce is strictly increasing.
        // Use the max of current time and last + 1.
        loop {
            let last = self.last_nonce.load(Ordering::SeqCst);
            let next = time_nonce.max(last + 1);

            if self
                .last_nonce
                .compare_exchange(last, next, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                return next;
            }
            // If CAS failed, another thread updated the value. Retry.
        }
    }
}

/// Current time in whole seconds since the Unix epoch.
fn unix_time_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_unix_time_nonce_is_current() {
        let provider = UnixTimeNonce::new();
        let nonce = provider.next_nonce();
        // 2023-11-14; anything earlier means the clock read went wrong.
        assert!(nonce > 1_700_000_000);
    }

    #[test]
    fn test_unix_time_nonce_never_decreases() {
        let provider = UnixTimeNonce::new();
        let first = provider.next_nonce();
        let second = provider.next_nonce();
        assert!(second >= first);
    }

    #[test]
    fn test_closure_as_nonce_provider() {
        let provider: Arc<dyn NonceProvider> = Arc::new(|| 1_234u64);
        assert_eq!(provider.next_nonce(), 1_234);
        assert_eq!(provider.next_nonce(), 1_234);
    }

    #[test]
    fn test_increasing_nonce_strictly_increasing() {
        let provider = IncreasingNonce::new();

        let mut last = 0u64;
        for _ in 0..1000 {
            let nonce = provider.next_nonce();
            assert!(nonce > last, "Nonce must be strictly increasing");
            last = nonce;
        }
    }

    #[test]
    fn test_increasing_nonce_unique_across_threads() {
        let provider = Arc::new(IncreasingNonce::new());
        let mut handles = vec![];

        for _ in 0..4 {
            let p = provider.clone();
            handles.push(thread::spawn(move || {
                let mut nonces = Vec::new();
                for _ in 0..1000 {
                    nonces.push(p.next_nonce());
                }
                nonces
            }));
        }

        let mut all_nonces = HashSet::new();
        for handle in handles {
            let nonces = handle.join().unwrap();
            for nonce in nonces {
                assert!(
                    all_nonces.insert(nonce),
                    "Nonce must be unique across threads"
                );
            }
        }
    }
}
