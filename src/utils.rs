use std::time::{SystemTime, UNIX_EPOCH};

/// A generator seed taken from the wall clock, for runs that do not ask for a fixed seed.
///
/// Mixes in the sub-second part so that runs started within the same second still differ.
/// A clock set before the unix epoch gives a seed of 0.
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() ^ (u64::from(elapsed.subsec_nanos()) << 32))
        .unwrap_or(0)
}
