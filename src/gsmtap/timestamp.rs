//! Device timestamps
//!
//! Diagnostic log timestamps count 1/800 s ticks since the GPS epoch
//! (1980-01-06 00:00:00 UTC). GSMTAP v3 wants Unix seconds plus microseconds.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Seconds between the Unix epoch and the GPS epoch
pub const GPS_EPOCH_UNIX_SECS: u64 = 315_964_800;

const TICKS_PER_SEC: u64 = 800;
const MICROS_PER_TICK: u64 = 1_000_000 / TICKS_PER_SEC;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeviceTimestamp {
    ticks: u64,
}

impl DeviceTimestamp {
    pub fn from_ticks(ticks: u64) -> Self {
        Self { ticks }
    }

    pub fn ticks(self) -> u64 {
        self.ticks
    }

    /// Time elapsed since the GPS epoch
    pub fn since_epoch(self) -> Duration {
        let secs = self.ticks / TICKS_PER_SEC;
        let micros = (self.ticks % TICKS_PER_SEC) * MICROS_PER_TICK;
        Duration::from_secs(secs) + Duration::from_micros(micros)
    }

    pub fn unix_secs(self) -> u64 {
        GPS_EPOCH_UNIX_SECS + self.ticks / TICKS_PER_SEC
    }

    pub fn subsec_micros(self) -> u32 {
        ((self.ticks % TICKS_PER_SEC) * MICROS_PER_TICK) as u32
    }

    /// `None` if the instant is not representable on this platform
    pub fn to_system_time(self) -> Option<SystemTime> {
        UNIX_EPOCH
            .checked_add(Duration::from_secs(GPS_EPOCH_UNIX_SECS))?
            .checked_add(self.since_epoch())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let ts = DeviceTimestamp::from_ticks(0);
        assert_eq!(ts.unix_secs(), GPS_EPOCH_UNIX_SECS);
        assert_eq!(ts.subsec_micros(), 0);
        assert_eq!(
            ts.to_system_time(),
            Some(UNIX_EPOCH + Duration::from_secs(GPS_EPOCH_UNIX_SECS))
        );
    }

    #[test]
    fn test_tick_resolution() {
        let ts = DeviceTimestamp::from_ticks(801);
        assert_eq!(ts.unix_secs(), GPS_EPOCH_UNIX_SECS + 1);
        assert_eq!(ts.subsec_micros(), 1250);
        assert_eq!(ts.since_epoch(), Duration::from_micros(1_001_250));
    }

    #[test]
    fn test_subsec_stays_below_one_second() {
        let ts = DeviceTimestamp::from_ticks(799);
        assert_eq!(ts.unix_secs(), GPS_EPOCH_UNIX_SECS);
        assert_eq!(ts.subsec_micros(), 998_750);
    }
}
