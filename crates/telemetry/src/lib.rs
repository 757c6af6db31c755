//! Telemetry sources for the dashboard HUD.
//!
//! The dashboard only ever sees [`TelemetrySnapshot`] values; where they
//! come from is this crate's concern. The shipped source is a seeded
//! simulator that drifts the metrics the way a slow-moving inspection
//! robot would, and freezes them while the emergency stop is engaged.

use chrono::Utc;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use shared::protocol::{RunningTime, TelemetrySnapshot};

/// Where HUD metrics come from. Implementations are polled on a cadence
/// owned by the caller; `poll` never blocks.
pub trait TelemetrySource {
    fn poll(&mut self) -> TelemetrySnapshot;

    /// Freeze or thaw metric drift. Frozen sources return their last
    /// snapshot unchanged.
    fn set_frozen(&mut self, frozen: bool);
}

/// Simulated feed with the same starting values and per-tick drift as the
/// field recordings it stands in for: distance creeps up by under half a
/// meter per poll, the running-time clock advances a minute now and then,
/// and the battery drains a hundredth of a percent at most.
pub struct SimulatedTelemetry {
    rng: StdRng,
    snapshot: TelemetrySnapshot,
    frozen: bool,
}

impl SimulatedTelemetry {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Entropy-seeded source for normal runs, where reproducibility does
    /// not matter.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            snapshot: TelemetrySnapshot {
                distance_m: 2456.0,
                running_time: RunningTime {
                    hours: 2,
                    minutes: 34,
                },
                latitude: "60°16'58\" N".to_string(),
                longitude: "25°01'96\" E".to_string(),
                elevation_m: 127,
                temperature_c: 21,
                battery_pct: 89.0,
                notifications: 2,
                status: "OK".to_string(),
                recorded_at: Utc::now(),
            },
            frozen: false,
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}

impl TelemetrySource for SimulatedTelemetry {
    fn poll(&mut self) -> TelemetrySnapshot {
        if !self.frozen {
            self.snapshot.distance_m += self.rng.random_range(0.0..0.5);
            if self.rng.random_bool(0.05) {
                let time = &mut self.snapshot.running_time;
                time.minutes += 1;
                if time.minutes == 60 {
                    time.minutes = 0;
                    time.hours += 1;
                }
            }
            let drain = self.rng.random_range(0.0..0.01);
            self.snapshot.battery_pct = (self.snapshot.battery_pct - drain).max(0.0);
            self.snapshot.recorded_at = Utc::now();
        }
        self.snapshot.clone()
    }

    fn set_frozen(&mut self, frozen: bool) {
        if self.frozen != frozen {
            debug!(frozen, "telemetry drift toggled");
        }
        self.frozen = frozen;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drift_moves_distance_forward_and_never_backward() {
        let mut source = SimulatedTelemetry::new(7);
        let first = source.poll();
        let second = source.poll();
        assert!(second.distance_m >= first.distance_m);
    }

    #[test]
    fn frozen_source_returns_identical_snapshots() {
        let mut source = SimulatedTelemetry::new(7);
        source.poll();
        source.set_frozen(true);

        let a = source.poll();
        let b = source.poll();
        assert_eq!(a, b);
    }

    #[test]
    fn thawing_resumes_drift_from_where_it_stopped() {
        let mut source = SimulatedTelemetry::new(7);
        source.set_frozen(true);
        let frozen = source.poll();

        source.set_frozen(false);
        let thawed = source.poll();
        assert!(thawed.distance_m >= frozen.distance_m);
    }

    #[test]
    fn battery_saturates_at_zero() {
        let mut source = SimulatedTelemetry::new(42);
        source.snapshot.battery_pct = 0.005;
        for _ in 0..100 {
            source.poll();
        }
        assert!(source.snapshot.battery_pct >= 0.0);
    }

    #[test]
    fn minute_rollover_carries_into_hours() {
        let mut source = SimulatedTelemetry::new(1);
        source.snapshot.running_time = RunningTime {
            hours: 2,
            minutes: 59,
        };
        // Enough polls that the 5% minute advance fires at least once.
        for _ in 0..500 {
            source.poll();
        }
        let time = source.snapshot.running_time;
        assert!(time.hours >= 3);
        assert!(time.minutes < 60);
    }
}
