// Telemetry drift simulator
//
// Periodically nudges every node by a small random delta and clamps it back
// into the drift window. Cooperatively scheduled: the event loop calls
// `poll(now, ..)` and the simulator decides whether a tick is due. Once
// stopped it never touches positions again until restarted.

use super::config::DriftConfig;
use crate::model::Topology;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

pub struct DriftSimulator {
    config: DriftConfig,
    rng: StdRng,
    /// When the next tick is due; None while stopped
    next_due: Option<Instant>,
    /// Ticks applied since construction
    ticks: u64,
}

impl DriftSimulator {
    /// Create a stopped simulator seeded from OS entropy
    pub fn new(config: DriftConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a stopped simulator with a deterministic random source
    #[cfg(test)]
    pub fn with_seed(config: DriftConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: DriftConfig, rng: StdRng) -> Self {
        Self {
            config,
            rng,
            next_due: None,
            ticks: 0,
        }
    }

    /// Arm the timer; the first tick is due one period after `now`
    ///
    /// Starting a running simulator keeps its current schedule.
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.config.period);
            tracing::debug!(period_ms = self.config.period.as_millis() as u64, "Drift started");
        }
    }

    /// Disarm the timer. Idempotent.
    pub fn stop(&mut self) {
        if self.next_due.take().is_some() {
            tracing::debug!(ticks = self.ticks, "Drift stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Apply a tick if one is due
    ///
    /// At most one tick is applied per call; periods missed while the loop
    /// was busy are dropped rather than replayed. Returns whether positions
    /// changed.
    pub fn poll(&mut self, now: Instant, topology: &mut Topology) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.config.period);
                self.tick(topology);
                true
            }
            _ => false,
        }
    }

    /// Nudge every node once, independently per axis, then clamp
    pub fn tick(&mut self, topology: &mut Topology) {
        let magnitude = self.config.magnitude;
        let (x_min, x_max) = (*self.config.x_range.start(), *self.config.x_range.end());
        let (y_min, y_max) = (*self.config.y_range.start(), *self.config.y_range.end());

        for pos in topology.positions_mut() {
            let dx = self.rng.gen_range(-magnitude..=magnitude);
            let dy = self.rng.gen_range(-magnitude..=magnitude);
            pos.x = (pos.x + dx).clamp(x_min, x_max);
            pos.y = (pos.y + dy).clamp(y_min, y_max);
        }

        self.ticks += 1;
        tracing::trace!(tick = self.ticks, "Drift tick applied");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed::seed_topology;
    use crate::model::{Node, Position};
    use proptest::prelude::*;
    use std::time::Duration;

    fn positions(topology: &Topology) -> Vec<Position> {
        topology.nodes().iter().map(|n| n.position).collect()
    }

    fn topology_at(points: &[(f64, f64)]) -> Topology {
        let nodes = points
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| {
                Node::new(format!("n{}", i), "node", 80.0, 90.0, 90.0, Position::new(x, y))
            })
            .collect();
        Topology::new(nodes, vec![]).unwrap()
    }

    #[test]
    fn test_new_simulator_is_stopped() {
        let sim = DriftSimulator::with_seed(DriftConfig::default(), 7);
        assert!(!sim.is_running());
        assert_eq!(sim.ticks(), 0);
    }

    #[test]
    fn test_poll_respects_period() {
        let mut topology = seed_topology().unwrap();
        let mut sim = DriftSimulator::with_seed(DriftConfig::default(), 1);
        let t0 = Instant::now();
        sim.start(t0);

        assert!(!sim.poll(t0 + Duration::from_millis(1599), &mut topology));
        assert_eq!(sim.ticks(), 0);

        assert!(sim.poll(t0 + Duration::from_millis(1600), &mut topology));
        assert_eq!(sim.ticks(), 1);

        // re-armed for one period after the tick
        assert!(!sim.poll(t0 + Duration::from_millis(2000), &mut topology));
        assert!(sim.poll(t0 + Duration::from_millis(3200), &mut topology));
        assert_eq!(sim.ticks(), 2);
    }

    #[test]
    fn test_missed_periods_are_not_replayed() {
        let mut topology = seed_topology().unwrap();
        let mut sim = DriftSimulator::with_seed(DriftConfig::default(), 1);
        let t0 = Instant::now();
        sim.start(t0);

        assert!(sim.poll(t0 + Duration::from_secs(60), &mut topology));
        assert!(!sim.poll(t0 + Duration::from_secs(60), &mut topology));
        assert_eq!(sim.ticks(), 1);
    }

    #[test]
    fn test_no_mutation_after_stop() {
        let mut topology = seed_topology().unwrap();
        let mut sim = DriftSimulator::with_seed(DriftConfig::default(), 3);
        let t0 = Instant::now();
        sim.start(t0);
        sim.poll(t0 + Duration::from_millis(1600), &mut topology);

        sim.stop();
        let frozen = positions(&topology);
        for secs in [2, 10, 100, 10_000] {
            assert!(!sim.poll(t0 + Duration::from_secs(secs), &mut topology));
        }
        assert_eq!(positions(&topology), frozen);
        assert_eq!(sim.ticks(), 1);

        // stop is idempotent
        sim.stop();
        assert!(!sim.is_running());
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut topology = seed_topology().unwrap();
        let mut sim = DriftSimulator::with_seed(DriftConfig::default(), 3);
        let t0 = Instant::now();
        sim.start(t0);
        // a second start must not push the deadline back
        sim.start(t0 + Duration::from_millis(1000));
        assert!(sim.poll(t0 + Duration::from_millis(1600), &mut topology));
    }

    #[test]
    fn test_restart_after_stop() {
        let mut topology = seed_topology().unwrap();
        let mut sim = DriftSimulator::with_seed(DriftConfig::default(), 3);
        let t0 = Instant::now();
        sim.start(t0);
        sim.stop();
        sim.start(t0 + Duration::from_secs(5));
        assert!(!sim.poll(t0 + Duration::from_secs(6), &mut topology));
        assert!(sim.poll(t0 + Duration::from_millis(6600), &mut topology));
    }

    #[test]
    fn test_same_seed_same_drift() {
        let mut a = seed_topology().unwrap();
        let mut b = seed_topology().unwrap();
        let mut sim_a = DriftSimulator::with_seed(DriftConfig::default(), 42);
        let mut sim_b = DriftSimulator::with_seed(DriftConfig::default(), 42);
        for _ in 0..10 {
            sim_a.tick(&mut a);
            sim_b.tick(&mut b);
        }
        assert_eq!(positions(&a), positions(&b));
    }

    #[test]
    fn test_corner_positions_stay_clamped() {
        let mut topology = topology_at(&[(60.0, 80.0), (820.0, 440.0), (60.0, 440.0), (820.0, 80.0)]);
        let mut sim = DriftSimulator::with_seed(DriftConfig::default(), 9);
        for _ in 0..500 {
            sim.tick(&mut topology);
            for pos in positions(&topology) {
                assert!((60.0..=820.0).contains(&pos.x));
                assert!((80.0..=440.0).contains(&pos.y));
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// One tick moves each axis by at most one unit and stays in the window
        #[test]
        fn prop_tick_bounded(
            seed in any::<u64>(),
            x in 60.0f64..=820.0,
            y in 80.0f64..=440.0,
        ) {
            let mut topology = topology_at(&[(x, y), (60.0, 80.0), (820.0, 440.0)]);
            let before = positions(&topology);
            let mut sim = DriftSimulator::with_seed(DriftConfig::default(), seed);
            sim.tick(&mut topology);

            for (old, new) in before.iter().zip(positions(&topology)) {
                prop_assert!((new.x - old.x).abs() <= 1.0);
                prop_assert!((new.y - old.y).abs() <= 1.0);
                prop_assert!((60.0..=820.0).contains(&new.x));
                prop_assert!((80.0..=440.0).contains(&new.y));
            }
        }
    }
}
