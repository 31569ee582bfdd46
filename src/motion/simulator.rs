//! Live metric simulation.
//!
//! Perturbs a small set of "platform health" numbers on a fixed tick so a
//! static page reads like live telemetry. Each metric either hovers inside
//! its band (resample) or creeps upward (accumulate), and is clamped to the
//! band after every update.
//!
//! A simulator with a pulse config also lights up one node per tick, and can
//! run a second track of short-lived node-to-node connections on its own
//! interval.

use super::number_format::format_metric;
use crate::core::{TimerError, TimerHandle, TimerQueue};
use rand::Rng;
use std::collections::VecDeque;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulatorError {
    #[error("metric name must not be empty")]
    EmptyName,
    #[error("metric `{0}` is declared more than once")]
    DuplicateName(String),
    #[error("metric `{name}` has an inverted band [{min}, {max}]")]
    InvertedBand { name: String, min: f64, max: f64 },
    #[error("metric `{name}` has an invalid delta range [{min_delta}, {max_delta}]")]
    InvalidDelta {
        name: String,
        min_delta: f64,
        max_delta: f64,
    },
    #[error("pulse needs at least one node")]
    NoPulseNodes,
    #[error("connection pulses must keep at least one link")]
    NoConnectionSlots,
    #[error(transparent)]
    Timer(#[from] TimerError),
}

/// How a metric moves on each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpdateRule {
    /// Pick a fresh value uniformly within the band.
    Resample,
    /// Add a uniform positive delta to the previous value.
    Accumulate { min_delta: f64, max_delta: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricSpec {
    pub name: String,
    pub label: String,
    pub seed: f64,
    pub min: f64,
    pub max: f64,
    pub rule: UpdateRule,
    /// Decimal places. Zero means whole numbers are sampled.
    pub precision: u8,
}

impl MetricSpec {
    pub fn resample(name: &str, label: &str, seed: f64, min: f64, max: f64) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            seed,
            min,
            max,
            rule: UpdateRule::Resample,
            precision: 0,
        }
    }

    pub fn accumulate(
        name: &str,
        label: &str,
        seed: f64,
        (min_delta, max_delta): (f64, f64),
        (min, max): (f64, f64),
    ) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            seed,
            min,
            max,
            rule: UpdateRule::Accumulate {
                min_delta,
                max_delta,
            },
            precision: 0,
        }
    }

    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    fn validate(&self) -> Result<(), SimulatorError> {
        if self.name.trim().is_empty() {
            return Err(SimulatorError::EmptyName);
        }
        if !(self.min <= self.max) {
            return Err(SimulatorError::InvertedBand {
                name: self.name.clone(),
                min: self.min,
                max: self.max,
            });
        }
        if let UpdateRule::Accumulate {
            min_delta,
            max_delta,
        } = self.rule
        {
            if !(0.0 <= min_delta && min_delta <= max_delta) {
                return Err(SimulatorError::InvalidDelta {
                    name: self.name.clone(),
                    min_delta,
                    max_delta,
                });
            }
        }
        Ok(())
    }

    fn next_value<R: Rng>(&self, previous: f64, rng: &mut R) -> f64 {
        let next = match self.rule {
            UpdateRule::Resample => sample(self.min, self.max, self.precision, rng),
            UpdateRule::Accumulate {
                min_delta,
                max_delta,
            } => previous + sample(min_delta, max_delta, self.precision, rng),
        };
        next.clamp(self.min, self.max)
    }
}

/// Uniform draw in `[lo, hi]`; whole numbers when `precision` is zero.
fn sample<R: Rng>(lo: f64, hi: f64, precision: u8, rng: &mut R) -> f64 {
    if precision == 0 {
        let (lo, hi) = (lo.ceil() as i64, hi.floor() as i64);
        if lo >= hi {
            return lo as f64;
        }
        rng.gen_range(lo..=hi) as f64
    } else if lo >= hi {
        lo
    } else {
        rng.gen_range(lo..=hi)
    }
}

/// Highlights one node for a while after every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct PulseConfig {
    pub nodes: Vec<String>,
    pub hold: Duration,
    pub connections: Option<ConnectionConfig>,
}

/// Random node-to-node links spawned on their own interval. Only the
/// newest `keep` are shown and each one disappears after `lifetime`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionConfig {
    pub interval: Duration,
    pub lifetime: Duration,
    pub keep: usize,
}

/// A live link between two pulse nodes. Endpoints may coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionPulse<'a> {
    pub id: u64,
    pub from: &'a str,
    pub to: &'a str,
}

#[derive(Debug, Clone, Copy)]
struct Link {
    id: u64,
    from: usize,
    to: usize,
    expiry: TimerHandle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorConfig {
    pub interval: Duration,
    pub metrics: Vec<MetricSpec>,
    pub pulse: Option<PulseConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SimEvent {
    Tick,
    PulseExpired,
    Connect,
    LinkExpired(u64),
}

#[derive(Debug)]
pub struct LiveMetricSimulator {
    config: SimulatorConfig,
    values: Vec<f64>,
    timers: TimerQueue<SimEvent>,
    tick_handle: TimerHandle,
    pulse_handle: Option<TimerHandle>,
    active_node: Option<usize>,
    ticks: u64,
    connect_handle: Option<TimerHandle>,
    links: VecDeque<Link>,
    next_link_id: u64,
}

impl LiveMetricSimulator {
    /// Validates the config, seeds every metric and starts the tick.
    pub fn new(config: SimulatorConfig) -> Result<Self, SimulatorError> {
        let mut seen = std::collections::HashSet::new();
        for spec in &config.metrics {
            spec.validate()?;
            if !seen.insert(spec.name.as_str()) {
                return Err(SimulatorError::DuplicateName(spec.name.clone()));
            }
        }
        if let Some(pulse) = &config.pulse {
            if pulse.nodes.is_empty() {
                return Err(SimulatorError::NoPulseNodes);
            }
            if pulse.connections.as_ref().is_some_and(|c| c.keep == 0) {
                return Err(SimulatorError::NoConnectionSlots);
            }
        }

        let values = config
            .metrics
            .iter()
            .map(|spec| spec.seed.clamp(spec.min, spec.max))
            .collect();
        let mut timers = TimerQueue::new();
        let tick_handle = timers.set_interval(config.interval, SimEvent::Tick)?;
        let connect_handle = match config.pulse.as_ref().and_then(|p| p.connections.as_ref()) {
            Some(connections) => Some(timers.set_interval(connections.interval, SimEvent::Connect)?),
            None => None,
        };

        tracing::debug!(
            metrics = config.metrics.len(),
            interval_ms = config.interval.as_millis() as u64,
            "live metric simulator started"
        );

        Ok(Self {
            config,
            values,
            timers,
            tick_handle,
            pulse_handle: None,
            active_node: None,
            ticks: 0,
            connect_handle,
            links: VecDeque::new(),
            next_link_id: 0,
        })
    }

    /// Advances virtual time, running every tick that falls due.
    /// Returns how many ticks fired.
    pub fn advance<R: Rng>(&mut self, dt: Duration, rng: &mut R) -> u32 {
        let horizon = self.timers.horizon(dt);
        let mut fired = 0;
        while let Some(event) = self.timers.pop_due(horizon) {
            match event {
                SimEvent::Tick => {
                    self.tick(rng);
                    fired += 1;
                }
                SimEvent::PulseExpired => {
                    self.pulse_handle = None;
                    self.active_node = None;
                }
                SimEvent::Connect => self.connect(rng),
                SimEvent::LinkExpired(id) => self.links.retain(|link| link.id != id),
            }
        }
        self.timers.settle(horizon);
        fired
    }

    /// Recomputes every metric once and moves the pulse.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) {
        for (spec, value) in self.config.metrics.iter().zip(self.values.iter_mut()) {
            *value = spec.next_value(*value, rng);
        }
        self.ticks += 1;

        if let Some(pulse) = &self.config.pulse {
            if let Some(handle) = self.pulse_handle.take() {
                self.timers.clear(handle);
            }
            self.active_node = Some(rng.gen_range(0..pulse.nodes.len()));
            self.pulse_handle = Some(self.timers.set_timeout(pulse.hold, SimEvent::PulseExpired));
        }
    }

    /// Opens a link between two random nodes, evicting the oldest when the
    /// window is full.
    fn connect<R: Rng>(&mut self, rng: &mut R) {
        let Some(pulse) = &self.config.pulse else {
            return;
        };
        let Some(connections) = &pulse.connections else {
            return;
        };
        let from = rng.gen_range(0..pulse.nodes.len());
        let to = rng.gen_range(0..pulse.nodes.len());
        let id = self.next_link_id;
        self.next_link_id += 1;

        while self.links.len() >= connections.keep {
            if let Some(evicted) = self.links.pop_front() {
                self.timers.clear(evicted.expiry);
            }
        }
        let expiry = self
            .timers
            .set_timeout(connections.lifetime, SimEvent::LinkExpired(id));
        self.links.push_back(Link {
            id,
            from,
            to,
            expiry,
        });
        tracing::trace!(id, from = %pulse.nodes[from], to = %pulse.nodes[to], "connection pulse");
    }

    pub fn metric(&self, name: &str) -> Option<f64> {
        self.config
            .metrics
            .iter()
            .position(|spec| spec.name == name)
            .map(|i| self.values[i])
    }

    /// The metric formatted at its declared precision.
    pub fn display(&self, name: &str) -> Option<String> {
        let index = self.config.metrics.iter().position(|spec| spec.name == name)?;
        Some(format_metric(
            self.values[index],
            self.config.metrics[index].precision,
        ))
    }

    pub fn metrics(&self) -> impl Iterator<Item = (&MetricSpec, f64)> + '_ {
        self.config.metrics.iter().zip(self.values.iter().copied())
    }

    pub fn active_node(&self) -> Option<&str> {
        let pulse = self.config.pulse.as_ref()?;
        self.active_node.map(|i| pulse.nodes[i].as_str())
    }

    /// Live links, oldest first.
    pub fn connections(&self) -> impl Iterator<Item = ConnectionPulse<'_>> + '_ {
        let nodes = self
            .config
            .pulse
            .as_ref()
            .map(|pulse| pulse.nodes.as_slice())
            .unwrap_or_default();
        self.links.iter().map(move |link| ConnectionPulse {
            id: link.id,
            from: nodes[link.from].as_str(),
            to: nodes[link.to].as_str(),
        })
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    /// Stops ticking. The values stay frozen where they are; the pulse and
    /// every live connection go dark.
    pub fn stop(&mut self) {
        self.timers.clear(self.tick_handle);
        if let Some(handle) = self.pulse_handle.take() {
            self.timers.clear(handle);
        }
        if let Some(handle) = self.connect_handle.take() {
            self.timers.clear(handle);
        }
        for link in self.links.drain(..) {
            self.timers.clear(link.expiry);
        }
        self.active_node = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn config() -> SimulatorConfig {
        SimulatorConfig {
            interval: Duration::from_millis(2500),
            metrics: vec![
                MetricSpec::resample("accuracy", "Accuracy", 96.4, 95.5, 97.5).with_precision(1),
                MetricSpec::accumulate("total", "Total", 100.0, (3.0, 17.0), (0.0, 1_000.0)),
            ],
            pulse: Some(PulseConfig {
                nodes: vec!["Tokyo".into(), "Berlin".into()],
                hold: Duration::from_millis(2000),
                connections: None,
            }),
        }
    }

    fn linked_config() -> SimulatorConfig {
        let mut cfg = config();
        cfg.pulse = Some(PulseConfig {
            nodes: vec!["Tokyo".into(), "Berlin".into(), "Lagos".into()],
            hold: Duration::from_millis(2000),
            connections: Some(ConnectionConfig {
                interval: Duration::from_millis(1500),
                lifetime: Duration::from_millis(3000),
                keep: 4,
            }),
        });
        cfg
    }

    #[test]
    fn test_seed_values_before_first_tick() {
        let sim = LiveMetricSimulator::new(config()).unwrap();
        assert_eq!(sim.metric("accuracy"), Some(96.4));
        assert_eq!(sim.metric("total"), Some(100.0));
        assert_eq!(sim.metric("missing"), None);
        assert_eq!(sim.tick_count(), 0);
    }

    #[test]
    fn test_ticks_fire_on_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut sim = LiveMetricSimulator::new(config()).unwrap();
        assert_eq!(sim.advance(Duration::from_millis(2499), &mut rng), 0);
        assert_eq!(sim.advance(Duration::from_millis(1), &mut rng), 1);
        assert_eq!(sim.advance(Duration::from_millis(5000), &mut rng), 2);
        assert_eq!(sim.tick_count(), 3);
    }

    #[test]
    fn test_accumulate_grows_within_delta() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut sim = LiveMetricSimulator::new(config()).unwrap();
        let mut last = sim.metric("total").unwrap();
        for _ in 0..20 {
            sim.tick(&mut rng);
            let now = sim.metric("total").unwrap();
            let delta = now - last;
            assert!((3.0..=17.0).contains(&delta) || now == 1_000.0);
            last = now;
        }
    }

    #[test]
    fn test_accumulate_clamps_to_band() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut sim = LiveMetricSimulator::new(config()).unwrap();
        for _ in 0..500 {
            sim.tick(&mut rng);
        }
        assert_eq!(sim.metric("total"), Some(1_000.0));
    }

    #[test]
    fn test_pulse_clears_after_hold() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut sim = LiveMetricSimulator::new(config()).unwrap();
        sim.advance(Duration::from_millis(2500), &mut rng);
        assert!(sim.active_node().is_some());
        sim.advance(Duration::from_millis(1999), &mut rng);
        assert!(sim.active_node().is_some());
        sim.advance(Duration::from_millis(1), &mut rng);
        assert!(sim.active_node().is_none());
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let mut cfg = config();
        cfg.metrics[0].min = 99.0;
        assert!(matches!(
            LiveMetricSimulator::new(cfg),
            Err(SimulatorError::InvertedBand { .. })
        ));

        let mut cfg = config();
        cfg.metrics[1].name = "accuracy".into();
        assert_eq!(
            LiveMetricSimulator::new(cfg).unwrap_err(),
            SimulatorError::DuplicateName("accuracy".into())
        );

        let mut cfg = config();
        cfg.interval = Duration::ZERO;
        assert_eq!(
            LiveMetricSimulator::new(cfg).unwrap_err(),
            SimulatorError::Timer(TimerError::ZeroPeriod)
        );
    }

    #[test]
    fn test_stop_releases_timers() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut sim = LiveMetricSimulator::new(config()).unwrap();
        sim.advance(Duration::from_millis(2500), &mut rng);
        assert_eq!(sim.pending_timers(), 2);
        sim.stop();
        assert_eq!(sim.pending_timers(), 0);
        assert_eq!(sim.advance(Duration::from_secs(60), &mut rng), 0);
    }

    #[test]
    fn test_connections_spawn_on_their_own_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut sim = LiveMetricSimulator::new(linked_config()).unwrap();
        assert_eq!(sim.advance(Duration::from_millis(1499), &mut rng), 0);
        assert_eq!(sim.connections().count(), 0);
        assert_eq!(sim.advance(Duration::from_millis(1), &mut rng), 0);
        assert_eq!(sim.connections().count(), 1);
        assert_eq!(sim.tick_count(), 0);
    }

    #[test]
    fn test_connections_expire_by_id() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut sim = LiveMetricSimulator::new(linked_config()).unwrap();
        sim.advance(Duration::from_millis(1500), &mut rng);
        sim.advance(Duration::from_millis(1500), &mut rng);
        let ids: Vec<u64> = sim.connections().map(|c| c.id).collect();
        assert_eq!(ids, vec![0, 1]);

        // t = 4500: link 0 (born at 1500) is gone, link 2 just arrived.
        sim.advance(Duration::from_millis(1500), &mut rng);
        let ids: Vec<u64> = sim.connections().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_connection_window_evicts_oldest() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut cfg = linked_config();
        if let Some(connections) = cfg.pulse.as_mut().and_then(|p| p.connections.as_mut()) {
            connections.lifetime = Duration::from_secs(60);
        }
        let mut sim = LiveMetricSimulator::new(cfg).unwrap();
        sim.advance(Duration::from_millis(1500 * 6), &mut rng);
        let ids: Vec<u64> = sim.connections().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 3, 4, 5]);
        // Tick, connect interval, pulse hold and one expiry per kept link.
        assert_eq!(sim.pending_timers(), 3 + 4);
    }

    #[test]
    fn test_stop_releases_connection_timers() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut sim = LiveMetricSimulator::new(linked_config()).unwrap();
        sim.advance(Duration::from_millis(2500), &mut rng);
        assert_eq!(sim.connections().count(), 1);
        assert!(sim.pending_timers() > 2);
        sim.stop();
        assert_eq!(sim.pending_timers(), 0);
        assert_eq!(sim.connections().count(), 0);
        sim.advance(Duration::from_secs(60), &mut rng);
        assert_eq!(sim.connections().count(), 0);
    }

    #[test]
    fn test_zero_connection_window_rejected() {
        let mut cfg = linked_config();
        if let Some(connections) = cfg.pulse.as_mut().and_then(|p| p.connections.as_mut()) {
            connections.keep = 0;
        }
        assert_eq!(
            LiveMetricSimulator::new(cfg).unwrap_err(),
            SimulatorError::NoConnectionSlots
        );
    }
}
