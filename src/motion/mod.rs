//! Animated primitives: one implementation each, configured per call site.

pub mod counter;
pub mod easing;
pub mod number_format;
pub mod scroll;
pub mod sequencer;
pub mod simulator;

pub use counter::{AnimatedCounter, CounterPhase};
pub use easing::CubicBezier;
pub use scroll::{ScrollConfig, ScrollError, ScrollPhysics, SmoothScroll};
pub use sequencer::{ProgressSequencer, ProgressView, SequencerConfig, SequencerState};
pub use simulator::{
    ConnectionConfig, ConnectionPulse, LiveMetricSimulator, MetricSpec, PulseConfig,
    SimulatorConfig, SimulatorError, UpdateRule,
};
