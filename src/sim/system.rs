//! Event scheduling and dispatch.
//!
//! One `EventSystem` per settlement (or per simulation) owns its own seeded
//! RNG stream; sharing a stream across settlements would entangle their
//! event sequences and break reproducibility. `advance_turn` is the sole
//! mutating entry point and must be driven serially by the caller.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::events::DisasterKind;
use crate::model::{SettlementState, World, WorldSettings};

/// Shortest possible gap between two scheduled disasters, in turns.
const MIN_DELAY: u64 = 2;

/// Per-kind weight multipliers for event selection. Multiplied with the
/// world-state factors (weather, moisture, plate activity) at draw time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventWeights {
    pub flood: f64,
    pub drought: f64,
    pub raid: f64,
    pub earthquake: f64,
    pub hurricane: f64,
}

impl Default for EventWeights {
    fn default() -> Self {
        Self {
            flood: 1.0,
            drought: 1.0,
            raid: 1.0,
            earthquake: 1.0,
            hurricane: 1.0,
        }
    }
}

/// Schedules disasters and dispatches them to the settlement they strike.
#[derive(Debug)]
pub struct EventSystem {
    rng: SmallRng,
    weights: EventWeights,
    turn_counter: u64,
    next_event_turn: u64,
}

impl EventSystem {
    /// Create a system with its own RNG stream seeded from `seed`. The first
    /// event is scheduled immediately.
    pub fn new(settings: &WorldSettings, seed: u64) -> Self {
        Self::with_weights(settings, seed, EventWeights::default())
    }

    pub fn with_weights(settings: &WorldSettings, seed: u64, weights: EventWeights) -> Self {
        let mut system = Self {
            rng: SmallRng::seed_from_u64(seed),
            weights,
            turn_counter: 0,
            next_event_turn: 0,
        };
        system.next_event_turn = system.schedule_next(settings);
        system
    }

    /// Turns elapsed since construction.
    pub fn turn_counter(&self) -> u64 {
        self.turn_counter
    }

    /// Absolute turn at which the next disaster fires.
    pub fn next_event_turn(&self) -> u64 {
        self.next_event_turn
    }

    /// Advance the clock one turn; fire and return a disaster if one is due.
    ///
    /// At most one event fires per call. A driver that skips turns does not
    /// get a burst of catch-up events; the next call simply fires and the
    /// following event is rescheduled relative to the current turn.
    pub fn advance_turn(
        &mut self,
        state: &mut SettlementState,
        world: &mut World,
    ) -> Option<DisasterKind> {
        self.turn_counter += 1;
        if self.turn_counter < self.next_event_turn {
            return None;
        }
        let kind = self.choose_event(&world.settings);
        tracing::debug!(
            turn = self.turn_counter,
            kind = kind.as_str(),
            "disaster fires"
        );
        kind.apply(state, world);
        self.next_event_turn = self.schedule_next(&world.settings);
        Some(kind)
    }

    /// Absolute turn for the next event. Low disaster intensity stretches the
    /// delay out; high intensity keeps events coming.
    fn schedule_next(&mut self, settings: &WorldSettings) -> u64 {
        let intensity = settings.disaster_intensity;
        // Bounds clamp to 1 so an intensity above 1 cannot invert the range.
        let min_base = (10 + ((1.0 - intensity) * 20.0).round() as i64).max(1);
        let max_base = (20 + ((1.0 - intensity) * 40.0).round() as i64).max(min_base);
        let base = self.rng.random_range(min_base..=max_base);

        let weather_factor = 1.0 + settings.moisture * 0.5;
        let delay = ((base as f64 * weather_factor) as u64).max(MIN_DELAY);
        self.turn_counter + delay
    }

    /// Weighted draw over the five kinds, scaled by world state.
    fn choose_event(&mut self, settings: &WorldSettings) -> DisasterKind {
        let weights = self.kind_weights(settings);
        let total: f64 = weights.iter().map(|(_, w)| w).sum();
        if total <= 0.0 {
            // Degenerate configuration: fall back to a uniform draw.
            let idx = self.rng.random_range(0..DisasterKind::ALL.len());
            return DisasterKind::ALL[idx];
        }
        let mut roll = self.rng.random_range(0.0..total);
        for (kind, weight) in weights {
            if roll < weight {
                return kind;
            }
            roll -= weight;
        }
        // Floating-point edge: the roll landed on the upper boundary.
        DisasterKind::Hurricane
    }

    fn kind_weights(&self, settings: &WorldSettings) -> [(DisasterKind, f64); 5] {
        let rain = settings.weather_weight("rain");
        let dry = settings.weather_weight("dry");
        [
            (
                DisasterKind::Flood,
                self.weights.flood * rain * settings.moisture,
            ),
            (
                DisasterKind::Drought,
                self.weights.drought * dry * (1.0 - settings.moisture),
            ),
            (DisasterKind::Raid, self.weights.raid),
            (
                DisasterKind::Earthquake,
                self.weights.earthquake * settings.plate_activity,
            ),
            (
                DisasterKind::Hurricane,
                self.weights.hurricane * rain * settings.moisture,
            ),
        ]
    }
}
