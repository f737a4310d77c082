//! Shrinking safe-zone model
//!
//! The zone is a circle centered on the arena that shrinks monotonically
//! toward a radius floor as match time elapses. Agents caught outside are
//! eliminated instantly by the tick's zone pass.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;
use crate::consts::ZONE_RADIUS_FACTOR;

/// The shrinking circular safe region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub center: Vec2,
    /// Shrinkable portion of the radius
    pub max_radius: f32,
    /// Floor the radius never drops below
    pub min_radius: f32,
    /// Shrink fraction is clamped here (< 1, the zone never collapses)
    pub shrink_cap: f32,
    pub shrink_duration_secs: f32,
    /// Radius as of the last `advance`
    pub current_radius: f32,
}

impl Zone {
    pub fn new(config: &MatchConfig) -> Self {
        let mut zone = Self {
            center: Vec2::new(config.arena_width / 2.0, config.arena_height / 2.0),
            max_radius: ZONE_RADIUS_FACTOR * config.arena_width.min(config.arena_height),
            min_radius: config.zone_min_radius,
            shrink_cap: config.shrink_cap,
            shrink_duration_secs: config.shrink_duration_secs,
            current_radius: 0.0,
        };
        zone.current_radius = zone.radius_at(0.0);
        zone
    }

    /// Safe radius after `elapsed_secs` of match time.
    pub fn radius_at(&self, elapsed_secs: f32) -> f32 {
        let shrink = (elapsed_secs / self.shrink_duration_secs).clamp(0.0, self.shrink_cap);
        self.max_radius * (1.0 - shrink) + self.min_radius
    }

    /// Advance the zone clock, returning the new radius.
    pub fn advance(&mut self, elapsed_secs: f32) -> f32 {
        self.current_radius = self.radius_at(elapsed_secs);
        self.current_radius
    }

    /// Euclidean containment test against the current radius.
    pub fn contains(&self, point: Vec2) -> bool {
        point.distance(self.center) <= self.current_radius
    }
}
