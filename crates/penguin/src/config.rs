//! Scenario configuration
//!
//! Every knob of the penguin scenario lives here. The defaults reproduce the
//! classic training setup; a JSON file with any subset of the fields can
//! override them, missing fields keep their defaults.

use std::path::Path;

use physics::Region;
use serde::{Deserialize, Serialize};

use crate::error::ScenarioError;

/// Configuration for the penguin agent
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Forward speed at full throttle, in units per second
    pub move_speed: f32,
    /// Turn rate, in degrees per second
    pub turn_speed: f32,
    /// Radius of the agent's contact sphere
    pub radius: f32,
    /// Where the agent is placed at the start of each episode
    pub placement: Region,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            turn_speed: 180.0,
            radius: 0.5,
            placement: Region::new(0.0, 360.0, 0.0, 9.0),
        }
    }
}

/// Configuration for the baby penguin
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BabyConfig {
    /// Radius of the baby's contact sphere
    pub radius: f32,
    /// Heading after placement, in degrees (180 faces back toward the center)
    pub heading: f32,
    /// Where the baby is placed at the start of each episode
    pub placement: Region,
}

impl Default for BabyConfig {
    fn default() -> Self {
        Self {
            radius: 0.5,
            heading: 180.0,
            placement: Region::new(-45.0, 45.0, 4.0, 9.0),
        }
    }
}

/// Configuration for the fish school
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FishConfig {
    /// Fish spawned per episode
    pub count: usize,
    /// Base swim speed; zero or less keeps the fish still
    pub speed: f32,
    /// Radius of each fish's contact sphere
    pub radius: f32,
    /// Where fish are spawned
    pub spawn: Region,
    /// Where wandering fish pick their next destination
    pub wander: Region,
}

impl Default for FishConfig {
    fn default() -> Self {
        Self {
            count: 4,
            speed: 0.5,
            radius: 0.3,
            spawn: Region::new(100.0, 260.0, 2.0, 13.0),
            wander: Region::new(100.0, 260.0, 2.0, 13.0),
        }
    }
}

/// Full scenario configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Seed for every random draw in the arena
    pub seed: u64,
    /// Simulated seconds per tick
    pub dt: f32,
    /// Step budget per episode; zero disables both the budget and the
    /// per-step penalty
    pub max_steps: u32,
    /// Height above the arena floor at which bodies are placed
    pub spawn_height: f32,
    /// Horizontal distance from the center the agent may not leave
    pub boundary_radius: f32,
    /// Seconds a feeding effect stays alive
    pub effect_lifetime: f32,
    pub agent: AgentConfig,
    pub baby: BabyConfig,
    pub fish: FishConfig,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            dt: 0.02,
            max_steps: 5000,
            spawn_height: 0.5,
            boundary_radius: 15.0,
            effect_lifetime: 4.0,
            agent: AgentConfig::default(),
            baby: BabyConfig::default(),
            fish: FishConfig::default(),
        }
    }
}

impl ScenarioConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ScenarioError> {
        positive("dt", self.dt)?;
        positive("boundary_radius", self.boundary_radius)?;
        non_negative("effect_lifetime", self.effect_lifetime)?;
        finite("spawn_height", self.spawn_height)?;

        non_negative("agent.move_speed", self.agent.move_speed)?;
        non_negative("agent.turn_speed", self.agent.turn_speed)?;
        positive("agent.radius", self.agent.radius)?;
        region("agent.placement", &self.agent.placement)?;

        positive("baby.radius", self.baby.radius)?;
        finite("baby.heading", self.baby.heading)?;
        region("baby.placement", &self.baby.placement)?;

        finite("fish.speed", self.fish.speed)?;
        positive("fish.radius", self.fish.radius)?;
        region("fish.spawn", &self.fish.spawn)?;
        region("fish.wander", &self.fish.wander)?;

        if self.agent.radius >= self.boundary_radius {
            return Err(invalid("boundary_radius", "must exceed the agent radius"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ScenarioError {
    ScenarioError::InvalidConfig { field, reason }
}

fn finite(field: &'static str, value: f32) -> Result<(), ScenarioError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, "must be finite"))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ScenarioError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(invalid(field, "must not be negative"));
    }
    Ok(())
}

fn positive(field: &'static str, value: f32) -> Result<(), ScenarioError> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(invalid(field, "must be positive"));
    }
    Ok(())
}

fn region(field: &'static str, region: &Region) -> Result<(), ScenarioError> {
    for value in [
        region.min_angle,
        region.max_angle,
        region.min_radius,
        region.max_radius,
    ] {
        finite(field, value)?;
    }
    if region.min_radius < 0.0 {
        return Err(invalid(field, "has a negative radius"));
    }
    if region.max_radius < region.min_radius {
        return Err(invalid(field, "has max_radius below min_radius"));
    }
    if region.max_angle < region.min_angle {
        return Err(invalid(field, "has max_angle below min_angle"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        ScenarioConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ScenarioConfig::from_json(r#"{ "seed": 9, "fish": { "count": 2 } }"#).unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.fish.count, 2);
        assert_eq!(config.fish.speed, 0.5);
        assert_eq!(config.agent, AgentConfig::default());
    }

    #[test]
    fn rejects_zero_dt() {
        let err = ScenarioConfig::from_json(r#"{ "dt": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ScenarioError::InvalidConfig { field: "dt", .. }));
    }

    #[test]
    fn rejects_inverted_radius() {
        let json = r#"{ "baby": { "placement": { "min_angle": 0, "max_angle": 10, "min_radius": 5, "max_radius": 1 } } }"#;
        let err = ScenarioConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ScenarioError::InvalidConfig { field: "baby.placement", .. }));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = ScenarioConfig::from_json("{ seed: }").unwrap_err();
        assert!(matches!(err, ScenarioError::Parse(_)));
    }
}
