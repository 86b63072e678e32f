//! Frame timing for the simulation tick
//!
//! Clamps raw frame deltas, applies pause and time scale, and accumulates
//! scaled time into fixed-length ticks.

use serde::{Deserialize, Serialize};

/// Configuration for game time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// Scaled seconds per real second
    pub time_scale: f32,
    /// Length of one simulation tick in seconds
    pub fixed_timestep: f32,
    /// Largest frame delta accepted before clamping
    pub max_delta_time: f32,
}

/// Errors raised when a time configuration is rejected
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimeConfigError {
    #[error("time scale must be finite and not negative, got {0}")]
    InvalidTimeScale(f32),

    #[error("fixed timestep must be positive, got {0}")]
    InvalidFixedTimestep(f32),

    #[error("max delta time must not be negative, got {0}")]
    InvalidMaxDeltaTime(f32),
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            fixed_timestep: 1.0 / 60.0,
            max_delta_time: 0.25,
        }
    }
}

impl TimeConfig {
    pub fn validate(&self) -> Result<(), TimeConfigError> {
        if !(self.time_scale.is_finite() && self.time_scale >= 0.0) {
            return Err(TimeConfigError::InvalidTimeScale(self.time_scale));
        }
        if !(self.fixed_timestep.is_finite() && self.fixed_timestep > 0.0) {
            return Err(TimeConfigError::InvalidFixedTimestep(self.fixed_timestep));
        }
        if !(self.max_delta_time >= 0.0) {
            return Err(TimeConfigError::InvalidMaxDeltaTime(self.max_delta_time));
        }
        Ok(())
    }
}

/// Game time tracking
#[derive(Debug, Clone, Default)]
pub struct GameTime {
    /// Configuration
    pub config: TimeConfig,
    /// Scaled time since start in seconds
    pub total_time: f64,
    /// Delta time for this frame (clamped, scaled)
    pub delta_time: f32,
    /// Clamped delta before scaling
    pub unscaled_delta_time: f32,
    /// Frames seen so far
    pub frame_count: u64,
    /// Whether time is frozen
    pub paused: bool,
    fixed_accumulator: f32,
}

impl GameTime {
    /// Create a new game time with custom config
    pub fn new(config: TimeConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Advance by the raw delta measured since the previous frame
    pub fn update(&mut self, raw_delta: f32) {
        // max_delta_time may be negative or NaN if the config was never validated
        self.unscaled_delta_time = raw_delta.max(0.0).min(self.config.max_delta_time).max(0.0);
        self.frame_count += 1;

        if self.paused {
            self.delta_time = 0.0;
            return;
        }

        self.delta_time = self.unscaled_delta_time * self.config.time_scale;
        self.total_time += self.delta_time as f64;
        self.fixed_accumulator += self.delta_time;
    }

    /// Drain the accumulator and return how many ticks to run this frame
    pub fn fixed_steps(&mut self) -> u32 {
        if self.config.fixed_timestep <= 0.0 {
            return 0;
        }
        let mut steps = 0;
        while self.fixed_accumulator >= self.config.fixed_timestep {
            self.fixed_accumulator -= self.config.fixed_timestep;
            steps += 1;
        }
        steps
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Set the time scale (0.0 = frozen, 1.0 = normal)
    pub fn set_time_scale(&mut self, scale: f32) {
        self.config.time_scale = scale.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_time() {
        let mut time = GameTime::default();
        time.update(0.016);

        assert!(time.delta_time > 0.0);
        assert_eq!(time.frame_count, 1);

        time.pause();
        time.update(0.016);
        assert_eq!(time.delta_time, 0.0);
        assert_eq!(time.frame_count, 2);
    }

    #[test]
    fn test_delta_is_clamped() {
        let mut time = GameTime::default();
        time.update(5.0);
        assert_eq!(time.unscaled_delta_time, 0.25);
    }

    #[test]
    fn test_fixed_steps() {
        let mut time = GameTime::new(TimeConfig {
            fixed_timestep: 0.1,
            ..Default::default()
        });
        time.update(0.25);
        assert_eq!(time.fixed_steps(), 2);
        assert_eq!(time.fixed_steps(), 0);
    }

    #[test]
    fn test_time_scale() {
        let mut time = GameTime::default();
        time.set_time_scale(-1.0);
        assert_eq!(time.config.time_scale, 0.0);
        time.set_time_scale(2.0);
        time.update(0.1);
        assert!((time.delta_time - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_config_validation() {
        assert!(TimeConfig::default().validate().is_ok());

        let config = TimeConfig {
            max_delta_time: -1.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(TimeConfigError::InvalidMaxDeltaTime(-1.0)));

        let config = TimeConfig {
            fixed_timestep: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(TimeConfigError::InvalidFixedTimestep(0.0)));

        let config = TimeConfig {
            time_scale: f32::INFINITY,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(TimeConfigError::InvalidTimeScale(_))));
    }

    #[test]
    fn test_update_survives_bad_bounds() {
        let mut time = GameTime::new(TimeConfig {
            max_delta_time: -1.0,
            ..Default::default()
        });
        time.update(1.0 / 60.0);
        assert_eq!(time.unscaled_delta_time, 0.0);

        let mut time = GameTime::new(TimeConfig {
            max_delta_time: f32::NAN,
            ..Default::default()
        });
        time.update(-0.5);
        assert_eq!(time.unscaled_delta_time, 0.0);
        assert_eq!(time.frame_count, 1);
    }
}
