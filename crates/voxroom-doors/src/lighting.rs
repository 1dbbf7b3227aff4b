use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use voxroom_room::PointLight;

const HORIZON_COLOR: [f64; 3] = [1.0, 0.62, 0.35];
const NOON_COLOR: [f64; 3] = [1.0, 0.97, 0.9];
const ARTIFICIAL_COLOR: [f64; 3] = [1.0, 0.78, 0.5];
const ARTIFICIAL_INTENSITY: f64 = 0.35;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct TimeOfDay(f64);

impl TimeOfDay {
    pub fn new(hours: f64) -> Self {
        if hours.is_finite() {
            Self(hours.rem_euclid(24.0))
        } else {
            Self::default()
        }
    }

    pub fn hours(&self) -> f64 {
        self.0
    }

    pub fn sun_elevation(&self) -> f64 {
        (PI * (self.0 - 6.0) / 12.0).sin()
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self(12.0)
    }
}

impl From<f64> for TimeOfDay {
    fn from(hours: f64) -> Self {
        Self::new(hours)
    }
}

impl From<TimeOfDay> for f64 {
    fn from(time: TimeOfDay) -> Self {
        time.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightProfile {
    pub intensity: f64,
    pub color: [f64; 3],
}

impl LightProfile {
    pub const OFF: LightProfile = LightProfile {
        intensity: 0.0,
        color: NOON_COLOR,
    };

    pub fn for_time(time: TimeOfDay) -> Self {
        let elevation = time.sun_elevation();
        if elevation <= 0.0 {
            return Self {
                intensity: ARTIFICIAL_INTENSITY,
                color: ARTIFICIAL_COLOR,
            };
        }
        Self {
            intensity: 0.2 + 0.8 * elevation,
            color: lerp_color(HORIZON_COLOR, NOON_COLOR, elevation),
        }
    }

    pub fn apply(&self, lights: &mut [PointLight]) {
        for light in lights {
            light.intensity = self.intensity;
            light.color = self.color;
        }
    }
}

fn lerp_color(from: [f64; 3], to: [f64; 3], t: f64) -> [f64; 3] {
    let t = t.clamp(0.0, 1.0);
    [
        from[0] + (to[0] - from[0]) * t,
        from[1] + (to[1] - from[1]) * t,
        from[2] + (to[2] - from[2]) * t,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noon_is_brightest() {
        let noon = LightProfile::for_time(TimeOfDay::new(12.0));
        let morning = LightProfile::for_time(TimeOfDay::new(8.0));
        assert!((noon.intensity - 1.0).abs() < 1.0e-9);
        assert!(morning.intensity < noon.intensity);
        assert!(morning.color[1] < noon.color[1]);
    }

    #[test]
    fn night_uses_artificial_light() {
        let night = LightProfile::for_time(TimeOfDay::new(23.0));
        assert_eq!(night.intensity, ARTIFICIAL_INTENSITY);
        assert_eq!(night.color, ARTIFICIAL_COLOR);
    }

    #[test]
    fn hours_wrap() {
        assert_eq!(TimeOfDay::new(26.0).hours(), 2.0);
        assert_eq!(TimeOfDay::new(-1.0).hours(), 23.0);
    }
}
