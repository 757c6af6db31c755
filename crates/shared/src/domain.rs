use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::InvalidLabel;

/// High-level autonomy level for the drive system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveMode {
    Auto,
    SemiAuto,
    Manual,
}

impl DriveMode {
    pub const ALL: [DriveMode; 3] = [DriveMode::Auto, DriveMode::SemiAuto, DriveMode::Manual];

    pub fn label(self) -> &'static str {
        match self {
            DriveMode::Auto => "Auto",
            DriveMode::SemiAuto => "Semi-Auto",
            DriveMode::Manual => "Manual",
        }
    }
}

/// Discrete multiplier applied to the base commanded speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedScale {
    Half,
    Normal,
    Double,
}

impl SpeedScale {
    pub const ALL: [SpeedScale; 3] = [SpeedScale::Half, SpeedScale::Normal, SpeedScale::Double];

    /// Scalar the scale stands for; the lookup is exhaustive by
    /// construction, so a new variant cannot ship without a multiplier.
    pub fn multiplier(self) -> f32 {
        match self {
            SpeedScale::Half => 0.5,
            SpeedScale::Normal => 1.0,
            SpeedScale::Double => 2.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SpeedScale::Half => "0.5x",
            SpeedScale::Normal => "1x",
            SpeedScale::Double => "2x",
        }
    }
}

/// Headlight rig mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightMode {
    Light,
    SpotLight,
    Laser,
}

impl LightMode {
    pub const ALL: [LightMode; 3] = [LightMode::Light, LightMode::SpotLight, LightMode::Laser];

    pub fn label(self) -> &'static str {
        match self {
            LightMode::Light => "Light",
            LightMode::SpotLight => "Spot Light",
            LightMode::Laser => "Laser",
        }
    }
}

/// What the central viewport renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Map3d,
    Camera,
    Map2d,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Map3d, ViewMode::Camera, ViewMode::Map2d];

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Map3d => "3D Map",
            ViewMode::Camera => "Camera",
            ViewMode::Map2d => "2D Map",
        }
    }
}

/// One of the two virtual joysticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stick {
    Left,
    Right,
}

impl Stick {
    pub const ALL: [Stick; 2] = [Stick::Left, Stick::Right];

    pub fn label(self) -> &'static str {
        match self {
            Stick::Left => "left",
            Stick::Right => "right",
        }
    }
}

macro_rules! labeled_enum_text {
    ($name:ident, $kind:literal) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = InvalidLabel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|value| value.label().eq_ignore_ascii_case(s))
                    .ok_or_else(|| InvalidLabel::new($kind, s))
            }
        }
    };
}

labeled_enum_text!(DriveMode, "drive mode");
labeled_enum_text!(SpeedScale, "speed scale");
labeled_enum_text!(LightMode, "light mode");
labeled_enum_text!(ViewMode, "view mode");
labeled_enum_text!(Stick, "stick");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_scale_multipliers_match_labels() {
        assert_eq!(SpeedScale::Half.multiplier(), 0.5);
        assert_eq!(SpeedScale::Normal.multiplier(), 1.0);
        assert_eq!(SpeedScale::Double.multiplier(), 2.0);
    }

    #[test]
    fn labels_parse_back_to_their_variant() {
        assert_eq!("Semi-Auto".parse::<DriveMode>(), Ok(DriveMode::SemiAuto));
        assert_eq!("0.5x".parse::<SpeedScale>(), Ok(SpeedScale::Half));
        assert_eq!("Spot Light".parse::<LightMode>(), Ok(LightMode::SpotLight));
        assert_eq!("2D Map".parse::<ViewMode>(), Ok(ViewMode::Map2d));
    }

    #[test]
    fn parsing_is_case_insensitive_but_rejects_unknown_labels() {
        assert_eq!("manual".parse::<DriveMode>(), Ok(DriveMode::Manual));
        let err = "Turbo".parse::<SpeedScale>().unwrap_err();
        assert_eq!(err.kind, "speed scale");
        assert_eq!(err.label, "Turbo");
    }
}
