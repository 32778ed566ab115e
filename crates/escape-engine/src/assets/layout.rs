use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::components::obstacle::{Axis, MovementProfile};

/// Level description: room bounds, player size, obstacles and the exit volume.
/// Loaded from a JSON file at runtime, or built in via [`LevelLayout::reference`].
///
/// Vectors are `[x, y, z]` arrays. Boxes are given by center and half-extents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    pub room: RoomDesc,
    #[serde(default = "default_player_half_extents")]
    pub player_half_extents: Vec3,
    /// Store order matters: collision resolution visits obstacles in this order.
    #[serde(default)]
    pub obstacles: Vec<ObstacleDesc>,
    pub exit: BoxDesc,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomDesc {
    pub x_min: f32,
    pub x_max: f32,
    pub z_min: f32,
    pub z_max: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxDesc {
    pub position: Vec3,
    pub half_extents: Vec3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleDesc {
    /// Human-readable label.
    #[serde(default)]
    pub name: String,
    pub position: Vec3,
    pub half_extents: Vec3,
    /// Present only for moving obstacles.
    #[serde(default)]
    pub motion: Option<MovementProfile>,
}

/// Reasons a layout is rejected.
#[derive(thiserror::Error, Debug)]
pub enum LayoutError {
    #[error("layout parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{what} has a non-positive half-extent on the {axis} axis")]
    NonPositiveExtent { what: String, axis: char },

    #[error("room bounds are inverted")]
    InvertedRoom,

    #[error("obstacle {index}: travel bounds are inverted")]
    InvertedTravel { index: usize },

    #[error("obstacle {index}: starting position lies outside its travel bounds")]
    StartOutsideTravel { index: usize },

    #[error("obstacle {index}: direction must be -1 or +1")]
    BadDirection { index: usize },

    #[error("obstacle {index}: speed must be non-negative")]
    NegativeSpeed { index: usize },
}

fn default_player_half_extents() -> Vec3 {
    Vec3::new(0.5, 0.75, 0.5)
}

impl ObstacleDesc {
    fn block(name: &str, position: Vec3, half_extents: Vec3) -> Self {
        Self {
            name: name.to_string(),
            position,
            half_extents,
            motion: None,
        }
    }
}

impl LevelLayout {
    /// The built-in room: a box, a pillar, a long barrier, five small boxes and a
    /// platform sliding along X, with the exit set into the front wall.
    pub fn reference() -> Self {
        let mut obstacles = vec![
            ObstacleDesc::block("box", Vec3::new(-5.0, 1.0, -5.0), Vec3::new(1.0, 1.0, 1.0)),
            ObstacleDesc::block("pillar", Vec3::new(5.0, 3.0, -5.0), Vec3::new(0.75, 3.0, 0.75)),
            ObstacleDesc::block("barrier", Vec3::new(0.0, 0.75, 2.0), Vec3::new(5.0, 0.75, 0.5)),
        ];
        for i in 0..5 {
            obstacles.push(ObstacleDesc::block(
                "small_box",
                Vec3::new(-7.0 + i as f32 * 3.5, 0.5, -2.0),
                Vec3::splat(0.5),
            ));
        }
        obstacles.push(ObstacleDesc {
            name: "platform".to_string(),
            position: Vec3::new(0.0, 0.25, -7.0),
            half_extents: Vec3::new(1.5, 0.25, 1.5),
            motion: Some(MovementProfile {
                axis: Axis::X,
                direction: 1.0,
                speed: 0.03,
                min: -5.0,
                max: 5.0,
            }),
        });

        Self {
            room: RoomDesc {
                x_min: -9.5,
                x_max: 9.5,
                z_min: -9.5,
                z_max: 9.5,
            },
            player_half_extents: default_player_half_extents(),
            obstacles,
            exit: BoxDesc {
                position: Vec3::new(8.0, 1.5, 9.7),
                half_extents: Vec3::new(1.5, 1.5, 0.25),
            },
        }
    }

    /// Parse and validate a layout from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let layout: LevelLayout = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.room.x_min >= self.room.x_max || self.room.z_min >= self.room.z_max {
            return Err(LayoutError::InvertedRoom);
        }
        check_extents("player", self.player_half_extents)?;
        check_extents("exit", self.exit.half_extents)?;

        for (index, obstacle) in self.obstacles.iter().enumerate() {
            check_extents(&format!("obstacle {index}"), obstacle.half_extents)?;
            if let Some(profile) = &obstacle.motion {
                if profile.min >= profile.max {
                    return Err(LayoutError::InvertedTravel { index });
                }
                let start = profile.axis.get(obstacle.position);
                if start < profile.min || start > profile.max {
                    return Err(LayoutError::StartOutsideTravel { index });
                }
                if profile.direction != 1.0 && profile.direction != -1.0 {
                    return Err(LayoutError::BadDirection { index });
                }
                if profile.speed < 0.0 {
                    return Err(LayoutError::NegativeSpeed { index });
                }
            }
        }
        Ok(())
    }
}

impl Default for LevelLayout {
    fn default() -> Self {
        Self::reference()
    }
}

fn check_extents(what: &str, half: Vec3) -> Result<(), LayoutError> {
    for (axis, value) in [('x', half.x), ('y', half.y), ('z', half.z)] {
        if value <= 0.0 {
            return Err(LayoutError::NonPositiveExtent {
                what: what.to_string(),
                axis,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_layout_has_nine_obstacles() {
        let layout = LevelLayout::reference();
        assert_eq!(layout.obstacles.len(), 9);
        let moving: Vec<_> = layout.obstacles.iter().filter(|o| o.motion.is_some()).collect();
        assert_eq!(moving.len(), 1);
        assert_eq!(moving[0].name, "platform");
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn parse_minimal_layout() {
        let json = r#"{
            "room": { "x_min": -4, "x_max": 4, "z_min": -4, "z_max": 4 },
            "exit": { "position": [3, 1, 3.5], "half_extents": [1, 1, 0.25] }
        }"#;
        let layout = LevelLayout::from_json(json).unwrap();
        assert!(layout.obstacles.is_empty());
        assert_eq!(layout.player_half_extents, Vec3::new(0.5, 0.75, 0.5));
        assert_eq!(layout.exit.position, Vec3::new(3.0, 1.0, 3.5));
    }

    #[test]
    fn parse_moving_obstacle() {
        let json = r#"{
            "room": { "x_min": -9.5, "x_max": 9.5, "z_min": -9.5, "z_max": 9.5 },
            "obstacles": [
                {
                    "name": "lift",
                    "position": [0, 0.25, 0],
                    "half_extents": [1, 0.25, 1],
                    "motion": { "axis": "y", "direction": -1, "speed": 0.02, "min": 0.25, "max": 4 }
                }
            ],
            "exit": { "position": [8, 1.5, 9.7], "half_extents": [1.5, 1.5, 0.25] }
        }"#;
        let layout = LevelLayout::from_json(json).unwrap();
        let motion = layout.obstacles[0].motion.unwrap();
        assert_eq!(motion.axis, Axis::Y);
        assert_eq!(motion.direction, -1.0);
    }

    #[test]
    fn rejects_inverted_travel() {
        let mut layout = LevelLayout::reference();
        if let Some(motion) = layout.obstacles[8].motion.as_mut() {
            motion.min = 6.0;
        }
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::InvertedTravel { index: 8 })
        ));
    }

    #[test]
    fn rejects_start_outside_travel() {
        let mut layout = LevelLayout::reference();
        if let Some(motion) = layout.obstacles[8].motion.as_mut() {
            motion.min = 1.0;
            motion.max = 5.0;
        }
        assert_eq!(layout.obstacles[8].position.x, 0.0);
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::StartOutsideTravel { index: 8 })
        ));

        // Starting exactly on a bound is fine.
        if let Some(motion) = layout.obstacles[8].motion.as_mut() {
            motion.min = 0.0;
        }
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn rejects_flat_exit() {
        let mut layout = LevelLayout::reference();
        layout.exit.half_extents.z = 0.0;
        match layout.validate() {
            Err(LayoutError::NonPositiveExtent { what, axis }) => {
                assert_eq!(what, "exit");
                assert_eq!(axis, 'z');
            }
            other => panic!("Expected NonPositiveExtent, got {:?}", other),
        }
    }

    #[test]
    fn rejects_bad_direction() {
        let mut layout = LevelLayout::reference();
        if let Some(motion) = layout.obstacles[8].motion.as_mut() {
            motion.direction = 0.5;
        }
        assert!(matches!(layout.validate(), Err(LayoutError::BadDirection { .. })));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = LevelLayout::from_json("{ not json").unwrap_err();
        assert!(matches!(err, LayoutError::Parse(_)));
    }

    #[test]
    fn round_trips_through_json() {
        let layout = LevelLayout::reference();
        let json = serde_json::to_string(&layout).unwrap();
        assert_eq!(LevelLayout::from_json(&json).unwrap(), layout);
    }
}
