//! Scene triggers: invisible boxes that fire actions when the player
//! interacts with them

use serde::{Serialize, Deserialize};
use crate::geometry::Box3D;

/// When a trigger fires
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerCondition {
    #[default]
    Never,
    PlayerEnter,
    PlayerInteract,
    PlayerExit,
}

impl TriggerCondition {
    /// Wire code, as stored in scene files
    pub fn code(self) -> u32 {
        match self {
            TriggerCondition::Never => 0,
            TriggerCondition::PlayerEnter => 1,
            TriggerCondition::PlayerInteract => 2,
            TriggerCondition::PlayerExit => 3,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(TriggerCondition::Never),
            1 => Some(TriggerCondition::PlayerEnter),
            2 => Some(TriggerCondition::PlayerInteract),
            3 => Some(TriggerCondition::PlayerExit),
            _ => None,
        }
    }
}

/// How often an interact trigger may fire
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerFrequency {
    #[default]
    Once,
    Always,
}

impl TriggerFrequency {
    pub fn code(self) -> u32 {
        match self {
            TriggerFrequency::Once => 0,
            TriggerFrequency::Always => 1,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(TriggerFrequency::Once),
            1 => Some(TriggerFrequency::Always),
            _ => None,
        }
    }
}

/// What a trigger asks the host to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerAction {
    Debug,
    Autosave,
    CameraSelect(usize),
}

impl TriggerAction {
    /// Parse the textual form used in scene files: a bare keyword
    /// (`Debug`, `Autosave`) or `Key=Value` (`SetCamera=2`).
    /// Anything unrecognized yields `None`.
    pub fn parse(text: &str) -> Option<Self> {
        match text.split_once('=') {
            None => match text {
                "Debug" => Some(TriggerAction::Debug),
                "Autosave" => Some(TriggerAction::Autosave),
                _ => None,
            },
            Some(("SetCamera", value)) => value.parse().ok().map(TriggerAction::CameraSelect),
            Some(_) => None,
        }
    }

    /// Textual form, inverse of `parse`
    pub fn to_text(&self) -> String {
        match self {
            TriggerAction::Debug => "Debug".to_string(),
            TriggerAction::Autosave => "Autosave".to_string(),
            TriggerAction::CameraSelect(index) => format!("SetCamera={}", index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneTrigger {
    pub region: Box3D,
    pub condition: TriggerCondition,
    pub frequency: TriggerFrequency,
    pub actions: Vec<TriggerAction>,
}

impl SceneTrigger {
    pub fn new(
        frequency: TriggerFrequency,
        condition: TriggerCondition,
        region: Box3D,
        actions: Vec<TriggerAction>,
    ) -> Self {
        Self {
            region,
            condition,
            frequency,
            actions,
        }
    }
}
