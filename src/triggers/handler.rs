//! Per-trigger state machine

use log::debug;
use crate::math::Point3D;
use crate::scene::{SceneTrigger, TriggerAction, TriggerCondition, TriggerFrequency};

/// Host side of the trigger handler
pub trait TriggerDelegate {
    /// Whether the interact input was pressed this tick. Only asked when an
    /// interact trigger could fire.
    fn has_received_interaction(&mut self) -> bool;

    /// Run one action of a firing trigger
    fn invoke(&mut self, action: &TriggerAction);
}

/// Where the player is relative to a trigger region
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlayerPosition {
    #[default]
    Outside,
    /// Inside this tick, outside the previous one
    Entered,
    Inside,
    /// Left the region. Stays here until the player comes back in.
    Exited,
}

impl PlayerPosition {
    fn next(self, in_region: bool) -> Self {
        use PlayerPosition::*;
        match (self, in_region) {
            (Outside | Exited, true) => Entered,
            (Outside, false) => Outside,
            (Exited, false) => Exited,
            (Entered | Inside, true) => Inside,
            (Entered | Inside, false) => Exited,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriggerState {
    pub player_position: PlayerPosition,
    pub has_activated_once: bool,
}

/// Runs scene triggers against a player position, once per tick. State is
/// kept per trigger index and discarded when the trigger list is replaced.
#[derive(Debug, Default)]
pub struct TriggerHandler {
    triggers: Vec<SceneTrigger>,
    states: Vec<TriggerState>,
}

impl TriggerHandler {
    pub fn new(triggers: Vec<SceneTrigger>) -> Self {
        let states = vec![TriggerState::default(); triggers.len()];
        Self { triggers, states }
    }

    pub fn triggers(&self) -> &[SceneTrigger] {
        &self.triggers
    }

    /// Replace the triggers and forget everything about the old ones
    pub fn set_triggers(&mut self, triggers: Vec<SceneTrigger>) {
        *self = Self::new(triggers);
    }

    pub fn state(&self, index: usize) -> Option<&TriggerState> {
        self.states.get(index)
    }

    /// Advance every trigger by one tick and dispatch the actions of those
    /// that fire, in list order
    pub fn process_triggers(&mut self, player_position: Point3D, delegate: &mut dyn TriggerDelegate) {
        for (index, (trigger, state)) in self.triggers.iter().zip(&mut self.states).enumerate() {
            let in_region = trigger.region.contains(player_position);
            state.player_position = state.player_position.next(in_region);

            if !should_fire(trigger, state, delegate) {
                continue;
            }

            debug!("Trigger {} fired ({:?})", index, trigger.condition);
            for action in &trigger.actions {
                delegate.invoke(action);
            }
        }
    }
}

fn should_fire(trigger: &SceneTrigger, state: &mut TriggerState, delegate: &mut dyn TriggerDelegate) -> bool {
    match trigger.condition {
        TriggerCondition::Never => false,
        TriggerCondition::PlayerEnter => state.player_position == PlayerPosition::Entered,
        TriggerCondition::PlayerExit => state.player_position == PlayerPosition::Exited,
        TriggerCondition::PlayerInteract => {
            if state.player_position != PlayerPosition::Inside {
                return false;
            }
            if trigger.frequency == TriggerFrequency::Once && state.has_activated_once {
                return false;
            }
            if !delegate.has_received_interaction() {
                return false;
            }
            state.has_activated_once = true;
            true
        }
    }
}
