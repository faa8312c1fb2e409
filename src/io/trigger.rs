//! Trigger records inside scene files
//!
//! Region (origin xyz, width, length, height as f32), condition code (u32),
//! frequency code (u32), then a u32 action count and that many
//! length-prefixed action strings.

use log::{debug, warn};
use crate::geometry::{Box3D, Size3D};
use crate::scene::{SceneTrigger, TriggerAction, TriggerCondition, TriggerFrequency};
use super::reader::{ByteReader, ByteWriter};
use super::DecodeError;

pub(crate) fn read_trigger(reader: &mut ByteReader) -> Result<SceneTrigger, DecodeError> {
    let origin = reader.read_point("trigger region")?;
    let size = Size3D::new(
        reader.read_f32("trigger region")?,
        reader.read_f32("trigger region")?,
        reader.read_f32("trigger region")?,
    );

    let condition_code = reader.read_u32("trigger condition")?;
    let condition = TriggerCondition::from_code(condition_code).unwrap_or_else(|| {
        warn!("Unknown trigger condition {}, trigger will never fire", condition_code);
        TriggerCondition::default()
    });

    let frequency_code = reader.read_u32("trigger frequency")?;
    let frequency = TriggerFrequency::from_code(frequency_code).unwrap_or_else(|| {
        warn!("Unknown trigger frequency {}, using once", frequency_code);
        TriggerFrequency::default()
    });

    let action_count = reader.read_u32("trigger action count")?;
    let mut actions = Vec::new();
    for _ in 0..action_count {
        let text = reader.read_string("trigger action")?;
        match TriggerAction::parse(&text) {
            Some(action) => actions.push(action),
            None => debug!("Dropping unrecognized trigger action {:?}", text),
        }
    }

    Ok(SceneTrigger::new(frequency, condition, Box3D::new(origin, size), actions))
}

pub(crate) fn write_trigger(out: &mut ByteWriter, trigger: &SceneTrigger) {
    out.point(trigger.region.origin);
    out.f32(trigger.region.size.width);
    out.f32(trigger.region.size.length);
    out.f32(trigger.region.size.height);
    out.u32(trigger.condition.code());
    out.u32(trigger.frequency.code());
    out.count(trigger.actions.len());
    for action in &trigger.actions {
        out.string(&action.to_text());
    }
}

/// Decode a single trigger record
pub fn decode_trigger(data: &[u8]) -> Result<SceneTrigger, DecodeError> {
    read_trigger(&mut ByteReader::new(data))
}

pub fn encode_trigger(trigger: &SceneTrigger) -> Vec<u8> {
    let mut out = ByteWriter::default();
    write_trigger(&mut out, trigger);
    out.bytes
}
