/// Flat frame buffer layout shared with the host renderer.
/// Must stay in sync with the host-side reader.
///
/// Layout (all values f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Instances: max_instances × 8 floats]
/// [Debug rects: max_debug_rects × 5 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written into the header every frame so the host can
/// compute offsets without a second channel.

use glam::Vec2;

use crate::api::game::GameConfig;
use crate::api::types::GameEvent;
use crate::core::geometry::Size;
use crate::renderer::instance::RenderInstance;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_PROTOCOL_VERSION: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
pub const HEADER_ATLAS_SPLIT: usize = 4;
pub const HEADER_MAX_DEBUG_RECTS: usize = 5;
pub const HEADER_DEBUG_RECT_COUNT: usize = 6;
pub const HEADER_MAX_EVENTS: usize = 7;
pub const HEADER_EVENT_COUNT: usize = 8;
pub const HEADER_CAMERA_X: usize = 9;
pub const HEADER_CAMERA_Y: usize = 10;
pub const HEADER_VIEW_WIDTH: usize = 11;
pub const HEADER_VIEW_HEIGHT: usize = 12;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per render instance (wire format, never changes).
pub const INSTANCE_FLOATS: usize = RenderInstance::FLOATS;

/// Floats per debug rect: x, y, width, height, kind.
pub const DEBUG_RECT_FLOATS: usize = 5;

/// Floats per game event: kind, a, b, c.
pub const EVENT_FLOATS: usize = GameEvent::FLOATS;

/// One frame's worth of data to pack.
#[derive(Debug, Clone, Copy)]
pub struct FrameData<'a> {
    pub frame: u64,
    pub instances: &'a [RenderInstance],
    pub atlas_split: u32,
    /// Flat debug rect floats, `DEBUG_RECT_FLOATS` per rect.
    pub debug_rects: &'a [f32],
    pub events: &'a [GameEvent],
    pub camera: Vec2,
    pub view: Size,
}

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_debug_rects: usize,
    pub max_events: usize,

    pub instance_data_offset: usize,
    pub debug_data_offset: usize,
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_instances: usize, max_debug_rects: usize, max_events: usize) -> Self {
        let instance_data_offset = HEADER_FLOATS;
        let debug_data_offset = instance_data_offset + max_instances * INSTANCE_FLOATS;
        let event_data_offset = debug_data_offset + max_debug_rects * DEBUG_RECT_FLOATS;
        let buffer_total_floats = event_data_offset + max_events * EVENT_FLOATS;

        Self {
            max_instances,
            max_debug_rects,
            max_events,
            instance_data_offset,
            debug_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a GameConfig. Debug rects only get room when
    /// debugging is enabled.
    pub fn from_config(config: &GameConfig) -> Self {
        let max_debug_rects = if config.debug.enabled {
            config.max_instances
        } else {
            0
        };
        Self::new(config.max_instances, max_debug_rects, config.max_events)
    }

    /// A zeroed buffer of the right size.
    pub fn allocate(&self) -> Vec<f32> {
        vec![0.0; self.buffer_total_floats]
    }

    /// Write `frame` into `out`. Sections are truncated to capacity.
    /// `out` must come from `allocate`.
    pub fn pack(&self, frame: &FrameData<'_>, out: &mut [f32]) {
        if out.len() < self.buffer_total_floats {
            log::warn!(
                "frame buffer holds {} floats, layout needs {}",
                out.len(),
                self.buffer_total_floats
            );
            return;
        }

        let instances = &frame.instances[..frame.instances.len().min(self.max_instances)];
        let debug_count = (frame.debug_rects.len() / DEBUG_RECT_FLOATS).min(self.max_debug_rects);
        let events = &frame.events[..frame.events.len().min(self.max_events)];

        let header = &mut out[..HEADER_FLOATS];
        header.fill(0.0);
        header[HEADER_FRAME_COUNTER] = frame.frame as f32;
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header[HEADER_MAX_INSTANCES] = self.max_instances as f32;
        header[HEADER_INSTANCE_COUNT] = instances.len() as f32;
        header[HEADER_ATLAS_SPLIT] = (frame.atlas_split as usize).min(instances.len()) as f32;
        header[HEADER_MAX_DEBUG_RECTS] = self.max_debug_rects as f32;
        header[HEADER_DEBUG_RECT_COUNT] = debug_count as f32;
        header[HEADER_MAX_EVENTS] = self.max_events as f32;
        header[HEADER_EVENT_COUNT] = events.len() as f32;
        header[HEADER_CAMERA_X] = frame.camera.x;
        header[HEADER_CAMERA_Y] = frame.camera.y;
        header[HEADER_VIEW_WIDTH] = frame.view.width;
        header[HEADER_VIEW_HEIGHT] = frame.view.height;

        let instance_floats: &[f32] = bytemuck::cast_slice(instances);
        out[self.instance_data_offset..][..instance_floats.len()].copy_from_slice(instance_floats);

        let debug_floats = &frame.debug_rects[..debug_count * DEBUG_RECT_FLOATS];
        out[self.debug_data_offset..][..debug_floats.len()].copy_from_slice(debug_floats);

        let event_floats: &[f32] = bytemuck::cast_slice(events);
        out[self.event_data_offset..][..event_floats.len()].copy_from_slice(event_floats);
    }
}
