use bytemuck::{Pod, Zeroable};

/// Per-body render data handed to the external renderer.
/// 4 floats = 16 bytes stride: position, radius and a `BodyKind` tag.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    /// X position in world space.
    pub x: f32,
    /// Y position in world space.
    pub y: f32,
    /// Rendered radius in world units.
    pub radius: f32,
    /// `BodyKind` as a float.
    pub kind: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 4;
}

/// Snapshot of every body for one frame, in three consecutive sections:
/// planets, then satellites, then nebulas (each in arena order).
pub struct RenderBuffer {
    instances: Vec<BodyInstance>,
    planet_count: u32,
    satellite_count: u32,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
            planet_count: 0,
            satellite_count: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.planet_count = 0;
        self.satellite_count = 0;
    }

    pub fn push(&mut self, instance: BodyInstance) {
        self.instances.push(instance);
    }

    /// Record where the planet and satellite sections end.
    pub fn set_sections(&mut self, planet_count: u32, satellite_count: u32) {
        self.planet_count = planet_count;
        self.satellite_count = satellite_count;
    }

    pub fn instances(&self) -> &[BodyInstance] {
        &self.instances
    }

    pub fn planets(&self) -> &[BodyInstance] {
        &self.instances[..self.satellite_offset()]
    }

    pub fn satellites(&self) -> &[BodyInstance] {
        &self.instances[self.satellite_offset()..self.nebula_offset()]
    }

    pub fn nebulas(&self) -> &[BodyInstance] {
        &self.instances[self.nebula_offset()..]
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn planet_count(&self) -> u32 {
        self.planet_count
    }

    pub fn satellite_count(&self) -> u32 {
        self.satellite_count
    }

    pub fn nebula_count(&self) -> u32 {
        self.instance_count() - self.planet_count - self.satellite_count
    }

    fn satellite_offset(&self) -> usize {
        self.planet_count as usize
    }

    fn nebula_offset(&self) -> usize {
        (self.planet_count + self.satellite_count) as usize
    }

    /// Length of `as_floats`.
    pub fn float_count(&self) -> u32 {
        (self.instances.len() * BodyInstance::FLOATS) as u32
    }

    /// Flat float view of the instance data.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Raw pointer to instance data for shared-memory reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
