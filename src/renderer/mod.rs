//! Rendering seam
//!
//! The simulation emits one [`SpriteInstance`] per visible entity. Whatever
//! owns the window and GPU implements [`Renderer`]; [`InstanceBuffer`] is the
//! simple batching implementation used headless and in tests.

pub mod vertex;

pub use vertex::SpriteInstance;

/// Accepts draw calls from the simulation
pub trait Renderer {
    fn draw(&mut self, instance: SpriteInstance);
}

/// Collects a frame's instances for a single upload
#[derive(Debug, Default)]
pub struct InstanceBuffer {
    instances: Vec<SpriteInstance>,
}

impl InstanceBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous frame's instances
    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn instances(&self) -> &[SpriteInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Raw bytes ready to copy into an instance buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Renderer for InstanceBuffer {
    fn draw(&mut self, instance: SpriteInstance) {
        self.instances.push(instance);
    }
}
