/// Mock GraphicsDevice for unit tests (no GPU required)
///
/// Counts every gate attempt, format resolution, texture creation and
/// destruction, and can be scripted to fail the gate N times or to fail
/// texture creation at a given slot. This lets the bridge tests verify
/// the allocation protocol without a native graphics context.

#[cfg(test)]
use std::cell::Cell;
#[cfg(test)]
use std::num::NonZeroU32;

#[cfg(test)]
use crate::device::{GraphicsApi, GraphicsDevice, NativeTexture};
#[cfg(test)]
use crate::error::{Error, Result};
#[cfg(test)]
use crate::texture::PixelFormat;

#[cfg(test)]
pub struct MockDevice {
    /// Whether the gate has opened
    pub ready: bool,
    /// Remaining scripted gate failures before the gate opens
    pub gate_failures_remaining: u32,
    /// Total ensure_ready calls (no-ops included)
    pub gate_attempts: u32,
    /// Times the gate actually opened (extension-loading side effect)
    pub initializations: u32,
    /// resolve_format call count
    pub resolve_calls: Cell<u32>,
    /// Successful create_texture calls
    pub created: u32,
    /// destroy_texture calls
    pub destroyed: u32,
    /// Handles passed to destroy_texture, in order
    pub destroyed_handles: Vec<NativeTexture>,
    /// Fail create_texture once `created` reaches this count
    pub fail_create_at: Option<u32>,
    next_name: u32,
}

#[cfg(test)]
impl MockDevice {
    /// Device whose gate opens on the first attempt
    pub fn new() -> Self {
        Self {
            ready: false,
            gate_failures_remaining: 0,
            gate_attempts: 0,
            initializations: 0,
            resolve_calls: Cell::new(0),
            created: 0,
            destroyed: 0,
            destroyed_handles: Vec::new(),
            fail_create_at: None,
            next_name: 0,
        }
    }

    /// Device whose gate fails the first `failures` attempts
    pub fn failing_gate(failures: u32) -> Self {
        Self {
            gate_failures_remaining: failures,
            ..Self::new()
        }
    }

    /// Device that fails texture creation once `at` textures exist
    pub fn failing_create_at(at: u32) -> Self {
        Self {
            fail_create_at: Some(at),
            ..Self::new()
        }
    }

    /// Number of textures currently live (created minus destroyed)
    pub fn live(&self) -> u32 {
        self.created - self.destroyed
    }
}

#[cfg(test)]
impl GraphicsDevice for MockDevice {
    // Identity translation: the bridge never inspects the pair, it only
    // forwards it, so the abstract format works as its own native pair.
    type FormatPair = PixelFormat;

    fn api(&self) -> GraphicsApi {
        GraphicsApi::OpenGl
    }

    fn ensure_ready(&mut self) -> Result<()> {
        self.gate_attempts += 1;
        if self.ready {
            return Ok(());
        }
        if self.gate_failures_remaining > 0 {
            self.gate_failures_remaining -= 1;
            return Err(Error::RuntimeException(
                "mock gate: context not current".to_string(),
            ));
        }
        self.initializations += 1;
        self.ready = true;
        Ok(())
    }

    fn resolve_format(&self, format: PixelFormat) -> PixelFormat {
        self.resolve_calls.set(self.resolve_calls.get() + 1);
        format
    }

    fn create_texture(
        &mut self,
        _width: u32,
        _height: u32,
        _formats: PixelFormat,
    ) -> Result<NativeTexture> {
        if self.fail_create_at == Some(self.created) {
            return Err(Error::RuntimeException(
                "mock device: texture allocation failed".to_string(),
            ));
        }
        self.created += 1;
        self.next_name += 1;
        Ok(NativeTexture::OpenGl(
            NonZeroU32::new(self.next_name).unwrap(),
        ))
    }

    fn destroy_texture(&mut self, texture: NativeTexture) {
        self.destroyed += 1;
        self.destroyed_handles.push(texture);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mock_device_tests.rs"]
mod tests;
