/// GraphicsDevice trait - native-API seam for texture allocation

use std::num::NonZeroU32;

use crate::error::Result;
use crate::texture::PixelFormat;

// ============================================================================
// Native handle types
// ============================================================================

/// Native graphics API tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphicsApi {
    /// Desktop OpenGL
    OpenGl,
}

/// Tagged native texture handle
///
/// One variant per supported native API; a new API is added as a new
/// variant, never as a raw integer cast. Handles are non-zero by
/// construction, so a value of this type always names a created texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeTexture {
    /// OpenGL texture name
    OpenGl(NonZeroU32),
}

impl NativeTexture {
    /// The native API this handle belongs to
    pub fn api(&self) -> GraphicsApi {
        match self {
            NativeTexture::OpenGl(_) => GraphicsApi::OpenGl,
        }
    }
}

// ============================================================================
// GraphicsDevice trait
// ============================================================================

/// Native graphics-API seam used by the texture bridge
///
/// Implemented by backend crates (e.g., `GlDevice` in the GL backend) and
/// by the mock device in unit tests. The trait is deliberately NOT
/// `Send + Sync`: the whole bridge has single-threaded graphics-context
/// affinity, and every method must be called from the thread that holds
/// the current native context.
pub trait GraphicsDevice {
    /// Native internal/upload format pair produced by `resolve_format`
    type FormatPair: Copy;

    /// The native API behind this device
    fn api(&self) -> GraphicsApi;

    /// Make the native API ready for texture calls
    ///
    /// Safe to call on every bridge entry point: once the device is ready
    /// this is an immediate no-op. A failed attempt leaves the device
    /// unready, and the next call retries the full initialization, so a
    /// transient failure (context not yet current) never wedges the
    /// device.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeException` if the native API cannot become ready.
    fn ensure_ready(&mut self) -> Result<()>;

    /// Translate an abstract pixel format to the native format pair
    ///
    /// Total over all formats: an enumerator the backend does not
    /// recognize resolves to the backend's 8-bit RGBA default pair.
    fn resolve_format(&self, format: PixelFormat) -> Self::FormatPair;

    /// Allocate storage for one 2D texture
    ///
    /// Storage is allocated but not populated; the application renders
    /// into the texture later through the native API directly. Mipmapping
    /// is disabled (base level only).
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels
    /// * `height` - Height in pixels
    /// * `formats` - Native format pair from `resolve_format`
    fn create_texture(
        &mut self,
        width: u32,
        height: u32,
        formats: Self::FormatPair,
    ) -> Result<NativeTexture>;

    /// Release one native texture previously created by this device
    fn destroy_texture(&mut self, texture: NativeTexture);
}
