/// GlDevice - OpenGL implementation of the GraphicsDevice seam
///
/// The device owns the lazily acquired `glow::Context` (the readiness
/// gate) and allocates texture storage on it. Context acquisition is
/// supplied by the caller as a closure, so the device itself never
/// touches windowing and tests can script the gate.

use glow::HasContext;

use prism_vr_bridge::prism::device::{GraphicsApi, GraphicsDevice, NativeTexture};
use prism_vr_bridge::prism::texture::PixelFormat;
use prism_vr_bridge::prism::{Error, Result};
use prism_vr_bridge::{bridge_debug, bridge_warn};

use crate::gl_format::{internal_format_of, upload_format_of};

const SOURCE: &str = "prism::GlDevice";

/// GL internal/upload format pair for texture storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlFormatPair {
    /// How pixel data is stored on the GPU
    pub internal_format: u32,
    /// How upload-time data is interpreted
    pub upload_format: u32,
}

/// Context acquisition callback
///
/// Called by the gate until it first succeeds. Returns an error while the
/// native context cannot be acquired yet (e.g., not current on this
/// thread); the gate retries on the next entry point.
pub type ContextProvider = Box<dyn FnMut() -> std::result::Result<glow::Context, String>>;

/// OpenGL device behind the bridge
///
/// Single-threaded: must live on the thread that owns the current GL
/// context, like every other part of the bridge.
pub struct GlDevice {
    gl: Option<glow::Context>,
    provider: ContextProvider,
}

impl GlDevice {
    /// Device over a context provider
    pub fn new(provider: ContextProvider) -> Self {
        Self { gl: None, provider }
    }

    /// Device over a GL symbol loader
    ///
    /// Wraps the loader in a provider that builds the `glow` context on
    /// first use. The loader runs only once the gate opens.
    ///
    /// # Arguments
    ///
    /// * `loader` - Resolves a GL symbol name to a function pointer
    ///   (e.g., `wglGetProcAddress`/`glXGetProcAddress` behind the
    ///   platform's context library)
    pub fn from_loader<F>(mut loader: F) -> Self
    where
        F: FnMut(&str) -> *const std::ffi::c_void + 'static,
    {
        Self::new(Box::new(move || {
            Ok(unsafe { glow::Context::from_loader_function(|symbol| loader(symbol)) })
        }))
    }

    /// Whether the gate has opened
    pub fn is_ready(&self) -> bool {
        self.gl.is_some()
    }

    /// The acquired GL context, if the gate has opened
    pub fn context(&self) -> Option<&glow::Context> {
        self.gl.as_ref()
    }
}

impl GraphicsDevice for GlDevice {
    type FormatPair = GlFormatPair;

    fn api(&self) -> GraphicsApi {
        GraphicsApi::OpenGl
    }

    fn ensure_ready(&mut self) -> Result<()> {
        if self.gl.is_some() {
            return Ok(());
        }

        let mut gl = match (self.provider)() {
            Ok(gl) => gl,
            Err(message) => {
                // The context stays unset, so the next entry point
                // retries the full acquisition.
                bridge_warn!(SOURCE, "context acquisition failed: {}", message);
                return Err(Error::RuntimeException(format!(
                    "OpenGL context acquisition failed: {}",
                    message
                )));
            }
        };

        if cfg!(debug_assertions) {
            unsafe {
                gl.debug_message_callback(crate::gl_debug::forward_debug_message);
            }
        }

        // Swallow any stale error left behind by symbol loading.
        unsafe {
            gl.get_error();
        }

        self.gl = Some(gl);
        bridge_debug!(SOURCE, "OpenGL context ready");
        Ok(())
    }

    fn resolve_format(&self, format: PixelFormat) -> GlFormatPair {
        GlFormatPair {
            internal_format: internal_format_of(format),
            upload_format: upload_format_of(format),
        }
    }

    fn create_texture(
        &mut self,
        width: u32,
        height: u32,
        formats: GlFormatPair,
    ) -> Result<NativeTexture> {
        let Some(gl) = self.gl.as_ref() else {
            return Err(Error::RuntimeException(
                "OpenGL context is not ready".to_string(),
            ));
        };

        let texture = unsafe {
            let texture = gl
                .create_texture()
                .map_err(|message| Error::RuntimeException(format!(
                    "texture creation failed: {}",
                    message
                )))?;
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            // Base level only; the ring never carries mip chains.
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_BASE_LEVEL, 0);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAX_LEVEL, 0);
            // Storage only, no pixel data: the application renders into
            // the texture later through GL directly.
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                formats.internal_format as i32,
                width as i32,
                height as i32,
                0,
                formats.upload_format,
                glow::UNSIGNED_BYTE,
                None,
            );
            gl.bind_texture(glow::TEXTURE_2D, None);
            texture
        };

        Ok(NativeTexture::OpenGl(texture.0))
    }

    fn destroy_texture(&mut self, texture: NativeTexture) {
        let Some(gl) = self.gl.as_ref() else {
            bridge_warn!(
                SOURCE,
                "destroy_texture called before the context gate opened; leaking {:?}",
                texture
            );
            return;
        };
        match texture {
            NativeTexture::OpenGl(name) => unsafe {
                gl.delete_texture(glow::NativeTexture(name));
            },
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "gl_device_tests.rs"]
mod tests;
