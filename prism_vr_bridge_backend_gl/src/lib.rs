/*!
# Prism VR Bridge - OpenGL backend

OpenGL implementation of the `GraphicsDevice` seam from `prism_vr_bridge`,
built on `glow`.

Provides:

- **GlDevice**: owns the lazily acquired GL context (the readiness gate)
  and allocates/releases 2D texture storage
- **Format translation**: abstract pixel formats to GL internal/upload
  format pairs, defaulting unrecognized formats to 8-bit RGBA
- **Debug sink**: forwards `KHR_debug` driver messages into the bridge
  log (debug builds)

The caller owns the windowing and GL context setup; the context must be
current on the calling thread before any bridge entry point runs.
*/

// Module declarations
mod gl_debug;
pub mod gl_device;
pub mod gl_format;

// Re-export the device and translation entry points
pub use gl_device::{ContextProvider, GlDevice, GlFormatPair};
pub use gl_format::{internal_format_of, upload_format_of};
