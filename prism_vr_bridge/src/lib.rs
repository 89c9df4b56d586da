/*!
# Prism VR Bridge

Core traits and types for the Prism VR texture bridge.

This crate maps the texture swap chains of a fixed-ABI VR runtime contract
onto native graphics-API texture objects owned by a different compositor
runtime. It provides the graphics-API-agnostic half of that translation:
descriptors, the session/mirror registries, and the swap-chain manager,
all written against the `GraphicsDevice` trait. Native backends (OpenGL,
etc.) implement the trait in their own crates.

## Architecture

- **GraphicsDevice**: seam trait for the native API (readiness gate,
  format resolution, texture storage allocation/release)
- **TextureBridge**: owns swap chains and mirror textures, hands out
  opaque handles, enforces the one-mirror-per-session rule
- **SwapChain / MirrorTexture**: owning records behind those handles

The whole layer assumes single-threaded graphics-context affinity: every
call must come from the thread holding the current native context.
*/

// Internal modules
mod error;
pub mod log;
pub mod bridge;
pub mod device;
pub mod texture;

// Main prism namespace module
pub mod prism {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{
            DefaultLogger, LogEntry, LogSeverity, Logger, reset_logger, set_logger,
        };
        // Note: bridge_* macros are exported at the crate root
    }

    // Device seam (native-API abstraction)
    pub mod device {
        pub use crate::device::*;
    }

    // Descriptors and pixel formats
    pub mod texture {
        pub use crate::texture::*;
    }

    // Swap-chain / mirror-texture managers
    pub mod bridge {
        pub use crate::bridge::*;
    }
}
