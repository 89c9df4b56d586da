/// Swap-chain and mirror-texture descriptors

use bitflags::bitflags;

use crate::texture::PixelFormat;

/// Texture topology requested by the application
///
/// Only `Texture2D` is supported by the bridge; cube maps exist in the
/// runtime contract but the translation layer rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureType {
    /// Plain 2D texture
    Texture2D,
    /// Cube map (unsupported by the bridge)
    TextureCube,
}

bitflags! {
    /// Miscellaneous texture creation flags from the runtime contract
    ///
    /// Carried through for API fidelity; the GL backend allocates the
    /// same storage regardless of these bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TextureMiscFlags: u32 {
        /// Typeless storage was requested (D3D concept, no GL effect)
        const TYPELESS = 1 << 0;
        /// The application may ask for mip generation later
        const ALLOW_GENERATE_MIPS = 1 << 1;
        /// Protected-content surface
        const PROTECTED_CONTENT = 1 << 2;
    }
}

bitflags! {
    /// Bind-capability flags from the runtime contract
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TextureBindFlags: u32 {
        /// Texture can be bound as a render target
        const RENDER_TARGET = 1 << 0;
        /// Texture can be bound for unordered access
        const UNORDERED_ACCESS = 1 << 1;
        /// Texture can be bound as a depth-stencil attachment
        const DEPTH_STENCIL = 1 << 2;
    }
}

/// Descriptor for creating a texture swap chain
///
/// Caller-supplied and read-only to the bridge; the owning swap chain
/// retains a copy for later queries. `mip_levels` is carried but only the
/// base level is ever allocated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapChainDescriptor {
    /// Texture topology (only `Texture2D` is accepted)
    pub texture_type: TextureType,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Abstract pixel format
    pub format: PixelFormat,
    /// Requested mip count (base level only is allocated)
    pub mip_levels: u32,
    /// Number of buffers in the ring
    pub length: usize,
    /// Miscellaneous creation flags
    pub misc_flags: TextureMiscFlags,
    /// Bind-capability flags
    pub bind_flags: TextureBindFlags,
}

/// Descriptor for creating a mirror texture
///
/// A mirror texture is a single buffer used to preview the compositor
/// output on a conventional display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorTextureDescriptor {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Abstract pixel format
    pub format: PixelFormat,
}
