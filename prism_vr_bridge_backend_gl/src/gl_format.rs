/// OpenGL translation of the abstract pixel formats
///
/// Two pure, total functions deciding how texture storage is laid out on
/// the GPU (internal format) and how upload-time data is interpreted
/// (upload format). An enumerator with no entry in the table falls back
/// to the 8-bit RGBA pair, so texture creation stays non-fatal on
/// unrecognized formats.

use prism_vr_bridge::prism::texture::PixelFormat;

/// GL internal (storage) format for an abstract pixel format
pub fn internal_format_of(format: PixelFormat) -> u32 {
    match format {
        PixelFormat::UNKNOWN => glow::RGBA8,
        PixelFormat::B5G6R5_UNORM => glow::RGB565,
        PixelFormat::B5G5R5A1_UNORM => glow::RGB5_A1,
        PixelFormat::B4G4R4A4_UNORM => glow::RGBA4,
        PixelFormat::R8G8B8A8_UNORM => glow::RGBA8,
        PixelFormat::R8G8B8A8_UNORM_SRGB => glow::SRGB8_ALPHA8,
        PixelFormat::B8G8R8A8_UNORM => glow::RGBA8,
        PixelFormat::B8G8R8A8_UNORM_SRGB => glow::SRGB8_ALPHA8,
        PixelFormat::B8G8R8X8_UNORM => glow::RGBA8,
        PixelFormat::B8G8R8X8_UNORM_SRGB => glow::SRGB8_ALPHA8,
        PixelFormat::R16G16B16A16_FLOAT => glow::RGBA16F,
        PixelFormat::D16_UNORM => glow::DEPTH_COMPONENT16,
        PixelFormat::D24_UNORM_S8_UINT => glow::DEPTH24_STENCIL8,
        PixelFormat::D32_FLOAT => glow::DEPTH_COMPONENT32F,
        PixelFormat::D32_FLOAT_S8X24_UINT => glow::DEPTH32F_STENCIL8,
        _ => glow::RGBA8,
    }
}

/// GL upload (client data) format for an abstract pixel format
pub fn upload_format_of(format: PixelFormat) -> u32 {
    match format {
        PixelFormat::UNKNOWN => glow::RGBA,
        PixelFormat::B5G6R5_UNORM => glow::BGR,
        PixelFormat::B5G5R5A1_UNORM => glow::BGRA,
        PixelFormat::B4G4R4A4_UNORM => glow::BGRA,
        PixelFormat::R8G8B8A8_UNORM => glow::RGBA,
        PixelFormat::R8G8B8A8_UNORM_SRGB => glow::RGBA,
        PixelFormat::B8G8R8A8_UNORM => glow::BGRA,
        PixelFormat::B8G8R8A8_UNORM_SRGB => glow::BGRA,
        PixelFormat::B8G8R8X8_UNORM => glow::BGRA,
        PixelFormat::B8G8R8X8_UNORM_SRGB => glow::BGRA,
        PixelFormat::R16G16B16A16_FLOAT => glow::RGBA,
        PixelFormat::D16_UNORM => glow::DEPTH_COMPONENT,
        PixelFormat::D24_UNORM_S8_UINT => glow::DEPTH_STENCIL,
        PixelFormat::D32_FLOAT => glow::DEPTH_COMPONENT,
        PixelFormat::D32_FLOAT_S8X24_UINT => glow::DEPTH_STENCIL,
        _ => glow::RGBA,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "gl_format_tests.rs"]
mod tests;
