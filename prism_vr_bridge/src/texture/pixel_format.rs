/// Abstract pixel formats of the consuming runtime contract

/// Pixel format of a swap-chain or mirror texture, as declared by the
/// consuming application.
///
/// These are the abstract enumerators of the fixed-ABI runtime contract;
/// each native backend translates them to its own internal/upload format
/// pair. The enum is `non_exhaustive` so that backends must carry a
/// default arm: an enumerator a backend does not recognize translates to
/// its 8-bit RGBA pair rather than failing texture creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
#[non_exhaustive]
pub enum PixelFormat {
    /// Format left unspecified by the application
    UNKNOWN,

    // 16-bit packed color formats
    B5G6R5_UNORM,
    B5G5R5A1_UNORM,
    B4G4R4A4_UNORM,

    // 8-bit color formats, with and without sRGB encoding
    R8G8B8A8_UNORM,
    R8G8B8A8_UNORM_SRGB,
    B8G8R8A8_UNORM,
    B8G8R8A8_UNORM_SRGB,
    B8G8R8X8_UNORM,
    B8G8R8X8_UNORM_SRGB,

    // Floating-point color
    R16G16B16A16_FLOAT,

    // Depth and depth-stencil formats
    D16_UNORM,
    D24_UNORM_S8_UINT,
    D32_FLOAT,
    D32_FLOAT_S8X24_UINT,
}

impl PixelFormat {
    /// All format enumerators known to this version of the contract
    ///
    /// Backends use this in their translation-table tests to prove the
    /// mapping is total.
    pub const ALL: [PixelFormat; 15] = [
        PixelFormat::UNKNOWN,
        PixelFormat::B5G6R5_UNORM,
        PixelFormat::B5G5R5A1_UNORM,
        PixelFormat::B4G4R4A4_UNORM,
        PixelFormat::R8G8B8A8_UNORM,
        PixelFormat::R8G8B8A8_UNORM_SRGB,
        PixelFormat::B8G8R8A8_UNORM,
        PixelFormat::B8G8R8A8_UNORM_SRGB,
        PixelFormat::B8G8R8X8_UNORM,
        PixelFormat::B8G8R8X8_UNORM_SRGB,
        PixelFormat::R16G16B16A16_FLOAT,
        PixelFormat::D16_UNORM,
        PixelFormat::D24_UNORM_S8_UINT,
        PixelFormat::D32_FLOAT,
        PixelFormat::D32_FLOAT_S8X24_UINT,
    ];
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "pixel_format_tests.rs"]
mod tests;
