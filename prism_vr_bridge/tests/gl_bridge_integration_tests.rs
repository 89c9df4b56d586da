//! Integration tests for the bridge over the real GL backend
//!
//! No GPU in CI: the context provider is scripted, so these tests cover
//! the full bridge-to-backend path up to the point where a native
//! context would be required, plus pure translation through the backend.

use std::cell::Cell;
use std::rc::Rc;

use prism_vr_bridge::prism::bridge::TextureBridge;
use prism_vr_bridge::prism::device::GraphicsDevice;
use prism_vr_bridge::prism::texture::{
    PixelFormat, SwapChainDescriptor, TextureBindFlags, TextureMiscFlags, TextureType,
};
use prism_vr_bridge::prism::Error;
use prism_vr_bridge_backend_gl::{internal_format_of, upload_format_of, GlDevice, GlFormatPair};

fn chain_desc() -> SwapChainDescriptor {
    SwapChainDescriptor {
        texture_type: TextureType::Texture2D,
        width: 1024,
        height: 1024,
        format: PixelFormat::B8G8R8A8_UNORM_SRGB,
        mip_levels: 1,
        length: 2,
        misc_flags: TextureMiscFlags::empty(),
        bind_flags: TextureBindFlags::RENDER_TARGET,
    }
}

fn bridge_without_context() -> (TextureBridge<GlDevice>, Rc<Cell<u32>>) {
    let attempts = Rc::new(Cell::new(0));
    let counter = attempts.clone();
    let device = GlDevice::new(Box::new(move || {
        counter.set(counter.get() + 1);
        Err("context not current on this thread".to_string())
    }));
    (TextureBridge::new(device), attempts)
}

#[test]
fn test_swap_chain_creation_surfaces_gate_failure() {
    let (mut bridge, attempts) = bridge_without_context();
    let session = bridge.register_session();

    let result = bridge.create_swap_chain(session, &chain_desc());

    assert!(matches!(result, Err(Error::RuntimeException(_))));
    assert_eq!(attempts.get(), 1);
    assert!(!bridge.device().is_ready());
}

#[test]
fn test_every_create_attempt_retries_the_gate() {
    let (mut bridge, attempts) = bridge_without_context();
    let session = bridge.register_session();

    for _ in 0..3 {
        assert!(bridge.create_swap_chain(session, &chain_desc()).is_err());
    }

    assert_eq!(attempts.get(), 3);
}

#[test]
fn test_backend_translation_reaches_the_bridge_seam() {
    let (bridge, _attempts) = bridge_without_context();

    // resolve_format is the same path create_swap_chain takes once the
    // gate opens.
    let pair = bridge
        .device()
        .resolve_format(PixelFormat::R16G16B16A16_FLOAT);

    assert_eq!(
        pair,
        GlFormatPair {
            internal_format: internal_format_of(PixelFormat::R16G16B16A16_FLOAT),
            upload_format: upload_format_of(PixelFormat::R16G16B16A16_FLOAT),
        }
    );
}
