//! Unit tests for the GL context gate
//!
//! A real GL context needs a window system, so these tests script the
//! context provider instead: the failure and retry paths never issue a
//! native call.

#[cfg(test)]
use std::cell::Cell;
#[cfg(test)]
use std::rc::Rc;

#[cfg(test)]
use prism_vr_bridge::prism::device::GraphicsDevice;
#[cfg(test)]
use prism_vr_bridge::prism::texture::PixelFormat;
#[cfg(test)]
use prism_vr_bridge::prism::Error;

#[cfg(test)]
use crate::gl_device::{GlDevice, GlFormatPair};

#[cfg(test)]
fn always_failing_device() -> (GlDevice, Rc<Cell<u32>>) {
    let attempts = Rc::new(Cell::new(0));
    let counter = attempts.clone();
    let device = GlDevice::new(Box::new(move || {
        counter.set(counter.get() + 1);
        Err("no current context".to_string())
    }));
    (device, attempts)
}

#[test]
fn test_gate_failure_is_runtime_exception() {
    let (mut device, _attempts) = always_failing_device();

    let result = device.ensure_ready();

    assert!(matches!(result, Err(Error::RuntimeException(_))));
    assert!(!device.is_ready());
    assert!(device.context().is_none());
}

#[test]
fn test_gate_retries_full_acquisition_on_every_call() {
    let (mut device, attempts) = always_failing_device();

    for _ in 0..3 {
        assert!(device.ensure_ready().is_err());
    }

    // No sticky failure: each call reached the provider again.
    assert_eq!(attempts.get(), 3);
}

#[test]
fn test_create_texture_requires_open_gate() {
    let (mut device, _attempts) = always_failing_device();
    let formats = device.resolve_format(PixelFormat::R8G8B8A8_UNORM);

    let result = device.create_texture(64, 64, formats);

    assert!(matches!(result, Err(Error::RuntimeException(_))));
}

#[test]
fn test_resolve_format_works_before_the_gate_opens() {
    // Translation is pure and independent of context state.
    let (device, _attempts) = always_failing_device();

    let pair = device.resolve_format(PixelFormat::D24_UNORM_S8_UINT);

    assert_eq!(
        pair,
        GlFormatPair {
            internal_format: glow::DEPTH24_STENCIL8,
            upload_format: glow::DEPTH_STENCIL,
        }
    );
}
