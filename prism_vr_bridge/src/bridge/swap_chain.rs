/// Swap-chain record - the texture ring behind one opaque handle

use slotmap::new_key_type;

use crate::device::{GraphicsApi, NativeTexture};
use crate::texture::SwapChainDescriptor;

new_key_type! {
    /// Opaque handle to a swap chain owned by the bridge.
    pub struct SwapChainKey;
}

/// Ordered, fixed-length ring of native textures an application cycles
/// through across frames.
///
/// Invariants: the ring holds exactly `desc.length` valid native handles
/// from creation until destruction, and `current_index` is always a valid
/// slot. The bridge reads `current_index` but never advances it; the
/// external compositor pipeline owns the cursor.
pub struct SwapChain {
    /// Native API the ring was allocated on
    pub(crate) api: GraphicsApi,
    /// Originating descriptor, retained for later queries
    pub(crate) desc: SwapChainDescriptor,
    /// Native texture per slot
    pub(crate) textures: Vec<NativeTexture>,
    /// Cursor into the ring, advanced by the compositor pipeline
    pub(crate) current_index: usize,
}

impl SwapChain {
    pub(crate) fn new(
        api: GraphicsApi,
        desc: SwapChainDescriptor,
        textures: Vec<NativeTexture>,
    ) -> Self {
        debug_assert_eq!(textures.len(), desc.length);
        Self {
            api,
            desc,
            textures,
            current_index: 0,
        }
    }

    /// Native API the ring was allocated on
    pub fn api(&self) -> GraphicsApi {
        self.api
    }

    /// The descriptor the chain was created from
    pub fn desc(&self) -> &SwapChainDescriptor {
        &self.desc
    }

    /// Number of buffers in the ring
    pub fn length(&self) -> usize {
        self.textures.len()
    }

    /// Slot the compositor pipeline is currently pointing at
    pub fn current_index(&self) -> usize {
        self.current_index
    }
}
