/// Mirror-texture record - single-buffer preview surface

use slotmap::new_key_type;

use crate::device::{GraphicsApi, NativeTexture};
use crate::texture::MirrorTextureDescriptor;

new_key_type! {
    /// Opaque handle to a mirror texture owned by the bridge.
    pub struct MirrorTextureKey;
}

/// A single texture used to preview the compositor output on a
/// conventional display. At most one mirror texture exists per session;
/// the bridge enforces that through its session registry.
pub struct MirrorTexture {
    /// Native API the texture was allocated on
    pub(crate) api: GraphicsApi,
    /// Originating descriptor, retained for later queries
    pub(crate) desc: MirrorTextureDescriptor,
    /// The one native texture
    pub(crate) texture: NativeTexture,
}

impl MirrorTexture {
    pub(crate) fn new(
        api: GraphicsApi,
        desc: MirrorTextureDescriptor,
        texture: NativeTexture,
    ) -> Self {
        Self { api, desc, texture }
    }

    /// Native API the texture was allocated on
    pub fn api(&self) -> GraphicsApi {
        self.api
    }

    /// The descriptor the mirror texture was created from
    pub fn desc(&self) -> &MirrorTextureDescriptor {
        &self.desc
    }
}
