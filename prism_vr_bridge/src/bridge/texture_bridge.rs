/// TextureBridge - swap-chain and mirror-texture manager
///
/// Owns every native texture it allocates until the matching destroy
/// call. All operations are synchronous and must run on the thread that
/// holds the current native graphics context.

use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use crate::bridge::{
    MirrorTexture, MirrorTextureKey, Session, SessionKey, SwapChain, SwapChainKey,
};
use crate::device::{GraphicsDevice, NativeTexture};
use crate::error::Result;
use crate::texture::{MirrorTextureDescriptor, SwapChainDescriptor, TextureType};
use crate::{bridge_bail, bridge_debug, bridge_trace};

const SOURCE: &str = "prism::TextureBridge";

/// Swap-chain and mirror-texture manager over one native device
///
/// The bridge is generic over the [`GraphicsDevice`] seam; production
/// code instantiates it with a native backend (e.g. the GL device), unit
/// tests with the mock device.
///
/// # Example
///
/// ```no_run
/// use prism_vr_bridge::prism::bridge::TextureBridge;
/// use prism_vr_bridge::prism::texture::{
///     PixelFormat, SwapChainDescriptor, TextureBindFlags, TextureMiscFlags, TextureType,
/// };
/// # fn demo<D: prism_vr_bridge::prism::device::GraphicsDevice>(device: D)
/// #     -> prism_vr_bridge::prism::Result<()> {
/// let mut bridge = TextureBridge::new(device);
/// let session = bridge.register_session();
///
/// let chain = bridge.create_swap_chain(session, &SwapChainDescriptor {
///     texture_type: TextureType::Texture2D,
///     width: 1344,
///     height: 1600,
///     format: PixelFormat::R8G8B8A8_UNORM_SRGB,
///     mip_levels: 1,
///     length: 3,
///     misc_flags: TextureMiscFlags::empty(),
///     bind_flags: TextureBindFlags::RENDER_TARGET,
/// })?;
///
/// // The compositor pipeline queries the current buffer each frame.
/// let texture = bridge.swap_chain_buffer(session, chain, None)?;
/// # let _ = texture;
/// # Ok(())
/// # }
/// ```
pub struct TextureBridge<D: GraphicsDevice> {
    device: D,
    sessions: SlotMap<SessionKey, Session>,
    swap_chains: SlotMap<SwapChainKey, SwapChain>,
    mirror_textures: SlotMap<MirrorTextureKey, MirrorTexture>,
    /// Single owning registry for the one-mirror-per-session rule
    session_mirrors: FxHashMap<SessionKey, MirrorTextureKey>,
}

impl<D: GraphicsDevice> TextureBridge<D> {
    /// Create a bridge over the given native device
    pub fn new(device: D) -> Self {
        Self {
            device,
            sessions: SlotMap::with_key(),
            swap_chains: SlotMap::with_key(),
            mirror_textures: SlotMap::with_key(),
            session_mirrors: FxHashMap::default(),
        }
    }

    /// The owned native device
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Mutable access to the owned native device
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    // ===== SESSION REGISTRY =====

    /// Register an externally owned session with the bridge
    ///
    /// The returned key is the session identity every other operation
    /// validates against.
    pub fn register_session(&mut self) -> SessionKey {
        let session = self.sessions.insert(Session);
        bridge_debug!(SOURCE, "registered session {:?}", session);
        session
    }

    /// Forget a session
    ///
    /// Drops the session's mirror-registry entry as well. Any swap chains
    /// or mirror textures created under the session must still be
    /// destroyed explicitly; unregistering does not release native
    /// resources.
    pub fn unregister_session(&mut self, session: SessionKey) {
        self.sessions.remove(session);
        self.session_mirrors.remove(&session);
        bridge_debug!(SOURCE, "unregistered session {:?}", session);
    }

    fn ensure_session(&self, session: SessionKey) -> Result<()> {
        if !self.sessions.contains_key(session) {
            bridge_bail!(SOURCE, InvalidSession, "unknown session {:?}", session);
        }
        Ok(())
    }

    // ===== SWAP CHAINS =====

    /// Create a texture swap chain
    ///
    /// Translates the descriptor format once, then allocates one native
    /// 2D texture per ring slot (storage only, no pixel data, base mip
    /// level only).
    ///
    /// # Errors
    ///
    /// - `RuntimeException` if the device gate cannot open, or if a
    ///   native allocation fails. A failure partway through the ring
    ///   leaves the previously created textures live; there is no
    ///   rollback.
    /// - `InvalidSession` for an unknown session key.
    /// - `InvalidParameter` for a non-2D texture type or a zero-length
    ///   ring.
    pub fn create_swap_chain(
        &mut self,
        session: SessionKey,
        desc: &SwapChainDescriptor,
    ) -> Result<SwapChainKey> {
        self.device.ensure_ready()?;
        self.ensure_session(session)?;

        if desc.texture_type != TextureType::Texture2D {
            bridge_bail!(
                SOURCE,
                InvalidParameter,
                "unsupported texture type {:?}, only Texture2D swap chains are supported",
                desc.texture_type
            );
        }
        if desc.length == 0 {
            bridge_bail!(SOURCE, InvalidParameter, "swap chain length must be non-zero");
        }

        let formats = self.device.resolve_format(desc.format);

        let mut textures = Vec::with_capacity(desc.length);
        for _ in 0..desc.length {
            // A failure here surfaces immediately; earlier slots stay
            // live until the caller tears the context down.
            let texture = self.device.create_texture(desc.width, desc.height, formats)?;
            textures.push(texture);
        }

        let api = self.device.api();
        let key = self
            .swap_chains
            .insert(SwapChain::new(api, desc.clone(), textures));
        bridge_debug!(
            SOURCE,
            "created swap chain {:?}: {}x{} {:?}, {} buffers",
            key,
            desc.width,
            desc.height,
            desc.format,
            desc.length
        );
        Ok(key)
    }

    /// Destroy a swap chain, releasing exactly `length` native textures
    ///
    /// The key is invalid after this call; keys are generational, so a
    /// stale key is detected rather than aliasing a newer chain.
    pub fn destroy_swap_chain(&mut self, session: SessionKey, chain: SwapChainKey) -> Result<()> {
        self.ensure_session(session)?;

        let Some(mut record) = self.swap_chains.remove(chain) else {
            bridge_bail!(SOURCE, InvalidParameter, "unknown swap chain handle {:?}", chain);
        };
        for texture in record.textures.drain(..) {
            self.device.destroy_texture(texture);
        }
        bridge_debug!(SOURCE, "destroyed swap chain {:?}", chain);
        Ok(())
    }

    /// Number of buffers in a swap chain
    pub fn swap_chain_length(&self, session: SessionKey, chain: SwapChainKey) -> Result<usize> {
        Ok(self.swap_chain(session, chain)?.length())
    }

    /// The descriptor a swap chain was created from
    pub fn swap_chain_desc(
        &self,
        session: SessionKey,
        chain: SwapChainKey,
    ) -> Result<&SwapChainDescriptor> {
        Ok(self.swap_chain(session, chain)?.desc())
    }

    /// The ring slot the compositor pipeline is currently pointing at
    pub fn swap_chain_current_index(
        &self,
        session: SessionKey,
        chain: SwapChainKey,
    ) -> Result<usize> {
        Ok(self.swap_chain(session, chain)?.current_index())
    }

    /// Move the ring cursor (compositor-pipeline side of the contract)
    ///
    /// The bridge itself never advances the cursor; the external
    /// compositor pipeline calls this after each submission.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `index` is not a valid ring slot, keeping
    /// the cursor invariant intact.
    pub fn set_swap_chain_current_index(
        &mut self,
        session: SessionKey,
        chain: SwapChainKey,
        index: usize,
    ) -> Result<()> {
        self.ensure_session(session)?;

        let Some(record) = self.swap_chains.get_mut(chain) else {
            bridge_bail!(SOURCE, InvalidParameter, "unknown swap chain handle {:?}", chain);
        };
        if index >= record.textures.len() {
            bridge_bail!(
                SOURCE,
                InvalidParameter,
                "cursor index {} out of range for swap chain of length {}",
                index,
                record.textures.len()
            );
        }
        record.current_index = index;
        bridge_trace!(SOURCE, "swap chain {:?} cursor -> {}", chain, index);
        Ok(())
    }

    /// Native texture at a ring slot
    ///
    /// `index` of `None` substitutes the chain's current index. The
    /// compositor pipeline uses this to fetch the texture to submit each
    /// frame.
    ///
    /// # Errors
    ///
    /// `InvalidSession` / `InvalidParameter` for unknown keys, and
    /// `InvalidParameter` for an explicit out-of-range index.
    pub fn swap_chain_buffer(
        &self,
        session: SessionKey,
        chain: SwapChainKey,
        index: Option<usize>,
    ) -> Result<NativeTexture> {
        self.ensure_session(session)?;

        let Some(record) = self.swap_chains.get(chain) else {
            bridge_bail!(SOURCE, InvalidParameter, "unknown swap chain handle {:?}", chain);
        };
        let slot = index.unwrap_or(record.current_index);
        let Some(texture) = record.textures.get(slot).copied() else {
            bridge_bail!(
                SOURCE,
                InvalidParameter,
                "buffer index {} out of range for swap chain of length {}",
                slot,
                record.textures.len()
            );
        };
        Ok(texture)
    }

    /// The swap-chain record behind a handle
    pub fn swap_chain(&self, session: SessionKey, chain: SwapChainKey) -> Result<&SwapChain> {
        self.ensure_session(session)?;
        let Some(record) = self.swap_chains.get(chain) else {
            bridge_bail!(SOURCE, InvalidParameter, "unknown swap chain handle {:?}", chain);
        };
        Ok(record)
    }

    // ===== MIRROR TEXTURES =====

    /// Create the session's mirror texture
    ///
    /// Allocates exactly one native texture, the same way as a single
    /// swap-chain slot.
    ///
    /// # Errors
    ///
    /// - `RuntimeException` if the device gate cannot open, or if the
    ///   session already holds a mirror texture (at most one mirror
    ///   texture may exist per session; the registry entry must be
    ///   cleared with [`clear_session_mirror`](Self::clear_session_mirror)
    ///   before a new one can be created).
    /// - `InvalidSession` for an unknown session key.
    pub fn create_mirror_texture(
        &mut self,
        session: SessionKey,
        desc: &MirrorTextureDescriptor,
    ) -> Result<MirrorTextureKey> {
        self.device.ensure_ready()?;
        self.ensure_session(session)?;

        if self.session_mirrors.contains_key(&session) {
            bridge_bail!(
                SOURCE,
                RuntimeException,
                "session {:?} already holds a mirror texture",
                session
            );
        }

        let formats = self.device.resolve_format(desc.format);
        let texture = self.device.create_texture(desc.width, desc.height, formats)?;

        let api = self.device.api();
        let key = self
            .mirror_textures
            .insert(MirrorTexture::new(api, desc.clone(), texture));
        self.session_mirrors.insert(session, key);
        bridge_debug!(
            SOURCE,
            "created mirror texture {:?} for session {:?}: {}x{} {:?}",
            key,
            session,
            desc.width,
            desc.height,
            desc.format
        );
        Ok(key)
    }

    /// Destroy a mirror texture, releasing its one native texture
    ///
    /// The session's registry entry is NOT cleared: recreating a mirror
    /// texture for the session still fails until
    /// [`clear_session_mirror`](Self::clear_session_mirror) runs. That
    /// split keeps resource release and session bookkeeping as two
    /// distinct responsibilities.
    pub fn destroy_mirror_texture(
        &mut self,
        session: SessionKey,
        mirror: MirrorTextureKey,
    ) -> Result<()> {
        self.ensure_session(session)?;

        let Some(record) = self.mirror_textures.remove(mirror) else {
            bridge_bail!(SOURCE, InvalidParameter, "unknown mirror texture handle {:?}", mirror);
        };
        self.device.destroy_texture(record.texture);
        bridge_debug!(SOURCE, "destroyed mirror texture {:?}", mirror);
        Ok(())
    }

    /// Clear the session's mirror-texture registry entry
    ///
    /// Session-management step that re-arms mirror creation after the
    /// previous mirror texture was destroyed.
    pub fn clear_session_mirror(&mut self, session: SessionKey) -> Result<()> {
        self.ensure_session(session)?;
        self.session_mirrors.remove(&session);
        bridge_trace!(SOURCE, "cleared mirror slot for session {:?}", session);
        Ok(())
    }

    /// The mirror-texture record behind a handle
    pub fn mirror_texture(
        &self,
        session: SessionKey,
        mirror: MirrorTextureKey,
    ) -> Result<&MirrorTexture> {
        self.ensure_session(session)?;
        let Some(record) = self.mirror_textures.get(mirror) else {
            bridge_bail!(SOURCE, InvalidParameter, "unknown mirror texture handle {:?}", mirror);
        };
        Ok(record)
    }

    /// Native texture behind a mirror handle
    pub fn mirror_texture_buffer(
        &self,
        session: SessionKey,
        mirror: MirrorTextureKey,
    ) -> Result<NativeTexture> {
        Ok(self.mirror_texture(session, mirror)?.texture)
    }

    /// Copy the most recently submitted frame into the mirror texture
    ///
    /// The frame blit is not implemented yet: this validates its
    /// arguments and performs no native work, so on-screen previews stay
    /// blank rather than stale.
    pub fn render_mirror_to_back_buffer(
        &mut self,
        session: SessionKey,
        mirror: MirrorTextureKey,
    ) -> Result<()> {
        self.ensure_session(session)?;

        if !self.mirror_textures.contains_key(mirror) {
            bridge_bail!(SOURCE, InvalidParameter, "unknown mirror texture handle {:?}", mirror);
        }
        // TODO: blit the most recently submitted frame into the mirror
        // texture once the compositor exposes the source surface.
        bridge_trace!(SOURCE, "mirror blit requested for {:?} (not implemented)", mirror);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "texture_bridge_tests.rs"]
mod tests;
