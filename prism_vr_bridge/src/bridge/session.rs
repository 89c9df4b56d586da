/// Session identity tracking

use slotmap::new_key_type;

new_key_type! {
    /// Stable key naming a registered compositor session.
    ///
    /// Keys are generational: once a session is unregistered its key can
    /// never alias a later session, so stale keys are always detected.
    pub struct SessionKey;
}

/// Marker record for a registered session
///
/// The session object itself (compositor state, frame timing, submission
/// queues) is owned externally; the bridge tracks only session identity,
/// and keeps the session's mirror-texture slot in its own registry keyed
/// by [`SessionKey`].
#[derive(Debug, Default)]
pub struct Session;
