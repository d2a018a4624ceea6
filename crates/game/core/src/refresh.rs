//! Names for the visual projections that depend on ledger state.

use bitflags::bitflags;

bitflags! {
    /// Which projections need re-rendering after a state change.
    ///
    /// Ledger mutations return or imply one of these sets; the host-facing
    /// projection layer decides what redrawing actually means.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct RefreshTargets: u8 {
        /// The inventory grid.
        const INVENTORY = 1 << 0;
        /// The quest log panel.
        const QUEST_LOG = 1 << 1;
        /// Friendship heart displays.
        const HEARTS = 1 << 2;
    }
}
