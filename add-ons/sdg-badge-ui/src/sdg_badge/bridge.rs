//! badge_bridge: async channel between host code and the badge widget.
//!
//! Uses the protocol defined in sdg-core (`BadgeMessage`). Host threads use
//! `try_send` (non-blocking); the widget drains the receiver once per frame
//! in `SdgBadge::ui`, so attribute changes apply synchronously relative to
//! render scheduling.

use sdg_core::BadgeMessage;
use tokio::sync::mpsc;

/// Re-export so UI code can use the same type name; protocol lives in sdg-core.
pub use sdg_core::BadgeMessage as SdgBadgeMessage;

/// Sender half of the host -> badge attribute channel.
pub type BadgeBridgeSender = mpsc::Sender<BadgeMessage>;

/// Receiver half (hand to `SdgBadge::with_bridge`).
pub type BadgeBridgeReceiver = mpsc::Receiver<BadgeMessage>;

/// Creates a bounded channel for badge attribute messages.
/// Give the receiver to `SdgBadge::with_bridge(receiver)`; keep the sender
/// wherever attribute changes originate.
pub fn badge_channel(capacity: usize) -> (BadgeBridgeSender, BadgeBridgeReceiver) {
    mpsc::channel(capacity)
}
