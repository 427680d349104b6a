use crate::error::PlayerError;

/// Identifies a scheduled hide timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// Surfaces fullscreen can be requested on, in fallback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenTarget {
    /// The player container, so the overlay stays visible.
    Container,
    /// The container through the vendor-prefixed API.
    PrefixedContainer,
    /// The bare video surface.
    Surface,
}

impl FullscreenTarget {
    pub const FALLBACK_CHAIN: [FullscreenTarget; 3] = [
        FullscreenTarget::Container,
        FullscreenTarget::PrefixedContainer,
        FullscreenTarget::Surface,
    ];
}

/// Services the surrounding page provides.
pub trait Host {
    /// Arm a one-shot timer. When it fires the host dispatches
    /// `ControlEvent::HideTimerFired` with the returned handle.
    fn schedule_hide(&mut self, delay_ms: u32) -> TimerHandle;
    fn cancel_hide(&mut self, handle: TimerHandle);

    fn fullscreen_active(&self) -> bool;
    fn request_fullscreen(&mut self, target: FullscreenTarget) -> Result<(), PlayerError>;
    fn exit_fullscreen(&mut self);

    /// Blocking acknowledgement shown to the user.
    fn notify(&mut self, message: &str);
}
