use embassy_time::Duration;

/// Periodic timer capability
///
/// While armed, the integration calls [`EffectPlayer::tick`] once per
/// period. Re-entrant calls must not happen; each frame completes before
/// the next one fires.
///
/// [`EffectPlayer::tick`]: super::EffectPlayer::tick
pub trait PeriodicTimer {
    /// Start firing every `period`, replacing any previous period
    fn arm(&mut self, period: Duration);

    /// Stop firing. Disarming an idle timer is a no-op.
    fn disarm(&mut self);
}

/// Timer that never fires, for players driven by a paired player
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTimer;

impl PeriodicTimer for NoTimer {
    fn arm(&mut self, _period: Duration) {}

    fn disarm(&mut self) {}
}
