use super::step::Step;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BannerId(pub u64);

/// A dismissible error notice shown at the top of one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id: BannerId,
    pub step: Step,
    pub message: String,
    /// Set once the auto-dismiss timeout fired; the banner is detached after the fade.
    pub fading: bool,
}
