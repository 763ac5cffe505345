//! The wizard as a pure state machine.
//!
//! `update` takes the current [`Wizard`] and one [`WizardEvent`], mutates the
//! wizard, and returns the [`Effect`]s the caller has to carry out: requests
//! to send, timers to start, inputs to clear. Nothing in here touches the
//! network or a page, so every transition can be tested directly.

pub mod banner;
pub mod effect;
pub mod event;
pub mod sequence;
pub mod state;
pub mod step;
mod update;

pub use banner::{Banner, BannerId};
pub use effect::{Command, Effect};
pub use event::WizardEvent;
pub use sequence::{RequestKind, RequestSequencer, RequestToken};
pub use state::{UploadSlot, Wizard, WizardState, WizardUi};
pub use step::Step;
pub use update::update;
