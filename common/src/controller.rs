//! Headless driver for the wizard.
//!
//! Owns a [`Wizard`] and a transport and runs every effect itself: requests
//! are awaited one after another and their completions fed back in; timers are
//! queued until the caller fires them. The browser component does the same
//! work with real timers and concurrent requests.

use std::collections::VecDeque;

use log::debug;

use crate::config::WizardConfig;
use crate::model::file::FileRole;
use crate::transport::{execute, WizardTransport};
use crate::wizard::{update, BannerId, Effect, Wizard, WizardEvent};

/// A timer the wizard asked for that has not fired yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingTimer {
    BannerTimeout { id: BannerId, after_ms: u32 },
    BannerRemoval { id: BannerId, after_ms: u32 },
}

impl PendingTimer {
    fn into_event(self) -> WizardEvent {
        match self {
            PendingTimer::BannerTimeout { id, .. } => WizardEvent::BannerTimedOut(id),
            PendingTimer::BannerRemoval { id, .. } => WizardEvent::BannerFaded(id),
        }
    }
}

pub struct WizardController<T> {
    wizard: Wizard,
    transport: T,
    timers: VecDeque<PendingTimer>,
    cleared_inputs: Vec<FileRole>,
}

impl<T: WizardTransport> WizardController<T> {
    pub fn new(config: WizardConfig, transport: T) -> Self {
        Self {
            wizard: Wizard::new(config),
            transport,
            timers: VecDeque::new(),
            cleared_inputs: Vec::new(),
        }
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Applies `event` and everything it causes, except timers.
    pub async fn dispatch(&mut self, event: WizardEvent) {
        let mut queue = VecDeque::from([event]);
        while let Some(event) = queue.pop_front() {
            for effect in update(&mut self.wizard, event) {
                match effect {
                    Effect::Send(command) => {
                        debug!("sending {} #{}", command.token().kind.name(), command.token().seq);
                        queue.push_back(execute(&self.transport, command).await);
                    }
                    Effect::ScheduleBannerTimeout { id, after_ms } => self
                        .timers
                        .push_back(PendingTimer::BannerTimeout { id, after_ms }),
                    Effect::ScheduleBannerRemoval { id, after_ms } => self
                        .timers
                        .push_back(PendingTimer::BannerRemoval { id, after_ms }),
                    Effect::ClearFileInput(role) => self.cleared_inputs.push(role),
                }
            }
        }
    }

    pub fn pending_timers(&self) -> impl Iterator<Item = &PendingTimer> {
        self.timers.iter()
    }

    /// Fires every queued timer, including the ones fired timers schedule.
    pub async fn run_timers(&mut self) {
        while let Some(timer) = self.timers.pop_front() {
            self.dispatch(timer.into_event()).await;
        }
    }

    /// File inputs the wizard asked to clear since the last call.
    pub fn take_cleared_inputs(&mut self) -> Vec<FileRole> {
        std::mem::take(&mut self.cleared_inputs)
    }
}
