use crate::model::file::{FileRole, SelectedFile};
use crate::requests::{GenerateRequest, PreviewRequest};

use super::banner::BannerId;
use super::sequence::RequestToken;

/// Work the caller must do after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Send a request; its completion comes back as a `WizardEvent`.
    Send(Command),
    /// Deliver `BannerTimedOut(id)` after `after_ms`.
    ScheduleBannerTimeout { id: BannerId, after_ms: u32 },
    /// Deliver `BannerFaded(id)` after `after_ms`.
    ScheduleBannerRemoval { id: BannerId, after_ms: u32 },
    /// Reset the file picker for `role` to "nothing selected".
    ClearFileInput(FileRole),
}

/// A request to the document service.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Upload {
        token: RequestToken,
        role: FileRole,
        file: SelectedFile,
    },
    Preview {
        token: RequestToken,
        request: PreviewRequest,
    },
    Generate {
        token: RequestToken,
        request: GenerateRequest,
    },
}

impl Command {
    pub fn token(&self) -> RequestToken {
        match self {
            Command::Upload { token, .. }
            | Command::Preview { token, .. }
            | Command::Generate { token, .. } => *token,
        }
    }
}
