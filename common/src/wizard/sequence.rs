//! Per-operation request sequence tokens.
//!
//! Requests are never cancelled, so an older response can arrive after a newer
//! one (quickly changing the preview row is the usual way). Each request gets
//! a token from the sequencer and its completion is only applied while that
//! token is still the latest one issued for its kind.

use serde::{Deserialize, Serialize};

/// The kinds of request the wizard sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestKind {
    SpreadsheetUpload,
    TemplateUpload,
    Preview,
    Generate,
}

impl RequestKind {
    const COUNT: usize = 4;

    fn index(self) -> usize {
        match self {
            RequestKind::SpreadsheetUpload => 0,
            RequestKind::TemplateUpload => 1,
            RequestKind::Preview => 2,
            RequestKind::Generate => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RequestKind::SpreadsheetUpload => "upload_excel",
            RequestKind::TemplateUpload => "upload_template",
            RequestKind::Preview => "preview",
            RequestKind::Generate => "generate",
        }
    }

    /// Banner text used when the service gives no reason.
    pub fn fallback_message(self) -> &'static str {
        match self {
            RequestKind::SpreadsheetUpload => "Error uploading Excel file",
            RequestKind::TemplateUpload => "Error uploading template file",
            RequestKind::Preview => "Error generating preview",
            RequestKind::Generate => "Error generating certificates",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken {
    pub kind: RequestKind,
    pub seq: u64,
}

#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: [u64; RequestKind::COUNT],
}

impl RequestSequencer {
    pub fn issue(&mut self, kind: RequestKind) -> RequestToken {
        let slot = &mut self.latest[kind.index()];
        *slot += 1;
        RequestToken { kind, seq: *slot }
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        self.latest[token.kind.index()] == token.seq
    }

    /// Makes every outstanding token stale without issuing new ones.
    pub fn invalidate_all(&mut self) {
        for slot in &mut self.latest {
            *slot += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_newest_token_is_current() {
        let mut sequencer = RequestSequencer::default();
        let first = sequencer.issue(RequestKind::Preview);
        let second = sequencer.issue(RequestKind::Preview);

        assert!(!sequencer.is_latest(first));
        assert!(sequencer.is_latest(second));
    }

    #[test]
    fn kinds_are_counted_independently() {
        let mut sequencer = RequestSequencer::default();
        let upload = sequencer.issue(RequestKind::SpreadsheetUpload);
        sequencer.issue(RequestKind::TemplateUpload);
        let template = sequencer.issue(RequestKind::TemplateUpload);

        assert!(sequencer.is_latest(upload));
        assert_eq!(template.seq, 2);
        assert_eq!(sequencer.issue(RequestKind::Generate).seq, 1);
    }

    #[test]
    fn invalidation_outdates_every_kind() {
        let mut sequencer = RequestSequencer::default();
        let preview = sequencer.issue(RequestKind::Preview);
        let generate = sequencer.issue(RequestKind::Generate);
        sequencer.invalidate_all();

        assert!(!sequencer.is_latest(preview));
        assert!(!sequencer.is_latest(generate));
    }
}
