/// The five wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    #[default]
    Intake = 1,
    Mapping = 2,
    Preview = 3,
    Generation = 4,
    Completion = 5,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Intake,
        Step::Mapping,
        Step::Preview,
        Step::Generation,
        Step::Completion,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(number: u8) -> Option<Step> {
        Step::ALL.into_iter().find(|s| s.number() == number)
    }

    pub fn next(self) -> Option<Step> {
        Step::from_number(self.number() + 1)
    }

    pub fn previous(self) -> Option<Step> {
        self.number().checked_sub(1).and_then(Step::from_number)
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Intake => "Upload Files",
            Step::Mapping => "Map Fields",
            Step::Preview => "Preview",
            Step::Generation => "Generate",
            Step::Completion => "Download",
        }
    }
}
