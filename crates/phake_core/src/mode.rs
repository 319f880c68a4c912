use std::fmt;

/// Operating mode selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Educational,
    Prank,
}

const EDUCATIONAL_LOADING: &[&str] = &[
    "SCANNING TARGET...",
    "PARSING STRUCTURE...",
    "DETECTING TECHNIQUE...",
    "BUILDING REPORT...",
];

const PRANK_LOADING: &[&str] = &[
    "CRAFTING CHAOS...",
    "MAXIMUM SKETCHINESS...",
    "ADDING RED FLAGS...",
    "ALMOST EVIL ENOUGH...",
];

impl Mode {
    /// Wire name used in the request payload.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Educational => "educational",
            Mode::Prank => "prank",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Mode::Educational => Mode::Prank,
            Mode::Prank => Mode::Educational,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Mode::Educational => {
                "Analyze any URL to learn how phishing links are crafted - see the technique, understand the trick."
            }
            Mode::Prank => {
                "Generate a hilariously suspicious fake link to send to your friends. Harmless chaos."
            }
        }
    }

    /// Label of the submit control.
    pub fn action_label(self) -> &'static str {
        match self {
            Mode::Educational => "ANALYZE",
            Mode::Prank => "GENERATE",
        }
    }

    /// Rotating status lines shown while a request is in flight.
    pub fn loading_messages(self) -> &'static [&'static str] {
        match self {
            Mode::Educational => EDUCATIONAL_LOADING,
            Mode::Prank => PRANK_LOADING,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Holds the mode that parameterizes the next submission.
///
/// Only explicit user actions change it; a submission reads it once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeContext {
    current: Mode,
}

impl ModeContext {
    pub fn new(mode: Mode) -> Self {
        Self { current: mode }
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.current = mode;
    }

    pub fn mode(&self) -> Mode {
        self.current
    }
}
