use crate::motion::Transition;
use crate::placement::ViewportPosition;

pub const HERO_POP_STIFFNESS: f64 = 200.0;
pub const HERO_POP_DAMPING: f64 = 15.0;

/// What the card body shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardContent {
    Question,
    Celebration,
}

impl CardContent {
    pub fn badge(self) -> &'static str {
        match self {
            CardContent::Question => "Special Invite",
            CardContent::Celebration => "Celebration Time!",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            CardContent::Question => "Will you be my Valentine?",
            CardContent::Celebration => "I Love You Bebi!",
        }
    }

    pub fn subtitle(self) -> Option<&'static str> {
        match self {
            CardContent::Question => Some("Say yes\u{2026} because \u{2018}no\u{2019} isn\u{2019}t allowed \u{1F609}"),
            CardContent::Celebration => None,
        }
    }
}

/// Where the negative control is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoControl {
    Inline,
    Floating(ViewportPosition),
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AcceptOutcome {
    /// First acceptance; the caller starts the celebration.
    Started,
    AlreadyAccepted,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardState {
    accepted: bool,
    evaded: bool,
    no_position: ViewportPosition,
}

impl CardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accepted(&self) -> bool {
        self.accepted
    }

    pub fn evaded(&self) -> bool {
        self.evaded
    }

    pub fn no_position(&self) -> ViewportPosition {
        self.no_position
    }

    /// One-way switch to the celebration. Repeated calls keep the state and
    /// report `AlreadyAccepted` so the effect is never started twice.
    pub fn accept(&mut self) -> AcceptOutcome {
        if self.accepted {
            return AcceptOutcome::AlreadyAccepted;
        }
        self.accepted = true;
        AcceptOutcome::Started
    }

    /// Moves the negative control. Ignored after acceptance since the control
    /// is no longer mounted.
    pub fn evade(&mut self, position: ViewportPosition) -> bool {
        if self.accepted {
            return false;
        }
        self.evaded = true;
        self.no_position = position;
        true
    }

    pub fn content(&self) -> CardContent {
        if self.accepted {
            CardContent::Celebration
        } else {
            CardContent::Question
        }
    }

    pub fn no_control(&self) -> NoControl {
        match (self.accepted, self.evaded) {
            (true, _) => NoControl::Hidden,
            (false, false) => NoControl::Inline,
            (false, true) => NoControl::Floating(self.no_position),
        }
    }
}

/// Entrance of the accepted-state hero image.
pub fn hero_pop_transition() -> Transition {
    Transition::spring(HERO_POP_STIFFNESS, HERO_POP_DAMPING)
}
