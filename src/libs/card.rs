//! Display state of a single task in the list.
//!
//! ```text
//!               Tap                 View
//!  Collapsed ─────────▶ Expanded ─────────▶ Viewing
//!      ▲    ◀─────────     │ Edit              │ Edit / Tap
//!      │        Tap        ▼                   ▼
//!      └─── Saved/Cancel ─ Editing ◀───────────┘
//! ```
//!
//! `Save` asks for a store update and keeps the card in `Editing`; the caller
//! feeds `Saved` once the update went through, so a rejected edit stays open.
//! `Delete` asks the confirmation boundary and leaves the state alone.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    #[default]
    Collapsed,
    Expanded,
    Viewing,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    Tap,
    View,
    Edit,
    Delete,
    Save,
    /// The update requested by `Save` succeeded.
    Saved,
    Cancel,
}

/// Controller work requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    /// Persist the edited draft through `TaskList::update`.
    Update,
    /// Ask the user, then `TaskList::delete_one` if they agree.
    ConfirmDelete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Card {
    pub state: CardState,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.state != CardState::Collapsed
    }

    /// Applies `event` and returns the controller work it triggers, if any.
    /// Events that do not apply in the current state are ignored.
    pub fn handle(&mut self, event: CardEvent) -> Option<CardAction> {
        use CardEvent::*;
        use CardState::*;

        let (next, action) = match (self.state, event) {
            (Collapsed, Tap) => (Expanded, None),
            (Expanded, Tap) | (Viewing, Tap) => (Collapsed, None),
            (Expanded, View) => (Viewing, None),
            (Expanded, Edit) | (Viewing, Edit) => (Editing, None),
            (Expanded, Delete) | (Viewing, Delete) => (self.state, Some(CardAction::ConfirmDelete)),
            (Editing, Save) => (Editing, Some(CardAction::Update)),
            (Editing, Saved) => (Collapsed, None),
            (Editing, Cancel) => (Collapsed, None),
            (state, _) => (state, None),
        };
        self.state = next;
        action
    }
}
