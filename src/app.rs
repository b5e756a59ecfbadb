//! Application state and action dispatch for the lazyord TUI.

use arboard::Clipboard;
use color_eyre::Result;

use crate::constants::{EMPTY_ADDRESS_MSG, LOADING_MSG, NO_INSCRIPTIONS_MSG};
use crate::domain::{AddressLookup, BalanceSummary, InscriptionCard};
use crate::event::Action;
use crate::network::LookupManager;

// ============================================================================
// Focus and Status
// ============================================================================

/// Which part of the UI receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The address input bar; printable keys edit the query.
    Input,
    /// The results list; keys navigate and act on cards.
    Results,
}

/// Category of the current status line, drives its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Info,
    Success,
    Error,
}

/// One user-visible status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub message: String,
    pub kind: StatusKind,
}

impl StatusLine {
    #[must_use]
    pub fn loading(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Loading,
        }
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Info,
        }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Success,
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Error,
        }
    }
}

// ============================================================================
// Application State
// ============================================================================

/// Top-level application state.
///
/// One query's worth of results lives here at a time; a new submission
/// clears everything from the previous one before any fetch starts.
pub struct App {
    /// Raw address text being edited.
    pub input: String,
    /// Which area receives key input.
    pub focus: Focus,
    /// Current status line, if any.
    pub status: Option<StatusLine>,
    /// Projected cards from the last successful lookup.
    pub cards: Vec<InscriptionCard>,
    /// Balance from the last successful lookup.
    pub balance: Option<BalanceSummary>,
    /// Index of the selected card, when the list is non-empty.
    pub selected: Option<usize>,
    /// Whether a lookup is currently in flight.
    pub loading: bool,
    /// Set to exit the main loop.
    pub exit: bool,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: String::new(),
            focus: Focus::Input,
            status: None,
            cards: Vec::new(),
            balance: None,
            selected: None,
            loading: false,
            exit: false,
        }
    }

    /// The card currently under the selection cursor.
    #[must_use]
    pub fn selected_card(&self) -> Option<&InscriptionCard> {
        self.cards.get(self.selected?)
    }

    /// Apply one action to the state.
    pub fn update(&mut self, action: Action, manager: &LookupManager) -> Result<()> {
        match action {
            Action::Quit => self.exit = true,
            Action::InputChar(c) => self.input.push(c),
            Action::InputBackspace => {
                self.input.pop();
            }
            Action::ClearInput => self.input.clear(),
            Action::SubmitLookup => self.submit_lookup(manager),
            Action::FocusInput => self.focus = Focus::Input,
            Action::FocusResults => {
                if !self.cards.is_empty() {
                    self.focus = Focus::Results;
                    if self.selected.is_none() {
                        self.selected = Some(0);
                    }
                }
            }
            Action::SelectNext => self.select_next(),
            Action::SelectPrev => self.select_prev(),
            Action::OpenSelected => self.open_selected(),
            Action::CopySelectedId => self.copy_selected_id(),
            Action::UpdateLookup(result) => self.apply_lookup(result),
            Action::ShowMessage(message) => self.status = Some(StatusLine::error(message)),
        }
        Ok(())
    }

    /// Validate the input and kick off a lookup.
    fn submit_lookup(&mut self, manager: &LookupManager) {
        let address = self.input.trim().to_string();

        if address.is_empty() {
            self.status = Some(StatusLine::error(EMPTY_ADDRESS_MSG));
            return;
        }

        // Clear the previous query's results before anything is fetched, so
        // a failure never leaves a stale mix on screen.
        self.cards.clear();
        self.balance = None;
        self.selected = None;
        self.loading = true;
        self.status = Some(StatusLine::loading(LOADING_MSG));

        manager.lookup(address);
    }

    /// Fold a finished lookup back into the state.
    fn apply_lookup(&mut self, result: Result<AddressLookup, String>) {
        self.loading = false;

        match result {
            Ok(lookup) => {
                self.balance = Some(lookup.balance);
                self.cards = lookup.cards;

                if self.cards.is_empty() {
                    self.selected = None;
                    self.status = Some(StatusLine::info(NO_INSCRIPTIONS_MSG));
                } else {
                    self.selected = Some(0);
                    self.focus = Focus::Results;
                    let count = self.cards.len();
                    let plural = if count == 1 { "" } else { "s" };
                    self.status = Some(StatusLine::success(format!(
                        "Found {count} inscription{plural}."
                    )));
                }
            }
            Err(message) => {
                // Neither dataset renders on failure, even if one fetch
                // succeeded before the other failed.
                self.cards.clear();
                self.balance = None;
                self.selected = None;
                self.status = Some(StatusLine::error(format!(
                    "Failed to fetch inscriptions. {message}"
                )));
            }
        }
    }

    fn select_next(&mut self) {
        if let Some(selected) = self.selected {
            if selected + 1 < self.cards.len() {
                self.selected = Some(selected + 1);
            }
        }
    }

    fn select_prev(&mut self) {
        if let Some(selected) = self.selected {
            self.selected = Some(selected.saturating_sub(1));
        }
    }

    /// Open the selected card's detail link in the system browser.
    fn open_selected(&mut self) {
        let Some(card) = self.selected_card() else {
            return;
        };

        match card.detail_link() {
            Some(link) => match open::that(&link) {
                Ok(()) => self.status = Some(StatusLine::info(format!("Opened {link}"))),
                Err(e) => {
                    self.status = Some(StatusLine::error(format!("Failed to open browser: {e}")));
                }
            },
            None => {
                self.status = Some(StatusLine::info("Selected inscription has no link."));
            }
        }
    }

    /// Copy the selected card's inscription id to the clipboard.
    fn copy_selected_id(&mut self) {
        let Some(card) = self.selected_card() else {
            return;
        };

        let Some(id) = card.id.clone() else {
            self.status = Some(StatusLine::info("Selected inscription has no id."));
            return;
        };

        match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(id)) {
            Ok(()) => {
                self.status = Some(StatusLine::info("Copied inscription id to clipboard."));
            }
            Err(e) => {
                self.status = Some(StatusLine::error(format!("Clipboard error: {e}")));
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
