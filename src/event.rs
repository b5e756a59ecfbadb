use crate::domain::AddressLookup;

/// Events emitted by background lookup tasks.
#[derive(Debug)]
pub enum LookupEvent {
    /// A lookup finished, successfully or not. Errors arrive pre-rendered
    /// as display strings since the UI only ever shows them.
    LookupFinished(Result<AddressLookup, String>),
}

/// Application actions triggered by user input or lookup events.
#[derive(Debug)]
pub enum Action {
    Quit,
    InputChar(char),
    InputBackspace,
    ClearInput,
    SubmitLookup,
    FocusInput,
    FocusResults,
    SelectNext,
    SelectPrev,
    OpenSelected,
    CopySelectedId,
    UpdateLookup(Result<AddressLookup, String>),
    ShowMessage(String),
}
