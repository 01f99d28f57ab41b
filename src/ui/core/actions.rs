use crate::store::TodoId;

/// Which area receives key events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    List,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Input
    InputChanged(String),
    SubmitInput,

    // Todo operations
    ToggleTodo(TodoId),
    RemoveTodo(TodoId),

    // Focus
    Focus(Focus),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    CycleIconTheme,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    Help,
    Logs,
    RemoveConfirmation { id: TodoId, text: String },
}
