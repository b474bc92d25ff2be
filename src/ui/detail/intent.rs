use crate::model::Item;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    /// Show the dialog pre-filled with the item's current values.
    Open { item: Item },
    Close,
    /// Typed character into the focused field.
    Input(char),
    Backspace,
    /// Move focus to the other field; the field left behind counts as touched.
    NextField,
    /// Save attempted: both fields count as touched.
    Submit,
}

impl Intent for DetailIntent {}
