//! Reply keyboard construction

use teloxide::types::{KeyboardButton, KeyboardMarkup};

use crate::texts;

/// The fixed four-button reply keyboard attached to conversational
/// replies.
pub fn main_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        vec![
            KeyboardButton::new(texts::BUTTON_GREETING),
            KeyboardButton::new(texts::BUTTON_SCAN),
        ],
        vec![
            KeyboardButton::new(texts::BUTTON_CONTACT),
            KeyboardButton::new(texts::BUTTON_HELP),
        ],
    ])
    .resize_keyboard()
}
