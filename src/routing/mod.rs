//! Conversation routing
//!
//! Maps inbound events to handler actions through an explicit ordered table
//! of (predicate, transition) pairs, evaluated top-down per event; the first
//! matching predicate wins. Routing is a pure function of the event and the
//! prior conversation state, so every priority decision is testable without
//! a live bot.

use crate::texts;

/// A transport-independent view of one inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// The /start command.
    StartCommand,
    /// The /help command.
    HelpCommand,
    /// A plain text message.
    Text {
        body: String,
        /// The message replies to the bug-report prompt.
        replies_to_report_prompt: bool,
    },
    /// A photo attachment.
    Photo,
    /// A document attachment.
    Document,
    /// Any other content type (stickers, voice, ...).
    Other,
}

/// Per-conversation state. Conversations start out idle; the only
/// transition cycle is Idle -> AwaitingBugReport -> Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatState {
    #[default]
    Idle,
    AwaitingBugReport,
}

/// What the handlers layer should do in response to one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ShowStart,
    ShowCommandList,
    ShowGreeting,
    ShowScanReady,
    PromptBugReport,
    RelayBugReport,
    DecodePhoto,
    DecodeDocument,
    ShowHelpHint,
}

type Predicate = fn(&InboundEvent, ChatState) -> bool;
type Transition = fn(ChatState) -> (Action, ChatState);

fn is_text(event: &InboundEvent, label: &str) -> bool {
    matches!(event, InboundEvent::Text { body, .. } if body == label)
}

/// The dispatch table. Fixed-text rules are listed before the
/// awaiting-report capture on purpose: a user who is mid-report and types
/// exactly a button label gets that button's handler, not the relay.
const RULES: &[(Predicate, Transition)] = &[
    (
        |event, _| matches!(event, InboundEvent::StartCommand),
        |state| (Action::ShowStart, state),
    ),
    (
        |event, _| {
            matches!(event, InboundEvent::HelpCommand) || is_text(event, texts::BUTTON_HELP)
        },
        |state| (Action::ShowCommandList, state),
    ),
    (
        |event, _| is_text(event, texts::BUTTON_GREETING),
        |state| (Action::ShowGreeting, state),
    ),
    (
        |event, _| is_text(event, texts::BUTTON_SCAN),
        |state| (Action::ShowScanReady, state),
    ),
    (
        |event, _| is_text(event, texts::BUTTON_CONTACT),
        |_| (Action::PromptBugReport, ChatState::AwaitingBugReport),
    ),
    (
        |event, state| {
            state == ChatState::AwaitingBugReport && matches!(event, InboundEvent::Text { .. })
        },
        |_| (Action::RelayBugReport, ChatState::Idle),
    ),
    (
        |event, _| matches!(event, InboundEvent::Photo),
        |state| (Action::DecodePhoto, state),
    ),
    (
        |event, _| matches!(event, InboundEvent::Document),
        |state| (Action::DecodeDocument, state),
    ),
    (
        |event, _| {
            matches!(
                event,
                InboundEvent::Text {
                    replies_to_report_prompt: true,
                    ..
                }
            )
        },
        |state| (Action::RelayBugReport, state),
    ),
];

/// Route one event through the dispatch table.
///
/// Returns the action to execute and the state the conversation moves to.
/// Events no rule claims fall through to the /help hint with the state
/// unchanged.
pub fn route(event: &InboundEvent, state: ChatState) -> (Action, ChatState) {
    RULES
        .iter()
        .find(|(applies, _)| applies(event, state))
        .map(|(_, transition)| transition(state))
        .unwrap_or((Action::ShowHelpHint, state))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(body: &str) -> InboundEvent {
        InboundEvent::Text {
            body: body.to_string(),
            replies_to_report_prompt: false,
        }
    }

    fn reply_to_prompt(body: &str) -> InboundEvent {
        InboundEvent::Text {
            body: body.to_string(),
            replies_to_report_prompt: true,
        }
    }

    #[test]
    fn test_commands_show_capabilities() {
        assert_eq!(
            route(&InboundEvent::StartCommand, ChatState::Idle),
            (Action::ShowStart, ChatState::Idle)
        );
        assert_eq!(
            route(&InboundEvent::HelpCommand, ChatState::Idle),
            (Action::ShowCommandList, ChatState::Idle)
        );
    }

    #[test]
    fn test_button_labels_dispatch_their_handlers() {
        assert_eq!(
            route(&text("Привет"), ChatState::Idle),
            (Action::ShowGreeting, ChatState::Idle)
        );
        assert_eq!(
            route(&text("Сканировать"), ChatState::Idle),
            (Action::ShowScanReady, ChatState::Idle)
        );
        assert_eq!(
            route(&text("Помощь"), ChatState::Idle),
            (Action::ShowCommandList, ChatState::Idle)
        );
    }

    #[test]
    fn test_contact_developer_arms_report_capture() {
        assert_eq!(
            route(&text("Связь с разработчиком"), ChatState::Idle),
            (Action::PromptBugReport, ChatState::AwaitingBugReport)
        );
    }

    #[test]
    fn test_report_capture_relays_once_and_resets() {
        let (action, state) = route(&text("всё сломалось"), ChatState::AwaitingBugReport);
        assert_eq!(action, Action::RelayBugReport);
        assert_eq!(state, ChatState::Idle);

        // The follow-up message is back on the idle path.
        let (action, state) = route(&text("всё сломалось"), state);
        assert_eq!(action, Action::ShowHelpHint);
        assert_eq!(state, ChatState::Idle);
    }

    #[test]
    fn test_free_text_without_trigger_gets_help_hint() {
        assert_eq!(
            route(&text("что ты умеешь?"), ChatState::Idle),
            (Action::ShowHelpHint, ChatState::Idle)
        );
    }

    #[test]
    fn test_fixed_text_wins_over_report_capture() {
        // Button labels are matched before the awaiting-report capture,
        // and the conversation stays armed.
        assert_eq!(
            route(&text("Помощь"), ChatState::AwaitingBugReport),
            (Action::ShowCommandList, ChatState::AwaitingBugReport)
        );
        assert_eq!(
            route(&text("Привет"), ChatState::AwaitingBugReport),
            (Action::ShowGreeting, ChatState::AwaitingBugReport)
        );
    }

    #[test]
    fn test_commands_do_not_disarm_report_capture() {
        assert_eq!(
            route(&InboundEvent::StartCommand, ChatState::AwaitingBugReport),
            (Action::ShowStart, ChatState::AwaitingBugReport)
        );
    }

    #[test]
    fn test_attachments_decode_in_any_state() {
        assert_eq!(
            route(&InboundEvent::Photo, ChatState::Idle),
            (Action::DecodePhoto, ChatState::Idle)
        );
        assert_eq!(
            route(&InboundEvent::Document, ChatState::Idle),
            (Action::DecodeDocument, ChatState::Idle)
        );
        // A photo does not consume the pending report.
        assert_eq!(
            route(&InboundEvent::Photo, ChatState::AwaitingBugReport),
            (Action::DecodePhoto, ChatState::AwaitingBugReport)
        );
    }

    #[test]
    fn test_reply_to_prompt_relays_without_state() {
        assert_eq!(
            route(&reply_to_prompt("нашёл баг"), ChatState::Idle),
            (Action::RelayBugReport, ChatState::Idle)
        );
    }

    #[test]
    fn test_unknown_content_falls_through_to_hint() {
        assert_eq!(
            route(&InboundEvent::Other, ChatState::Idle),
            (Action::ShowHelpHint, ChatState::Idle)
        );
        assert_eq!(
            route(&InboundEvent::Other, ChatState::AwaitingBugReport),
            (Action::ShowHelpHint, ChatState::AwaitingBugReport)
        );
    }
}
