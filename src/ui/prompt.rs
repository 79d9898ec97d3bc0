// SPDX-License-Identifier: MPL-2.0
//! Prompt input describing what to locate in the current image.
//!
//! Submitting is a no-op while no image is selected or the input is blank.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Row, Text};
use iced::{alignment::Vertical, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Trimmed, non-empty prompt.
    Submitted(String),
}

#[derive(Debug, Clone, Default)]
pub struct State {
    input: String,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn can_submit(&self, has_image: bool) -> bool {
        has_image && !self.input.trim().is_empty()
    }

    /// Clears the input when a new image is chosen.
    pub fn clear(&mut self) {
        self.input.clear();
    }

    pub fn update(&mut self, message: Message, has_image: bool) -> Event {
        match message {
            Message::InputChanged(value) => {
                self.input = value;
                Event::None
            }
            Message::Submitted => {
                if !self.can_submit(has_image) {
                    return Event::None;
                }
                let prompt = self.input.trim().to_string();
                self.input.clear();
                Event::Submitted(prompt)
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n, has_image: bool) -> Element<'a, Message> {
        let enabled = self.can_submit(has_image);

        let input = text_input(&i18n.tr("prompt-placeholder"), &self.input)
            .on_input(Message::InputChanged)
            .on_submit_maybe(enabled.then_some(Message::Submitted))
            .size(typography::BODY)
            .padding(spacing::XS)
            .width(Length::Fill);

        let submit = button(Text::new(i18n.tr("prompt-submit")).size(typography::BODY))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary)
            .on_press_maybe(enabled.then_some(Message::Submitted));

        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(input)
            .push(submit)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> State {
        let mut state = State::new();
        let _ = state.update(Message::InputChanged(text.to_string()), true);
        state
    }

    #[test]
    fn submit_emits_trimmed_prompt_and_clears_input() {
        let mut state = typed("  red mug  ");

        let event = state.update(Message::Submitted, true);

        assert_eq!(event, Event::Submitted("red mug".to_string()));
        assert_eq!(state.input(), "");
    }

    #[test]
    fn blank_prompt_is_not_submitted() {
        let mut state = typed("   ");

        assert_eq!(state.update(Message::Submitted, true), Event::None);
        assert_eq!(state.input(), "   ");
    }

    #[test]
    fn submit_without_image_is_ignored() {
        let mut state = typed("dog");

        assert!(!state.can_submit(false));
        assert_eq!(state.update(Message::Submitted, false), Event::None);
        assert_eq!(state.input(), "dog");
    }

    #[test]
    fn clear_empties_input() {
        let mut state = typed("cat");
        state.clear();
        assert_eq!(state.input(), "");
    }

    #[test]
    fn view_renders_with_and_without_image() {
        let i18n = I18n::default();
        let state = typed("lamp");

        let _with_image = state.view(&i18n, true);
        let _without_image = state.view(&i18n, false);
        let empty_state = State::new();
        let _empty = empty_state.view(&i18n, true);
    }
}
