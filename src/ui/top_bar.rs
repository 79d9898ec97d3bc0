// SPDX-License-Identifier: MPL-2.0
//! Top bar with the application title, the upload button and the theme toggle.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

/// Contextual data needed to render the top bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    /// The upload dialog is open; the button is disabled meanwhile.
    pub upload_pending: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    UploadPressed,
    ThemeTogglePressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    UploadRequested,
    ThemeToggled,
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::UploadPressed => Event::UploadRequested,
        Message::ThemeTogglePressed => Event::ThemeToggled,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("top-bar-title")).size(typography::TITLE_MD);

    let theme_label = Text::new(ctx.i18n.tr(ctx.theme_mode.label_key())).size(typography::BODY);
    let theme_toggle = button(theme_label)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::subtle)
        .on_press(Message::ThemeTogglePressed);

    let upload_label = Text::new(ctx.i18n.tr("top-bar-upload-button")).size(typography::BODY);
    let upload = button(upload_label)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press_maybe((!ctx.upload_pending).then_some(Message::UploadPressed));

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(theme_toggle)
        .push(upload);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOP_BAR_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center)
        .style(styles::container::top_bar)
        .into()
}
