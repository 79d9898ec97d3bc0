// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layout: top bar above a row holding the example grid on the left and the
//! image pane with the prompt on the right. Toasts float above everything.

use super::Message;
use crate::app::shared_state::SharedState;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::example_images;
use crate::ui::image_pane;
use crate::ui::notifications::{self, Toast};
use crate::ui::prompt;
use crate::ui::theming::ThemeMode;
use crate::ui::top_bar::{self, ViewContext as TopBarViewContext};
use iced::widget::{scrollable, Column, Container, Row, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub shared: &'a SharedState,
    pub examples: &'a example_images::State,
    pub prompt: &'a prompt::State,
    pub theme_mode: ThemeMode,
    pub upload_pending: bool,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let top_bar = top_bar::view(TopBarViewContext {
        i18n: ctx.i18n,
        theme_mode: ctx.theme_mode,
        upload_pending: ctx.upload_pending,
    })
    .map(Message::TopBar);

    let grid = ctx.examples.view(ctx.i18n).map(Message::Examples);
    let examples = Container::new(scrollable(grid))
        .height(Length::Fill)
        .padding(spacing::MD)
        .style(crate::ui::styles::container::panel);

    let has_image = ctx.shared.image_source().is_some();
    let workspace = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(image_pane::view(ctx.shared, ctx.i18n))
        .push(ctx.prompt.view(ctx.i18n, has_image).map(Message::Prompt));

    let body = Row::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .height(Length::Fill)
        .push(examples)
        .push(workspace);

    let base = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(top_bar)
        .push(body);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);
    if ctx.notifications.has_notifications() {
        let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);
        stack = stack.push(toasts);
    }
    stack.into()
}
