// SPDX-License-Identifier: MPL-2.0
//! Grid of selectable example images.
//!
//! The selector shows its provider's default list as soon as it exists, fires
//! a single asynchronous load when mounted, and swaps the whole list for the
//! loaded one when it arrives. Clicking a thumbnail emits
//! [`Event::Selected`]; the parent applies it to the shared state.
//!
//! A load result is only accepted by the selector instance that requested it,
//! and only while that instance is mounted.

use crate::app::config::{EXAMPLE_GRID_WIDTH, THUMBNAIL_GAP, THUMBNAIL_SIZE};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{ImageOption, ImageOptionList, ImageOptionsProvider};
use crate::text::capitalize;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, tooltip, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length, Task};
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one selector instance across its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectorId(u64);

impl SelectorId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Loading sequence of the displayed options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Options {
    /// Loader not resolved yet; holds the provider's synchronous defaults.
    Pending(ImageOptionList),
    /// Loader resolved; holds exactly what it returned.
    Ready(ImageOptionList),
}

impl Options {
    #[must_use]
    pub fn list(&self) -> &ImageOptionList {
        match self {
            Options::Pending(list) | Options::Ready(list) => list,
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Options::Ready(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Mounted,
    Unmounted,
}

/// What the grid area shows for the current options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grid<'a> {
    /// Nothing to show yet and the loader is still pending.
    Loading,
    /// The loader resolved with an empty list.
    Empty,
    /// One thumbnail per option, in display order.
    Thumbnails(&'a [ImageOption]),
}

/// Messages handled by the selector.
#[derive(Debug, Clone)]
pub enum Message {
    OptionsLoaded {
        selector: SelectorId,
        result: Result<ImageOptionList, Error>,
    },
    Selected(ImageOption),
    ReloadRequested,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Selected(ImageOption),
    /// The displayed list was replaced by a loaded one.
    OptionsLoaded { count: usize },
    /// The loader failed; the displayed list is unchanged.
    OptionsLoadFailed(Error),
    /// A load result arrived for another or a torn-down instance.
    StaleResultDiscarded,
    /// The user asked for a fresh selector.
    ReloadRequested,
}

/// Example image selector state.
#[derive(Debug, Clone)]
pub struct State {
    id: SelectorId,
    options: Options,
    lifecycle: Lifecycle,
}

impl State {
    /// Creates a selector showing the provider's default options.
    pub fn new(provider: &dyn ImageOptionsProvider) -> Self {
        Self::with_defaults(provider.default_options())
    }

    #[must_use]
    pub fn with_defaults(defaults: ImageOptionList) -> Self {
        Self {
            id: SelectorId::next(),
            options: Options::Pending(defaults),
            lifecycle: Lifecycle::Created,
        }
    }

    #[must_use]
    pub fn id(&self) -> SelectorId {
        self.id
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub fn displayed(&self) -> &ImageOptionList {
        self.options.list()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    /// Starts the one-time asynchronous load.
    ///
    /// Only the first call on a fresh instance requests anything; later calls
    /// (re-renders, an unmounted instance) return [`Task::none`].
    pub fn mount(&mut self, provider: &dyn ImageOptionsProvider) -> Task<Message> {
        if self.lifecycle != Lifecycle::Created {
            return Task::none();
        }
        self.lifecycle = Lifecycle::Mounted;

        let selector = self.id;
        Task::perform(provider.load_options(), move |result| {
            Message::OptionsLoaded { selector, result }
        })
    }

    /// Marks the instance as torn down. Results still in flight are ignored.
    pub fn unmount(&mut self) {
        self.lifecycle = Lifecycle::Unmounted;
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::OptionsLoaded { selector, result } => {
                if selector != self.id || !self.is_mounted() {
                    return Event::StaleResultDiscarded;
                }
                match result {
                    Ok(list) => {
                        let count = list.len();
                        self.options = Options::Ready(list);
                        Event::OptionsLoaded { count }
                    }
                    Err(err) => Event::OptionsLoadFailed(err),
                }
            }
            Message::Selected(option) => Event::Selected(option),
            Message::ReloadRequested => Event::ReloadRequested,
        }
    }

    #[must_use]
    pub fn grid(&self) -> Grid<'_> {
        match &self.options {
            Options::Pending(list) if list.is_empty() => Grid::Loading,
            Options::Ready(list) if list.is_empty() => Grid::Empty,
            Options::Pending(list) | Options::Ready(list) => Grid::Thumbnails(list.as_slice()),
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let header = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(
                Text::new(i18n.tr("examples-title"))
                    .size(typography::BODY)
                    .width(Length::Fill),
            )
            .push(
                button(Text::new("↻").size(typography::BODY))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::button::subtle)
                    .on_press(Message::ReloadRequested),
            );

        let body: Element<'a, Message> = match self.grid() {
            Grid::Loading => placeholder(i18n.tr("examples-loading")),
            Grid::Empty => placeholder(i18n.tr("examples-empty")),
            Grid::Thumbnails(options) => {
                let thumbnails: Vec<Element<'a, Message>> =
                    options.iter().map(thumbnail).collect();

                Row::with_children(thumbnails)
                    .spacing(THUMBNAIL_GAP)
                    .wrap()
                    .vertical_spacing(THUMBNAIL_GAP)
                    .into()
            }
        };

        Column::new()
            .spacing(spacing::XS)
            .width(Length::Fixed(EXAMPLE_GRID_WIDTH))
            .push(header)
            .push(body)
            .into()
    }
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    Container::new(
        Text::new(label)
            .size(typography::BODY_SM)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .into()
}

/// Fixed-size clickable thumbnail, center-cropped to fill its square.
fn thumbnail(option: &ImageOption) -> Element<'_, Message> {
    let image = Image::new(Handle::from_path(option.as_path()))
        .content_fit(ContentFit::Cover)
        .width(Length::Fill)
        .height(Length::Fill);

    let tile = button(image)
        .padding(0)
        .width(Length::Fixed(THUMBNAIL_SIZE))
        .height(Length::Fixed(THUMBNAIL_SIZE))
        .style(styles::button::thumbnail)
        .on_press(Message::Selected(option.clone()));

    tooltip(
        tile,
        Text::new(capitalize(option.display_name())).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .gap(4)
    .style(styles::container::tooltip)
    .into()
}
