// SPDX-License-Identifier: MPL-2.0
//! Toast stack widget.
//!
//! Renders the open toasts of a [`Toaster`] as cards in the bottom-right
//! corner, with a variant-colored border, an optional action button and a
//! dismiss button.

use crate::notifications::{Toast, ToastId, Toaster, Variant};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use tokio::time::Instant;
use tracing::debug;

/// Messages emitted by the stack and the expiry tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The user closed a toast.
    Dismiss(ToastId),
    /// The user pressed a toast's action button.
    Action(ToastId),
    /// Periodic tick firing due auto-dismiss timers.
    Tick,
}

/// Toast stack widget.
pub struct ToastStack;

impl ToastStack {
    /// Applies a stack message to the store.
    ///
    /// Returns the toast id when the user triggered its action, so the
    /// caller can run whatever the action stands for.
    pub fn update(toaster: &Toaster, message: Message) -> Option<ToastId> {
        match message {
            Message::Dismiss(id) => {
                toaster.dismiss(Some(&id));
                None
            }
            Message::Action(id) => {
                debug!(id = %id, "toast action pressed");
                toaster.dismiss(Some(&id));
                Some(id)
            }
            Message::Tick => {
                toaster.tick(Instant::now());
                let removed = toaster.prune_dismissed();
                if !removed.is_empty() {
                    debug!(count = removed.len(), "pruned dismissed toasts");
                }
                None
            }
        }
    }

    /// Renders a single toast card.
    ///
    /// Text is copied into the widget tree so the card outlives the
    /// snapshot it was built from.
    pub fn view_toast<'a>(toast: &Toast) -> Element<'a, Message> {
        let accent_color = accent_color(toast.variant());

        let mut body = Column::new().spacing(spacing::XXS).width(Length::Fill);
        if let Some(title) = toast.title() {
            body = body.push(
                Text::new(title.to_owned())
                    .size(typography::BODY)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.palette().text),
                    }),
            );
        }
        if let Some(description) = toast.description() {
            body = body.push(Text::new(description.to_owned()).size(typography::BODY_SM).style(
                |theme: &Theme| text::Style {
                    color: Some(Color {
                        a: opacity::OVERLAY_STRONG,
                        ..theme.palette().text
                    }),
                },
            ));
        }
        if let Some(action) = toast.action() {
            body = body.push(
                button(Text::new(action.label().to_owned()).size(typography::CAPTION))
                    .on_press(Message::Action(toast.id().clone()))
                    .padding([spacing::XXS, spacing::XS])
                    .style(move |theme: &Theme, status| {
                        action_button_style(theme, status, accent_color)
                    }),
            );
        }

        let dismiss_button = button(
            Text::new("×")
                .size(typography::BODY)
                .align_x(alignment::Horizontal::Center),
        )
        .on_press(Message::Dismiss(toast.id().clone()))
        .width(Length::Fixed(sizing::DISMISS_BUTTON))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

        // Layout: [title/description/action] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Top)
            .push(body)
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the overlay holding at most `max_visible` open toasts.
    pub fn view<'a>(toasts: &[Toast], max_visible: usize) -> Element<'a, Message> {
        let cards: Vec<Element<'a, Message>> = visible_toasts(toasts, max_visible)
            .map(Self::view_toast)
            .collect();

        if cards.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let column = Column::with_children(cards)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

/// The newest `max_visible` open toasts, oldest first so the newest sits
/// at the bottom of the stack.
pub fn visible_toasts(toasts: &[Toast], max_visible: usize) -> impl Iterator<Item = &Toast> {
    let open = toasts.iter().filter(|toast| toast.is_open()).count();
    toasts
        .iter()
        .filter(|toast| toast.is_open())
        .skip(open.saturating_sub(max_visible))
}

fn accent_color(variant: Variant) -> Color {
    match variant {
        Variant::Default => palette::PRIMARY_500,
        Variant::Destructive => palette::ERROR_500,
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn action_button_style(theme: &Theme, status: button::Status, accent: Color) -> button::Style {
    let base = theme.extended_palette().background.base;
    let background = match status {
        button::Status::Hovered => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..accent
        })),
        button::Status::Pressed => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..accent
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: iced::Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered | button::Status::Pressed => {
            let alpha = if status == button::Status::Pressed {
                opacity::OVERLAY_MEDIUM
            } else {
                opacity::OVERLAY_SUBTLE
            };
            button::Style {
                background: Some(iced::Background::Color(Color {
                    a: alpha,
                    ..palette::GRAY_400
                })),
                text_color: base.text,
                border: iced::Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                shadow: shadow::NONE,
                snap: true,
            }
        }
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
