// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo shell.
//!
//! The demo panel sits on the left; the toast stack is layered on top of
//! the whole window so toasts stay anchored to the bottom-right corner.

use super::Message;
use crate::notifications::{Severity, Toast};
use crate::report::Report;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::toast_stack::ToastStack;
use iced::{
    widget::{button, Column, Container, Row, Stack, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext {
    pub toasts: Vec<Toast>,
    pub max_visible: usize,
    /// Newest stored reports.
    pub recent: Vec<Report>,
    pub offline: bool,
}

/// Renders the demo panel with the toast overlay on top.
pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let overlay = ToastStack::view(&ctx.toasts, ctx.max_visible).map(Message::Toast);

    Stack::new()
        .push(
            Container::new(view_panel(&ctx.recent, ctx.offline))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::LG),
        )
        .push(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_panel<'a>(recent: &[Report], offline: bool) -> Element<'a, Message> {
    let reports = Column::new()
        .spacing(spacing::XS)
        .push(section_label("Reports"))
        .push(panel_button(
            "Submit valid report",
            Message::SubmitSampleReport { valid: true },
        ))
        .push(panel_button(
            "Submit incomplete report",
            Message::SubmitSampleReport { valid: false },
        ))
        .push(panel_button(
            if offline {
                "Reconnect backend"
            } else {
                "Take backend offline"
            },
            Message::ToggleOffline,
        ))
        .push(panel_button("Sample air quality", Message::SampleAirQuality));

    let severities = [
        ("Success", Severity::Success),
        ("Error", Severity::Error),
        ("Warning", Severity::Warning),
        ("Info", Severity::Info),
    ]
    .into_iter()
    .fold(Row::new().spacing(spacing::XS), |row, (label, severity)| {
        row.push(
            button(Text::new(label).size(typography::BODY))
                .on_press(Message::Notify(severity))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT)),
        )
    });

    let history = recent.iter().fold(
        Column::new()
            .spacing(spacing::XXS)
            .push(section_label("Recent reports")),
        |column, report| {
            column.push(
                Text::new(format!(
                    "#{} {} at {} ({:?})",
                    report.id,
                    report.hazard_type.label(),
                    report.location.name,
                    report.status
                ))
                .size(typography::BODY_SM),
            )
        },
    );
    let history = if recent.is_empty() {
        history.push(Text::new("No report submitted yet").size(typography::BODY_SM))
    } else {
        history
    };

    Column::new()
        .spacing(spacing::MD)
        .width(Length::Fixed(sizing::DEMO_PANEL_WIDTH))
        .push(Text::new("Hazard Watch").size(typography::TITLE_MD))
        .push(reports)
        .push(section_label("Toasts"))
        .push(severities)
        .push(panel_button("Dismiss all", Message::DismissAll))
        .push(history)
        .into()
}

fn section_label(label: &str) -> Text<'_> {
    Text::new(label).size(typography::CAPTION)
}

fn panel_button(label: &str, message: Message) -> button::Button<'_, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
}
