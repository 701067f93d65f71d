//! Pure rendering: map App state to ratatui widget trees.
//!
//! Widget-building functions are pure (state in, widgets out); the only
//! effect is Frame::render_widget() which writes to the terminal buffer.
//! The current instant is passed in so animation frames are reproducible.

use std::time::Instant;

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};
use ratatui::Frame;

use crate::types::{Rgb, BLESSING_COLOR, MESSAGE_COLOR};

use super::animation::FadeFrame;
use super::state::App;
use super::theme;

/// Widest the content column gets, in cells.
const COLUMN_WIDTH: u16 = 64;

/// Logo card width, in cells.
const LOGO_WIDTH: u16 = 24;

/// Rows the blessing travels while sliding.
const SLIDE_ROWS: u16 = 3;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the screen to the terminal frame.
pub fn render(app: &App, now: Instant, frame: &mut Frame) {
    let area = frame.area();
    let background = app.greeting.background();

    frame.render_widget(
        Block::new().style(Style::new().bg(theme::color(background))),
        area,
    );

    let column = center_horizontally(area, COLUMN_WIDTH);

    let [logo, message, input, buttons, blessing, help] = Layout::vertical([
        Constraint::Length(5), // logo card
        Constraint::Length(3), // greeting
        Constraint::Length(3), // name field
        Constraint::Length(3), // buttons
        Constraint::Min(0),    // blessing
        Constraint::Length(1), // help
    ])
    .areas(column);

    frame.render_widget(render_logo(), center_horizontally(logo, LOGO_WIDTH));
    frame.render_widget(render_message(app, background, now), message);
    frame.render_widget(render_input(app.greeting.name()), input);
    render_buttons(frame, buttons);
    render_blessing(app, background, now, frame, blessing);
    frame.render_widget(render_help(), help);
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Centered sub-rect at most `width` wide.
fn center_horizontally(area: Rect, width: u16) -> Rect {
    let [_, middle, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(area.width)),
        Constraint::Fill(1),
    ])
    .areas(area);
    middle
}

fn render_help() -> Paragraph<'static> {
    Paragraph::new(Span::styled(
        "type a name  [Enter] greet  [Tab] blessing  [^U] clear  [Esc] quit",
        theme::STYLE_HELP,
    ))
    .alignment(Alignment::Center)
}

// ============================================================================
// WIDGETS
// ============================================================================

fn render_logo() -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(""),
        Line::from("K A R I B U"),
        Line::from("welcome"),
    ])
    .alignment(Alignment::Center)
    .style(theme::STYLE_CARD)
    .block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .style(theme::STYLE_CARD),
    )
}

/// The greeting, mid-cross-fade if one is running.
fn render_message(app: &App, background: Rgb, now: Instant) -> Paragraph<'_> {
    let current = app.greeting.message();

    let (text, opacity) = match app.animations.fade.as_ref().map(|f| f.frame(now)) {
        Some(FadeFrame::Outgoing { text, opacity }) => (text, opacity),
        Some(FadeFrame::Incoming { opacity }) => (current, opacity),
        None => (current, 1.0),
    };

    let style = theme::STYLE_MESSAGE.fg(theme::color(theme::blend(
        MESSAGE_COLOR,
        background,
        opacity,
    )));

    Paragraph::new(Line::from(Span::styled(text, style)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::new().padding(Padding::vertical(1)))
}

fn render_input(name: &str) -> Paragraph<'_> {
    Paragraph::new(Line::from(vec![Span::raw(name), Span::raw("▏")]))
        .style(theme::STYLE_INPUT)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(theme::STYLE_INPUT_BORDER)
                .title(" Enter your name "),
        )
}

fn render_buttons(frame: &mut Frame, area: Rect) {
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

    let button = |label: &'static str, style: Style| {
        Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .style(style),
            )
    };

    frame.render_widget(button("Greet Me [Enter]", theme::STYLE_GREET_BUTTON), left);
    frame.render_widget(
        button("Toggle Blessing [Tab]", theme::STYLE_TOGGLE_BUTTON),
        right,
    );
}

/// The blessing, slid down and faded by how far it is out of view.
fn render_blessing(app: &App, background: Rgb, now: Instant, frame: &mut Frame, area: Rect) {
    let visibility = app
        .animations
        .blessing_visibility(app.greeting.show_extra_message(), now);
    if visibility <= 0.0 {
        return;
    }

    let travel = SLIDE_ROWS.min(area.height);
    let offset = ((1.0 - visibility) * travel as f32).round() as u16;
    let slid = Rect {
        y: area.y + offset + 1,
        height: area.height.saturating_sub(offset + 1),
        ..area
    };
    if slid.height == 0 {
        return;
    }

    let style = theme::STYLE_BLESSING.fg(theme::color(theme::blend(
        BLESSING_COLOR,
        background,
        visibility,
    )));

    let paragraph = Paragraph::new(Span::styled(app.greeting.blessing(), style))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, slid);
}

// ============================================================================
// TESTS
// ============================================================================
