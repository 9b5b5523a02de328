//! Block renderer for authored content bodies.
//!
//! Every [`Block`] maps to one widget tree. Cards recurse once; the model
//! guarantees they do not nest further.

use bpguide_model::{Block, ContentBody, Guide, Icon, Item, Table};
use iced::widget::{Column, Row, column, container, row, text};
use iced::{Element, Font, Length, Theme};

use super::contact::view_contact;
use crate::component::{accordion, chart, feature_card, icon, testimonial_card};
use crate::message::Message;
use crate::state::AppState;
use crate::theme::style::{card, code_block};
use crate::theme::{
    FONT_BOLD, FONT_EXTRA_BOLD, FONT_SEMIBOLD, FONT_SIZE_BODY, FONT_SIZE_DISPLAY, FONT_SIZE_HERO,
    FONT_SIZE_LEAD, FONT_SIZE_SMALL, FONT_SIZE_TITLE, GuideColors, SPACING_LG, SPACING_MD,
    SPACING_SM, SPACING_XL, SPACING_XS,
};

/// Renders a whole body.
pub fn view_body<'a>(state: &'a AppState, body: &'a ContentBody) -> Element<'a, Message> {
    Column::with_children(body.blocks.iter().map(|block| view_block(state, block)))
        .spacing(SPACING_XL)
        .width(Length::Fill)
        .into()
}

fn view_block<'a>(state: &'a AppState, block: &'a Block) -> Element<'a, Message> {
    match block {
        Block::Hero { title, lead } => column![
            text(*title)
                .size(FONT_SIZE_HERO)
                .font(FONT_EXTRA_BOLD)
                .center()
                .style(strong),
            text(*lead)
                .size(FONT_SIZE_LEAD + 2.0)
                .center()
                .style(muted),
        ]
        .spacing(SPACING_MD)
        .width(Length::Fill)
        .align_x(iced::Alignment::Center)
        .into(),

        Block::Title { text: title } => text(*title)
            .size(FONT_SIZE_DISPLAY)
            .font(FONT_BOLD)
            .style(strong)
            .into(),

        Block::Lead { text: lead } => text(*lead).size(FONT_SIZE_LEAD).style(muted).into(),

        Block::Paragraph { text: body } => text(*body).size(FONT_SIZE_BODY).style(body_color).into(),

        Block::Subheading { text: heading } => text(*heading)
            .size(FONT_SIZE_TITLE)
            .font(FONT_SEMIBOLD)
            .style(strong)
            .into(),

        Block::Bullets { items } => bullets(items),

        Block::Steps { items } => Column::with_children(items.iter().enumerate().map(|(i, step)| {
            row![
                text(format!("{}.", i + 1)).font(FONT_SEMIBOLD).style(muted),
                text(*step).size(FONT_SIZE_BODY).style(body_color),
            ]
            .spacing(SPACING_SM)
            .into()
        }))
        .spacing(SPACING_SM)
        .into(),

        Block::Code { source } => container(text(*source).font(Font::MONOSPACE).size(FONT_SIZE_SMALL))
            .padding(SPACING_MD)
            .width(Length::Fill)
            .style(code_block)
            .into(),

        Block::Table { table } => view_table(table),

        Block::Card { title, blocks } => {
            let mut inner = column![
                text(*title)
                    .size(FONT_SIZE_TITLE + 4.0)
                    .font(FONT_SEMIBOLD)
                    .style(strong)
            ]
            .spacing(SPACING_MD);
            for nested in *blocks {
                inner = inner.push(view_block(state, nested));
            }
            boxed(inner)
        }

        Block::Term { name, definition } => boxed(
            column![
                text(*name)
                    .size(FONT_SIZE_TITLE)
                    .font(FONT_SEMIBOLD)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.guide().accent_text),
                    }),
                text(*definition).size(FONT_SIZE_BODY).style(body_color),
            ]
            .spacing(SPACING_SM),
        ),

        Block::FeatureCards { cards } => {
            responsive_grid(state, cards.iter().map(feature_card).collect())
        }

        Block::Chart { chart: kind } => boxed(chart::<Message>(*kind)),

        Block::Testimonials => {
            let guide = Guide::builtin();
            responsive_grid(
                state,
                guide.testimonials.iter().map(testimonial_card).collect(),
            )
        }

        Block::Faq => {
            let guide = Guide::builtin();
            Column::with_children(guide.faqs.iter().enumerate().map(|(i, faq)| {
                accordion(
                    faq.question,
                    icon(Icon::HelpCircle),
                    faq.answer,
                    state.guide.disclosure.is_expanded(i),
                    Message::FaqToggled(i),
                )
            }))
            .spacing(SPACING_MD)
            .into()
        }

        Block::ContactForm => view_contact(state),
    }
}

fn bullets<'a>(items: &'a [Item]) -> Element<'a, Message> {
    Column::with_children(items.iter().map(|item| {
        let mut line = row![text("•").style(muted)].spacing(SPACING_SM);
        if let Some(label) = item.label {
            line = line.push(text(format!("{label}:")).font(FONT_BOLD).style(strong));
        }
        line.push(text(item.text).size(FONT_SIZE_BODY).style(body_color))
            .into()
    }))
    .spacing(SPACING_XS)
    .into()
}

fn view_table<'a>(table: &'a Table) -> Element<'a, Message> {
    let header = Row::with_children(table.headers.iter().map(|cell| {
        text(*cell)
            .font(FONT_SEMIBOLD)
            .style(strong)
            .width(Length::FillPortion(1))
            .into()
    }))
    .spacing(SPACING_MD);

    let mut grid = column![header].spacing(SPACING_SM);
    for cells in table.rows {
        grid = grid.push(
            Row::with_children(cells.iter().map(|cell| {
                text(*cell)
                    .style(body_color)
                    .width(Length::FillPortion(1))
                    .into()
            }))
            .spacing(SPACING_MD),
        );
    }
    boxed(grid)
}

/// Cards side by side when wide, stacked when narrow.
fn responsive_grid<'a>(
    state: &AppState,
    items: Vec<Element<'a, Message>>,
) -> Element<'a, Message> {
    if state.is_narrow() {
        Column::with_children(items).spacing(SPACING_LG).into()
    } else {
        Row::with_children(items).spacing(SPACING_LG).into()
    }
}

fn boxed<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding(SPACING_LG)
        .width(Length::Fill)
        .style(card)
        .into()
}

// =============================================================================
// TEXT STYLES
// =============================================================================

fn strong(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.guide().text_strong),
    }
}

fn body_color(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.guide().text_body),
    }
}

fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.guide().text_muted),
    }
}
