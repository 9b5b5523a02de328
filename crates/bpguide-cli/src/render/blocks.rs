//! Template-facing views of content blocks.
//!
//! Cards become a start and an end marker around their contents, so the
//! page template renders a body with a single flat loop.

use bpguide_model::{
    BUDGET_VS_ACTUAL, Block, COST_DISTRIBUTION, ChartKind, ContactField, ContentBody,
    DisclosureState, Guide, Icon, Item, Placeholder, Table, Testimonial,
};

use super::svg::{self, Bars, Donut};

/// An icon as the exported documents draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconView {
    pub name: &'static str,
    pub glyph: &'static str,
}

impl From<Icon> for IconView {
    fn from(icon: Icon) -> Self {
        Self {
            name: icon.name(),
            glyph: icon.glyph(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCardView {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconView,
    pub background: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaqView<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub open: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderView {
    pub heading: &'static str,
    pub message: String,
    pub icon: IconView,
}

/// One step of the page body.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockView<'a> {
    Hero(&'a str, &'a str),
    Title(&'a str),
    Lead(&'a str),
    Paragraph(&'a str),
    Subheading(&'a str),
    Bullets(&'a [Item]),
    Steps(&'a [&'a str]),
    Code(&'a str),
    Table(&'a Table),
    CardStart(&'a str),
    CardEnd,
    Term(&'a str, &'a str),
    FeatureCards(Vec<FeatureCardView>),
    Donut(Donut),
    Bars(Bars),
    Testimonials(&'a [Testimonial]),
    Faq(Vec<FaqView<'a>>),
    ContactForm(&'static [ContactField]),
    Placeholder(PlaceholderView),
}

/// Flatten `body` for the template.
pub fn body_views<'a>(
    guide: &Guide<'a>,
    body: &'a ContentBody,
    disclosure: &DisclosureState,
) -> Vec<BlockView<'a>> {
    let mut views = Vec::new();
    for block in body.blocks {
        push_block(&mut views, guide, block, disclosure);
    }
    views
}

pub fn placeholder_views(placeholder: Placeholder) -> Vec<BlockView<'static>> {
    vec![BlockView::Placeholder(PlaceholderView {
        heading: placeholder.heading(),
        message: placeholder.message(),
        icon: placeholder.icon.into(),
    })]
}

fn push_block<'a>(
    views: &mut Vec<BlockView<'a>>,
    guide: &Guide<'a>,
    block: &'a Block,
    disclosure: &DisclosureState,
) {
    let view = match block {
        Block::Hero { title, lead } => BlockView::Hero(title, lead),
        Block::Title { text } => BlockView::Title(text),
        Block::Lead { text } => BlockView::Lead(text),
        Block::Paragraph { text } => BlockView::Paragraph(text),
        Block::Subheading { text } => BlockView::Subheading(text),
        Block::Bullets { items } => BlockView::Bullets(items),
        Block::Steps { items } => BlockView::Steps(items),
        Block::Code { source } => BlockView::Code(source),
        Block::Table { table } => BlockView::Table(table),
        Block::Card { title, blocks } => {
            views.push(BlockView::CardStart(title));
            for inner in *blocks {
                push_block(views, guide, inner, disclosure);
            }
            BlockView::CardEnd
        }
        Block::Term { name, definition } => BlockView::Term(name, definition),
        Block::FeatureCards { cards } => BlockView::FeatureCards(
            cards
                .iter()
                .map(|card| FeatureCardView {
                    title: card.title,
                    description: card.description,
                    icon: card.icon.into(),
                    background: format!(
                        "linear-gradient(135deg, {}, {})",
                        card.tone.light().hex(),
                        card.tone.dark().hex()
                    ),
                })
                .collect(),
        ),
        Block::Chart { chart } => match chart {
            ChartKind::CostDistribution => BlockView::Donut(svg::donut(&COST_DISTRIBUTION)),
            ChartKind::BudgetVsActual => BlockView::Bars(svg::bars(&BUDGET_VS_ACTUAL)),
        },
        Block::Testimonials => BlockView::Testimonials(guide.testimonials),
        Block::Faq => BlockView::Faq(
            guide
                .faqs
                .iter()
                .enumerate()
                .map(|(i, faq)| FaqView {
                    question: faq.question,
                    answer: faq.answer,
                    open: disclosure.is_expanded(i),
                })
                .collect(),
        ),
        Block::ContactForm => BlockView::ContactForm(&ContactField::ALL),
    };
    views.push(view);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_are_bracketed_by_markers() {
        let guide = Guide::builtin();
        let body = guide.content("reporting-analytics").expect("reporting body");
        let views = body_views(&guide, body, &DisclosureState::initial());
        let starts = views
            .iter()
            .filter(|v| matches!(v, BlockView::CardStart(_)))
            .count();
        let ends = views.iter().filter(|v| **v == BlockView::CardEnd).count();
        assert!(starts > 0);
        assert_eq!(starts, ends);
    }

    #[test]
    fn faq_open_flag_follows_disclosure() {
        let guide = Guide::builtin();
        let body = guide.content("support").expect("support body");
        let views = body_views(&guide, body, &DisclosureState::initial());
        let faqs = views
            .iter()
            .find_map(|v| match v {
                BlockView::Faq(faqs) => Some(faqs),
                _ => None,
            })
            .expect("faq block");
        let open: Vec<bool> = faqs.iter().map(|f| f.open).collect();
        assert_eq!(open, [true, false, false, false]);
    }
}
