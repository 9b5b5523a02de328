//! View layer.
//!
//! Views are pure functions of [`AppState`]. The shell is a fixed header
//! over the sidebar and the scrollable main pane; below the breakpoint the
//! sidebar is hidden or laid over the content with a dimmed backdrop.

mod contact;
mod content;
mod header;
mod placeholder;

use bpguide_model::{Guide, Rendered, SidebarPresentation};
use iced::widget::{Id, Space, column, container, mouse_area, opaque, row, scrollable, stack};
use iced::{Element, Length};

use crate::component::sidebar;
use crate::message::{Message, NavigationMessage};
use crate::state::AppState;
use crate::theme::style::backdrop;
use crate::theme::{CONTENT_MAX_WIDTH, HEADER_HEIGHT, SPACING_LG, SPACING_XL};

pub use contact::view_contact;
pub use content::view_body;
pub use header::view_header;
pub use placeholder::view_placeholder;

/// Id of the main content scrollable, used to scroll back to the top.
pub fn main_content_id() -> Id {
    Id::new("guide-main-content")
}

/// Root view.
pub fn view_app(state: &AppState) -> Element<'_, Message> {
    let guide = Guide::builtin();
    let navigation = &state.guide.navigation;

    let page = match guide.resolve(navigation.active_section().as_str()) {
        Rendered::Body(body) => view_body(state, body),
        Rendered::Placeholder(placeholder) => view_placeholder(placeholder),
    };

    let main = scrollable(
        container(container(page).max_width(CONTENT_MAX_WIDTH))
            .padding([SPACING_XL, SPACING_LG])
            .center_x(Length::Fill),
    )
    .id(main_content_id())
    .on_scroll(|viewport| Message::ContentScrolled(viewport.absolute_offset().y))
    .width(Length::Fill)
    .height(Length::Fill);

    let presentation = state.sidebar_presentation();

    let body: Element<'_, Message> = match presentation {
        SidebarPresentation::Docked => row![sidebar(&guide, navigation), main].into(),
        SidebarPresentation::Hidden | SidebarPresentation::Overlay => main.into(),
    };

    let base = column![view_header(state), body];

    if !presentation.has_backdrop() {
        return base.into();
    }

    // The overlay starts below the header so the close button stays usable.
    let dimmer = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(backdrop),
    )
    .on_press(Message::Navigation(NavigationMessage::CloseSidebar));

    let overlay = column![
        Space::new().height(HEADER_HEIGHT),
        opaque(row![sidebar(&guide, navigation), dimmer].height(Length::Fill)),
    ];

    stack![base, overlay].into()
}
