use log::debug;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

/// In-page regions reachable from the hero and footer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Products,
    AboutFounder,
}

impl Section {
    pub fn id(&self) -> &'static str {
        match self {
            Section::Products => "products",
            Section::AboutFounder => "about-founder",
        }
    }
}

/// The part of the page that can be searched for regions and scrolled.
pub trait Viewport {
    type Region;

    fn find_region(&self, id: &str) -> Option<Self::Region>;

    /// Smoothly brings the region's top edge to the top of the viewport.
    fn scroll_region_to_top(&self, region: &Self::Region);
}

/// The live browser document.
pub struct DocumentViewport;

impl Viewport for DocumentViewport {
    type Region = Element;

    fn find_region(&self, id: &str) -> Option<Element> {
        web_sys::window()?.document()?.get_element_by_id(id)
    }

    fn scroll_region_to_top(&self, region: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        region.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Scrolls to the region with `section_id`. A missing region is not an
/// error; the call just does nothing. Returns whether a scroll happened.
pub fn scroll_to<V: Viewport>(viewport: &V, section_id: &str) -> bool {
    match viewport.find_region(section_id) {
        Some(region) => {
            viewport.scroll_region_to_top(&region);
            true
        }
        None => {
            debug!("No section with id \"{}\" to scroll to", section_id);
            false
        }
    }
}

pub fn scroll_to_section(section: Section) {
    scroll_to(&DocumentViewport, section.id());
}

/// Click handler for buttons that jump to a section.
pub fn on_click_scroll(section: Section) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(section);
    })
}
