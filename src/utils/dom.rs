use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::error::{Result, SiteError};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(SiteError::NoDocument)
}

pub fn body() -> Result<HtmlElement> {
    document()?.body().ok_or_else(|| SiteError::missing("body"))
}

/// Current vertical scroll offset of the page.
pub fn scroll_offset() -> Result<f64> {
    Ok(window()?.scroll_y()?)
}

pub fn viewport_height() -> Result<f64> {
    window()?
        .inner_height()?
        .as_f64()
        .ok_or_else(|| SiteError::Dom("innerHeight is not a number".to_string()))
}

pub fn viewport_width() -> Result<f64> {
    window()?
        .inner_width()?
        .as_f64()
        .ok_or_else(|| SiteError::Dom("innerWidth is not a number".to_string()))
}

/// Smooth-scroll the page so its top edge lands at `top`.
pub fn smooth_scroll_page_to(top: f64) -> Result<()> {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Smooth-scroll a horizontally scrolling container to `left`.
pub fn smooth_scroll_strip_to(strip: &Element, left: f64) {
    let options = ScrollToOptions::new();
    options.set_left(left);
    options.set_behavior(ScrollBehavior::Smooth);
    strip.scroll_to_with_scroll_to_options(&options);
}

/// Absolute page position of the element's top edge.
pub fn page_top(element: &Element) -> Result<f64> {
    Ok(element.get_bounding_client_rect().top() + scroll_offset()?)
}

pub fn element_by_id(id: &str) -> Result<Element> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::missing(format!("#{}", id)))
}

/// Upper-cased tag name of the focused element, if any.
pub fn focused_tag() -> Option<String> {
    document().ok()?.active_element().map(|element| element.tag_name())
}
