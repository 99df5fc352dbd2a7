use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{anyhow, Context, Result};
use debtline_domain::page::{NAV_SCROLL_OFFSET_PX, TOC_SCROLL_OFFSET_PX};
use debtline_domain::{
    active_section, progress_percent, reading_time_label, reading_time_minutes, scroll_target,
    SectionNavigator, SectionOffset, StepDirection,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions, Window,
};

use crate::application::services::ThemeService;
use crate::runner::config::SiteConfig;
use crate::state::Platform;

/// Element ids and selectors provided by the essay page
mod selectors {
    pub const THEME_TOGGLE: &str = "themeToggle";
    pub const READING_TIME: &str = "readingTime";
    pub const PROGRESS_BAR: &str = "progressBar";
    pub const CURRENT_SECTION: &str = "currentSection";
    pub const PREV_SECTION: &str = "prevSection";
    pub const NEXT_SECTION: &str = "nextSection";
    pub const ESSAY_CONTENT: &str = ".essay-content";
    pub const TOC_LINKS: &str = "#toc a";
    pub const SECTIONS: &str = "section[id]";
    pub const SECTION_HEADING: &str = "h2, h3";
    pub const CITATIONS: &str = "blockquote cite";
}

const CITATION_TITLE: &str = "Click to see full citation information";
const CITATION_NOTICE: &str = "Full citation information would appear here.";

type Listener = Closure<dyn FnMut(Event)>;

/// Listeners attached to the page
struct PageGlue {
    listeners: Vec<Listener>,
}

impl PageGlue {
    fn listen(
        &mut self,
        target: &EventTarget,
        event: &str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<()> {
        let closure = Listener::new(handler);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("Failed to listen for {event}: {e:?}"))?;
        self.listeners.push(closure);
        Ok(())
    }
}

/// Wire up every page behavior whose elements are present.
///
/// Applies the initial theme, reading time, progress and section highlight
/// immediately, then keeps them current from event listeners.
pub fn install(platform: &Platform, site: &SiteConfig) -> Result<()> {
    let window = web_sys::window().context("no window")?;
    let document = window.document().context("no document")?;
    let mut glue = PageGlue {
        listeners: Vec::new(),
    };

    install_theme_toggle(&mut glue, &document, platform)?;
    show_reading_time(&document);
    install_scroll_tracking(&mut glue, &window, &document)?;
    install_toc_links(&mut glue, &window, &document)?;
    install_section_nav(
        &mut glue,
        &window,
        &document,
        SectionNavigator::new(site.section_prefixes.iter().cloned()),
    )?;
    install_citations(&mut glue, &window, &document)?;

    tracing::debug!(listeners = glue.listeners.len(), "Page glue installed");

    // The listeners must outlive this call; the page never detaches them.
    std::mem::forget(glue);
    Ok(())
}

/// Feed location declared on the widget container, if any
pub fn container_feed_url(container_id: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(container_id)?
        .get_attribute("data-feed-url")
        .filter(|url| !url.trim().is_empty())
}

fn install_theme_toggle(
    glue: &mut PageGlue,
    document: &Document,
    platform: &Platform,
) -> Result<()> {
    let service = Rc::new(RefCell::new(ThemeService::new(
        platform.storage_adapter(),
        platform.document_adapter(),
    )));

    let Some(button) = document.get_element_by_id(selectors::THEME_TOGGLE) else {
        tracing::debug!("No theme toggle on this page");
        return Ok(());
    };

    glue.listen(&button, "click", move |_| {
        service.borrow_mut().toggle();
    })
}

fn show_reading_time(document: &Document) {
    let content = document.query_selector(selectors::ESSAY_CONTENT).ok().flatten();
    let target = document.get_element_by_id(selectors::READING_TIME);
    let (Some(content), Some(target)) = (content, target) else {
        return;
    };

    let minutes = reading_time_minutes(&content.text_content().unwrap_or_default());
    target.set_inner_html(&format!(
        "<i class=\"far fa-clock\"></i> {}",
        reading_time_label(minutes)
    ));
}

fn install_scroll_tracking(
    glue: &mut PageGlue,
    window: &Window,
    document: &Document,
) -> Result<()> {
    update_progress_bar(window, document);
    highlight_active_section(window, document);

    let (w, d) = (window.clone(), document.clone());
    glue.listen(window, "scroll", move |_| {
        update_progress_bar(&w, &d);
        highlight_active_section(&w, &d);
    })
}

fn update_progress_bar(window: &Window, document: &Document) {
    let Some(bar) = html_element_by_id(document, selectors::PROGRESS_BAR) else {
        return;
    };
    let Some(root) = document.document_element() else {
        return;
    };

    let client_height = match root.client_height() {
        0 => window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0),
        h => f64::from(h),
    };
    let percent = progress_percent(
        f64::from(root.scroll_top()),
        f64::from(root.scroll_height()),
        client_height,
    );

    let _ = bar.style().set_property("width", &format!("{percent}%"));
}

fn highlight_active_section(window: &Window, document: &Document) {
    let active = current_section_id(window, document);

    for link in elements(document, selectors::TOC_LINKS) {
        let href = link.get_attribute("href").unwrap_or_default();
        let is_active = active
            .as_deref()
            .is_some_and(|id| href.strip_prefix('#') == Some(id));
        let _ = link.class_list().toggle_with_force("active", is_active);
    }

    if let Some(header) = document.get_element_by_id(selectors::CURRENT_SECTION) {
        let heading = active
            .as_deref()
            .and_then(|id| document.get_element_by_id(id))
            .and_then(|section| {
                section
                    .query_selector(selectors::SECTION_HEADING)
                    .ok()
                    .flatten()
            })
            .and_then(|h| h.text_content())
            .unwrap_or_default();
        header.set_text_content(Some(heading.trim()));
    }
}

fn install_toc_links(glue: &mut PageGlue, window: &Window, document: &Document) -> Result<()> {
    for link in elements(document, selectors::TOC_LINKS) {
        let (w, d) = (window.clone(), document.clone());
        let anchor = link.clone();
        glue.listen(&link, "click", move |event: Event| {
            event.prevent_default();
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            // Non-id hrefs are not valid selectors; skip them
            if let Some(target) = d.query_selector(&href).ok().flatten() {
                scroll_to_element(&w, &target, TOC_SCROLL_OFFSET_PX);
            }
        })?;
    }
    Ok(())
}

fn install_section_nav(
    glue: &mut PageGlue,
    window: &Window,
    document: &Document,
    navigator: SectionNavigator,
) -> Result<()> {
    let navigator = Rc::new(navigator);

    for (id, direction) in [
        (selectors::PREV_SECTION, StepDirection::Previous),
        (selectors::NEXT_SECTION, StepDirection::Next),
    ] {
        let Some(button) = document.get_element_by_id(id) else {
            continue;
        };

        let (w, d, nav) = (window.clone(), document.clone(), Rc::clone(&navigator));
        glue.listen(&button, "click", move |_| {
            let current = current_section_id(&w, &d);
            let Some(prefix) = nav.step(current.as_deref(), direction) else {
                return;
            };
            let selector = format!("section[id^=\"{prefix}\"]");
            match d.query_selector(&selector).ok().flatten() {
                Some(section) => scroll_to_element(&w, &section, NAV_SCROLL_OFFSET_PX),
                None => tracing::debug!(prefix, "No section for navigation step"),
            }
        })?;
    }
    Ok(())
}

fn install_citations(glue: &mut PageGlue, window: &Window, document: &Document) -> Result<()> {
    for cite in elements(document, selectors::CITATIONS) {
        let _ = cite.set_attribute("title", CITATION_TITLE);
        if let Some(el) = cite.dyn_ref::<HtmlElement>() {
            let _ = el.style().set_property("cursor", "pointer");
        }

        let w = window.clone();
        glue.listen(&cite, "click", move |_| {
            tracing::info!("Citation details requested");
            let _ = w.alert_with_message(CITATION_NOTICE);
        })?;
    }
    Ok(())
}

fn current_section_id(window: &Window, document: &Document) -> Option<String> {
    let page_y = window.page_y_offset().unwrap_or(0.0);
    active_section(&section_offsets(document), page_y).map(str::to_string)
}

fn section_offsets(document: &Document) -> Vec<SectionOffset> {
    elements(document, selectors::SECTIONS)
        .into_iter()
        .filter_map(|el| {
            let el = el.dyn_into::<HtmlElement>().ok()?;
            Some(SectionOffset::new(el.id(), f64::from(el.offset_top())))
        })
        .collect()
}

fn scroll_to_element(window: &Window, element: &Element, offset: f64) {
    let top = scroll_target(
        element.get_bounding_client_rect().top(),
        window.page_y_offset().unwrap_or(0.0),
        offset,
    );

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn elements(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn html_element_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}
