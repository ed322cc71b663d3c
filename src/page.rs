//! DOM wiring for the landing page: scroll reveal, smooth anchors, header
//! fade, card glow, magnetic buttons, reduced-motion fallback, and
//! responsive scaling of the embedded hero background.
//!
//! Every selector is optional; wiring silently skips whatever the page
//! does not have.

use crate::constants::*;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn wire_all(window: &web::Window, document: &web::Document) {
    wire_scroll_reveal(document);
    wire_anchor_scroll(document);
    wire_header_fade(document);
    wire_scroll_indicator(document);
    wire_card_glow(document);
    wire_magnetic_buttons(document);
    reveal_all_if_reduced_motion(window, document);
    wire_embed_scaling(document);
}

/// Add `active` to reveal elements as they enter the viewport.
pub fn wire_scroll_reveal(document: &web::Document) {
    let Ok(list) = document.query_selector_all(REVEAL_SELECTOR) else {
        return;
    };
    if list.length() == 0 {
        return;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    _ = entry.target().class_list().add_1("active");
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    {
        Ok(observer) => {
            dom::for_each_element(&list, |el| observer.observe(&el));
            callback.forget();
        }
        Err(e) => log::warn!("scroll reveal unavailable: {:?}", e),
    }
}

/// Smooth-scroll in-page anchor links.
pub fn wire_anchor_scroll(document: &web::Document) {
    let Ok(list) = document.query_selector_all(r##"a[href^="#"]"##) else {
        return;
    };
    let doc = document.clone();
    dom::for_each_element(&list, |anchor| {
        let doc = doc.clone();
        let anchor_el = anchor.clone();
        dom::add_mouse_listener(&anchor, "click", move |ev| {
            // suppress the default jump even when the target is missing
            ev.prevent_default();
            let Some(href) = anchor_el.get_attribute("href") else {
                return;
            };
            if let Ok(Some(target)) = doc.query_selector(&href) {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                opts.set_block(web::ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        });
    });
}

/// Past the scroll threshold the header gets a solid blurred backdrop.
pub fn wire_header_fade(document: &web::Document) {
    let Ok(Some(header)) = document.query_selector(".header") else {
        return;
    };
    let Ok(header) = header.dyn_into::<web::HtmlElement>() else {
        return;
    };
    dom::add_window_listener("scroll", move || {
        let Some(window) = web::window() else {
            return;
        };
        let y = window.scroll_y().unwrap_or(0.0);
        let style = header.style();
        if y > HEADER_SCROLL_THRESHOLD {
            _ = style.set_property("background", "rgba(3, 3, 5, 0.95)");
            _ = style.set_property("backdrop-filter", "blur(20px)");
            _ = style.set_property("border-bottom", "1px solid rgba(255, 255, 255, 0.05)");
        } else {
            _ = style.set_property(
                "background",
                "linear-gradient(180deg, rgba(3,3,5,0.8) 0%, transparent 100%)",
            );
            _ = style.set_property("backdrop-filter", "blur(10px)");
            _ = style.set_property("border-bottom", "none");
        }
    });
}

/// Hide the scroll hint once the visitor starts scrolling.
pub fn wire_scroll_indicator(document: &web::Document) {
    let Ok(Some(indicator)) = document.query_selector(".scroll-indicator") else {
        return;
    };
    let Ok(indicator) = indicator.dyn_into::<web::HtmlElement>() else {
        return;
    };
    dom::add_window_listener("scroll", move || {
        let Some(window) = web::window() else {
            return;
        };
        let y = window.scroll_y().unwrap_or(0.0);
        let style = indicator.style();
        if y > HEADER_SCROLL_THRESHOLD {
            _ = style.set_property("opacity", "0");
            _ = style.set_property("pointer-events", "none");
        } else {
            _ = style.set_property("opacity", "0.6");
            _ = style.set_property("pointer-events", "auto");
        }
    });
}

/// Track the pointer over the card grid and expose it to CSS as
/// `--mouse-x`/`--mouse-y` custom properties per card.
pub fn wire_card_glow(document: &web::Document) {
    let Ok(Some(section)) = document.query_selector(".grid-section") else {
        return;
    };
    let Ok(cards) = document.query_selector_all(".grid-card") else {
        return;
    };
    let mut card_els = Vec::new();
    dom::for_each_element(&cards, |el| card_els.push(el));
    if card_els.is_empty() {
        return;
    }
    dom::add_mouse_listener(&section, "mousemove", move |ev| {
        for card in &card_els {
            let rect = card.get_bounding_client_rect();
            let x = ev.client_x() as f64 - rect.left();
            let y = ev.client_y() as f64 - rect.top();
            _ = card.style().set_property("--mouse-x", &format!("{x}px"));
            _ = card.style().set_property("--mouse-y", &format!("{y}px"));
        }
    });
}

/// Buttons lean toward the pointer and snap back on leave.
pub fn wire_magnetic_buttons(document: &web::Document) {
    let Ok(list) = document.query_selector_all(".magnetic-btn") else {
        return;
    };
    dom::for_each_element(&list, |btn| {
        let btn_move = btn.clone();
        dom::add_mouse_listener(&btn, "mousemove", move |ev| {
            let rect = btn_move.get_bounding_client_rect();
            let x = ev.client_x() as f64 - rect.left() - rect.width() / 2.0;
            let y = ev.client_y() as f64 - rect.top() - rect.height() / 2.0;
            _ = btn_move.style().set_property(
                "transform",
                &format!("translate({}px, {}px)", x * MAGNETIC_PULL, y * MAGNETIC_PULL),
            );
        });
        let btn_leave = btn.clone();
        dom::add_mouse_listener(&btn, "mouseleave", move |_| {
            _ = btn_leave.style().set_property("transform", "translate(0, 0)");
        });
    });
}

/// With prefers-reduced-motion, mark everything revealed up front instead
/// of animating it in.
pub fn reveal_all_if_reduced_motion(window: &web::Window, document: &web::Document) {
    let reduced = window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false);
    if !reduced {
        return;
    }
    if let Ok(list) = document.query_selector_all(REVEAL_SELECTOR) {
        dom::for_each_element(&list, |el| {
            _ = el.class_list().add_1("active");
        });
    }
}

/// Keep the embedded hero background container sized for the breakpoint.
pub fn wire_embed_scaling(document: &web::Document) {
    update_embed_scale(document);
    let doc = document.clone();
    dom::add_window_listener("resize", move || update_embed_scale(&doc));
}

fn update_embed_scale(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let Ok(Some(container)) = document.query_selector(".spline-background") else {
        return;
    };
    let Ok(container) = container.dyn_into::<web::HtmlElement>() else {
        return;
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);

    let (scale, container_width, container_height) = if width <= 480.0 {
        // small mobile: larger scale to fill the screen
        (0.65, "200%", "200%")
    } else if width <= 768.0 {
        (0.55 + (width - 480.0) / (768.0 - 480.0) * 0.2, "180%", "180%")
    } else if width <= 1024.0 {
        (0.8, "160%", "160%")
    } else {
        (1.0, "220%", "220%")
    };

    let style = container.style();
    _ = style.set_property("width", container_width);
    _ = style.set_property("height", container_height);
    _ = style.set_property("transform", &format!("translate(-50%, -50%) scale({scale})"));
}
