//! Close open reaction pickers when the user clicks elsewhere.

#[cfg(test)]
#[path = "dismiss_test.rs"]
mod dismiss_test;

#[cfg(feature = "browser")]
use wasm_bindgen::{JsCast, closure::Closure};

use super::picker::hide_all_pickers;
#[cfg(feature = "browser")]
use crate::dom::DomError;
#[cfg(feature = "browser")]
use crate::dom::browser::{BrowserPage, js_error};
use crate::dom::Page;
#[cfg(feature = "browser")]
use crate::ids;

/// Where a document click landed, relative to the reaction controls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickHit {
    pub in_reaction_button: bool,
    pub in_picker: bool,
}

impl ClickHit {
    pub fn is_outside(self) -> bool {
        !self.in_reaction_button && !self.in_picker
    }
}

pub fn on_document_click(page: &impl Page, hit: ClickHit) {
    if hit.is_outside() {
        hide_all_pickers(page);
    }
}

#[cfg(feature = "browser")]
fn click_hit(event: &web_sys::Event) -> ClickHit {
    let Some(target) = event.target().and_then(|t| t.dyn_ref::<web_sys::Element>().cloned()) else {
        return ClickHit::default();
    };
    let inside = |selector: &str| target.closest(selector).is_ok_and(|found| found.is_some());
    ClickHit {
        in_reaction_button: inside(&format!(".{}", ids::REACTION_BUTTON_CLASS)),
        in_picker: inside(&format!(".{}", ids::PICKER_CLASS)),
    }
}

/// Attach the document click listener. It lives as long as the page.
///
/// # Errors
///
/// Returns a [`DomError`] if the listener cannot be registered.
#[cfg(feature = "browser")]
pub fn install(page: &BrowserPage) -> Result<(), DomError> {
    let handler_page = page.clone();
    let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        on_document_click(&handler_page, click_hit(&event));
    });
    page.document()
        .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        .map_err(js_error)?;
    listener.forget();
    Ok(())
}
