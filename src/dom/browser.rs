//! [`Page`] over the live document via `web-sys`.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, FormData, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, Window};

use super::{DomError, DomResult, Page};
use crate::config::parse_post_id;
use crate::ids;
use crate::net::types::FormPost;
use crate::state::comment::CommentSubmission;

pub(crate) fn js_error(err: JsValue) -> DomError {
    DomError::Js(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// Read an element id handed over from page script.
///
/// Templates pass ids as numbers or strings; both are accepted.
pub fn id_from_js(value: &JsValue) -> Option<String> {
    if let Some(raw) = value.as_string() {
        return parse_post_id(&raw);
    }
    value.as_f64().filter(|n| n.is_finite()).map(|n| n.to_string())
}

#[derive(Clone)]
pub struct BrowserPage {
    window: Window,
    document: Document,
}

impl BrowserPage {
    /// The page for the current window, if it has a document.
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Raw `document.cookie`, empty when unavailable.
    pub fn cookies(&self) -> String {
        match self.document.dyn_ref::<web_sys::HtmlDocument>() {
            Some(html) => html.cookie().unwrap_or_default(),
            None => String::new(),
        }
    }

    fn element(&self, id: &str) -> DomResult<Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| DomError::Missing(id.to_owned()))
    }

    fn html_element(&self, id: &str) -> DomResult<HtmlElement> {
        self.element(id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| DomError::Js(format!("#{id} is not an HTML element")))
    }

    fn file_input(&self, id: &str) -> DomResult<HtmlInputElement> {
        self.element(id)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| DomError::Js(format!("#{id} is not an input")))
    }

    /// Multipart body for a comment. Files come from the attachment control
    /// only when the submission asks for them.
    pub fn comment_form_data(&self, submission: &CommentSubmission) -> DomResult<FormData> {
        let form = FormData::new().map_err(js_error)?;
        for (name, value) in submission.text_fields() {
            form.append_with_str(name, value).map_err(js_error)?;
        }
        if submission.include_files {
            if let Some(files) = self.file_input(ids::COMMENT_FILES)?.files() {
                for index in 0..files.length() {
                    if let Some(file) = files.item(index) {
                        form.append_with_blob("images", &file).map_err(js_error)?;
                    }
                }
            }
        }
        Ok(form)
    }
}

impl Page for BrowserPage {
    fn is_displayed(&self, id: &str) -> DomResult<bool> {
        let display = self
            .html_element(id)?
            .style()
            .get_property_value("display")
            .map_err(js_error)?;
        Ok(display == "block")
    }

    fn set_displayed(&self, id: &str, visible: bool) -> DomResult<()> {
        self.html_element(id)?
            .style()
            .set_property("display", if visible { "block" } else { "none" })
            .map_err(js_error)
    }

    fn hide_all(&self, class: &str) {
        let nodes = match self.document.query_selector_all(&format!(".{class}")) {
            Ok(nodes) => nodes,
            Err(err) => {
                log::warn!("query .{class} failed: {}", js_error(err));
                return;
            }
        };
        for index in 0..nodes.length() {
            let Some(el) = nodes.item(index).and_then(|node| node.dyn_ref::<HtmlElement>().cloned()) else {
                continue;
            };
            if let Err(err) = el.style().set_property("display", "none") {
                log::warn!("hide .{class} failed: {}", js_error(err));
            }
        }
    }

    fn add_classes(&self, id: &str, classes: &[&str]) -> DomResult<()> {
        let list = self.element(id)?.class_list();
        for class in classes {
            list.add_1(class).map_err(js_error)?;
        }
        Ok(())
    }

    fn remove_classes(&self, id: &str, classes: &[&str]) -> DomResult<()> {
        let list = self.element(id)?.class_list();
        for class in classes {
            list.remove_1(class).map_err(js_error)?;
        }
        Ok(())
    }

    fn toggle_class(&self, id: &str, class: &str) -> DomResult<bool> {
        self.element(id)?.class_list().toggle(class).map_err(js_error)
    }

    fn focus_first_input(&self, id: &str) -> DomResult<()> {
        let input = self.element(id)?.query_selector("input").map_err(js_error)?;
        match input.as_ref().and_then(|el| el.dyn_ref::<HtmlElement>()) {
            Some(input) => input.focus().map_err(js_error),
            None => Ok(()),
        }
    }

    fn set_text(&self, id: &str, text: &str) -> DomResult<()> {
        self.html_element(id)?.set_inner_text(text);
        Ok(())
    }

    fn input_value(&self, id: &str) -> DomResult<String> {
        let el = self.element(id)?;
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            return Ok(input.value());
        }
        if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            return Ok(area.value());
        }
        Err(DomError::Js(format!("#{id} has no value")))
    }

    fn set_input_value(&self, id: &str, value: &str) -> DomResult<()> {
        let el = self.element(id)?;
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
            return Ok(());
        }
        if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
            return Ok(());
        }
        Err(DomError::Js(format!("#{id} has no value")))
    }

    fn file_count(&self, id: &str) -> DomResult<u32> {
        Ok(self.file_input(id)?.files().map_or(0, |files| files.length()))
    }

    fn clear_files(&self, id: &str) -> DomResult<()> {
        self.file_input(id)?.set_value("");
        Ok(())
    }

    fn clear_children(&self, id: &str) -> DomResult<()> {
        self.element(id)?.set_inner_html("");
        Ok(())
    }

    fn alert(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            log::error!("alert failed: {}", js_error(err));
        }
    }

    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or_else(|err| {
            log::error!("confirm failed: {}", js_error(err));
            false
        })
    }

    fn prompt(&self, message: &str) -> Option<String> {
        self.window.prompt_with_message(message).unwrap_or_else(|err| {
            log::error!("prompt failed: {}", js_error(err));
            None
        })
    }

    fn submit_form(&self, post: &FormPost) -> DomResult<()> {
        let form = self
            .document
            .create_element("form")
            .map_err(js_error)?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| DomError::Js("created form is not a form element".to_owned()))?;
        form.set_method("POST");
        form.set_action(&post.action);

        for (name, value) in &post.fields {
            let input = self
                .document
                .create_element("input")
                .map_err(js_error)?
                .dyn_into::<HtmlInputElement>()
                .map_err(|_| DomError::Js("created input is not an input element".to_owned()))?;
            input.set_type("hidden");
            input.set_name(name);
            input.set_value(value);
            form.append_child(&input).map_err(js_error)?;
        }

        let body = self.document.body().ok_or_else(|| DomError::Missing("body".to_owned()))?;
        body.append_child(&form).map_err(js_error)?;
        form.submit().map_err(js_error)
    }
}
