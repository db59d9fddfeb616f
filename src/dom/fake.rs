//! In-memory document for handler tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use super::{DomError, DomResult, Page};
use crate::net::types::FormPost;

#[derive(Clone, Debug, Default)]
pub struct FakeElement {
    pub classes: BTreeSet<String>,
    pub display: Option<String>,
    pub text: String,
    pub value: String,
    pub files: Option<u32>,
    pub children: usize,
    pub has_input: bool,
}

#[derive(Default)]
pub struct FakePage {
    elements: RefCell<BTreeMap<String, FakeElement>>,
    pub alerts: RefCell<Vec<String>>,
    pub confirms: RefCell<Vec<String>>,
    pub prompts: RefCell<Vec<String>>,
    pub submitted: RefCell<Vec<FormPost>>,
    pub focused: RefCell<Vec<String>>,
    pub confirm_answer: bool,
    pub prompt_answer: Option<String>,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page whose `confirm` dialogs return `answer`.
    pub fn answering_confirm(answer: bool) -> Self {
        Self {
            confirm_answer: answer,
            ..Self::default()
        }
    }

    /// A page whose `prompt` dialogs return `answer` (`None` = cancelled).
    pub fn answering_prompt(answer: Option<&str>) -> Self {
        Self {
            prompt_answer: answer.map(str::to_owned),
            ..Self::default()
        }
    }

    pub fn insert(&self, id: &str, element: FakeElement) {
        self.elements.borrow_mut().insert(id.to_owned(), element);
    }

    pub fn insert_with_classes(&self, id: &str, classes: &[&str]) {
        let element = FakeElement {
            classes: classes.iter().map(|c| (*c).to_owned()).collect(),
            ..FakeElement::default()
        };
        self.insert(id, element);
    }

    pub fn get(&self, id: &str) -> Option<FakeElement> {
        self.elements.borrow().get(id).cloned()
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.get(id).is_some_and(|el| el.classes.contains(class))
    }

    pub fn display(&self, id: &str) -> Option<String> {
        self.get(id).and_then(|el| el.display)
    }

    /// Ids whose inline display is `block`.
    pub fn visible_ids(&self) -> Vec<String> {
        self.elements
            .borrow()
            .iter()
            .filter(|(_, el)| el.display.as_deref() == Some("block"))
            .map(|(id, _)| id.clone())
            .collect()
    }

    fn with_element<T>(&self, id: &str, f: impl FnOnce(&mut FakeElement) -> T) -> DomResult<T> {
        let mut elements = self.elements.borrow_mut();
        let element = elements.get_mut(id).ok_or_else(|| DomError::Missing(id.to_owned()))?;
        Ok(f(element))
    }
}

impl Page for FakePage {
    fn is_displayed(&self, id: &str) -> DomResult<bool> {
        self.with_element(id, |el| el.display.as_deref() == Some("block"))
    }

    fn set_displayed(&self, id: &str, visible: bool) -> DomResult<()> {
        self.with_element(id, |el| {
            el.display = Some(if visible { "block" } else { "none" }.to_owned());
        })
    }

    fn hide_all(&self, class: &str) {
        for el in self.elements.borrow_mut().values_mut() {
            if el.classes.contains(class) {
                el.display = Some("none".to_owned());
            }
        }
    }

    fn add_classes(&self, id: &str, classes: &[&str]) -> DomResult<()> {
        self.with_element(id, |el| {
            for class in classes {
                el.classes.insert((*class).to_owned());
            }
        })
    }

    fn remove_classes(&self, id: &str, classes: &[&str]) -> DomResult<()> {
        self.with_element(id, |el| {
            for class in classes {
                el.classes.remove(*class);
            }
        })
    }

    fn toggle_class(&self, id: &str, class: &str) -> DomResult<bool> {
        self.with_element(id, |el| {
            if el.classes.remove(class) {
                false
            } else {
                el.classes.insert(class.to_owned());
                true
            }
        })
    }

    fn focus_first_input(&self, id: &str) -> DomResult<()> {
        let has_input = self.with_element(id, |el| el.has_input)?;
        if has_input {
            self.focused.borrow_mut().push(id.to_owned());
        }
        Ok(())
    }

    fn set_text(&self, id: &str, text: &str) -> DomResult<()> {
        self.with_element(id, |el| el.text = text.to_owned())
    }

    fn input_value(&self, id: &str) -> DomResult<String> {
        self.with_element(id, |el| el.value.clone())
    }

    fn set_input_value(&self, id: &str, value: &str) -> DomResult<()> {
        self.with_element(id, |el| el.value = value.to_owned())
    }

    fn file_count(&self, id: &str) -> DomResult<u32> {
        self.with_element(id, |el| el.files.unwrap_or(0))
    }

    fn clear_files(&self, id: &str) -> DomResult<()> {
        self.with_element(id, |el| el.files = Some(0))
    }

    fn clear_children(&self, id: &str) -> DomResult<()> {
        self.with_element(id, |el| el.children = 0)
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_owned());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_owned());
        self.confirm_answer
    }

    fn prompt(&self, message: &str) -> Option<String> {
        self.prompts.borrow_mut().push(message.to_owned());
        self.prompt_answer.clone()
    }

    fn submit_form(&self, form: &FormPost) -> DomResult<()> {
        self.submitted.borrow_mut().push(form.clone());
        Ok(())
    }
}
