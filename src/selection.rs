//! Selection Handoff
//!
//! Passes a chosen template's URL to whoever consumes it (the editor) and
//! then asks the host to navigate back. Both callbacks are required
//! constructor arguments.

use crate::model::types::TemplateRecord;

type SelectCallback = Box<dyn FnMut(&str) + Send>;
type BackCallback = Box<dyn FnMut() + Send>;

pub struct SelectionHandoff {
    on_template_select: SelectCallback,
    on_back_to_home: BackCallback,
}

impl SelectionHandoff {
    pub fn new(
        on_template_select: impl FnMut(&str) + Send + 'static,
        on_back_to_home: impl FnMut() + Send + 'static,
    ) -> Self {
        Self {
            on_template_select: Box::new(on_template_select),
            on_back_to_home: Box::new(on_back_to_home),
        }
    }

    /// Hand off `record.url`, then navigate back
    pub fn select_template(&mut self, record: &TemplateRecord) {
        (self.on_template_select)(&record.url);
        (self.on_back_to_home)();
    }

    /// Navigate back without choosing anything
    pub fn back_to_home(&mut self) {
        (self.on_back_to_home)();
    }
}

impl std::fmt::Debug for SelectionHandoff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionHandoff").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::Category;
    use std::sync::{Arc, Mutex};

    fn record() -> TemplateRecord {
        TemplateRecord {
            id: 7,
            name: "Happy Baby".to_string(),
            url: "/happy_baby.png".to_string(),
            category: Category::General,
        }
    }

    #[test]
    fn test_select_calls_both_in_order() {
        let calls = Arc::new(Mutex::new(Vec::new()));

        let select_calls = Arc::clone(&calls);
        let back_calls = Arc::clone(&calls);
        let mut handoff = SelectionHandoff::new(
            move |url| select_calls.lock().unwrap().push(format!("select:{}", url)),
            move || back_calls.lock().unwrap().push("back".to_string()),
        );

        handoff.select_template(&record());

        assert_eq!(
            *calls.lock().unwrap(),
            vec!["select:/happy_baby.png".to_string(), "back".to_string()]
        );
    }

    #[test]
    fn test_back_only_skips_select() {
        let calls = Arc::new(Mutex::new(Vec::new()));

        let select_calls = Arc::clone(&calls);
        let back_calls = Arc::clone(&calls);
        let mut handoff = SelectionHandoff::new(
            move |url| select_calls.lock().unwrap().push(url.to_string()),
            move || back_calls.lock().unwrap().push("back".to_string()),
        );

        handoff.back_to_home();

        assert_eq!(*calls.lock().unwrap(), vec!["back".to_string()]);
    }
}
