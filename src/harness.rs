use super::*;

#[derive(Debug)]
pub struct Harness {
    pub(crate) dom: Dom,
    pub(crate) listeners: ListenerStore,
    pub(crate) scheduler: SchedulerState,
    pub(crate) platform_mocks: PlatformMockState,
    pub(crate) trace_state: TraceState,
}

#[derive(Debug, Default)]
pub(crate) struct PlatformMockState {
    pub(crate) alert_messages: Vec<String>,
    pub(crate) form_submissions: Vec<FormSubmission>,
}

/// Recorded stand-in for the browser's native form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    pub form: String,
    pub action: String,
    pub method: String,
}

impl Harness {
    // Parsing is the "document ready" moment: the enhancement handlers are
    // wired before the harness is handed back.
    pub fn from_html(html: &str) -> Result<Self> {
        let dom = parse_html(html)?;
        let mut harness = Self {
            dom,
            listeners: ListenerStore::default(),
            scheduler: SchedulerState::default(),
            platform_mocks: PlatformMockState::default(),
            trace_state: TraceState::default(),
        };
        harness.install_enhancements()?;
        Ok(harness)
    }

    pub fn click(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        stacker::grow(32 * 1024 * 1024, || self.click_node(target))
    }

    fn click_node(&mut self, target: NodeId) -> Result<()> {
        if self.dom.disabled(target) {
            return Ok(());
        }

        let outcome = self.dispatch_event(target, "click")?;
        if outcome.default_prevented {
            return Ok(());
        }

        if is_submit_control(&self.dom, target) {
            if let Some(form) = self.resolve_form_for_submit(target) {
                self.request_form_submit(form)?;
            }
        }

        Ok(())
    }

    pub fn type_text(&mut self, selector: &str, text: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        if self.dom.disabled(target) {
            return Ok(());
        }
        if self.dom.readonly(target) {
            return Ok(());
        }

        let tag = self
            .dom
            .tag_name(target)
            .ok_or_else(|| Error::TypeMismatch {
                selector: selector.to_string(),
                expected: "input or textarea".into(),
                actual: "non-element".into(),
            })?
            .to_ascii_lowercase();

        if tag != "input" && tag != "textarea" {
            return Err(Error::TypeMismatch {
                selector: selector.to_string(),
                expected: "input or textarea".into(),
                actual: tag,
            });
        }

        self.dom.set_value(target, text)?;
        stacker::grow(32 * 1024 * 1024, || {
            self.dispatch_event(target, "input").map(|_| ())
        })
    }

    pub fn submit(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        stacker::grow(32 * 1024 * 1024, || {
            let form = if self
                .dom
                .tag_name(target)
                .is_some_and(|t| t.eq_ignore_ascii_case("form"))
            {
                Some(target)
            } else {
                self.resolve_form_for_submit(target)
            };

            if let Some(form) = form {
                self.request_form_submit(form)?;
            }
            Ok(())
        })
    }

    pub fn dispatch(&mut self, selector: &str, event: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        stacker::grow(32 * 1024 * 1024, || {
            self.dispatch_event(target, event).map(|_| ())
        })
    }

    fn request_form_submit(&mut self, form: NodeId) -> Result<()> {
        let outcome = self.dispatch_event(form, "submit")?;
        if outcome.default_prevented {
            return Ok(());
        }

        let submission = FormSubmission {
            form: self.trace_node_label(form),
            action: self.dom.attr(form, "action").unwrap_or_default(),
            method: self
                .dom
                .attr(form, "method")
                .map(|m| m.to_ascii_lowercase())
                .unwrap_or_else(|| "get".to_string()),
        };
        if self.event_trace_enabled() {
            let line = format!(
                "[event] submit_default form={} action={} method={}",
                submission.form, submission.action, submission.method
            );
            self.push_trace_line(line);
        }
        self.platform_mocks.form_submissions.push(submission);
        Ok(())
    }

    fn resolve_form_for_submit(&self, target: NodeId) -> Option<NodeId> {
        self.dom.find_ancestor_by_tag(target, "form")
    }

    pub(crate) fn record_alert(&mut self, message: &str) {
        self.platform_mocks.alert_messages.push(message.to_string());
        self.trace_enhance_line(format!("[enhance] alert message={message:?}"));
    }

    pub fn take_alert_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.platform_mocks.alert_messages)
    }

    pub fn take_form_submissions(&mut self) -> Vec<FormSubmission> {
        std::mem::take(&mut self.platform_mocks.form_submissions)
    }

    pub fn assert_text(&self, selector: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.text_content(target);
        if actual != expected {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: expected.to_string(),
                actual,
                dom_snippet: self.node_snippet(target),
            });
        }
        Ok(())
    }

    pub fn assert_value(&self, selector: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.value(target)?;
        if actual != expected {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: expected.to_string(),
                actual,
                dom_snippet: self.node_snippet(target),
            });
        }
        Ok(())
    }

    pub fn assert_attr(&self, selector: &str, name: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.attr(target, name).unwrap_or_default();
        if actual != expected {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: expected.to_string(),
                actual,
                dom_snippet: self.node_snippet(target),
            });
        }
        Ok(())
    }

    pub fn assert_has_class(&self, selector: &str, class_name: &str, expected: bool) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.class_contains(target, class_name)?;
        if actual != expected {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: format!("class {class_name} present: {expected}"),
                actual: format!("class {class_name} present: {actual}"),
                dom_snippet: self.node_snippet(target),
            });
        }
        Ok(())
    }

    pub fn assert_style(&self, selector: &str, property: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.style_get(target, property)?;
        if actual != expected {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: expected.to_string(),
                actual,
                dom_snippet: self.node_snippet(target),
            });
        }
        Ok(())
    }

    pub fn assert_exists(&self, selector: &str) -> Result<()> {
        let _ = self.select_one(selector)?;
        Ok(())
    }

    pub fn assert_missing(&self, selector: &str) -> Result<()> {
        if let Some(node) = self.dom.query_selector(selector)? {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: "no matching element".into(),
                actual: "element present".into(),
                dom_snippet: self.node_snippet(node),
            });
        }
        Ok(())
    }

    pub fn count(&self, selector: &str) -> Result<usize> {
        Ok(self.dom.query_selector_all(selector)?.len())
    }

    pub fn dump_dom(&self, selector: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        Ok(self.dom.dump_node(target))
    }

    pub(crate) fn select_one(&self, selector: &str) -> Result<NodeId> {
        self.dom
            .query_selector(selector)?
            .ok_or_else(|| Error::SelectorNotFound(selector.to_string()))
    }

    fn node_snippet(&self, node_id: NodeId) -> String {
        truncate_chars(&self.dom.dump_node(node_id), 200)
    }
}

fn is_submit_control(dom: &Dom, node: NodeId) -> bool {
    let Some(tag) = dom.tag_name(node) else {
        return false;
    };
    if tag.eq_ignore_ascii_case("button") {
        return dom
            .attr(node, "type")
            .map(|t| t.eq_ignore_ascii_case("submit"))
            .unwrap_or(true);
    }
    if tag.eq_ignore_ascii_case("input") {
        return dom
            .attr(node, "type")
            .map(|t| t.eq_ignore_ascii_case("submit"))
            .unwrap_or(false);
    }
    false
}
