use super::*;

pub(crate) const TOGGLE_TARGET_ATTR: &str = "data-toggle-password";
pub(crate) const FLASH_SELECTOR: &str = ".flash";
pub(crate) const VALIDATED_FORM_SELECTOR: &str = "form[data-validate]";
pub(crate) const REQUIRED_FIELD_SELECTOR: &str = "[required]";
pub(crate) const FIELD_ERROR_CLASS: &str = "input-error";
pub(crate) const MASKED_LABEL: &str = "Show";
pub(crate) const REVEALED_LABEL: &str = "Hide";
pub(crate) const FLASH_DISMISS_DELAY_MS: i64 = 3000;
pub(crate) const FLASH_FADE_MS: i64 = 500;
pub(crate) const FLASH_FADE_TRANSITION: &str = "opacity 0.5s ease";
pub(crate) const REQUIRED_FIELDS_ALERT: &str = "Please fill in all required fields.";

// The page-level handlers. Registered once at document-ready; each one is an
// independent reaction to a single event type with no state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Behavior {
    TogglePasswordVisibility,
    ValidateRequiredFields,
}

#[derive(Debug, Clone)]
pub(crate) enum TimerAction {
    BeginFlashFade { flashes: Vec<NodeId> },
    RemoveNode { node: NodeId },
}

impl Harness {
    pub(crate) fn install_enhancements(&mut self) -> Result<()> {
        self.install_password_toggles()?;
        self.install_flash_dismiss()?;
        self.install_form_validation()?;
        Ok(())
    }

    fn install_password_toggles(&mut self) -> Result<()> {
        let selector = format!("[{TOGGLE_TARGET_ATTR}]");
        for control in self.dom.query_selector_all(&selector)? {
            self.listeners
                .add(control, "click", Behavior::TogglePasswordVisibility);
        }
        Ok(())
    }

    fn install_flash_dismiss(&mut self) -> Result<()> {
        let flashes = self.dom.query_selector_all(FLASH_SELECTOR)?;
        // No flashes, no timer.
        if flashes.is_empty() {
            return Ok(());
        }
        self.schedule(
            TimerAction::BeginFlashFade { flashes },
            FLASH_DISMISS_DELAY_MS,
        );
        Ok(())
    }

    fn install_form_validation(&mut self) -> Result<()> {
        for form in self.dom.query_selector_all(VALIDATED_FORM_SELECTOR)? {
            self.listeners
                .add(form, "submit", Behavior::ValidateRequiredFields);
        }
        Ok(())
    }

    pub(crate) fn run_behavior(
        &mut self,
        behavior: Behavior,
        node: NodeId,
        event: &mut EventState,
    ) -> Result<()> {
        match behavior {
            Behavior::TogglePasswordVisibility => self.toggle_password_visibility(node),
            Behavior::ValidateRequiredFields => self.validate_required_fields(node, event),
        }
    }

    // The target id is re-read on every click; a control whose attribute no
    // longer resolves is a silent no-op.
    fn toggle_password_visibility(&mut self, control: NodeId) -> Result<()> {
        let Some(input_id) = self.dom.attr(control, TOGGLE_TARGET_ATTR) else {
            return Ok(());
        };
        let Some(input) = self.dom.by_id(&input_id) else {
            self.trace_enhance_line(format!("[enhance] toggle target missing id={input_id}"));
            return Ok(());
        };

        let masked = self
            .dom
            .attr(input, "type")
            .is_some_and(|t| t.eq_ignore_ascii_case("password"));
        if masked {
            self.dom.set_attr(input, "type", "text")?;
            self.dom.set_text_content(control, REVEALED_LABEL)?;
        } else {
            self.dom.set_attr(input, "type", "password")?;
            self.dom.set_text_content(control, MASKED_LABEL)?;
        }
        Ok(())
    }

    fn validate_required_fields(&mut self, form: NodeId, event: &mut EventState) -> Result<()> {
        let fields = self
            .dom
            .query_selector_all_from(form, REQUIRED_FIELD_SELECTOR)?;
        let mut valid = true;

        for field in fields {
            let value = self.dom.value(field)?;
            if value.trim().is_empty() {
                self.dom.class_add(field, FIELD_ERROR_CLASS)?;
                valid = false;
            } else {
                self.dom.class_remove(field, FIELD_ERROR_CLASS)?;
            }
        }

        if !valid {
            event.default_prevented = true;
            self.record_alert(REQUIRED_FIELDS_ALERT);
        }
        Ok(())
    }

    pub(crate) fn run_timer_action(&mut self, action: TimerAction) -> Result<()> {
        match action {
            TimerAction::BeginFlashFade { flashes } => {
                for flash in flashes {
                    self.dom.style_set(flash, "opacity", "0")?;
                    self.dom.style_set(flash, "transition", FLASH_FADE_TRANSITION)?;
                    self.schedule(TimerAction::RemoveNode { node: flash }, FLASH_FADE_MS);
                }
                Ok(())
            }
            TimerAction::RemoveNode { node } => self.dom.remove_node(node),
        }
    }
}
