use super::*;

#[derive(Debug)]
pub(crate) struct TraceState {
    pub(crate) enabled: bool,
    pub(crate) events: bool,
    pub(crate) timers: bool,
    pub(crate) to_stderr: bool,
    pub(crate) logs: VecDeque<String>,
    pub(crate) log_limit: usize,
}

impl Default for TraceState {
    fn default() -> Self {
        Self {
            enabled: false,
            events: true,
            timers: true,
            to_stderr: true,
            logs: VecDeque::new(),
            log_limit: 10_000,
        }
    }
}

impl Harness {
    pub fn enable_trace(&mut self, enabled: bool) {
        self.trace_state.enabled = enabled;
    }

    pub fn set_trace_events(&mut self, enabled: bool) {
        self.trace_state.events = enabled;
    }

    pub fn set_trace_timers(&mut self, enabled: bool) {
        self.trace_state.timers = enabled;
    }

    pub fn set_trace_stderr(&mut self, enabled: bool) {
        self.trace_state.to_stderr = enabled;
    }

    pub fn set_trace_log_limit(&mut self, max_entries: usize) -> Result<()> {
        if max_entries == 0 {
            return Err(Error::Runtime(
                "set_trace_log_limit requires at least 1 entry".into(),
            ));
        }
        self.trace_state.log_limit = max_entries;
        while self.trace_state.logs.len() > self.trace_state.log_limit {
            self.trace_state.logs.pop_front();
        }
        Ok(())
    }

    pub fn take_trace_logs(&mut self) -> Vec<String> {
        self.trace_state.logs.drain(..).collect()
    }

    pub(crate) fn event_trace_enabled(&self) -> bool {
        self.trace_state.enabled && self.trace_state.events
    }

    pub(crate) fn trace_timer_line(&mut self, line: String) {
        if self.trace_state.enabled && self.trace_state.timers {
            self.push_trace_line(line);
        }
    }

    pub(crate) fn trace_enhance_line(&mut self, line: String) {
        if self.trace_state.enabled {
            self.push_trace_line(line);
        }
    }

    pub(crate) fn push_trace_line(&mut self, line: String) {
        if self.trace_state.to_stderr {
            eprintln!("{line}");
        }
        self.trace_state.logs.push_back(line);
        while self.trace_state.logs.len() > self.trace_state.log_limit {
            self.trace_state.logs.pop_front();
        }
    }

    pub(crate) fn trace_node_label(&self, node: NodeId) -> String {
        if node == self.dom.root {
            return "document".into();
        }
        match self.dom.tag_name(node) {
            Some(tag) => match self.dom.attr(node, "id") {
                Some(id) if !id.is_empty() => format!("{tag}#{id}"),
                _ => tag.to_string(),
            },
            None => "#text".into(),
        }
    }
}
