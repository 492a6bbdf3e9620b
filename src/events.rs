use super::*;

#[derive(Debug, Default, Clone)]
pub(crate) struct ListenerStore {
    map: HashMap<NodeId, HashMap<String, Vec<Behavior>>>,
}

impl ListenerStore {
    pub(crate) fn add(&mut self, node_id: NodeId, event: &str, behavior: Behavior) {
        self.map
            .entry(node_id)
            .or_default()
            .entry(event.to_string())
            .or_default()
            .push(behavior);
    }

    pub(crate) fn get(&self, node_id: NodeId, event: &str) -> Vec<Behavior> {
        self.map
            .get(&node_id)
            .and_then(|events| events.get(event))
            .cloned()
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub(crate) struct EventState {
    pub(crate) event_type: String,
    pub(crate) target: NodeId,
    pub(crate) current_target: NodeId,
    pub(crate) default_prevented: bool,
}

impl EventState {
    pub(crate) fn new(event_type: &str, target: NodeId) -> Self {
        Self {
            event_type: event_type.to_string(),
            target,
            current_target: target,
            default_prevented: false,
        }
    }
}

impl Harness {
    // Target phase, then bubble along the ancestor chain up to the document.
    pub(crate) fn dispatch_event(&mut self, target: NodeId, event_type: &str) -> Result<EventState> {
        let mut event = EventState::new(event_type, target);

        let mut cursor = Some(target);
        while let Some(node) = cursor {
            event.current_target = node;
            self.invoke_behaviors(node, &mut event)?;
            cursor = self.dom.parent(node);
        }

        self.trace_event_done(&event);
        Ok(event)
    }

    fn invoke_behaviors(&mut self, node_id: NodeId, event: &mut EventState) -> Result<()> {
        let behaviors = self.listeners.get(node_id, &event.event_type);
        for behavior in behaviors {
            if self.event_trace_enabled() {
                let phase = if event.current_target == event.target {
                    "target"
                } else {
                    "bubble"
                };
                let line = format!(
                    "[event] {} target={} current={} phase={} default_prevented={}",
                    event.event_type,
                    self.trace_node_label(event.target),
                    self.trace_node_label(event.current_target),
                    phase,
                    event.default_prevented
                );
                self.push_trace_line(line);
            }
            self.run_behavior(behavior, node_id, event)?;
        }
        Ok(())
    }

    fn trace_event_done(&mut self, event: &EventState) {
        if self.event_trace_enabled() {
            let line = format!(
                "[event] done {} target={} outcome=completed default_prevented={}",
                event.event_type,
                self.trace_node_label(event.target),
                event.default_prevented
            );
            self.push_trace_line(line);
        }
    }
}
