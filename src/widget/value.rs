use crate::widget::Interaction;

impl Interaction<'_> {
    pub(crate) fn input_value(&self) -> String {
        self.surface.input_value(self.id).unwrap_or_default()
    }

    pub(crate) fn capture_committed(&mut self) {
        if self.state.committed_value.is_none() {
            self.state.committed_value = Some(self.input_value());
        }
    }

    pub(crate) fn commit(&mut self, value: String) {
        self.state.committed_value = Some(value);
    }

    pub(crate) fn forget_committed(&mut self) {
        self.state.committed_value = None;
    }

    pub(crate) fn differs_from_committed(&self, value: &str) -> bool {
        self.state.committed_value.as_deref() != Some(value)
    }
}
