use crate::core::ItemId;

/// What a pointer event landed on, resolved once by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// The component root frame.
    Root,
    /// The area holding chips and the text field.
    ChipContainer,
    TextInput,
    Item(ItemId),
    /// A chip's removal control.
    ChipRemove(ItemId),
    /// Anywhere outside every component.
    Outside,
}

impl Target {
    /// Targets that behave like a click on the text field.
    pub fn opens_search(&self) -> bool {
        matches!(self, Self::Root | Self::ChipContainer | Self::TextInput)
    }
}
