use crate::model::Property;

pub mod favourite;
pub mod search;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// UI-agnostic result of a command: the data to render plus status text.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Search results, in dataset order.
    pub listed: Vec<Property>,
    /// Favourites snapshot, in insertion order.
    pub favourites: Vec<Property>,
    /// Single property for detail views.
    pub property: Option<Property>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, properties: Vec<Property>) -> Self {
        self.listed = properties;
        self
    }

    pub fn with_favourites(mut self, properties: Vec<Property>) -> Self {
        self.favourites = properties;
        self
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.property = Some(property);
        self
    }
}
