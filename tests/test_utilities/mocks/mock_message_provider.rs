use pom_validator::prelude::*;

/// Mock MessageProvider echoing the message id as the header
pub struct MockMessageProvider;

impl MessageProvider for MockMessageProvider {
    fn message(&self, key: MessageKey) -> String {
        format!("[{}]", key.id())
    }
}
