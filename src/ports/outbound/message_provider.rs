use crate::manifest_validation::domain::MessageKey;

/// MessageProvider port mapping an error kind to a human-readable header
/// in the caller's active locale
pub trait MessageProvider {
    fn message(&self, key: MessageKey) -> String;
}
