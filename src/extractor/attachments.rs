use std::collections::HashMap;

/// Maps sticker URIs to the short text they stand for
///
/// The table is injected at construction (normally from
/// [`DialogueConfig::sticker_map`](crate::config::DialogueConfig::sticker_map)) and never
/// changes afterwards.
#[derive(Debug, Clone, Default)]
pub struct AttachmentResolver {
    substitutes: HashMap<String, String>,
}

impl AttachmentResolver {
    pub fn new(substitutes: HashMap<String, String>) -> Self {
        Self { substitutes }
    }

    /// Text substitute for a known attachment, `None` for anything else
    pub fn resolve(&self, uri: &str) -> Option<&str> {
        self.substitutes.get(uri).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.substitutes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.substitutes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_sticker_map;

    #[test]
    fn test_resolves_default_stickers() {
        let resolver = AttachmentResolver::new(default_sticker_map());
        assert_eq!(resolver.len(), 10);
        assert_eq!(
            resolver.resolve(
                "messages/stickers_used/851586_126361877548609_1351776047_n_126361874215276.png"
            ),
            Some("🙂")
        );
        assert_eq!(
            resolver.resolve(
                "messages/stickers_used/10173489_298592853654247_1888832205_n_298592850320914.png"
            ),
            Some("YAY!")
        );
    }

    #[test]
    fn test_unknown_reference_has_no_substitute() {
        let resolver = AttachmentResolver::new(default_sticker_map());
        assert_eq!(resolver.resolve("messages/stickers_used/unknown.png"), None);
        assert_eq!(resolver.resolve(""), None);
    }

    #[test]
    fn test_empty_table() {
        let resolver = AttachmentResolver::default();
        assert!(resolver.is_empty());
        assert_eq!(
            resolver.resolve(
                "messages/stickers_used/851586_126361877548609_1351776047_n_126361874215276.png"
            ),
            None
        );
    }
}
