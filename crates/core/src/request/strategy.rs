use std::collections::HashMap;
use std::str::FromStr;
use std::sync::OnceLock;

use rust_decimal::Decimal;

use super::event::SlotMap;
use super::intents::{
    BakeryDepartmentIntentLoader, GreetingsIntentLoader, MilkDepartmentIntentLoader,
    VegetableDepartmentIntentLoader,
};
use super::model::LexRequest;

/// Copies the slots of one intent onto a [`LexRequest`].
///
/// Implementations hold no per-call state and must leave `slots` untouched. A slot that is
/// missing or empty leaves the matching request field unset.
pub trait IntentLoader: Send + Sync {
    fn intent_name(&self) -> &'static str;
    fn slot_keys(&self) -> &'static [&'static str];
    fn load(&self, request: &mut LexRequest, slots: Option<&SlotMap>);
}

/// Fallback for intents nobody registered a loader for.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnsupportedIntentLoader;

impl IntentLoader for UnsupportedIntentLoader {
    fn intent_name(&self) -> &'static str {
        "Unsupported"
    }

    fn slot_keys(&self) -> &'static [&'static str] {
        &[]
    }

    fn load(&self, _request: &mut LexRequest, _slots: Option<&SlotMap>) {}
}

#[derive(Default)]
pub struct IntentLoaderRegistry {
    loaders: HashMap<&'static str, Box<dyn IntentLoader>>,
    unsupported: UnsupportedIntentLoader,
}

impl IntentLoaderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry with the shipped intents, built on first use.
    pub fn shared() -> &'static Self {
        static SHARED: OnceLock<IntentLoaderRegistry> = OnceLock::new();
        SHARED.get_or_init(default_registry)
    }

    pub fn register<L>(&mut self, loader: L)
    where
        L: IntentLoader + 'static,
    {
        self.loaders.insert(loader.intent_name(), Box::new(loader));
    }

    pub fn resolve(&self, intent_name: Option<&str>) -> &dyn IntentLoader {
        match intent_name.and_then(|name| self.loaders.get(name)) {
            Some(loader) => loader.as_ref(),
            None => &self.unsupported,
        }
    }

    pub fn is_supported(&self, intent_name: &str) -> bool {
        self.loaders.contains_key(intent_name)
    }

    pub fn intent_names(&self) -> Vec<&'static str> {
        let mut names = self.loaders.keys().copied().collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    pub fn loader_count(&self) -> usize {
        self.loaders.len()
    }
}

pub fn default_registry() -> IntentLoaderRegistry {
    let mut registry = IntentLoaderRegistry::new();
    registry.register(GreetingsIntentLoader);
    registry.register(BakeryDepartmentIntentLoader);
    registry.register(MilkDepartmentIntentLoader);
    registry.register(VegetableDepartmentIntentLoader);
    registry
}

/// Slot value with surrounding whitespace trimmed; blank values count as unset.
pub(crate) fn slot_text(slots: Option<&SlotMap>, key: &str) -> Option<String> {
    let value = slots?.get(key)?.as_deref()?.trim();
    if value.is_empty() {
        return None;
    }
    Some(value.to_owned())
}

/// Numeric slot value. A trailing `%` is accepted ("1.5%" reads as 1.5).
pub(crate) fn slot_decimal(slots: Option<&SlotMap>, key: &str) -> Option<Decimal> {
    let value = slot_text(slots, key)?;
    Decimal::from_str(value.trim_end_matches('%').trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::{
        default_registry, slot_decimal, slot_text, IntentLoader, IntentLoaderRegistry, SlotMap,
        UnsupportedIntentLoader,
    };
    use crate::request::model::LexRequest;

    fn slots(entries: &[(&str, Option<&str>)]) -> SlotMap {
        entries.iter().map(|(key, value)| ((*key).to_owned(), value.map(str::to_owned))).collect()
    }

    #[test]
    fn default_registry_knows_shipped_intents() {
        let registry = default_registry();

        assert_eq!(registry.loader_count(), 4);
        assert_eq!(
            registry.intent_names(),
            vec!["BakeryDepartment", "Greetings", "MilkDepartment", "VegetableDepartment"]
        );
        assert_eq!(registry.resolve(Some("Greetings")).intent_name(), "Greetings");
    }

    #[test]
    fn unknown_or_missing_intent_resolves_to_unsupported_loader() {
        let registry = default_registry();

        assert_eq!(registry.resolve(Some("Unknown")).intent_name(), "Unsupported");
        assert_eq!(registry.resolve(Some("greetings")).intent_name(), "Unsupported");
        assert_eq!(registry.resolve(None).intent_name(), "Unsupported");
        assert!(!registry.is_supported("Unknown"));
    }

    #[test]
    fn unsupported_loader_leaves_request_untouched() {
        let mut request = LexRequest::default();
        let slots = slots(&[("FirstName", Some("Ann")), ("Amount", Some("3"))]);

        UnsupportedIntentLoader.load(&mut request, Some(&slots));

        assert_eq!(request, LexRequest::default());
    }

    #[test]
    fn registering_replaces_loader_with_same_name() {
        struct Override;

        impl IntentLoader for Override {
            fn intent_name(&self) -> &'static str {
                "Greetings"
            }

            fn slot_keys(&self) -> &'static [&'static str] {
                &["Nickname"]
            }

            fn load(&self, request: &mut LexRequest, slots: Option<&SlotMap>) {
                request.first_name = slot_text(slots, "Nickname");
            }
        }

        let mut registry = default_registry();
        registry.register(Override);

        assert_eq!(registry.loader_count(), 4);
        assert_eq!(registry.resolve(Some("Greetings")).slot_keys(), &["Nickname"]);
    }

    #[test]
    fn shared_registry_is_initialized_once() {
        let first = IntentLoaderRegistry::shared() as *const IntentLoaderRegistry;
        let second = IntentLoaderRegistry::shared() as *const IntentLoaderRegistry;
        assert_eq!(first, second);
    }

    #[test]
    fn slot_helpers_skip_missing_blank_and_unparseable_values() {
        let slots = slots(&[
            ("Product", Some("  rye bread ")),
            ("Blank", Some("   ")),
            ("Null", None),
            ("Amount", Some("2.5")),
            ("Fat", Some("3.2%")),
            ("Words", Some("a couple")),
        ]);

        assert_eq!(slot_text(Some(&slots), "Product").as_deref(), Some("rye bread"));
        assert_eq!(slot_text(Some(&slots), "Blank"), None);
        assert_eq!(slot_text(Some(&slots), "Null"), None);
        assert_eq!(slot_text(Some(&slots), "Missing"), None);
        assert_eq!(slot_text(None, "Product"), None);
        assert_eq!(slot_decimal(Some(&slots), "Amount").map(|d| d.to_string()).as_deref(), Some("2.5"));
        assert_eq!(slot_decimal(Some(&slots), "Fat").map(|d| d.to_string()).as_deref(), Some("3.2"));
        assert_eq!(slot_decimal(Some(&slots), "Words"), None);
    }
}
