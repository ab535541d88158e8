//! Locale filtering for already-fetched content.

use crate::content::item::ContentItem;
use crate::locale::{LocaleSettings, SupportedLocale};

/// The frontend locale an item belongs to.
///
/// Untagged items belong to the default locale; unknown tags belong to none.
pub fn effective_locale(settings: &LocaleSettings, item: &ContentItem) -> Option<SupportedLocale> {
    match item.locale.as_deref() {
        Some(tag) => settings.cms_locale(tag),
        None => Some(settings.default_locale),
    }
}

/// Keep the items for `current`, preserving their order.
pub fn filter_by_locale(
    settings: &LocaleSettings,
    items: Vec<ContentItem>,
    current: SupportedLocale,
) -> Vec<ContentItem> {
    items
        .into_iter()
        .filter(|item| effective_locale(settings, item) == Some(current))
        .collect()
}
