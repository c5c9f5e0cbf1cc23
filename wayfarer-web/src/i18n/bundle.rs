use crate::i18n::locales::{is_supported, load_translations};
use serde_json::Value;
use std::cell::RefCell;

#[cfg(all(not(test), target_arch = "wasm32"))]
const LOCALE_STORAGE_KEY: &str = "wayfarer.locale";

pub(crate) struct I18nBundle {
    pub(crate) lang: String,
    pub(crate) translations: Value,
    pub(crate) fallback: Value,
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    if !is_supported(lang) {
        return None;
    }
    let fallback = load_translations("en")?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

fn fallback_bundle() -> I18nBundle {
    let fallback = load_translations("en").unwrap_or(Value::Object(serde_json::Map::new()));

    I18nBundle {
        lang: "en".to_string(),
        translations: fallback.clone(),
        fallback,
    }
}

fn saved_lang() -> String {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(LOCALE_STORAGE_KEY).ok().flatten())
            .unwrap_or_else(|| "en".to_string())
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        "en".to_string()
    }
}

thread_local! {
    pub(super) static CURRENT: RefCell<I18nBundle> = RefCell::new({
        let initial = saved_lang();
        build_bundle(&initial).unwrap_or_else(|| build_bundle("en").unwrap_or_else(fallback_bundle))
    });
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

fn replace_bundle(bundle: I18nBundle) {
    CURRENT.with(|cell| cell.replace(bundle));
}

/// Set the current language for internationalization
///
/// Unsupported codes are ignored. In the browser the `<html lang>` attribute
/// is updated and the choice persisted to localStorage.
pub fn set_lang(lang: &str) {
    if let Some(bundle) = build_bundle(lang) {
        replace_bundle(bundle);
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(el) = crate::dom::document().and_then(|doc| doc.document_element()) {
                let _ = el.set_attribute("lang", lang);
            }
            #[cfg(not(test))]
            {
                if let Some(storage) =
                    web_sys::window().and_then(|win| win.local_storage().ok().flatten())
                {
                    let _ = storage.set_item(LOCALE_STORAGE_KEY, lang);
                }
            }
        }
        log::debug!("locale set to {lang}");
    }
}

/// Get the current active language code
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_bundle_loads_requested_locale() {
        let bundle = build_bundle("hi").expect("bundle should load");
        assert_eq!(bundle.lang, "hi");
        assert!(bundle.translations.is_object());
        assert!(bundle.fallback.is_object());
        assert!(build_bundle("xx").is_none());
    }

    #[test]
    fn fallback_bundle_defaults_to_en() {
        let bundle = fallback_bundle();
        assert_eq!(bundle.lang, "en");
        assert!(bundle.translations.is_object());
    }

    #[test]
    fn unsupported_language_keeps_current() {
        set_lang("en");
        set_lang("xx");
        assert_eq!(current_lang(), "en");
    }
}
