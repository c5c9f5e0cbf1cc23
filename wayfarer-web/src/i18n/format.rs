use chrono::NaiveDate;

#[cfg(target_arch = "wasm32")]
use crate::i18n::bundle::with_bundle;
#[cfg(target_arch = "wasm32")]
use js_sys::{Date, Intl, Object, Reflect};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
fn locale_array(lang: &str) -> js_sys::Array {
    let arr = js_sys::Array::new();
    arr.push(&JsValue::from_str(lang));
    arr
}

/// Long-form date such as "June 1, 2024".
#[must_use]
pub fn fmt_date_long(date: NaiveDate) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        with_bundle(|bundle| {
            let iso = date.format("%Y-%m-%dT00:00:00").to_string();
            let js_date = Date::new(&JsValue::from_str(&iso));
            let opts = Object::new();
            for (k, v) in [("year", "numeric"), ("month", "long"), ("day", "numeric")] {
                let _ = Reflect::set(&opts, &JsValue::from_str(k), &JsValue::from_str(v));
            }
            js_date
                .to_locale_date_string(&bundle.lang, &opts)
                .as_string()
                .unwrap_or_else(|| date.format("%B %-d, %Y").to_string())
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        date.format("%B %-d, %Y").to_string()
    }
}

/// Format whole rupees as INR currency
#[must_use]
pub fn fmt_inr(rupees: u64) -> String {
    fn fallback_inr(rupees: u64) -> String {
        format!("\u{20b9}{rupees}")
    }

    #[cfg(target_arch = "wasm32")]
    {
        let Ok(amount) = u32::try_from(rupees) else {
            return fallback_inr(rupees);
        };
        with_bundle(|bundle| {
            let opts = Object::new();
            let _ = Reflect::set(
                &opts,
                &JsValue::from_str("style"),
                &JsValue::from_str("currency"),
            );
            let _ = Reflect::set(
                &opts,
                &JsValue::from_str("currency"),
                &JsValue::from_str("INR"),
            );
            let _ = Reflect::set(
                &opts,
                &JsValue::from_str("maximumFractionDigits"),
                &JsValue::from_f64(0.0),
            );
            let nf = Intl::NumberFormat::new(&locale_array(&bundle.lang), &opts);
            nf.format()
                .call1(&nf, &JsValue::from_f64(f64::from(amount)))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| fallback_inr(rupees))
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        fallback_inr(rupees)
    }
}
