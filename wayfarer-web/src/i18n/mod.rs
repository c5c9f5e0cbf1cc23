mod bundle;
mod format;
mod locales;
mod render;

pub use bundle::{current_lang, set_lang};
pub use format::{fmt_date_long, fmt_inr};
pub use locales::{LocaleMeta, locales};
pub use render::{t, tr, tr_count};
