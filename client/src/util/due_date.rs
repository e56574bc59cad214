//! Due-date conversions between the wire format and the UI.
//!
//! The server sends ISO 8601 timestamps (`2025-03-01T09:30:00.000Z`). The
//! table shows them in the browser locale; the edit form needs the
//! `datetime-local` shape `YYYY-MM-DDTHH:MM`.

#[cfg(test)]
#[path = "due_date_test.rs"]
mod due_date_test;

/// Length of a `datetime-local` value (`YYYY-MM-DDTHH:MM`).
const INPUT_LEN: usize = 16;

/// Value for a `datetime-local` input: the first 16 characters of `due`.
#[must_use]
pub fn input_value(due: &str) -> String {
    due.chars().take(INPUT_LEN).collect()
}

/// Human-readable due date for the task table.
///
/// In the browser this is `Date.toLocaleString()`; elsewhere (and for
/// timestamps the browser cannot parse) a plain `YYYY-MM-DD HH:MM` form.
#[must_use]
pub fn display(due: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(due));
        if !date.get_time().is_nan() {
            return String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED));
        }
    }
    plain_display(due)
}

fn plain_display(due: &str) -> String {
    input_value(due).replacen('T', " ", 1)
}
