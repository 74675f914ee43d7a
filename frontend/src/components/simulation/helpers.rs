//! Small browser utilities for the wizard.

use num_format::{Locale, ToFormattedString};
use web_sys::{File, HtmlInputElement, Url};

/// `input.value` as an integer; blank or garbage reads as 0 and is caught by
/// validation.
pub fn parse_number(value: &str) -> i32 {
    value.trim().parse().unwrap_or(0)
}

/// `1.25 MB`, as shown under each invoice.
pub fn file_size_label(file: &File) -> String {
    format!("{:.2} MB", file.size() / 1024.0 / 1024.0)
}

/// Blob URL for opening a picked file in a new tab.
pub fn object_url(file: &File) -> Option<String> {
    Url::create_object_url_with_blob(file).ok()
}

/// Drains the picked files and resets the input so the same file can be
/// picked again.
pub fn take_files(input: &HtmlInputElement) -> Vec<File> {
    let files = input
        .files()
        .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
        .unwrap_or_default();
    input.set_value("");
    files
}

/// `12 345 Wh/jour` with French digit grouping.
pub fn energy_label(watt_hours: i64) -> String {
    format!("{} Wh/jour", watt_hours.to_formatted_string(&Locale::fr))
}

/// Current instant as an ISO-8601 string (`2025-03-04T09:30:00.000Z`).
pub fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        window.open_with_url_and_target(url, "_blank").ok();
    }
}
