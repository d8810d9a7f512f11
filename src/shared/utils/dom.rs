//! Small DOM helpers used by the components
//!
//! Browser builds talk to web_sys; server builds (SSR) get no-op versions
//! so the components render the same markup on both sides.

use crate::domain::models::SelectedFile;

#[cfg(target_arch = "wasm32")]
mod imp {
    use wasm_bindgen::JsCast;

    use crate::domain::models::SelectedFile;

    fn html_element(id: &str) -> Option<web_sys::HtmlElement> {
        web_sys::window()?
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()
    }

    pub fn focus_element(id: &str) {
        if let Some(el) = html_element(id) {
            let _ = el.focus();
        }
    }

    pub fn click_element(id: &str) {
        if let Some(el) = html_element(id) {
            el.click();
        }
    }

    pub fn take_selected_file(id: &str) -> Option<SelectedFile> {
        let input = html_element(id)?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
        let file = input.files().and_then(|files| files.get(0));
        input.set_value("");
        file.map(SelectedFile::from_web_file)
    }

    pub fn measure_scroll_height(id: &str) -> Option<u32> {
        let el = html_element(id)?;
        let style = el.style();
        let previous = style.get_property_value("height").unwrap_or_default();
        let _ = style.set_property("height", "auto");
        let height = el.scroll_height();
        let _ = style.set_property("height", &previous);
        u32::try_from(height).ok()
    }

    pub fn viewport_width() -> Option<f64> {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use crate::domain::models::SelectedFile;

    pub fn focus_element(_id: &str) {}

    pub fn click_element(_id: &str) {}

    pub fn take_selected_file(_id: &str) -> Option<SelectedFile> {
        None
    }

    pub fn measure_scroll_height(_id: &str) -> Option<u32> {
        None
    }

    pub fn viewport_width() -> Option<f64> {
        None
    }
}

/// Move keyboard focus to the element with this id
pub fn focus_element(id: &str) {
    imp::focus_element(id)
}

/// Open the element's default action (used to open the native file dialog)
pub fn click_element(id: &str) {
    imp::click_element(id)
}

/// Read the first file of a file input and clear the input's value
pub fn take_selected_file(id: &str) -> Option<SelectedFile> {
    imp::take_selected_file(id)
}

/// Natural content height of a textarea (measured at `height: auto`, then restored)
pub fn measure_scroll_height(id: &str) -> Option<u32> {
    imp::measure_scroll_height(id)
}

/// Current window width in CSS pixels
pub fn viewport_width() -> Option<f64> {
    imp::viewport_width()
}
