//! Inline SVG icons (outline style, 24x24 viewBox)

use dioxus::prelude::*;

#[component]
fn OutlineIcon(class: String, children: Element) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.5",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {children}
        }
    }
}

#[component]
pub fn ChatBubbleIcon(#[props(default)] class: String) -> Element {
    rsx! {
        OutlineIcon { class,
            path { d: "M2.25 12.76c0 1.6 1.123 2.994 2.707 3.227 1.087.16 2.185.283 3.293.369V21l4.076-4.076a1.526 1.526 0 0 1 1.037-.443 48.282 48.282 0 0 0 5.68-.494c1.584-.233 2.707-1.626 2.707-3.228V6.741c0-1.602-1.123-2.995-2.707-3.228A48.394 48.394 0 0 0 12 3c-2.392 0-4.744.175-7.043.513C3.373 3.746 2.25 5.14 2.25 6.741v6.018Z" }
        }
    }
}

#[component]
pub fn CloseIcon(#[props(default)] class: String) -> Element {
    rsx! {
        OutlineIcon { class,
            path { d: "M6 18 18 6M6 6l12 12" }
        }
    }
}

#[component]
pub fn PlusCircleIcon(#[props(default)] class: String) -> Element {
    rsx! {
        OutlineIcon { class,
            path { d: "M12 9v6m3-3H9m12 0a9 9 0 1 1-18 0 9 9 0 0 1 18 0Z" }
        }
    }
}

#[component]
pub fn NewChatIcon(#[props(default)] class: String) -> Element {
    rsx! {
        OutlineIcon { class,
            path { d: "M14 3H5a2 2 0 0 0-2 2v14l4-4h12a2 2 0 0 0 2-2v-4" }
            path { d: "M19 3v6M16 6h6" }
        }
    }
}

#[component]
pub fn SendIcon(#[props(default)] class: String) -> Element {
    rsx! {
        OutlineIcon { class,
            path { d: "M6 12 3.269 3.125A59.769 59.769 0 0 1 21.485 12 59.768 59.768 0 0 1 3.27 20.875L5.999 12Zm0 0h7.5" }
        }
    }
}

#[component]
pub fn UploadIcon(#[props(default)] class: String) -> Element {
    rsx! {
        OutlineIcon { class,
            path { d: "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" }
            polyline { points: "17 8 12 3 7 8" }
            line { x1: "12", y1: "3", x2: "12", y2: "15" }
        }
    }
}

#[component]
pub fn EmojiIcon(#[props(default)] class: String) -> Element {
    rsx! {
        OutlineIcon { class,
            circle { cx: "12", cy: "12", r: "9" }
            path { d: "M8.5 14.5a4.5 4.5 0 0 0 7 0" }
            line { x1: "9", y1: "9.5", x2: "9.01", y2: "9.5" }
            line { x1: "15", y1: "9.5", x2: "15.01", y2: "9.5" }
        }
    }
}
