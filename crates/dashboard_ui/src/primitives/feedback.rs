use super::*;

/// Classes for the invisible hit-area overlay: at least 2.75rem (44px)
/// square, centered over the content, removed on fine pointers.
pub(crate) const TOUCH_TARGET_CLASS: &str = "absolute left-1/2 top-1/2 size-[max(100%,2.75rem)] \
-translate-x-1/2 -translate-y-1/2 [@media(pointer:fine)]:hidden";

const SPINNER_CLASS: &str = "size-4 animate-spin";

#[component]
/// Indeterminate spinner shown while a control has pending work.
pub fn LoadingSpinner(
    /// Class override appended after the spinner's own classes.
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    view! {
        <svg
            class=cx(&[Some(SPINNER_CLASS), class.as_deref()])
            viewBox="0 0 24 24"
            fill="none"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="spinner"
        >
            <circle
                class="opacity-25"
                cx="12"
                cy="12"
                r="10"
                stroke="currentColor"
                stroke-width="4"
            ></circle>
            <path
                class="opacity-75"
                fill="currentColor"
                d="M4 12a8 8 0 0 1 8-8v4a4 4 0 0 0-4 4H4z"
            ></path>
        </svg>
    }
}

#[component]
/// Expands the hit area of its children to at least 44×44px on touch devices.
pub fn TouchTarget(children: Children) -> impl IntoView {
    view! {
        <>
            {children()}
            <span
                class=TOUCH_TARGET_CLASS
                aria-hidden="true"
                data-ui-slot="touch-target"
            ></span>
        </>
    }
}
