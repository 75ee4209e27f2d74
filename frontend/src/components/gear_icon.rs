use leptos::*;
use tailwind_fuse::*;

const COG_OUTLINE: &str = "M10.325 4.317c.426-1.756 2.924-1.756 3.35 0a1.724 1.724 0 002.573 1.066c1.543-.94 3.31.826 2.37 2.37a1.724 1.724 0 001.065 2.572c1.756.426 1.756 2.924 0 3.35a1.724 1.724 0 00-1.066 2.573c.94 1.543-.826 3.31-2.37 2.37a1.724 1.724 0 00-2.572 1.065c-.426 1.756-2.924 1.756-3.35 0a1.724 1.724 0 00-2.573-1.066c-1.543.94-3.31-.826-2.37-2.37a1.724 1.724 0 00-1.065-2.572c-1.756-.426-1.756-2.924 0-3.35a1.724 1.724 0 001.066-2.573c-.94-1.543.826-3.31 2.37-2.37.996.608 2.296.07 2.572-1.065z";
const COG_HUB: &str = "M15 12a3 3 0 11-6 0 3 3 0 016 0z";

/// Outlined gear, drawn with `currentColor`
#[component]
pub fn GearIcon(#[prop(into, default = "".into())] class: String) -> impl IntoView {
    view! {
        <svg
            class=tw_join!("shrink-0", class)
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            aria-hidden="true"
        >
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="1.5"
                d=COG_OUTLINE
            ></path>
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="1.5" d=COG_HUB></path>
        </svg>
    }
}
