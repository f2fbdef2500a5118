use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom::{self, target_within};
use crate::menu::{ClickTarget, MenuAction, MenuState};

const NAV_LINKS: [(&str, &str); 3] = [
    ("Articles", "#articles"),
    ("Gallery", "#gallery"),
    ("Features", "#features"),
];

const MEGA_LINKS: [[(&str, &str); 5]; 2] = [
    [
        ("Testimonials", "#testimonials"),
        ("Team Members", "#team"),
        ("Services", "#services"),
        ("Our Skills", "#our-skills"),
        ("How It Works", "#work-steps"),
    ],
    [
        ("Events", "#events"),
        ("Pricing Plans", "#pricing"),
        ("Top Videos", "#videos"),
        ("Stats", "#stats"),
        ("Contact", "#footer"),
    ],
];

fn event_element(e: &Event) -> Option<Element> {
    e.target().and_then(|target| target.dyn_into::<Element>().ok())
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu = use_reducer(MenuState::default);

    // Clicks anywhere on the page may dismiss the open menus.
    {
        let dispatcher = menu.dispatcher();
        use_event_with_window("click", move |e: MouseEvent| {
            let target = event_element(&e);
            let target = target.as_ref();
            dispatcher.dispatch(MenuAction::DocumentClicked(ClickTarget {
                in_nav: target_within(target, ".main-nav"),
                on_mobile_toggle: target_within(target, ".mobile-toggle"),
                in_mega_menu: target_within(target, ".mega-menu"),
                on_mega_trigger: target_within(target, ".mega-trigger"),
            }));
        });
    }

    {
        let dispatcher = menu.dispatcher();
        use_event_with_window("resize", move |_: Event| {
            dispatcher.dispatch(MenuAction::Resized);
        });
    }

    let toggle_mobile = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(MenuAction::ToggleMobile))
    };

    let on_nav_link = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(MenuAction::NavLinkClicked {
                viewport_width: dom::viewport_width(),
            })
        })
    };

    let toggle_mega = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation(); // keep the page click handler from closing it again
            dispatcher.dispatch(MenuAction::ToggleMega);
        })
    };

    // Links inside the mega-menu navigate normally, but close the menus first.
    let on_mega_click = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |e: MouseEvent| {
            let target = event_element(&e);
            if target_within(target.as_ref(), "a") {
                dispatcher.dispatch(MenuAction::MegaLinkClicked {
                    viewport_width: dom::viewport_width(),
                });
            }
        })
    };

    html! {
        <header class={menu.header_class()}>
            <div class="container">
                <a href="#" class="logo">{"Lumen Studio"}</a>
                <button class="mobile-toggle" aria-label="Toggle navigation" onclick={toggle_mobile}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul class="main-nav">
                    {
                        for NAV_LINKS.iter().map(|(label, href)| html! {
                            <li><a href={*href} onclick={on_nav_link.clone()}>{*label}</a></li>
                        })
                    }
                    <li class={menu.mega_item_class()}>
                        <a href="#" class="mega-trigger" onclick={toggle_mega}>{"Other Links"}</a>
                        <div class="mega-menu" onclick={on_mega_click}>
                            <div class="image">
                                <img src="/assets/megamenu.png" alt="" />
                            </div>
                            {
                                for MEGA_LINKS.iter().map(|column| html! {
                                    <ul class="links">
                                        {
                                            for column.iter().map(|(label, href)| html! {
                                                <li><a href={*href}>{*label}</a></li>
                                            })
                                        }
                                    </ul>
                                })
                            }
                        </div>
                    </li>
                </ul>
            </div>
        </header>
    }
}
