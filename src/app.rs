use gloo::events::EventListener;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::components::NavigationHeader;
use crate::config::PortfolioConfig;
use crate::host;
use crate::pages;

/// Section named by the URL fragment, if it is one we render.
fn section_for_hash(config: &PortfolioConfig, hash: Option<&str>) -> Option<String> {
    hash.and_then(host::section_from_hash)
        .filter(|id| config.has_link(id))
        .map(str::to_string)
}

/// Also applied on back/forward, so an unhashed entry falls back like a fresh load.
fn initial_active_section(config: &PortfolioConfig, hash: Option<&str>) -> String {
    section_for_hash(config, hash).unwrap_or_else(|| config.initial_section())
}

#[function_component(App)]
pub fn app() -> Html {
    let config = PortfolioConfig::bundled();
    let active_section = use_state_eq(|| initial_active_section(config, host::current_hash().as_deref()));
    let is_mobile = use_state_eq(host::viewport_is_narrow);
    let mobile_open = use_state_eq(|| false);

    {
        let is_mobile = is_mobile.clone();
        let mobile_open = mobile_open.clone();
        let active_section = active_section.clone();
        use_effect_with((), move |_| {
            let listeners = web_sys::window().map(|window| {
                let on_resize = EventListener::new(&window, "resize", move |_| {
                    let narrow = host::viewport_is_narrow();
                    is_mobile.set(narrow);
                    if !narrow {
                        mobile_open.set(false);
                    }
                });
                // back/forward between fragments pushed by the header
                let on_popstate = EventListener::new(&window, "popstate", move |_| {
                    let id = initial_active_section(config, host::current_hash().as_deref());
                    log::debug!("history moved to {id}");
                    active_section.set(id);
                });
                (on_resize, on_popstate)
            });
            move || drop(listeners)
        });
    }

    let on_select = {
        let active_section = active_section.clone();
        let mobile_open = mobile_open.clone();
        Callback::from(move |id: String| {
            active_section.set(id);
            mobile_open.set(false);
        })
    };

    let on_close = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |_: ()| mobile_open.set(false))
    };

    let on_toggle_menu = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |_: MouseEvent| mobile_open.set(!*mobile_open))
    };

    html! {
        <>
            <div class={classes!("nav-shell", (*mobile_open).then_some("open"))}>
                if *is_mobile {
                    <button
                        class="icon-btn menu-btn"
                        type="button"
                        aria-label="Toggle navigation"
                        aria-expanded={(*mobile_open).to_string()}
                        onclick={on_toggle_menu}
                    >
                        <Icon icon_id={IconId::LucideMenu} width={"24"} height={"24"} />
                    </button>
                }
                <NavigationHeader
                    on_select={on_select}
                    active_section={AttrValue::from((*active_section).clone())}
                    mobile_open={*mobile_open}
                    on_close={on_close}
                    is_mobile={*is_mobile}
                    profile={config.profile.clone()}
                    links={config.links.clone()}
                    socials={config.socials.clone()}
                />
            </div>
            <main class="container">
                <pages::home::HomeSection profile={config.profile.clone()} />
                <pages::about::AboutSection />
                <pages::projects::ProjectsSection />
                <pages::contact::ContactSection socials={config.socials.clone()} />
            </main>
        </>
    }
}
