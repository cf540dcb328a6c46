use chrono::Datelike;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::config::{NavIcon, NavLink, PortfolioConfig, Profile, SocialLink};
use crate::host::{self, BrowserHost, Host};
use crate::schedule::{Deferred, Scheduler, TimeoutScheduler};

/// Delay before scrolling, so a collapsing drawer can settle first.
pub const SCROLL_DELAY_MS: u32 = 100;
/// Focus waits one tick for the item to be in the rendered tree.
pub const FOCUS_DELAY_MS: u32 = 0;

#[derive(Properties, PartialEq)]
pub struct NavigationHeaderProps {
    /// Called with the id of the clicked section
    #[prop_or_default]
    pub on_select: Option<Callback<String>>,
    #[prop_or(AttrValue::Static("home"))]
    pub active_section: AttrValue,
    #[prop_or(false)]
    pub mobile_open: bool,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    /// Narrow layout: label-only nav, no identity or social zone
    #[prop_or(false)]
    pub is_mobile: bool,
    #[prop_or_else(default_profile)]
    pub profile: Profile,
    #[prop_or_else(default_links)]
    pub links: Vec<NavLink>,
    #[prop_or_else(default_socials)]
    pub socials: Vec<SocialLink>,
}

fn default_profile() -> Profile {
    PortfolioConfig::bundled().profile.clone()
}

fn default_links() -> Vec<NavLink> {
    PortfolioConfig::bundled().links.clone()
}

fn default_socials() -> Vec<SocialLink> {
    PortfolioConfig::bundled().socials.clone()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Zones {
    pub identity: bool,
    pub navigation: bool,
    pub social: bool,
}

pub fn visible_zones(is_mobile: bool) -> Zones {
    Zones {
        identity: !is_mobile,
        navigation: true,
        social: !is_mobile,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavItemView<'a> {
    pub id: &'a str,
    pub label: &'a str,
    /// `None` on narrow viewports even when the link has an icon
    pub icon: Option<NavIcon>,
    pub active: bool,
}

impl NavItemView<'_> {
    pub fn class_name(&self) -> &'static str {
        if self.active {
            "nav-item active"
        } else {
            "nav-item"
        }
    }
}

pub fn nav_items<'a>(links: &'a [NavLink], active_section: &str, is_mobile: bool) -> Vec<NavItemView<'a>> {
    links
        .iter()
        .map(|link| NavItemView {
            id: &link.id,
            label: &link.label,
            icon: if is_mobile { None } else { link.icon },
            active: link.id == active_section,
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnchorTarget {
    pub target: Option<&'static str>,
    pub rel: Option<&'static str>,
}

/// Web links open in a new context that cannot reach back to this page.
pub fn anchor_target(href: &str) -> AnchorTarget {
    if href.starts_with("http") {
        AnchorTarget {
            target: Some("_blank"),
            rel: Some("noopener noreferrer"),
        }
    } else {
        AnchorTarget { target: None, rel: None }
    }
}

pub fn copyright_line(year: i32, name: &str) -> String {
    format!("© {year} {name}")
}

pub fn avatar_initial(name: &str) -> String {
    name.chars()
        .next()
        .map(String::from)
        .unwrap_or_else(|| "A".to_string())
}

pub fn should_focus_first_item(mobile_open: bool, is_mobile: bool) -> bool {
    mobile_open || !is_mobile
}

/// The `<img>` covers the initial only while it has a source that loads.
pub fn show_avatar_image(avatar_url: &str, load_failed: bool) -> bool {
    !avatar_url.is_empty() && !load_failed
}

/// Immediate half of a selection: notify the owner, then record `#id` in history.
pub fn select_link(id: &str, on_select: Option<&Callback<String>>, host: &dyn Host) {
    log::debug!("section selected: {id}");
    if let Some(cb) = on_select {
        cb.emit(id.to_string());
    }
    if let Err(err) = host.push_fragment(id) {
        log::debug!("history not updated for {id}: {err}");
    }
}

/// Deferred half of a selection. A missing section is not an error.
pub fn scroll_to_section(host: &dyn Host, id: &str) {
    match host.scroll_section_into_view(id) {
        Ok(true) => {}
        Ok(false) => log::debug!("no section tagged {id}"),
        Err(err) => log::debug!("scroll to {id} skipped: {err}"),
    }
}

/// Full click handling: select now, scroll once layout settles.
pub fn activate_link<S, H>(id: &str, on_select: Option<&Callback<String>>, host: H, pending_scroll: &mut Deferred<S>)
where
    S: Scheduler,
    H: Host + 'static,
{
    select_link(id, on_select, &host);
    let target = id.to_string();
    pending_scroll.schedule(SCROLL_DELAY_MS, move || scroll_to_section(&host, &target));
}

/// Queues `focus` for the next tick when the nav is the visible navigation surface.
pub fn schedule_focus<S: Scheduler>(
    scheduler: &S,
    mobile_open: bool,
    is_mobile: bool,
    focus: impl FnOnce() + 'static,
) -> Option<S::Handle> {
    if should_focus_first_item(mobile_open, is_mobile) {
        Some(scheduler.schedule(FOCUS_DELAY_MS, Box::new(focus)))
    } else {
        log::debug!("drawer closed on narrow viewport, focus left alone");
        None
    }
}

#[function_component(NavigationHeader)]
pub fn navigation_header(props: &NavigationHeaderProps) -> Html {
    let first_item_ref = use_node_ref();
    let pending_scroll = use_mut_ref(|| Deferred::new(TimeoutScheduler));
    let avatar_failed = use_state_eq(|| false);

    {
        let first_item_ref = first_item_ref.clone();
        use_effect_with((props.mobile_open, props.is_mobile), move |&(mobile_open, is_mobile)| {
            let pending = schedule_focus(&TimeoutScheduler, mobile_open, is_mobile, move || {
                if let Some(item) = first_item_ref.cast::<HtmlElement>() {
                    host::focus_element(&item);
                }
            });
            // a newer open/viewport change or unmount cancels the focus
            move || drop(pending)
        });
    }

    {
        let pending_scroll = pending_scroll.clone();
        use_effect_with((), move |_| {
            move || {
                pending_scroll.borrow_mut().cancel();
            }
        });
    }

    // a new avatar source gets a fresh chance to load
    {
        let avatar_failed = avatar_failed.clone();
        use_effect_with(props.profile.avatar_url.clone(), move |_| {
            avatar_failed.set(false);
            || ()
        });
    }

    let on_avatar_error = {
        let avatar_failed = avatar_failed.clone();
        Callback::from(move |_: Event| {
            log::debug!("avatar image failed to load, showing initial");
            avatar_failed.set(true);
        })
    };

    let on_item_click = |id: &str| {
        let id = id.to_string();
        let on_select = props.on_select.clone();
        let pending_scroll = pending_scroll.clone();
        Callback::from(move |_: MouseEvent| {
            activate_link(&id, on_select.as_ref(), BrowserHost, &mut *pending_scroll.borrow_mut());
        })
    };

    let on_close = props.on_close.clone().map(|cb| cb.reform(|_: MouseEvent| ()));
    let zones = visible_zones(props.is_mobile);
    let profile = &props.profile;
    let year = chrono::Local::now().year();

    html! {
        <header class={classes!("nav-header", props.is_mobile.then_some("narrow"))} aria-label="Primary navigation">
            if zones.identity {
                <div class="nav-identity">
                    <div class="avatar">
                        <span class="avatar-initial">{avatar_initial(&profile.name)}</span>
                        if show_avatar_image(&profile.avatar_url, *avatar_failed) {
                            <img src={profile.avatar_url.clone()} alt={profile.name.clone()} onerror={on_avatar_error} />
                        }
                    </div>
                    <div class="identity-text">
                        <span class="identity-name">{&profile.name}</span>
                        <span class="identity-role">{&profile.role}</span>
                    </div>
                    <button class="icon-btn close-btn" type="button" aria-label="Close drawer" onclick={on_close}>
                        <Icon icon_id={IconId::LucideX} width={"20"} height={"20"} />
                    </button>
                </div>
                <hr class="divider" />
            }

            <nav class="nav-sections" aria-label="Sections">
                <ul class="nav-list">
                    {
                        nav_items(&props.links, &props.active_section, props.is_mobile).into_iter().enumerate().map(|(index, item)| {
                            let node_ref = if index == 0 { first_item_ref.clone() } else { NodeRef::default() };
                            html! {
                                <li key={item.id.to_string()}>
                                    <button
                                        ref={node_ref}
                                        class={item.class_name()}
                                        type="button"
                                        aria-current={item.active.then_some("page")}
                                        onclick={on_item_click(item.id)}
                                    >
                                        if let Some(icon) = item.icon {
                                            <span class="nav-icon"><Icon icon_id={icon.icon_id()} width={"18"} height={"18"} /></span>
                                        }
                                        <span class="nav-label">{item.label}</span>
                                    </button>
                                </li>
                            }
                        }).collect::<Html>()
                    }
                </ul>
            </nav>

            if zones.social {
                <hr class="divider" />
                <div class="nav-footer">
                    <span class="copyright">{copyright_line(year, &profile.name)}</span>
                    <div class="socials">
                        {
                            props.socials.iter().map(|social| {
                                let AnchorTarget { target, rel } = anchor_target(&social.href);
                                html! {
                                    <a
                                        key={social.id.clone()}
                                        class="icon-btn social-link"
                                        href={social.href.clone()}
                                        target={target}
                                        rel={rel}
                                        aria-label={social.id.clone()}
                                    >
                                        <Icon icon_id={social.icon.icon_id()} width={"18"} height={"18"} />
                                    </a>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            }
        </header>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::error::HostError;
    use crate::schedule::manual::ManualScheduler;

    #[derive(Default)]
    struct RecordingHost {
        sections: Vec<&'static str>,
        fail_history: bool,
        pushed: RefCell<Vec<String>>,
        scrolled: RefCell<Vec<String>>,
    }

    impl Host for RecordingHost {
        fn push_fragment(&self, id: &str) -> Result<(), HostError> {
            if self.fail_history {
                return Err(HostError::History("SecurityError".into()));
            }
            self.pushed.borrow_mut().push(host::fragment_for(id));
            Ok(())
        }

        fn scroll_section_into_view(&self, id: &str) -> Result<bool, HostError> {
            if self.sections.iter().any(|s| *s == id) {
                self.scrolled.borrow_mut().push(id.to_string());
                Ok(true)
            } else {
                Ok(false)
            }
        }
    }

    fn recorder() -> (Callback<String>, Rc<RefCell<Vec<String>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let cb = {
            let seen = seen.clone();
            Callback::from(move |id: String| seen.borrow_mut().push(id))
        };
        (cb, seen)
    }

    #[test]
    fn each_click_emits_its_id_once() {
        let links = &PortfolioConfig::bundled().links;
        for link in links {
            let (cb, seen) = recorder();
            let host = RecordingHost::default();
            select_link(&link.id, Some(&cb), &host);
            assert_eq!(*seen.borrow(), vec![link.id.clone()]);
        }
    }

    #[test]
    fn selecting_pushes_fragment() {
        let host = RecordingHost::default();
        select_link("projects", None, &host);
        assert_eq!(*host.pushed.borrow(), vec!["#projects".to_string()]);
    }

    #[test]
    fn rejected_history_still_notifies_owner() {
        let (cb, seen) = recorder();
        let host = RecordingHost { fail_history: true, ..Default::default() };
        select_link("about", Some(&cb), &host);
        assert_eq!(*seen.borrow(), vec!["about".to_string()]);
        assert!(host.pushed.borrow().is_empty());
    }

    #[test]
    fn scrolling_to_missing_section_is_a_no_op() {
        let host = RecordingHost { sections: vec!["home"], ..Default::default() };
        scroll_to_section(&host, "projects");
        assert!(host.scrolled.borrow().is_empty());

        scroll_to_section(&host, "home");
        assert_eq!(*host.scrolled.borrow(), vec!["home".to_string()]);
    }

    #[test]
    fn zones_follow_viewport_mode() {
        let narrow = visible_zones(true);
        assert!(!narrow.identity && !narrow.social && narrow.navigation);

        let wide = visible_zones(false);
        assert!(wide.identity && wide.social && wide.navigation);
    }

    #[test]
    fn exactly_one_item_is_active() {
        let links = &PortfolioConfig::bundled().links;

        let items = nav_items(links, "about", false);
        let active: Vec<&str> = items.iter().filter(|i| i.active).map(|i| i.id).collect();
        assert_eq!(active, ["about"]);
        assert_eq!(items[1].class_name(), "nav-item active");
        assert_eq!(items[0].class_name(), "nav-item");

        let items = nav_items(links, "contact", false);
        let active: Vec<&str> = items.iter().filter(|i| i.active).map(|i| i.id).collect();
        assert_eq!(active, ["contact"]);

        assert!(nav_items(links, "blog", false).iter().all(|i| !i.active));
    }

    #[test]
    fn icons_hidden_on_narrow_viewports() {
        let links = &PortfolioConfig::bundled().links;
        assert!(nav_items(links, "home", true).iter().all(|i| i.icon.is_none()));
        assert_eq!(nav_items(links, "home", false)[0].icon, Some(NavIcon::Home));
    }

    #[test]
    fn web_links_open_in_new_context() {
        let web = anchor_target("https://github.com/someone");
        assert_eq!(web.target, Some("_blank"));
        assert_eq!(web.rel, Some("noopener noreferrer"));

        let mail = anchor_target("mailto:someone@example.com");
        assert_eq!(mail, AnchorTarget { target: None, rel: None });
    }

    #[test]
    fn focus_rules() {
        // drawer opening on a narrow viewport
        assert!(!should_focus_first_item(false, true));
        assert!(should_focus_first_item(true, true));
        // wide layout is a persistent bar
        assert!(should_focus_first_item(false, false));
        assert!(should_focus_first_item(true, false));
    }

    #[test]
    fn identity_text() {
        assert_eq!(copyright_line(2026, "Ada"), "© 2026 Ada");
        assert_eq!(avatar_initial("Ada"), "A");
        assert_eq!(avatar_initial("Émile"), "É");
        assert_eq!(avatar_initial(""), "A");
    }

    #[test]
    fn second_click_cancels_first_scroll() {
        let scheduler = ManualScheduler::default();
        let host = Rc::new(RecordingHost { sections: vec!["about", "projects"], ..Default::default() });
        let (cb, seen) = recorder();
        let mut pending = Deferred::new(scheduler.clone());

        activate_link("about", Some(&cb), host.clone(), &mut pending);
        activate_link("projects", Some(&cb), host.clone(), &mut pending);

        // both selections are immediate, only the latest scroll survives
        assert_eq!(*seen.borrow(), vec!["about".to_string(), "projects".to_string()]);
        assert_eq!(*host.pushed.borrow(), vec!["#about".to_string(), "#projects".to_string()]);
        assert_eq!(scheduler.pending_delays(), vec![SCROLL_DELAY_MS]);
        assert!(host.scrolled.borrow().is_empty());

        assert_eq!(scheduler.run_all(), 1);
        assert_eq!(*host.scrolled.borrow(), vec!["projects".to_string()]);
    }

    #[test]
    fn unmount_drops_queued_scroll() {
        let scheduler = ManualScheduler::default();
        let host = Rc::new(RecordingHost { sections: vec!["contact"], ..Default::default() });
        let mut pending = Deferred::new(scheduler.clone());

        activate_link("contact", None, host.clone(), &mut pending);
        pending.cancel();

        assert_eq!(scheduler.run_all(), 0);
        assert!(host.scrolled.borrow().is_empty());
    }

    #[test]
    fn opening_drawer_focuses_first_item_on_next_tick() {
        let scheduler = ManualScheduler::default();
        let focused = Rc::new(RefCell::new(0));
        let focus = || {
            let focused = focused.clone();
            move || *focused.borrow_mut() += 1
        };

        // narrow and closed: nothing queued
        let closed = schedule_focus(&scheduler, false, true, focus());
        assert!(closed.is_none());
        assert_eq!(scheduler.run_all(), 0);

        // drawer opens: focus is deferred, not immediate
        drop(closed);
        let open = schedule_focus(&scheduler, true, true, focus());
        assert!(open.is_some());
        assert_eq!(*focused.borrow(), 0);
        assert_eq!(scheduler.pending_delays(), vec![FOCUS_DELAY_MS]);

        assert_eq!(scheduler.run_all(), 1);
        assert_eq!(*focused.borrow(), 1);
    }

    #[test]
    fn closing_before_tick_cancels_focus() {
        let scheduler = ManualScheduler::default();
        let focused = Rc::new(RefCell::new(0));

        let open = {
            let focused = focused.clone();
            schedule_focus(&scheduler, true, true, move || *focused.borrow_mut() += 1)
        };
        // effect cleanup on the next (mobile_open, is_mobile) change
        drop(open);
        let closed = schedule_focus(&scheduler, false, true, || {});
        assert!(closed.is_none());

        assert_eq!(scheduler.run_all(), 0);
        assert_eq!(*focused.borrow(), 0);
    }

    #[test]
    fn avatar_image_only_while_loadable() {
        assert!(show_avatar_image("/me.jpg", false));
        assert!(!show_avatar_image("/me.jpg", true));
        assert!(!show_avatar_image("", false));
    }
}
