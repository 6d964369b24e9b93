use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::logo::Logo;
use crate::components::ticket_barcode::TicketBarcode;
use crate::config::{whatsapp_link, WhatsAppIntent};
use crate::Route;

/// Vertical scroll offset past which the header switches to its raised look.
pub const SCROLL_THRESHOLD: f64 = 20.0;

pub const NAV_LINKS: [(Route, &str); 5] = [
    (Route::Home, "Home"),
    (Route::HowItWorks, "How It Works"),
    (Route::Pricing, "Pricing"),
    (Route::Testimonials, "Testimonials"),
    (Route::About, "About"),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
}

pub enum NavAction {
    ToggleMenu,
    CloseMenu,
    Scroll(f64),
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            NavAction::ToggleMenu => NavState { menu_open: !self.menu_open, ..*self },
            NavAction::CloseMenu => NavState { menu_open: false, ..*self },
            NavAction::Scroll(offset) => NavState { scrolled: offset > SCROLL_THRESHOLD, ..*self },
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

fn link_class(route: &Route, current: Option<&Route>) -> Classes {
    classes!("nav-link", (current == Some(route)).then(|| "active"))
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let state = use_reducer_eq(NavState::default);
    let current = use_route::<Route>();

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let observed = window.clone();
                    let on_scroll = Closure::<dyn FnMut()>::new(move || {
                        let offset = observed.scroll_y().unwrap_or(0.0);
                        dispatcher.dispatch(NavAction::Scroll(offset));
                    });
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    );
                    (window, on_scroll)
                });

                move || {
                    if let Some((window, on_scroll)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            debug!("Mobile menu toggled");
            state.dispatch(NavAction::ToggleMenu);
        })
    };

    let close_menu = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.dispatch(NavAction::CloseMenu);
        })
    };

    let get_started = whatsapp_link(WhatsAppIntent::Default);
    let menu_open = state.menu_open;

    html! {
        <nav class={classes!("top-nav", "glass-strong", state.scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: sticky;
                        top: 0;
                        z-index: 50;
                        transition: all 0.5s ease;
                        animation: nav-drop 0.8s cubic-bezier(0.16, 1, 0.3, 1);
                    }
                    .top-nav.scrolled {
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
                    }
                    @keyframes nav-drop {
                        from { transform: translateY(-100px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .nav-content {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 1rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-home {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .nav-link {
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #6b7280;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover, .nav-link.active {
                        color: #FF6B6B;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 6px;
                        padding: 0.5rem;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        background: #FF6B6B;
                        transition: transform 0.3s ease, opacity 0.3s ease;
                    }
                    .burger-menu.open span:nth-child(1) { transform: translateY(8px) rotate(45deg); }
                    .burger-menu.open span:nth-child(2) { opacity: 0; }
                    .burger-menu.open span:nth-child(3) { transform: translateY(-8px) rotate(-45deg); }
                    .mobile-menu {
                        display: none;
                        padding: 1rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.4);
                    }
                    .mobile-menu .nav-link {
                        display: block;
                        padding: 0.5rem 0;
                    }
                    .mobile-menu .cta-button {
                        margin-top: 0.75rem;
                    }
                    @media (max-width: 767px) {
                        .nav-right { display: none; }
                        .burger-menu { display: flex; }
                        .mobile-menu { display: block; }
                        .nav-home .barcode-strip { display: none; }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-home">
                    <Logo />
                    <TicketBarcode slim=true />
                </Link<Route>>

                <div class="nav-right">
                    { for NAV_LINKS.iter().map(|(route, label)| html! {
                        <Link<Route> to={route.clone()} classes={link_class(route, current.as_ref())}>
                            {*label}
                        </Link<Route>>
                    }) }
                    <a href={get_started.clone()} class="cta-button">{"Get Started"}</a>
                </div>

                <button
                    class={classes!("burger-menu", menu_open.then(|| "open"))}
                    onclick={toggle_menu}
                    aria-label="Toggle menu"
                    aria-expanded={menu_open.to_string()}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            if menu_open {
                <div class="mobile-menu glass-strong">
                    { for NAV_LINKS.iter().map(|(route, label)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={route.clone()} classes={link_class(route, current.as_ref())}>
                                {*label}
                            </Link<Route>>
                        </div>
                    }) }
                    <a href={get_started} class="cta-button block" onclick={close_menu.clone()}>
                        {"Get Started"}
                    </a>
                </div>
            }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{count, render_at};

    fn apply(state: NavState, action: NavAction) -> NavState {
        *Rc::new(state).reduce(action)
    }

    #[test]
    fn even_toggles_leave_menu_closed() {
        let mut state = NavState::default();
        for n in 1..=6 {
            state = apply(state, NavAction::ToggleMenu);
            assert_eq!(state.menu_open, n % 2 == 1, "after {} toggles", n);
        }
        assert!(!state.menu_open);
    }

    #[test]
    fn following_a_link_closes_the_menu() {
        let open = apply(NavState::default(), NavAction::ToggleMenu);
        assert!(open.menu_open);
        assert!(!apply(open, NavAction::CloseMenu).menu_open);
        assert!(!apply(NavState::default(), NavAction::CloseMenu).menu_open);
    }

    #[test]
    fn scroll_threshold_flips_once_per_crossing() {
        let offsets = [0.0, 5.0, 19.9, 20.0, 20.5, 40.0, 300.0, 120.0, 21.0, 20.0, 3.0, 0.0, 25.0];
        let mut state = Rc::new(NavState::default());
        let mut changes = Vec::new();
        for offset in offsets {
            let next = state.clone().reduce(NavAction::Scroll(offset));
            if !Rc::ptr_eq(&state, &next) {
                changes.push((offset, next.scrolled));
            }
            state = next;
        }
        assert_eq!(changes, vec![(20.5, true), (20.0, false), (25.0, true)]);
    }

    #[test]
    fn scrolling_does_not_touch_the_menu() {
        let open = apply(NavState::default(), NavAction::ToggleMenu);
        let scrolled = apply(open, NavAction::Scroll(500.0));
        assert!(scrolled.menu_open && scrolled.scrolled);
    }

    fn navbar() -> Html {
        html! { <Navbar /> }
    }

    #[tokio::test]
    async fn only_the_current_route_is_active() {
        for (route, label) in NAV_LINKS.iter() {
            let html = render_at(&route.to_path(), navbar).await;
            assert_eq!(count(&html, "nav-link active"), 1, "on {}", route.to_path());
            let start = html.find("nav-link active").unwrap();
            let end = start + html[start..].find("</a>").unwrap();
            assert!(html[start..end].ends_with(&format!(">{}", label)), "{} should be active", label);
        }
    }

    #[tokio::test]
    async fn legal_pages_highlight_nothing() {
        let html = render_at("/privacy", navbar).await;
        assert_eq!(count(&html, "nav-link active"), 0);
        assert_eq!(count(&html, r#"class="nav-link""#), NAV_LINKS.len());
    }

    #[tokio::test]
    async fn menu_starts_closed_with_default_cta() {
        let html = render_at("/", navbar).await;
        assert!(!html.contains("mobile-menu glass-strong"));
        assert!(html.contains(r#"aria-expanded="false""#));
        let cta = format!(r#"href="{}""#, whatsapp_link(WhatsAppIntent::Default));
        assert_eq!(count(&html, &cta), 1);
    }
}
