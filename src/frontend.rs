use js_sys::Array;
use rand::thread_rng;
use std::{cell::Cell, rc::Rc};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions,
};
use yew::prelude::*;

use crate::{
    content::{SectionId, OWNER},
    particles::{self, Particle},
    tracker::{ActiveSection, SectionBounds},
};

mod contact;
mod sections;

const REVEAL_THRESHOLD: f64 = 0.1;
const FALLBACK_VIEWPORT: (f64, f64) = (1280.0, 720.0);

fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return FALLBACK_VIEWPORT;
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.1);

    (width, height)
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Live layout of every `section[id]`, in document order.
fn section_layout() -> Vec<SectionBounds> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| {
            SectionBounds::new(
                section.id(),
                f64::from(section.offset_top()),
                f64::from(section.client_height()),
            )
        })
        .collect()
}

fn scroll_to_section(section: SectionId) {
    let Some(target) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.as_str()))
    else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Window listener that unregisters itself when dropped.
struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    fn new(event: &'static str, handler: impl FnMut() + 'static) -> Option<Self> {
        let callback = Closure::<dyn FnMut()>::new(handler);
        window()?
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;

        Some(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(win) = window() {
            let _ = win
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }
}

/// One-shot intersection watch; disconnects on first hit or on drop.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn watch(target: &Element, on_reveal: impl Fn() + 'static) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let intersecting = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());

                if intersecting {
                    observer.disconnect();
                    on_reveal();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        observer.observe(target);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Flips to `true` the first time the referenced node enters the viewport.
#[hook]
fn use_reveal() -> (NodeRef, bool) {
    let node = use_node_ref();
    let revealed = use_state(prefers_reduced_motion);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with((), move |_| {
            let observer = if *revealed {
                None
            } else {
                node.cast::<Element>().and_then(|target| {
                    RevealObserver::watch(&target, move || revealed.set(true))
                })
            };

            move || drop(observer)
        });
    }

    (node, *revealed)
}

/// Cleared when the owning component unmounts. Deferred work checks it
/// before touching component state.
#[derive(Clone)]
struct Lifetime(Rc<Cell<bool>>);

impl Lifetime {
    fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    fn is_live(&self) -> bool {
        self.0.get()
    }

    fn revoke(&self) {
        self.0.set(false);
    }
}

#[hook]
fn use_lifetime() -> Lifetime {
    let lifetime = use_state(Lifetime::new);

    {
        let lifetime = (*lifetime).clone();
        use_effect_with((), move |_| move || lifetime.revoke());
    }

    (*lifetime).clone()
}

#[function_component(ParticleBackground)]
fn particle_background() -> Html {
    let field = use_state(Vec::<Particle>::new);

    {
        let field = field.clone();
        use_effect_with((), move |_| {
            let regenerate = move || {
                let (width, height) = viewport_size();
                let next = particles::generate(width, height, &mut thread_rng());
                log::debug!("particle field: {} for {width}x{height}", next.len());
                field.set(next);
            };

            regenerate();
            let listener = WindowListener::new("resize", regenerate);
            move || drop(listener)
        });
    }

    html! {
        <div class="particles" aria-hidden="true">
            { for field.iter().map(|particle| html! {
                <div key={particle.id} class="particle" style={particle.style()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    active: AttrValue,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="site-header">
            <nav class="site-nav" aria-label="Primary">
                <a class="brand" href={SectionId::Hero.href()}>{OWNER}</a>
                <ul class="nav-links">
                    { for SectionId::ALL.iter().map(|section| {
                        let current = props.active.as_str() == section.as_str();
                        html! {
                            <li>
                                <a
                                    class={classes!("nav-link", current.then_some("is-active"))}
                                    href={section.href()}
                                    aria-current={current.then_some("true")}
                                >
                                    {section.nav_label()}
                                </a>
                            </li>
                        }
                    }) }
                </ul>
            </nav>
        </header>
    }
}

#[function_component(App)]
fn app() -> Html {
    let active = use_state(|| AttrValue::from(SectionId::Hero.as_str()));
    let tracker = use_mut_ref(|| ActiveSection::new(SectionId::Hero.as_str()));

    {
        let active = active.clone();
        use_effect_with((), move |_| {
            let refresh = move || {
                let sections = section_layout();
                if let Some(id) = tracker.borrow_mut().observe(scroll_offset(), &sections) {
                    log::debug!("active section: {id}");
                    active.set(AttrValue::from(id.to_string()));
                }
            };

            refresh();
            let listener = WindowListener::new("scroll", refresh);
            move || drop(listener)
        });
    }

    html! {
        <>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <ParticleBackground />
            <Header active={(*active).clone()} />
            <main id="content">
                <sections::Hero />
                <sections::About />
                <sections::Skills />
                <sections::Projects />
                <sections::Resume />
                <contact::Contact />
            </main>
            <sections::Footer />
        </>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio starting");

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
