use js_sys::Array;
use serde_json::json;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions,
};
use yew::prelude::*;

use crate::config::{ConfigError, PageConfig, PAGE_CONFIG_ELEMENT_ID};
use crate::content::{self, NavSection, SectionHeading, NAV_SECTIONS};
use crate::log::{log_event, LogLevel};
use crate::motion::{HeroElement, MotionPreference, Transition, CURSOR_BLINK_PERIOD_MS};
use crate::navigation::{MenuState, NavigationController, ScrollHost, ScrollOutcome};
use crate::reveal::{root_margin, LatchChange, RevealAction, RevealLatches, REVEAL_ATTRIBUTE};
use crate::theme::{Theme, ThemeController};
use crate::typewriter::{start_ticking, TickOutcome, TickSource, Typewriter, CURSOR_GLYPH};

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

fn read_page_config() -> Result<PageConfig, ConfigError> {
    let raw = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(PAGE_CONFIG_ELEMENT_ID))
        .ok_or(ConfigError::MissingConfigElement)?
        .text_content()
        .unwrap_or_default();

    PageConfig::from_json(&raw)
}

fn load_page_config() -> PageConfig {
    match read_page_config() {
        Ok(config) => {
            log_event(
                config.log_level,
                LogLevel::Info,
                "page_config_loaded",
                json!({
                    "typewriterIntervalMs": config.typewriter_interval_ms,
                    "revealMarginPx": config.reveal_margin_px,
                    "logLevel": config.log_level.as_str(),
                }),
            );
            config
        }
        Err(error) => {
            let config = PageConfig::default();
            log_event(
                config.log_level,
                LogLevel::Info,
                "page_config_fallback",
                json!({ "reason": error.to_string() }),
            );
            config
        }
    }
}

struct DocumentScroller;

impl ScrollHost for DocumentScroller {
    fn scroll_smoothly_to(&self, section_id: &str) -> ScrollOutcome {
        let Some(element) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(section_id))
        else {
            return ScrollOutcome::MissingTarget;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        ScrollOutcome::Scrolled
    }
}

/// Owns a `setInterval` registration; dropping it clears the interval.
struct IntervalTicker {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl IntervalTicker {
    fn start(interval_ms: u64, on_tick: Box<dyn FnMut()>) -> Option<Self> {
        let win = window()?;
        let callback = Closure::wrap(on_tick);
        let timeout = i32::try_from(interval_ms).unwrap_or(i32::MAX);
        let handle = win
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                timeout,
            )
            .ok()?;

        Some(Self {
            handle,
            _callback: callback,
        })
    }
}

impl Drop for IntervalTicker {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_interval_with_handle(self.handle);
        }
    }
}

struct BrowserInterval;

impl TickSource for BrowserInterval {
    type Handle = IntervalTicker;

    fn start(&self, interval_ms: u64, on_tick: Box<dyn FnMut()>) -> Option<IntervalTicker> {
        IntervalTicker::start(interval_ms, on_tick)
    }
}

/// Single page-level observer feeding the reveal latches.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn start(
        margin_px: i32,
        log_level: LogLevel,
        latches: UseReducerDispatcher<RevealLatches>,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(id) = target.get_attribute(REVEAL_ATTRIBUTE) else {
                        continue;
                    };

                    let intersecting = entry.is_intersecting();
                    if intersecting {
                        log_event(log_level, LogLevel::Debug, "section_revealed", json!({ "section": id }));
                        observer.unobserve(&target);
                    }
                    latches.dispatch(RevealAction::Observe { id, intersecting });
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&root_margin(margin_px));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        let document = window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("document unavailable"))?;
        let targets = document.query_selector_all(&format!("[{REVEAL_ATTRIBUTE}]"))?;
        for index in 0..targets.length() {
            if let Some(element) = targets
                .item(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            {
                observer.observe(&element);
            }
        }

        Ok(Self {
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

impl Reducible for RevealLatches {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match next.apply(action) {
            LatchChange::Latched => Rc::new(next),
            LatchChange::Unchanged => self,
        }
    }
}

pub enum TypewriterAction {
    Tick,
}

impl Reducible for Typewriter {
    type Action = TypewriterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TypewriterAction::Tick => {
                let mut next = (*self).clone();
                match next.tick() {
                    TickOutcome::Idle => self,
                    TickOutcome::Typed | TickOutcome::SecondLineStarted | TickOutcome::Finished => {
                        Rc::new(next)
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct PageSettings {
    config: Rc<PageConfig>,
    motion: MotionPreference,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            config: Rc::new(PageConfig::default()),
            motion: MotionPreference::default(),
        }
    }
}

#[hook]
fn use_page_settings() -> PageSettings {
    use_context::<PageSettings>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
struct RevealProps {
    id: AttrValue,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    transition: Option<Transition>,
    #[prop_or_default]
    children: Html,
}

#[function_component(Reveal)]
fn reveal(props: &RevealProps) -> Html {
    let settings = use_page_settings();
    let latches = use_context::<UseReducerHandle<RevealLatches>>();
    let seen = latches
        .map(|latches| latches.is_seen(&props.id))
        .unwrap_or(true);
    let transition = props
        .transition
        .unwrap_or_else(|| settings.motion.section_entrance());

    html! {
        <div
            data-reveal={props.id.clone()}
            class={classes!("reveal", seen.then_some("is-revealed"), props.class.clone())}
            style={transition.style()}
        >
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeadingProps {
    id: AttrValue,
    heading: SectionHeading,
}

#[function_component(SectionTitle)]
fn section_title(props: &HeadingProps) -> Html {
    html! {
        <Reveal id={props.id.clone()} class={classes!("section-title")}>
            <p class="muted">{props.heading.kicker}</p>
            <h2>{props.heading.title}</h2>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
struct CursorProps {
    visible: bool,
}

#[function_component(Cursor)]
fn cursor(props: &CursorProps) -> Html {
    let settings = use_page_settings();
    if !props.visible {
        return html! {};
    }

    let blinks = settings.motion.cursor_blinks();
    let style = format!("--cursor-period: {CURSOR_BLINK_PERIOD_MS}ms;");
    html! {
        <span class={classes!("cursor", blinks.then_some("is-blinking"))} style={style} aria-hidden="true">
            {CURSOR_GLYPH}
        </span>
    }
}

#[function_component(TypewriterBanner)]
fn typewriter_banner() -> Html {
    let settings = use_page_settings();
    let typewriter = {
        let lines = settings.config.typewriter_lines.clone();
        use_reducer(move || Typewriter::new(&lines[0], &lines[1]))
    };
    let done = typewriter.is_done();

    {
        let current = typewriter.clone();
        let dispatcher = typewriter.dispatcher();
        let interval_ms = settings.config.typewriter_interval_ms;
        let log_level = settings.config.log_level;
        let phase = typewriter.phase();
        let total_ms = typewriter
            .remaining_duration(Duration::from_millis(interval_ms))
            .as_millis() as u64;
        use_effect_with(done, move |done| {
            let ticker = if *done {
                log_event(log_level, LogLevel::Debug, "typewriter_finished", json!({}));
                None
            } else {
                log_event(
                    log_level,
                    LogLevel::Debug,
                    "typewriter_started",
                    json!({ "intervalMs": interval_ms, "totalMs": total_ms, "phase": phase.as_str() }),
                );
                start_ticking(&BrowserInterval, &current, interval_ms, move || {
                    dispatcher.dispatch(TypewriterAction::Tick)
                })
            };

            move || drop(ticker)
        });
    }

    let frame = typewriter.frame();
    let motion = settings.motion;

    html! {
        <div class="typewriter">
            <p class="typewriter-line hero-fade" style={motion.hero(HeroElement::FirstLine).style()}>
                {frame.text1}
                <Cursor visible={frame.cursor1} />
            </p>
            <br />
            <p class="typewriter-line hero-fade" style={motion.hero(HeroElement::SecondLine).style()}>
                {frame.text2}
                <Cursor visible={frame.cursor2} />
            </p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NavigateProps {
    on_navigate: Callback<&'static str>,
}

#[derive(Properties, PartialEq)]
struct NavBarProps {
    menu: MenuState,
    theme: ThemeController,
    on_navigate: Callback<&'static str>,
    on_toggle_menu: Callback<()>,
    on_toggle_theme: Callback<()>,
}

fn section_buttons(on_navigate: &Callback<&'static str>, class: &'static str) -> Html {
    NAV_SECTIONS
        .iter()
        .map(|section: &NavSection| {
            let id = section.id;
            html! {
                <button key={id} type="button" class={class} onclick={on_navigate.reform(move |_| id)}>
                    {section.label}
                </button>
            }
        })
        .collect()
}

#[function_component(NavBar)]
fn nav_bar(props: &NavBarProps) -> Html {
    let theme = props.theme.theme();
    let toggle_theme = props.on_toggle_theme.reform(|_| ());
    let toggle_menu = props.on_toggle_menu.reform(|_| ());

    html! {
        <nav class="site-nav">
            <div class="brand">{content::BRAND}</div>
            <div class="nav-desktop">
                {section_buttons(&props.on_navigate, "nav-link")}
                <button
                    class="theme-toggle"
                    type="button"
                    aria-label={theme.toggle_label()}
                    aria-pressed={theme.pressed().to_string()}
                    onclick={toggle_theme.clone()}
                >
                    <span aria-hidden="true">{theme.icon()}</span>
                    <span class="theme-toggle-text">{theme.label()}</span>
                </button>
            </div>
            <div class="nav-mobile">
                <button
                    class="theme-toggle"
                    type="button"
                    aria-label={theme.toggle_label()}
                    aria-pressed={theme.pressed().to_string()}
                    onclick={toggle_theme}
                >
                    <span aria-hidden="true">{theme.icon()}</span>
                </button>
                <button
                    class="menu-toggle"
                    type="button"
                    aria-label={props.menu.toggle_label()}
                    aria-expanded={props.menu.is_open().to_string()}
                    onclick={toggle_menu}
                >
                    <span aria-hidden="true">{props.menu.icon()}</span>
                </button>
            </div>
        </nav>
    }
}

#[function_component(MobileMenu)]
fn mobile_menu(props: &NavigateProps) -> Html {
    let settings = use_page_settings();

    html! {
        <div class="mobile-menu">
            <div class="mobile-menu-items">
                {for NAV_SECTIONS.iter().enumerate().map(|(index, section)| {
                    let id = section.id;
                    html! {
                        <button
                            key={id}
                            type="button"
                            class="mobile-menu-item hero-fade"
                            style={settings.motion.menu_item(index).style()}
                            onclick={props.on_navigate.reform(move |_| id)}
                        >
                            {section.label}
                        </button>
                    }
                })}
            </div>
        </div>
    }
}

fn open_in_new_context(url: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_| {
        if let Some(win) = window() {
            let _ = win.open_with_url_and_target_and_features(
                url,
                "_blank",
                content::OUTBOUND_WINDOW_FEATURES,
            );
        }
    })
}

#[function_component(Hero)]
fn hero(props: &NavigateProps) -> Html {
    let motion = use_page_settings().motion;
    let style = |element: HeroElement| motion.hero(element).style();

    html! {
        <section id={content::HERO_SECTION_ID} class="hero">
            <div class="hero-portrait hero-fade" style={style(HeroElement::Portrait)}>
                <img src={content::PROFILE_IMAGE} alt="Larry profile picture" width="320" height="320" />
            </div>
            <div class="hero-details hero-fade" style={style(HeroElement::Details)}>
                <p class="muted hero-fade" style={style(HeroElement::Greeting)}>{content::GREETING}</p>
                <h1 class="hero-fade" style={style(HeroElement::Name)}>{content::DISPLAY_NAME}</h1>
                <TypewriterBanner />
                <div class="hero-actions hero-fade" style={style(HeroElement::Actions)}>
                    <a class="button button-outline" href={content::CV_PATH} download={content::CV_DOWNLOAD_NAME}>
                        {"Download CV"}
                    </a>
                    <button class="button" type="button" onclick={props.on_navigate.reform(|_| "contact")}>
                        {"Contact Info"}
                    </button>
                </div>
                <div class="hero-socials hero-fade" style={style(HeroElement::Socials)}>
                    <button class="social" type="button" aria-label="LinkedIn Profile" onclick={open_in_new_context(content::LINKEDIN_URL)}>
                        {"in"}
                    </button>
                    <button class="social" type="button" aria-label="GitHub Profile" onclick={open_in_new_context(content::GITHUB_URL)}>
                        {"gh"}
                    </button>
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id="about" class="section">
            <SectionTitle id="about-heading" heading={content::ABOUT_HEADING} />
            <div class="about-grid">
                <Reveal id="about-portrait">
                    <img class="about-image" src={content::ABOUT_IMAGE} alt="About picture" width="320" height="320" />
                </Reveal>
                <Reveal id="about-summary">
                    <div class="highlights">
                        {for content::HIGHLIGHTS.iter().map(|highlight| html! {
                            <div class="card highlight" key={highlight.title}>
                                <span class="highlight-icon">{highlight.icon}</span>
                                <h3>{highlight.title}</h3>
                                <p class="muted">{highlight.lines[0]}<br />{highlight.lines[1]}</p>
                            </div>
                        })}
                    </div>
                    <p class="muted">{content::ABOUT_TEXT}</p>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Experience)]
fn experience() -> Html {
    let motion = use_page_settings().motion;

    html! {
        <section id="experience" class="section section-alt">
            <SectionTitle id="experience-heading" heading={content::EXPERIENCE_HEADING} />
            <div class="experience-grid">
                {for content::SKILL_GROUPS.iter().map(|group| html! {
                    <Reveal id={group.reveal_id} key={group.reveal_id} class={classes!("card")}>
                        <h3>{group.title}</h3>
                        <ul class="skill-list">
                            {for group.skills.iter().enumerate().map(|(index, skill)| html! {
                                <li class="reveal-item" key={skill.name} style={motion.skill_row(index).style()}>
                                    <span class="skill-check" aria-hidden="true">{"✓"}</span>
                                    <div>
                                        <h4>{skill.name}</h4>
                                        <p class="muted">{skill.level}</p>
                                    </div>
                                </li>
                            })}
                        </ul>
                    </Reveal>
                })}
            </div>
        </section>
    }
}

#[function_component(Projects)]
fn projects() -> Html {
    let motion = use_page_settings().motion;

    html! {
        <section id="projects" class="section">
            <SectionTitle id="projects-heading" heading={content::PROJECTS_HEADING} />
            <div class="project-grid">
                {for content::PROJECTS.iter().enumerate().map(|(index, project)| html! {
                    <Reveal
                        id={project.reveal_id}
                        key={project.reveal_id}
                        class={classes!("card", "project-card")}
                        transition={Some(motion.project_card(index))}
                    >
                        <img src={project.image_or_placeholder()} alt={project.title} width="300" height="200" />
                        <h3>{project.title}</h3>
                        <div class="project-actions">
                            <button class="button button-outline" type="button" onclick={open_in_new_context(project.repository_url)}>
                                {"Github"}
                            </button>
                            <button class="button button-outline" type="button" onclick={open_in_new_context(project.demo_url)}>
                                {"Live Demo"}
                            </button>
                        </div>
                    </Reveal>
                })}
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    html! {
        <section id="contact" class="section section-alt">
            <SectionTitle id="contact-heading" heading={content::CONTACT_HEADING} />
            <div class="contact-grid">
                <Reveal id="contact-email" class={classes!("card")}>
                    <a class="link" href={content::mailto_href()}>{content::EMAIL}</a>
                </Reveal>
                <Reveal id="contact-linkedin" class={classes!("card")}>
                    <a class="link" href={content::LINKEDIN_URL} target="_blank" rel={content::OUTBOUND_REL}>
                        {"LinkedIn"}
                    </a>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer(props: &NavigateProps) -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-links">{section_buttons(&props.on_navigate, "footer-link")}</div>
            <p class="muted">{content::COPYRIGHT}</p>
        </footer>
    }
}

fn initial_latches() -> RevealLatches {
    let mut latches = RevealLatches::new();
    for id in content::reveal_ids() {
        latches.register(id);
    }
    latches
}

#[function_component(App)]
fn app() -> Html {
    let settings = use_memo((), |_| PageSettings {
        config: Rc::new(load_page_config()),
        motion: MotionPreference::from_reduced(prefers_reduced_motion()),
    });
    let log_level = settings.config.log_level;
    let menu = use_state(MenuState::default);
    let theme = use_state(|| ThemeController::new(Theme::default()));
    let latches = use_reducer(initial_latches);

    {
        let margin_px = settings.config.reveal_margin_px;
        let dispatcher = latches.dispatcher();
        use_effect_with((), move |_| {
            let observer = match RevealObserver::start(margin_px, log_level, dispatcher.clone()) {
                Ok(observer) => Some(observer),
                Err(error) => {
                    log_event(
                        log_level,
                        LogLevel::Info,
                        "reveal_observer_unavailable",
                        json!({ "reason": error.as_string(), "fallback": "reveal_all" }),
                    );
                    dispatcher.dispatch(RevealAction::RevealAll);
                    None
                }
            };

            move || drop(observer)
        });
    }

    let on_toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| {
            let mut controller = NavigationController::new(*menu, DocumentScroller);
            let next = controller.toggle_menu();
            log_event(log_level, LogLevel::Debug, "menu_toggled", json!({ "open": next.is_open() }));
            menu.set(next);
        })
    };

    let on_navigate = {
        let menu = menu.clone();
        Callback::from(move |section_id: &'static str| {
            let mut controller = NavigationController::new(*menu, DocumentScroller);
            let outcome = controller.navigate_to(section_id);
            log_event(
                log_level,
                LogLevel::Debug,
                "section_navigation",
                json!({ "section": section_id, "outcome": outcome.as_str() }),
            );
            menu.set(controller.menu());
        })
    };

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let mut controller = *theme;
            let next = controller.toggle_theme();
            log_event(log_level, LogLevel::Debug, "theme_toggled", json!({ "theme": next.as_str() }));
            theme.set(controller);
        })
    };

    html! {
        <ContextProvider<PageSettings> context={(*settings).clone()}>
            <ContextProvider<UseReducerHandle<RevealLatches>> context={latches.clone()}>
                <div class={classes!("page-root", theme.theme().root_class())}>
                    <div class="page-shell">
                        <NavBar
                            menu={*menu}
                            theme={*theme}
                            on_navigate={on_navigate.clone()}
                            on_toggle_menu={on_toggle_menu}
                            on_toggle_theme={on_toggle_theme}
                        />
                        if menu.is_open() {
                            <MobileMenu on_navigate={on_navigate.clone()} />
                        }
                        <main id="content">
                            <Hero on_navigate={on_navigate.clone()} />
                            <About />
                            <Experience />
                            <Projects />
                            <Contact />
                        </main>
                        <Footer on_navigate={on_navigate} />
                    </div>
                </div>
            </ContextProvider<UseReducerHandle<RevealLatches>>>
        </ContextProvider<PageSettings>>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
