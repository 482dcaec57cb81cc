use std::rc::Rc;

use ais_dashboard::controllers::{
    welcome, DashboardLoader, MapSource, MapToggle, MarineCadastreMap, Outcome, RiskAnalysis,
};
use ais_dashboard::messages;
use ais_dashboard::render::{vessel_groups, welcome as welcome_markup};
use ais_dashboard::{AnalyticsClient, DashboardConfig, FadeTransition, Scheduler, Surface, TabController};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, HtmlInputElement, HtmlOptionElement,
    HtmlSelectElement,
};

mod animation;
mod dom;
mod fetch;
mod logger;

use dom::{DomTabDeck, ElementSurface, SessionStorage, WindowScheduler};
use fetch::FetchBackend;

mod ids {
    pub const DASHBOARD_CONTAINER: &str = "dashboard-container";
    pub const VESSEL_GROUPS_MAP: &str = "vessel-groups-map";
    pub const RISK_RESULT: &str = "risk-result";
    pub const RISK_MAP: &str = "risk-map";
    pub const MARINE_MAP: &str = "marine-map";
    pub const RISK_THRESHOLD: &str = "risk-threshold";
    pub const RISK_THRESHOLD_VALUE: &str = "risk-threshold-value";
    pub const RISK_TYPE: &str = "risk-type";
}

/// Class of the container the vessel-group map is mounted into.
const VESSEL_GROUPS_MAP_CLASS: &str = "vessel-groups-map";

/// `data-action` values of the page's buttons.
mod actions {
    pub const LOAD_DASHBOARD: &str = "load-dashboard";
    pub const ANALYZE_RISK: &str = "analyze-risk";
    pub const SHOW_RISK_MAP: &str = "show-risk-map";
    pub const LOAD_MARINE_MAP: &str = "load-marine-map";
}

struct App {
    document: Document,
    config: DashboardConfig,
    scheduler: Rc<dyn Scheduler>,
    dashboard: DashboardLoader<FetchBackend>,
    risk: RiskAnalysis<FetchBackend>,
    risk_map: MapToggle<FetchBackend>,
    // Reset whenever the dashboard re-renders, since that discards the map container.
    group_map: MapToggle<FetchBackend>,
    marine: MarineCadastreMap,
    tabs: TabController<FadeTransition, SessionStorage>,
}

impl App {
    fn new(window: &web_sys::Window, document: &Document) -> Self {
        let config = DashboardConfig::default();
        let client = Rc::new(AnalyticsClient::new(FetchBackend, config.clone()));
        let scheduler: Rc<dyn Scheduler> = Rc::new(WindowScheduler::new(window));

        let marine_present = ElementSurface::new(document, ids::MARINE_MAP).contains("iframe");
        let tabs = TabController::new(
            Rc::new(DomTabDeck::new(document)),
            FadeTransition::new(scheduler.clone(), &config.timings),
            SessionStorage::new(window),
        );

        Self {
            document: document.clone(),
            dashboard: DashboardLoader::new(client.clone()),
            risk: RiskAnalysis::new(client.clone()),
            risk_map: MapToggle::new(client.clone(), MapSource::Risk),
            group_map: MapToggle::new(client, MapSource::VesselGroups),
            marine: MarineCadastreMap::new(&config, marine_present),
            tabs,
            scheduler,
            config,
        }
    }

    async fn load_dashboard(&self) {
        self.group_map.reset();
        let surface = ElementSurface::new(&self.document, ids::DASHBOARD_CONTAINER);
        self.dashboard.load(&surface).await;
    }

    async fn toggle_group_map(&self) {
        let surface = ElementSurface::new(&self.document, ids::VESSEL_GROUPS_MAP);
        if let Err(error) = surface.ensure(ids::DASHBOARD_CONTAINER, VESSEL_GROUPS_MAP_CLASS) {
            log::warn!("cannot place vessel group map: {error:?}");
            return;
        }
        self.group_map.toggle(&surface).await;
    }

    async fn analyze_risk(&self) {
        let threshold = self
            .input_value(ids::RISK_THRESHOLD)
            .unwrap_or_else(|| self.config.default_threshold.to_string());
        let selected = self.selected_risk_types();
        let surface = ElementSurface::new(&self.document, ids::RISK_RESULT);
        self.risk.run(&threshold, selected.as_slice(), &surface).await;
    }

    async fn toggle_risk_map(&self) {
        let surface = ElementSurface::new(&self.document, ids::RISK_MAP);
        if self.risk_map.toggle(&surface).await == Outcome::Rendered {
            self.toast(ids::RISK_MAP, messages::RISK_MAP_LOADED);
        }
    }

    fn load_marine_map(self: &Rc<Self>) {
        let surface = Rc::new(ElementSurface::new(&self.document, ids::MARINE_MAP));
        match self.marine.load(surface, self.scheduler.as_ref()) {
            Outcome::Refreshed => self.announce_marine_frame(),
            Outcome::Scheduled => {
                // Queued behind the frame insertion, which uses the same delay.
                let app = self.clone();
                self.scheduler.after(
                    self.config.timings.marine_frame_delay,
                    Box::new(move || app.announce_marine_frame()),
                );
            }
            _ => {}
        }
    }

    /// Shows the success toast once the Marine Cadastre frame finishes loading.
    fn announce_marine_frame(self: &Rc<Self>) {
        let selector = format!("#{} iframe", ids::MARINE_MAP);
        let Ok(Some(frame)) = self.document.query_selector(&selector) else {
            return;
        };
        let app = self.clone();
        let on_load = Closure::once_into_js(move || {
            app.toast(ids::MARINE_MAP, messages::MARINE_MAP_LOADED);
        });
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        if let Err(error) = frame.add_event_listener_with_callback_and_add_event_listener_options(
            "load",
            on_load.unchecked_ref(),
            &options,
        ) {
            log::warn!("cannot watch Marine Cadastre frame: {error:?}");
        }
    }

    fn toast(&self, container_id: &str, message: &str) {
        if let Err(error) = animation::show_toast(
            &self.document,
            container_id,
            message,
            self.scheduler.clone(),
            self.config.timings,
        ) {
            log::warn!("toast failed: {error:?}");
        }
    }

    fn input_value(&self, id: &str) -> Option<String> {
        let input: HtmlInputElement = self.document.get_element_by_id(id)?.dyn_into().ok()?;
        Some(input.value())
    }

    fn selected_risk_types(&self) -> Vec<String> {
        let Some(select) = self
            .document
            .get_element_by_id(ids::RISK_TYPE)
            .and_then(|element| element.dyn_into::<HtmlSelectElement>().ok())
        else {
            return Vec::new();
        };
        let options = select.selected_options();
        (0..options.length())
            .filter_map(|index| options.item(index))
            .filter_map(|option| option.dyn_into::<HtmlOptionElement>().ok())
            .map(|option| option.value())
            .collect()
    }

    fn show_welcome(&self) {
        let document = self.document.clone();
        welcome::schedule(
            self.scheduler.as_ref(),
            self.config.timings.welcome_delay,
            move |markup| {
                let placed = document.create_element("div").and_then(|overlay| {
                    overlay.set_class_name(welcome_markup::OVERLAY_CLASS);
                    overlay.set_inner_html(&markup);
                    match document.body() {
                        Some(body) => body.append_child(&overlay).map(drop),
                        None => Ok(()),
                    }
                });
                if let Err(error) = placed {
                    log::warn!("welcome overlay failed: {error:?}");
                }
            },
        );
    }

    fn on_click(self: &Rc<Self>, event: &Event) {
        let Some(target) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
        else {
            return;
        };

        if let Some(tab) = dom::tab_of(&target) {
            self.tabs.switch_to(&tab);
            return;
        }

        let Some(trigger) = target.closest("[data-action]").ok().flatten() else {
            return;
        };
        let Some(action) = trigger.get_attribute("data-action") else {
            return;
        };

        let app = self.clone();
        match action.as_str() {
            actions::LOAD_DASHBOARD => spawn_local(async move { app.load_dashboard().await }),
            actions::ANALYZE_RISK => spawn_local(async move { app.analyze_risk().await }),
            actions::SHOW_RISK_MAP => spawn_local(async move { app.toggle_risk_map().await }),
            vessel_groups::SHOW_MAP_ACTION => {
                spawn_local(async move { app.toggle_group_map().await });
            }
            actions::LOAD_MARINE_MAP => app.load_marine_map(),
            welcome_markup::CLOSE_ACTION => {
                let selector = format!(".{}", welcome_markup::OVERLAY_CLASS);
                if let Ok(Some(overlay)) = trigger.closest(&selector) {
                    overlay.remove();
                }
            }
            other => log::debug!("no handler for action {other:?}"),
        }
    }
}

/// Mirrors the threshold slider into its label while it moves.
fn bind_threshold_label(document: &Document) -> Result<(), JsValue> {
    let Some(slider) = document.get_element_by_id(ids::RISK_THRESHOLD) else {
        return Ok(());
    };
    let Some(label) = document.get_element_by_id(ids::RISK_THRESHOLD_VALUE) else {
        return Ok(());
    };
    let input = slider.clone();
    dom::listen(&slider, "input", move |_| {
        if let Some(input) = input.dyn_ref::<HtmlInputElement>() {
            label.set_text_content(Some(&input.value()));
        }
    })
}

fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    logger::init(&window.location().search().unwrap_or_default());
    dom::inject_styles(&document)?;

    let app = Rc::new(App::new(&window, &document));

    let risk_map = ElementSurface::new(&document, ids::RISK_MAP);
    if !risk_map.contains("*") {
        risk_map.set_visible(false);
    }

    let clicks = app.clone();
    dom::listen(&document, "click", move |event| clicks.on_click(&event))?;
    bind_threshold_label(&document)?;

    if let Some(tab) = app.tabs.restore() {
        log::debug!("restored tab {tab}");
    }
    app.show_welcome();

    log::info!("dashboard ready");
    Ok(())
}
