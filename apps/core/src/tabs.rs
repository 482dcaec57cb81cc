//! Tab switching. The animation is a strategy chosen when the controller is
//! built; call sites only ever see [`TabController::switch_to`].

use std::rc::Rc;
use std::time::Duration;

use crate::config::Timings;
use crate::sequence::{Sequence, Ticket};
use crate::session::SessionStore;
use crate::timer::Scheduler;

/// Session key holding the last selected tab.
pub const ACTIVE_TAB_KEY: &str = "activeTab";

/// Tab buttons and their panels, addressed by tab id.
pub trait TabDeck {
    fn tab_ids(&self) -> Vec<String>;

    fn has_tab(&self, id: &str) -> bool {
        self.tab_ids().iter().any(|tab| tab == id)
    }

    fn set_panel_active(&self, id: &str, active: bool);
    /// `transition` animates the change when set.
    fn set_panel_opacity(&self, id: &str, opacity: f32, transition: Option<Duration>);
    fn set_button_active(&self, id: &str, active: bool);
    fn set_button_scale(&self, id: &str, scale: f32, transition: Option<Duration>);
}

/// Lets delayed steps of a transition check whether a newer switch started.
#[derive(Clone)]
pub struct SwitchGuard {
    sequence: Rc<Sequence>,
    ticket: Ticket,
}

impl SwitchGuard {
    pub fn is_current(&self) -> bool {
        self.sequence.is_current(self.ticket)
    }
}

pub trait TabTransition {
    fn switch(&self, deck: &Rc<dyn TabDeck>, target: &str, guard: SwitchGuard);
}

/// Plain class swap with no animation.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantTransition;

impl TabTransition for InstantTransition {
    fn switch(&self, deck: &Rc<dyn TabDeck>, target: &str, _guard: SwitchGuard) {
        for id in deck.tab_ids() {
            deck.set_panel_active(&id, false);
            deck.set_button_active(&id, false);
        }
        deck.set_panel_active(target, true);
        deck.set_button_active(target, true);
    }
}

/// Fades every panel out, swaps the active panel once the fade is over,
/// fades it back in and briefly enlarges the selected button.
pub struct FadeTransition {
    scheduler: Rc<dyn Scheduler>,
    fade: Duration,
    fade_in_delay: Duration,
    pulse_scale: f32,
}

impl FadeTransition {
    pub fn new(scheduler: Rc<dyn Scheduler>, timings: &Timings) -> Self {
        Self {
            scheduler,
            fade: timings.fade,
            fade_in_delay: timings.fade_in_delay,
            pulse_scale: 1.05,
        }
    }
}

impl TabTransition for FadeTransition {
    fn switch(&self, deck: &Rc<dyn TabDeck>, target: &str, guard: SwitchGuard) {
        let tabs = deck.tab_ids();
        for id in &tabs {
            deck.set_panel_opacity(id, 0.0, Some(self.fade));
            deck.set_button_active(id, false);
        }

        let deck = deck.clone();
        let target = target.to_string();
        let scheduler = self.scheduler.clone();
        let (fade, fade_in_delay, pulse_scale) = (self.fade, self.fade_in_delay, self.pulse_scale);

        self.scheduler.after(
            fade,
            Box::new(move || {
                if !guard.is_current() {
                    return;
                }
                for id in &tabs {
                    deck.set_panel_active(id, false);
                    deck.set_panel_opacity(id, 1.0, None);
                }
                deck.set_panel_active(&target, true);
                deck.set_panel_opacity(&target, 0.0, None);
                deck.set_button_active(&target, true);
                deck.set_button_scale(&target, pulse_scale, Some(fade));

                let fade_in = (deck.clone(), target.clone(), guard.clone());
                scheduler.after(
                    fade_in_delay,
                    Box::new(move || {
                        let (deck, target, guard) = fade_in;
                        if guard.is_current() {
                            deck.set_panel_opacity(&target, 1.0, Some(fade));
                        }
                    }),
                );
                scheduler.after(
                    fade,
                    Box::new(move || deck.set_button_scale(&target, 1.0, Some(fade))),
                );
            }),
        );
    }
}

pub struct TabController<T, S> {
    deck: Rc<dyn TabDeck>,
    transition: T,
    store: S,
    sequence: Rc<Sequence>,
}

impl<T: TabTransition, S: SessionStore> TabController<T, S> {
    pub fn new(deck: Rc<dyn TabDeck>, transition: T, store: S) -> Self {
        Self {
            deck,
            transition,
            store,
            sequence: Rc::new(Sequence::new()),
        }
    }

    /// Activates `tab` and remembers it for the session. Unknown ids are
    /// ignored.
    pub fn switch_to(&self, tab: &str) -> bool {
        if !self.deck.has_tab(tab) {
            log::warn!("ignoring switch to unknown tab {tab:?}");
            return false;
        }
        let guard = SwitchGuard {
            sequence: self.sequence.clone(),
            ticket: self.sequence.begin(),
        };
        self.transition.switch(&self.deck, tab, guard);
        self.store.set(ACTIVE_TAB_KEY, tab);
        true
    }

    /// Re-selects the tab stored earlier in this session, if any.
    pub fn restore(&self) -> Option<String> {
        let tab = self.store.get(ACTIVE_TAB_KEY)?;
        self.switch_to(&tab).then_some(tab)
    }

    pub fn active(&self) -> Option<String> {
        self.store.get(ACTIVE_TAB_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStore;
    use crate::timer::ManualScheduler;
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Panel {
        active: bool,
        opacity: f32,
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Button {
        active: bool,
        scale: f32,
    }

    struct FakeDeck {
        panels: RefCell<BTreeMap<String, Panel>>,
        buttons: RefCell<BTreeMap<String, Button>>,
    }

    impl FakeDeck {
        fn new(ids: &[&str], active: &str) -> Rc<Self> {
            Rc::new(Self {
                panels: RefCell::new(
                    ids.iter()
                        .map(|id| {
                            let panel = Panel {
                                active: *id == active,
                                opacity: 1.0,
                            };
                            ((*id).to_string(), panel)
                        })
                        .collect(),
                ),
                buttons: RefCell::new(
                    ids.iter()
                        .map(|id| {
                            let button = Button {
                                active: *id == active,
                                scale: 1.0,
                            };
                            ((*id).to_string(), button)
                        })
                        .collect(),
                ),
            })
        }

        fn active_panels(&self) -> Vec<String> {
            self.panels
                .borrow()
                .iter()
                .filter(|(_, panel)| panel.active)
                .map(|(id, _)| id.clone())
                .collect()
        }

        fn panel(&self, id: &str) -> Panel {
            self.panels.borrow()[id]
        }

        fn button(&self, id: &str) -> Button {
            self.buttons.borrow()[id]
        }
    }

    impl TabDeck for FakeDeck {
        fn tab_ids(&self) -> Vec<String> {
            self.panels.borrow().keys().cloned().collect()
        }

        fn set_panel_active(&self, id: &str, active: bool) {
            if let Some(panel) = self.panels.borrow_mut().get_mut(id) {
                panel.active = active;
            }
        }

        fn set_panel_opacity(&self, id: &str, opacity: f32, _transition: Option<Duration>) {
            if let Some(panel) = self.panels.borrow_mut().get_mut(id) {
                panel.opacity = opacity;
            }
        }

        fn set_button_active(&self, id: &str, active: bool) {
            if let Some(button) = self.buttons.borrow_mut().get_mut(id) {
                button.active = active;
            }
        }

        fn set_button_scale(&self, id: &str, scale: f32, _transition: Option<Duration>) {
            if let Some(button) = self.buttons.borrow_mut().get_mut(id) {
                button.scale = scale;
            }
        }
    }

    const TABS: [&str; 3] = ["basic", "dashboard", "risk"];

    fn faded(
        deck: &Rc<FakeDeck>,
        scheduler: &Rc<ManualScheduler>,
        store: Rc<MemoryStore>,
    ) -> TabController<FadeTransition, Rc<MemoryStore>> {
        let deck: Rc<dyn TabDeck> = deck.clone();
        let scheduler: Rc<dyn Scheduler> = scheduler.clone();
        TabController::new(
            deck,
            FadeTransition::new(scheduler, &Timings::default()),
            store,
        )
    }

    #[test]
    fn instant_switch_activates_one_panel_and_persists() {
        let deck = FakeDeck::new(&TABS, "basic");
        let store = Rc::new(MemoryStore::new());
        let controller = TabController::new(deck.clone(), InstantTransition, store.clone());

        assert!(controller.switch_to("risk"));

        assert_eq!(deck.active_panels(), vec!["risk".to_string()]);
        assert!(deck.button("risk").active);
        assert!(!deck.button("basic").active);
        assert_eq!(store.get(ACTIVE_TAB_KEY).as_deref(), Some("risk"));
    }

    #[test]
    fn fade_swaps_panels_after_the_fade_out() {
        let deck = FakeDeck::new(&TABS, "basic");
        let scheduler = Rc::new(ManualScheduler::new());
        let controller = faded(&deck, &scheduler, Rc::new(MemoryStore::new()));

        controller.switch_to("dashboard");
        assert_eq!(deck.active_panels(), vec!["basic".to_string()]);
        assert!(deck.panel("basic").opacity.abs() < f32::EPSILON);
        assert!(!deck.button("basic").active);

        scheduler.advance(Duration::from_millis(300));
        assert_eq!(deck.active_panels(), vec!["dashboard".to_string()]);
        assert!(deck.panel("dashboard").opacity.abs() < f32::EPSILON);
        assert!((deck.panel("basic").opacity - 1.0).abs() < f32::EPSILON);
        assert!(deck.button("dashboard").active);
        assert!((deck.button("dashboard").scale - 1.05).abs() < f32::EPSILON);

        scheduler.advance(Duration::from_millis(50));
        assert!((deck.panel("dashboard").opacity - 1.0).abs() < f32::EPSILON);

        scheduler.advance(Duration::from_millis(250));
        assert!((deck.button("dashboard").scale - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn rapid_second_switch_wins() {
        let deck = FakeDeck::new(&TABS, "basic");
        let scheduler = Rc::new(ManualScheduler::new());
        let controller = faded(&deck, &scheduler, Rc::new(MemoryStore::new()));

        controller.switch_to("dashboard");
        scheduler.advance(Duration::from_millis(100));
        controller.switch_to("risk");
        scheduler.advance(Duration::from_secs(1));

        assert_eq!(deck.active_panels(), vec!["risk".to_string()]);
        assert!(!deck.button("dashboard").active);
        assert!(deck.button("risk").active);
        assert_eq!(controller.active().as_deref(), Some("risk"));
    }

    #[test]
    fn restore_reselects_stored_tab() {
        let deck = FakeDeck::new(&TABS, "basic");
        let store = Rc::new(MemoryStore::new());
        store.set(ACTIVE_TAB_KEY, "dashboard");
        let controller = TabController::new(deck.clone(), InstantTransition, store);

        assert_eq!(controller.restore().as_deref(), Some("dashboard"));
        assert_eq!(deck.active_panels(), vec!["dashboard".to_string()]);
    }

    #[test]
    fn unknown_tabs_are_ignored() {
        let deck = FakeDeck::new(&TABS, "basic");
        let store = Rc::new(MemoryStore::new());
        store.set(ACTIVE_TAB_KEY, "retired-tab");
        let controller = TabController::new(deck.clone(), InstantTransition, store.clone());

        assert_eq!(controller.restore(), None);
        assert!(!controller.switch_to("nope"));
        assert_eq!(deck.active_panels(), vec!["basic".to_string()]);
        assert_eq!(store.get(ACTIVE_TAB_KEY).as_deref(), Some("retired-tab"));
    }

    #[test]
    fn nothing_stored_means_nothing_restored() {
        let deck = FakeDeck::new(&TABS, "basic");
        let controller = TabController::new(deck, InstantTransition, MemoryStore::new());
        assert_eq!(controller.restore(), None);
    }
}
