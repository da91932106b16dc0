//! The multiselect component.
//!
//! [`Multiselect`] owns the catalog, the selection and every view derived
//! from them. Page input arrives as messages; network work leaves as
//! commands. Each selection mutation synchronously re-renders the pills,
//! resynchronizes the hidden field and queues a
//! [`SelectionChanged`](Event::SelectionChanged) event.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use pillbox::{Config, Item, ItemValue, Multiselect};
//! use pillbox::backend::StaticBackend;
//! use pillbox::message::{CheckboxMsg, Message};
//!
//! let config = Config::new().with_items(vec![
//!     Item::new(1, "Apple"),
//!     Item::new(2, "Banana"),
//! ]);
//! let mut ms = Multiselect::new(config, Arc::new(StaticBackend::default())).unwrap();
//!
//! ms.update(Message::new(CheckboxMsg { value: 2.into() }));
//! assert_eq!(ms.hidden_field().values(), vec![ItemValue::from(2)]);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, trace, warn};

use crate::Model;
use crate::backend::Backend;
use crate::catalog::Catalog;
use crate::click::{ClickHub, Subscription};
use crate::command::{Cmd, debounce};
use crate::config::{Config, SearchMode};
use crate::dropdown::{Dropdown, InputArea};
use crate::error::Result;
use crate::event::Event;
use crate::hidden::HiddenField;
use crate::item::{Item, ItemValue};
use crate::keys::{Key, KeyAction, step_focus};
use crate::markup::{self, Labels};
use crate::message::{
    AddableClickMsg, AddableResultMsg, CheckboxMsg, ContainerClickMsg, ContainerFocusMsg,
    DebounceMsg, InputMsg, KeyMsg, Message, OutsideClickMsg, PreloadResultMsg, RemovePillMsg,
    SearchResultMsg,
};
use crate::render::{self, ListView, Pill};
use crate::search::{SearchPipeline, filter_local};
use crate::selection::{Change, Selection};

/// Global ID counter for component instances.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// A searchable multi-select dropdown.
pub struct Multiselect {
    id: u64,
    config: Config,
    backend: Arc<dyn Backend>,

    // State
    catalog: Catalog,
    selection: Selection,
    search: SearchPipeline,
    dropdown: Dropdown,
    active: bool,
    subscription: Option<Subscription>,

    // Rendered views
    list: ListView,
    pills: Vec<Pill>,
    hidden: HiddenField,
    input: InputArea,

    events: Vec<Event>,
}

impl Multiselect {
    /// Activates a component from its configuration.
    ///
    /// Builds the catalog and selection from the initial arrays, renders the
    /// full listing and synchronizes the hidden field. A non-empty initial
    /// selection queues a `SelectionChanged` event.
    pub fn new(config: Config, backend: Arc<dyn Backend>) -> Result<Self> {
        config.validate()?;

        let catalog = Catalog::new(config.items.clone());
        let selection = Selection::from_items(config.selected.clone());
        let list = render::listing(&catalog, &selection, config.is_addable());

        let mut ms = Self {
            id: next_id(),
            search: SearchPipeline::new(config.search_mode()),
            backend,
            catalog,
            selection,
            dropdown: Dropdown::Closed,
            active: true,
            subscription: None,
            list,
            pills: Vec::new(),
            hidden: HiddenField::new(),
            input: InputArea::default(),
            events: Vec::new(),
            config,
        };
        if ms.selection.is_empty() {
            ms.hidden.sync(&ms.selection);
        } else {
            ms.selection_settled();
        }
        debug!(
            id = ms.id,
            mode = ?ms.search.mode(),
            items = ms.catalog.len(),
            selected = ms.selection.len(),
            "multiselect activated"
        );
        Ok(ms)
    }

    /// Returns the component's unique ID.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the current catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the search text.
    #[must_use]
    pub fn term(&self) -> &str {
        self.search.term()
    }

    /// Returns the rendered list area.
    #[must_use]
    pub fn list(&self) -> &ListView {
        &self.list
    }

    /// Returns the rendered pills.
    #[must_use]
    pub fn pills(&self) -> &[Pill] {
        &self.pills
    }

    /// Returns the hidden native field.
    #[must_use]
    pub fn hidden_field(&self) -> &HiddenField {
        &self.hidden
    }

    /// Returns the selected values.
    #[must_use]
    pub fn values(&self) -> Vec<ItemValue> {
        self.hidden.values()
    }

    /// Returns the dropdown state.
    #[must_use]
    pub fn dropdown(&self) -> Dropdown {
        self.dropdown
    }

    /// Returns the input area layout.
    #[must_use]
    pub fn input_area(&self) -> InputArea {
        self.input
    }

    /// Returns whether the component still handles messages.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns queued events without removing them.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Removes and returns queued events.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Starts receiving outside clicks from `hub`, replacing any earlier
    /// subscription.
    pub fn subscribe(&mut self, hub: &ClickHub) {
        if !self.active {
            return;
        }
        // The old guard must unsubscribe before the id is registered again.
        self.subscription = None;
        self.subscription = Some(hub.subscribe(self.id));
    }

    /// Deactivates the component.
    ///
    /// Unsubscribes from outside clicks and discards the catalog, selection
    /// and search state. Late command results are ignored afterwards. The
    /// hidden field keeps its last synchronized options.
    pub fn teardown(&mut self) {
        self.subscription = None;
        self.active = false;
        self.search.cancel();
        self.search.clear_term();
        self.catalog.clear();
        self.selection.clear();
        self.list = ListView::default();
        self.pills.clear();
        self.dropdown = Dropdown::Closed;
        debug!(id = self.id, "multiselect torn down");
    }

    /// Returns the preload command, if a preload endpoint is configured.
    #[must_use]
    pub fn init(&self) -> Option<Cmd> {
        let url = self.config.preload_url.clone()?;
        let backend = Arc::clone(&self.backend);
        let id = self.id;
        debug!(id, %url, "preloading catalog");
        Some(Cmd::new(move || {
            Message::new(PreloadResultMsg {
                id,
                result: backend.preload(&url),
            })
        }))
    }

    /// Updates the component based on messages.
    pub fn update(&mut self, msg: Message) -> Option<Cmd> {
        if !self.active {
            return None;
        }

        if let Some(input) = msg.downcast_ref::<InputMsg>() {
            return self.on_input(input.value.clone());
        }
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            return self.on_key(key.key);
        }
        if let Some(click) = msg.downcast_ref::<CheckboxMsg>() {
            self.click_checkbox(&click.value);
            return None;
        }
        if let Some(pill) = msg.downcast_ref::<RemovePillMsg>() {
            self.remove_pill(&pill.value);
            return None;
        }
        if msg.is::<ContainerClickMsg>() {
            self.toggle_dropdown();
            return None;
        }
        if msg.is::<ContainerFocusMsg>() {
            self.input.focus();
            return None;
        }
        if msg.is::<AddableClickMsg>() {
            return self.request_addable();
        }
        if let Some(click) = msg.downcast_ref::<OutsideClickMsg>() {
            if click.id == self.id && self.subscription.is_some() {
                self.close_on_outside_click();
            }
            return None;
        }
        if let Some(tick) = msg.downcast_ref::<DebounceMsg>() {
            if tick.id != self.id {
                return None;
            }
            if !self.search.is_current_tick(tick.tag) {
                trace!(id = self.id, tag = tick.tag, "stale debounce tick dropped");
                return None;
            }
            return self.run_search();
        }
        if let Some(res) = msg.downcast_ref::<SearchResultMsg>() {
            if res.id == self.id {
                self.on_search_result(res.clone());
            }
            return None;
        }
        if let Some(res) = msg.downcast_ref::<PreloadResultMsg>() {
            if res.id == self.id {
                self.on_preload_result(res.clone());
            }
            return None;
        }
        if let Some(res) = msg.downcast_ref::<AddableResultMsg>() {
            if res.id == self.id {
                self.on_addable_result(res.clone());
            }
            return None;
        }

        None
    }

    /// Renders the component markup.
    #[must_use]
    pub fn view(&self) -> String {
        let labels = self.labels();
        format!(
            r#"{native}<div class="multiselect__container" tabindex="0"><div class="multiselect__preview">{pills}</div>{input}</div>{dropdown}"#,
            native = markup::native(&self.hidden),
            pills = markup::pills(&self.pills),
            input = markup::input(self.input, self.search.term(), self.config.disabled, labels),
            dropdown = markup::dropdown(self.dropdown, &markup::list(&self.list, labels)),
        )
    }

    fn labels(&self) -> Labels<'_> {
        Labels {
            placeholder: &self.config.placeholder,
            no_results: &self.config.no_results_message,
            addable: &self.config.addable_placeholder,
        }
    }

    // ------------------------------------------------------------------
    // Search pipeline
    // ------------------------------------------------------------------

    fn on_input(&mut self, value: String) -> Option<Cmd> {
        if self.config.disabled {
            return None;
        }
        self.search.set_term(value);
        Some(self.schedule_search())
    }

    fn schedule_search(&mut self) -> Cmd {
        let tag = self.search.schedule();
        trace!(id = self.id, tag, term = self.search.term(), "search scheduled");
        debounce(self.config.debounce(), self.id, tag)
    }

    fn run_search(&mut self) -> Option<Cmd> {
        match self.search.mode() {
            SearchMode::Local => {
                self.search_local();
                None
            }
            SearchMode::Remote => self.search_remote(),
        }
    }

    fn search_local(&mut self) {
        self.dropdown = Dropdown::Open;
        let matches = filter_local(&self.catalog, &self.selection, self.search.term());
        let nothing = matches.is_empty();
        let addable = self.config.is_addable();
        debug!(
            id = self.id,
            term = self.search.term(),
            rows = matches.len(),
            "local search"
        );
        self.list = render::search_view(matches, addable);
        if nothing && !addable {
            self.dropdown = Dropdown::Closed;
        }
    }

    fn search_remote(&mut self) -> Option<Cmd> {
        let term = self.search.term().to_string();
        if term.is_empty() {
            return None;
        }
        let Some(url) = self.config.search_url.clone() else {
            warn!(id = self.id, "remote search without a search url");
            return None;
        };
        let token = self.search.issue_token();
        let preselects = self.selection.values_csv();
        let backend = Arc::clone(&self.backend);
        let id = self.id;
        debug!(id, token, %term, "remote search issued");
        Some(Cmd::new(move || {
            Message::new(SearchResultMsg {
                id,
                token,
                result: backend.search(&url, &term, &preselects),
            })
        }))
    }

    fn on_search_result(&mut self, res: SearchResultMsg) {
        if !self.search.is_latest(res.token) {
            trace!(id = self.id, token = res.token, "stale search response dropped");
            return;
        }
        match res.result {
            Ok(items) => {
                debug!(id = self.id, items = items.len(), "search response applied");
                self.catalog.replace(items);
                self.list =
                    render::listing(&self.catalog, &self.selection, self.config.is_addable());
                self.dropdown = Dropdown::Open;
            }
            Err(err) => {
                warn!(id = self.id, error = %err, "remote search failed");
                self.events.push(Event::SearchFailed(err));
            }
        }
    }

    fn on_preload_result(&mut self, res: PreloadResultMsg) {
        match res.result {
            Ok(items) => {
                debug!(id = self.id, items = items.len(), "catalog preloaded");
                self.catalog.replace(items);
                self.list =
                    render::listing(&self.catalog, &self.selection, self.config.is_addable());
            }
            Err(err) => {
                warn!(id = self.id, error = %err, "preload failed");
                self.events.push(Event::PreloadFailed(err));
            }
        }
    }

    // ------------------------------------------------------------------
    // Selection store
    // ------------------------------------------------------------------

    fn click_checkbox(&mut self, value: &ItemValue) {
        let Some(pos) = self.list.position(value) else {
            trace!(id = self.id, %value, "click on a row that is not rendered");
            return;
        };
        let row = &mut self.list.rows_mut()[pos];
        row.checked = !row.checked;
        let (item, checked) = (row.item.clone(), row.checked);
        self.input.focused = true;
        self.toggle(item, checked);
    }

    fn toggle(&mut self, item: Item, checked: bool) {
        match self.selection.toggle(item, checked) {
            Some(Change::Added(item)) => {
                self.list.focus(self.list.position(&item.value));
                self.events.push(Event::ItemAdded(item));
            }
            Some(Change::Removed(value)) => {
                self.events.push(Event::ItemRemoved(value));
            }
            None => return,
        }
        self.selection_settled();
    }

    fn remove_pill(&mut self, value: &ItemValue) {
        if self.config.disabled {
            return;
        }
        if let Some(Change::Removed(value)) = self.selection.remove_by_value(value) {
            self.list.set_checked(&value, false);
            self.events.push(Event::ItemRemoved(value));
            self.selection_settled();
        }
    }

    fn remove_last(&mut self) {
        if !self.search.term().is_empty() {
            return;
        }
        if let Some(item) = self.selection.pop_last() {
            self.list.set_checked(&item.value, false);
            self.events.push(Event::ItemRemoved(item.value));
            self.selection_settled();
        }
    }

    /// Re-renders everything that depends on the selection.
    fn selection_settled(&mut self) {
        self.pills = render::pills(&self.selection, self.config.disabled);
        self.hidden.sync(&self.selection);
        self.input.selection_changed(!self.selection.is_empty());
        for item in self.selection.as_slice() {
            self.list.set_checked(&item.value, true);
        }
        debug!(id = self.id, selected = self.selection.len(), "selection changed");
        self.events.push(Event::SelectionChanged);
    }

    // ------------------------------------------------------------------
    // Keyboard navigator
    // ------------------------------------------------------------------

    fn on_key(&mut self, key: Key) -> Option<Cmd> {
        if self.config.disabled {
            return None;
        }
        match key.action() {
            KeyAction::FocusNext => self.move_focus(true),
            KeyAction::FocusPrev => self.move_focus(false),
            KeyAction::ToggleFocused => {
                if let Some(idx) = self.list.focused() {
                    let value = self.list.rows()[idx].item.value.clone();
                    self.click_checkbox(&value);
                }
            }
            KeyAction::RemoveLast => self.remove_last(),
            KeyAction::ClearOrToggle => {
                if !self.search.term().is_empty() {
                    self.search.clear_term();
                    return Some(self.schedule_search());
                }
                self.toggle_dropdown();
            }
        }
        None
    }

    fn move_focus(&mut self, forward: bool) {
        let next = step_focus(self.list.focused(), self.list.rows().len(), forward);
        self.list.focus(next);
    }

    // ------------------------------------------------------------------
    // Dropdown
    // ------------------------------------------------------------------

    fn toggle_dropdown(&mut self) {
        if self.dropdown.is_open() {
            self.close_dropdown();
        } else {
            if !self.catalog.is_empty() {
                self.dropdown = Dropdown::Open;
            }
            self.input.focused = true;
        }
    }

    fn close_dropdown(&mut self) {
        self.dropdown = Dropdown::Closed;
        self.input.dropdown_closed(!self.selection.is_empty());
    }

    fn close_on_outside_click(&mut self) {
        self.close_dropdown();
        self.search.clear_term();
        self.search.cancel();
        if self.search.mode() == SearchMode::Local {
            self.list = render::listing(&self.catalog, &self.selection, self.config.is_addable());
        }
        trace!(id = self.id, "closed by outside click");
    }

    // ------------------------------------------------------------------
    // Addable flow
    // ------------------------------------------------------------------

    fn request_addable(&mut self) -> Option<Cmd> {
        if self.config.disabled {
            return None;
        }
        self.events.push(Event::AddableRequested);

        let term = self.search.term().to_string();
        if term.is_empty() || self.catalog.has_text(&term, self.config.addable_match) {
            trace!(id = self.id, %term, "addable request skipped");
            return None;
        }
        let Some(url) = self.config.addable_url.clone() else {
            warn!(id = self.id, "addable requested without an addable url");
            return None;
        };
        let backend = Arc::clone(&self.backend);
        let id = self.id;
        debug!(id, %term, "addable request issued");
        Some(Cmd::new(move || {
            Message::new(AddableResultMsg {
                id,
                result: backend.add(&url, &term),
            })
        }))
    }

    fn on_addable_result(&mut self, res: AddableResultMsg) {
        let item = match res.result {
            Ok(item) => item,
            Err(err) => {
                warn!(id = self.id, error = %err, "addable request failed");
                self.events.push(Event::AddableFailed(err));
                return;
            }
        };
        if !self.catalog.items().iter().any(|i| i.value == item.value) {
            self.catalog.push(item.clone());
        }
        self.search.clear_term();
        self.list = render::listing(&self.catalog, &self.selection, self.config.is_addable());
        if let Some(Change::Added(item)) = self.selection.insert(item) {
            debug!(id = self.id, value = %item.value, "addable item created");
            self.events.push(Event::ItemAdded(item));
            self.selection_settled();
        }
    }
}

impl Model for Multiselect {
    fn init(&self) -> Option<Cmd> {
        Multiselect::init(self)
    }

    fn update(&mut self, msg: Message) -> Option<Cmd> {
        Multiselect::update(self, msg)
    }

    fn view(&self) -> String {
        Multiselect::view(self)
    }
}

impl std::fmt::Debug for Multiselect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Multiselect")
            .field("id", &self.id)
            .field("items_count", &self.catalog.len())
            .field("selected_count", &self.selection.len())
            .field("term", &self.search.term())
            .field("dropdown", &self.dropdown)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::StaticBackend;
    use crate::render::Row;

    fn fruit() -> Vec<Item> {
        vec![
            Item::new(1, "Apple"),
            Item::new(2, "Banana"),
            Item::new(3, "Cherry"),
        ]
    }

    fn local(config: Config) -> Multiselect {
        Multiselect::new(config.with_items(fruit()), Arc::new(StaticBackend::default())).unwrap()
    }

    fn type_term(ms: &mut Multiselect, term: &str) {
        let cmd = ms.update(Message::new(InputMsg::new(term))).unwrap();
        let tick = cmd.execute().unwrap();
        assert!(ms.update(tick).is_none());
    }

    fn texts(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.item.text.as_str()).collect()
    }

    #[test]
    fn test_initial_listing() {
        let ms = local(Config::new());
        assert_eq!(texts(ms.list().rows()), vec!["Apple", "Banana", "Cherry"]);
        assert_eq!(ms.dropdown(), Dropdown::Closed);
        assert!(ms.events().is_empty());
    }

    #[test]
    fn test_initial_selection_syncs_and_notifies() {
        let ms = local(Config::new().with_selected(vec![Item::new(2, "Banana")]));
        assert!(ms.hidden_field().mirrors(ms.selection()));
        assert!(ms.list().rows()[1].checked);
        assert_eq!(ms.pills().len(), 1);
        assert_eq!(ms.events(), &[Event::SelectionChanged]);
        assert!(ms.input_area().padded);
    }

    #[test]
    fn test_local_search_filters() {
        let mut ms = local(Config::new().with_debounce(std::time::Duration::ZERO));
        type_term(&mut ms, "an");
        assert_eq!(texts(ms.list().rows()), vec!["Banana"]);
        assert!(ms.dropdown().is_open());
    }

    #[test]
    fn test_local_search_no_results_closes() {
        let mut ms = local(Config::new().with_debounce(std::time::Duration::ZERO));
        type_term(&mut ms, "xyz");
        assert!(ms.list().rows().is_empty());
        assert_eq!(ms.dropdown(), Dropdown::Closed);
    }

    #[test]
    fn test_local_search_no_results_shows_addable() {
        let mut ms = local(
            Config::new()
                .with_debounce(std::time::Duration::ZERO)
                .with_addable_url("/add"),
        );
        type_term(&mut ms, "xyz");
        assert_eq!(ms.list(), &ListView::Addable);
        assert!(ms.dropdown().is_open());
    }

    #[test]
    fn test_checkbox_toggle_round_trip() {
        let mut ms = local(Config::new());
        ms.update(Message::new(CheckboxMsg { value: 2.into() }));
        assert_eq!(ms.values(), vec![ItemValue::from(2)]);
        assert_eq!(ms.list().focused(), Some(1));
        assert_eq!(
            ms.drain_events(),
            vec![Event::ItemAdded(Item::new(2, "Banana")), Event::SelectionChanged]
        );

        ms.update(Message::new(CheckboxMsg { value: 2.into() }));
        assert!(ms.values().is_empty());
        assert!(!ms.list().rows()[1].checked);
        assert_eq!(
            ms.drain_events(),
            vec![Event::ItemRemoved(2.into()), Event::SelectionChanged]
        );
    }

    #[test]
    fn test_remove_pill() {
        let mut ms = local(Config::new().with_selected(vec![Item::new(1, "Apple")]));
        ms.drain_events();
        ms.update(Message::new(RemovePillMsg { value: "1".into() }));
        assert!(ms.selection().is_empty());
        assert!(!ms.list().rows()[0].checked);
        assert!(ms.input_area().visible);
        assert_eq!(
            ms.drain_events(),
            vec![Event::ItemRemoved("1".into()), Event::SelectionChanged]
        );
    }

    #[test]
    fn test_backspace_pops_last() {
        let mut ms = local(
            Config::new().with_selected(vec![Item::new(1, "Apple"), Item::new(3, "Cherry")]),
        );
        ms.drain_events();
        ms.update(Message::new(KeyMsg::new(Key::Backspace)));
        assert_eq!(ms.values(), vec![ItemValue::from(1)]);
        assert!(!ms.list().rows()[2].checked);
        assert_eq!(
            ms.drain_events(),
            vec![Event::ItemRemoved(3.into()), Event::SelectionChanged]
        );
    }

    #[test]
    fn test_backspace_with_term_is_ignored() {
        let mut ms = local(Config::new().with_selected(vec![Item::new(1, "Apple")]));
        ms.drain_events();
        ms.update(Message::new(InputMsg::new("a")));
        ms.update(Message::new(KeyMsg::new(Key::Backspace)));
        assert_eq!(ms.selection().len(), 1);
        assert!(ms.events().is_empty());
    }

    #[test]
    fn test_arrow_navigation_wraps() {
        let mut ms = local(Config::new());
        let down = || Message::new(KeyMsg::new(Key::ArrowDown));
        let up = || Message::new(KeyMsg::new(Key::ArrowUp));

        ms.update(down());
        assert_eq!(ms.list().focused(), Some(0));
        ms.update(down());
        ms.update(down());
        assert_eq!(ms.list().focused(), Some(2));
        ms.update(down());
        assert_eq!(ms.list().focused(), Some(0));
        ms.update(up());
        assert_eq!(ms.list().focused(), Some(2));
    }

    #[test]
    fn test_enter_toggles_focused_row() {
        let mut ms = local(Config::new());
        ms.update(Message::new(KeyMsg::new(Key::ArrowDown)));
        ms.update(Message::new(KeyMsg::new(Key::Enter)));
        assert_eq!(ms.values(), vec![ItemValue::from(1)]);
        ms.update(Message::new(KeyMsg::new(Key::Enter)));
        assert!(ms.values().is_empty());
    }

    #[test]
    fn test_enter_without_focus_does_nothing() {
        let mut ms = local(Config::new());
        ms.update(Message::new(KeyMsg::new(Key::Enter)));
        assert!(ms.selection().is_empty());
    }

    #[test]
    fn test_escape_toggles_when_term_empty() {
        let mut ms = local(Config::new());
        ms.update(Message::new(KeyMsg::new(Key::Escape)));
        assert!(ms.dropdown().is_open());
        ms.update(Message::new(KeyMsg::new(Key::Escape)));
        assert!(!ms.dropdown().is_open());
    }

    #[test]
    fn test_escape_clears_term_and_searches() {
        let mut ms = local(Config::new().with_debounce(std::time::Duration::ZERO));
        type_term(&mut ms, "an");
        let cmd = ms.update(Message::new(KeyMsg::new(Key::Escape))).unwrap();
        assert_eq!(ms.term(), "");
        ms.update(cmd.execute().unwrap());
        assert_eq!(ms.list().rows().len(), 3);
    }

    #[test]
    fn test_container_click_needs_items_to_open() {
        let mut ms = Multiselect::new(Config::new(), Arc::new(StaticBackend::default())).unwrap();
        ms.update(Message::new(ContainerClickMsg));
        assert!(!ms.dropdown().is_open());
        assert!(ms.input_area().focused);
    }

    #[test]
    fn test_closing_collapses_input_with_pills() {
        let mut ms = local(Config::new().with_selected(vec![Item::new(1, "Apple")]));
        ms.update(Message::new(ContainerClickMsg));
        ms.update(Message::new(ContainerClickMsg));
        assert!(!ms.input_area().visible);
        ms.update(Message::new(ContainerFocusMsg));
        assert!(ms.input_area().visible);
    }

    #[test]
    fn test_outside_click_requires_subscription() {
        let mut ms = local(Config::new());
        ms.update(Message::new(ContainerClickMsg));
        let id = ms.id();
        ms.update(Message::new(OutsideClickMsg { id }));
        assert!(ms.dropdown().is_open());

        let hub = ClickHub::new();
        ms.subscribe(&hub);
        for msg in hub.click(None) {
            ms.update(msg);
        }
        assert!(!ms.dropdown().is_open());
    }

    #[test]
    fn test_stale_debounce_tick_is_dropped() {
        let mut ms = local(Config::new().with_debounce(std::time::Duration::ZERO));
        let first = ms.update(Message::new(InputMsg::new("a"))).unwrap();
        let second = ms.update(Message::new(InputMsg::new("an"))).unwrap();
        ms.update(first.execute().unwrap());
        assert!(!ms.dropdown().is_open());
        ms.update(second.execute().unwrap());
        assert_eq!(texts(ms.list().rows()), vec!["Banana"]);
    }

    #[test]
    fn test_messages_for_other_instances_are_ignored() {
        let mut ms = local(Config::new());
        ms.update(Message::new(SearchResultMsg {
            id: ms.id() + 1000,
            token: 0,
            result: Ok(Vec::new()),
        }));
        assert_eq!(ms.catalog().len(), 3);
    }

    #[test]
    fn test_disabled_ignores_search_and_pill_removal() {
        let mut ms = local(
            Config::new()
                .with_disabled(true)
                .with_selected(vec![Item::new(1, "Apple")]),
        );
        assert!(!ms.pills()[0].deletable);
        assert!(ms.update(Message::new(InputMsg::new("a"))).is_none());
        ms.update(Message::new(RemovePillMsg { value: 1.into() }));
        ms.update(Message::new(KeyMsg::new(Key::ArrowDown)));
        ms.update(Message::new(KeyMsg::new(Key::Enter)));
        ms.update(Message::new(KeyMsg::new(Key::Backspace)));
        assert_eq!(ms.values(), vec![ItemValue::from(1)]);
        assert_eq!(ms.list().focused(), None);
    }

    #[test]
    fn test_disabled_still_toggles_checkboxes() {
        let mut ms = local(
            Config::new()
                .with_disabled(true)
                .with_selected(vec![Item::new(1, "Apple")]),
        );
        ms.drain_events();
        ms.update(Message::new(CheckboxMsg { value: 2.into() }));
        assert_eq!(ms.values(), vec![ItemValue::from(1), ItemValue::from(2)]);
        assert!(ms.pills().iter().all(|p| !p.deletable));
        ms.update(Message::new(CheckboxMsg { value: 1.into() }));
        assert_eq!(ms.values(), vec![ItemValue::from(2)]);
        assert!(ms.hidden_field().mirrors(ms.selection()));
    }

    #[test]
    fn test_resubscribing_keeps_outside_clicks() {
        let hub = ClickHub::new();
        let mut ms = local(Config::new());
        ms.subscribe(&hub);
        ms.subscribe(&hub);
        assert_eq!(hub.len(), 1);

        ms.update(Message::new(ContainerClickMsg));
        assert!(ms.dropdown().is_open());
        for msg in hub.click(None) {
            ms.update(msg);
        }
        assert_eq!(ms.dropdown(), Dropdown::Closed);
    }

    #[test]
    fn test_subscribing_to_another_hub_moves_the_listener() {
        let first = ClickHub::new();
        let second = ClickHub::new();
        let mut ms = local(Config::new());
        ms.subscribe(&first);
        ms.subscribe(&second);
        assert!(first.is_empty());
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_teardown_discards_state() {
        let hub = ClickHub::new();
        let mut ms = local(Config::new().with_selected(vec![Item::new(1, "Apple")]));
        ms.subscribe(&hub);
        ms.teardown();
        assert!(hub.is_empty());
        assert!(!ms.is_active());
        assert!(ms.catalog().is_empty());
        assert!(ms.selection().is_empty());
        ms.update(Message::new(ContainerClickMsg));
        assert!(!ms.dropdown().is_open());
    }

    #[test]
    fn test_view_contains_views() {
        let mut ms = local(Config::new().with_selected(vec![Item::new(2, "Banana")]));
        ms.update(Message::new(ContainerClickMsg));
        let html = ms.view();
        assert!(html.contains("multiselect__dropdown--open"));
        assert!(html.contains(r#"<option value="2" selected>Banana</option>"#));
        assert!(html.contains("multiselect__pill"));
        assert!(html.contains(r#"data-text="Cherry""#));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = Config {
            search_remote: true,
            ..Config::default()
        };
        assert!(Multiselect::new(config, Arc::new(StaticBackend::default())).is_err());
    }
}
