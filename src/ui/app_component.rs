use crate::config::Config;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::store::{StoreChange, TodoListStore};
use crate::ui::components::{DialogComponent, InputComponent, StatusBar, TodoListComponent};
use crate::ui::core::{Action, Component, DialogType, EventType, Focus};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, info};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use tokio::sync::mpsc;

/// Top-level component: owns the todo store and routes every event.
///
/// The app subscribes to the store through a channel. Components never touch
/// the store; they return actions, the app applies them, and the resulting
/// change notifications decide what gets refreshed and redrawn.
pub struct AppComponent {
    // Component composition
    input: InputComponent,
    todo_list: TodoListComponent,
    dialog: DialogComponent,

    // Application state
    store: TodoListStore,
    changes_rx: mpsc::UnboundedReceiver<StoreChange>,
    config: Config,
    icons: IconService,
    logger: Logger,

    // Simple UI state
    focus: Focus,
    should_quit: bool,
    needs_redraw: bool,
}

impl AppComponent {
    pub fn new(config: Config, logger: Logger) -> Self {
        let mut store = TodoListStore::new();
        let (_subscription, changes_rx) = store.subscribe_channel();
        let icons = IconService::new(config.display.icon_theme);

        let mut todo_list = TodoListComponent::new();
        todo_list.allow_completion = config.ui.allow_completion;
        todo_list.confirm_remove = config.ui.confirm_remove;
        todo_list.display_config = config.display.clone();

        let mut dialog = DialogComponent::new();
        dialog.allow_completion = config.ui.allow_completion;
        dialog.set_logger(logger.clone());

        let mut app = Self {
            input: InputComponent::new(config.ui.placeholder.clone()),
            todo_list,
            dialog,
            store,
            changes_rx,
            config,
            icons,
            logger,
            focus: Focus::Input,
            should_quit: false,
            needs_redraw: true,
        };
        app.apply_icons();
        app.set_focus(Focus::Input);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn store(&self) -> &TodoListStore {
        &self.store
    }

    /// Direct store access; changes made here are picked up by the next
    /// [`AppComponent::process_store_changes`].
    pub fn store_mut(&mut self) -> &mut TodoListStore {
        &mut self.store
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.todo_list.selected_item().map(|_| self.todo_list.selected_index)
    }

    /// Returns whether a frame should be drawn, and resets the flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.input.focused = focus == Focus::Input;
        self.todo_list.focused = focus == Focus::List;
    }

    fn apply_icons(&mut self) {
        self.input.icons = self.icons.clone();
        self.todo_list.icons = self.icons.clone();
        self.dialog.icons = self.icons.clone();
    }

    /// Drain pending change notifications and refresh components.
    ///
    /// Returns the number of changes processed.
    pub fn process_store_changes(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(change) = self.changes_rx.try_recv() {
            debug!("Store change: {change:?}");
            self.todo_list.apply_change(&change);
            processed += 1;
        }

        if processed > 0 {
            self.sync_component_data();
            self.needs_redraw = true;
        }
        processed
    }

    /// Update all components with current store data
    fn sync_component_data(&mut self) {
        self.input.set_value(self.store.pending_input());
        self.todo_list.update_data(self.store.items().to_vec());
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                info!("Global key: 'q' - quitting application");
                Action::Quit
            }
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('t') => Action::CycleIconTheme,
            _ => Action::None,
        }
    }

    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            info!("Global key: Ctrl+C - quitting application");
            return Action::Quit;
        }

        // Dialog has priority when visible
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        match self.focus {
            // Every printable key is text while typing, so no global keys here
            Focus::Input => self.input.handle_key_events(key),
            Focus::List => match self.todo_list.handle_key_events(key) {
                Action::None => self.handle_global_key(key),
                action => action,
            },
        }
    }

    /// Apply an action that survived the component hierarchy
    pub fn handle_app_action(&mut self, action: Action) {
        match action {
            Action::InputChanged(text) => self.store.update_input(text),
            Action::SubmitInput => {
                if let Some(id) = self.store.submit_input() {
                    info!("Added todo {id}");
                }
            }
            Action::ToggleTodo(id) => {
                if self.config.ui.allow_completion && self.store.toggle_by_id(id) {
                    info!("Toggled todo {id}");
                }
            }
            Action::RemoveTodo(id) => {
                if let Some(item) = self.store.remove_by_id(id) {
                    info!("Removed todo {} ({:?})", item.id, item.text);
                }
            }
            Action::Focus(focus) => self.set_focus(focus),
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.apply_icons();
                info!("Icon theme is now {:?}", self.icons.theme());
            }
            Action::Quit => self.should_quit = true,
            // Dialog visibility is handled by the dialog component
            Action::ShowDialog(_) | Action::HideDialog | Action::None => {}
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event: EventType) {
        let action = match event {
            EventType::Key(key) => {
                // Selection and cursor moves don't touch the store but still need a frame
                self.needs_redraw = true;
                self.route_key(key)
            }
            EventType::Resize(_, _) => {
                self.needs_redraw = true;
                Action::None
            }
            EventType::Tick | EventType::Other => Action::None,
        };

        let action = self.dialog.update(action);
        self.handle_app_action(action);
        self.process_store_changes();
    }

    fn render_title(&self, f: &mut Frame, rect: Rect) {
        let title = Paragraph::new(format!("{} {}", self.icons.title(), self.config.ui.title))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        f.render_widget(title, rect);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        self.dialog.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_layout(rect);

        self.render_title(f, areas.title);
        self.input.render(f, areas.input);
        self.todo_list.render(f, areas.list);
        StatusBar::render(
            f,
            areas.status,
            self.store.len(),
            self.store.completed_count(),
            self.focus,
            self.config.ui.allow_completion,
        );

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
