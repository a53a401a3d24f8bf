//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use lynqx_core::{NewScenario, Notice, ScenarioType, Step};
use lynqx_workflow::{Action, ReviewWorkflow};
use strum::IntoEnumIterator;
use tracing::debug;

/// Application mode determines how keys are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AppMode {
    /// Navigate steps and act on the current page
    Browse,
    /// Typing into the user story editor
    EditStories,
    /// Filling in the custom scenario form
    AddScenario,
}

/// Custom scenario form field focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    /// Scenario name
    Name,
    /// Description
    Description,
    /// Expected result
    ExpectedResult,
    /// Scenario type picker
    ScenarioType,
    /// Related user story
    RelatedStory,
}

impl FormField {
    const ORDER: [FormField; 5] = [
        FormField::Name,
        FormField::Description,
        FormField::ExpectedResult,
        FormField::ScenarioType,
        FormField::RelatedStory,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Field after this one, wrapping around.
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Field before this one, wrapping around.
    pub fn previous(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Label shown next to the field.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Description => "Description",
            FormField::ExpectedResult => "Expected Result",
            FormField::ScenarioType => "Type",
            FormField::RelatedStory => "Related Story",
        }
    }
}

/// Edit buffer for the custom scenario form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioForm {
    /// Name being typed
    pub name: String,
    /// Description being typed
    pub description: String,
    /// Expected result being typed
    pub expected_result: String,
    /// Selected scenario type
    pub scenario_type: ScenarioType,
    /// Related story being typed
    pub related_story: String,
    /// Which field is currently focused
    pub focused_field: FormField,
}

impl Default for ScenarioForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            expected_result: String::new(),
            scenario_type: ScenarioType::default(),
            related_story: String::new(),
            focused_field: FormField::Name,
        }
    }
}

impl ScenarioForm {
    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focused_field {
            FormField::Name => Some(&mut self.name),
            FormField::Description => Some(&mut self.description),
            FormField::ExpectedResult => Some(&mut self.expected_result),
            FormField::RelatedStory => Some(&mut self.related_story),
            FormField::ScenarioType => None,
        }
    }

    /// Cycle the scenario type forward or backward.
    pub fn cycle_type(&mut self, forward: bool) {
        let types: Vec<ScenarioType> = ScenarioType::iter().collect();
        let current = types
            .iter()
            .position(|t| *t == self.scenario_type)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % types.len()
        } else {
            (current + types.len() - 1) % types.len()
        };
        self.scenario_type = types[next];
    }

    /// Input for the workflow's custom insertion.
    pub fn to_new_scenario(&self) -> NewScenario {
        let related = self.related_story.trim();
        NewScenario {
            name: self.name.clone(),
            description: self.description.clone(),
            expected_result: self.expected_result.clone(),
            scenario_type: self.scenario_type,
            related_story: (!related.is_empty()).then(|| related.to_string()),
        }
    }
}

/// What the runner should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// Nothing beyond redrawing
    None,
    /// Send this action to the workflow
    Dispatch(Action),
    /// Leave the application
    Quit,
}

/// Main application state.
pub struct App {
    /// Workflow being driven
    pub workflow: ReviewWorkflow,
    /// Current mode
    pub mode: AppMode,
    /// User story editor contents
    pub story_buffer: String,
    /// Custom scenario form (when in AddScenario mode)
    pub form: Option<ScenarioForm>,
    /// Currently selected scenario on the review page
    pub selected_index: usize,
    /// Notices from the last workflow action
    pub notices: Vec<Notice>,
    /// Status message to display when there are no notices
    pub status_message: String,
    /// A generation request is in flight
    pub busy: bool,
    /// Whether to quit the application
    pub should_quit: bool,
}

impl App {
    /// Create a new App around a workflow.
    pub fn new(workflow: ReviewWorkflow) -> Self {
        let story_buffer = workflow.state().story_text().to_string();
        Self {
            workflow,
            mode: AppMode::Browse,
            story_buffer,
            form: None,
            selected_index: 0,
            notices: Vec::new(),
            status_message: String::from("Press e to enter user stories"),
            busy: false,
            should_quit: false,
        }
    }

    /// Prefill the story editor, e.g. from a file.
    pub fn with_stories(mut self, text: impl Into<String>) -> Self {
        self.story_buffer = text.into();
        self
    }

    /// Step currently shown.
    pub fn current_step(&self) -> Step {
        self.workflow.state().current_step()
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        let len = self.workflow.state().scenarios().len();
        if self.selected_index < len.saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Translate a key press into a command, updating local editing state.
    pub fn handle_key(&mut self, key: KeyEvent) -> AppCommand {
        if key.kind != KeyEventKind::Press {
            return AppCommand::None;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppCommand::Quit;
        }

        match self.mode {
            AppMode::Browse => self.handle_browse_key(key),
            AppMode::EditStories => self.handle_story_key(key),
            AppMode::AddScenario => self.handle_form_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> AppCommand {
        let step = self.current_step();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => AppCommand::Quit,
            // Stories typed or loaded into the editor are submitted on the way out of step 1.
            KeyCode::Right | KeyCode::Char('n')
                if step == Step::Input && !self.story_buffer.trim().is_empty() =>
            {
                AppCommand::Dispatch(Action::SubmitStories(self.story_buffer.clone()))
            }
            KeyCode::Right | KeyCode::Char('n') => AppCommand::Dispatch(Action::Next),
            KeyCode::Left | KeyCode::Char('b') => AppCommand::Dispatch(Action::Back),
            KeyCode::Char('e') | KeyCode::Enter if step == Step::Input => {
                self.mode = AppMode::EditStories;
                AppCommand::None
            }
            KeyCode::Char('g') | KeyCode::Enter if step == Step::Generate => {
                AppCommand::Dispatch(Action::GenerateScenarios)
            }
            KeyCode::Up | KeyCode::Char('k') if step == Step::Review => {
                self.select_previous();
                AppCommand::None
            }
            KeyCode::Down | KeyCode::Char('j') if step == Step::Review => {
                self.select_next();
                AppCommand::None
            }
            KeyCode::Char('a') if step == Step::Review => {
                AppCommand::Dispatch(Action::Approve(self.selected_index))
            }
            KeyCode::Char('r') if step == Step::Review => {
                AppCommand::Dispatch(Action::Reject(self.selected_index))
            }
            KeyCode::Char('c') if step == Step::Review => {
                self.form = Some(ScenarioForm::default());
                self.mode = AppMode::AddScenario;
                AppCommand::None
            }
            _ => AppCommand::None,
        }
    }

    fn handle_story_key(&mut self, key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.mode = AppMode::Browse;
                AppCommand::Dispatch(Action::SubmitStories(self.story_buffer.clone()))
            }
            KeyCode::Esc => {
                self.mode = AppMode::Browse;
                AppCommand::None
            }
            KeyCode::Enter => {
                self.story_buffer.push('\n');
                AppCommand::None
            }
            KeyCode::Backspace => {
                self.story_buffer.pop();
                AppCommand::None
            }
            KeyCode::Char(c) => {
                self.story_buffer.push(c);
                AppCommand::None
            }
            _ => AppCommand::None,
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> AppCommand {
        let Some(form) = self.form.as_mut() else {
            self.mode = AppMode::Browse;
            return AppCommand::None;
        };

        match key.code {
            KeyCode::Esc => {
                self.form = None;
                self.mode = AppMode::Browse;
                AppCommand::None
            }
            KeyCode::Enter => AppCommand::Dispatch(Action::AddCustomScenario(form.to_new_scenario())),
            KeyCode::Tab | KeyCode::Down => {
                form.focused_field = form.focused_field.next();
                AppCommand::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                form.focused_field = form.focused_field.previous();
                AppCommand::None
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
                if form.focused_field == FormField::ScenarioType =>
            {
                form.cycle_type(key.code != KeyCode::Left);
                AppCommand::None
            }
            KeyCode::Backspace => {
                if let Some(text) = form.focused_text() {
                    text.pop();
                }
                AppCommand::None
            }
            KeyCode::Char(c) => {
                if let Some(text) = form.focused_text() {
                    text.push(c);
                }
                AppCommand::None
            }
            _ => AppCommand::None,
        }
    }

    /// Send an action to the workflow and record the outcome.
    pub async fn apply(&mut self, action: Action) {
        let closes_form = matches!(action, Action::AddCustomScenario(_));
        debug!(action = action.label(), "Dispatching");

        let notices = self.workflow.handle(action).await;
        let succeeded = !notices.iter().any(Notice::is_problem);

        if closes_form && succeeded {
            self.form = None;
            self.mode = AppMode::Browse;
            self.selected_index = self.workflow.state().scenarios().len().saturating_sub(1);
        }
        let len = self.workflow.state().scenarios().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }

        self.status_message = if succeeded {
            String::from("Ready")
        } else {
            String::from("Action refused")
        };
        self.notices = notices;
    }
}
