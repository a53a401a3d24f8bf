//! UI rendering for TUI.

use crate::app::{App, AppMode, FormField, ScenarioForm};
use lynqx_core::{NoticeLevel, ScenarioStatus, Step};
use lynqx_workflow::ExportFormat;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Row, Table, Wrap},
};

/// Draw the main UI.
#[tracing::instrument(skip_all, level = "trace")]
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(5), // Status bar
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(0)])
        .split(chunks[1]);

    draw_sidebar(f, app, body[0]);

    match app.current_step() {
        Step::Input => draw_input_view(f, app, body[1]),
        Step::Generate => draw_generate_view(f, app, body[1]),
        Step::Review => draw_review_view(f, app, body[1]),
        Step::CreateTestCases => draw_test_case_view(f, app, body[1]),
        step => draw_placeholder_view(f, step, body[1]),
    }

    draw_status_bar(f, app, chunks[2]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let step = app.current_step();
    let title = format!(
        "LynQX - Step {} of 8: {}    [{}]",
        step.number(),
        step,
        app.workflow.provider_label()
    );
    let header = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn draw_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let current = app.current_step();
    let items: Vec<ListItem> = Step::all()
        .map(|step| {
            let (marker, style) = if step == current {
                (
                    "▶",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else if step.number() < current.number() {
                ("✓", Style::default().fg(Color::Green))
            } else {
                (" ", Style::default().fg(Color::Gray))
            };
            ListItem::new(format!("{} {}. {}", marker, step.number(), step)).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Steps"));
    f.render_widget(list, area);
}

fn draw_input_view(f: &mut Frame, app: &App, area: Rect) {
    let editing = app.mode == AppMode::EditStories;
    let title = if editing {
        "User Stories (editing - one story per line)"
    } else {
        "User Stories"
    };

    let text = if app.story_buffer.is_empty() && !editing {
        "No user stories yet. Press e to start typing.".to_string()
    } else if editing {
        format!("{}▏", app.story_buffer)
    } else {
        app.story_buffer.clone()
    };

    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let input = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(input, area);
}

fn draw_generate_view(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(35), Constraint::Min(0)])
        .split(area);

    let state = app.workflow.state();
    let stories: Vec<ListItem> = state
        .story_lines()
        .iter()
        .enumerate()
        .map(|(i, story)| ListItem::new(format!("{}. {}", i + 1, story)))
        .collect();
    let stories = List::new(stories).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Submitted User Stories"),
    );
    f.render_widget(stories, chunks[0]);

    let output = if app.busy {
        Paragraph::new("Generating test scenarios...").style(Style::default().fg(Color::Yellow))
    } else if state.raw_generated_text().is_empty() {
        Paragraph::new("Press g to generate test scenarios.")
    } else {
        Paragraph::new(state.raw_generated_text())
    };
    let output = output
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Generated Scenarios"),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(output, chunks[1]);
}

fn status_style(status: ScenarioStatus) -> Style {
    match status {
        ScenarioStatus::Approved => Style::default().fg(Color::Green),
        ScenarioStatus::Rejected => Style::default().fg(Color::Red),
        ScenarioStatus::PendingReview => Style::default().fg(Color::Yellow),
    }
}

fn draw_review_view(f: &mut Frame, app: &App, area: Rect) {
    let state = app.workflow.state();

    let header = Row::new(vec!["ID", "Name", "Type", "Status"])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = state
        .scenarios()
        .iter()
        .enumerate()
        .map(|(i, scenario)| {
            let style = if i == app.selected_index {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                status_style(*scenario.status())
            };
            Row::new(vec![
                scenario.id().clone(),
                scenario.name().clone(),
                scenario.scenario_type().to_string(),
                scenario.status().to_string(),
            ])
            .style(style)
        })
        .collect();

    let title = format!(
        "Review Scenarios - {} of {} approved",
        state.approved_count(),
        state.scenarios().len()
    );
    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Min(20),
            Constraint::Length(10),
            Constraint::Length(16),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title));

    if let (AppMode::AddScenario, Some(form)) = (app.mode, app.form.as_ref()) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(9)])
            .split(area);
        f.render_widget(table, chunks[0]);
        draw_scenario_form(f, form, chunks[1]);
    } else {
        f.render_widget(table, area);
    }
}

fn draw_scenario_form(f: &mut Frame, form: &ScenarioForm, area: Rect) {
    let fields = [
        (FormField::Name, form.name.clone()),
        (FormField::Description, form.description.clone()),
        (FormField::ExpectedResult, form.expected_result.clone()),
        (FormField::ScenarioType, format!("◀ {} ▶", form.scenario_type)),
        (FormField::RelatedStory, form.related_story.clone()),
    ];

    let lines: Vec<Line> = fields
        .into_iter()
        .map(|(field, value)| {
            let focused = field == form.focused_field;
            let label_style = if focused {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let cursor = if focused && field != FormField::ScenarioType {
                "▏"
            } else {
                ""
            };
            Line::from(vec![
                Span::styled(format!("{:>16}: ", field.label()), label_style),
                Span::raw(format!("{}{}", value, cursor)),
            ])
        })
        .collect();

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title("Add Custom Scenario"),
    );
    f.render_widget(form, area);
}

fn draw_test_case_view(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.workflow.export_approved(ExportFormat::Text) {
        Ok(text) => text,
        Err(e) => e.user_message(),
    };

    let view = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Approved Scenarios for Test Case Creation"),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(view, area);
}

fn draw_placeholder_view(f: &mut Frame, step: Step, area: Rect) {
    let text = format!("{} is not implemented yet.", step);
    let view = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(step.title()))
        .alignment(Alignment::Center);
    f.render_widget(view, area);
}

fn notice_style(level: NoticeLevel) -> Style {
    match level {
        NoticeLevel::Info => Style::default().fg(Color::Gray),
        NoticeLevel::Success => Style::default().fg(Color::Green),
        NoticeLevel::Warning => Style::default().fg(Color::Yellow),
        NoticeLevel::Error => Style::default().fg(Color::Red),
    }
}

fn help_text(app: &App) -> &'static str {
    match (app.mode, app.current_step()) {
        (AppMode::EditStories, _) => "Type stories | Enter: New line | Ctrl+S: Submit | Esc: Stop editing",
        (AppMode::AddScenario, _) => "Tab/↑↓: Field | ←→: Type | Enter: Add | Esc: Cancel",
        (AppMode::Browse, Step::Input) => "E: Edit stories | →: Next | Q: Quit",
        (AppMode::Browse, Step::Generate) => "G: Generate | ←: Back | →: Next | Q: Quit",
        (AppMode::Browse, Step::Review) => {
            "↑↓: Select | A: Approve | R: Reject | C: Add custom | ←: Back | →: Next | Q: Quit"
        }
        (AppMode::Browse, _) => "←: Back | →: Next | Q: Quit",
    }
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = if app.notices.is_empty() {
        vec![Line::from(app.status_message.as_str())]
    } else {
        app.notices
            .iter()
            .map(|notice| Line::styled(notice.to_string(), notice_style(notice.level)))
            .collect()
    };
    lines.push(Line::styled(help_text(app), Style::default().fg(Color::DarkGray)));

    let status = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(status, area);
}
