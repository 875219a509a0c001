// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use lance_app::{
    ActivityEvent, AmountBucket, DashCommand, DashEvent, DashState, DaysBucket,
    FilterPanelVisibility, Invoice, InvoiceId, ModalState, ModalSubject, OverdueInvoice,
    PaidInvoice, SendOutcome, Tone, filter_invoices, format_amount, format_short_date,
    reminder_body, reminder_subject,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap};
use std::io;
use std::time::Duration;

const CURSOR_MARK: &str = "▸";
// Older marks shown on the timeline rail beyond the five feed entries.
const TIMELINE_MINOR_MARKS: [&str; 3] = ["2d", "3d", "4d"];

/// Data-provider and message-sink seam the dashboard is driven through.
/// The CLI adapts the sample store onto this; tests substitute a mock.
pub trait AppRuntime {
    fn load_overdue(&mut self) -> Result<Vec<OverdueInvoice>>;
    fn load_paid(&mut self) -> Result<Vec<PaidInvoice>>;
    fn load_activity(&mut self) -> Result<Vec<ActivityEvent>>;
    fn send_reminder(
        &mut self,
        invoice_id: InvoiceId,
        tone: Tone,
        body: &str,
    ) -> Result<SendOutcome>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiOptions {
    pub greeting_name: String,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            greeting_name: "Ella".to_owned(),
        }
    }
}

#[derive(Debug, Default)]
struct ViewData {
    invoices: Vec<Invoice>,
    overdue_count: usize,
    paid_count: usize,
    activity: Vec<ActivityEvent>,
    cursor: usize,
    help_visible: bool,
}

pub fn run_app<R: AppRuntime>(
    state: &mut DashState,
    runtime: &mut R,
    options: &UiOptions,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    if let Err(error) = refresh_view_data(runtime, &mut view_data) {
        state.dispatch(DashCommand::SetStatus(format!("load failed: {error}")));
    }

    let mut result = Ok(());
    loop {
        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data, options)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, runtime, &mut view_data, key) {
                        break;
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn refresh_view_data<R: AppRuntime>(runtime: &mut R, view_data: &mut ViewData) -> Result<()> {
    let overdue = runtime.load_overdue()?;
    let paid = runtime.load_paid()?;
    view_data.overdue_count = overdue.len();
    view_data.paid_count = paid.len();
    view_data.invoices = overdue
        .into_iter()
        .map(Invoice::Overdue)
        .chain(paid.into_iter().map(Invoice::Paid))
        .collect();
    view_data.activity = runtime.load_activity()?;
    view_data.cursor = 0;
    Ok(())
}

fn visible_invoices<'a>(state: &DashState, view_data: &'a ViewData) -> Vec<&'a Invoice> {
    filter_invoices(&view_data.invoices, state.selection)
}

fn clamp_cursor(state: &DashState, view_data: &mut ViewData) {
    let visible = visible_invoices(state, view_data).len();
    view_data.cursor = view_data.cursor.min(visible.saturating_sub(1));
}

fn handle_key_event<R: AppRuntime>(
    state: &mut DashState,
    runtime: &mut R,
    view_data: &mut ViewData,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        if key.code == KeyCode::Esc || key.code == KeyCode::Char('?') {
            view_data.help_visible = false;
        }
        return false;
    }

    if key.code == KeyCode::Char('?') {
        view_data.help_visible = true;
        return false;
    }

    if matches!(state.modal, ModalState::Open(_)) {
        handle_modal_key(state, runtime, key);
        return false;
    }

    handle_list_key(state, view_data, key)
}

fn handle_modal_key<R: AppRuntime>(state: &mut DashState, runtime: &mut R, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            state.dispatch(DashCommand::CloseModal);
        }
        KeyCode::Char('1') => {
            state.dispatch(DashCommand::SelectTone(Tone::Polite));
        }
        KeyCode::Char('2') => {
            state.dispatch(DashCommand::SelectTone(Tone::Professional));
        }
        KeyCode::Char('3') => {
            state.dispatch(DashCommand::SelectTone(Tone::Firm));
        }
        KeyCode::Char('s') => submit_reminder(state, runtime),
        _ => {}
    }
}

fn submit_reminder<R: AppRuntime>(state: &mut DashState, runtime: &mut R) {
    let ModalState::Open(subject) = &state.modal else {
        return;
    };
    let ModalSubject::Preview { invoice, tone } = subject else {
        return;
    };
    let invoice_id = invoice.id;
    let client = invoice.client.clone();
    let tone = *tone;
    let body = reminder_body(subject);

    let events = state.dispatch(DashCommand::SendReminder);
    if !events
        .iter()
        .any(|event| matches!(event, DashEvent::ReminderSent(_)))
    {
        return;
    }

    let status = match runtime.send_reminder(invoice_id, tone, &body) {
        Ok(SendOutcome::Accepted) => format!("reminder sent to {client}"),
        Ok(SendOutcome::Rejected) => {
            format!("send rejected for invoice #{}", invoice_id.get())
        }
        Err(error) => format!("send failed: {error}"),
    };
    state.dispatch(DashCommand::SetStatus(status));
}

fn handle_list_key(state: &mut DashState, view_data: &mut ViewData, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('j') | KeyCode::Down => move_cursor(state, view_data, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(state, view_data, -1),
        KeyCode::Char('g') => view_data.cursor = 0,
        KeyCode::Char('G') => {
            let visible = visible_invoices(state, view_data).len();
            view_data.cursor = visible.saturating_sub(1);
        }
        KeyCode::Enter => open_selected(state, view_data),
        KeyCode::Char('f') => {
            state.dispatch(DashCommand::ToggleFilters);
        }
        KeyCode::Char('a') => {
            let next = cycle_amount_bucket(state.selection.amount, 1);
            state.dispatch(DashCommand::SetAmountBucket(next));
            clamp_cursor(state, view_data);
        }
        KeyCode::Char('A') => {
            let next = cycle_amount_bucket(state.selection.amount, -1);
            state.dispatch(DashCommand::SetAmountBucket(next));
            clamp_cursor(state, view_data);
        }
        KeyCode::Char('d') => {
            let next = cycle_days_bucket(state.selection.days, 1);
            state.dispatch(DashCommand::SetDaysBucket(next));
            clamp_cursor(state, view_data);
        }
        KeyCode::Char('D') => {
            let next = cycle_days_bucket(state.selection.days, -1);
            state.dispatch(DashCommand::SetDaysBucket(next));
            clamp_cursor(state, view_data);
        }
        KeyCode::Char('c') => {
            state.dispatch(DashCommand::ClearFilters);
            clamp_cursor(state, view_data);
        }
        _ => {}
    }
    false
}

fn move_cursor(state: &DashState, view_data: &mut ViewData, delta: isize) {
    let visible = visible_invoices(state, view_data).len();
    if visible == 0 {
        view_data.cursor = 0;
        return;
    }
    let current = view_data.cursor.min(visible - 1) as isize;
    let next = (current + delta).clamp(0, visible as isize - 1);
    view_data.cursor = next as usize;
}

fn open_selected(state: &mut DashState, view_data: &mut ViewData) {
    let invoice = {
        let visible = visible_invoices(state, view_data);
        visible.get(view_data.cursor).map(|invoice| (*invoice).clone())
    };
    match invoice {
        Some(invoice) => {
            state.dispatch(DashCommand::OpenInvoice(invoice));
        }
        None => {
            state.dispatch(DashCommand::SetStatus("no invoice selected".to_owned()));
        }
    }
}

fn cycle_amount_bucket(current: AmountBucket, delta: isize) -> AmountBucket {
    let buckets = AmountBucket::ALL;
    let index = buckets
        .iter()
        .position(|bucket| *bucket == current)
        .unwrap_or(0) as isize;
    let len = buckets.len() as isize;
    buckets[(index + delta).rem_euclid(len) as usize]
}

fn cycle_days_bucket(current: DaysBucket, delta: isize) -> DaysBucket {
    let buckets = DaysBucket::ALL;
    let index = buckets
        .iter()
        .position(|bucket| *bucket == current)
        .unwrap_or(0) as isize;
    let len = buckets.len() as isize;
    buckets[(index + delta).rem_euclid(len) as usize]
}

fn render(
    frame: &mut ratatui::Frame<'_>,
    state: &DashState,
    view_data: &ViewData,
    options: &UiOptions,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(9),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(render_header_text(view_data, options))
        .block(Block::default().title("lance").borders(Borders::ALL));
    frame.render_widget(header, layout[0]);

    let activity = Paragraph::new(render_activity_text(&view_data.activity)).block(
        Block::default()
            .title("agent activity")
            .borders(Borders::ALL),
    );
    frame.render_widget(activity, layout[1]);

    if state.filters == FilterPanelVisibility::Visible {
        let body = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(1)])
            .split(layout[2]);
        let panel = Paragraph::new(render_filter_panel_text(state))
            .block(Block::default().title("filters").borders(Borders::ALL));
        frame.render_widget(panel, body[0]);
        render_invoice_list(frame, body[1], state, view_data);
    } else {
        render_invoice_list(frame, layout[2], state, view_data);
    }

    let status = Paragraph::new(status_text(state))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout[3]);

    if let ModalState::Open(subject) = &state.modal {
        let area = centered_rect(72, 76, frame.area());
        frame.render_widget(Clear, area);
        let modal = Paragraph::new(render_modal_text(subject))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(modal_title(subject))
                    .borders(Borders::ALL)
                    .style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(modal, area);
    }

    if view_data.help_visible {
        let area = centered_rect(64, 60, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn render_header_text(view_data: &ViewData, options: &UiOptions) -> String {
    format!(
        "Hey {},\nagent active | working {} overdue invoices",
        options.greeting_name, view_data.overdue_count
    )
}

fn render_activity_text(activity: &[ActivityEvent]) -> String {
    let mut marks = activity
        .iter()
        .map(|event| format!("● {}", event.offset_label))
        .collect::<Vec<_>>();
    marks.extend(
        TIMELINE_MINOR_MARKS
            .iter()
            .map(|mark| format!("· {mark}")),
    );

    let mut lines = Vec::with_capacity(activity.len() + 2);
    lines.push(format!("{}   (last 24 hours)", marks.join("  ")));
    lines.push("follow-up · detection · payment · schedule · adjustment".to_owned());
    for event in activity {
        lines.push(format!(
            "{:<10} {}  ({})",
            event.kind.label(),
            event.message,
            event.time_label
        ));
    }
    lines.join("\n")
}

fn render_filter_panel_text(state: &DashState) -> String {
    let amount = AmountBucket::ALL
        .iter()
        .map(|bucket| {
            if *bucket == state.selection.amount {
                format!("[{}]", bucket.label())
            } else {
                bucket.label().to_owned()
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    let days = DaysBucket::ALL
        .iter()
        .map(|bucket| {
            if *bucket == state.selection.days {
                format!("[{}]", bucket.label())
            } else {
                bucket.label().to_owned()
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    format!(
        "amount: {amount}\ndays:   {days}\na/A cycle amount | d/D cycle days | c clear all"
    )
}

fn invoice_list_title(state: &DashState, view_data: &ViewData) -> String {
    let visible = visible_invoices(state, view_data).len();
    format!(
        "invoices | {} overdue · {} completed | showing {} of {}",
        view_data.overdue_count,
        view_data.paid_count,
        visible,
        view_data.invoices.len()
    )
}

fn render_invoice_list(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &DashState,
    view_data: &ViewData,
) {
    let visible = visible_invoices(state, view_data);
    let title = invoice_list_title(state, view_data);

    if visible.is_empty() {
        let placeholder =
            Paragraph::new("\nNo invoices in this category\nTry selecting a different filter")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(placeholder, area);
        return;
    }

    let rows = visible.iter().enumerate().map(|(row_index, invoice)| {
        let mark = if row_index == view_data.cursor {
            CURSOR_MARK
        } else {
            " "
        };
        let mut style = match invoice {
            Invoice::Overdue(overdue) => {
                Style::default().fg(urgency_color(overdue.days_overdue))
            }
            Invoice::Paid(_) => Style::default().fg(Color::DarkGray),
        };
        if row_index == view_data.cursor {
            style = style.add_modifier(Modifier::BOLD);
        }
        let tone = match invoice {
            Invoice::Overdue(overdue) => overdue.tone,
            Invoice::Paid(paid) => paid.message_tone,
        };
        let mut cells = invoice_row_cells(mark, invoice)
            .into_iter()
            .map(Cell::from)
            .collect::<Vec<_>>();
        if let Some(badge) = cells.pop() {
            cells.push(badge.style(Style::default().fg(tone_color(tone))));
        }
        Row::new(cells).style(style)
    });

    let widths = [
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Min(18),
        Constraint::Length(8),
        Constraint::Length(18),
        Constraint::Min(24),
        Constraint::Length(18),
    ];
    let table = Table::new(rows, widths)
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(table, area);
}

fn invoice_row_cells(mark: &str, invoice: &Invoice) -> Vec<String> {
    match invoice {
        Invoice::Overdue(overdue) => vec![
            mark.to_owned(),
            overdue.avatar.clone(),
            overdue.client.clone(),
            format_amount(overdue.amount_cents),
            format!("{} days overdue", overdue.days_overdue),
            urgency_label(overdue.days_overdue).to_owned(),
            format!("{} tone", overdue.tone.label()),
        ],
        Invoice::Paid(paid) => vec![
            mark.to_owned(),
            paid.avatar.clone(),
            paid.client.clone(),
            format_amount(paid.amount_cents),
            format!("paid in {} days", paid.days_to_payment),
            format!(
                "sent {} · paid {}",
                format_short_date(paid.date_sent),
                format_short_date(paid.date_paid)
            ),
            paid.message_tone.label().to_owned(),
        ],
    }
}

fn urgency_label(days_overdue: i64) -> &'static str {
    if days_overdue <= 7 {
        "Recently overdue"
    } else if days_overdue <= 14 {
        "Needs attention"
    } else {
        "Urgent follow-up"
    }
}

fn urgency_color(days_overdue: i64) -> Color {
    if days_overdue <= 7 {
        Color::Yellow
    } else if days_overdue <= 14 {
        Color::LightRed
    } else {
        Color::Red
    }
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Polite => Color::Green,
        Tone::Professional => Color::Blue,
        Tone::Firm => Color::Red,
    }
}

fn modal_title(subject: &ModalSubject) -> &'static str {
    if subject.is_past() {
        "Invoice Details"
    } else {
        "Preview Reminder"
    }
}

fn render_modal_text(subject: &ModalSubject) -> String {
    let mut lines = vec![
        format!("To: {}", subject.client()),
        format!("Subject: {}", reminder_subject(subject)),
    ];

    match subject {
        ModalSubject::Preview { invoice, tone } => {
            lines.push(format!("Amount: {}", format_amount(invoice.amount_cents)));
            lines.push(String::new());
            let tones = Tone::ALL
                .iter()
                .map(|candidate| {
                    if candidate == tone {
                        format!("[{}]", candidate.label())
                    } else {
                        candidate.label().to_owned()
                    }
                })
                .collect::<Vec<_>>()
                .join("  ");
            lines.push(format!("Tone: {tones}"));
            lines.push(String::new());
            lines.push(reminder_body(subject));
            lines.push(String::new());
            lines.push("1/2/3 tone | s send reminder | esc edit message".to_owned());
        }
        ModalSubject::Detail { invoice } => {
            lines.push(format!("Amount: {}", format_amount(invoice.amount_cents)));
            lines.push(format!(
                "Date Sent: {} | Date Paid: {}",
                format_short_date(invoice.date_sent),
                format_short_date(invoice.date_paid)
            ));
            lines.push(format!(
                "Message Type: {} | Days to Payment: {} days",
                invoice.message_tone.label(),
                invoice.days_to_payment
            ));
            lines.push(String::new());
            lines.push("Message that was sent:".to_owned());
            lines.push(reminder_body(subject));
            lines.push(String::new());
            lines.push("esc close".to_owned());
        }
    }

    lines.join("\n")
}

fn status_text(state: &DashState) -> String {
    let hints = match &state.modal {
        ModalState::Open(subject) if subject.is_past() => "esc close | ctrl+q quit",
        ModalState::Open(_) => "1/2/3 tone | s send | esc edit message | ctrl+q quit",
        ModalState::Closed => {
            "j/k move | enter open | f filters | a/d buckets | c clear | ? help | q quit"
        }
    };
    match &state.status_line {
        Some(status) => format!("{status} | {hints}"),
        None => hints.to_owned(),
    }
}

fn help_overlay_text() -> String {
    [
        "j/k or arrows  move invoice cursor",
        "g/G            jump to first/last row",
        "enter          open selected invoice",
        "f              toggle filter panel",
        "a/A            cycle amount bucket",
        "d/D            cycle days-overdue bucket",
        "c              clear both filters",
        "",
        "in the modal:",
        "1/2/3          select Polite/Professional/Firm tone",
        "s              send the reminder",
        "esc            close (edit message)",
        "",
        "? or esc closes this help | q or ctrl+q quits",
    ]
    .join("\n")
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
