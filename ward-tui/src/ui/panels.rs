//! One panel per view

use libwardview::live::Share;
use libwardview::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Row, Table, Wrap},
    Frame,
};

use super::fg;
use crate::app::AppState;
use crate::data::{
    find_patient, support_staff_overall, CRITICAL_PATIENTS, SPECIALISTS, STAT_CARDS,
    SUPPORT_STAFF,
};
use crate::shell::Snapshot;

pub fn render_view(frame: &mut Frame, area: Rect, state: &AppState, snapshot: &Snapshot) {
    match snapshot.view {
        View::Dashboard => render_dashboard(frame, area, state, snapshot),
        View::CriticalPatients => render_critical_patients(frame, area, state),
        View::PatientAlert => render_patient_alert(frame, area, state, snapshot),
        View::Specialists => render_specialists(frame, area, state, snapshot),
        View::DoctorStatus => render_doctor_status(frame, area, state, snapshot),
        View::AiAgent => render_placeholder(
            frame,
            area,
            snapshot.view,
            &[
                "Ask about bed capacity, staffing gaps or patient risk.",
                "The assistant is ready.",
            ],
        ),
        View::Appointments => render_placeholder(
            frame,
            area,
            snapshot.view,
            &["47 upcoming today", "Next: Dr. Smith 9:00 AM"],
        ),
        View::Treatments => render_placeholder(
            frame,
            area,
            snapshot.view,
            &["156 active treatments", "12 critical, 89 stable, 55 recovering"],
        ),
        View::Beds => render_placeholder(
            frame,
            area,
            snapshot.view,
            &["234 of 268 beds occupied", "12 ICU beds available"],
        ),
        View::Staff => render_staff(frame, area, state),
    }
}

fn panel<'a>(title: &str, state: &AppState) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(fg(state, Color::Cyan))
}

fn render_dashboard(frame: &mut Frame, area: Rect, state: &AppState, snapshot: &Snapshot) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let cards: Vec<Line> = STAT_CARDS
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let marker = if i == state.card_cursor { "> " } else { "  " };
            let title_style = if i == state.card_cursor {
                fg(state, Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            Line::from(vec![
                Span::raw(marker),
                Span::raw(format!("{} ", i + 1)),
                Span::styled(card.title, title_style),
                Span::raw("  "),
                Span::styled(card.value, fg(state, Color::Cyan)),
                Span::raw("  "),
                Span::styled(card.detail, fg(state, Color::Gray)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(cards).block(panel("Overview", state)),
        chunks[0],
    );

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(chunks[1]);

    let split = snapshot.census.split();
    let inhouse_share = split
        .shares
        .first()
        .map(|share| share.percentage)
        .unwrap_or(0.0);
    let gauge = Gauge::default()
        .block(panel("In-house vs OPD", state))
        .gauge_style(fg(state, Color::Green))
        .ratio((inhouse_share / 100.0).clamp(0.0, 1.0))
        .label(format!("{} in-house / {} OPD", split.inhouse, split.opd));
    frame.render_widget(gauge, right[0]);

    let rows = snapshot.census.departments.iter().map(|department| {
        Row::new(vec![
            department.name.clone(),
            department.inhouse.to_string(),
            department.opd.to_string(),
        ])
    });
    let census = Table::new(
        rows,
        [
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ],
    )
    .header(Row::new(vec!["Department", "In-house", "OPD"]).style(Style::default().add_modifier(Modifier::BOLD)))
    .block(panel("Patient Census", state));
    frame.render_widget(census, right[1]);

    let trend = snapshot.pulse.current().unwrap_or("No trends");
    frame.render_widget(
        Paragraph::new(Span::styled(trend, fg(state, Color::Magenta))).block(panel("Trend", state)),
        right[2],
    );
}

fn render_critical_patients(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = CRITICAL_PATIENTS.iter().enumerate().map(|(i, patient)| {
        let row = Row::new(vec![
            patient.id.to_string(),
            patient.name.to_string(),
            patient.age.to_string(),
            patient.condition.to_string(),
            patient.location.to_string(),
        ]);
        if i == state.patient_cursor {
            row.style(fg(state, Color::Yellow).add_modifier(Modifier::REVERSED))
        } else {
            row
        }
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Length(4),
            Constraint::Percentage(35),
            Constraint::Min(10),
        ],
    )
    .header(
        Row::new(vec!["ID", "Name", "Age", "Condition", "Location"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(panel("Critical Patients  (Enter: open)", state));

    frame.render_widget(table, area);
}

fn selected_patient_lines(state: &AppState, snapshot: &Snapshot) -> Vec<Line<'static>> {
    let Some(patient) = snapshot
        .selected_patient_id
        .as_deref()
        .and_then(find_patient)
    else {
        let id = snapshot.selected_patient_id.clone().unwrap_or_default();
        return vec![Line::from(format!("Patient {}", id))];
    };

    vec![
        Line::from(vec![
            Span::styled(
                patient.name,
                fg(state, Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  ({}, age {})", patient.id, patient.age)),
        ]),
        Line::from(format!("Condition: {}", patient.condition)),
        Line::from(format!("Location:  {}", patient.location)),
        Line::from(format!(
            "Vitals:    HR {} bpm | BP {} | SpO2 {}%",
            patient.heart_rate, patient.blood_pressure, patient.spo2
        )),
    ]
}

fn render_patient_alert(frame: &mut Frame, area: Rect, state: &AppState, snapshot: &Snapshot) {
    let mut lines = selected_patient_lines(state, snapshot);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "s: Contact cardiac specialists | Esc: Back to list",
        fg(state, Color::Gray),
    )));

    frame.render_widget(
        Paragraph::new(lines)
            .block(panel("Patient Alert", state))
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_specialists(frame: &mut Frame, area: Rect, state: &AppState, snapshot: &Snapshot) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(4)])
        .split(area);

    frame.render_widget(
        Paragraph::new(selected_patient_lines(state, snapshot)).block(panel("Patient", state)),
        chunks[0],
    );

    let rows = SPECIALISTS.iter().map(|specialist| {
        Row::new(vec![
            specialist.name,
            specialist.focus,
            specialist.status,
            specialist.eta,
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(20),
            Constraint::Percentage(15),
        ],
    )
    .header(
        Row::new(vec!["Specialist", "Focus", "Status", "ETA"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(panel("Cardiac Specialists", state));
    frame.render_widget(table, chunks[1]);
}

fn share_line(state: &AppState, share: &Share, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<10}", share.name), fg(state, color)),
        Span::raw(format!("{:>4}  {:>5.1}%", share.value, share.percentage)),
    ])
}

fn render_doctor_status(frame: &mut Frame, area: Rect, state: &AppState, snapshot: &Snapshot) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let colors = [Color::Green, Color::Yellow, Color::Red];
    let overall: Vec<Line> = snapshot
        .doctors
        .overall()
        .iter()
        .zip(colors)
        .map(|(share, color)| share_line(state, share, color))
        .collect();
    frame.render_widget(
        Paragraph::new(overall).block(panel("Overall", state)),
        chunks[0],
    );

    let rows = snapshot.doctors.specialties.iter().map(|specialty| {
        Row::new(vec![
            specialty.name.clone(),
            specialty.available.to_string(),
            specialty.busy.to_string(),
            specialty.offline.to_string(),
            specialty.total().to_string(),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(32),
            Constraint::Percentage(17),
            Constraint::Percentage(17),
            Constraint::Percentage(17),
            Constraint::Percentage(17),
        ],
    )
    .header(
        Row::new(vec!["Specialty", "Available", "Busy", "Offline", "Total"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(panel("By Specialty", state));
    frame.render_widget(table, chunks[1]);
}

fn render_staff(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let colors = [Color::Green, Color::Yellow, Color::Red];
    let overall: Vec<Line> = support_staff_overall()
        .iter()
        .zip(colors)
        .map(|(share, color)| share_line(state, share, color))
        .collect();
    frame.render_widget(
        Paragraph::new(overall).block(panel("Overall Staff Status", state)),
        chunks[0],
    );

    let rows = SUPPORT_STAFF.iter().map(|staff| {
        Row::new(vec![
            staff.category.to_string(),
            staff.available.to_string(),
            staff.busy.to_string(),
            staff.offline.to_string(),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ],
    )
    .header(
        Row::new(vec!["Category", "Available", "Busy", "Offline"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(panel("Support Staff by Category", state));
    frame.render_widget(table, chunks[1]);
}

fn render_placeholder(frame: &mut Frame, area: Rect, view: View, lines: &[&str]) {
    let mut text: Vec<Line> = lines.iter().map(|line| Line::from(*line)).collect();
    text.push(Line::from(""));
    text.push(Line::from("Esc: Back to dashboard"));

    let block = Block::default()
        .title(format!(" {} ", view.title()))
        .borders(Borders::ALL);
    frame.render_widget(Paragraph::new(text).block(block), area);
}
