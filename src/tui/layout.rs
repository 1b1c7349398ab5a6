//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};

use super::runtime::App;
use super::style;
use crate::comparison::{AverageComparison, reference_bands};
use crate::estimator::Category;

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(3), // headline total
            Constraint::Min(8),    // breakdown chart
            Constraint::Min(8),    // reference band chart
            Constraint::Length(4), // inputs + comparison
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_headline(frame, app, chunks[1]);
    render_breakdown(frame, app, chunks[2]);
    render_bands(frame, app, chunks[3]);
    render_status(frame, app, chunks[4]);
    render_footer(frame, chunks[5]);
}

/// Header bar: preset name, dwelling summary, day count.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let dwelling_label = app
        .household
        .dwelling
        .map_or("unknown size", |d| d.label());

    let header = Line::from(vec![
        Span::styled(
            " HOME-FOOTPRINT ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            &app.preset_name,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " │ {} {} │ {} days ",
            dwelling_label, app.household.habitation, app.household.days_in_month,
        )),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Headline figure: the estimate total.
fn render_headline(frame: &mut Frame, app: &App, area: Rect) {
    let headline = Paragraph::new(Line::from(Span::styled(
        format!("{:.2} kg CO₂ equivalent / month", app.estimate.total_kg),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .centered()
    .block(Block::default().borders(Borders::ALL).title("Total"));
    frame.render_widget(headline, area);
}

/// Breakdown bar chart: one bar per present category.
fn render_breakdown(frame: &mut Frame, app: &App, area: Rect) {
    let bars: Vec<Bar> = app
        .estimate
        .breakdown
        .iter()
        .map(|&(category, kg)| {
            Bar::default()
                .label(Line::from(short_label(category)))
                .value(kg.round().max(0.0) as u64)
                .text_value(format!("{kg:.1}"))
                .style(Style::default().fg(style::YOURS_COLOR))
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title("Breakdown (kg CO₂e)"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(2);
    frame.render_widget(chart, area);
}

/// Grouped efficient/yours/high band chart per category.
fn render_bands(frame: &mut Frame, app: &App, area: Rect) {
    let groups: Vec<BarGroup> = reference_bands(&app.estimate)
        .iter()
        .map(|band| {
            let bars = [
                Bar::default()
                    .value(band.efficient_kg.round().max(0.0) as u64)
                    .style(Style::default().fg(style::EFFICIENT_COLOR)),
                Bar::default()
                    .value(band.yours_kg.round().max(0.0) as u64)
                    .style(Style::default().fg(style::YOURS_COLOR)),
                Bar::default()
                    .value(band.high_kg.round().max(0.0) as u64)
                    .style(Style::default().fg(style::HIGH_COLOR)),
            ];
            BarGroup::default()
                .label(Line::from(short_label(band.category)))
                .bars(&bars)
        })
        .collect();

    let mut chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Efficient / yours / high"),
        )
        .bar_width(4)
        .bar_gap(1)
        .group_gap(3);
    for group in groups {
        chart = chart.data(group);
    }
    frame.render_widget(chart, area);
}

/// Appliance toggles and the average comparison.
fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let appliance = |label: &str, on: bool| {
        Span::styled(
            format!(" {label}:{} ", if on { "on" } else { "off" }),
            Style::default().fg(if on {
                style::APPLIANCE_ON
            } else {
                style::APPLIANCE_OFF
            }),
        )
    };

    let cmp = AverageComparison::for_estimate(&app.estimate, app.household.dwelling);
    let lines = vec![
        Line::from(vec![
            appliance("AC", app.household.air_conditioner),
            appliance("fridge", app.household.refrigerator),
            appliance("washer", app.household.washing_machine),
        ]),
        Line::from(vec![
            Span::raw(format!("vs {:.0} kg average: ", cmp.average_kg)),
            Span::styled(
                cmp.to_string(),
                Style::default().fg(style::standing_color(cmp.is_above_average())),
            ),
        ]),
    ];
    let status = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

/// Footer: key bindings help.
fn render_footer(frame: &mut Frame, area: Rect) {
    let help = Line::from(Span::styled(
        " 1/2/3 dwelling │ h flat/house │ a/f/w appliances │ ←/→ days │ p preset │ q quit",
        Style::default().fg(style::FOOTER_FG),
    ));
    frame.render_widget(Paragraph::new(help), area);
}

/// Short chart labels that fit under narrow bars.
fn short_label(category: Category) -> &'static str {
    match category {
        Category::LightingBasic => "Base",
        Category::AirConditioner => "AC",
        Category::Refrigerator => "Fridge",
        Category::WashingMachine => "Washer",
    }
}
