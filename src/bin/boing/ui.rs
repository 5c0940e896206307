//! Terminal rendering: the sprite rectangle on a canvas plus a status line.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{
        canvas::{Canvas, Line, Rectangle},
        Block, Borders, Paragraph,
    },
    Frame,
};

use boing::geom::Rect;

use crate::character::Stance;

/// Everything one frame needs to draw.
pub struct View {
    pub pose: Rect,
    pub ground: f32,
    pub arena: [f32; 2],
    pub stance: Stance,
    pub airborne: bool,
    pub jumps: u32,
    pub release_events: bool,
}

pub fn render(frame: &mut Frame, view: &View) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.area());

    let [width, height] = view.arena.map(f64::from);
    // World y grows downward, canvas y grows upward.
    let flip = |y: f32| height - f64::from(y);

    let pose = view.pose;
    let ground = flip(view.ground);
    let stage = Canvas::default()
        .block(
            Block::default()
                .title("boing - hold space to crouch, release to jump, q to quit")
                .borders(Borders::ALL),
        )
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(move |ctx| {
            ctx.draw(&Line::new(0.0, ground, width, ground, Color::DarkGray));
            ctx.draw(&Rectangle {
                x: f64::from(pose.x),
                y: flip(pose.bottom()),
                width: f64::from(pose.w),
                height: f64::from(pose.h),
                color: Color::Yellow,
            });
        });

    let px = pose.to_pixels();
    let stance = match (view.stance, view.airborne) {
        (Stance::Crouching, _) => "crouching",
        (Stance::Released, true) => "airborne",
        (Stance::Released, false) => "standing",
    };
    let input = if view.release_events {
        "key release"
    } else {
        "auto-release"
    };
    let status = Paragraph::new(format!(
        "{stance:<10} rect {}x{} at ({}, {})   jumps: {}   input: {input}",
        px.w, px.h, px.x, px.y, view.jumps
    ))
    .style(Style::default().fg(Color::Cyan))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(stage, chunks[0]);
    frame.render_widget(status, chunks[1]);
}
