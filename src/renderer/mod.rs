//! Scene building
//!
//! Turns a [`GameState`] into a flat vertex list plus text items, ready for
//! whatever backend draws the frame. Reads the state only; the sole input
//! flowing back into the game is the player's keys.

pub mod shapes;
pub mod vertex;

use glam::{IVec2, Vec2};
use rand::Rng;

pub use vertex::{Vertex, colors};

use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH, SHAKE_JITTER};
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, ParticleKind};

const W: f32 = PLAYFIELD_WIDTH as f32;
const H: f32 = PLAYFIELD_HEIGHT as f32;

/// Font size class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    /// HUD, hints (26 pt)
    Small,
    /// Prompts, banners (32 pt)
    Medium,
    /// Titles (50 pt)
    Large,
}

/// Where `pos` sits on the text's bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopCenter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub pos: Vec2,
    pub anchor: Anchor,
    pub size: TextSize,
    pub color: [f32; 4],
    /// Translucent box drawn behind the text
    pub backdrop: Option<[f32; 4]>,
}

impl TextItem {
    fn new(
        text: impl Into<String>,
        pos: Vec2,
        anchor: Anchor,
        size: TextSize,
        color: [f32; 4],
    ) -> Self {
        Self {
            text: text.into(),
            pos,
            anchor,
            size,
            color,
            backdrop: None,
        }
    }

    fn centered(text: impl Into<String>, y: f32, size: TextSize, color: [f32; 4]) -> Self {
        Self::new(text, Vec2::new(W / 2.0, y), Anchor::TopCenter, size, color)
    }
}

/// One frame's worth of draw data
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub clear_color: [f32; 4],
    pub vertices: Vec<Vertex>,
    pub texts: Vec<TextItem>,
}

impl Scene {
    /// Raw vertex bytes for upload to a GPU buffer
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn has_text(&self, text: &str) -> bool {
        self.texts.iter().any(|t| t.text == text)
    }
}

/// Screen shake offset for this frame, re-rolled every call while shaking
pub fn roll_jitter(state: &GameState, settings: &Settings, rng: &mut impl Rng) -> IVec2 {
    if !state.effects.is_shaking() || !settings.effective_screen_shake() {
        return IVec2::ZERO;
    }
    IVec2::new(
        rng.random_range(-SHAKE_JITTER..=SHAKE_JITTER),
        rng.random_range(-SHAKE_JITTER..=SHAKE_JITTER),
    )
}

/// Build the scene for the current phase
pub fn build_scene(state: &GameState, jitter: IVec2, settings: &Settings) -> Scene {
    match state.phase {
        GamePhase::Title => title_scene(state),
        GamePhase::GameOver => game_over_scene(state),
        GamePhase::Play => play_scene(state, jitter.as_vec2(), settings),
    }
}

/// Striped pitch with horizontal lines
fn pitch(vertices: &mut Vec<Vertex>) {
    let stripe = 40.0;
    let mut y = 0.0;
    while y < H {
        vertices.extend(shapes::rect(0.0, y, W, stripe, colors::PITCH_DARK));
        vertices.extend(shapes::rect(0.0, y + stripe, W, stripe, colors::PITCH_LIGHT));
        y += stripe * 2.0;
    }
    let mut y = 60.0;
    while y < H {
        vertices.extend(shapes::rect(0.0, y, W, 1.0, colors::WHITE));
        y += 60.0;
    }
}

fn title_scene(state: &GameState) -> Scene {
    let mut scene = Scene {
        clear_color: colors::PITCH_LIGHT,
        ..Default::default()
    };
    pitch(&mut scene.vertices);

    scene.texts.push(TextItem::centered(
        "TOON DASH",
        H / 2.0 - 100.0,
        TextSize::Large,
        colors::WHITE,
    ));
    scene.texts.push(TextItem::centered(
        "Press SPACE to Start",
        H / 2.0 - 20.0,
        TextSize::Medium,
        colors::GOLD,
    ));
    scene.texts.push(TextItem::centered(
        "↑ ↓ move • Dodge red • Collect gold • P = Pause",
        H / 2.0 + 30.0,
        TextSize::Small,
        colors::WHITE,
    ));
    if state.best_score > 0 {
        scene.texts.push(TextItem::centered(
            format!("Best Score: {}", state.best_score),
            H / 2.0 + 70.0,
            TextSize::Small,
            colors::WHITE,
        ));
    }
    scene
}

fn game_over_scene(state: &GameState) -> Scene {
    let mut scene = Scene {
        clear_color: colors::PITCH_LIGHT,
        ..Default::default()
    };
    pitch(&mut scene.vertices);

    scene.texts.push(TextItem::centered(
        "GAME OVER",
        H / 2.0 - 110.0,
        TextSize::Large,
        colors::HAZARD,
    ));
    scene.texts.push(TextItem::centered(
        format!("Score: {}", state.run.score),
        H / 2.0 - 40.0,
        TextSize::Medium,
        colors::WHITE,
    ));
    scene.texts.push(TextItem::centered(
        format!("Best: {}", state.best_score),
        H / 2.0 + 5.0,
        TextSize::Medium,
        colors::GOLD,
    ));
    scene.texts.push(TextItem::centered(
        "Press SPACE to Restart",
        H / 2.0 + 60.0,
        TextSize::Small,
        colors::WHITE,
    ));
    scene
}

fn play_scene(state: &GameState, offset: Vec2, settings: &Settings) -> Scene {
    let mut scene = Scene {
        clear_color: colors::PITCH_DARK,
        ..Default::default()
    };
    let v = &mut scene.vertices;
    pitch(v);

    for star in &state.stars {
        v.extend(shapes::circle(star.pos.as_vec2(), 1.0, colors::WHITE, 6));
    }

    // Black and white stripes take over the pitch in toon mode
    if state.run.toon_mode {
        let mut x = 0.0;
        while x < W {
            v.extend(shapes::rect(x, 0.0, 40.0, H, colors::WHITE));
            v.extend(shapes::rect(x + 40.0, 0.0, 40.0, H, colors::BLACK));
            x += 80.0;
        }
    }

    if settings.particles {
        for p in &state.particles {
            let color = match p.kind {
                ParticleKind::Hit => colors::HAZARD,
                ParticleKind::Collect => colors::GOLD,
            };
            v.extend(shapes::circle(p.pos.as_vec2(), 3.0, color, 8));
        }
    }

    if state.effects.player_visible() {
        let r = state.player.rect;
        v.extend(shapes::sim_rect(&r, offset, colors::WHITE));
        v.extend(shapes::rect(
            r.x as f32 + offset.x,
            r.y as f32 + offset.y,
            (r.w / 2) as f32,
            r.h as f32,
            colors::BLACK,
        ));
    }

    for h in &state.hazards {
        let r = h.rect;
        v.extend(shapes::sim_rect(&r, offset, colors::HAZARD));
        let from = Vec2::new(r.x as f32, r.y as f32) + offset;
        let to = Vec2::new(r.right() as f32, r.bottom() as f32) + offset;
        v.extend(shapes::line(from, to, 2.0, colors::BLACK));
    }

    for c in &state.collectibles {
        let r = c.rect;
        v.extend(shapes::sim_rect(&r, offset, colors::GOLD));
        let from = Vec2::new(r.x as f32, r.bottom() as f32) + offset;
        let to = Vec2::new(r.right() as f32, r.y as f32) + offset;
        v.extend(shapes::line(from, to, 2.0, colors::BLACK));
    }

    let run = &state.run;
    scene.texts.push(TextItem::new(
        format!("Score: {}   Lives: {}   Speed: {}", run.score, run.lives, run.speed),
        Vec2::new(20.0, 10.0),
        Anchor::TopLeft,
        TextSize::Small,
        colors::WHITE,
    ));
    if run.toon_mode {
        scene.texts.push(TextItem::centered("TOON MODE!", 10.0, TextSize::Small, colors::GOLD));
    }
    if state.paused {
        scene.texts.push(TextItem::centered(
            "PAUSED",
            H / 2.0 - 40.0,
            TextSize::Large,
            colors::GOLD,
        ));
    }
    if let Some(text) = state.effects.active_banner() {
        let mut banner = TextItem::centered(text, 65.0, TextSize::Medium, colors::WHITE);
        banner.backdrop = Some(colors::BANNER_BACKDROP);
        scene.texts.push(banner);
    }

    scene
}
