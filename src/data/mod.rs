pub mod config;
pub mod delta;
pub mod log;

use std::time::Duration;

use crate::graphics::Canvas;
use crate::math::{rng, shapes, Vec2};
use crate::sim::{Field, World};

use delta::Delta;

pub const TITLE: &str = "Bouncing Balls";

pub const WIN_W: u16 = 800;
pub const WIN_H: u16 = 600;

pub const DEFAULT_FPS: u32 = 60;
pub const MAX_FPS: u32 = 240;

pub const DEFAULT_BALLS: usize = 10;
pub const MAX_BALLS: usize = 100_000;

pub const DEFAULT_WIN_SCALE: u8 = 1;
pub const MAX_SCALE_FACTOR: u8 = 4;

/// Side of the block each rasterized point is drawn as.
pub const DEFAULT_THICKNESS: u8 = 2;
pub const MAX_THICKNESS: u8 = 8;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Command {
    SpawnBall,
    Close,
}

impl Command {
    pub fn is_close_requested(&self) -> bool {
        *self == Command::Close
    }
}

/// Main program struct
///
/// Owns the ball world and the canvas it is drawn into. Everything is
/// touched from the event loop thread only.
pub(crate) struct Program {
    pub pix: Canvas,

    world: World,

    rng: rng::Rng,
    seed: u64,

    delta: Delta,

    fps: u32,
    scale: u8,
    thickness: u8,
    initial_balls: usize,
    quiet: bool,

    /// Scratch buffer for rasterized circles, reused every frame.
    points: Vec<Vec2<f32>>,
}

impl Program {
    pub fn new() -> Self {
        let seed = rng::time_seed();

        let mut pix = Canvas::new(WIN_W as usize, WIN_H as usize);
        pix.mixerm();

        Self {
            pix,

            world: World::new(Field::new(WIN_W as f32, WIN_H as f32)),

            rng: rng::from_seed(seed),
            seed,

            delta: Delta::new(),

            fps: DEFAULT_FPS,
            scale: DEFAULT_WIN_SCALE,
            thickness: DEFAULT_THICKNESS,
            initial_balls: DEFAULT_BALLS,
            quiet: false,

            points: Vec::new(),
        }
    }

    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = rng::from_seed(seed);
    }

    /// Spawns the startup balls without announcing each one.
    pub fn populate(&mut self) {
        for _ in 0..self.initial_balls {
            self.world.spawn(&mut self.rng);
        }
    }

    pub fn eval_command(&mut self, cmd: &Command) {
        match cmd {
            Command::SpawnBall => self.spawn_ball(),
            Command::Close => {}
        }
    }

    pub fn spawn_ball(&mut self) {
        let ball = self.world.spawn(&mut self.rng);

        ::log::debug!(
            "Spawned ball at ({}, {}) r={} v=({}, {})",
            ball.position.x,
            ball.position.y,
            ball.radius,
            ball.velocity.x,
            ball.velocity.y
        );

        ::log::info!("{}", self.label());
    }

    pub fn label(&self) -> String {
        format!("Balls: {}, Press n or SPACE to add ball", self.world.len())
    }

    /// Restarts elapsed-time measurement, so that the first tick does not
    /// include window creation.
    pub fn reset_clock(&mut self) {
        self.delta = Delta::new();
    }

    /// Advances every ball by the wall-clock time since the last tick.
    pub fn update(&mut self) -> f32 {
        let dt = self.delta.tick();
        self.step(dt);
        dt
    }

    pub fn step(&mut self, dt: f32) {
        ::log::trace!("elapsed time: {:.2}ms", dt * 1000.0);
        self.world.advance_all(dt);
    }

    pub fn render(&mut self) {
        self.pix.clear();

        for ball in self.world.balls() {
            shapes::circle_points_into(ball.position, ball.radius, &mut self.points);
            self.pix.plot_points(&self.points, ball.color, self.thickness);
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    pub fn scale(&self) -> u8 {
        self.scale
    }

    pub fn thickness(&self) -> u8 {
        self.thickness
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}
