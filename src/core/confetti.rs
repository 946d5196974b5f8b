//! core/confetti.rs
//! The reveal-moment confetti burst.
//!
//! Pure simulation state: positions are normalized (0..1 across the
//! window on both axes) so the renderer can scale them to any bounds.
//! New paper is sprayed from both screen edges on every frame until the
//! wall-clock deadline passes; after that the burst only drains. The
//! burst is finished once the deadline has passed *and* every particle
//! has fallen or faded.

use std::time::{Duration, Instant};

use rand::Rng;

/// How long the edges keep spraying after the reveal.
pub const BURST_DURATION: Duration = Duration::from_secs(3);

/// Pieces launched per side per animation frame.
const SPAWN_PER_SIDE: usize = 2;

/// Launch direction from the left edge, degrees above the horizon.
/// The right edge mirrors it.
const LAUNCH_ANGLE_DEG: f32 = 60.0;
const SPREAD_DEG: f32 = 55.0;

/// Screen-heights per second squared.
const GRAVITY: f32 = 1.8;
const DRAG: f32 = 0.4;

/// Frame delta clamp, seconds. Keeps a stalled window from teleporting
/// every particle off-screen on the next frame.
const MAX_FRAME_DT: f32 = 0.1;

#[derive(Debug, Clone, Copy)]
enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Particle {
    /// Normalized position, 0..1 on each axis, y pointing down.
    pub x: f32,
    pub y: f32,
    /// Radians.
    pub rotation: f32,
    /// Pixels; the one non-normalized quantity.
    pub size: f32,
    /// Index into the renderer's palette.
    pub color_index: usize,

    vx: f32,
    vy: f32,
    spin: f32,
    age: f32,
    lifetime: f32,
}

impl Particle {
    fn launch(rng: &mut impl Rng, side: Side) -> Self {
        let (origin_x, base_angle) = match side {
            Side::Left => (0.0, LAUNCH_ANGLE_DEG),
            Side::Right => (1.0, 180.0 - LAUNCH_ANGLE_DEG),
        };

        let half_spread = SPREAD_DEG / 2.0;
        let angle = (base_angle + rng.random_range(-half_spread..=half_spread)).to_radians();
        let speed = rng.random_range(0.9..1.6);

        Self {
            x: origin_x,
            y: rng.random_range(0.45..0.7),
            rotation: rng.random_range(0.0..std::f32::consts::TAU),
            size: rng.random_range(6.0..12.0),
            color_index: rng.random_range(0..3),
            vx: angle.cos() * speed,
            vy: -angle.sin() * speed,
            spin: rng.random_range(-6.0..6.0),
            age: 0.0,
            lifetime: rng.random_range(1.3..2.3),
        }
    }

    /// Fades out linearly over the particle's lifetime.
    pub fn alpha(&self) -> f32 {
        (1.0 - self.age / self.lifetime).clamp(0.0, 1.0)
    }

    fn is_alive(&self) -> bool {
        self.age < self.lifetime && self.y < 1.2
    }
}

#[derive(Debug)]
pub struct ConfettiBurst {
    particles: Vec<Particle>,
    deadline: Instant,
    last_frame: Instant,
}

impl ConfettiBurst {
    pub fn new(now: Instant) -> Self {
        let mut burst = Self {
            particles: Vec::new(),
            deadline: now + BURST_DURATION,
            last_frame: now,
        };
        // First wave right away, so the reveal frame already sparkles.
        burst.spawn_wave();
        burst
    }

    /// Advances the simulation to `now`: sprays fresh particles while the
    /// deadline has not passed, then integrates and culls. Safe to call
    /// with a stale or out-of-order `now`.
    pub fn advance(&mut self, now: Instant) {
        let dt = now
            .saturating_duration_since(self.last_frame)
            .as_secs_f32()
            .min(MAX_FRAME_DT);
        self.last_frame = now;

        if now < self.deadline {
            self.spawn_wave();
        }

        for p in &mut self.particles {
            p.age += dt;
            p.vy += GRAVITY * dt;
            p.vx -= p.vx * DRAG * dt;
            p.x += p.vx * dt;
            p.y += p.vy * dt;
            p.rotation += p.spin * dt;
        }

        self.particles.retain(Particle::is_alive);
    }

    /// True once the spawn window is over and every particle has settled.
    pub fn is_finished(&self, now: Instant) -> bool {
        now >= self.deadline && self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    fn spawn_wave(&mut self) {
        let mut rng = rand::rng();
        for _ in 0..SPAWN_PER_SIDE {
            self.particles.push(Particle::launch(&mut rng, Side::Left));
            self.particles.push(Particle::launch(&mut rng, Side::Right));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_wave_covers_both_sides() {
        let burst = ConfettiBurst::new(Instant::now());
        assert!(burst.particles().iter().any(|p| p.x < 0.5));
        assert!(burst.particles().iter().any(|p| p.x > 0.5));
    }

    #[test]
    fn spawning_continues_inside_the_window() {
        let t0 = Instant::now();
        let mut burst = ConfettiBurst::new(t0);
        let before = burst.particles().len();

        burst.advance(t0 + Duration::from_millis(16));

        assert!(burst.particles().len() > before);
    }

    #[test]
    fn spawning_stops_at_the_deadline() {
        let t0 = Instant::now();
        let mut burst = ConfettiBurst::new(t0);

        burst.advance(t0 + BURST_DURATION);
        let at_deadline = burst.particles().len();

        burst.advance(t0 + BURST_DURATION + Duration::from_millis(16));

        assert!(burst.particles().len() <= at_deadline);
    }

    #[test]
    fn not_finished_while_the_window_is_open() {
        let t0 = Instant::now();
        let burst = ConfettiBurst::new(t0);
        assert!(!burst.is_finished(t0));
        assert!(!burst.is_finished(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn drains_and_finishes_after_the_deadline() {
        let t0 = Instant::now();
        let mut burst = ConfettiBurst::new(t0);

        // 20 simulated seconds in 50 ms steps: far past the longest
        // possible particle lifetime after the 3 s spawn window.
        let mut now = t0;
        for _ in 0..400 {
            now += Duration::from_millis(50);
            burst.advance(now);
        }

        assert!(burst.particles().is_empty());
        assert!(burst.is_finished(now));
    }

    #[test]
    fn advancing_a_finished_burst_is_a_no_op() {
        let t0 = Instant::now();
        let mut burst = ConfettiBurst::new(t0);

        let mut now = t0;
        for _ in 0..400 {
            now += Duration::from_millis(50);
            burst.advance(now);
        }
        assert!(burst.is_finished(now));

        burst.advance(now + Duration::from_secs(1));
        assert!(burst.particles().is_empty());
        assert!(burst.is_finished(now + Duration::from_secs(1)));
    }

    #[test]
    fn out_of_order_frames_do_not_panic() {
        let t0 = Instant::now();
        let mut burst = ConfettiBurst::new(t0);
        burst.advance(t0 + Duration::from_millis(32));
        burst.advance(t0 + Duration::from_millis(16));
        assert!(!burst.particles().is_empty());
    }
}
