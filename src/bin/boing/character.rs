//! The jumping character: a point body under gravity wearing a squashy sprite.

use boing::{
    anim::{AnimError, Animation},
    geom::{Rect, Vec2},
    tuning::Tuning,
};

/// Which animation drives the sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stance {
    /// Jump key held: the prepare segment plays.
    Crouching,
    /// Jump key released: the jump sequence plays (and then rests).
    Released,
}

pub struct Character {
    position: Vec2,
    velocity: Vec2,
    gravity: Vec2,
    floor: f32,
    jump_velocity: f32,
    texbox: Rect,
    prepare: Animation<2>,
    jump: Animation<2>,
    stance: Stance,
}

impl Character {
    pub fn new(tuning: &Tuning) -> Result<Self, AnimError> {
        let prepare = tuning.prepare_animation()?.into();

        // Start at rest rather than mid-jump.
        let mut jump: Animation<2> = tuning.jump_animation()?.into();
        jump.finish();

        Ok(Self {
            position: Vec2::new(tuning.start_x, tuning.floor),
            velocity: Vec2::ZERO,
            gravity: Vec2::new(0.0, tuning.gravity),
            floor: tuning.floor,
            jump_velocity: tuning.jump_velocity(),
            texbox: Rect::centered_square(tuning.sprite_size),
            prepare,
            jump,
            stance: Stance::Released,
        })
    }

    /// Jump key went down. Repeats while held are ignored.
    pub fn crouch(&mut self) {
        if self.stance == Stance::Crouching {
            return;
        }
        self.stance = Stance::Crouching;
        self.prepare.reset();
    }

    /// Jump key went up. Returns true if the character took off.
    pub fn release(&mut self) -> bool {
        if self.stance != Stance::Crouching {
            return false;
        }
        self.stance = Stance::Released;
        self.jump.reset();
        self.velocity.y = self.jump_velocity;
        true
    }

    /// The crouch has reached its deepest pose.
    pub fn crouch_complete(&self) -> bool {
        self.stance == Stance::Crouching && self.prepare.finished()
    }

    /// Advance one fixed step and return the sprite's destination rectangle.
    ///
    /// The pose is taken before the animation advances, so a fresh animation
    /// shows its first frame.
    pub fn step(&mut self, dt: f32) -> Rect {
        self.velocity += self.gravity * dt;
        self.position += self.velocity * dt;

        if self.position.y >= self.floor {
            self.velocity = Vec2::ZERO;
            self.position.y = self.floor;
        }

        let texbox = self.texbox;
        let position = self.position;
        let animation = match self.stance {
            Stance::Crouching => &mut self.prepare,
            Stance::Released => &mut self.jump,
        };
        let pose = animation.transform_rect(texbox, position);
        animation.update(dt);
        pose
    }

    pub fn stance(&self) -> Stance {
        self.stance
    }

    pub fn airborne(&self) -> bool {
        self.position.y < self.floor
    }

    /// Y coordinate of the sprite's bottom edge when standing on the floor.
    pub fn ground(&self) -> f32 {
        self.floor + self.texbox.h * 0.5
    }
}
