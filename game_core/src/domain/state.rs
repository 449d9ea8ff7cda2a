// Domain-level simulation entities and input types.

/// Play area size supplied by the host every tick.
///
/// Always at least one unit per side, so wrap and spawn math stay defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    width: f32,
    height: f32,
}

impl Bounds {
    /// Floors both sides at one unit. Non-finite sides collapse to one unit.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: usable_side(width),
            height: usable_side(height),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

fn usable_side(side: f32) -> f32 {
    if side.is_finite() { side.max(1.0) } else { 1.0 }
}

/// Coarse game mode deciding which subsystems run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Title,
    Playing,
    Dead,
    RoundOver,
    GameOver,
    EnterInitials,
}

/// Logical actions sampled once per tick. `true` means held down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
    pub fire: bool,
    pub start: bool,
    pub letter_up: bool,
    pub letter_down: bool,
    pub slot_left: bool,
    pub slot_right: bool,
    pub confirm: bool,
}

impl ActionInput {
    /// Actions that went from released to held since `previous`.
    pub fn pressed_since(&self, previous: &ActionInput) -> ActionInput {
        ActionInput {
            turn_left: self.turn_left && !previous.turn_left,
            turn_right: self.turn_right && !previous.turn_right,
            thrust: self.thrust && !previous.thrust,
            fire: self.fire && !previous.fire,
            start: self.start && !previous.start,
            letter_up: self.letter_up && !previous.letter_up,
            letter_down: self.letter_down && !previous.letter_down,
            slot_left: self.slot_left && !previous.slot_left,
            slot_right: self.slot_right && !previous.slot_right,
            confirm: self.confirm && !previous.confirm,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ship {
    pub x: f32,
    pub y: f32,
    /// Heading in radians; `-PI/2` points up.
    pub angle: f32,
    pub vx: f32,
    pub vy: f32,
    pub invincible_secs: f32,
    pub thrusting: bool,
}

impl Ship {
    pub fn is_invincible(&self) -> bool {
        self.invincible_secs > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsteroidSize {
    Big,
    Mid,
    Small,
}

impl AsteroidSize {
    /// Size of the two fragments left behind, if any.
    pub fn split_into(self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Big => Some(AsteroidSize::Mid),
            AsteroidSize::Mid => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AsteroidSize::Big => "big",
            AsteroidSize::Mid => "mid",
            AsteroidSize::Small => "small",
        }
    }
}

/// Everything collision and movement need to know about an asteroid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsteroidBody {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    pub size: AsteroidSize,
}

/// Presentation-only data. Never read by collision or scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct AsteroidLook {
    pub rotation: f32,
    /// Radians per frame.
    pub spin: f32,
    /// Silhouette vertices relative to the centre.
    pub outline: Vec<(f32, f32)>,
    /// Index into `look::PALETTE`.
    pub color: usize,
    /// Index into `look::HEADS`.
    pub head: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    pub body: AsteroidBody,
    pub look: AsteroidLook,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Remaining life in frames.
    pub life: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    Exhaust,
    Debris,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub life: f32,
    pub max_life: f32,
    pub size: f32,
    pub color: &'static str,
    pub kind: ParticleKind,
}

impl Particle {
    /// Fade factor in `[0, 1]` for renderers.
    pub fn alpha(&self) -> f32 {
        if self.max_life <= 0.0 {
            return 0.0;
        }
        (self.life / self.max_life).clamp(0.0, 1.0)
    }
}

const ALPHABET_LEN: i32 = 26;

/// Three-letter initials editor shown after a qualifying game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitialsEntry {
    letters: [u8; 3],
    slot: usize,
}

impl Default for InitialsEntry {
    fn default() -> Self {
        Self {
            letters: [b'A'; 3],
            slot: 0,
        }
    }
}

impl InitialsEntry {
    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn letters(&self) -> String {
        self.letters.iter().map(|&b| b as char).collect()
    }

    /// Steps the active letter through A-Z, wrapping at both ends.
    pub fn cycle(&mut self, dir: i32) {
        let current = i32::from(self.letters[self.slot] - b'A');
        let next = (current + dir).rem_euclid(ALPHABET_LEN);
        self.letters[self.slot] = b'A' + next as u8;
    }

    pub fn move_left(&mut self) {
        self.slot = self.slot.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.slot = (self.slot + 1).min(self.letters.len() - 1);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
