/// Game tuning parameters for the side-scroller
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Viewport
    pub const VIEWPORT_WIDTH: f32 = 800.0;

    // Scrolling
    pub const INITIAL_SCROLL: f32 = 500.0;
    pub const SCROLL_SPEED_INITIAL: f32 = 2.0; // world units per tick
    pub const SCROLL_ACCELERATION: f32 = 0.002; // added every tick, no cap

    // Pillars
    pub const PILLAR_COUNT: usize = 5;
    pub const PILLAR_SPACING: f32 = 180.0;
    pub const PILLAR_WIDTH: f32 = 80.0;
    pub const PILLAR_HEIGHT: f32 = 300.0;
    pub const PILLAR_Y: f32 = 150.0;

    // Jump power progression
    pub const JUMP_POWER_INITIAL: f32 = 1.0;
    pub const JUMP_POWER_INCREASE_RATE: f32 = 0.0008;
    pub const JUMP_POWER_MAX: f32 = 1.4;

    // Charge jump
    pub const MIN_CHARGE_DURATION: f64 = 0.05; // seconds
    pub const MAX_CHARGE_DURATION: f64 = 0.8; // longer holds are no stronger
    pub const MIN_IMPULSE_X: f32 = 30.0;
    pub const MIN_IMPULSE_Y: f32 = 300.0;
    pub const MAX_IMPULSE_X: f32 = 50.0;
    pub const MAX_IMPULSE_Y: f32 = 500.0;

    // Character
    pub const GROUND_OFFSET: f32 = 40.0; // above the first pillar's top
    pub const CHARACTER_SPAWN_OFFSET: f32 = 280.0; // added to INITIAL_SCROLL
    pub const CHARACTER_WIDTH: f32 = 30.0;
    pub const CHARACTER_HEIGHT: f32 = 30.0;
    pub const CHARACTER_MASS: f32 = 0.5;

    // Physics
    pub const GRAVITY: f32 = -30.0;
    pub const PIXELS_PER_METER: f32 = 30.0;
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
