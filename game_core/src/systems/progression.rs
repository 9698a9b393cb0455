use log::trace;

use crate::{Config, Progression, Scroll};

/// Ramp scroll speed (uncapped) and the jump-power multiplier (capped)
pub fn advance_progression(scroll: &mut Scroll, progression: &mut Progression, config: &Config) {
    scroll.speed += config.scroll_acceleration;
    progression.jump_power_multiplier = (progression.jump_power_multiplier
        + config.jump_power_increase_rate)
        .min(config.jump_power_max);

    trace!(
        "scroll speed {} jump power {}",
        scroll.speed,
        progression.jump_power_multiplier
    );
}

/// Move the world left by one tick's worth of scroll
pub fn advance_scroll(scroll: &mut Scroll) {
    scroll.offset -= scroll.speed;
}
