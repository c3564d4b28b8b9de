//! Entrance animations as plain data, rendered to inline CSS.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    FadeInUp,
    FadeIn,
    GrowX,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub translate_y: f64,
    pub scale_x: f64,
}

const RESTING: Pose = Pose {
    opacity: 1.0,
    translate_y: 0.0,
    scale_x: 1.0,
};

impl Effect {
    pub fn hidden(self) -> Pose {
        match self {
            Self::FadeInUp => Pose {
                opacity: 0.0,
                translate_y: 20.0,
                scale_x: 1.0,
            },
            Self::FadeIn => Pose {
                opacity: 0.0,
                ..RESTING
            },
            Self::GrowX => Pose {
                opacity: 0.0,
                translate_y: 0.0,
                scale_x: 0.0,
            },
        }
    }

    pub fn visible(self) -> Pose {
        RESTING
    }

    /// Name of the matching `@keyframes` rule in the stylesheet.
    pub fn keyframes(self) -> &'static str {
        match self {
            Self::FadeInUp => "fade-in-up",
            Self::FadeIn => "fade-in",
            Self::GrowX => "grow-x",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration: f64,
    pub delay: f64,
}

impl Transition {
    pub const fn new(duration: f64, delay: f64) -> Self {
        Self { duration, delay }
    }

    pub const fn delayed(self, delay: f64) -> Self {
        Self {
            duration: self.duration,
            delay,
        }
    }
}

pub const SECTION_HEADING: Transition = Transition::new(0.6, 0.0);
pub const PROJECT_CARD: Transition = Transition::new(0.3, 0.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub base: f64,
    pub step: f64,
}

impl Stagger {
    pub const fn new(base: f64, step: f64) -> Self {
        Self { base, step }
    }

    /// Rounded to whole milliseconds so the CSS stays readable.
    pub fn delay(self, index: usize) -> f64 {
        ((self.base + self.step * index as f64) * 1_000.0).round() / 1_000.0
    }
}

pub const HERO: Stagger = Stagger::new(0.0, 0.1);
pub const FEATURE_CARDS: Stagger = Stagger::new(0.0, 0.2);
pub const CHILDREN: Stagger = Stagger::new(0.0, 0.1);
pub const SKILL_ROWS: Stagger = Stagger::new(0.0, 0.05);
pub const SKILL_BARS: Stagger = Stagger::new(0.3, 0.1);

pub fn reveal_style(effect: Effect, transition: Transition, visible: bool) -> String {
    let pose = if visible {
        effect.visible()
    } else {
        effect.hidden()
    };

    format!(
        "opacity: {}; transform: translateY({}px) scaleX({}); transition: opacity {}s ease-out {}s, transform {}s ease-out {}s;",
        pose.opacity,
        pose.translate_y,
        pose.scale_x,
        transition.duration,
        transition.delay,
        transition.duration,
        transition.delay
    )
}

/// Plays once on mount, holding the hidden pose during the delay.
pub fn entrance_style(effect: Effect, transition: Transition) -> String {
    format!(
        "animation: {} {}s ease-out {}s both;",
        effect.keyframes(),
        transition.duration,
        transition.delay
    )
}

/// Width animation of a skill bar from empty to `percent`.
pub fn progress_style(percent: u8, transition: Transition, visible: bool) -> String {
    let width = if visible { percent.min(100) } else { 0 };
    format!(
        "width: {width}%; transition: width {}s ease-out {}s;",
        transition.duration, transition.delay
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_adds_one_step_per_index() {
        assert_eq!(SKILL_BARS.delay(0), 0.3);
        assert_eq!(SKILL_BARS.delay(3), 0.6);
        assert_eq!(FEATURE_CARDS.delay(2), 0.4);
        assert_eq!(HERO.delay(3).to_string(), "0.3");
    }

    #[test]
    fn fade_in_up_starts_below_and_transparent() {
        let hidden = reveal_style(Effect::FadeInUp, SECTION_HEADING, false);
        let shown = reveal_style(Effect::FadeInUp, SECTION_HEADING.delayed(0.2), true);

        assert!(hidden.starts_with("opacity: 0; transform: translateY(20px) scaleX(1);"));
        assert!(shown.starts_with("opacity: 1; transform: translateY(0px) scaleX(1);"));
        assert!(shown.contains("opacity 0.6s ease-out 0.2s"));
    }

    #[test]
    fn entrance_names_keyframes_and_timing() {
        assert_eq!(
            entrance_style(Effect::GrowX, Transition::new(0.8, 0.2)),
            "animation: grow-x 0.8s ease-out 0.2s both;"
        );
    }

    #[test]
    fn grow_x_collapses_horizontally() {
        assert_eq!(Effect::GrowX.hidden().scale_x, 0.0);
        assert_eq!(Effect::GrowX.visible(), Effect::FadeIn.visible());
    }

    #[test]
    fn progress_is_empty_until_visible_and_capped() {
        let transition = Transition::new(1.0, 0.3);

        assert!(progress_style(95, transition, false).starts_with("width: 0%;"));
        assert!(progress_style(95, transition, true).starts_with("width: 95%;"));
        assert!(progress_style(140, transition, true).starts_with("width: 100%;"));
    }
}
