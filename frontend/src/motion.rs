//! Declarative animation vocabulary.
//!
//! Components describe what should move (poses, timings, stagger) and hand the
//! result to the browser as CSS keyframes; frame scheduling stays with the
//! browser's animation engine.

use log::warn;
use stylist::Style;
use yew::{classes, Classes};

use crate::carousel::state::Direction;
use crate::config;

/// A visual state an element can be animated to or from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    pub fn with_opacity(self, opacity: f64) -> Self {
        Pose { opacity, ..self }
    }

    pub fn with_x(self, x: f64) -> Self {
        Pose { x, ..self }
    }

    pub fn with_y(self, y: f64) -> Self {
        Pose { y, ..self }
    }

    pub fn with_scale(self, scale: f64) -> Self {
        Pose { scale, ..self }
    }

    pub fn with_rotate(self, rotate: f64) -> Self {
        Pose { rotate, ..self }
    }

    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({}) rotate({}deg);",
            self.opacity, self.x, self.y, self.scale, self.rotate
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    /// Slight overshoot standing in for a stiff, well damped spring.
    Spring,
}

impl Easing {
    fn as_css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
            Easing::Spring => "cubic-bezier(0.22, 1.2, 0.36, 1)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Once,
    /// Loops until the element leaves the page. `alternate` plays every other
    /// iteration backwards so a there-and-back path needs only two frames.
    Forever { alternate: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
    pub repeat: Repeat,
}

impl Transition {
    pub const fn new(duration_ms: u32) -> Self {
        Transition {
            duration_ms,
            delay_ms: 0,
            easing: Easing::EaseOut,
            repeat: Repeat::Once,
        }
    }

    pub const fn delay(self, delay_ms: u32) -> Self {
        Transition { delay_ms, ..self }
    }

    pub const fn easing(self, easing: Easing) -> Self {
        Transition { easing, ..self }
    }

    pub const fn repeat(self, repeat: Repeat) -> Self {
        Transition { repeat, ..self }
    }
}

/// A named animation through evenly spaced poses.
#[derive(Clone, Debug, PartialEq)]
pub struct Motion {
    name: String,
    frames: Vec<Pose>,
    transition: Transition,
}

impl Motion {
    pub fn new(name: impl Into<String>, frames: Vec<Pose>) -> Self {
        Motion {
            name: name.into(),
            frames,
            transition: Transition::new(0),
        }
    }

    pub fn between(name: impl Into<String>, from: Pose, to: Pose) -> Self {
        Motion::new(name, vec![from, to])
    }

    pub fn with_transition(self, transition: Transition) -> Self {
        Motion { transition, ..self }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    pub fn keyframes(&self) -> String {
        let last = self.frames.len().saturating_sub(1).max(1);
        let steps: String = self
            .frames
            .iter()
            .enumerate()
            .map(|(i, pose)| format!("{}% {{ {} }} ", i * 100 / last, pose.to_css()))
            .collect();
        format!("@keyframes {} {{ {}}}", self.name(), steps)
    }

    /// The `animation` shorthand value for this motion.
    pub fn animation(&self) -> String {
        let t = self.transition();
        let (iterations, direction) = match t.repeat {
            Repeat::Once => ("1", "normal"),
            Repeat::Forever { alternate: false } => ("infinite", "normal"),
            Repeat::Forever { alternate: true } => ("infinite", "alternate"),
        };
        format!(
            "{} {}ms {} {}ms {} {} both",
            self.name,
            t.duration_ms,
            t.easing.as_css(),
            t.delay_ms,
            iterations,
            direction
        )
    }

    pub fn to_css(&self) -> String {
        format!("animation: {}; {}", self.animation(), self.keyframes())
    }

    /// Registers the motion as a scoped stylesheet and returns its class.
    pub fn class(&self) -> Classes {
        match Style::new(self.to_css().as_str()) {
            Ok(style) => classes!(style.get_class_name().to_owned()),
            Err(e) => {
                warn!("Skipping animation {}: {}", self.name(), e);
                Classes::new()
            }
        }
    }
}

/// Delays for a group of children that enter one after another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    pub delay_children_ms: u32,
    pub stagger_ms: u32,
}

impl Stagger {
    pub fn delay_for(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay_children_ms
            .saturating_add(self.stagger_ms.saturating_mul(index))
    }
}

/// Enter/center/exit poses for a carousel slide.
pub struct SlideVariants;

impl SlideVariants {
    pub fn enter(direction: Direction) -> Pose {
        let x = match direction {
            Direction::Forward => config::SLIDE_OFFSET_PX,
            Direction::Backward => -config::SLIDE_OFFSET_PX,
        };
        Pose::REST.with_opacity(0.0).with_x(x)
    }

    pub fn center() -> Pose {
        Pose::REST
    }

    pub fn exit(direction: Direction) -> Pose {
        let x = match direction {
            Direction::Forward => -config::SLIDE_OFFSET_PX,
            Direction::Backward => config::SLIDE_OFFSET_PX,
        };
        Pose::REST.with_opacity(0.0).with_x(x)
    }

    /// Incoming slide. Waits for the outgoing slide to finish leaving first.
    pub fn slide_in(direction: Direction) -> Motion {
        Motion::between(
            format!("slide-enter-{}", direction.as_str()),
            Self::enter(direction),
            Self::center(),
        )
        .with_transition(
            Transition::new(config::SLIDE_FADE_MS)
                .delay(config::SLIDE_FADE_MS)
                .easing(Easing::Spring),
        )
    }

    pub fn slide_out(direction: Direction) -> Motion {
        Motion::between(
            format!("slide-exit-{}", direction.as_str()),
            Self::center(),
            Self::exit(direction),
        )
        .with_transition(Transition::new(config::SLIDE_FADE_MS).easing(Easing::Spring))
    }
}
