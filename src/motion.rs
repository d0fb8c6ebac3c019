//! Entrance animations described as data.
//!
//! A [`Motion`] is a starting [`Pose`] plus timing. Rendering it yields an
//! inline style: the starting pose while hidden, [`Pose::REST`] once shown, with
//! a CSS transition between the two.

/// What starts an entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trigger {
    /// Plays once when the element mounts.
    Mount,
    /// Plays whenever the element enters the viewport and resets when it leaves.
    #[default]
    InView,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    /// Vertical offset in pixels.
    pub y: f32,
    pub scale: f32,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        y: 0.0,
        scale: 1.0,
    };

    /// Transparent and pushed down by `px`.
    pub const fn below(px: f32) -> Self {
        Pose {
            opacity: 0.0,
            y: px,
            scale: 1.0,
        }
    }

    /// Transparent and pulled up by `px`.
    pub const fn above(px: f32) -> Self {
        Pose {
            opacity: 0.0,
            y: -px,
            scale: 1.0,
        }
    }

    pub const fn scaled(scale: f32) -> Self {
        Pose {
            opacity: 0.0,
            y: 0.0,
            scale,
        }
    }

    fn css(&self) -> String {
        format!(
            "opacity:{};transform:translateY({}px) scale({})",
            self.opacity, self.y, self.scale
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub from: Pose,
    /// Seconds.
    pub duration: f32,
    /// Seconds.
    pub delay: f32,
}

impl Motion {
    pub const fn new(from: Pose, duration: f32) -> Self {
        Motion {
            from,
            duration,
            delay: 0.0,
        }
    }

    pub const fn delayed(self, delay: f32) -> Self {
        Motion { delay, ..self }
    }

    /// Delay for the `index`th item of a sequence.
    pub fn staggered(self, index: usize, step: f32) -> Self {
        self.delayed(stagger(index, step))
    }

    pub fn style(&self, shown: bool) -> String {
        let pose = if shown { Pose::REST } else { self.from };
        format!(
            "{};transition:opacity {d:.2}s ease-out {w:.2}s,transform {d:.2}s ease-out {w:.2}s",
            pose.css(),
            d = self.duration,
            w = self.delay,
        )
    }
}

pub fn stagger(index: usize, step: f32) -> f32 {
    index as f32 * step
}
