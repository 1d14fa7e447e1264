//! Hidden-state poses for the entrance animations. Every preset ends at the
//! same visible pose (fully opaque, untransformed); only the starting pose
//! and duration differ.

use super::reveal::RevealState;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Pose {
    pub const VISIBLE: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    const fn hidden(x: f64, y: f64, scale: f64) -> Pose {
        Pose {
            opacity: 0.0,
            x,
            y,
            scale,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({});",
            self.opacity, self.x, self.y, self.scale
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    FadeIn,
    FadeInUp,
    FadeInDown,
    FadeInLeft,
    FadeInRight,
    ZoomIn,
    SlideInLeft,
    SlideInRight,
    /// Service cards rise further than the generic fade-up.
    Rise,
    Heading,
    Subheading,
}

impl Motion {
    pub fn hidden_pose(self) -> Pose {
        match self {
            Motion::FadeIn => Pose::hidden(0.0, 0.0, 1.0),
            Motion::FadeInUp => Pose::hidden(0.0, 20.0, 1.0),
            Motion::FadeInDown => Pose::hidden(0.0, -20.0, 1.0),
            Motion::FadeInLeft => Pose::hidden(-20.0, 0.0, 1.0),
            Motion::FadeInRight => Pose::hidden(20.0, 0.0, 1.0),
            Motion::ZoomIn => Pose::hidden(0.0, 0.0, 0.8),
            Motion::SlideInLeft => Pose::hidden(-50.0, 0.0, 1.0),
            Motion::SlideInRight => Pose::hidden(50.0, 0.0, 1.0),
            Motion::Rise => Pose::hidden(0.0, 50.0, 1.0),
            Motion::Heading => Pose::hidden(0.0, 50.0, 1.0),
            Motion::Subheading => Pose::hidden(0.0, 30.0, 1.0),
        }
    }

    pub fn duration_ms(self) -> u32 {
        match self {
            Motion::Heading | Motion::Subheading => 800,
            _ => 500,
        }
    }

    pub fn pose(self, state: RevealState) -> Pose {
        match state {
            RevealState::Hidden => self.hidden_pose(),
            RevealState::Visible => Pose::VISIBLE,
        }
    }

    /// Inline style for an element in `state`. The delay only applies on the
    /// way in so a reversing element hides immediately.
    pub fn style(self, state: RevealState, delay_ms: u32) -> String {
        let delay = match state {
            RevealState::Visible => delay_ms,
            RevealState::Hidden => 0,
        };
        format!(
            "{} transition: opacity {d}ms ease-out {delay}ms, transform {d}ms cubic-bezier(0.22, 1, 0.36, 1) {delay}ms;",
            self.pose(state).to_css(),
            d = self.duration_ms(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_lands_on_the_same_visible_pose() {
        let all = [
            Motion::FadeIn,
            Motion::FadeInUp,
            Motion::FadeInDown,
            Motion::FadeInLeft,
            Motion::FadeInRight,
            Motion::ZoomIn,
            Motion::SlideInLeft,
            Motion::SlideInRight,
            Motion::Rise,
            Motion::Heading,
            Motion::Subheading,
        ];
        for motion in all {
            assert_eq!(motion.pose(RevealState::Visible), Pose::VISIBLE);
            assert_eq!(motion.hidden_pose().opacity, 0.0);
        }
    }

    #[test]
    fn style_delays_entrance_only() {
        let shown = Motion::Heading.style(RevealState::Visible, 300);
        assert!(shown.starts_with("opacity: 1; transform: translate(0px, 0px) scale(1);"));
        assert!(shown.contains("opacity 800ms ease-out 300ms"));

        let hidden = Motion::Heading.style(RevealState::Hidden, 300);
        assert!(hidden.contains("translate(0px, 50px)"));
        assert!(hidden.contains("opacity 800ms ease-out 0ms"));
    }
}
