use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackgroundVariant {
    Particles,
    Gradient,
    Grid,
    Waves,
}

impl BackgroundVariant {
    /// Unrecognised names fall back to the particle field.
    pub fn from_name(name: &str) -> Self {
        match name {
            "gradient" => BackgroundVariant::Gradient,
            "grid" => BackgroundVariant::Grid,
            "waves" => BackgroundVariant::Waves,
            _ => BackgroundVariant::Particles,
        }
    }
}

const PARTICLE_COLORS: [&str; 7] = [
    "#c0c0c0", "#a0a0c0", "#8080a0", "#4776e6", "#3a1c71", "#505070", "#d0d0d0",
];
const PARTICLE_COUNT: usize = 80;
const ORB_COUNT: usize = 7;
const HIGHLIGHT_COUNT: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub size: f64,
    pub left: f64,
    pub top: f64,
    pub drift_x: f64,
    pub drift_y: f64,
    pub duration_s: u32,
    pub delay_s: u32,
    pub color: &'static str,
    pub blurred: bool,
    pub glow: bool,
}

/// Same field on every render: everything derives from the index.
pub fn particles() -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|i| {
            let seed = i as f64 / PARTICLE_COUNT as f64;
            Particle {
                size: seed * 4.0 + 1.0,
                left: (i % 10) as f64 * 10.0 + seed * 5.0,
                top: (i / 10) as f64 * 10.0 + seed * 5.0,
                drift_x: ((i % 10) as f64 - 5.0) * 15.0,
                drift_y: ((i % 5) as f64 - 2.0) * 15.0,
                duration_s: 10 + (i % 15) as u32,
                delay_s: (i % 5) as u32,
                color: PARTICLE_COLORS[i % PARTICLE_COLORS.len()],
                blurred: i % 5 == 0,
                glow: i % 7 == 0,
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Orb {
    pub size: f64,
    pub left: f64,
    pub top: f64,
    pub drift_x: f64,
    pub drift_y: f64,
    pub duration_s: u32,
    pub color: &'static str,
}

pub fn orbs() -> Vec<Orb> {
    (0..ORB_COUNT)
        .map(|i| Orb {
            size: 8.0 + i as f64 * 2.0,
            left: 15.0 + i as f64 * 15.0,
            top: 20.0 + ((i * 15) % 60) as f64,
            drift_x: ((i % 3) as f64 - 1.0) * 50.0,
            drift_y: ((i % 2) as f64 - 0.5) * 50.0,
            duration_s: 20 + i as u32 * 5,
            color: if i % 2 == 0 { "#3a1c71" } else { "#4776e6" },
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Highlight {
    pub left: f64,
    pub top: f64,
    pub drift_x: f64,
    pub drift_y: f64,
    pub duration_s: u32,
}

pub fn grid_highlights() -> Vec<Highlight> {
    (0..HIGHLIGHT_COUNT)
        .map(|i| Highlight {
            left: 20.0 + i as f64 * 15.0,
            top: 20.0 + ((i * 17) % 60) as f64,
            drift_x: (i as f64 - 2.0) * 50.0,
            drift_y: ((i % 3) as f64 - 1.0) * 50.0,
            duration_s: 15 + i as u32 * 5,
        })
        .collect()
}

const WAVE_BACK: [&str; 2] = [
    "M0,192L48,197.3C96,203,192,213,288,229.3C384,245,480,267,576,250.7C672,235,768,181,864,181.3C960,181,1056,235,1152,234.7C1248,235,1344,181,1392,154.7L1440,128L1440,320L0,320Z",
    "M0,128L48,154.7C96,181,192,235,288,234.7C384,235,480,181,576,181.3C672,181,768,235,864,250.7C960,267,1056,245,1152,229.3C1248,213,1344,203,1392,197.3L1440,192L1440,320L0,320Z",
];
const WAVE_FRONT: [&str; 2] = [
    "M0,64L48,80C96,96,192,128,288,128C384,128,480,96,576,122.7C672,149,768,235,864,266.7C960,299,1056,277,1152,240C1248,203,1344,149,1392,122.7L1440,96L1440,320L0,320Z",
    "M0,96L48,122.7C96,149,192,203,288,240C384,277,480,299,576,266.7C672,235,768,149,864,122.7C960,96,1056,128,1152,128C1248,128,1344,96,1392,80L1440,64L1440,320L0,320Z",
];

fn drift_style(left: f64, top: f64, drift_x: f64, drift_y: f64, duration_s: u32, delay_s: u32) -> String {
    format!(
        "left: {}%; top: {}%; --dx: {}px; --dy: {}px; animation-duration: {}s; animation-delay: {}s;",
        left, top, drift_x, drift_y, duration_s, delay_s
    )
}

fn render_particles() -> Html {
    html! {
        <div class="bg-layer">
            { for particles().into_iter().map(|p| {
                let filter = match (p.blurred, p.glow) {
                    (true, true) => "blur(2px) brightness(1.5)",
                    (false, true) => "brightness(1.5)",
                    (true, false) => "blur(2px)",
                    (false, false) => "none",
                };
                let style = format!(
                    "{} width: {}px; height: {}px; background-color: {}; filter: {};",
                    drift_style(p.left, p.top, p.drift_x, p.drift_y, p.duration_s, p.delay_s),
                    p.size, p.size, p.color, filter
                );
                html! {
                    <div class={classes!("particle", p.glow.then(|| "glow"))} style={style}></div>
                }
            }) }
            { for orbs().into_iter().map(|orb| {
                let style = format!(
                    "{} width: {}px; height: {}px; background-color: {c}; box-shadow: 0 0 20px 8px {c}30;",
                    drift_style(orb.left, orb.top, orb.drift_x, orb.drift_y, orb.duration_s, 0),
                    orb.size, orb.size, c = orb.color
                );
                html! { <div class="orb" style={style}></div> }
            }) }
        </div>
    }
}

fn render_gradient() -> Html {
    html! {
        <div class="bg-layer bg-gradient-pulse">
            <div class="accent accent-purple" style="top: 20%; left: -10%; width: 40%; height: 40%;"></div>
            <div class="accent accent-blue" style="bottom: 30%; right: -20%; width: 50%; height: 50%;"></div>
        </div>
    }
}

fn render_grid() -> Html {
    html! {
        <div class="bg-layer">
            <div class="grid-overlay"></div>
            { for grid_highlights().into_iter().map(|h| html! {
                <div
                    class="grid-highlight"
                    style={drift_style(h.left, h.top, h.drift_x, h.drift_y, h.duration_s, 0)}
                ></div>
            }) }
        </div>
    }
}

fn wave(paths: [&'static str; 2], fill: &'static str, opacity: &'static str, duration: &'static str) -> Html {
    let values = format!("{};{};{}", paths[0], paths[1], paths[0]);
    html! {
        <path d={paths[0]} fill={fill} fill-opacity={opacity}>
            <animate attributeName="d" dur={duration} repeatCount="indefinite" values={values} />
        </path>
    }
}

fn render_waves() -> Html {
    html! {
        <div class="bg-layer">
            <svg class="waves" preserveAspectRatio="none" viewBox="0 0 1440 800" xmlns="http://www.w3.org/2000/svg">
                { wave(WAVE_BACK, "#303030", "0.1", "40s") }
                { wave(WAVE_FRONT, "#505050", "0.05", "30s") }
            </svg>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedBackgroundProps {
    /// One of `particles`, `gradient`, `grid`, `waves`.
    #[prop_or(AttrValue::Static("particles"))]
    pub variant: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(AnimatedBackground)]
pub fn animated_background(props: &AnimatedBackgroundProps) -> Html {
    let layer = match BackgroundVariant::from_name(&props.variant) {
        BackgroundVariant::Particles => render_particles(),
        BackgroundVariant::Gradient => render_gradient(),
        BackgroundVariant::Grid => render_grid(),
        BackgroundVariant::Waves => render_waves(),
    };

    html! {
        <div class={classes!("animated-background", props.class.clone())} aria-hidden="true">
            <style>
                {r#"
                    .animated-background {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                        pointer-events: none;
                    }
                    .bg-layer {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                    }
                    @keyframes drift {
                        0%, 100% { transform: translate(0, 0); }
                        50% { transform: translate(var(--dx), var(--dy)); }
                    }
                    @keyframes twinkle {
                        0%, 100% { opacity: 0.1; }
                        50% { opacity: 0.3; }
                    }
                    @keyframes glow-twinkle {
                        0%, 100% { opacity: 0.1; transform: translate(0, 0) scale(1); }
                        50% { opacity: 0.4; transform: translate(var(--dx), var(--dy)) scale(1.2); }
                    }
                    .particle {
                        position: absolute;
                        border-radius: 50%;
                        opacity: 0.2;
                        animation-name: drift, twinkle;
                        animation-iteration-count: infinite;
                        animation-timing-function: ease-in-out;
                    }
                    .particle.glow {
                        animation-name: glow-twinkle;
                        box-shadow: 0 0 6px 2px rgba(160, 160, 192, 0.4);
                    }
                    .orb {
                        position: absolute;
                        border-radius: 50%;
                        opacity: 0.4;
                        filter: blur(4px);
                        animation: drift ease-in-out infinite alternate;
                    }
                    .grid-overlay {
                        position: absolute;
                        inset: 0;
                        background-image: url('/images/grid.svg');
                        opacity: 0.2;
                    }
                    .grid-highlight {
                        position: absolute;
                        width: 150px;
                        height: 150px;
                        border-radius: 50%;
                        background: #c0c0c0;
                        filter: blur(50px);
                        opacity: 0.05;
                        animation: drift ease-in-out infinite alternate;
                    }
                    @keyframes gradient-pulse {
                        from { background: linear-gradient(to right, #0a0a15, #101020, #0a0a15); }
                        to { background: linear-gradient(to right, #0a0a15, #1a1a30, #0a0a15); }
                    }
                    .bg-gradient-pulse {
                        animation: gradient-pulse 8s infinite alternate;
                    }
                    .accent {
                        position: absolute;
                        border-radius: 50%;
                        opacity: 0.1;
                        filter: blur(120px);
                    }
                    .accent-purple { background: #3a1c71; }
                    .accent-blue { background: #4776e6; }
                    .waves {
                        position: absolute;
                        width: 100%;
                        height: 100%;
                    }
                "#}
            </style>
            { layer }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_variant_falls_back_to_particles() {
        assert_eq!(BackgroundVariant::from_name("waves"), BackgroundVariant::Waves);
        assert_eq!(BackgroundVariant::from_name("grid"), BackgroundVariant::Grid);
        assert_eq!(BackgroundVariant::from_name("gradient"), BackgroundVariant::Gradient);
        assert_eq!(BackgroundVariant::from_name("particles"), BackgroundVariant::Particles);
        assert_eq!(BackgroundVariant::from_name("sparkles"), BackgroundVariant::Particles);
    }

    #[test]
    fn particle_field_is_deterministic() {
        let field = particles();
        assert_eq!(field.len(), 80);
        assert_eq!(field, particles());

        assert_eq!(field[0].size, 1.0);
        assert!(field[0].blurred && field[0].glow);
        assert_eq!(field[7].color, "#c0c0c0");
        assert_eq!(field[11].left, 10.0 + 11.0 / 80.0 * 5.0);
        assert!(field.iter().all(|p| p.size < 5.0 && p.top < 100.0));
    }

    #[test]
    fn orbs_alternate_colours() {
        let orbs = orbs();
        assert_eq!(orbs.len(), 7);
        assert_eq!(orbs[0].color, "#3a1c71");
        assert_eq!(orbs[1].color, "#4776e6");
        assert_eq!(orbs[6].duration_s, 50);
    }

    #[test]
    fn grid_has_five_highlights() {
        let highlights = grid_highlights();
        assert_eq!(highlights.len(), 5);
        assert_eq!(highlights[2].drift_x, 0.0);
    }
}
