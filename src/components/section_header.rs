use yew::prelude::*;

use crate::animation::presets::Motion;
use crate::animation::reveal::{ReplayPolicy, Reveal};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub badge: AttrValue,
    pub title: AttrValue,
    pub subtitle: AttrValue,
}

/// Badge, heading and subheading block that opens every content section.
/// The badge plays once; heading and subheading reverse when scrolled back.
#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="section-header">
            <Reveal motion={Motion::FadeIn}>
                <span class="section-badge">{ props.badge.clone() }</span>
            </Reveal>
            <Reveal
                motion={Motion::Heading}
                policy={ReplayPolicy::Reverse}
                start_offset={config::HEADING_REVEAL_OFFSET}
            >
                <h2 class="section-title text-gradient">{ props.title.clone() }</h2>
            </Reveal>
            <Reveal
                motion={Motion::Subheading}
                policy={ReplayPolicy::Reverse}
                start_offset={config::SUBHEADING_REVEAL_OFFSET}
            >
                <p class="section-subtitle">{ props.subtitle.clone() }</p>
            </Reveal>
        </div>
    }
}
