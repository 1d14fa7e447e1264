use yew::prelude::*;

use crate::anchors::SectionId;
use crate::animation::count_up::CountUpNumber;
use crate::animation::presets::Motion;
use crate::animation::reveal::Reveal;
use crate::components::section_header::SectionHeader;

struct Stat {
    value: u32,
    label: &'static str,
}

const STATS: [Stat; 4] = [
    Stat { value: 150, label: "Projects Completed" },
    Stat { value: 50, label: "Happy Clients" },
    Stat { value: 15, label: "Team Members" },
    Stat { value: 5, label: "Years Experience" },
];

struct TeamMember {
    name: &'static str,
    role: &'static str,
    image: &'static str,
    bio: &'static str,
}

const TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Alex Johnson",
        role: "CEO & Founder",
        image: "/images/team/team1.jpg",
        bio: "With over 15 years of experience in tech leadership, Alex founded Kodastra with a vision to create innovative digital solutions.",
    },
    TeamMember {
        name: "Sarah Chen",
        role: "CTO",
        image: "/images/team/team2.jpg",
        bio: "Sarah leads our technical strategy and oversees all development projects, bringing expertise in AI and blockchain technologies.",
    },
    TeamMember {
        name: "Michael Rodriguez",
        role: "Lead Developer",
        image: "/images/team/team3.jpg",
        bio: "Michael specializes in full-stack development and has led numerous successful projects for enterprise clients.",
    },
    TeamMember {
        name: "Emily Taylor",
        role: "Design Director",
        image: "/images/team/team4.jpg",
        bio: "Emily brings creative vision to all our projects, ensuring beautiful and intuitive user experiences across all platforms.",
    },
];

const VALUES: [(&str, &str); 4] = [
    ("Innovation", "We constantly explore new technologies and approaches to deliver cutting-edge solutions."),
    ("Quality", "We're committed to excellence in everything we do, from code to client communication."),
    ("Collaboration", "We work closely with our clients, treating their challenges as our own."),
    ("Integrity", "We believe in transparency, honesty, and doing what's right for our clients."),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={SectionId::About.anchor()} class="page-section about">
            <style>
                {r#"
                    .about {
                        background: #000;
                    }
                    .story-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 3rem;
                        align-items: center;
                        margin-bottom: 5rem;
                    }
                    .story h3, .team h3 {
                        font-size: 1.5rem;
                        color: #fff;
                        margin-bottom: 1.5rem;
                    }
                    .story p {
                        color: #a0a0a0;
                        margin-bottom: 1rem;
                    }
                    .values {
                        list-style: none;
                        padding: 0;
                        margin-top: 2rem;
                    }
                    .values li {
                        color: #a0a0a0;
                        margin-bottom: 0.75rem;
                    }
                    .values li::before {
                        content: '✓';
                        display: inline-block;
                        width: 1.5rem;
                        color: #fff;
                    }
                    .values strong {
                        color: #fff;
                    }
                    .headquarters {
                        position: relative;
                        height: 500px;
                        border-radius: 0.75rem;
                        overflow: hidden;
                        border: 1px solid #333;
                    }
                    .headquarters img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .headquarters-caption {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        padding: 1.5rem;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent);
                    }
                    .headquarters-caption h4 {
                        color: #fff;
                        font-size: 1.25rem;
                        margin-bottom: 0.5rem;
                    }
                    .headquarters-caption p {
                        color: #c0c0c0;
                    }
                    .stats {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                        gap: 2rem;
                        padding: 2.5rem;
                        margin-bottom: 5rem;
                        border-radius: 0.75rem;
                        border: 1px solid #333;
                        background: linear-gradient(to bottom right, #0f0f0f, #1a1a1a);
                        text-align: center;
                    }
                    .stat-value {
                        display: block;
                        font-size: 3rem;
                        font-weight: 700;
                        margin-bottom: 0.5rem;
                    }
                    .stat-label {
                        color: #a0a0a0;
                    }
                    .team h3 {
                        text-align: center;
                    }
                    .team-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 2rem;
                    }
                    .team-card {
                        border-radius: 0.75rem;
                        overflow: hidden;
                        border: 1px solid #333;
                        background: linear-gradient(to bottom right, #0f0f0f, #1a1a1a);
                        transition: transform 0.3s ease;
                    }
                    .team-card:hover {
                        transform: translateY(-10px);
                    }
                    .team-card img {
                        width: 100%;
                        height: 16rem;
                        object-fit: cover;
                    }
                    .team-card-body {
                        padding: 1.5rem;
                    }
                    .team-card-body h4 {
                        color: #fff;
                        font-size: 1.25rem;
                    }
                    .team-role {
                        color: #c0c0c0;
                        font-size: 0.875rem;
                        margin-bottom: 1rem;
                    }
                    .team-bio {
                        color: #a0a0a0;
                        font-size: 0.875rem;
                    }
                "#}
            </style>
            <div class="grid-texture faint"></div>
            <div class="section-container">
                <SectionHeader
                    badge="About Us"
                    title="Who We Are"
                    subtitle="We're a team of passionate technologists dedicated to creating innovative digital solutions that drive business growth."
                />

                <div class="story-grid">
                    <Reveal motion={Motion::SlideInLeft} class={classes!("story")}>
                        <h3>{"Our Story"}</h3>
                        <p>{"Founded in 2019, Kodastra began with a simple mission: to help businesses leverage cutting-edge technology to solve real-world problems. What started as a small team of four passionate developers has grown into a full-service software agency with expertise across multiple domains."}</p>
                        <p>{"We believe that technology should be accessible, intuitive, and impactful. Our approach combines technical excellence with creative thinking, allowing us to deliver solutions that not only meet but exceed our clients' expectations."}</p>
                        <p>{"Today, we specialize in AI solutions, Web3 development, web applications, and custom software development, serving clients from startups to enterprise organizations across various industries."}</p>
                        <ul class="values">
                            { for VALUES.iter().map(|(name, text)| html! {
                                <li key={*name}><strong>{ format!("{}: ", name) }</strong>{ *text }</li>
                            }) }
                        </ul>
                    </Reveal>
                    <Reveal motion={Motion::SlideInRight}>
                        <div class="headquarters">
                            <img src="/images/about/office.jpg" alt="Kodastra Office" loading="lazy" />
                            <div class="headquarters-caption">
                                <h4>{"Our Headquarters"}</h4>
                                <p>{"Located in the heart of Tech City, our modern office is designed to foster creativity and collaboration."}</p>
                            </div>
                        </div>
                    </Reveal>
                </div>

                <div class="stats">
                    { for STATS.iter().enumerate().map(|(index, stat)| html! {
                        <Reveal key={stat.label} motion={Motion::FadeInUp} delay_ms={index as u32 * 100}>
                            <CountUpNumber target={stat.value} class={classes!("stat-value", "text-gradient")} />
                            <span class="stat-label">{ stat.label }</span>
                        </Reveal>
                    }) }
                </div>

                <div class="team">
                    <h3>{"Meet Our Team"}</h3>
                    <div class="team-grid">
                        { for TEAM.iter().enumerate().map(|(index, member)| html! {
                            <Reveal key={member.name} motion={Motion::FadeInUp} delay_ms={index as u32 * 100}>
                                <div class="team-card">
                                    <img src={member.image} alt={member.name} loading="lazy" />
                                    <div class="team-card-body">
                                        <h4>{ member.name }</h4>
                                        <p class="team-role">{ member.role }</p>
                                        <p class="team-bio">{ member.bio }</p>
                                    </div>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
