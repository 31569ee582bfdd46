//! Section configuration objects and the LabelX page copy.
//!
//! Every section renders as a pure function of one of these structs, so a
//! visual experiment is a different config value rather than a forked
//! component.

use super::tokens::{ColorRole, Icon, Palette, VisualToken};
use crate::core::{
    AGENT_TICKER_TICK_MS, HERO_CONNECTIONS_KEPT, HERO_CONNECTION_INTERVAL_MS,
    HERO_CONNECTION_LIFETIME_MS, HERO_METRICS_TICK_MS, HERO_PULSE_HOLD_MS,
};
use crate::motion::{ConnectionConfig, MetricSpec, PulseConfig, SimulatorConfig};
use std::time::Duration;

/// One animated statistic.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterSpec {
    pub from: f64,
    pub to: f64,
    pub prefix: String,
    pub suffix: String,
    pub label: String,
    pub sub: String,
    pub token: VisualToken,
    /// Overrides the page-wide counter duration.
    pub duration: Option<Duration>,
}

impl CounterSpec {
    pub fn new(to: f64, suffix: &str, label: &str, sub: &str, token: VisualToken) -> Self {
        Self {
            from: 0.0,
            to,
            prefix: String::new(),
            suffix: suffix.to_string(),
            label: label.to_string(),
            sub: sub.to_string(),
            token,
            duration: None,
        }
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatBox {
    pub token: VisualToken,
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavbarConfig {
    pub brand: String,
    pub links: Vec<String>,
    pub socials: Vec<VisualToken>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroConfig {
    pub badge: String,
    pub headline: Vec<String>,
    pub tagline: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub stat_boxes: Vec<StatBox>,
    pub network_title: String,
    pub network: SimulatorConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AboutConfig {
    pub heading: String,
    pub body: String,
    pub why_heading: String,
    pub why_body: String,
    pub stats: Vec<CounterSpec>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgentCard {
    pub title: String,
    pub role: String,
    pub description: String,
    pub token: VisualToken,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgentsConfig {
    pub heading: String,
    pub subheading: String,
    pub agents: Vec<AgentCard>,
    pub ticker: SimulatorConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub title: String,
    pub body: String,
    pub token: VisualToken,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HowItWorksConfig {
    pub heading: String,
    pub steps: Vec<Step>,
    pub stats: Vec<CounterSpec>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub handle: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestimonialsConfig {
    pub heading: String,
    pub reviews: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CtaConfig {
    pub heading: String,
    pub body: String,
    pub primary: String,
    pub secondary: String,
    pub social_proof: String,
    pub app_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterConfig {
    pub tagline: String,
    pub columns: Vec<FooterColumn>,
    pub socials: Vec<VisualToken>,
    pub owner: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LandingContent {
    pub navbar: NavbarConfig,
    pub hero: HeroConfig,
    pub about: AboutConfig,
    pub agents: AgentsConfig,
    pub how_it_works: HowItWorksConfig,
    pub testimonials: TestimonialsConfig,
    pub cta: CtaConfig,
    pub footer: FooterConfig,
    pub palette: Palette,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const HERO_NETWORK_NODES: [&str; 12] = [
    "San Francisco",
    "New York",
    "London",
    "Tokyo",
    "Mumbai",
    "Beijing",
    "São Paulo",
    "Berlin",
    "Singapore",
    "Moscow",
    "Sydney",
    "Toronto",
];

/// Network telemetry shown under the hero.
pub fn hero_network() -> SimulatorConfig {
    SimulatorConfig {
        interval: Duration::from_millis(HERO_METRICS_TICK_MS),
        metrics: vec![
            MetricSpec::resample("active_labelers", "Active Labelers", 1847.0, 1700.0, 1899.0),
            MetricSpec::accumulate(
                "total_labels",
                "Labels Today",
                67832.0,
                (3.0, 17.0),
                (0.0, 10_000_000.0),
            ),
            MetricSpec::resample("networks_training", "Networks Training", 12.0, 8.0, 15.0),
            MetricSpec::resample("accuracy", "Accuracy %", 96.4, 95.5, 97.5).with_precision(1),
            MetricSpec::resample("data_flow_rate", "Data Flow MB/s", 423.0, 380.0, 469.0),
        ],
        pulse: Some(PulseConfig {
            nodes: strings(&HERO_NETWORK_NODES),
            hold: Duration::from_millis(HERO_PULSE_HOLD_MS),
            connections: Some(ConnectionConfig {
                interval: Duration::from_millis(HERO_CONNECTION_INTERVAL_MS),
                lifetime: Duration::from_millis(HERO_CONNECTION_LIFETIME_MS),
                keep: HERO_CONNECTIONS_KEPT,
            }),
        }),
    }
}

/// Agent activity ticker.
pub fn agent_ticker() -> SimulatorConfig {
    SimulatorConfig {
        interval: Duration::from_millis(AGENT_TICKER_TICK_MS),
        metrics: vec![
            MetricSpec::accumulate(
                "tasks_verified",
                "Tasks Verified",
                48210.0,
                (1.0, 6.0),
                (0.0, 1_000_000_000.0),
            ),
            MetricSpec::resample("queue_depth", "Queue Depth", 212.0, 120.0, 340.0),
            MetricSpec::accumulate(
                "threats_blocked",
                "Threats Blocked",
                312.0,
                (0.0, 2.0),
                (0.0, 1_000_000.0),
            ),
        ],
        pulse: None,
    }
}

impl LandingContent {
    /// The LabelX landing page.
    pub fn labelx() -> Self {
        let primary = |icon| VisualToken::new(icon, ColorRole::Primary);
        let accent = |icon| VisualToken::new(icon, ColorRole::Accent);
        let reward = |icon| VisualToken::new(icon, ColorRole::Reward);
        let muted = |icon| VisualToken::new(icon, ColorRole::Muted);

        Self {
            navbar: NavbarConfig {
                brand: "LabelX".into(),
                links: strings(&["Home", "Agent", "Docs"]),
                socials: vec![muted(Icon::Twitter), muted(Icon::Telegram)],
            },
            hero: HeroConfig {
                badge: "Powering the next generation of AI".into(),
                headline: strings(&["Unlock the Value of", "Your Human Intelligence"]),
                tagline: "LabelX connects human contribution directly to AI performance.".into(),
                primary_cta: "Start Earning".into(),
                secondary_cta: "How it Works".into(),
                stat_boxes: vec![
                    StatBox {
                        token: primary(Icon::Robot),
                        value: "2.5M+".into(),
                        label: "Tasks Completed".into(),
                    },
                    StatBox {
                        token: primary(Icon::Payment),
                        value: "$1.2M".into(),
                        label: "Paid to Users".into(),
                    },
                    StatBox {
                        token: primary(Icon::Wallet),
                        value: "0.7s".into(),
                        label: "Instant Payout".into(),
                    },
                ],
                network_title: "Global Labeling Network".into(),
                network: hero_network(),
            },
            about: AboutConfig {
                heading: "What is LabelX?".into(),
                body: "LabelX is a platform where you earn real cryptocurrency by helping train \
                       artificial intelligence. Every time you label an image, review text, or \
                       verify data, you're making AI smarter and getting LBLX tokens sent \
                       straight to your wallet."
                    .into(),
                why_heading: "Why We Built This".into(),
                why_body: "Someone has to teach AI systems how to work. We believe the people \
                           doing the actual work should get paid fairly and instantly."
                    .into(),
                stats: vec![
                    CounterSpec::new(
                        2_400_000.0,
                        "+",
                        "Labels Verified",
                        "and counting",
                        primary(Icon::Check),
                    ),
                    CounterSpec::new(
                        12.5,
                        "K+",
                        "Active Earners",
                        "in 90+ countries",
                        accent(Icon::People),
                    ),
                    CounterSpec::new(1.2, "M", "Paid Out", "in LBLX rewards", reward(Icon::Coins))
                        .with_prefix("$"),
                ],
            },
            agents: AgentsConfig {
                heading: "Meet the Agents".into(),
                subheading: "Autonomous systems that keep the network honest and fast.".into(),
                agents: vec![
                    AgentCard {
                        title: "Validator Node X1".into(),
                        role: "Quality Assurance".into(),
                        description: "Cross-references submissions against golden datasets.".into(),
                        token: primary(Icon::Shield),
                    },
                    AgentCard {
                        title: "Vector Core".into(),
                        role: "Data Processing".into(),
                        description: "Formats raw data for specific ML model architectures.".into(),
                        token: accent(Icon::Database),
                    },
                    AgentCard {
                        title: "Smart Treasury".into(),
                        role: "Instant Settlements".into(),
                        description: "Distributes LBLX rewards right after verification.".into(),
                        token: reward(Icon::Coins),
                    },
                    AgentCard {
                        title: "Oculus Vision".into(),
                        role: "Computer Vision".into(),
                        description: "Pre-scans images and suggests bounding boxes.".into(),
                        token: primary(Icon::Eye),
                    },
                    AgentCard {
                        title: "Sentinel Shield".into(),
                        role: "Fraud Prevention".into(),
                        description: "Watches for bot behavior and malicious actors.".into(),
                        token: VisualToken::new(Icon::Shield, ColorRole::Danger),
                    },
                    AgentCard {
                        title: "Context Core".into(),
                        role: "LLM Memory".into(),
                        description: "Keeps long documents labeled consistently.".into(),
                        token: accent(Icon::Brain),
                    },
                ],
                ticker: agent_ticker(),
            },
            how_it_works: HowItWorksConfig {
                heading: "How It Works".into(),
                steps: vec![
                    Step {
                        title: "Connect Your Wallet".into(),
                        body: "Link MetaMask or any Web3 wallet in seconds.".into(),
                        token: accent(Icon::Wallet),
                    },
                    Step {
                        title: "Complete Micro-Tasks".into(),
                        body: "Label images, review text, verify data.".into(),
                        token: primary(Icon::Check),
                    },
                    Step {
                        title: "Get Paid Instantly".into(),
                        body: "LBLX tokens hit your wallet immediately.".into(),
                        token: reward(Icon::Coins),
                    },
                ],
                stats: vec![
                    CounterSpec::new(
                        98.2,
                        "%",
                        "Consensus Accuracy",
                        "golden-set verified",
                        VisualToken::new(Icon::Check, ColorRole::Success),
                    ),
                    CounterSpec::new(0.7, "s", "Avg Payout", "on-chain settlement", reward(Icon::Flash)),
                    CounterSpec::new(0.0, "%", "Platform Fees", "no middlemen", accent(Icon::Shield)),
                ],
            },
            testimonials: TestimonialsConfig {
                heading: "Trusted by Trainers".into(),
                reviews: vec![
                    Testimonial {
                        name: "Marcus Chen".into(),
                        role: "AI Model Trainer".into(),
                        handle: "@marcus_ai".into(),
                        text: "LabelX's consensus mechanism actually works. We reduced model \
                               hallucinations by 12% using their dataset."
                            .into(),
                    },
                    Testimonial {
                        name: "Sarah Jenkins".into(),
                        role: "Crypto Native".into(),
                        handle: "@sara_eth".into(),
                        text: "The smart contract triggered immediately. Earned 4,200 LBLX this \
                               week validating images during my commute."
                            .into(),
                    },
                    Testimonial {
                        name: "David Okonjo".into(),
                        role: "Comp Sci Student".into(),
                        handle: "@david_codes".into(),
                        text: "A way to earn crypto that doesn't require capital. I do tasks \
                               between lectures."
                            .into(),
                    },
                    Testimonial {
                        name: "Elena Rodriguez".into(),
                        role: "Lead Data Scientist".into(),
                        handle: "@elena_ml_ops".into(),
                        text: "The ingestion API saved my team about two weeks of dev time."
                            .into(),
                    },
                    Testimonial {
                        name: "Tom Harrison".into(),
                        role: "Validator Node".into(),
                        handle: "@tom_node".into(),
                        text: "Running a validation node has been smooth. The dashboard \
                               analytics are real-time."
                            .into(),
                    },
                ],
            },
            cta: CtaConfig {
                heading: "Ready to Start Earning?".into(),
                body: "Connect your wallet and instantly access a stream of micro-tasks. \
                       No interviews, no schedules, just immediate payouts in LBLX."
                    .into(),
                primary: "Start Earning Now".into(),
                secondary: "View Documentation".into(),
                social_proof: "12,400+ Active Earners".into(),
                app_url: "https://label-x.vercel.app/".into(),
            },
            footer: FooterConfig {
                tagline: "Human intelligence, fairly rewarded.".into(),
                columns: vec![
                    FooterColumn {
                        title: "Platform".into(),
                        links: strings(&["Start Earning", "For Developers", "Tokenomics"]),
                    },
                    FooterColumn {
                        title: "Legal".into(),
                        links: strings(&["Privacy Policy", "Terms of Service", "Smart Contract Audit"]),
                    },
                ],
                socials: vec![muted(Icon::Twitter), muted(Icon::Telegram)],
                owner: "LabelX".into(),
            },
            palette: Palette::labelx(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

impl Default for LandingContent {
    fn default() -> Self {
        Self::labelx()
    }
}
