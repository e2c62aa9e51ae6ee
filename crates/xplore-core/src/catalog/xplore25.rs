//! Built-in Xplore'25 event lineup.

use super::{Catalog, ContentItem, Coordinator, DetailItem, RuleSection, RuleTone};

fn section(heading: &str, tone: RuleTone, points: &[&str]) -> RuleSection {
    RuleSection {
        heading: heading.to_string(),
        tone,
        points: points.iter().map(|p| p.to_string()).collect(),
    }
}

struct Event {
    id: u32,
    title: &'static str,
    image: &'static str,
    category: &'static str,
    description: &'static str,
    poster: &'static str,
    form: &'static str,
    format: (&'static str, &'static [&'static str]),
    criteria: (&'static str, &'static [&'static str]),
}

const EVENTS: &[Event] = &[
    Event {
        id: 1,
        title: "Battle of the Biomes",
        image: "/assets/battleofbiomes.png",
        category: "Head-to-Head Coding",
        description: "Face off in intense coding duels across the deserts, jungles, and snow biomes. Only the swift and skilled survive.",
        poster: "/assets/battle_of_biomes_poster.png",
        form: "https://forms.gle/8HK38gcdaHy8Gebs6",
        format: (
            "Battle Format",
            &[
                "One-on-one coding matches with a set of problems",
                "Limited time for each round",
                "Winner advances to the next biome (round)",
            ],
        ),
        criteria: (
            "Winning Criteria",
            &["Number of problems solved", "Accuracy of solutions", "Time taken"],
        ),
    },
    Event {
        id: 2,
        title: "Blocksmith's Showcase",
        image: "/assets/blacksmithshowcase.png",
        category: "Best Building Competition",
        description: "Show off your inner architect. Build something jaw-dropping — from cozy cottages to colossal castles — and let the blocks speak for themselves.",
        poster: "/assets/blocksmith_poster.png",
        form: "https://forms.gle/cjoTAWxMSrGxndp58",
        format: (
            "Building Rules",
            &[
                "Solo or team participation allowed",
                "Theme for the build announced at event start",
                "Limited build time; must be done in survival or creative (as specified)",
            ],
        ),
        criteria: (
            "Winning Criteria",
            &["Creativity and originality", "Attention to detail", "Overall aesthetic appeal"],
        ),
    },
    Event {
        id: 3,
        title: "Capture the Craft Table",
        image: "/assets/capturetheflag.png",
        category: "CTF",
        description: "Defend your precious Crafting Table while trying to steal your opponent's. Cyber challenges await at every corner.",
        poster: "/assets/capture_the_craft_table_poster.png",
        form: "https://forms.gle/ozxRQiJhUeUiQSjt9",
        format: (
            "CTF Challenge",
            &[
                "Solve cybersecurity puzzles and exploit vulnerabilities",
                "Defend your Crafting Table while stealing opponent's",
                "First to capture all flags wins",
            ],
        ),
        criteria: ("Winning Criteria", &["Number of flags captured", "Time taken"]),
    },
    Event {
        id: 4,
        title: "Crafting the Interface",
        image: "/assets/craftingtheinterface.png",
        category: "UI/UX Design",
        description: "Designs worth more than netherite. Create visually stunning and highly usable interfaces.",
        poster: "/assets/crafting_the_interface_poster.png",
        form: "https://forms.gle/DZqZS2xyvyrw9tbe8",
        format: (
            "Design Process",
            &[
                "Participants are given a design brief",
                "Must submit final mockup or prototype within allotted time",
                "Focus on visually stunning and highly usable interfaces",
            ],
        ),
        criteria: (
            "Winning Criteria",
            &["Visual appeal", "Usability and accessibility", "Creativity"],
        ),
    },
    Event {
        id: 5,
        title: "Diamond Docs",
        image: "/assets/diamonddocs.png",
        category: "Paper Presentation",
        description: "Only the rarest ideas get mined here. Participants must present innovative, research-backed concepts that can shine like diamonds in the rough.",
        poster: "/assets/diamond_docs_poster.png",
        form: "https://forms.gle/7AAzxRWfhURK2VRq7",
        format: (
            "Presentation Rules",
            &[
                "Presentations must be tech-oriented and under 8 minutes",
                "Use of slides is mandatory",
                "Questions from judges follow each presentation",
            ],
        ),
        criteria: (
            "Winning Criteria",
            &[
                "Originality of idea",
                "Practicality & impact",
                "Presentation clarity and engagement",
            ],
        ),
    },
    Event {
        id: 6,
        title: "Lectern Lore",
        image: "/assets/lecternlore.png",
        category: "Technical Quiz",
        description: "It's time to put your Minecraft brain to the test! Lectern & Lore is a technical quiz that challenges your knowledge of the game's mechanics, redstone logic, crafting recipes, mob behavior and rich lore. From obscure trivia to in-game problem solving, only the most knowledgeable crafters will stand tall at the end.",
        poster: "/assets/lectern_lore_poster.png",
        form: "https://forms.gle/jKoeZaBKyoqttG7r9",
        format: (
            "Quiz Format",
            &[
                "Multiple rounds including rapid-fire questions, puzzles and situational challenges",
                "Participants can compete solo or in teams (limit decided by organizers)",
                "Covers gameplay mechanics, technical features, crafting, mobs, and lore",
                "No internet, books or guides during the quiz",
            ],
        ),
        criteria: (
            "Scoring & Rules",
            &[
                "Points awarded for accuracy and speed",
                "Tie breakers decided through special challenge rounds",
                "Any cheating or disruptive conduct results in immediate disqualification",
                "All disputes and scoring decisions are final",
            ],
        ),
    },
    Event {
        id: 7,
        title: "Nether Quest 2.0",
        image: "/assets/netherquest.png",
        category: "Treasure Hunt",
        description: "Journey through clues and challenges while dodging more lava accidents than you'd like.",
        poster: "/assets/nether_quest_poster.png",
        form: "https://forms.gle/VfSioKBF7szRT3zk9",
        format: (
            "Quest Format",
            &[
                "Follow the clue chain to find hidden treasures",
                "Some challenges may be coding or puzzle-based",
                "Navigate through challenging environments",
            ],
        ),
        criteria: (
            "Winning Criteria",
            &["First to complete the quest", "Least penalties from wrong clues"],
        ),
    },
    Event {
        id: 8,
        title: "Mine your Ideas",
        image: "/assets/pitchcraft.png",
        category: "Idea Pitching",
        description: "Build your empire block by block by pitching an innovative project or product idea to impress the creepers judges.",
        poster: "/assets/mine_your_ideas_poster.png",
        form: "https://forms.gle/2WKLLb8VfRpYwe3e6",
        format: (
            "Pitch Format",
            &[
                "5-minute pitch + 3-minute Q&A",
                "Use of prototypes, slides, or demos encouraged",
                "Present innovative project or product ideas",
            ],
        ),
        criteria: (
            "Winning Criteria",
            &["Creativity", "Feasibility", "Presentation style"],
        ),
    },
];

fn general_rules() -> Vec<RuleSection> {
    vec![
        section(
            "General Rules",
            RuleTone::General,
            &[
                "All participants must register before the event",
                "Valid student ID is mandatory for participation",
                "Follow all safety guidelines and instructions",
                "Respect other participants and organizers",
            ],
        ),
        section(
            "Event Specific",
            RuleTone::General,
            &[
                "Arrive 15 minutes before the event starts",
                "Bring necessary equipment if required",
                "No external assistance during competitions",
                "Decisions of judges are final",
            ],
        ),
        section(
            "Code of Conduct",
            RuleTone::General,
            &[
                "Maintain professional behavior throughout",
                "No use of unfair means or cheating",
                "Report any issues to event coordinators",
                "Help maintain a clean event environment",
            ],
        ),
        section(
            "Important Notes",
            RuleTone::Notice,
            &[
                "Winners will be announced at the closing ceremony",
                "Certificates will be provided to all participants",
                "Photos and videos may be taken during events",
                "Contact organizers for any special requirements",
            ],
        ),
    ]
}

impl Catalog {
    /// The eight Xplore'25 events with posters, forms and rules
    pub fn xplore25() -> Self {
        let items = EVENTS
            .iter()
            .map(|e| ContentItem {
                id: e.id,
                title: e.title.to_string(),
                image_ref: e.image.to_string(),
                description: e.description.to_string(),
                category: e.category.to_string(),
            })
            .collect();

        let details = EVENTS
            .iter()
            .map(|e| {
                (
                    e.id,
                    DetailItem {
                        id: e.id,
                        poster_ref: e.poster.to_string(),
                        registration_url: e.form.to_string(),
                        rules: vec![
                            section(e.format.0, RuleTone::Format, e.format.1),
                            section(e.criteria.0, RuleTone::Criteria, e.criteria.1),
                        ],
                    },
                )
            })
            .collect();

        let coordinators = vec![
            Coordinator {
                name: "Sairam".to_string(),
                phone: "93421 99098".to_string(),
            },
            Coordinator {
                name: "Mathan Kumaar".to_string(),
                phone: "99621 29234".to_string(),
            },
        ];

        Catalog {
            name: "Xplore'25".to_string(),
            items,
            details,
            general_rules: general_rules(),
            coordinators,
        }
    }
}
