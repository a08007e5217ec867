//! Copy for the static sections of the page.

#[derive(Clone, Copy, PartialEq)]
pub struct Card {
    pub tag: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub speed: Option<&'static str>,
}

const fn card(tag: &'static str, title: &'static str, body: &'static str, speed: &'static str) -> Card {
    Card { tag, title, body, speed: Some(speed) }
}

pub const VISION: &str = "Artificial Intelligence is no longer science fiction—it's reshaping every aspect of human existence. \
From quantum computing that processes information at unprecedented speeds to neural networks that understand \
human emotions, we stand at the threshold of a new era. AGI (Artificial General Intelligence) will transform \
industries, cure diseases, solve climate change, and perhaps even unlock the mysteries of consciousness itself. \
The question isn't if AI will change everything—it's how we'll adapt to a world where machines think, learn, \
and create alongside us.";

pub const TECHNOLOGIES: [Card; 8] = [
    card("AGI", "General Intelligence", "AI systems with human-level reasoning across all cognitive tasks, capable of learning any intellectual task humans can perform.", "0.12"),
    card("Quantum", "Quantum AI", "Quantum computers running AI algorithms, solving previously impossible problems in cryptography, drug discovery, and optimization.", "0.18"),
    card("Neural", "Brain-Computer Interface", "Direct neural connections allowing thought-to-machine communication, memory enhancement, and consciousness expansion.", "0.22"),
    card("Bio-AI", "Biological Intelligence", "AI-designed proteins and organisms, synthetic biology creating living computers and biological nanomachines.", "0.16"),
    card("Swarm", "Collective Intelligence", "Millions of AI agents working together, creating emergent intelligence greater than the sum of its parts.", "0.14"),
    card("Emotional", "Empathetic AI", "AI systems that genuinely understand and respond to human emotions, revolutionizing therapy, education, and companionship.", "0.20"),
    card("Creative", "Artistic Intelligence", "AI creating original art, music, literature, and scientific theories that push boundaries of human creativity.", "0.15"),
    card("Molecular", "Nano-AI", "Microscopic AI-powered robots operating at cellular level, revolutionizing medicine and material science.", "0.19"),
];

pub const EVOLUTION: [Card; 8] = [
    card("2025-2030", "AI Everywhere", "AI assistants become ubiquitous, autonomous vehicles dominate roads, and personalized AI tutors transform education globally.", "0.12"),
    card("2030-2035", "Medical Revolution", "AI diagnoses diseases before symptoms appear, designs personalized treatments, and extends human lifespan by decades.", "0.18"),
    card("2035-2040", "Climate Solutions", "AI-designed carbon capture systems reverse climate change, optimize global energy grids, and restore ecosystems.", "0.22"),
    card("2040-2045", "AGI Emergence", "First true Artificial General Intelligence emerges, capable of matching human cognition across all domains.", "0.16"),
    card("2045-2050", "Human-AI Symbiosis", "Brain-computer interfaces merge human and artificial intelligence, creating hybrid consciousness and enhanced cognition.", "0.14"),
    card("2050-2060", "Space Colonization", "AI-managed habitats on Mars and Moon, autonomous spacecraft exploring distant stars, mining asteroids for resources.", "0.20"),
    card("2060-2080", "Post-Scarcity Economy", "AI automation creates abundance, universal basic income becomes global standard, work becomes optional and creative.", "0.15"),
    card("2080-2100", "Digital Immortality", "Consciousness uploading becomes reality, humans exist simultaneously in physical and digital realms, death becomes optional.", "0.19"),
];

pub const INDUSTRIES: [Card; 4] = [
    Card { tag: "🏥", title: "Healthcare", body: "Personalized medicine, early disease detection, AI surgeons, drug discovery at lightning speed, and mental health support available 24/7.", speed: None },
    Card { tag: "🎓", title: "Education", body: "Adaptive learning systems, AI tutors for every student, instant language translation, and education accessible to everyone globally.", speed: None },
    Card { tag: "🌾", title: "Agriculture", body: "Precision farming, crop optimization, vertical farms in cities, and AI solving food scarcity for 10 billion people.", speed: None },
    Card { tag: "⚖️", title: "Justice", body: "Predictive crime prevention, bias-free legal analysis, faster court proceedings, and rehabilitation programs that actually work.", speed: None },
];

pub const QUOTES: [(&str, &str); 8] = [
    ("The development of full artificial intelligence could spell the end of the human race or the beginning of our greatest chapter.", "Stephen Hawking"),
    ("AI is probably the most important thing humanity has ever worked on. I think of it as something more profound than electricity or fire.", "Sundar Pichai"),
    ("The question isn't whether AI will change humanity. The question is: will we use it to become more human, or less?", "AI Ethics Council"),
    ("By 2050, AI won't replace humans. Instead, humans will merge with AI, creating a new form of augmented intelligence.", "Ray Kurzweil"),
    ("The real risk with AI isn't malice but competence. A super-intelligent AI will be extremely good at accomplishing its goals.", "Nick Bostrom"),
    ("We're creating gods. We can only hope they're benevolent ones.", "Elon Musk"),
    ("The key question about AI is not whether it will be smarter than humans, but whether humans will be wise enough to stay in control.", "Yuval Noah Harari"),
    ("Machine intelligence is the last invention that humanity will ever need to make. From that point forward, AI will create everything we need.", "Nick Bostrom"),
];
