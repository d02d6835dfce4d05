//! Birthday-number meanings, keyed by the chart's `top` (1..=9).

use serde::Serialize;

/// Ruling planet of a birthday number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Planet {
    Sun,
    Moon,
    Jupiter,
    Uranus,
    Mercury,
    Venus,
    Neptune,
    Saturn,
    Mars,
}

impl Planet {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Jupiter => "Jupiter",
            Self::Uranus => "Uranus",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Neptune => "Neptune",
            Self::Saturn => "Saturn",
            Self::Mars => "Mars",
        }
    }
}

/// Narrative record for one birthday number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthdayInterpretation {
    pub number: u8,
    pub planet: Planet,
    pub essence: &'static str,
    pub strengths: &'static str,
    pub challenges: &'static str,
    pub relationships: &'static str,
    pub vocation: &'static str,
    pub guidance: &'static str,
}

/// Birthday meanings, index = number - 1.
pub const BIRTHDAY_INTERPRETATIONS: [BirthdayInterpretation; 9] = [
    BirthdayInterpretation {
        number: 1,
        planet: Planet::Sun,
        essence: "Self-driven and original, you set your own course and expect to lead it.",
        strengths: "Initiative, willpower, courage to start what others only discuss.",
        challenges: "Impatience with slower people and reluctance to accept advice.",
        relationships: "Loyal and protective, but needs a partner who respects independence.",
        vocation: "Founding, directing, inventing; any role with authority of its own.",
        guidance: "Lead by example and leave room for others to contribute.",
    },
    BirthdayInterpretation {
        number: 2,
        planet: Planet::Moon,
        essence: "Receptive and imaginative, you sense moods before they are spoken.",
        strengths: "Diplomacy, intuition, a gift for bringing people together.",
        challenges: "Changeable moods and a tendency to lose confidence under pressure.",
        relationships: "Devoted and tender; thrives on closeness and reassurance.",
        vocation: "Counselling, mediation, the arts, care work.",
        guidance: "Trust your instincts and finish what your imagination begins.",
    },
    BirthdayInterpretation {
        number: 3,
        planet: Planet::Jupiter,
        essence: "Ambitious and expansive, you are drawn to growth and recognition.",
        strengths: "Optimism, discipline, a natural sense of order and rank.",
        challenges: "Overreach and a love of control that can feel dictatorial.",
        relationships: "Generous and warm, though pride can keep feelings unsaid.",
        vocation: "Teaching, law, administration, anything with a ladder to climb.",
        guidance: "Aim high, and let generosity rather than rank earn respect.",
    },
    BirthdayInterpretation {
        number: 4,
        planet: Planet::Uranus,
        essence: "Unconventional and methodical at once, you see the world from an angle.",
        strengths: "Persistence, reform-minded thinking, reliability in a crisis.",
        challenges: "Contrariness, isolation, and friction with established rules.",
        relationships: "Few but deep friendships; slow to trust, steady once committed.",
        vocation: "Engineering, technology, research, organisational reform.",
        guidance: "Build patiently; the foundations you lay outlast quick successes.",
    },
    BirthdayInterpretation {
        number: 5,
        planet: Planet::Mercury,
        essence: "Quick-witted and restless, you learn by moving and meeting.",
        strengths: "Adaptability, persuasion, commercial instinct.",
        challenges: "Scattered focus and nervous energy that burns out.",
        relationships: "Sociable and charming; needs variety and mental rapport.",
        vocation: "Trade, travel, media, sales, anything fast-changing.",
        guidance: "Choose a few directions and follow them through.",
    },
    BirthdayInterpretation {
        number: 6,
        planet: Planet::Venus,
        essence: "Harmonious and magnetic, you draw people through warmth and taste.",
        strengths: "Artistic sense, loyalty, a talent for creating comfort.",
        challenges: "Obstinacy once hurt, and over-attachment to approval.",
        relationships: "Romantic and devoted; home and partnership are central.",
        vocation: "Design, hospitality, the arts, healing professions.",
        guidance: "Give freely, but keep some of that care for yourself.",
    },
    BirthdayInterpretation {
        number: 7,
        planet: Planet::Neptune,
        essence: "Reflective and visionary, you look beneath the surface of things.",
        strengths: "Insight, originality, a philosophical turn of mind.",
        challenges: "Restlessness, secrecy, and drifting between ideals.",
        relationships: "Needs a partner who understands long silences.",
        vocation: "Research, writing, spiritual work, travel across water.",
        guidance: "Ground your visions in one practical step at a time.",
    },
    BirthdayInterpretation {
        number: 8,
        planet: Planet::Saturn,
        essence: "Serious and enduring, you carry responsibility others put down.",
        strengths: "Endurance, judgment, the ability to manage large affairs.",
        challenges: "Loneliness and a habit of being misunderstood.",
        relationships: "Reserved outside, intensely loyal inside.",
        vocation: "Finance, management, law, long-horizon projects.",
        guidance: "Success comes late and lasts; do not mistake delay for refusal.",
    },
    BirthdayInterpretation {
        number: 9,
        planet: Planet::Mars,
        essence: "Energetic and combative, you meet life head on.",
        strengths: "Courage, drive, loyalty to causes and people.",
        challenges: "Quick temper and impulsive risk-taking.",
        relationships: "Passionate and protective; quarrels flare and pass.",
        vocation: "Leadership under pressure, medicine, athletics, defence.",
        guidance: "Point your fire at the obstacle, never at the ally.",
    },
];

/// Meaning for a birthday number; `None` outside 1..=9.
pub fn birthday_interpretation(number: u8) -> Option<&'static BirthdayInterpretation> {
    match number {
        1..=9 => BIRTHDAY_INTERPRETATIONS.get(number as usize - 1),
        _ => None,
    }
}
