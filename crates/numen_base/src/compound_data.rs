//! Compound-number meanings, keyed by display string (`"17/8"`).
//!
//! The table covers 10..=97. Lookups outside it return `None`; callers fall
//! back to the base number's generic meaning.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::reduce::{NumberValue, reduce};

/// Caption and description for one compound number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompoundInterpretation {
    pub raw: u32,
    pub caption: &'static str,
    pub description: &'static str,
    /// Base number 1..=9 the compound reduces to.
    pub category: u8,
}

impl CompoundInterpretation {
    /// Display key, e.g. `"17/8"`.
    pub fn key(&self) -> String {
        NumberValue::from_raw(self.raw).to_string()
    }
}

const fn c(raw: u32, caption: &'static str, description: &'static str) -> CompoundInterpretation {
    CompoundInterpretation {
        raw,
        caption,
        description,
        category: reduce(raw) as u8,
    }
}

/// Compound meanings in ascending order, 10..=97.
pub static COMPOUND_INTERPRETATIONS: [CompoundInterpretation; 88] = [
    c(10, "Wheel of Fortune", "Rise and fall by one's own plans; honour and self-confidence bring the plans to completion."),
    c(11, "The Clenched Hand", "Hidden dangers and trials from others; faith and caution carry the holder through."),
    c(12, "The Sacrifice", "Anxiety from the schemes of others; ambitions are given up for a wider good."),
    c(13, "Regeneration", "Change of plans and upheaval that clears the ground for power and new beginnings."),
    c(14, "Movement", "Dealings with people and trade; combinations bring fortune but carry risk of loss through others."),
    c(15, "The Magician", "Eloquence, charm and the gift of attracting favours, gifts and help from others."),
    c(16, "The Shattered Citadel", "Sudden reversal of plans; forewarned, the holder can rebuild on firmer ground."),
    c(17, "The Star of the Magi", "Spiritual strength that rises above trials; a name that outlives its bearer."),
    c(18, "Conflict", "Materialism set against the spiritual; quarrels and deception must be watched for."),
    c(19, "Prince of Heaven", "Happiness, success and esteem; one of the most fortunate compounds."),
    c(20, "The Awakening", "A call to action for a great cause; plans that are not worldly but lasting."),
    c(21, "Crown of the Magi", "Advancement, honour and victory after long effort; assured success."),
    c(22, "The Fool's Dream", "Living in illusion and being misled by others; sound judgment must be kept."),
    c(23, "Royal Star of the Lion", "Help from superiors and protection from those in high places; success in plans."),
    c(24, "Love and Assistance", "Gain through love and through the favour of those of rank; fortunate in partnerships."),
    c(25, "Strength Through Experience", "Benefit through observation of people and things; success after early trials."),
    c(26, "Partnerships", "Warnings of future ruin through bad speculation and unwise alliances."),
    c(27, "The Sceptre", "Authority and command; rewards from creative and intellectual work."),
    c(28, "Trust in Others", "Great promise that is lost through trust in others or opposition in trade."),
    c(29, "Grace Under Pressure", "Uncertainties and treachery from friends; trials through relationships."),
    c(30, "Thoughtful Deduction", "Retrospection and mental superiority; fortunate or not according to the will."),
    c(31, "The Hermit", "Self-contained and isolated; success comes but often in solitude."),
    c(32, "Communication", "Magical power to hold people together; fortunate when judgment is one's own."),
    c(33, "Creative Harmony", "Shares the promise of 24; gain through affection and generous alliances."),
    c(34, "Movement Renewed", "Shares the meaning of 25; trials early give way to success through insight."),
    c(35, "Unsettled Ventures", "Shares the warnings of 26; partnerships and speculation need great caution."),
    c(36, "The Traveller", "Restless genius; success far from home and through bold undertakings."),
    c(37, "Good Friendships", "Fortunate partnerships and sincere love; prosperity through cooperation."),
    c(38, "Divided Purpose", "Shares the trials of 29; sudden changes through the actions of others."),
    c(39, "Hard-Won Honour", "Labour that others credit to themselves; persistence eventually rewarded."),
    c(40, "Borrowed Light", "Fortunate friendships that do not last; glory that depends on others."),
    c(41, "Quiet Command", "Shares the strength of 32; power to influence and lead from the background."),
    c(42, "Careful Accumulation", "Shares the meaning of 24; thrift and affection bring security."),
    c(43, "Revolution", "Upheaval, strife and failure of plans; a time to prepare rather than act."),
    c(44, "Unforeseen Dangers", "Shares the warnings of 26; caution in alliances and with speculation."),
    c(45, "Restored Fortune", "Shares the meaning of 27; authority and reward regained through persistence."),
    c(46, "Crown of Gold", "Prosperity and success; the head rises through its own worth."),
    c(47, "Prospering Plans", "Shares the meaning of 29 but with lighter trials; goodwill is decisive."),
    c(48, "Uncertain Alliances", "Shares the meaning of 30; isolation of mind, wisdom slow to be recognised."),
    c(49, "Crossing Currents", "Shares the meaning of 31; success away from crowds and in solitude."),
    c(50, "Reflection", "Shares the meaning of 23; help from those in power and protection in change."),
    c(51, "The Warrior", "Sudden advancement in whatever is undertaken; enemies are made along the way."),
    c(52, "Gathering Forces", "Shares the meaning of 43; upheaval that must be ridden out with patience."),
    c(53, "Gentle Progress", "Slow but dependable advance; favour from elders and patrons."),
    c(54, "Hidden Foundations", "Plans laid in private come to light with unexpected strength."),
    c(55, "Double Quickening", "Sharp intellect and fast change; gains if energy is not scattered."),
    c(56, "Home and Hearth", "Domestic fortune, artistic comfort and the care of family ties."),
    c(57, "Seeker's Path", "Study and inner search that lead to a respected voice."),
    c(58, "Burden and Reward", "Heavy responsibility met with endurance; late but lasting recognition."),
    c(59, "Open Horizons", "Courage that opens new ground; travel and bold enterprise."),
    c(60, "The Circle", "Harmony in family and community; balance between giving and receiving."),
    c(61, "Steady Leadership", "Authority built on consistency; the holder is looked to in hard times."),
    c(62, "The Confidant", "Trusted counsel; influence exerted through listening rather than speaking."),
    c(63, "Broad Generosity", "Good fortune that grows when shared; popularity in public life."),
    c(64, "The Builder", "Practical vision realised stone by stone; patience is the key."),
    c(65, "Changing Tides", "Shifts of fortune that reward adaptability and fresh alliances."),
    c(66, "The Guardian", "Protective love and responsibility for many; strength in service."),
    c(67, "The Dreamer Awake", "Vision given practical form; intuition trusted and tested."),
    c(68, "The Steward", "Management of resources for others; respect earned through prudence."),
    c(69, "Completion", "Endings that make room for renewal; compassion after conflict."),
    c(70, "Inner Compass", "Self-reliance and inward certainty; guidance found in solitude."),
    c(71, "The Pioneer", "New ventures begun alone; success through originality."),
    c(72, "The Peacemaker", "Reconciliation and partnership; conflicts resolved through patience."),
    c(73, "Bright Expression", "Eloquence and creative reach; recognition through the arts."),
    c(74, "Long Labour", "Work that bears fruit only with time; stamina is rewarded."),
    c(75, "Freedom's Price", "Independence gained at a cost; travel and change in the cause of liberty."),
    c(76, "The Sanctuary", "A settled home after wandering; comfort earned and shared."),
    c(77, "Secret Wisdom", "Insight withheld until the right moment; the quiet scholar."),
    c(78, "Weighty Affairs", "Large undertakings and the management of wealth; caution in law."),
    c(79, "Trial by Fire", "Contests faced with courage; victory that tests the spirit."),
    c(80, "The Threshold", "Old structures give way; readiness for a wider field."),
    c(81, "Renewed Authority", "A return to leadership after a period of waiting."),
    c(82, "Hidden Harmony", "Gentle influence and unseen support from close allies."),
    c(83, "The Herald", "News, messages and public voice; success through communication."),
    c(84, "Firm Ground", "Security through method and order; plans rest on solid footing."),
    c(85, "The Wanderer", "Change of place and fortune; opportunity in the unfamiliar."),
    c(86, "Kindred Bonds", "Strength from family and old friends; loyalty returned."),
    c(87, "The Mystic", "Spiritual leaning and inner discovery; caution with illusions."),
    c(88, "Mastery of Means", "Command of resources; success in commerce and management."),
    c(89, "The Crusader", "Passion for causes; energy spent for the sake of others."),
    c(90, "The Full Circle", "Culmination of effort; the end of one cycle and a view of the next."),
    c(91, "The Founder", "Lasting beginnings; an enterprise that outlives its creator."),
    c(92, "The Mediator", "Balance between opposing parties; fortune through tact."),
    c(93, "The Orator", "Persuasion and visibility; influence in public affairs."),
    c(94, "The Architect", "Grand designs with patient execution; reward in maturity."),
    c(95, "The Explorer", "Far journeys and new knowledge; gains through daring."),
    c(96, "The Patron", "Support of others' talents; respect and gratitude returned."),
    c(97, "The Sage", "Wisdom gathered over a lifetime; counsel sought by many."),
];

static COMPOUND_INDEX: Lazy<HashMap<String, &'static CompoundInterpretation>> = Lazy::new(|| {
    COMPOUND_INTERPRETATIONS
        .iter()
        .map(|c| (c.key(), c))
        .collect()
});

/// Meaning for a compound display string such as `"17/8"`.
pub fn compound_interpretation(display: &str) -> Option<&'static CompoundInterpretation> {
    COMPOUND_INDEX.get(display.trim()).copied()
}

/// Meaning for a compound value; `None` for single digits and uncovered numbers.
pub fn compound_interpretation_for(value: NumberValue) -> Option<&'static CompoundInterpretation> {
    compound_interpretation(&value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_10_through_97() {
        assert_eq!(COMPOUND_INTERPRETATIONS.len(), 88);
        for (i, c) in COMPOUND_INTERPRETATIONS.iter().enumerate() {
            assert_eq!(c.raw, 10 + i as u32);
        }
    }

    #[test]
    fn category_is_reduction() {
        for c in COMPOUND_INTERPRETATIONS.iter() {
            assert_eq!(c.category as u32, reduce(c.raw));
        }
    }

    #[test]
    fn lookup_by_display() {
        let c = compound_interpretation("17/8").unwrap();
        assert_eq!(c.caption, "The Star of the Magi");
        assert_eq!(c.category, 8);
    }

    #[test]
    fn absent_keys_are_none() {
        assert!(compound_interpretation("98/8").is_none());
        assert!(compound_interpretation("5").is_none());
        assert!(compound_interpretation("17/7").is_none());
        assert!(compound_interpretation("").is_none());
    }

    #[test]
    fn lookup_by_value() {
        let c = compound_interpretation_for(NumberValue::from_raw(19)).unwrap();
        assert_eq!(c.key(), "19/1");
        assert!(compound_interpretation_for(NumberValue::from_raw(7)).is_none());
    }
}
