//! Bundled example catalog.
//!
//! Five spells spanning every filter dimension: a cantrip, a ritual, two
//! concentration spells, a non-PHB source and one homebrew entry.

use crate::entities::{Spell, SpellLevel, SpellSchool};

fn level(n: u8) -> SpellLevel {
    // Literal levels below are all in range.
    SpellLevel::new(n).unwrap_or(SpellLevel::CANTRIP)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The example spells, in catalog order.
pub fn example_spells() -> Vec<Spell> {
    vec![
        Spell {
            id: "1".to_string(),
            name: "Fireball".to_string(),
            level: level(3),
            school: SpellSchool::Evocation,
            casting_time: "1 Action".to_string(),
            range: "150 feet".to_string(),
            components: strings(&["V", "S", "M"]),
            duration: "Instantaneous".to_string(),
            description: "A bright streak flashes from your pointing finger to a point you \
                choose within range and then blossoms with a low roar into an explosion of \
                flame. Each creature in a 20-foot-radius sphere centered on that point must \
                make a Dexterity saving throw. A target takes 8d6 fire damage on a failed \
                save, or half as much damage on a successful one."
                .to_string(),
            classes: strings(&["Sorcerer", "Wizard"]),
            source: "PHB".to_string(),
            is_homebrew: false,
            is_ritual: false,
            requires_concentration: false,
            image_url: None,
            created_by: None,
            created_at: None,
        },
        Spell {
            id: "2".to_string(),
            name: "Detect Magic".to_string(),
            level: level(1),
            school: SpellSchool::Divination,
            casting_time: "1 Action".to_string(),
            range: "Self".to_string(),
            components: strings(&["V", "S"]),
            duration: "10 Minutes".to_string(),
            description: "For the duration, you sense the presence of magic within 30 feet \
                of you. If you sense magic in this way, you can use your action to see a \
                faint aura around any visible creature or object in the area that bears \
                magic."
                .to_string(),
            classes: strings(&[
                "Bard", "Cleric", "Druid", "Paladin", "Ranger", "Sorcerer", "Wizard",
            ]),
            source: "PHB".to_string(),
            is_homebrew: false,
            is_ritual: true,
            requires_concentration: true,
            image_url: None,
            created_by: None,
            created_at: None,
        },
        Spell {
            id: "3".to_string(),
            name: "Eldritch Blast".to_string(),
            level: SpellLevel::CANTRIP,
            school: SpellSchool::Evocation,
            casting_time: "1 Action".to_string(),
            range: "120 feet".to_string(),
            components: strings(&["V", "S"]),
            duration: "Instantaneous".to_string(),
            description: "A beam of crackling energy streaks toward a creature within range. \
                Make a ranged spell attack against the target. On a hit, the target takes \
                1d10 force damage. The spell creates more than one beam when you reach \
                higher levels."
                .to_string(),
            classes: strings(&["Warlock"]),
            source: "PHB".to_string(),
            is_homebrew: false,
            is_ritual: false,
            requires_concentration: false,
            image_url: None,
            created_by: None,
            created_at: None,
        },
        Spell {
            id: "4".to_string(),
            name: "Dragon's Breath".to_string(),
            level: level(2),
            school: SpellSchool::Transmutation,
            casting_time: "1 Bonus Action".to_string(),
            range: "Touch".to_string(),
            components: strings(&["V", "S", "M"]),
            duration: "1 Minute".to_string(),
            description: "You touch one willing creature and imbue it with the power to spew \
                magical energy from its mouth, provided it has one. Choose acid, cold, fire, \
                lightning, or poison. Until the spell ends, the creature can use an action \
                to exhale energy of the chosen type in a 15-foot cone."
                .to_string(),
            classes: strings(&["Sorcerer", "Wizard"]),
            source: "Xanathar's Guide".to_string(),
            is_homebrew: false,
            is_ritual: false,
            requires_concentration: true,
            image_url: None,
            created_by: None,
            created_at: None,
        },
        Spell {
            id: "5".to_string(),
            name: "Arcane Ward".to_string(),
            level: level(2),
            school: SpellSchool::Abjuration,
            casting_time: "1 Action".to_string(),
            range: "Self".to_string(),
            components: strings(&["V", "S"]),
            duration: "8 Hours".to_string(),
            description: "A magical ward surrounds and protects you. The ward has hit points \
                equal to twice your wizard level + your Intelligence modifier. Whenever you \
                take damage, the ward takes the damage instead."
                .to_string(),
            classes: strings(&["Wizard"]),
            source: "Homebrew".to_string(),
            is_homebrew: true,
            is_ritual: false,
            requires_concentration: false,
            image_url: None,
            created_by: None,
            created_at: None,
        },
    ]
}
