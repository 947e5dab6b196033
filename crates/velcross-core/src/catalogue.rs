//! The static catalogue: every character and lore entry on the site.
//!
//! Built once on first access and never mutated afterwards.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::Serialize;

use crate::error::{CatalogueIssue, ChronicleResult};
use crate::types::{Character, ColorTheme, PersonalityStat, WorldLore};

/// Every personality chart in the catalogue is plotted out of this mark.
const FULL_MARK: f64 = 100.0;

/// Characters in gallery order.
pub static CHARACTERS: LazyLock<Vec<Character>> = LazyLock::new(build_characters);

/// Lore entries in guide order.
pub static WORLD_LORE: LazyLock<Vec<WorldLore>> = LazyLock::new(build_world_lore);

pub fn characters() -> &'static [Character] {
    &CHARACTERS
}

pub fn world_lore() -> &'static [WorldLore] {
    &WORLD_LORE
}

fn stats(values: [(&str, f64); 6]) -> Vec<PersonalityStat> {
    values
        .into_iter()
        .map(|(subject, value)| PersonalityStat::new(subject, value, FULL_MARK))
        .collect()
}

fn build_characters() -> Vec<Character> {
    vec![
        Character {
            id: "cedric".to_string(),
            name: "Cedric von Velcross".to_string(),
            role: "Crown Prince".to_string(),
            age: "24".to_string(),
            gender: "Male".to_string(),
            mbti: "INTJ".to_string(),
            enneagram: "3w4".to_string(),
            height: "187cm".to_string(),
            appearance: "Silver-blond hair tied low at the nape, storm-grey eyes, and the \
                         sapphire signet of the Velcross line on his left hand. Rarely seen \
                         out of his navy military coat."
                .to_string(),
            traits: ["Calculating", "Reserved", "Protective", "Sleepless"]
                .map(String::from)
                .to_vec(),
            description: "Heir to an empire that expects perfection. Cedric has spent his \
                          life learning which smiles are daggers, and trusts almost no one \
                          who did not bleed beside him on the northern border."
                .to_string(),
            stats: stats([
                ("Charisma", 78.0),
                ("Intellect", 92.0),
                ("Passion", 55.0),
                ("Loyalty", 70.0),
                ("Cunning", 88.0),
                ("Empathy", 40.0),
            ]),
            color_theme: ColorTheme::Indigo,
        },
        Character {
            id: "seraphine".to_string(),
            name: "Seraphine Arlow".to_string(),
            role: "Court Enchantress".to_string(),
            age: "321 (23)".to_string(),
            gender: "Female".to_string(),
            mbti: "ENFP".to_string(),
            enneagram: "7w6".to_string(),
            height: "164cm".to_string(),
            appearance: "Rose-gold curls threaded with living starflowers, one violet eye \
                         and one gold. Her sleeves are always singed at the cuffs."
                .to_string(),
            traits: ["Whimsical", "Ancient", "Curious"].map(String::from).to_vec(),
            description: "An immortal mage bound to the palace by a bargain no one alive \
                          remembers. She treats court intrigue as theatre and the heir as \
                          her favourite, most exasperating play."
                .to_string(),
            stats: stats([
                ("Charisma", 90.0),
                ("Intellect", 85.0),
                ("Passion", 82.0),
                ("Loyalty", 45.0),
                ("Cunning", 60.0),
                ("Empathy", 72.0),
            ]),
            color_theme: ColorTheme::Rose,
        },
        Character {
            id: "lucian".to_string(),
            name: "Lucian Hale".to_string(),
            role: "Knight Commander".to_string(),
            age: "29".to_string(),
            gender: "Male".to_string(),
            mbti: "ISFJ".to_string(),
            enneagram: "6w5".to_string(),
            height: "192cm".to_string(),
            appearance: "Close-cropped black hair, a scar through the right brow, and \
                         plate armour polished until it mirrors the sky."
                .to_string(),
            traits: ["Steadfast", "Dutiful"].map(String::from).to_vec(),
            description: "Born in the slums of the lower city, raised to command the \
                          Imperial Guard by sheer stubbornness. His oath is to the Crown; \
                          his heart has never been as simple."
                .to_string(),
            stats: stats([
                ("Charisma", 58.0),
                ("Intellect", 64.0),
                ("Passion", 74.0),
                ("Loyalty", 98.0),
                ("Cunning", 35.0),
                ("Empathy", 81.0),
            ]),
            color_theme: ColorTheme::Slate,
        },
        Character {
            id: "elowen".to_string(),
            name: "Elowen Thistlewood".to_string(),
            role: "Imperial Herbalist".to_string(),
            age: "21".to_string(),
            gender: "Female".to_string(),
            mbti: "INFJ".to_string(),
            enneagram: "2w1".to_string(),
            height: "158cm".to_string(),
            appearance: "Moss-green braid, freckles, ink-stained fingers and a satchel \
                         that smells faintly of lavender and smoke."
                .to_string(),
            traits: ["Gentle", "Observant", "Stubborn", "Secretive"]
                .map(String::from)
                .to_vec(),
            description: "A country healer summoned to court after curing a duchess no \
                          physician could. She hears more in the palace gardens than the \
                          spymaster does, and tells far less."
                .to_string(),
            stats: stats([
                ("Charisma", 52.0),
                ("Intellect", 80.0),
                ("Passion", 60.0),
                ("Loyalty", 76.0),
                ("Cunning", 57.0),
                ("Empathy", 95.0),
            ]),
            color_theme: ColorTheme::Emerald,
        },
        Character {
            id: "valerius".to_string(),
            name: "Duke Valerius Morn".to_string(),
            role: "Grand Chancellor".to_string(),
            age: "46".to_string(),
            gender: "Male".to_string(),
            mbti: "ENTJ".to_string(),
            enneagram: "8w7".to_string(),
            height: "181cm".to_string(),
            appearance: "Raven hair silvered at the temples, a trimmed beard, and crimson \
                         robes heavy with the chains of office."
                .to_string(),
            traits: ["Ambitious", "Charming", "Ruthless"].map(String::from).to_vec(),
            description: "The Emperor's right hand and, some whisper, the hand that truly \
                          holds the reins. Every favour he grants is a debt he intends to \
                          collect."
                .to_string(),
            stats: stats([
                ("Charisma", 94.0),
                ("Intellect", 88.0),
                ("Passion", 66.0),
                ("Loyalty", 22.0),
                ("Cunning", 97.0),
                ("Empathy", 18.0),
            ]),
            color_theme: ColorTheme::Crimson,
        },
        Character {
            id: "nyx".to_string(),
            name: "Nyx".to_string(),
            role: "Shadow Courier".to_string(),
            age: "Unknown (appears 19)".to_string(),
            gender: "Female".to_string(),
            mbti: "ISTP".to_string(),
            enneagram: "5w4".to_string(),
            height: "169cm".to_string(),
            appearance: "Ash-white bob, a porcelain half-mask, and a black cloak lined \
                         with pockets that are never quite where you expect."
                .to_string(),
            traits: ["Elusive", "Sardonic", "Loyal to coin"]
                .map(String::from)
                .to_vec(),
            description: "Carries letters no one else dares to, between people who must \
                          never be seen together. She has read every one of them."
                .to_string(),
            stats: stats([
                ("Charisma", 48.0),
                ("Intellect", 75.0),
                ("Passion", 40.0),
                ("Loyalty", 50.0),
                ("Cunning", 91.0),
                ("Empathy", 35.0),
            ]),
            color_theme: ColorTheme::Violet,
        },
    ]
}

fn build_world_lore() -> Vec<WorldLore> {
    vec![
        WorldLore::new(
            "The Velcross Empire",
            &[
                "Founded in the 1,000th year of the Imperial Era after the Unification Wars \
                 bound seven kingdoms under one crown.",
                "The capital, Aurelith, is built on the ruins of a fallen star; its palace \
                 spires still hum on moonless nights.",
                "In 1726 the aging Emperor has yet to confirm his heir, and every noble \
                 house is choosing a side.",
            ],
        ),
        WorldLore::new(
            "Knights & Nobility",
            &[
                "Titles pass by merit of the blade as often as by blood: any commoner who \
                 wins the Spring Tourney may be knighted.",
                "The Imperial Guard answers only to the Crown, which makes its Commander \
                 the most courted man in the palace.",
                "Duels of honour are forbidden within the capital walls, and fought \
                 constantly just outside them.",
            ],
        ),
        WorldLore::new(
            "Magic & Mana",
            &[
                "Mana wells up along ley lines; the strongest converge beneath Aurelith.",
                "Only one in a thousand is born able to shape it, and all must register \
                 with the Arcane Tower by their sixteenth birthday.",
                "Immortality is possible for the greatest mages, at a price the Tower does \
                 not discuss.",
            ],
        ),
        WorldLore::new(
            "Court Etiquette",
            &[
                "The colour of one's gloves declares one's faction at a ball.",
                "A dance declined is an insult; a dance accepted twice is a proposal.",
                "Letters sealed in black wax are delivered by courier only, never by the \
                 royal post.",
            ],
        ),
    ]
}

/// Report data anomalies that would degrade the presentation.
///
/// Nothing here is fatal; callers decide how loudly to report.
pub fn audit(characters: &[Character]) -> Vec<CatalogueIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for character in characters {
        if !seen.insert(character.id.as_str()) {
            issues.push(CatalogueIssue::DuplicateId(character.id.clone()));
        }

        if character.traits.is_empty() {
            issues.push(CatalogueIssue::NoTraits {
                character: character.name.clone(),
            });
        }

        for stat in &character.stats {
            if stat.value > stat.full_mark {
                issues.push(CatalogueIssue::StatAboveFullMark {
                    character: character.name.clone(),
                    subject: stat.subject.clone(),
                    value: stat.value,
                    full_mark: stat.full_mark,
                });
            }
        }

        let mut marks: Vec<f64> = Vec::new();
        for stat in &character.stats {
            if !marks.contains(&stat.full_mark) {
                marks.push(stat.full_mark);
            }
        }
        if marks.len() > 1 {
            issues.push(CatalogueIssue::MixedFullMarks {
                character: character.name.clone(),
                marks,
            });
        }
    }

    issues
}

#[derive(Serialize)]
struct CatalogueExport<'a> {
    characters: &'a [Character],
    world_lore: &'a [WorldLore],
}

/// Pretty-printed JSON of the whole catalogue.
pub fn export_json(characters: &[Character], world_lore: &[WorldLore]) -> ChronicleResult<String> {
    let export = CatalogueExport {
        characters,
        world_lore,
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_catalogue_is_clean() {
        assert_eq!(audit(characters()), Vec::new());
    }

    #[test]
    fn catalogue_has_content() {
        assert_eq!(characters().len(), 6);
        assert_eq!(world_lore().len(), 4);
        assert!(world_lore().iter().all(|entry| !entry.content.is_empty()));
    }

    #[test]
    fn audit_flags_malformed_records() {
        let broken = vec![
            Character::named("a", "Aria").with_stats(vec![
                PersonalityStat::new("Wit", 12.0, 10.0),
                PersonalityStat::new("Grace", 4.0, 5.0),
            ]),
            Character::named("a", "Aria Again").with_traits(&["bold"]),
        ];
        let issues = audit(&broken);

        assert!(issues.contains(&CatalogueIssue::NoTraits {
            character: "Aria".to_string()
        }));
        assert!(issues.contains(&CatalogueIssue::StatAboveFullMark {
            character: "Aria".to_string(),
            subject: "Wit".to_string(),
            value: 12.0,
            full_mark: 10.0,
        }));
        assert!(issues.contains(&CatalogueIssue::MixedFullMarks {
            character: "Aria".to_string(),
            marks: vec![10.0, 5.0],
        }));
        assert!(issues.contains(&CatalogueIssue::DuplicateId("a".to_string())));
    }

    #[test]
    fn export_contains_every_record() {
        let json = export_json(characters(), world_lore()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["characters"].as_array().unwrap().len(), 6);
        assert_eq!(value["world_lore"].as_array().unwrap().len(), 4);
        assert_eq!(value["characters"][0]["color_theme"], "indigo");
    }
}
