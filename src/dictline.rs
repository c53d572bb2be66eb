//! DICTLINE headword records and the positional shape classifier.
//!
//! A headword line is `stems.. POS attributes.. senses..`. The number of stems
//! depends on the part of speech, so the POS tag moves around and has to be found
//! by probing. [`SHAPE_RULES`] lists the probes in priority order; the first probe
//! whose position holds its tag decides the shape. Several probes can match the
//! same line, so the order of the table is significant.

use crate::error::LineError;
use crate::fields::Fields;
use crate::tally::Categorized;
use serde::{Deserialize, Serialize};

/// Codes shared by every headword, in file order after the category attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    pub age: String,
    pub area: String,
    pub geography: String,
    pub frequency: String,
    pub source: String,
}

impl Provenance {
    fn read(fields: &mut Fields<'_>) -> Result<Self, LineError> {
        Ok(Self {
            age: fields.text("age")?,
            area: fields.text("area")?,
            geography: fields.text("geography")?,
            frequency: fields.text("frequency")?,
            source: fields.text("source")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Noun {
    pub stems: [String; 2],
    pub declension: u8,
    pub declension_variant: u8,
    pub gender: String,
    pub noun_kind: String,
    #[serde(flatten)]
    pub provenance: Provenance,
    pub senses: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronoun {
    pub stems: [String; 2],
    pub declension: u8,
    pub declension_variant: u8,
    pub pronoun_kind: String,
    #[serde(flatten)]
    pub provenance: Provenance,
    pub senses: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verb {
    pub stems: [String; 4],
    pub conjugation: u8,
    pub conjugation_variant: u8,
    pub verb_kind: String,
    #[serde(flatten)]
    pub provenance: Provenance,
    pub senses: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjective {
    pub stems: [String; 4],
    pub declension: u8,
    pub declension_variant: u8,
    pub comparison: String,
    #[serde(flatten)]
    pub provenance: Provenance,
    pub senses: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adverb {
    pub stems: [String; 3],
    pub comparison: String,
    #[serde(flatten)]
    pub provenance: Provenance,
    pub senses: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preposition {
    pub stems: [String; 1],
    pub case: String,
    #[serde(flatten)]
    pub provenance: Provenance,
    pub senses: String,
}

/// Interjections and conjunctions carry nothing beyond the shared codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Particle {
    pub stems: [String; 1],
    #[serde(flatten)]
    pub provenance: Provenance,
    pub senses: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Number {
    pub stems: [String; 4],
    pub declension: u8,
    pub declension_variant: u8,
    pub numeral_sort: String,
    /// The numeral's value (19 for undeviginti), or 0 when it has none.
    pub numeral_value: u32,
    #[serde(flatten)]
    pub provenance: Provenance,
    pub senses: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Packon {
    pub stems: [String; 2],
    pub declension: u8,
    pub declension_variant: u8,
    pub packon_kind: String,
    #[serde(flatten)]
    pub provenance: Provenance,
    pub senses: String,
}

/// One DICTLINE entry, tagged by its POS token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "pos")]
pub enum Headword {
    #[serde(rename = "N")]
    Noun(Noun),
    #[serde(rename = "PRON")]
    Pronoun(Pronoun),
    #[serde(rename = "V")]
    Verb(Verb),
    #[serde(rename = "ADJ")]
    Adjective(Adjective),
    #[serde(rename = "ADV")]
    Adverb(Adverb),
    #[serde(rename = "PREP")]
    Preposition(Preposition),
    #[serde(rename = "INTERJ")]
    Interjection(Particle),
    #[serde(rename = "NUM")]
    Number(Number),
    #[serde(rename = "CONJ")]
    Conjunction(Particle),
    #[serde(rename = "PACK")]
    Packon(Packon),
}

impl Headword {
    pub fn shape(&self) -> Shape {
        match self {
            Headword::Noun(_) => Shape::Noun,
            Headword::Pronoun(_) => Shape::Pronoun,
            Headword::Verb(_) => Shape::Verb,
            Headword::Adjective(_) => Shape::Adjective,
            Headword::Adverb(_) => Shape::Adverb,
            Headword::Preposition(_) => Shape::Preposition,
            Headword::Interjection(_) => Shape::Interjection,
            Headword::Number(_) => Shape::Number,
            Headword::Conjunction(_) => Shape::Conjunction,
            Headword::Packon(_) => Shape::Packon,
        }
    }

    pub fn stems(&self) -> &[String] {
        match self {
            Headword::Noun(w) => &w.stems[..],
            Headword::Pronoun(w) => &w.stems[..],
            Headword::Verb(w) => &w.stems[..],
            Headword::Adjective(w) => &w.stems[..],
            Headword::Adverb(w) => &w.stems[..],
            Headword::Preposition(w) => &w.stems[..],
            Headword::Interjection(w) | Headword::Conjunction(w) => &w.stems[..],
            Headword::Number(w) => &w.stems[..],
            Headword::Packon(w) => &w.stems[..],
        }
    }

    pub fn senses(&self) -> &str {
        match self {
            Headword::Noun(w) => &w.senses,
            Headword::Pronoun(w) => &w.senses,
            Headword::Verb(w) => &w.senses,
            Headword::Adjective(w) => &w.senses,
            Headword::Adverb(w) => &w.senses,
            Headword::Preposition(w) => &w.senses,
            Headword::Interjection(w) | Headword::Conjunction(w) => &w.senses,
            Headword::Number(w) => &w.senses,
            Headword::Packon(w) => &w.senses,
        }
    }
}

impl Categorized for Headword {
    const CATEGORIES: &'static [&'static str] = &[
        "NOUNS",
        "PRONOUNS",
        "VERBS",
        "ADJECTIVES",
        "ADVERBS",
        "PREPOSITIONS",
        "INTERJECTIONS",
        "NUMBERS",
        "CONJUNCTIONS",
        "PACKONS",
    ];
    const SUBJECT: &'static str = "line";

    fn category(&self) -> &'static str {
        self.shape().label()
    }
}

/// Headword part-of-speech categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Noun,
    Pronoun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Interjection,
    Number,
    Conjunction,
    Packon,
}

impl Shape {
    pub fn tag(self) -> &'static str {
        match self {
            Shape::Noun => "N",
            Shape::Pronoun => "PRON",
            Shape::Verb => "V",
            Shape::Adjective => "ADJ",
            Shape::Adverb => "ADV",
            Shape::Preposition => "PREP",
            Shape::Interjection => "INTERJ",
            Shape::Number => "NUM",
            Shape::Conjunction => "CONJ",
            Shape::Packon => "PACK",
        }
    }

    /// Stem slots in the emitted record; missing stems are padded.
    pub fn arity(self) -> usize {
        match self {
            Shape::Noun | Shape::Pronoun | Shape::Packon => 2,
            Shape::Verb | Shape::Adjective | Shape::Number => 4,
            Shape::Adverb => 3,
            Shape::Preposition | Shape::Interjection | Shape::Conjunction => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Shape::Noun => "NOUNS",
            Shape::Pronoun => "PRONOUNS",
            Shape::Verb => "VERBS",
            Shape::Adjective => "ADJECTIVES",
            Shape::Adverb => "ADVERBS",
            Shape::Preposition => "PREPOSITIONS",
            Shape::Interjection => "INTERJECTIONS",
            Shape::Number => "NUMBERS",
            Shape::Conjunction => "CONJUNCTIONS",
            Shape::Packon => "PACKONS",
        }
    }
}

/// "The token at `position` is the POS tag of `shape`". Since stems come first,
/// `position` is also the number of stems the line supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeRule {
    pub position: usize,
    pub shape: Shape,
}

const fn rule(position: usize, shape: Shape) -> ShapeRule {
    ShapeRule { position, shape }
}

/// Probe order. Earlier rules win over later ones that would also match.
pub const SHAPE_RULES: &[ShapeRule] = &[
    rule(1, Shape::Noun),
    rule(2, Shape::Noun),
    rule(2, Shape::Pronoun),
    rule(1, Shape::Verb),
    rule(4, Shape::Verb),
    rule(1, Shape::Adjective),
    rule(2, Shape::Adjective),
    rule(4, Shape::Adjective),
    rule(1, Shape::Adverb),
    rule(3, Shape::Adverb),
    rule(1, Shape::Preposition),
    rule(1, Shape::Interjection),
    rule(4, Shape::Number),
    rule(1, Shape::Number),
    rule(1, Shape::Conjunction),
    rule(2, Shape::Packon),
];

impl ShapeRule {
    pub fn matches(&self, fields: &Fields<'_>) -> bool {
        fields.get(self.position) == Some(self.shape.tag())
    }

    /// Read a record of this shape; `fields` must be at its first token.
    pub fn build(&self, fields: &mut Fields<'_>) -> Result<Headword, LineError> {
        let present = self.position;
        let word = match self.shape {
            Shape::Noun => {
                let stems = fields.stems(present);
                fields.skip("pos")?;
                Headword::Noun(Noun {
                    stems,
                    declension: fields.int("declension")?,
                    declension_variant: fields.int("declension_variant")?,
                    gender: fields.text("gender")?,
                    noun_kind: fields.text("noun_kind")?,
                    provenance: Provenance::read(fields)?,
                    senses: fields.rest(),
                })
            }
            Shape::Pronoun => {
                let stems = fields.stems(present);
                fields.skip("pos")?;
                Headword::Pronoun(Pronoun {
                    stems,
                    declension: fields.int("declension")?,
                    declension_variant: fields.int("declension_variant")?,
                    pronoun_kind: fields.text("pronoun_kind")?,
                    provenance: Provenance::read(fields)?,
                    senses: fields.rest(),
                })
            }
            Shape::Verb => {
                let stems = fields.stems(present);
                fields.skip("pos")?;
                Headword::Verb(Verb {
                    stems,
                    conjugation: fields.int("conjugation")?,
                    conjugation_variant: fields.int("conjugation_variant")?,
                    verb_kind: fields.text("verb_kind")?,
                    provenance: Provenance::read(fields)?,
                    senses: fields.rest(),
                })
            }
            Shape::Adjective => {
                let stems = fields.stems(present);
                fields.skip("pos")?;
                Headword::Adjective(Adjective {
                    stems,
                    declension: fields.int("declension")?,
                    declension_variant: fields.int("declension_variant")?,
                    comparison: fields.text("comparison")?,
                    provenance: Provenance::read(fields)?,
                    senses: fields.rest(),
                })
            }
            Shape::Adverb => {
                let stems = fields.stems(present);
                fields.skip("pos")?;
                Headword::Adverb(Adverb {
                    stems,
                    comparison: fields.text("comparison")?,
                    provenance: Provenance::read(fields)?,
                    senses: fields.rest(),
                })
            }
            Shape::Preposition => {
                let stems = fields.stems(present);
                fields.skip("pos")?;
                Headword::Preposition(Preposition {
                    stems,
                    case: fields.text("case")?,
                    provenance: Provenance::read(fields)?,
                    senses: fields.rest(),
                })
            }
            Shape::Interjection | Shape::Conjunction => {
                let stems = fields.stems(present);
                fields.skip("pos")?;
                let particle = Particle {
                    stems,
                    provenance: Provenance::read(fields)?,
                    senses: fields.rest(),
                };
                if self.shape == Shape::Interjection {
                    Headword::Interjection(particle)
                } else {
                    Headword::Conjunction(particle)
                }
            }
            Shape::Number => {
                let stems = fields.stems(present);
                fields.skip("pos")?;
                Headword::Number(Number {
                    stems,
                    declension: fields.int("declension")?,
                    declension_variant: fields.int("declension_variant")?,
                    numeral_sort: fields.text("numeral_sort")?,
                    numeral_value: fields.int("numeral_value")?,
                    provenance: Provenance::read(fields)?,
                    senses: fields.rest(),
                })
            }
            Shape::Packon => {
                let stems = fields.stems(present);
                fields.skip("pos")?;
                Headword::Packon(Packon {
                    stems,
                    declension: fields.int("declension")?,
                    declension_variant: fields.int("declension_variant")?,
                    packon_kind: fields.text("packon_kind")?,
                    provenance: Provenance::read(fields)?,
                    senses: fields.rest(),
                })
            }
        };
        Ok(word)
    }
}

/// First rule in [`SHAPE_RULES`] that matches the line, if any.
pub fn resolve_shape(fields: &Fields<'_>) -> Option<&'static ShapeRule> {
    SHAPE_RULES.iter().find(|rule| rule.matches(fields))
}

/// Classify one normalized DICTLINE line.
pub fn classify_headword(line: &str) -> Result<Headword, LineError> {
    let mut fields = Fields::new(line);
    let rule = resolve_shape(&fields).ok_or(LineError::NoShape)?;
    rule.build(&mut fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_dictline;
    use crate::NO_STEM;

    fn classify(raw: &str) -> Result<Headword, LineError> {
        classify_headword(&normalize_dictline(raw))
    }

    fn shape_of(raw: &str) -> Option<ShapeRule> {
        let line = normalize_dictline(raw);
        resolve_shape(&Fields::new(&line)).copied()
    }

    // ─────────────────────────────────────────────────────────────
    // One case per rule
    // ─────────────────────────────────────────────────────────────

    #[test]
    fn one_stem_noun() {
        let word = classify("A                  N      9 8 M N    X X X E O abb. Aulus (Roman praenomen);").unwrap();
        let Headword::Noun(noun) = &word else {
            panic!("expected noun, got {:?}", word);
        };
        assert_eq!(noun.stems, ["A", NO_STEM]);
        assert_eq!(noun.declension, 9);
        assert_eq!(noun.declension_variant, 8);
        assert_eq!(noun.gender, "M");
        assert_eq!(noun.noun_kind, "N");
        assert_eq!(noun.provenance.frequency, "E");
        assert_eq!(noun.senses, "abb. Aulus (Roman praenomen);");
    }

    #[test]
    fn abbreviation_line_probes_as_one_stem_noun() {
        let rule = shape_of("ab         N      X X X X X X abbreviation").unwrap();
        assert_eq!(rule, ShapeRule { position: 1, shape: Shape::Noun });

        let line = normalize_dictline("ab         N      X X X X X X abbreviation");
        let mut fields = Fields::new(&line);
        let stems: [String; 2] = fields.stems(rule.position);
        assert_eq!(stems, ["ab", NO_STEM]);
        assert_eq!(fields.get(fields.position()), Some("N"));
    }

    #[test]
    fn two_stem_noun() {
        let word = classify("abac               abac               N      2 2 M T    X X X E O small table for cruets/offerings; credence").unwrap();
        let Headword::Noun(noun) = word else {
            panic!("expected noun");
        };
        assert_eq!(noun.stems, ["abac", "abac"]);
        assert_eq!(noun.declension_variant, 2);
        assert_eq!(noun.senses, "small table for cruets/offerings; credence");
    }

    #[test]
    fn pronoun() {
        let word = classify("qu                 cu                 PRON   1 0 REL       X X X A O who; that; which").unwrap();
        let Headword::Pronoun(pron) = word else {
            panic!("expected pronoun");
        };
        assert_eq!(pron.stems, ["qu", "cu"]);
        assert_eq!(pron.declension, 1);
        assert_eq!(pron.declension_variant, 0);
        assert_eq!(pron.pronoun_kind, "REL");
    }

    #[test]
    fn one_and_four_stem_verbs() {
        let word = classify("abba V 5 1 INTRANS X E Q E E father").unwrap();
        assert_eq!(word.shape(), Shape::Verb);
        assert_eq!(word.stems(), ["abba", NO_STEM, NO_STEM, NO_STEM]);

        let word = classify("am                 am                 amav               amat               V      1 1 TRANS      X X X A O love, like; fall in love with;").unwrap();
        let Headword::Verb(verb) = word else {
            panic!("expected verb");
        };
        assert_eq!(verb.stems, ["am", "am", "amav", "amat"]);
        assert_eq!(verb.conjugation, 1);
        assert_eq!(verb.verb_kind, "TRANS");
        assert_eq!(verb.senses, "love, like; fall in love with;");
    }

    #[test]
    fn adjectives_of_every_stem_count() {
        let one = classify("Aegyptiac ADJ 1 1 POS X X Q E O Egyptian").unwrap();
        assert_eq!(one.stems(), ["Aegyptiac", NO_STEM, NO_STEM, NO_STEM]);

        let two = classify("ingen ingent ADJ 3 1 POS X X X A O huge, vast").unwrap();
        assert_eq!(two.stems(), ["ingen", "ingent", NO_STEM, NO_STEM]);

        let four = classify("bon bon mel opt ADJ 1 1 X X X X A O good, honest").unwrap();
        let Headword::Adjective(adj) = four else {
            panic!("expected adjective");
        };
        assert_eq!(adj.stems, ["bon", "bon", "mel", "opt"]);
        assert_eq!(adj.comparison, "X");
        assert_eq!(adj.senses, "good, honest");
    }

    #[test]
    fn adverbs() {
        let one = classify("abhinc ADV POS X X X B O ago; since").unwrap();
        assert_eq!(one.stems(), ["abhinc", NO_STEM, NO_STEM]);

        let three = classify("aequ aequius aequissime ADV X X X X B O equally").unwrap();
        let Headword::Adverb(adv) = three else {
            panic!("expected adverb");
        };
        assert_eq!(adv.stems, ["aequ", "aequius", "aequissime"]);
        assert_eq!(adv.comparison, "X");
    }

    #[test]
    fn preposition_interjection_conjunction() {
        let Headword::Preposition(prep) = classify("ab PREP ABL X X X A O by (agent), from").unwrap() else {
            panic!("expected preposition");
        };
        assert_eq!(prep.stems, ["ab"]);
        assert_eq!(prep.case, "ABL");

        let interj = classify("heu INTERJ X X X A O alas!").unwrap();
        assert!(matches!(interj, Headword::Interjection(_)));
        assert_eq!(interj.senses(), "alas!");

        let conj = classify("et CONJ X X X A O and, and even; also, even;").unwrap();
        assert!(matches!(conj, Headword::Conjunction(_)));
        assert_eq!(conj.stems(), ["et"]);
    }

    #[test]
    fn numbers() {
        let Headword::Number(num) = classify("un un prim singul NUM 1 1 CARD 1 X X X A O one").unwrap() else {
            panic!("expected number");
        };
        assert_eq!(num.stems, ["un", "un", "prim", "singul"]);
        assert_eq!(num.numeral_sort, "CARD");
        assert_eq!(num.numeral_value, 1);

        let Headword::Number(num) = classify("undeviginti NUM 2 0 CARD 19 X X X C O nineteen").unwrap() else {
            panic!("expected number");
        };
        assert_eq!(num.stems, ["undeviginti", NO_STEM, NO_STEM, NO_STEM]);
        assert_eq!(num.numeral_value, 19);
    }

    #[test]
    fn packon_is_classified_as_packon() {
        // Guards against the packon branch emitting some other variant.
        let word = classify("qu cu PACK 1 0 INDEF X X X A O (w/-piam) anyone").unwrap();
        let Headword::Packon(pack) = &word else {
            panic!("expected packon, got {:?}", word);
        };
        assert_eq!(pack.stems, ["qu", "cu"]);
        assert_eq!(pack.packon_kind, "INDEF");
        assert_eq!(word.category(), "PACKONS");
    }

    // ─────────────────────────────────────────────────────────────
    // Rule ordering
    // ─────────────────────────────────────────────────────────────

    #[test]
    fn rule_table_order_is_pinned() {
        let order: Vec<(usize, &str)> = SHAPE_RULES
            .iter()
            .map(|r| (r.position, r.shape.tag()))
            .collect();
        assert_eq!(
            order,
            vec![
                (1, "N"),
                (2, "N"),
                (2, "PRON"),
                (1, "V"),
                (4, "V"),
                (1, "ADJ"),
                (2, "ADJ"),
                (4, "ADJ"),
                (1, "ADV"),
                (3, "ADV"),
                (1, "PREP"),
                (1, "INTERJ"),
                (4, "NUM"),
                (1, "NUM"),
                (1, "CONJ"),
                (2, "PACK"),
            ]
        );
    }

    #[test]
    fn one_stem_noun_beats_two_stem_noun() {
        let rule = shape_of("x N N 1 1 M T X X X A O n").unwrap();
        assert_eq!(rule.position, 1);
        assert_eq!(rule.shape, Shape::Noun);
    }

    #[test]
    fn two_stem_noun_beats_one_stem_adjective() {
        let rule = shape_of("x ADJ N 1 1 M T X X X A O n").unwrap();
        assert_eq!(rule, ShapeRule { position: 2, shape: Shape::Noun });
    }

    #[test]
    fn four_stem_number_beats_one_stem_number() {
        let rule = shape_of("x NUM y z NUM 1 1 CARD 3 X X X A O three").unwrap();
        assert_eq!(rule, ShapeRule { position: 4, shape: Shape::Number });
    }

    #[test]
    fn one_stem_verb_beats_four_stem_verb() {
        let rule = shape_of("x V y z V 1 1 TRANS X X X A O do").unwrap();
        assert_eq!(rule, ShapeRule { position: 1, shape: Shape::Verb });
    }

    // ─────────────────────────────────────────────────────────────
    // Arity and sentinels
    // ─────────────────────────────────────────────────────────────

    #[test]
    fn stem_count_always_equals_arity() {
        let lines = [
            "A N 9 8 M N X X X E O a",
            "abac abac N 2 2 M T X X X E O a",
            "qu cu PRON 1 0 REL X X X A O a",
            "abba V 5 1 INTRANS X E Q E E a",
            "am am amav amat V 1 1 TRANS X X X A O a",
            "x ADJ 1 1 POS X X X A O a",
            "x y ADJ 3 1 POS X X X A O a",
            "a b c d ADJ 1 1 X X X X A O a",
            "x ADV POS X X X A O a",
            "a b c ADV X X X X A O a",
            "x PREP ABL X X X A O a",
            "x INTERJ X X X A O a",
            "a b c d NUM 1 1 CARD 1 X X X A O a",
            "x NUM 2 0 CARD 19 X X X A O a",
            "x CONJ X X X A O a",
            "x y PACK 1 0 INDEF X X X A O a",
        ];
        for line in lines {
            let word = classify(line).unwrap();
            assert_eq!(word.stems().len(), word.shape().arity(), "{}", line);
        }
    }

    #[test]
    fn tab_separated_absent_stem_becomes_sentinel() {
        let word = classify("zzz\tamic N 2 1 M T X X X A O friend").unwrap();
        assert_eq!(word.stems(), [NO_STEM, "amic"]);
    }

    #[test]
    fn absent_stems_become_sentinels() {
        let word = classify("zzz amic N 2 1 M T X X X A O friend").unwrap();
        assert_eq!(word.stems(), [NO_STEM, "amic"]);
    }

    // ─────────────────────────────────────────────────────────────
    // Senses and malformed lines
    // ─────────────────────────────────────────────────────────────

    #[test]
    fn sense_whitespace_collapses_on_rejoin() {
        let word = classify("heu INTERJ X X X A O alas!    (grief,   pain);  oh!").unwrap();
        assert_eq!(word.senses(), "alas! (grief, pain); oh!");
    }

    #[test]
    fn empty_sense_is_allowed() {
        let word = classify("heu INTERJ X X X A O").unwrap();
        assert_eq!(word.senses(), "");
    }

    #[test]
    fn non_numeric_declension_is_malformed() {
        assert_eq!(
            classify("abac abac N X 2 M T X X X E O table"),
            Err(LineError::NotANumber {
                field: "declension",
                value: "X".to_string()
            })
        );
    }

    #[test]
    fn non_numeric_numeral_value_is_malformed() {
        assert!(matches!(
            classify("x NUM 2 0 CARD many X X X A O lots"),
            Err(LineError::NotANumber { field: "numeral_value", .. })
        ));
    }

    #[test]
    fn truncated_line_is_malformed() {
        assert_eq!(
            classify("heu INTERJ X X"),
            Err(LineError::MissingField {
                field: "geography",
                index: 4
            })
        );
    }

    #[test]
    fn unmatched_line_has_no_shape() {
        assert_eq!(classify("foo bar baz"), Err(LineError::NoShape));
        assert_eq!(classify("x"), Err(LineError::NoShape));
    }

    // ─────────────────────────────────────────────────────────────
    // Serialization
    // ─────────────────────────────────────────────────────────────

    #[test]
    fn serializes_flat_with_pos_tag() {
        let word = classify("ab PREP ABL X X X A O by, from").unwrap();
        let json = serde_json::to_value(&word).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "pos": "PREP",
                "stems": ["ab"],
                "case": "ABL",
                "age": "X",
                "area": "X",
                "geography": "X",
                "frequency": "A",
                "source": "O",
                "senses": "by, from"
            })
        );
    }

    #[test]
    fn json_reads_back_into_the_same_record() {
        let lines = [
            "zzz amic N 2 1 M T X X X A O friend",
            "un un prim singul NUM 1 1 CARD 1 X X X A O one",
            "et CONJ X X X A O and",
            "qu cu PACK 1 0 INDEF X X X A O anyone",
        ];
        for line in lines {
            let word = classify(line).unwrap();
            let json = serde_json::to_string(&word).unwrap();
            let back: Headword = serde_json::from_str(&json).unwrap();
            assert_eq!(back, word, "{}", line);
        }
    }
}
