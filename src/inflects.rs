//! INFLECTS ending records.
//!
//! Unlike DICTLINE, every inflection line starts with its tag, so classification is
//! a dispatch on the first token followed by a fixed-layout read.

use crate::error::LineError;
use crate::fields::Fields;
use crate::tally::Categorized;
use serde::{Deserialize, Serialize};

/// Comment lines in INFLECTS start with this.
pub const COMMENT_MARKER: &str = "--";

/// The trailing block every ending shares: which stem it attaches to, how many
/// characters it matches, the ending itself and its codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndingForm {
    pub stem: u8,
    pub characters: u8,
    pub ending: String,
    pub age: String,
    pub frequency: String,
}

impl EndingForm {
    fn read(fields: &mut Fields<'_>) -> Result<Self, LineError> {
        Ok(Self {
            stem: fields.int("stem")?,
            characters: fields.int("characters")?,
            ending: fields.text("ending")?,
            age: fields.text("age")?,
            frequency: fields.text("frequency")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdverbEnding {
    pub comparison: String,
    #[serde(flatten)]
    pub form: EndingForm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepositionEnding {
    pub case: String,
    #[serde(flatten)]
    pub form: EndingForm,
}

/// Conjunctions and interjections: nothing but the shared block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BareEnding {
    #[serde(flatten)]
    pub form: EndingForm,
}

/// Nouns and pronouns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NominalEnding {
    pub declension: u8,
    pub declension_variant: u8,
    pub case: String,
    pub number: String,
    pub gender: String,
    #[serde(flatten)]
    pub form: EndingForm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjectiveEnding {
    pub declension: u8,
    pub declension_variant: u8,
    pub case: String,
    pub number: String,
    pub gender: String,
    pub comparison: String,
    #[serde(flatten)]
    pub form: EndingForm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberEnding {
    pub declension: u8,
    pub declension_variant: u8,
    pub case: String,
    pub number: String,
    pub gender: String,
    pub numeral_sort: String,
    #[serde(flatten)]
    pub form: EndingForm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbEnding {
    pub conjugation: u8,
    pub conjugation_variant: u8,
    pub tense: String,
    pub voice: String,
    pub mood: String,
    pub person: String,
    pub number: String,
    #[serde(flatten)]
    pub form: EndingForm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipleEnding {
    pub conjugation: u8,
    pub conjugation_variant: u8,
    pub case: String,
    pub number: String,
    pub gender: String,
    pub tense: String,
    pub voice: String,
    pub mood: String,
    #[serde(flatten)]
    pub form: EndingForm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupineEnding {
    pub conjugation: u8,
    pub conjugation_variant: u8,
    pub case: String,
    pub number: String,
    pub gender: String,
    #[serde(flatten)]
    pub form: EndingForm,
}

/// One INFLECTS entry, tagged by its leading token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "pos")]
pub enum Ending {
    #[serde(rename = "ADV")]
    Adverb(AdverbEnding),
    #[serde(rename = "PREP")]
    Preposition(PrepositionEnding),
    #[serde(rename = "CONJ")]
    Conjunction(BareEnding),
    #[serde(rename = "INTERJ")]
    Interjection(BareEnding),
    #[serde(rename = "N")]
    Noun(NominalEnding),
    #[serde(rename = "ADJ")]
    Adjective(AdjectiveEnding),
    #[serde(rename = "V")]
    Verb(VerbEnding),
    #[serde(rename = "VPAR")]
    Participle(ParticipleEnding),
    #[serde(rename = "SUPINE")]
    Supine(SupineEnding),
    #[serde(rename = "PRON")]
    Pronoun(NominalEnding),
    #[serde(rename = "NUM")]
    Number(NumberEnding),
}

impl Ending {
    pub fn form(&self) -> &EndingForm {
        match self {
            Ending::Adverb(e) => &e.form,
            Ending::Preposition(e) => &e.form,
            Ending::Conjunction(e) | Ending::Interjection(e) => &e.form,
            Ending::Noun(e) | Ending::Pronoun(e) => &e.form,
            Ending::Adjective(e) => &e.form,
            Ending::Verb(e) => &e.form,
            Ending::Participle(e) => &e.form,
            Ending::Supine(e) => &e.form,
            Ending::Number(e) => &e.form,
        }
    }
}

impl Categorized for Ending {
    const CATEGORIES: &'static [&'static str] = &[
        "NOUNS",
        "ADJECTIVES",
        "ADVERBS",
        "PREPOSITIONS",
        "INTERJECTIONS",
        "PRONOUNS",
        "VERBS",
        "VERB PARTICIPLES",
        "SUPINES",
        "NUMBERS",
        "CONJUNCTIONS",
    ];
    const SUBJECT: &'static str = "inflection";

    fn category(&self) -> &'static str {
        match self {
            Ending::Noun(_) => "NOUNS",
            Ending::Adjective(_) => "ADJECTIVES",
            Ending::Adverb(_) => "ADVERBS",
            Ending::Preposition(_) => "PREPOSITIONS",
            Ending::Interjection(_) => "INTERJECTIONS",
            Ending::Pronoun(_) => "PRONOUNS",
            Ending::Verb(_) => "VERBS",
            Ending::Participle(_) => "VERB PARTICIPLES",
            Ending::Supine(_) => "SUPINES",
            Ending::Number(_) => "NUMBERS",
            Ending::Conjunction(_) => "CONJUNCTIONS",
        }
    }
}

fn read_nominal(fields: &mut Fields<'_>) -> Result<NominalEnding, LineError> {
    Ok(NominalEnding {
        declension: fields.int("declension")?,
        declension_variant: fields.int("declension_variant")?,
        case: fields.text("case")?,
        number: fields.text("number")?,
        gender: fields.text("gender")?,
        form: EndingForm::read(fields)?,
    })
}

/// Classify one normalized INFLECTS line.
///
/// Returns `Ok(None)` for comments and blank lines, which are neither records nor
/// errors. Tokens past the end of a layout are ignored.
pub fn classify_ending(line: &str) -> Result<Option<Ending>, LineError> {
    let mut fields = Fields::new(line);
    let tag = match fields.get(0) {
        None => return Ok(None),
        Some(tag) if tag.starts_with(COMMENT_MARKER) => return Ok(None),
        Some(tag) => tag,
    };
    fields.skip("pos")?;

    let ending = match tag {
        "ADV" => Ending::Adverb(AdverbEnding {
            comparison: fields.text("comparison")?,
            form: EndingForm::read(&mut fields)?,
        }),
        "PREP" => Ending::Preposition(PrepositionEnding {
            case: fields.text("case")?,
            form: EndingForm::read(&mut fields)?,
        }),
        "CONJ" => Ending::Conjunction(BareEnding {
            form: EndingForm::read(&mut fields)?,
        }),
        "INTERJ" => Ending::Interjection(BareEnding {
            form: EndingForm::read(&mut fields)?,
        }),
        "N" => Ending::Noun(read_nominal(&mut fields)?),
        "PRON" => Ending::Pronoun(read_nominal(&mut fields)?),
        "ADJ" => Ending::Adjective(AdjectiveEnding {
            declension: fields.int("declension")?,
            declension_variant: fields.int("declension_variant")?,
            case: fields.text("case")?,
            number: fields.text("number")?,
            gender: fields.text("gender")?,
            comparison: fields.text("comparison")?,
            form: EndingForm::read(&mut fields)?,
        }),
        "NUM" => Ending::Number(NumberEnding {
            declension: fields.int("declension")?,
            declension_variant: fields.int("declension_variant")?,
            case: fields.text("case")?,
            number: fields.text("number")?,
            gender: fields.text("gender")?,
            numeral_sort: fields.text("numeral_sort")?,
            form: EndingForm::read(&mut fields)?,
        }),
        "V" => Ending::Verb(VerbEnding {
            conjugation: fields.int("conjugation")?,
            conjugation_variant: fields.int("conjugation_variant")?,
            tense: fields.text("tense")?,
            voice: fields.text("voice")?,
            mood: fields.text("mood")?,
            person: fields.text("person")?,
            number: fields.text("number")?,
            form: EndingForm::read(&mut fields)?,
        }),
        "VPAR" => Ending::Participle(ParticipleEnding {
            conjugation: fields.int("conjugation")?,
            conjugation_variant: fields.int("conjugation_variant")?,
            case: fields.text("case")?,
            number: fields.text("number")?,
            gender: fields.text("gender")?,
            tense: fields.text("tense")?,
            voice: fields.text("voice")?,
            mood: fields.text("mood")?,
            form: EndingForm::read(&mut fields)?,
        }),
        "SUPINE" => Ending::Supine(SupineEnding {
            conjugation: fields.int("conjugation")?,
            conjugation_variant: fields.int("conjugation_variant")?,
            case: fields.text("case")?,
            number: fields.text("number")?,
            gender: fields.text("gender")?,
            form: EndingForm::read(&mut fields)?,
        }),
        other => return Err(LineError::UnknownTag(other.to_string())),
    };
    Ok(Some(ending))
}
