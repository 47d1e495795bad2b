pub mod conll;

use core::fmt;

use crate::core::SvmineError;

// Universal POS tags as emitted by spaCy/UD-style taggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UPos {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
}

impl From<&str> for UPos {
    fn from(tag: &str) -> Self {
        match tag {
            "ADJ" => UPos::Adj,
            "ADP" => UPos::Adp,
            "ADV" => UPos::Adv,
            "AUX" => UPos::Aux,
            "CCONJ" | "CONJ" => UPos::Cconj,
            "DET" => UPos::Det,
            "INTJ" => UPos::Intj,
            "NOUN" => UPos::Noun,
            "NUM" => UPos::Num,
            "PART" => UPos::Part,
            "PRON" => UPos::Pron,
            "PROPN" => UPos::Propn,
            "PUNCT" => UPos::Punct,
            "SCONJ" => UPos::Sconj,
            "SYM" => UPos::Sym,
            "VERB" => UPos::Verb,
            _ => UPos::X,
        }
    }
}

impl fmt::Display for UPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Dependency relation tag. The set is open-ended across tagger versions, so
/// unrecognized labels are preserved verbatim rather than collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DepTag {
    Nsubj,
    Obj,
    Dobj,
    Iobj,
    Pobj,
    Advmod,
    Root,
    Other(String),
}

impl From<&str> for DepTag {
    fn from(label: &str) -> Self {
        match label {
            "nsubj" => DepTag::Nsubj,
            "obj" => DepTag::Obj,
            "dobj" => DepTag::Dobj,
            "iobj" => DepTag::Iobj,
            "pobj" => DepTag::Pobj,
            "advmod" => DepTag::Advmod,
            "ROOT" | "root" => DepTag::Root,
            other => DepTag::Other(other.to_string()),
        }
    }
}

impl DepTag {
    pub fn is_nominal_subject(&self) -> bool {
        matches!(self, DepTag::Nsubj)
    }

    pub fn is_adverbial_modifier(&self) -> bool {
        matches!(self, DepTag::Advmod)
    }

    /// The direct/indirect object family: any relation whose label contains
    /// "obj" (dobj, iobj, pobj, obj, and subtype labels like "obj:agent").
    pub fn in_object_family(&self) -> bool {
        match self {
            DepTag::Obj | DepTag::Dobj | DepTag::Iobj | DepTag::Pobj => true,
            DepTag::Other(label) => label.contains("obj"),
            _ => false,
        }
    }
}

/// One token of a dependency-tagged sentence, in linear order. Read-only to
/// the pipeline; produced by the external tagger.
#[derive(Debug, Clone)]
pub struct TaggedToken {
    pub text: String,
    pub pos: UPos,
    pub dep: DepTag,
    pub lemma: String,
}

impl TaggedToken {
    pub fn new(text: &str, pos: &str, dep: &str, lemma: &str) -> Self {
        TaggedToken {
            text: text.to_string(),
            pos: pos.into(),
            dep: dep.into(),
            lemma: lemma.to_string(),
        }
    }
}

/// The external dependency tagger, injected into pipeline construction.
/// Loaded once and reused per call; tagging quality is a fixed upstream
/// constraint that this crate does not configure or train.
pub trait Tagger {
    fn tag(&self, sentence: &str) -> Result<Vec<TaggedToken>, SvmineError>;
}
