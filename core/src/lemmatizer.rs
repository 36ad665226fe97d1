//! Dictionary-free English lemmatization.
//!
//! Works like WordNet's morphy: irregular forms come from exception tables,
//! regular forms are reduced by detaching inflectional suffixes. Without a
//! full lexicon to confirm candidates, detachment is followed by spelling
//! repairs (undoubling, silent `e`) that recover the usual base form.

use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

/// The four word classes a lemmatizer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoarsePos {
    Adjective,
    Verb,
    Noun,
    Adverb,
}

impl CoarsePos {
    /// Map a Penn Treebank tag onto a coarse class. Tags that are not
    /// adjectives, verbs, nouns or adverbs fall back to `Noun`.
    pub fn from_treebank(tag: &str) -> Self {
        match tag.chars().next() {
            Some('J') => CoarsePos::Adjective,
            Some('V') => CoarsePos::Verb,
            Some('N') => CoarsePos::Noun,
            Some('R') => CoarsePos::Adverb,
            _ => CoarsePos::Noun,
        }
    }

    /// WordNet's one-letter name for the class.
    pub fn as_char(self) -> char {
        match self {
            CoarsePos::Adjective => 'a',
            CoarsePos::Verb => 'v',
            CoarsePos::Noun => 'n',
            CoarsePos::Adverb => 'r',
        }
    }
}

/// Reduces a word of a known class to its dictionary form.
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, word: &str, pos: CoarsePos) -> String;
}

fn table(pairs: &[(&'static str, &'static str)]) -> HashMap<&'static str, &'static str> {
    pairs.iter().copied().collect()
}

lazy_static! {
    static ref VERB_EXCEPTIONS: HashMap<&'static str, &'static str> = table(&[
        ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"), ("been", "be"), ("being", "be"),
        ("has", "have"), ("had", "have"), ("having", "have"),
        ("does", "do"), ("did", "do"), ("done", "do"), ("doing", "do"),
        ("goes", "go"), ("went", "go"), ("gone", "go"), ("going", "go"),
        ("made", "make"), ("came", "come"), ("took", "take"), ("taken", "take"), ("gave", "give"), ("given", "give"),
        ("saw", "see"), ("seen", "see"), ("knew", "know"), ("known", "know"), ("got", "get"), ("gotten", "get"),
        ("said", "say"), ("told", "tell"), ("thought", "think"), ("found", "find"), ("left", "leave"), ("felt", "feel"),
        ("brought", "bring"), ("began", "begin"), ("begun", "begin"), ("kept", "keep"), ("held", "hold"),
        ("wrote", "write"), ("written", "write"), ("stood", "stand"), ("heard", "hear"), ("meant", "mean"),
        ("met", "meet"), ("ran", "run"), ("paid", "pay"), ("sat", "sit"), ("spoke", "speak"), ("spoken", "speak"),
        ("lay", "lie"), ("lain", "lie"), ("led", "lead"), ("grew", "grow"), ("grown", "grow"), ("lost", "lose"),
        ("fell", "fall"), ("fallen", "fall"), ("sent", "send"), ("built", "build"), ("understood", "understand"),
        ("drew", "draw"), ("drawn", "draw"), ("broke", "break"), ("broken", "break"), ("spent", "spend"),
        ("rose", "rise"), ("risen", "rise"), ("drove", "drive"), ("driven", "drive"), ("bought", "buy"),
        ("wore", "wear"), ("worn", "wear"), ("chose", "choose"), ("chosen", "choose"), ("sought", "seek"),
        ("threw", "throw"), ("thrown", "throw"), ("caught", "catch"), ("dealt", "deal"), ("forgot", "forget"),
        ("forgotten", "forget"), ("sold", "sell"), ("fought", "fight"), ("taught", "teach"), ("ate", "eat"),
        ("eaten", "eat"), ("sang", "sing"), ("sung", "sing"), ("swam", "swim"), ("swum", "swim"), ("drank", "drink"),
        ("drunk", "drink"), ("flew", "fly"), ("flown", "fly"), ("slept", "sleep"), ("hid", "hide"), ("hidden", "hide"),
        ("shook", "shake"), ("shaken", "shake"), ("stole", "steal"), ("stolen", "steal"), ("rode", "ride"),
        ("ridden", "ride"), ("bit", "bite"), ("bitten", "bite"), ("fed", "feed"), ("fled", "flee"), ("shot", "shoot"),
        ("hung", "hang"), ("dug", "dig"), ("stuck", "stick"), ("struck", "strike"), ("bound", "bind"), ("woke", "wake"),
        ("woken", "wake"), ("froze", "freeze"), ("frozen", "freeze"), ("lent", "lend"), ("bent", "bend"), ("lit", "light"),
        ("slid", "slide"), ("spun", "spin"), ("swept", "sweep"), ("wept", "weep"), ("crept", "creep"), ("knelt", "kneel"),
        ("dreamt", "dream"), ("swung", "swing"), ("tore", "tear"), ("torn", "tear"), ("bore", "bear"), ("borne", "bear"),
        ("swore", "swear"), ("sworn", "swear"), ("bred", "breed"), ("breed", "breed"), ("shed", "shed"),
        ("dying", "die"), ("lying", "lie"), ("tying", "tie"), ("won", "win"), ("shone", "shine"), ("wound", "wind"),
    ]);

    static ref NOUN_EXCEPTIONS: HashMap<&'static str, &'static str> = table(&[
        ("children", "child"), ("men", "man"), ("women", "woman"), ("feet", "foot"), ("teeth", "tooth"),
        ("geese", "goose"), ("mice", "mouse"), ("lice", "louse"), ("oxen", "ox"), ("criteria", "criterion"),
        ("phenomena", "phenomenon"), ("analyses", "analysis"), ("crises", "crisis"), ("theses", "thesis"),
        ("indices", "index"), ("matrices", "matrix"), ("wolves", "wolf"), ("lives", "life"), ("knives", "knife"),
        ("wives", "wife"), ("leaves", "leaf"), ("halves", "half"), ("shelves", "shelf"), ("selves", "self"),
        ("thieves", "thief"), ("loaves", "loaf"), ("calves", "calf"), ("movies", "movie"), ("cookies", "cookie"),
        ("calories", "calorie"), ("zombies", "zombie"), ("rookies", "rookie"),
    ]);

    static ref ADJECTIVE_EXCEPTIONS: HashMap<&'static str, &'static str> = table(&[
        ("better", "good"), ("best", "good"), ("worse", "bad"), ("worst", "bad"), ("farther", "far"),
        ("farthest", "far"), ("further", "far"), ("furthest", "far"), ("elder", "old"), ("eldest", "old"),
        ("honest", "honest"), ("modest", "modest"), ("earnest", "earnest"), ("dishonest", "dishonest"),
    ]);

    static ref ADVERB_EXCEPTIONS: HashMap<&'static str, &'static str> = table(&[
        ("best", "well"), ("better", "well"), ("farther", "far"), ("further", "far"), ("harder", "hard"),
        ("hardest", "hard"), ("faster", "fast"), ("fastest", "fast"), ("sooner", "soon"), ("soonest", "soon"),
    ]);

    /// Words whose inflected-looking form is already the lemma: function
    /// words, pluralia tantum and `-ics` fields.
    static ref INVARIANT: HashSet<&'static str> = {
        let words: &[&str] = &[
            "as", "us", "this", "his", "its", "has", "was", "is", "does", "yes", "thus", "always", "perhaps",
            "sometimes", "besides", "towards", "afterwards", "whereas", "ours", "yours", "hers", "theirs",
            "ourselves", "yourselves", "themselves", "across", "unless", "less", "during", "nothing",
            "something", "anything", "everything", "thanks", "news", "means", "species", "series", "scissors",
            "trousers", "pants", "clothes", "goods", "riches", "savings", "surroundings", "premises",
            "headquarters", "barracks", "whereabouts", "congratulations", "belongings", "outskirts", "remains",
            "politics", "physics", "mathematics", "economics", "ethics", "athletics", "electronics", "linguistics",
        ];
        words.iter().copied().collect()
    };
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn has_vowel(s: &str) -> bool {
    s.chars().any(|c| is_vowel(c) || c == 'y')
}

/// Number of vowel runs, with `y` counting as a vowel after the first letter.
fn vowel_groups(chars: &[char]) -> usize {
    let mut groups = 0;
    let mut in_group = false;
    for (i, &c) in chars.iter().enumerate() {
        let vowel = is_vowel(c) || (c == 'y' && i > 0);
        if vowel && !in_group {
            groups += 1;
        }
        in_group = vowel;
    }
    groups
}

/// Repair the spelling of a stem left behind by `-ing`, `-ed`, `-er` or
/// `-est`: undo consonant doubling or put back a silent `e`.
fn restore_stem(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    if n <= 2 {
        return format!("{stem}e");
    }
    let last = chars[n - 1];
    let prev = chars[n - 2];
    let before = chars[n - 3];

    if last == prev && !is_vowel(last) {
        if matches!(last, 'l' | 's' | 'f' | 'z') || (n == 3 && is_vowel(chars[0])) {
            return stem.to_string();
        }
        return chars[..n - 1].iter().collect();
    }

    let silent_e = (last == 'l' && matches!(prev, 'b' | 'c' | 'd' | 'f' | 'g' | 'k' | 'p' | 't' | 'z'))
        || matches!(last, 'v' | 'c')
        || (last == 'z' && prev == 'i')
        || (last == 'g' && matches!(prev, 'r' | 'd'))
        || (last == 's' && is_vowel(prev) && is_vowel(before))
        || (last == 'r' && matches!(prev, 'u' | 'i') && !is_vowel(before))
        || (last == 't' && prev == 'a' && !is_vowel(before) && n >= 5)
        || (vowel_groups(&chars) == 1
            && !is_vowel(last)
            && !matches!(last, 'w' | 'x' | 'y')
            && is_vowel(prev)
            && !is_vowel(before));

    if silent_e {
        format!("{stem}e")
    } else {
        stem.to_string()
    }
}

fn noun_base(word: &str) -> Option<String> {
    let len = word.len();
    if len > 4 && word.ends_with("ies") {
        return Some(format!("{}y", &word[..len - 3]));
    }
    for suffix in ["ches", "shes", "sses", "xes", "zes"] {
        if word.ends_with(suffix) {
            return Some(word[..len - 2].to_string());
        }
    }
    if len >= 6 && word.ends_with("men") && !matches!(word, "specimen" | "abdomen" | "regimen") {
        return Some(format!("{}man", &word[..len - 3]));
    }
    if len >= 4 && word.ends_with('s') && !["ss", "us", "is"].iter().any(|s| word.ends_with(s)) {
        return Some(word[..len - 1].to_string());
    }
    None
}

fn verb_base(word: &str) -> Option<String> {
    let len = word.len();
    if len > 4 && word.ends_with("ies") {
        return Some(format!("{}y", &word[..len - 3]));
    }
    if len > 4 && word.ends_with("ied") {
        return Some(format!("{}y", &word[..len - 3]));
    }
    if word.ends_with("es") && len >= 4 {
        if ["sses", "shes", "ches", "xes", "zzes", "oes"].iter().any(|s| word.ends_with(s)) {
            return Some(word[..len - 2].to_string());
        }
        return Some(word[..len - 1].to_string());
    }
    if len >= 3 && word.ends_with('s') && !word.ends_with("ss") {
        return Some(word[..len - 1].to_string());
    }
    if len >= 4 && word.ends_with("ed") {
        if word.ends_with("eed") {
            if word.ends_with("reed") || word.ends_with("teed") {
                return Some(word[..len - 1].to_string());
            }
            return None;
        }
        let stem = &word[..len - 2];
        return has_vowel(stem).then(|| restore_stem(stem));
    }
    if len >= 5 && word.ends_with("ing") {
        let stem = &word[..len - 3];
        return has_vowel(stem).then(|| restore_stem(stem));
    }
    None
}

fn adjective_base(word: &str) -> Option<String> {
    let len = word.len();
    if len > 5 && word.ends_with("iest") {
        return Some(format!("{}y", &word[..len - 4]));
    }
    if len > 4 && word.ends_with("ier") {
        return Some(format!("{}y", &word[..len - 3]));
    }
    if len >= 6 && word.ends_with("est") {
        return Some(restore_stem(&word[..len - 3]));
    }
    if len >= 5 && word.ends_with("er") {
        let stem: Vec<char> = word[..len - 2].chars().collect();
        let n = stem.len();
        if n >= 3 && stem[n - 1] == stem[n - 2] && !is_vowel(stem[n - 1]) {
            return Some(stem[..n - 1].iter().collect());
        }
    }
    None
}

/// Exception tables first, then suffix detachment per word class.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleLemmatizer;

impl RuleLemmatizer {
    pub fn new() -> Self {
        Self
    }
}

impl Lemmatizer for RuleLemmatizer {
    fn lemmatize(&self, word: &str, pos: CoarsePos) -> String {
        let lower = word.to_lowercase();
        let exceptions: &HashMap<&str, &str> = match pos {
            CoarsePos::Verb => &VERB_EXCEPTIONS,
            CoarsePos::Noun => &NOUN_EXCEPTIONS,
            CoarsePos::Adjective => &ADJECTIVE_EXCEPTIONS,
            CoarsePos::Adverb => &ADVERB_EXCEPTIONS,
        };
        if let Some(lemma) = exceptions.get(lower.as_str()) {
            return lemma.to_string();
        }
        if INVARIANT.contains(lower.as_str()) {
            return word.to_string();
        }
        let base = match pos {
            CoarsePos::Noun => noun_base(&lower),
            CoarsePos::Verb => verb_base(&lower),
            CoarsePos::Adjective => adjective_base(&lower),
            CoarsePos::Adverb => None,
        };
        match base {
            Some(lemma) if !lemma.is_empty() => lemma,
            _ => word.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TREEBANK_TAGS: [&str; 36] = [
        "CC", "CD", "DT", "EX", "FW", "IN", "JJ", "JJR", "JJS", "LS", "MD", "NN", "NNS", "NNP", "NNPS", "PDT", "POS", "PRP",
        "PRP$", "RB", "RBR", "RBS", "RP", "SYM", "TO", "UH", "VB", "VBD", "VBG", "VBN", "VBP", "VBZ", "WDT", "WP", "WP$",
        "WRB",
    ];

    #[test]
    fn maps_every_treebank_tag() {
        let got: String = TREEBANK_TAGS.iter().map(|t| CoarsePos::from_treebank(t).as_char()).collect();
        assert_eq!(got, "nnnnnnaaannnnnnnnnnrrrrnnnvvvvvvnnnn");
    }

    #[test]
    fn unknown_tags_are_nouns() {
        assert_eq!(CoarsePos::from_treebank(""), CoarsePos::Noun);
        assert_eq!(CoarsePos::from_treebank("XYZ"), CoarsePos::Noun);
        assert_eq!(CoarsePos::from_treebank("."), CoarsePos::Noun);
    }

    fn verb(w: &str) -> String {
        RuleLemmatizer.lemmatize(w, CoarsePos::Verb)
    }

    fn noun(w: &str) -> String {
        RuleLemmatizer.lemmatize(w, CoarsePos::Noun)
    }

    #[test]
    fn regular_verbs() {
        assert_eq!(verb("saying"), "say");
        assert_eq!(verb("traveled"), "travel");
        assert_eq!(verb("humbling"), "humble");
        assert_eq!(verb("making"), "make");
        assert_eq!(verb("stopped"), "stop");
        assert_eq!(verb("believes"), "believe");
        assert_eq!(verb("watches"), "watch");
        assert_eq!(verb("tried"), "try");
        assert_eq!(verb("used"), "use");
        assert_eq!(verb("falling"), "fall");
        assert_eq!(verb("added"), "add");
        assert_eq!(verb("agreed"), "agree");
        assert_eq!(verb("needed"), "need");
        assert_eq!(verb("relating"), "relate");
        assert_eq!(verb("causing"), "cause");
        assert_eq!(verb("looking"), "look");
        assert_eq!(verb("bring"), "bring");
    }

    #[test]
    fn irregular_verbs() {
        assert_eq!(verb("am"), "be");
        assert_eq!(verb("made"), "make");
        assert_eq!(verb("came"), "come");
        assert_eq!(verb("dying"), "die");
    }

    #[test]
    fn nouns() {
        assert_eq!(noun("cities"), "city");
        assert_eq!(noun("boxes"), "box");
        assert_eq!(noun("cats"), "cat");
        assert_eq!(noun("children"), "child");
        assert_eq!(noun("firemen"), "fireman");
        assert_eq!(noun("glass"), "glass");
        assert_eq!(noun("virus"), "virus");
        assert_eq!(noun("analysis"), "analysis");
    }

    #[test]
    fn invariant_words_keep_their_form() {
        assert_eq!(noun("thanks"), "thanks");
        assert_eq!(noun("this"), "this");
        assert_eq!(noun("I"), "I");
        assert_eq!(noun("always"), "always");
    }

    #[test]
    fn adjectives_and_adverbs() {
        let adj = |w: &str| RuleLemmatizer.lemmatize(w, CoarsePos::Adjective);
        assert_eq!(adj("happiest"), "happy");
        assert_eq!(adj("bigger"), "big");
        assert_eq!(adj("widest"), "wide");
        assert_eq!(adj("better"), "good");
        assert_eq!(adj("brave"), "brave");
        assert_eq!(adj("clever"), "clever");
        assert_eq!(RuleLemmatizer.lemmatize("better", CoarsePos::Adverb), "well");
        assert_eq!(RuleLemmatizer.lemmatize("quickly", CoarsePos::Adverb), "quickly");
    }

    #[test]
    fn never_returns_empty() {
        assert_eq!(verb("s"), "s");
        assert_eq!(noun("s"), "s");
    }
}
