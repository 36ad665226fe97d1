use sentindex_core::tokenizer::{RegexTokenizer, Tokenizer};

#[test]
fn it_lowercases_and_splits_on_punctuation() {
    let words = RegexTokenizer.tokenize("Let me begin by saying thanks to all you who have traveled, from far and wide, to brave the cold today.");
    assert_eq!(
        words,
        vec![
            "let", "me", "begin", "by", "saying", "thanks", "to", "all", "you", "who", "have", "traveled", "from", "far", "and",
            "wide", "to", "brave", "the", "cold", "today",
        ]
    );
}

#[test]
fn it_normalizes_unicode() {
    let words = RegexTokenizer.tokenize("The ｆｕｌｌｗｉｄｔｈ café's menu.");
    // Fullwidth letters fold to ASCII under NFKC
    assert!(words.contains(&"fullwidth".to_string()));
    assert!(words.contains(&"café".to_string()));
}

#[test]
fn it_keeps_digits_as_tokens() {
    let words = RegexTokenizer.tokenize("In 1984, 2 cats.");
    assert_eq!(words, vec!["in", "1984", "2", "cats"]);
}
