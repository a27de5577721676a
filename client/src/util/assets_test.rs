use super::*;

#[test]
fn initials_use_first_and_last_words() {
    assert_eq!(initials("Vikram Bhardwaj"), "VB");
    assert_eq!(initials("Sunita Rani Singh"), "SS");
}

#[test]
fn initials_single_word_and_empty() {
    assert_eq!(initials("priya"), "P");
    assert_eq!(initials("   "), "");
}

#[test]
fn fallback_label_only_for_text_variants() {
    assert_eq!(AssetFallback::initials_for("Amit Verma").label(), Some("AV"));
    assert_eq!(AssetFallback::Caption("Modern Villa".into()).label(), Some("Modern Villa"));
    assert_eq!(AssetFallback::Placeholder.label(), None);
    assert_eq!(AssetFallback::Hide.label(), None);
}

#[test]
fn fallback_classes_are_distinct() {
    let classes = [
        AssetFallback::Placeholder.class(),
        AssetFallback::initials_for("A B").class(),
        AssetFallback::Caption(String::new()).class(),
        AssetFallback::Hide.class(),
    ];
    for (i, a) in classes.iter().enumerate() {
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
