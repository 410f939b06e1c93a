//! Keyword matcher: fixed bilingual vocabulary over the folded title.
//!
//! Walks the compiled lexicon in table order and emits one candidate per
//! occurrence per term. Boundary handling lives in the lexicon itself
//! (ordinary words are `\b`-bounded, compact codes are plain literals).

use crate::lexicon::KEYWORD_PATTERNS;
use crate::offset::SpanConverter;
use annonce_core::Span;

/// Emit candidates for every keyword occurrence in the folded title.
pub(crate) fn candidates(folded: &str, converter: &SpanConverter, out: &mut Vec<Span>) {
    for (regex, label) in KEYWORD_PATTERNS.iter() {
        for m in regex.find_iter(folded) {
            out.push(Span::new(
                converter.byte_to_char(m.start()),
                converter.byte_to_char(m.end()),
                *label,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offset::fold_lowercase;
    use annonce_core::Label;

    fn run(title: &str) -> Vec<Span> {
        let folded = fold_lowercase(title);
        let converter = SpanConverter::new(&folded);
        let mut out = Vec::new();
        candidates(&folded, &converter, &mut out);
        out
    }

    #[test]
    fn uppercase_transaction_term() {
        let spans = run("VENDRE");
        assert_eq!(spans, vec![Span::new(0, 6, Label::Transaction)]);
    }

    #[test]
    fn bilingual_terms_share_a_label() {
        let villa = run("villa");
        let maison = run("maison");
        assert_eq!(villa[0].label, Label::Type);
        assert_eq!(maison[0].label, Label::Type);
    }

    #[test]
    fn bounded_word_does_not_fire_inside_longer_word() {
        // "house" must not match inside "penthouse"; "penthouse" itself is
        // in the lexicon, so exactly one TYPE candidate covers it all.
        let spans = run("penthouse");
        assert_eq!(spans, vec![Span::new(0, 9, Label::Type)]);
    }

    #[test]
    fn compact_codes_match_anywhere() {
        let spans = run("Appartement S+2 disponible");
        assert!(spans.contains(&Span::new(0, 11, Label::Type)));
        assert!(spans.contains(&Span::new(12, 15, Label::Type)));
    }

    #[test]
    fn french_accents_respect_boundaries() {
        let spans = run("entièrement rénové");
        assert_eq!(spans, vec![Span::new(12, 18, Label::Condition)]);
    }

    #[test]
    fn every_occurrence_is_emitted() {
        let spans = run("SALE RENT BUY");
        assert_eq!(
            spans,
            vec![
                Span::new(0, 4, Label::Transaction),
                Span::new(5, 9, Label::Transaction),
                Span::new(10, 13, Label::Transaction),
            ]
        );
    }

    #[test]
    fn no_keywords_means_no_candidates() {
        assert!(run("Dhaka Mirpur Gulshan").is_empty());
        assert!(run("").is_empty());
    }
}
