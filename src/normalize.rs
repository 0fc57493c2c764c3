use crate::linguistics::{Language, LinguisticService};

/// True for non-empty tokens made only of alphabetic characters.
pub fn is_alphabetic_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Lowercases, tokenizes, drops non-alphabetic tokens and stop words, then lemmatizes.
pub fn normalize_text(
    text: &str,
    service: &dyn LinguisticService,
    language: Language,
) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stopwords = service.stopwords_for(language);

    service
        .tokenize(&lowered)
        .into_iter()
        .filter(|token| is_alphabetic_token(token) && !stopwords.contains(token))
        .map(|token| service.lemmatize(&token))
        .collect()
}
