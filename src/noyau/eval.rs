//! Noyau — évaluation (pipeline réel)
//!
//! texte -> jetons -> RPN -> valeur exacte (BigRational) -> réponse normalisée
//!
//! Aucun mécanisme d’évaluation de code générique : seul le petit langage
//! des exercices (littéraux, + - * / × ÷, parenthèses) est reconnu.

use std::fmt;

use num_rational::BigRational;
use tracing::trace;

use super::erreur::ErreurNoyau;
use super::format::format_reponse;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{evaluer_rpn, to_rpn};

/// Réponse exacte d’un exercice ; `Display` donne la forme normalisée
/// (`2`, `3/4`, `3'1/2`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reponse(pub BigRational);

impl Reponse {
    pub fn valeur(&self) -> &BigRational {
        &self.0
    }
}

impl fmt::Display for Reponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_reponse(&self.0))
    }
}

/// Valeur exacte d’une expression (forme calculable ou affichée).
pub fn evaluer(expr_str: &str) -> Result<BigRational, ErreurNoyau> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err("Entrée vide".into());
    }

    let jetons = tokenize(s)?;
    let rpn = to_rpn(&jetons)?;
    trace!(
        jetons = %format_tokens(&jetons),
        rpn = %format_tokens(&rpn),
        "évaluation"
    );

    evaluer_rpn(&rpn)
}

/// API publique : évalue et renvoie la réponse normalisée.
pub fn calculer(expr_str: &str) -> Result<Reponse, ErreurNoyau> {
    evaluer(expr_str).map(Reponse)
}
