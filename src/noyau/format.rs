// src/noyau/format.rs

use num_rational::BigRational;
use num_traits::{One, Zero};

/* ------------------------ Réponse normalisée ------------------------ */

/// Forme normalisée d’une valeur exacte (réponses + littéraux).
/// - entier : `2` (8/4 -> 2)
/// - numérateur > dénominateur : nombre mixte `3'1/2` (7/2)
/// - sinon : `n/d` réduit (y compris négatif : `-7/2`)
pub fn format_reponse(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();

    if d.is_one() {
        return format!("{n}");
    }

    // comparaison signée : une valeur négative reste en n/d
    if n > d {
        let entier = n / d;
        let reste = n % d;
        if reste.is_zero() {
            return format!("{entier}");
        }
        return format!("{entier}'{reste}/{d}");
    }

    format!("{n}/{d}")
}

/* ------------------------ Glyphes : calculable <-> affichage ------------------------ */

/// Forme calculable -> forme affichée (fichier d’exercices).
/// Les opérateurs sont toujours entourés d’espaces ; un littéral `3/4` n’en a pas,
/// donc il garde sa barre.
pub fn vers_affichage(s: &str) -> String {
    s.replace('*', "×").replace(" / ", " ÷ ")
}

/// Forme affichée -> forme calculable (correction).
pub fn vers_calculable(s: &str) -> String {
    s.replace('×', "*").replace('÷', "/")
}
